use nmea0183_composer::{
    ChecksumCase, Composer, LineEndingMode, Validity,
    nmea_content::{
        AngleReference, HdtField, NmeaSentence, SpeedUnits, Status, TalkerId,
        TransducerMeasurement, XDR, compose_hdt, compose_mwv, compose_prdid, compose_rmc,
    },
};
use tracing_subscriber::EnvFilter;

fn print(sentence: &str) {
    print!("{sentence}");
    if !sentence.ends_with("\r\n") {
        println!();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=nmea0183_composer=trace shows every field as it is written
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let gps = TalkerId::new("GP")?;

    print(&compose_rmc(
        gps,
        &Validity::ALL_VALID,
        time::Time::from_hms_milli(16, 6, 18, 500)?,
        -12.042189972,
        -77.14246383,
        0.1,
        166.87,
        time::Date::from_calendar_date(2016, time::Month::April, 20)?,
        -1.4,
    ));

    let gyro_lost = Validity::ALL_VALID.with_invalid(HdtField::HeadingTrue);
    print(&compose_hdt(TalkerId::GYRO, &gyro_lost, 57.34));

    print(&compose_mwv(
        TalkerId::WEATHER,
        &Validity::ALL_VALID,
        192.0,
        AngleReference::Relative,
        3.9,
        SpeedUnits::Knots,
        Status::Valid,
    ));

    print(&compose_prdid(&Validity::ALL_VALID, 1.5, -2.25, 90.0));

    let composer = Composer::new(ChecksumCase::Lower, LineEndingMode::Required);
    let weather = NmeaSentence::from(XDR::new([
        TransducerMeasurement {
            transducer_type: 'C',
            value: 16.4,
            units: 'C',
            name: "TEMP".to_string(),
        },
        TransducerMeasurement {
            transducer_type: 'P',
            value: 1.0079,
            units: 'B',
            name: "PRESS".to_string(),
        },
    ]));
    print(&weather.compose_with(&composer, TalkerId::WEATHER));

    match TalkerId::new("GPS") {
        Ok(talker) => println!("Unexpectedly accepted talker {talker}"),
        Err(e) => println!("Rejected talker: {e}"),
    }

    Ok(())
}
