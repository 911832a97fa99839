use crate::{
    ChecksumCase, Composer, Error, LineEndingMode, MAX_SENTENCE_LENGTH, TalkerSentence, Validity,
    nmea_content::{
        AngleReference, FaaMode, HDT, MWV, NmeaSentence, PRDID, RMC, RmcField, SpeedUnits,
        Status, TalkerId, TransducerMeasurement, XDR, compose_rmc,
    },
};

fn navigation_fix() -> RMC {
    RMC {
        fix_time: Some(time::Time::from_hms(16, 6, 18).unwrap()),
        status: Status::Valid,
        latitude: Some(-12.042189972),
        longitude: Some(-77.14246383),
        speed_over_ground: Some(0.1),
        course_over_ground: Some(166.87),
        fix_date: Some(time::Date::from_calendar_date(2016, time::Month::April, 20).unwrap()),
        magnetic_variation: Some(-1.4),
        faa_mode: FaaMode::Autonomous,
    }
}

#[test]
fn test_typed_and_masked_compose_agree() {
    let validity = Validity::ALL_VALID
        .with_invalid(RmcField::Latitude)
        .with_invalid(RmcField::FixDate);

    let masked = compose_rmc(
        TalkerId::GPS,
        &validity,
        time::Time::from_hms(16, 6, 18).unwrap(),
        -12.042189972,
        -77.14246383,
        0.1,
        166.87,
        time::Date::from_calendar_date(2016, time::Month::April, 20).unwrap(),
        -1.4,
    );

    let typed = RMC {
        latitude: None,
        fix_date: None,
        ..navigation_fix()
    };

    assert_eq!(masked, Composer::default().compose(TalkerId::GPS, &typed));
    assert!(
        masked.starts_with("$GPRMC,160618.000,A,,,07708.5478298,W,0.10,166.87,,1.4,W,A*"),
        "{masked}"
    );
}

#[test]
fn test_telemetry_cycle() {
    let composer = Composer::new(ChecksumCase::Upper, LineEndingMode::Required);

    let cycle: Vec<(TalkerId, NmeaSentence)> = vec![
        (TalkerId::GPS, navigation_fix().into()),
        (
            TalkerId::GYRO,
            HDT {
                heading_true: Some(57.34),
            }
            .into(),
        ),
        (
            TalkerId::WEATHER,
            MWV {
                wind_angle: Some(192.0),
                reference: Some(AngleReference::Relative),
                wind_speed: Some(3.9),
                speed_units: Some(SpeedUnits::Knots),
                status: Some(Status::Valid),
            }
            .into(),
        ),
        (
            TalkerId::WEATHER,
            XDR::new([TransducerMeasurement {
                transducer_type: 'C',
                value: 16.4,
                units: 'C',
                name: "TEMP".to_string(),
            }])
            .into(),
        ),
        (
            TalkerId::GYRO,
            PRDID {
                pitch: Some(1.5),
                roll: Some(-2.25),
                heading: Some(90.0),
            }
            .into(),
        ),
    ];

    let stream: String = cycle
        .iter()
        .map(|(talker, sentence)| sentence.compose_with(&composer, *talker))
        .collect();

    let lines: Vec<&str> = stream.split_terminator("\r\n").collect();
    assert_eq!(
        lines,
        [
            "$GPRMC,160618.000,A,1202.5313983,S,07708.5478298,W,0.10,166.87,200416,1.4,W,A*19",
            "$HEHDT,057.34,T*1A",
            "$WIMWV,192.0,R,003.9,N,A*23",
            "$WIXDR,C,+016.4,C,TEMP*5A",
            "$PRDID,+01.50,-02.25,090.00*77",
        ]
    );

    for line in lines {
        assert!(line.len() + 2 <= MAX_SENTENCE_LENGTH, "{line}");
    }
}

#[test]
fn test_talker_id_is_checked_once() {
    assert_eq!(
        TalkerId::new("GPS"),
        Err(Error::InvalidTalkerId("GPS".to_string()))
    );
    assert_eq!(TalkerId::new(""), Err(Error::InvalidTalkerId(String::new())));
    assert_eq!(
        TalkerId::new("G,"),
        Err(Error::InvalidTalkerId("G,".to_string()))
    );

    let talker: TalkerId = "YX".parse().unwrap();
    let sentence = HDT { heading_true: None }.compose(talker);
    assert_eq!(sentence, "$YXHDT,,T*0D");
}

#[cfg(feature = "heapless")]
#[test]
fn test_fixed_capacity_cycle() {
    let composer = Composer::new(ChecksumCase::Upper, LineEndingMode::Required);

    let sentence = composer
        .compose_heapless::<MAX_SENTENCE_LENGTH, _>(TalkerId::GPS, &navigation_fix())
        .unwrap();
    assert!(sentence.ends_with("*19\r\n"));

    let result = composer.compose_heapless::<16, _>(TalkerId::GPS, &navigation_fix());
    assert_eq!(result, Err(Error::CapacityExceeded { capacity: 16 }));
}
