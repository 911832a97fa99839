use nom::{
    IResult, Parser,
    bytes::complete::{tag, take, take_until, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, map_res, opt},
};

use crate::{
    Validity, checksum,
    nmea_content::{
        AngleReference, RmcField, SpeedUnits, Status, TalkerId, TransducerMeasurement, compose_hdt,
        compose_mwd, compose_mwv, compose_prdid, compose_rmc, compose_vhw, compose_vlw,
        compose_xdr,
    },
};

/// Splits a composed sentence into its content and its transmitted checksum.
fn frame(input: &str) -> IResult<&str, (&str, u8)> {
    let (input, _) = char('$').parse(input)?;
    let (input, content) = take_until("*").parse(input)?;
    let (input, _) = char('*').parse(input)?;
    let (input, checksum) =
        map_res(take(2usize), |hex: &str| u8::from_str_radix(hex, 16)).parse(input)?;
    let (input, _) = opt(tag("\r\n")).parse(input)?;

    Ok((input, (content, checksum)))
}

/// Asserts the sentence is well framed and returns its fields.
fn split_fields(sentence: &str) -> Vec<&str> {
    let (_, (content, transmitted)) = all_consuming(frame)
        .parse(sentence)
        .unwrap_or_else(|e| panic!("{sentence:?} is not a sentence: {e}"));

    assert_eq!(transmitted, checksum(content), "{sentence}");
    assert!(!content.contains('$'), "{sentence}");
    content.split(',').collect()
}

/// Returns `true` if the field is exactly `integer` digits, a dot and `fraction` digits.
fn is_fixed_point(field: &str, integer: usize, fraction: usize) -> bool {
    let digits = |count: usize| take_while_m_n(count, count, |c: char| c.is_ascii_digit());
    let result: IResult<&str, _> =
        all_consuming((digits(integer), char('.'), digits(fraction))).parse(field);
    result.is_ok()
}

fn is_digits(field: &str, count: usize) -> bool {
    let result: IResult<&str, &str> =
        all_consuming(take_while_m_n(count, count, |c: char| c.is_ascii_digit())).parse(field);
    result.is_ok()
}

fn masks(slots: u32) -> impl Iterator<Item = Validity> {
    (0..1u16 << slots).map(Validity::from_bits)
}

fn measurements(count: usize) -> Vec<TransducerMeasurement> {
    (0..count)
        .map(|index| TransducerMeasurement {
            transducer_type: 'C',
            value: index as f64 - 1.25,
            units: 'C',
            name: format!("T{index}"),
        })
        .collect()
}

#[test]
fn test_rmc_shape_under_every_mask() {
    let time = time::Time::from_hms_milli(23, 59, 59, 999).unwrap();
    let date = time::Date::from_calendar_date(2024, time::Month::February, 29).unwrap();

    for validity in masks(7) {
        let sentence = compose_rmc(
            TalkerId::GPS,
            &validity,
            time,
            51.4778,
            -0.0015,
            12.3,
            270.0,
            date,
            2.1,
        );
        let fields = split_fields(&sentence);
        assert_eq!(fields.len(), 13, "{sentence}");
        assert_eq!(fields[0], "GPRMC");
        assert_eq!(fields[2], "A");
        assert_eq!(fields[12], "A");

        if validity.is_valid(RmcField::FixTime) {
            assert!(is_fixed_point(fields[1], 6, 3), "time: {sentence}");
        }
        if validity.is_valid(RmcField::Latitude) {
            assert!(is_fixed_point(fields[3], 4, 7), "latitude: {sentence}");
            assert_eq!(fields[4], "N");
        }
        if validity.is_valid(RmcField::Longitude) {
            assert!(is_fixed_point(fields[5], 5, 7), "longitude: {sentence}");
            assert_eq!(fields[6], "W");
        }
        if validity.is_valid(RmcField::SpeedOverGround) {
            assert!(is_fixed_point(fields[7], 2, 2), "speed: {sentence}");
        }
        if validity.is_valid(RmcField::FixDate) {
            assert!(is_digits(fields[9], 6), "date: {sentence}");
        }
    }
}

#[test]
fn test_fixed_shapes_under_every_mask() {
    for validity in masks(5) {
        let sentence = compose_mwv(
            TalkerId::WEATHER,
            &validity,
            45.0,
            AngleReference::Relative,
            12.5,
            SpeedUnits::Knots,
            Status::Valid,
        );
        assert_eq!(split_fields(&sentence).len(), 6, "{sentence}");
    }

    for validity in masks(4) {
        let sentence = compose_mwd(TalkerId::WEATHER, &validity, 4.2, 6.1, 7.2, 3.7);
        let fields = split_fields(&sentence);
        assert_eq!(fields.len(), 9, "{sentence}");
        assert_eq!([fields[2], fields[4], fields[6], fields[8]], ["T", "M", "N", "M"]);

        let sentence = compose_vhw(TalkerId::SPEED_LOG, &validity, 45.0, 40.5, 5.2, 9.6);
        let fields = split_fields(&sentence);
        assert_eq!(fields.len(), 9, "{sentence}");
        assert_eq!([fields[2], fields[4], fields[6], fields[8]], ["T", "M", "N", "K"]);
    }

    for validity in masks(3) {
        let sentence = compose_prdid(&validity, -1.5, 2.25, 359.99);
        let fields = split_fields(&sentence);
        assert_eq!(fields.len(), 4, "{sentence}");
        assert_eq!(fields[0], "PRDID");
    }

    for validity in masks(2) {
        let sentence = compose_vlw(
            TalkerId::INTEGRATED_INSTRUMENTATION,
            &validity,
            100.0,
            0.5,
        );
        let fields = split_fields(&sentence);
        assert_eq!(fields.len(), 5, "{sentence}");
        assert_eq!([fields[2], fields[4]], ["N", "N"]);
    }

    for validity in masks(1) {
        let sentence = compose_hdt(TalkerId::GYRO, &validity, 180.0);
        let fields = split_fields(&sentence);
        assert_eq!(fields.len(), 3, "{sentence}");
        assert_eq!(fields[2], "T");
    }
}

#[test]
fn test_xdr_shape() {
    for count in 0..=6 {
        let measurements = measurements(count);
        for validity in [
            Validity::ALL_VALID,
            Validity::ALL_INVALID,
            Validity::from_bits(0xA5A5),
        ] {
            let sentence = compose_xdr(TalkerId::WEATHER, &validity, &measurements);
            assert_eq!(split_fields(&sentence).len(), 1 + 4 * count, "{sentence}");
        }
    }
}

#[test]
fn test_invalid_slots_are_empty() {
    for validity in masks(4) {
        let sentence = compose_mwd(TalkerId::WEATHER, &validity, 4.2, 6.1, 7.2, 3.7);
        let fields = split_fields(&sentence);

        for slot in 0..4usize {
            assert_eq!(
                fields[1 + 2 * slot].is_empty(),
                validity.is_invalid(slot),
                "slot {slot}: {sentence}"
            );
        }
    }
}
