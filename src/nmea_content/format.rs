//! # Field Formatting
//!
//! Pure functions mapping one value to its NMEA 0183 text. Each function fixes the precision,
//! width, sign and padding of its field kind; none of them validates ranges, so an
//! out-of-range value still yields a syntactically valid field.

/// Formats a UTC time of day as `hhmmss.sss`.
///
/// Sub-millisecond precision is truncated.
///
/// ```rust
/// use nmea0183_composer::nmea_content::format;
///
/// let time = time::Time::from_hms_micro(16, 6, 18, 250_999).unwrap();
/// assert_eq!(format::time_of_day(time), "160618.250");
/// ```
pub fn time_of_day(time: time::Time) -> String {
    format!(
        "{:02}{:02}{:02}.{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        time.millisecond()
    )
}

/// Formats a UTC date as `ddmmyy`.
pub fn date(date: time::Date) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.day(),
        u8::from(date.month()),
        date.year().rem_euclid(100)
    )
}

/// Formats a latitude in degrees as `ddmm.mmmmmmm` and its hemisphere letter.
///
/// Values beyond ±90 are not rejected; the degrees simply grow past two digits.
///
/// ```rust
/// use nmea0183_composer::nmea_content::format;
///
/// assert_eq!(format::latitude(-12.042189972), ("1202.5313983".to_string(), 'S'));
/// ```
pub fn latitude(latitude: f64) -> (String, char) {
    let hemisphere = if latitude < 0.0 { 'S' } else { 'N' };
    (degrees_minutes(latitude.abs(), 2), hemisphere)
}

/// Formats a longitude in degrees as `dddmm.mmmmmmm` and its hemisphere letter.
pub fn longitude(longitude: f64) -> (String, char) {
    let hemisphere = if longitude < 0.0 { 'W' } else { 'E' };
    (degrees_minutes(longitude.abs(), 3), hemisphere)
}

// Minutes that round up to 60 carry into the degrees. Degrees are never clamped, so
// out-of-range input widens the field. NaN and infinities yield non-numeric fields.
fn degrees_minutes(value: f64, degree_width: usize) -> String {
    let mut degrees = value.trunc();
    let mut minutes = format!("{:010.7}", value.fract() * 60.0);

    if minutes.starts_with("60") {
        degrees += 1.0;
        minutes = format!("{:010.7}", 0.0);
    }

    format!("{degrees:0degree_width$.0}{minutes}")
}

/// Formats a magnetic variation as its magnitude with one decimal and its direction letter.
pub fn magnetic_variation(variation: f64) -> (String, char) {
    let direction = if variation < 0.0 { 'W' } else { 'E' };
    (format!("{:.1}", variation.abs()), direction)
}

/// Formats a speed, course or distance with two decimals, e.g. `166.87`.
pub fn decimal(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats a value with one decimal, e.g. `5.2`.
pub fn tenths(value: f64) -> String {
    format!("{value:.1}")
}

/// Formats a wind angle or direction as `ddd.d`, e.g. `045.0`.
pub fn angle(value: f64) -> String {
    format!("{value:05.1}")
}

/// Formats a heading as `ddd.dd`, e.g. `057.34`.
pub fn heading(value: f64) -> String {
    format!("{value:06.2}")
}

/// Formats a pitch or roll angle as an always signed `±dd.dd`, e.g. `-02.25`.
pub fn signed_angle(value: f64) -> String {
    format!("{value:+06.2}")
}

/// Formats a transducer measurement according to its unit of measurement.
///
/// | Unit | Format |
/// |------|--------|
/// | `C` (degrees Celsius) | always signed, one decimal, width 6: `+016.4` |
/// | `B` (bars) | four decimals: `1.0079` |
/// | `P` (percent) | one decimal, width 5: `098.9` |
/// | anything else | one decimal: `12.5` |
///
/// ```rust
/// use nmea0183_composer::nmea_content::format;
///
/// assert_eq!(format::transducer_value(16.4, 'C'), "+016.4");
/// assert_eq!(format::transducer_value(98.9, 'P'), "098.9");
/// ```
pub fn transducer_value(value: f64, units: char) -> String {
    match units {
        'C' => format!("{value:+06.1}"),
        'B' => format!("{value:.4}"),
        'P' => format!("{value:05.1}"),
        _ => format!("{value:.1}"),
    }
}
