#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Composable, Fields, TalkerSentence, Validity,
    nmea_content::{FaaMode, Status, TalkerId, format},
    validity::mask_slots,
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1          2 3            4 5             6 7    8      9      10  1112
///         |          | |            | |             | |    |      |      |   | |
///  $--RMC,hhmmss.sss,A,ddmm.mmmmmmm,a,dddmm.mmmmmmm,a,x.xx,xxx.xx,ddmmyy,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Status Mode Indicator
    pub status: Status,
    /// Latitude in degrees, negative south of the equator
    pub latitude: Option<f64>,
    /// Longitude in degrees, negative west of Greenwich
    pub longitude: Option<f64>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f64>,
    /// Course over ground in degrees true
    pub course_over_ground: Option<f64>,
    /// Fix date in UTC
    pub fix_date: Option<time::Date>,
    /// Magnetic variation in degrees, negative west
    pub magnetic_variation: Option<f64>,
    /// FAA Mode Indicator
    pub faa_mode: FaaMode,
}

mask_slots! {
    /// Validity mask slots of an [`RMC`] sentence
    pub enum RmcField {
        /// Slot 0 - fix time
        FixTime,
        /// Slot 1 - latitude and its hemisphere
        Latitude,
        /// Slot 2 - longitude and its hemisphere
        Longitude,
        /// Slot 3 - speed over ground
        SpeedOverGround,
        /// Slot 4 - course over ground
        CourseOverGround,
        /// Slot 5 - fix date
        FixDate,
        /// Slot 6 - magnetic variation and its direction
        MagneticVariation,
    }
}

impl RMC {
    /// Clears every field whose slot is flagged invalid.
    ///
    /// Status and mode indicator have no slot and are kept.
    pub fn with_validity(self, validity: &Validity) -> Self {
        Self {
            fix_time: validity.gate(RmcField::FixTime, self.fix_time),
            latitude: validity.gate(RmcField::Latitude, self.latitude),
            longitude: validity.gate(RmcField::Longitude, self.longitude),
            speed_over_ground: validity.gate(RmcField::SpeedOverGround, self.speed_over_ground),
            course_over_ground: validity.gate(RmcField::CourseOverGround, self.course_over_ground),
            fix_date: validity.gate(RmcField::FixDate, self.fix_date),
            magnetic_variation: validity
                .gate(RmcField::MagneticVariation, self.magnetic_variation),
            ..self
        }
    }
}

impl Composable for RMC {
    fn compose_fields(&self, fields: &mut Fields) {
        fields.push_opt(self.fix_time, format::time_of_day);
        fields.push_char(self.status.as_char());
        fields.push_pair(self.latitude.map(format::latitude));
        fields.push_pair(self.longitude.map(format::longitude));
        fields.push_opt(self.speed_over_ground, format::decimal);
        fields.push_opt(self.course_over_ground, format::decimal);
        fields.push_opt(self.fix_date, format::date);
        fields.push_pair(self.magnetic_variation.map(format::magnetic_variation));
        fields.push_char(self.faa_mode.as_char());
    }
}

impl TalkerSentence for RMC {
    const SENTENCE_TYPE: &'static str = "RMC";
}

/// Composes an RMC sentence from a positional validity mask (see [`RmcField`]).
///
/// Status and mode indicator are always `A`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_composer::{Validity, nmea_content::{TalkerId, compose_rmc}};
///
/// let sentence = compose_rmc(
///     TalkerId::GPS,
///     &Validity::ALL_VALID,
///     time::Time::from_hms(16, 6, 18).unwrap(),
///     -12.042189972,
///     -77.14246383,
///     0.1,
///     166.87,
///     time::Date::from_calendar_date(2016, time::Month::April, 20).unwrap(),
///     -1.4,
/// );
///
/// assert_eq!(
///     sentence,
///     "$GPRMC,160618.000,A,1202.5313983,S,07708.5478298,W,0.10,166.87,200416,1.4,W,A*19"
/// );
/// ```
#[allow(clippy::too_many_arguments)]
pub fn compose_rmc(
    talker: TalkerId,
    validity: &Validity,
    fix_time: time::Time,
    latitude: f64,
    longitude: f64,
    speed_knots: f64,
    course_true: f64,
    fix_date: time::Date,
    magnetic_variation: f64,
) -> String {
    RMC {
        fix_time: Some(fix_time),
        status: Status::Valid,
        latitude: Some(latitude),
        longitude: Some(longitude),
        speed_over_ground: Some(speed_knots),
        course_over_ground: Some(course_true),
        fix_date: Some(fix_date),
        magnetic_variation: Some(magnetic_variation),
        faa_mode: FaaMode::Autonomous,
    }
    .with_validity(validity)
    .compose(talker)
}
