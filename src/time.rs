use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use julian_day_converter::julian_day_to_unix_millis;

use crate::types::CalculationError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UTC).
pub const J2000: f64 = 2_451_545.0;

/// Days in a Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Offset between Julian Day and Modified Julian Day.
const MJD_OFFSET: f64 = 2_400_000.5;

/// First Julian Day number of the Gregorian calendar (1582-10-15).
const GREGORIAN_CUTOVER_JD: i64 = 2_299_161;

/// Calendar in which year/month/day components are interpreted.
///
/// `Gregorian` is the proleptic Gregorian calendar used by chrono. `Julian` drops the
/// century correction and must be used for historical dates recorded before the reform,
/// otherwise the result is off by up to several days.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Calendar {
    #[default]
    Gregorian,
    Julian,
}

impl Calendar {
    /// The calendar in civil use on the given date: Julian before 1582-10-15, Gregorian after.
    pub fn for_date(year: i32, month: u32, day: u32) -> Self {
        if (year, month, day) < (1582, 10, 15) {
            Calendar::Julian
        } else {
            Calendar::Gregorian
        }
    }
}

/// Julian Day for calendar components, with any time of day already folded into `day`.
///
/// # Arguments
///
/// * `year` - Astronomical year (1 BC is year 0)
/// * `month` - 1 to 12
/// * `day` - Day of month, including the fraction of the day elapsed
/// * `calendar` - Calendar the components are expressed in
pub fn julian_day_from_parts(year: i32, month: u32, day: f64, calendar: Calendar) -> f64 {
    let (mut year, mut month) = (f64::from(year), f64::from(month));
    // January and February count as months 13 and 14 of the previous year
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let b = match calendar {
        Calendar::Gregorian => {
            let a = (year / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        }
        Calendar::Julian => 0.0,
    };

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + b - 1524.5
}

/// Julian Day at the start (00:00 UTC) of `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use solunar::time::{julian_day, Calendar};
///
/// let date = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
/// assert_eq!(julian_day(date, Calendar::Gregorian), 2_455_927.5);
/// ```
pub fn julian_day(date: NaiveDate, calendar: Calendar) -> f64 {
    julian_day_from_parts(date.year(), date.month(), f64::from(date.day()), calendar)
}

/// Julian Day of an instant in any timezone.
///
/// The instant is converted to UTC first, and the Gregorian calendar is used.
pub fn julian_day_of<T: TimeZone>(instant: &DateTime<T>) -> f64 {
    let utc = instant.naive_utc();
    let seconds = f64::from(utc.num_seconds_from_midnight()) + f64::from(utc.nanosecond()) / 1_000_000_000.0;
    julian_day_from_parts(
        utc.year(),
        utc.month(),
        f64::from(utc.day()) + seconds / 86_400.0,
        Calendar::Gregorian,
    )
}

/// Calendar components for a Julian Day: `(year, month, day)` where `day` carries the
/// fraction of the day elapsed.
///
/// This is the inverse of [`julian_day_from_parts`] for the same `calendar`.
pub fn julian_day_to_calendar(julian_day: f64, calendar: Calendar) -> (i32, u32, f64) {
    let jd = julian_day + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = match calendar {
        Calendar::Julian => z,
        Calendar::Gregorian => {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        }
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Calendar a Julian Day falls in, switching at the Gregorian reform.
pub fn calendar_of_julian_day(julian_day: f64) -> Calendar {
    if ((julian_day + 0.5).floor() as i64) < GREGORIAN_CUTOVER_JD {
        Calendar::Julian
    } else {
        Calendar::Gregorian
    }
}

/// Converts a Julian Day to a UTC instant (millisecond resolution).
pub fn julian_day_to_datetime(julian_day: f64) -> Result<DateTime<Utc>, CalculationError> {
    let millis = julian_day_to_unix_millis(julian_day);
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(CalculationError::TimeConversionError)
}

/// Julian century (T) from the given Julian Day (JD),
/// measured in Julian centuries since the J2000.0 epoch.
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000) / DAYS_PER_CENTURY
}

/// Inverse of [`julian_century`].
pub fn julian_century_to_julian_day(julian_century: f64) -> f64 {
    julian_century * DAYS_PER_CENTURY + J2000
}

/// Days since the J2000.0 epoch.
pub fn julian_day_2000(julian_day: f64) -> f64 {
    julian_day - J2000
}

pub fn modified_julian_day(julian_day: f64) -> f64 {
    julian_day - MJD_OFFSET
}

/// The current instant, the only environmental input of the crate.
#[cfg(feature = "std")]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Today's date in UTC.
#[cfg(feature = "std")]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    extern crate std;

    use super::*;
    use julian_day_converter::unix_millis_to_julian_day;

    #[test]
    fn julian_day_matches_reference_dates() {
        let cases = [
            ((2012, 1, 1), 2_455_927.5),
            ((2013, 1, 1), 2_456_293.5),
            ((2013, 6, 1), 2_456_444.5),
            ((1867, 2, 1), 2_402_998.5),
            ((3200, 11, 14), 2_890_153.5),
        ];
        for ((y, m, d), expected) in cases {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(julian_day(date, Calendar::Gregorian), expected, "{date}");
        }
    }

    #[test]
    fn julian_calendar_drops_the_century_correction() {
        // 1582-10-04 (Julian) was followed by 1582-10-15 (Gregorian)
        let last_julian = julian_day_from_parts(1582, 10, 4.0, Calendar::Julian);
        let first_gregorian = julian_day_from_parts(1582, 10, 15.0, Calendar::Gregorian);
        assert_eq!(first_gregorian - last_julian, 1.0);

        // Meeus, Astronomical Algorithms, example 7.b
        assert_eq!(julian_day_from_parts(333, 1, 27.5, Calendar::Julian), 1_842_713.0);
        assert_eq!(julian_day_from_parts(-1000, 7, 12.5, Calendar::Julian), 1_356_001.0);
    }

    #[test]
    fn instant_julian_day_agrees_with_unix_millis_conversion() {
        let instant = Utc.with_ymd_and_hms(2015, 12, 1, 7, 42, 58).unwrap();
        let expected = unix_millis_to_julian_day(instant.timestamp_millis());
        assert!((julian_day_of(&instant) - expected).abs() < 1e-8);
    }

    #[test]
    fn julian_day_to_datetime_recovers_the_instant() {
        let jd = julian_day_from_parts(2016, 2, 18.25, Calendar::Gregorian);
        let instant = julian_day_to_datetime(jd).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2016, 2, 18, 6, 0, 0).unwrap());
    }

    #[test]
    fn century_matches_reference_values() {
        assert!((julian_century(2_455_927.5) - 0.119_986_311).abs() < 1e-9);
        assert!((julian_century(2_402_998.5) - -1.329_130_732).abs() < 1e-9);
        assert_eq!(julian_century(J2000), 0.0);
    }

    #[test]
    fn calendar_selection_follows_the_reform() {
        assert_eq!(Calendar::for_date(1582, 10, 4), Calendar::Julian);
        assert_eq!(Calendar::for_date(1582, 10, 15), Calendar::Gregorian);
        assert_eq!(calendar_of_julian_day(2_299_160.5), Calendar::Gregorian);
        assert_eq!(calendar_of_julian_day(2_299_159.5), Calendar::Julian);
    }

    #[test]
    fn modified_julian_day_epoch() {
        let jd = julian_day(NaiveDate::from_ymd_opt(1858, 11, 17).unwrap(), Calendar::Gregorian);
        assert_eq!(modified_julian_day(jd), 0.0);
    }
}
