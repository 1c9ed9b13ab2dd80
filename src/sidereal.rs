#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::floored_mod;
use crate::math::polynomial;
use crate::time::J2000;

/// GMST at J2000.0 in degrees
const GREENWICH_MEAN_SIDEREAL_TIME_BASE: f64 = 280.46061837;

/// Degrees of sidereal rotation per solar day
const SIDEREAL_TIME_RATE: f64 = 360.98564736629;

/// Greenwich mean sidereal time in degrees [0, 360).
///
/// # Arguments
///
/// * `julian_day` - Julian Day (UT)
pub fn greenwich_mean_sidereal_time(julian_day: f64) -> f64 {
    let days = julian_day - J2000;
    let centuries = days / 36_525.0;
    let value = GREENWICH_MEAN_SIDEREAL_TIME_BASE
        + SIDEREAL_TIME_RATE * days
        + polynomial(&[0.0, 0.0, 0.000387933, 1.0 / 38_710_000.0], centuries);
    floored_mod(value, 360.0)
}

/// Local mean sidereal time in degrees.
///
/// The longitude (East positive) is added to GMST without reducing the sum, so the
/// result lies in [-180, 540).
pub fn local_mean_sidereal_time(julian_day: f64, longitude: f64) -> f64 {
    greenwich_mean_sidereal_time(julian_day) + longitude
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::time::julian_day_of;
    use chrono::{TimeZone, Utc};

    #[test]
    fn gmst_matches_meeus_example_12a() {
        // 1987-04-10 00:00 UT is 13h10m46.3668s
        let instant = Utc.with_ymd_and_hms(1987, 4, 10, 0, 0, 0).unwrap();
        let gmst = greenwich_mean_sidereal_time(julian_day_of(&instant));
        let expected = (13.0 + 10.0 / 60.0 + 46.366_821 / 3600.0) * 15.0;
        assert!((gmst - expected).abs() < 1e-6, "{gmst} != {expected}");
    }

    #[test]
    fn lmst_is_not_rewrapped() {
        let instant = Utc.with_ymd_and_hms(1987, 4, 10, 0, 0, 0).unwrap();
        let jd = julian_day_of(&instant);
        assert!((local_mean_sidereal_time(jd, -0.13) - (197.693_195_090_862 - 0.13)).abs() < 1e-6);
        assert!(local_mean_sidereal_time(jd, 179.0) > 360.0);
    }
}
