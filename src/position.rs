use chrono::{DateTime, TimeZone, Timelike};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::floored_mod;
use crate::refraction::refraction_at_zenith;
use crate::solar;
use crate::time::{julian_century, julian_day_of};
use crate::types::{Observer, Refraction};

/// Below this value of cos(latitude)·sin(zenith) the azimuth is pinned to the meridian.
const AZIMUTH_DENOMINATOR_EPSILON: f64 = 0.001;

/// Solar position in local horizontal coordinates.
///
/// - `zenith`: degrees from the local vertical (0 = overhead, 90 = horizon)
/// - `azimuth`: degrees clockwise from North (0 = N, 90 = E, 180 = S, 270 = W)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarPosition {
    /// Zenith angle in degrees
    pub zenith: f64,
    /// Azimuth angle in degrees, clockwise from North
    pub azimuth: f64,
}

impl SolarPosition {
    /// Elevation above the horizon in degrees.
    pub fn elevation(&self) -> f64 {
        90.0 - self.zenith
    }
}

/// Position of the sun as seen by `observer` at `instant`.
///
/// The instant may be in any timezone; the calculation runs on its UTC value.
/// With [`Refraction::Standard`] the zenith is reduced by the atmospheric refraction.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use solunar::{zenith_and_azimuth, Observer, Refraction};
///
/// let greenwich = Observer::default();
/// let instant = Utc.with_ymd_and_hms(2015, 12, 1, 12, 0, 0).unwrap();
/// let position = zenith_and_azimuth(&greenwich, &instant, Refraction::Standard);
/// assert!((position.azimuth - 182.68).abs() < 0.01);
/// ```
pub fn zenith_and_azimuth<T: TimeZone>(observer: &Observer, instant: &DateTime<T>, refraction: Refraction) -> SolarPosition {
    let latitude = observer.solver_latitude();
    let utc = instant.naive_utc();

    let t = julian_century(julian_day_of(instant));
    let declination = solar::declination(t);
    let eqtime = solar::equation_of_time(t);

    // 1440 minutes of clock time per rotation, 4 minutes per degree of longitude
    let clock_minutes = f64::from(utc.num_seconds_from_midnight()) / 60.0 + f64::from(utc.nanosecond()) / 60e9;
    let true_solar_time = floored_mod(clock_minutes + eqtime + 4.0 * observer.longitude(), 1440.0);

    let mut hour_angle = true_solar_time / 4.0 - 180.0;
    if hour_angle < -180.0 {
        hour_angle += 360.0;
    }

    let ch = hour_angle.to_radians().cos();
    let (sl, cl) = latitude.to_radians().sin_cos();
    let (sd, cd) = declination.to_radians().sin_cos();

    let csz = (cl * cd * ch + sl * sd).clamp(-1.0, 1.0);
    let mut zenith = csz.acos().to_degrees();

    let az_denom = cl * zenith.to_radians().sin();
    let azimuth = if az_denom.abs() > AZIMUTH_DENOMINATOR_EPSILON {
        let az_rad = ((sl * zenith.to_radians().cos() - sd) / az_denom).clamp(-1.0, 1.0);
        let azimuth = 180.0 - az_rad.acos().to_degrees();
        if hour_angle > 0.0 {
            -azimuth
        } else {
            azimuth
        }
    } else if latitude > 0.0 {
        180.0
    } else {
        0.0
    };

    if refraction.enabled() {
        zenith -= refraction_at_zenith(zenith);
    }

    SolarPosition {
        zenith,
        azimuth: floored_mod(azimuth, 360.0),
    }
}

/// Zenith angle of the sun in degrees.
pub fn zenith<T: TimeZone>(observer: &Observer, instant: &DateTime<T>, refraction: Refraction) -> f64 {
    zenith_and_azimuth(observer, instant, refraction).zenith
}

/// Azimuth of the sun in degrees clockwise from North.
pub fn azimuth<T: TimeZone>(observer: &Observer, instant: &DateTime<T>) -> f64 {
    zenith_and_azimuth(observer, instant, Refraction::Standard).azimuth
}

/// Elevation of the sun above the horizon in degrees.
pub fn elevation<T: TimeZone>(observer: &Observer, instant: &DateTime<T>, refraction: Refraction) -> f64 {
    zenith_and_azimuth(observer, instant, refraction).elevation()
}
