//! Position of the moon from truncated periodic series.
//!
//! Based on the low-precision formulae of van Flandern & Pulkkinen (1979). The fundamental
//! arguments are in revolutions and the series in [`crate::tables`] are summed per call.

use core::f64::consts::TAU;

use chrono::{DateTime, TimeZone};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::floored_mod;
use crate::sidereal::local_mean_sidereal_time;
use crate::tables::{Argument, SeriesTerm, Trig, ARGUMENT_COUNT, U_TERMS, V_TERMS, W_TERMS};
use crate::time::{julian_day_2000, julian_day_of};
use crate::types::Observer;

/// Mean distance factor converting √u to Earth radii
const DISTANCE_SCALE: f64 = 60.40974;

/// Right ascension, declination and distance of the moon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LunarPosition {
    /// Radians
    pub right_ascension: f64,
    /// Radians
    pub declination: f64,
    /// Earth radii
    pub distance: f64,
}

/// Fractional part of `a + b·d`, truncated toward zero.
fn revolutions(a: f64, b: f64, jd2000: f64) -> f64 {
    (a + b * jd2000).fract()
}

/// Mean longitude of the moon in revolutions.
pub fn moon_mean_longitude(jd2000: f64) -> f64 {
    revolutions(0.606434, 0.03660110129, jd2000)
}

/// Mean anomaly of the moon in revolutions.
pub fn moon_mean_anomaly(jd2000: f64) -> f64 {
    revolutions(0.374897, 0.03629164709, jd2000)
}

/// Argument of latitude of the moon in revolutions.
pub fn moon_argument_of_latitude(jd2000: f64) -> f64 {
    revolutions(0.259091, 0.03674819520, jd2000)
}

/// Mean elongation of the moon from the sun in revolutions.
pub fn moon_mean_elongation(jd2000: f64) -> f64 {
    revolutions(0.827362, 0.03386319198, jd2000)
}

/// Longitude of the moon's ascending node in revolutions.
pub fn lunar_ascending_node(jd2000: f64) -> f64 {
    moon_mean_longitude(jd2000) - moon_argument_of_latitude(jd2000)
}

/// Mean longitude of the sun in revolutions.
pub fn sun_mean_longitude(jd2000: f64) -> f64 {
    revolutions(0.779072, 0.00273790931, jd2000)
}

/// Mean anomaly of the sun in revolutions.
pub fn sun_mean_anomaly(jd2000: f64) -> f64 {
    revolutions(0.993126, 0.00273777850, jd2000)
}

/// Mean longitude of Venus in revolutions.
pub fn venus_mean_longitude(jd2000: f64) -> f64 {
    revolutions(0.505498, 0.00445046867, jd2000)
}

fn fundamental_arguments(jd2000: f64) -> [f64; ARGUMENT_COUNT] {
    let mut args = [0.0; ARGUMENT_COUNT];
    args[Argument::Gm as usize] = moon_mean_anomaly(jd2000);
    args[Argument::Fm as usize] = moon_argument_of_latitude(jd2000);
    args[Argument::D as usize] = moon_mean_elongation(jd2000);
    args[Argument::Om as usize] = lunar_ascending_node(jd2000);
    args[Argument::Ls as usize] = sun_mean_longitude(jd2000);
    args[Argument::Gs as usize] = sun_mean_anomaly(jd2000);
    args[Argument::L2 as usize] = venus_mean_longitude(jd2000);
    args
}

fn sum_series(terms: &[SeriesTerm], args: &[f64; ARGUMENT_COUNT], century_factor: f64) -> f64 {
    terms
        .iter()
        .map(|term| {
            let angle: f64 = term
                .multipliers
                .iter()
                .zip(args)
                .map(|(&multiplier, &arg)| f64::from(multiplier) * arg)
                .sum();
            let angle = angle * TAU;
            let value = match term.trig {
                Trig::Sin => angle.sin(),
                Trig::Cos => angle.cos(),
            };
            let scale = if term.scaled { century_factor } else { 1.0 };
            term.coefficient * scale * value
        })
        .sum()
}

/// Geocentric position of the moon.
///
/// # Arguments
///
/// * `jd2000` - Days since J2000.0 (see [`crate::time::julian_day_2000`])
pub fn moon_position(jd2000: f64) -> LunarPosition {
    let args = fundamental_arguments(jd2000);
    let t = jd2000 / 36_525.0 + 1.0;

    let v = sum_series(&V_TERMS, &args, t);
    let u = sum_series(&U_TERMS, &args, t);
    let w = sum_series(&W_TERMS, &args, t);

    let s = w / (u - v * v).sqrt();
    let right_ascension = s.asin() + moon_mean_longitude(jd2000) * TAU;

    let s = v / u.sqrt();
    let declination = s.asin();

    LunarPosition {
        right_ascension,
        declination,
        distance: DISTANCE_SCALE * u.sqrt(),
    }
}

/// Horizontal coordinates of the moon: `(azimuth, elevation)` in degrees.
fn horizontal<T: TimeZone>(observer: &Observer, instant: &DateTime<T>) -> (f64, f64) {
    let jd = julian_day_of(instant);
    let position = moon_position(julian_day_2000(jd));
    let lst = local_mean_sidereal_time(jd, observer.longitude()).to_radians();
    let hour_angle = lst - position.right_ascension;

    let (sh, ch) = hour_angle.sin_cos();
    let (sd, cd) = position.declination.sin_cos();
    let (sl, cl) = observer.latitude().to_radians().sin_cos();

    let x = -ch * cd * sl + sd * cl;
    let y = -sh * cd;
    let z = ch * cd * cl + sd * sl;

    let azimuth = floored_mod(y.atan2(x).to_degrees(), 360.0);
    let elevation = z.atan2(x.hypot(y)).to_degrees();
    (azimuth, elevation)
}

/// Azimuth of the moon in degrees clockwise from North.
pub fn moon_azimuth<T: TimeZone>(observer: &Observer, instant: &DateTime<T>) -> f64 {
    horizontal(observer, instant).0
}

/// Geocentric elevation of the moon above the horizon in degrees.
pub fn moon_elevation<T: TimeZone>(observer: &Observer, instant: &DateTime<T>) -> f64 {
    horizontal(observer, instant).1
}

pub fn moon_zenith<T: TimeZone>(observer: &Observer, instant: &DateTime<T>) -> f64 {
    90.0 - moon_elevation(observer, instant)
}
