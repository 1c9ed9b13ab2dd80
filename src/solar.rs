//! Low-precision solar ephemeris.
//!
//! Every function takes a Julian century (see [`crate::time::julian_century`]) and is pure.
//! Accuracy is roughly 0.01°, which is plenty for event times to the minute.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::floored_mod;
use crate::math::polynomial;

/// Apparent angular radius of the sun in degrees (32′ diameter)
pub const SUN_APPARENT_RADIUS: f64 = 32.0 / (60.0 * 2.0);

/// Geometric mean longitude of the sun in degrees [0, 360).
pub fn geometric_mean_longitude(julian_century: f64) -> f64 {
    floored_mod(polynomial(&[280.46646, 36000.76983, 0.0003032], julian_century), 360.0)
}

/// Geometric mean anomaly of the sun in degrees.
pub fn geometric_mean_anomaly(julian_century: f64) -> f64 {
    polynomial(&[357.52911, 35999.05029, -0.0001537], julian_century)
}

/// Eccentricity of Earth's orbit (unitless).
pub fn eccentricity(julian_century: f64) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], julian_century)
}

/// Equation of the center in degrees.
pub fn equation_of_center(julian_century: f64) -> f64 {
    let m = geometric_mean_anomaly(julian_century).to_radians();

    m.sin() * polynomial(&[1.914602, -0.004817, -0.000014], julian_century)
        + (2.0 * m).sin() * (0.019993 - 0.000101 * julian_century)
        + (3.0 * m).sin() * 0.000289
}

/// True longitude of the sun in degrees.
pub fn true_longitude(julian_century: f64) -> f64 {
    geometric_mean_longitude(julian_century) + equation_of_center(julian_century)
}

/// True anomaly of the sun in degrees.
pub fn true_anomaly(julian_century: f64) -> f64 {
    geometric_mean_anomaly(julian_century) + equation_of_center(julian_century)
}

/// Distance from Earth to the sun in astronomical units.
pub fn radius_vector(julian_century: f64) -> f64 {
    let v = true_anomaly(julian_century).to_radians();
    let e = eccentricity(julian_century);

    (1.000001018 * (1.0 - e * e)) / (1.0 + e * v.cos())
}

/// Longitude of the ascending node of the moon's orbit, used for the nutation term.
fn omega(julian_century: f64) -> f64 {
    125.04 - 1934.136 * julian_century
}

/// Apparent longitude of the sun in degrees, corrected for nutation and aberration.
pub fn apparent_longitude(julian_century: f64) -> f64 {
    true_longitude(julian_century) - 0.00569 - 0.00478 * omega(julian_century).to_radians().sin()
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity(julian_century: f64) -> f64 {
    let seconds = 21.448 - julian_century * (46.815 + julian_century * (0.00059 - julian_century * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation, in degrees.
pub fn corrected_obliquity(julian_century: f64) -> f64 {
    mean_obliquity(julian_century) + 0.00256 * omega(julian_century).to_radians().cos()
}

/// Apparent right ascension of the sun in degrees (-180, 180].
pub fn right_ascension(julian_century: f64) -> f64 {
    let oc = corrected_obliquity(julian_century).to_radians();
    let al = apparent_longitude(julian_century).to_radians();

    (oc.cos() * al.sin()).atan2(al.cos()).to_degrees()
}

/// Apparent declination of the sun in degrees.
pub fn declination(julian_century: f64) -> f64 {
    let e = corrected_obliquity(julian_century).to_radians();
    let lambda = apparent_longitude(julian_century).to_radians();

    (e.sin() * lambda.sin()).asin().to_degrees()
}

/// The `y` term of the equation of time, tan²(ε/2).
pub(crate) fn var_y(julian_century: f64) -> f64 {
    let half = (corrected_obliquity(julian_century) / 2.0).to_radians().tan();
    half * half
}

/// Equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time(julian_century: f64) -> f64 {
    let l0 = geometric_mean_longitude(julian_century).to_radians();
    let e = eccentricity(julian_century);
    let m = geometric_mean_anomaly(julian_century).to_radians();
    let y = var_y(julian_century);

    let sin2l0 = (2.0 * l0).sin();
    let sinm = m.sin();
    let cos2l0 = (2.0 * l0).cos();
    let sin4l0 = (4.0 * l0).sin();
    let sin2m = (2.0 * m).sin();

    let eq = y * sin2l0 - 2.0 * e * sinm + 4.0 * e * y * sinm * cos2l0
        - 0.5 * y * y * sin4l0
        - 1.25 * e * e * sin2m;

    eq.to_degrees() * 4.0
}

/// Solar ephemeris values at one Julian century.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarEphemerisSample {
    /// Degrees
    pub declination: f64,
    /// Degrees
    pub right_ascension: f64,
    /// Minutes
    pub equation_of_time: f64,
    /// Degrees
    pub apparent_longitude: f64,
    /// Astronomical units
    pub radius_vector: f64,
}

impl SolarEphemerisSample {
    pub fn at(julian_century: f64) -> Self {
        Self {
            declination: declination(julian_century),
            right_ascension: right_ascension(julian_century),
            equation_of_time: equation_of_time(julian_century),
            apparent_longitude: apparent_longitude(julian_century),
            radius_vector: radius_vector(julian_century),
        }
    }
}
