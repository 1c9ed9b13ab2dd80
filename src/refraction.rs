#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::types::Elevation;

/// Polar radius of the Earth in metres, used for the horizon dip
const EARTH_RADIUS: f64 = 6_356_900.0;

// ============================================================================
// Atmospheric Refraction
// ============================================================================

/// Atmospheric refraction in degrees for a body at the given zenith angle.
///
/// Three empirical regimes are used depending on the apparent elevation:
///
/// - above 5°: a series in 1/tan(elevation)
/// - between -0.575° and 5°: a polynomial in elevation
/// - below -0.575°: -20.774″/tan(elevation)
///
/// Refraction is taken as zero at or above 85° elevation.
pub fn refraction_at_zenith(zenith: f64) -> f64 {
    let elevation = 90.0 - zenith;
    if elevation >= 85.0 {
        return 0.0;
    }

    let te = elevation.to_radians().tan();
    let arcseconds = if elevation > 5.0 {
        58.1 / te - 0.07 / te.powi(3) + 0.000086 / te.powi(5)
    } else if elevation > -0.575 {
        1735.0 + elevation * (-518.2 + elevation * (103.4 + elevation * (-12.79 + elevation * 0.711)))
    } else {
        -20.774 / te
    };

    arcseconds / 3600.0
}

// ============================================================================
// Horizon Adjustments
// ============================================================================

/// Depression of the sea horizon in degrees for an observer `elevation` metres up.
///
/// Zero at or below sea level.
pub fn horizon_dip(elevation: f64) -> f64 {
    if elevation <= 0.0 {
        return 0.0;
    }
    (EARTH_RADIUS / (EARTH_RADIUS + elevation)).acos().to_degrees()
}

/// Angle in degrees between the true horizon and the line of sight to an obscuring feature.
///
/// `height` is how far the observer stands above the top of the feature, `distance` the
/// horizontal distance to it. Positive heights lower the visible horizon (like the dip),
/// negative heights raise it so the sun is hidden earlier.
pub fn obscuring_feature_angle(height: f64, distance: f64) -> f64 {
    if height == 0.0 {
        return 0.0;
    }
    height.atan2(distance).to_degrees()
}

/// Zenith adjustment for an observer's elevation. Exactly one form applies.
pub(crate) fn elevation_adjustment(elevation: Elevation) -> f64 {
    match elevation {
        Elevation::Height(h) => horizon_dip(h),
        Elevation::Obscured { height, distance } => obscuring_feature_angle(height, distance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refraction_regimes_join_smoothly() {
        // Regimes meet at 5° and -0.575° elevation; the jumps stay below a few arcseconds.
        let above = refraction_at_zenith(85.0 - 1e-9);
        let below = refraction_at_zenith(85.0 + 1e-9);
        assert!((above - below).abs() < 0.01);

        let horizon = refraction_at_zenith(90.0);
        assert!((horizon - 1735.0 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn no_refraction_near_the_zenith() {
        assert_eq!(refraction_at_zenith(5.0), 0.0);
        assert_eq!(refraction_at_zenith(0.0), 0.0);
    }

    #[test]
    fn dip_is_zero_at_sea_level() {
        assert_eq!(horizon_dip(0.0), 0.0);
        assert_eq!(horizon_dip(-20.0), 0.0);
        assert!((horizon_dip(12_000.0) - 3.517_744).abs() < 1e-5);
    }

    #[test]
    fn obscuring_feature_sign_follows_height() {
        assert_eq!(obscuring_feature_angle(0.0, 100.0), 0.0);
        let up = obscuring_feature_angle(100.0, 100.0);
        let down = obscuring_feature_angle(-100.0, 100.0);
        assert!((up - 45.0).abs() < 1e-9);
        assert!((down + 45.0).abs() < 1e-9);

        let distant = obscuring_feature_angle(-10.0, 1000.0);
        assert!((distant + 0.5729).abs() < 1e-3);
    }
}
