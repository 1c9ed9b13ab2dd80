use core::fmt;
use core::str::FromStr;

#[allow(unused_imports)]
use core_maths::CoreFloat;
use thiserror::Error;

/// Latitude beyond which hour-angle formulas become singular.
pub(crate) const MAX_SOLVER_LATITUDE: f64 = 89.8;

/// Height of the observer, either above sea level or relative to a feature on the horizon.
///
/// Only one adjustment applies per calculation:
///
/// - `Height(h)`: metres above sea level; the horizon is depressed by the geometric dip.
/// - `Obscured { height, distance }`: a feature (a ridge, a building) of `height` metres at
///   `distance` metres raises or lowers the horizon instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Elevation {
    /// Metres above sea level
    Height(f64),
    /// Horizon set by an obscuring feature, both values in metres
    Obscured { height: f64, distance: f64 },
}

impl Default for Elevation {
    fn default() -> Self {
        Elevation::Height(0.0)
    }
}

impl From<f64> for Elevation {
    fn from(height: f64) -> Self {
        Elevation::Height(height)
    }
}

/// A location on Earth.
///
/// Latitude is positive North and longitude is positive **East** (so New York is at a
/// negative longitude). Both are in degrees.
///
/// # Example
///
/// ```
/// use solunar::Observer;
///
/// let new_delhi = Observer::new(28.61, 77.22, 0.0).unwrap();
/// assert_eq!(new_delhi.longitude(), 77.22);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
    elevation: Elevation,
}

impl Observer {
    /// Creates an observer.
    ///
    /// Latitude is clamped to [-90, 90] and longitude is wrapped into [-180, 180].
    ///
    /// # Arguments
    ///
    /// * `latitude` - Degrees, North positive
    /// * `longitude` - Degrees, East positive
    /// * `elevation` - Metres above sea level, or an [`Elevation::Obscured`] horizon
    ///
    /// # Errors
    ///
    /// [`CalculationError::InvalidCoordinate`] if any value is not finite, or if an obscuring
    /// feature has a negative distance.
    pub fn new(latitude: f64, longitude: f64, elevation: impl Into<Elevation>) -> Result<Self, CalculationError> {
        let elevation = elevation.into();
        let elevation_ok = match elevation {
            Elevation::Height(h) => h.is_finite(),
            Elevation::Obscured { height, distance } => height.is_finite() && distance.is_finite() && distance >= 0.0,
        };
        if !latitude.is_finite() || !longitude.is_finite() || !elevation_ok {
            return Err(CalculationError::InvalidCoordinate);
        }

        let longitude = if (-180.0..=180.0).contains(&longitude) {
            longitude
        } else {
            (longitude + 180.0).rem_euclid(360.0) - 180.0
        };

        Ok(Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude,
            elevation,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn elevation(&self) -> Elevation {
        self.elevation
    }

    /// Latitude limited to ±89.8° for use in hour-angle formulas.
    pub(crate) fn solver_latitude(&self) -> f64 {
        self.latitude.clamp(-MAX_SOLVER_LATITUDE, MAX_SOLVER_LATITUDE)
    }
}

impl Default for Observer {
    /// The Royal Observatory, Greenwich.
    fn default() -> Self {
        Self {
            latitude: 51.4733,
            longitude: -0.0008333,
            elevation: Elevation::Height(0.0),
        }
    }
}

/// Which of the two daily crossings of a zenith angle to find.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SunDirection {
    Rising,
    Setting,
}

impl SunDirection {
    pub(crate) fn sign(self) -> f64 {
        match self {
            SunDirection::Rising => 1.0,
            SunDirection::Setting => -1.0,
        }
    }
}

/// Angle of the sun below the horizon that defines dawn and dusk.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Depression {
    /// 6°
    #[default]
    Civil,
    /// 12°
    Nautical,
    /// 18°
    Astronomical,
    /// Any other angle, in degrees
    Degrees(f64),
}

impl Depression {
    pub fn degrees(self) -> f64 {
        match self {
            Depression::Civil => 6.0,
            Depression::Nautical => 12.0,
            Depression::Astronomical => 18.0,
            Depression::Degrees(d) => d,
        }
    }
}

impl From<f64> for Depression {
    fn from(degrees: f64) -> Self {
        Depression::Degrees(degrees)
    }
}

impl FromStr for Depression {
    type Err = CalculationError;

    /// Parses a preset name (`civil`, `nautical`, `astronomical`, any case) or a number of degrees.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("civil") {
            Ok(Depression::Civil)
        } else if s.eq_ignore_ascii_case("nautical") {
            Ok(Depression::Nautical)
        } else if s.eq_ignore_ascii_case("astronomical") {
            Ok(Depression::Astronomical)
        } else {
            s.parse::<f64>()
                .ok()
                .filter(|d| d.is_finite())
                .map(Depression::Degrees)
                .ok_or(CalculationError::InvalidDepression)
        }
    }
}

/// Whether atmospheric refraction is applied to solar zenith angles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Refraction {
    /// Three-regime empirical refraction (recommended)
    #[default]
    Standard,
    /// Geometric positions only
    Disabled,
}

impl Refraction {
    pub(crate) fn enabled(self) -> bool {
        matches!(self, Refraction::Standard)
    }
}

/// Settings threaded through every solar calculation.
///
/// There is no global default; pass a `Config` to each calculator explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Config {
    /// Depression used by dawn, dusk and the `sun` summary
    pub depression: Depression,
    /// Refraction model
    pub refraction: Refraction,
}

/// Which side of a zenith threshold the sun stays on when it never crosses it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// The sun never drops to the threshold (e.g. midnight sun)
    AlwaysAbove,
    /// The sun never climbs to the threshold (e.g. polar night)
    AlwaysBelow,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::AlwaysAbove => f.write_str("always above"),
            Visibility::AlwaysBelow => f.write_str("always below"),
        }
    }
}

/// Errors returned by the calculators.
///
/// Astronomical failures are ordinary values: a location where the sun never sets is not
/// a bug, so callers are expected to match on these variants.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalculationError {
    /// The sun never reaches the requested zenith angle on this day at this location
    #[error("Sun never transits a zenith of {zenith:.3}°, it is {visibility} it all day")]
    NoTransit { zenith: f64, visibility: Visibility },

    /// The event does not fall on the requested local date, even after checking the adjacent day
    #[error("Unable to find the event on the date specified")]
    EventNotOnDate,

    /// The moon stays below (or above) the horizon all day
    #[error("Moon never rises on this date at this location")]
    MoonNeverRises,

    /// The moon stays above (or below) the horizon all day
    #[error("Moon never sets on this date at this location")]
    MoonNeverSets,

    /// Latitude, longitude or elevation is not a usable number
    #[error("Invalid coordinate")]
    InvalidCoordinate,

    /// A depression that is neither a preset name nor a number of degrees
    #[error("Invalid depression")]
    InvalidDepression,

    /// Error converting between time representations
    #[error("Time conversion error")]
    TimeConversionError,
}
