//! # Solunar
//!
//! Sun and moon times for any location on Earth: dawn, sunrise, solar noon, sunset, dusk,
//! twilight, golden and blue hour, rahukaalam, the sun's position, moonrise, moonset, the
//! moon's position and the phase of the moon.
//!
//! The solar calculations use a low-precision ephemeris (about 0.01°) and a two-pass
//! transit solver; the lunar ones use the truncated periodic series of van Flandern &
//! Pulkkinen. Results are good to about a minute, which is what calendars and
//! photography planners need. This is not an observatory-grade ephemeris.
//!
//! Longitudes are **East positive**. Dates are calendar dates in the timezone passed to each
//! call; internally everything runs in UTC.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use solunar::{phase, CalculationError, Config, LunarCalculator, Observer, SolarCalculator, Visibility};
//!
//! // New Delhi: 28.61°N, 77.22°E, sea level
//! let observer = Observer::new(28.61, 77.22, 0.0).unwrap();
//! let date = NaiveDate::from_ymd_opt(2015, 12, 1).unwrap();
//!
//! let sun = SolarCalculator::new(observer, Config::default());
//! let times = sun.get_sun(date, &Utc).unwrap();
//! assert!(times.dawn < times.sunrise && times.sunrise < times.noon);
//! assert!(times.noon < times.sunset && times.sunset < times.dusk);
//!
//! // Position of the sun at noon
//! let position = sun.get_solar_position(&times.noon);
//! println!("Elevation at noon: {:.2}°", position.elevation());
//!
//! // The moon
//! let moon = LunarCalculator::new(observer);
//! match moon.get_moonrise(date, &Utc) {
//!     Ok(rise) => println!("Moonrise at {} (azimuth {:.1}°)", rise.time, rise.azimuth),
//!     Err(e) => println!("{e}"),
//! }
//! println!("Phase: {}", phase(date).name());
//!
//! // Above the Arctic circle in June the sun never sets
//! let tromso = SolarCalculator::new(Observer::new(69.6, 18.8, 0.0).unwrap(), Config::default());
//! let june = NaiveDate::from_ymd_opt(2019, 6, 5).unwrap();
//! match tromso.get_sunrise(june, &Utc) {
//!     Err(CalculationError::NoTransit { visibility: Visibility::AlwaysAbove, .. }) => {}
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub(crate) mod tables;

mod events;
mod math;
mod moon_events;
mod phase;
mod position;
mod refraction;
mod types;

pub mod lunar;
pub mod sidereal;
pub mod solar;
pub mod time;


pub use crate::events::{midnight_utc, noon_utc, time_of_transit, SolarCalculator, SunTimes, TimePeriod};
pub use crate::lunar::{moon_azimuth, moon_elevation, moon_position, moon_zenith, LunarPosition};
pub use crate::moon_events::{riseset, LunarCalculator, MoonEvent, MoonEventKind, RiseSet, MOON_APPARENT_RADIUS};
pub use crate::phase::{phase, Phase, PhaseName};
pub use crate::position::{azimuth, elevation, zenith, zenith_and_azimuth, SolarPosition};
pub use crate::refraction::{horizon_dip, obscuring_feature_angle, refraction_at_zenith};
pub use crate::solar::SUN_APPARENT_RADIUS;
pub use crate::types::{
    CalculationError, Config, Depression, Elevation, Observer, Refraction, SunDirection, Visibility,
};
