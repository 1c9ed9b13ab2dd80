//! Property tests for the solar event solver.
//!
//! These check relations that must hold for any date and mid-latitude location: events
//! come in order, transit times move smoothly from day to day, and the time found for an
//! elevation puts the sun back at that elevation.

extern crate std;
use crate::position;
use crate::time::{julian_century, julian_century_to_julian_day, julian_day_from_parts, julian_day_to_calendar, Calendar};
use crate::{Config, Observer, Refraction, SolarCalculator, SunDirection};
use chrono::{Days, NaiveDate, Utc};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..=2100i32, 1u32..=12u32, 1u32..=31u32)
        .prop_filter_map("valid calendar date", |(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
}

fn geometric(observer: Observer) -> SolarCalculator {
    SolarCalculator::new(
        observer,
        Config {
            refraction: Refraction::Disabled,
            ..Config::default()
        },
    )
}

proptest! {
#[allow(clippy::unwrap_used)]

    #[test]
    fn events_are_ordered_through_the_day(
        date in any_date(),
        latitude in -45.0_f64..=45.0_f64,
        longitude in -15.0_f64..=15.0_f64,
    ) {
        let calc = SolarCalculator::new(Observer::new(latitude, longitude, 0.0).unwrap(), Config::default());

        // Near the prime meridian the UTC day guarantees all five events come from one solar day
        let Ok(sun) = calc.get_sun(date, &Utc) else {
            return Ok(());
        };
        prop_assert!(sun.dawn < sun.sunrise, "dawn {} sunrise {}", sun.dawn, sun.sunrise);
        prop_assert!(sun.sunrise < sun.noon, "sunrise {} noon {}", sun.sunrise, sun.noon);
        prop_assert!(sun.noon < sun.sunset, "noon {} sunset {}", sun.noon, sun.sunset);
        prop_assert!(sun.sunset < sun.dusk, "sunset {} dusk {}", sun.sunset, sun.dusk);

        let day = (sun.dusk - sun.dawn).num_hours();
        prop_assert!((0..24).contains(&day), "dawn {} dusk {}", sun.dawn, sun.dusk);
    }

    #[test]
    fn deeper_depressions_come_earlier_in_the_morning(
        date in any_date(),
        latitude in -50.0_f64..=50.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let calc = SolarCalculator::new(Observer::new(latitude, longitude, 0.0).unwrap(), Config::default());
        let zeniths = [108.0, 102.0, 96.0, 90.0];

        let times: std::vec::Vec<_> = zeniths
            .iter()
            .map(|&z| calc.get_time_of_transit(date, z, SunDirection::Rising, &Utc))
            .collect();
        if times.iter().any(|t| t.is_err()) {
            return Ok(());
        }
        let times: std::vec::Vec<_> = times.into_iter().map(|t| t.unwrap()).collect();

        // Transits wrap within the UTC day, so compare on the circle: each one must come
        // strictly after the previous, and well within a quarter of a day
        for pair in times.windows(2) {
            let gap = (pair[1] - pair[0]).num_microseconds().unwrap().rem_euclid(86_400_000_000);
            prop_assert!(gap > 0, "{} is not after {}", pair[1], pair[0]);
            prop_assert!(gap < 4 * 3_600_000_000, "{} then {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn time_at_elevation_recovers_the_elevation(
        date in any_date(),
        latitude in -45.0_f64..=45.0_f64,
        longitude in -30.0_f64..=30.0_f64,
        target in -18.0_f64..=85.0_f64,
        rising in any::<bool>(),
    ) {
        let observer = Observer::new(latitude, longitude, 0.0).unwrap();
        let direction = if rising { SunDirection::Rising } else { SunDirection::Setting };

        // Events close to 00:00 UTC are solved with the ephemeris of the wrong day, so stay
        // near the prime meridian where they fall well inside the UTC day
        let Ok(instant) = geometric(observer).get_time_at_elevation(date, target, direction, &Utc) else {
            return Ok(());
        };
        let found = position::elevation(&observer, &instant, Refraction::Disabled);
        prop_assert!((found - target).abs() < 0.1, "target {target}, found {found} at {instant}");
    }

    #[test]
    fn transit_moves_smoothly_between_days(
        date in any_date(),
        latitude in -60.0_f64..=60.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let calc = SolarCalculator::new(Observer::new(latitude, longitude, 0.0).unwrap(), Config::default());

        let mut previous = calc.get_noon(date, &Utc).unwrap();
        for offset in 1..10 {
            let day = date.checked_add_days(Days::new(offset)).unwrap();
            let noon = calc.get_noon(day, &Utc).unwrap();
            let expected = previous.checked_add_days(Days::new(1)).unwrap();
            let drift = (noon - expected).num_seconds().abs();
            prop_assert!(drift < 60, "noon drifted {drift}s from {previous} to {noon}");
            previous = noon;
        }
    }

    #[test]
    fn poles_match_the_solver_limit(
        date in any_date(),
        longitude in -180.0_f64..=180.0_f64,
        north in any::<bool>(),
    ) {
        let sign = if north { 1.0 } else { -1.0 };
        let pole = SolarCalculator::new(Observer::new(90.0 * sign, longitude, 0.0).unwrap(), Config::default());
        let limit = SolarCalculator::new(Observer::new(89.8 * sign, longitude, 0.0).unwrap(), Config::default());

        let from_pole = pole.get_time_of_transit(date, 90.833, SunDirection::Rising, &Utc);
        let from_limit = limit.get_time_of_transit(date, 90.833, SunDirection::Rising, &Utc);
        prop_assert_eq!(from_pole.is_ok(), from_limit.is_ok());
        if let (Ok(a), Ok(b)) = (from_pole, from_limit) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn julian_day_round_trips(
        year in -1000i32..=3000i32,
        month in 1u32..=12u32,
        day in 1.0_f64..28.0_f64,
        julian in any::<bool>(),
    ) {
        let calendar = if julian { Calendar::Julian } else { Calendar::Gregorian };
        let jd = julian_day_from_parts(year, month, day, calendar);

        let (y, m, d) = julian_day_to_calendar(jd, calendar);
        prop_assert_eq!((y, m), (year, month));
        prop_assert!((d - day).abs() < 1e-6, "{} != {}", d, day);

        let back = julian_century_to_julian_day(julian_century(jd));
        prop_assert!((back - jd).abs() < 1e-6, "{} != {}", back, jd);
    }
}
