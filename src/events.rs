use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::{debug, trace};

use crate::math::floored_mod;
use crate::position::{self, SolarPosition};
use crate::refraction::{elevation_adjustment, refraction_at_zenith};
use crate::solar::{self, SUN_APPARENT_RADIUS};
use crate::time::{julian_century, julian_day, Calendar};
use crate::types::{CalculationError, Config, Depression, Observer, Refraction, SunDirection, Visibility};

/// Zenith at which the sun's upper limb touches the horizon
const SUNRISE_ZENITH: f64 = 90.0 + SUN_APPARENT_RADIUS;

/// Zenith bounds of the golden hour (4° below to 6° above the horizon)
const GOLDEN_HOUR_ZENITHS: (f64, f64) = (94.0, 84.0);

/// Zenith bounds of the blue hour (6° to 4° below the horizon)
const BLUE_HOUR_ZENITHS: (f64, f64) = (96.0, 94.0);

/// Zenith at which morning twilight starts and evening twilight ends
const TWILIGHT_ZENITH: f64 = 96.0;

/// Rahukaalam octant selected for each weekday, Monday first
const RAHUKAALAM_OCTANT: [i32; 7] = [1, 6, 4, 5, 3, 2, 7];

/// Number of fixed-point passes made by the transit solver
const TRANSIT_ITERATIONS: usize = 2;

/// A start and end instant.
pub type TimePeriod<Tz> = (DateTime<Tz>, DateTime<Tz>);

// ============================================================================
// Transit Solver
// ============================================================================

/// Hour angle in radians at which the sun reaches `zenith`, or `None` when it never does.
///
/// Rising events use the positive root; setting events negate it.
fn hour_angle(latitude: f64, declination: f64, zenith: f64, direction: SunDirection) -> Option<f64> {
    let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
    let (sin_dec, cos_dec) = declination.to_radians().sin_cos();

    let h = (zenith.to_radians().cos() - sin_lat * sin_dec) / (cos_lat * cos_dec);
    if !(-1.0..=1.0).contains(&h) {
        return None;
    }
    Some(direction.sign() * h.acos())
}

/// `minutes` after 00:00 UTC on `date`.
fn utc_minutes_after_midnight(date: NaiveDate, minutes: f64) -> Result<DateTime<Utc>, CalculationError> {
    let micros = (minutes * 60_000_000.0).round() as i64;
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .checked_add_signed(TimeDelta::microseconds(micros))
        .ok_or(CalculationError::TimeConversionError)
}

/// Classifies a zenith the sun never crosses by comparing it with the zenith at solar noon.
fn no_transit(observer: &Observer, date: NaiveDate, zenith: f64, refraction: Refraction) -> CalculationError {
    let noon = match noon_utc(observer, date) {
        Ok(noon) => noon,
        Err(e) => return e,
    };
    let noon_zenith = position::zenith(observer, &noon, refraction);
    let visibility = if noon_zenith > zenith {
        Visibility::AlwaysBelow
    } else {
        Visibility::AlwaysAbove
    };

    debug!("sun never reaches zenith {zenith} on {date}: {visibility} (noon zenith {noon_zenith:.3})");
    CalculationError::NoTransit { zenith, visibility }
}

/// UTC instant at which the sun crosses `zenith` on `date`.
///
/// The observer's elevation (or obscuring feature) and, if enabled, refraction are added to
/// the target zenith. The ephemeris is evaluated twice: first at the start of the UTC day,
/// then at the time found by the first pass.
///
/// # Arguments
///
/// * `observer` - Location; latitude is limited to ±89.8°
/// * `date` - UTC calendar date
/// * `zenith` - Target zenith angle in degrees
/// * `direction` - Morning or evening crossing
/// * `refraction` - Whether to add atmospheric refraction
///
/// # Errors
///
/// [`CalculationError::NoTransit`] if the sun never reaches `zenith` on that day.
pub fn time_of_transit(
    observer: &Observer,
    date: NaiveDate,
    zenith: f64,
    direction: SunDirection,
    refraction: Refraction,
) -> Result<DateTime<Utc>, CalculationError> {
    let latitude = observer.solver_latitude();
    let longitude = observer.longitude();

    let adjustment_for_elevation = elevation_adjustment(observer.elevation());
    let adjustment_for_refraction = if refraction.enabled() {
        refraction_at_zenith(zenith + adjustment_for_elevation)
    } else {
        0.0
    };
    let target = zenith + adjustment_for_elevation + adjustment_for_refraction;

    let jd = julian_day(date, Calendar::Gregorian);
    let mut adjustment = 0.0;
    let mut minutes = 0.0;

    for pass in 0..TRANSIT_ITERATIONS {
        let jc = julian_century(jd + adjustment);
        let declination = solar::declination(jc);

        let Some(hour_angle) = hour_angle(latitude, declination, target, direction) else {
            return Err(no_transit(observer, date, zenith, refraction));
        };

        let delta = -longitude - hour_angle.to_degrees();
        let offset = delta * 4.0 - solar::equation_of_time(jc);
        minutes = floored_mod(720.0 + offset, 1440.0);
        adjustment = minutes / 1440.0;

        trace!("transit pass {pass}: jc={jc:.9} declination={declination:.5} minutes={minutes:.3}");
    }

    utc_minutes_after_midnight(date, minutes)
}

/// Solar noon on the UTC `date`.
pub fn noon_utc(observer: &Observer, date: NaiveDate) -> Result<DateTime<Utc>, CalculationError> {
    let jc = julian_century(julian_day(date, Calendar::Gregorian));
    let minutes = 720.0 - 4.0 * observer.longitude() - solar::equation_of_time(jc);
    utc_minutes_after_midnight(date, minutes)
}

/// Solar midnight nearest to 00:00 UTC on `date`; it may fall on the previous day.
pub fn midnight_utc(observer: &Observer, date: NaiveDate) -> Result<DateTime<Utc>, CalculationError> {
    let midday = julian_day(date, Calendar::Gregorian) + 0.5;
    let jc = julian_century(midday + 0.5 - observer.longitude() / 360.0);
    let minutes = -4.0 * observer.longitude() - solar::equation_of_time(jc);
    utc_minutes_after_midnight(date, minutes)
}

/// Evaluates `event` for `date` in `tz`, retrying once on the adjacent day when the
/// local date of the result differs from `date`.
fn on_local_date<Tz, F>(date: NaiveDate, tz: &Tz, event: F) -> Result<DateTime<Tz>, CalculationError>
where
    Tz: TimeZone,
    F: Fn(NaiveDate) -> Result<DateTime<Utc>, CalculationError>,
{
    let found = event(date)?.with_timezone(tz);
    let found_date = found.date_naive();
    if found_date == date {
        return Ok(found);
    }

    let retry = if found_date < date { date.succ_opt() } else { date.pred_opt() };
    let retry = retry.ok_or(CalculationError::TimeConversionError)?;
    trace!("event for {date} fell on {found_date}, retrying with {retry}");

    let found = event(retry)?.with_timezone(tz);
    if found.date_naive() == date {
        Ok(found)
    } else {
        Err(CalculationError::EventNotOnDate)
    }
}

fn next_day(date: NaiveDate) -> Result<NaiveDate, CalculationError> {
    date.succ_opt().ok_or(CalculationError::TimeConversionError)
}

// ============================================================================
// Solar Events
// ============================================================================

/// Times of the sun for one day, as returned by [`SolarCalculator::get_sun`].
#[derive(Clone, Debug, PartialEq)]
pub struct SunTimes<Tz: TimeZone> {
    pub dawn: DateTime<Tz>,
    pub sunrise: DateTime<Tz>,
    pub noon: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub dusk: DateTime<Tz>,
}

/// Calculator for solar events at one location.
///
/// The calculator only stores its inputs; every method is a pure function of them and of
/// its arguments, so one instance can be shared freely between threads.
///
/// Dates are calendar dates in the timezone `tz` passed to each method, and results are
/// returned in that timezone.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Timelike, Utc};
/// use solunar::{Config, Observer, SolarCalculator};
///
/// let calc = SolarCalculator::new(Observer::default(), Config::default());
/// let date = NaiveDate::from_ymd_opt(2015, 12, 1).unwrap();
///
/// let sunrise = calc.get_sunrise(date, &Utc).unwrap();
/// assert_eq!((sunrise.hour(), sunrise.minute()), (7, 42));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarCalculator {
    observer: Observer,
    config: Config,
}

impl SolarCalculator {
    pub fn new(observer: Observer, config: Config) -> Self {
        Self { observer, config }
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn transit(&self, date: NaiveDate, zenith: f64, direction: SunDirection) -> Result<DateTime<Utc>, CalculationError> {
        time_of_transit(&self.observer, date, zenith, direction, self.config.refraction)
    }

    /// Time at which the sun crosses `zenith`, without any local-date check.
    pub fn get_time_of_transit<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        zenith: f64,
        direction: SunDirection,
        tz: &Tz,
    ) -> Result<DateTime<Tz>, CalculationError> {
        Ok(self.transit(date, zenith, direction)?.with_timezone(tz))
    }

    /// Dawn using the configured depression.
    pub fn get_dawn<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, CalculationError> {
        self.get_dawn_at(date, self.config.depression, tz)
    }

    /// Dawn with an explicit depression.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::NoTransit`] if the sun never reaches that depression
    /// - [`CalculationError::EventNotOnDate`] if dawn does not fall on `date` in `tz`
    pub fn get_dawn_at<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        depression: Depression,
        tz: &Tz,
    ) -> Result<DateTime<Tz>, CalculationError> {
        let zenith = 90.0 + depression.degrees();
        on_local_date(date, tz, |d| self.transit(d, zenith, SunDirection::Rising))
    }

    /// Sunrise: the upper limb of the sun on the horizon.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::NoTransit`] during midnight sun or polar night
    /// - [`CalculationError::EventNotOnDate`] if sunrise does not fall on `date` in `tz`
    pub fn get_sunrise<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, CalculationError> {
        on_local_date(date, tz, |d| self.transit(d, SUNRISE_ZENITH, SunDirection::Rising))
    }

    /// Solar noon, when the sun is highest.
    pub fn get_noon<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, CalculationError> {
        Ok(noon_utc(&self.observer, date)?.with_timezone(tz))
    }

    /// Solar midnight closest to the start of `date`; it may fall on the previous day.
    pub fn get_midnight<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, CalculationError> {
        Ok(midnight_utc(&self.observer, date)?.with_timezone(tz))
    }

    pub fn get_sunset<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, CalculationError> {
        on_local_date(date, tz, |d| self.transit(d, SUNRISE_ZENITH, SunDirection::Setting))
    }

    /// Dusk using the configured depression.
    pub fn get_dusk<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, CalculationError> {
        self.get_dusk_at(date, self.config.depression, tz)
    }

    pub fn get_dusk_at<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        depression: Depression,
        tz: &Tz,
    ) -> Result<DateTime<Tz>, CalculationError> {
        let zenith = 90.0 + depression.degrees();
        on_local_date(date, tz, |d| self.transit(d, zenith, SunDirection::Setting))
    }

    /// Sunrise to sunset.
    pub fn get_daylight<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<TimePeriod<Tz>, CalculationError> {
        Ok((self.get_sunrise(date, tz)?, self.get_sunset(date, tz)?))
    }

    /// Civil dusk on `date` to civil dawn on the following day.
    pub fn get_night<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<TimePeriod<Tz>, CalculationError> {
        let start = self.get_dusk_at(date, Depression::Civil, tz)?;
        let end = self.get_dawn_at(next_day(date)?, Depression::Civil, tz)?;
        Ok((start, end))
    }

    /// Twilight between the sun at 6° below the horizon and sunrise (or sunset and 6° below).
    ///
    /// The period is always returned in chronological order.
    pub fn get_twilight<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        direction: SunDirection,
        tz: &Tz,
    ) -> Result<TimePeriod<Tz>, CalculationError> {
        let start = self.get_time_of_transit(date, TWILIGHT_ZENITH, direction, tz)?;
        match direction {
            SunDirection::Rising => Ok((start, self.get_sunrise(date, tz)?)),
            SunDirection::Setting => Ok((self.get_sunset(date, tz)?, start)),
        }
    }

    /// Golden hour: the sun between 4° below and 6° above the horizon.
    pub fn get_golden_hour<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        direction: SunDirection,
        tz: &Tz,
    ) -> Result<TimePeriod<Tz>, CalculationError> {
        self.period_between(date, GOLDEN_HOUR_ZENITHS, direction, tz)
    }

    /// Blue hour: the sun between 6° and 4° below the horizon.
    pub fn get_blue_hour<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        direction: SunDirection,
        tz: &Tz,
    ) -> Result<TimePeriod<Tz>, CalculationError> {
        self.period_between(date, BLUE_HOUR_ZENITHS, direction, tz)
    }

    fn period_between<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        (from, to): (f64, f64),
        direction: SunDirection,
        tz: &Tz,
    ) -> Result<TimePeriod<Tz>, CalculationError> {
        let start = self.get_time_of_transit(date, from, direction, tz)?;
        let end = self.get_time_of_transit(date, to, direction, tz)?;
        match direction {
            SunDirection::Rising => Ok((start, end)),
            SunDirection::Setting => Ok((end, start)),
        }
    }

    /// Rahukaalam, the inauspicious eighth of the day (or of the night when `daytime` is false).
    ///
    /// Daylight is split into eight equal parts and one is picked by the weekday of `date`
    /// from a fixed table. The night period runs from sunset to the next sunrise.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{NaiveDate, Timelike, Utc};
    /// use solunar::{Config, Observer, SolarCalculator};
    ///
    /// let new_delhi = Observer::new(28.61, 77.22, 0.0).unwrap();
    /// let calc = SolarCalculator::new(new_delhi, Config::default());
    /// let date = NaiveDate::from_ymd_opt(2015, 12, 1).unwrap();
    ///
    /// let (start, end) = calc.get_rahukaalam(date, true, &Utc).unwrap();
    /// assert_eq!((start.hour(), start.minute()), (9, 16));
    /// assert_eq!((end.hour(), end.minute()), (10, 35));
    /// ```
    pub fn get_rahukaalam<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        daytime: bool,
        tz: &Tz,
    ) -> Result<TimePeriod<Tz>, CalculationError> {
        let (start, end) = if daytime {
            (self.get_sunrise(date, tz)?, self.get_sunset(date, tz)?)
        } else {
            (self.get_sunset(date, tz)?, self.get_sunrise(next_day(date)?, tz)?)
        };

        // Whole seconds of the span, wrapped to a single day
        let span = end.signed_duration_since(start.clone()).num_seconds().rem_euclid(86_400);
        let octant = TimeDelta::microseconds((span as f64 / 8.0 * 1_000_000.0).round() as i64);
        let index = RAHUKAALAM_OCTANT[date.weekday().num_days_from_monday() as usize];

        let start = start
            .checked_add_signed(octant * index)
            .ok_or(CalculationError::TimeConversionError)?;
        let end = start
            .clone()
            .checked_add_signed(octant)
            .ok_or(CalculationError::TimeConversionError)?;
        Ok((start, end))
    }

    /// Time at which the sun reaches `elevation` degrees above the horizon.
    ///
    /// Elevations above 90° are measured over the zenith, so 110° means a setting sun at 70°.
    pub fn get_time_at_elevation<Tz: TimeZone>(
        &self,
        date: NaiveDate,
        elevation: f64,
        direction: SunDirection,
        tz: &Tz,
    ) -> Result<DateTime<Tz>, CalculationError> {
        let (elevation, direction) = if elevation > 90.0 {
            (180.0 - elevation, SunDirection::Setting)
        } else {
            (elevation, direction)
        };
        self.get_time_of_transit(date, 90.0 - elevation, direction, tz)
    }

    /// Dawn, sunrise, noon, sunset and dusk in one call.
    pub fn get_sun<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<SunTimes<Tz>, CalculationError> {
        Ok(SunTimes {
            dawn: self.get_dawn(date, tz)?,
            sunrise: self.get_sunrise(date, tz)?,
            noon: self.get_noon(date, tz)?,
            sunset: self.get_sunset(date, tz)?,
            dusk: self.get_dusk(date, tz)?,
        })
    }

    /// Position of the sun at `instant` using the configured refraction.
    pub fn get_solar_position<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> SolarPosition {
        position::zenith_and_azimuth(&self.observer, instant, self.config.refraction)
    }
}
