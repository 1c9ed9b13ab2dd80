use core::f64::consts::TAU;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::{debug, trace};

use crate::lunar::{self, moon_position, LunarPosition};
use crate::math::{floored_mod, interpolate, sign};
use crate::sidereal::local_mean_sidereal_time;
use crate::time::{julian_day, julian_day_2000, Calendar};
use crate::types::{CalculationError, Observer};

/// Apparent angular radius of the moon in degrees (1896″)
pub const MOON_APPARENT_RADIUS: f64 = 1896.0 / (60.0 * 60.0);

/// Horizontal parallax of the moon in degrees at one Earth radius
const PARALLAX_FACTOR: f64 = 41.685;

/// Ratio of sidereal to solar time
const SIDEREAL_RATE: f64 = 1.0027379097096138907193594760917;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoonEventKind {
    Rise,
    Set,
}

/// A moonrise or moonset, to the minute, with the azimuth at which it happens.
#[derive(Clone, Debug, PartialEq)]
pub struct MoonEvent<Tz: TimeZone> {
    pub kind: MoonEventKind,
    pub time: DateTime<Tz>,
    /// Degrees clockwise from North
    pub azimuth: f64,
}

impl<Tz: TimeZone> MoonEvent<Tz> {
    fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> MoonEvent<Tz2> {
        MoonEvent {
            kind: self.kind,
            time: self.time.with_timezone(tz),
            azimuth: self.azimuth,
        }
    }
}

/// Rise and set found while scanning one UTC day.
#[derive(Clone, Debug, PartialEq)]
pub struct RiseSet {
    pub rise: Option<MoonEvent<Utc>>,
    pub set: Option<MoonEvent<Utc>>,
}

/// Three samples of the moon spanning one hour: start, middle and end.
///
/// `altitude` holds the horizon indicator f at each sample; it is positive while the
/// upper limb is above the horizon.
#[derive(Copy, Clone, Debug, Default)]
struct TransitWindow {
    right_ascension: [f64; 3],
    declination: [f64; 3],
    altitude: [f64; 3],
}

impl TransitWindow {
    fn starting_at(position: &LunarPosition) -> Self {
        Self {
            right_ascension: [position.right_ascension, 0.0, 0.0],
            declination: [position.declination, 0.0, 0.0],
            altitude: [0.0; 3],
        }
    }

    /// Slides the window forward: the end sample becomes the next start.
    fn advance(&mut self) {
        self.right_ascension[0] = self.right_ascension[2];
        self.declination[0] = self.declination[2];
        self.altitude[0] = self.altitude[2];
    }
}

/// A horizon crossing within one hour of the scan.
#[derive(Copy, Clone, Debug)]
struct Crossing {
    kind: MoonEventKind,
    /// Minutes after 00:00 UTC, truncated
    minutes: i64,
    azimuth: f64,
}

/// Looks for a horizon crossing between `hour` and `hour + 1`.
///
/// # Arguments
///
/// * `hour` - Hour of the UTC day at the start of the window
/// * `lmst` - Local mean sidereal time at 00:00 UTC, in degrees
/// * `latitude` - Observer latitude in degrees
/// * `distance` - Distance of the moon in Earth radii
/// * `window` - Sliding window; the end altitude (and on the first hour the start altitude) is filled in
fn transit_event(hour: u32, lmst: f64, latitude: f64, distance: f64, window: &mut TransitWindow) -> Option<Crossing> {
    let first_hour = hour == 0;
    let hour = f64::from(hour);
    let mst = lmst.to_radians();
    let k1 = (15.0 * SIDEREAL_RATE).to_radians();

    if window.right_ascension[2] < window.right_ascension[0] {
        window.right_ascension[2] += TAU;
    }

    let mut hour_angle = [0.0; 3];
    hour_angle[0] = mst - window.right_ascension[0] + hour * k1;
    hour_angle[2] = mst - window.right_ascension[2] + hour * k1 + k1;
    hour_angle[1] = (hour_angle[2] + hour_angle[0]) / 2.0;

    window.declination[1] = (window.declination[2] + window.declination[0]) / 2.0;

    let (sl, cl) = latitude.to_radians().sin_cos();
    // apparent radius plus parallax
    let z = (90.0 + MOON_APPARENT_RADIUS - PARALLAX_FACTOR / distance).to_radians().cos();
    let altitude = |declination: f64, hour_angle: f64| sl * declination.sin() + cl * declination.cos() * hour_angle.cos() - z;

    if first_hour {
        window.altitude[0] = altitude(window.declination[0], hour_angle[0]);
    }
    window.altitude[2] = altitude(window.declination[2], hour_angle[2]);

    if sign(window.altitude[0]) == sign(window.altitude[2]) {
        return None;
    }

    window.altitude[1] = altitude(window.declination[1], hour_angle[1]);
    let [f0, f1, f2] = window.altitude;

    let a = 2.0 * f2 - 4.0 * f1 + 2.0 * f0;
    let b = 4.0 * f1 - 3.0 * f0 - f2;
    let discriminant = b * b - 4.0 * a * f0;
    if discriminant < 0.0 {
        return None;
    }

    let e = if a == 0.0 {
        -f0 / b
    } else {
        let root = discriminant.sqrt();
        let e = (-b + root) / (2.0 * a);
        if (0.0..=1.0).contains(&e) {
            e
        } else {
            (-b - root) / (2.0 * a)
        }
    };

    // Round to the nearest minute, then keep whole minutes
    let time = hour + e + 1.0 / 120.0;
    let h = time.trunc();
    let m = ((time - h) * 60.0).trunc();
    let minutes = (h * 60.0 + m) as i64;

    let (sd, cd) = window.declination[1].sin_cos();
    let crossing_angle = hour_angle[0] + e * (hour_angle[2] - hour_angle[0]);
    let (sh, ch) = crossing_angle.sin_cos();
    let x = cl * sd - sl * cd * ch;
    let y = -cd * sh;
    let azimuth = floored_mod(y.atan2(x).to_degrees(), 360.0);

    let kind = if f0 < 0.0 && f2 > 0.0 {
        MoonEventKind::Rise
    } else if f0 > 0.0 && f2 < 0.0 {
        MoonEventKind::Set
    } else {
        return None;
    };

    trace!("moon {kind:?} in hour {hour}: fraction {e:.4}, azimuth {azimuth:.2}");
    Some(Crossing { kind, minutes, azimuth })
}

/// Whether a newly found `event` should replace the `current` candidate of the same kind.
///
/// Offsets are seconds relative to the start of the hour in which `event` was found;
/// `opposite` is the offset of the other kind of event, if one has been found.
fn should_replace(current: i64, event: i64, opposite: Option<i64>) -> bool {
    let (current_sign, event_sign) = (sign(current as f64), sign(event as f64));
    let nearer = current_sign == event_sign && current.abs() > event.abs();
    let straddles = current_sign != event_sign && opposite.is_some_and(|o| current_sign == sign(o as f64));
    nearer || straddles
}

/// Scans the UTC day `date` hour by hour for moonrise and moonset.
///
/// Right ascension and declination are sampled at 0h, 12h and 24h and interpolated for
/// each hour. When more than one rise (or set) is found, a later candidate only replaces
/// an earlier one if it lies closer to the hour it was found in, or if it sits on the other
/// side of that hour from the earlier one while the opposite event sits on the earlier side.
pub fn riseset(observer: &Observer, date: NaiveDate) -> Result<RiseSet, CalculationError> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let jd = julian_day(date, Calendar::Gregorian);
    let jd2000 = julian_day_2000(jd);
    let t0 = local_mean_sidereal_time(jd, observer.longitude());

    let mut m = [0.0, 0.5, 1.0].map(|offset| moon_position(jd2000 + offset));
    for i in 1..3 {
        if m[i].right_ascension <= m[i - 1].right_ascension {
            m[i].right_ascension += TAU;
        }
    }

    let mut window = TransitWindow::starting_at(&m[0]);
    let mut rise: Option<MoonEvent<Utc>> = None;
    let mut set: Option<MoonEvent<Utc>> = None;

    for hour in 0..24u32 {
        let ph = f64::from(hour + 1) / 24.0;
        window.right_ascension[2] = interpolate(m[0].right_ascension, m[1].right_ascension, m[2].right_ascension, ph);
        window.declination[2] = interpolate(m[0].declination, m[1].declination, m[2].declination, ph);

        if let Some(crossing) = transit_event(hour, t0, observer.latitude(), m[1].distance, &mut window) {
            let query = i64::from(hour) * 3600;
            let event = MoonEvent {
                kind: crossing.kind,
                time: midnight
                    .checked_add_signed(TimeDelta::minutes(crossing.minutes))
                    .ok_or(CalculationError::TimeConversionError)?,
                azimuth: crossing.azimuth,
            };
            let offset = |e: &MoonEvent<Utc>| e.time.signed_duration_since(midnight).num_seconds() - query;
            let event_offset = crossing.minutes * 60 - query;

            let (current, opposite) = match crossing.kind {
                MoonEventKind::Rise => (&mut rise, set.as_ref().map(offset)),
                MoonEventKind::Set => (&mut set, rise.as_ref().map(offset)),
            };
            let replace = match current.as_ref() {
                None => true,
                Some(existing) => should_replace(offset(existing), event_offset, opposite),
            };
            if replace {
                *current = Some(event);
            }
        }

        window.advance();
    }

    Ok(RiseSet { rise, set })
}

/// Converts the event found by `pick` to `tz`, retrying once on the adjacent UTC day
/// when its local date differs from `date`.
fn event_on_local_date<Tz, F>(
    observer: &Observer,
    date: NaiveDate,
    tz: &Tz,
    pick: F,
    never: CalculationError,
) -> Result<MoonEvent<Tz>, CalculationError>
where
    Tz: TimeZone,
    F: Fn(RiseSet) -> Option<MoonEvent<Utc>>,
{
    let Some(event) = pick(riseset(observer, date)?) else {
        debug!("{never} ({date})");
        return Err(never);
    };

    let event = event.with_timezone(tz);
    let found_date = event.time.date_naive();
    if found_date == date {
        return Ok(event);
    }

    let retry = if found_date > date { date.pred_opt() } else { date.succ_opt() };
    let retry = retry.ok_or(CalculationError::TimeConversionError)?;
    trace!("moon event for {date} fell on {found_date}, retrying with {retry}");

    match pick(riseset(observer, retry)?) {
        Some(event) if event.time.with_timezone(tz).date_naive() == date => Ok(event.with_timezone(tz)),
        _ => Err(CalculationError::EventNotOnDate),
    }
}

/// Moonrise, moonset and position of the moon at one location.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Timelike, Utc};
/// use solunar::{LunarCalculator, Observer};
///
/// let london = Observer::new(51.50853, -0.12574, 0.0).unwrap();
/// let calc = LunarCalculator::new(london);
/// let date = NaiveDate::from_ymd_opt(2022, 11, 30).unwrap();
///
/// let rise = calc.get_moonrise(date, &Utc).unwrap();
/// assert_eq!((rise.time.hour(), rise.time.minute()), (13, 17));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LunarCalculator {
    observer: Observer,
}

impl LunarCalculator {
    pub fn new(observer: Observer) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    /// Both events found on the UTC day `date`, without any timezone handling.
    pub fn get_riseset(&self, date: NaiveDate) -> Result<RiseSet, CalculationError> {
        riseset(&self.observer, date)
    }

    /// Moonrise on `date` in `tz`.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::MoonNeverRises`] if the moon does not rise on the UTC day
    /// - [`CalculationError::EventNotOnDate`] if no rise falls on the local date
    pub fn get_moonrise<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<MoonEvent<Tz>, CalculationError> {
        event_on_local_date(&self.observer, date, tz, |rs| rs.rise, CalculationError::MoonNeverRises)
    }

    /// Moonset on `date` in `tz`.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::MoonNeverSets`] if the moon does not set on the UTC day
    /// - [`CalculationError::EventNotOnDate`] if no set falls on the local date
    pub fn get_moonset<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<MoonEvent<Tz>, CalculationError> {
        event_on_local_date(&self.observer, date, tz, |rs| rs.set, CalculationError::MoonNeverSets)
    }

    pub fn get_azimuth<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> f64 {
        lunar::moon_azimuth(&self.observer, instant)
    }

    pub fn get_elevation<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> f64 {
        lunar::moon_elevation(&self.observer, instant)
    }

    pub fn get_zenith<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> f64 {
        lunar::moon_zenith(&self.observer, instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearer_candidate_on_the_same_side_wins() {
        assert!(should_replace(-7200, -600, None));
        assert!(!should_replace(-600, -7200, None));
    }

    #[test]
    fn straddling_candidate_needs_the_opposite_event() {
        // current before the hour, new one after: only replaced when the opposite
        // event is on the same side as the current one
        assert!(!should_replace(-600, 600, None));
        assert!(should_replace(-600, 600, Some(-60)));
        assert!(!should_replace(-600, 600, Some(60)));
        assert!(!should_replace(-600, 600, Some(0)));
    }
}
