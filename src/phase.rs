use core::fmt;

use chrono::NaiveDate;
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{floored_mod, polynomial};
use crate::time::{julian_day, Calendar, J2000};

/// Length of the phase cycle in phase units
const LUNATION: f64 = 28.0;

/// Phase of the moon as a value in [0, 28).
///
/// 0 is new moon, 7 first quarter, 14 full moon and 21 last quarter.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Phase(f64);

/// Named quarter of the lunation a [`Phase`] falls in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhaseName {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl Phase {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn name(self) -> PhaseName {
        match self.0 {
            p if p < 7.0 => PhaseName::NewMoon,
            p if p < 14.0 => PhaseName::FirstQuarter,
            p if p < 21.0 => PhaseName::FullMoon,
            _ => PhaseName::LastQuarter,
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhaseName::NewMoon => "New moon",
            PhaseName::FirstQuarter => "First quarter",
            PhaseName::FullMoon => "Full moon",
            PhaseName::LastQuarter => "Last quarter",
        })
    }
}

/// Phase of the moon at 00:00 UTC on `date`.
///
/// The elongation of the moon is taken from a four-term series and truncated to whole
/// degrees, so the result moves in steps of 28/360.
///
/// ```
/// use chrono::NaiveDate;
/// use solunar::phase;
///
/// let p = phase(NaiveDate::from_ymd_opt(2015, 12, 1).unwrap());
/// assert!((p.value() - 19.477_888).abs() < 1e-5);
/// ```
pub fn phase(date: NaiveDate) -> Phase {
    let jd = julian_day(date, Calendar::Gregorian);
    let dt = (jd - 2_382_148.0).powi(2) / (41_048_480.0 * 86_400.0);
    let t = (jd + dt - J2000) / 36_525.0;

    let d = floored_mod(polynomial(&[297.85, 445_267.111_5, -0.001_630_0, 1.0 / 545_868.0], t), 360.0).to_radians();
    let m = floored_mod(357.53 + 35_999.050_3 * t, 360.0).to_radians();
    let m1 = floored_mod(polynomial(&[134.96, 477_198.867_6, 0.008_997_0, 1.0 / 69_699.0], t), 360.0).to_radians();

    let elongation = d.to_degrees() + 6.29 * m1.sin() - 2.10 * m.sin() + 1.27 * (2.0 * d - m1).sin() + 0.66 * (2.0 * d).sin();
    let elongation = floored_mod(elongation, 360.0).trunc();

    Phase(floored_mod((elongation + 6.43) / 360.0 * LUNATION, LUNATION))
}
