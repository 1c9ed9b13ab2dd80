//! Periodic series for the position of the moon.
//!
//! Each term contributes `coefficient × (T if scaled) × sin|cos(Σ multiplier × argument)`,
//! with the arguments taken in the order of [`Argument`]. The `v` series gives the
//! declination, `u` the distance and `w` the right ascension.

/// Fundamental arguments, in the column order of the multipliers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Argument {
    /// Mean anomaly of the moon
    Gm = 0,
    /// Argument of latitude of the moon
    Fm = 1,
    /// Mean elongation of the moon from the sun
    D = 2,
    /// Longitude of the ascending node of the moon
    Om = 3,
    /// Mean longitude of the sun
    Ls = 4,
    /// Mean anomaly of the sun
    Gs = 5,
    /// Mean longitude of Venus
    L2 = 6,
}

pub(crate) const ARGUMENT_COUNT: usize = 7;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Trig {
    Sin,
    Cos,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct SeriesTerm {
    pub coefficient: f64,
    /// Multiply by the century factor T
    pub scaled: bool,
    pub trig: Trig,
    pub multipliers: [i8; ARGUMENT_COUNT],
}

impl SeriesTerm {
    const fn sin(coefficient: f64, multipliers: [i8; ARGUMENT_COUNT]) -> Self {
        Self { coefficient, scaled: false, trig: Trig::Sin, multipliers }
    }

    const fn sin_t(coefficient: f64, multipliers: [i8; ARGUMENT_COUNT]) -> Self {
        Self { coefficient, scaled: true, trig: Trig::Sin, multipliers }
    }

    const fn cos(coefficient: f64, multipliers: [i8; ARGUMENT_COUNT]) -> Self {
        Self { coefficient, scaled: false, trig: Trig::Cos, multipliers }
    }

    const fn cos_t(coefficient: f64, multipliers: [i8; ARGUMENT_COUNT]) -> Self {
        Self { coefficient, scaled: true, trig: Trig::Cos, multipliers }
    }
}

pub(crate) const V_TERMS: [SeriesTerm; 64] = [
    SeriesTerm::sin(0.39558, [0, 1, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(0.08200, [0, 1, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(0.03257, [1, -1, 0, -1, 0, 0, 0]),
    SeriesTerm::sin(0.01092, [1, 1, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00666, [1, -1, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00644, [1, 1, -2, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00331, [0, 1, -2, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00304, [0, 1, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00240, [1, -1, -2, -1, 0, 0, 0]),
    SeriesTerm::sin(0.00226, [1, 1, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00108, [1, 1, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00079, [0, 1, 0, -1, 0, 0, 0]),
    SeriesTerm::sin(0.00078, [0, 1, 2, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00066, [0, 1, 0, 1, 0, -1, 0]),
    SeriesTerm::sin(-0.00062, [0, 1, 0, 1, 0, 1, 0]),
    SeriesTerm::sin(-0.00050, [1, -1, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00045, [2, 1, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00031, [2, 1, -2, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00027, [1, 1, -2, 1, 0, 1, 0]),
    SeriesTerm::sin(-0.00024, [0, 1, -2, 1, 0, 1, 0]),
    SeriesTerm::sin_t(-0.00021, [0, 1, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00018, [0, 1, -1, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00016, [0, 1, 2, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00016, [1, -1, 0, -1, 0, -1, 0]),
    SeriesTerm::sin(-0.00016, [2, -1, 0, -1, 0, 0, 0]),
    SeriesTerm::sin(-0.00015, [0, 1, -2, 0, 0, 1, 0]),
    SeriesTerm::sin(-0.00012, [1, -1, -2, -1, 0, 1, 0]),
    SeriesTerm::sin(-0.00011, [1, -1, 0, -1, 0, 1, 0]),
    SeriesTerm::sin(0.00009, [1, 1, 0, 1, 0, -1, 0]),
    SeriesTerm::sin(0.00009, [2, 1, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00008, [2, -1, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00008, [1, 1, 2, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00008, [0, 3, -2, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00007, [1, -1, 2, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00007, [2, -1, -2, -1, 0, 0, 0]),
    SeriesTerm::sin(-0.00007, [1, 1, 0, 1, 0, 1, 0]),
    SeriesTerm::sin(-0.00006, [0, 1, 1, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00006, [0, 1, -2, 0, 0, -1, 0]),
    SeriesTerm::sin(0.00006, [1, -1, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00006, [0, 1, 2, 1, 0, -1, 0]),
    SeriesTerm::sin(-0.00005, [1, 1, -2, 0, 0, 1, 0]),
    SeriesTerm::sin(-0.00004, [2, 1, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00004, [1, -3, 0, -1, 0, 0, 0]),
    SeriesTerm::sin(0.00004, [1, -1, 0, 0, 0, -1, 0]),
    SeriesTerm::sin(-0.00003, [1, -1, 0, 0, 0, 1, 0]),
    SeriesTerm::sin(0.00003, [0, 1, -1, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00003, [0, 1, -2, 1, 0, -1, 0]),
    SeriesTerm::sin(-0.00003, [0, 1, -2, -1, 0, 0, 0]),
    SeriesTerm::sin(0.00003, [1, 1, -2, 1, 0, -1, 0]),
    SeriesTerm::sin(0.00003, [0, 1, 0, 0, 0, -1, 0]),
    SeriesTerm::sin(-0.00003, [0, 1, -1, 1, 0, -1, 0]),
    SeriesTerm::sin(-0.00002, [1, -1, -2, 0, 0, 1, 0]),
    SeriesTerm::sin(-0.00002, [0, 1, 0, 0, 0, 1, 0]),
    SeriesTerm::sin(0.00002, [1, 1, -1, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [1, 1, 0, -1, 0, 0, 0]),
    SeriesTerm::sin(0.00002, [3, 1, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [2, -1, -4, -1, 0, 0, 0]),
    SeriesTerm::sin(0.00002, [1, -1, -2, -1, 0, -1, 0]),
    SeriesTerm::sin_t(-0.00002, [1, -1, 0, -1, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [1, -1, -4, -1, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [1, 1, -4, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [2, -1, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00002, [1, 1, 2, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00002, [1, 1, 0, 0, 0, -1, 0]),
];

pub(crate) const U_TERMS: [SeriesTerm; 30] = [
    SeriesTerm::cos(1.0, [0, 0, 0, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.10828, [1, 0, 0, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.01880, [1, 0, -2, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.01479, [0, 0, 2, 0, 0, 0, 0]),
    SeriesTerm::cos(0.00181, [2, 0, -2, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.00147, [2, 0, 0, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.00105, [0, 0, 2, 0, 0, -1, 0]),
    SeriesTerm::cos(-0.00075, [1, 0, -2, 0, 0, 1, 0]),
    SeriesTerm::cos(-0.00067, [1, 0, 0, 0, 0, -1, 0]),
    SeriesTerm::cos(0.00057, [0, 0, 1, 0, 0, 0, 0]),
    SeriesTerm::cos(0.00055, [1, 0, 0, 0, 0, 1, 0]),
    SeriesTerm::cos(-0.00046, [1, 0, 2, 0, 0, 0, 0]),
    SeriesTerm::cos(0.00041, [1, -2, 0, 0, 0, 0, 0]),
    SeriesTerm::cos(0.00024, [0, 0, 0, 0, 0, 1, 0]),
    SeriesTerm::cos(0.00017, [0, 0, 2, 0, 0, 1, 0]),
    SeriesTerm::cos(0.00013, [1, 0, -2, 0, 0, -1, 0]),
    SeriesTerm::cos(-0.00010, [1, 0, -4, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.00009, [0, 0, 1, 0, 0, 1, 0]),
    SeriesTerm::cos(0.00007, [2, 0, -2, 0, 0, 1, 0]),
    SeriesTerm::cos(0.00006, [3, 0, -2, 0, 0, 0, 0]),
    SeriesTerm::cos(0.00006, [0, 2, -2, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.00005, [0, 0, 2, 0, 0, -2, 0]),
    SeriesTerm::cos(-0.00005, [2, 0, -4, 0, 0, 0, 0]),
    SeriesTerm::cos(0.00005, [1, 2, -2, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.00005, [1, 0, -1, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.00004, [1, 0, 2, 0, 0, -1, 0]),
    SeriesTerm::cos(-0.00004, [3, 0, 0, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.00003, [1, 0, -4, 0, 0, 1, 0]),
    SeriesTerm::cos(-0.00003, [2, -2, 0, 0, 0, 0, 0]),
    SeriesTerm::cos(-0.00003, [0, 2, 0, 0, 0, 0, 0]),
];

pub(crate) const W_TERMS: [SeriesTerm; 78] = [
    SeriesTerm::sin(0.10478, [1, 0, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.04105, [0, 2, 0, 2, 0, 0, 0]),
    SeriesTerm::sin(-0.02130, [1, 0, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.01779, [0, 2, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(0.01774, [0, 0, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00987, [0, 0, 2, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00338, [1, -2, 0, -2, 0, 0, 0]),
    SeriesTerm::sin(-0.00309, [0, 0, 0, 0, 0, 1, 0]),
    SeriesTerm::sin(-0.00190, [0, 2, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00144, [1, 0, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00144, [1, -2, 0, -1, 0, 0, 0]),
    SeriesTerm::sin(-0.00113, [1, 2, 0, 2, 0, 0, 0]),
    SeriesTerm::sin(-0.00094, [1, 0, -2, 0, 0, 1, 0]),
    SeriesTerm::sin(-0.00092, [2, 0, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00071, [0, 0, 2, 0, 0, -1, 0]),
    SeriesTerm::sin(0.00070, [2, 0, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00067, [1, 2, -2, 2, 0, 0, 0]),
    SeriesTerm::sin(0.00066, [0, 2, -2, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00066, [0, 0, 2, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00061, [1, 0, 0, 0, 0, -1, 0]),
    SeriesTerm::sin(-0.00058, [0, 0, 1, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00049, [1, 2, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00049, [1, 0, 0, -1, 0, 0, 0]),
    SeriesTerm::sin(-0.00042, [1, 0, 0, 0, 0, 1, 0]),
    SeriesTerm::sin(0.00034, [0, 2, -2, 2, 0, 0, 0]),
    SeriesTerm::sin(-0.00026, [0, 2, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00025, [1, -2, -2, -2, 0, 0, 0]),
    SeriesTerm::sin(0.00024, [1, -2, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00023, [1, 2, -2, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00023, [1, 0, -2, -1, 0, 0, 0]),
    SeriesTerm::sin(0.00019, [1, 0, 2, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00012, [1, 0, -2, 0, 0, -1, 0]),
    SeriesTerm::sin(0.00011, [1, 0, -2, 1, 0, 0, 0]),
    SeriesTerm::sin(0.00011, [1, -2, -2, -1, 0, 0, 0]),
    SeriesTerm::sin(-0.00010, [0, 0, 2, 0, 0, 1, 0]),
    SeriesTerm::sin(0.00009, [1, 0, -1, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00008, [0, 0, 1, 0, 0, 1, 0]),
    SeriesTerm::sin(-0.00008, [0, 2, 2, 2, 0, 0, 0]),
    SeriesTerm::sin(-0.00008, [0, 0, 0, 2, 0, 0, 0]),
    SeriesTerm::sin(-0.00007, [0, 2, 0, 2, 0, -1, 0]),
    SeriesTerm::sin(0.00006, [0, 2, 0, 2, 0, 1, 0]),
    SeriesTerm::sin(-0.00005, [1, 2, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00005, [3, 0, 0, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00005, [1, 0, 0, 0, 16, 0, -18]),
    SeriesTerm::sin(-0.00005, [2, 2, 0, 2, 0, 0, 0]),
    SeriesTerm::sin_t(0.00004, [0, 2, 0, 2, 0, 0, 0]),
    SeriesTerm::cos(0.00004, [1, 0, 0, 0, 16, 0, -18]),
    SeriesTerm::sin(-0.00004, [1, -2, 2, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00004, [1, 0, -4, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00004, [3, 0, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00004, [0, 2, 2, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00004, [0, 0, 2, -1, 0, 0, 0]),
    SeriesTerm::sin(-0.00003, [0, 0, 0, 0, 0, 2, 0]),
    SeriesTerm::sin(-0.00003, [1, 0, -2, 0, 0, 2, 0]),
    SeriesTerm::sin(0.00003, [0, 2, -2, 1, 0, 1, 0]),
    SeriesTerm::sin(-0.00003, [0, 0, 2, 1, 0, -1, 0]),
    SeriesTerm::sin(0.00003, [2, 2, -2, 2, 0, 0, 0]),
    SeriesTerm::sin(0.00003, [0, 0, 2, 0, 0, -2, 0]),
    SeriesTerm::sin(-0.00003, [2, 0, -2, 0, 0, 1, 0]),
    SeriesTerm::sin(0.00003, [1, 2, -2, 2, 0, 1, 0]),
    SeriesTerm::sin(-0.00003, [2, 0, -4, 0, 0, 0, 0]),
    SeriesTerm::sin(0.00002, [0, 2, -2, 2, 0, 1, 0]),
    SeriesTerm::sin(-0.00002, [2, 2, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [2, 0, 0, -1, 0, 0, 0]),
    SeriesTerm::cos_t(0.00002, [1, 0, 0, 0, 16, 0, -18]),
    SeriesTerm::sin(0.00002, [0, 0, 4, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [0, 2, -1, 2, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [1, 2, -2, 0, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [2, 0, 0, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [2, -2, 0, -1, 0, 0, 0]),
    SeriesTerm::sin(0.00002, [1, 0, 2, 0, 0, -1, 0]),
    SeriesTerm::sin(0.00002, [2, 0, 0, 0, 0, -1, 0]),
    SeriesTerm::sin(-0.00002, [1, 0, -4, 0, 0, 1, 0]),
    SeriesTerm::sin_t(0.00002, [1, 0, 0, 0, 16, 0, -18]),
    SeriesTerm::sin(-0.00002, [1, -2, 0, -2, 0, -1, 0]),
    SeriesTerm::sin(0.00002, [2, -2, 0, -2, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [1, 0, 2, 1, 0, 0, 0]),
    SeriesTerm::sin(-0.00002, [1, -2, 2, -1, 0, 0, 0]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_have_expected_lengths() {
        assert_eq!(V_TERMS.len(), 64);
        assert_eq!(U_TERMS.len(), 30);
        assert_eq!(W_TERMS.len(), 78);
    }

    #[test]
    fn leading_terms() {
        assert_eq!(V_TERMS[0], SeriesTerm::sin(0.39558, [0, 1, 0, 1, 0, 0, 0]));
        assert_eq!(U_TERMS[0].coefficient, 1.0);
        assert_eq!(U_TERMS[0].trig, Trig::Cos);
        assert_eq!(W_TERMS[0], SeriesTerm::sin(0.10478, [1, 0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn scaled_terms_are_rare() {
        let scaled = V_TERMS.iter().chain(U_TERMS.iter()).chain(W_TERMS.iter()).filter(|t| t.scaled).count();
        assert_eq!(scaled, 5);
        assert_eq!(V_TERMS[20].multipliers[Argument::Om as usize], 1);
    }
}
