use derive_more::{Display, Into};
use std::fmt;

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Rest duration in seconds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..3600).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }

    pub(crate) const fn from_secs(value: u32) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 3599 s")]
    OutOfRange,
}

/// Load lifted in a set, with a resolution of 0.1.
///
/// Logs may be kept in kg or lb, so the range covers heavy machine work in
/// either unit.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub const MAX: f32 = 9999.9;

    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..10000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }

    /// Round to the weight resolution and clamp into the valid range.
    #[must_use]
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(((value * 10.0).round() / 10.0).clamp(0.0, Self::MAX))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 9999.9")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Rate of perceived exertion, stored in tenths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RPE(u8);

impl RPE {
    pub const ZERO: RPE = RPE(0);
    pub const ONE: RPE = RPE(10);
    pub const FIVE: RPE = RPE(50);
    pub const SIX: RPE = RPE(60);
    pub const SEVEN: RPE = RPE(70);
    pub const EIGHT: RPE = RPE(80);
    pub const NINE: RPE = RPE(90);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0).round() as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }

    /// Nearest multiple of 0.5, clamped into 0 to 10.
    #[must_use]
    pub fn nearest_half(value: f32) -> Self {
        if value.is_nan() {
            return RPE::ZERO;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let halves = (value.clamp(0.0, 10.0) * 2.0).round() as u8;
        Self(halves * 5)
    }

    #[must_use]
    pub fn avg(values: &[RPE]) -> Option<f32> {
        if values.is_empty() {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(values.iter().map(|rpe| f32::from(*rpe)).sum::<f32>() / values.len() as f32)
        }
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 0.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Ok(Reps(0)))]
    #[case(999, Ok(Reps(999)))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] input: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(input), expected);
    }

    #[rstest]
    #[case("12", Ok(Reps(12)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("4.", Err(RepsError::ParseError))]
    #[case("", Err(RepsError::ParseError))]
    fn test_reps_from_str(#[case] input: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(input), expected);
    }

    #[rstest]
    #[case(0, Ok(Time(0)))]
    #[case(180, Ok(Time(180)))]
    #[case(3600, Err(TimeError::OutOfRange))]
    fn test_time_new(#[case] input: u32, #[case] expected: Result<Time, TimeError>) {
        assert_eq!(Time::new(input), expected);
    }

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(102.5, Ok(Weight(102.5)))]
    #[case(999.9, Ok(Weight(999.9)))]
    #[case(1005.0, Ok(Weight(1005.0)))]
    #[case(2500.5, Ok(Weight(2500.5)))]
    #[case(10000.0, Err(WeightError::OutOfRange))]
    #[case(-1.0, Err(WeightError::OutOfRange))]
    #[case(1.23, Err(WeightError::InvalidResolution))]
    fn test_weight_new(#[case] input: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(input), expected);
    }

    #[rstest]
    #[case("2.5", Ok(Weight(2.5)))]
    #[case("8", Ok(Weight(8.0)))]
    #[case("1000", Ok(Weight(1000.0)))]
    #[case("10000", Err(WeightError::OutOfRange))]
    #[case("", Err(WeightError::ParseError))]
    fn test_weight_from_str(#[case] input: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(input), expected);
    }

    #[rstest]
    #[case(104.96, 105.0)]
    #[case(-3.0, 0.0)]
    #[case(1200.0, 1200.0)]
    #[case(12000.0, 9999.9)]
    #[case(f32::NAN, 0.0)]
    fn test_weight_clamped(#[case] input: f32, #[case] expected: f32) {
        assert_approx_eq!(f32::from(Weight::clamped(input)), expected, 1e-4);
    }

    #[rstest]
    #[case(Weight(2.0), "2")]
    #[case(Weight(82.5), "82.5")]
    fn test_weight_display(#[case] input: Weight, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[rstest]
    #[case(0.0, Ok(RPE::ZERO))]
    #[case(7.0, Ok(RPE::SEVEN))]
    #[case(8.5, Ok(RPE(85)))]
    #[case(10.0, Ok(RPE::TEN))]
    #[case(10.5, Err(RPEError::OutOfRange))]
    #[case(7.2, Err(RPEError::InvalidResolution))]
    fn test_rpe_new(#[case] input: f32, #[case] expected: Result<RPE, RPEError>) {
        assert_eq!(RPE::new(input), expected);
    }

    #[rstest]
    #[case("8", Ok(RPE::EIGHT))]
    #[case("9.5", Ok(RPE(95)))]
    #[case("11", Err(RPEError::OutOfRange))]
    #[case("x", Err(RPEError::ParseError))]
    fn test_rpe_from_str(#[case] input: &str, #[case] expected: Result<RPE, RPEError>) {
        assert_eq!(RPE::try_from(input), expected);
    }

    #[rstest]
    #[case(7.0, RPE::SEVEN)]
    #[case(7.666_667, RPE(75))]
    #[case(8.333_333, RPE(85))]
    #[case(8.75, RPE::NINE)]
    #[case(12.0, RPE::TEN)]
    #[case(-1.0, RPE::ZERO)]
    fn test_rpe_nearest_half(#[case] input: f32, #[case] expected: RPE) {
        assert_eq!(RPE::nearest_half(input), expected);
    }

    #[rstest]
    #[case(&[], None)]
    #[case(&[RPE::SIX, RPE::SIX], Some(6.0))]
    #[case(&[RPE::SIX, RPE(65)], Some(6.25))]
    fn test_rpe_avg(#[case] values: &[RPE], #[case] expected: Option<f32>) {
        assert_eq!(RPE::avg(values), expected);
    }

    #[rstest]
    #[case(RPE::EIGHT, "8")]
    #[case(RPE(75), "7.5")]
    fn test_rpe_display(#[case] input: RPE, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }
}
