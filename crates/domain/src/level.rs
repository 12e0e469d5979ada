use std::{fmt, slice::Iter};

use crate::{Property, RPE, Time};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Target RPE band for working sets.
    #[must_use]
    pub fn rpe_band(self) -> Bounds<RPE> {
        match self {
            ExperienceLevel::Beginner => Bounds {
                min: RPE::SEVEN,
                max: RPE::EIGHT,
            },
            ExperienceLevel::Intermediate => Bounds {
                min: RPE::SEVEN,
                max: RPE::NINE,
            },
            ExperienceLevel::Advanced => Bounds {
                min: RPE::EIGHT,
                max: RPE::TEN,
            },
        }
    }

    #[must_use]
    pub fn program_template(self) -> &'static ProgramLevelTemplate {
        match self {
            ExperienceLevel::Beginner => &BEGINNER_PROGRAM,
            ExperienceLevel::Intermediate => &INTERMEDIATE_PROGRAM,
            ExperienceLevel::Advanced => &ADVANCED_PROGRAM,
        }
    }

    #[must_use]
    pub fn training_parameters(self) -> &'static TrainingParameters {
        match self {
            ExperienceLevel::Beginner => &BEGINNER_PARAMETERS,
            ExperienceLevel::Intermediate => &INTERMEDIATE_PARAMETERS,
            ExperienceLevel::Advanced => &ADVANCED_PARAMETERS,
        }
    }
}

impl Property for ExperienceLevel {
    fn iter() -> Iter<'static, ExperienceLevel> {
        static LEVELS: [ExperienceLevel; 3] = [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }

    fn key(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<&str> for ExperienceLevel {
    type Error = ExperienceLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(ExperienceLevelError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExperienceLevelError {
    #[error("Unknown experience level \"{0}\"")]
    Unknown(String),
}

/// Inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: T, max: T) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::Inverted);
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BoundsError {
    #[error("Minimum must not exceed maximum")]
    Inverted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    weekly_volume_increase: f32,
    deload_frequency: u32,
}

impl Progression {
    pub fn new(
        weekly_volume_increase: f32,
        deload_frequency: u32,
    ) -> Result<Self, ProgressionError> {
        if deload_frequency == 0 {
            return Err(ProgressionError::NoDeloadFrequency);
        }
        if !(0.0..=100.0).contains(&weekly_volume_increase) {
            return Err(ProgressionError::VolumeIncreaseOutOfRange);
        }
        Ok(Self {
            weekly_volume_increase,
            deload_frequency,
        })
    }

    /// Weekly volume increase in percent.
    #[must_use]
    pub fn weekly_volume_increase(&self) -> f32 {
        self.weekly_volume_increase
    }

    #[must_use]
    pub fn deload_frequency(&self) -> u32 {
        self.deload_frequency
    }

    #[must_use]
    pub fn is_deload_week(&self, week_number: u32) -> bool {
        week_number % self.deload_frequency == 0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProgressionError {
    #[error("Deload frequency must be at least one week")]
    NoDeloadFrequency,
    #[error("Weekly volume increase must be in the range 0 to 100 %")]
    VolumeIncreaseOutOfRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramLevelTemplate {
    pub days_per_week: u32,
    pub exercises_per_session: u32,
    pub rest_between_exercises: Time,
    pub total_weeks: u32,
    pub progression: Progression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingParameters {
    pub sets_per_exercise: Bounds<u32>,
    pub reps_per_set: Bounds<u32>,
    /// Percentage of the estimated one-rep max.
    pub intensity: Bounds<u32>,
    pub rest_between_sets: Time,
}

static BEGINNER_PROGRAM: ProgramLevelTemplate = ProgramLevelTemplate {
    days_per_week: 3,
    exercises_per_session: 6,
    rest_between_exercises: Time::from_secs(90),
    total_weeks: 8,
    progression: Progression {
        weekly_volume_increase: 5.0,
        deload_frequency: 4,
    },
};

static INTERMEDIATE_PROGRAM: ProgramLevelTemplate = ProgramLevelTemplate {
    days_per_week: 4,
    exercises_per_session: 8,
    rest_between_exercises: Time::from_secs(60),
    total_weeks: 12,
    progression: Progression {
        weekly_volume_increase: 7.5,
        deload_frequency: 6,
    },
};

static ADVANCED_PROGRAM: ProgramLevelTemplate = ProgramLevelTemplate {
    days_per_week: 5,
    exercises_per_session: 10,
    rest_between_exercises: Time::from_secs(45),
    total_weeks: 16,
    progression: Progression {
        weekly_volume_increase: 10.0,
        deload_frequency: 8,
    },
};

static BEGINNER_PARAMETERS: TrainingParameters = TrainingParameters {
    sets_per_exercise: Bounds { min: 2, max: 3 },
    reps_per_set: Bounds { min: 10, max: 15 },
    intensity: Bounds { min: 60, max: 70 },
    rest_between_sets: Time::from_secs(90),
};

static INTERMEDIATE_PARAMETERS: TrainingParameters = TrainingParameters {
    sets_per_exercise: Bounds { min: 3, max: 4 },
    reps_per_set: Bounds { min: 8, max: 12 },
    intensity: Bounds { min: 70, max: 80 },
    rest_between_sets: Time::from_secs(60),
};

static ADVANCED_PARAMETERS: TrainingParameters = TrainingParameters {
    sets_per_exercise: Bounds { min: 4, max: 5 },
    reps_per_set: Bounds { min: 6, max: 12 },
    intensity: Bounds { min: 75, max: 85 },
    rest_between_sets: Time::from_secs(45),
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("beginner", Ok(ExperienceLevel::Beginner))]
    #[case("Intermediate", Ok(ExperienceLevel::Intermediate))]
    #[case(" advanced ", Ok(ExperienceLevel::Advanced))]
    #[case("expert", Err(ExperienceLevelError::Unknown("expert".to_string())))]
    fn test_experience_level_try_from(
        #[case] value: &str,
        #[case] expected: Result<ExperienceLevel, ExperienceLevelError>,
    ) {
        assert_eq!(ExperienceLevel::try_from(value), expected);
    }

    #[rstest]
    #[case(ExperienceLevel::Beginner, RPE::SEVEN, RPE::EIGHT)]
    #[case(ExperienceLevel::Intermediate, RPE::SEVEN, RPE::NINE)]
    #[case(ExperienceLevel::Advanced, RPE::EIGHT, RPE::TEN)]
    fn test_experience_level_rpe_band(
        #[case] level: ExperienceLevel,
        #[case] min: RPE,
        #[case] max: RPE,
    ) {
        assert_eq!(level.rpe_band(), Bounds { min, max });
    }

    #[test]
    fn test_level_tables_are_consistent() {
        for level in ExperienceLevel::iter() {
            let template = level.program_template();
            assert!(template.progression.deload_frequency() >= 1);
            assert!(template.total_weeks >= template.progression.deload_frequency());

            let parameters = level.training_parameters();
            for bounds in [
                parameters.sets_per_exercise,
                parameters.reps_per_set,
                parameters.intensity,
            ] {
                assert!(bounds.min <= bounds.max);
            }
        }
    }

    #[rstest]
    #[case(1, 2, Ok(Bounds { min: 1, max: 2 }))]
    #[case(3, 3, Ok(Bounds { min: 3, max: 3 }))]
    #[case(4, 3, Err(BoundsError::Inverted))]
    fn test_bounds_new(
        #[case] min: u32,
        #[case] max: u32,
        #[case] expected: Result<Bounds<u32>, BoundsError>,
    ) {
        assert_eq!(Bounds::new(min, max), expected);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds { min: 8, max: 12 };
        assert!(bounds.contains(8));
        assert!(bounds.contains(12));
        assert!(!bounds.contains(7));
        assert!(!bounds.contains(13));
    }

    #[rstest]
    #[case(5.0, 0, Err(ProgressionError::NoDeloadFrequency))]
    #[case(-1.0, 4, Err(ProgressionError::VolumeIncreaseOutOfRange))]
    fn test_progression_new_invalid(
        #[case] increase: f32,
        #[case] frequency: u32,
        #[case] expected: Result<Progression, ProgressionError>,
    ) {
        assert_eq!(Progression::new(increase, frequency), expected);
    }

    #[rstest]
    #[case(1, false)]
    #[case(3, false)]
    #[case(4, true)]
    #[case(8, true)]
    #[case(9, false)]
    fn test_progression_is_deload_week(#[case] week: u32, #[case] expected: bool) {
        assert_eq!(
            Progression::new(5.0, 4).unwrap().is_deload_week(week),
            expected
        );
    }

    #[test]
    fn test_progression_every_week_deload() {
        let progression = Progression::new(0.0, 1).unwrap();
        assert!((1..=5).all(|week| progression.is_deload_week(week)));
    }
}
