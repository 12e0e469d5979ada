use std::{fmt, slice::Iter};

use log::debug;

use crate::{ExperienceLevel, MuscleGroup, Property};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum TrainingSplit {
    FullBody,
    UpperLower,
    PushPullLegs,
    BodyPart,
}

impl Property for TrainingSplit {
    fn iter() -> Iter<'static, TrainingSplit> {
        static SPLITS: [TrainingSplit; 4] = [
            TrainingSplit::FullBody,
            TrainingSplit::UpperLower,
            TrainingSplit::PushPullLegs,
            TrainingSplit::BodyPart,
        ];
        SPLITS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TrainingSplit::FullBody => "Full Body",
            TrainingSplit::UpperLower => "Upper/Lower Split",
            TrainingSplit::PushPullLegs => "Push/Pull/Legs",
            TrainingSplit::BodyPart => "Body Part Split",
        }
    }

    fn key(self) -> &'static str {
        match self {
            TrainingSplit::FullBody => "fullBody",
            TrainingSplit::UpperLower => "upperLower",
            TrainingSplit::PushPullLegs => "pushPullLegs",
            TrainingSplit::BodyPart => "bodyPart",
        }
    }
}

impl fmt::Display for TrainingSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<&str> for TrainingSplit {
    type Error = TrainingSplitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TrainingSplit::iter()
            .find(|split| split.key().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| TrainingSplitError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TrainingSplitError {
    #[error("Unknown training split \"{0}\"")]
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub struct TrainingSplitTemplate {
    pub split: TrainingSplit,
    pub name: &'static str,
    pub days: &'static [DaySplit],
    pub recommended_levels: &'static [ExperienceLevel],
    /// Training days per week the split requires.
    pub frequency: u32,
}

impl TrainingSplitTemplate {
    #[must_use]
    pub fn is_recommended_for(&self, level: ExperienceLevel) -> bool {
        self.recommended_levels.contains(&level)
    }
}

#[derive(Debug, PartialEq)]
pub struct DaySplit {
    pub focus: &'static [MuscleGroup],
    /// Share of the day's exercise slots per muscle group, in slot order.
    pub distribution: &'static [(MuscleGroup, f64)],
}

pub static FULL_BODY: TrainingSplitTemplate = TrainingSplitTemplate {
    split: TrainingSplit::FullBody,
    name: "Full Body",
    days: &[DaySplit {
        focus: &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Core,
        ],
        distribution: &[
            (MuscleGroup::Chest, 0.2),
            (MuscleGroup::Back, 0.2),
            (MuscleGroup::Legs, 0.3),
            (MuscleGroup::Shoulders, 0.1),
            (MuscleGroup::Arms, 0.1),
            (MuscleGroup::Core, 0.1),
        ],
    }],
    recommended_levels: &[ExperienceLevel::Beginner],
    frequency: 3,
};

pub static UPPER_LOWER: TrainingSplitTemplate = TrainingSplitTemplate {
    split: TrainingSplit::UpperLower,
    name: "Upper/Lower Split",
    days: &[
        DaySplit {
            focus: &[
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Shoulders,
                MuscleGroup::Arms,
            ],
            distribution: &[
                (MuscleGroup::Chest, 0.3),
                (MuscleGroup::Back, 0.3),
                (MuscleGroup::Shoulders, 0.2),
                (MuscleGroup::Arms, 0.2),
            ],
        },
        DaySplit {
            focus: &[MuscleGroup::Legs, MuscleGroup::Core],
            distribution: &[(MuscleGroup::Legs, 0.8), (MuscleGroup::Core, 0.2)],
        },
    ],
    recommended_levels: &[ExperienceLevel::Beginner, ExperienceLevel::Intermediate],
    frequency: 4,
};

pub static PUSH_PULL_LEGS: TrainingSplitTemplate = TrainingSplitTemplate {
    split: TrainingSplit::PushPullLegs,
    name: "Push/Pull/Legs",
    days: &[
        DaySplit {
            focus: &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Arms],
            distribution: &[
                (MuscleGroup::Chest, 0.4),
                (MuscleGroup::Shoulders, 0.3),
                (MuscleGroup::Arms, 0.3),
            ],
        },
        DaySplit {
            focus: &[MuscleGroup::Back, MuscleGroup::Arms],
            distribution: &[(MuscleGroup::Back, 0.7), (MuscleGroup::Arms, 0.3)],
        },
        DaySplit {
            focus: &[MuscleGroup::Legs, MuscleGroup::Core],
            distribution: &[(MuscleGroup::Legs, 0.8), (MuscleGroup::Core, 0.2)],
        },
    ],
    recommended_levels: &[ExperienceLevel::Intermediate, ExperienceLevel::Advanced],
    frequency: 6,
};

/// Split templates in declaration order.
pub static SPLIT_TEMPLATES: [&TrainingSplitTemplate; 3] =
    [&FULL_BODY, &UPPER_LOWER, &PUSH_PULL_LEGS];

/// Choose the split template for a lifter.
///
/// Only templates recommended for `level` whose frequency fits into
/// `days_available` are eligible. Advanced lifters get the eligible template
/// with the highest frequency (the first one on ties), everybody else the
/// first eligible one. Without any eligible template the full body split is
/// used.
#[must_use]
pub fn select_split(level: ExperienceLevel, days_available: u32) -> &'static TrainingSplitTemplate {
    select_split_from(&SPLIT_TEMPLATES, level, days_available)
}

/// Use the preferred split if it has a template that fits into
/// `days_available`, otherwise choose one with [`select_split`].
#[must_use]
pub fn select_preferred_split(
    preferred: Option<TrainingSplit>,
    level: ExperienceLevel,
    days_available: u32,
) -> &'static TrainingSplitTemplate {
    preferred
        .and_then(|split| {
            let template = SPLIT_TEMPLATES
                .iter()
                .copied()
                .find(|t| t.split == split && t.frequency <= days_available);
            if template.is_none() {
                debug!("preferred split {split} not possible with {days_available} days");
            }
            template
        })
        .unwrap_or_else(|| select_split(level, days_available))
}

pub(crate) fn select_split_from(
    templates: &[&'static TrainingSplitTemplate],
    level: ExperienceLevel,
    days_available: u32,
) -> &'static TrainingSplitTemplate {
    let mut eligible = templates
        .iter()
        .copied()
        .filter(|t| t.is_recommended_for(level) && t.frequency <= days_available);

    let selected = if level == ExperienceLevel::Advanced {
        // TODO: revisit whether non-advanced lifters should also prefer denser splits
        eligible.reduce(|best, t| if t.frequency > best.frequency { t } else { best })
    } else {
        eligible.next()
    };

    selected.unwrap_or_else(|| {
        debug!("no split eligible for {level} with {days_available} days, using full body");
        &FULL_BODY
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("fullBody", Ok(TrainingSplit::FullBody))]
    #[case("pushpulllegs", Ok(TrainingSplit::PushPullLegs))]
    #[case("bodyPart", Ok(TrainingSplit::BodyPart))]
    #[case("bro", Err(TrainingSplitError::Unknown("bro".to_string())))]
    fn test_training_split_try_from(
        #[case] value: &str,
        #[case] expected: Result<TrainingSplit, TrainingSplitError>,
    ) {
        assert_eq!(TrainingSplit::try_from(value), expected);
    }

    #[test]
    fn test_split_templates_distribution() {
        for template in SPLIT_TEMPLATES {
            assert!(!template.days.is_empty());
            for day in template.days {
                let total = day.distribution.iter().map(|(_, s)| s).sum::<f64>();
                assert!((total - 1.0).abs() < 1e-9, "{}: {total}", template.name);
                for (muscle_group, _) in day.distribution {
                    assert!(day.focus.contains(muscle_group));
                }
            }
        }
    }

    #[rstest]
    #[case::beginner_three_days(ExperienceLevel::Beginner, 3, TrainingSplit::FullBody)]
    #[case::beginner_four_days(ExperienceLevel::Beginner, 4, TrainingSplit::FullBody)]
    #[case::intermediate_three_days(ExperienceLevel::Intermediate, 3, TrainingSplit::FullBody)]
    #[case::intermediate_four_days(ExperienceLevel::Intermediate, 4, TrainingSplit::UpperLower)]
    #[case::intermediate_six_days(ExperienceLevel::Intermediate, 6, TrainingSplit::UpperLower)]
    #[case::advanced_five_days(ExperienceLevel::Advanced, 5, TrainingSplit::FullBody)]
    #[case::advanced_six_days(ExperienceLevel::Advanced, 6, TrainingSplit::PushPullLegs)]
    #[case::too_few_days(ExperienceLevel::Beginner, 1, TrainingSplit::FullBody)]
    fn test_select_split(
        #[case] level: ExperienceLevel,
        #[case] days_available: u32,
        #[case] expected: TrainingSplit,
    ) {
        assert_eq!(select_split(level, days_available).split, expected);
    }

    #[test]
    fn test_select_split_frequency_fits_or_falls_back() {
        for level in ExperienceLevel::iter() {
            for days_available in 0..=7 {
                let template = select_split(*level, days_available);
                assert!(
                    template.frequency <= days_available
                        || template.split == TrainingSplit::FullBody
                );
            }
        }
    }

    #[rstest]
    #[case::no_preference(None, ExperienceLevel::Intermediate, 6, TrainingSplit::UpperLower)]
    #[case::preferred(
        Some(TrainingSplit::PushPullLegs),
        ExperienceLevel::Intermediate,
        6,
        TrainingSplit::PushPullLegs
    )]
    #[case::preferred_regardless_of_level(
        Some(TrainingSplit::UpperLower),
        ExperienceLevel::Beginner,
        4,
        TrainingSplit::UpperLower
    )]
    #[case::too_few_days(
        Some(TrainingSplit::PushPullLegs),
        ExperienceLevel::Intermediate,
        4,
        TrainingSplit::UpperLower
    )]
    #[case::without_template(
        Some(TrainingSplit::BodyPart),
        ExperienceLevel::Advanced,
        6,
        TrainingSplit::PushPullLegs
    )]
    fn test_select_preferred_split(
        #[case] preferred: Option<TrainingSplit>,
        #[case] level: ExperienceLevel,
        #[case] days_available: u32,
        #[case] expected: TrainingSplit,
    ) {
        assert_eq!(
            select_preferred_split(preferred, level, days_available).split,
            expected
        );
    }

    static FOUR_DAY_A: TrainingSplitTemplate = TrainingSplitTemplate {
        split: TrainingSplit::UpperLower,
        name: "A",
        days: &[],
        recommended_levels: &[ExperienceLevel::Advanced],
        frequency: 4,
    };

    static FOUR_DAY_B: TrainingSplitTemplate = TrainingSplitTemplate {
        split: TrainingSplit::BodyPart,
        name: "B",
        days: &[],
        recommended_levels: &[ExperienceLevel::Advanced],
        frequency: 4,
    };

    #[test]
    fn test_select_split_advanced_tie_keeps_first() {
        assert_eq!(
            select_split_from(&[&FOUR_DAY_A, &FOUR_DAY_B], ExperienceLevel::Advanced, 5).name,
            "A"
        );
    }
}
