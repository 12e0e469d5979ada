use std::{collections::BTreeSet, sync::LazyLock};

use crate::{Bounds, Equipment, ExperienceLevel, Time, TrainingSplit};

/// Fixed program with named workout days.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramTemplate {
    pub name: String,
    pub description: String,
    pub experience_level: ExperienceLevel,
    pub split: TrainingSplit,
    pub days_per_week: u32,
    pub workouts: Vec<WorkoutDay>,
    pub required_equipment: BTreeSet<Equipment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDay {
    pub name: String,
    pub exercises: Vec<PlannedExercise>,
    pub notes: Option<String>,
}

impl WorkoutDay {
    pub fn new(name: &str, exercises: Vec<PlannedExercise>) -> Result<Self, PlanError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlanError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            exercises,
            notes: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: Bounds<u32>,
    pub rest: Bounds<Time>,
    pub notes: Option<String>,
}

impl PlannedExercise {
    pub fn new(
        name: &str,
        sets: u32,
        reps: (u32, u32),
        rest: (Time, Time),
        notes: Option<String>,
    ) -> Result<Self, PlanError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlanError::EmptyName);
        }
        if sets == 0 {
            return Err(PlanError::NoSets);
        }
        let reps = Bounds::new(reps.0, reps.1).map_err(|_| PlanError::InvertedReps)?;
        let rest = Bounds::new(rest.0, rest.1).map_err(|_| PlanError::InvertedRest)?;

        Ok(Self {
            name: name.to_string(),
            sets,
            reps,
            rest,
            notes: notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Exercise must have at least one set")]
    NoSets,
    #[error("Minimum reps must not exceed maximum reps")]
    InvertedReps,
    #[error("Minimum rest must not exceed maximum rest")]
    InvertedRest,
}

/// Templates matching all given criteria.
///
/// Level and split must match exactly, and all equipment a template requires
/// must be available. Criteria that are `None` match every template.
#[must_use]
pub fn program_templates(
    experience_level: Option<ExperienceLevel>,
    split: Option<TrainingSplit>,
    equipment: Option<&BTreeSet<Equipment>>,
) -> Vec<&'static ProgramTemplate> {
    PROGRAM_TEMPLATES
        .iter()
        .filter(|t| experience_level.is_none_or(|level| t.experience_level == level))
        .filter(|t| split.is_none_or(|split| t.split == split))
        .filter(|t| equipment.is_none_or(|equipment| t.required_equipment.is_subset(equipment)))
        .collect()
}

/// Workouts of the best matching template, or none if no template fits.
#[must_use]
pub fn custom_program(
    experience_level: ExperienceLevel,
    split: TrainingSplit,
    equipment: &BTreeSet<Equipment>,
) -> Vec<WorkoutDay> {
    program_templates(Some(experience_level), Some(split), Some(equipment))
        .first()
        .map(|t| t.workouts.clone())
        .unwrap_or_default()
}

fn planned(name: &str, sets: u32, reps: (u32, u32), rest: (u32, u32)) -> PlannedExercise {
    PlannedExercise {
        name: name.to_string(),
        sets,
        reps: Bounds {
            min: reps.0,
            max: reps.1,
        },
        rest: Bounds {
            min: Time::from_secs(rest.0),
            max: Time::from_secs(rest.1),
        },
        notes: None,
    }
}

fn day(name: &str, exercises: Vec<PlannedExercise>) -> WorkoutDay {
    WorkoutDay {
        name: name.to_string(),
        exercises,
        notes: None,
    }
}

static PROGRAM_TEMPLATES: LazyLock<Vec<ProgramTemplate>> = LazyLock::new(|| {
    vec![
        ProgramTemplate {
            name: "Beginner Full Body".to_string(),
            description: "A 3-day full body program perfect for beginners focusing on compound movements"
                .to_string(),
            experience_level: ExperienceLevel::Beginner,
            split: TrainingSplit::FullBody,
            days_per_week: 3,
            workouts: vec![
                day(
                    "Full Body A",
                    vec![
                        PlannedExercise {
                            notes: Some("Focus on form and controlled descent".to_string()),
                            ..planned("Barbell Squat", 3, (8, 12), (120, 180))
                        },
                        planned("Bench Press", 3, (8, 12), (120, 180)),
                        planned("Bent Over Row", 3, (8, 12), (120, 180)),
                    ],
                ),
                day(
                    "Full Body B",
                    vec![
                        planned("Romanian Deadlift", 3, (8, 12), (120, 180)),
                        planned("Overhead Press", 3, (8, 12), (120, 180)),
                        planned("Lat Pulldown", 3, (8, 12), (120, 180)),
                    ],
                ),
                day(
                    "Full Body C",
                    vec![
                        planned("Leg Press", 3, (10, 15), (120, 180)),
                        planned("Dumbbell Bench Press", 3, (8, 12), (120, 180)),
                        planned("Cable Row", 3, (10, 15), (120, 180)),
                    ],
                ),
            ],
            required_equipment: BTreeSet::from([
                Equipment::BARBELL,
                Equipment::BENCH,
                Equipment::RACK,
            ]),
        },
        ProgramTemplate {
            name: "Intermediate Push/Pull/Legs".to_string(),
            description: "A 6-day PPL split for intermediate lifters focusing on hypertrophy"
                .to_string(),
            experience_level: ExperienceLevel::Intermediate,
            split: TrainingSplit::PushPullLegs,
            days_per_week: 6,
            workouts: vec![
                day(
                    "Push A",
                    vec![
                        planned("Bench Press", 4, (6, 10), (150, 210)),
                        planned("Overhead Press", 3, (8, 12), (120, 180)),
                        planned("Incline Dumbbell Press", 3, (8, 12), (120, 180)),
                    ],
                ),
                day(
                    "Pull A",
                    vec![
                        planned("Barbell Row", 4, (6, 10), (150, 210)),
                        planned("Pull-ups", 3, (8, 12), (120, 180)),
                        planned("Face Pull", 3, (12, 15), (90, 120)),
                    ],
                ),
            ],
            required_equipment: BTreeSet::from([
                Equipment::BARBELL,
                Equipment::DUMBBELL,
                Equipment::CABLE,
                Equipment::MACHINE,
            ]),
        },
    ]
});
