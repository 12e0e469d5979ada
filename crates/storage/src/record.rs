use chrono::NaiveDate;
use liftplan_domain::{self as domain, Property};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub difficulty: String,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            muscle_groups: value
                .muscle_groups
                .iter()
                .map(|m| m.key().to_string())
                .collect(),
            equipment: value.equipment.iter().map(|e| e.key().to_string()).collect(),
            difficulty: value.difficulty.key().to_string(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ExerciseError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(domain::Exercise::new(
            value.id.into(),
            domain::Name::new(&value.name)?,
            value
                .muscle_groups
                .iter()
                .map(|m| domain::MuscleGroup::try_from(m.as_str()))
                .collect::<Result<_, _>>()?,
            value
                .equipment
                .iter()
                .map(|e| domain::Equipment::try_from(e.as_str()))
                .collect::<Result<_, _>>()?,
            domain::ExperienceLevel::try_from(value.difficulty.as_str())?,
        )?)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidProperty(#[from] domain::PropertyError),
    #[error(transparent)]
    InvalidDifficulty(#[from] domain::ExperienceLevelError),
    #[error(transparent)]
    Invalid(#[from] domain::ExerciseError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub user_id: Uuid,
    pub name: String,
    pub duration_weeks: u32,
    pub days_per_week: u32,
    pub weeks: Vec<WeekPlan>,
}

impl From<&domain::GeneratedProgram> for Program {
    fn from(value: &domain::GeneratedProgram) -> Self {
        Self {
            user_id: *value.user_id,
            name: value.name.clone(),
            duration_weeks: value.duration_weeks,
            days_per_week: value.days_per_week,
            weeks: value.weeks.iter().map(WeekPlan::from).collect(),
        }
    }
}

impl TryFrom<Program> for domain::GeneratedProgram {
    type Error = ProgramError;

    fn try_from(value: Program) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            duration_weeks: value.duration_weeks,
            days_per_week: value.days_per_week,
            user_id: value.user_id.into(),
            weeks: value
                .weeks
                .into_iter()
                .map(domain::WeekPlan::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProgramError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidMuscleGroup(#[from] domain::PropertyError),
    #[error(transparent)]
    InvalidRest(#[from] domain::TimeError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub week_number: u32,
    pub is_deload: bool,
    pub days: Vec<DayPlan>,
}

impl From<&domain::WeekPlan> for WeekPlan {
    fn from(value: &domain::WeekPlan) -> Self {
        Self {
            week_number: value.week_number,
            is_deload: value.is_deload,
            days: value.days.iter().map(DayPlan::from).collect(),
        }
    }
}

impl TryFrom<WeekPlan> for domain::WeekPlan {
    type Error = ProgramError;

    fn try_from(value: WeekPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            week_number: value.week_number,
            is_deload: value.is_deload,
            days: value
                .days
                .into_iter()
                .map(domain::DayPlan::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day_number: u32,
    pub focus: Vec<String>,
    pub exercises: Vec<ExercisePrescription>,
}

impl From<&domain::DayPlan> for DayPlan {
    fn from(value: &domain::DayPlan) -> Self {
        Self {
            day_number: value.day_number,
            focus: value.focus.iter().map(|m| m.key().to_string()).collect(),
            exercises: value
                .exercises
                .iter()
                .map(ExercisePrescription::from)
                .collect(),
        }
    }
}

impl TryFrom<DayPlan> for domain::DayPlan {
    type Error = ProgramError;

    fn try_from(value: DayPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            day_number: value.day_number,
            focus: value
                .focus
                .iter()
                .map(|m| domain::MuscleGroup::try_from(m.as_str()))
                .collect::<Result<_, _>>()?,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExercisePrescription::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePrescription {
    pub exercise_id: Uuid,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub intensity: u32,
    /// Seconds.
    pub rest_between_sets: u32,
}

impl From<&domain::ExercisePrescription> for ExercisePrescription {
    fn from(value: &domain::ExercisePrescription) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            name: value.name.to_string(),
            sets: value.sets,
            reps: value.reps,
            intensity: value.intensity,
            rest_between_sets: value.rest_between_sets.into(),
        }
    }
}

impl TryFrom<ExercisePrescription> for domain::ExercisePrescription {
    type Error = ProgramError;

    fn try_from(value: ExercisePrescription) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            name: domain::Name::new(&value.name)?,
            sets: value.sets,
            reps: value.reps,
            intensity: value.intensity,
            rest_between_sets: domain::Time::new(value.rest_between_sets)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub user_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<Uuid>,
    pub workout_day: String,
    pub date: NaiveDate,
    pub exercises: Vec<ExerciseLog>,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<u8>,
}

impl From<&domain::WorkoutLog> for WorkoutLog {
    fn from(value: &domain::WorkoutLog) -> Self {
        Self {
            user_id: *value.user_id,
            program_id: value.program_id.map(|id| *id),
            workout_day: value.workout_day.clone(),
            date: value.date,
            exercises: value.exercises.iter().map(ExerciseLog::from).collect(),
            duration: value.duration,
            notes: value.notes.clone(),
            mood: value.mood.map(u8::from),
        }
    }
}

impl TryFrom<WorkoutLog> for domain::WorkoutLog {
    type Error = WorkoutLogError;

    fn try_from(value: WorkoutLog) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: value.user_id.into(),
            program_id: value.program_id.map(domain::ProgramID::from),
            workout_day: value.workout_day,
            date: value.date,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseLog::try_from)
                .collect::<Result<_, _>>()?,
            duration: value.duration,
            notes: value.notes,
            mood: value.mood.map(domain::Mood::new).transpose()?,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutLogError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidWeight(#[from] domain::WeightError),
    #[error(transparent)]
    InvalidReps(#[from] domain::RepsError),
    #[error(transparent)]
    InvalidRPE(#[from] domain::RPEError),
    #[error(transparent)]
    InvalidMood(#[from] domain::MoodError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub sets: Vec<SetLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::ExerciseLog> for ExerciseLog {
    fn from(value: &domain::ExerciseLog) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.to_string(),
            sets: value.sets.iter().map(SetLog::from).collect(),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<ExerciseLog> for domain::ExerciseLog {
    type Error = WorkoutLogError;

    fn try_from(value: ExerciseLog) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            exercise_name: domain::Name::new(&value.exercise_name)?,
            sets: value
                .sets
                .into_iter()
                .map(domain::SetLog::try_from)
                .collect::<Result<_, _>>()?,
            notes: value.notes,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetLog {
    pub weight: f32,
    pub reps: u32,
    pub rpe: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_warmup: bool,
}

impl From<&domain::SetLog> for SetLog {
    fn from(value: &domain::SetLog) -> Self {
        Self {
            weight: value.weight.into(),
            reps: value.reps.into(),
            rpe: value.rpe.into(),
            notes: value.notes.clone(),
            is_warmup: value.warmup,
        }
    }
}

impl TryFrom<SetLog> for domain::SetLog {
    type Error = WorkoutLogError;

    fn try_from(value: SetLog) -> Result<Self, Self::Error> {
        Ok(Self {
            weight: domain::Weight::new(value.weight)?,
            reps: domain::Reps::new(value.reps)?,
            rpe: domain::RPE::new(value.rpe)?,
            notes: value.notes,
            warmup: value.is_warmup,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub weight: f32,
    pub reps: u32,
    pub date: NaiveDate,
    pub workout_log_id: Uuid,
}

impl From<&domain::PersonalRecord> for PersonalRecord {
    fn from(value: &domain::PersonalRecord) -> Self {
        Self {
            user_id: *value.user_id,
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.to_string(),
            weight: value.weight.into(),
            reps: value.reps.into(),
            date: value.date,
            workout_log_id: *value.workout_log_id,
        }
    }
}

impl TryFrom<PersonalRecord> for domain::PersonalRecord {
    type Error = WorkoutLogError;

    fn try_from(value: PersonalRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: value.user_id.into(),
            exercise_id: value.exercise_id.into(),
            exercise_name: domain::Name::new(&value.exercise_name)?,
            weight: domain::Weight::new(value.weight)?,
            reps: domain::Reps::new(value.reps)?,
            date: value.date,
            workout_log_id: value.workout_log_id.into(),
        })
    }
}
