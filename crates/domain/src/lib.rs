#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod autoregulation;
mod error;
mod exercise;
mod level;
mod name;
mod program;
mod progression;
mod random;
mod service;
mod split;
mod templates;
mod tracking;
mod training;
mod user;

pub use autoregulation::{target_rpe, update_subsequent_sets, weight_for_rpe};
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use exercise::{
    CatalogRepository, Equipment, Exercise, ExerciseError, ExerciseFilter, ExerciseID,
    MuscleGroup, Property, PropertyError,
};
pub use level::{
    Bounds, BoundsError, ExperienceLevel, ExperienceLevelError, ProgramLevelTemplate,
    Progression, ProgressionError, TrainingParameters,
};
pub use name::{Name, NameError};
pub use program::{
    DayPlan, ExercisePrescription, GeneratedProgram, ProgramID, ProgramRepository,
    ProgramService, WeekPlan, generate_for_preferences, generate_program,
};
pub use progression::{WeightProgression, suggest_weight};
pub use random::{FirstCandidate, RandomSource};
pub use service::Service;
pub use split::{
    DaySplit, FULL_BODY, PUSH_PULL_LEGS, SPLIT_TEMPLATES, TrainingSplit, TrainingSplitError,
    TrainingSplitTemplate, UPPER_LOWER, select_preferred_split, select_split,
};
pub use templates::{
    PlanError, PlannedExercise, ProgramTemplate, WorkoutDay, custom_program, program_templates,
};
pub use tracking::{
    DEFAULT_HISTORY_LIMIT, ExerciseLog, Mood, MoodError, PersonalRecord,
    PersonalRecordRepository, STREAK_LIMIT, SetChange, SetError, SetLog, TrackingService,
    WorkoutLog, WorkoutLogID, WorkoutLogRepository, exercise_history, personal_records,
    workout_streak,
};
pub use training::{RPE, RPEError, Reps, RepsError, Time, TimeError, Weight, WeightError};
pub use user::{Preferences, UserID};
