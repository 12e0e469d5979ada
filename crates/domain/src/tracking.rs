use chrono::NaiveDate;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{
    CreateError, ExerciseID, ExperienceLevel, Name, ProgramID, RPE, ReadError, Reps, UpdateError,
    UserID, Weight, WeightProgression, update_subsequent_sets,
};

/// Number of sessions considered for an exercise history.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
/// Number of workouts considered for a streak.
pub const STREAK_LIMIT: usize = 30;

#[allow(async_fn_in_trait)]
pub trait TrackingService {
    async fn get_workout_logs(&self, user_id: UserID) -> Result<Vec<WorkoutLog>, ReadError>;
    /// Store a workout log together with the personal records it contains.
    ///
    /// Once the log is stored the call succeeds. Records the repository
    /// fails to read or create are missing from the result.
    async fn log_workout(
        &self,
        log: WorkoutLog,
    ) -> Result<(WorkoutLogID, Vec<PersonalRecord>), CreateError>;
    /// Replace a workout log and store the personal records it now contains.
    async fn update_workout_log(
        &self,
        id: WorkoutLogID,
        log: WorkoutLog,
    ) -> Result<(WorkoutLog, Vec<PersonalRecord>), UpdateError>;
    async fn get_personal_records(
        &self,
        user_id: UserID,
        exercise_id: Option<ExerciseID>,
    ) -> Result<Vec<PersonalRecord>, ReadError>;
    async fn get_exercise_history(
        &self,
        user_id: UserID,
        exercise_name: &Name,
    ) -> Result<Vec<ExerciseLog>, ReadError>;
    async fn suggest_weight(
        &self,
        user_id: UserID,
        exercise_name: &Name,
        level: ExperienceLevel,
    ) -> Result<WeightProgression, ReadError>;
    async fn get_workout_streak(&self, user_id: UserID, today: NaiveDate)
    -> Result<u32, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutLogRepository {
    async fn create_workout_log(&self, log: WorkoutLog) -> Result<WorkoutLogID, CreateError>;
    /// Workout logs of the user, most recent first.
    async fn read_workout_logs(&self, user_id: UserID) -> Result<Vec<WorkoutLog>, ReadError>;
    async fn read_workout_log(&self, id: WorkoutLogID) -> Result<WorkoutLog, ReadError>;
    async fn replace_workout_log(
        &self,
        id: WorkoutLogID,
        log: WorkoutLog,
    ) -> Result<WorkoutLog, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait PersonalRecordRepository {
    async fn read_personal_records(
        &self,
        user_id: UserID,
        exercise_id: Option<ExerciseID>,
    ) -> Result<Vec<PersonalRecord>, ReadError>;
    async fn create_personal_record(
        &self,
        record: PersonalRecord,
    ) -> Result<PersonalRecord, CreateError>;
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutLogID(Uuid);

impl WorkoutLogID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl From<Uuid> for WorkoutLogID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutLogID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub user_id: UserID,
    pub program_id: Option<ProgramID>,
    pub workout_day: String,
    pub date: NaiveDate,
    pub exercises: Vec<ExerciseLog>,
    /// Duration in minutes.
    pub duration: u32,
    pub notes: Option<String>,
    pub mood: Option<Mood>,
}

impl WorkoutLog {
    #[must_use]
    pub fn exercise(&self, name: &Name) -> Option<&ExerciseLog> {
        self.exercises.iter().find(|e| e.exercise_name == *name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub sets: Vec<SetLog>,
    pub notes: Option<String>,
}

impl ExerciseLog {
    #[must_use]
    pub fn new(exercise_id: ExerciseID, exercise_name: Name) -> Self {
        Self {
            exercise_id,
            exercise_name,
            sets: vec![],
            notes: None,
        }
    }

    pub fn working_sets(&self) -> impl Iterator<Item = &SetLog> {
        self.sets.iter().filter(|s| !s.warmup)
    }

    #[must_use]
    pub fn max_weight(&self) -> Option<Weight> {
        self.sets
            .iter()
            .map(|s| s.weight)
            .reduce(|max, w| if w > max { w } else { max })
    }

    #[must_use]
    pub fn avg_rpe(&self) -> Option<f32> {
        RPE::avg(&self.sets.iter().map(|s| s.rpe).collect::<Vec<_>>())
    }

    pub fn add_set(&mut self) {
        self.sets.push(SetLog::default());
    }

    pub fn remove_set(&mut self, index: usize) -> Result<SetLog, SetError> {
        if index >= self.sets.len() {
            return Err(SetError::NotFound(index));
        }
        Ok(self.sets.remove(index))
    }

    /// Apply a change to a set.
    ///
    /// Changing the weight or the RPE of any set but the last one replans all
    /// following sets for the given experience level.
    pub fn edit_set(
        &mut self,
        index: usize,
        change: SetChange,
        level: ExperienceLevel,
    ) -> Result<(), SetError> {
        let set = self.sets.get_mut(index).ok_or(SetError::NotFound(index))?;

        let replan = match change {
            SetChange::Weight(weight) => {
                set.weight = weight;
                true
            }
            SetChange::Reps(reps) => {
                set.reps = reps;
                false
            }
            SetChange::RPE(rpe) => {
                set.rpe = rpe;
                true
            }
        };

        if replan && index + 1 < self.sets.len() {
            update_subsequent_sets(&mut self.sets, index, level);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetLog {
    pub weight: Weight,
    pub reps: Reps,
    pub rpe: RPE,
    pub notes: Option<String>,
    pub warmup: bool,
}

impl Default for SetLog {
    fn default() -> Self {
        Self {
            weight: Weight::default(),
            reps: Reps::default(),
            rpe: RPE::SEVEN,
            notes: None,
            warmup: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetChange {
    Weight(Weight),
    Reps(Reps),
    RPE(RPE),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetError {
    #[error("Set {0} does not exist")]
    NotFound(usize),
}

/// Self-reported mood after a workout, from 1 (bad) to 5 (great).
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mood(u8);

impl Mood {
    pub fn new(value: u8) -> Result<Self, MoodError> {
        if !(1..=5).contains(&value) {
            return Err(MoodError::OutOfRange);
        }
        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MoodError {
    #[error("Mood must be in the range 1 to 5")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRecord {
    pub user_id: UserID,
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub weight: Weight,
    pub reps: Reps,
    pub date: NaiveDate,
    pub workout_log_id: WorkoutLogID,
}

/// Personal records set in a workout.
///
/// A working set is a record if no known record of the same exercise with the
/// same number of reps has at least the same weight. Records found earlier in
/// the same workout count as known.
#[must_use]
pub fn personal_records(
    log: &WorkoutLog,
    log_id: WorkoutLogID,
    existing: &[PersonalRecord],
) -> Vec<PersonalRecord> {
    let mut records: Vec<PersonalRecord> = vec![];

    for exercise in &log.exercises {
        for set in exercise.working_sets() {
            let beaten = existing.iter().chain(records.iter()).any(|r| {
                r.exercise_id == exercise.exercise_id
                    && r.reps == set.reps
                    && r.weight >= set.weight
            });
            if !beaten {
                records.push(PersonalRecord {
                    user_id: log.user_id,
                    exercise_id: exercise.exercise_id,
                    exercise_name: exercise.exercise_name.clone(),
                    weight: set.weight,
                    reps: set.reps,
                    date: log.date,
                    workout_log_id: log_id,
                });
            }
        }
    }

    records
}

/// Logs of an exercise taken from workout logs ordered most recent first.
#[must_use]
pub fn exercise_history(
    workout_logs: &[WorkoutLog],
    name: &Name,
    limit: usize,
) -> Vec<ExerciseLog> {
    workout_logs
        .iter()
        .filter_map(|log| log.exercise(name))
        .take(limit)
        .cloned()
        .collect()
}

/// Number of consecutive workouts without a rest of more than one day.
///
/// `dates` must be ordered most recent first. The streak is broken if the
/// most recent workout was before yesterday.
#[must_use]
pub fn workout_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut previous = today;

    for date in dates {
        if (previous - *date).num_days() > 1 {
            break;
        }
        streak += 1;
        previous = *date;
    }

    streak
}
