use chrono::NaiveDate;
use log::{debug, error, warn};

use crate::{
    CatalogRepository, CreateError, DEFAULT_HISTORY_LIMIT, DeleteError, Exercise, ExerciseID,
    ExerciseLog, ExperienceLevel, GeneratedProgram, Name, PersonalRecord,
    PersonalRecordRepository, Preferences, ProgramID, ProgramRepository, ProgramService,
    RandomSource, ReadError, STREAK_LIMIT, TrackingService, UpdateError, UserID,
    WeightProgression, WorkoutLog, WorkoutLogID, WorkoutLogRepository, exercise_history,
    generate_for_preferences, personal_records, workout_streak,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository + ProgramRepository> ProgramService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn generate_program(
        &self,
        preferences: &Preferences,
        random: &mut impl RandomSource,
    ) -> Result<GeneratedProgram, ReadError> {
        let catalog = self.get_exercises().await?;
        let program = generate_for_preferences(&catalog, preferences, random);
        debug!(
            "generated {} with {} prescriptions",
            program.name,
            program.prescriptions().count()
        );
        Ok(program)
    }

    async fn create_program(&self, program: GeneratedProgram) -> Result<ProgramID, CreateError> {
        log_on_error!(
            self.repository.create_program(program),
            CreateError,
            "create",
            "program"
        )
    }

    async fn get_program(&self, id: ProgramID) -> Result<GeneratedProgram, ReadError> {
        log_on_error!(
            self.repository.read_program(id),
            ReadError,
            "get",
            "program"
        )
    }

    async fn get_active_program(
        &self,
        user_id: UserID,
    ) -> Result<Option<GeneratedProgram>, ReadError> {
        log_on_error!(
            self.repository.read_latest_program(user_id),
            ReadError,
            "get",
            "active program"
        )
    }

    async fn delete_program(&self, id: ProgramID) -> Result<ProgramID, DeleteError> {
        log_on_error!(
            self.repository.delete_program(id),
            DeleteError,
            "delete",
            "program"
        )
    }
}

impl<R: PersonalRecordRepository> Service<R> {
    /// Store the personal records of an already stored workout log.
    ///
    /// A failing repository ends the check. The records created up to that
    /// point are returned.
    async fn create_personal_records(
        &self,
        log: &WorkoutLog,
        log_id: WorkoutLogID,
    ) -> Vec<PersonalRecord> {
        let Ok(existing) = log_on_error!(
            self.repository.read_personal_records(log.user_id, None),
            ReadError,
            "get",
            "personal records"
        ) else {
            warn!("personal records of workout log {} not checked", *log_id);
            return vec![];
        };

        let mut created = vec![];
        for record in personal_records(log, log_id, &existing) {
            let Ok(record) = log_on_error!(
                self.repository.create_personal_record(record),
                CreateError,
                "create",
                "personal record"
            ) else {
                warn!("personal records of workout log {} incomplete", *log_id);
                break;
            };
            created.push(record);
        }

        created
    }
}

impl<R: WorkoutLogRepository + PersonalRecordRepository> TrackingService for Service<R> {
    async fn get_workout_logs(&self, user_id: UserID) -> Result<Vec<WorkoutLog>, ReadError> {
        log_on_error!(
            self.repository.read_workout_logs(user_id),
            ReadError,
            "get",
            "workout logs"
        )
    }

    async fn log_workout(
        &self,
        log: WorkoutLog,
    ) -> Result<(WorkoutLogID, Vec<PersonalRecord>), CreateError> {
        let id = log_on_error!(
            self.repository.create_workout_log(log.clone()),
            CreateError,
            "create",
            "workout log"
        )?;
        let records = self.create_personal_records(&log, id).await;
        Ok((id, records))
    }

    async fn update_workout_log(
        &self,
        id: WorkoutLogID,
        log: WorkoutLog,
    ) -> Result<(WorkoutLog, Vec<PersonalRecord>), UpdateError> {
        let log = log_on_error!(
            self.repository.replace_workout_log(id, log),
            UpdateError,
            "replace",
            "workout log"
        )?;
        let records = self.create_personal_records(&log, id).await;
        Ok((log, records))
    }

    async fn get_personal_records(
        &self,
        user_id: UserID,
        exercise_id: Option<ExerciseID>,
    ) -> Result<Vec<PersonalRecord>, ReadError> {
        log_on_error!(
            self.repository.read_personal_records(user_id, exercise_id),
            ReadError,
            "get",
            "personal records"
        )
    }

    async fn get_exercise_history(
        &self,
        user_id: UserID,
        exercise_name: &Name,
    ) -> Result<Vec<ExerciseLog>, ReadError> {
        let logs = self.get_workout_logs(user_id).await?;
        Ok(exercise_history(&logs, exercise_name, DEFAULT_HISTORY_LIMIT))
    }

    async fn suggest_weight(
        &self,
        user_id: UserID,
        exercise_name: &Name,
        level: ExperienceLevel,
    ) -> Result<WeightProgression, ReadError> {
        let history = self.get_exercise_history(user_id, exercise_name).await?;
        Ok(crate::suggest_weight(&history, level))
    }

    async fn get_workout_streak(
        &self,
        user_id: UserID,
        today: NaiveDate,
    ) -> Result<u32, ReadError> {
        let dates = self
            .get_workout_logs(user_id)
            .await?
            .iter()
            .take(STREAK_LIMIT)
            .map(|log| log.date)
            .collect::<Vec<_>>();
        Ok(workout_streak(&dates, today))
    }
}
