use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};
use liftplan_domain as domain;
use log::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;
use uuid::Uuid;

use crate::record::{Exercise, PersonalRecord, Program, WorkoutLog};

/// Document store keeping JSON documents in memory.
///
/// Every document carries an ID and its creation and modification time. The
/// store can be switched offline to simulate an unavailable backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RefCell<Vec<Document>>,
    offline: Cell<bool>,
}

#[derive(Debug, Clone)]
struct Document {
    id: Uuid,
    collection: Collection,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    data: serde_json::Value,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Replace the exercise catalog.
    pub fn write_exercises(&self, exercises: &[domain::Exercise]) -> Result<(), StoreError> {
        self.documents
            .borrow_mut()
            .retain(|d| d.collection != Collection::Exercises);
        for exercise in exercises {
            self.insert(Collection::Exercises, *exercise.id, &Exercise::from(exercise))?;
        }
        Ok(())
    }

    fn connection(&self) -> Result<(), domain::StorageError> {
        if self.offline.get() {
            return Err(domain::StorageError::NoConnection);
        }
        Ok(())
    }

    fn get<R, V>(&self, collection: Collection, id: Uuid) -> Result<R, StoreError>
    where
        R: TryFrom<V>,
        V: DeserializeOwned,
        <R as TryFrom<V>>::Error: std::error::Error + Send + Sync + 'static,
    {
        let data = self
            .documents
            .borrow()
            .iter()
            .find(|d| d.collection == collection && d.id == id)
            .map(|d| d.data.clone())
            .ok_or(StoreError::NotFound)?;
        R::try_from(serde_json::from_value::<V>(data)?)
            .map_err(|err| anyhow::Error::new(err).into())
    }

    /// Documents of a collection in insertion order.
    fn get_all<V: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<V>, StoreError> {
        let documents = self.documents.borrow();
        let mut result = vec![];
        for document in documents.iter().filter(|d| d.collection == collection) {
            result.push(serde_json::from_value(document.data.clone())?);
        }
        Ok(result)
    }

    fn add<V: Serialize>(&self, collection: Collection, value: &V) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.insert(collection, id, value)?;
        Ok(id)
    }

    fn insert<V: Serialize>(
        &self,
        collection: Collection,
        id: Uuid,
        value: &V,
    ) -> Result<(), StoreError> {
        let now = Utc::now();
        self.documents.borrow_mut().push(Document {
            id,
            collection,
            created_at: now,
            updated_at: now,
            data: serde_json::to_value(value)?,
        });
        debug!("added document {id} to {}", collection.as_ref());
        Ok(())
    }

    fn put<V: Serialize>(
        &self,
        collection: Collection,
        id: Uuid,
        value: &V,
    ) -> Result<DateTime<Utc>, StoreError> {
        let data = serde_json::to_value(value)?;
        let mut documents = self.documents.borrow_mut();
        let document = documents
            .iter_mut()
            .find(|d| d.collection == collection && d.id == id)
            .ok_or(StoreError::NotFound)?;
        document.data = data;
        document.updated_at = Utc::now().max(document.created_at);
        Ok(document.updated_at)
    }

    fn delete(&self, collection: Collection, id: Uuid) -> Result<(), StoreError> {
        let mut documents = self.documents.borrow_mut();
        let index = documents
            .iter()
            .position(|d| d.collection == collection && d.id == id)
            .ok_or(StoreError::NotFound)?;
        documents.remove(index);
        debug!("deleted document {id} from {}", collection.as_ref());
        Ok(())
    }
}

impl domain::CatalogRepository for InMemoryStore {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        self.connection()?;
        Ok(self
            .get_all::<Exercise>(Collection::Exercises)?
            .into_iter()
            .map(domain::Exercise::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| StoreError::Other(err.into()))?)
    }
}

impl domain::ProgramRepository for InMemoryStore {
    async fn create_program(
        &self,
        program: domain::GeneratedProgram,
    ) -> Result<domain::ProgramID, domain::CreateError> {
        self.connection()?;
        Ok(self
            .add(Collection::Programs, &Program::from(&program))?
            .into())
    }

    async fn read_program(
        &self,
        id: domain::ProgramID,
    ) -> Result<domain::GeneratedProgram, domain::ReadError> {
        self.connection()?;
        Ok(self.get::<domain::GeneratedProgram, Program>(Collection::Programs, *id)?)
    }

    async fn read_latest_program(
        &self,
        user_id: domain::UserID,
    ) -> Result<Option<domain::GeneratedProgram>, domain::ReadError> {
        self.connection()?;
        self.get_all::<Program>(Collection::Programs)?
            .into_iter()
            .rev()
            .find(|p| p.user_id == *user_id)
            .map(domain::GeneratedProgram::try_from)
            .transpose()
            .map_err(|err| StoreError::Other(err.into()).into())
    }

    async fn delete_program(
        &self,
        id: domain::ProgramID,
    ) -> Result<domain::ProgramID, domain::DeleteError> {
        self.connection()?;
        self.delete(Collection::Programs, *id)?;
        Ok(id)
    }
}

impl domain::WorkoutLogRepository for InMemoryStore {
    async fn create_workout_log(
        &self,
        log: domain::WorkoutLog,
    ) -> Result<domain::WorkoutLogID, domain::CreateError> {
        self.connection()?;
        Ok(self
            .add(Collection::WorkoutLogs, &WorkoutLog::from(&log))?
            .into())
    }

    async fn read_workout_logs(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::WorkoutLog>, domain::ReadError> {
        self.connection()?;
        let mut logs = self
            .get_all::<serde_json::Value>(Collection::WorkoutLogs)?
            .into_iter()
            .rev()
            .filter_map(|data| match decode_workout_log(data) {
                Ok(log) => Some(log),
                Err(err) => {
                    warn!("skipped invalid workout log: {err}");
                    None
                }
            })
            .filter(|l| l.user_id == user_id)
            .collect::<Vec<_>>();
        logs.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(logs)
    }

    async fn read_workout_log(
        &self,
        id: domain::WorkoutLogID,
    ) -> Result<domain::WorkoutLog, domain::ReadError> {
        self.connection()?;
        Ok(self.get::<domain::WorkoutLog, WorkoutLog>(Collection::WorkoutLogs, *id)?)
    }

    async fn replace_workout_log(
        &self,
        id: domain::WorkoutLogID,
        log: domain::WorkoutLog,
    ) -> Result<domain::WorkoutLog, domain::UpdateError> {
        self.connection()?;
        let updated_at = self.put(Collection::WorkoutLogs, *id, &WorkoutLog::from(&log))?;
        debug!("replaced workout log {} at {updated_at}", *id);
        Ok(log)
    }
}

impl domain::PersonalRecordRepository for InMemoryStore {
    async fn read_personal_records(
        &self,
        user_id: domain::UserID,
        exercise_id: Option<domain::ExerciseID>,
    ) -> Result<Vec<domain::PersonalRecord>, domain::ReadError> {
        self.connection()?;
        let mut records = self
            .get_all::<PersonalRecord>(Collection::PersonalRecords)?
            .into_iter()
            .rev()
            .filter(|r| {
                r.user_id == *user_id && exercise_id.is_none_or(|id| r.exercise_id == *id)
            })
            .map(domain::PersonalRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| StoreError::Other(err.into()))?;
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    async fn create_personal_record(
        &self,
        record: domain::PersonalRecord,
    ) -> Result<domain::PersonalRecord, domain::CreateError> {
        self.connection()?;
        let id = self.add(Collection::PersonalRecords, &PersonalRecord::from(&record))?;
        debug!("stored personal record {id} for {}", record.exercise_name);
        Ok(record)
    }
}

fn decode_workout_log(data: serde_json::Value) -> Result<domain::WorkoutLog, anyhow::Error> {
    Ok(domain::WorkoutLog::try_from(serde_json::from_value::<WorkoutLog>(data)?)?)
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StoreError> for domain::ReadError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound => domain::ReadError::NotFound,
            err => domain::ReadError::Storage(domain::StorageError::Other(Box::new(err))),
        }
    }
}

impl From<StoreError> for domain::CreateError {
    fn from(value: StoreError) -> Self {
        domain::CreateError::Storage(domain::StorageError::Other(Box::new(value)))
    }
}

impl From<StoreError> for domain::UpdateError {
    fn from(value: StoreError) -> Self {
        domain::UpdateError::Storage(domain::StorageError::Other(Box::new(value)))
    }
}

impl From<StoreError> for domain::DeleteError {
    fn from(value: StoreError) -> Self {
        domain::DeleteError::Storage(domain::StorageError::Other(Box::new(value)))
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    #[strum(serialize = "exercises")]
    Exercises,
    #[strum(serialize = "programs")]
    Programs,
    #[strum(serialize = "workout_logs")]
    WorkoutLogs,
    #[strum(serialize = "personal_records")]
    PersonalRecords,
}
