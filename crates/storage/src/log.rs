use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Number of entries kept by [`MemoryLog`].
pub const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<dyn Repository>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Log entries kept in memory, newest first.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<VecDeque<Entry>>,
}

impl Repository for MemoryLog {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(MAX_ENTRIES);
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(storage: Arc<dyn Repository>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(log) = LOG.lock() else {
            return;
        };
        if let Some(ref log) = *log {
            let _ = log.write_entry(Entry {
                time: Local::now().format("%b %d %H:%M:%S").to_string(),
                level: record.level(),
                message: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use log::Log;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Mar 04 18:30:00".to_string(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_memory_log_keeps_newest_entries() {
        let log = MemoryLog::default();
        for i in 0..=MAX_ENTRIES {
            log.write_entry(entry(&i.to_string())).unwrap();
        }
        let entries = log.read_entries().unwrap();

        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].message, MAX_ENTRIES.to_string());
        assert_eq!(entries[MAX_ENTRIES - 1].message, "1");
    }

    #[test]
    fn test_entry_serde() {
        let serialized = json!(entry("generated program"));
        assert_eq!(
            serialized,
            json!({"time": "Mar 04 18:30:00", "level": "Info", "message": "generated program"})
        );
        let deserialized: Entry = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, entry("generated program"));
    }

    #[test]
    fn test_logger_writes_to_repository() {
        let memory = Arc::new(MemoryLog::default());
        *LOG.lock().unwrap() = Some(memory.clone());

        LOGGER.log(
            &Record::builder()
                .args(format_args!("failed to get exercises: no connection"))
                .level(Level::Warn)
                .build(),
        );

        let entries = memory.read_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Warn);
        assert_eq!(entries[0].message, "failed to get exercises: no connection");
        assert!(!entries[0].time.is_empty());
    }
}
