use derive_more::{AsRef, Display};

/// Display name of an exercise, program or workout day.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub const MAX_LEN: usize = 96;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > Self::MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Lowercase, dash-separated form used as a fallback exercise key.
    #[must_use]
    pub fn slug(&self) -> String {
        self.0
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 96 characters or fewer ({0} > 96)")]
    TooLong(usize),
}
