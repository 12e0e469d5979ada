use std::collections::BTreeSet;

use derive_more::Deref;
use uuid::Uuid;

use crate::{Equipment, ExperienceLevel, TrainingSplit};

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Training preferences of a user, validated before they reach the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub user_id: UserID,
    pub experience_level: ExperienceLevel,
    pub days_available: u32,
    pub equipment: BTreeSet<Equipment>,
    /// Split chosen by the user instead of the one matching level and days.
    pub split: Option<TrainingSplit>,
}

impl Preferences {
    #[must_use]
    pub fn new(
        user_id: UserID,
        experience_level: ExperienceLevel,
        days_available: u32,
        equipment: impl IntoIterator<Item = Equipment>,
    ) -> Self {
        Self {
            user_id,
            experience_level,
            days_available: days_available.min(7),
            equipment: equipment.into_iter().collect(),
            split: None,
        }
    }

    #[must_use]
    pub fn with_split(self, split: Option<TrainingSplit>) -> Self {
        Self { split, ..self }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_user_id_nil() {
        assert!(UserID::nil().is_nil());
        assert!(!UserID::from(1).is_nil());
    }

    #[test]
    fn test_preferences_new() {
        let preferences = Preferences::new(
            1.into(),
            ExperienceLevel::Intermediate,
            9,
            [Equipment::BARBELL, Equipment::BENCH, Equipment::BARBELL],
        );

        assert_eq!(preferences.days_available, 7);
        assert_eq!(
            preferences.equipment,
            BTreeSet::from([Equipment::BARBELL, Equipment::BENCH])
        );
        assert_eq!(preferences.split, None);
        assert_eq!(
            preferences.with_split(Some(TrainingSplit::UpperLower)).split,
            Some(TrainingSplit::UpperLower)
        );
    }
}
