use std::{borrow::Cow, collections::BTreeSet, slice::Iter};

use derive_more::Deref;
use uuid::Uuid;

use crate::{ExperienceLevel, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub muscle_groups: BTreeSet<MuscleGroup>,
    pub equipment: BTreeSet<Equipment>,
    pub difficulty: ExperienceLevel,
}

impl Exercise {
    pub fn new(
        id: ExerciseID,
        name: Name,
        muscle_groups: BTreeSet<MuscleGroup>,
        equipment: BTreeSet<Equipment>,
        difficulty: ExperienceLevel,
    ) -> Result<Self, ExerciseError> {
        if muscle_groups.is_empty() {
            return Err(ExerciseError::NoMuscleGroups);
        }

        Ok(Self {
            id,
            name,
            muscle_groups,
            equipment,
            difficulty,
        })
    }

    #[must_use]
    pub fn targets(&self, muscle_group: MuscleGroup) -> bool {
        self.muscle_groups.contains(&muscle_group)
    }

    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty() || self.equipment.iter().all(|e| *e == Equipment::BODYWEIGHT)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExerciseError {
    #[error("Exercise must target at least one muscle group")]
    NoMuscleGroups,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Legs,
    Arms,
    Core,
    FullBody,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 7] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Legs,
            MuscleGroup::Arms,
            MuscleGroup::Core,
            MuscleGroup::FullBody,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
        }
    }

    fn key(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Core => "core",
            MuscleGroup::FullBody => "full_body",
        }
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "chest" => Ok(MuscleGroup::Chest),
            "back" => Ok(MuscleGroup::Back),
            "shoulders" => Ok(MuscleGroup::Shoulders),
            "legs" => Ok(MuscleGroup::Legs),
            // Split focus lists name the arm muscles individually
            "arms" | "biceps" | "triceps" => Ok(MuscleGroup::Arms),
            "core" => Ok(MuscleGroup::Core),
            "full_body" => Ok(MuscleGroup::FullBody),
            _ => Err(PropertyError::Unknown(value.to_string())),
        }
    }
}

/// Piece of equipment, identified by a normalized key.
///
/// Catalogs name equipment freely ("power rack", "leg press machine"), so any
/// non-empty name is accepted. Keys are lowercase with single spaces, and
/// common plural and onboarding spellings map to the same key.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Equipment(Cow<'static, str>);

impl Equipment {
    pub const BARBELL: Equipment = Equipment::known("barbell");
    pub const BENCH: Equipment = Equipment::known("bench");
    pub const BODYWEIGHT: Equipment = Equipment::known("bodyweight");
    pub const CABLE: Equipment = Equipment::known("cable");
    pub const DUMBBELL: Equipment = Equipment::known("dumbbell");
    pub const KETTLEBELL: Equipment = Equipment::known("kettlebell");
    pub const MACHINE: Equipment = Equipment::known("machine");
    pub const RACK: Equipment = Equipment::known("rack");
    pub const RESISTANCE_BAND: Equipment = Equipment::known("resistance band");
    pub const SMITH_MACHINE: Equipment = Equipment::known("smith machine");

    pub const COMMON: [Equipment; 10] = [
        Equipment::BARBELL,
        Equipment::BENCH,
        Equipment::BODYWEIGHT,
        Equipment::CABLE,
        Equipment::DUMBBELL,
        Equipment::KETTLEBELL,
        Equipment::MACHINE,
        Equipment::RACK,
        Equipment::RESISTANCE_BAND,
        Equipment::SMITH_MACHINE,
    ];

    const fn known(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    pub fn new(name: &str) -> Result<Self, PropertyError> {
        let key = name
            .replace('_', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        if key.is_empty() {
            return Err(PropertyError::Empty);
        }

        Ok(match key.as_str() {
            "barbells" => Self::BARBELL,
            "bench press" | "benches" => Self::BENCH,
            "cables" | "cable machine" => Self::CABLE,
            "dumbbells" => Self::DUMBBELL,
            "kettlebells" => Self::KETTLEBELL,
            "machines" => Self::MACHINE,
            "power rack" | "squat rack" => Self::RACK,
            "resistance bands" | "bands" => Self::RESISTANCE_BAND,
            "leg press" => Self::known("leg press machine"),
            _ => Self(Cow::Owned(key)),
        })
    }

    /// Identifier used by the document store.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Equipment {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Equipment::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PropertyError {
    #[error("Unknown value \"{0}\"")]
    Unknown(String),
    #[error("Value must not be empty")]
    Empty,
}

/// Selects the exercises of a catalog that can be performed with the available
/// equipment and that train at least one of the target muscle groups.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub equipment: BTreeSet<Equipment>,
    pub muscle_groups: BTreeSet<MuscleGroup>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn new(
        equipment: impl IntoIterator<Item = Equipment>,
        muscle_groups: impl IntoIterator<Item = MuscleGroup>,
    ) -> Self {
        Self {
            equipment: equipment.into_iter().collect(),
            muscle_groups: muscle_groups.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.equipment.is_subset(&self.equipment)
            && self
                .muscle_groups
                .iter()
                .any(|muscle_group| exercise.targets(*muscle_group))
    }

    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises.filter(|e| self.matches(e)).collect()
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
    /// Identifier used by the document store.
    fn key(self) -> &'static str;
}
