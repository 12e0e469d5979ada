use liftplan_domain::{self as domain, Property};
use uuid::Uuid;

/// User settings as persisted by the document store.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub user_id: Uuid,
    pub experience_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<String>,
    pub days_per_week: u32,
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_id: Uuid::nil(),
            experience_level: domain::ExperienceLevel::Beginner.key().to_string(),
            split: None,
            days_per_week: 3,
            equipment: vec![domain::Equipment::BODYWEIGHT.to_string()],
        }
    }
}

impl From<&domain::Preferences> for Settings {
    fn from(value: &domain::Preferences) -> Self {
        Self {
            user_id: *value.user_id,
            experience_level: value.experience_level.key().to_string(),
            split: value.split.map(|split| split.key().to_string()),
            days_per_week: value.days_available,
            equipment: value.equipment.iter().map(|e| e.key().to_string()).collect(),
        }
    }
}

impl TryFrom<Settings> for domain::Preferences {
    type Error = SettingsError;

    fn try_from(value: Settings) -> Result<Self, Self::Error> {
        let split = value
            .split
            .as_deref()
            .map(domain::TrainingSplit::try_from)
            .transpose()?;
        Ok(domain::Preferences::new(
            value.user_id.into(),
            domain::ExperienceLevel::try_from(value.experience_level.as_str())?,
            value.days_per_week,
            value
                .equipment
                .iter()
                .map(|e| domain::Equipment::new(e.as_str()))
                .collect::<Result<Vec<_>, _>>()?,
        )
        .with_split(split))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error(transparent)]
    InvalidExperienceLevel(#[from] domain::ExperienceLevelError),
    #[error(transparent)]
    InvalidSplit(#[from] domain::TrainingSplitError),
    #[error(transparent)]
    InvalidEquipment(#[from] domain::PropertyError),
}
