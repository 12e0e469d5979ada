use derive_more::Deref;
use log::debug;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, Exercise, ExerciseFilter, ExerciseID, MuscleGroup, Name, Preferences,
    ProgramLevelTemplate, Property, RandomSource, ReadError, Time, TrainingParameters,
    TrainingSplitTemplate, UserID, select_preferred_split,
};

#[allow(async_fn_in_trait)]
pub trait ProgramService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn generate_program(
        &self,
        preferences: &Preferences,
        random: &mut impl RandomSource,
    ) -> Result<GeneratedProgram, ReadError>;
    async fn create_program(&self, program: GeneratedProgram) -> Result<ProgramID, CreateError>;
    async fn get_program(&self, id: ProgramID) -> Result<GeneratedProgram, ReadError>;
    async fn get_active_program(
        &self,
        user_id: UserID,
    ) -> Result<Option<GeneratedProgram>, ReadError>;
    async fn delete_program(&self, id: ProgramID) -> Result<ProgramID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait ProgramRepository {
    async fn create_program(&self, program: GeneratedProgram) -> Result<ProgramID, CreateError>;
    async fn read_program(&self, id: ProgramID) -> Result<GeneratedProgram, ReadError>;
    /// Most recently created program of the user.
    async fn read_latest_program(&self, user_id: UserID)
    -> Result<Option<GeneratedProgram>, ReadError>;
    async fn delete_program(&self, id: ProgramID) -> Result<ProgramID, DeleteError>;
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgramID(Uuid);

impl From<Uuid> for ProgramID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ProgramID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedProgram {
    pub name: String,
    pub duration_weeks: u32,
    pub days_per_week: u32,
    pub user_id: UserID,
    pub weeks: Vec<WeekPlan>,
}

impl GeneratedProgram {
    pub fn prescriptions(&self) -> impl Iterator<Item = &ExercisePrescription> {
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .flat_map(|d| d.exercises.iter())
    }

    pub fn deload_weeks(&self) -> impl Iterator<Item = &WeekPlan> {
        self.weeks.iter().filter(|w| w.is_deload)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlan {
    pub week_number: u32,
    pub is_deload: bool,
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub day_number: u32,
    pub focus: Vec<MuscleGroup>,
    pub exercises: Vec<ExercisePrescription>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePrescription {
    pub exercise_id: ExerciseID,
    pub name: Name,
    pub sets: u32,
    pub reps: u32,
    /// Percentage of the estimated one-rep max.
    pub intensity: u32,
    pub rest_between_sets: Time,
}

/// Generate a program with the split and level tables matching the preferences.
///
/// A preferred split is used when it fits into the available days.
pub fn generate_for_preferences(
    catalog: &[Exercise],
    preferences: &Preferences,
    random: &mut impl RandomSource,
) -> GeneratedProgram {
    let level = preferences.experience_level;
    generate_program(
        catalog,
        select_preferred_split(preferences.split, level, preferences.days_available),
        level.program_template(),
        level.training_parameters(),
        preferences,
        random,
    )
}

/// Expand a split into a periodized multi-week program.
///
/// Every week repeats the days of the split. Exercises are drawn from the
/// catalog entries that fit the available equipment, slot by slot according
/// to the day's muscle group distribution. Slots without a fitting exercise
/// are left out, so a day can end up with fewer exercises than planned. In
/// deload weeks the sets and the intensity are kept at their minimum.
pub fn generate_program(
    catalog: &[Exercise],
    split: &TrainingSplitTemplate,
    level_template: &ProgramLevelTemplate,
    parameters: &TrainingParameters,
    preferences: &Preferences,
    random: &mut impl RandomSource,
) -> GeneratedProgram {
    let weeks = (1..=level_template.total_weeks)
        .map(|week_number| {
            let is_deload = level_template.progression.is_deload_week(week_number);
            let days = (1..)
                .zip(split.days)
                .map(|(day_number, day_split)| {
                    let mut day = DayPlan {
                        day_number,
                        focus: day_split.focus.to_vec(),
                        exercises: vec![],
                    };
                    let filter = ExerciseFilter::new(
                        preferences.equipment.iter().cloned(),
                        day_split.focus.iter().copied(),
                    );
                    let available = filter.exercises(catalog.iter());

                    for (muscle_group, share) in day_split.distribution {
                        let count = exercise_count(level_template.exercises_per_session, *share);
                        let selected = select_exercises(
                            &available,
                            *muscle_group,
                            count,
                            &day.exercises,
                            random,
                        );
                        if selected.len() < count {
                            debug!(
                                "week {week_number} day {day_number}: {} of {count} {} exercises available",
                                selected.len(),
                                muscle_group.key()
                            );
                        }
                        for exercise in selected {
                            day.exercises
                                .push(prescribe(exercise, parameters, is_deload, random));
                        }
                    }

                    day
                })
                .collect();

            WeekPlan {
                week_number,
                is_deload,
                days,
            }
        })
        .collect();

    GeneratedProgram {
        name: format!(
            "{} Program - {} Level",
            split.name, preferences.experience_level
        ),
        duration_weeks: level_template.total_weeks,
        days_per_week: split.frequency,
        user_id: preferences.user_id,
        weeks,
    }
}

fn exercise_count(exercises_per_session: u32, share: f64) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (f64::from(exercises_per_session) * share.max(0.0)).round() as usize;
    count
}

fn select_exercises<'a>(
    available: &[&'a Exercise],
    muscle_group: MuscleGroup,
    count: usize,
    already_chosen: &[ExercisePrescription],
    random: &mut impl RandomSource,
) -> Vec<&'a Exercise> {
    let mut candidates = available
        .iter()
        .copied()
        .filter(|e| {
            e.targets(muscle_group) && !already_chosen.iter().any(|p| p.exercise_id == e.id)
        })
        .collect::<Vec<_>>();
    let mut selected = Vec::with_capacity(count);

    while selected.len() < count && !candidates.is_empty() {
        let index = random.choose(candidates.len()).min(candidates.len() - 1);
        selected.push(candidates.remove(index));
    }

    selected
}

fn prescribe(
    exercise: &Exercise,
    parameters: &TrainingParameters,
    is_deload: bool,
    random: &mut impl RandomSource,
) -> ExercisePrescription {
    let sets = if is_deload {
        parameters.sets_per_exercise.min
    } else {
        random.between(
            parameters.sets_per_exercise.min,
            parameters.sets_per_exercise.max,
        )
    };
    let reps = random.between(parameters.reps_per_set.min, parameters.reps_per_set.max);
    let intensity = if is_deload {
        parameters.intensity.min
    } else {
        random.between(parameters.intensity.min, parameters.intensity.max)
    };

    ExercisePrescription {
        exercise_id: exercise.id,
        name: exercise.name.clone(),
        sets,
        reps,
        intensity,
        rest_between_sets: parameters.rest_between_sets,
    }
}
