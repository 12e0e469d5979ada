use std::sync::LazyLock;

use chrono::NaiveDate;
use liftplan_domain::{self as domain, Equipment, ExperienceLevel, MuscleGroup};

pub static EXERCISES: LazyLock<Vec<domain::Exercise>> = LazyLock::new(|| {
    vec![
        exercise(
            1,
            "Bench Press",
            &[MuscleGroup::Chest, MuscleGroup::Arms],
            &[Equipment::BARBELL, Equipment::BENCH],
            ExperienceLevel::Beginner,
        ),
        exercise(
            2,
            "Barbell Row",
            &[MuscleGroup::Back],
            &[Equipment::BARBELL],
            ExperienceLevel::Intermediate,
        ),
        exercise(
            3,
            "Squat",
            &[MuscleGroup::Legs],
            &[Equipment::BARBELL, Equipment::RACK],
            ExperienceLevel::Beginner,
        ),
        exercise(
            4,
            "Lunge",
            &[MuscleGroup::Legs],
            &[Equipment::DUMBBELL],
            ExperienceLevel::Beginner,
        ),
        exercise(
            5,
            "Overhead Press",
            &[MuscleGroup::Shoulders, MuscleGroup::Arms],
            &[Equipment::BARBELL],
            ExperienceLevel::Intermediate,
        ),
        exercise(
            6,
            "Plank",
            &[MuscleGroup::Core],
            &[],
            ExperienceLevel::Beginner,
        ),
        exercise(
            7,
            "Pull-up",
            &[MuscleGroup::Back, MuscleGroup::Arms],
            &[Equipment::BODYWEIGHT],
            ExperienceLevel::Intermediate,
        ),
    ]
});

pub static PREFERENCES: LazyLock<domain::Preferences> = LazyLock::new(|| {
    domain::Preferences::new(
        1.into(),
        ExperienceLevel::Beginner,
        3,
        [
            Equipment::BARBELL,
            Equipment::BENCH,
            Equipment::BODYWEIGHT,
            Equipment::DUMBBELL,
            Equipment::RACK,
        ],
    )
});

pub static WORKOUT_LOG: LazyLock<domain::WorkoutLog> = LazyLock::new(|| domain::WorkoutLog {
    user_id: 1.into(),
    program_id: None,
    workout_day: "Full Body A".to_string(),
    date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
    exercises: vec![domain::ExerciseLog {
        exercise_id: 1.into(),
        exercise_name: domain::Name::new("Bench Press").unwrap(),
        sets: vec![
            set(40.0, 10, 5.0, true),
            set(80.0, 8, 7.0, false),
            set(82.5, 8, 8.0, false),
        ],
        notes: Some("Felt strong".to_string()),
    }],
    duration: 45,
    notes: None,
    mood: Some(domain::Mood::new(4).unwrap()),
});

pub static WORKOUT_LOG_2: LazyLock<domain::WorkoutLog> = LazyLock::new(|| domain::WorkoutLog {
    user_id: 1.into(),
    program_id: Some(3.into()),
    workout_day: "Full Body B".to_string(),
    date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
    exercises: vec![domain::ExerciseLog {
        exercise_id: 1.into(),
        exercise_name: domain::Name::new("Bench Press").unwrap(),
        sets: vec![set(85.0, 8, 9.0, false), set(85.0, 7, 9.5, false)],
        notes: None,
    }],
    duration: 50,
    notes: Some("Tired".to_string()),
    mood: None,
});

pub static PERSONAL_RECORD: LazyLock<domain::PersonalRecord> =
    LazyLock::new(|| domain::PersonalRecord {
        user_id: 1.into(),
        exercise_id: 1.into(),
        exercise_name: domain::Name::new("Bench Press").unwrap(),
        weight: domain::Weight::new(82.5).unwrap(),
        reps: domain::Reps::new(8).unwrap(),
        date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        workout_log_id: 9.into(),
    });

pub fn program() -> domain::GeneratedProgram {
    domain::generate_program(
        &EXERCISES,
        &domain::FULL_BODY,
        ExperienceLevel::Beginner.program_template(),
        ExperienceLevel::Beginner.training_parameters(),
        &PREFERENCES,
        &mut domain::FirstCandidate,
    )
}

fn exercise(
    id: u128,
    name: &str,
    muscle_groups: &[MuscleGroup],
    equipment: &[Equipment],
    difficulty: ExperienceLevel,
) -> domain::Exercise {
    domain::Exercise::new(
        id.into(),
        domain::Name::new(name).unwrap(),
        muscle_groups.iter().copied().collect(),
        equipment.iter().cloned().collect(),
        difficulty,
    )
    .unwrap()
}

fn set(weight: f32, reps: u32, rpe: f32, warmup: bool) -> domain::SetLog {
    domain::SetLog {
        weight: domain::Weight::new(weight).unwrap(),
        reps: domain::Reps::new(reps).unwrap(),
        rpe: domain::RPE::new(rpe).unwrap(),
        notes: None,
        warmup,
    }
}
