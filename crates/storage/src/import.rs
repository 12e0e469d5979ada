//! Import of workout days generated by an external assistant.

use liftplan_domain as domain;
use log::debug;
use serde_json::Value;

const DEFAULT_REPS_MIN: u32 = 8;
const DEFAULT_REPS_MAX: u32 = 12;
const DEFAULT_REST_MIN: u32 = 60;
const DEFAULT_REST_MAX: u32 = 90;

/// Parse a JSON array of workout days.
///
/// Every day needs a name and a list of exercises, every exercise a name and a
/// number of sets. Missing or zero rep and rest bounds are replaced by
/// defaults.
pub fn parse_workout_days(reply: &str) -> Result<Vec<domain::WorkoutDay>, ImportError> {
    let Value::Array(days) = serde_json::from_str::<Value>(reply)? else {
        return Err(ImportError::NotAnArray);
    };
    let workout_days = days
        .iter()
        .enumerate()
        .map(|(index, day)| parse_day(index, day))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("imported {} workout days", workout_days.len());
    Ok(workout_days)
}

fn parse_day(index: usize, day: &Value) -> Result<domain::WorkoutDay, ImportError> {
    let (Some(name), Some(exercises)) = (
        text(day.get("name")),
        day.get("exercises").and_then(Value::as_array),
    ) else {
        return Err(ImportError::InvalidDay(index));
    };
    let exercises = exercises
        .iter()
        .enumerate()
        .map(|(exercise_index, exercise)| parse_exercise(index, exercise_index, exercise))
        .collect::<Result<Vec<_>, _>>()?;
    let mut workout_day =
        domain::WorkoutDay::new(name, exercises).map_err(|_| ImportError::InvalidDay(index))?;
    workout_day.notes = text(day.get("notes")).map(str::to_string);
    Ok(workout_day)
}

fn parse_exercise(
    day: usize,
    index: usize,
    exercise: &Value,
) -> Result<domain::PlannedExercise, ImportError> {
    let invalid = || ImportError::InvalidExercise {
        day,
        exercise: index,
    };
    let (Some(name), Some(sets)) = (
        text(exercise.get("name")),
        exercise.get("sets").and_then(Value::as_f64),
    ) else {
        return Err(invalid());
    };
    let rest = |key: &str, default: u32| {
        domain::Time::new(number(exercise.get(key)).unwrap_or(default)).map_err(|_| invalid())
    };

    domain::PlannedExercise::new(
        name,
        whole(sets).unwrap_or(0),
        (
            number(exercise.get("repsMin")).unwrap_or(DEFAULT_REPS_MIN),
            number(exercise.get("repsMax")).unwrap_or(DEFAULT_REPS_MAX),
        ),
        (
            rest("restMin", DEFAULT_REST_MIN)?,
            rest("restMax", DEFAULT_REST_MAX)?,
        ),
        text(exercise.get("notes")).map(str::to_string),
    )
    .map_err(|source| ImportError::InvalidPlan {
        day,
        exercise: index,
        source,
    })
}

fn text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Positive number given as JSON number or numeric string.
fn number(value: Option<&Value>) -> Option<u32> {
    let number = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(string) => string.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    whole(number).filter(|n| *n > 0)
}

fn whole(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = value.round() as u32;
    Some(value)
}

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    #[error("Invalid program format: expected an array")]
    NotAnArray,
    #[error("Invalid workout day format at index {0}")]
    InvalidDay(usize),
    #[error("Invalid exercise format at day {day}, exercise {exercise}")]
    InvalidExercise { day: usize, exercise: usize },
    #[error("Invalid exercise at day {day}, exercise {exercise}: {source}")]
    InvalidPlan {
        day: usize,
        exercise: usize,
        source: domain::PlanError,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse_workout_days() {
        let days = parse_workout_days(
            r#"[
                {
                    "name": "Push Day",
                    "notes": "Focus on form",
                    "exercises": [
                        {"name": "Bench Press", "sets": 4, "repsMin": 6, "repsMax": 8, "restMin": 120, "restMax": 180, "notes": "Pause on chest"},
                        {"name": "Dips", "sets": 3}
                    ]
                },
                {"name": "Pull Day", "exercises": []}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            days.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            vec!["Push Day", "Pull Day"]
        );
        assert_eq!(days[0].notes, Some("Focus on form".to_string()));
        assert_eq!(days[1].notes, None);
        assert!(days[1].exercises.is_empty());

        let bench = &days[0].exercises[0];
        assert_eq!(bench.sets, 4);
        assert_eq!((bench.reps.min, bench.reps.max), (6, 8));
        assert_eq!(
            (u32::from(bench.rest.min), u32::from(bench.rest.max)),
            (120, 180)
        );
        assert_eq!(bench.notes, Some("Pause on chest".to_string()));

        let dips = &days[0].exercises[1];
        assert_eq!((dips.reps.min, dips.reps.max), (8, 12));
        assert_eq!((u32::from(dips.rest.min), u32::from(dips.rest.max)), (60, 90));
        assert_eq!(dips.notes, None);
    }

    #[test]
    fn test_parse_workout_days_lenient_numbers() {
        let days = parse_workout_days(
            r#"[{"name": "A", "exercises": [{"name": "Squat", "sets": 5, "repsMin": "5", "repsMax": 0, "restMin": "x"}]}]"#,
        )
        .unwrap();
        let squat = &days[0].exercises[0];

        assert_eq!((squat.reps.min, squat.reps.max), (5, 12));
        assert_eq!(u32::from(squat.rest.min), 60);
    }

    #[rstest]
    #[case::object(r#"{"name": "A", "exercises": []}"#, "Invalid program format: expected an array")]
    #[case::missing_name(r#"[{"exercises": []}]"#, "Invalid workout day format at index 0")]
    #[case::blank_name(r#"[{"name": " ", "exercises": []}]"#, "Invalid workout day format at index 0")]
    #[case::exercises_not_array(
        r#"[{"name": "A", "exercises": []}, {"name": "B", "exercises": {}}]"#,
        "Invalid workout day format at index 1"
    )]
    #[case::missing_exercise_name(
        r#"[{"name": "A", "exercises": [{"name": "Squat", "sets": 3}, {"sets": 3}]}]"#,
        "Invalid exercise format at day 0, exercise 1"
    )]
    #[case::sets_as_string(
        r#"[{"name": "A", "exercises": [{"name": "Squat", "sets": "3"}]}]"#,
        "Invalid exercise format at day 0, exercise 0"
    )]
    #[case::rest_out_of_range(
        r#"[{"name": "A", "exercises": [{"name": "Squat", "sets": 3, "restMax": 4000}]}]"#,
        "Invalid exercise format at day 0, exercise 0"
    )]
    #[case::no_sets(
        r#"[{"name": "A", "exercises": [{"name": "Squat", "sets": 0}]}]"#,
        "Invalid exercise at day 0, exercise 0: Exercise must have at least one set"
    )]
    #[case::inverted_reps(
        r#"[{"name": "A", "exercises": [{"name": "Squat", "sets": 3, "repsMin": 15}]}]"#,
        "Invalid exercise at day 0, exercise 0: Minimum reps must not exceed maximum reps"
    )]
    fn test_parse_workout_days_invalid(#[case] reply: &str, #[case] message: &str) {
        assert_eq!(parse_workout_days(reply).unwrap_err().to_string(), message);
    }

    #[test]
    fn test_parse_workout_days_invalid_json() {
        assert!(matches!(
            parse_workout_days("Here is your program:"),
            Err(ImportError::Json(_))
        ));
    }
}
