use log::warn;

use crate::{ExerciseLog, ExperienceLevel, Weight};

/// Relative weight change if the last session was too easy or too hard.
const WEIGHT_STEP: f32 = 0.05;
/// Number of sessions below which a suggestion is considered uncertain.
const SUFFICIENT_HISTORY: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct WeightProgression {
    pub current_weight: Weight,
    pub suggested_weight: Weight,
    /// Value between 0 and 1.
    pub confidence: f32,
    pub reason: String,
}

impl WeightProgression {
    fn no_data() -> Self {
        Self {
            current_weight: Weight::default(),
            suggested_weight: Weight::default(),
            confidence: 0.0,
            reason: "No previous data available".to_string(),
        }
    }
}

/// Suggest the working weight for the next session of an exercise.
///
/// `history` must be ordered most recent first. Only the most recent session
/// is evaluated: if its average RPE is below the level's band the heaviest
/// weight is increased by 5 %, above the band it is decreased by 5 %, and
/// otherwise kept. The suggestion is rounded to 0.5 kg.
#[must_use]
pub fn suggest_weight(history: &[ExerciseLog], level: ExperienceLevel) -> WeightProgression {
    let Some(last) = history.first() else {
        return WeightProgression::no_data();
    };
    let (Some(avg_rpe), Some(max_weight)) = (last.avg_rpe(), last.max_weight()) else {
        warn!(
            "ignoring history of {} without any sets",
            last.exercise_name
        );
        return WeightProgression::no_data();
    };

    let band = level.rpe_band();
    let max_weight_value = f32::from(max_weight);
    let change = max_weight_value * WEIGHT_STEP;

    let (suggested_weight, mut confidence, mut reason) = if avg_rpe < f32::from(band.min) {
        (
            max_weight_value + change,
            0.9,
            format!(
                "Average RPE ({avg_rpe:.1}) below target range ({}-{}). Suggesting {change:.1}kg increase.",
                band.min, band.max
            ),
        )
    } else if avg_rpe > f32::from(band.max) {
        (
            max_weight_value - change,
            0.9,
            format!(
                "Average RPE ({avg_rpe:.1}) above target range ({}-{}). Suggesting {change:.1}kg decrease.",
                band.min, band.max
            ),
        )
    } else {
        (
            max_weight_value,
            1.0,
            format!(
                "Average RPE ({avg_rpe:.1}) within target range ({}-{}). Maintaining current weight.",
                band.min, band.max
            ),
        )
    };

    if history.len() < SUFFICIENT_HISTORY {
        confidence *= 0.8;
        reason.push_str(" Limited historical data available.");
    }

    WeightProgression {
        current_weight: max_weight,
        suggested_weight: Weight::clamped((suggested_weight * 2.0).round() / 2.0),
        confidence,
        reason,
    }
}
