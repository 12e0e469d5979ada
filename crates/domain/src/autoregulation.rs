use crate::{ExperienceLevel, RPE, SetLog, Weight};

/// Weight change per RPE point between the performed and the targeted effort.
const ADJUSTMENT_PER_RPE: f32 = 0.05;

/// Target RPE of the set at `index` out of `total` sets.
///
/// The targets ramp linearly from the lower to the upper end of the level's
/// RPE band, rounded to the nearest half point. A single set is planned at the
/// upper end.
#[must_use]
pub fn target_rpe(level: ExperienceLevel, index: usize, total: usize) -> RPE {
    let band = level.rpe_band();

    if total <= 1 {
        return band.max;
    }

    let min = f32::from(band.min);
    let max = f32::from(band.max);
    #[allow(clippy::cast_precision_loss)]
    let target = min + index as f32 * (max - min) / (total - 1) as f32;

    RPE::nearest_half(target.min(max))
}

/// Weight expected to be lifted at `target` when `weight` was lifted at `actual`.
#[must_use]
pub fn weight_for_rpe(weight: Weight, actual: RPE, target: RPE) -> Weight {
    let difference = f32::from(target) - f32::from(actual);
    let adjusted = f32::from(weight) * (1.0 + ADJUSTMENT_PER_RPE * difference);
    Weight::clamped(adjusted.round())
}

/// Replan all sets after `edited` based on the weight and RPE of the edited set.
///
/// Every following set gets its target RPE and the weight expected for it.
/// The edited set and all sets before it stay unchanged.
pub fn update_subsequent_sets(sets: &mut [SetLog], edited: usize, level: ExperienceLevel) {
    let total = sets.len();
    let Some(reference) = sets.get(edited) else {
        return;
    };
    let (weight, rpe) = (reference.weight, reference.rpe);

    for (index, set) in sets.iter_mut().enumerate().skip(edited + 1) {
        let target = target_rpe(level, index, total);
        set.weight = weight_for_rpe(weight, rpe, target);
        set.rpe = target;
    }
}
