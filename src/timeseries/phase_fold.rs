use crate::api::fold_options::{CycleRounding, FoldOptions};

/// Folds a series of dates into phases of the given period.
///
/// Phases are measured from the earliest timestamp and lie in [0, 1).
/// See [`phase_fold_with_options`] for a custom reference epoch, centered phases
/// or floor rounding.
///
/// # Arguments
///
/// * `timestamps` - Dates to fold, in Mean Julian Date (MJD).
/// * `period` - Period to fold on, in days.
///
/// # Returns
///
/// One phase per timestamp, in input order.
pub fn phase_fold(timestamps: &[f64], period: f64) -> Vec<f64> {
    phase_fold_with_options(timestamps, period, &FoldOptions::default())
}

/// Folds a series of dates into phases of the given period.
///
/// # Arguments
///
/// * `timestamps` - Dates to fold, in Mean Julian Date (MJD).
/// * `period` - Period to fold on, in days. Should be positive.
/// * `options` - Reference epoch, centering and cycle rounding.
///
/// # Remarks
///
/// A zero period produces infinite or NaN phases; these are returned as-is.
///
/// With [`CycleRounding::TowardZero`], timestamps earlier than an explicit
/// reference epoch fold into (-1, 0] rather than [0, 1).
pub fn phase_fold_with_options(timestamps: &[f64], period: f64, options: &FoldOptions) -> Vec<f64> {
    if timestamps.is_empty() {
        return Vec::new();
    }

    if !(period.is_finite() && period > 0.0) {
        tracing::warn!(period, "folding with a non-positive or non-finite period");
    }

    let reference = options
        .reference_epoch
        .unwrap_or_else(|| timestamps.iter().copied().fold(f64::INFINITY, f64::min));
    let offset = if options.centered_zero { 0.5 } else { 0.0 };

    timestamps
        .iter()
        .map(|&t| {
            let raw_cycles = (t - reference) / period;
            let completed = match options.rounding {
                CycleRounding::TowardZero => raw_cycles.trunc(),
                CycleRounding::Floor => raw_cycles.floor(),
            };
            raw_cycles - completed - offset
        })
        .collect()
}
