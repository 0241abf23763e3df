//! Input checks run before anything is drawn.
//!
//! Paired series are never truncated to the shorter length; a mismatch is an error.

use super::errors::PlotError;

type Result<T> = core::result::Result<T, PlotError>;

/// Fails with [`PlotError::LengthMismatch`] unless both series have the same length.
pub fn ensure_same_length(
    left: &'static str,
    left_len: usize,
    right: &'static str,
    right_len: usize,
) -> Result<()> {
    if left_len != right_len {
        return Err(PlotError::LengthMismatch {
            left,
            left_len,
            right,
            right_len,
        });
    }

    Ok(())
}

pub fn ensure_non_empty(name: &str, values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(PlotError::InvalidData(format!("`{}` cannot be empty", name)));
    }

    Ok(())
}

/// Fails with [`PlotError::InvalidData`] on the first NaN or infinite value.
pub fn ensure_finite(name: &str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PlotError::InvalidData(format!(
            "`{}` holds a non-finite value ({}) at index {}",
            name, values[index], index
        ))),
        None => Ok(()),
    }
}

/// Converts frequencies to periods (`1 / frequency`).
///
/// # Errors
///
/// * [`PlotError::ZeroFrequency`] - A frequency is exactly zero.
/// * [`PlotError::InvalidData`] - A frequency is negative or non-finite, or so
///   close to zero that its period overflows; the resulting period cannot be
///   placed on a logarithmic axis.
pub fn frequencies_to_periods(frequency: &[f64]) -> Result<Vec<f64>> {
    frequency
        .iter()
        .enumerate()
        .map(|(index, &f)| {
            if f == 0.0 {
                return Err(PlotError::ZeroFrequency { index });
            }
            if !f.is_finite() || f < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "Frequency {} at index {} has no positive period",
                    f, index
                )));
            }

            let period = 1.0 / f;
            if !period.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "Frequency {:e} at index {} has a period too large to plot",
                    f, index
                )));
            }
            Ok(period)
        })
        .collect()
}
