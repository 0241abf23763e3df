//! Axis range computation.
//!
//! Ranges are padded by [`AXIS_MARGIN`] of their span on each side so markers at
//! the extremes are not clipped by the plot frame.

use core::ops::Range;

/// Fraction of the data span added on each side of an axis.
pub const AXIS_MARGIN: f64 = 0.05;

/// Returns the minimum and maximum of `values`, ignoring NaNs.
///
/// Returns [`None`] if no value is comparable.
pub fn data_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });

    (min <= max).then_some((min, max))
}

/// Pads `min..max` for a linear axis.
///
/// A degenerate range (`min == max`) is widened around the single value.
/// Returns [`None`] if the padded range or its span is not finite.
pub fn padded_linear_range(min: f64, max: f64) -> Option<Range<f64>> {
    let span = max - min;
    let range = if span <= 0.0 {
        let half = if min == 0.0 { 0.5 } else { min.abs() * AXIS_MARGIN };
        (min - half)..(max + half)
    } else {
        let pad = span * AXIS_MARGIN;
        (min - pad)..(max + pad)
    };

    finite_range(range)
}

/// Pads `min..max` for a logarithmic axis. Both bounds must be positive.
///
/// Padding is applied in log space; a degenerate range is widened to one decade
/// centered on the single value. Returns [`None`] if the padded range or its
/// span is not finite.
pub fn padded_log_range(min: f64, max: f64) -> Option<Range<f64>> {
    let (log_min, log_max) = (min.log10(), max.log10());
    let span = log_max - log_min;
    let range = if span <= 0.0 {
        (min / 10f64.sqrt())..(max * 10f64.sqrt())
    } else {
        let pad = span * AXIS_MARGIN;
        10f64.powf(log_min - pad)..10f64.powf(log_max + pad)
    };

    finite_range(range)
}

/// Plotters cannot lay out ticks on an unbounded axis.
fn finite_range(range: Range<f64>) -> Option<Range<f64>> {
    let finite = range.start.is_finite()
        && range.end.is_finite()
        && (range.end - range.start).is_finite();

    finite.then_some(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_ignore_nan() {
        assert_eq!(data_bounds([3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
    }

    #[test]
    fn bounds_of_nothing_is_none() {
        assert_eq!(data_bounds([]), None);
        assert_eq!(data_bounds([f64::NAN]), None);
    }

    #[test]
    fn linear_range_is_padded() {
        let range = padded_linear_range(0.0, 10.0).unwrap();
        assert!((range.start + 0.5).abs() < 1e-12);
        assert!((range.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_linear_range_is_widened() {
        let range = padded_linear_range(17.0, 17.0).unwrap();
        assert!(range.start < 17.0 && range.end > 17.0);

        let zero = padded_linear_range(0.0, 0.0).unwrap();
        assert_eq!(zero, -0.5..0.5);
    }

    #[test]
    fn log_range_pads_in_log_space() {
        let range = padded_log_range(0.1, 1000.0).unwrap();
        // Four decades, padded by 0.2 decades each side.
        assert!((range.start.log10() + 1.2).abs() < 1e-9);
        assert!((range.end.log10() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn degenerate_log_range_spans_a_decade() {
        let range = padded_log_range(2.0, 2.0).unwrap();
        assert!(((range.end / range.start) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn overflowing_linear_span_has_no_range() {
        // Both bounds are finite but their difference is not.
        assert_eq!(padded_linear_range(-1e308, 1e308), None);
        assert_eq!(padded_linear_range(f64::MAX, f64::MAX), None);
        assert_eq!(padded_linear_range(17.0, f64::INFINITY), None);
    }

    #[test]
    fn overflowing_log_bounds_have_no_range() {
        assert_eq!(padded_log_range(1.0, 1e308), None);
        assert_eq!(padded_log_range(1.0, f64::INFINITY), None);
    }
}
