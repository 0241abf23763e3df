//! Periodogram charts
//!
//! Renders power against period (`1 / frequency`) as a line chart with a
//! logarithmic period axis. The periodogram itself is computed by the caller.

use super::axes::{data_bounds, padded_linear_range, padded_log_range};
use super::canvas::Canvas;
use super::errors::PlotError;
use super::validation::{
    ensure_finite, ensure_non_empty, ensure_same_length, frequencies_to_periods,
};
use crate::api::plot_settings::PlotSettings;
use plotters::prelude::*;
use std::path::Path;

type Result<T> = core::result::Result<T, PlotError>;

/// File written by [`plot_periodogram`] when the caller has no preference.
pub const DEFAULT_PERIODOGRAM_PATH: &str = "periodogram.png";

/// Unit label used for the period axis when the caller has no preference.
pub const DEFAULT_PERIOD_UNITS: &str = "days";

/// Line width of the power curve, in pixels.
const LINE_WIDTH: u32 = 2;

/// Plots a periodogram and saves it as an image.
///
/// # Arguments
/// * `frequency` - Frequencies as `1 / period`. Must not contain zero.
/// * `power` - Power at each frequency. Must be the same length as `frequency`.
/// * `output_path` - Where to write the image; the extension picks the format.
/// * `units` - Period unit shown in the axis label, e.g. [`DEFAULT_PERIOD_UNITS`].
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If the input is malformed or the chart could not be written
///
/// # Examples
/// ```no_run
/// use nsc_variability::plots::periodogram::{plot_periodogram, DEFAULT_PERIOD_UNITS};
///
/// let frequency = [0.5, 1.0, 2.0, 4.0];
/// let power = [0.1, 0.8, 0.3, 0.05];
/// plot_periodogram(&frequency, &power, "periodogram.png", DEFAULT_PERIOD_UNITS)?;
/// # Ok::<(), nsc_variability::plots::errors::PlotError>(())
/// ```
pub fn plot_periodogram(
    frequency: &[f64],
    power: &[f64],
    output_path: impl AsRef<Path>,
    units: &str,
) -> Result<()> {
    plot_periodogram_with_settings(frequency, power, output_path, units, &PlotSettings::new())
}

/// Plots a periodogram with custom rendering settings.
///
/// See [`plot_periodogram`] for the meaning of the arguments.
/// `settings` are sanitized before use.
pub fn plot_periodogram_with_settings(
    frequency: &[f64],
    power: &[f64],
    output_path: impl AsRef<Path>,
    units: &str,
    settings: &PlotSettings,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let settings = settings.sanitized();

    ensure_non_empty("frequency", frequency)?;
    ensure_same_length("frequency", frequency.len(), "power", power.len())?;
    ensure_finite("power", power)?;
    let periods = frequencies_to_periods(frequency)?;

    let mut canvas = Canvas::new(&settings);
    draw_periodogram(&mut canvas, &periods, power, units, &settings)?;
    let (width, height) = canvas.save(output_path, &settings)?;

    tracing::debug!(
        path = %output_path.display(),
        points = periods.len(),
        width,
        height,
        "saved periodogram"
    );
    Ok(())
}

fn draw_periodogram(
    canvas: &mut Canvas,
    periods: &[f64],
    power: &[f64],
    units: &str,
    settings: &PlotSettings,
) -> Result<()> {
    let drawing_area = canvas.drawing_area();
    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Validation guarantees at least one finite, positive period and finite power.
    let (x_min, x_max) = data_bounds(periods.iter().copied())
        .ok_or_else(|| PlotError::InvalidData("No periods to plot".to_string()))?;
    let (y_min, y_max) = data_bounds(power.iter().copied())
        .ok_or_else(|| PlotError::InvalidData("No power values to plot".to_string()))?;

    let x_range = padded_log_range(x_min, x_max).ok_or_else(|| {
        PlotError::InvalidData(format!(
            "Periods {:e}..{:e} do not fit on a finite axis",
            x_min, x_max
        ))
    })?;
    let y_range = padded_linear_range(y_min, y_max).ok_or_else(|| {
        PlotError::InvalidData(format!(
            "Power {:e}..{:e} does not fit on a finite axis",
            y_min, y_max
        ))
    })?;

    let mut builder = ChartBuilder::on(&drawing_area);
    builder
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85);
    if let Some(caption) = &settings.caption {
        builder.caption(caption, ("sans-serif", settings.caption_font_size));
    }

    let mut chart_context = builder
        .build_cartesian_2d(x_range.log_scale(), y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc(format!("Period ({})", units))
        .y_desc("Power")
        .axis_desc_style(("sans-serif", settings.axis_desc_font_size))
        .label_style(("sans-serif", settings.label_font_size))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(LineSeries::new(
            periods.iter().copied().zip(power.iter().copied()),
            BLACK.stroke_width(LINE_WIDTH),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
