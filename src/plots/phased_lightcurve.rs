//! Phase-folded light curve charts
//!
//! Scatter plots of magnitude against phase. Exposures carrying filter labels are
//! drawn as one coloured, labeled series per filter; unfiltered curves are drawn
//! as a single series with no legend.

use super::axes::{data_bounds, padded_linear_range};
use super::canvas::Canvas;
use super::errors::PlotError;
use crate::api::light_curve::{LightCurveGroup, PhasedLightCurve};
use crate::api::plot_settings::PlotSettings;
use plotters::prelude::*;
use std::path::Path;

type Result<T> = core::result::Result<T, PlotError>;

/// File written by [`plot_phased_lightcurve`] when the caller has no preference.
pub const DEFAULT_LIGHTCURVE_PATH: &str = "timecurve.png";

/// Radius of a scatter marker, in pixels.
const MARKER_SIZE: u32 = 3;

/// Legend markers are drawn larger than the scatter markers for readability.
const LEGEND_MARKER_SCALE: u32 = 2;

const ERROR_BAR_COLOR: RGBColor = RGBColor(128, 128, 128);
const ERROR_BAR_OPACITY: f64 = 0.7;
const ERROR_BAR_WIDTH: u32 = 2;

/// Colour of the single series of an unfiltered curve.
const UNFILTERED_COLOR: RGBColor = BLUE;

/// Plots a phase-folded light curve and saves it as an image.
///
/// # Arguments
/// * `curve` - Phases and magnitudes, with optional errors and filter labels.
/// * `output_path` - Where to write the image; the extension picks the format.
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If the input is malformed or the chart could not be written
///
/// # Examples
/// ```no_run
/// use nsc_variability::api::light_curve::PhasedLightCurve;
/// use nsc_variability::plots::phased_lightcurve::{
///     plot_phased_lightcurve, DEFAULT_LIGHTCURVE_PATH,
/// };
///
/// let phase = [0.05, 0.31, 0.52, 0.77];
/// let mags = [17.2, 17.6, 17.4, 17.1];
/// let errs = [0.02, 0.03, 0.02, 0.04];
/// let filters = ["g", "r", "g", "r"];
///
/// let curve = PhasedLightCurve::new(&phase, &mags)
///     .with_errors(&errs)
///     .with_filters(&filters);
/// plot_phased_lightcurve(&curve, DEFAULT_LIGHTCURVE_PATH)?;
/// # Ok::<(), nsc_variability::plots::errors::PlotError>(())
/// ```
pub fn plot_phased_lightcurve(
    curve: &PhasedLightCurve<'_>,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    plot_phased_lightcurve_with_settings(curve, output_path, &PlotSettings::new())
}

/// Plots a phase-folded light curve with custom rendering settings.
///
/// `settings` are sanitized before use.
pub fn plot_phased_lightcurve_with_settings(
    curve: &PhasedLightCurve<'_>,
    output_path: impl AsRef<Path>,
    settings: &PlotSettings,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let settings = settings.sanitized();

    curve.validate()?;
    let groups = curve.groups();

    let mut canvas = Canvas::new(&settings);
    draw_phased_lightcurve(&mut canvas, curve, &groups, &settings)?;
    let (width, height) = canvas.save(output_path, &settings)?;

    tracing::debug!(
        path = %output_path.display(),
        points = curve.len(),
        groups = groups.len(),
        width,
        height,
        "saved phased light curve"
    );
    Ok(())
}

/// Vertical extent of the data, including error bars when present.
fn magnitude_bounds(curve: &PhasedLightCurve<'_>) -> Option<(f64, f64)> {
    match curve.magnitude_errors {
        Some(errors) => data_bounds(
            curve
                .magnitudes
                .iter()
                .zip(errors)
                .flat_map(|(m, e)| [m - e.abs(), m + e.abs()]),
        ),
        None => data_bounds(curve.magnitudes.iter().copied()),
    }
}

fn draw_phased_lightcurve(
    canvas: &mut Canvas,
    curve: &PhasedLightCurve<'_>,
    groups: &[LightCurveGroup<'_>],
    settings: &PlotSettings,
) -> Result<()> {
    let drawing_area = canvas.drawing_area();
    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (x_min, x_max) = data_bounds(curve.phase.iter().copied())
        .ok_or_else(|| PlotError::InvalidData("No phases to plot".to_string()))?;
    let (y_min, y_max) = magnitude_bounds(curve)
        .ok_or_else(|| PlotError::InvalidData("No magnitudes to plot".to_string()))?;

    let x_range = padded_linear_range(x_min, x_max).ok_or_else(|| {
        PlotError::InvalidData(format!(
            "Phases {:e}..{:e} do not fit on a finite axis",
            x_min, x_max
        ))
    })?;
    // Error bars can push finite magnitudes past the representable range.
    let y_range = padded_linear_range(y_min, y_max).ok_or_else(|| {
        PlotError::InvalidData(format!(
            "Magnitudes {:e}..{:e} do not fit on a finite axis",
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
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc("Phase")
        .y_desc("Magnitude")
        .axis_desc_style(("sans-serif", settings.axis_desc_font_size))
        .label_style(("sans-serif", settings.label_font_size))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (position, group) in groups.iter().enumerate() {
        let color = match group.label {
            Some(_) => Palette99::pick(position).to_rgba(),
            None => UNFILTERED_COLOR.to_rgba(),
        };

        let annotation = chart_context
            .draw_series(group.indices.iter().map(|&i| {
                Circle::new(
                    (curve.phase[i], curve.magnitudes[i]),
                    MARKER_SIZE,
                    color.filled(),
                )
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        // Unfiltered curves get no legend entry.
        if let Some(label) = group.label {
            annotation.label(label).legend(move |(x, y)| {
                Circle::new((x + 10, y), MARKER_SIZE * LEGEND_MARKER_SCALE, color.filled())
            });
        }

        if let Some(errors) = curve.magnitude_errors {
            chart_context
                .draw_series(group.indices.iter().map(|&i| {
                    let (phase, magnitude, error) =
                        (curve.phase[i], curve.magnitudes[i], errors[i].abs());
                    ErrorBar::new_vertical(
                        phase,
                        magnitude - error,
                        magnitude,
                        magnitude + error,
                        ERROR_BAR_COLOR
                            .mix(ERROR_BAR_OPACITY)
                            .stroke_width(ERROR_BAR_WIDTH),
                        0,
                    )
                }))
                .map_err(|e| PlotError::Drawing(e.to_string()))?;
        }
    }

    if groups.iter().any(|group| group.label.is_some()) {
        chart_context
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", settings.label_font_size))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
