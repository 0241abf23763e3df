//! In-memory rendering target for charts.
//!
//! Each chart owns a [`Canvas`]: an RGB buffer wrapped by plotters'
//! [`BitMapBackend`]. Once drawing is finished the buffer is cropped to its
//! content (see [`content_bounds`]) and encoded with the [`image`] crate, which
//! picks the file format from the output path's extension.

use super::errors::PlotError;
use crate::api::plot_settings::PlotSettings;
use image::{imageops, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

type Result<T> = core::result::Result<T, PlotError>;

/// Colour the canvas is cleared to; anything else counts as content when cropping.
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

const BYTES_PER_PIXEL: usize = 3;

/// A pixel rectangle within a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// An RGB drawing surface owned by a single chart.
pub struct Canvas {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl Canvas {
    /// Creates a blank canvas sized according to `settings`.
    pub fn new(settings: &PlotSettings) -> Self {
        let (width, height) = (settings.width, settings.height);
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        let buffer = BACKGROUND.iter().copied().cycle().take(len).collect();

        Self {
            width,
            height,
            buffer,
        }
    }

    /// Returns a plotters drawing area covering the whole canvas.
    ///
    /// The area borrows the canvas; drop it (or let it go out of scope) before
    /// calling [`Canvas::save`].
    pub fn drawing_area(&mut self) -> DrawingArea<BitMapBackend<'_>, Shift> {
        BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height)).into_drawing_area()
    }

    /// Encodes the canvas to `output_path`, cropping to content if requested.
    ///
    /// # Returns
    ///
    /// The dimensions of the written image.
    pub fn save(self, output_path: &Path, settings: &PlotSettings) -> Result<(u32, u32)> {
        let bounds = settings
            .tight_crop
            .then(|| content_bounds(&self.buffer, self.width, self.height))
            .flatten()
            .map(|bounds| pad_bounds(bounds, settings.crop_padding, self.width, self.height));

        let image = RgbImage::from_raw(self.width, self.height, self.buffer).ok_or_else(|| {
            PlotError::DrawingArea("Canvas buffer does not match its dimensions".to_string())
        })?;

        let image = match bounds {
            Some(b) => imageops::crop_imm(&image, b.x, b.y, b.width, b.height).to_image(),
            None => image,
        };

        image.save(output_path)?;
        Ok(image.dimensions())
    }
}

/// Finds the smallest rectangle holding every non-background pixel.
///
/// Returns [`None`] for a blank canvas.
pub fn content_bounds(buffer: &[u8], width: u32, height: u32) -> Option<PixelBounds> {
    let row_len = width as usize * BYTES_PER_PIXEL;
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;

    for (y, row) in buffer.chunks_exact(row_len).take(height as usize).enumerate() {
        for (x, pixel) in row.chunks_exact(BYTES_PER_PIXEL).enumerate() {
            if pixel == BACKGROUND {
                continue;
            }

            min_x = min_x.min(x as u32);
            max_x = max_x.max(x as u32);
            min_y = min_y.min(y as u32);
            max_y = max_y.max(y as u32);
        }
    }

    (min_x <= max_x).then(|| PixelBounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Grows `bounds` by `padding` pixels on each side, clamped to the canvas.
pub fn pad_bounds(bounds: PixelBounds, padding: u32, width: u32, height: u32) -> PixelBounds {
    let x = bounds.x.saturating_sub(padding);
    let y = bounds.y.saturating_sub(padding);
    let right = (bounds.x + bounds.width).saturating_add(padding).min(width);
    let bottom = (bounds.y + bounds.height).saturating_add(padding).min(height);

    PixelBounds {
        x,
        y,
        width: right - x,
        height: bottom - y,
    }
}
