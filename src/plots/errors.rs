//! Error type shared by all chart rendering functions.

use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] image::ImageError),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Length mismatch: `{left}` has {left_len} values but `{right}` has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("Frequency at index {index} is zero; its period is undefined")]
    ZeroFrequency { index: usize },
}
