/// The smallest canvas edge, in pixels, that the user is allowed to specify.
pub const MIN_DIMENSION: u32 = 200;

/// The largest canvas edge, in pixels, that the user is allowed to specify.
pub const MAX_DIMENSION: u32 = 8192;

/// Largest padding, in pixels, kept around the content after cropping.
pub const MAX_CROP_PADDING: u32 = 200;

/// Controls how charts are rendered and written to disk.
///
/// # Remarks
///
/// Charts are drawn on a canvas of [`Self::width`] x [`Self::height`] pixels.
/// With [`Self::tight_crop`] enabled, the blank border around the drawn content
/// is removed before saving, leaving [`Self::crop_padding`] pixels of margin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    /// Canvas width in pixels.\
    /// Range is [`MIN_DIMENSION`] to [`MAX_DIMENSION`].
    pub width: u32,

    /// Canvas height in pixels.\
    /// Range is [`MIN_DIMENSION`] to [`MAX_DIMENSION`].
    pub height: u32,

    /// Optional caption drawn above the chart.
    pub caption: Option<String>,

    /// Font size of the caption.
    pub caption_font_size: u32,

    /// Font size of the axis descriptions (e.g. `Power`, `Phase`).
    pub axis_desc_font_size: u32,

    /// Font size of the tick labels.
    pub label_font_size: u32,

    /// Crop the saved image to the drawn content.
    pub tight_crop: bool,

    /// Margin kept around the content when cropping.\
    /// Range is 0 to [`MAX_CROP_PADDING`].
    pub crop_padding: u32,
}

impl PlotSettings {
    /// Creates a new `PlotSettings` with default values.
    pub fn new() -> Self {
        PlotSettings {
            width: 1200,
            height: 800,
            caption: None,
            caption_font_size: 40,
            axis_desc_font_size: 35,
            label_font_size: 25,
            tight_crop: true,
            crop_padding: 10,
        }
    }

    /// Sets the caption drawn above the chart.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sanitizes settings to acceptable values if they are out of range.
    pub fn sanitize(&mut self) {
        self.width = self.width.clamp(MIN_DIMENSION, MAX_DIMENSION);
        self.height = self.height.clamp(MIN_DIMENSION, MAX_DIMENSION);
        self.crop_padding = self.crop_padding.min(MAX_CROP_PADDING);

        // Zero-sized fonts make plotters fail on layout.
        self.caption_font_size = self.caption_font_size.max(1);
        self.axis_desc_font_size = self.axis_desc_font_size.max(1);
        self.label_font_size = self.label_font_size.max(1);
    }

    /// Returns a sanitized copy of these settings.
    pub fn sanitized(&self) -> Self {
        let mut copy = self.clone();
        copy.sanitize();
        copy
    }
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self::new()
    }
}
