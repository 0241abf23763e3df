/// How the number of completed cycles is derived from the raw cycle count.
///
/// # Remarks
///
/// Both modes agree whenever a timestamp lies at or after the reference epoch.
/// They only differ when an explicit reference epoch is later than some
/// timestamps, i.e. when the elapsed time is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleRounding {
    /// Truncate toward zero.
    ///
    /// Negative elapsed times produce phases in (-1, 0].
    #[default]
    TowardZero,

    /// Round toward negative infinity.
    ///
    /// Every phase lands in [0, 1) regardless of the sign of the elapsed time.
    Floor,
}

/// Controls how timestamps are folded into phases.
///
/// # Remarks
///
/// The defaults fold relative to the earliest timestamp, report phases in [0, 1)
/// and truncate cycle counts toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FoldOptions {
    /// Epoch (MJD) that maps to phase zero.
    /// When [`None`], the minimum of the folded timestamps is used.
    pub reference_epoch: Option<f64>,

    /// Shift every phase by -0.5 so the range becomes [-0.5, 0.5).
    pub centered_zero: bool,

    /// Rounding applied when counting completed cycles.
    pub rounding: CycleRounding,
}

impl FoldOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds relative to the given epoch instead of the earliest timestamp.
    pub fn with_reference_epoch(mut self, epoch: f64) -> Self {
        self.reference_epoch = Some(epoch);
        self
    }

    /// Reports phases in [-0.5, 0.5) instead of [0, 1).
    pub fn centered(mut self) -> Self {
        self.centered_zero = true;
        self
    }

    pub fn with_rounding(mut self, rounding: CycleRounding) -> Self {
        self.rounding = rounding;
        self
    }
}
