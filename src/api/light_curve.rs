use crate::plots::errors::PlotError;
use crate::plots::validation::{ensure_finite, ensure_non_empty, ensure_same_length};
use derive_new::new;
use std::collections::BTreeMap;

/// A phase-folded light curve borrowed from caller-owned slices.
///
/// # Remarks
///
/// All provided slices must be of equal length; this is checked by
/// [`PhasedLightCurve::validate`] before anything is drawn.
#[derive(Debug, Clone, Copy, new)]
pub struct PhasedLightCurve<'a> {
    /// Phase of each exposure.
    pub phase: &'a [f64],

    /// Magnitude of the object in each exposure.
    pub magnitudes: &'a [f64],

    /// Magnitude uncertainty of each exposure, drawn as vertical error bars.
    #[new(default)]
    pub magnitude_errors: Option<&'a [f64]>,

    /// Photometric filter of each exposure (e.g. `g`, `r`, `i`).
    /// When absent, all exposures are treated as a single unlabeled group.
    #[new(default)]
    pub filters: Option<&'a [&'a str]>,
}

/// A subset of a [`PhasedLightCurve`] sharing one filter label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightCurveGroup<'a> {
    /// Filter label, or [`None`] for the single group of an unfiltered curve.
    pub label: Option<&'a str>,

    /// Indices into the light curve's slices, in input order.
    pub indices: Vec<usize>,
}

impl<'a> PhasedLightCurve<'a> {
    /// Attaches magnitude uncertainties.
    pub fn with_errors(mut self, magnitude_errors: &'a [f64]) -> Self {
        self.magnitude_errors = Some(magnitude_errors);
        self
    }

    /// Attaches per-exposure filter labels.
    pub fn with_filters(mut self, filters: &'a [&'a str]) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Number of exposures in the curve.
    pub fn len(&self) -> usize {
        self.phase.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phase.is_empty()
    }

    /// Checks that every provided series has the same length and holds finite values.
    pub fn validate(&self) -> Result<(), PlotError> {
        ensure_non_empty("phase", self.phase)?;
        ensure_same_length("phase", self.phase.len(), "magnitudes", self.magnitudes.len())?;
        if let Some(errors) = self.magnitude_errors {
            ensure_same_length("phase", self.phase.len(), "magnitude_errors", errors.len())?;
            ensure_finite("magnitude_errors", errors)?;
        }
        if let Some(filters) = self.filters {
            ensure_same_length("phase", self.phase.len(), "filters", filters.len())?;
        }

        ensure_finite("phase", self.phase)?;
        ensure_finite("magnitudes", self.magnitudes)?;
        Ok(())
    }

    /// Partitions the exposures by filter label.
    ///
    /// Groups are returned in ascending label order. Without filters, a single
    /// group with no label covering every exposure is returned.
    pub fn groups(&self) -> Vec<LightCurveGroup<'a>> {
        let Some(filters) = self.filters else {
            return vec![LightCurveGroup {
                label: None,
                indices: (0..self.len()).collect(),
            }];
        };

        let mut by_label: BTreeMap<&'a str, Vec<usize>> = BTreeMap::new();
        for (index, &label) in filters.iter().enumerate() {
            by_label.entry(label).or_default().push(index);
        }

        tracing::trace!(groups = by_label.len(), "partitioned light curve by filter");
        by_label
            .into_iter()
            .map(|(label, indices)| LightCurveGroup {
                label: Some(label),
                indices,
            })
            .collect()
    }
}
