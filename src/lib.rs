//! # NSC Variability
//! Timeseries helpers for variable star light curves.
//!
//! - [`timeseries::phase_fold`] folds Mean Julian Dates into a periodic phase.
//! - [`plots::periodogram`] renders power against period on a log axis.
//! - [`plots::phased_lightcurve`] renders magnitude against phase, optionally per filter.
//! - [`statistics::most_frequent`] finds the modal value of a sequence.
//!
//! ```no_run
//! use nsc_variability::timeseries::phase_fold::phase_fold;
//! use nsc_variability::api::light_curve::PhasedLightCurve;
//! use nsc_variability::plots::phased_lightcurve::plot_phased_lightcurve;
//!
//! let mjd = [58000.10, 58000.35, 58000.61, 58001.02];
//! let mags = [17.20, 17.45, 17.31, 17.22];
//! let phase = phase_fold(&mjd, 0.5);
//!
//! let curve = PhasedLightCurve::new(&phase, &mags);
//! plot_phased_lightcurve(&curve, "timecurve.png")?;
//! # Ok::<(), nsc_variability::plots::errors::PlotError>(())
//! ```

/// Public High Level API
///
/// Option and input types shared by the folding and plotting routines.
pub mod api {
    pub mod fold_options;
    pub mod light_curve;
    pub mod plot_settings;
}

/// Numeric transformations over observation timestamps.
pub mod timeseries {
    pub mod phase_fold;
}

/// Summary statistics over arbitrary sequences.
pub mod statistics {
    pub mod most_frequent;
}

/// Chart rendering.
///
/// Every chart is drawn into its own in-memory buffer, cropped to its content
/// and written out in the format implied by the output path's extension.
pub mod plots {
    pub mod axes;
    pub mod canvas;
    pub mod errors;
    pub mod periodogram;
    pub mod phased_lightcurve;
    pub mod validation;
}

pub mod utilities {
    #[cfg(test)]
    pub mod tests {
        pub mod logging;
    }
}
