//! The straight-line computation behind `kmr`: sweep, evaluate, diagnose.
//!
//! Kept free of printing and plotting so tests can run it end to end.

use crate::domain::{MassSweep, StrainSeries, SweepConfig, curve_points};
use crate::error::AppError;
use crate::math::{PowerLawFit, fit_power_law, logspace};
use crate::physics::{KmrParams, compute_strain, threshold_mass};

/// In-memory results of one run.
#[derive(Debug, Clone)]
pub struct StrainRun {
    pub params: KmrParams,
    pub masses: MassSweep,
    pub strains: StrainSeries,
    /// Least-squares power law through the computed points (needs >= 2 masses).
    pub fit: Option<PowerLawFit>,
    /// Mass at which the strain reaches the configured sensitivity.
    pub threshold_mass: Option<f64>,
}

/// Model parameters for a run: defaults with the CLI overrides applied.
pub fn params_from_config(config: &SweepConfig) -> KmrParams {
    KmrParams {
        epsilon: config.epsilon,
        distance: config.distance,
        ..KmrParams::default()
    }
}

/// Build the log-spaced mass sweep described by the config.
pub fn build_sweep(config: &SweepConfig) -> Result<MassSweep, AppError> {
    Ok(MassSweep::new(logspace(config.log_min, config.log_max, config.points)?))
}

/// Run the full computation for a config.
pub fn run_sweep(config: &SweepConfig) -> Result<StrainRun, AppError> {
    if !(config.sensitivity.is_finite() && config.sensitivity > 0.0) {
        return Err(AppError::invalid_input(format!(
            "Invalid input: sensitivity must be finite and > 0 (got {}).",
            config.sensitivity
        )));
    }

    let params = params_from_config(config);
    let masses = build_sweep(config)?;
    log::debug!("KMR parameters: {params:?}");
    if let Some((lo, hi)) = masses.bounds() {
        log::debug!("Mass sweep: n={} | [{lo:.3e}, {hi:.3e}] g", masses.len());
    }

    let strains = compute_strain(&masses, &params)?;

    let fit = fit_power_law(&curve_points(&masses, &strains));
    let threshold_mass = threshold_mass(config.sensitivity, &params);

    Ok(StrainRun {
        params,
        masses,
        strains,
        fit,
        threshold_mass,
    })
}
