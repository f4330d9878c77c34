//! Kathpalia Memory Relation (KMR).
//!
//! Dimensionless GW memory strain left by a tidal disruption event near a
//! primordial black hole of mass `M`:
//!
//! ```text
//! R_t = R_* (M / M_*)^(1/3)                 tidal radius
//! R_g = 2 G M / c^2                         gravitational radius
//! Δh  = N (8ε / 3π) (ΔM / M) (R_t / R_g)^-1 (v_ej / c)^2 (G / c^4) (M / D)
//! ```
//!
//! Collecting powers of `M` gives `Δh ∝ M^(2/3)`. The expression is still
//! evaluated term by term as written so results match the published curve
//! to the last few ulps rather than to an algebraically simplified variant.

use std::f64::consts::PI;

use crate::domain::{MassSweep, StrainSeries};
use crate::error::StrainError;
use crate::physics::constants::{C, D_100_MPC, G, KMR_NORMALIZATION, M_SUN, R_SUN};

/// Power-law exponent `k` in `Δh ∝ M^k`.
pub const KMR_EXPONENT: f64 = 2.0 / 3.0;

/// Model inputs for the KMR, all in CGS units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KmrParams {
    /// Mass of the disrupted star [g].
    pub m_star: f64,
    /// Radius of the disrupted star [cm].
    pub r_star: f64,
    /// Total mass ejected in the TDE [g].
    pub delta_m: f64,
    /// Ejection anisotropy, `0 < ε ≤ 1`.
    pub epsilon: f64,
    /// Distance to the observer [cm].
    pub distance: f64,
    /// Characteristic ejecta velocity [cm/s], below `c`.
    pub v_ej: f64,
    /// Empirical normalization factor.
    pub normalization: f64,
}

impl Default for KmrParams {
    /// A Sun-like star disrupted at ~100 Mpc, ejecting 1e-3 M_sun at 0.1c.
    fn default() -> Self {
        Self {
            m_star: M_SUN,
            r_star: R_SUN,
            delta_m: 0.001 * M_SUN,
            epsilon: 0.02,
            distance: D_100_MPC,
            v_ej: 0.1 * C,
            normalization: KMR_NORMALIZATION,
        }
    }
}

impl KmrParams {
    /// Check every parameter against its physical domain.
    pub fn validate(&self) -> Result<(), StrainError> {
        let positive = [
            ("m_star", self.m_star),
            ("r_star", self.r_star),
            ("delta_m", self.delta_m),
            ("distance", self.distance),
            ("normalization", self.normalization),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(StrainError::InvalidParam { name, value });
            }
        }

        if !(self.epsilon.is_finite() && self.epsilon > 0.0 && self.epsilon <= 1.0) {
            return Err(StrainError::InvalidParam {
                name: "epsilon",
                value: self.epsilon,
            });
        }
        if !(self.v_ej.is_finite() && self.v_ej > 0.0 && self.v_ej < C) {
            return Err(StrainError::InvalidParam {
                name: "v_ej",
                value: self.v_ej,
            });
        }

        Ok(())
    }
}

/// Tidal radius of the star around a PBH of the given mass [cm].
pub fn tidal_radius(mass: f64, params: &KmrParams) -> f64 {
    params.r_star * (mass / params.m_star).powf(1.0 / 3.0)
}

/// Gravitational (Schwarzschild) radius of a PBH of the given mass [cm].
pub fn gravitational_radius(mass: f64) -> f64 {
    2.0 * G * mass / C.powi(2)
}

/// Evaluate the KMR strain at a single PBH mass [g].
///
/// No validation is performed; see [`compute_strain`] for the checked sweep.
pub fn kmr_strain(mass: f64, params: &KmrParams) -> f64 {
    let rt = tidal_radius(mass, params);
    let rg = gravitational_radius(mass);

    params.normalization
        * (8.0 * params.epsilon / (3.0 * PI))
        * (params.delta_m / mass)
        * (rt / rg).powi(-1)
        * (params.v_ej / C).powi(2)
        * (G / C.powi(4))
        * (mass / params.distance)
}

/// Evaluate the KMR over a whole mass sweep.
///
/// The sweep is rejected as a whole if any mass is non-positive or non-finite;
/// the error names the first offending index.
pub fn compute_strain(masses: &MassSweep, params: &KmrParams) -> Result<StrainSeries, StrainError> {
    params.validate()?;

    if let Some((index, &value)) = masses
        .as_slice()
        .iter()
        .enumerate()
        .find(|(_, m)| !(m.is_finite() && **m > 0.0))
    {
        return Err(StrainError::InvalidMass { index, value });
    }

    let mut values = Vec::with_capacity(masses.len());
    for (index, &mass) in masses.as_slice().iter().enumerate() {
        let strain = kmr_strain(mass, params);
        if !strain.is_finite() {
            return Err(StrainError::NonFiniteStrain { index, mass });
        }
        values.push(strain);
    }

    Ok(StrainSeries::new(values))
}

/// PBH mass [g] at which the KMR strain equals `threshold`.
///
/// Inverts the power law through the stellar mass as reference point:
/// `M = M_ref (h_thr / h(M_ref))^(1/k)`.
pub fn threshold_mass(threshold: f64, params: &KmrParams) -> Option<f64> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return None;
    }

    let m_ref = params.m_star;
    let h_ref = kmr_strain(m_ref, params);
    if !(h_ref.is_finite() && h_ref > 0.0) {
        return None;
    }

    let mass = m_ref * (threshold / h_ref).powf(1.0 / KMR_EXPONENT);
    mass.is_finite().then_some(mass)
}
