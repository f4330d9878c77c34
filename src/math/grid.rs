//! Log-spaced grids for mass sweeps.
//!
//! Astrophysical mass ranges span many orders of magnitude, so sweeps are
//! uniform in `log10(M)`. Semantics follow the usual `logspace` convention:
//! `n` points from `10^a` to `10^b`, both endpoints included.

use crate::error::AppError;

/// Generate `n` values `10^(a + i (b - a) / (n - 1))` for `i = 0..n`.
///
/// `n = 1` yields `[10^a]`.
pub fn logspace(log_min: f64, log_max: f64, n: usize) -> Result<Vec<f64>, AppError> {
    if !(log_min.is_finite() && log_max.is_finite()) {
        return Err(AppError::invalid_input(format!(
            "Sweep bounds must be finite (got log10 range [{log_min}, {log_max}])."
        )));
    }
    if n == 0 {
        return Err(AppError::invalid_input("Sweep must contain at least one point."));
    }
    if n > 1 && log_max <= log_min {
        return Err(AppError::invalid_input(format!(
            "Sweep upper bound must exceed lower bound (got log10 range [{log_min}, {log_max}])."
        )));
    }

    if n == 1 {
        return Ok(vec![10f64.powf(log_min)]);
    }

    let step = (log_max - log_min) / (n as f64 - 1.0);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        // Pin the last exponent so the upper endpoint is exact.
        let exponent = if i == n - 1 { log_max } else { log_min + i as f64 * step };
        out.push(10f64.powf(exponent));
    }
    Ok(out)
}
