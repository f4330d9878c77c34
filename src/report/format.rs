//! Terminal formatting for a strain run.

use crate::app::pipeline::StrainRun;
use crate::domain::{MassUnit, StrainSeries, SweepConfig};
use crate::math::PowerLawFit;
use crate::physics::{C, KMR_EXPONENT, kmr_strain};

/// One-line strain range diagnostic, e.g. `Δh_KMR range: 5.212e-24 – 1.123e-20`.
pub fn format_strain_range(strains: &StrainSeries) -> String {
    match strains.range() {
        Some((min, max)) => format!("Δh_KMR range: {min:.3e} – {max:.3e}"),
        None => "Δh_KMR range: (empty sweep)".to_string(),
    }
}

/// Format the full run summary (model inputs + sweep + diagnostics).
pub fn format_run_summary(run: &StrainRun, config: &SweepConfig) -> String {
    let unit = config.unit;
    let p = &run.params;
    let mut out = String::new();

    out.push_str("=== kmr - GW memory from TDEs near primordial black holes ===\n");
    out.push_str(&format!(
        "Star: M*={} | R*={:.3e} cm\n",
        fmt_mass(p.m_star, unit),
        p.r_star
    ));
    out.push_str(&format!(
        "Model: ε={} | ΔM={} | D={:.3e} cm | v_ej={:.2}c\n",
        p.epsilon,
        fmt_mass(p.delta_m, unit),
        p.distance,
        p.v_ej / C
    ));

    if let Some((lo, hi)) = run.masses.bounds() {
        out.push_str(&format!(
            "Sweep: n={} | M=[{}, {}]\n",
            run.masses.len(),
            fmt_mass(lo, unit),
            fmt_mass(hi, unit)
        ));
    }

    out.push_str(&format_strain_range(&run.strains));
    out.push('\n');

    match run.fit {
        Some(fit) => out.push_str(&format!(
            "Scaling: fitted slope {:.4} (analytic {:.4}) | max deviation {:.1e}\n",
            fit.slope,
            KMR_EXPONENT,
            max_fit_deviation(run, &fit)
        )),
        None => out.push_str(&format!("Scaling: analytic slope {KMR_EXPONENT:.4} (too few points to fit)\n")),
    }

    match run.threshold_mass {
        Some(m) => out.push_str(&format!(
            "Detectability: Δh ≥ {:.1e} for M ≥ {}\n",
            config.sensitivity,
            fmt_mass(m, unit)
        )),
        None => out.push_str("Detectability: no sensitivity threshold\n"),
    }

    out
}

/// Largest relative gap between the computed strains and the fitted power law.
pub fn max_fit_deviation(run: &StrainRun, fit: &PowerLawFit) -> f64 {
    run.masses
        .as_slice()
        .iter()
        .zip(run.strains.as_slice())
        .map(|(&m, &h)| ((fit.predict(m) - h) / h).abs())
        .fold(0.0, f64::max)
}

/// Strain at each whole decade of mass inside the sweep.
pub fn format_decade_table(run: &StrainRun, unit: MassUnit) -> String {
    let mut out = String::new();
    let Some((lo, hi)) = run.masses.bounds() else {
        return out;
    };

    out.push_str(&format!("{:>14} {:>12}\n", format!("M [{}]", unit.label()), "Δh_KMR"));
    out.push_str(&format!("{:-<14} {:-<12}\n", "", ""));

    // Tolerate log10 rounding so exact powers of ten count as their own decade.
    let first = (lo.log10() - 1e-9).ceil() as i32;
    let last = (hi.log10() + 1e-9).floor() as i32;
    for decade in first..=last {
        let mass = 10f64.powi(decade);
        out.push_str(&format!(
            "{:>14.3e} {:>12.3e}\n",
            unit.from_grams(mass),
            kmr_strain(mass, &run.params)
        ));
    }

    out
}

fn fmt_mass(grams: f64, unit: MassUnit) -> String {
    format!("{:.3e} {}", unit.from_grams(grams), unit.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MassSweep;
    use crate::physics::{KmrParams, compute_strain};

    fn config() -> SweepConfig {
        SweepConfig {
            log_min: 20.0,
            log_max: 22.0,
            points: 3,
            epsilon: 0.02,
            distance: 3.1e26,
            sensitivity: 1e-23,
            unit: MassUnit::Grams,
            output: None,
            width: 800,
            height: 600,
            ascii: false,
            ascii_width: 80,
            ascii_height: 20,
            table: false,
        }
    }

    fn run() -> StrainRun {
        let params = KmrParams::default();
        let masses = MassSweep::new(vec![1e20, 1e21, 1e22]);
        let strains = compute_strain(&masses, &params).unwrap();
        StrainRun {
            params,
            masses,
            strains,
            fit: None,
            threshold_mass: Some(2.6573e20),
        }
    }

    #[test]
    fn range_line_matches_reference_format() {
        let strains = StrainSeries::new(vec![5.212359629792965e-24, 1.1229688403347716e-20]);
        assert_eq!(format_strain_range(&strains), "Δh_KMR range: 5.212e-24 – 1.123e-20");
    }

    #[test]
    fn summary_mentions_sweep_and_threshold() {
        let txt = format_run_summary(&run(), &config());
        assert!(txt.contains("Sweep: n=3 | M=[1.000e20 g, 1.000e22 g]"), "{txt}");
        assert!(txt.contains("Δh_KMR range: 5.212e-24"), "{txt}");
        assert!(txt.contains("Detectability: Δh ≥ 1.0e-23 for M ≥ 2.657e20 g"), "{txt}");
        assert!(txt.contains("too few points"), "{txt}");
    }

    #[test]
    fn summary_converts_units() {
        let mut cfg = config();
        cfg.unit = MassUnit::Solar;
        let txt = format_run_summary(&run(), &cfg);
        assert!(txt.contains("M*=1.000e0 M_sun"), "{txt}");
    }

    #[test]
    fn summary_reports_fit_deviation() {
        let mut run = run();
        // Anchor the law at the first point so only rounding separates them.
        let (m0, h0) = (run.masses.as_slice()[0], run.strains.as_slice()[0]);
        let fit = PowerLawFit {
            intercept: h0.log10() - KMR_EXPONENT * m0.log10(),
            slope: KMR_EXPONENT,
        };
        run.fit = Some(fit);

        let dev = max_fit_deviation(&run, &fit);
        assert!(dev < 1e-9, "deviation {dev:e}");

        let off = PowerLawFit {
            intercept: fit.intercept + 2f64.log10(),
            ..fit
        };
        assert!((max_fit_deviation(&run, &off) - 1.0).abs() < 1e-9);

        let txt = format_run_summary(&run, &config());
        assert!(txt.contains("fitted slope 0.6667 (analytic 0.6667) | max deviation"), "{txt}");
    }

    #[test]
    fn decade_table_has_one_row_per_decade() {
        let txt = format_decade_table(&run(), MassUnit::Grams);
        assert_eq!(txt.lines().count(), 2 + 3);
        assert!(txt.contains("1.000e21"), "{txt}");
    }
}
