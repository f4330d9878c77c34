//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - evaluates the KMR over the mass sweep
//! - prints the diagnostic summary (and optional terminal plot/table)
//! - writes the PNG figure

use clap::Parser;

use crate::cli::Cli;
use crate::domain::SweepConfig;
use crate::error::AppError;
use crate::plot::png::DEFAULT_Y_BOUNDS;

pub mod pipeline;

/// Entry point for the `kmr` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    let cli = Cli::parse();
    let config = sweep_config_from_args(&cli);
    let run = pipeline::run_sweep(&config)?;

    println!("{}", crate::report::format_run_summary(&run, &config));

    if config.table {
        println!("{}", crate::report::format_decade_table(&run, config.unit));
    }

    if config.ascii {
        let points = crate::domain::curve_points(&run.masses, &run.strains);
        let plot = crate::plot::render_ascii_plot(
            &points,
            Some(config.sensitivity),
            config.ascii_width,
            config.ascii_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.output {
        if let Some((lo, hi)) = run.strains.range() {
            let [y0, y1] = DEFAULT_Y_BOUNDS;
            if lo < y0 || hi > y1 {
                log::warn!("Strain range [{lo:.3e}, {hi:.3e}] extends past the plotted axis [{y0:.0e}, {y1:.0e}]");
            }
        }

        let chart = crate::plot::StrainChart {
            masses: &run.masses,
            strains: &run.strains,
            series_label: format!("KMR memory strain (ε = {})", run.params.epsilon),
            sensitivity: Some(config.sensitivity),
            y_bounds: DEFAULT_Y_BOUNDS,
            width: config.width,
            height: config.height,
        };
        crate::plot::write_png(path, &chart)?;
        log::info!("Wrote {}", path.display());
        println!("Saved figure: {}", path.display());
    }

    Ok(())
}

/// `.env` first so `RUST_LOG` / `KMR_FONT` can live next to the checkout.
fn init_logging() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_default_env().try_init().ok();
}

pub fn sweep_config_from_args(args: &Cli) -> SweepConfig {
    SweepConfig {
        log_min: args.log_min,
        log_max: args.log_max,
        points: args.points,
        epsilon: args.epsilon,
        distance: args.distance,
        sensitivity: args.sensitivity,
        unit: args.unit,
        output: (!args.no_png).then(|| args.output.clone()),
        width: args.width,
        height: args.height,
        ascii: args.ascii,
        ascii_width: args.ascii_width,
        ascii_height: args.ascii_height,
        table: args.table,
    }
}
