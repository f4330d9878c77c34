//! Command-line parsing for the KMR strain plotter.
//!
//! Every flag defaults to the reference run, so `kmr` with no arguments
//! reproduces the published figure.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::MassUnit;
use crate::physics::{D_100_MPC, LISA_DECIGO_SENSITIVITY};

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kmr",
    version,
    about = "GW memory strain vs PBH mass for tidal disruption events (Kathpalia Memory Relation)"
)]
pub struct Cli {
    /// log10 of the lightest PBH mass in grams.
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub log_min: f64,

    /// log10 of the heaviest PBH mass in grams.
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    pub log_max: f64,

    /// Number of log-spaced masses (endpoints included).
    #[arg(short = 'n', long, default_value_t = 200)]
    pub points: usize,

    /// Ejection anisotropy factor ε (0 < ε ≤ 1).
    #[arg(long, default_value_t = 0.02)]
    pub epsilon: f64,

    /// Distance to the observer in cm.
    #[arg(long, default_value_t = D_100_MPC)]
    pub distance: f64,

    /// Detector sensitivity drawn as a reference line.
    #[arg(long, default_value_t = LISA_DECIGO_SENSITIVITY)]
    pub sensitivity: f64,

    /// Mass unit for the terminal summary.
    #[arg(long, value_enum, default_value_t = MassUnit::Grams)]
    pub unit: MassUnit,

    /// Output PNG path.
    #[arg(short = 'o', long, default_value = "Figure_2_KMR.png")]
    pub output: PathBuf,

    /// Skip writing the PNG.
    #[arg(long)]
    pub no_png: bool,

    /// Image width (pixels).
    #[arg(long, default_value_t = 2400)]
    pub width: u32,

    /// Image height (pixels).
    #[arg(long, default_value_t = 1800)]
    pub height: u32,

    /// Also print a terminal preview plot.
    #[arg(long)]
    pub ascii: bool,

    /// Terminal plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub ascii_width: usize,

    /// Terminal plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub ascii_height: usize,

    /// Print the strain at each whole decade of mass.
    #[arg(long)]
    pub table: bool,
}
