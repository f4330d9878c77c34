//! Shared domain types.
//!
//! Masses are stored in grams and strains are dimensionless. Unit conversion
//! only happens in terminal output.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::physics::{G_PER_KG, M_SUN};

/// Ordered PBH masses in grams.
///
/// Validation happens when the sweep is evaluated, not on construction, so a
/// caller-supplied list can carry bad values through to a precise error.
#[derive(Debug, Clone, PartialEq)]
pub struct MassSweep {
    masses: Vec<f64>,
}

impl MassSweep {
    pub fn new(masses: Vec<f64>) -> Self {
        Self { masses }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// `(first, last)` mass, if any.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((*self.masses.first()?, *self.masses.last()?))
    }
}

/// Dimensionless strain values, one per mass in the originating sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct StrainSeries {
    values: Vec<f64>,
}

impl StrainSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(min, max)` over the series.
    pub fn range(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

/// Zip a sweep with its strain series into plot points.
pub fn curve_points(masses: &MassSweep, strains: &StrainSeries) -> Vec<(f64, f64)> {
    masses
        .as_slice()
        .iter()
        .copied()
        .zip(strains.as_slice().iter().copied())
        .collect()
}

/// Unit used when presenting masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MassUnit {
    /// Grams (internal unit).
    #[value(name = "g")]
    Grams,
    /// Kilograms.
    #[value(name = "kg")]
    Kilograms,
    /// Solar masses (M_sun = 2.0e33 g, matching the model constants).
    #[value(name = "msun")]
    Solar,
}

impl MassUnit {
    /// Grams per one unit.
    pub fn grams(self) -> f64 {
        match self {
            MassUnit::Grams => 1.0,
            MassUnit::Kilograms => G_PER_KG,
            MassUnit::Solar => M_SUN,
        }
    }

    pub fn from_grams(self, grams: f64) -> f64 {
        grams / self.grams()
    }

    pub fn label(self) -> &'static str {
        match self {
            MassUnit::Grams => "g",
            MassUnit::Kilograms => "kg",
            MassUnit::Solar => "M_sun",
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// log10 of the lightest PBH mass [g].
    pub log_min: f64,
    /// log10 of the heaviest PBH mass [g].
    pub log_max: f64,
    /// Number of log-spaced masses (endpoints inclusive).
    pub points: usize,

    /// Ejection anisotropy ε.
    pub epsilon: f64,
    /// Observer distance [cm].
    pub distance: f64,
    /// Detector sensitivity drawn as a reference line.
    pub sensitivity: f64,

    /// Unit for masses in the terminal summary.
    pub unit: MassUnit,

    /// PNG output path; `None` skips the image.
    pub output: Option<PathBuf>,
    pub width: u32,
    pub height: u32,

    /// Print a terminal preview plot.
    pub ascii: bool,
    pub ascii_width: usize,
    pub ascii_height: usize,

    /// Print the per-decade strain table.
    pub table: bool,
}
