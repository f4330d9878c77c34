//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the mass sweep and the strain series computed from it
//! - the mass unit used for display (`MassUnit`)
//! - the run configuration (`SweepConfig`)

pub mod types;

pub use types::*;
