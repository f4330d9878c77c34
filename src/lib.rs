//! `kmr-memory` library crate.
//!
//! Gravitational-wave memory strain from tidal disruption events near
//! primordial black holes, evaluated with the Kathpalia Memory Relation (KMR).
//!
//! The binary (`kmr`) is a thin wrapper around this library so that:
//!
//! - the strain relation is testable without spawning processes
//! - the plot sinks can be exercised independently of argument parsing

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod math;
pub mod physics;
pub mod plot;
pub mod report;
