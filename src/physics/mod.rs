//! Physics of the memory signal: CGS constants and the Kathpalia Memory Relation.
//!
//! Everything here is pure: functions take their inputs explicitly and the
//! constants are immutable.

pub mod constants;
pub mod kmr;

pub use constants::*;
pub use kmr::*;
