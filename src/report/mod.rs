//! Reporting utilities: terminal summaries of a strain sweep.
//!
//! Formatting lives here so the physics and plotting code stay free of
//! presentation concerns.

pub mod format;

pub use format::*;
