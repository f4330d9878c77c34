//! Plot sinks for the `(mass, strain)` series.
//!
//! - `ascii`: fixed-size terminal preview
//! - `png`: static log-log chart written with Plotters
//! - `font`: runtime font discovery for the PNG text

pub mod ascii;
pub mod font;
pub mod png;

pub use ascii::render_ascii_plot;
pub use png::{StrainChart, write_png};
