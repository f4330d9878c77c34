//! Runtime font discovery for the PNG sink.
//!
//! Plotters' `ab_glyph` backend rasterizes text from font bytes we register
//! ourselves. We look for a TTF in `KMR_FONT` first, then in a few common
//! system locations. Registration happens at most once per process.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

/// Environment variable pointing at a TTF/OTF file to use for chart text.
pub const FONT_ENV: &str = "KMR_FONT";

/// Family name the chart styles refer to.
pub const FAMILY: &str = "sans-serif";

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Make sure a font is registered for [`FAMILY`].
///
/// Returns the path of the registered font, or `None` when no usable font was
/// found (the chart is then drawn without text).
pub fn ensure_registered() -> Option<&'static Path> {
    REGISTERED.get_or_init(register_first_available).as_deref()
}

fn register_first_available() -> Option<PathBuf> {
    let from_env = std::env::var_os(FONT_ENV).map(PathBuf::from);
    let candidates = from_env.into_iter().chain(CANDIDATES.iter().map(|p| PathBuf::from(*p)));

    for path in candidates {
        let Ok(bytes) = std::fs::read(&path) else {
            continue;
        };
        // Plotters keeps a 'static reference to registered font data.
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if register_font(FAMILY, FontStyle::Normal, bytes).is_ok() {
            log::debug!("Using font '{}' for chart text", path.display());
            return Some(path);
        }
        log::warn!("Ignoring unparsable font '{}'", path.display());
    }

    log::warn!("No usable font found (set {FONT_ENV}); the PNG will have no text.");
    None
}
