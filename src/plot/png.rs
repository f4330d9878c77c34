//! Plotters-powered log-log chart of GW memory strain vs PBH mass.
//!
//! Layout mirrors the published figure: the KMR curve as a solid line, the
//! detector sensitivity as a dashed horizontal line, fixed strain range.
//!
//! The chart is data-driven: series and bounds are prepared by the caller,
//! `write_png` only validates and draws.

use std::path::Path;

use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;

use crate::domain::{MassSweep, StrainSeries, curve_points};
use crate::error::{AppError, EXIT_INVALID_INPUT, EXIT_PLOT};
use crate::plot::font::{FAMILY, ensure_registered};

const ROYAL_BLUE: RGBColor = RGBColor(65, 105, 225);
const CRIMSON: RGBColor = RGBColor(220, 20, 60);

pub const CAPTION: &str = "Predicted Gravitational-Wave Memory vs PBH Mass";
pub const X_DESC: &str = "Primordial Black Hole Mass  M_PBH  [g]";
pub const Y_DESC: &str = "Predicted GW Memory Strain  Δh_KMR";

/// Fixed strain axis of the reference figure.
pub const DEFAULT_Y_BOUNDS: [f64; 2] = [1e-25, 1e-20];

/// Everything needed to draw one chart.
pub struct StrainChart<'a> {
    pub masses: &'a MassSweep,
    pub strains: &'a StrainSeries,
    /// Legend entry for the strain curve.
    pub series_label: String,
    /// Horizontal reference line (detector sensitivity).
    pub sensitivity: Option<f64>,
    /// Strain axis range (log scale, both > 0).
    pub y_bounds: [f64; 2],
    /// Image size in pixels.
    pub width: u32,
    pub height: u32,
}

impl StrainChart<'_> {
    /// Legend label used for the sensitivity line.
    pub fn sensitivity_label(&self) -> Option<String> {
        self.sensitivity
            .map(|s| format!("LISA/DECIGO sensitivity (Δh ≈ {s:.0e})"))
    }

    /// Mass axis range. A single-mass sweep is widened by a decade on each side.
    pub fn x_bounds(&self) -> Option<[f64; 2]> {
        let (first, last) = self.masses.bounds()?;
        let lo = first.min(last);
        let hi = first.max(last);
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0) {
            return None;
        }
        if hi > lo { Some([lo, hi]) } else { Some([lo / 10.0, hi * 10.0]) }
    }

    fn validate(&self) -> Result<[f64; 2], AppError> {
        if self.masses.len() != self.strains.len() {
            return Err(AppError::new(
                EXIT_INVALID_INPUT,
                format!(
                    "Mass sweep and strain series differ in length ({} vs {}).",
                    self.masses.len(),
                    self.strains.len()
                ),
            ));
        }
        let [y0, y1] = self.y_bounds;
        if !(y0.is_finite() && y1.is_finite() && y0 > 0.0 && y1 > y0) {
            return Err(AppError::new(
                EXIT_INVALID_INPUT,
                format!("Invalid strain axis range [{y0:e}, {y1:e}]."),
            ));
        }
        if self.width < 100 || self.height < 100 {
            return Err(AppError::new(
                EXIT_INVALID_INPUT,
                format!("Image too small ({}x{} px, need at least 100x100).", self.width, self.height),
            ));
        }
        self.x_bounds()
            .ok_or_else(|| AppError::new(EXIT_INVALID_INPUT, "Nothing to plot: empty or non-positive mass sweep."))
    }
}

/// Render the chart to a PNG file.
///
/// Backend failures (unwritable path, encoder errors) are surfaced with the
/// backend's own message.
pub fn write_png(path: &Path, chart: &StrainChart<'_>) -> Result<(), AppError> {
    let x_bounds = chart.validate()?;
    let with_text = ensure_registered().is_some();

    draw(path, chart, x_bounds, with_text)
        .map_err(|e| AppError::new(EXIT_PLOT, format!("Failed to render plot '{}': {e}", path.display())))
}

fn draw(path: &Path, chart: &StrainChart<'_>, x_bounds: [f64; 2], with_text: bool) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (chart.width, chart.height)).into_drawing_area();
    draw_on(&root, chart, x_bounds, with_text)
}

fn draw_on<DB>(
    root: &DrawingArea<DB, Shift>,
    chart: &StrainChart<'_>,
    x_bounds: [f64; 2],
    with_text: bool,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let [x0, x1] = x_bounds;
    let [y0, y1] = chart.y_bounds;
    let points = curve_points(chart.masses, chart.strains);

    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(root);
    builder.margin(40);
    if with_text {
        builder
            .caption(CAPTION, (FAMILY, 54))
            .x_label_area_size(140)
            .y_label_area_size(220);
    }
    let mut cc = builder.build_cartesian_2d((x0..x1).log_scale(), (y0..y1).log_scale())?;

    if with_text {
        cc.configure_mesh()
            .light_line_style(BLACK.mix(0.08))
            .bold_line_style(BLACK.mix(0.25))
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .axis_desc_style((FAMILY, 44))
            .label_style((FAMILY, 36))
            .x_label_formatter(&fmt_sci)
            .y_label_formatter(&fmt_sci)
            .draw()?;
    } else {
        // Mesh labels need a font; draw the decade grid and frame by hand.
        for x in decades(x0, x1) {
            cc.draw_series(std::iter::once(PathElement::new(vec![(x, y0), (x, y1)], BLACK.mix(0.25))))?;
        }
        for y in decades(y0, y1) {
            cc.draw_series(std::iter::once(PathElement::new(vec![(x0, y), (x1, y)], BLACK.mix(0.25))))?;
        }
        cc.plotting_area()
            .draw(&Rectangle::new([(x0, y0), (x1, y1)], BLACK.stroke_width(2)))?;
    }

    cc.draw_series(LineSeries::new(points, ROYAL_BLUE.stroke_width(5)))?
        .label(chart.series_label.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 60, y)], ROYAL_BLUE.stroke_width(5)));

    if let (Some(s), Some(label)) = (chart.sensitivity, chart.sensitivity_label()) {
        if s > y0 && s < y1 {
            cc.draw_series(DashedLineSeries::new(
                vec![(x0, s), (x1, s)],
                24,
                14,
                CRIMSON.stroke_width(4),
            ))?
            .label(label)
            .legend(sensitivity_legend_sample);
        }
    }

    if with_text {
        cc.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FAMILY, 36))
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Legend swatch for the sensitivity line, dashed like the line itself.
fn sensitivity_legend_sample((x, y): (i32, i32)) -> DashedPathElement<std::vec::IntoIter<(i32, i32)>, i32> {
    DashedPathElement::new(vec![(x, y), (x + 60, y)], 12, 8, CRIMSON.stroke_width(4))
}

/// Powers of ten inside `[lo, hi]`.
fn decades(lo: f64, hi: f64) -> Vec<f64> {
    if !(lo > 0.0 && hi >= lo && hi.is_finite()) {
        return Vec::new();
    }
    let first = (lo.log10() - 1e-9).ceil() as i32;
    let last = (hi.log10() + 1e-9).floor() as i32;
    (first..=last).map(|d| 10f64.powi(d)).collect()
}

fn fmt_sci(v: &f64) -> String {
    format!("{v:.0e}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart<'a>(masses: &'a MassSweep, strains: &'a StrainSeries) -> StrainChart<'a> {
        StrainChart {
            masses,
            strains,
            series_label: "KMR memory strain (ε = 0.02)".to_string(),
            sensitivity: Some(1e-23),
            y_bounds: DEFAULT_Y_BOUNDS,
            width: 400,
            height: 300,
        }
    }

    #[test]
    fn rejects_mismatched_series() {
        let masses = MassSweep::new(vec![1e20, 1e21]);
        let strains = StrainSeries::new(vec![1e-23]);
        let path = std::env::temp_dir().join("kmr_mismatch_never_written.png");

        let err = write_png(&path, &chart(&masses, &strains)).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);
        assert!(!path.exists());
    }

    #[test]
    fn rejects_bad_axis_and_size() {
        let masses = MassSweep::new(vec![1e20, 1e21]);
        let strains = StrainSeries::new(vec![5e-24, 2e-23]);

        let mut c = chart(&masses, &strains);
        c.y_bounds = [0.0, 1e-20];
        assert!(c.validate().is_err());

        let mut c = chart(&masses, &strains);
        c.width = 10;
        assert!(c.validate().is_err());
    }

    #[test]
    fn single_mass_widens_axis() {
        let masses = MassSweep::new(vec![1e20]);
        let strains = StrainSeries::new(vec![5e-24]);
        assert_eq!(chart(&masses, &strains).x_bounds(), Some([1e19, 1e21]));
    }

    #[test]
    fn sensitivity_label_uses_threshold() {
        let masses = MassSweep::new(vec![1e20]);
        let strains = StrainSeries::new(vec![5e-24]);
        let label = chart(&masses, &strains).sensitivity_label().unwrap();
        assert_eq!(label, "LISA/DECIGO sensitivity (Δh ≈ 1e-23)");
    }

    fn rgb_at(buf: &[u8], width: u32, x: u32, y: u32) -> (u8, u8, u8) {
        let i = ((y * width + x) * 3) as usize;
        (buf[i], buf[i + 1], buf[i + 2])
    }

    #[test]
    fn decades_cover_log_range() {
        assert_eq!(decades(1e-25, 1e-20).len(), 6);
        assert_eq!(decades(2e20, 5e24).len(), 4);
        assert!(decades(0.0, 1.0).is_empty());
    }

    #[test]
    fn textless_chart_still_has_grid() {
        let (w, h) = (400u32, 300u32);
        let masses = MassSweep::new(vec![1e20, 1e24]);
        let strains = StrainSeries::new(vec![2e-25, 2e-25]);
        let mut c = chart(&masses, &strains);
        c.sensitivity = None;
        c.width = w;
        c.height = h;

        let mut buf = vec![0u8; (w * h * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
            draw_on(&root, &c, [1e20, 1e24], false).unwrap();
        }

        // Row well above the curve and between horizontal grid lines: only
        // the vertical decade lines (1e21..1e23) should mark it.
        let marked = (60..w - 60)
            .filter(|&x| rgb_at(&buf, w, x, 100) != (255, 255, 255))
            .count();
        assert!(marked >= 3, "expected vertical grid lines, found {marked} marked pixels");
    }

    #[test]
    fn sensitivity_legend_is_dashed() {
        let (w, h) = (100u32, 20u32);
        let mut buf = vec![0u8; (w * h * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            root.draw(&sensitivity_legend_sample((10, 10))).unwrap();
            root.present().unwrap();
        }

        let row: Vec<_> = (10..70).map(|x| rgb_at(&buf, w, x, 10)).collect();
        assert!(row.iter().any(|&(r, g, _)| r > 150 && g < 100), "no crimson dash drawn");
        assert!(row.contains(&(255, 255, 255)), "legend sample has no gaps");
    }

    #[test]
    fn writes_png_file() {
        let masses = MassSweep::new(vec![1e20, 1e22, 1e24]);
        let strains = StrainSeries::new(vec![5.2e-24, 1.1e-22, 2.4e-21]);
        let path = std::env::temp_dir().join(format!("kmr_chart_{}.png", std::process::id()));

        write_png(&path, &chart(&masses, &strains)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"), "not a PNG");
        let _ = std::fs::remove_file(&path);
    }
}
