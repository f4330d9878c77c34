//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Both axes are log10-scaled. Plot elements:
//! - strain curve: `*`
//! - detector sensitivity: `=` (drawn under the curve)

/// Render a log-log plot of `(mass, strain)` points with an optional
/// horizontal sensitivity line.
pub fn render_ascii_plot(points: &[(f64, f64)], sensitivity: Option<f64>, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let logs: Vec<(f64, f64)> = points
        .iter()
        .filter(|(x, y)| *x > 0.0 && *y > 0.0 && x.is_finite() && y.is_finite())
        .map(|&(x, y)| (x.log10(), y.log10()))
        .collect();
    let sensitivity_log = sensitivity.filter(|s| s.is_finite() && *s > 0.0).map(f64::log10);

    let (lx_min, lx_max) = x_range(&logs).unwrap_or((0.0, 1.0));
    let (ly_min, ly_max) = y_range(&logs, sensitivity_log).unwrap_or((0.0, 1.0));
    let (ly_min, ly_max) = pad_range(ly_min, ly_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Curve first so the sensitivity line only fills blank cells.
    draw_curve(&mut grid, &logs, lx_min, lx_max, ly_min, ly_max);

    if let Some(s) = sensitivity_log {
        let row = map_y(s, ly_min, ly_max, height);
        for cell in grid[row].iter_mut() {
            if *cell == ' ' {
                *cell = '=';
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: M=[{:.3e}, {:.3e}] g | Δh=[{:.3e}, {:.3e}] (log-log)\n",
        10f64.powf(lx_min),
        10f64.powf(lx_max),
        10f64.powf(ly_min),
        10f64.powf(ly_max),
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn x_range(logs: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in logs {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(logs: &[(f64, f64)], sensitivity: Option<f64>) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for &(_, y) in logs {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if let Some(s) = sensitivity {
        min_y = min_y.min(s);
        max_y = max_y.max(s);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, '*');
        } else {
            grid[row][col] = '*';
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0 && (y0 as usize) < grid.len() && x0 >= 0 && (x0 as usize) < grid[0].len() {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(txt: &str) -> Vec<Vec<char>> {
        txt.lines().skip(1).map(|l| l.chars().collect()).collect()
    }

    #[test]
    fn power_law_is_a_diagonal() {
        let points = [(1.0, 1e-3), (10.0, 1e-2), (100.0, 1e-1), (1000.0, 1.0)];
        let txt = render_ascii_plot(&points, None, 10, 5);

        assert!(txt.starts_with("Plot: M=[1.000e0, 1.000e3] g"), "header: {txt}");
        let grid = rows(&txt);
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|r| r.len() == 10));
        // Lightest mass bottom-left, heaviest top-right.
        assert_eq!(grid[4][0], '*');
        assert_eq!(grid[0][9], '*');
        assert!(grid.iter().flatten().all(|&c| c != '='));
    }

    #[test]
    fn sensitivity_line_sits_under_curve() {
        let points = [(1.0, 1e-4), (1e4, 1.0)];
        let txt = render_ascii_plot(&points, Some(1e-2), 21, 9);
        let grid = rows(&txt);

        let line_rows: Vec<usize> = grid
            .iter()
            .enumerate()
            .filter(|(_, r)| r.contains(&'='))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(line_rows, vec![4], "sensitivity line should be mid-plot");
        assert_eq!(grid[4].iter().filter(|&&c| c == '*').count(), 3);
        assert_eq!(grid[4].iter().filter(|&&c| c == '=').count(), 18);
    }

    #[test]
    fn small_sizes_are_clamped() {
        let txt = render_ascii_plot(&[(1.0, 1.0), (2.0, 2.0)], None, 1, 1);
        let grid = rows(&txt);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0].len(), 10);
    }

    #[test]
    fn empty_input_renders_blank_grid() {
        let txt = render_ascii_plot(&[], None, 10, 5);
        assert_eq!(rows(&txt).iter().flatten().filter(|&&c| c != ' ').count(), 0);
    }
}
