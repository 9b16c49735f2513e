//! Rasterlinien über dem Einheitsquadrat.

use super::{Canvas, GRID_STROKE_WIDTH};
use crate::shared::DiagramOptions;
use glam::DVec2;

/// Lage der Rasterlinien in [0, 1] für einen Abstand `spacing`.
pub fn grid_positions(spacing: f64) -> Vec<f64> {
    if spacing.is_nan() || spacing <= 0.0 {
        return Vec::new();
    }
    let count = (1.0 / spacing).round() as usize;
    (0..=count)
        .map(|i| i as f64 * spacing)
        .filter(|&v| v <= 1.0 + f64::EPSILON)
        .collect()
}

/// Zeichnet Neben-, Hauptraster und Mittelachsen.
pub(super) fn paint_grid(canvas: &mut impl Canvas, options: &DiagramOptions) {
    let layers = [
        (options.grid_minor_spacing, options.grid_minor_color),
        (options.grid_major_spacing, options.grid_major_color),
    ];
    for (spacing, color) in layers {
        for v in grid_positions(spacing) {
            canvas.draw_line(DVec2::new(v, 0.0), DVec2::new(v, 1.0), GRID_STROKE_WIDTH, color);
            canvas.draw_line(DVec2::new(0.0, v), DVec2::new(1.0, v), GRID_STROKE_WIDTH, color);
        }
    }

    let center = options.circle_center;
    let axis = options.grid_axis_color;
    canvas.draw_line(
        DVec2::new(center.x, 0.0),
        DVec2::new(center.x, 1.0),
        GRID_STROKE_WIDTH,
        axis,
    );
    canvas.draw_line(
        DVec2::new(0.0, center.y),
        DVec2::new(1.0, center.y),
        GRID_STROKE_WIDTH,
        axis,
    );
}
