//! Zeichenreihenfolge eines Frames.

use super::grid::paint_grid;
use super::{
    Canvas, TextAlign, CIRCLE_STROKE_WIDTH, CONNECTION_STROKE_WIDTH, HIGHLIGHT_STROKE_WIDTH,
};
use crate::core::Highlight;
use crate::shared::RenderScene;

/// Zeichnet die komplette Szene.
///
/// Reihenfolge: Hintergrund, Raster, Kreis, Sehnen, Marker und Mittelpunkte,
/// Hervorhebung, Beschriftungen.
pub fn paint_scene(canvas: &mut impl Canvas, scene: &RenderScene) {
    let options = &scene.options;

    canvas.fill_background(options.background_color);
    paint_grid(canvas, options);

    let outline = scene.circle.outline(options.circle_samples);
    canvas.draw_polyline(&outline, CIRCLE_STROKE_WIDTH, options.circle_color);

    for connection in &scene.connections {
        canvas.draw_line(
            connection.start,
            connection.end,
            CONNECTION_STROKE_WIDTH,
            options.connection_color,
        );
    }

    for (index, &marker) in scene.markers.iter().enumerate() {
        canvas.draw_circle(marker, options.marker_radius, options.marker_color(index));
    }
    for &midpoint in &scene.midpoints {
        canvas.draw_circle(midpoint, options.midpoint_radius, options.midpoint_color);
    }

    paint_highlight(canvas, scene);

    for label in &scene.coordinate_labels {
        canvas.draw_text(label.anchor, &label.text, TextAlign::Center, label.color);
    }
    let reference = &scene.reference_label;
    canvas.draw_text(
        reference.anchor,
        &reference.text,
        TextAlign::Right,
        reference.color,
    );
}

fn paint_highlight(canvas: &mut impl Canvas, scene: &RenderScene) {
    let options = &scene.options;
    match scene.highlight {
        Highlight::IntersectionPoint {
            position,
            visible: true,
        } => {
            canvas.draw_circle(position, options.intersection_radius, options.highlight_color);
        }
        Highlight::Quadrilateral {
            edges,
            visible: true,
        } => {
            for [from, to] in edges {
                canvas.draw_dashed_line(from, to, HIGHLIGHT_STROKE_WIDTH, options.highlight_color);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};
    use crate::core::HighlightStrategy;
    use crate::shared::DiagramOptions;
    use glam::DVec2;
    use std::f64::consts::PI;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Background,
        Line { color: [f32; 4] },
        Circle { radius: f64, color: [f32; 4] },
        Text { text: String, align: TextAlign },
    }

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_background(&mut self, _color: [f32; 4]) {
            self.ops.push(Op::Background);
        }

        fn draw_line(&mut self, _from: DVec2, _to: DVec2, _width: f32, color: [f32; 4]) {
            self.ops.push(Op::Line { color });
        }

        fn draw_circle(&mut self, _center: DVec2, radius: f64, color: [f32; 4]) {
            self.ops.push(Op::Circle { radius, color });
        }

        fn draw_text(&mut self, _anchor: DVec2, text: &str, align: TextAlign, _color: [f32; 4]) {
            self.ops.push(Op::Text {
                text: text.to_string(),
                align,
            });
        }
    }

    fn paint(options: DiagramOptions, angles: [f64; 4]) -> (RecordingCanvas, DiagramOptions) {
        let state = AppState::with_marker_angles(options.clone(), angles);
        let mut canvas = RecordingCanvas::default();
        paint_scene(&mut canvas, &build_render_scene(&state));
        (canvas, options)
    }

    fn position_of(ops: &[Op], predicate: impl Fn(&Op) -> bool) -> Option<usize> {
        ops.iter().position(predicate)
    }

    #[test]
    fn visible_intersection_is_drawn_after_markers_and_before_labels() {
        let options = DiagramOptions::default().with_highlight(HighlightStrategy::Intersection);
        let (canvas, options) = paint(options, [0.0, PI, 0.5 * PI, 1.5 * PI]);
        let ops = &canvas.ops;

        let highlight = position_of(ops, |op| {
            matches!(op, Op::Circle { color, .. } if *color == options.highlight_color)
        })
        .expect("Schnittpunkt gezeichnet");
        let last_marker = ops
            .iter()
            .rposition(|op| {
                matches!(op, Op::Circle { radius, .. } if *radius == options.marker_radius)
            })
            .expect("Marker gezeichnet");
        let first_text =
            position_of(ops, |op| matches!(op, Op::Text { .. })).expect("Beschriftung gezeichnet");

        assert_eq!(ops[0], Op::Background);
        assert!(last_marker < highlight);
        assert!(highlight < first_text);
    }

    #[test]
    fn hidden_highlight_is_not_drawn() {
        let options = DiagramOptions::default().with_highlight(HighlightStrategy::Intersection);
        let (canvas, options) = paint(options, [0.1, 0.6, 1.0, 1.5]);

        let highlight_drawn = canvas.ops.iter().any(|op| {
            matches!(
                op,
                Op::Circle { color, .. } | Op::Line { color } if *color == options.highlight_color
            )
        });
        assert!(!highlight_drawn);
    }

    #[test]
    fn visible_quadrilateral_is_dashed() {
        let options = DiagramOptions::default()
            .with_highlight(HighlightStrategy::ProximityQuadrilateral { threshold: 0.02 });
        let (canvas, options) = paint(options, [0.0, PI, 0.5 * PI, 1.5 * PI]);

        let dash_count = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Line { color } if *color == options.highlight_color))
            .count();

        // Vier Kanten, jede deutlich länger als ein Strich
        assert!(dash_count > 4);
    }

    #[test]
    fn labels_are_centered_and_reference_is_right_aligned() {
        let (canvas, _) = paint(DiagramOptions::default(), [0.1, 0.6, 1.0, 1.5]);
        let texts: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, align } => Some((text.as_str(), *align)),
                _ => None,
            })
            .collect();

        assert_eq!(texts.len(), 5);
        assert!(texts[..4].iter().all(|(_, align)| *align == TextAlign::Center));
        assert_eq!(texts[4], ("0.0/1.0", TextAlign::Right));
    }
}
