//! `Canvas`-Implementierung auf einem `egui::Painter`.

use super::{Canvas, TextAlign};
use crate::core::Surface;
use glam::{DVec2, Vec2};

/// Schriftgröße relativ zur Kantenlänge der Zeichenfläche.
const FONT_SCALE: f32 = 0.025;
/// Untergrenze der Schriftgröße in Pixeln.
const MIN_FONT_SIZE: f32 = 10.0;

/// Zeichnet normierte Geometrie über einen egui-Painter.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    surface: Surface,
}

impl<'a> EguiCanvas<'a> {
    /// Erstellt eine Zeichenfläche für das gegebene Quadrat.
    pub fn new(painter: &'a egui::Painter, surface: Surface) -> Self {
        Self { painter, surface }
    }

    fn pos(&self, p: DVec2) -> egui::Pos2 {
        to_pos2(self.surface.to_screen(p))
    }

    fn font(&self) -> egui::FontId {
        egui::FontId::proportional((self.surface.side * FONT_SCALE).max(MIN_FONT_SIZE))
    }
}

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

impl Canvas for EguiCanvas<'_> {
    fn fill_background(&mut self, color: [f32; 4]) {
        let rect = egui::Rect::from_min_size(
            to_pos2(self.surface.origin),
            egui::vec2(self.surface.side, self.surface.side),
        );
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, width: f32, color: [f32; 4]) {
        self.painter.line_segment(
            [self.pos(from), self.pos(to)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn draw_circle(&mut self, center: DVec2, radius: f64, color: [f32; 4]) {
        self.painter.circle_filled(
            self.pos(center),
            self.surface.scale_length(radius),
            to_color32(color),
        );
    }

    fn draw_text(&mut self, anchor: DVec2, text: &str, align: TextAlign, color: [f32; 4]) {
        let align = match align {
            TextAlign::Center => egui::Align2::CENTER_BOTTOM,
            TextAlign::Right => egui::Align2::RIGHT_BOTTOM,
        };
        self.painter
            .text(self.pos(anchor), align, text, self.font(), to_color32(color));
    }

    fn draw_polyline(&mut self, points: &[DVec2], width: f32, color: [f32; 4]) {
        let points = points.iter().map(|&p| self.pos(p)).collect();
        self.painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(width, to_color32(color)),
        ));
    }
}
