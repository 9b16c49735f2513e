//! Zeichnet eine `RenderScene` über eine austauschbare Zeichenfläche.
//!
//! Alle Koordinaten sind normiert ([0,1]², Y nach oben); Linienbreiten in Pixeln.

mod dashes;
mod egui_canvas;
mod grid;
mod scene_painter;

pub use crate::shared::RenderScene;
pub use dashes::dash_segments;
pub use egui_canvas::EguiCanvas;
pub use grid::grid_positions;
pub use scene_painter::paint_scene;

use glam::DVec2;

/// Linienbreite des Kreisumrisses.
pub const CIRCLE_STROKE_WIDTH: f32 = 1.5;
/// Linienbreite der Sehnen.
pub const CONNECTION_STROKE_WIDTH: f32 = 2.0;
/// Linienbreite der Viereck-Kanten.
pub const HIGHLIGHT_STROKE_WIDTH: f32 = 2.0;
/// Linienbreite des Rasters.
pub const GRID_STROKE_WIDTH: f32 = 1.0;
/// Länge eines Strichs der gestrichelten Linie (normiert).
pub const DASH_LENGTH: f64 = 0.015;
/// Lücke zwischen zwei Strichen (normiert).
pub const DASH_GAP: f64 = DASH_LENGTH * 0.6;

/// Horizontale Ausrichtung eines Texts relativ zum Anker.
///
/// Vertikal sitzt der Text immer mit der Unterkante auf dem Anker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Zentriert über dem Anker
    Center,
    /// Endet am Anker
    Right,
}

/// Zeichenfläche der Präsentationsschicht.
pub trait Canvas {
    /// Füllt die gesamte Fläche.
    fn fill_background(&mut self, color: [f32; 4]);

    /// Durchgezogene Linie.
    fn draw_line(&mut self, from: DVec2, to: DVec2, width: f32, color: [f32; 4]);

    /// Gefüllter Kreis mit normiertem Radius.
    fn draw_circle(&mut self, center: DVec2, radius: f64, color: [f32; 4]);

    /// Text an einem Ankerpunkt.
    fn draw_text(&mut self, anchor: DVec2, text: &str, align: TextAlign, color: [f32; 4]);

    /// Gestrichelte Linie aus einzelnen `draw_line`-Aufrufen.
    fn draw_dashed_line(&mut self, from: DVec2, to: DVec2, width: f32, color: [f32; 4]) {
        for [start, end] in dash_segments(from, to, DASH_LENGTH, DASH_GAP) {
            self.draw_line(start, end, width, color);
        }
    }

    /// Offener Linienzug durch alle Punkte.
    fn draw_polyline(&mut self, points: &[DVec2], width: f32, color: [f32; 4]) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], width, color);
        }
    }
}
