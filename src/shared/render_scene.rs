//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::DiagramOptions;
use crate::core::{Circle, Highlight, Segment, MARKER_COUNT};
use glam::DVec2;

/// Fertig positionierter Text für einen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    /// Ankerpunkt in normierten Koordinaten
    pub anchor: DVec2,
    /// Anzuzeigender Text
    pub text: String,
    /// Textfarbe (RGBA)
    pub color: [f32; 4],
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Referenzkreis
    pub circle: Circle,
    /// Marker-Positionen nach Index
    pub markers: [DVec2; MARKER_COUNT],
    /// Sehnen (0,1) und (2,3)
    pub connections: [Segment; 2],
    /// Sehnen-Mittelpunkte
    pub midpoints: [DVec2; 2],
    /// Aktuelle Hervorhebung
    pub highlight: Highlight,
    /// Koordinaten-Beschriftungen der Marker (zentriert unter dem Anker)
    pub coordinate_labels: Vec<TextLabel>,
    /// Feste Beschriftung am Referenzpunkt (rechtsbündig)
    pub reference_label: TextLabel,
    /// Darstellungsoptionen (Farben, Radien, Raster)
    pub options: DiagramOptions,
}
