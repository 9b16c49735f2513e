//! Zentrale Konfiguration für das Kreis-Diagramm.
//!
//! `DiagramOptions` bündelt alle einstellbaren Werte.
//! Die `const`-Werte sind die Standardbelegung.

use crate::core::{Circle, HighlightStrategy};
use glam::DVec2;

// ── Kreis & Marker ──────────────────────────────────────────────────

/// Kreismittelpunkt in normierten Koordinaten.
pub const CIRCLE_CENTER: [f64; 2] = [0.5, 0.5];
/// Kreisradius in normierten Einheiten.
pub const CIRCLE_RADIUS: f64 = 0.3;
/// Anzahl Stützpunkte für den gezeichneten Kreisumriss.
pub const CIRCLE_SAMPLES: usize = 100;
/// Sichtbarer Radius der Marker, zugleich Trefferradius beim Anklicken.
pub const MARKER_RADIUS: f64 = 0.02;
/// Radius der Sehnen-Mittelpunkte.
pub const MIDPOINT_RADIUS: f64 = 0.015;
/// Radius des Schnittpunkt-Markers.
pub const INTERSECTION_RADIUS: f64 = 0.01;
/// Vertikaler Abstand der Koordinaten-Beschriftung unter dem Marker.
pub const LABEL_OFFSET: f64 = 0.05;
/// Text der festen Referenz-Beschriftung bei Loop-Koordinate 0.
pub const REFERENCE_LABEL: &str = "0.0/1.0";

// ── Hervorhebung ────────────────────────────────────────────────────

/// Mittelpunkt-Abstand, unterhalb dessen das Viereck erscheint.
pub const PROXIMITY_THRESHOLD: f64 = 0.02;

// ── Raster ──────────────────────────────────────────────────────────

/// Abstand der Hauptrasterlinien.
pub const GRID_MAJOR_SPACING: f64 = 0.1;
/// Abstand der Nebenrasterlinien.
pub const GRID_MINOR_SPACING: f64 = 0.02;

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Marker-Farben nach Index: Gelb, Magenta, Sandbraun, Blassviolettrot.
pub const MARKER_COLORS: [[f32; 4]; 4] = [
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [0.957, 0.643, 0.376, 1.0],
    [0.859, 0.439, 0.576, 1.0],
];
/// Farbe der Sehnen (Cyan).
pub const CONNECTION_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
/// Farbe der Mittelpunkte (Petrol).
pub const MIDPOINT_COLOR: [f32; 4] = [0.0, 0.502, 0.502, 1.0];
/// Farbe der Hervorhebung (Frühlingsgrün).
pub const HIGHLIGHT_COLOR: [f32; 4] = [0.0, 1.0, 0.498, 1.0];
/// Farbe des Kreisumrisses und der Referenz-Beschriftung.
pub const CIRCLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Hintergrundfarbe.
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hauptraster (Dunkeltürkis, schwach).
pub const GRID_MAJOR_COLOR: [f32; 4] = [0.0, 0.808, 0.820, 0.15];
/// Nebenraster (Dunkeltürkis, sehr schwach).
pub const GRID_MINOR_COLOR: [f32; 4] = [0.0, 0.808, 0.820, 0.05];
/// Mittelachsen des Rasters.
pub const GRID_AXIS_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.3];

/// Alle Darstellungs- und Interaktionsparameter des Diagramms.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramOptions {
    // ── Kreis & Marker ──────────────────────────────────────────
    /// Kreismittelpunkt
    pub circle_center: DVec2,
    /// Kreisradius
    pub circle_radius: f64,
    /// Stützpunkte des Kreisumrisses
    pub circle_samples: usize,
    /// Marker-Radius (Darstellung und Hit-Test)
    pub marker_radius: f64,
    /// Radius der Sehnen-Mittelpunkte
    pub midpoint_radius: f64,
    /// Radius des Schnittpunkt-Markers
    pub intersection_radius: f64,
    /// Abstand der Koordinaten-Beschriftung unter dem Marker
    pub label_offset: f64,

    // ── Hervorhebung ────────────────────────────────────────────
    /// Aktive Hervorhebungs-Strategie
    pub highlight: HighlightStrategy,

    // ── Raster ──────────────────────────────────────────────────
    /// Hauptraster-Abstand
    pub grid_major_spacing: f64,
    /// Nebenraster-Abstand
    pub grid_minor_spacing: f64,

    // ── Farben ──────────────────────────────────────────────────
    /// Marker-Farben nach Index
    pub marker_colors: [[f32; 4]; 4],
    /// Sehnen-Farbe
    pub connection_color: [f32; 4],
    /// Mittelpunkt-Farbe
    pub midpoint_color: [f32; 4],
    /// Hervorhebungs-Farbe
    pub highlight_color: [f32; 4],
    /// Kreis-Farbe
    pub circle_color: [f32; 4],
    /// Hintergrund
    pub background_color: [f32; 4],
    /// Hauptraster
    pub grid_major_color: [f32; 4],
    /// Nebenraster
    pub grid_minor_color: [f32; 4],
    /// Mittelachsen
    pub grid_axis_color: [f32; 4],
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            circle_center: DVec2::from_array(CIRCLE_CENTER),
            circle_radius: CIRCLE_RADIUS,
            circle_samples: CIRCLE_SAMPLES,
            marker_radius: MARKER_RADIUS,
            midpoint_radius: MIDPOINT_RADIUS,
            intersection_radius: INTERSECTION_RADIUS,
            label_offset: LABEL_OFFSET,

            highlight: build_highlight_strategy(),

            grid_major_spacing: GRID_MAJOR_SPACING,
            grid_minor_spacing: GRID_MINOR_SPACING,

            marker_colors: MARKER_COLORS,
            connection_color: CONNECTION_COLOR,
            midpoint_color: MIDPOINT_COLOR,
            highlight_color: HIGHLIGHT_COLOR,
            circle_color: CIRCLE_COLOR,
            background_color: BACKGROUND_COLOR,
            grid_major_color: GRID_MAJOR_COLOR,
            grid_minor_color: GRID_MINOR_COLOR,
            grid_axis_color: GRID_AXIS_COLOR,
        }
    }
}

/// Strategie dieses Builds: Feature `proximity-highlight` wählt das Viereck.
fn build_highlight_strategy() -> HighlightStrategy {
    if cfg!(feature = "proximity-highlight") {
        HighlightStrategy::ProximityQuadrilateral {
            threshold: PROXIMITY_THRESHOLD,
        }
    } else {
        HighlightStrategy::Intersection
    }
}

impl DiagramOptions {
    /// Ersetzt die Hervorhebungs-Strategie.
    pub fn with_highlight(mut self, highlight: HighlightStrategy) -> Self {
        self.highlight = highlight;
        self
    }

    /// Referenzkreis aus Mittelpunkt und Radius.
    pub fn circle(&self) -> Circle {
        Circle::new(self.circle_center, self.circle_radius)
    }

    /// Farbe eines Markers; unbekannte Indizes fallen auf die Kreisfarbe zurück.
    pub fn marker_color(&self, index: usize) -> [f32; 4] {
        self.marker_colors
            .get(index)
            .copied()
            .unwrap_or(self.circle_color)
    }
}
