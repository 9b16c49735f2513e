//! Szenen-Zustand: Kreis, vier Marker und die daraus abgeleiteten Elemente.

use super::geometry::{loop_coordinate, midpoint, project_to_circle, Circle};
use super::highlight::{Highlight, HighlightStrategy};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Anzahl der Marker auf dem Kreis.
pub const MARKER_COUNT: usize = 4;

/// Marker-Paare, die je eine Sehne bilden.
pub const CONNECTION_PAIRS: [(usize, usize); 2] = [(0, 1), (2, 3)];

/// Sehne zwischen zwei Markern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Position des ersten Markers
    pub start: DVec2,
    /// Position des zweiten Markers
    pub end: DVec2,
}

/// Beschriftung eines Markers mit seiner Loop-Koordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateLabel {
    /// Index des beschrifteten Markers (bestimmt die Farbe)
    pub marker_index: usize,
    /// Ankerpunkt des Texts (unterhalb des Markers)
    pub anchor: DVec2,
    /// Loop-Koordinate in [0, 1)
    pub value: f64,
    /// Angezeigter Text (zwei Nachkommastellen)
    pub text: String,
}

/// Alle aus den Markern abgeleiteten Elemente. Nie eigenständig autoritativ.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedScene {
    /// Sehnen (0,1) und (2,3)
    pub connections: [Segment; 2],
    /// Mittelpunkt je Sehne
    pub midpoints: [DVec2; 2],
    /// Aktuelle Hervorhebung
    pub highlight: Highlight,
    /// Koordinaten-Beschriftungen, bei jedem Refresh komplett neu erzeugt
    pub labels: Vec<CoordinateLabel>,
}

/// Marker-Zustand des Diagramms.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Referenzkreis
    pub circle: Circle,
    /// Marker-Positionen, immer exakt auf dem Kreisrand
    pub markers: [DVec2; MARKER_COUNT],
    /// Abgeleitete Elemente (nur über `refresh_*`-Funktionen aktualisiert)
    pub derived: DerivedScene,
}

impl Scene {
    /// Erstellt eine Szene mit Markern an den gegebenen Winkeln (Radiant).
    pub fn from_angles(
        circle: Circle,
        angles: [f64; MARKER_COUNT],
        strategy: &HighlightStrategy,
    ) -> Self {
        let markers = angles.map(|angle| circle.point_at_angle(angle));
        Self::from_markers(circle, markers, strategy)
    }

    /// Erstellt eine Szene mit zufälligen, gleichverteilten Startwinkeln.
    pub fn with_random_markers<R: Rng>(
        circle: Circle,
        rng: &mut R,
        strategy: &HighlightStrategy,
    ) -> Self {
        let angles = std::array::from_fn(|_| rng.gen_range(0.0..TAU));
        Self::from_angles(circle, angles, strategy)
    }

    /// Erstellt eine Szene aus beliebigen Punkten, die auf den Kreis projiziert werden.
    ///
    /// Ein Punkt im Kreismittelpunkt landet auf dem Referenzpunkt.
    pub fn from_markers(
        circle: Circle,
        markers: [DVec2; MARKER_COUNT],
        strategy: &HighlightStrategy,
    ) -> Self {
        let markers = markers
            .map(|p| project_to_circle(p, &circle).unwrap_or_else(|| circle.reference_point()));
        Self {
            circle,
            markers,
            derived: DerivedScene {
                connections: connections(&markers),
                midpoints: midpoints(&markers),
                highlight: Highlight::hidden_for(strategy),
                labels: Vec::with_capacity(MARKER_COUNT),
            },
        }
    }

    /// Position eines Markers.
    pub fn marker(&self, index: usize) -> Option<DVec2> {
        self.markers.get(index).copied()
    }

    /// Liefert den ersten Marker (aufsteigender Index), dessen Abstand zu `point`
    /// strikt kleiner als `radius` ist.
    pub fn hit_test(&self, point: DVec2, radius: f64) -> Option<usize> {
        self.markers.iter().position(|marker| marker.distance(point) < radius)
    }

    /// Loop-Koordinate eines Markers.
    pub fn loop_coordinate_of(&self, index: usize) -> Option<f64> {
        self.marker(index).map(|position| loop_coordinate(position, &self.circle))
    }
}

/// Sehnen-Endpunkte aus den aktuellen Marker-Positionen.
pub fn connections(markers: &[DVec2; MARKER_COUNT]) -> [Segment; 2] {
    CONNECTION_PAIRS.map(|(a, b)| Segment {
        start: markers[a],
        end: markers[b],
    })
}

/// Mittelpunkte beider Sehnen.
pub fn midpoints(markers: &[DVec2; MARKER_COUNT]) -> [DVec2; 2] {
    CONNECTION_PAIRS.map(|(a, b)| midpoint(markers[a], markers[b]))
}

/// Erzeugt die Koordinaten-Beschriftungen aller Marker neu.
///
/// Bestehende Einträge werden vollständig verworfen, nie einzeln angepasst.
pub fn regenerate_labels(
    labels: &mut Vec<CoordinateLabel>,
    markers: &[DVec2; MARKER_COUNT],
    circle: &Circle,
    offset: f64,
) {
    labels.clear();
    labels.extend(markers.iter().enumerate().map(|(marker_index, &position)| {
        let value = loop_coordinate(position, circle);
        CoordinateLabel {
            marker_index,
            anchor: DVec2::new(position.x, position.y - offset),
            value,
            text: format!("{value:.2}"),
        }
    }));
}
