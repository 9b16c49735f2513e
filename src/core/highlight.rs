//! Hervorhebungs-Strategien für die Beziehung der beiden Sehnen.

use super::geometry::{midpoint, segment_intersection, within_proximity};
use super::scene::{CONNECTION_PAIRS, MARKER_COUNT};
use glam::DVec2;

/// Reihenfolge, in der das Viereck die Marker besucht (geschlossen: 0→2→3→1→0).
pub const QUADRILATERAL_VISIT_ORDER: [usize; MARKER_COUNT] = [0, 2, 3, 1];

/// Welche Bedingung die Hervorhebung auslöst. Wird beim Erzeugen festgelegt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HighlightStrategy {
    /// Punkt am Schnitt der Sehnen (0,1) und (2,3), sofern er auf beiden Strecken liegt
    Intersection,
    /// Gestricheltes Viereck über alle Marker, sobald beide Mittelpunkte näher als
    /// `threshold` beieinander liegen
    ProximityQuadrilateral {
        /// Abstandsschwelle in normierten Einheiten
        threshold: f64,
    },
}

/// Ergebnis der Hervorhebung für den aktuellen Marker-Zustand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Highlight {
    /// Schnittpunkt der Sehnen; versteckt parkt er im Ursprung
    IntersectionPoint {
        /// Position des Schnittpunkts
        position: DVec2,
        /// Sichtbarkeit
        visible: bool,
    },
    /// Vier Kanten über die Marker in `QUADRILATERAL_VISIT_ORDER`
    Quadrilateral {
        /// Kanten als Start-/Endpunkt-Paare
        edges: [[DVec2; 2]; 4],
        /// Sichtbarkeit
        visible: bool,
    },
}

impl HighlightStrategy {
    /// Wertet die Strategie auf den aktuellen Marker-Positionen aus.
    ///
    /// Liest ausschließlich die Marker, nicht bereits abgeleitete Elemente.
    pub fn evaluate(&self, markers: &[DVec2; MARKER_COUNT]) -> Highlight {
        let [(a, b), (c, d)] = CONNECTION_PAIRS;
        match *self {
            HighlightStrategy::Intersection => {
                match segment_intersection(markers[a], markers[b], markers[c], markers[d]) {
                    Some(position) => Highlight::IntersectionPoint {
                        position,
                        visible: true,
                    },
                    None => Highlight::IntersectionPoint {
                        position: DVec2::ZERO,
                        visible: false,
                    },
                }
            }
            HighlightStrategy::ProximityQuadrilateral { threshold } => {
                let first = midpoint(markers[a], markers[b]);
                let second = midpoint(markers[c], markers[d]);
                let edges = std::array::from_fn(|i| {
                    let from = QUADRILATERAL_VISIT_ORDER[i];
                    let to = QUADRILATERAL_VISIT_ORDER[(i + 1) % MARKER_COUNT];
                    [markers[from], markers[to]]
                });
                Highlight::Quadrilateral {
                    edges,
                    visible: within_proximity(first, second, threshold),
                }
            }
        }
    }

    /// Kurzname für Logs und Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            HighlightStrategy::Intersection => "Intersection",
            HighlightStrategy::ProximityQuadrilateral { .. } => "Proximity quadrilateral",
        }
    }
}

impl Highlight {
    /// Gibt zurück, ob die Hervorhebung aktuell gezeichnet wird.
    pub fn is_visible(&self) -> bool {
        match self {
            Highlight::IntersectionPoint { visible, .. }
            | Highlight::Quadrilateral { visible, .. } => *visible,
        }
    }

    /// Versteckte Hervorhebung passend zur Strategie (Startzustand vor dem ersten Refresh).
    pub fn hidden_for(strategy: &HighlightStrategy) -> Self {
        match strategy {
            HighlightStrategy::Intersection => Highlight::IntersectionPoint {
                position: DVec2::ZERO,
                visible: false,
            },
            HighlightStrategy::ProximityQuadrilateral { .. } => Highlight::Quadrilateral {
                edges: [[DVec2::ZERO; 2]; 4],
                visible: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Circle;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn markers_at(angles: [f64; MARKER_COUNT]) -> [DVec2; MARKER_COUNT] {
        let circle = Circle::new(DVec2::new(0.5, 0.5), 0.3);
        angles.map(|angle| circle.point_at_angle(angle))
    }

    #[test]
    fn crossing_diameters_show_intersection_at_center() {
        let markers = markers_at([0.0, PI, 0.5 * PI, 1.5 * PI]);
        let highlight = HighlightStrategy::Intersection.evaluate(&markers);

        let Highlight::IntersectionPoint { position, visible } = highlight else {
            panic!("Schnittpunkt-Variante erwartet");
        };
        assert!(visible);
        assert_abs_diff_eq!(position.x, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(position.y, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn disjoint_chords_hide_intersection_at_origin() {
        // Beide Sehnen liegen auf derselben Kreishälfte ohne Überkreuzung
        let markers = markers_at([0.1, 0.6, 1.0, 1.5]);
        let highlight = HighlightStrategy::Intersection.evaluate(&markers);

        assert_eq!(
            highlight,
            Highlight::IntersectionPoint {
                position: DVec2::ZERO,
                visible: false,
            }
        );
    }

    #[test]
    fn quadrilateral_visible_when_midpoints_coincide() {
        let strategy = HighlightStrategy::ProximityQuadrilateral { threshold: 0.02 };
        let markers = markers_at([0.0, PI, 0.5 * PI, 1.5 * PI]);

        assert!(strategy.evaluate(&markers).is_visible());
    }

    #[test]
    fn quadrilateral_hidden_when_midpoints_apart() {
        let strategy = HighlightStrategy::ProximityQuadrilateral { threshold: 0.02 };
        let markers = markers_at([PI / 3.0, PI, 0.5 * PI, 1.5 * PI]);

        assert!(!strategy.evaluate(&markers).is_visible());
    }

    #[test]
    fn quadrilateral_edges_follow_visit_order() {
        let strategy = HighlightStrategy::ProximityQuadrilateral { threshold: 0.02 };
        let markers = markers_at([0.2, 1.4, 2.9, 4.6]);

        let Highlight::Quadrilateral { edges, .. } = strategy.evaluate(&markers) else {
            panic!("Viereck-Variante erwartet");
        };
        assert_eq!(edges[0], [markers[0], markers[2]]);
        assert_eq!(edges[1], [markers[2], markers[3]]);
        assert_eq!(edges[2], [markers[3], markers[1]]);
        assert_eq!(edges[3], [markers[1], markers[0]]);
    }
}
