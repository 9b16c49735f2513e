//! Rein-mathematische Kreis- und Strecken-Geometrie im normierten Raum.
//!
//! Alle Funktionen arbeiten auf reinen Koordinatenpaaren (`DVec2`);
//! Aufrufer extrahieren Positionen vorher aus Markern oder Szenen-Elementen.

use glam::DVec2;
use std::f64::consts::TAU;

/// Nenner-Schwelle, unterhalb derer zwei Strecken als parallel gelten.
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Kreis im normierten Raum (fest für die gesamte Sitzung).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Mittelpunkt
    pub center: DVec2,
    /// Radius (positiv)
    pub radius: f64,
}

impl Circle {
    /// Erstellt einen Kreis aus Mittelpunkt und Radius.
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Punkt auf dem Kreisrand zum Winkel (Radiant, gegen den Uhrzeigersinn ab +X).
    pub fn point_at_angle(&self, angle: f64) -> DVec2 {
        self.center + self.radius * DVec2::new(angle.cos(), angle.sin())
    }

    /// Referenzpunkt mit Loop-Koordinate 0 (direkt rechts vom Mittelpunkt).
    pub fn reference_point(&self) -> DVec2 {
        self.point_at_angle(0.0)
    }

    /// Tesselliert den Kreisrand in `samples` Punkte über [0, 2π].
    ///
    /// Erster und letzter Punkt fallen zusammen, damit der Umriss geschlossen ist.
    pub fn outline(&self, samples: usize) -> Vec<DVec2> {
        let samples = samples.max(2);
        let step = TAU / (samples - 1) as f64;
        (0..samples)
            .map(|i| self.point_at_angle(i as f64 * step))
            .collect()
    }
}

/// Projiziert `p` entlang des Strahls vom Mittelpunkt auf den Kreisrand.
///
/// Liefert `None`, wenn `p` mit dem Mittelpunkt zusammenfällt (keine Richtung).
pub fn project_to_circle(p: DVec2, circle: &Circle) -> Option<DVec2> {
    let direction = (p - circle.center).try_normalize()?;
    Some(circle.center + direction * circle.radius)
}

/// Winkelposition von `p` relativ zum Kreismittelpunkt, normiert auf [0, 1).
///
/// 0 liegt rechts vom Mittelpunkt, 0.25 oben, 0.5 links, 0.75 unten.
pub fn loop_coordinate(p: DVec2, circle: &Circle) -> f64 {
    let d = p - circle.center;
    let mut angle = d.y.atan2(d.x);
    // `<=` erfasst auch -0.0; der Vollkreis fällt unten auf 0.0 zurück
    if angle <= 0.0 {
        angle += TAU;
    }
    let coordinate = angle / TAU;
    // Rundung bei winzigen negativen Winkeln kann exakt 1.0 ergeben
    if coordinate >= 1.0 {
        0.0
    } else {
        coordinate
    }
}

/// Arithmetisches Mittel zweier Punkte.
pub fn midpoint(a: DVec2, b: DVec2) -> DVec2 {
    (a + b) * 0.5
}

/// Schnittpunkt der Strecken `ab` und `cd`.
///
/// Nur Schnitte innerhalb beider Strecken (Parameter t, u in [0, 1]) zählen;
/// nahezu parallele Strecken liefern `None`.
pub fn segment_intersection(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> Option<DVec2> {
    let denominator = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
    if denominator.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((a.x - c.x) * (c.y - d.y) - (a.y - c.y) * (c.x - d.x)) / denominator;
    let u = -((a.x - b.x) * (a.y - c.y) - (a.y - b.y) * (a.x - c.x)) / denominator;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a + t * (b - a))
    } else {
        None
    }
}

/// `true`, wenn der Abstand von `p` und `q` strikt kleiner als `threshold` ist.
pub fn within_proximity(p: DVec2, q: DVec2, threshold: f64) -> bool {
    p.distance(q) < threshold
}
