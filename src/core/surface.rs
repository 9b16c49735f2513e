//! Abbildung zwischen normierter Zeichenfläche und Bildschirm-Pixeln.

use glam::{DVec2, Vec2};

/// Quadratische Zeichenfläche für das Einheitsquadrat [0,1]×[0,1].
///
/// Normiertes Y wächst nach oben, Bildschirm-Y nach unten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Obere linke Ecke in Bildschirm-Pixeln
    pub origin: Vec2,
    /// Kantenlänge in Pixeln
    pub side: f32,
}

impl Surface {
    /// Größtes zentriertes Quadrat innerhalb eines Viewports.
    pub fn fit(viewport_min: Vec2, viewport_size: Vec2) -> Self {
        let side = viewport_size.x.min(viewport_size.y).max(1.0);
        let origin = viewport_min + (viewport_size - Vec2::splat(side)) * 0.5;
        Self { origin, side }
    }

    /// Konvertiert normierte Koordinaten in Bildschirm-Pixel.
    pub fn to_screen(&self, p: DVec2) -> Vec2 {
        Vec2::new(
            self.origin.x + p.x as f32 * self.side,
            self.origin.y + (1.0 - p.y as f32) * self.side,
        )
    }

    /// Konvertiert Bildschirm-Pixel in normierte Koordinaten.
    pub fn to_normalized(&self, screen: Vec2) -> DVec2 {
        let local = (screen - self.origin) / self.side;
        DVec2::new(local.x as f64, 1.0 - local.y as f64)
    }

    /// Gibt zurück, ob ein Bildschirmpunkt auf der Zeichenfläche liegt (Ränder inklusive).
    pub fn contains(&self, screen: Vec2) -> bool {
        let local = screen - self.origin;
        (0.0..=self.side).contains(&local.x) && (0.0..=self.side).contains(&local.y)
    }

    /// Normierte Position eines Bildschirmpunkts, `None` außerhalb der Zeichenfläche.
    pub fn locate(&self, screen: Vec2) -> Option<DVec2> {
        self.contains(screen).then(|| self.to_normalized(screen))
    }

    /// Länge in Pixeln für eine normierte Länge.
    pub fn scale_length(&self, length: f64) -> f32 {
        length as f32 * self.side
    }
}
