use glam::DVec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeigerpositionen sind normiert; `None` heißt außerhalb der Zeichenfläche.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primärtaste gedrückt
    PointerPressed { pos: Option<DVec2> },
    /// Zeiger bewegt
    PointerMoved { pos: Option<DVec2> },
    /// Primärtaste losgelassen (egal wo)
    PointerReleased { pos: Option<DVec2> },
    /// Anwendung beenden
    ExitRequested,
}
