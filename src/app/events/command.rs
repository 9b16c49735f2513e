use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Drag des Markers mit diesem Index beginnen
    BeginMarkerDrag { marker: usize },
    /// Gezogenen Marker auf die Kreisprojektion von `target` setzen
    DragMarkerTo { target: DVec2 },
    /// Drag beenden, Marker behält seine letzte Position
    EndMarkerDrag,
    /// Anwendung beenden
    RequestExit,
}
