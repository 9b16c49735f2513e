//! Handler für den Marker-Drag-Lifecycle.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Startet den Drag eines Markers.
pub fn begin(state: &mut AppState, marker: usize) -> anyhow::Result<()> {
    use_cases::drag::begin_marker_drag(state, marker)
}

/// Bewegt den gezogenen Marker auf die Kreisprojektion des Zeigers.
pub fn move_to(state: &mut AppState, target: DVec2) {
    use_cases::drag::drag_marker_to(state, target);
}

/// Beendet den laufenden Drag.
pub fn end(state: &mut AppState) {
    use_cases::drag::end_marker_drag(state);
}
