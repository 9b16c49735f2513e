/// Zustand der Marker-Interaktion (Drag-Lifecycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Kein Marker ausgewählt
    #[default]
    Idle,
    /// Marker mit diesem Index folgt dem Zeiger
    Dragging {
        /// Index des gezogenen Markers
        marker: usize,
    },
}

impl InteractionState {
    /// Index des gezogenen Markers, falls ein Drag läuft.
    pub fn dragged_marker(&self) -> Option<usize> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Dragging { marker } => Some(*marker),
        }
    }

    /// Gibt zurück, ob aktuell ein Marker gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.dragged_marker().is_some()
    }
}
