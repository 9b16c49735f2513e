//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos: Some(pos) } => state
            .scene
            .hit_test(pos, state.options.marker_radius)
            .map(|marker| AppCommand::BeginMarkerDrag { marker })
            .into_iter()
            .collect(),
        // Klicks außerhalb der Zeichenfläche wählen nichts aus
        AppIntent::PointerPressed { pos: None } => vec![],
        AppIntent::PointerMoved { pos: Some(target) } if state.interaction.is_dragging() => {
            vec![AppCommand::DragMarkerTo { target }]
        }
        // Außerhalb: Drag pausiert, endet aber nicht
        AppIntent::PointerMoved { .. } => vec![],
        AppIntent::PointerReleased { .. } if state.interaction.is_dragging() => {
            vec![AppCommand::EndMarkerDrag]
        }
        AppIntent::PointerReleased { .. } => vec![],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
