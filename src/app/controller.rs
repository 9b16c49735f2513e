//! Application Controller: einziger Einstieg für Zustandsänderungen.

use super::handlers;
use super::intent_mapping::map_intent_to_commands;
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Übersetzt Intents in Commands und führt sie auf dem AppState aus.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent; bricht beim ersten fehlgeschlagenen Command ab.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        map_intent_to_commands(state, intent)
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command))
    }

    /// Führt einen Command aus; nur erfolgreich ausgeführte landen im Command-Log.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        match command {
            AppCommand::BeginMarkerDrag { marker } => handlers::drag::begin(state, marker)?,
            AppCommand::DragMarkerTo { target } => handlers::drag::move_to(state, target),
            AppCommand::EndMarkerDrag => handlers::drag::end(state),
            AppCommand::RequestExit => handlers::window::request_exit(state),
        }

        state.command_log.record(&command);
        Ok(())
    }

    /// Baut die Render-Szene für den nächsten Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
