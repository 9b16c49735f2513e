//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Fordert das kontrollierte Beenden der Anwendung an.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
