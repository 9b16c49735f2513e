//! Keyboard-Shortcuts für das Diagramm.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// `Q` sowie `Ctrl+W` (macOS: `Cmd+W`) beenden die Anwendung.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_q_pressed, key_w_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::W),
        )
    });

    if (key_q_pressed && !modifiers.command) || (modifiers.command && key_w_pressed) {
        events.push(AppIntent::ExitRequested);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_with_key(key: egui::Key, modifiers: egui::Modifiers) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.modifiers = modifiers;
        raw_input.events.push(egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        });

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = collect_keyboard_intents(ui);
            });
        });

        events
    }

    #[test]
    fn q_requests_exit() {
        let events = collect_with_key(egui::Key::Q, egui::Modifiers::default());
        assert_eq!(events, vec![AppIntent::ExitRequested]);
    }

    #[test]
    fn ctrl_w_requests_exit() {
        let events = collect_with_key(egui::Key::W, egui::Modifiers::COMMAND);
        assert_eq!(events, vec![AppIntent::ExitRequested]);
    }

    #[test]
    fn plain_w_is_ignored() {
        let events = collect_with_key(egui::Key::W, egui::Modifiers::default());
        assert!(events.is_empty());
    }
}
