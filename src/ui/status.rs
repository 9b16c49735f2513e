//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, InteractionState};
use glam::DVec2;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, cursor: Option<DVec2>) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(interaction_text(state.interaction));

            ui.separator();

            let coordinates: Vec<String> = (0..state.scene.markers.len())
                .filter_map(|index| state.scene.loop_coordinate_of(index))
                .map(|value| format!("{value:.2}"))
                .collect();
            ui.label(format!("Loop: {}", coordinates.join(" | ")));

            ui.separator();

            let highlight = if state.highlight_visible() {
                "sichtbar"
            } else {
                "verborgen"
            };
            ui.label(format!("{}: {}", state.options.highlight.label(), highlight));

            // Cursor-Position (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match cursor {
                    Some(p) => ui.label(format!("x={:.3} y={:.3}", p.x, p.y)),
                    None => ui.label(""),
                };
            });
        });
    });
}

fn interaction_text(interaction: InteractionState) -> String {
    match interaction {
        InteractionState::Idle => "Bereit".to_string(),
        InteractionState::Dragging { marker } => format!("Ziehe Marker {marker}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_text_names_dragged_marker() {
        assert_eq!(interaction_text(InteractionState::Idle), "Bereit");
        assert_eq!(
            interaction_text(InteractionState::Dragging { marker: 2 }),
            "Ziehe Marker 2"
        );
    }
}
