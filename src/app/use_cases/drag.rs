//! Use-Case: Marker entlang des Kreises ziehen.

use crate::app::{AppState, InteractionState};
use crate::core::{project_to_circle, MARKER_COUNT};
use glam::DVec2;

use super::scene::refresh_scene;

/// Wählt einen Marker für den Drag aus.
pub fn begin_marker_drag(state: &mut AppState, marker: usize) -> anyhow::Result<()> {
    anyhow::ensure!(
        marker < MARKER_COUNT,
        "Marker-Index {marker} außerhalb von 0..{MARKER_COUNT}"
    );

    state.interaction = InteractionState::Dragging { marker };
    log::debug!("Drag von Marker {} gestartet", marker);
    Ok(())
}

/// Setzt den gezogenen Marker auf die Kreisprojektion von `target`.
///
/// Liegt `target` exakt im Kreismittelpunkt, bleibt der Marker stehen.
/// Die abgeleitete Szene wird in jedem Fall neu berechnet.
pub fn drag_marker_to(state: &mut AppState, target: DVec2) {
    let Some(marker) = state.interaction.dragged_marker() else {
        return;
    };
    let Some(position) = state.scene.markers.get_mut(marker) else {
        return;
    };

    match project_to_circle(target, &state.scene.circle) {
        Some(projected) => {
            *position = projected;
            log::trace!(
                "Marker {} → ({:.4}, {:.4})",
                marker,
                projected.x,
                projected.y
            );
        }
        None => log::debug!("Zeiger im Kreismittelpunkt, Marker {} bleibt stehen", marker),
    }

    refresh_scene(state);
}

/// Beendet den Drag; der Marker behält seine letzte Position.
pub fn end_marker_drag(state: &mut AppState) {
    if let Some(marker) = state.interaction.dragged_marker() {
        log::debug!("Drag von Marker {} beendet", marker);
    }
    state.interaction = InteractionState::Idle;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::DiagramOptions;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn spread_state() -> AppState {
        AppState::with_marker_angles(DiagramOptions::default(), [0.0, 0.5 * PI, PI, 1.5 * PI])
    }

    #[test]
    fn begin_rejects_unknown_marker() {
        let mut state = spread_state();

        assert!(begin_marker_drag(&mut state, MARKER_COUNT).is_err());
        assert_eq!(state.interaction, InteractionState::Idle);
    }

    #[test]
    fn drag_projects_target_onto_circle() {
        let mut state = spread_state();
        begin_marker_drag(&mut state, 0).expect("gültiger Index");

        drag_marker_to(&mut state, DVec2::new(0.5, 0.1));

        let marker = state.scene.markers[0];
        assert_abs_diff_eq!(marker.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(marker.y, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn drag_to_center_keeps_previous_position() {
        let mut state = spread_state();
        let before = state.scene.markers[1];
        begin_marker_drag(&mut state, 1).expect("gültiger Index");
        state.view.take_redraw_request();
        let center = state.scene.circle.center;

        drag_marker_to(&mut state, center);

        assert_eq!(state.scene.markers[1], before);
        assert!(state.view.take_redraw_request());
    }

    #[test]
    fn drag_without_selection_changes_nothing() {
        let mut state = spread_state();
        let before = state.scene.markers;

        drag_marker_to(&mut state, DVec2::new(0.9, 0.9));

        assert_eq!(state.scene.markers, before);
    }

    #[test]
    fn end_returns_to_idle() {
        let mut state = spread_state();
        begin_marker_drag(&mut state, 3).expect("gültiger Index");

        end_marker_drag(&mut state);

        assert_eq!(state.interaction, InteractionState::Idle);
    }
}
