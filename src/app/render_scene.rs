//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderScene, TextLabel, REFERENCE_LABEL};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let scene = &state.scene;
    let options = &state.options;

    let coordinate_labels = scene
        .derived
        .labels
        .iter()
        .map(|label| TextLabel {
            anchor: label.anchor,
            text: label.text.clone(),
            color: options.marker_color(label.marker_index),
        })
        .collect();

    RenderScene {
        circle: scene.circle,
        markers: scene.markers,
        connections: scene.derived.connections,
        midpoints: scene.derived.midpoints,
        highlight: scene.derived.highlight,
        coordinate_labels,
        reference_label: TextLabel {
            anchor: scene.circle.reference_point(),
            text: REFERENCE_LABEL.to_string(),
            color: options.circle_color,
        },
        options: options.clone(),
    }
}
