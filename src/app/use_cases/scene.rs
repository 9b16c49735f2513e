//! Use-Case: Neuberechnung aller abgeleiteten Szenen-Elemente.

use crate::app::AppState;
use crate::core::scene::{connections, midpoints, regenerate_labels};

/// Berechnet alle abgeleiteten Elemente aus den aktuellen Markern neu
/// und fordert einen Redraw an.
///
/// Läuft bei jeder Mutation vollständig durch, ohne Diffing.
/// Reihenfolge: Sehnen, Beschriftungen, Hervorhebung, Mittelpunkte.
pub fn refresh_scene(state: &mut AppState) {
    let scene = &mut state.scene;
    let derived = &mut scene.derived;

    derived.connections = connections(&scene.markers);
    regenerate_labels(
        &mut derived.labels,
        &scene.markers,
        &scene.circle,
        state.options.label_offset,
    );
    derived.highlight = state.options.highlight.evaluate(&scene.markers);
    derived.midpoints = midpoints(&scene.markers);

    state.view.request_redraw();
}
