use crate::app::use_cases;
use crate::app::CommandLog;
use crate::core::{Scene, MARKER_COUNT};
use crate::shared::DiagramOptions;
use rand::Rng;

use super::{InteractionState, ViewState};

/// Hauptzustand der Anwendung.
///
/// Wird einmal beim Start erzeugt und lebt bis zum Ende der Event-Loop.
pub struct AppState {
    /// Kreis, Marker und abgeleitete Elemente
    pub scene: Scene,
    /// Drag-Zustand
    pub interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// Darstellungs- und Interaktionsparameter
    pub options: DiagramOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit zufällig platzierten Markern.
    pub fn new() -> Self {
        Self::with_options(DiagramOptions::default())
    }

    /// Erstellt einen App-State mit den gegebenen Optionen und zufälligen Markern.
    pub fn with_options(options: DiagramOptions) -> Self {
        Self::with_rng(options, &mut rand::thread_rng())
    }

    /// Erstellt einen App-State mit Markern aus einer expliziten Zufallsquelle.
    pub fn with_rng<R: Rng>(options: DiagramOptions, rng: &mut R) -> Self {
        let scene = Scene::with_random_markers(options.circle(), rng, &options.highlight);
        Self::from_scene(options, scene)
    }

    /// Erstellt einen App-State mit Markern an den gegebenen Winkeln (Radiant).
    pub fn with_marker_angles(options: DiagramOptions, angles: [f64; MARKER_COUNT]) -> Self {
        let scene = Scene::from_angles(options.circle(), angles, &options.highlight);
        Self::from_scene(options, scene)
    }

    fn from_scene(options: DiagramOptions, scene: Scene) -> Self {
        let mut state = Self {
            scene,
            interaction: InteractionState::Idle,
            view: ViewState::new(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        };
        use_cases::scene::refresh_scene(&mut state);
        state
    }

    /// Gibt zurück, ob die Hervorhebung aktuell sichtbar ist (für UI-Anzeige)
    pub fn highlight_visible(&self) -> bool {
        self.scene.derived.highlight.is_visible()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
