//! Viewport-Input-Handling: Zeiger- und Tastatur-Events → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::Surface;
use glam::{DVec2, Vec2};

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    last_pointer: Option<DVec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { last_pointer: None }
    }

    /// Letzte bekannte Zeigerposition in normierten Koordinaten.
    pub fn last_pointer(&self) -> Option<DVec2> {
        self.last_pointer
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zeigerpositionen außerhalb von `surface` werden als `None` gemeldet.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        surface: &Surface,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui);

        let raw_events = ui.input(|i| i.events.clone());
        events.extend(self.pointer_intents(&raw_events, surface));

        events
    }

    /// Übersetzt rohe Zeiger-Events in Intents (Reihenfolge bleibt erhalten).
    pub fn pointer_intents(&mut self, raw_events: &[egui::Event], surface: &Surface) -> Vec<AppIntent> {
        let mut intents = Vec::new();

        for event in raw_events {
            let intent = match *event {
                egui::Event::PointerMoved(pos) => {
                    let pos = locate(surface, pos);
                    self.last_pointer = pos;
                    AppIntent::PointerMoved { pos }
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let pos = locate(surface, pos);
                    if pressed {
                        AppIntent::PointerPressed { pos }
                    } else {
                        AppIntent::PointerReleased { pos }
                    }
                }
                egui::Event::PointerGone => {
                    self.last_pointer = None;
                    AppIntent::PointerMoved { pos: None }
                }
                _ => continue,
            };
            intents.push(intent);
        }

        intents
    }
}

fn locate(surface: &Surface, pos: egui::Pos2) -> Option<DVec2> {
    surface.locate(Vec2::new(pos.x, pos.y))
}
