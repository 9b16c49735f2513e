//! UI-Komponenten: Input-Handling und Status-Bar.

pub mod input;
/// UI-Layer mit egui
///
/// Übersetzt egui-Eingaben in `AppIntent`s; Keyboard-Shortcuts sind
/// in eine eigene Datei extrahiert.
mod keyboard;
pub mod status;

pub use input::InputState;
pub use status::render_status_bar;
