//! Kreis-Sehnen-Diagramm Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionState, ViewState};
pub use core::{Circle, Highlight, HighlightStrategy, Scene, Surface};
pub use shared::{DiagramOptions, RenderScene};
