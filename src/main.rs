//! Kreis-Sehnen-Diagramm.
//!
//! Vier ziehbare Marker auf einem Kreis, zwei Sehnen und ihre Hervorhebung.

use circle_chords::core::Surface;
use circle_chords::render::{self, EguiCanvas};
use circle_chords::{ui, AppController, AppIntent, AppState};
use glam::Vec2;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        let state = AppState::new();
        log::info!(
            "Kreis-Sehnen-Diagramm v{} startet (Hervorhebung: {})",
            env!("CARGO_PKG_VERSION"),
            state.options.highlight.label()
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([720.0, 760.0])
                .with_title("Circle Chords"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Circle Chords",
            options,
            Box::new(|_cc| Ok(Box::new(DiagramApp::new(state)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DiagramApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl DiagramApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for DiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
        self.maybe_request_repaint(ctx);
    }
}

impl DiagramApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state, self.input.last_pointer());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let surface = Surface::fit(
                    Vec2::new(rect.min.x, rect.min.y),
                    Vec2::new(rect.width(), rect.height()),
                );

                events.extend(self.input.collect_viewport_events(ui, &surface));

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                let mut canvas = EguiCanvas::new(&painter, surface);
                render::paint_scene(&mut canvas, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.state.view.take_redraw_request() || self.state.should_exit {
            ctx.request_repaint();
        }
    }
}
