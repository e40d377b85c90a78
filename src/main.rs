//! Bezier Handle Editor.
//!
//! Interaktiver Editor für einen kubischen Bezier-Spline: Anker und Griffe
//! per Maus ziehen, Kurve wird per adaptiver Teilung in eine Pixelfläche gerastert.

use bezier_handle_editor::{
    service_redraw, ui, AppController, AppIntent, AppState, EditorOptions, PixelBuffer,
};
use eframe::egui;

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

        log::info!(
            "Bezier Handle Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_title("Bezier Handle Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Handle Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    surface: PixelBuffer,
    texture: Option<egui::TextureHandle>,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let surface = PixelBuffer::new(
            0,
            0,
            editor_options.point_color,
            editor_options.background_color,
        );

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            surface,
            texture: None,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let pixels_per_point = ctx.pixels_per_point();
                let viewport_size = ui::surface_size(rect, pixels_per_point);

                let events = self.input.collect_viewport_events(ui, &response, viewport_size);
                self.process_events(events);

                let redraw_pending = self.state.is_redraw_requested();
                self.sync_texture(ctx);
                self.maybe_request_repaint(ctx, redraw_pending);

                if let Some(texture) = &self.texture {
                    ui.painter().image(
                        texture.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
            });
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!(
                    "Event handling failed (letzter Command: {:?}): {:#}",
                    self.state.command_log.last(),
                    e
                );
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, redraw_pending: bool) {
        if redraw_pending || self.state.edit.is_dragging() {
            ctx.request_repaint();
        }
    }

    /// Rastert bei ausstehendem Redraw neu und lädt den Puffer als Textur hoch.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let Some(stats) = service_redraw(&mut self.state, &mut self.surface) else {
            return;
        };
        log::trace!("Frame gerastert: {:?}", stats);

        // Leere Fläche (z.B. minimiertes Fenster) nicht hochladen
        if self.state.view.viewport_size.contains(&0) {
            return;
        }
        let image = self.surface.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("spline_surface", image, egui::TextureOptions::NEAREST));
            }
        }
    }
}
