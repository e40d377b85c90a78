//! Viewport-Input-Handling: Zeiger-Events und Flächengröße → AppIntent.

use crate::app::AppIntent;

/// Rechnet eine egui-Position in Pixel-Koordinaten der Zeichenfläche um.
pub fn screen_to_surface(pos: egui::Pos2, origin: egui::Pos2, pixels_per_point: f32) -> glam::Vec2 {
    let local = pos - origin;
    glam::Vec2::new(local.x * pixels_per_point, local.y * pixels_per_point)
}

/// Größe der Zeichenfläche in physischen Pixeln für ein egui-Rechteck.
pub fn surface_size(rect: egui::Rect, pixels_per_point: f32) -> [u32; 2] {
    [
        (rect.width() * pixels_per_point).round().max(0.0) as u32,
        (rect.height() * pixels_per_point).round().max(0.0) as u32,
    ]
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    last_viewport_size: Option<[u32; 2]>,
    last_pointer_pos: Option<glam::Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_viewport_size: None,
            last_pointer_pos: None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge pro Frame: Resize, Drücken, Bewegen, Loslassen.
    /// Drücken zählt nur innerhalb der Fläche, Loslassen immer.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [u32; 2],
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if self.last_viewport_size != Some(viewport_size) {
            self.last_viewport_size = Some(viewport_size);
            events.push(AppIntent::ViewportResized {
                width: viewport_size[0],
                height: viewport_size[1],
            });
        }

        let pixels_per_point = ui.ctx().pixels_per_point();
        let origin = response.rect.min;

        // press_origin() liefert die exakte Klickposition, nicht die Position
        // nach Erkennung der Drag-Schwelle.
        let (pressed, released, press_origin, latest_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        if pressed {
            if let Some(pos) = press_origin.filter(|p| response.rect.contains(*p)) {
                events.push(AppIntent::PointerPressed {
                    pos: screen_to_surface(pos, origin, pixels_per_point),
                });
            }
        }

        if let Some(pos) = latest_pos {
            let pos = screen_to_surface(pos, origin, pixels_per_point);
            if self.last_pointer_pos != Some(pos) {
                self.last_pointer_pos = Some(pos);
                events.push(AppIntent::PointerMoved { pos });
            }
        }

        if released {
            events.push(AppIntent::PointerReleased);
        }

        events
    }
}
