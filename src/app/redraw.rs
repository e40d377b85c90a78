//! Bedient ausstehende Redraw-Anforderungen einmal pro Host-Frame.

use crate::app::AppState;
use crate::render::{draw_frame, DrawSurface, FlattenStats};

/// Zeichnet den Spline neu, falls seit dem letzten Frame ein Redraw angefordert wurde.
///
/// Passt die Fläche vorher an die Viewport-Größe an. Beliebig viele Mutationen
/// zwischen zwei Frames ergeben so genau einen Zeichendurchlauf.
pub fn service_redraw(
    state: &mut AppState,
    surface: &mut impl DrawSurface,
) -> Option<FlattenStats> {
    if !state.take_redraw_request() {
        return None;
    }

    let [width, height] = state.view.viewport_size;
    if surface.width() != width || surface.height() != height {
        surface.resize(width, height);
    }
    Some(draw_frame(surface, &state.spline, &state.options))
}
