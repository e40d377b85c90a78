//! Use-Case-Funktionen für den Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Größe der Zeichenfläche und fordert einen Redraw an.
pub fn resize(state: &mut AppState, width: u32, height: u32) {
    state.view.viewport_size = [width, height];
    state.request_redraw();
    log::info!("Zeichenfläche: {}x{}", width, height);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_size_and_requests_redraw() {
        let mut state = AppState::new();
        state.take_redraw_request();

        resize(&mut state, 1920, 1080);

        assert_eq!(state.view.viewport_size, [1920, 1080]);
        assert!(state.take_redraw_request());
    }
}
