//! Handler für den Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Größe der Zeichenfläche im State.
pub fn set_viewport_size(state: &mut AppState, width: u32, height: u32) {
    use_cases::viewport::resize(state, width, height);
}
