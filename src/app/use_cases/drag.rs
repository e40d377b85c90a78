//! Use-Case: gegriffenen Punkt verschieben und Drag beenden.

use crate::app::{AppState, EditState};
use crate::core::PointRef;
use glam::Vec2;

/// Setzt den Punkt `target` in-place auf `pos` und fordert einen Redraw an.
///
/// Benachbarte Segmente lesen denselben gespeicherten Punkt und ändern ihre
/// Form damit sofort. Ein veralteter Verweis beendet den Drag mit Fehler.
pub fn move_point(state: &mut AppState, target: PointRef, pos: Vec2) -> anyhow::Result<()> {
    if let Err(e) = state.spline.set_point(target, pos) {
        state.edit = EditState::Idle;
        return Err(e.context(format!(
            "Punkt {:?} konnte nicht verschoben werden",
            target
        )));
    }
    log::trace!("{:?} → {}", target, pos);
    state.request_redraw();
    Ok(())
}

/// Beendet einen laufenden Drag; die Mutation bleibt erhalten.
pub fn end_drag(state: &mut AppState) {
    if let Some(target) = state.edit.dragged() {
        log::debug!(
            "Drag beendet: {:?} bei {:?}",
            target,
            state.spline.point(target)
        );
    }
    state.edit = EditState::Idle;
}
