//! Handler für das Greifen, Ziehen und Loslassen von Spline-Punkten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointRef;

/// Greift den ersten Punkt innerhalb von `max_distance` um `pos`.
pub fn begin_drag(state: &mut AppState, pos: glam::Vec2, max_distance: f32) {
    use_cases::pick::begin_drag(state, pos, max_distance);
}

/// Verschiebt den gegriffenen Punkt und propagiert Fehler an den Aufrufer.
pub fn move_point(state: &mut AppState, target: PointRef, pos: glam::Vec2) -> anyhow::Result<()> {
    use_cases::drag::move_point(state, target, pos)
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}
