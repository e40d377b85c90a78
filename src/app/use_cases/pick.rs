//! Use-Case: Punkt-Selektion per Klick (First-Hit-Pick).

use crate::app::{AppState, EditState};
use crate::core::{PointField, PointRef, Spline};
use glam::Vec2;

/// Sucht den ersten Punkt, der strikt näher als `max_distance` an `pos` liegt.
///
/// Reihenfolge: Knoten in Spline-Reihenfolge, je Knoten Position vor
/// `control_in` vor `control_out`. Der erste Treffer gewinnt, auch wenn ein
/// späterer Punkt näher läge.
pub fn pick_point(spline: &Spline, pos: Vec2, max_distance: f32) -> Option<PointRef> {
    spline.nodes.iter().enumerate().find_map(|(index, node)| {
        let candidates = [
            (PointField::Position, Some(node.position)),
            (PointField::ControlIn, node.control_in),
            (PointField::ControlOut, node.control_out),
        ];
        candidates.into_iter().find_map(|(field, point)| {
            point
                .filter(|p| pos.distance(*p) < max_distance)
                .map(|_| PointRef::new(index, field))
        })
    })
}

/// Beginnt einen Drag, falls ein Punkt getroffen wurde; sonst bleibt der Zustand unverändert.
pub fn begin_drag(state: &mut AppState, pos: Vec2, max_distance: f32) {
    match pick_point(&state.spline, pos, max_distance) {
        Some(target) => {
            state.edit = EditState::Dragging(target);
            log::debug!("Drag gestartet: {:?} bei {}", target, pos);
        }
        None => {
            log::trace!("Kein Punkt innerhalb {} um {}", max_distance, pos);
        }
    }
}
