//! Spline-Knoten mit optionalen, asymmetrischen Tangenten-Griffen.

use super::vector::Vector2Ext;
use glam::Vec2;

/// Ein Ankerpunkt des Splines.
///
/// Fehlt `control_out`, wird der ausgehende Griff aus `control_in` gespiegelt
/// (C1-stetiger Übergang). Ein explizit gesetztes `control_out` erzeugt
/// bewusst einen Knick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineNode {
    /// Position, durch die der Spline läuft
    pub position: Vec2,
    /// Eingehender Tangenten-Griff
    pub control_in: Option<Vec2>,
    /// Ausgehender Tangenten-Griff
    pub control_out: Option<Vec2>,
}

impl SplineNode {
    /// Erstellt einen Knoten ohne Griffe.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            control_in: None,
            control_out: None,
        }
    }

    /// Setzt den eingehenden Griff (Builder).
    pub fn with_control_in(mut self, control_in: Vec2) -> Self {
        self.control_in = Some(control_in);
        self
    }

    /// Setzt den ausgehenden Griff (Builder).
    pub fn with_control_out(mut self, control_out: Vec2) -> Self {
        self.control_out = Some(control_out);
        self
    }

    /// Griff, der das vorherige Segment an diesen Knoten heranzieht.
    #[inline]
    pub fn pull(&self) -> Option<Vec2> {
        self.control_in
    }

    /// Griff, der das nächste Segment aus diesem Knoten herausschiebt.
    ///
    /// `control_out` falls gesetzt, sonst `control_in` gespiegelt an `position`.
    #[inline]
    pub fn push(&self) -> Option<Vec2> {
        self.control_out
            .or_else(|| self.control_in.map(|c| c.flip_around(self.position)))
    }

    /// Alle vorhandenen Punkte des Knotens (Position, dann Griffe).
    pub fn points(&self) -> impl Iterator<Item = Vec2> {
        [Some(self.position), self.control_in, self.control_out]
            .into_iter()
            .flatten()
    }
}
