//! Punkt-Arithmetik auf `glam::Vec2`.
//!
//! `add`, `subtract`, `negate`, `distance` und `lerp` liefert glam bereits;
//! hier kommen nur die editor-spezifischen Ableitungen dazu.

use glam::Vec2;

/// Erweiterung von `Vec2` um Chebyshev-Abstand und Punktspiegelung.
pub trait Vector2Ext {
    /// Chebyshev-Abstand: `max(|Δx|, |Δy|)`.
    ///
    /// Kein geometrischer Abstand, sondern die Schrittzahl entlang der
    /// dominanten Achse beim Rastern einer Linie.
    fn diagonal_distance(self, other: Vec2) -> f32;

    /// Punktspiegelung an `pivot`: `pivot + (pivot - self)`.
    fn flip_around(self, pivot: Vec2) -> Vec2;

    /// Rundet je Achse auf die nächste ganze Zahl, `.5` immer Richtung +∞
    /// (`-0.5 → 0`, `2.5 → 3`).
    fn round_half_up(self) -> Vec2;
}

impl Vector2Ext for Vec2 {
    #[inline]
    fn diagonal_distance(self, other: Vec2) -> f32 {
        let diff = (other - self).abs();
        diff.x.max(diff.y)
    }

    #[inline]
    fn flip_around(self, pivot: Vec2) -> Vec2 {
        -(self - pivot) + pivot
    }

    #[inline]
    fn round_half_up(self) -> Vec2 {
        (self + Vec2::splat(0.5)).floor()
    }
}
