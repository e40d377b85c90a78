//! Linien-Rasterung (DDA) und Punkt-Plotting.

use super::DrawSurface;
use crate::core::Vector2Ext;
use glam::Vec2;

/// Plottet einen Punkt als gefülltes Quadrat mit Halbgröße `radius`.
#[inline]
pub fn draw_point(surface: &mut impl DrawSurface, p: Vec2, radius: f32) {
    surface.fill_square(p, radius);
}

/// Rastert die Strecke `p0 → p1`.
///
/// Schrittzahl `n` ist der Chebyshev-Abstand; für `step` in `0..=n` wird
/// `round_half_up(lerp(p0, p1, step / n))` geplottet. Die dominante Achse rückt also
/// pro Schritt genau um ein Pixel vor. Gibt die Anzahl geplotteter Punkte zurück.
pub fn draw_line(surface: &mut impl DrawSurface, p0: Vec2, p1: Vec2, radius: f32) -> usize {
    if !(p0.is_finite() && p1.is_finite()) {
        log::warn!("Linie mit nicht-endlichen Koordinaten verworfen: {p0} → {p1}");
        return 0;
    }

    let n = p0.diagonal_distance(p1);
    let steps = n.floor() as usize;
    for step in 0..=steps {
        let t = if n == 0.0 { 0.0 } else { step as f32 / n };
        draw_point(surface, p0.lerp(p1, t).round_half_up(), radius);
    }
    steps + 1
}
