//! Zeichenfläche als explizite Schnittstelle zwischen Renderer und Backend.

use glam::Vec2;

/// Rasterfläche, auf die der Renderer gefüllte Quadrate plottet.
///
/// Backends: [`PixelBuffer`](super::PixelBuffer) für die Anzeige,
/// [`RecordingSurface`](super::RecordingSurface) für Tests und Benchmarks.
pub trait DrawSurface {
    /// Breite in Pixeln.
    fn width(&self) -> u32;

    /// Höhe in Pixeln.
    fn height(&self) -> u32;

    /// Passt die Größe der Fläche an (Resize-Event).
    fn resize(&mut self, width: u32, height: u32);

    /// Löscht das Rechteck `(0, 0, width, height)`.
    fn clear(&mut self, width: u32, height: u32);

    /// Füllt das Quadrat `center ± half_size` mit Kantenlänge `2·half_size + 1`.
    ///
    /// `half_size = 0` ergibt genau ein Pixel.
    fn fill_square(&mut self, center: Vec2, half_size: f32);
}
