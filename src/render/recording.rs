//! Aufzeichnende Zeichenfläche ohne echtes Backend.

use super::DrawSurface;
use glam::Vec2;

/// Ein geplottetes Quadrat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottedSquare {
    pub center: Vec2,
    pub half_size: f32,
}

/// Merkt sich jeden `clear`/`fill_square`-Aufruf in Reihenfolge.
///
/// Wird in Tests und Benchmarks anstelle des `PixelBuffer` verwendet.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    /// Anzahl der `clear`-Aufrufe
    pub clears: usize,
    /// Alle Quadrate seit dem letzten `clear`
    pub squares: Vec<PlottedSquare>,
}

impl RecordingSurface {
    /// Erstellt eine leere Fläche der Größe `width × height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            clears: 0,
            squares: Vec::new(),
        }
    }

    /// Zentren aller Quadrate mit `half_size == radius`.
    pub fn centers_with_radius(&self, radius: f32) -> Vec<Vec2> {
        self.squares
            .iter()
            .filter(|s| s.half_size == radius)
            .map(|s| s.center)
            .collect()
    }

    /// Linien-Pixel (`half_size == 0`).
    pub fn line_points(&self) -> Vec<Vec2> {
        self.centers_with_radius(0.0)
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self, _width: u32, _height: u32) {
        self.clears += 1;
        self.squares.clear();
    }

    fn fill_square(&mut self, center: Vec2, half_size: f32) {
        self.squares.push(PlottedSquare { center, half_size });
    }
}
