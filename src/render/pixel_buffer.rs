//! RGBA-Pixelpuffer als Zeichenfläche für die egui-Textur.

use super::DrawSurface;
use glam::Vec2;

/// Konvertiert eine RGBA-Farbe (0.0–1.0) in Bytes.
fn color_to_bytes(color: [f32; 4]) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// CPU-Rasterfläche mit fester Vorder- und Hintergrundfarbe.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// RGBA, zeilenweise
    pixels: Vec<u8>,
    foreground: [u8; 4],
    background: [u8; 4],
}

impl PixelBuffer {
    /// Erstellt einen Puffer der Größe `width × height`, gefüllt mit `background`.
    pub fn new(width: u32, height: u32, foreground: [f32; 4], background: [f32; 4]) -> Self {
        let mut buffer = Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            foreground: color_to_bytes(foreground),
            background: color_to_bytes(background),
        };
        buffer.resize(width, height);
        buffer
    }

    /// Farbe des Pixels `(x, y)` oder `None` außerhalb der Fläche.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Anzahl der Pixel in Vordergrundfarbe.
    pub fn count_foreground(&self) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| **px == self.foreground)
            .count()
    }

    /// Kopiert den Puffer in ein `egui::ColorImage` für den Textur-Upload.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.pixels,
        )
    }

    fn fill_all(&mut self) {
        let bg = self.background;
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bg);
        }
    }
}

impl DrawSurface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize * 4];
        self.fill_all();
    }

    fn clear(&mut self, width: u32, height: u32) {
        if width >= self.width && height >= self.height {
            self.fill_all();
            return;
        }
        let bg = self.background;
        for y in 0..height.min(self.height) {
            for x in 0..width.min(self.width) {
                let idx = (y as usize * self.width as usize + x as usize) * 4;
                self.pixels[idx..idx + 4].copy_from_slice(&bg);
            }
        }
    }

    fn fill_square(&mut self, center: Vec2, half_size: f32) {
        if !center.is_finite() {
            return;
        }
        // Wie fillRect(x - r, y - r, 2r + 1, 2r + 1) auf ganzzahligem Raster
        let side = (2.0 * half_size + 1.0).round().max(1.0) as i64;
        let x0 = (center.x - half_size).round() as i64;
        let y0 = (center.y - half_size).round() as i64;

        let x_start = x0.max(0);
        let y_start = y0.max(0);
        let x_end = (x0 + side).min(self.width as i64);
        let y_end = (y0 + side).min(self.height as i64);

        let fg = self.foreground;
        for y in y_start..y_end {
            let row = y as usize * self.width as usize;
            for x in x_start..x_end {
                let idx = (row + x as usize) * 4;
                self.pixels[idx..idx + 4].copy_from_slice(&fg);
            }
        }
    }
}
