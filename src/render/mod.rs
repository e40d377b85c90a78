//! Software-Rendering des Splines auf eine Rasterfläche.
//!
//! Der Renderer kennt nur die [`DrawSurface`]-Schnittstelle; welches Backend
//! die Pixel anzeigt, entscheidet der Aufrufer.

pub mod flatten;
mod frame;
mod pixel_buffer;
pub mod raster;
mod recording;
mod surface;

pub use flatten::{flatten_cubic, is_straight, FlattenParams, FlattenStats};
pub use frame::draw_frame;
pub use pixel_buffer::PixelBuffer;
pub use raster::{draw_line, draw_point};
pub use recording::{PlottedSquare, RecordingSurface};
pub use surface::DrawSurface;
