//! Frame-Aufbau: Fläche löschen, Marker plotten, Segmente rastern.

use super::flatten::{flatten_cubic, FlattenParams, FlattenStats};
use super::raster::draw_point;
use super::DrawSurface;
use crate::core::Spline;
use crate::shared::EditorOptions;

/// Zeichnet einen kompletten Frame des Splines.
///
/// Reihenfolge: `clear`, Marker für jede Position und jeden vorhandenen Griff,
/// dann jedes Segment zwischen benachbarten Knoten.
pub fn draw_frame(
    surface: &mut impl DrawSurface,
    spline: &Spline,
    options: &EditorOptions,
) -> FlattenStats {
    let (width, height) = (surface.width(), surface.height());
    surface.clear(width, height);

    for point in spline.nodes.iter().flat_map(|node| node.points()) {
        draw_point(surface, point, options.marker_radius);
    }

    let params = FlattenParams::from_options(options);
    let mut stats = FlattenStats::default();
    for segment in spline.segments() {
        stats.merge(flatten_cubic(surface, segment, &params));
    }

    log::debug!(
        "Frame {}x{}: {} Segmente, {} Teilstrecken, {} Pixel, Tiefe {}",
        width,
        height,
        spline.segment_count(),
        stats.lines,
        stats.points,
        stats.deepest
    );
    stats
}
