//! Adaptive Kurven-Rasterung: kubische Bézier-Segmente ohne feste Schrittzahl.
//!
//! Ein Segment wird so lange per De Casteljau halbiert, bis sein Kontrollpolygon
//! kaum länger als die Sehne ist; dann wird die Sehne als Linie gerastert.
//! Die Teilungstiefe passt sich dadurch lokal der Krümmung an.

use super::raster::draw_line;
use super::DrawSurface;
use crate::core::CubicSegment;
use crate::shared::options::{MAX_FLATTEN_DEPTH, STRAIGHTNESS_TOLERANCE};
use crate::shared::EditorOptions;

/// Parameter der adaptiven Teilung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenParams {
    /// Relative Toleranz des Geradheitstests (`polygon < (1 + tol) · chord`)
    pub tolerance: f32,
    /// Maximale Rekursionstiefe; darüber wird die Sehne gezeichnet
    pub max_depth: u32,
    /// Halbgröße der Linien-Pixel
    pub line_radius: f32,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            tolerance: STRAIGHTNESS_TOLERANCE,
            max_depth: MAX_FLATTEN_DEPTH,
            line_radius: 0.0,
        }
    }
}

impl FlattenParams {
    /// Übernimmt Toleranz, Tiefe und Linienbreite aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            tolerance: options.straightness_tolerance,
            max_depth: options.max_flatten_depth,
            line_radius: options.line_radius,
        }
    }
}

/// Statistik eines Rasterungs-Durchlaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// Anzahl gerasterter Teilstrecken
    pub lines: usize,
    /// Anzahl geplotteter Pixel
    pub points: usize,
    /// Tiefste erreichte Rekursionsebene
    pub deepest: u32,
    /// Teilstrecken, die wegen `max_depth` als Sehne gezeichnet wurden
    pub depth_limit_hits: usize,
}

impl FlattenStats {
    /// Addiert die Werte eines weiteren Durchlaufs.
    pub fn merge(&mut self, other: FlattenStats) {
        self.lines += other.lines;
        self.points += other.points;
        self.deepest = self.deepest.max(other.deepest);
        self.depth_limit_hits += other.depth_limit_hits;
    }
}

/// Geradheitstest: ist das Segment optisch nicht von seiner Sehne zu unterscheiden?
///
/// `polygon <= chord` gilt zusätzlich als gerade, damit ein auf einen Punkt
/// zusammengefallenes Segment (beide Längen 0) sofort terminiert.
pub fn is_straight(segment: &CubicSegment, tolerance: f32) -> bool {
    let polygon = segment.polygon_length();
    let chord = segment.chord_length();
    polygon < (1.0 + tolerance) * chord || polygon <= chord
}

/// Rastert ein kubisches Segment adaptiv auf `surface`.
pub fn flatten_cubic(
    surface: &mut impl DrawSurface,
    segment: CubicSegment,
    params: &FlattenParams,
) -> FlattenStats {
    let mut stats = FlattenStats::default();
    flatten_recursive(surface, segment, params, 0, &mut stats);

    if stats.depth_limit_hits > 0 {
        log::debug!(
            "Kurven-Rasterung: Tiefenlimit {} bei {} Teilstrecken erreicht ({:?})",
            params.max_depth,
            stats.depth_limit_hits,
            segment
        );
    }
    stats
}

fn flatten_recursive(
    surface: &mut impl DrawSurface,
    segment: CubicSegment,
    params: &FlattenParams,
    depth: u32,
    stats: &mut FlattenStats,
) {
    stats.deepest = stats.deepest.max(depth);

    let straight = is_straight(&segment, params.tolerance);
    if straight || depth >= params.max_depth {
        if !straight {
            stats.depth_limit_hits += 1;
        }
        stats.lines += 1;
        stats.points += draw_line(surface, segment.a, segment.d, params.line_radius);
        return;
    }

    let (left, right) = segment.split_half();
    flatten_recursive(surface, left, params, depth + 1, stats);
    flatten_recursive(surface, right, params, depth + 1, stats);
}
