#![no_main]

use bezier_handle_editor::{flatten_cubic, CubicSegment, FlattenParams, RecordingSurface};
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

const COORD_LIMIT: f32 = 4096.0;
const MAX_DEPTH: u32 = 14;

fn coord(bytes: &[u8]) -> f32 {
    let raw = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    if raw.is_finite() {
        raw.clamp(-COORD_LIMIT, COORD_LIMIT)
    } else {
        0.0
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 34 {
        return;
    }
    let points: Vec<Vec2> = data[..32]
        .chunks_exact(8)
        .map(|c| Vec2::new(coord(&c[..4]), coord(&c[4..])))
        .collect();
    let segment = CubicSegment::new(points[0], points[1], points[2], points[3]);
    let params = FlattenParams {
        tolerance: f32::from(data[32]) / 255.0 * 0.01,
        max_depth: u32::from(data[33]) % (MAX_DEPTH + 1),
        line_radius: 0.0,
    };

    let mut surface = RecordingSurface::new(1024, 768);
    let stats = flatten_cubic(&mut surface, segment, &params);

    assert!(stats.lines >= 1);
    assert!(stats.lines <= 1usize << params.max_depth);
    assert!(stats.deepest <= params.max_depth);
    assert_eq!(stats.points, surface.squares.len());
});
