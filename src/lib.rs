//! Bezier Handle Editor Library.
//! Core-Funktionalität als Library exportiert für Tests, Benchmarks und Fuzzing.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    service_redraw, AppCommand, AppController, AppIntent, AppState, EditState, ViewState,
};
pub use core::{CubicSegment, PointField, PointRef, Spline, SplineNode, Vector2Ext};
pub use render::{
    draw_frame, draw_line, flatten_cubic, DrawSurface, FlattenParams, FlattenStats, PixelBuffer,
    RecordingSurface,
};
pub use shared::EditorOptions;
