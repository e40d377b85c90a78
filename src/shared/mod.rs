//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `render` und der Host lesen.

pub mod options;

pub use options::EditorOptions;
pub use options::{MAX_FLATTEN_DEPTH, PICK_RADIUS, STRAIGHTNESS_TOLERANCE};
