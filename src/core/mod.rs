//! Core-Domänentypen: Vektor-Hilfen, Spline-Knoten und Spline.

/// Core-Datenmodelle für den Spline-Editor
///
/// - Spline: geordnete Knotenliste, liefert die kubischen Segmente
/// - SplineNode: Anker mit optionalen Tangenten-Griffen
/// - PointRef: index-basierter Verweis auf einen editierbaren Punkt
pub mod node;
pub mod spline;
pub mod vector;

pub use node::SplineNode;
pub use spline::{CubicSegment, PointField, PointRef, Spline};
pub use vector::Vector2Ext;
