//! Spline-Container: geordnete Knotenliste, Segmente und Punkt-Adressierung.

use super::node::SplineNode;
use anyhow::{anyhow, bail};
use glam::Vec2;

/// Welcher Punkt eines Knotens gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointField {
    /// Ankerposition
    Position,
    /// Eingehender Griff
    ControlIn,
    /// Ausgehender Griff
    ControlOut,
}

/// Index-basierter Verweis auf einen gespeicherten Punkt im Spline.
///
/// Wird erst beim Schreiben aufgelöst, hält also keine Referenz in die
/// Knotenliste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointRef {
    /// Index des Knotens in `Spline::nodes`
    pub node: usize,
    /// Feld innerhalb des Knotens
    pub field: PointField,
}

impl PointRef {
    /// Erstellt einen Verweis auf `field` von Knoten `node`.
    pub fn new(node: usize, field: PointField) -> Self {
        Self { node, field }
    }
}

/// Kontrollpunkte eines kubischen Bézier-Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub d: Vec2,
}

impl CubicSegment {
    /// Erstellt ein Segment aus Start, zwei Kontrollpunkten und Ende.
    pub fn new(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Self {
        Self { a, b, c, d }
    }

    /// Länge des Kontrollpolygons `|ab| + |bc| + |cd|`.
    pub fn polygon_length(&self) -> f32 {
        self.a.distance(self.b) + self.b.distance(self.c) + self.c.distance(self.d)
    }

    /// Sehnenlänge `|ad|`.
    pub fn chord_length(&self) -> f32 {
        self.a.distance(self.d)
    }

    /// De-Casteljau-Teilung bei t = 0.5.
    ///
    /// Beide Hälften beschreiben zusammen exakt dieselbe Kurve; der gemeinsame
    /// Punkt ist B(0.5).
    pub fn split_half(&self) -> (Self, Self) {
        let q0 = self.a.lerp(self.b, 0.5);
        let q1 = self.b.lerp(self.c, 0.5);
        let q2 = self.c.lerp(self.d, 0.5);

        let r0 = q0.lerp(q1, 0.5);
        let r1 = q1.lerp(q2, 0.5);

        let s0 = r0.lerp(r1, 0.5);

        (Self::new(self.a, q0, r0, s0), Self::new(s0, r1, q2, self.d))
    }
}

/// Stückweise kubischer Spline aus einer geordneten Knotenliste.
///
/// Die Reihenfolge bestimmt Segment-Nachbarschaft und Zeichenreihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spline {
    pub nodes: Vec<SplineNode>,
}

impl Spline {
    /// Erstellt einen Spline aus einer Knotenliste.
    pub fn new(nodes: Vec<SplineNode>) -> Self {
        Self { nodes }
    }

    /// Start-Spline des Editors: drei Knoten, der erste mit explizitem
    /// Ausgangsgriff, die anderen beiden mit gespiegeltem Griff.
    pub fn demo() -> Self {
        Self::new(vec![
            SplineNode::new(Vec2::new(10.0, 20.0)).with_control_out(Vec2::new(200.0, 300.0)),
            SplineNode::new(Vec2::new(600.0, 400.0)).with_control_in(Vec2::new(500.0, 100.0)),
            SplineNode::new(Vec2::new(800.0, 500.0)).with_control_in(Vec2::new(800.0, 490.0)),
        ])
    }

    /// Anzahl der Segmente (Knotenzahl - 1, mindestens 0).
    pub fn segment_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Kubisches Segment zwischen Knoten `index` und `index + 1`.
    ///
    /// Fehlende Griffe fallen auf die Ankerposition zurück, das Segment
    /// degeneriert dann an dieser Seite zur Geraden.
    pub fn segment(&self, index: usize) -> Option<CubicSegment> {
        let from = self.nodes.get(index)?;
        let to = self.nodes.get(index + 1)?;
        Some(CubicSegment {
            a: from.position,
            b: from.push().unwrap_or(from.position),
            c: to.pull().unwrap_or(to.position),
            d: to.position,
        })
    }

    /// Alle Segmente in Zeichenreihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        (0..self.segment_count()).filter_map(move |i| self.segment(i))
    }

    /// Liest den adressierten Punkt (None bei ungültigem Index oder fehlendem Griff).
    pub fn point(&self, point_ref: PointRef) -> Option<Vec2> {
        let node = self.nodes.get(point_ref.node)?;
        match point_ref.field {
            PointField::Position => Some(node.position),
            PointField::ControlIn => node.control_in,
            PointField::ControlOut => node.control_out,
        }
    }

    /// Überschreibt den adressierten Punkt in-place.
    ///
    /// Ein fehlender Griff wird nicht angelegt: der Verweis gilt dann als veraltet.
    pub fn set_point(&mut self, point_ref: PointRef, pos: Vec2) -> anyhow::Result<()> {
        let node_count = self.nodes.len();
        let node = self.nodes.get_mut(point_ref.node).ok_or_else(|| {
            anyhow!(
                "Knoten {} existiert nicht (Spline hat {} Knoten)",
                point_ref.node,
                node_count
            )
        })?;
        let slot = match point_ref.field {
            PointField::Position => {
                node.position = pos;
                return Ok(());
            }
            PointField::ControlIn => &mut node.control_in,
            PointField::ControlOut => &mut node.control_out,
        };
        match slot {
            Some(p) => {
                *p = pos;
                Ok(())
            }
            None => bail!(
                "Knoten {} hat keinen Griff {:?}",
                point_ref.node,
                point_ref.field
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_demo_segments_use_push_and_pull() {
        let spline = Spline::demo();
        assert_eq!(spline.segment_count(), 2);

        let first = spline.segment(0).expect("Segment 0");
        assert_eq!(first.a, Vec2::new(10.0, 20.0));
        assert_eq!(first.b, Vec2::new(200.0, 300.0));
        assert_eq!(first.c, Vec2::new(500.0, 100.0));
        assert_eq!(first.d, Vec2::new(600.0, 400.0));

        // Knoten 1 hat kein control_out → gespiegelter Griff (700, 700)
        let second = spline.segment(1).expect("Segment 1");
        assert_relative_eq!(second.b.x, 700.0);
        assert_relative_eq!(second.b.y, 700.0);
        assert_eq!(second.c, Vec2::new(800.0, 490.0));
    }

    #[test]
    fn test_split_half_meets_at_curve_midpoint() {
        // B(0.5) = (P0 + 3·P1 + 3·P2 + P3) / 8
        let seg = CubicSegment::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        );
        let (left, right) = seg.split_half();
        assert_eq!(left.a, seg.a);
        assert_eq!(right.d, seg.d);
        assert_eq!(left.d, right.a);
        assert_relative_eq!(left.d.x, 5.0);
        assert_relative_eq!(left.d.y, 5.0);
        // Tangenten-Stetigkeit: r0, s0, r1 liegen auf einer Geraden
        let t_left = (left.d - left.c).normalize();
        let t_right = (right.b - right.a).normalize();
        assert!(t_left.abs_diff_eq(t_right, 1e-5));
    }

    #[test]
    fn test_polygon_never_shorter_than_chord() {
        let seg = Spline::demo().segment(0).expect("Segment 0");
        assert!(seg.polygon_length() >= seg.chord_length());
        let (left, right) = seg.split_half();
        let halves = left.polygon_length() + right.polygon_length();
        assert!(halves <= seg.polygon_length() + 1e-3);
    }

    #[test]
    fn test_segment_out_of_range_is_none() {
        let spline = Spline::demo();
        assert!(spline.segment(2).is_none());
        assert_eq!(Spline::default().segments().count(), 0);
        assert_eq!(Spline::new(vec![SplineNode::new(Vec2::ZERO)]).segment_count(), 0);
    }

    #[test]
    fn test_missing_handles_fall_back_to_position() {
        let spline = Spline::new(vec![
            SplineNode::new(Vec2::new(0.0, 0.0)),
            SplineNode::new(Vec2::new(10.0, 0.0)),
        ]);
        let seg = spline.segment(0).expect("Segment 0");
        assert_eq!(seg.b, seg.a);
        assert_eq!(seg.c, seg.d);
    }

    #[test]
    fn test_set_point_mutates_only_addressed_field() {
        let mut spline = Spline::demo();
        let target = PointRef::new(1, PointField::Position);
        spline
            .set_point(target, Vec2::new(700.0, 450.0))
            .expect("Position existiert");

        assert_eq!(spline.point(target), Some(Vec2::new(700.0, 450.0)));
        assert_eq!(spline.nodes[1].control_in, Some(Vec2::new(500.0, 100.0)));
        assert_eq!(spline.nodes[1].control_out, None);
        // Segment 0 endet jetzt am verschobenen Punkt
        assert_eq!(spline.segment(0).map(|s| s.d), Some(Vec2::new(700.0, 450.0)));
    }

    #[test]
    fn test_set_point_on_handle_changes_mirrored_push() {
        let mut spline = Spline::demo();
        spline
            .set_point(PointRef::new(1, PointField::ControlIn), Vec2::new(600.0, 300.0))
            .expect("Griff existiert");
        let seg = spline.segment(1).expect("Segment 1");
        assert_relative_eq!(seg.b.x, 600.0);
        assert_relative_eq!(seg.b.y, 500.0);
    }

    #[test]
    fn test_set_point_rejects_stale_refs() {
        let mut spline = Spline::demo();
        assert!(spline
            .set_point(PointRef::new(9, PointField::Position), Vec2::ZERO)
            .is_err());
        assert!(spline
            .set_point(PointRef::new(1, PointField::ControlOut), Vec2::ZERO)
            .is_err());
        assert_eq!(spline, Spline::demo());
    }
}
