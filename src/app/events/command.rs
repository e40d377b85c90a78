use crate::core::PointRef;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Ersten Punkt innerhalb von `max_distance` greifen (Drag-Beginn)
    BeginDrag { pos: glam::Vec2, max_distance: f32 },
    /// Gegriffenen Punkt auf Zeigerposition setzen
    MovePoint { target: PointRef, pos: glam::Vec2 },
    /// Drag beenden, Mutation bleibt erhalten
    EndDrag,
    /// Größe der Zeichenfläche setzen
    SetViewportSize { width: u32, height: u32 },
}
