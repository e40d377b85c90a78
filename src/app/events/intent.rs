/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Zeigertaste gedrückt (Pixel-Koordinaten der Zeichenfläche)
    PointerPressed { pos: glam::Vec2 },
    /// Zeiger bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Primäre Zeigertaste losgelassen (unabhängig von der Position)
    PointerReleased,
    /// Zeichenfläche hat eine neue Größe in Pixeln
    ViewportResized { width: u32, height: u32 },
}
