//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{PointRef, Spline};
use crate::shared::EditorOptions;

/// Zustand der Zieh-Interaktion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// Kein Punkt gegriffen
    #[default]
    Idle,
    /// Der referenzierte Punkt folgt dem Zeiger bis zum Loslassen
    Dragging(PointRef),
}

impl EditState {
    /// Der aktuell gezogene Punkt, falls vorhanden.
    pub fn dragged(&self) -> Option<PointRef> {
        match self {
            Self::Idle => None,
            Self::Dragging(point_ref) => Some(*point_ref),
        }
    }

    /// Gibt `true` zurück, solange ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Größe der Zeichenfläche in Pixel [Breite, Höhe]
    pub viewport_size: [u32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0, 0],
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Der bearbeitete Spline
    pub spline: Spline,
    /// Zieh-Zustand (Idle / Dragging)
    pub edit: EditState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Toleranzen, Farben)
    pub options: EditorOptions,
    /// Signalisiert dem Host, im nächsten Frame neu zu zeichnen
    redraw_requested: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit dem Demo-Spline.
    ///
    /// Der erste Frame ist bereits angefordert.
    pub fn new() -> Self {
        Self::with_spline(Spline::demo())
    }

    /// Erstellt einen Zustand für einen beliebigen Spline.
    pub fn with_spline(spline: Spline) -> Self {
        Self {
            spline,
            edit: EditState::Idle,
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            redraw_requested: true,
        }
    }

    /// Fordert einen Redraw an; mehrere Anforderungen vor dem nächsten Frame
    /// werden zu einem zusammengefasst.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Gibt zurück, ob ein Redraw aussteht.
    pub fn is_redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Liest und quittiert die Redraw-Anforderung (einmal pro Frame aufrufen).
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
