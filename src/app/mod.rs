//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod redraw;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Spline, Drag, Viewport).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use redraw::service_redraw;
pub use state::{AppState, EditState, ViewState};
