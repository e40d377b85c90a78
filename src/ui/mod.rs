//! UI-Layer mit egui: übersetzt Host-Eingaben in AppIntents.

pub mod input;

pub use input::{surface_size, InputState};
