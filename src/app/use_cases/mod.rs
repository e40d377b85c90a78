//! Use-Cases: fachliche Operationen auf dem AppState.

pub mod drag;
pub mod pick;
pub mod viewport;
