//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::BeginDrag {
            pos,
            max_distance: state.options.pick_radius,
        }],
        // Ohne gegriffenen Punkt ist eine Zeigerbewegung kein Ereignis
        AppIntent::PointerMoved { pos } => match state.edit.dragged() {
            Some(target) => vec![AppCommand::MovePoint { target, pos }],
            None => Vec::new(),
        },
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::ViewportResized { width, height } => {
            vec![AppCommand::SetViewportSize { width, height }]
        }
    }
}
