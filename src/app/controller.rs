//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::BeginDrag { pos, max_distance } => {
                handlers::editing::begin_drag(state, pos, max_distance)
            }
            AppCommand::MovePoint { target, pos } => {
                handlers::editing::move_point(state, target, pos)?
            }
            AppCommand::EndDrag => handlers::editing::end_drag(state),

            // === Viewport ===
            AppCommand::SetViewportSize { width, height } => {
                handlers::view::set_viewport_size(state, width, height)
            }
        }

        Ok(())
    }
}
