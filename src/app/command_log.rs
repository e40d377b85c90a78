//! Ringpuffer der zuletzt ausgeführten Commands.
//!
//! Der Host hängt den letzten Eintrag an Fehlermeldungen an; Tests prüfen
//! darüber ganze Interaktionsfolgen.

use super::AppCommand;
use std::collections::VecDeque;

/// Hält höchstens `CAPACITY` Commands, der älteste fällt zuerst heraus.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    const CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Einträge vom ältesten zum jüngsten.
    pub fn entries(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }
}
