//! ResetResultsHandler - Routes results view events back into the shell.

use crate::domain::results::ResultsEvent;
use crate::domain::shell::{AppShell, ShellPhase};

#[derive(Debug, Default, Clone, Copy)]
pub struct ResetResultsHandler;

impl ResetResultsHandler {
    pub fn new() -> Self {
        Self
    }

    /// Applies a results view event and returns the resulting phase.
    pub fn handle(&self, shell: &mut AppShell, event: ResultsEvent) -> ShellPhase {
        match event {
            ResultsEvent::Reset => shell.reset(),
        }
        shell.phase()
    }
}
