use serde::{Deserialize, Serialize};

use crate::domain::theme::Theme;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network communication, timers, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Ask the greeting source for text; the answer comes back as
    /// `CardMsg::GreetingReady` once both the call and the reveal delay are done.
    GenerateGreeting { request_id: u64, theme: Theme },
    /// Deliver `CardMsg::ClearGreeting` after the close transition.
    ScheduleClear { close_id: u64 },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
}

impl Cmd {
    /// Short name used in execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::GenerateGreeting { .. } => "GenerateGreeting",
            Cmd::ScheduleClear { .. } => "ScheduleClear",
            Cmd::Tui(..) => "Tui",
            Cmd::LogError { .. } => "LogError",
        }
    }
}
