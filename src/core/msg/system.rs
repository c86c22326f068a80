use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Errors reported by the runner
    ShowError(String),

    // Performance tracking
    UpdateFps(f64),
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::UpdateFps(_))
    }
}
