use serde::{Deserialize, Serialize};

use crate::domain::theme::Theme;

/// Messages specific to CardState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardMsg {
    /// Click on the front face (or the open key)
    Activate,
    SelectTheme(Theme),
    NextTheme,
    Close,

    /// Generated (or fallback) text for a request, delivered by the executor
    GreetingReady { request_id: u64, text: String },
    /// Deferred clear after closing, delivered by the executor
    ClearGreeting { close_id: u64 },
}
