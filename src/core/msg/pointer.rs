use serde::{Deserialize, Serialize};

/// Pointer (terminal mouse) messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerMsg {
    /// Pointer is over the given cell
    Moved { column: u16, row: u16 },
    /// Pointer left the window (focus lost)
    Left,
}
