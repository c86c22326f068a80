use serde::{Deserialize, Serialize};

pub mod card;
pub mod pointer;
pub mod system;

use card::CardMsg;
use pointer::PointerMsg;
use system::SystemMsg;

/// Domain messages representing application intent.
/// These are processed by the update function and never carry terminal types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Pointer motion, fanned out to the animators and the card tilt
    Pointer(PointerMsg),

    // Card interaction (delegated to CardState)
    Card(CardMsg),

    /// Advance every animation by one frame
    Frame,
}

impl Msg {
    /// Helper to exclude frequent messages from debug logging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Frame | Msg::Pointer(_) => true,
            Msg::System(system) => system.is_frequent(),
            Msg::Card(_) => false,
        }
    }
}
