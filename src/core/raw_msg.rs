use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

/// Raw external events before domain translation
/// These represent unprocessed input from terminal, timers and the runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    /// One animation frame (emitted by the runner on each render event)
    Frame,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    Mouse(MouseEvent),
    FocusGained,
    FocusLost,

    // FPS updates
    AppFpsUpdate(f64),

    // Error events
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick
                | RawMsg::Render
                | RawMsg::Frame
                | RawMsg::Mouse(_)
                | RawMsg::AppFpsUpdate(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Frame.is_frequent());
        assert!(RawMsg::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        })
        .is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
    }
}
