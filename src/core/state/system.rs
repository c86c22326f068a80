use ratatui::layout::Rect;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// Terminal area in cells
    pub screen: Rect,
    /// Frames advanced since start, drives spinners
    pub frame_count: u64,
    pub fps: Option<f64>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                self.screen = Rect::new(0, 0, width, height);
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            // Errors end up in the log file; the terminal belongs to the card
            SystemMsg::ShowError(error) => vec![Cmd::LogError { message: error }],

            // Performance tracking
            SystemMsg::UpdateFps(fps) => {
                self.fps = Some(fps);
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_suspend_resume() {
        let mut system = SystemState::default();

        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);

        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_system_state_resize_records_screen_and_generates_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(system.screen, Rect::new(0, 0, 80, 24));
        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_system_state_show_error_logs() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));

        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".to_string()
            }]
        );
    }

    #[test]
    fn test_system_state_fps() {
        let mut system = SystemState::default();
        assert_eq!(system.fps, None);

        system.update(SystemMsg::UpdateFps(59.5));
        assert_eq!(system.fps, Some(59.5));
    }
}
