//! FPS counter component

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::fps::FpsWidget};

/// Shows the measured frame rate in the top row.
#[derive(Debug, Clone, Default)]
pub struct FpsComponent;

impl FpsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [top, _] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        frame.render_widget(FpsWidget::new(state.system.fps), top);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_fps_in_top_row() -> color_eyre::Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(40, 5))?;
        let mut state = AppState::default();
        state.system.fps = Some(30.0);

        terminal.draw(|f| FpsComponent::new().view(&state, f, f.area()))?;

        let top: String = (0..40)
            .map(|x| terminal.backend().buffer()[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.contains("30.00 frames per sec"));
        Ok(())
    }
}
