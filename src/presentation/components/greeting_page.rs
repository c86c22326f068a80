//! The whole page, layer by layer
//!
//! Back to front: backdrop and snow, shell text, the card, then sparkles.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::layout::PageLayout,
    presentation::widgets::{
        card::CardWidget, page::PageWidget, snowfall::SnowfallWidget, sparkles::SparklesWidget,
    },
};

#[derive(Debug, Clone, Default)]
pub struct GreetingPage;

impl GreetingPage {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = PageLayout::new(area);

        frame.render_widget(SnowfallWidget::new(&state.snow), area);
        frame.render_widget(PageWidget::new(layout), area);
        frame.render_widget(
            CardWidget::new(&state.card, state.system.frame_count),
            layout.card,
        );
        frame.render_widget(SparklesWidget::new(&state.sparkles), area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        core::{
            msg::{pointer::PointerMsg, system::SystemMsg, Msg},
            update::update,
        },
        infrastructure::config::Config,
        presentation::widgets::{card::FRONT_TITLE, page::TITLE},
    };

    fn screen(state: &AppState, width: u16, height: u16) -> color_eyre::Result<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        terminal.draw(|f| GreetingPage::new().view(state, f, f.area()))?;
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        Ok(out)
    }

    #[test]
    fn test_page_layers() -> color_eyre::Result<()> {
        let state = AppState::new_with_seed(Config::default(), 5);
        let (state, _) = update(Msg::System(SystemMsg::Resize(100, 32)), state);
        let (state, _) = update(Msg::Pointer(PointerMsg::Moved { column: 30, row: 10 }), state);
        let (state, _) = update(Msg::Frame, state);

        let text = screen(&state, 100, 32)?;

        assert!(text.contains(TITLE));
        assert!(text.contains(FRONT_TITLE));
        assert!(!state.sparkles.is_empty());
        Ok(())
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() -> color_eyre::Result<()> {
        let state = AppState::new_with_seed(Config::default(), 5);
        let (state, _) = update(Msg::System(SystemMsg::Resize(3, 2)), state);
        let (state, _) = update(Msg::Frame, state);

        screen(&state, 3, 2)?;
        Ok(())
    }
}
