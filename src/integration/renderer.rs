use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui,
    presentation::components::{fps::FpsComponent, greeting_page::GreetingPage},
};

#[derive(Debug, Default)]
pub struct Renderer {
    page: GreetingPage,
    fps: FpsComponent,
    show_fps: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_fps(mut self, show_fps: bool) -> Self {
        self.show_fps = show_fps;
        self
    }

    pub async fn render<T>(&mut self, tui: &Arc<Mutex<T>>, state: &AppState) -> Result<()>
    where
        T: tui::TuiLike + ?Sized,
    {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            let area = f.area();
            self.page.view(state, f, area);
            if self.show_fps {
                self.fps.view(state, f, area);
            }
        };
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    #[tokio::test]
    async fn renderer_renders_with_test_tui() -> Result<()> {
        let tui = Arc::new(Mutex::new(TestTui::new(80, 24)?));
        let mut state = AppState::default();
        state.system.fps = Some(12.0);

        Renderer::new().render(&tui, &state).await?;
        let guard = tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(!guard.screen_text().contains("frames per sec"));
        drop(guard);

        Renderer::new()
            .show_fps(true)
            .render(&tui, &state)
            .await?;
        assert!(tui.lock().await.screen_text().contains("12.00 frames per sec"));
        Ok(())
    }
}
