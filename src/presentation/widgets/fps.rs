use ratatui::prelude::*;
use ratatui::widgets::{Block, Widget};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FpsWidget {
    fps: Option<f64>,
}

impl FpsWidget {
    pub fn new(fps: Option<f64>) -> Self {
        Self { fps }
    }
}

impl Widget for FpsWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let fps_text = match self.fps {
            Some(fps) => format!("{fps:.2} frames per sec"),
            None => "".to_owned(),
        };

        // Render as a dimmed, right-aligned title
        let block = Block::default().title_top(Line::from(fps_text.dim()).right_aligned());
        block.render(area, buf);
    }
}
