use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use super::palette::{blend, GOLD, SLATE_400, SLATE_500, SLATE_800, SLATE_900};
use crate::domain::layout::PageLayout;

pub const TITLE: &str = "Магія Різдва";
pub const YEAR: &str = "2026";
pub const TAGLINE: &str = "Створено за допомогою Gemini AI. Доторкніться до дива.";
pub const FOOTER: &str = "© 2026 Генератор Різдвяних Привітань";

/// Static page shell: header, tagline and footer. Draws text only, leaving
/// the backdrop underneath untouched.
#[derive(Debug, Clone, Copy)]
pub struct PageWidget {
    layout: PageLayout,
}

impl PageWidget {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }
}

impl Widget for PageWidget {
    fn render(self, _area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let PageLayout {
            header,
            tagline,
            footer,
            ..
        } = self.layout;

        let rule = Style::default().fg(blend(SLATE_900, GOLD, 0.5));
        let year: String = YEAR
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(TITLE, Style::default().fg(GOLD).bold())),
            Line::from(vec![
                Span::styled("──── ", rule),
                Span::styled(year, Style::default().fg(blend(SLATE_900, GOLD, 0.8))),
                Span::styled(" ────", rule),
            ]),
        ])
        .centered()
        .render(header, buf);

        Paragraph::new(Line::from(Span::styled(
            TAGLINE,
            Style::default().fg(blend(SLATE_900, SLATE_400, 0.6)),
        )))
        .centered()
        .render(tagline, buf);

        let divider = "─".repeat(usize::from(footer.width));
        Paragraph::new(vec![
            Line::from(Span::styled(divider, Style::default().fg(SLATE_800))),
            Line::from(Span::styled(FOOTER, Style::default().fg(SLATE_500))),
        ])
        .centered()
        .render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_text_is_drawn() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buffer = Buffer::empty(area);

        PageWidget::new(PageLayout::new(area)).render(area, &mut buffer);

        let rows: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect();
        assert!(rows[1].contains(TITLE));
        assert!(rows[2].contains("2 0 2 6"));
        assert!(rows[27].contains("Доторкніться до дива."));
        assert!(rows[29].contains(FOOTER));
    }

    #[test]
    fn test_shell_keeps_backdrop() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buffer = Buffer::empty(area);
        buffer.set_style(area, Style::default().bg(SLATE_900));

        PageWidget::new(PageLayout::new(area)).render(area, &mut buffer);

        assert!(buffer.content().iter().all(|cell| cell.bg == SLATE_900));
    }
}
