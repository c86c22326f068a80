use ratatui::prelude::*;
use ratatui::widgets::Widget;

use super::palette::blend;
use crate::domain::sparkle::{Sparkle, SparkleField};

/// Cursor sparkles, drawn last so they float over everything else.
#[derive(Debug, Clone, Copy)]
pub struct SparklesWidget<'a> {
    field: &'a SparkleField,
}

impl<'a> SparklesWidget<'a> {
    pub fn new(field: &'a SparkleField) -> Self {
        Self { field }
    }

    fn glyph(sparkle: &Sparkle) -> &'static str {
        if sparkle.size > 2.0 {
            "✦"
        } else if sparkle.size > 1.0 {
            "✧"
        } else {
            "·"
        }
    }
}

impl Widget for SparklesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        for sparkle in self.field.sparkles() {
            let Some((column, row)) = sparkle.position.to_cell() else {
                continue;
            };
            if column >= area.width || row >= area.height {
                continue;
            }
            let cell = &mut buf[(area.x + column, area.y + row)];
            // fade into whatever is underneath
            let fg = blend(cell.bg, sparkle.color, sparkle.life);
            cell.set_symbol(Self::glyph(sparkle)).set_fg(fg);
        }
    }
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{geometry::Point, sparkle::PALETTE};

    #[test]
    fn test_empty_field_draws_nothing() {
        let area = Rect::new(0, 0, 8, 4);
        let mut buffer = Buffer::empty(area);

        SparklesWidget::new(&SparkleField::new()).render(area, &mut buffer);

        assert_eq!(buffer, Buffer::empty(area));
    }

    #[test]
    fn test_fresh_sparkles_are_drawn_near_pointer() {
        let area = Rect::new(0, 0, 20, 10);
        let mut field = SparkleField::new();
        field.pointer_moved(Point::from_cell(5, 5));
        field.advance(&mut Rng::with_seed(9));
        let mut buffer = Buffer::empty(area);

        SparklesWidget::new(&field).render(area, &mut buffer);

        let drawn: Vec<(u16, u16)> = area
            .positions()
            .filter(|p| buffer[(p.x, p.y)].symbol() != " ")
            .map(|p| (p.x, p.y))
            .collect();
        assert!(!drawn.is_empty());
        assert!(drawn
            .iter()
            .all(|(x, y)| x.abs_diff(5) <= 1 && y.abs_diff(5) <= 1));
        for (x, y) in drawn {
            let fg = buffer[(x, y)].fg;
            assert!(PALETTE.iter().any(|c| blend(Color::Reset, *c, 0.98) == fg));
        }
    }
}
