use ratatui::prelude::*;
use ratatui::widgets::Widget;

use super::palette::{blend, PINE, SLATE_800, SLATE_900, WHITE};
use crate::domain::{
    geometry::Point,
    snow::{SnowField, Snowflake},
};

/// Night-sky backdrop with the snow field drawn over it.
#[derive(Debug, Clone, Copy)]
pub struct SnowfallWidget<'a> {
    field: &'a SnowField,
}

impl<'a> SnowfallWidget<'a> {
    pub fn new(field: &'a SnowField) -> Self {
        Self { field }
    }

    /// Background for `row` out of `height` rows: slate at the edges, lighter
    /// in the middle, with a faint pine glow at the top.
    pub fn backdrop(row: u16, height: u16) -> Color {
        if height <= 1 {
            return SLATE_900;
        }
        let t = f64::from(row) / f64::from(height - 1);
        let base = blend(SLATE_900, SLATE_800, 1.0 - (2.0 * t - 1.0).abs());
        blend(base, PINE, (1.0 - t) * 0.1)
    }

    fn glyph(flake: &Snowflake) -> &'static str {
        if flake.radius < 2.0 {
            "·"
        } else if flake.radius < 3.0 {
            "•"
        } else {
            "❄"
        }
    }
}

impl Widget for SnowfallWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        for row in 0..area.height {
            let bg = Self::backdrop(row, area.height);
            for column in 0..area.width {
                buf[(area.x + column, area.y + row)]
                    .set_symbol(" ")
                    .set_bg(bg);
            }
        }

        for flake in self.field.flakes() {
            let Some((column, row)) = Point::new(flake.x, flake.y).to_cell() else {
                continue;
            };
            if column >= area.width || row >= area.height {
                continue;
            }
            let bg = Self::backdrop(row, area.height);
            buf[(area.x + column, area.y + row)]
                .set_symbol(Self::glyph(flake))
                .set_fg(blend(bg, WHITE, flake.opacity));
        }
    }
}
