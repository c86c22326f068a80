//! The greeting card
//!
//! The flip is drawn by narrowing the card horizontally as it turns, and the
//! tilt by a drop shadow that slides away from the pointer. Neither moves the
//! card itself, so clicks land on the same cells the layout reports.

use std::f64::consts::PI;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::palette::{blend, GOLD, PAPER, RED, SLATE_100, SLATE_400, SLATE_600, SLATE_900, WHITE};
use crate::{
    core::state::CardState,
    domain::layout::{BackFaceLayout, CLOSE_LABEL},
};

pub const FRONT_TITLE: &str = "Різдво 2026";
pub const FRONT_HINT: &str = "НАТИСНІТЬ ДЛЯ МАГІЇ";
pub const LOADING_TEXT: &str = "Зірки шепочуть...";

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
/// Animation frames each spinner glyph is shown for
const SPINNER_HOLD: u64 = 6;

const STAR: [&str; 3] = ["╲ │ ╱", "─ ✶ ─", "╱ │ ╲"];

pub struct CardWidget<'a> {
    card: &'a CardState,
    frame: u64,
}

impl<'a> CardWidget<'a> {
    /// `frame` is the running frame counter, used for the spinner.
    pub fn new(card: &'a CardState, frame: u64) -> Self {
        Self { card, frame }
    }

    fn spinner(&self) -> &'static str {
        SPINNER[((self.frame / SPINNER_HOLD) % SPINNER.len() as u64) as usize]
    }

    /// Horizontal extent of the card while it turns.
    pub fn visible_width(width: u16, flip: f64) -> u16 {
        if width == 0 {
            return 0;
        }
        let scale = (PI * flip.clamp(0.0, 1.0)).cos().abs();
        ((f64::from(width) * scale).round() as u16).clamp(1, width)
    }

    fn render_shadow(&self, area: Rect, buf: &mut Buffer) {
        let (dx, dy) = self
            .card
            .effective_tilt()
            .cell_offset(self.card.max_tilt);
        let x = i32::from(area.x) + 1 - i32::from(dx);
        let y = i32::from(area.y) + 1 - i32::from(dy);
        let bounds = buf.area;
        for row in y..y + i32::from(area.height) {
            for column in x..x + i32::from(area.width) {
                let (Ok(column), Ok(row)) = (u16::try_from(column), u16::try_from(row)) else {
                    continue;
                };
                if !bounds.contains(Position::new(column, row)) {
                    continue;
                }
                let cell = &mut buf[(column, row)];
                let bg = blend(cell.bg, Color::Rgb(0, 0, 0), 0.5);
                cell.set_bg(bg);
            }
        }
    }

    fn render_front(&self, area: Rect, buf: &mut Buffer, with_content: bool) {
        // diagonal red to slate gradient with a faint dot grid
        for row in 0..area.height {
            for column in 0..area.width {
                let t = (f64::from(column) / f64::from(area.width.max(1))
                    + f64::from(row) / f64::from(area.height.max(1)))
                    / 2.0;
                let bg = blend(RED, SLATE_900, t);
                let symbol = if column % 4 == 2 && row % 2 == 1 { "·" } else { " " };
                buf[(area.x + column, area.y + row)]
                    .set_symbol(symbol)
                    .set_fg(blend(bg, WHITE, 0.2))
                    .set_bg(bg);
            }
        }
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(blend(SLATE_900, GOLD, 0.6)))
            .render(area, buf);
        if !with_content {
            return;
        }

        let inner = area.inner(Margin::new(2, 1));
        let mut lines: Vec<Line> = STAR
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(GOLD).bold())))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            FRONT_TITLE,
            Style::default().fg(WHITE).bold(),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            FRONT_HINT,
            Style::default().fg(GOLD),
        )));
        if self.card.is_loading() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                self.spinner(),
                Style::default().fg(GOLD).bold(),
            )));
        }
        let top = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
        let content = Rect {
            y: top,
            height: inner.bottom().saturating_sub(top),
            ..inner
        };
        Paragraph::new(lines).centered().render(content, buf);
    }

    fn render_back(&self, area: Rect, buf: &mut Buffer, with_content: bool) {
        for position in area.positions() {
            buf[position].set_symbol(" ").set_bg(PAPER).set_fg(SLATE_900);
        }
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(blend(PAPER, RED, 0.4)))
            .render(area, buf);
        if !with_content {
            return;
        }

        let layout = BackFaceLayout::new(area);
        if self.card.is_loading() {
            let lines = vec![
                Line::from(Span::styled(self.spinner(), Style::default().fg(RED).bold())),
                Line::default(),
                Line::from(Span::styled(
                    LOADING_TEXT,
                    Style::default().fg(RED).italic(),
                )),
            ];
            let inner = area.inner(Margin::new(2, 1));
            let top = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
            Paragraph::new(lines).centered().render(
                Rect {
                    y: top,
                    height: inner.bottom().saturating_sub(top),
                    ..inner
                },
                buf,
            );
            return;
        }

        Paragraph::new(Line::from(Span::styled("✦", Style::default().fg(RED))))
            .centered()
            .render(layout.ornament, buf);

        let greeting = self.card.greeting.as_deref().unwrap_or_default();
        Paragraph::new(greeting)
            .style(Style::default().fg(SLATE_900).italic())
            .centered()
            .wrap(Wrap { trim: true })
            .render(layout.text, buf);

        if let Some(first) = layout.themes.first() {
            let divider = Rect {
                y: first.area.y.saturating_sub(1),
                height: 1,
                ..layout.text
            };
            Paragraph::new(Line::from(Span::styled(
                "───",
                Style::default().fg(blend(PAPER, RED, 0.3)),
            )))
            .centered()
            .render(divider, buf);
        }

        for button in &layout.themes {
            let style = if button.theme == self.card.theme {
                Style::default().fg(WHITE).bg(RED).bold()
            } else {
                Style::default().fg(SLATE_600).bg(SLATE_100)
            };
            buf.set_stringn(
                button.area.x,
                button.area.y,
                &button.label,
                usize::from(button.area.width),
                style,
            );
        }

        if !layout.close.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                CLOSE_LABEL,
                Style::default().fg(SLATE_400).underlined(),
            )))
            .centered()
            .render(layout.close, buf);
        }
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        self.render_shadow(area, buf);

        let visible = Self::visible_width(area.width, self.card.flip);
        let face = Rect {
            x: area.x + (area.width - visible) / 2,
            width: visible,
            ..area
        };
        // content is only legible once the card faces the viewer
        let settled = visible == area.width;
        if self.card.shows_back() {
            self.render_back(face, buf, settled);
        } else {
            self.render_front(face, buf, settled);
        }
    }
}
