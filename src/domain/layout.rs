//! Screen layout shared by rendering and mouse hit-testing.
//!
//! Both sides call the same pure functions so a click always lands on what
//! was drawn under it.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;

pub const HEADER_HEIGHT: u16 = 3;
pub const TAGLINE_HEIGHT: u16 = 1;
pub const FOOTER_HEIGHT: u16 = 2;
pub const CARD_MAX_WIDTH: u16 = 64;
pub const CARD_MAX_HEIGHT: u16 = 20;

pub const CLOSE_LABEL: &str = "Закрити";

/// Regions of the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageLayout {
    pub header: Rect,
    pub card: Rect,
    pub tagline: Rect,
    pub footer: Rect,
}

impl PageLayout {
    pub fn new(area: Rect) -> Self {
        let [header, main, tagline, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(TAGLINE_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        Self {
            header,
            card: card_area(main),
            tagline,
            footer,
        }
    }
}

/// Card rectangle centred in `main`, leaving a small margin around it.
fn card_area(main: Rect) -> Rect {
    let width = CARD_MAX_WIDTH.min(main.width.saturating_sub(4));
    let height = CARD_MAX_HEIGHT.min(main.height.saturating_sub(1));
    Rect {
        x: main.x + (main.width - width) / 2,
        y: main.y + (main.height - height) / 2,
        width,
        height,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeButton {
    pub theme: Theme,
    pub area: Rect,
    pub label: String,
}

/// Interactive regions on the back face of the card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackFaceLayout {
    /// Star ornament above the greeting.
    pub ornament: Rect,
    pub text: Rect,
    pub themes: Vec<ThemeButton>,
    pub close: Rect,
}

impl BackFaceLayout {
    /// Lay out the back face inside `card` (the full card rectangle, border included).
    pub fn new(card: Rect) -> Self {
        let inner = Rect {
            x: card.x.saturating_add(2),
            y: card.y.saturating_add(1),
            width: card.width.saturating_sub(4),
            height: card.height.saturating_sub(2),
        };
        if inner.height < 6 || inner.width < 8 {
            return Self {
                text: inner,
                ..Default::default()
            };
        }

        let ornament = Rect { height: 1, ..inner };
        let close_row = inner.bottom() - 1;
        let themes_row = close_row - 2;
        let text = Rect {
            y: inner.y + 2,
            height: themes_row.saturating_sub(inner.y + 3),
            ..inner
        };

        let close_width = (CLOSE_LABEL.width() as u16 + 4).min(inner.width);
        let close = Rect {
            x: inner.x + (inner.width - close_width) / 2,
            y: close_row,
            width: close_width,
            height: 1,
        };

        Self {
            ornament,
            text,
            themes: theme_buttons(inner, themes_row),
            close,
        }
    }

    pub fn theme_at(&self, column: u16, row: u16) -> Option<Theme> {
        self.themes
            .iter()
            .find(|b| b.area.contains(Position::new(column, row)))
            .map(|b| b.theme)
    }

    pub fn is_close(&self, column: u16, row: u16) -> bool {
        self.close.contains(Position::new(column, row))
    }
}

/// Centre the theme buttons on `row`, falling back to icon-only buttons when
/// the full labels do not fit.
fn theme_buttons(inner: Rect, row: u16) -> Vec<ThemeButton> {
    let full: Vec<String> = Theme::all()
        .map(|t| format!(" {} {} ", t.icon(), t.label()))
        .collect();
    let compact: Vec<String> = Theme::all().map(|t| format!(" {} ", t.icon())).collect();

    let total = |labels: &[String]| -> u16 {
        let widths: u16 = labels.iter().map(|l| l.width() as u16).sum();
        widths + labels.len().saturating_sub(1) as u16
    };
    let labels = if total(&full) <= inner.width {
        full
    } else {
        compact
    };
    let row_width = total(&labels).min(inner.width);

    let mut x = inner.x + (inner.width - row_width) / 2;
    let mut buttons = Vec::with_capacity(labels.len());
    for (theme, label) in Theme::all().zip(labels) {
        let width = (label.width() as u16).min(inner.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        buttons.push(ThemeButton {
            theme,
            area: Rect::new(x, row, width, 1),
            label,
        });
        x = x.saturating_add(width + 1);
    }
    buttons
}

/// What a click at a given cell would hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    /// Anywhere on the front face.
    Front,
    Theme(Theme),
    Close,
}

/// Hit-test a click against the card. `open` selects which face is showing.
pub fn hit_test(screen: Rect, open: bool, column: u16, row: u16) -> Option<CardHit> {
    let card = PageLayout::new(screen).card;
    if !card.contains(Position::new(column, row)) {
        return None;
    }
    if !open {
        return Some(CardHit::Front);
    }
    let back = BackFaceLayout::new(card);
    if let Some(theme) = back.theme_at(column, row) {
        Some(CardHit::Theme(theme))
    } else if back.is_close(column, row) {
        Some(CardHit::Close)
    } else {
        None
    }
}
