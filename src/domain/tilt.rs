use ratatui::layout::{Position, Rect};
use serde::{Deserialize, Serialize};

/// Default rotation range in degrees, applied on both axes.
pub const DEFAULT_MAX_TILT: f64 = 10.0;

/// Card rotation in degrees.
///
/// `x` rotates around the horizontal axis (pointer above centre tilts the top
/// towards the viewer), `y` around the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { x: 0.0, y: 0.0 };

    /// Tilt for a pointer over `column`/`row`, relative to the centre of `rect`.
    ///
    /// Returns [`Tilt::NEUTRAL`] when the pointer is outside `rect`.
    pub fn from_pointer(rect: Rect, column: u16, row: u16, max: f64) -> Self {
        if rect.is_empty() || !rect.contains(Position::new(column, row)) {
            return Self::NEUTRAL;
        }
        let x = f64::from(column - rect.x) + 0.5;
        let y = f64::from(row - rect.y) + 0.5;
        let center_x = f64::from(rect.width) / 2.0;
        let center_y = f64::from(rect.height) / 2.0;

        Self {
            x: (((y - center_y) / center_y) * -max).clamp(-max, max),
            y: (((x - center_x) / center_x) * max).clamp(-max, max),
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Cell shift used to suggest the rotation on a character grid: up to two
    /// columns for the vertical axis and one row for the horizontal one.
    pub fn cell_offset(self, max: f64) -> (i16, i16) {
        if max <= 0.0 {
            return (0, 0);
        }
        let dx = (self.y / max * 2.0).round() as i16;
        let dy = (-self.x / max).round() as i16;
        (dx, dy)
    }
}
