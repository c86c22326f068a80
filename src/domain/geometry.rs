use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Width of one terminal cell in virtual pixels.
pub const CELL_WIDTH: f64 = 8.0;
/// Height of one terminal cell in virtual pixels.
pub const CELL_HEIGHT: f64 = 16.0;

/// A position in virtual pixel space.
///
/// Particles are simulated in pixels rather than cells so that sub-cell motion
/// (sway, slow fall) accumulates smoothly between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Where the pointer rests before the first mouse event: far enough away
    /// that no repulsion is applied.
    pub const OFFSCREEN: Point = Point {
        x: -1000.0,
        y: -1000.0,
    };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of the given terminal cell.
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self {
            x: (f64::from(column) + 0.5) * CELL_WIDTH,
            y: (f64::from(row) + 0.5) * CELL_HEIGHT,
        }
    }

    /// Terminal cell containing this point, if it is not left of or above the origin.
    pub fn to_cell(self) -> Option<(u16, u16)> {
        if self.x < 0.0 || self.y < 0.0 {
            return None;
        }
        let column = (self.x / CELL_WIDTH).floor();
        let row = (self.y / CELL_HEIGHT).floor();
        if column > f64::from(u16::MAX) || row > f64::from(u16::MAX) {
            return None;
        }
        Some((column as u16, row as u16))
    }
}

/// Size of the drawing surface in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self {
            width: f64::from(columns) * CELL_WIDTH,
            height: f64::from(rows) * CELL_HEIGHT,
        }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::from_cells(area.width, area.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
