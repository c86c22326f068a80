//! Cursor sparkles
//!
//! Sparkles are emitted in small batches while the pointer moves, drift along
//! their velocity, shrink and fade, and are dropped as soon as they are spent.

use fastrand::Rng;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Sparkles emitted on a frame that follows pointer movement.
pub const BATCH: usize = 3;
/// Life lost per frame.
pub const LIFE_DECAY: f64 = 0.02;
/// Size lost per frame.
pub const SIZE_DECAY: f64 = 0.05;
/// Largest size a new sparkle can have (exclusive).
pub const MAX_SIZE: f64 = 3.0;

/// Gold and white shades.
pub const PALETTE: [Color; 4] = [
    Color::Rgb(0xd4, 0xaf, 0x37),
    Color::Rgb(0xff, 0xff, 0xff),
    Color::Rgb(0xfc, 0xea, 0xbb),
    Color::Rgb(0xff, 0xeb, 0x3b),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkle {
    pub position: Point,
    pub size: f64,
    pub vx: f64,
    pub vy: f64,
    /// Starts at 1.0 and doubles as opacity.
    pub life: f64,
    pub color: Color,
}

impl Sparkle {
    fn random(at: Point, rng: &mut Rng) -> Self {
        Self {
            position: at,
            size: rng.f64() * MAX_SIZE,
            vx: rng.f64() * 2.0 - 1.0,
            vy: rng.f64() * 2.0 - 1.0,
            life: 1.0,
            color: PALETTE[rng.usize(..PALETTE.len())],
        }
    }

    fn is_alive(&self) -> bool {
        self.life > 0.0 && self.size > 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparkleField {
    pointer: Point,
    moved: bool,
    sparkles: Vec<Sparkle>,
}

impl SparkleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record pointer movement; the next [`SparkleField::advance`] emits a batch here.
    pub fn pointer_moved(&mut self, at: Point) {
        self.pointer = at;
        self.moved = true;
    }

    /// Advance one frame and return how many sparkles were emitted.
    pub fn advance(&mut self, rng: &mut Rng) -> usize {
        let emitted = if self.moved {
            self.moved = false;
            let at = self.pointer;
            self.sparkles
                .extend((0..BATCH).map(|_| Sparkle::random(at, rng)));
            BATCH
        } else {
            0
        };

        self.sparkles.retain_mut(|s| {
            s.position.x += s.vx;
            s.position.y += s.vy;
            s.life -= LIFE_DECAY;
            s.size -= SIZE_DECAY;
            s.is_alive()
        });

        emitted
    }

    pub fn clear(&mut self) {
        self.sparkles.clear();
        self.moved = false;
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }
}
