//! Ambient snowfall
//!
//! A fixed-size field of flakes that fall, sway, get pushed away from the
//! pointer and wrap around the viewport edges instead of being destroyed.

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Point, Viewport};

/// Default number of flakes kept alive.
pub const DEFAULT_FLAKES: usize = 150;
/// Pointer repulsion radius in virtual pixels.
pub const FORCE_RADIUS: f64 = 150.0;
/// Maximum displacement per frame caused by the pointer.
pub const FORCE_STRENGTH: f64 = 2.0;
/// Vertical position flakes reappear at after leaving through the bottom.
pub const RESPAWN_Y: f64 = -10.0;

const SWAY_FREQUENCY: f64 = 0.01;
const SWAY_AMPLITUDE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snowflake {
    pub x: f64,
    pub y: f64,
    /// In `[1, 4)`.
    pub radius: f64,
    /// Fall speed per frame, in `[0.5, 1.5)`.
    pub speed: f64,
    /// In `[0.3, 0.8)`.
    pub opacity: f64,
}

impl Snowflake {
    fn random(viewport: Viewport, rng: &mut Rng) -> Self {
        Self {
            x: rng.f64() * viewport.width,
            y: rng.f64() * viewport.height,
            radius: rng.f64() * 3.0 + 1.0,
            speed: rng.f64() + 0.5,
            opacity: rng.f64() * 0.5 + 0.3,
        }
    }

    /// Advance one frame.
    fn step(&mut self, viewport: Viewport, pointer: Point, force_radius: f64, rng: &mut Rng) {
        self.y += self.speed;
        self.x += (self.y * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE;

        let dx = self.x - pointer.x;
        let dy = self.y - pointer.y;
        let distance = dx.hypot(dy);
        if distance < force_radius {
            let force = (force_radius - distance) / force_radius;
            let angle = dy.atan2(dx);
            self.x += angle.cos() * force * FORCE_STRENGTH;
            self.y += angle.sin() * force * FORCE_STRENGTH;
        }

        if self.y > viewport.height {
            self.y = RESPAWN_Y;
            self.x = rng.f64() * viewport.width;
        }
        if self.x > viewport.width {
            self.x = 0.0;
        }
        if self.x < 0.0 {
            self.x = viewport.width;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowField {
    capacity: usize,
    force_radius: f64,
    viewport: Viewport,
    flakes: Vec<Snowflake>,
}

impl SnowField {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            force_radius: FORCE_RADIUS,
            viewport: Viewport::default(),
            flakes: Vec::with_capacity(capacity),
        }
    }

    pub fn with_force_radius(mut self, force_radius: f64) -> Self {
        self.force_radius = force_radius.max(0.0);
        self
    }

    /// Seed the field for the given viewport.
    ///
    /// An empty viewport leaves the field unseeded; it is seeded by the first
    /// non-empty [`SnowField::resize`].
    pub fn mount(&mut self, viewport: Viewport, rng: &mut Rng) {
        self.viewport = viewport;
        self.flakes.clear();
        if viewport.is_empty() {
            return;
        }
        self.flakes
            .extend((0..self.capacity).map(|_| Snowflake::random(viewport, rng)));
    }

    /// Update the bounds. Existing flakes keep their positions and are wrapped
    /// into the new bounds as they move.
    pub fn resize(&mut self, viewport: Viewport, rng: &mut Rng) {
        if !self.is_mounted() {
            self.mount(viewport, rng);
        } else {
            self.viewport = viewport;
        }
    }

    pub fn unmount(&mut self) {
        self.flakes.clear();
        self.viewport = Viewport::default();
    }

    pub fn is_mounted(&self) -> bool {
        !self.flakes.is_empty()
    }

    pub fn advance(&mut self, pointer: Point, rng: &mut Rng) {
        if self.viewport.is_empty() {
            return;
        }
        let viewport = self.viewport;
        let force_radius = self.force_radius;
        for flake in &mut self.flakes {
            flake.step(viewport, pointer, force_radius, rng);
        }
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[cfg(test)]
    pub(crate) fn flakes_mut(&mut self) -> &mut Vec<Snowflake> {
        &mut self.flakes
    }
}

impl Default for SnowField {
    fn default() -> Self {
        Self::new(DEFAULT_FLAKES)
    }
}
