//! Domain logic
//!
//! This module contains the pure, I/O-free parts of the card:
//! - Greeting themes
//! - Viewport geometry (cells and virtual pixels)
//! - Particle fields for snow and sparkles
//! - Card layout and tilt math

pub mod geometry;
pub mod layout;
pub mod snow;
pub mod sparkle;
pub mod theme;
pub mod tilt;
