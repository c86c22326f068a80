//! Reusable UI widgets
//!
//! Each visual layer of the page is its own widget. They only read state and
//! write into a `Buffer`, so they can be tested against `Buffer::empty`.

pub mod card;
pub mod fps;
pub mod page;
pub mod palette;
pub mod snowfall;
pub mod sparkles;
