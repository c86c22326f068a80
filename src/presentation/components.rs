//! Stateless components
//!
//! Components read `AppState` and place widgets on a frame.

pub mod fps;
pub mod greeting_page;
