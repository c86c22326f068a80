//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Components composing the page from `AppState`
//! - Reusable widgets for each visual layer
//! - Configuration (keybindings)

pub mod components;
pub mod config;
pub mod widgets;
