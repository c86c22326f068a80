//! # Snowcard - a festive terminal greeting card
//!
//! Snow falls across the terminal and parts around the mouse pointer,
//! sparkles trail the cursor, and a card in the middle flips over to reveal
//! a short Christmas greeting written by Gemini.
//!
//! ## Architecture Overview
//!
//! The crate follows an Elm-like architecture:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (greeting requests, timers, terminal)
//! - **View** (`presentation`): Rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use snowcard::{
//!     core::{msg::{card::CardMsg, Msg}, state::AppState, update::update},
//!     infrastructure::config::Config,
//! };
//!
//! let state = AppState::new_with_seed(Config::default(), 7);
//! let (state, cmds) = update(Msg::Card(CardMsg::Activate), state);
//!
//! assert!(state.card.is_loading());
//! assert_eq!(cmds.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Messages, state, update and command execution
//! - [`domain`] - Particles, geometry, layout and themes
//! - [`infrastructure`] - Terminal, configuration and the greeting client
//! - [`integration`] - Runtime, renderer and the app runner
//! - [`presentation`] - Widgets and components

#![deny(warnings)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
