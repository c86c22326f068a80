//! Integration layer
//!
//! Wires the pure Elm core to the terminal and to side effects:
//! - `Runtime` queues messages and commands
//! - `Renderer` draws `AppState`
//! - `AppRunner` owns the event loop

pub mod app_runner;
pub mod renderer;
pub mod runtime;
