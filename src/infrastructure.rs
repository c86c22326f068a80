//! Infrastructure layer
//!
//! Everything that touches the outside world:
//! - Command line arguments
//! - Configuration files and environment
//! - The greeting text service
//! - Terminal I/O

pub mod cli;
pub mod config;
pub mod greeting;
pub mod tui;
