//! CLI/TUI interface (feature-gated)
//!
//! This module is only available with the `tui` feature enabled.

pub mod prompts;

pub use prompts::{run, CreateArgs};
