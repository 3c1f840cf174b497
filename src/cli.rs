//! CLI argument parsing and command dispatch

pub mod args;
pub mod build_components;
pub mod create_app;
pub mod create_component;
pub mod dispatch;

// Re-export types for convenient access
pub use args::{Cli, normalize_args, parse};
pub use dispatch::{Command, Context, Dispatcher, Registry};

/// Program name shown in usage text
pub const PROGRAM: &str = "gotrix";
