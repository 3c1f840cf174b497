//! Terminal output: status lines, errors and the help screen

pub mod human;
pub mod usage;

pub use human::{Printer, Span, Style};
pub use usage::{UsageEntry, wrap_text};
