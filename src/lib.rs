#![forbid(unsafe_code)]

//! Gotrix: scaffolding and plugin builds for gotrix applications
//!
//! The tool bootstraps an application from the template repository, stubs
//! out components, and compiles a tree of component sources into loadable
//! plugins by driving `git` and the Go toolchain.

pub mod cli;
pub mod config;
pub mod error;
pub mod file_walker;
pub mod logging;
pub mod output;
pub mod paths;
pub mod process;
pub mod toolchain;
