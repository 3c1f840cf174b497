#![forbid(unsafe_code)]

//! Error types shared by every command
//!
//! All failures bubble up unchanged to the dispatcher, which renders them and
//! picks the exit status through [`Error::exit_code`].

use crate::process::ProcessError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a successful run or the help screen
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for any reported error
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for a missing required argument or an invalid flag
pub const EXIT_USAGE: i32 = 2;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An environment lookup needed to resolve a path failed
    #[error("unable to determine {what}")]
    Config {
        what: &'static str,
        #[source]
        source: Option<io::Error>,
    },

    /// A path component does not exist
    #[error("{}: no such file or directory", .path.display())]
    NotFound { path: PathBuf },

    /// A command was invoked without its required positional argument
    #[error("missing {argument} for {command}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),

    #[error("no components found in {}", .root.display())]
    NoComponentsFound { root: PathBuf },

    #[error("failed to read {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to clone {repo}: {source}")]
    Clone {
        repo: String,
        #[source]
        source: ProcessError,
    },

    #[error("failed to remove origins: {source}")]
    Detach {
        #[source]
        source: ProcessError,
    },

    #[error("failed to build \"{component}\": {source}")]
    Build {
        component: String,
        #[source]
        source: ProcessError,
    },

    /// Terminal writes and other I/O faults, passed through verbatim
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit status this error maps to
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingArgument { .. } => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
