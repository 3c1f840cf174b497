#![forbid(unsafe_code)]

//! Resolution of user-supplied directory paths
//!
//! A path is taken from the `-path` flag when given, otherwise from the
//! command's default. A leading `~` is replaced by the home directory and the
//! result is made absolute and lexically cleaned. Nothing is created or read.

use crate::error::{Error, Result};
use path_absolutize::Absolutize;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Home-directory shorthand recognised at the start of a path
pub const HOME_MARKER: &str = "~";

/// Turns flag values into absolute paths
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: Option<PathBuf>,
    /// Fixed base for relative paths; `None` reads the process working directory
    base: Option<PathBuf>,
}

impl PathResolver {
    /// Resolver backed by the current user and process working directory
    pub fn from_env() -> Self {
        PathResolver {
            home: dirs::home_dir(),
            base: None,
        }
    }

    /// Resolver with an explicit home directory and base directory
    pub fn with_dirs(home: Option<PathBuf>, base: impl Into<PathBuf>) -> Self {
        PathResolver {
            home,
            base: Some(base.into()),
        }
    }

    /// Resolve `user_path`, or `default_path` when `user_path` is empty
    pub fn resolve(&self, user_path: &str, default_path: &str) -> Result<PathBuf> {
        let raw = if user_path.is_empty() {
            default_path
        } else {
            user_path
        };

        let expanded = self.expand_home(raw)?;
        let cleaned = if expanded.is_absolute() {
            expanded.absolutize()
        } else {
            let base = self.base_dir(&expanded)?;
            expanded.absolutize_from(base.as_path())
        };
        let resolved = cleaned
            .map_err(|e| not_found_or(e, &expanded))?
            .into_owned();

        debug!(input = raw, resolved = %resolved.display(), "resolved path");
        Ok(resolved)
    }

    fn expand_home(&self, raw: &str) -> Result<PathBuf> {
        let Some(rest) = raw.strip_prefix(HOME_MARKER) else {
            return Ok(PathBuf::from(raw));
        };
        let home = self.home.as_ref().ok_or(Error::Config {
            what: "home directory",
            source: None,
        })?;

        // Plain concatenation: only the marker itself is replaced
        let mut joined = OsString::from(home.as_os_str());
        joined.push(rest);
        Ok(PathBuf::from(joined))
    }

    fn base_dir(&self, path: &Path) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        std::env::current_dir().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Config {
                what: "current directory",
                source: Some(e),
            },
        })
    }
}

fn not_found_or(err: io::Error, path: &Path) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        Error::Io(err)
    }
}
