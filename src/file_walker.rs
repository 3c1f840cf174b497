#![forbid(unsafe_code)]

//! Recursive discovery of component source files

use crate::error::{Error, Result};
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Collect every file below `root` whose name ends with `suffix`
///
/// Directories are walked depth-first with siblings in file-name order.
/// No ignore files are consulted and hidden entries are included. Symlinks
/// are collected when they point at a file; linked directories are not
/// entered. A missing `root` yields an empty list; any other traversal fault
/// is returned.
pub fn list_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_not_found(&err) => continue,
            Err(err) => {
                return Err(Error::Walk {
                    root: root.to_path_buf(),
                    source: err,
                });
            }
        };

        if !entry.file_name().to_string_lossy().ends_with(suffix) {
            continue;
        }
        let is_file = if entry.path_is_symlink() {
            fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
        } else {
            entry.file_type().is_some_and(|t| t.is_file())
        };
        if is_file {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), suffix, count = files.len(), "listed files");
    Ok(files)
}

fn is_not_found(err: &ignore::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}
