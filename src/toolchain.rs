#![forbid(unsafe_code)]

//! External tools used to scaffold applications and build components

use crate::process::Invocation;
use std::path::{Path, PathBuf};

/// Repository cloned by `create-app`, without scheme
pub const TEMPLATE_REPO: &str = "github.com/gotrix/skull";

/// Programs and file conventions for scaffolding and plugin builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Version-control client
    pub vcs: String,
    pub template_repo: String,
    /// Compiler that produces loadable plugins
    pub compiler: String,
    /// Name suffix identifying component sources
    pub source_suffix: String,
    /// Suffix given to built plugin artifacts
    pub artifact_suffix: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Toolchain {
            vcs: "git".to_string(),
            template_repo: TEMPLATE_REPO.to_string(),
            compiler: "go".to_string(),
            source_suffix: ".go".to_string(),
            artifact_suffix: ".so".to_string(),
        }
    }
}

impl Toolchain {
    pub fn template_url(&self) -> String {
        format!("https://{}", self.template_repo)
    }

    /// `git clone https://<template> <dest>`
    pub fn clone_invocation(&self, dest: &Path) -> Invocation {
        Invocation::new(&self.vcs)
            .arg("clone")
            .arg(self.template_url())
            .arg(dest)
    }

    /// `git remote remove origin`, run inside the checkout
    pub fn detach_invocation(&self, checkout: &Path) -> Invocation {
        Invocation::new(&self.vcs)
            .args(["remote", "remove", "origin"])
            .current_dir(checkout)
    }

    /// `go build -buildmode=plugin -o <artifact> <source>`
    pub fn build_invocation(&self, source: &Path, artifact: &Path) -> Invocation {
        Invocation::new(&self.compiler)
            .args(["build", "-buildmode=plugin", "-o"])
            .arg(artifact)
            .arg(source)
    }

    /// Sibling of `source` with the source suffix swapped for the artifact suffix
    pub fn artifact_path(&self, source: &Path) -> PathBuf {
        source.with_file_name(format!("{}{}", self.source_stem(source), self.artifact_suffix))
    }

    /// File name of `source` without the source suffix
    pub fn source_stem(&self, source: &Path) -> String {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match file_name.strip_suffix(self.source_suffix.as_str()) {
            Some(stem) => stem.to_string(),
            None => file_name,
        }
    }
}
