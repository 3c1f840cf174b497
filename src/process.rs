#![forbid(unsafe_code)]

//! External process invocation
//!
//! Commands are run to completion with stdout and stderr captured into one
//! buffer. The buffer is only surfaced when the command fails.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

/// A fully described external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Invocation {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Runs the command from `dir` instead of the inherited working directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Why an external command did not succeed
#[derive(Debug, Error)]
pub enum Failure {
    #[error("could not be started: {0}")]
    Launch(#[source] io::Error),

    #[error("{0}")]
    Exit(ExitStatus),
}

/// A failed external command together with everything it printed
#[derive(Debug, Error)]
#[error("`{command}` {cause}{}", render_output(.output))]
pub struct ProcessError {
    pub command: String,
    #[source]
    pub cause: Failure,
    /// Combined stdout and stderr, trailing newlines removed
    pub output: String,
}

impl ProcessError {
    pub fn new(invocation: &Invocation, cause: Failure, output: &str) -> Self {
        ProcessError {
            command: invocation.to_string(),
            cause,
            output: output.trim_end_matches(['\n', '\r']).to_string(),
        }
    }
}

fn render_output(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(": {}", output)
    }
}

/// Executes external commands
///
/// The system implementation spawns real processes; tests substitute a
/// recorder so handlers can be exercised without git or a compiler.
pub trait Runner {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError>;
}

/// Runs commands with [`std::process::Command`], blocking until they exit
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).stdin(Stdio::null());
        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }

        debug!(command = %invocation, dir = ?invocation.current_dir, "running");

        let output = command
            .output()
            .map_err(|e| ProcessError::new(invocation, Failure::Launch(e), ""))?;

        // Interleaving between the two streams is not preserved
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(command = %invocation, status = %output.status, "finished");

        if output.status.success() {
            Ok(())
        } else {
            Err(ProcessError::new(
                invocation,
                Failure::Exit(output.status),
                &combined,
            ))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every invocation and fails the call at `fail_at` (0-based)
    #[derive(Default)]
    pub struct RecordingRunner {
        calls: RefCell<Vec<Invocation>>,
        fail_at: Option<usize>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_at(index: usize) -> Self {
            RecordingRunner {
                calls: RefCell::new(Vec::new()),
                fail_at: Some(index),
            }
        }

        pub fn calls(&self) -> Vec<Invocation> {
            self.calls.borrow().clone()
        }

        /// Each recorded call rendered as a command line
        pub fn command_lines(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.to_string()).collect()
        }
    }

    impl Runner for RecordingRunner {
        fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
            let index = self.calls.borrow().len();
            self.calls.borrow_mut().push(invocation.clone());
            if self.fail_at == Some(index) {
                return Err(ProcessError::new(
                    invocation,
                    Failure::Launch(io::Error::other("simulated failure")),
                    "simulated output\n",
                ));
            }
            Ok(())
        }
    }
}
