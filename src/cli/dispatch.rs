#![forbid(unsafe_code)]

//! Command registry and the top-level run loop
//!
//! The dispatcher parses flags, shows help or runs exactly one command, and
//! is the only place that renders errors and chooses the exit status.

use super::PROGRAM;
use super::args::{self, Cli};
use super::build_components::BuildComponents;
use super::create_app::CreateApp;
use super::create_component::CreateComponent;
use crate::config::Config;
use crate::error::{EXIT_SUCCESS, EXIT_USAGE, Error, Result};
use crate::logging;
use crate::output::usage::{render_command_usage, render_usage};
use crate::output::{Printer, UsageEntry};
use crate::paths::PathResolver;
use crate::process::Runner;
use crate::toolchain::Toolchain;
use std::ffi::OsString;
use termcolor::WriteColor;
use tracing::debug;

/// Everything a command needs while it runs
pub struct Context<'a> {
    pub config: &'a Config,
    pub paths: &'a PathResolver,
    pub runner: &'a dyn Runner,
    pub printer: Printer<'a>,
}

/// A named operation reachable from the command line
pub trait Command {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Run with the positional arguments that followed the command name
    fn run(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<()>;
}

/// Ordered set of commands; insertion order is display order
#[derive(Default)]
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three gotrix commands wired to `toolchain`
    pub fn builtin(toolchain: Toolchain) -> Self {
        let mut registry = Registry::new();
        registry
            .register(Box::new(CreateApp::new(toolchain.clone())))
            .register(Box::new(CreateComponent))
            .register(Box::new(BuildComponents::new(toolchain)));
        registry
    }

    pub fn register(&mut self, command: Box<dyn Command>) -> &mut Self {
        debug_assert!(
            self.get(command.name()).is_none(),
            "command {} registered twice",
            command.name()
        );
        self.commands.push(command);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| &**c)
    }

    pub fn find(&self, name: &str) -> Result<&dyn Command> {
        self.get(name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    pub fn usage_entries(&self) -> Vec<UsageEntry> {
        self.commands
            .iter()
            .map(|c| UsageEntry::new(c.name(), c.description()))
            .collect()
    }
}

/// Parses arguments and runs the selected command
pub struct Dispatcher<'r> {
    registry: Registry,
    paths: PathResolver,
    runner: &'r dyn Runner,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: Registry, paths: PathResolver, runner: &'r dyn Runner) -> Self {
        Dispatcher {
            registry,
            paths,
            runner,
        }
    }

    /// Run the tool for `argv` (program name first) and return the exit status
    pub fn run<I, T>(
        &self,
        argv: I,
        stdout: &mut dyn WriteColor,
        stderr: &mut dyn WriteColor,
    ) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let cli = match args::parse(argv) {
            Ok(cli) => cli,
            Err(err) => return self.report_parse_error(&err, stderr),
        };
        let config = Config::from(&cli);
        logging::init(&config);

        let name = match (&cli.command, config.help) {
            (Some(name), false) => name,
            _ => {
                let mut printer = Printer::new(stdout, false, config.color());
                let _ = self.show_usage(&mut printer);
                return EXIT_SUCCESS;
            }
        };

        match self.execute(name, &cli.args, &config, stdout) {
            Ok(()) => EXIT_SUCCESS,
            Err(Error::MissingArgument { command, argument }) => {
                let mut printer = Printer::new(stderr, false, config.color());
                let _ = render_command_usage(&mut printer, PROGRAM, command, argument);
                EXIT_USAGE
            }
            Err(err) => {
                let mut printer = Printer::new(stdout, config.quiet, config.color());
                let _ = printer.error(&err);
                err.exit_code()
            }
        }
    }

    fn execute(
        &self,
        name: &str,
        args: &[String],
        config: &Config,
        stdout: &mut dyn WriteColor,
    ) -> Result<()> {
        let command = self.registry.find(name)?;
        debug!(command = name, ?args, "dispatching");

        let mut ctx = Context {
            config,
            paths: &self.paths,
            runner: self.runner,
            printer: Printer::new(stdout, config.quiet, config.color()),
        };
        command.run(&mut ctx, args)?;
        ctx.printer.flush()?;
        Ok(())
    }

    fn show_usage(&self, printer: &mut Printer<'_>) -> std::io::Result<()> {
        render_usage(
            printer,
            PROGRAM,
            &self.registry.usage_entries(),
            &Cli::option_entries(),
        )
    }

    fn report_parse_error(&self, err: &clap::Error, stderr: &mut dyn WriteColor) -> i32 {
        let message = err.to_string();
        let first_line = message.lines().next().unwrap_or_default();
        let mut printer = Printer::new(stderr, false, false);
        let _ = printer.write_plain(&format!("{}\n", first_line));
        let _ = self.show_usage(&mut printer);
        EXIT_USAGE
    }
}
