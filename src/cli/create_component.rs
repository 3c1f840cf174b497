#![forbid(unsafe_code)]

//! `create-component`: announce a new component
//!
//! No files are generated yet; the command validates its argument and
//! reports what it would create.

use super::dispatch::{Command, Context};
use crate::error::{Error, Result};

pub const NAME: &str = "create-component";

pub struct CreateComponent;

impl Command for CreateComponent {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Create a new component."
    }

    fn run(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
        let name = args
            .first()
            .filter(|name| !name.is_empty())
            .ok_or(Error::MissingArgument {
                command: NAME,
                argument: "component name",
            })?;

        ctx.printer
            .info(format!("Creating new component \"{}\".", name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::output::Printer;
    use crate::paths::PathResolver;
    use crate::process::testing::RecordingRunner;
    use termcolor::Buffer;

    fn run_command(args: &[&str], runner: &RecordingRunner) -> (Result<()>, String) {
        let config = Config::default();
        let paths = PathResolver::with_dirs(None, "/work");
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut buffer = Buffer::no_color();
        let result = {
            let mut ctx = Context {
                config: &config,
                paths: &paths,
                runner,
                printer: Printer::new(&mut buffer, false, false),
            };
            CreateComponent.run(&mut ctx, &args)
        };
        (result, String::from_utf8(buffer.into_inner()).unwrap())
    }

    #[test]
    fn test_missing_name() {
        let runner = RecordingRunner::new();
        let (result, _) = run_command(&[], &runner);
        assert!(matches!(
            result,
            Err(Error::MissingArgument { command: "create-component", argument: "component name" })
        ));
    }

    #[test]
    fn test_announces_component_without_side_effects() {
        let runner = RecordingRunner::new();
        let (result, output) = run_command(&["billing"], &runner);
        assert!(result.is_ok());
        assert_eq!(output, "* Creating new component \"billing\".\n");
        assert!(runner.calls().is_empty());
    }
}
