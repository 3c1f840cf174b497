#![forbid(unsafe_code)]

//! `create-app`: bootstrap an application from the template repository

use super::dispatch::{Command, Context};
use crate::error::{Error, Result};
use crate::toolchain::Toolchain;

pub const NAME: &str = "create-app";

pub struct CreateApp {
    toolchain: Toolchain,
}

impl CreateApp {
    pub fn new(toolchain: Toolchain) -> Self {
        CreateApp { toolchain }
    }
}

impl Command for CreateApp {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Create a new application."
    }

    /// Clone the template into `<dir>/<name>` and drop its `origin` remote
    ///
    /// `<dir>` is the `-path` value, or the working directory.
    fn run(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<()> {
        let name = args
            .first()
            .filter(|name| !name.is_empty())
            .ok_or(Error::MissingArgument {
                command: NAME,
                argument: "application name",
            })?;

        ctx.printer
            .info(format!("Creating new application \"{}\".", name))?;

        let parent = ctx.paths.resolve(&ctx.config.path, ".")?;
        let checkout = parent.join(name);
        let repo = &self.toolchain.template_repo;

        ctx.printer
            .info(format!("Cloning {} to {}", repo, checkout.display()))?;
        ctx.runner
            .run(&self.toolchain.clone_invocation(&checkout))
            .map_err(|source| Error::Clone {
                repo: repo.clone(),
                source,
            })?;
        ctx.printer
            .success(format!("Cloned {} to {}", repo, checkout.display()))?;

        ctx.printer.info("Removing origins")?;
        ctx.runner
            .run(&self.toolchain.detach_invocation(&checkout))
            .map_err(|source| Error::Detach { source })?;
        ctx.printer.success("Removed origins")?;

        Ok(())
    }
}
