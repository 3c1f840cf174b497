#![forbid(unsafe_code)]

//! `build-components`: compile every component source into a plugin
//!
//! Sources are built one at a time in listing order. The first failure stops
//! the batch; artifacts built before it are left in place.

use super::dispatch::{Command, Context};
use crate::error::{Error, Result};
use crate::file_walker::list_files;
use crate::output::{Span, Style};
use crate::toolchain::Toolchain;
use std::path::{Component, Path};

pub const NAME: &str = "build-components";

/// Components root used when `-path` is not given
pub const DEFAULT_COMPONENTS_DIR: &str = "./components";

pub struct BuildComponents {
    toolchain: Toolchain,
}

impl BuildComponents {
    pub fn new(toolchain: Toolchain) -> Self {
        BuildComponents { toolchain }
    }

    /// Display name of the component whose source is `source`
    ///
    /// The directories between `root` and the file, joined with `/`. A source
    /// sitting directly in `root` is named after its file instead.
    pub fn component_name(&self, root: &Path, source: &Path) -> String {
        let relative = source.strip_prefix(root).unwrap_or(source);
        let segments: Vec<String> = relative
            .parent()
            .map(|dir| {
                dir.components()
                    .filter_map(|c| match c {
                        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        if segments.is_empty() {
            self.toolchain.source_stem(source)
        } else {
            segments.join("/")
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

impl Command for BuildComponents {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Build components so files. Path can be modified by -path option. The default is \"./components\"."
    }

    fn run(&self, ctx: &mut Context<'_>, _args: &[String]) -> Result<()> {
        let root = ctx.paths.resolve(&ctx.config.path, DEFAULT_COMPONENTS_DIR)?;
        let sources = list_files(&root, &self.toolchain.source_suffix)?;
        if sources.is_empty() {
            return Err(Error::NoComponentsFound { root });
        }

        ctx.printer
            .info(format!("building components from {}", root.display()))?;
        ctx.printer.info(format!(
            "found {} {}",
            sources.len(),
            plural(sources.len(), "component")
        ))?;

        for file in &sources {
            let name = self.component_name(&root, file);
            let artifact = self.toolchain.artifact_path(file);

            ctx.printer.status(
                Style::Info,
                &[
                    Span::plain("building component \""),
                    Span::styled(Style::Success, name.as_str()),
                    Span::plain(format!("\" from {}", file.display())),
                ],
            )?;

            ctx.runner
                .run(&self.toolchain.build_invocation(file, &artifact))
                .map_err(|source| Error::Build {
                    component: name.clone(),
                    source,
                })?;

            ctx.printer.status(
                Style::Success,
                &[
                    Span::plain("successfully built \""),
                    Span::styled(Style::Success, name.as_str()),
                    Span::plain(format!("\" to {}", artifact.display())),
                ],
            )?;
        }

        Ok(())
    }
}
