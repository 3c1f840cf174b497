#![forbid(unsafe_code)]

//! Command-line flag definitions
//!
//! Flags follow the single-dash long form (`-quiet`, `-path dir`,
//! `-path=dir`); the double-dash form is accepted too. Flag parsing stops at
//! the first positional argument, which names the command. Everything after
//! it belongs to the command, even if it looks like a flag.

use crate::config::Config;
use crate::output::UsageEntry;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "gotrix",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    #[arg(
        long = "no-color",
        help = "Do not colorize output (default false).",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub no_color: bool,

    #[arg(
        long,
        help = "Do not print any output (default false).",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub quiet: bool,

    #[arg(
        long,
        help = "Show this help.",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub help: bool,

    #[arg(
        long,
        help = "Print debug diagnostics to stderr (default false).",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub verbose: bool,

    #[arg(
        long,
        help = "Path to contents directory (default depends on the command).",
        value_name = "path",
        allow_hyphen_values = true
    )]
    pub path: Option<String>,

    /// Command to run
    pub command: Option<String>,

    /// Arguments passed to the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            no_color: cli.no_color,
            quiet: cli.quiet,
            help: cli.help,
            verbose: cli.verbose,
            path: cli.path.clone().unwrap_or_default(),
        }
    }
}

impl Cli {
    /// Flag names and help text, sorted by name
    pub fn option_entries() -> Vec<UsageEntry> {
        let command = Cli::command();
        let mut entries: Vec<UsageEntry> = command
            .get_arguments()
            .filter(|arg| !arg.is_positional())
            .filter_map(|arg| {
                let name = arg.get_long()?;
                let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
                Some(UsageEntry::new(name, help))
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

/// Flags that consume the following argument as their value
fn value_flags() -> Vec<String> {
    Cli::command()
        .get_arguments()
        .filter(|arg| !arg.is_positional())
        .filter(|arg| arg.get_action().takes_values() && !arg.is_require_equals_set())
        .filter_map(|arg| arg.get_long().map(str::to_string))
        .collect()
}

/// Rewrite raw arguments into the form clap expects
///
/// `-name` becomes `--name`, and a `--` separator is inserted before the
/// first positional argument so nothing after it is parsed as a flag.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let value_flags = value_flags();
    let mut iter = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = iter.next().into_iter().collect();

    while let Some(arg) = iter.next() {
        let text = match arg.to_str() {
            Some(text) if text.starts_with('-') && text != "-" => text.to_string(),
            _ => {
                normalized.push(OsString::from("--"));
                normalized.push(arg);
                break;
            }
        };

        if text == "--" {
            normalized.push(arg);
            break;
        }

        let body = text
            .strip_prefix("--")
            .unwrap_or_else(|| &text[1..]);
        normalized.push(OsString::from(format!("--{}", body)));

        let takes_next = !body.contains('=') && value_flags.iter().any(|f| f == body);
        if takes_next && let Some(value) = iter.next() {
            normalized.push(value);
        }
    }

    normalized.extend(iter);
    normalized
}

/// Parse raw process arguments, program name first
pub fn parse<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize_args(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_normalize_single_dash_flags() {
        let args = normalize_args(["gotrix", "-quiet", "-no-color", "build-components"]);
        assert_eq!(
            strings(&args),
            vec!["gotrix", "--quiet", "--no-color", "--", "build-components"]
        );
    }

    #[test]
    fn test_normalize_path_value_forms() {
        let args = normalize_args(["gotrix", "-path", "~/c", "-path=other", "x"]);
        assert_eq!(
            strings(&args),
            vec!["gotrix", "--path", "~/c", "--path=other", "--", "x"]
        );
    }

    #[test]
    fn test_normalize_stops_at_first_positional() {
        let args = normalize_args(["gotrix", "create-app", "-quiet", "name"]);
        assert_eq!(
            strings(&args),
            vec!["gotrix", "--", "create-app", "-quiet", "name"]
        );
    }

    #[test]
    fn test_normalize_keeps_explicit_separator() {
        let args = normalize_args(["gotrix", "-quiet", "--", "-odd"]);
        assert_eq!(strings(&args), vec!["gotrix", "--quiet", "--", "-odd"]);
    }

    #[test]
    fn test_parse_flags_and_command() {
        let cli = parse(["gotrix", "-no-color", "-path", "plugins", "build-components"]).unwrap();
        assert!(cli.no_color);
        assert!(!cli.quiet);
        assert_eq!(cli.path.as_deref(), Some("plugins"));
        assert_eq!(cli.command.as_deref(), Some("build-components"));
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_parse_double_dash_flags() {
        let cli = parse(["gotrix", "--quiet", "--help"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.help);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_bool_with_explicit_value() {
        let cli = parse(["gotrix", "-quiet=false", "-no-color=true", "x"]).unwrap();
        assert!(!cli.quiet);
        assert!(cli.no_color);
    }

    #[test]
    fn test_parse_command_arguments() {
        let cli = parse(["gotrix", "create-app", "myapp", "-extra"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("create-app"));
        assert_eq!(cli.args, vec!["myapp", "-extra"]);
    }

    #[test]
    fn test_parse_flag_after_command_is_an_argument() {
        let cli = parse(["gotrix", "create-app", "-quiet"]).unwrap();
        assert!(!cli.quiet);
        assert_eq!(cli.args, vec!["-quiet"]);
    }

    #[test]
    fn test_parse_no_arguments() {
        let cli = parse(["gotrix"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(Config::from(&cli), Config::default());
    }

    #[test]
    fn test_parse_unknown_flag_fails() {
        assert!(parse(["gotrix", "-bogus", "build-components"]).is_err());
    }

    #[test]
    fn test_config_from_cli() {
        let cli = parse(["gotrix", "-verbose", "-path", "/srv/c", "build-components"]).unwrap();
        let config = Config::from(&cli);
        assert!(config.verbose);
        assert_eq!(config.path, "/srv/c");
    }

    #[test]
    fn test_option_entries_sorted_with_help() {
        let entries = Cli::option_entries();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["help", "no-color", "path", "quiet", "verbose"]);
        assert_eq!(entries[0].description, "Show this help.");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
