//! Invocation configuration
//!
//! Built once from the parsed command line and passed by reference to every
//! command. It is never modified afterwards.

/// Settings for a single run of the tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Disable color escape codes
    pub no_color: bool,
    /// Suppress status and error lines
    pub quiet: bool,
    /// Show the help screen instead of running a command
    pub help: bool,
    /// Emit debug diagnostics on stderr
    pub verbose: bool,
    /// Value of `-path`; empty means "use the command's default"
    pub path: String,
}

impl Config {
    pub fn color(&self) -> bool {
        !self.no_color
    }

    /// Filter directive for diagnostic logging
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "off"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.color());
        assert!(config.path.is_empty());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        let config = Config {
            quiet: true,
            verbose: true,
            ..Config::default()
        };
        assert_eq!(config.log_filter(), "off");
    }

    #[test]
    fn test_verbose() {
        let config = Config {
            verbose: true,
            no_color: true,
            ..Config::default()
        };
        assert_eq!(config.log_filter(), "debug");
        assert!(!config.color());
    }
}
