#![forbid(unsafe_code)]

//! Help screen rendering

use super::human::{Printer, Style};
use std::io;

/// Column limit for wrapped descriptions
pub const WRAP_WIDTH: usize = 60;

/// Indentation of descriptions below their command or option name
const DESCRIPTION_INDENT: &str = "        ";

/// A named item on the help screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntry {
    pub name: String,
    pub description: String,
}

impl UsageEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        UsageEntry {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Greedily pack whitespace-separated words into lines of at most `width` chars
///
/// A word longer than `width` gets a line of its own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn write_description(printer: &mut Printer<'_>, description: &str) -> io::Result<()> {
    let separator = format!("\n{}", DESCRIPTION_INDENT);
    let joined = wrap_text(description, WRAP_WIDTH).join(separator.as_str());
    printer.write_plain(&format!("{}{}\n", DESCRIPTION_INDENT, joined))
}

/// Print the full help screen
pub fn render_usage(
    printer: &mut Printer<'_>,
    program: &str,
    commands: &[UsageEntry],
    options: &[UsageEntry],
) -> io::Result<()> {
    printer.write_plain("Usage:\n\n  ")?;
    printer.write_styled(Style::Program, program)?;
    printer.write_plain(" [")?;
    printer.write_styled(Style::Flag, "options")?;
    printer.write_plain("] ")?;
    printer.write_styled(Style::Command, "command")?;
    printer.write_plain("\n\nCommands:\n\n")?;

    for command in commands {
        printer.write_plain("  ")?;
        printer.write_styled(Style::Command, &command.name)?;
        printer.write_plain("\n")?;
        write_description(printer, &command.description)?;
        printer.write_plain("\n")?;
    }

    printer.write_plain("Options:\n")?;
    for option in options {
        printer.write_plain("\n  ")?;
        printer.write_styled(Style::Flag, &format!("-{}", option.name))?;
        printer.write_plain("\n")?;
        write_description(printer, &option.description)?;
    }
    printer.flush()
}

/// Print the short usage line for a command missing its positional argument
pub fn render_command_usage(
    printer: &mut Printer<'_>,
    program: &str,
    command: &str,
    argument: &str,
) -> io::Result<()> {
    printer.write_plain("Usage:\n\n  ")?;
    printer.write_styled(Style::Program, program)?;
    printer.write_plain(" ")?;
    printer.write_styled(Style::Command, command)?;
    printer.write_plain(&format!(" [{}]\n", argument))?;
    printer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn render(f: impl FnOnce(&mut Printer<'_>)) -> String {
        let mut buffer = Buffer::no_color();
        {
            let mut printer = Printer::new(&mut buffer, false, false);
            f(&mut printer);
        }
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(
            wrap_text("Create a new application.", WRAP_WIDTH),
            vec!["Create a new application."]
        );
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_text("", WRAP_WIDTH).is_empty());
        assert!(wrap_text("   ", WRAP_WIDTH).is_empty());
    }

    #[test]
    fn test_wrap_breaks_before_overflowing_word() {
        let text = "Build components so files. Path can be modified by -path option. \
                    The default is \"./components\".";
        let lines = wrap_text(text, WRAP_WIDTH);
        assert_eq!(
            lines,
            vec![
                "Build components so files. Path can be modified by -path",
                "option. The default is \"./components\".",
            ]
        );
    }

    #[test]
    fn test_wrap_never_exceeds_width_for_normal_words() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod \
                    tempor incididunt ut labore et dolore magna aliqua ut enim ad minim veniam";
        for width in [10, 20, 33, 60] {
            for line in wrap_text(text, width) {
                assert!(line.chars().count() <= width, "{:?} exceeds {}", line, width);
            }
        }
    }

    #[test]
    fn test_wrap_exact_fit() {
        assert_eq!(wrap_text("aaaa bbbb", 9), vec!["aaaa bbbb"]);
        assert_eq!(wrap_text("aaaa bbbb", 8), vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn test_wrap_long_word_stands_alone() {
        let long = "x".repeat(80);
        let text = format!("short {} tail", long);
        assert_eq!(
            wrap_text(&text, WRAP_WIDTH),
            vec!["short".to_string(), long, "tail".to_string()]
        );
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap_text("  a \t b\n c  ", WRAP_WIDTH), vec!["a b c"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        // Each word is 4 chars but 8 bytes
        assert_eq!(wrap_text("ääää öööö", 9), vec!["ääää öööö"]);
    }

    #[test]
    fn test_render_usage_layout() {
        let commands = vec![
            UsageEntry::new("create-app", "Create a new application."),
            UsageEntry::new("build-components", "Build components."),
        ];
        let options = vec![UsageEntry::new("quiet", "Do not print any output (default false).")];

        let output = render(|p| render_usage(p, "gotrix", &commands, &options).unwrap());

        let expected = "Usage:\n\n  gotrix [options] command\n\nCommands:\n\n  \
                        create-app\n        Create a new application.\n\n  \
                        build-components\n        Build components.\n\n\
                        Options:\n\n  -quiet\n        Do not print any output (default false).\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_usage_wraps_descriptions() {
        let commands = vec![UsageEntry::new("long", "word ".repeat(30))];
        let output = render(|p| render_usage(p, "gotrix", &commands, &[]).unwrap());
        assert!(output.contains("\n        word word"));
        for line in output.lines() {
            assert!(line.chars().count() <= WRAP_WIDTH + DESCRIPTION_INDENT.len());
        }
    }

    #[test]
    fn test_render_command_usage() {
        let output = render(|p| {
            render_command_usage(p, "gotrix", "create-app", "application name").unwrap()
        });
        assert_eq!(output, "Usage:\n\n  gotrix create-app [application name]\n");
    }
}
