#![forbid(unsafe_code)]

//! Human-readable status output with optional colorization
//!
//! Callers describe text with semantic [`Style`]s; escape codes are only
//! produced here, at the final write, and only when color is enabled.

use std::borrow::Cow;
use std::fmt::Display;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Marker glyph that starts every status line
const STATUS_GLYPH: &str = "*";

/// Semantic styles used across the CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Work in progress
    Info,
    /// Completed work and component names
    Success,
    Failure,
    /// The program name in usage text
    Program,
    /// Command names in usage text
    Command,
    /// Option names in usage text
    Flag,
}

impl Style {
    fn color_spec(self) -> ColorSpec {
        let color = match self {
            Style::Info | Style::Command => Color::Blue,
            Style::Success | Style::Flag => Color::Green,
            Style::Failure => Color::Red,
            Style::Program => Color::Yellow,
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));
        spec
    }
}

/// A run of text rendered with one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    text: Cow<'a, str>,
    style: Option<Style>,
}

impl<'a> Span<'a> {
    pub fn plain(text: impl Into<Cow<'a, str>>) -> Self {
        Span {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(style: Style, text: impl Into<Cow<'a, str>>) -> Self {
        Span {
            text: text.into(),
            style: Some(style),
        }
    }
}

/// Writes status lines, errors and usage text to a terminal stream
///
/// Quiet mode silences status and error lines but never usage text.
pub struct Printer<'w> {
    out: &'w mut dyn WriteColor,
    quiet: bool,
    color: bool,
}

impl<'w> Printer<'w> {
    pub fn new(out: &'w mut dyn WriteColor, quiet: bool, color: bool) -> Self {
        Printer { out, quiet, color }
    }

    /// Write `text` in `style`, regardless of quiet mode
    pub fn write_styled(&mut self, style: Style, text: &str) -> io::Result<()> {
        if self.color {
            self.out.set_color(&style.color_spec())?;
            write!(self.out, "{}", text)?;
            self.out.reset()
        } else {
            write!(self.out, "{}", text)
        }
    }

    /// Write unstyled `text`, regardless of quiet mode
    pub fn write_plain(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    pub fn write_spans(&mut self, spans: &[Span<'_>]) -> io::Result<()> {
        for span in spans {
            match span.style {
                Some(style) => self.write_styled(style, &span.text)?,
                None => self.write_plain(&span.text)?,
            }
        }
        Ok(())
    }

    /// Print `* <spans>` with the marker in `style`
    pub fn status(&mut self, style: Style, spans: &[Span<'_>]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_styled(style, STATUS_GLYPH)?;
        write!(self.out, " ")?;
        self.write_spans(spans)?;
        writeln!(self.out)
    }

    pub fn info(&mut self, message: impl Display) -> io::Result<()> {
        self.status(Style::Info, &[Span::plain(message.to_string())])
    }

    pub fn success(&mut self, message: impl Display) -> io::Result<()> {
        self.status(Style::Success, &[Span::plain(message.to_string())])
    }

    /// Print `* Error: <message>` in the failure style
    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_styled(Style::Failure, &format!("{} Error:", STATUS_GLYPH))?;
        writeln!(self.out, " {}", message)?;
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
