//! Terminal Emitter
//!
//! Same layout as [`Diagnostic::render`], with optional ANSI colors.

use std::io::{self, Write};
use std::str::FromStr;

use crate::{caret_excerpt, Diagnostic, DiagnosticKind};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LOCATION: &str = "\x1b[2m"; // Dim
    pub const CARET: &str = "\x1b[31m"; // Red
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode, set from `--color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` is only consulted in `Auto` mode.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode '{other}' (expected auto, always or never)"
            )),
        }
    }
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_excerpt(&mut self, excerpt: &str) {
        // Excerpt lines alternate: source text, then its caret run.
        for (i, line) in excerpt.lines().enumerate() {
            if i % 2 == 1 {
                self.write_colored(line, colors::CARET);
            } else {
                let _ = write!(self.writer, "{line}");
            }
            let _ = writeln!(self.writer);
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode) -> Self {
        let is_tty = io::IsTerminal::is_terminal(&io::stderr());
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if diagnostic.kind == DiagnosticKind::Runtime {
            let _ = writeln!(self.writer, "Traceback (most recent call last):");
            for line in diagnostic.traceback_lines() {
                self.write_colored(&line, colors::LOCATION);
                let _ = writeln!(self.writer);
            }
            self.write_colored(&diagnostic.header(), colors::ERROR);
            let _ = writeln!(self.writer);
        } else {
            self.write_colored(&diagnostic.header(), colors::ERROR);
            let _ = writeln!(self.writer);
            let location = format!(
                "File {}, line {}",
                diagnostic.source.name(),
                diagnostic.line_number()
            );
            self.write_colored(&location, colors::LOCATION);
            let _ = writeln!(self.writer);
        }
        let _ = writeln!(self.writer);
        self.write_excerpt(&caret_excerpt(&diagnostic.source, diagnostic.span));
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
