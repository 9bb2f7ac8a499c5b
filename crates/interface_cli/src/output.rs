//! Console output helpers

use std::io::Write;

use crate::config::CliConfig;

/// Kind of message block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Info,
    Error,
}

/// Formats `message` as a padded block: a blank line of the same width
/// above and below, two spaces of padding on each side
pub fn format_block(message: &str, style: BlockStyle) -> String {
    let label = match style {
        BlockStyle::Info => "",
        BlockStyle::Error => "[ERROR] ",
    };
    let line = format!("  {}{}  ", label, message);
    let blank = " ".repeat(line.chars().count());
    format!("{blank}\n{line}\n{blank}")
}

/// Explicit per-invocation state handed to every command
pub struct CommandContext<W: Write> {
    pub config: CliConfig,
    out: W,
}

impl<W: Write> CommandContext<W> {
    pub fn new(config: CliConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Writes a formatted message block followed by a newline
    pub fn display_block(&mut self, message: &str, style: BlockStyle) -> std::io::Result<()> {
        writeln!(self.out, "{}", format_block(message, style))
    }

    pub fn writeln(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    /// Consumes the context and returns the writer
    pub fn into_output(self) -> W {
        self.out
    }
}
