// 📋 Clipboard - the only outward side effect a tool has

use crate::error::{ToolError, ToolResult};
use base64::Engine as _;
use std::io::Write;

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> ToolResult<()>;
}

/// Sets the terminal's clipboard through an OSC 52 escape sequence.
///
/// Terminals that don't support OSC 52 ignore the sequence, so success here
/// means "written", not "landed on the system clipboard".
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Osc52Clipboard { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{payload}\x07")
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> ToolResult<()> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| ToolError::Clipboard(e.to_string()))
    }
}

/// Keeps the last copied value in memory; stands in for the terminal in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> ToolResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
