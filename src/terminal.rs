//! Terminal bindings of the presentation regions.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::{
    error::AppError,
    surface::{DisplayRegion, ErrorRegion, LOADING_PLACEHOLDER},
};

const PROMPT: &str = "> ";

// carriage return + erase line
const ERASE_LINE: &str = "\r\x1b[2K";

/// Display region printing to a writer (stdout by default).
#[derive(Debug)]
pub struct TerminalDisplay<W: Write = io::Stdout> {
    out: W,
    loading: bool,
}

impl TerminalDisplay {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            loading: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> DisplayRegion for TerminalDisplay<W> {
    fn show_loading(&mut self) {
        self.loading = true;
        self.emit(LOADING_PLACEHOLDER);
    }

    fn hide_loading(&mut self) {
        if self.loading {
            self.loading = false;
            self.emit(ERASE_LINE);
        }
    }

    fn write(&mut self, fragment: &str) {
        self.hide_loading();
        self.emit(&format!("{fragment}\n"));
    }

    fn clear(&mut self) {
        self.hide_loading();
    }
}

/// Error region printing to a writer (stderr by default).
///
/// A terminal cannot take printed lines back, so clearing only forgets the message.
#[derive(Debug)]
pub struct TerminalErrors<W: Write = io::Stderr> {
    out: W,
    message: Option<String>,
}

impl TerminalErrors {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TerminalErrors<W> {
    pub fn new(out: W) -> Self {
        Self { out, message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorRegion for TerminalErrors<W> {
    fn report(&mut self, message: &str) {
        self.message = Some(message.to_string());
        if let Err(e) = writeln!(self.out, "Error: {message}").and_then(|()| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    fn clear(&mut self) {
        self.message = None;
    }
}

/// Prints the prompt and reads one line of input into `buffer`.
///
/// Returns `None` at end of input or when the user enters `exit`.
pub fn read_city<'b, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    buffer: &'b mut String,
) -> Result<Option<&'b str>, AppError> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;

    buffer.clear();
    if input.read_line(buffer)? == 0 {
        return Ok(None);
    }
    let line = buffer.trim();
    Ok((line != "exit").then_some(line))
}
