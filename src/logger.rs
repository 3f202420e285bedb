//! Threshold-gated logger.
//!
//! Every call carries a level; it is emitted only when the logger's
//! threshold is at least that level. Console lines are colored per
//! severity, file lines are plain and timestamped.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use tracing::{debug, warn};

use crate::color::Severity;
use crate::error::FatalError;

/// Timestamp layout for file lines, e.g. 2025-09-23 13:37:42
const FILE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Leveled logger writing console lines to `W` (stdout by default).
#[derive(Debug)]
pub struct Logger<W: Write = io::Stdout> {
    threshold: i32,
    out: W,
}

impl Logger<io::Stdout> {
    /// Logger printing to standard output. Any threshold is accepted.
    pub fn new(threshold: i32) -> Self {
        Self::with_writer(threshold, io::stdout())
    }
}

impl<W: Write> Logger<W> {
    /// Logger printing console lines to `out`.
    pub fn with_writer(threshold: i32, out: W) -> Self {
        Self { threshold, out }
    }

    pub fn set_level(&mut self, threshold: i32) {
        debug!(from = self.threshold, to = threshold, "logger threshold changed");
        self.threshold = threshold;
    }

    pub fn level(&self) -> i32 {
        self.threshold
    }

    /// Drop the threshold to 0, silencing every call at level 1 or above.
    pub fn disable(&mut self) {
        self.set_level(0);
    }

    /// True if a call at `level` would be emitted.
    pub fn enabled(&self, level: i32) -> bool {
        self.threshold >= level
    }

    /// Consume the logger and hand back its console sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// `[ DEBUG: message ]`
    pub fn debug(&mut self, message: &str, level: i32) {
        if !self.enabled(level) {
            return;
        }
        let line = bracketed(Severity::Debug, &format!("DEBUG: {message}"));
        self.emit(&line);
    }

    /// `[ DEBUG: message|d1, d2, ... ]`, or plain [`debug`](Self::debug)
    /// when `details` is empty.
    pub fn debug_with_details(&mut self, message: &str, level: i32, details: &[&dyn Display]) {
        if !self.enabled(level) {
            return;
        }
        if details.is_empty() {
            self.debug(message, level);
            return;
        }
        let line = format!(
            "{}{}{}",
            Severity::Debug.paint(&format!("[ DEBUG: {message}|")),
            join_details(details),
            Severity::Debug.paint(" ]"),
        );
        self.emit(&line);
    }

    /// Console [`debug`](Self::debug) followed by a file [`log`](Self::log).
    pub fn debug_to_file(&mut self, message: &str, path: impl AsRef<Path>, level: i32) {
        if !self.enabled(level) {
            return;
        }
        self.debug(message, level);
        self.log(message, path, level);
    }

    /// Format `args` as a colored, comma separated fragment for embedding in
    /// another message. Empty when gated or when `args` is empty.
    pub fn info(&self, level: i32, args: &[&dyn Display]) -> String {
        if !self.enabled(level) || args.is_empty() {
            return String::new();
        }
        join_details(args)
    }

    /// `[ WARN: message ]`
    pub fn warn(&mut self, message: &str, level: i32) {
        if !self.enabled(level) {
            return;
        }
        let line = bracketed(Severity::Warning, &format!("WARN: {message}"));
        self.emit(&line);
    }

    /// `[ NOTICE: message ]`
    pub fn notice(&mut self, message: &str, level: i32) {
        if !self.enabled(level) {
            return;
        }
        let line = bracketed(Severity::Notice, &format!("NOTICE: {message}"));
        self.emit(&line);
    }

    /// `[ ERROR: message ]` with the body in info color.
    pub fn error(&mut self, message: &str, level: i32) {
        if !self.enabled(level) {
            return;
        }
        let line = tagged_body("ERROR", message);
        self.emit(&line);
    }

    /// Signal a terminal condition. Prints nothing; returns the formatted
    /// `[ FATAL: message ]` as an error when the level passes, `Ok(())`
    /// otherwise. Fatal is gated like every other call.
    pub fn fatal(&self, message: &str, level: i32) -> Result<(), FatalError> {
        if !self.enabled(level) {
            return Ok(());
        }
        Err(FatalError::new(tagged_body("FATAL", message)))
    }

    /// Append `[Log: YYYY-MM-DD HH:mm:ss | message]` to `path`, creating the
    /// file if needed. I/O failures are reported through
    /// [`error`](Self::error) at the same level and never returned.
    pub fn log(&mut self, message: &str, path: impl AsRef<Path>, level: i32) {
        if !self.enabled(level) {
            return;
        }
        let path = path.as_ref();
        let timestamp = Local::now().format(FILE_TIMESTAMP);
        let line = format!("[Log: {timestamp} | {message}]");

        if let Err(e) = append_line(path, &line) {
            warn!(path = %path.display(), error = %e, "log file append failed");
            self.error(&format!("Failed to write to log file: {e}"), level);
        }
    }

    fn emit(&mut self, line: &str) {
        // A closed stdout must not take the host program down.
        let _ = writeln!(self.out, "{line}");
    }
}

/// `[ {inner} ]` entirely in `severity`'s color.
fn bracketed(severity: Severity, inner: &str) -> String {
    format!(
        "{}{}",
        severity.paint(&format!("[ {inner}")),
        severity.paint(" ]")
    )
}

/// `[ {tag}: ` and ` ]` in error color around an info-colored body.
fn tagged_body(tag: &str, body: &str) -> String {
    format!(
        "{}{}{}",
        Severity::Error.paint(&format!("[ {tag}: ")),
        Severity::Info.paint(body),
        Severity::Error.paint(" ]"),
    )
}

fn join_details(details: &[&dyn Display]) -> String {
    let separator = Severity::Debug.paint(", ");
    details
        .iter()
        .map(|d| Severity::Info.paint(&d.to_string()))
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Open in append mode, write one line, close on drop.
fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")?;
    file.flush()
}
