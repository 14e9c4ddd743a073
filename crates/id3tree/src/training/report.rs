//! Sinks for the human-readable entropy and gain breakdown.
//!
//! Tree induction writes a step-by-step account of every entropy and gain
//! computation to a [`ReportSink`]. The sink is chosen once per run through
//! [`ReportMode`] and passed into the builder explicitly; what it does with
//! the text never influences the tree.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

const RESET: &str = "\x1b[0m";

/// Highlight colour for report fragments. Only terminal sinks render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Green,
    Yellow,
    Blue,
}

impl Tint {
    fn ansi(self) -> &'static str {
        match self {
            Tint::Green => "\x1b[32m",
            Tint::Yellow => "\x1b[33m",
            Tint::Blue => "\x1b[34m",
        }
    }

    /// Wrap `text` in this tint's ANSI escape codes.
    pub fn apply(self, text: &str) -> String {
        format!("{}{}{}", self.ansi(), text, RESET)
    }
}

/// Destination of the induction report.
pub trait ReportSink {
    /// Whether anything written is kept. Callers may skip formatting when false.
    fn enabled(&self) -> bool {
        true
    }

    /// Append one line of text.
    fn write_line(&mut self, line: &str);

    /// Decorate `text` for this sink. Plain sinks return it unchanged.
    fn paint(&self, text: &str, _tint: Tint) -> String {
        text.to_string()
    }
}

/// Prints the report to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSink {
    color: bool,
}

impl TerminalSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl ReportSink for TerminalSink {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn paint(&self, text: &str, tint: Tint) -> String {
        if self.color {
            tint.apply(text)
        } else {
            text.to_string()
        }
    }
}

/// Collects the report in memory, e.g. to save it to a file afterwards.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buffer: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Write the collected report to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, &self.buffer)
    }
}

impl ReportSink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}

/// Discards the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn enabled(&self) -> bool {
        false
    }

    fn write_line(&mut self, _line: &str) {}
}

// =============================================================================
// ReportMode
// =============================================================================

/// How the induction report is delivered for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Print to the terminal as it is produced.
    #[default]
    Terminal,
    /// Buffer and save to a file when induction finishes.
    File,
    /// Do not produce a report.
    None,
}

impl ReportMode {
    /// Create the sink for this mode. `color` applies to terminal output only.
    pub fn into_reporter(self, color: bool) -> Reporter {
        match self {
            ReportMode::Terminal => Reporter::Terminal(TerminalSink::new(color)),
            ReportMode::File => Reporter::Buffer(BufferSink::new()),
            ReportMode::None => Reporter::Null(NullSink),
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportMode::Terminal => "terminal",
            ReportMode::File => "file",
            ReportMode::None => "none",
        })
    }
}

/// Error returned when parsing an unknown report mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report mode '{0}' (expected terminal, file or none)")]
pub struct ParseReportModeError(String);

impl FromStr for ReportMode {
    type Err = ParseReportModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "terminal" => Ok(ReportMode::Terminal),
            "2" | "file" => Ok(ReportMode::File),
            "3" | "none" | "skip" => Ok(ReportMode::None),
            _ => Err(ParseReportModeError(s.to_string())),
        }
    }
}

/// Sink selected by a [`ReportMode`].
#[derive(Debug, Clone)]
pub enum Reporter {
    Terminal(TerminalSink),
    Buffer(BufferSink),
    Null(NullSink),
}

impl Reporter {
    /// Buffered report text, when the mode buffers.
    pub fn buffered(&self) -> Option<&str> {
        match self {
            Reporter::Buffer(sink) => Some(sink.contents()),
            _ => None,
        }
    }

    fn sink(&self) -> &dyn ReportSink {
        match self {
            Reporter::Terminal(sink) => sink,
            Reporter::Buffer(sink) => sink,
            Reporter::Null(sink) => sink,
        }
    }
}

impl ReportSink for Reporter {
    fn enabled(&self) -> bool {
        self.sink().enabled()
    }

    fn write_line(&mut self, line: &str) {
        match self {
            Reporter::Terminal(sink) => sink.write_line(line),
            Reporter::Buffer(sink) => sink.write_line(line),
            Reporter::Null(sink) => sink.write_line(line),
        }
    }

    fn paint(&self, text: &str, tint: Tint) -> String {
        self.sink().paint(text, tint)
    }
}
