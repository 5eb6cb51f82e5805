//! Output management and formatting.
//!
//! Results (JSON documents, listing rows, fixed messages) are always written,
//! even with `--quiet`.  Headers and status lines are decoration and honour it.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins over the config file; Auto resolves to Human (TTY)
        // or Plain (piped/redirected).
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_config(&config.output.format).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// One line of a result listing.  Not suppressed in quiet mode.
    pub fn line(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  Not suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold header line in the given tone; suppressed in quiet mode.
    pub fn header(&self, text: &str, tone: Tone) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.message(text, tone)
    }

    /// A fixed result message, styled like a header but always written.
    pub fn message(&self, text: &str, tone: Tone) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            match tone {
                Tone::Blue => text.blue().bold().to_string(),
                Tone::Cyan => text.cyan().bold().to_string(),
                Tone::Green => text.green().bold().to_string(),
                Tone::Magenta => text.magenta().bold().to_string(),
                Tone::Yellow => text.yellow().bold().to_string(),
            }
        };
        self.term.write_line(&line)
    }

    /// A result document as indented JSON, field order preserved.
    pub fn document<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.term.write_line(&json)
    }

    /// Header followed by a result document (human/plain), or just the
    /// document (json).
    pub fn section<T: Serialize + ?Sized>(
        &self,
        title: &str,
        tone: Tone,
        value: &T,
    ) -> io::Result<()> {
        if !self.is_json() {
            self.header(title, tone)?;
        }
        self.document(value)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` when each command must print exactly one JSON document.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

/// Header colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Cyan,
    Green,
    Magenta,
    Yellow,
}

// ── tests ─────────────────────────────────────────────────────────────────────
