//! Output capture and formatting.
//!
//! While a subcommand runs, nothing is streamed to the real stdout/stderr:
//! every write lands in one of two ordered buffers. After the spinner has
//! announced success or failure, `main` replays the stdout block fully, then
//! the stderr block fully. Buffering is purely presentational — it never
//! changes the exit code.

use std::sync::Mutex;

use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;

/// Everything one invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLineOutput {
    pub output: String,
    pub errors: String,
    pub exit_code: u8,
}

impl CommandLineOutput {
    pub fn is_successful(&self) -> bool {
        self.exit_code == 0
    }
}

/// Buffered output sink handed to command handlers.
pub struct OutputManager {
    out: Mutex<String>,
    err: Mutex<String>,
    quiet: bool,
    no_color: bool,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            out: Mutex::new(String::new()),
            err: Mutex::new(String::new()),
            quiet: args.quiet,
            no_color: args.no_color,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) {
        if self.quiet {
            return;
        }
        self.push_out(msg);
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) {
        if self.quiet {
            return;
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.push_out(&line);
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) {
        if self.quiet {
            return;
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.push_out(&line);
    }

    /// Error text, routed to the stderr buffer.  *Not* suppressed in quiet
    /// mode — errors must always be visible.
    pub fn error_text(&self, text: &str) {
        self.err.lock().unwrap().push_str(text);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Consume the buffers into the invocation's final output record.
    pub fn into_output(self, exit_code: u8) -> CommandLineOutput {
        CommandLineOutput {
            output: self.out.into_inner().unwrap(),
            errors: self.err.into_inner().unwrap(),
            exit_code,
        }
    }

    fn push_out(&self, line: &str) {
        let mut out = self.out.lock().unwrap();
        out.push_str(line);
        out.push('\n');
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
