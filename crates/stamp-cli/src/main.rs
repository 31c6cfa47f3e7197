//! # Stamp CLI
//!
//! Applies named, parameterized modules to a project directory.
//!
//! ## Invocation sequence
//!
//! 1. Parse CLI arguments (clap reports usage errors with exit code 2).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Start the spinner and run the dispatched subcommand with all of its
//!    stdout/stderr writes captured into buffers.
//! 4. Announce success/failure on the spinner from the exit code.
//! 5. Replay the captured stdout block fully, then the stderr block fully.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success                                   |
//! |  1   | Validation / application / commit failure |
//! |  2   | Usage error (bad or missing arguments)    |

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

use stamp_core::application::ports::ProgressSink;

use crate::{
    cli::{Cli, Commands},
    error::CliResult,
    logging::init_logging,
    output::{CommandLineOutput, OutputManager},
    progress::SpinnerProgress,
};

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;

fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                // -h / -V are not errors.
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    print!("{}", e.render());
                    ExitCode::SUCCESS
                }
                // Render clap's own message (already user-friendly) and exit 2.
                _ => {
                    eprint!("{}", e.render());
                    ExitCode::from(2)
                }
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3.-4. Captured execution with spinner ─────────────────────────────
    let spinner = SpinnerProgress::new(&cli.global);
    spinner.show("Running command");

    let output = execute(cli);

    if output.is_successful() {
        spinner.success("Command executed");
    } else {
        spinner.failure("Command failed");
    }

    // ── 5. Replay: full stdout block, then full stderr block ──────────────
    if !output.output.is_empty() {
        print!("{}", output.output);
    }
    if !output.errors.is_empty() {
        eprint!("{}", output.errors);
    }

    ExitCode::from(output.exit_code)
}

/// Run the dispatched subcommand with its output captured.
///
/// All writes land in the [`OutputManager`] buffers; nothing is streamed
/// while the command runs. Errors are formatted into the stderr buffer here
/// so the replay in `main` is the single place that touches the real sinks.
fn execute(cli: Cli) -> CommandLineOutput {
    let output = OutputManager::new(&cli.global);
    let use_color = output.supports_color() && std::io::IsTerminal::is_terminal(&std::io::stderr());

    let exit_code = match run(cli, &output) {
        Ok(()) => 0,
        Err(e) => {
            e.log();
            let text = if use_color {
                e.format_colored()
            } else {
                e.format_plain()
            };
            output.error_text(&text);
            e.exit_code()
        }
    };

    output.into_output(exit_code)
}

/// Dispatch to the correct command handler.
fn run(cli: Cli, output: &OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::List => commands::list::execute(&cli.global, output),
        Commands::Apply(args) => commands::apply::execute(args, &cli.global, output),
    }
}
