//! The Blink language interpreter CLI.
//!
//! This binary runs a Blink source file: `blink <file>`. It delegates
//! the lex/parse/evaluate pipeline to the driver module and error
//! rendering to the diagnostics module.

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the Blink interpreter.
#[derive(Parser)]
#[command(name = "blink")]
#[command(about = "The Blink language interpreter", long_about = None)]
struct Cli {
    /// The source file to run (e.g., `hello.blink`).
    file: String,
}

/// Entry point for the Blink interpreter.
///
/// Exit codes: 0 on success; 1 for usage, lex, parse, or runtime
/// errors; 2 when the source file cannot be read.
fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|error| {
        let _ = error.print();
        let code = if error.use_stderr() { 1 } else { 0 };
        std::process::exit(code);
    });

    if let Err(failure) = driver::run(&cli.file) {
        report_and_exit(*failure);
    }
}

fn report_and_exit(failure: driver::FailedRun) -> ! {
    diagnostics::report_error(failure.filename(), failure.source(), failure.error());
    std::process::exit(failure.error().exit_code());
}
