//! `calc` — command-line entry point for the resumable calculator.

use std::path::PathBuf;

use clap::Parser;
use resumable_calc::console::StdConsole;
use resumable_calc::error::ErrorChain;
use resumable_calc::interpreter::Interpreter;
use resumable_calc::storage::FileStorage;

fn red(s: &str) -> String {
    format!("\x1b[31m{}\x1b[0m", s)
}

#[derive(Parser)]
#[command(
    name = "calc",
    version,
    about = "A crash-resilient command-line calculator",
    long_about = "A command-line calculator whose session state is durably \
                  logged to disk, so killing and restarting the process \
                  resumes exactly where it left off.\n\n\
                  Commands: add, median, rand, help, exit"
)]
struct Cli {
    /// Path to the session's storage blob.
    #[arg(long, default_value = "calc.state")]
    state_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let mut storage = FileStorage::new(cli.state_file);
    let mut interpreter = Interpreter::new(StdConsole::new());

    if let Err(e) = interpreter.run(&mut storage) {
        let chain = ErrorChain::from_error(&e);
        eprintln!("{} {}", red("error:"), chain);
        std::process::exit(1);
    }
}
