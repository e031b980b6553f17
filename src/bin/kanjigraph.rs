//! KanjiGraph CLI binary.

use std::process;

use clap::Parser;
use kanjigraph::cli::{args::KanjiGraphArgs, commands::execute_command};

fn main() {
    // Parse command line arguments using clap
    let args = KanjiGraphArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
