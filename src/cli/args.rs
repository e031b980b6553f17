//! Command line argument parsing for the KanjiGraph CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// KanjiGraph - kanji decomposition and component search
#[derive(Parser, Debug, Clone)]
#[command(name = "kanjigraph")]
#[command(about = "Kanji decomposition graph and component search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KanjiGraphArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KanjiGraphArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Search strategy to apply to multi-character queries
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Intersection of every input's indirect compound set
    Intersection,
    /// Incremental pairwise shared-component filter
    Pairwise,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Decompose a character into its components, recursively
    Decompose(DecomposeArgs),

    /// List the characters that use a component, recursively
    Compounds(CompoundsArgs),

    /// Search for characters sharing components with every input character
    Search(SearchArgs),

    /// Show graph statistics
    Stats(StatsArgs),

    /// Export the graph in a line-oriented text form
    Export(ExportArgs),
}

/// Arguments for decomposing a character
#[derive(Parser, Debug, Clone)]
pub struct DecomposeArgs {
    /// Path to the IDS data file
    #[arg(value_name = "IDS_FILE")]
    pub ids_file: PathBuf,

    /// Character to decompose
    #[arg(value_name = "CHARACTER")]
    pub character: String,

    /// Also print the traversed edges as DOT
    #[arg(short, long)]
    pub graph: bool,
}

/// Arguments for listing compounds of a component
#[derive(Parser, Debug, Clone)]
pub struct CompoundsArgs {
    /// Path to the IDS data file
    #[arg(value_name = "IDS_FILE")]
    pub ids_file: PathBuf,

    /// Component to look up
    #[arg(value_name = "COMPONENT")]
    pub component: String,

    /// Also print the traversed edges as DOT
    #[arg(short, long)]
    pub graph: bool,
}

/// Arguments for multi-character search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the IDS data file
    #[arg(value_name = "IDS_FILE")]
    pub ids_file: PathBuf,

    /// Input characters, given as one string
    #[arg(value_name = "CHARACTERS")]
    pub characters: String,

    /// Search strategy
    #[arg(short, long, default_value = "pairwise")]
    pub strategy: SearchStrategy,
}

/// Arguments for showing graph statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the IDS data file
    #[arg(value_name = "IDS_FILE")]
    pub ids_file: PathBuf,
}

/// Arguments for exporting the graph
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Path to the IDS data file
    #[arg(value_name = "IDS_FILE")]
    pub ids_file: PathBuf,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long, value_name = "OUT_FILE")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_defaults_to_normal() {
        let args = KanjiGraphArgs::parse_from(["kanjigraph", "stats", "ids.txt"]);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = KanjiGraphArgs::parse_from(["kanjigraph", "-q", "-vv", "stats", "ids.txt"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_search_strategy_default() {
        let args = KanjiGraphArgs::parse_from(["kanjigraph", "search", "ids.txt", "殺式"]);
        match args.command {
            Command::Search(search) => assert_eq!(search.strategy, SearchStrategy::Pairwise),
            _ => panic!("Expected search command"),
        }
    }
}
