//! Command implementations for the KanjiGraph CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use ahash::AHashSet;
use anyhow::Context;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::ids::loader::IdsLoader;
use crate::search::engine::SearchEngine;

/// Execute a CLI command.
pub fn execute_command(args: KanjiGraphArgs) -> Result<()> {
    match &args.command {
        Command::Decompose(cmd) => decompose(cmd.clone(), &args),
        Command::Compounds(cmd) => compounds(cmd.clone(), &args),
        Command::Search(cmd) => search(cmd.clone(), &args),
        Command::Stats(cmd) => show_stats(cmd.clone(), &args),
        Command::Export(cmd) => export_graph(cmd.clone(), &args),
    }
}

/// Load the IDS file and wrap the graph in a search engine.
fn load_engine(path: &Path, cli_args: &KanjiGraphArgs) -> Result<SearchEngine> {
    if cli_args.verbosity() > 1 {
        println!("Loading IDS data from: {}", path.display());
    }

    let loader = IdsLoader::new()?;
    let graph = loader
        .load_path(path)
        .with_context(|| format!("Failed to load IDS data from {}", path.display()))?;

    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
    }

    Ok(SearchEngine::new(graph))
}

/// Decompose a character into its transitive components.
fn decompose(args: DecomposeArgs, cli_args: &KanjiGraphArgs) -> Result<()> {
    let engine = load_engine(&args.ids_file, cli_args)?;

    let start = Instant::now();
    let (values, edges) = if args.graph {
        let (values, edges) = engine.decompose_with_edges(&args.character);
        (values, Some(edges))
    } else {
        (engine.decompose(&args.character), None)
    };
    let duration = start.elapsed();

    let unique_values = values.iter().collect::<AHashSet<_>>().len();
    output_result(
        "Decomposition",
        &TraversalResults {
            start: args.character,
            values,
            unique_values,
            duration_ms: duration.as_millis() as u64,
            edges,
        },
        cli_args,
    )
}

/// List the characters incorporating a component.
fn compounds(args: CompoundsArgs, cli_args: &KanjiGraphArgs) -> Result<()> {
    let engine = load_engine(&args.ids_file, cli_args)?;

    let start = Instant::now();
    let (values, edges) = if args.graph {
        let (values, edges) = engine.compounds_with_edges(&args.component);
        (values, Some(edges))
    } else {
        (engine.compounds(&args.component), None)
    };
    let duration = start.elapsed();

    let unique_values = values.iter().collect::<AHashSet<_>>().len();
    output_result(
        "Compounds",
        &TraversalResults {
            start: args.component,
            values,
            unique_values,
            duration_ms: duration.as_millis() as u64,
            edges,
        },
        cli_args,
    )
}

/// Run one of the two multi-character searches.
fn search(args: SearchArgs, cli_args: &KanjiGraphArgs) -> Result<()> {
    let engine = load_engine(&args.ids_file, cli_args)?;
    let characters: Vec<char> = args.characters.chars().collect();

    let start = Instant::now();
    let hits: Vec<String> = match args.strategy {
        SearchStrategy::Intersection => {
            // Set semantics; sort the result for stable display.
            let mut hits: Vec<String> = engine
                .search_by_intersection(&characters)?
                .into_iter()
                .collect();
            hits.sort();
            hits
        }
        SearchStrategy::Pairwise => engine.search_by_pairwise_filter(&characters)?,
    };
    let duration = start.elapsed();

    let strategy = match args.strategy {
        SearchStrategy::Intersection => "intersection",
        SearchStrategy::Pairwise => "pairwise",
    };
    output_result(
        "Search Results",
        &SearchResults {
            strategy: strategy.to_string(),
            characters: characters.iter().map(|c| c.to_string()).collect(),
            hits: hits.clone(),
            total_hits: hits.len(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Show statistics about the loaded graph.
fn show_stats(args: StatsArgs, cli_args: &KanjiGraphArgs) -> Result<()> {
    let start = Instant::now();
    let engine = load_engine(&args.ids_file, cli_args)?;
    let duration = start.elapsed();

    output_result(
        "Graph Statistics",
        &GraphStats {
            vertices: engine.graph().vertex_count(),
            edges: engine.graph().edge_count(),
            load_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Export the graph in the line-oriented text form.
fn export_graph(args: ExportArgs, cli_args: &KanjiGraphArgs) -> Result<()> {
    let engine = load_engine(&args.ids_file, cli_args)?;
    let graph = engine.graph();

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            graph.serialize(&mut writer)?;
            writer.flush()?;

            output_result(
                "Graph exported",
                &ExportResults {
                    vertices: graph.vertex_count(),
                    path: path.to_string_lossy().to_string(),
                },
                cli_args,
            )
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            graph.serialize(&mut handle)?;
            Ok(())
        }
    }
}
