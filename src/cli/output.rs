//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{KanjiGraphArgs, OutputFormat};
use crate::error::Result;

/// Result structure for decompose/compounds operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct TraversalResults {
    pub start: String,
    pub values: Vec<String>,
    pub unique_values: usize,
    pub duration_ms: u64,
    /// Traversed edges, present when DOT output was requested.
    pub edges: Option<Vec<(String, String)>>,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub strategy: String,
    pub characters: Vec<String>,
    pub hits: Vec<String>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

/// Graph statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    pub load_ms: u64,
}

/// Result structure for graph export.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResults {
    pub vertices: usize,
    pub path: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &KanjiGraphArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &KanjiGraphArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &KanjiGraphArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("TraversalResults") => {
            output_traversal_results_human(&value)
        }
        _ if std::any::type_name::<T>().contains("SearchResults") => {
            output_search_results_human(&value)
        }
        _ => output_generic_human(&value),
    }
}

/// Output traversal results in human format.
fn output_traversal_results_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(values) = obj.get("values").and_then(|v| v.as_array()) {
        let line: Vec<&str> = values.iter().filter_map(|v| v.as_str()).collect();
        println!("{}", line.join(" "));
        println!();
        println!("Total values: {}", line.len());
    }
    if let Some(unique) = obj.get("unique_values").and_then(|u| u.as_u64()) {
        println!("Unique values: {unique}");
    }
    if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
        println!("Query time: {duration}ms");
    }

    if let Some(edges) = obj.get("edges").and_then(|e| e.as_array()) {
        println!();
        println!("digraph {{");
        for edge in edges {
            if let Some(pair) = edge.as_array()
                && let (Some(parent), Some(child)) =
                    (pair.first().and_then(|p| p.as_str()), pair.get(1).and_then(|c| c.as_str()))
            {
                println!("  \"{parent}\" -> \"{child}\";");
            }
        }
        println!("}}");
    }

    Ok(())
}

/// Output search results in human format.
fn output_search_results_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(hits) = obj.get("hits").and_then(|h| h.as_array()) {
        let line: Vec<&str> = hits.iter().filter_map(|h| h.as_str()).collect();
        if line.is_empty() {
            println!("No results.");
        } else {
            println!("{}", line.join(" "));
        }
        println!();
    }
    if let Some(total) = obj.get("total_hits").and_then(|t| t.as_u64()) {
        println!("Total hits: {total}");
    }
    if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
        println!("Search time: {duration}ms");
    }

    Ok(())
}

/// Generic output for other result types.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    for (key, field) in obj {
        match field {
            serde_json::Value::Null => {}
            serde_json::Value::String(text) => println!("{key}: {text}"),
            other => println!("{key}: {other}"),
        }
    }

    Ok(())
}
