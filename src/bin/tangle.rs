//! CLI entry point for the `tangle` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use tangle::cli::commands;
use tangle::TangleError;

#[derive(Parser)]
#[command(
    name = "tangle",
    about = "tangle CLI — weighted graphs and classic algorithms over graph documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node and edge counts for a graph document
    Info {
        /// Path to the graph document
        file: PathBuf,
        /// Load into adjacency-matrix storage instead of adjacency lists
        #[arg(long)]
        matrix: bool,
    },
    /// List the node labels
    Nodes {
        /// Path to the graph document
        file: PathBuf,
        /// Load into adjacency-matrix storage instead of adjacency lists
        #[arg(long)]
        matrix: bool,
    },
    /// Print the whole-graph depth-first visit order
    Dfs {
        /// Path to the graph document
        file: PathBuf,
        /// Load into adjacency-matrix storage for a deterministic order
        #[arg(long)]
        matrix: bool,
    },
    /// Print single-source shortest distances
    Paths {
        /// Path to the graph document
        file: PathBuf,
        /// Source node label
        source: String,
        /// Use the quadratic scanning variant instead of the heap
        #[arg(long)]
        dense: bool,
        /// Load into adjacency-matrix storage instead of adjacency lists
        #[arg(long)]
        matrix: bool,
    },
    /// Build a minimum spanning tree with Kruskal's algorithm
    Mst {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Check for cycles and print a topological order
    ///
    /// Edge statements are read as directed arcs, left endpoint first.
    Order {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Re-emit the graph document in canonical form
    Export {
        /// Path to the graph document
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Info { file, matrix } => commands::cmd_info(&file, matrix, json),
        Commands::Nodes { file, matrix } => commands::cmd_nodes(&file, matrix, json),
        Commands::Dfs { file, matrix } => commands::cmd_dfs(&file, matrix, json),
        Commands::Paths {
            file,
            source,
            dense,
            matrix,
        } => commands::cmd_paths(&file, &source, dense, matrix, json),
        Commands::Mst { file } => commands::cmd_mst(&file, json),
        Commands::Order { file } => commands::cmd_order(&file, json),
        Commands::Export { file } => commands::cmd_export(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            TangleError::Io(_) => 1,
            TangleError::MissingHeader
            | TangleError::MissingBrace
            | TangleError::MissingClosingBrace
            | TangleError::ExpectedEdge(_)
            | TangleError::BadAttribute(_)
            | TangleError::BadWeight(_) => 2,
            TangleError::NodeNotFound(_) => 4,
        };
        process::exit(code);
    }
}
