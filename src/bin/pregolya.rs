//! CLI entry point for the `pregolya` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use pregolya::cli::commands;
use pregolya::graph::DfsStrategy;
use pregolya::GraphError;

#[derive(Parser)]
#[command(
    name = "pregolya",
    about = "Pregolya CLI — build an undirected graph and explore it depth-first"
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

/// The graph every command operates on.
#[derive(Args)]
struct GraphArgs {
    /// Number of vertices
    #[arg(long, short = 'n', default_value = "0")]
    vertices: usize,
    /// Edge as I:J or I-J (repeatable)
    #[arg(long = "edge", short = 'e')]
    edges: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex/edge counts and adjacency
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Print the depth-first search callback trace
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,
        /// Strategy: iterative or recursive
        #[arg(long, default_value = "iterative")]
        strategy: String,
    },
    /// List connected components
    Components {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Info { graph } => commands::build_graph(graph.vertices, &graph.edges)
            .and_then(|g| commands::cmd_info(&g, json)),
        Commands::Dfs { graph, strategy } => strategy.parse::<DfsStrategy>().and_then(|s| {
            commands::build_graph(graph.vertices, &graph.edges)
                .and_then(|g| commands::cmd_dfs(&g, s, json))
        }),
        Commands::Components { graph } => commands::build_graph(graph.vertices, &graph.edges)
            .and_then(|g| commands::cmd_components(&g, json)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec(_) | GraphError::InvalidStrategy(_) => 3,
            GraphError::VertexOutOfRange { .. } => 4,
            GraphError::Json(_) => 5,
        };
        process::exit(code);
    }
}
