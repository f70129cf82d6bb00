//! campus-nav - find the shortest walking route between two campus locations

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use campus_nav::{logging, Algorithm, Error, Graph, Navigator, NavigatorConfig, RouteReport};

/// Exit status when both endpoints exist but no route joins them
const EXIT_NO_ROUTE: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "campus-nav", version, about = "Shortest route between two locations of a campus graph")]
struct Cli {
    /// Graph JSON file ({"nodes": ..., "edges": [...]})
    #[arg(short, long, env = "CAMPUS_NAV_GRAPH")]
    graph: PathBuf,

    /// Start node id
    #[arg(long)]
    from: String,

    /// Goal node id
    #[arg(long)]
    to: String,

    /// astar-euclidean, astar-manhattan or dijkstra (defaults to the config value)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full search result as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log filter, e.g. `trace` or `campus_nav=debug`
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_NO_ROUTE),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Returns whether a route was found
fn run(cli: &Cli) -> Result<bool, Error> {
    let config = match &cli.config {
        Some(path) => NavigatorConfig::load(path)?,
        None => NavigatorConfig::default(),
    };
    let graph = Graph::from_json_file(&cli.graph)?;

    let algorithm = cli.algorithm.unwrap_or(config.default_algorithm);
    let navigator = Navigator::new(&graph, config);
    let result = navigator.route(&cli.from, &cli.to, algorithm)?;

    if cli.json {
        // non-finite costs are written as null
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.success());
    }

    let report = RouteReport::from_result(&graph, &result, algorithm.to_string(), navigator.config().walking_speed);
    match report {
        Some(report) => print!("{report}"),
        None => {
            println!("No path found between {} and {}", cli.from, cli.to);
            println!("Nodes explored:  {}", result.nodes_explored());
            for (i, id) in result.exploration_trace().iter().enumerate() {
                println!("  {:>3}. {}", i + 1, graph.display_name(id));
            }
        }
    }

    Ok(result.success())
}
