use anyhow::{Context, Result};
use clap::Parser;
use pathcost::load;
use pathcost::{solve, Algorithm, QueueKind, Request, Solution};

#[derive(Parser, Debug)]
#[command(name = "pathcost")]
#[command(about = "Load an undirected edge list (start,end,cost) from CSV and run one graph solver on it.", long_about = None)]
struct Cli {
    /// Path to the .csv edge list
    #[arg(short, long)]
    edges: String,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Dijkstra)]
    algorithm: Algorithm,

    /// Vertex to start from (the tree root for prim)
    #[arg(short, long)]
    start: usize,

    /// Vertex to reach. Required by every algorithm except prim.
    #[arg(short, long)]
    goal: Option<usize>,

    /// Number of vertices. Defaults to one past the largest endpoint in the edge list.
    #[arg(short = 'n', long)]
    vertices: Option<usize>,

    #[arg(long, value_enum, default_value_t = QueueKind::Lazy)]
    queue: QueueKind,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// No logging, result only
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let graph = load::graph_from_path(&cli.edges, cli.vertices)
        .with_context(|| format!("loading {}", &cli.edges))?;
    tracing::info!(
        vertices = graph.num_vertices(),
        edges = graph.edges().len(),
        "loaded {}",
        &cli.edges
    );

    let request = Request::new(cli.algorithm, cli.start, cli.goal).with_queue(cli.queue);
    let now = std::time::Instant::now();
    let solution = solve(&graph, &request)
        .with_context(|| format!("running {}", cli.algorithm.name()))?;
    tracing::info!(elapsed_ms = now.elapsed().as_secs_f64() * 1000.0, "solved");

    if let Solution::Mst(mst) = solution {
        if !mst.spans_all() {
            tracing::warn!(
                spanned = mst.spanned,
                vertices = mst.num_vertices,
                "graph is disconnected, total covers the start component only"
            );
        }
    }
    println!("{}", solution);

    Ok(())
}
