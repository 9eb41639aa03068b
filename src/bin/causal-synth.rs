//! causal-synth CLI: synthetic DAGs and mixed SEM data.
//!
//! Usage:
//!   causal-synth dag --nodes N --edges E [--graph-type ER] [--seed S]
//!   causal-synth simulate [--config trial.yaml] [overrides...] [--out data.json]

use causal_synth::logging::{self, Verbosity};
use causal_synth::{generate_dag, GraphModel, SemType, Trial, TrialConfig};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "causal-synth",
    version,
    about = "Synthetic ground truth for causal discovery on mixed data"
)]
struct Cli {
    /// Log generation steps at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Only report warnings and errors
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random DAG and print its adjacency pattern
    Dag {
        #[arg(long)]
        nodes: usize,
        #[arg(long)]
        edges: usize,
        /// Random graph model (ER or SF)
        #[arg(long, default_value = "ER")]
        graph_type: GraphModel,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the full pipeline and write ground truth plus samples as JSON
    Simulate {
        /// YAML trial config; flags below override its fields
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        samples: Option<usize>,
        #[arg(long)]
        features: Option<usize>,
        #[arg(long)]
        edges: Option<usize>,
        #[arg(long)]
        graph_type: Option<GraphModel>,
        #[arg(long)]
        sem_type: Option<SemType>,
        #[arg(long)]
        seed: Option<u64>,
        /// Number of discrete variables
        #[arg(long)]
        discrete: Option<usize>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// JSON document written by `simulate`
#[derive(Serialize)]
struct SimulationOutput {
    seed: u64,
    graph_type: String,
    sem_type: String,
    b_true: Vec<Vec<u8>>,
    w_true: Vec<Vec<f64>>,
    dis_con: Vec<u8>,
    x: Vec<Vec<f64>>,
}

fn cmd_dag(nodes: usize, edges: usize, graph_type: GraphModel, seed: Option<u64>) -> i32 {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dag = match generate_dag(nodes, edges, graph_type, &mut rng) {
        Ok(dag) => dag,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    tracing::info!(seed, "generated DAG");
    match serde_json::to_string(&dag.to_rows()) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_simulate(
    config_path: Option<PathBuf>,
    samples: Option<usize>,
    features: Option<usize>,
    edges: Option<usize>,
    graph_type: Option<GraphModel>,
    sem_type: Option<SemType>,
    seed: Option<u64>,
    discrete: Option<usize>,
    out: Option<PathBuf>,
) -> i32 {
    let mut config = match config_path {
        Some(path) => match TrialConfig::from_path(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: cannot load '{}': {}", path.display(), e);
                return 1;
            }
        },
        None => TrialConfig::default(),
    };
    if let Some(v) = samples {
        config.n_samples = v;
    }
    if let Some(v) = features {
        config.n_features = v;
    }
    if let Some(v) = edges {
        config.n_edges = v;
    }
    if let Some(v) = graph_type {
        config.graph_type = v;
    }
    if let Some(v) = sem_type {
        config.sem_type = v;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if discrete.is_some() {
        config.n_discrete = discrete;
    }

    let trial = match Trial::generate(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let output = SimulationOutput {
        seed: trial.seed,
        graph_type: config.graph_type.to_string(),
        sem_type: config.sem_type.to_string(),
        b_true: trial.b_true.to_rows(),
        w_true: trial.w_true.to_rows(),
        dis_con: trial.var_types.to_flags(),
        x: trial.x.to_rows(),
    };
    let json = match serde_json::to_string_pretty(&output) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match out {
        Some(path) => match std::fs::write(&path, json) {
            Ok(()) => {
                eprintln!(
                    "Wrote {} samples x {} variables to {}",
                    config.n_samples,
                    config.n_features,
                    path.display()
                );
                0
            }
            Err(e) => {
                eprintln!("Error: cannot write '{}': {}", path.display(), e);
                1
            }
        },
        None => {
            println!("{}", json);
            0
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let code = match cli.command {
        Commands::Dag {
            nodes,
            edges,
            graph_type,
            seed,
        } => cmd_dag(nodes, edges, graph_type, seed),
        Commands::Simulate {
            config,
            samples,
            features,
            edges,
            graph_type,
            sem_type,
            seed,
            discrete,
            out,
        } => cmd_simulate(
            config, samples, features, edges, graph_type, sem_type, seed, discrete, out,
        ),
    };
    std::process::exit(code);
}
