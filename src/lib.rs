//! causal-synth: Synthetic Ground Truth for Causal Discovery
//!
//! Generates random DAGs, weights their edges, and simulates linear structural
//! equation models over a mix of continuous and binary variables. The output
//! feeds LiNGAM-family estimators such as LiM, whose fitted adjacency matrix
//! can then be scored against the known truth.
//!
//! # Core Concepts
//!
//! - **AdjacencyPattern**: binary DAG structure, `[[parent, child]]` convention
//! - **WeightedAdjacency**: edge weights on the same support
//! - **VariableTypes**: continuous/discrete tag per node
//! - **SampleMatrix**: simulated rows, discrete columns in {0, 1}
//!
//! # Example
//!
//! ```
//! use causal_synth::{
//!     assign_parameters, generate_dag, simulate_mixed_sem, GraphModel, SemType,
//!     VariableTypes, WeightConfig,
//! };
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let b = generate_dag(4, 3, GraphModel::ErdosRenyi, &mut rng).unwrap();
//! let w = assign_parameters(&b, &WeightConfig::default(), &mut rng).unwrap();
//! let types = VariableTypes::with_discrete(4, &[1]).unwrap();
//! let x = simulate_mixed_sem(&w, 100, SemType::MixedRandomIDis, &types, &mut rng).unwrap();
//! assert_eq!(x.n_samples(), 100);
//! ```

mod config;
mod error;
pub mod estimate;
pub mod generate;
mod graph;
pub mod logging;
mod trial;

pub use config::TrialConfig;
pub use error::{SynthError, SynthResult};
pub use estimate::{count_accuracy, Accuracy, Estimator};
pub use generate::{
    assign_parameters, generate_dag, max_dag_edges, simulate_mixed_sem, simulate_mixed_sem_with,
    Discretization, GraphModel, NoiseFamily, SemConfig, SemType, SignPolicy, WeightConfig,
};
pub use graph::{AdjacencyPattern, SampleMatrix, VariableType, VariableTypes, WeightedAdjacency};
pub use trial::{Trial, TrialReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
