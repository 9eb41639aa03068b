//! Synthetic ground-truth generators
//!
//! Used in dependency order: [`generate_dag`] produces a structure,
//! [`assign_parameters`] weights its edges, and [`simulate_mixed_sem`] draws
//! samples from the resulting linear SEM. Every generator takes the caller's
//! RNG so a single seed reproduces the whole pipeline.

mod dag;
mod params;
mod sem;

pub use dag::{generate_dag, max_dag_edges, GraphModel};
pub use params::{assign_parameters, SignPolicy, WeightConfig};
pub use sem::{
    simulate_mixed_sem, simulate_mixed_sem_with, Discretization, NoiseFamily, SemConfig, SemType,
};
