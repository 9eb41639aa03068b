//! Core data structures: adjacency matrices, variable types and samples

mod adjacency;
mod samples;
mod variable;


pub use adjacency::{AdjacencyPattern, WeightedAdjacency};
pub use samples::SampleMatrix;
pub use variable::{VariableType, VariableTypes};
