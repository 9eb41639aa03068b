//! Estimator trait: the seam to external causal-discovery algorithms

use crate::error::SynthResult;
use crate::graph::{SampleMatrix, VariableTypes, WeightedAdjacency};

/// A causal-discovery model that can be fitted to mixed data
///
/// Implementations wrap a LiNGAM-family algorithm (e.g. LiM). After a
/// successful [`fit`](Estimator::fit), [`adjacency_matrix`](Estimator::adjacency_matrix)
/// exposes the estimate in the same row-to-column convention as the ground truth.
///
/// # Example
///
/// ```ignore
/// struct MyLim { estimate: Option<WeightedAdjacency> }
///
/// impl Estimator for MyLim {
///     fn fit(&mut self, x: &SampleMatrix, var_types: &VariableTypes) -> SynthResult<()> {
///         self.estimate = Some(run_lim(x, var_types)?);
///         Ok(())
///     }
///
///     fn adjacency_matrix(&self) -> Option<&WeightedAdjacency> {
///         self.estimate.as_ref()
///     }
/// }
/// ```
pub trait Estimator {
    /// Human-readable name, used in logs and reports
    fn name(&self) -> &str {
        "estimator"
    }

    /// Fit the model to `x`, whose columns are typed by `var_types`
    fn fit(&mut self, x: &SampleMatrix, var_types: &VariableTypes) -> SynthResult<()>;

    /// The fitted adjacency matrix, if the model has been fitted
    fn adjacency_matrix(&self) -> Option<&WeightedAdjacency>;
}
