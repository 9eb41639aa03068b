//! Mock estimators for trial tests
//!
//! None of these learn anything from the data. They exercise the
//! `Estimator` seam with known answers so scoring can be checked exactly.

use causal_synth::{Estimator, SampleMatrix, SynthResult, VariableTypes, WeightedAdjacency};

/// Returns a fixed matrix, recording what it was fitted on
pub struct OracleEstimator {
    answer: WeightedAdjacency,
    fitted: Option<WeightedAdjacency>,
    /// `(n_samples, n_features, n_discrete)` seen by the last fit
    pub seen: Option<(usize, usize, usize)>,
}

impl OracleEstimator {
    pub fn new(answer: WeightedAdjacency) -> Self {
        Self {
            answer,
            fitted: None,
            seen: None,
        }
    }
}

impl Estimator for OracleEstimator {
    fn name(&self) -> &str {
        "oracle"
    }

    fn fit(&mut self, x: &SampleMatrix, var_types: &VariableTypes) -> SynthResult<()> {
        self.seen = Some((x.n_samples(), x.n_features(), var_types.discrete_count()));
        self.fitted = Some(self.answer.clone());
        Ok(())
    }

    fn adjacency_matrix(&self) -> Option<&WeightedAdjacency> {
        self.fitted.as_ref()
    }
}

/// Always estimates the empty graph
#[derive(Default)]
pub struct EmptyEstimator {
    fitted: Option<WeightedAdjacency>,
}

impl Estimator for EmptyEstimator {
    fn name(&self) -> &str {
        "empty"
    }

    fn fit(&mut self, x: &SampleMatrix, _var_types: &VariableTypes) -> SynthResult<()> {
        self.fitted = Some(WeightedAdjacency::zeros(x.n_features()));
        Ok(())
    }

    fn adjacency_matrix(&self) -> Option<&WeightedAdjacency> {
        self.fitted.as_ref()
    }
}

/// Accepts the data but never exposes an estimate
pub struct UnfittedEstimator;

impl Estimator for UnfittedEstimator {
    fn fit(&mut self, _x: &SampleMatrix, _var_types: &VariableTypes) -> SynthResult<()> {
        Ok(())
    }

    fn adjacency_matrix(&self) -> Option<&WeightedAdjacency> {
        None
    }
}
