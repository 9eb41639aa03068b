//! Edge weight assignment

use crate::error::{SynthError, SynthResult};
use crate::graph::{AdjacencyPattern, WeightedAdjacency};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How edge weight signs are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignPolicy {
    /// +1 or -1 with equal probability
    #[default]
    Random,
    /// Always positive
    Positive,
}

/// Distribution of edge weights: magnitude uniform in `[low, high]`, then a sign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub low: f64,
    pub high: f64,
    pub sign: SignPolicy,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            low: 0.5,
            high: 2.0,
            sign: SignPolicy::Random,
        }
    }
}

impl WeightConfig {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            ..Self::default()
        }
    }

    pub fn with_sign(mut self, sign: SignPolicy) -> Self {
        self.sign = sign;
        self
    }

    /// Magnitudes must be strictly positive so the weight support matches the pattern
    pub fn validate(&self) -> SynthResult<()> {
        if !(self.low.is_finite() && self.high.is_finite()) {
            return Err(SynthError::invalid("weight range must be finite"));
        }
        if self.low <= 0.0 || self.low > self.high {
            return Err(SynthError::invalid(format!(
                "weight range must satisfy 0 < low <= high, got [{}, {}]",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Assign a random weight to every edge of `adj`.
///
/// Edges are visited in row-major order. Every other entry stays zero.
pub fn assign_parameters<R: Rng + ?Sized>(
    adj: &AdjacencyPattern,
    config: &WeightConfig,
    rng: &mut R,
) -> SynthResult<WeightedAdjacency> {
    config.validate()?;
    adj.validate_dag()?;

    let mut weighted = WeightedAdjacency::zeros(adj.n_nodes());
    for (parent, child) in adj.edges() {
        let magnitude = rng.gen_range(config.low..=config.high);
        let sign = match config.sign {
            SignPolicy::Random if rng.gen_bool(0.5) => -1.0,
            _ => 1.0,
        };
        weighted.set_weight(parent, child, sign * magnitude);
    }

    tracing::debug!(
        n_nodes = adj.n_nodes(),
        n_edges = adj.edge_count(),
        low = config.low,
        high = config.high,
        "assigned edge weights"
    );
    Ok(weighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate_dag, GraphModel};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn support_matches_pattern() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let dag = generate_dag(6, 8, GraphModel::ErdosRenyi, &mut rng).unwrap();
            let w = assign_parameters(&dag, &WeightConfig::default(), &mut rng).unwrap();
            assert_eq!(w.support(), dag);
        }
    }

    #[test]
    fn magnitudes_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let dag = generate_dag(8, 20, GraphModel::ErdosRenyi, &mut rng).unwrap();
        let w = assign_parameters(&dag, &WeightConfig::default(), &mut rng).unwrap();
        for (p, c) in dag.edges() {
            let m = w.weight(p, c).abs();
            assert!((0.5..=2.0).contains(&m), "weight {} out of range", m);
        }
    }

    #[test]
    fn positive_policy_never_flips_sign() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let dag = generate_dag(6, 15, GraphModel::ErdosRenyi, &mut rng).unwrap();
        let config = WeightConfig::default().with_sign(SignPolicy::Positive);
        let w = assign_parameters(&dag, &config, &mut rng).unwrap();
        assert!(w.matrix().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn random_policy_produces_both_signs() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let dag = generate_dag(10, 45, GraphModel::ErdosRenyi, &mut rng).unwrap();
        let w = assign_parameters(&dag, &WeightConfig::default(), &mut rng).unwrap();
        assert!(w.matrix().iter().any(|&v| v < 0.0));
        assert!(w.matrix().iter().any(|&v| v > 0.0));
    }

    #[test]
    fn cyclic_pattern_is_rejected() {
        let cyclic = AdjacencyPattern::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = assign_parameters(&cyclic, &WeightConfig::default(), &mut rng).unwrap_err();
        assert!(matches!(err, SynthError::InvalidArgument(_)));
    }

    #[test]
    fn bad_range_is_rejected() {
        let dag = AdjacencyPattern::empty(2);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(assign_parameters(&dag, &WeightConfig::new(2.0, 1.0), &mut rng).is_err());
        assert!(assign_parameters(&dag, &WeightConfig::new(0.0, 1.0), &mut rng).is_err());
    }
}
