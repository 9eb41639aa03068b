//! Per-variable discrete/continuous designation

use crate::error::{SynthError, SynthResult};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Whether a variable is real-valued or binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    Continuous,
    Discrete,
}

impl VariableType {
    /// Flag used by the LiM `dis_con` encoding: 1 continuous, 0 discrete
    pub fn flag(self) -> u8 {
        match self {
            VariableType::Continuous => 1,
            VariableType::Discrete => 0,
        }
    }
}

/// Type tag for every node of a graph, indexed by node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableTypes(Vec<VariableType>);

impl VariableTypes {
    pub fn new(types: Vec<VariableType>) -> Self {
        Self(types)
    }

    pub fn all_continuous(n: usize) -> Self {
        Self(vec![VariableType::Continuous; n])
    }

    /// `n` variables, the listed indices discrete and the rest continuous
    pub fn with_discrete(n: usize, discrete: &[usize]) -> SynthResult<Self> {
        let mut types = vec![VariableType::Continuous; n];
        for &i in discrete {
            let slot = types.get_mut(i).ok_or_else(|| {
                SynthError::invalid(format!("discrete index {} out of range for {} variables", i, n))
            })?;
            *slot = VariableType::Discrete;
        }
        Ok(Self(types))
    }

    /// Random mix with at least one variable of each type.
    ///
    /// Draws the discrete count uniformly from `1..n`, then a uniform subset
    /// of that size. Requires `n >= 2`.
    pub fn random_mixed<R: Rng + ?Sized>(n: usize, rng: &mut R) -> SynthResult<Self> {
        if n < 2 {
            return Err(SynthError::invalid(format!(
                "a mixed designation needs at least 2 variables, got {}",
                n
            )));
        }
        let n_discrete = rng.gen_range(1..n);
        Self::random_with_count(n, n_discrete, rng)
    }

    /// Uniform random subset of exactly `n_discrete` discrete variables
    pub fn random_with_count<R: Rng + ?Sized>(
        n: usize,
        n_discrete: usize,
        rng: &mut R,
    ) -> SynthResult<Self> {
        if n_discrete > n {
            return Err(SynthError::invalid(format!(
                "cannot mark {} of {} variables discrete",
                n_discrete, n
            )));
        }
        let chosen: Vec<usize> = index::sample(rng, n, n_discrete).into_vec();
        Self::with_discrete(n, &chosen)
    }

    /// Decode the `dis_con` flag vector (nonzero continuous, zero discrete)
    pub fn from_flags(flags: &[f64]) -> Self {
        Self(
            flags
                .iter()
                .map(|&f| {
                    if f == 0.0 {
                        VariableType::Discrete
                    } else {
                        VariableType::Continuous
                    }
                })
                .collect(),
        )
    }

    pub fn to_flags(&self) -> Vec<u8> {
        self.0.iter().map(|t| t.flag()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<VariableType> {
        self.0.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = VariableType> + '_ {
        self.0.iter().copied()
    }

    pub fn discrete_indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == VariableType::Discrete)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn discrete_count(&self) -> usize {
        self.0.iter().filter(|t| **t == VariableType::Discrete).count()
    }

    pub fn as_slice(&self) -> &[VariableType] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn flags_round_trip_dis_con_encoding() {
        let types = VariableTypes::from_flags(&[1.0, 0.0, 1.0]);
        assert_eq!(types.get(1), Some(VariableType::Discrete));
        assert_eq!(types.to_flags(), vec![1, 0, 1]);
    }

    #[test]
    fn with_discrete_rejects_out_of_range_index() {
        let err = VariableTypes::with_discrete(2, &[2]).unwrap_err();
        assert!(matches!(err, SynthError::InvalidArgument(_)));
    }

    #[test]
    fn random_mixed_keeps_both_types() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let types = VariableTypes::random_mixed(5, &mut rng).unwrap();
            let k = types.discrete_count();
            assert!((1..5).contains(&k), "seed {} gave {} discrete", seed, k);
        }
    }

    #[test]
    fn random_mixed_needs_two_variables() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(VariableTypes::random_mixed(1, &mut rng).is_err());
    }

    #[test]
    fn random_with_count_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let types = VariableTypes::random_with_count(6, 3, &mut rng).unwrap();
        assert_eq!(types.discrete_count(), 3);
        assert_eq!(types.len(), 6);
    }
}
