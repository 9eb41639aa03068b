//! Trial configuration, loadable from YAML

use crate::error::SynthResult;
use crate::generate::{Discretization, GraphModel, SemConfig, SemType, WeightConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Parameters of one generate-fit-evaluate trial
///
/// Every field has a default, so a YAML document only needs the fields it
/// overrides:
///
/// ```yaml
/// n_features: 5
/// n_edges: 6
/// graph_type: SF
/// seed: 7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialConfig {
    pub n_samples: usize,
    pub n_features: usize,
    pub n_edges: usize,
    pub graph_type: GraphModel,
    pub sem_type: SemType,
    /// Drawn from entropy and recorded on the trial when absent
    pub seed: Option<u64>,
    /// Number of discrete variables; a random count in `1..n_features` when absent
    pub n_discrete: Option<usize>,
    pub weights: WeightConfig,
    pub discretization: Discretization,
    pub noise_scale: Option<Vec<f64>>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            n_samples: 1000,
            n_features: 2,
            n_edges: 1,
            graph_type: GraphModel::ErdosRenyi,
            sem_type: SemType::MixedRandomIDis,
            seed: None,
            n_discrete: None,
            weights: WeightConfig::default(),
            discretization: Discretization::Median,
            noise_scale: None,
        }
    }
}

impl TrialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document.
    ///
    /// Unknown `graph_type` or `sem_type` names are argument errors, like
    /// their `FromStr` parses; malformed YAML is a config error.
    pub fn from_yaml_str(yaml: &str) -> SynthResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if let Some(name) = value.get("graph_type").and_then(serde_yaml::Value::as_str) {
            GraphModel::from_str(name)?;
        }
        if let Some(name) = value.get("sem_type").and_then(serde_yaml::Value::as_str) {
            SemType::from_str(name)?;
        }
        Ok(serde_yaml::from_value(value)?)
    }

    pub fn from_path(path: &Path) -> SynthResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn to_yaml(&self) -> SynthResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_graph(mut self, n_features: usize, n_edges: usize, graph_type: GraphModel) -> Self {
        self.n_features = n_features;
        self.n_edges = n_edges;
        self.graph_type = graph_type;
        self
    }

    pub fn with_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    pub fn with_sem_type(mut self, sem_type: SemType) -> Self {
        self.sem_type = sem_type;
        self
    }

    pub fn with_discrete_count(mut self, n_discrete: usize) -> Self {
        self.n_discrete = Some(n_discrete);
        self
    }

    /// Simulator settings carried by this config
    pub fn sem_config(&self) -> SemConfig {
        SemConfig {
            sem_type: self.sem_type,
            noise_scale: self.noise_scale.clone(),
            discretization: self.discretization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;
    use crate::generate::SignPolicy;

    #[test]
    fn defaults_match_reference_trial() {
        let config = TrialConfig::default();
        assert_eq!(config.n_samples, 1000);
        assert_eq!(config.n_features, 2);
        assert_eq!(config.n_edges, 1);
        assert_eq!(config.graph_type, GraphModel::ErdosRenyi);
        assert_eq!(config.sem_type, SemType::MixedRandomIDis);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = TrialConfig::from_yaml_str(
            "n_features: 5\nn_edges: 6\ngraph_type: SF\nseed: 7\nweights:\n  sign: positive\n",
        )
        .unwrap();
        assert_eq!(config.n_features, 5);
        assert_eq!(config.graph_type, GraphModel::ScaleFree);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.weights.sign, SignPolicy::Positive);
        assert_eq!(config.weights.low, 0.5);
        assert_eq!(config.n_samples, 1000);
    }

    #[test]
    fn unknown_sem_type_is_an_invalid_argument() {
        let err = TrialConfig::from_yaml_str("sem_type: mixed_random\n").unwrap_err();
        assert!(matches!(err, SynthError::InvalidArgument(_)), "{:?}", err);
    }

    #[test]
    fn unknown_graph_type_is_an_invalid_argument() {
        let err = TrialConfig::from_yaml_str("n_features: 3\ngraph_type: BA\n").unwrap_err();
        assert!(matches!(err, SynthError::InvalidArgument(_)), "{:?}", err);
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let err = TrialConfig::from_yaml_str("n_samples: [1, 2\n").unwrap_err();
        assert!(matches!(err, SynthError::Config(_)), "{:?}", err);

        let err = TrialConfig::from_yaml_str("n_samples: lots\n").unwrap_err();
        assert!(matches!(err, SynthError::Config(_)), "{:?}", err);
    }

    #[test]
    fn yaml_round_trip() {
        let config = TrialConfig::new()
            .with_seed(3)
            .with_graph(4, 3, GraphModel::ScaleFree)
            .with_sem_type(SemType::Laplace);
        let yaml = config.to_yaml().unwrap();
        assert_eq!(TrialConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
