//! Random DAG structure generation

use crate::error::{SynthError, SynthResult};
use crate::graph::AdjacencyPattern;
use rand::distributions::WeightedIndex;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Random-graph family used to place edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GraphModel {
    /// Uniform placement among all permissible parent -> child pairs
    #[default]
    #[serde(rename = "ER")]
    ErdosRenyi,
    /// Preferential attachment: parents with more edges attract more children
    #[serde(rename = "SF")]
    ScaleFree,
}

impl GraphModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphModel::ErdosRenyi => "ER",
            GraphModel::ScaleFree => "SF",
        }
    }
}

impl fmt::Display for GraphModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphModel {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ER" => Ok(GraphModel::ErdosRenyi),
            "SF" => Ok(GraphModel::ScaleFree),
            other => Err(SynthError::invalid(format!("unknown graph type: {}", other))),
        }
    }
}

/// Maximum number of edges a DAG on `n_nodes` nodes can carry
pub fn max_dag_edges(n_nodes: usize) -> usize {
    n_nodes * n_nodes.saturating_sub(1) / 2
}

/// Generate a random DAG with exactly `n_edges` edges.
///
/// A uniform permutation of the nodes fixes the topological order; edges are
/// then drawn without replacement among the pairs that respect it, so the
/// result is acyclic by construction.
pub fn generate_dag<R: Rng + ?Sized>(
    n_nodes: usize,
    n_edges: usize,
    model: GraphModel,
    rng: &mut R,
) -> SynthResult<AdjacencyPattern> {
    if n_nodes < 1 {
        return Err(SynthError::invalid("a DAG needs at least one node"));
    }
    let max_edges = max_dag_edges(n_nodes);
    if n_edges > max_edges {
        return Err(SynthError::invalid(format!(
            "{} edges requested but a DAG on {} nodes holds at most {}",
            n_edges, n_nodes, max_edges
        )));
    }

    let mut order: Vec<usize> = (0..n_nodes).collect();
    order.shuffle(rng);

    let positions = match model {
        GraphModel::ErdosRenyi => erdos_renyi_pairs(n_nodes, n_edges, rng),
        GraphModel::ScaleFree => scale_free_pairs(n_nodes, n_edges, rng)?,
    };

    let mut pattern = AdjacencyPattern::empty(n_nodes);
    for (i, j) in positions {
        pattern.set_edge(order[i], order[j]);
    }

    tracing::debug!(
        n_nodes,
        n_edges,
        model = %model,
        "generated DAG structure"
    );
    Ok(pattern)
}

/// Uniform sample of `n_edges` position pairs `(i, j)` with `i < j`
fn erdos_renyi_pairs<R: Rng + ?Sized>(
    n_nodes: usize,
    n_edges: usize,
    rng: &mut R,
) -> Vec<(usize, usize)> {
    index::sample(rng, max_dag_edges(n_nodes), n_edges)
        .into_iter()
        .map(|k| unrank_pair(k, n_nodes))
        .collect()
}

/// Preferential attachment over position pairs.
///
/// A remaining pair `(i, j)` is drawn with weight `1 + degree(i)`. Since the
/// weight depends only on the parent, this samples parent `i` with weight
/// `(1 + degree(i)) * free_children(i)` and then a free child uniformly.
fn scale_free_pairs<R: Rng + ?Sized>(
    n_nodes: usize,
    n_edges: usize,
    rng: &mut R,
) -> SynthResult<Vec<(usize, usize)>> {
    let mut free_children: Vec<Vec<usize>> =
        (0..n_nodes).map(|i| ((i + 1)..n_nodes).collect()).collect();
    let mut degree = vec![0usize; n_nodes];
    let mut chosen = Vec::with_capacity(n_edges);

    for _ in 0..n_edges {
        let weights = (0..n_nodes).map(|i| (1 + degree[i]) * free_children[i].len());
        let dist = WeightedIndex::new(weights)
            .map_err(|e| SynthError::invalid(format!("preferential attachment failed: {}", e)))?;
        let i = rng.sample(&dist);
        let slot = rng.gen_range(0..free_children[i].len());
        let j = free_children[i].swap_remove(slot);
        degree[i] += 1;
        degree[j] += 1;
        chosen.push((i, j));
    }

    Ok(chosen)
}

/// Map a row-major index over the strict upper triangle back to `(i, j)`
fn unrank_pair(mut k: usize, n: usize) -> (usize, usize) {
    let mut i = 0;
    loop {
        let row_len = n - 1 - i;
        if k < row_len {
            return (i, i + 1 + k);
        }
        k -= row_len;
        i += 1;
    }
}
