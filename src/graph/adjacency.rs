//! Binary and weighted adjacency matrices over a DAG
//!
//! Both matrices use the row-to-column convention: entry `[[parent, child]]`
//! is nonzero when `parent -> child` is an edge.

use crate::error::{SynthError, SynthResult};
use ndarray::Array2;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Binary adjacency pattern of a directed graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyPattern {
    matrix: Array2<u8>,
}

impl AdjacencyPattern {
    /// Create an edgeless pattern over `n_nodes` nodes
    pub fn empty(n_nodes: usize) -> Self {
        Self {
            matrix: Array2::zeros((n_nodes, n_nodes)),
        }
    }

    /// Wrap an existing matrix; any nonzero entry becomes an edge.
    ///
    /// No structural validation happens here. Use [`validate_dag`](Self::validate_dag)
    /// before relying on squareness or acyclicity.
    pub fn from_matrix(matrix: Array2<u8>) -> Self {
        Self {
            matrix: matrix.mapv(|v| u8::from(v != 0)),
        }
    }

    /// Build a pattern from row slices
    pub fn from_rows(rows: &[Vec<u8>]) -> SynthResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(SynthError::invalid("adjacency rows have unequal lengths"));
        }
        let flat: Vec<u8> = rows.iter().flatten().copied().collect();
        let matrix = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| SynthError::invalid(format!("bad adjacency shape: {}", e)))?;
        Ok(Self::from_matrix(matrix))
    }

    pub(crate) fn set_edge(&mut self, parent: usize, child: usize) {
        self.matrix[[parent, child]] = 1;
    }

    /// Number of nodes (rows)
    pub fn n_nodes(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_square(&self) -> bool {
        self.matrix.nrows() == self.matrix.ncols()
    }

    pub fn has_edge(&self, parent: usize, child: usize) -> bool {
        self.matrix
            .get((parent, child))
            .map(|&v| v != 0)
            .unwrap_or(false)
    }

    /// Number of edges (nonzero entries)
    pub fn edge_count(&self) -> usize {
        self.matrix.iter().filter(|&&v| v != 0).count()
    }

    /// All edges as `(parent, child)` pairs in row-major order
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.matrix
            .indexed_iter()
            .filter(|(_, &v)| v != 0)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Parents of `child` in ascending index order
    pub fn parents(&self, child: usize) -> Vec<usize> {
        (0..self.matrix.nrows())
            .filter(|&p| self.has_edge(p, child))
            .collect()
    }

    /// Topological order of the nodes, or `None` if the graph has a cycle
    /// or is not square.
    pub fn topological_order(&self) -> Option<Vec<usize>> {
        if !self.is_square() {
            return None;
        }
        kahn_order(self.n_nodes(), |p, c| self.matrix[[p, c]] != 0)
    }

    pub fn is_acyclic(&self) -> bool {
        self.topological_order().is_some()
    }

    /// Check that the pattern is a square, acyclic adjacency matrix
    pub fn validate_dag(&self) -> SynthResult<()> {
        if !self.is_square() {
            return Err(SynthError::invalid(format!(
                "adjacency matrix must be square, got {}x{}",
                self.matrix.nrows(),
                self.matrix.ncols()
            )));
        }
        if !self.is_acyclic() {
            return Err(SynthError::invalid("adjacency matrix contains a cycle"));
        }
        Ok(())
    }

    pub fn matrix(&self) -> &Array2<u8> {
        &self.matrix
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.matrix.outer_iter().map(|row| row.to_vec()).collect()
    }
}

/// Real-valued adjacency matrix; nonzero entries are edge weights
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedAdjacency {
    matrix: Array2<f64>,
}

impl WeightedAdjacency {
    pub fn zeros(n_nodes: usize) -> Self {
        Self {
            matrix: Array2::zeros((n_nodes, n_nodes)),
        }
    }

    /// Wrap an existing matrix without validation
    pub fn from_matrix(matrix: Array2<f64>) -> Self {
        Self { matrix }
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> SynthResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(SynthError::invalid("adjacency rows have unequal lengths"));
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let matrix = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| SynthError::invalid(format!("bad adjacency shape: {}", e)))?;
        Ok(Self { matrix })
    }

    pub(crate) fn set_weight(&mut self, parent: usize, child: usize, weight: f64) {
        self.matrix[[parent, child]] = weight;
    }

    pub fn n_nodes(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_square(&self) -> bool {
        self.matrix.nrows() == self.matrix.ncols()
    }

    /// Weight of `parent -> child` (0.0 when absent or out of range)
    pub fn weight(&self, parent: usize, child: usize) -> f64 {
        self.matrix.get((parent, child)).copied().unwrap_or(0.0)
    }

    /// Binary pattern of the nonzero entries
    pub fn support(&self) -> AdjacencyPattern {
        AdjacencyPattern {
            matrix: self.matrix.mapv(|w| u8::from(w != 0.0)),
        }
    }

    /// Parents of `child` with their edge weights, ascending by index
    pub fn parents(&self, child: usize) -> Vec<(usize, f64)> {
        self.matrix
            .column(child)
            .iter()
            .enumerate()
            .filter(|(_, &w)| w != 0.0)
            .map(|(p, &w)| (p, w))
            .collect()
    }

    pub fn topological_order(&self) -> Option<Vec<usize>> {
        if !self.is_square() {
            return None;
        }
        kahn_order(self.n_nodes(), |p, c| self.matrix[[p, c]] != 0.0)
    }

    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.matrix.outer_iter().map(|row| row.to_vec()).collect()
    }
}

/// Kahn's algorithm, always releasing the smallest ready index first so the
/// order is deterministic.
fn kahn_order(n: usize, has_edge: impl Fn(usize, usize) -> bool) -> Option<Vec<usize>> {
    let mut in_degree = vec![0usize; n];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for p in 0..n {
        for c in 0..n {
            if has_edge(p, c) {
                in_degree[c] += 1;
                children[p].push(c);
            }
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> =
        (0..n).filter(|&i| in_degree[i] == 0).map(Reverse).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(Reverse(node)) = ready.pop() {
        order.push(node);
        for &child in &children[node] {
            in_degree[child] -= 1;
            if in_degree[child] == 0 {
                ready.push(Reverse(child));
            }
        }
    }

    (order.len() == n).then_some(order)
}
