//! Structural accuracy of an estimated DAG against the ground truth

use crate::error::{SynthError, SynthResult};
use crate::graph::WeightedAdjacency;
use serde::Serialize;
use std::collections::HashSet;

/// Edge-level comparison of an estimate with the true graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accuracy {
    /// False discovery rate: (reversed + false positive) / estimated edges
    pub fdr: f64,
    /// True positive rate: correctly oriented / true edges
    pub tpr: f64,
    /// False positive rate: (reversed + false positive) / true non-edges
    pub fpr: f64,
    /// Structural Hamming distance: missing + extra skeleton edges + reversals
    pub shd: usize,
    /// Number of estimated edges
    pub nnz: usize,
}

/// Compare `estimate` with `truth`.
///
/// An estimated edge is any entry with `|w| > threshold`. A reversed edge
/// counts once toward the SHD, not as one missing plus one extra.
pub fn count_accuracy(
    truth: &WeightedAdjacency,
    estimate: &WeightedAdjacency,
    threshold: f64,
) -> SynthResult<Accuracy> {
    if !truth.is_square() || !estimate.is_square() {
        return Err(SynthError::invalid("adjacency matrices must be square"));
    }
    if truth.n_nodes() != estimate.n_nodes() {
        return Err(SynthError::invalid(format!(
            "estimate has {} nodes but the truth has {}",
            estimate.n_nodes(),
            truth.n_nodes()
        )));
    }
    if !(threshold.is_finite() && threshold >= 0.0) {
        return Err(SynthError::invalid("threshold must be finite and non-negative"));
    }

    let d = truth.n_nodes();
    let cond = edge_set(truth, 0.0);
    let pred = edge_set(estimate, threshold);

    let true_pos = pred.iter().filter(|e| cond.contains(e)).count();
    let reverse = pred
        .iter()
        .filter(|&&(p, c)| !cond.contains(&(p, c)) && cond.contains(&(c, p)))
        .count();
    let false_pos = pred
        .iter()
        .filter(|&&(p, c)| !cond.contains(&(p, c)) && !cond.contains(&(c, p)))
        .count();

    let cond_neg = (d * d.saturating_sub(1) / 2).saturating_sub(cond.len());
    let fdr = (reverse + false_pos) as f64 / pred.len().max(1) as f64;
    let tpr = true_pos as f64 / cond.len().max(1) as f64;
    let fpr = (reverse + false_pos) as f64 / cond_neg.max(1) as f64;

    let cond_skeleton = skeleton(&cond);
    let pred_skeleton = skeleton(&pred);
    let extra = pred_skeleton.difference(&cond_skeleton).count();
    let missing = cond_skeleton.difference(&pred_skeleton).count();
    let shd = extra + missing + reverse;

    Ok(Accuracy {
        fdr,
        tpr,
        fpr,
        shd,
        nnz: pred.len(),
    })
}

fn edge_set(w: &WeightedAdjacency, threshold: f64) -> HashSet<(usize, usize)> {
    w.matrix()
        .indexed_iter()
        .filter(|&((p, c), v)| p != c && v.abs() > threshold)
        .map(|(idx, _)| idx)
        .collect()
}

/// Undirected view, each pair stored as `(min, max)`
fn skeleton(edges: &HashSet<(usize, usize)>) -> HashSet<(usize, usize)> {
    edges.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect()
}
