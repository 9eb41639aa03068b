//! Simulated observations

use ndarray::{Array2, ArrayView1};

/// S×N matrix of simulated data, one row per sample and one column per node
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    data: Array2<f64>,
}

impl SampleMatrix {
    pub fn new(data: Array2<f64>) -> Self {
        Self { data }
    }

    pub fn n_samples(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.data.ncols()
    }

    pub fn column(&self, j: usize) -> ArrayView1<'_, f64> {
        self.data.column(j)
    }

    /// Number of distinct values in column `j`
    pub fn distinct_values(&self, j: usize) -> usize {
        let mut values: Vec<f64> = self.data.column(j).to_vec();
        values.sort_by(f64::total_cmp);
        values.dedup();
        values.len()
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }
}
