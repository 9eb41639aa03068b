//! Estimator interface and scoring against ground truth

mod accuracy;
mod traits;

pub use accuracy::{count_accuracy, Accuracy};
pub use traits::Estimator;
