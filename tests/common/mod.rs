//! Common test utilities for trial harness tests
//!
//! Provides mock estimators standing in for an external LiM fit.

pub mod mock_estimator;

#[allow(unused_imports)]
pub use mock_estimator::{EmptyEstimator, OracleEstimator, UnfittedEstimator};
