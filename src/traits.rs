//! Core traits for estimators.
//!
//! These traits define the API contracts for the clustering algorithms.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for unsupervised learning models.
///
/// # Examples
///
/// ```
/// use agrupar::prelude::*;
///
/// // Two clear clusters in the unit square
/// let data = Matrix::from_vec(4, 2, vec![
///     0.1, 0.1, 0.12, 0.08,
///     0.9, 0.9, 0.88, 0.92,
/// ]).unwrap();
///
/// let mut art = FuzzyArt::new(0.9, 0.001, 1.0).unwrap();
/// art.fit(&data).unwrap();
/// let labels = art.predict(&data);
/// assert_eq!(labels.len(), 4);
/// ```
pub trait UnsupervisedEstimator {
    /// The type of labels/clusters produced.
    type Labels;

    /// Fits the model to data, one sample per matrix row.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (empty data, dimension mismatch,
    /// etc.).
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()>;

    /// Predicts cluster assignments for each row.
    fn predict(&self, x: &Matrix<f32>) -> Self::Labels;
}
