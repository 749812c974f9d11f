//! Agrupar: online incremental Fuzzy ART clustering in pure Rust.
//!
//! Agrupar assigns fixed-length feature vectors to discovered categories
//! without knowing the number of categories in advance. A single vigilance
//! parameter trades off between reusing existing categories and minting new
//! ones, which makes the engine a good fit for open-set recognition tasks
//! such as learning hand gestures live from a camera feed.
//!
//! # Quick Start
//!
//! ```
//! use agrupar::prelude::*;
//!
//! // Vigilance 0.9, choice parameter 0.001, fast learning.
//! let mut art = FuzzyArt::new(0.9, 0.001, 1.0).unwrap();
//! let mut labels = LabelMap::new();
//!
//! // Each training vector lands in an existing or new category.
//! let id = art.train(&Vector::from_slice(&[0.1, 0.1])).unwrap();
//! labels.insert(id, "low");
//! let id = art.train(&Vector::from_slice(&[0.9, 0.9])).unwrap();
//! labels.insert(id, "high");
//! assert_eq!(art.n_categories(), 2);
//!
//! // Classification is read-only and has explicit "don't know" outcomes.
//! let result = art.classify(&Vector::from_slice(&[0.9, 0.85])).unwrap();
//! assert_eq!(labels.display_name(result.category().unwrap()), "high");
//! let result = art.classify(&Vector::from_slice(&[0.5, 0.5])).unwrap();
//! assert_eq!(result, Classification::Unknown);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`art`]: The Fuzzy ART engine and classification outcomes
//! - [`store`]: CSV persistence for prototypes and category labels
//! - [`dataset`]: Bulk pre-training from labeled dataset files
//! - [`error`]: Error taxonomy
//! - [`traits`]: Estimator trait seam

pub mod art;
pub mod dataset;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod store;
pub mod traits;

pub use art::{complement_code, Classification, FuzzyArt};
pub use error::{AgruparError, Result};
pub use primitives::{Matrix, Vector};
pub use store::{LabelMap, ModelStore};
pub use traits::UnsupervisedEstimator;
