//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use agrupar::prelude::*;
//! ```

pub use crate::art::{complement_code, Classification, FuzzyArt};
pub use crate::dataset::{pretrain_file, pretrain_from_dir, pretrain_from_dirs, PretrainReport};
pub use crate::error::{AgruparError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::store::{LabelMap, ModelStore};
pub use crate::traits::UnsupervisedEstimator;
