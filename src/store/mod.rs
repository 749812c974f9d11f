//! Model persistence: the two-table CSV contract.
//!
//! A trained model is stored as two flat files:
//! - a **weights table**: one headerless row per category, the
//!   complement-coded prototype components in insertion order;
//! - a **labels table**: header `id,name`, one row per labeled category.
//!
//! A missing file on load is not an error; it means "start from an empty
//! model". Malformed weight rows are skipped with a logged warning so a
//! hand-edited file can never brick a deployment.

use crate::art::FuzzyArt;
use crate::error::{AgruparError, Result};
use crate::primitives::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Caller-owned mapping from category id to a human-assigned name.
///
/// Ids must stay consistent with ids returned by
/// [`FuzzyArt::train`](crate::art::FuzzyArt::train); the map itself is
/// never consulted by the engine. Iteration order is ascending id.
///
/// # Examples
///
/// ```
/// use agrupar::store::LabelMap;
///
/// let mut labels = LabelMap::new();
/// labels.insert(0, "fist");
/// labels.insert(0, "open_palm"); // last write wins
/// assert_eq!(labels.get(0), Some("open_palm"));
/// assert_eq!(labels.display_name(3), "Unknown (3)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMap {
    names: BTreeMap<usize, String>,
}

impl LabelMap {
    /// Creates an empty label map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a name to a category id. Last write wins.
    pub fn insert(&mut self, id: usize, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    /// Returns the name for a category id, if one was assigned.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Returns true if the id has a name.
    #[must_use]
    pub fn contains(&self, id: usize) -> bool {
        self.names.contains_key(&id)
    }

    /// Returns the number of labeled categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no category is labeled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates labels in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// Returns the display name for an id: the assigned label, or
    /// `"Unknown (id)"` for an unlabeled category.
    #[must_use]
    pub fn display_name(&self, id: usize) -> String {
        match self.names.get(&id) {
            Some(name) => name.clone(),
            None => format!("Unknown ({id})"),
        }
    }
}

/// Persistence boundary for a [`FuzzyArt`] model and its [`LabelMap`].
///
/// Owns the two file paths explicitly; there is no ambient configuration.
///
/// # Examples
///
/// ```no_run
/// use agrupar::prelude::*;
/// use agrupar::store::ModelStore;
///
/// let store = ModelStore::new("model_weights.csv", "model_names.csv");
/// let (mut art, mut labels) = store.load(0.9, 0.001, 1.0)?;
/// let id = art.train(&Vector::from_slice(&[0.1, 0.1]))?;
/// labels.insert(id, "fist");
/// store.save(&art, &labels)?;
/// # Ok::<(), AgruparError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ModelStore {
    weights_path: PathBuf,
    labels_path: PathBuf,
}

impl ModelStore {
    /// Creates a store over the two table paths.
    pub fn new(weights_path: impl Into<PathBuf>, labels_path: impl Into<PathBuf>) -> Self {
        Self {
            weights_path: weights_path.into(),
            labels_path: labels_path.into(),
        }
    }

    /// Path of the weights table.
    #[must_use]
    pub fn weights_path(&self) -> &Path {
        &self.weights_path
    }

    /// Path of the labels table.
    #[must_use]
    pub fn labels_path(&self) -> &Path {
        &self.labels_path
    }

    /// Saves the model's prototypes and the label map.
    ///
    /// Weights rows are written in insertion order with shortest
    /// round-trip float formatting, so a reload reconstructs the
    /// collection exactly. Labels are written under an `id,name` header in
    /// ascending id order.
    ///
    /// # Errors
    ///
    /// Surfaces write failures; in-memory state is untouched either way.
    pub fn save(&self, model: &FuzzyArt, labels: &LabelMap) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.weights_path)?;
        for proto in model.prototypes() {
            let row: Vec<String> = proto.iter().map(|v| format!("{v}")).collect();
            writer.write_record(&row)?;
        }
        writer.flush().map_err(AgruparError::Io)?;

        let mut writer = csv::Writer::from_path(&self.labels_path)?;
        writer.write_record(["id", "name"])?;
        for (id, name) in labels.iter() {
            writer.write_record([id.to_string().as_str(), name])?;
        }
        writer.flush().map_err(AgruparError::Io)?;

        info!(
            categories = model.n_categories(),
            labels = labels.len(),
            weights_path = %self.weights_path.display(),
            labels_path = %self.labels_path.display(),
            "model saved"
        );
        Ok(())
    }

    /// Loads the model and label map, or empty ones for missing files.
    ///
    /// Hyperparameters are not persisted; the caller supplies them
    /// explicitly. Malformed weight rows (non-numeric fields, odd width,
    /// or a width disagreeing with the first valid row) are skipped with a
    /// warning and never abort the load. Label rows with fewer than two
    /// fields or a non-integer id are skipped silently, matching the
    /// weights-file tolerance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` for invalid hyperparameters, or an
    /// I/O error for failures other than a missing file.
    pub fn load(&self, rho: f32, alpha: f32, beta: f32) -> Result<(FuzzyArt, LabelMap)> {
        let prototypes = self.load_weights()?;
        let model = FuzzyArt::from_prototypes(rho, alpha, beta, prototypes)?;
        let labels = self.load_labels()?;
        info!(
            categories = model.n_categories(),
            labels = labels.len(),
            "model loaded"
        );
        Ok((model, labels))
    }

    fn load_weights(&self) -> Result<Vec<Vector<f32>>> {
        if !self.weights_path.exists() {
            info!(
                path = %self.weights_path.display(),
                "weights file not found, starting from an empty model"
            );
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.weights_path)?;

        let mut prototypes: Vec<Vector<f32>> = Vec::new();
        let mut expected_width: Option<usize> = None;
        for (i, record) in reader.records().enumerate() {
            let line = i + 1;
            let record = match record {
                Ok(r) => r,
                Err(err) => {
                    warn!(line, error = %err, "skipping unreadable weights row");
                    continue;
                }
            };
            if record.is_empty() || (record.len() == 1 && record[0].trim().is_empty()) {
                continue;
            }
            match parse_weight_row(&record, line, expected_width) {
                Ok(proto) => {
                    // The first valid row fixes the prototype width.
                    expected_width.get_or_insert(proto.len());
                    prototypes.push(proto);
                }
                Err(err) => {
                    warn!(line, error = %err, "skipping malformed weights row");
                }
            }
        }
        Ok(prototypes)
    }

    fn load_labels(&self) -> Result<LabelMap> {
        let mut labels = LabelMap::new();
        if !self.labels_path.exists() {
            info!(
                path = %self.labels_path.display(),
                "labels file not found, starting with no labels"
            );
            return Ok(labels);
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.labels_path)?;
        for record in reader.records() {
            let record = record?;
            if record.len() < 2 {
                continue;
            }
            if let Ok(id) = record[0].trim().parse::<usize>() {
                labels.insert(id, record[1].to_string());
            }
        }
        Ok(labels)
    }
}

/// Parses one weights row into a prototype, classifying every failure as a
/// malformed record.
fn parse_weight_row(
    record: &csv::StringRecord,
    line: usize,
    expected_width: Option<usize>,
) -> Result<Vector<f32>> {
    let mut components = Vec::with_capacity(record.len());
    for field in record.iter() {
        let value: f32 = field.trim().parse().map_err(|_| {
            AgruparError::malformed_record(line, format!("non-numeric field '{field}'"))
        })?;
        components.push(value);
    }
    if components.len() % 2 != 0 {
        return Err(AgruparError::malformed_record(
            line,
            format!("odd prototype width {}", components.len()),
        ));
    }
    if let Some(expected) = expected_width {
        if components.len() != expected {
            return Err(AgruparError::malformed_record(
                line,
                format!("width {} differs from {expected}", components.len()),
            ));
        }
    }
    Ok(Vector::from_vec(components))
}
