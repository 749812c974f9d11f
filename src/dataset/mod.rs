//! Bulk pre-training from labeled dataset files.
//!
//! Each `*.csv` file in a dataset directory holds samples of one class;
//! the file stem is the label. Every data row (after one header row) is
//! fed to [`FuzzyArt::train`](crate::art::FuzzyArt::train) in file order
//! and the returned category id is bound to the file's label, overwriting
//! any earlier binding for that id. Label assignment is last-write-wins
//! per category id, not per-sample-vote.

use crate::art::FuzzyArt;
use crate::error::Result;
use crate::primitives::Vector;
use crate::store::LabelMap;
use std::path::Path;
use tracing::{info, warn};

/// Counters from one pre-training pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PretrainReport {
    /// Dataset files processed.
    pub files: usize,
    /// Samples successfully trained.
    pub samples: usize,
    /// Rows skipped (parse or training failures).
    pub skipped: usize,
    /// Categories created during the pass.
    pub new_categories: usize,
}

impl PretrainReport {
    /// Folds another report's counters into this one.
    pub fn merge(&mut self, other: &PretrainReport) {
        self.files += other.files;
        self.samples += other.samples;
        self.skipped += other.skipped;
        self.new_categories += other.new_categories;
    }
}

impl std::fmt::Display for PretrainReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pre-training report:")?;
        writeln!(f, "  Files:          {}", self.files)?;
        writeln!(f, "  Samples:        {}", self.samples)?;
        writeln!(f, "  Skipped rows:   {}", self.skipped)?;
        writeln!(f, "  New categories: {}", self.new_categories)
    }
}

/// Trains on every data row of one labeled dataset file.
///
/// The file stem is the label; one header row is skipped. Rows that fail
/// to parse or fail training (wrong arity, for instance) are skipped with
/// a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read at all;
/// individual bad rows never fail the pass.
pub fn pretrain_file(
    model: &mut FuzzyArt,
    labels: &mut LabelMap,
    path: impl AsRef<Path>,
) -> Result<PretrainReport> {
    let path = path.as_ref();
    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let before = model.n_categories();
    let mut report = PretrainReport {
        files: 1,
        ..PretrainReport::default()
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;
    for (i, record) in reader.records().enumerate() {
        // Header row is line 1.
        let line = i + 2;
        let record = match record {
            Ok(r) => r,
            Err(err) => {
                warn!(path = %path.display(), line, error = %err, "skipping unreadable dataset row");
                report.skipped += 1;
                continue;
            }
        };
        let mut components = Vec::with_capacity(record.len());
        let mut parse_failed = false;
        for field in record.iter() {
            match field.trim().parse::<f32>() {
                Ok(v) => components.push(v),
                Err(_) => {
                    parse_failed = true;
                    break;
                }
            }
        }
        if parse_failed || components.is_empty() {
            warn!(path = %path.display(), line, "skipping malformed dataset row");
            report.skipped += 1;
            continue;
        }
        match model.train(&Vector::from_vec(components)) {
            Ok(id) => {
                labels.insert(id, label.clone());
                report.samples += 1;
            }
            Err(err) => {
                warn!(path = %path.display(), line, error = %err, "skipping untrainable row");
                report.skipped += 1;
            }
        }
    }

    report.new_categories = model.n_categories() - before;
    info!(
        path = %path.display(),
        label,
        samples = report.samples,
        skipped = report.skipped,
        "dataset file trained"
    );
    Ok(report)
}

/// Pre-trains from every `*.csv` file in a directory.
///
/// Files are processed in lexicographic path order so last-write-wins
/// labeling is deterministic. A missing directory yields an empty report.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be read, or if a
/// dataset file cannot be opened.
pub fn pretrain_from_dir(
    model: &mut FuzzyArt,
    labels: &mut LabelMap,
    dir: impl AsRef<Path>,
) -> Result<PretrainReport> {
    let dir = dir.as_ref();
    let mut report = PretrainReport::default();
    if !dir.exists() {
        info!(dir = %dir.display(), "dataset directory not found, skipping");
        return Ok(report);
    }

    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    for path in paths {
        report.merge(&pretrain_file(model, labels, &path)?);
    }
    Ok(report)
}

/// Pre-trains from several dataset directories in the order given.
///
/// # Errors
///
/// Propagates the first directory or file error encountered.
pub fn pretrain_from_dirs<P: AsRef<Path>>(
    model: &mut FuzzyArt,
    labels: &mut LabelMap,
    dirs: &[P],
) -> Result<PretrainReport> {
    let mut report = PretrainReport::default();
    for dir in dirs {
        report.merge(&pretrain_from_dir(model, labels, dir)?);
    }
    Ok(report)
}
