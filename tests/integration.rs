//! Integration tests for the agrupar clustering library.
//!
//! These tests verify end-to-end workflows combining multiple components.

use agrupar::prelude::*;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_train_label_classify_workflow() {
    let mut art = FuzzyArt::new(0.9, 0.001, 1.0).expect("valid hyperparameters");
    let mut labels = LabelMap::new();

    // Learn two gestures incrementally.
    let id = art.train(&Vector::from_slice(&[0.1, 0.1])).expect("train");
    labels.insert(id, "fist");
    let id = art.train(&Vector::from_slice(&[0.9, 0.9])).expect("train");
    labels.insert(id, "open_palm");
    assert_eq!(art.n_categories(), 2);

    // Recognize a noisy repeat of the second gesture.
    let result = art
        .classify(&Vector::from_slice(&[0.88, 0.91]))
        .expect("classify");
    let id = result.category().expect("should be recognized");
    assert_eq!(labels.display_name(id), "open_palm");

    // An in-between pose is reported as unknown, not force-fit.
    let result = art
        .classify(&Vector::from_slice(&[0.5, 0.5]))
        .expect("classify");
    assert_eq!(result, Classification::Unknown);
}

#[test]
fn test_persist_reload_continue_training() {
    let dir = tempdir().expect("temp dir");
    let store = ModelStore::new(dir.path().join("weights.csv"), dir.path().join("names.csv"));

    // Session 1: learn and save.
    let mut art = FuzzyArt::new(0.9, 0.001, 1.0).expect("valid hyperparameters");
    let mut labels = LabelMap::new();
    let id = art.train(&Vector::from_slice(&[0.1, 0.1])).expect("train");
    labels.insert(id, "fist");
    store.save(&art, &labels).expect("save");

    // Session 2: reload, recognize, keep learning.
    let (mut art, mut labels) = store.load(0.9, 0.001, 1.0).expect("load");
    assert_eq!(art.n_categories(), 1);
    let result = art
        .classify(&Vector::from_slice(&[0.1, 0.1]))
        .expect("classify");
    assert_eq!(result.category().map(|id| labels.display_name(id)), Some("fist".to_string()));

    let id = art.train(&Vector::from_slice(&[0.9, 0.9])).expect("train");
    assert_eq!(id, 1, "category ids continue across reloads");
    labels.insert(id, "open_palm");
    store.save(&art, &labels).expect("save again");

    let (art2, labels2) = store.load(0.9, 0.001, 1.0).expect("reload");
    assert_eq!(art2, art);
    assert_eq!(labels2, labels);
}

#[test]
fn test_pretrain_then_recognize_workflow() {
    let dir = tempdir().expect("temp dir");
    let data_dir = dir.path().join("datasets");
    std::fs::create_dir(&data_dir).expect("create dir");

    for (name, rows) in [
        ("fist.csv", vec!["0.1,0.1", "0.12,0.08", "0.09,0.11"]),
        ("open_palm.csv", vec!["0.9,0.9", "0.88,0.92"]),
    ] {
        let mut f = std::fs::File::create(data_dir.join(name)).expect("create");
        writeln!(f, "x0,x1").expect("header");
        for row in rows {
            writeln!(f, "{row}").expect("row");
        }
    }

    let mut art = FuzzyArt::new(0.9, 0.001, 1.0).expect("valid hyperparameters");
    let mut labels = LabelMap::new();
    let report = pretrain_from_dir(&mut art, &mut labels, &data_dir).expect("pretrain");

    assert_eq!(report.files, 2);
    assert_eq!(report.samples, 5);
    assert_eq!(report.skipped, 0);

    let result = art
        .classify(&Vector::from_slice(&[0.1, 0.1]))
        .expect("classify");
    let id = result.category().expect("known gesture");
    assert_eq!(labels.display_name(id), "fist");
}

#[test]
fn test_empty_model_reports_empty_then_learns() {
    let mut art = FuzzyArt::default();

    let result = art
        .classify(&Vector::from_slice(&[0.3, 0.7]))
        .expect("classify");
    assert_eq!(result, Classification::Empty);
    assert_eq!(result.as_i32(), -1);

    let id = art.train(&Vector::from_slice(&[0.3, 0.7])).expect("train");
    assert_eq!(id, 0);
    let result = art
        .classify(&Vector::from_slice(&[0.3, 0.7]))
        .expect("classify");
    assert_eq!(result, Classification::Category(0));
}

#[test]
fn test_training_and_classification_paths_diverge() {
    // A warm, shrunken prototype wins the choice function for a probe it
    // cannot match at vigilance 0.9, while a second category matches
    // perfectly. Training falls back to the second category; the
    // read-only path tests only the winner and reports Unknown.
    let art = FuzzyArt::from_prototypes(
        0.9,
        0.001,
        0.0,
        vec![
            Vector::from_slice(&[0.4, 0.4, 0.4, 0.4]),
            Vector::from_slice(&[0.55, 0.5, 0.5, 0.5]),
        ],
    )
    .expect("valid prototypes");
    let probe = Vector::from_slice(&[0.5, 0.5]);

    assert_eq!(art.classify(&probe).expect("classify"), Classification::Unknown);

    let mut trained = art.clone();
    let id = trained.train(&probe).expect("train");
    assert_eq!(id, 1);
    assert_eq!(trained.n_categories(), 2);
}

#[test]
fn test_batch_estimator_workflow() {
    let data = Matrix::from_vec(
        6,
        2,
        vec![
            0.1, 0.1, 0.12, 0.08, 0.11, 0.09, // low cluster
            0.9, 0.9, 0.88, 0.92, 0.91, 0.89, // high cluster
        ],
    )
    .expect("valid matrix");

    let mut art = FuzzyArt::new(0.85, 0.001, 1.0).expect("valid hyperparameters");
    art.fit(&data).expect("fit");

    let predictions = art.predict(&data);
    assert_eq!(predictions.len(), 6);
    assert_eq!(predictions[0].category(), predictions[1].category());
    assert_eq!(predictions[3].category(), predictions[4].category());
    assert_ne!(predictions[0].category(), predictions[3].category());
}

#[test]
fn test_model_state_json_snapshot() {
    // Model structs are serde types; a JSON round trip preserves state.
    let mut art = FuzzyArt::new(0.9, 0.001, 1.0).expect("valid hyperparameters");
    art.train(&Vector::from_slice(&[0.2, 0.4])).expect("train");
    art.train(&Vector::from_slice(&[0.8, 0.6])).expect("train");

    let json = serde_json::to_string(&art).expect("serialize");
    let restored: FuzzyArt = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, art);
}

#[test]
fn test_dimension_mismatch_is_recoverable() {
    let mut art = FuzzyArt::default();
    art.train(&Vector::from_slice(&[0.1, 0.2, 0.3])).expect("train");

    // A bad call fails fast without corrupting the model...
    let err = art.train(&Vector::from_slice(&[0.1])).unwrap_err();
    assert!(matches!(err, AgruparError::DimensionMismatch { .. }));

    // ...and the caller can continue with well-formed input.
    let id = art
        .train(&Vector::from_slice(&[0.11, 0.19, 0.31]))
        .expect("train");
    assert_eq!(id, 0);
}
