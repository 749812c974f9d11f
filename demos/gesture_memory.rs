//! Incremental gesture learning with persistence.
//!
//! Simulates the driving loop of a gesture recognizer: load any previous
//! model, learn a few labeled gestures, recognize noisy repeats, and save
//! the model for the next session.
//!
//! Run with: `cargo run --example gesture_memory`

use agrupar::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let dir = std::env::temp_dir().join("agrupar_gesture_demo");
    std::fs::create_dir_all(&dir)?;
    let store = ModelStore::new(dir.join("model_weights.csv"), dir.join("model_names.csv"));

    // Previous session's memory, or an empty model on first run.
    let (mut art, mut labels) = store.load(0.9, 0.001, 1.0)?;
    println!("loaded {} categories", art.n_categories());

    // Scripted stand-ins for "press T, then type a label".
    let training: &[(&str, [f32; 4])] = &[
        ("fist", [0.1, 0.1, 0.15, 0.1]),
        ("open_palm", [0.9, 0.85, 0.9, 0.95]),
        ("peace", [0.5, 0.9, 0.5, 0.1]),
    ];
    for (name, features) in training {
        let id = art.train(&Vector::from_slice(features))?;
        if !labels.contains(id) {
            println!("new category {id}, labeling it '{name}'");
        }
        labels.insert(id, *name);
    }

    // Recognize noisy repeats and an unfamiliar pose.
    let probes: &[[f32; 4]] = &[
        [0.12, 0.09, 0.14, 0.11],
        [0.88, 0.87, 0.91, 0.93],
        [0.4, 0.4, 0.6, 0.6],
    ];
    for features in probes {
        let result = art.classify(&Vector::from_slice(features))?;
        let shown = match result {
            Classification::Category(id) => labels.display_name(id),
            Classification::Unknown => "???".to_string(),
            Classification::Empty => "(no model)".to_string(),
        };
        println!("{features:?} -> {shown}");
    }

    store.save(&art, &labels)?;
    println!("saved {} categories to {}", art.n_categories(), dir.display());
    Ok(())
}
