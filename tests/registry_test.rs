//! Artifact loading tests: best-effort startup behavior over real files.

mod common;

use common::{write_artifact, HEART_FEATURES};
use health_risk_api::config::ModelsConfig;
use health_risk_api::ml::ModelRegistry;
use serde_json::json;

fn load_from(dir: &std::path::Path) -> ModelRegistry {
    ModelRegistry::load(&ModelsConfig {
        dir: dir.to_path_buf(),
    })
}

#[test]
fn malformed_artifact_disables_only_that_condition() {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), "diabetes.json", &[0.0; 8], 0.0, None);
    std::fs::write(dir.path().join("liver.json"), "{ not json").unwrap();

    let status = load_from(dir.path()).status();
    assert!(status.diabetes);
    assert!(!status.liver);
}

#[test]
fn inconsistent_shapes_fail_load() {
    let dir = tempfile::tempdir().unwrap();
    // 8 coefficients but only 3 scaler columns
    let artifact = json!({
        "model": {"coefficients": vec![0.0; 8], "intercept": 0.0},
        "scaler": {"mean": [0.0, 0.0, 0.0], "scale": [1.0, 1.0, 1.0]},
    });
    std::fs::write(dir.path().join("diabetes.json"), artifact.to_string()).unwrap();

    let status = load_from(dir.path()).status();
    assert!(!status.diabetes);
}

#[test]
fn heart_without_feature_list_is_disabled() {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), "heart.json", &[0.0; 17], 0.0, None);

    let status = load_from(dir.path()).status();
    assert!(!status.heart);
}

#[test]
fn heart_with_feature_list_loads() {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(
        dir.path(),
        "heart.json",
        &[0.0; 17],
        0.0,
        Some(&HEART_FEATURES),
    );

    let status = load_from(dir.path()).status();
    assert!(status.heart);
}

#[test]
fn feature_list_length_mismatch_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    // 17 names against a 4-column model
    write_artifact(
        dir.path(),
        "heart.json",
        &[0.0; 4],
        0.0,
        Some(&HEART_FEATURES),
    );

    let status = load_from(dir.path()).status();
    assert!(!status.heart);
}
