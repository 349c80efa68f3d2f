//! Shared fixtures: on-disk artifact bundles with known parameters
#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::Path;

/// Write an artifact file with the given logistic parameters and an
/// identity scaler (mean 0, scale 1), so probabilities are predictable
/// from the raw feature values.
pub fn write_artifact(
    dir: &Path,
    file: &str,
    coefficients: &[f64],
    intercept: f64,
    features: Option<&[&str]>,
) {
    let n = coefficients.len();
    let mut artifact = json!({
        "model": {"coefficients": coefficients, "intercept": intercept},
        "scaler": {"mean": vec![0.0; n], "scale": vec![1.0; n]},
    });
    if let Some(features) = features {
        artifact["features"] = Value::from(
            features.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        );
    }
    std::fs::write(dir.join(file), artifact.to_string()).unwrap();
}

/// Heart schema used across tests: 9 numeric columns plus one-hot columns
pub const HEART_FEATURES: [&str; 17] = [
    "age", "sex", "trestbps", "chol", "fbs", "thalach", "exang", "oldpeak", "ca",
    "cp_1", "cp_2", "cp_3", "slope_1", "slope_2", "thal_2", "thal_3", "restecg_1",
];

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// The score the API reports for a probability
pub fn expected_score(p: f64) -> f64 {
    (p * 100.0 * 100.0).round() / 100.0
}
