use crate::error::{AppError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fitted standard-scaler parameters persisted alongside the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Per-column mean
    pub mean: Vec<f64>,

    /// Per-column standard deviation
    pub scale: Vec<f64>,
}

/// Serialized logistic-regression parameters (weights and bias)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModelParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// A pre-trained classifier + scaler bundle, loaded once at startup and
/// immutable thereafter. The vector length and column order a model expects
/// are baked in at training time; for the one-hot encoded condition an
/// ordered feature-name list is persisted alongside the parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskModelArtifact {
    pub model: LinearModelParams,
    pub scaler: ScalerParams,

    /// Ordered feature names (present only for categorical-encoded models)
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl RiskModelArtifact {
    /// Load an artifact from a JSON file and validate its internal consistency
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let artifact: RiskModelArtifact = serde_json::from_str(&raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check that the scaler, model, and feature list agree on vector length
    pub fn validate(&self) -> Result<()> {
        let n = self.model.coefficients.len();
        if self.scaler.mean.len() != n || self.scaler.scale.len() != n {
            return Err(AppError::Configuration(format!(
                "artifact scaler/model shape mismatch: {} coefficients, {} means, {} scales",
                n,
                self.scaler.mean.len(),
                self.scaler.scale.len()
            )));
        }
        if let Some(features) = &self.features {
            if features.len() != n {
                return Err(AppError::Configuration(format!(
                    "artifact feature list has {} names but model expects {} columns",
                    features.len(),
                    n
                )));
            }
        }
        Ok(())
    }

    /// Number of input columns the model was fitted on
    pub fn n_features(&self) -> usize {
        self.model.coefficients.len()
    }

    /// Apply the fitted scaler transform, then the classifier's positive-class
    /// probability estimate.
    ///
    /// A length mismatch between the vector and the fitted parameters means
    /// the artifact and encoder disagree on schema; that is an internal
    /// configuration error, never a per-request fallback.
    pub fn predict_proba(&self, x: &Array1<f64>) -> Result<f64> {
        let n = self.n_features();
        if x.len() != n {
            return Err(AppError::Internal(format!(
                "feature vector has {} columns but model was fitted on {}",
                x.len(),
                n
            )));
        }

        let mut z = self.model.intercept;
        for i in 0..n {
            // A zero-variance column is persisted with scale 0; the fitted
            // scaler convention divides by 1 in that case.
            let scale = if self.scaler.scale[i] == 0.0 {
                1.0
            } else {
                self.scaler.scale[i]
            };
            let scaled = (x[i] - self.scaler.mean[i]) / scale;
            z += self.model.coefficients[i] * scaled;
        }

        Ok(sigmoid(z))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;
    use std::io::Write;

    fn identity_artifact(coefficients: Vec<f64>, intercept: f64) -> RiskModelArtifact {
        let n = coefficients.len();
        RiskModelArtifact {
            model: LinearModelParams {
                coefficients,
                intercept,
            },
            scaler: ScalerParams {
                mean: vec![0.0; n],
                scale: vec![1.0; n],
            },
            features: None,
        }
    }

    #[test]
    fn test_predict_proba_zero_weights_is_half() {
        let artifact = identity_artifact(vec![0.0, 0.0, 0.0], 0.0);
        let p = artifact.predict_proba(&arr1(&[1.0, 2.0, 3.0])).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_predict_proba_applies_scaler() {
        let artifact = RiskModelArtifact {
            model: LinearModelParams {
                coefficients: vec![1.0],
                intercept: 0.0,
            },
            scaler: ScalerParams {
                mean: vec![10.0],
                scale: vec![2.0],
            },
            features: None,
        };
        // (14 - 10) / 2 = 2 -> sigmoid(2)
        let p = artifact.predict_proba(&arr1(&[14.0])).unwrap();
        assert!((p - sigmoid(2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_predict_proba_zero_scale_divides_by_one() {
        let artifact = RiskModelArtifact {
            model: LinearModelParams {
                coefficients: vec![1.0],
                intercept: 0.0,
            },
            scaler: ScalerParams {
                mean: vec![0.0],
                scale: vec![0.0],
            },
            features: None,
        };
        let p = artifact.predict_proba(&arr1(&[3.0])).unwrap();
        assert!((p - sigmoid(3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch_is_internal_error() {
        let artifact = identity_artifact(vec![0.0, 0.0], 0.0);
        let err = artifact.predict_proba(&arr1(&[1.0])).unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_validate_rejects_shape_mismatch() {
        let artifact = RiskModelArtifact {
            model: LinearModelParams {
                coefficients: vec![1.0, 2.0],
                intercept: 0.0,
            },
            scaler: ScalerParams {
                mean: vec![0.0],
                scale: vec![1.0],
            },
            features: None,
        };
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_feature_list_mismatch() {
        let mut artifact = identity_artifact(vec![0.0, 0.0], 0.0);
        artifact.features = Some(vec!["age".to_string()]);
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "model": {{"coefficients": [0.5, -0.25], "intercept": 0.1}},
                "scaler": {{"mean": [1.0, 2.0], "scale": [1.0, 1.0]}}
            }}"#
        )
        .unwrap();

        let artifact = RiskModelArtifact::load(file.path()).unwrap();
        assert_eq!(artifact.n_features(), 2);
        assert!(artifact.features.is_none());
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(RiskModelArtifact::load(file.path()).is_err());
    }
}
