use crate::config::ModelsConfig;
use crate::error::{AppError, Result};
use crate::ml::artifact::RiskModelArtifact;
use crate::ml::classifier::risk_result;
use crate::ml::encoders::{
    encode_diabetes, encode_liver, encode_mental_health, HeartSchema,
};
use crate::models::{Condition, ModelStatus, RawInput, RiskResult};
use std::path::Path;
use tracing::{info, warn};

/// Heart artifact plus the schema compiled from its persisted feature list
#[derive(Debug, Clone)]
pub struct HeartModel {
    artifact: RiskModelArtifact,
    schema: HeartSchema,
}

/// Pre-trained model artifacts, loaded best-effort once at startup and
/// immutable thereafter. A missing or malformed artifact disables only that
/// condition; the process keeps serving the rest.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    diabetes: Option<RiskModelArtifact>,
    heart: Option<HeartModel>,
    liver: Option<RiskModelArtifact>,
    mental: Option<RiskModelArtifact>,
}

impl ModelRegistry {
    /// Load all available artifacts from the configured directory
    pub fn load(config: &ModelsConfig) -> Self {
        let dir = config.dir.as_path();

        let registry = Self {
            diabetes: load_artifact(dir, Condition::Diabetes),
            heart: load_artifact(dir, Condition::Heart).and_then(compile_heart),
            liver: load_artifact(dir, Condition::Liver),
            mental: load_artifact(dir, Condition::MentalHealth),
        };

        let status = registry.status();
        info!(
            diabetes = status.diabetes,
            heart = status.heart,
            liver = status.liver,
            mental = status.mental,
            "Model registry initialized"
        );

        registry
    }

    /// Per-condition load state for the health endpoint
    pub fn status(&self) -> ModelStatus {
        ModelStatus {
            diabetes: self.diabetes.is_some(),
            heart: self.heart.is_some(),
            liver: self.liver.is_some(),
            mental: self.mental.is_some(),
        }
    }

    /// Run the encode -> score -> classify pipeline for one condition.
    ///
    /// If the condition's artifact failed to load, the request is rejected
    /// before any encoding happens.
    pub fn predict(&self, condition: Condition, data: &RawInput) -> Result<RiskResult> {
        let probability = match condition {
            Condition::Diabetes => {
                let artifact = self.require(condition, &self.diabetes)?;
                artifact.predict_proba(&encode_diabetes(data)?)?
            }
            Condition::Heart => {
                let model = self
                    .heart
                    .as_ref()
                    .ok_or_else(|| AppError::ModelUnavailable(condition.name().to_string()))?;
                model.artifact.predict_proba(&model.schema.encode(data)?)?
            }
            Condition::Liver => {
                let artifact = self.require(condition, &self.liver)?;
                artifact.predict_proba(&encode_liver(data)?)?
            }
            Condition::MentalHealth => {
                let artifact = self.require(condition, &self.mental)?;
                artifact.predict_proba(&encode_mental_health(data)?)?
            }
        };

        Ok(risk_result(probability, condition))
    }

    fn require<'a>(
        &self,
        condition: Condition,
        slot: &'a Option<RiskModelArtifact>,
    ) -> Result<&'a RiskModelArtifact> {
        slot.as_ref()
            .ok_or_else(|| AppError::ModelUnavailable(condition.name().to_string()))
    }
}

fn load_artifact(dir: &Path, condition: Condition) -> Option<RiskModelArtifact> {
    let path = dir.join(condition.artifact_file());

    if !path.exists() {
        warn!(
            condition = condition.name(),
            path = %path.display(),
            "Artifact file missing; condition disabled"
        );
        return None;
    }

    match RiskModelArtifact::load(&path) {
        Ok(artifact) => {
            info!(
                condition = condition.name(),
                n_features = artifact.n_features(),
                "Artifact loaded"
            );
            Some(artifact)
        }
        Err(e) => {
            warn!(
                condition = condition.name(),
                error = %e,
                "Artifact failed to load; condition disabled"
            );
            None
        }
    }
}

/// The heart artifact must carry its ordered feature-name list; without it
/// the one-hot columns cannot be mapped and the condition stays disabled.
fn compile_heart(artifact: RiskModelArtifact) -> Option<HeartModel> {
    match &artifact.features {
        Some(features) => {
            let schema = HeartSchema::new(features);
            Some(HeartModel { artifact, schema })
        }
        None => {
            warn!("Heart artifact has no feature list; condition disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::artifact::{LinearModelParams, ScalerParams};
    use crate::models::RiskLevel;
    use serde_json::json;

    fn flat_artifact(n: usize, intercept: f64) -> RiskModelArtifact {
        RiskModelArtifact {
            model: LinearModelParams {
                coefficients: vec![0.0; n],
                intercept,
            },
            scaler: ScalerParams {
                mean: vec![0.0; n],
                scale: vec![1.0; n],
            },
            features: None,
        }
    }

    fn registry_with_diabetes(intercept: f64) -> ModelRegistry {
        ModelRegistry {
            diabetes: Some(flat_artifact(8, intercept)),
            ..Default::default()
        }
    }

    #[test]
    fn test_predict_unavailable_condition() {
        let registry = ModelRegistry::default();
        let err = registry
            .predict(Condition::Diabetes, &RawInput::new())
            .unwrap_err();
        assert_eq!(err.error_code(), "MODEL_UNAVAILABLE");
    }

    #[test]
    fn test_predict_with_flat_model() {
        // Zero weights, zero intercept -> p = 0.5 -> Moderate at (0.6, 0.3)
        let registry = registry_with_diabetes(0.0);
        let result = registry
            .predict(Condition::Diabetes, &RawInput::new())
            .unwrap();
        assert_eq!(result.risk_score, 50.0);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_predict_high_with_large_intercept() {
        let registry = registry_with_diabetes(5.0);
        let result = registry
            .predict(Condition::Diabetes, &RawInput::new())
            .unwrap();
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_predict_is_idempotent() {
        let registry = registry_with_diabetes(0.7);
        let data = json!({"Glucose": 130, "BMI": 28}).as_object().unwrap().clone();
        let first = registry.predict(Condition::Diabetes, &data).unwrap();
        let second = registry.predict(Condition::Diabetes, &data).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_heart_requires_feature_list() {
        assert!(compile_heart(flat_artifact(4, 0.0)).is_none());

        let mut artifact = flat_artifact(2, 0.0);
        artifact.features = Some(vec!["age".to_string(), "cp_1".to_string()]);
        assert!(compile_heart(artifact).is_some());
    }

    #[test]
    fn test_load_missing_dir_disables_everything() {
        let config = ModelsConfig {
            dir: std::path::PathBuf::from("/nonexistent/models"),
        };
        let registry = ModelRegistry::load(&config);
        let status = registry.status();
        assert!(!status.diabetes && !status.heart && !status.liver && !status.mental);
    }
}
