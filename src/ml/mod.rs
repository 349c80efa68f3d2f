//! Risk-scoring pipeline for the four served conditions
//!
//! This module covers everything between a raw request body and a risk
//! label:
//! - Artifact loading (pre-trained scaler + logistic parameters)
//! - Feature encoding into each model's fixed-order vector
//! - Probability scoring and threshold classification
//! - The startup-loaded, immutable model registry

pub mod artifact;
pub mod classifier;
pub mod encoders;
pub mod registry;

pub use artifact::{LinearModelParams, RiskModelArtifact, ScalerParams};
pub use classifier::{classify, risk_result, risk_score, thresholds_for, RiskThresholds};
pub use encoders::{encode_diabetes, encode_liver, encode_mental_health, HeartSchema};
pub use registry::ModelRegistry;
