use crate::models::{Condition, RiskLevel, RiskResult};

/// Condition-specific probability cutoffs. Not shared across conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    /// High if probability is strictly above this
    pub high: f64,

    /// Moderate if probability is strictly above this (and not High)
    pub moderate: f64,
}

impl RiskThresholds {
    pub const fn new(high: f64, moderate: f64) -> Self {
        Self { high, moderate }
    }
}

/// Thresholds fitted per condition at training time
pub fn thresholds_for(condition: Condition) -> RiskThresholds {
    match condition {
        Condition::Diabetes => RiskThresholds::new(0.6, 0.3),
        Condition::Heart => RiskThresholds::new(0.6, 0.3),
        Condition::Liver => RiskThresholds::new(0.7, 0.4),
        Condition::MentalHealth => RiskThresholds::new(0.6, 0.3),
    }
}

/// Map a positive-class probability to its ordinal risk label
pub fn classify(probability: f64, thresholds: RiskThresholds) -> RiskLevel {
    if probability > thresholds.high {
        RiskLevel::High
    } else if probability > thresholds.moderate {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Report a probability to the caller as a 0-100 score, 2 decimal places
pub fn risk_score(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}

/// Build the full response for one condition's probability
pub fn risk_result(probability: f64, condition: Condition) -> RiskResult {
    RiskResult {
        risk_score: risk_score(probability),
        risk_level: classify(probability, thresholds_for(condition)),
    }
}
