use serde::{Deserialize, Serialize};

/// Loosely-typed request body: field names to JSON values, fields may be missing.
/// Exists only for the request lifetime.
pub type RawInput = serde_json::Map<String, serde_json::Value>;

/// The four conditions served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Diabetes,
    Heart,
    Liver,
    MentalHealth,
}

impl Condition {
    /// Human-readable name used in error messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            Condition::Diabetes => "diabetes",
            Condition::Heart => "heart",
            Condition::Liver => "liver",
            Condition::MentalHealth => "mental health",
        }
    }

    /// Artifact file name under the models directory
    pub fn artifact_file(&self) -> &'static str {
        match self {
            Condition::Diabetes => "diabetes.json",
            Condition::Heart => "heart.json",
            Condition::Liver => "liver.json",
            Condition::MentalHealth => "mental_health.json",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordinal risk label derived from a model probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Prediction response for a single condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Positive-class probability scaled to 0-100, rounded to 2 decimals
    pub risk_score: f64,

    /// Risk label per the condition's thresholds
    pub risk_level: RiskLevel,
}

/// Lifestyle advice derived from raw inputs across conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Overall category across conditions
    pub category: RiskLevel,

    /// Up to 4 unique advisory actions
    #[serde(rename = "do")]
    pub do_list: Vec<String>,

    /// Up to 4 unique things to avoid
    #[serde(rename = "avoid")]
    pub avoid_list: Vec<String>,
}

/// Per-condition artifact load state, reported by /health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStatus {
    pub diabetes: bool,
    pub heart: bool,
    pub liver: bool,
    pub mental: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_serializes_capitalized() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Moderate).unwrap(),
            "\"Moderate\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
    }

    #[test]
    fn test_recommendation_result_field_names() {
        let result = RecommendationResult {
            category: RiskLevel::Low,
            do_list: vec!["walk".to_string()],
            avoid_list: vec!["sugar".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("do").is_some());
        assert!(json.get("avoid").is_some());
        assert_eq!(json["category"], "Low");
    }

    #[test]
    fn test_condition_names() {
        assert_eq!(Condition::MentalHealth.name(), "mental health");
        assert_eq!(Condition::Heart.artifact_file(), "heart.json");
    }
}
