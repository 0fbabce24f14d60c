use serde::{Deserialize, Serialize};

use super::enums::RiskLevel;

/// Output of the image classifier: a diagnosis label and its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancerPrediction {
    #[serde(alias = "type")]
    pub label: String,
    pub confidence: f64,
}

/// The three bounded risk outputs, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScores {
    pub recurrence_risk: f64,
    pub complication_risk: f64,
    pub survival_probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevels {
    pub recurrence: RiskLevel,
    pub complication: RiskLevel,
    pub survival: RiskLevel,
}

/// Scores plus their display bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub scores: RiskScores,
    pub levels: RiskLevels,
}
