//! Diagnostic report export.
//!
//! Bundles the session's profile, the classifier prediction and the risk
//! assessment into one serializable record, exported as pretty JSON or as
//! a single flat CSV row.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CancerPrediction, Entity, PatientProfile, RiskAssessment, ScaleField};
use crate::session::AnalysisSession;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    pub session_id: Uuid,
    pub session_started_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
    pub patient: PatientProfile,
    pub cancer_prediction: Option<CancerPrediction>,
    pub assessment: RiskAssessment,
    pub extracted_entities: Vec<Entity>,
}

impl DiagnosticReport {
    /// Snapshot a session. Without a prediction the diagnosis adjustment
    /// is skipped.
    pub fn from_session(session: &AnalysisSession, prediction: Option<CancerPrediction>) -> Self {
        let label = prediction.as_ref().map(|p| p.label.as_str()).unwrap_or("");
        Self {
            session_id: session.id(),
            session_started_at: session.started_at(),
            generated_at: Utc::now(),
            patient: session.profile().clone(),
            assessment: session.assess(label),
            cancer_prediction: prediction,
            extracted_entities: session.entities().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn csv_header() -> String {
        let mut columns: Vec<&str> = vec!["Session ID", "Age", "Gender", "Cancer Type"];
        columns.extend(ScaleField::all().map(|f| f.as_str()));
        columns.extend([
            "Predicted Type",
            "Prediction Confidence",
            "Recurrence Risk",
            "Complication Risk",
            "Survival Probability",
        ]);
        columns.join(",")
    }

    pub fn to_csv_row(&self) -> String {
        let patient = &self.patient;
        let mut values = vec![
            self.session_id.to_string(),
            patient.age.map(|a| a.to_string()).unwrap_or_default(),
            patient.gender.to_string(),
            patient
                .cancer_type
                .map(|c| c.to_string())
                .unwrap_or_default(),
        ];
        values.extend(patient.scale_values().map(|(_, v)| v.to_string()));
        let (label, confidence) = match &self.cancer_prediction {
            Some(p) => (p.label.clone(), p.confidence.to_string()),
            None => (String::new(), String::new()),
        };
        let scores = &self.assessment.scores;
        values.extend([
            label,
            confidence,
            scores.recurrence_risk.to_string(),
            scores.complication_risk.to_string(),
            scores.survival_probability.to_string(),
        ]);
        values
            .iter()
            .map(|v| csv_escape(v))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// e.g. `thoracic-diagnostic-2026-03-14.json`
    pub fn export_file_name(&self, extension: &str) -> String {
        format!(
            "thoracic-diagnostic-{}.{extension}",
            self.generated_at.format("%Y-%m-%d")
        )
    }
}

fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
