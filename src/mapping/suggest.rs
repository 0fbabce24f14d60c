//! Reviewable suggestions from medium-confidence entities.
//!
//! Runs independently of the merger and does not deduplicate against fields
//! the merger already wrote: an entity at or above MEDIUM confidence is both
//! auto-applied and suggested for the same field.

use serde::{Deserialize, Serialize};

use crate::models::{Entity, ScaleField, ScaleValue};

use super::confidence;
use super::resolver::resolve_field;
use super::scaler::scale_value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub field: ScaleField,
    pub suggested_value: ScaleValue,
    pub confidence: f64,
    pub reasoning: String,
}

/// One suggestion per eligible entity that both resolves and scales, in
/// input order.
pub fn generate_suggestions(entities: &[Entity]) -> Vec<Suggestion> {
    entities
        .iter()
        .filter(|entity| confidence::is_suggestion_eligible(entity.confidence))
        .filter_map(|entity| {
            let field = resolve_field(&entity.category, &entity.text)?;
            let suggested_value = scale_value(&entity.text, &entity.category, entity.confidence)?;
            Some(Suggestion {
                field,
                suggested_value,
                confidence: entity.confidence,
                reasoning: reasoning(&entity.text, entity.confidence),
            })
        })
        .collect()
}

fn reasoning(text: &str, confidence: f64) -> String {
    format!(
        "Detected \"{text}\" with {}% confidence",
        (confidence * 100.0).round() as i64
    )
}
