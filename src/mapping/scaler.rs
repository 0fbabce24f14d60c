//! Severity scaling: turn an entity's text into a 1-9 level.
//!
//! Resolution order, first hit wins:
//! 1. exact lexicon phrase
//! 2. numeric amount with a unit cue (pack-years, kg lost)
//! 3. keyword cue inside the text
//! 4. treatment cue (oxygen)
//! 5. category default for high-confidence symptom/history entities

use crate::models::{EntityCategory, ScaleValue};

use super::confidence::thresholds;
use super::lexicon;
use super::resolver::first_integer;

/// Keyword cues, checked in this order.
const KEYWORD_LEVELS: &[(&[&str], u8)] = &[
    (&["persistent", "chronic"], 7),
    (&["severe", "intense"], 8),
    (&["mild", "slight"], 3),
    (&["moderate"], 5),
];

const OXYGEN_THERAPY_LEVEL: u8 = 8;
const HIGH_CONFIDENCE_SYMPTOM_LEVEL: u8 = 6;
const HIGH_CONFIDENCE_HISTORY_LEVEL: u8 = 5;

/// Compute the severity for a resolved entity.
///
/// Returns `None` when no rule applies or a rule yields a level outside
/// [1, 9]; the caller then writes nothing.
pub fn scale_value(text: &str, category: &EntityCategory, confidence: f64) -> Option<ScaleValue> {
    let level = raw_level(text, category, confidence)?;
    let value = ScaleValue::new(level);
    if value.is_none() {
        tracing::warn!(category = %category, level, "Scaled level outside 1-9, discarded");
    }
    value
}

fn raw_level(text: &str, category: &EntityCategory, confidence: f64) -> Option<i64> {
    // Age is an identity field, never a severity.
    if *category == EntityCategory::Age {
        return None;
    }

    let lower = text.trim().to_lowercase();

    if let Some(level) = lexicon::lookup(&lower) {
        return Some(i64::from(level));
    }

    if let Some(n) = first_integer(&lower) {
        if lower.contains("pack") && lower.contains("year") {
            return Some(pack_year_level(n));
        }
        if lower.contains("kg") && *category == EntityCategory::Symptom {
            return Some(weight_loss_level(n));
        }
    }

    if let Some(&(_, level)) = KEYWORD_LEVELS
        .iter()
        .find(|(cues, _)| cues.iter().any(|cue| lower.contains(cue)))
    {
        return Some(i64::from(level));
    }

    if *category == EntityCategory::Treatment && lower.contains("oxygen") {
        return Some(i64::from(OXYGEN_THERAPY_LEVEL));
    }

    if confidence > thresholds::HIGH {
        match category {
            EntityCategory::Symptom => return Some(i64::from(HIGH_CONFIDENCE_SYMPTOM_LEVEL)),
            EntityCategory::History => return Some(i64::from(HIGH_CONFIDENCE_HISTORY_LEVEL)),
            _ => {}
        }
    }

    None
}

/// Smoking history in pack-years.
fn pack_year_level(pack_years: i64) -> i64 {
    match pack_years {
        n if n >= 40 => 9,
        n if n >= 30 => 8,
        n if n >= 20 => 7,
        n if n >= 10 => 6,
        n if n >= 5 => 5,
        _ => 4,
    }
}

/// Weight lost, in kg.
fn weight_loss_level(kg: i64) -> i64 {
    match kg {
        n if n >= 10 => 8,
        n if n >= 5 => 6,
        n if n >= 2 => 4,
        _ => 3,
    }
}
