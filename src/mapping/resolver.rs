//! Field resolution: which profile attribute an entity speaks about.
//!
//! All tables are ordered slices. Lookups scan in table order and the first
//! match wins, so "cough" never shadows "dry cough" and results are stable.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CancerType, EntityCategory, Gender, ScaleField};

/// General synonym table, matched against the category tag and then the text.
pub const FIELD_SYNONYMS: &[(&str, ScaleField)] = &[
    // Risk factors
    ("air pollution", ScaleField::AirPollution),
    ("alcohol", ScaleField::AlcoholUse),
    ("dust allergy", ScaleField::DustAllergy),
    ("occupational hazards", ScaleField::OccupationalHazards),
    ("genetic risk", ScaleField::GeneticRisk),
    ("chronic lung disease", ScaleField::ChronicLungDisease),
    ("copd", ScaleField::ChronicLungDisease),
    ("balanced diet", ScaleField::BalancedDiet),
    ("diet", ScaleField::BalancedDiet),
    ("obesity", ScaleField::Obesity),
    ("passive smoking", ScaleField::PassiveSmoker),
    ("smoking", ScaleField::Smoking),
    ("passive smoker", ScaleField::PassiveSmoker),
    ("secondhand smoke", ScaleField::PassiveSmoker),
    // Symptoms
    ("chest pain", ScaleField::ChestPain),
    ("coughing blood", ScaleField::CoughingOfBlood),
    ("hemoptysis", ScaleField::CoughingOfBlood),
    ("fatigue", ScaleField::Fatigue),
    ("weight loss", ScaleField::WeightLoss),
    ("shortness of breath", ScaleField::ShortnessOfBreath),
    ("dyspnea", ScaleField::ShortnessOfBreath),
    ("wheezing", ScaleField::Wheezing),
    ("swallowing difficulty", ScaleField::SwallowingDifficulty),
    ("dysphagia", ScaleField::SwallowingDifficulty),
    ("clubbing", ScaleField::ClubbingOfFingerNails),
    ("finger clubbing", ScaleField::ClubbingOfFingerNails),
    ("frequent cold", ScaleField::FrequentCold),
    ("colds", ScaleField::FrequentCold),
    ("dry cough", ScaleField::DryCough),
    ("cough", ScaleField::DryCough),
    ("snoring", ScaleField::Snoring),
];

/// Word stems for `symptom` entities the general table missed.
pub const SYMPTOM_SYNONYMS: &[(&str, ScaleField)] = &[
    ("chest pain", ScaleField::ChestPain),
    ("pain", ScaleField::ChestPain),
    ("blood", ScaleField::CoughingOfBlood),
    ("hemoptysis", ScaleField::CoughingOfBlood),
    ("fatigue", ScaleField::Fatigue),
    ("tired", ScaleField::Fatigue),
    ("weight loss", ScaleField::WeightLoss),
    ("losing weight", ScaleField::WeightLoss),
    ("shortness", ScaleField::ShortnessOfBreath),
    ("breath", ScaleField::ShortnessOfBreath),
    ("dyspnea", ScaleField::ShortnessOfBreath),
    ("wheez", ScaleField::Wheezing),
    ("swallow", ScaleField::SwallowingDifficulty),
    ("clubbing", ScaleField::ClubbingOfFingerNails),
    ("finger", ScaleField::ClubbingOfFingerNails),
    ("cold", ScaleField::FrequentCold),
    ("cough", ScaleField::DryCough),
    ("snor", ScaleField::Snoring),
    // Radiological consolidation is reported alongside chest symptoms.
    ("consolidation", ScaleField::ChestPain),
];

/// Word stems for `history` entities.
pub const HISTORY_SYNONYMS: &[(&str, ScaleField)] = &[
    ("smok", ScaleField::Smoking),
    ("tobacco", ScaleField::Smoking),
    ("cigarette", ScaleField::Smoking),
    ("alcohol", ScaleField::AlcoholUse),
    ("drink", ScaleField::AlcoholUse),
    ("pollution", ScaleField::AirPollution),
    ("dust", ScaleField::DustAllergy),
    ("occupational", ScaleField::OccupationalHazards),
    ("work", ScaleField::OccupationalHazards),
    ("asbestos", ScaleField::OccupationalHazards),
    ("diet", ScaleField::BalancedDiet),
    ("nutrition", ScaleField::BalancedDiet),
    ("genetic", ScaleField::GeneticRisk),
    ("family", ScaleField::GeneticRisk),
    ("hereditary", ScaleField::GeneticRisk),
];

/// `treatment` entities: oxygen therapy implies severe breathlessness.
pub const TREATMENT_SYNONYMS: &[(&str, ScaleField)] = &[("oxygen", ScaleField::ShortnessOfBreath)];

/// Substring table for `condition` / `diagnosis` entities.
pub const CANCER_TYPE_SYNONYMS: &[(&str, CancerType)] = &[
    ("adenocarcinoma", CancerType::Adenocarcinoma),
    ("squamous cell carcinoma", CancerType::Squamous),
    ("squamous", CancerType::Squamous),
    ("large cell carcinoma", CancerType::LargeCell),
    ("large cell", CancerType::LargeCell),
    ("small cell", CancerType::SmallCell),
    ("normal", CancerType::Normal),
    ("no cancer", CancerType::Normal),
    ("benign", CancerType::Normal),
];

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid integer pattern"));

fn first_contained<T: Copy>(table: &[(&str, T)], haystack: &str) -> Option<T> {
    table
        .iter()
        .find(|(term, _)| haystack.contains(term))
        .map(|&(_, target)| target)
}

/// Resolve a non-identity entity to a scale field.
///
/// Order: category exact match, category substring, text substring, then
/// the category-specific table for symptom/history/treatment.
/// Identity categories (age, gender, condition, diagnosis) return `None`;
/// the merger handles them directly.
pub fn resolve_field(category: &EntityCategory, text: &str) -> Option<ScaleField> {
    if category.is_identity() {
        return None;
    }

    let tag = category.as_str();
    if let Some(&(_, field)) = FIELD_SYNONYMS.iter().find(|(term, _)| *term == tag) {
        return Some(field);
    }
    if let Some(field) = first_contained(FIELD_SYNONYMS, tag) {
        return Some(field);
    }

    let text = text.to_lowercase();
    if let Some(field) = first_contained(FIELD_SYNONYMS, &text) {
        return Some(field);
    }

    match category {
        EntityCategory::Symptom => first_contained(SYMPTOM_SYNONYMS, &text),
        EntityCategory::History => first_contained(HISTORY_SYNONYMS, &text),
        EntityCategory::Treatment => first_contained(TREATMENT_SYNONYMS, &text),
        EntityCategory::Age
        | EntityCategory::Gender
        | EntityCategory::Condition
        | EntityCategory::Diagnosis
        | EntityCategory::Other(_) => None,
    }
}

/// First integer in the text, e.g. 68 from "68-year-old male".
pub fn parse_age(text: &str) -> Option<u32> {
    first_integer(text).and_then(|n| u32::try_from(n).ok())
}

/// "female" wins over the "male" it contains.
pub fn classify_gender(text: &str) -> Option<Gender> {
    let lower = text.to_lowercase();
    if lower.contains("male") && !lower.contains("female") {
        Some(Gender::Male)
    } else if lower.contains("female") {
        Some(Gender::Female)
    } else {
        None
    }
}

pub fn resolve_cancer_type(text: &str) -> Option<CancerType> {
    first_contained(CANCER_TYPE_SYNONYMS, &text.to_lowercase())
}

/// First run of ASCII digits in `text`. Runs too long for i64 saturate to
/// `i64::MAX`.
pub(crate) fn first_integer(text: &str) -> Option<i64> {
    FIRST_INTEGER
        .find(text)
        .map(|m| m.as_str().parse().unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(raw: &str) -> EntityCategory {
        EntityCategory::parse(raw)
    }

    #[test]
    fn category_exact_match() {
        assert_eq!(resolve_field(&cat("smoking"), "yes"), Some(ScaleField::Smoking));
        assert_eq!(resolve_field(&cat("COPD"), "x"), Some(ScaleField::ChronicLungDisease));
        assert_eq!(resolve_field(&cat("dysphagia"), ""), Some(ScaleField::SwallowingDifficulty));
    }

    #[test]
    fn category_substring_match_precedes_text() {
        // Category mentions alcohol, text mentions chest pain: category wins.
        assert_eq!(
            resolve_field(&cat("alcohol use"), "chest pain"),
            Some(ScaleField::AlcoholUse)
        );
    }

    #[test]
    fn text_scan_follows_table_order() {
        // "dry cough" precedes "cough" in the table.
        assert_eq!(
            resolve_field(&cat("finding"), "Persistent dry cough"),
            Some(ScaleField::DryCough)
        );
        // "chest pain" precedes "cough".
        assert_eq!(
            resolve_field(&cat("finding"), "cough with chest pain"),
            Some(ScaleField::ChestPain)
        );
    }

    #[test]
    fn passive_smoking_is_not_active_smoking() {
        assert_eq!(
            resolve_field(&cat("exposure"), "passive smoking at home"),
            Some(ScaleField::PassiveSmoker)
        );
        assert_eq!(
            resolve_field(&cat("exposure"), "secondhand smoke"),
            Some(ScaleField::PassiveSmoker)
        );
    }

    #[test]
    fn history_table_applies_after_general_miss() {
        assert_eq!(
            resolve_field(&EntityCategory::History, "current smoker"),
            Some(ScaleField::Smoking)
        );
        assert_eq!(
            resolve_field(&EntityCategory::History, "asbestos exposure at work"),
            Some(ScaleField::OccupationalHazards)
        );
        assert_eq!(
            resolve_field(&EntityCategory::History, "mother had lung cancer, family"),
            Some(ScaleField::GeneticRisk)
        );
    }

    #[test]
    fn symptom_table_applies_after_general_miss() {
        assert_eq!(
            resolve_field(&EntityCategory::Symptom, "feels tired"),
            Some(ScaleField::Fatigue)
        );
        assert_eq!(
            resolve_field(&EntityCategory::Symptom, "breathless on stairs"),
            Some(ScaleField::ShortnessOfBreath)
        );
        assert_eq!(
            resolve_field(&EntityCategory::Symptom, "right lower lobe consolidation"),
            Some(ScaleField::ChestPain)
        );
    }

    #[test]
    fn treatment_oxygen_resolves_to_breathlessness() {
        assert_eq!(
            resolve_field(&EntityCategory::Treatment, "home oxygen 2L"),
            Some(ScaleField::ShortnessOfBreath)
        );
        assert_eq!(resolve_field(&EntityCategory::Treatment, "chemotherapy"), None);
    }

    #[test]
    fn category_tables_do_not_leak_across_categories() {
        // "tired" is only a symptom stem.
        assert_eq!(resolve_field(&EntityCategory::History, "tired"), None);
        assert_eq!(resolve_field(&cat("note"), "tired"), None);
    }

    #[test]
    fn identity_categories_never_resolve() {
        assert_eq!(resolve_field(&EntityCategory::Age, "smoking since 20"), None);
        assert_eq!(resolve_field(&EntityCategory::Diagnosis, "copd"), None);
    }

    #[test]
    fn unresolvable_entity_is_none() {
        assert_eq!(resolve_field(&cat("medication"), "metformin 500mg"), None);
        assert_eq!(resolve_field(&cat(""), ""), None);
    }

    #[test]
    fn age_takes_first_integer() {
        assert_eq!(parse_age("68-year-old male"), Some(68));
        assert_eq!(parse_age("aged 7 (born 2018)"), Some(7));
        assert_eq!(parse_age("elderly"), None);
        assert_eq!(parse_age("99999999999999999999"), None);
    }

    #[test]
    fn integers_are_ascii_digits_only() {
        assert_eq!(parse_age("عمر ٦٨ / 68 years"), Some(68));
        assert_eq!(first_integer("٦٨ (68) year old"), Some(68));
        assert_eq!(first_integer("٦٨"), None);
    }

    #[test]
    fn oversized_integer_saturates() {
        assert_eq!(first_integer("100000000000000000000 pack-years"), Some(i64::MAX));
    }

    #[test]
    fn gender_classification() {
        assert_eq!(classify_gender("68-year-old Male"), Some(Gender::Male));
        assert_eq!(classify_gender("Female"), Some(Gender::Female));
        assert_eq!(classify_gender("female patient"), Some(Gender::Female));
        assert_eq!(classify_gender("patient"), None);
    }

    #[test]
    fn cancer_type_table_order() {
        assert_eq!(
            resolve_cancer_type("Squamous cell carcinoma of the left lung"),
            Some(CancerType::Squamous)
        );
        assert_eq!(resolve_cancer_type("large cell"), Some(CancerType::LargeCell));
        assert_eq!(
            resolve_cancer_type("Small cell lung cancer"),
            Some(CancerType::SmallCell)
        );
        assert_eq!(resolve_cancer_type("benign nodule"), Some(CancerType::Normal));
        assert_eq!(resolve_cancer_type("pneumonia"), None);
    }
}
