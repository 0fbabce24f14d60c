//! Profile merging: write resolved entity values onto the working profile.
//!
//! Entities are applied in input order. A later entity resolving to the same
//! field overwrites the earlier value (last write wins) and keeps the field
//! in provenance.

use crate::models::{Entity, EntityCategory, PatientProfile, ProfileField};

use super::confidence;
use super::resolver::{classify_gender, parse_age, resolve_cancer_type, resolve_field};
use super::scaler::scale_value;

/// Per-batch counters, for logging and callers that want to report coverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub considered: usize,
    pub discarded: usize,
    pub applied: usize,
    pub unresolved: usize,
}

/// Apply one entity. Returns the field written, if any.
///
/// Low-confidence and unresolvable entities leave the profile untouched.
pub fn merge_entity(profile: &mut PatientProfile, entity: &Entity) -> Option<ProfileField> {
    if !confidence::is_auto_apply_eligible(entity.confidence) {
        return None;
    }

    let written = match &entity.category {
        EntityCategory::Age => parse_age(&entity.text).map(|age| {
            profile.age = Some(age);
            ProfileField::Age
        }),
        EntityCategory::Gender => classify_gender(&entity.text).map(|gender| {
            profile.gender = gender;
            ProfileField::Gender
        }),
        EntityCategory::Condition | EntityCategory::Diagnosis => {
            resolve_cancer_type(&entity.text).map(|cancer_type| {
                profile.cancer_type = Some(cancer_type);
                ProfileField::CancerType
            })
        }
        category => {
            let field = resolve_field(category, &entity.text)?;
            let value = scale_value(&entity.text, category, entity.confidence)?;
            profile.set_scale(field, value);
            Some(ProfileField::Scale(field))
        }
    }?;

    profile.provenance.mark(written);
    Some(written)
}

/// Apply a batch of entities in order onto `profile`.
pub fn merge_entities(profile: &mut PatientProfile, entities: &[Entity]) -> MergeSummary {
    let mut summary = MergeSummary {
        considered: entities.len(),
        ..MergeSummary::default()
    };

    for entity in entities {
        if !confidence::is_auto_apply_eligible(entity.confidence) {
            summary.discarded += 1;
            tracing::debug!(
                category = %entity.category,
                confidence = entity.confidence,
                "Entity below confidence floor, dropped"
            );
            continue;
        }

        match merge_entity(profile, entity) {
            Some(field) => {
                summary.applied += 1;
                tracing::debug!(
                    category = %entity.category,
                    field = %field,
                    confidence = entity.confidence,
                    "Entity applied to profile"
                );
            }
            None => {
                summary.unresolved += 1;
                tracing::debug!(category = %entity.category, "Entity did not resolve to a field");
            }
        }
    }

    tracing::info!(
        considered = summary.considered,
        applied = summary.applied,
        discarded = summary.discarded,
        unresolved = summary.unresolved,
        "Merged entity batch"
    );
    summary
}

/// Pure form: merge onto a copy of `baseline` and return it.
pub fn map_entities(entities: &[Entity], baseline: &PatientProfile) -> PatientProfile {
    let mut profile = baseline.clone();
    merge_entities(&mut profile, entities);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CancerType, Gender, ScaleField};

    #[test]
    fn age_entity_sets_age_and_provenance() {
        let profile = map_entities(
            &[Entity::new("age", "68-year-old male", 0.95)],
            &PatientProfile::new(),
        );
        assert_eq!(profile.age, Some(68));
        assert!(profile.provenance.contains(ProfileField::Age));
        // Age text is not read as gender.
        assert_eq!(profile.gender, Gender::Unknown);
    }

    #[test]
    fn age_skips_non_ascii_digits() {
        let profile = map_entities(
            &[Entity::new("age", "٦٨ (68) year old", 0.95)],
            &PatientProfile::new(),
        );
        assert_eq!(profile.age, Some(68));
    }

    #[test]
    fn current_smoker_history_sets_smoking_eight() {
        let profile = map_entities(
            &[Entity::new("history", "current smoker", 0.85)],
            &PatientProfile::new(),
        );
        assert_eq!(profile.smoking.get(), 8);
        assert!(profile.provenance.contains(ScaleField::Smoking));
    }

    #[test]
    fn low_confidence_entity_has_no_effect() {
        let baseline = PatientProfile::new();
        let profile = map_entities(
            &[
                Entity::new("history", "current smoker", 0.39),
                Entity::new("age", "70", 0.1),
            ],
            &baseline,
        );
        assert_eq!(profile, baseline);
    }

    #[test]
    fn gender_and_cancer_type() {
        let profile = map_entities(
            &[
                Entity::new("gender", "Female", 0.98),
                Entity::new("diagnosis", "Adenocarcinoma of the right upper lobe", 0.9),
            ],
            &PatientProfile::new(),
        );
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.cancer_type, Some(CancerType::Adenocarcinoma));
        assert!(profile.provenance.contains(ProfileField::Gender));
        assert!(profile.provenance.contains(ProfileField::CancerType));
    }

    #[test]
    fn unclassifiable_identity_entities_are_skipped() {
        let baseline = PatientProfile::new();
        let profile = map_entities(
            &[
                Entity::new("gender", "unspecified", 0.9),
                Entity::new("condition", "pneumonia", 0.9),
                Entity::new("age", "elderly", 0.9),
            ],
            &baseline,
        );
        assert_eq!(profile, baseline);
    }

    #[test]
    fn last_write_wins() {
        let profile = map_entities(
            &[
                Entity::new("symptom", "mild chest pain", 0.7),
                Entity::new("symptom", "severe chest pain", 0.7),
            ],
            &PatientProfile::new(),
        );
        assert_eq!(profile.chest_pain.get(), 8);
        assert_eq!(profile.provenance.len(), 1);
    }

    #[test]
    fn resolved_field_without_scale_is_not_written() {
        let baseline = PatientProfile::new();
        let mut profile = baseline.clone();
        let written = merge_entity(&mut profile, &Entity::new("symptom", "wheezing", 0.5));
        assert_eq!(written, None);
        assert_eq!(profile, baseline);
    }

    #[test]
    fn one_bad_entity_does_not_block_the_rest() {
        let mut profile = PatientProfile::new();
        let summary = merge_entities(
            &mut profile,
            &[
                Entity::new("medication", "metformin", 0.9),
                Entity::new("history", "current smoker", 0.2),
                Entity::new("symptom", "weight loss of 6 kg", 0.9),
            ],
        );
        assert_eq!(
            summary,
            MergeSummary {
                considered: 3,
                discarded: 1,
                applied: 1,
                unresolved: 1,
            }
        );
        assert_eq!(profile.smoking.get(), 1);
        assert_eq!(profile.weight_loss.get(), 6);
    }

    #[test]
    fn mapping_is_idempotent_from_same_baseline() {
        let entities = vec![
            Entity::new("age", "72", 0.9),
            Entity::new("history", "30 pack year smoking history", 0.9),
            Entity::new("symptom", "persistent dry cough", 0.65),
        ];
        let baseline = PatientProfile::new();
        let first = map_entities(&entities, &baseline);
        let second = map_entities(&entities, &baseline);
        assert_eq!(first, second);
        assert_eq!(first.smoking.get(), 8);
        assert_eq!(first.dry_cough.get(), 7);
    }
}
