//! Analysis session: one working profile plus its pending suggestions.
//!
//! A session is created with a default profile, mutated as entity batches
//! arrive or the user edits fields, and reset when the workflow restarts.
//! Sessions share nothing; each owns its profile outright.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::EngineError;
use crate::mapping::{generate_suggestions, merge_entities, MergeSummary, Suggestion};
use crate::models::{Entity, ManualEdit, PatientProfile, ProfileField, RiskAssessment};
use crate::risk;

/// A suggestion awaiting the user's apply/dismiss decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSuggestion {
    pub id: Uuid,
    #[serde(flatten)]
    pub suggestion: Suggestion,
}

impl PendingSuggestion {
    fn new(suggestion: Suggestion) -> Self {
        Self {
            id: Uuid::new_v4(),
            suggestion,
        }
    }
}

pub struct AnalysisSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    profile: PatientProfile,
    pending: Vec<PendingSuggestion>,
    entities: Vec<Entity>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, "Analysis session started");
        Self {
            id,
            started_at: Utc::now(),
            profile: PatientProfile::new(),
            pending: Vec::new(),
            entities: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn profile(&self) -> &PatientProfile {
        &self.profile
    }

    pub fn pending_suggestions(&self) -> &[PendingSuggestion] {
        &self.pending
    }

    /// Every entity received this session, in arrival order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Merge a batch into the profile and queue its suggestions.
    pub fn ingest(&mut self, entities: &[Entity]) -> MergeSummary {
        let summary = merge_entities(&mut self.profile, entities);
        let suggestions = generate_suggestions(entities);
        tracing::debug!(
            session = %self.id,
            suggestions = suggestions.len(),
            "Queued suggestions"
        );
        self.pending
            .extend(suggestions.into_iter().map(PendingSuggestion::new));
        self.entities.extend_from_slice(entities);
        summary
    }

    /// Direct user edit; the field stops being attributed to the mapper.
    pub fn edit(&mut self, edit: ManualEdit) -> Result<(), EngineError> {
        self.profile.edit(edit)?;
        tracing::debug!(session = %self.id, field = %edit.field(), "Manual edit");
        Ok(())
    }

    /// Write a suggestion's value onto the profile and drop it from the
    /// pending list. Other suggestions for the same field stay queued.
    ///
    /// The applied value came from the mapper, so the field is attributed
    /// to it in provenance.
    pub fn apply_suggestion(&mut self, id: Uuid) -> Result<Suggestion, EngineError> {
        let pending = self.take_pending(id)?;
        let suggestion = pending.suggestion;
        self.profile
            .set_scale(suggestion.field, suggestion.suggested_value);
        self.profile
            .provenance
            .mark(ProfileField::Scale(suggestion.field));
        tracing::debug!(
            session = %self.id,
            field = %suggestion.field,
            value = suggestion.suggested_value.get(),
            "Suggestion applied"
        );
        Ok(suggestion)
    }

    /// Drop a suggestion without applying it.
    pub fn dismiss_suggestion(&mut self, id: Uuid) -> Result<Suggestion, EngineError> {
        let pending = self.take_pending(id)?;
        tracing::debug!(session = %self.id, field = %pending.suggestion.field, "Suggestion dismissed");
        Ok(pending.suggestion)
    }

    fn take_pending(&mut self, id: Uuid) -> Result<PendingSuggestion, EngineError> {
        let index = self
            .pending
            .iter()
            .position(|p| p.id == id)
            .ok_or(EngineError::SuggestionNotFound(id))?;
        Ok(self.pending.remove(index))
    }

    /// Score the current profile against the classifier's label.
    pub fn assess(&self, diagnosis_label: &str) -> RiskAssessment {
        risk::assess(&self.profile, diagnosis_label)
    }

    /// Start over: default profile, no suggestions, no entities.
    pub fn reset(&mut self) {
        tracing::debug!(session = %self.id, "Analysis session reset");
        self.profile = PatientProfile::new();
        self.pending.clear();
        self.entities.clear();
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, ScaleField};

    fn smoker_batch() -> Vec<Entity> {
        vec![
            Entity::new("age", "68-year-old male", 0.95),
            Entity::new("gender", "male", 0.98),
            Entity::new("history", "current smoker", 0.85),
            Entity::new("symptom", "mild wheezing", 0.5),
        ]
    }

    #[test]
    fn ingest_populates_profile_and_suggestions() {
        let mut session = AnalysisSession::new();
        let summary = session.ingest(&smoker_batch());

        assert_eq!(summary.applied, 4);
        let profile = session.profile();
        assert_eq!(profile.age, Some(68));
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.smoking.get(), 8);
        assert_eq!(profile.wheezing.get(), 3);

        // Only the smoking entity is both resolvable and >= MEDIUM.
        let pending = session.pending_suggestions();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].suggestion.field, ScaleField::Smoking);
        assert_eq!(session.entities().len(), 4);
    }

    #[test]
    fn apply_overwrites_field_and_removes_only_that_suggestion() {
        let mut session = AnalysisSession::new();
        session.ingest(&[
            Entity::new("symptom", "mild dry cough", 0.7),
            Entity::new("symptom", "persistent dry cough", 0.7),
        ]);
        assert_eq!(session.profile().dry_cough.get(), 7);
        session.edit(ManualEdit::Scale(ScaleField::DryCough, 2)).unwrap();

        let first = session.pending_suggestions()[0].id;
        let applied = session.apply_suggestion(first).unwrap();

        assert_eq!(applied.suggested_value.get(), 3);
        assert_eq!(session.profile().dry_cough.get(), 3);
        assert!(session.profile().provenance.contains(ScaleField::DryCough));
        assert_eq!(session.pending_suggestions().len(), 1);
        assert_eq!(
            session.pending_suggestions()[0].suggestion.field,
            ScaleField::DryCough
        );
    }

    #[test]
    fn dismiss_leaves_profile_alone() {
        let mut session = AnalysisSession::new();
        session.ingest(&[Entity::new("obesity", "obese", 0.9)]);
        session.edit(ManualEdit::Scale(ScaleField::Obesity, 4)).unwrap();

        let id = session.pending_suggestions()[0].id;
        session.dismiss_suggestion(id).unwrap();

        assert!(session.pending_suggestions().is_empty());
        assert_eq!(session.profile().obesity.get(), 4);
        assert!(!session.profile().provenance.contains(ScaleField::Obesity));
    }

    #[test]
    fn unknown_suggestion_id_is_an_error() {
        let mut session = AnalysisSession::new();
        let missing = Uuid::new_v4();
        assert!(matches!(
            session.apply_suggestion(missing),
            Err(EngineError::SuggestionNotFound(id)) if id == missing
        ));
        assert!(session.dismiss_suggestion(missing).is_err());
    }

    #[test]
    fn manual_edit_removes_provenance() {
        let mut session = AnalysisSession::new();
        session.ingest(&smoker_batch());
        session.edit(ManualEdit::Age(Some(70))).unwrap();

        let profile = session.profile();
        assert_eq!(profile.age, Some(70));
        assert!(!profile.provenance.contains(ProfileField::Age));
        assert!(profile.provenance.contains(ScaleField::Smoking));
    }

    #[test]
    fn later_batches_still_mark_edited_fields() {
        let mut session = AnalysisSession::new();
        session.edit(ManualEdit::Scale(ScaleField::Smoking, 2)).unwrap();
        session.ingest(&[Entity::new("history", "former smoker", 0.5)]);
        assert_eq!(session.profile().smoking.get(), 4);
        assert!(session.profile().provenance.contains(ScaleField::Smoking));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = AnalysisSession::new();
        session.ingest(&smoker_batch());
        session.reset();
        assert_eq!(session.profile(), &PatientProfile::new());
        assert!(session.pending_suggestions().is_empty());
        assert!(session.entities().is_empty());
    }

    #[test]
    fn assess_uses_current_profile() {
        let mut session = AnalysisSession::new();
        session.edit(ManualEdit::Age(Some(65))).unwrap();
        let assessment = session.assess("normal");
        assert!((assessment.scores.recurrence_risk - 0.20).abs() < 1e-9);
        assert!((assessment.scores.complication_risk - 0.25).abs() < 1e-9);
        assert!((assessment.scores.survival_probability - 0.85).abs() < 1e-9);
    }
}
