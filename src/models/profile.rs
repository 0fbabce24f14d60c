use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::enums::{CancerType, Gender, ScaleField};
use crate::error::EngineError;

// ═══════════════════════════════════════════════════════════
// ScaleValue: integer severity in [1, 9]
// ═══════════════════════════════════════════════════════════

/// Severity on the 1-9 scale used by every risk-factor and symptom field.
///
/// The only constructors are range-checked, so a profile can never hold a
/// value outside [1, 9].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ScaleValue(u8);

impl ScaleValue {
    pub const MIN: ScaleValue = ScaleValue(1);
    pub const MAX: ScaleValue = ScaleValue(9);

    /// `None` when `value` is outside [1, 9].
    pub fn new(value: i64) -> Option<Self> {
        (1..=9).contains(&value).then_some(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ScaleValue {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for ScaleValue {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(EngineError::OutOfRange {
            field: "scale".into(),
            value,
        })
    }
}

impl From<ScaleValue> for u8 {
    fn from(value: ScaleValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════
// ProfileField: any attribute provenance can track
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProfileField {
    Age,
    Gender,
    CancerType,
    Scale(ScaleField),
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::CancerType => "cancerType",
            Self::Scale(field) => field.as_str(),
        }
    }
}

impl From<ScaleField> for ProfileField {
    fn from(field: ScaleField) -> Self {
        Self::Scale(field)
    }
}

impl FromStr for ProfileField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age" => Ok(Self::Age),
            "gender" => Ok(Self::Gender),
            "cancerType" => Ok(Self::CancerType),
            other => ScaleField::from_str(other)
                .map(Self::Scale)
                .map_err(|_| EngineError::InvalidEnum {
                    field: "ProfileField".into(),
                    value: other.into(),
                }),
        }
    }
}

impl TryFrom<String> for ProfileField {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProfileField> for String {
    fn from(field: ProfileField) -> Self {
        field.as_str().to_string()
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════
// Provenance
// ═══════════════════════════════════════════════════════════

/// Fields whose current value was written by the automated mapping rather
/// than by the user. Ordered so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Provenance(BTreeSet<ProfileField>);

impl Provenance {
    pub fn mark(&mut self, field: impl Into<ProfileField>) {
        self.0.insert(field.into());
    }

    pub fn clear(&mut self, field: impl Into<ProfileField>) {
        self.0.remove(&field.into());
    }

    pub fn contains(&self, field: impl Into<ProfileField>) -> bool {
        self.0.contains(&field.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════
// PatientProfile
// ═══════════════════════════════════════════════════════════

/// Structured patient record for one analysis session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub age: Option<u32>,
    pub gender: Gender,
    pub cancer_type: Option<CancerType>,

    // Risk factors
    pub air_pollution: ScaleValue,
    pub alcohol_use: ScaleValue,
    pub dust_allergy: ScaleValue,
    pub occupational_hazards: ScaleValue,
    pub genetic_risk: ScaleValue,
    pub chronic_lung_disease: ScaleValue,
    pub balanced_diet: ScaleValue,
    pub obesity: ScaleValue,
    pub smoking: ScaleValue,
    pub passive_smoker: ScaleValue,

    // Symptoms
    pub chest_pain: ScaleValue,
    pub coughing_of_blood: ScaleValue,
    pub fatigue: ScaleValue,
    pub weight_loss: ScaleValue,
    pub shortness_of_breath: ScaleValue,
    pub wheezing: ScaleValue,
    pub swallowing_difficulty: ScaleValue,
    pub clubbing_of_finger_nails: ScaleValue,
    pub frequent_cold: ScaleValue,
    pub dry_cough: ScaleValue,
    pub snoring: ScaleValue,

    /// Serialized under the name the review UI uses for auto-filled fields.
    #[serde(rename = "aiPopulatedFields")]
    pub provenance: Provenance,
}

/// A direct user edit. Always clears the field's provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ManualEdit {
    Age(Option<u32>),
    Gender(Gender),
    CancerType(Option<CancerType>),
    Scale(ScaleField, i64),
}

impl ManualEdit {
    pub fn field(&self) -> ProfileField {
        match self {
            Self::Age(_) => ProfileField::Age,
            Self::Gender(_) => ProfileField::Gender,
            Self::CancerType(_) => ProfileField::CancerType,
            Self::Scale(field, _) => ProfileField::Scale(*field),
        }
    }
}

impl PatientProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self, field: ScaleField) -> ScaleValue {
        match field {
            ScaleField::AirPollution => self.air_pollution,
            ScaleField::AlcoholUse => self.alcohol_use,
            ScaleField::DustAllergy => self.dust_allergy,
            ScaleField::OccupationalHazards => self.occupational_hazards,
            ScaleField::GeneticRisk => self.genetic_risk,
            ScaleField::ChronicLungDisease => self.chronic_lung_disease,
            ScaleField::BalancedDiet => self.balanced_diet,
            ScaleField::Obesity => self.obesity,
            ScaleField::Smoking => self.smoking,
            ScaleField::PassiveSmoker => self.passive_smoker,
            ScaleField::ChestPain => self.chest_pain,
            ScaleField::CoughingOfBlood => self.coughing_of_blood,
            ScaleField::Fatigue => self.fatigue,
            ScaleField::WeightLoss => self.weight_loss,
            ScaleField::ShortnessOfBreath => self.shortness_of_breath,
            ScaleField::Wheezing => self.wheezing,
            ScaleField::SwallowingDifficulty => self.swallowing_difficulty,
            ScaleField::ClubbingOfFingerNails => self.clubbing_of_finger_nails,
            ScaleField::FrequentCold => self.frequent_cold,
            ScaleField::DryCough => self.dry_cough,
            ScaleField::Snoring => self.snoring,
        }
    }

    fn scale_mut(&mut self, field: ScaleField) -> &mut ScaleValue {
        match field {
            ScaleField::AirPollution => &mut self.air_pollution,
            ScaleField::AlcoholUse => &mut self.alcohol_use,
            ScaleField::DustAllergy => &mut self.dust_allergy,
            ScaleField::OccupationalHazards => &mut self.occupational_hazards,
            ScaleField::GeneticRisk => &mut self.genetic_risk,
            ScaleField::ChronicLungDisease => &mut self.chronic_lung_disease,
            ScaleField::BalancedDiet => &mut self.balanced_diet,
            ScaleField::Obesity => &mut self.obesity,
            ScaleField::Smoking => &mut self.smoking,
            ScaleField::PassiveSmoker => &mut self.passive_smoker,
            ScaleField::ChestPain => &mut self.chest_pain,
            ScaleField::CoughingOfBlood => &mut self.coughing_of_blood,
            ScaleField::Fatigue => &mut self.fatigue,
            ScaleField::WeightLoss => &mut self.weight_loss,
            ScaleField::ShortnessOfBreath => &mut self.shortness_of_breath,
            ScaleField::Wheezing => &mut self.wheezing,
            ScaleField::SwallowingDifficulty => &mut self.swallowing_difficulty,
            ScaleField::ClubbingOfFingerNails => &mut self.clubbing_of_finger_nails,
            ScaleField::FrequentCold => &mut self.frequent_cold,
            ScaleField::DryCough => &mut self.dry_cough,
            ScaleField::Snoring => &mut self.snoring,
        }
    }

    /// Write a scale field without touching provenance.
    pub fn set_scale(&mut self, field: ScaleField, value: ScaleValue) {
        *self.scale_mut(field) = value;
    }

    /// Apply a user edit and drop the field from provenance.
    ///
    /// Scale edits outside [1, 9] are rejected and leave the profile untouched.
    pub fn edit(&mut self, edit: ManualEdit) -> Result<(), EngineError> {
        match edit {
            ManualEdit::Age(age) => self.age = age,
            ManualEdit::Gender(gender) => self.gender = gender,
            ManualEdit::CancerType(cancer_type) => self.cancer_type = cancer_type,
            ManualEdit::Scale(field, raw) => {
                let value = ScaleValue::new(raw).ok_or_else(|| EngineError::OutOfRange {
                    field: field.as_str().into(),
                    value: raw,
                })?;
                self.set_scale(field, value);
            }
        }
        self.provenance.clear(edit.field());
        Ok(())
    }

    /// Scale values in declaration order (risk factors, then symptoms).
    pub fn scale_values(&self) -> impl Iterator<Item = (ScaleField, ScaleValue)> + '_ {
        ScaleField::all().map(move |field| (field, self.scale(field)))
    }
}
