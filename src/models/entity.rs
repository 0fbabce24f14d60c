use serde::{Deserialize, Serialize};

/// Category tag attached to an extracted entity by the NER service.
///
/// Categories the engine treats specially get their own arm; everything else
/// lands in `Other` with the lower-cased tag preserved, since the tag itself
/// may still name a profile field ("smoking", "chest pain", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityCategory {
    Age,
    Gender,
    Condition,
    Diagnosis,
    Symptom,
    History,
    Treatment,
    Other(String),
}

impl EntityCategory {
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        match lower.as_str() {
            "age" => Self::Age,
            "gender" => Self::Gender,
            "condition" => Self::Condition,
            "diagnosis" => Self::Diagnosis,
            "symptom" => Self::Symptom,
            "history" => Self::History,
            "treatment" => Self::Treatment,
            _ => Self::Other(lower),
        }
    }

    /// Lower-cased tag, as matched against the synonym tables.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Condition => "condition",
            Self::Diagnosis => "diagnosis",
            Self::Symptom => "symptom",
            Self::History => "history",
            Self::Treatment => "treatment",
            Self::Other(tag) => tag,
        }
    }

    /// Identity categories never flow through the field resolver.
    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            Self::Age | Self::Gender | Self::Condition | Self::Diagnosis
        )
    }
}

impl From<String> for EntityCategory {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for EntityCategory {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<EntityCategory> for String {
    fn from(category: EntityCategory) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single observation extracted from clinical notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(alias = "entity")]
    pub category: EntityCategory,
    #[serde(alias = "value")]
    pub text: String,
    /// NER confidence in [0, 1].
    pub confidence: f64,
}

impl Entity {
    pub fn new(category: impl Into<EntityCategory>, text: impl Into<String>, confidence: f64) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
            confidence,
        }
    }
}
