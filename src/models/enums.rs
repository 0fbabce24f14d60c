use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(EngineError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Gender {
    Unknown => "unknown",
    Male => "male",
    Female => "female",
    Other => "other",
});

impl Default for Gender {
    fn default() -> Self {
        Self::Unknown
    }
}

// Canonical labels shared by the profile's cancerType and the classifier output.
str_enum!(CancerType {
    Adenocarcinoma => "adenocarcinoma",
    Squamous => "squamous",
    LargeCell => "large cell carcinoma",
    SmallCell => "small cell lung cancer",
    Normal => "normal",
});

impl CancerType {
    /// Interpret a diagnosis label from the image classifier.
    ///
    /// Case-insensitive, whole-label match. Unrecognized labels yield `None`
    /// so the risk adjustment for the diagnosis is skipped.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "small cell lung cancer" | "small-cell lung cancer" | "small cell" | "small-cell" => {
                Some(Self::SmallCell)
            }
            "adenocarcinoma" => Some(Self::Adenocarcinoma),
            "squamous" | "squamous cell carcinoma" => Some(Self::Squamous),
            "large cell carcinoma" => Some(Self::LargeCell),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }
}

// Declaration order is the profile's field order (risk factors, then symptoms).
str_enum!(ScaleField {
    AirPollution => "airPollution",
    AlcoholUse => "alcoholUse",
    DustAllergy => "dustAllergy",
    OccupationalHazards => "occupationalHazards",
    GeneticRisk => "geneticRisk",
    ChronicLungDisease => "chronicLungDisease",
    BalancedDiet => "balancedDiet",
    Obesity => "obesity",
    Smoking => "smoking",
    PassiveSmoker => "passiveSmoker",
    ChestPain => "chestPain",
    CoughingOfBlood => "coughingOfBlood",
    Fatigue => "fatigue",
    WeightLoss => "weightLoss",
    ShortnessOfBreath => "shortnessOfBreath",
    Wheezing => "wheezing",
    SwallowingDifficulty => "swallowingDifficulty",
    ClubbingOfFingerNails => "clubbingOfFingerNails",
    FrequentCold => "frequentCold",
    DryCough => "dryCough",
    Snoring => "snoring",
});

impl ScaleField {
    pub const RISK_FACTORS: [ScaleField; 10] = [
        Self::AirPollution,
        Self::AlcoholUse,
        Self::DustAllergy,
        Self::OccupationalHazards,
        Self::GeneticRisk,
        Self::ChronicLungDisease,
        Self::BalancedDiet,
        Self::Obesity,
        Self::Smoking,
        Self::PassiveSmoker,
    ];

    pub const SYMPTOMS: [ScaleField; 11] = [
        Self::ChestPain,
        Self::CoughingOfBlood,
        Self::Fatigue,
        Self::WeightLoss,
        Self::ShortnessOfBreath,
        Self::Wheezing,
        Self::SwallowingDifficulty,
        Self::ClubbingOfFingerNails,
        Self::FrequentCold,
        Self::DryCough,
        Self::Snoring,
    ];

    pub fn all() -> impl Iterator<Item = ScaleField> {
        Self::RISK_FACTORS.into_iter().chain(Self::SYMPTOMS)
    }

    pub fn is_symptom(&self) -> bool {
        Self::SYMPTOMS.contains(self)
    }
}

str_enum!(RiskLevel {
    Low => "low",
    Moderate => "moderate",
    High => "high",
});
