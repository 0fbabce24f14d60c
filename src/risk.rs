//! Risk aggregation: profile + diagnosis label → three bounded scores.
//!
//! Additive rule model. Each adjustment is a fixed weight times how far a
//! scale field sits above its floor of 1; the diagnosis label adds a fixed
//! offset. All three outputs are clamped to [0, 1] independently at the end.

use crate::models::{
    CancerType, PatientProfile, RiskAssessment, RiskLevel, RiskLevels, RiskScores, ScaleField,
    ScaleValue,
};

/// Rule weights
pub mod weights {
    pub const BASE_RECURRENCE: f64 = 0.30;
    pub const BASE_COMPLICATION: f64 = 0.30;
    pub const BASE_SURVIVAL: f64 = 0.70;

    /// Per point of smoking above 1.
    pub const SMOKING: f64 = 0.04;
    /// Per point, for each general risk factor.
    pub const RISK_FACTOR: f64 = 0.02;
    /// Per point of obesity; complication only, survival takes half.
    pub const OBESITY: f64 = 0.025;
    /// Per point of balanced diet; protective.
    pub const BALANCED_DIET: f64 = 0.015;
    /// Per point, for each symptom.
    pub const SYMPTOM: f64 = 0.015;
}

/// Risk factors weighted with `weights::RISK_FACTOR`. Smoking, obesity and
/// diet have their own rules.
const GENERAL_RISK_FACTORS: [ScaleField; 7] = [
    ScaleField::AirPollution,
    ScaleField::AlcoholUse,
    ScaleField::DustAllergy,
    ScaleField::OccupationalHazards,
    ScaleField::GeneticRisk,
    ScaleField::ChronicLungDisease,
    ScaleField::PassiveSmoker,
];

/// Additive (recurrence, complication, survival) adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Delta {
    recurrence: f64,
    complication: f64,
    survival: f64,
}

impl Delta {
    const fn new(recurrence: f64, complication: f64, survival: f64) -> Self {
        Self {
            recurrence,
            complication,
            survival,
        }
    }

    /// Adverse impact: raises both risks, lowers survival by the same amount.
    fn adverse(impact: f64) -> Self {
        Self::new(impact, impact, -impact)
    }
}

fn points_above_floor(value: ScaleValue) -> f64 {
    f64::from(value.get()) - 1.0
}

fn age_delta(age: Option<u32>) -> Delta {
    match age {
        Some(a) if a > 70 => Delta::new(0.15, 0.20, -0.25),
        Some(a) if a > 60 => Delta::new(0.10, 0.15, -0.15),
        Some(a) if a < 50 => Delta::new(-0.05, -0.05, 0.10),
        _ => Delta::default(),
    }
}

fn diagnosis_delta(label: &str) -> Delta {
    match CancerType::from_label(label) {
        Some(CancerType::SmallCell) => Delta::new(0.20, 0.0, -0.20),
        Some(CancerType::Adenocarcinoma) => Delta::new(0.05, 0.0, 0.0),
        Some(CancerType::Squamous) => Delta::new(0.08, 0.0, -0.05),
        Some(CancerType::LargeCell) => Delta::new(0.12, 0.0, -0.10),
        Some(CancerType::Normal) => Delta::new(-0.20, -0.20, 0.30),
        None => Delta::default(),
    }
}

/// Compute the three risk scores. Pure; never fails.
///
/// An empty or unrecognized `diagnosis_label` skips the diagnosis adjustment.
pub fn compute_risk_scores(profile: &PatientProfile, diagnosis_label: &str) -> RiskScores {
    let smoking = weights::SMOKING * points_above_floor(profile.smoking);
    let risk_factors: f64 = GENERAL_RISK_FACTORS
        .iter()
        .map(|&field| weights::RISK_FACTOR * points_above_floor(profile.scale(field)))
        .sum();
    let obesity = weights::OBESITY * points_above_floor(profile.obesity);
    let diet = weights::BALANCED_DIET * points_above_floor(profile.balanced_diet);
    let symptoms: f64 = ScaleField::SYMPTOMS
        .iter()
        .map(|&field| weights::SYMPTOM * points_above_floor(profile.scale(field)))
        .sum();

    let deltas = [
        age_delta(profile.age),
        Delta::adverse(smoking),
        Delta::adverse(risk_factors),
        Delta::new(0.0, obesity, -obesity * 0.5),
        Delta::new(-diet, 0.0, diet),
        Delta::adverse(symptoms),
        diagnosis_delta(diagnosis_label),
    ];

    let mut recurrence = weights::BASE_RECURRENCE;
    let mut complication = weights::BASE_COMPLICATION;
    let mut survival = weights::BASE_SURVIVAL;
    for delta in deltas {
        recurrence += delta.recurrence;
        complication += delta.complication;
        survival += delta.survival;
    }

    let scores = RiskScores {
        recurrence_risk: recurrence.clamp(0.0, 1.0),
        complication_risk: complication.clamp(0.0, 1.0),
        survival_probability: survival.clamp(0.0, 1.0),
    };

    tracing::info!(
        recurrence = scores.recurrence_risk,
        complication = scores.complication_risk,
        survival = scores.survival_probability,
        diagnosis_recognized = CancerType::from_label(diagnosis_label).is_some(),
        "Computed risk scores"
    );
    scores
}

/// Band a risk where lower is better.
pub fn risk_level(score: f64) -> RiskLevel {
    if score <= 0.3 {
        RiskLevel::Low
    } else if score <= 0.6 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Band a survival probability, where higher is better.
pub fn survival_level(probability: f64) -> RiskLevel {
    if probability >= 0.7 {
        RiskLevel::High
    } else if probability >= 0.4 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

pub fn assess(profile: &PatientProfile, diagnosis_label: &str) -> RiskAssessment {
    let scores = compute_risk_scores(profile, diagnosis_label);
    RiskAssessment {
        scores,
        levels: RiskLevels {
            recurrence: risk_level(scores.recurrence_risk),
            complication: risk_level(scores.complication_risk),
            survival: survival_level(scores.survival_probability),
        },
    }
}
