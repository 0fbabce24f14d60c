pub mod entity;
pub mod enums;
pub mod profile;
pub mod risk;

pub use entity::{Entity, EntityCategory};
pub use enums::{CancerType, Gender, RiskLevel, ScaleField};
pub use profile::{ManualEdit, PatientProfile, ProfileField, Provenance, ScaleValue};
pub use risk::{CancerPrediction, RiskAssessment, RiskLevels, RiskScores};
