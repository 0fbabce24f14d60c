//! Entity-to-profile mapping engine.
//!
//! ```text
//! entities ─▶ confidence gate ─┬─▶ resolver + scaler ─▶ merger ─▶ profile
//!                              └─▶ resolver + scaler ─▶ suggestions (≥ MEDIUM)
//! ```
//!
//! Every stage is a pure function over immutable tables; only the merger
//! mutates, and only the profile it is handed.

pub mod confidence;
pub mod lexicon;
pub mod merger;
pub mod resolver;
pub mod scaler;
pub mod suggest;

pub use confidence::{disposition, thresholds, Disposition};
pub use merger::{map_entities, merge_entities, merge_entity, MergeSummary};
pub use resolver::{classify_gender, parse_age, resolve_cancer_type, resolve_field};
pub use scaler::scale_value;
pub use suggest::{generate_suggestions, Suggestion};
