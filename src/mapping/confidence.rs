/// Confidence tiers for extracted entities
pub mod thresholds {
    /// Below this: entity is dropped.
    pub const LOW: f64 = 0.40;

    /// At or above this: entity is also offered as a reviewable suggestion.
    pub const MEDIUM: f64 = 0.60;

    /// Above this: the scaler may fall back to a category default.
    /// Not a gating boundary.
    pub const HIGH: f64 = 0.80;
}

/// What the engine may do with an entity, judged on confidence alone.
///
/// The two eligibilities are independent: an entity at or above MEDIUM is
/// both auto-applied and suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disposition {
    pub auto_apply: bool,
    pub suggest: bool,
}

impl Disposition {
    pub fn is_discarded(&self) -> bool {
        !self.auto_apply && !self.suggest
    }
}

/// Gate an entity by its confidence. NaN is treated as below LOW.
pub fn disposition(confidence: f64) -> Disposition {
    Disposition {
        auto_apply: confidence >= thresholds::LOW,
        suggest: confidence >= thresholds::MEDIUM,
    }
}

pub fn is_auto_apply_eligible(confidence: f64) -> bool {
    disposition(confidence).auto_apply
}

pub fn is_suggestion_eligible(confidence: f64) -> bool {
    disposition(confidence).suggest
}
