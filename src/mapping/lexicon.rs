//! Severity lexicon: qualitative phrases mapped onto the 1-9 scale.
//!
//! Lookup is by whole phrase (lower-cased, trimmed). Substring cues such as
//! "severe" inside a longer phrase are handled by the scaler, not here.

/// Ordered phrase table. Every level is in [1, 9].
pub const SEVERITY_LEXICON: &[(&str, u8)] = &[
    // Intensity
    ("absent", 1),
    ("none", 1),
    ("never", 1),
    ("minimal", 2),
    ("very mild", 2),
    ("mild", 3),
    ("slight", 3),
    ("light", 3),
    ("moderate", 5),
    ("medium", 5),
    ("average", 5),
    ("significant", 6),
    ("considerable", 6),
    ("severe", 7),
    ("heavy", 7),
    ("intense", 7),
    ("very severe", 8),
    ("extreme", 9),
    ("critical", 9),
    ("maximum", 9),
    // Frequency
    ("rarely", 2),
    ("occasionally", 3),
    ("sometimes", 4),
    ("often", 6),
    ("frequently", 7),
    ("very often", 8),
    ("constantly", 9),
    ("always", 9),
    // Smoking
    ("former smoker", 4),
    ("ex-smoker", 4),
    ("quit smoking", 4),
    ("current smoker", 8),
    ("active smoker", 8),
    ("heavy smoker", 9),
    ("chain smoker", 9),
    // Diet
    ("poor diet", 3),
    ("unhealthy diet", 3),
    ("fair diet", 5),
    ("good diet", 7),
    ("healthy diet", 7),
    ("excellent diet", 8),
    ("very healthy diet", 9),
    // Weight
    ("underweight", 3),
    ("normal weight", 5),
    ("overweight", 6),
    ("obese", 8),
    ("morbidly obese", 9),
];

/// Exact phrase lookup. `text` is normalized before matching.
pub fn lookup(text: &str) -> Option<u8> {
    let phrase = text.trim().to_lowercase();
    SEVERITY_LEXICON
        .iter()
        .find(|(term, _)| *term == phrase)
        .map(|&(_, level)| level)
}
