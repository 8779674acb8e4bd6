//! End-rhyme scheme with a density gate.

use crate::scheme::{RhymeScheme, detect_multi_syllable_rhyme_scheme};

use super::reports::SchemeReport;

/// Detect the scheme of `lines` and measure how many of them rhyme.
#[tracing::instrument(skip_all, fields(lines = lines.len()))]
pub fn analyze_scheme(lines: &[String], min_density: Option<f64>) -> SchemeReport {
    let scheme = detect_multi_syllable_rhyme_scheme(lines);
    let rhyme_density = rhyme_density(&scheme);
    let below_min = min_density.is_some_and(|min| rhyme_density < min);

    SchemeReport {
        scheme,
        rhyme_density,
        min_density,
        below_min,
    }
}

/// Rhymed lines over labeled lines, rounded to three decimals.
pub fn rhyme_density(scheme: &RhymeScheme) -> f64 {
    let labeled = scheme.analysis.len();
    if labeled == 0 {
        return 0.0;
    }
    let ratio = scheme.rhymed_lines() as f64 / labeled as f64;
    (ratio * 1000.0).round() / 1000.0
}
