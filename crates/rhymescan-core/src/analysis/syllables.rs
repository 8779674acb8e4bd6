//! Syllable counts per line.

use crate::lyrics::extract_words;
use crate::syllables::count_syllables;

use super::reports::SyllableReport;

/// Count syllables in every line.
#[tracing::instrument(skip_all, fields(lines = lines.len()))]
pub fn analyze_syllables(lines: &[String]) -> SyllableReport {
    let per_line: Vec<usize> = lines
        .iter()
        .map(|line| extract_words(line).iter().map(|w| count_syllables(w)).sum())
        .collect();
    let total: usize = per_line.iter().sum();
    let average = if per_line.is_empty() {
        0.0
    } else {
        round1(total as f64 / per_line.len() as f64)
    };

    SyllableReport {
        per_line,
        total,
        average,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
