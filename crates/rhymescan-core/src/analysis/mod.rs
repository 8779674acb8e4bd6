//! Whole-song lyric analysis.
//!
//! Decomposes a lyric sheet report into independent checks, orchestrated by
//! [`analyze_lyrics`]. Each check is a pure function in its own module and
//! can be called on its own.

pub mod density;
pub mod hip_hop;
pub mod internal;
pub mod reports;
pub mod stanzas;
pub mod syllables;

use std::collections::HashSet;

pub use reports::LyricsReport;

use crate::error::{AnalysisError, AnalysisResult};
use crate::lyrics;
use crate::markdown;
use crate::rhyme::CustomRhymeGroups;

/// All available check names.
pub const ALL_CHECKS: &[&str] = &["syllables", "scheme", "stanzas", "internal", "hip_hop"];

/// Knobs for [`analyze_lyrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions<'a> {
    /// Checks to run. `None` runs all of [`ALL_CHECKS`].
    pub checks: Option<&'a [String]>,
    /// Minimum acceptable rhyme density for the scheme check.
    pub min_density: Option<f64>,
    /// User-defined hip-hop groups.
    pub rhyme_groups: Option<&'a CustomRhymeGroups>,
}

/// Run the lyric checks over a whole text.
///
/// # Arguments
///
/// * `input` — The lyric text.
/// * `strip_md` — If `true`, treat the input as a markdown lyric sheet.
/// * `options` — Check selection, density gate, and custom groups.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] when no lyric lines remain.
#[tracing::instrument(skip(input, options), fields(text_len = input.len(), strip_md))]
pub fn analyze_lyrics(
    input: &str,
    strip_md: bool,
    options: &AnalysisOptions<'_>,
) -> AnalysisResult<LyricsReport> {
    let text = if strip_md {
        markdown::strip_to_lyrics(input)
    } else {
        input.to_string()
    };

    let lines = lyrics::lyric_lines(&text);
    if lines.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let enabled: HashSet<&str> = options.checks.map_or_else(
        || ALL_CHECKS.iter().copied().collect(),
        |list| list.iter().map(String::as_str).collect(),
    );

    let syllable_report = enabled
        .contains("syllables")
        .then(|| syllables::analyze_syllables(&lines));

    let scheme_report = enabled
        .contains("scheme")
        .then(|| density::analyze_scheme(&lines, options.min_density));

    let stanza_report = enabled
        .contains("stanzas")
        .then(|| stanzas::analyze_stanzas(&lyrics::split_stanzas(&text)));

    let internal_report = enabled
        .contains("internal")
        .then(|| internal::analyze_internal_rhymes(&lines));

    let hip_hop_report = enabled
        .contains("hip_hop")
        .then(|| hip_hop::find_hip_hop_pairs(&lines, options.rhyme_groups));

    Ok(LyricsReport {
        line_count: lines.len(),
        syllables: syllable_report,
        scheme: scheme_report,
        stanzas: stanza_report,
        internal_rhymes: internal_report,
        hip_hop_pairs: hip_hop_report,
    })
}
