//! Lyric text processing.
//!
//! Splits lyric sheets into lines, stanzas, and words, skipping section
//! markers like `[Chorus]`, `(Verse 2)` or `Hook:`.

use regex::Regex;
use std::sync::LazyLock;

use crate::syllables::clean_word;

/// Bracketed annotations: `[Chorus]`, `[Verse 1: Artist]`, `(x2)`.
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\[[^\]]*\]|\([^)]*\))$").expect("valid regex"));

/// Bare section headings: `Verse 1:`, `Chorus:`, `Pre-Chorus:`.
static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:verse|chorus|pre-chorus|prechorus|hook|bridge|intro|outro|refrain|interlude)(?:\s*\d+)?\s*:$",
    )
    .expect("valid regex")
});

/// Whether a trimmed line is a section marker rather than a lyric.
pub fn is_section_marker(line: &str) -> bool {
    let line = line.trim();
    BRACKETED.is_match(line) || SECTION_HEADING.is_match(line)
}

/// Trimmed, non-empty lyric lines with section markers removed.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn lyric_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !is_section_marker(l))
        .map(str::to_string)
        .collect()
}

/// Split lyrics into stanzas separated by blank lines.
///
/// Section markers are dropped; a stanza made only of markers disappears.
pub fn split_stanzas(text: &str) -> Vec<Vec<String>> {
    let mut stanzas = Vec::new();
    let mut current = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                stanzas.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !is_section_marker(line) {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        stanzas.push(current);
    }

    stanzas
}

/// Cleaned words of a line: lower-case, letters only, empty tokens dropped.
pub fn extract_words(line: &str) -> Vec<String> {
    line.split_whitespace()
        .map(clean_word)
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONG: &str = "[Verse 1]\nRoses are red\nViolets are blue\n\n(Chorus)\nSugar is sweet\n  And so are you  \n\nHook:\n";

    #[test]
    fn markers_are_recognised() {
        assert!(is_section_marker("[Chorus]"));
        assert!(is_section_marker("[Verse 2: Guest]"));
        assert!(is_section_marker("(x2)"));
        assert!(is_section_marker("Verse 1:"));
        assert!(is_section_marker("pre-chorus:"));
        assert!(!is_section_marker("and she said:"));
        assert!(!is_section_marker("(yeah) I'm back"));
    }

    #[test]
    fn lyric_lines_skip_markers_and_blanks() {
        assert_eq!(
            lyric_lines(SONG),
            vec!["Roses are red", "Violets are blue", "Sugar is sweet", "And so are you"]
        );
    }

    #[test]
    fn stanzas_split_on_blank_lines() {
        let stanzas = split_stanzas(SONG);
        assert_eq!(stanzas.len(), 2);
        assert_eq!(stanzas[0], vec!["Roses are red", "Violets are blue"]);
        assert_eq!(stanzas[1], vec!["Sugar is sweet", "And so are you"]);
    }

    #[test]
    fn empty_input() {
        assert!(lyric_lines("").is_empty());
        assert!(split_stanzas("\n\n[Intro]\n").is_empty());
    }

    #[test]
    fn extract_words_cleans_tokens() {
        assert_eq!(
            extract_words("Yo, I'm back -- 100% REAL!"),
            vec!["yo", "im", "back", "real"]
        );
    }
}
