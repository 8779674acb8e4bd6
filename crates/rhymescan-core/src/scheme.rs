//! Rhyme-scheme labeling.
//!
//! One forward pass over the lines: each line takes the label of the first
//! earlier line it rhymes with (anything stronger than weak), or the next
//! free label. Labels run `A`..`Z`, then `AA`, `AB`, and so on.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::rhyme::{LINE_ENDING_SYLLABLES, RhymeStrength, compare_line_endings, line_ending_syllables};

/// Label for lines without any syllables.
pub const SKIPPED_LABEL: &str = "-";

/// How one line was labeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineEnding {
    /// Zero-based line index.
    pub line: usize,
    /// Ending syllables joined.
    pub ending: String,
    /// Ending syllables.
    pub syllables: Vec<String>,
    /// Assigned label.
    pub label: String,
}

/// Rhyme scheme of a sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeScheme {
    /// Labels concatenated, e.g. `ABCB`.
    pub pattern: String,
    /// One label per input line (`-` for skipped lines).
    pub labels: Vec<String>,
    /// Label to the endings assigned to it, in line order.
    pub groups: BTreeMap<String, Vec<String>>,
    /// Per-line detail for every labeled line.
    pub analysis: Vec<LineEnding>,
}

impl RhymeScheme {
    /// Number of lines that share their label with at least one other line.
    pub fn rhymed_lines(&self) -> usize {
        self.groups
            .values()
            .filter(|endings| endings.len() >= 2)
            .map(Vec::len)
            .sum()
    }
}

/// Label for the `index`-th group: `A`..`Z`, `AA`..`AZ`, `BA`, ...
pub fn scheme_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    label.iter().rev().collect()
}

/// Detect the rhyme scheme of `lines`.
#[tracing::instrument(skip_all, fields(lines = lines.len()))]
pub fn detect_multi_syllable_rhyme_scheme<S: AsRef<str>>(lines: &[S]) -> RhymeScheme {
    let mut scheme = RhymeScheme::default();
    let mut next_group = 0;

    for (index, line) in lines.iter().enumerate() {
        let syllables = line_ending_syllables(line.as_ref(), LINE_ENDING_SYLLABLES);
        if syllables.is_empty() {
            scheme.pattern.push_str(SKIPPED_LABEL);
            scheme.labels.push(SKIPPED_LABEL.to_string());
            continue;
        }

        let earlier = scheme.analysis.iter().find(|prev| {
            let verdict = compare_line_endings(&prev.syllables, &syllables);
            verdict.rhymes && verdict.strength != RhymeStrength::Weak
        });

        let label = match earlier {
            Some(prev) => prev.label.clone(),
            None => {
                let label = scheme_label(next_group);
                next_group += 1;
                label
            }
        };

        let ending = syllables.concat();
        tracing::trace!(line = index, %label, %ending, "labeled line");

        scheme.pattern.push_str(&label);
        scheme.labels.push(label.clone());
        scheme
            .groups
            .entry(label.clone())
            .or_default()
            .push(ending.clone());
        scheme.analysis.push(LineEnding {
            line: index,
            ending,
            syllables,
            label,
        });
    }

    tracing::debug!(pattern = %scheme.pattern, groups = scheme.groups.len(), "scheme detected");
    scheme
}
