//! Internal rhymes, line by line.

use crate::rhyme::find_internal_rhymes;

use super::reports::LineInternalRhymes;

/// Internal rhymes of every line that has at least one pair.
#[tracing::instrument(skip_all, fields(lines = lines.len()))]
pub fn analyze_internal_rhymes(lines: &[String]) -> Vec<LineInternalRhymes> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line, text)| {
            let found = find_internal_rhymes(text);
            (!found.is_empty()).then(|| LineInternalRhymes {
                line,
                text: text.clone(),
                pairs: found.pairs,
            })
        })
        .collect()
}
