//! Per-stanza rhyme schemes.

use crate::scheme::detect_multi_syllable_rhyme_scheme;

use super::reports::StanzaScheme;

/// Scheme of each stanza, labels restarting at `A` in every stanza.
#[tracing::instrument(skip_all, fields(stanzas = stanzas.len()))]
pub fn analyze_stanzas(stanzas: &[Vec<String>]) -> Vec<StanzaScheme> {
    stanzas
        .iter()
        .enumerate()
        .map(|(stanza, lines)| StanzaScheme {
            stanza,
            lines: lines.len(),
            pattern: detect_multi_syllable_rhyme_scheme(lines).pattern,
        })
        .collect()
}
