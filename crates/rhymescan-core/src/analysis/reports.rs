//! Report structs for lyric analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rhyme::InternalRhymePair;
use crate::scheme::RhymeScheme;

/// Full lyric report combining all checks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LyricsReport {
    /// Lyric lines analyzed (section markers excluded).
    pub line_count: usize,
    /// Syllable counts per line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllables: Option<SyllableReport>,
    /// End-rhyme scheme over the whole text, with rhyme density.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<SchemeReport>,
    /// Scheme pattern of each stanza on its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stanzas: Option<Vec<StanzaScheme>>,
    /// Lines that contain internal rhymes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_rhymes: Option<Vec<LineInternalRhymes>>,
    /// Adjacent line endings sharing a hip-hop group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_hop_pairs: Option<Vec<HipHopPair>>,
}

/// Syllable counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SyllableReport {
    /// Syllables in each line.
    pub per_line: Vec<usize>,
    /// Sum over all lines.
    pub total: usize,
    /// Mean per line, one decimal.
    pub average: f64,
}

/// Rhyme scheme plus density gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SchemeReport {
    /// The detected scheme.
    pub scheme: RhymeScheme,
    /// Share of labeled lines whose label is used at least twice (0.0..=1.0).
    pub rhyme_density: f64,
    /// Minimum acceptable density (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_density: Option<f64>,
    /// Whether the density is below the minimum.
    pub below_min: bool,
}

/// Scheme of one stanza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StanzaScheme {
    /// Zero-based stanza index.
    pub stanza: usize,
    /// Lines in the stanza.
    pub lines: usize,
    /// Pattern with labels restarting at `A`.
    pub pattern: String,
}

/// Internal rhymes of one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineInternalRhymes {
    /// Zero-based line index.
    pub line: usize,
    /// The line text.
    pub text: String,
    /// Rhyming pairs.
    pub pairs: Vec<InternalRhymePair>,
}

/// Two consecutive line endings in the same hip-hop group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HipHopPair {
    /// Indices of the two lines.
    pub lines: (usize, usize),
    /// Last word of each line.
    pub words: (String, String),
    /// Group both words belong to.
    pub group: String,
}
