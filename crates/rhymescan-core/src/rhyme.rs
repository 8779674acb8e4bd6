//! Pairwise rhyme classification.
//!
//! Three granularities:
//!
//! - [`check_phonetic_rhyme`] compares two words through a strict waterfall
//!   (perfect, near, slant, assonance, consonance).
//! - [`check_multi_syllable_rhyme`] compares the last three syllables of two
//!   lines and grades them perfect, strong, moderate, or weak.
//! - [`check_multi_word_rhyme`] compares the tails of two phrases.
//!
//! Hip-hop groups ([`check_hip_hop_rhyme`]) are a separate signal and never
//! feed the waterfall.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::dictionaries::hip_hop::HIP_HOP_GROUPS;
use crate::dictionaries::rhyme_groups::{shared_ending_group, shared_syllable_group};
use crate::lyrics::extract_words;
use crate::phonetic::{get_phonetic_ending, get_phonetic_representation, rime, vowel_sounds};
use crate::syllables::{break_into_syllables, clean_word, is_vowel_letter};

/// User-defined hip-hop groups: group name to member words.
pub type CustomRhymeGroups = BTreeMap<String, Vec<String>>;

/// How closely two endings match.
///
/// Word comparisons use `Perfect`, `Near`, `Slant`, `Assonance`, and
/// `Consonance`; line comparisons use `Perfect`, `Strong`, `Moderate`, and
/// `Weak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RhymeStrength {
    /// Same sound over the compared ending.
    Perfect,
    /// Same last syllable (words).
    Near,
    /// Two matching syllables (lines).
    Strong,
    /// Spellings from the same ending family (words).
    Slant,
    /// One matching syllable plus matching spelling tail (lines).
    Moderate,
    /// Same vowel sounds only.
    Assonance,
    /// Same closing consonants only.
    Consonance,
    /// One matching syllable (lines).
    Weak,
    /// No rhyme.
    None,
}

impl RhymeStrength {
    /// Numeric tier: 5 for perfect down to 0 for none. Word and line scales
    /// share tiers (near and strong are both 4).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Perfect => 5,
            Self::Near | Self::Strong => 4,
            Self::Slant | Self::Moderate => 3,
            Self::Assonance => 2,
            Self::Consonance | Self::Weak => 1,
            Self::None => 0,
        }
    }

    /// Anything but `None`.
    pub const fn is_rhyme(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Lower-case name, as serialized.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Near => "near",
            Self::Strong => "strong",
            Self::Slant => "slant",
            Self::Moderate => "moderate",
            Self::Assonance => "assonance",
            Self::Consonance => "consonance",
            Self::Weak => "weak",
            Self::None => "none",
        }
    }
}

impl fmt::Display for RhymeStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing two words or two lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeVerdict {
    /// Whether any rhyme was detected.
    pub rhymes: bool,
    /// Strength tier.
    pub strength: RhymeStrength,
    /// What matched: a phonetic ending, a spelling group, or "identical".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Consecutive matching syllables from the end (line comparisons only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllable_match: Option<usize>,
}

impl RhymeVerdict {
    /// No rhyme.
    pub const fn none() -> Self {
        Self {
            rhymes: false,
            strength: RhymeStrength::None,
            pattern: None,
            syllable_match: None,
        }
    }

    fn word(strength: RhymeStrength, pattern: impl Into<String>) -> Self {
        Self {
            rhymes: strength.is_rhyme(),
            strength,
            pattern: Some(pattern.into()),
            syllable_match: None,
        }
    }

    fn line(strength: RhymeStrength, matched: usize, pattern: Option<String>) -> Self {
        Self {
            rhymes: strength.is_rhyme(),
            strength,
            pattern,
            syllable_match: Some(matched),
        }
    }
}

/// Outcome of comparing the tails of two phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MultiWordMatch {
    /// Whether any word combination matched.
    pub rhymes: bool,
    /// Shared phonetic tail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Words from the first phrase that matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Words from the second phrase that matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl MultiWordMatch {
    const fn no_match() -> Self {
        Self {
            rhymes: false,
            pattern: None,
            left: None,
            right: None,
        }
    }
}

/// A rhyming word pair inside one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InternalRhymePair {
    /// Earlier word.
    pub first: String,
    /// Later word.
    pub second: String,
    /// Word indices of `first` and `second` within the line's cleaned words.
    pub positions: (usize, usize),
    /// Word-level strength.
    pub strength: RhymeStrength,
}

/// Rhyming word pairs found inside one line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InternalRhymes {
    /// Pairs in line order.
    pub pairs: Vec<InternalRhymePair>,
}

impl InternalRhymes {
    /// Whether no pair was found.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Which comparison to run on two inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CompareMode {
    /// Single words through the word-level waterfall.
    #[default]
    Word,
    /// Whole lines by their last three syllables.
    Line,
    /// Phrases by their last one or two words.
    Phrase,
}

// ---------------------------------------------------------------------------
// Word level
// ---------------------------------------------------------------------------

/// Classify how two words rhyme.
///
/// First match wins: identical, equal two-syllable ending (perfect), equal
/// one-syllable ending (near), shared spelling group (slant), equal vowel
/// sounds of two or more symbols (assonance), equal consonant skeleton of
/// the last three letters (consonance).
pub fn check_phonetic_rhyme(word1: &str, word2: &str) -> RhymeVerdict {
    let a = clean_word(word1);
    let b = clean_word(word2);
    if a.is_empty() || b.is_empty() {
        return RhymeVerdict::none();
    }

    if a == b {
        return RhymeVerdict::word(RhymeStrength::Perfect, "identical");
    }

    let (a2, b2) = (get_phonetic_ending(&a, 2), get_phonetic_ending(&b, 2));
    if a2 == b2 {
        return RhymeVerdict::word(RhymeStrength::Perfect, a2);
    }

    let (a1, b1) = (get_phonetic_ending(&a, 1), get_phonetic_ending(&b, 1));
    if a1 == b1 {
        return RhymeVerdict::word(RhymeStrength::Near, a1);
    }

    if let Some(group) = shared_ending_group(&a, &b) {
        return RhymeVerdict::word(RhymeStrength::Slant, group.name);
    }

    let va = vowel_sounds(&a2);
    if va.chars().count() >= 2 && va == vowel_sounds(&b2) {
        return RhymeVerdict::word(RhymeStrength::Assonance, va);
    }

    let ca = consonant_skeleton(&a);
    if ca.len() >= 2 && ca == consonant_skeleton(&b) {
        return RhymeVerdict::word(RhymeStrength::Consonance, ca);
    }

    RhymeVerdict::none()
}

/// Last three letters with vowels removed.
fn consonant_skeleton(word: &str) -> String {
    let tail: Vec<char> = word.chars().collect();
    let start = tail.len().saturating_sub(3);
    tail[start..]
        .iter()
        .filter(|c| !is_vowel_letter(**c))
        .collect()
}

// ---------------------------------------------------------------------------
// Line level
// ---------------------------------------------------------------------------

/// Syllables compared at the end of each line.
pub const LINE_ENDING_SYLLABLES: usize = 3;

/// The last `count` syllables of a line, walking words backwards.
pub fn line_ending_syllables(line: &str, count: usize) -> Vec<String> {
    let mut collected: Vec<String> = Vec::new();
    for word in extract_words(line).iter().rev() {
        let mut syllables = break_into_syllables(word);
        syllables.append(&mut collected);
        collected = syllables;
        if collected.len() >= count {
            break;
        }
    }
    let start = collected.len().saturating_sub(count);
    collected.split_off(start)
}

/// Classify how the endings of two lines rhyme.
///
/// Counts matching syllables from the end until the first mismatch: three
/// (or identical phonetics) is perfect, two is strong, one is moderate when
/// the last four letters also agree and weak otherwise.
pub fn check_multi_syllable_rhyme(line1: &str, line2: &str) -> RhymeVerdict {
    let s1 = line_ending_syllables(line1, LINE_ENDING_SYLLABLES);
    let s2 = line_ending_syllables(line2, LINE_ENDING_SYLLABLES);
    compare_line_endings(&s1, &s2)
}

/// Line comparison on already-extracted ending syllables.
pub(crate) fn compare_line_endings(s1: &[String], s2: &[String]) -> RhymeVerdict {
    if s1.is_empty() || s2.is_empty() {
        return RhymeVerdict::line(RhymeStrength::None, 0, None);
    }

    let matched = s1
        .iter()
        .rev()
        .zip(s2.iter().rev())
        .take_while(|(a, b)| syllables_rhyme(a, b))
        .count();

    let raw1 = s1.concat();
    let raw2 = s2.concat();
    let phonetic1 = get_phonetic_representation(&raw1);
    let same_sound = phonetic1 == get_phonetic_representation(&raw2);

    let strength = if same_sound || matched >= 3 {
        RhymeStrength::Perfect
    } else if matched >= 2 {
        RhymeStrength::Strong
    } else if matched >= 1 && tail(&raw1, 4) == tail(&raw2, 4) {
        RhymeStrength::Moderate
    } else if matched >= 1 {
        RhymeStrength::Weak
    } else {
        RhymeStrength::None
    };

    let pattern = strength.is_rhyme().then(|| {
        let shared: Vec<&str> = s1[s1.len() - matched.max(1)..]
            .iter()
            .map(String::as_str)
            .collect();
        shared.concat()
    });

    RhymeVerdict::line(strength, matched, pattern)
}

/// Two syllables rhyme when they are equal, share a spelling rime, fall in
/// the same syllable group, or share a phonetic rime.
fn syllables_rhyme(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let (ra, rb) = (spelling_rime(a), spelling_rime(b));
    if ra == rb || shared_syllable_group(ra, rb).is_some() {
        return true;
    }
    let pa = get_phonetic_representation(a);
    let pb = get_phonetic_representation(b);
    !pa.is_empty() && rime(&pa) == rime(&pb)
}

/// Spelling from the first vowel letter on; `y` counts after the first letter.
fn spelling_rime(syllable: &str) -> &str {
    syllable
        .char_indices()
        .find(|&(i, c)| is_vowel_letter(c) || (c == 'y' && i > 0))
        .map_or(syllable, |(i, _)| &syllable[i..])
}

/// Last `n` characters of a string.
fn tail(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    match s.char_indices().nth(count.saturating_sub(n)) {
        Some((i, _)) => &s[i..],
        None => s,
    }
}

// ---------------------------------------------------------------------------
// Phrase level
// ---------------------------------------------------------------------------

/// Compare two phrases by their last word and last two words.
///
/// Tries (last, last), (last, last two), (last two, last), (last two, last
/// two) and reports the first combination whose phonetic strings share a
/// tail of `min(len1, len2, 4)` characters.
pub fn check_multi_word_rhyme(phrase1: &str, phrase2: &str) -> MultiWordMatch {
    let left = phrase_tails(phrase1);
    let right = phrase_tails(phrase2);

    for l in &left {
        let pl = phrase_phonetic(l);
        for r in &right {
            let pr = phrase_phonetic(r);
            let n = pl.chars().count().min(pr.chars().count()).min(4);
            if n == 0 {
                continue;
            }
            let shared = tail(&pl, n);
            if shared == tail(&pr, n) {
                return MultiWordMatch {
                    rhymes: true,
                    pattern: Some(shared.to_string()),
                    left: Some(l.clone()),
                    right: Some(r.clone()),
                };
            }
        }
    }

    MultiWordMatch::no_match()
}

/// The last word and, when present, the last two words.
fn phrase_tails(phrase: &str) -> Vec<String> {
    let words = extract_words(phrase);
    let mut tails = Vec::with_capacity(2);
    if let Some(last) = words.last() {
        tails.push(last.clone());
    }
    if words.len() >= 2 {
        tails.push(words[words.len() - 2..].join(" "));
    }
    tails
}

fn phrase_phonetic(words: &str) -> String {
    words
        .split_whitespace()
        .map(get_phonetic_representation)
        .collect()
}

// ---------------------------------------------------------------------------
// Hip-hop groups
// ---------------------------------------------------------------------------

/// Whether both words sit in the same built-in hip-hop group.
pub fn check_hip_hop_rhyme(word1: &str, word2: &str) -> bool {
    check_hip_hop_rhyme_with(word1, word2, None)
}

/// Like [`check_hip_hop_rhyme`], also consulting user-defined groups.
///
/// A custom group whose name matches a built-in one replaces it.
pub fn check_hip_hop_rhyme_with(
    word1: &str,
    word2: &str,
    custom: Option<&CustomRhymeGroups>,
) -> bool {
    hip_hop_group_of_pair(word1, word2, custom).is_some()
}

/// Name of the first hip-hop group holding both words.
pub fn hip_hop_group_of_pair(
    word1: &str,
    word2: &str,
    custom: Option<&CustomRhymeGroups>,
) -> Option<String> {
    let a = clean_word(word1);
    let b = clean_word(word2);
    if a.is_empty() || b.is_empty() {
        return None;
    }
    shared_hip_hop_group(&[&a, &b], custom)
}

/// Name of the first hip-hop group containing `word`.
pub fn find_hip_hop_group(word: &str, custom: Option<&CustomRhymeGroups>) -> Option<String> {
    let word = clean_word(word);
    if word.is_empty() {
        return None;
    }
    shared_hip_hop_group(&[&word], custom)
}

fn shared_hip_hop_group(words: &[&str], custom: Option<&CustomRhymeGroups>) -> Option<String> {
    if let Some(groups) = custom {
        for (name, members) in groups {
            let members: Vec<String> = members.iter().map(|m| clean_word(m)).collect();
            if words.iter().all(|w| members.iter().any(|m| m == w)) {
                return Some(name.clone());
            }
        }
    }

    HIP_HOP_GROUPS
        .iter()
        .filter(|(name, _)| custom.is_none_or(|groups| !groups.contains_key(*name)))
        .find(|(_, members)| words.iter().all(|w| members.contains(w)))
        .map(|(name, _)| (*name).to_string())
}

// ---------------------------------------------------------------------------
// Any granularity
// ---------------------------------------------------------------------------

/// Outcome of [`compare`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Comparison {
    /// Classifier that ran.
    pub mode: CompareMode,
    /// Word or line verdict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<RhymeVerdict>,
    /// Phrase match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrase: Option<MultiWordMatch>,
    /// Hip-hop group shared by the two last words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_hop_group: Option<String>,
}

/// Run the classifier for `mode` and look up the hip-hop signal on the last
/// word of each input.
pub fn compare(
    first: &str,
    second: &str,
    mode: CompareMode,
    custom: Option<&CustomRhymeGroups>,
) -> Comparison {
    let (verdict, phrase) = match mode {
        CompareMode::Word => (Some(check_phonetic_rhyme(first, second)), None),
        CompareMode::Line => (Some(check_multi_syllable_rhyme(first, second)), None),
        CompareMode::Phrase => (None, Some(check_multi_word_rhyme(first, second))),
    };
    let hip_hop_group = match (extract_words(first).pop(), extract_words(second).pop()) {
        (Some(a), Some(b)) => hip_hop_group_of_pair(&a, &b, custom),
        _ => None,
    };
    Comparison {
        mode,
        verdict,
        phrase,
        hip_hop_group,
    }
}

// ---------------------------------------------------------------------------
// Internal rhymes
// ---------------------------------------------------------------------------

/// Rhyming word pairs within one line.
///
/// Every unordered pair of words longer than two letters is classified at
/// word level; consonance alone is not reported.
pub fn find_internal_rhymes(line: &str) -> InternalRhymes {
    let words = extract_words(line);
    let mut pairs = Vec::new();

    for (i, first) in words.iter().enumerate() {
        if first.len() <= 2 {
            continue;
        }
        for (j, second) in words.iter().enumerate().skip(i + 1) {
            if second.len() <= 2 {
                continue;
            }
            let verdict = check_phonetic_rhyme(first, second);
            if matches!(
                verdict.strength,
                RhymeStrength::Consonance | RhymeStrength::None
            ) {
                continue;
            }
            pairs.push(InternalRhymePair {
                first: first.clone(),
                second: second.clone(),
                positions: (i, j),
                strength: verdict.strength,
            });
        }
    }

    InternalRhymes { pairs }
}
