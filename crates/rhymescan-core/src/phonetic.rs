//! Rule-based phonetic approximation.
//!
//! Turns spelling into an IPA-like sound string good enough to compare word
//! endings. The pipeline for a fragment is: irregular whole words, known
//! endings, silent final "e", then the general substitution table applied
//! leftmost-first in a single pass.

use aho_corasick::{AhoCorasick, MatchKind};
use std::sync::LazyLock;

use crate::dictionaries::phonetic_rules::{
    ENDING_SOUNDS, IRREGULAR_WORDS, LONG_VOWELS, PHONETIC_VOWELS, StemRequirement,
    SUBSTITUTIONS,
};
use crate::syllables::{break_into_syllables, clean_word, is_vowel_letter};

static GENERAL_RULES: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(SUBSTITUTIONS.iter().map(|(pattern, _)| *pattern))
        .expect("valid patterns")
});

static REPLACEMENTS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| SUBSTITUTIONS.iter().map(|(_, sound)| *sound).collect());

/// Phonetic form of a whole word. Empty for input without letters.
pub fn get_phonetic_representation(word: &str) -> String {
    let cleaned = clean_word(word);
    if cleaned.is_empty() {
        return String::new();
    }
    if let Some(sound) = irregular(&cleaned) {
        return sound.to_string();
    }
    transcribe(&cleaned)
}

/// Phonetic form of the last `syllable_count` syllables of a word.
///
/// When the count covers the whole word this is the same as
/// [`get_phonetic_representation`].
pub fn get_phonetic_ending(word: &str, syllable_count: usize) -> String {
    if syllable_count == 0 {
        return String::new();
    }
    let syllables = break_into_syllables(word);
    let start = syllables.len().saturating_sub(syllable_count);
    if start == 0 {
        return get_phonetic_representation(word);
    }
    transcribe(&syllables[start..].concat())
}

/// The vowel symbols of a phonetic string, in order.
pub fn vowel_sounds(phonetic: &str) -> String {
    phonetic.chars().filter(|c| is_phonetic_vowel(*c)).collect()
}

/// Everything from the first vowel symbol on. A string with no vowel is
/// returned whole.
pub fn rime(phonetic: &str) -> &str {
    phonetic
        .char_indices()
        .find(|(_, c)| is_phonetic_vowel(*c))
        .map_or(phonetic, |(i, _)| &phonetic[i..])
}

pub(crate) fn is_phonetic_vowel(c: char) -> bool {
    PHONETIC_VOWELS.contains(&c)
}

fn irregular(word: &str) -> Option<&'static str> {
    IRREGULAR_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, sound)| *sound)
}

/// Transcribe a cleaned fragment (a whole word or a run of its syllables).
fn transcribe(fragment: &str) -> String {
    if let Some(out) = transcribe_ending(fragment) {
        return out;
    }
    if let Some(out) = transcribe_final_e(fragment) {
        return out;
    }
    apply_rules(fragment)
}

fn transcribe_ending(fragment: &str) -> Option<String> {
    ENDING_SOUNDS.iter().find_map(|rule| {
        let stem = fragment.strip_suffix(rule.suffix)?;
        stem_satisfies(stem, rule.stem).then(|| {
            let mut out = apply_rules(stem);
            out.push_str(rule.sound);
            out
        })
    })
}

fn stem_satisfies(stem: &str, requirement: StemRequirement) -> bool {
    let has_vowel = stem
        .char_indices()
        .any(|(i, c)| is_vowel_letter(c) || (c == 'y' && i > 0));
    match requirement {
        StemRequirement::Any => true,
        StemRequirement::HasVowel => has_vowel,
        StemRequirement::ConsonantOnly => !stem.is_empty() && !has_vowel,
        StemRequirement::Bare => stem.is_empty(),
        StemRequirement::EndsInConsonant => stem
            .chars()
            .last()
            .is_some_and(|c| !is_vowel_letter(c) && c != 'y'),
    }
}

/// Handle a word-final "e" after a consonant: long vowel when the pattern is
/// vowel-consonant-e ("make"), otherwise the "e" is simply dropped ("dance").
fn transcribe_final_e(fragment: &str) -> Option<String> {
    let chars: Vec<char> = fragment.chars().collect();
    let n = chars.len();
    if n < 3 || chars[n - 1] != 'e' {
        return None;
    }
    let consonant = chars[n - 2];
    if is_vowel_letter(consonant) || consonant == 'y' {
        return None;
    }

    let vowel = chars[n - 3];
    let single_vowel = n < 4 || !is_vowel_letter(chars[n - 4]);
    if let Some((_, long)) = LONG_VOWELS.iter().find(|(v, _)| *v == vowel)
        && single_vowel
        && (vowel != 'y' || n > 3)
    {
        let stem: String = chars[..n - 3].iter().collect();
        let mut out = apply_rules(&stem);
        out.push_str(long);
        out.push_str(&final_consonant(consonant));
        return Some(out);
    }

    if !chars[..n - 2].iter().any(|c| is_vowel_letter(*c)) {
        return None;
    }
    let stem: String = chars[..n - 2].iter().collect();
    let mut out = apply_rules(&stem);
    out.push_str(&final_consonant(consonant));
    Some(out)
}

/// Sound of a consonant softened or voiced by a following silent "e".
fn final_consonant(c: char) -> String {
    match c {
        'c' => "s".to_string(),
        'g' => "dʒ".to_string(),
        's' => "z".to_string(),
        other => apply_rules(&other.to_string()),
    }
}

fn apply_rules(fragment: &str) -> String {
    GENERAL_RULES.replace_all(fragment, &REPLACEMENTS)
}
