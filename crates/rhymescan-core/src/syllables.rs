//! Heuristic syllabification.
//!
//! Splits a word into syllables: exception table first, then a vowel-nucleus
//! scan that keeps vowel digraphs together and hands consonant runs to the
//! following syllable unless they form a coda digraph.
//!
//! The result always concatenates back to the cleaned word.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::syllable_exceptions;

/// Anything that is not a lower-case ASCII letter.
static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z]+").expect("valid regex"));

/// Vowel pairs pronounced as a single nucleus.
const VOWEL_DIGRAPHS: &[&str] = &[
    "ai", "au", "ay", "ea", "ee", "ei", "eu", "ey", "ie", "oa", "oe", "oi", "oo", "ou", "oy",
    "ue", "ui",
];

/// Three-letter onsets that begin a syllable together.
const ONSET_TRIGRAPHS: &[&str] = &[
    "chr", "phr", "sch", "scr", "shr", "spl", "spr", "squ", "str", "thr",
];

/// Two-letter onsets that are never split across syllables.
const ONSET_CLUSTERS: &[&str] = &[
    "bl", "br", "ch", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "kn", "ph", "pl", "pr", "qu",
    "sc", "sh", "sk", "sl", "sm", "sn", "sp", "st", "sw", "th", "tr", "tw", "wh", "wr",
];

/// Consonant pairs that close the syllable they follow.
const CODA_DIGRAPHS: &[&str] = &["ck", "ng"];

/// Lower-case a word and strip everything but ASCII letters.
pub fn clean_word(word: &str) -> String {
    NON_LETTER.replace_all(&word.to_lowercase(), "").into_owned()
}

/// Split a word into syllables.
///
/// Returns an empty list for input without letters, and a single syllable
/// holding the whole word when no vowel nucleus can be found ("hmm", "brr").
pub fn break_into_syllables(word: &str) -> Vec<String> {
    let cleaned = clean_word(word);
    if cleaned.is_empty() {
        return Vec::new();
    }

    if let Some(known) = syllable_exceptions::lookup(&cleaned) {
        return known.iter().map(|s| (*s).to_string()).collect();
    }

    let chars: Vec<char> = cleaned.chars().collect();
    let mut syllables = split_on_nuclei(&chars);

    if syllables.is_empty() {
        return vec![cleaned];
    }

    // A lone trailing "e" belongs to the syllable before it.
    if syllables.len() > 1 && syllables.last().is_some_and(|s| s == "e") {
        syllables.pop();
        if let Some(last) = syllables.last_mut() {
            last.push('e');
        }
    }

    syllables
}

/// Number of syllables in a word (0 for input without letters).
pub fn count_syllables(word: &str) -> usize {
    break_into_syllables(word).len()
}

/// Whether `c` is one of the five plain vowel letters.
pub(crate) const fn is_vowel_letter(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn split_on_nuclei(chars: &[char]) -> Vec<String> {
    let nuclei = find_nuclei(chars);
    let mut syllables: Vec<String> = Vec::with_capacity(nuclei.len());
    let mut start = 0;

    for (k, &(_, end)) in nuclei.iter().enumerate() {
        let boundary = match nuclei.get(k + 1) {
            Some(&(next_start, _)) => end + coda_len(&chars[end..next_start]),
            None => chars.len(),
        };
        syllables.push(chars[start..boundary].iter().collect());
        start = boundary;
    }

    syllables
}

/// Collect `[start, end)` spans of vowel nuclei.
fn find_nuclei(chars: &[char]) -> Vec<(usize, usize)> {
    let mut nuclei = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !is_vowel_at(chars, i) || is_silent_final_e(chars, i) {
            i += 1;
            continue;
        }

        let start = i;
        i += 1;
        while i < chars.len() && is_vowel_at(chars, i) && forms_digraph(chars[i - 1], chars[i]) {
            i += 1;
        }
        nuclei.push((start, i));
    }

    nuclei
}

/// How many consonants of a run between two nuclei stay with the earlier syllable.
fn coda_len(run: &[char]) -> usize {
    let len = run.len();
    if len <= 1 {
        return 0;
    }

    let run: String = run.iter().collect();
    if CODA_DIGRAPHS.iter().any(|d| run.ends_with(d)) {
        return len;
    }
    if len >= 3 && ONSET_TRIGRAPHS.iter().any(|t| run.ends_with(t)) {
        return len - 3;
    }
    if ONSET_CLUSTERS.iter().any(|c| run.ends_with(c)) {
        return len - 2;
    }
    len - 1
}

/// Vowel test with positional rules: `u` after `q` is part of the consonant,
/// `y` is a vowel unless it starts the word or precedes another vowel.
fn is_vowel_at(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'u' => !(i > 0 && chars[i - 1] == 'q'),
        'a' | 'e' | 'i' | 'o' => true,
        'y' => i > 0 && !chars.get(i + 1).is_some_and(|&c| is_vowel_letter(c)),
        _ => false,
    }
}

/// A word-final `e` after a consonant is silent when an earlier vowel
/// carries the syllable. Consonant + "le" stays syllabic ("table").
fn is_silent_final_e(chars: &[char], i: usize) -> bool {
    let n = chars.len();
    if i + 1 != n || chars[i] != 'e' || n < 3 {
        return false;
    }
    if is_vowel_at(chars, n - 2) {
        return false;
    }
    if chars[n - 2] == 'l' && !is_vowel_at(chars, n - 3) {
        return false;
    }
    (0..n - 2).any(|j| is_vowel_at(chars, j))
}

fn forms_digraph(first: char, second: char) -> bool {
    VOWEL_DIGRAPHS.iter().any(|d| {
        let mut pair = d.chars();
        pair.next() == Some(first) && pair.next() == Some(second)
    })
}
