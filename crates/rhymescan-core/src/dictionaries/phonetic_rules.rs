//! Spelling-to-sound tables for the phonetic approximator.
//!
//! Three tables, consulted in this order:
//!
//! 1. [`IRREGULAR_WORDS`] — whole words whose spelling misleads every rule.
//! 2. [`ENDING_SOUNDS`] — multi-letter word endings ("-tion", "-ight").
//! 3. [`SUBSTITUTIONS`] — the general ordered rule table.
//!
//! The symbols are IPA-like but not IPA: the only contract is that words
//! which rhyme tend to produce matching tails.

/// What the part of the word before an ending must look like for the
/// ending rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemRequirement {
    /// No constraint.
    Any,
    /// Stem contains a vowel ("baby" → "bab" + "y").
    HasVowel,
    /// Stem is non-empty and has no vowel ("my" → "m" + "y").
    ConsonantOnly,
    /// Stem is empty: the fragment is exactly the ending.
    Bare,
    /// Stem is non-empty and ends in a consonant ("table" → "tab" + "le").
    EndsInConsonant,
}

/// A known word ending and the sound it stands for.
#[derive(Debug, Clone, Copy)]
pub struct EndingSound {
    /// Spelling suffix.
    pub suffix: &'static str,
    /// Phonetic replacement for the suffix.
    pub sound: &'static str,
    /// Constraint on the remaining stem.
    pub stem: StemRequirement,
}

const fn ending(suffix: &'static str, sound: &'static str, stem: StemRequirement) -> EndingSound {
    EndingSound { suffix, sound, stem }
}

/// Whole-word transcriptions for irregular spellings.
pub const IRREGULAR_WORDS: &[(&str, &str)] = &[
    ("a", "ə"),
    ("i", "aɪ"),
    ("the", "ðə"),
    ("of", "ʌv"),
    ("you", "juː"),
    ("your", "jɔːr"),
    ("to", "tuː"),
    ("too", "tuː"),
    ("two", "tuː"),
    ("do", "duː"),
    ("who", "huː"),
    ("one", "wʌn"),
    ("once", "wʌns"),
    ("done", "dʌn"),
    ("none", "nʌn"),
    ("some", "sʌm"),
    ("come", "kʌm"),
    ("love", "lʌv"),
    ("above", "əbʌv"),
    ("have", "hæv"),
    ("give", "gɪv"),
    ("live", "lɪv"),
    ("move", "muːv"),
    ("lose", "luːz"),
    ("whose", "huːz"),
    ("gone", "gɒn"),
    ("are", "ɑːr"),
    ("were", "wɜːr"),
    ("there", "ðɛər"),
    ("where", "wɛər"),
    ("their", "ðɛər"),
    ("here", "hɪər"),
    ("said", "sɛd"),
    ("says", "sɛz"),
    ("again", "əgɛn"),
    ("eye", "aɪ"),
    ("eyes", "aɪz"),
    ("four", "fɔːr"),
    ("through", "θruː"),
    ("though", "ðoʊ"),
    ("tough", "tʌf"),
    ("rough", "rʌf"),
    ("enough", "ɪnʌf"),
    ("great", "greɪt"),
    ("break", "breɪk"),
    ("heart", "hɑːrt"),
    ("world", "wɜːrld"),
    ("word", "wɜːrd"),
    ("work", "wɜːrk"),
    ("blood", "blʌd"),
    ("flood", "flʌd"),
    ("friend", "frɛnd"),
    ("was", "wʌz"),
    ("what", "wʌt"),
];

/// Word endings, most specific first. The first entry whose suffix matches
/// and whose stem requirement holds wins.
pub const ENDING_SOUNDS: &[EndingSound] = &[
    ending("ought", "ɔːt", StemRequirement::Any),
    ending("aught", "ɔːt", StemRequirement::Any),
    ending("ight", "aɪt", StemRequirement::Any),
    ending("tion", "ʃən", StemRequirement::Any),
    ending("sion", "ʒən", StemRequirement::Any),
    ending("cian", "ʃən", StemRequirement::Any),
    ending("ture", "tʃər", StemRequirement::Any),
    ending("ious", "iəs", StemRequirement::HasVowel),
    ending("ness", "nəs", StemRequirement::HasVowel),
    ending("less", "ləs", StemRequirement::HasVowel),
    ending("ment", "mənt", StemRequirement::HasVowel),
    ending("ous", "əs", StemRequirement::HasVowel),
    ending("ore", "ɔːr", StemRequirement::Any),
    ending("oar", "ɔːr", StemRequirement::Any),
    ending("oor", "ɔːr", StemRequirement::Any),
    ending("our", "aʊər", StemRequirement::Any),
    ending("ire", "aɪər", StemRequirement::Any),
    ending("ing", "ɪŋ", StemRequirement::Any),
    ending("ow", "oʊ", StemRequirement::Any),
    ending("ew", "uː", StemRequirement::Any),
    ending("ue", "uː", StemRequirement::Any),
    ending("ie", "aɪ", StemRequirement::ConsonantOnly),
    ending("ie", "i", StemRequirement::HasVowel),
    ending("ey", "i", StemRequirement::HasVowel),
    ending("ey", "i", StemRequirement::Bare),
    ending("ey", "eɪ", StemRequirement::ConsonantOnly),
    ending("y", "i", StemRequirement::HasVowel),
    ending("y", "i", StemRequirement::Bare),
    ending("y", "aɪ", StemRequirement::ConsonantOnly),
    ending("er", "ər", StemRequirement::HasVowel),
    ending("or", "ər", StemRequirement::HasVowel),
    ending("le", "əl", StemRequirement::EndsInConsonant),
    ending("o", "oʊ", StemRequirement::Any),
    ending("a", "ə", StemRequirement::HasVowel),
];

/// Long vowel sounds used before a silent final "e" ("make", "ride").
pub const LONG_VOWELS: &[(char, &str)] = &[
    ('a', "eɪ"),
    ('e', "iː"),
    ('i', "aɪ"),
    ('o', "oʊ"),
    ('u', "uː"),
    ('y', "aɪ"),
];

/// General substitutions in priority order.
///
/// Applied leftmost-first: at any position the earliest entry that matches
/// wins, so longer patterns are listed ahead of their prefixes ("tch"
/// before "ch", "ear" before "ea"). Produced symbols are never re-matched.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    // Four letters
    ("ough", "oʊ"),
    ("augh", "ɔː"),
    ("eigh", "eɪ"),
    // Three letters
    ("igh", "aɪ"),
    ("tch", "tʃ"),
    ("sch", "sk"),
    ("dge", "dʒ"),
    ("air", "ɛər"),
    ("ear", "ɪər"),
    ("eer", "ɪər"),
    ("oor", "ɔːr"),
    ("our", "aʊər"),
    // Consonant digraphs
    ("ch", "tʃ"),
    ("sh", "ʃ"),
    ("th", "θ"),
    ("ph", "f"),
    ("wh", "w"),
    ("wr", "r"),
    ("kn", "n"),
    ("gn", "n"),
    ("mb", "m"),
    ("ck", "k"),
    ("ng", "ŋ"),
    ("nk", "ŋk"),
    ("qu", "kw"),
    ("gh", ""),
    ("ce", "sɛ"),
    ("ci", "sɪ"),
    ("cy", "si"),
    // R-coloured vowels
    ("ar", "ɑːr"),
    ("or", "ɔːr"),
    ("er", "ɜːr"),
    ("ir", "ɜːr"),
    ("ur", "ɜːr"),
    // Vowel digraphs
    ("ee", "iː"),
    ("ea", "iː"),
    ("ie", "iː"),
    ("ai", "eɪ"),
    ("ay", "eɪ"),
    ("ei", "eɪ"),
    ("ey", "eɪ"),
    ("oa", "oʊ"),
    ("oe", "oʊ"),
    ("oo", "uː"),
    ("ou", "aʊ"),
    ("ow", "aʊ"),
    ("oi", "ɔɪ"),
    ("oy", "ɔɪ"),
    ("au", "ɔː"),
    ("aw", "ɔː"),
    ("ew", "uː"),
    ("ue", "uː"),
    ("ui", "uː"),
    // Doubled consonants
    ("bb", "b"),
    ("cc", "k"),
    ("dd", "d"),
    ("ff", "f"),
    ("gg", "g"),
    ("ll", "l"),
    ("mm", "m"),
    ("nn", "n"),
    ("pp", "p"),
    ("rr", "r"),
    ("ss", "s"),
    ("tt", "t"),
    ("zz", "z"),
    // Single letters
    ("a", "æ"),
    ("e", "ɛ"),
    ("i", "ɪ"),
    ("o", "ɒ"),
    ("u", "ʌ"),
    ("y", "ɪ"),
    ("c", "k"),
    ("q", "k"),
    ("x", "ks"),
    ("j", "dʒ"),
];

/// Vowel symbols that can appear in a phonetic string.
pub const PHONETIC_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'æ', 'ɛ', 'ɪ', 'ɒ', 'ʌ', 'ə', 'ɔ', 'ɑ', 'ɜ', 'ʊ',
];
