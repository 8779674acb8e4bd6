//! Spelling families that rhyme with each other.
//!
//! [`ENDING_GROUPS`] holds word endings matched by suffix (used for single
//! words). [`SYLLABLE_GROUPS`] holds syllable rimes matched exactly (used when
//! comparing line endings syllable by syllable).

/// A named family of equivalent spellings.
#[derive(Debug, Clone, Copy)]
pub struct RhymeGroup {
    /// Short label reported as the match pattern.
    pub name: &'static str,
    /// Member spellings.
    pub members: &'static [&'static str],
}

const fn group(name: &'static str, members: &'static [&'static str]) -> RhymeGroup {
    RhymeGroup { name, members }
}

impl RhymeGroup {
    /// Whether `word` ends with any member of the group.
    pub fn has_suffix_of(&self, word: &str) -> bool {
        self.members.iter().any(|m| word.len() > m.len() && word.ends_with(m))
    }

    /// Whether `rime` is exactly one of the members.
    pub fn contains(&self, rime: &str) -> bool {
        self.members.contains(&rime)
    }
}

/// Word-ending families. A word must be longer than the member it matches,
/// so "at" alone does not fall into the "at" family.
pub const ENDING_GROUPS: &[RhymeGroup] = &[
    group("ation", &["ation", "ition", "tion", "sion", "cian"]),
    group("ight", &["ight", "ite", "yte"]),
    group("ine", &["ine", "ign", "yne"]),
    group("ire", &["ire", "yre", "ier", "yer"]),
    group("ore", &["ore", "oor", "our", "oar", "aw"]),
    group("eet", &["eet", "eat", "ete", "eit"]),
    group("een", &["een", "ean", "ene"]),
    group("eel", &["eel", "eal"]),
    group("ame", &["ame", "aim"]),
    group("ain", &["ain", "ane", "eign"]),
    group("ate", &["ate", "ait", "eight"]),
    group("ay", &["ay", "ey", "eigh", "ae"]),
    group("ow", &["ow", "oe", "ough", "eau"]),
    group("ew", &["ew", "ue", "oo", "ou", "wo"]),
    group("ee", &["ee", "ea", "ie", "y"]),
    group("ess", &["ess", "less", "ness", "ous"]),
    group("ed", &["ed", "ead", "aid"]),
    group("art", &["art", "eart"]),
    group("ock", &["ock", "ok"]),
    group("ack", &["ack", "ac", "ak"]),
    group("ick", &["ick", "ic", "ik"]),
    group("ing", &["ing", "in"]),
    group("at", &["at", "att", "atte"]),
];

/// Syllable rime families, matched by exact membership.
pub const SYLLABLE_GROUPS: &[RhymeGroup] = &[
    group("oo", &["oo", "ue", "ew", "ou", "u", "ough"]),
    group("ee", &["ee", "ea", "e", "ie", "ey", "i"]),
    group("ay", &["ay", "ey", "eigh", "ae"]),
    group("eet", &["eet", "eat", "ete", "eit"]),
    group("ed", &["ed", "ead", "aid"]),
    group("ight", &["ight", "ite", "yte"]),
    group("ine", &["ine", "ign", "yne"]),
    group("ire", &["ire", "yre", "ier", "yer"]),
    group("ore", &["ore", "oor", "our", "or", "oar"]),
    group("ame", &["ame", "aim"]),
    group("ain", &["ain", "ane", "ein", "eign"]),
    group("ock", &["ock", "ok"]),
    group("er", &["er", "ur", "ir", "yr"]),
    group("ess", &["ess", "ous"]),
];

/// First ending group both words fall into.
pub fn shared_ending_group(a: &str, b: &str) -> Option<&'static RhymeGroup> {
    ENDING_GROUPS
        .iter()
        .find(|g| g.has_suffix_of(a) && g.has_suffix_of(b))
}

/// First syllable group containing both rimes.
pub fn shared_syllable_group(a: &str, b: &str) -> Option<&'static RhymeGroup> {
    SYLLABLE_GROUPS.iter().find(|g| g.contains(a) && g.contains(b))
}
