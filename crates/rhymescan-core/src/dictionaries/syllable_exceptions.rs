//! Syllable exception table.
//!
//! Whole words whose syllable breakdown the general splitter gets wrong:
//! common function words with silent or irregular vowels, plus song and
//! hip-hop vocabulary that shows up constantly in lyrics.
//!
//! Every entry concatenates back to its key.

use std::collections::HashMap;
use std::sync::LazyLock;

type Entry = (&'static str, &'static [&'static str]);

const FUNCTION_WORDS: &[Entry] = &[
    ("the", &["the"]),
    ("are", &["are"]),
    ("were", &["were"]),
    ("where", &["where"]),
    ("there", &["there"]),
    ("here", &["here"]),
    ("one", &["one"]),
    ("once", &["once"]),
    ("some", &["some"]),
    ("come", &["come"]),
    ("done", &["done"]),
    ("none", &["none"]),
    ("gone", &["gone"]),
    ("give", &["give"]),
    ("live", &["live"]),
    ("have", &["have"]),
    ("love", &["love"]),
    ("move", &["move"]),
    ("lose", &["lose"]),
    ("whose", &["whose"]),
    ("above", &["a", "bove"]),
    ("because", &["be", "cause"]),
    ("into", &["in", "to"]),
    ("only", &["on", "ly"]),
    ("being", &["be", "ing"]),
    ("going", &["go", "ing"]),
    ("doing", &["do", "ing"]),
    ("seeing", &["see", "ing"]),
    ("every", &["ev", "ery"]),
    ("everything", &["ev", "ery", "thing"]),
    ("everyone", &["ev", "ery", "one"]),
    ("everybody", &["ev", "ery", "bod", "y"]),
    ("somebody", &["some", "bod", "y"]),
    ("nobody", &["no", "bod", "y"]),
    ("anybody", &["an", "y", "bod", "y"]),
    ("someone", &["some", "one"]),
    ("sometimes", &["some", "times"]),
    ("something", &["some", "thing"]),
    ("whatever", &["what", "ev", "er"]),
    ("forever", &["for", "ev", "er"]),
    ("never", &["nev", "er"]),
    ("ever", &["ev", "er"]),
    ("over", &["o", "ver"]),
    ("people", &["peo", "ple"]),
    ("hour", &["hour"]),
    ("our", &["our"]),
    ("fire", &["fire"]),
    ("desire", &["de", "sire"]),
    ("believe", &["be", "lieve"]),
    ("inside", &["in", "side"]),
    ("outside", &["out", "side"]),
    ("business", &["bus", "i", "ness"]),
    ("poem", &["po", "em"]),
    ("poetry", &["po", "et", "ry"]),
    ("real", &["real"]),
    ("realize", &["re", "al", "ize"]),
    ("idea", &["i", "de", "a"]),
    ("quiet", &["qui", "et"]),
];

const SONG_VOCABULARY: &[Entry] = &[
    ("heartless", &["heart", "less"]),
    ("money", &["mon", "ey"]),
    ("honey", &["hon", "ey"]),
    ("hustle", &["hus", "tle"]),
    ("hustler", &["hust", "ler"]),
    ("gonna", &["gon", "na"]),
    ("wanna", &["wan", "na"]),
    ("gotta", &["got", "ta"]),
    ("hater", &["ha", "ter"]),
    ("haters", &["ha", "ters"]),
    ("player", &["play", "er"]),
    ("players", &["play", "ers"]),
    ("cypher", &["cy", "pher"]),
    ("lyric", &["lyr", "ic"]),
    ("lyrics", &["lyr", "ics"]),
    ("lyrical", &["lyr", "i", "cal"]),
    ("rhyme", &["rhyme"]),
    ("rhymes", &["rhymes"]),
    ("rhythm", &["rhy", "thm"]),
    ("ghetto", &["ghet", "to"]),
    ("microphone", &["mi", "cro", "phone"]),
    ("paper", &["pa", "per"]),
    ("danger", &["dan", "ger"]),
    ("crazy", &["cra", "zy"]),
    ("baby", &["ba", "by"]),
    ("lady", &["la", "dy"]),
    ("city", &["cit", "y"]),
    ("pretty", &["pret", "ty"]),
    ("hurry", &["hur", "ry"]),
    ("worry", &["wor", "ry"]),
    ("homie", &["ho", "mie"]),
    ("homies", &["ho", "mies"]),
    ("thuggin", &["thug", "gin"]),
    ("flexin", &["flex", "in"]),
    ("hustlin", &["hus", "tlin"]),
    ("ballin", &["ball", "in"]),
    ("nothin", &["noth", "in"]),
    ("somethin", &["some", "thin"]),
    ("photoshop", &["pho", "to", "shop"]),
    ("champagne", &["cham", "pagne"]),
    ("diamond", &["di", "a", "mond"]),
    ("diamonds", &["di", "a", "monds"]),
    ("violence", &["vi", "o", "lence"]),
    ("science", &["sci", "ence"]),
    ("different", &["dif", "fer", "ent"]),
    ("family", &["fam", "i", "ly"]),
    ("believer", &["be", "liev", "er"]),
    ("legendary", &["leg", "end", "ar", "y"]),
    ("victory", &["vic", "to", "ry"]),
    ("history", &["his", "to", "ry"]),
    ("mystery", &["mys", "ter", "y"]),
];

/// Known syllable breakdowns, keyed by cleaned (lower-case, letters-only) word.
pub static SYLLABLE_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        FUNCTION_WORDS
            .iter()
            .chain(SONG_VOCABULARY)
            .copied()
            .collect()
    });

/// Look up a cleaned word in the exception table.
pub fn lookup(word: &str) -> Option<&'static [&'static str]> {
    SYLLABLE_EXCEPTIONS.get(word).copied()
}
