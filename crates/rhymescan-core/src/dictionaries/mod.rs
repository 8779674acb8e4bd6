//! Dictionaries for rhyme analysis.
//!
//! Curated tables used by syllabification, phonetic approximation, and the
//! rhyme classifiers.

pub mod hip_hop;
pub mod phonetic_rules;
pub mod rhyme_groups;
pub mod syllable_exceptions;
