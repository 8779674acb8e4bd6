//! Core library for rhymescan.
//!
//! This crate provides the rhyme engine used by the `rhymescan` CLI, its MCP
//! server, and any downstream consumers.
//!
//! # Modules
//!
//! - [`syllables`] - Heuristic syllabification
//! - [`phonetic`] - Rule-based phonetic approximation
//! - [`rhyme`] - Word, line, phrase and hip-hop rhyme classification
//! - [`scheme`] - Rhyme-scheme labeling of line sequences
//! - [`lyrics`] - Lyric-sheet line and stanza handling
//! - [`analysis`] - Whole-song reports
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use rhymescan_core::{RhymeStrength, check_phonetic_rhyme, detect_multi_syllable_rhyme_scheme};
//!
//! let verdict = check_phonetic_rhyme("nation", "station");
//! assert_eq!(verdict.strength, RhymeStrength::Perfect);
//!
//! let scheme = detect_multi_syllable_rhyme_scheme(&[
//!     "Roses are red",
//!     "Violets are blue",
//!     "Sugar is sweet",
//!     "And so are you",
//! ]);
//! assert_eq!(scheme.pattern, "ABCB");
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod lyrics;
pub mod markdown;
pub mod phonetic;
pub mod rhyme;
pub mod scheme;
pub mod syllables;

pub use analysis::{ALL_CHECKS, AnalysisOptions, LyricsReport, analyze_lyrics};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use phonetic::{get_phonetic_ending, get_phonetic_representation};
pub use rhyme::{
    CompareMode, Comparison, CustomRhymeGroups, InternalRhymes, MultiWordMatch, RhymeStrength,
    RhymeVerdict, check_hip_hop_rhyme, check_multi_syllable_rhyme, check_multi_word_rhyme,
    check_phonetic_rhyme, compare, find_internal_rhymes,
};
pub use scheme::{RhymeScheme, detect_multi_syllable_rhyme_scheme};
pub use syllables::{break_into_syllables, count_syllables};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
