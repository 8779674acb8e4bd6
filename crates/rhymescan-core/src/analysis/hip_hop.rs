//! Hip-hop group matches between consecutive line endings.

use crate::lyrics::extract_words;
use crate::rhyme::{CustomRhymeGroups, hip_hop_group_of_pair};

use super::reports::HipHopPair;

/// Consecutive lines whose last words share a hip-hop group.
#[tracing::instrument(skip_all, fields(lines = lines.len()))]
pub fn find_hip_hop_pairs(lines: &[String], custom: Option<&CustomRhymeGroups>) -> Vec<HipHopPair> {
    let endings: Vec<Option<String>> = lines
        .iter()
        .map(|line| extract_words(line).pop())
        .collect();

    let mut pairs = Vec::new();
    for (i, window) in endings.windows(2).enumerate() {
        let (Some(first), Some(second)) = (&window[0], &window[1]) else {
            continue;
        };
        if first == second {
            continue;
        }
        if let Some(group) = hip_hop_group_of_pair(first, second, custom) {
            pairs.push(HipHopPair {
                lines: (i, i + 1),
                words: (first.clone(), second.clone()),
                group,
            });
        }
    }
    pairs
}
