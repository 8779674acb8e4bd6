//! Syllables command: break words into syllables.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use rhymescan_core::syllables::break_into_syllables;

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to break apart.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordSyllables {
    word: String,
    syllables: Vec<String>,
    count: usize,
}

/// Print the syllable breakdown of every word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let results: Vec<WordSyllables> = args
        .words
        .into_iter()
        .map(|word| {
            let syllables = break_into_syllables(&word);
            WordSyllables {
                count: syllables.len(),
                word,
                syllables,
            }
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for r in &results {
        println!(
            "{}: {} ({})",
            r.word.bold(),
            r.syllables.join("-").cyan(),
            r.count
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_succeeds() {
        let args = SyllablesArgs {
            words: vec!["beautiful".into(), "sky".into()],
        };
        assert!(cmd_syllables(args, false).is_ok());
    }

    #[test]
    fn json_output_succeeds() {
        let args = SyllablesArgs {
            words: vec!["nation".into()],
        };
        assert!(cmd_syllables(args, true).is_ok());
    }
}
