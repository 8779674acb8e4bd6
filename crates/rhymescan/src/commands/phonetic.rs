//! Phonetic command: approximate pronunciations.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use rhymescan_core::phonetic::{get_phonetic_ending, get_phonetic_representation};

/// Arguments for the `phonetic` subcommand.
#[derive(Args, Debug)]
pub struct PhoneticArgs {
    /// Words to transcribe.
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Only show the sound of the last N syllables.
    #[arg(long, value_name = "N")]
    pub ending: Option<usize>,
}

#[derive(Debug, Serialize)]
struct WordPhonetic {
    word: String,
    phonetic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ending: Option<String>,
}

/// Print the phonetic approximation of every word.
#[instrument(name = "cmd_phonetic", skip_all, fields(words = args.words.len(), ending = ?args.ending))]
pub fn cmd_phonetic(args: PhoneticArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing phonetic command");

    let results: Vec<WordPhonetic> = args
        .words
        .into_iter()
        .map(|word| WordPhonetic {
            phonetic: get_phonetic_representation(&word),
            ending: args.ending.map(|n| get_phonetic_ending(&word, n)),
            word,
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for r in &results {
        match r.ending {
            Some(ref ending) => println!(
                "{}: /{}/  {} /{}/",
                r.word.bold(),
                r.phonetic.cyan(),
                "ending".dimmed(),
                ending.green()
            ),
            None => println!("{}: /{}/", r.word.bold(), r.phonetic.cyan()),
        }
    }
    Ok(())
}
