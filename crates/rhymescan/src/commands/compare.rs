//! Compare command: classify how two inputs rhyme.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use rhymescan_core::rhyme::{self, CompareMode, CustomRhymeGroups, RhymeStrength};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First word, line or phrase.
    pub first: String,

    /// Second word, line or phrase.
    pub second: String,

    /// Granularity of the comparison.
    #[arg(long, value_enum, default_value_t)]
    pub mode: CompareMode,
}

/// Compare two inputs and print the verdict plus any shared hip-hop group.
#[instrument(name = "cmd_compare", skip_all, fields(mode = ?args.mode))]
pub fn cmd_compare(
    args: CompareArgs,
    global_json: bool,
    rhyme_groups: Option<&CustomRhymeGroups>,
) -> anyhow::Result<()> {
    debug!(first = %args.first, second = %args.second, "executing compare command");

    let comparison = rhyme::compare(&args.first, &args.second, args.mode, rhyme_groups);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("{} / {}", args.first.bold(), args.second.bold());

    if let Some(ref verdict) = comparison.verdict {
        println!("  {} {}", "Strength:".cyan(), paint(verdict.strength));
        if let Some(ref pattern) = verdict.pattern {
            println!("  {} {}", "Pattern:".cyan(), pattern);
        }
        if let Some(matched) = verdict.syllable_match {
            println!("  {} {}", "Matching syllables:".cyan(), matched);
        }
    }

    if let Some(ref phrase) = comparison.phrase {
        if phrase.rhymes {
            println!(
                "  {} \"{}\" / \"{}\" on /{}/",
                "Match:".cyan(),
                phrase.left.as_deref().unwrap_or_default(),
                phrase.right.as_deref().unwrap_or_default(),
                phrase.pattern.as_deref().unwrap_or_default(),
            );
        } else {
            println!("  {} {}", "Match:".cyan(), "none".dimmed());
        }
    }

    match comparison.hip_hop_group {
        Some(ref group) => println!("  {} {}", "Hip-hop group:".cyan(), group.green()),
        None => println!("  {} {}", "Hip-hop group:".cyan(), "none".dimmed()),
    }

    Ok(())
}

fn paint(strength: RhymeStrength) -> String {
    match strength.rank() {
        4.. => strength.as_str().green().to_string(),
        2..=3 => strength.as_str().yellow().to_string(),
        1 => strength.as_str().red().to_string(),
        _ => strength.as_str().dimmed().to_string(),
    }
}
