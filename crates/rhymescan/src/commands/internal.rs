//! Internal command: rhymes inside each line.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use rhymescan_core::analysis::internal::analyze_internal_rhymes;

/// Arguments for the `internal` subcommand.
#[derive(Args, Debug)]
pub struct InternalArgs {
    /// Lyric file (`-` for stdin). Markdown files are stripped first.
    pub file: Utf8PathBuf,
}

/// Print each line's internal rhyme pairs.
#[instrument(name = "cmd_internal", skip_all, fields(file = %args.file))]
pub fn cmd_internal(
    args: InternalArgs,
    global_json: bool,
    max_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing internal command");

    let lines = super::scheme::read_lyric_lines(&args.file, max_bytes)?;
    let report = analyze_internal_rhymes(&lines);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.is_empty() {
        println!("{}", "No internal rhymes found.".dimmed());
        return Ok(());
    }

    for entry in &report {
        println!("{} {}", format!("{:>3}", entry.line + 1).dimmed(), entry.text);
        for pair in &entry.pairs {
            println!(
                "      {} / {} ({})",
                pair.first.cyan(),
                pair.second.cyan(),
                pair.strength
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_command_succeeds() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("song.txt")).unwrap();
        std::fs::write(&path, "The cat sat on the mat\nNothing here\n").unwrap();
        assert!(cmd_internal(InternalArgs { file: path.clone() }, false, None).is_ok());
        assert!(cmd_internal(InternalArgs { file: path }, true, None).is_ok());
    }
}
