//! Scheme command: label the rhyme scheme of a lyric file.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use rhymescan_core::scheme::{SKIPPED_LABEL, detect_multi_syllable_rhyme_scheme};
use rhymescan_core::{lyrics, markdown};

/// Arguments for the `scheme` subcommand.
#[derive(Args, Debug)]
pub struct SchemeArgs {
    /// Lyric file (`-` for stdin). Markdown files are stripped first.
    pub file: Utf8PathBuf,
}

/// Lyric lines of a file, using the markdown reader for `.md` files.
pub(crate) fn read_lyric_lines(
    path: &Utf8Path,
    max_bytes: Option<usize>,
) -> anyhow::Result<Vec<String>> {
    let content = super::read_input_file(path, max_bytes)?;
    let lines = if super::is_markdown(path) {
        markdown::lyric_lines_from_markdown(&content)
    } else {
        lyrics::lyric_lines(&content)
    };
    if lines.is_empty() {
        bail!("{path} has no lyric lines");
    }
    Ok(lines)
}

/// Print the rhyme scheme of a lyric file.
#[instrument(name = "cmd_scheme", skip_all, fields(file = %args.file))]
pub fn cmd_scheme(
    args: SchemeArgs,
    global_json: bool,
    max_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing scheme command");

    let lines = read_lyric_lines(&args.file, max_bytes)?;
    let scheme = detect_multi_syllable_rhyme_scheme(&lines);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&scheme)?);
        return Ok(());
    }

    println!("{} {}", "Scheme:".cyan(), scheme.pattern.bold());
    for (line, label) in lines.iter().zip(&scheme.labels) {
        if label == SKIPPED_LABEL {
            println!("  {:>2}  {}", label.dimmed(), line.dimmed());
        } else {
            println!("  {:>2}  {}", label.green(), line);
        }
    }
    Ok(())
}
