//! Analyze command: full lyric report.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use rhymescan_core::analysis::{self, AnalysisOptions};
use rhymescan_core::config::Config;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Lyric file to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Checks to run (comma-separated). Omit for all checks.
    #[arg(long, value_delimiter = ',')]
    pub checks: Option<Vec<String>>,

    /// Minimum acceptable rhyme density (0.0–1.0).
    #[arg(long)]
    pub min_density: Option<f64>,
}

/// Run the full lyric analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, checks = ?args.checks, "executing analyze command");

    let content = super::read_input_file(&args.file, max_bytes)?;
    let strip_md = super::is_markdown(&args.file);
    let min_density = args.min_density.or(config.min_rhyme_density);
    let checks = args.checks.as_ref().or(config.checks.as_ref());

    if let Some(list) = checks
        && let Some(unknown) = list.iter().find(|c| !analysis::ALL_CHECKS.contains(&c.as_str()))
    {
        bail!(
            "unknown check '{unknown}' (available: {})",
            analysis::ALL_CHECKS.join(", ")
        );
    }

    let options = AnalysisOptions {
        checks: checks.map(Vec::as_slice),
        min_density,
        rhyme_groups: config.rhyme_groups.as_ref(),
    };
    let report = analysis::analyze_lyrics(&content, strip_md, &options)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} ({} lines)", args.file.bold(), report.line_count);

        if let Some(ref s) = report.syllables {
            println!(
                "\n  {} {} total, {:.1} per line",
                "Syllables:".cyan(),
                s.total,
                s.average,
            );
        }

        if let Some(ref s) = report.scheme {
            let density = format!("{:.0}%", s.rhyme_density * 100.0);
            let density = if s.below_min {
                density.red().to_string()
            } else {
                density.green().to_string()
            };
            println!(
                "\n  {} {} (density {})",
                "Scheme:".cyan(),
                s.scheme.pattern,
                density,
            );
        }

        if let Some(ref stanzas) = report.stanzas {
            let patterns: Vec<&str> = stanzas.iter().map(|s| s.pattern.as_str()).collect();
            println!("\n  {} {}", "Stanzas:".cyan(), patterns.join(" | "));
        }

        if let Some(ref internal) = report.internal_rhymes {
            let pairs: usize = internal.iter().map(|l| l.pairs.len()).sum();
            println!(
                "\n  {} {} pairs across {} lines",
                "Internal:".cyan(),
                pairs,
                internal.len(),
            );
        }

        if let Some(ref hip_hop) = report.hip_hop_pairs
            && !hip_hop.is_empty()
        {
            let shown: Vec<String> = hip_hop
                .iter()
                .take(5)
                .map(|p| format!("{}/{} ({})", p.words.0, p.words.1, p.group))
                .collect();
            println!("\n  {} {}", "Hip-hop:".cyan(), shown.join(", "));
        }
    }

    // Density gate
    if let Some(ref s) = report.scheme
        && s.below_min
        && let Some(min) = s.min_density
    {
        bail!(
            "{} rhyme density {:.2} is below minimum {:.2}",
            args.file,
            s.rhyme_density,
            min,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(tmp: &tempfile::TempDir) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(tmp.path().join("song.txt")).unwrap();
        std::fs::write(
            &path,
            "Roses are red\nViolets are blue\n\nSugar is sweet\nAnd so are you\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn analyze_succeeds() {
        let tmp = tempfile::TempDir::new().unwrap();
        let args = AnalyzeArgs {
            file: song(&tmp),
            checks: None,
            min_density: None,
        };
        assert!(cmd_analyze(args, false, &Config::default(), None).is_ok());
    }

    #[test]
    fn density_gate_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let args = AnalyzeArgs {
            file: song(&tmp),
            checks: None,
            min_density: Some(0.9),
        };
        let err = cmd_analyze(args, true, &Config::default(), None).unwrap_err();
        assert!(err.to_string().contains("below minimum"));
    }

    #[test]
    fn config_density_applies() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = Config {
            min_rhyme_density: Some(0.9),
            ..Config::default()
        };
        let args = AnalyzeArgs {
            file: song(&tmp),
            checks: None,
            min_density: None,
        };
        assert!(cmd_analyze(args, true, &config, None).is_err());
    }

    #[test]
    fn unknown_check_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let args = AnalyzeArgs {
            file: song(&tmp),
            checks: Some(vec!["meter".into()]),
            min_density: None,
        };
        let err = cmd_analyze(args, false, &Config::default(), None).unwrap_err();
        assert!(err.to_string().contains("unknown check"));
    }
}
