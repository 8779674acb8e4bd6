//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RHYMESCAN_MIN_RHYME_DENSITY");
    cmd
}

const QUATRAIN: &str = "Roses are red\nViolets are blue\nSugar is sweet\nAnd so are you\n";

/// Write lyrics to a temp file with the given extension.
fn lyric_file(body: &str, suffix: &str) -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    std::fs::write(file.path(), body).unwrap();
    file
}

fn stdout_json(output: &assert_cmd::assert::Assert) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).expect("--json should output valid JSON")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("scheme"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().args(["info", "--json"]).assert().success();
    let json = stdout_json(&output);

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"].is_object());
}

// =============================================================================
// Syllables & Phonetic
// =============================================================================

#[test]
fn syllables_prints_breakdown() {
    cmd()
        .args(["--color", "never", "syllables", "beautiful"])
        .assert()
        .success()
        .stdout(predicate::str::contains("beau-ti-ful (3)"));
}

#[test]
fn syllables_json_lists_every_word() {
    let output = cmd()
        .args(["--json", "syllables", "cat", "beautiful"])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["count"], 1);
    assert_eq!(json[1]["count"], 3);
}

#[test]
fn syllables_requires_a_word() {
    cmd().arg("syllables").assert().failure();
}

#[test]
fn phonetic_prints_transcription() {
    cmd()
        .args(["--color", "never", "phonetic", "night"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/naɪt/"));
}

#[test]
fn phonetic_ending_in_json() {
    let output = cmd()
        .args(["--json", "phonetic", "station", "--ending", "2"])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json[0]["ending"], "ʃən");
}

// =============================================================================
// Compare
// =============================================================================

#[test]
fn compare_words_reports_strength() {
    let output = cmd()
        .args(["--json", "compare", "nation", "station"])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json["mode"], "word");
    assert_eq!(json["verdict"]["strength"], "perfect");
    assert_eq!(json["verdict"]["rhymes"], true);
}

#[test]
fn compare_non_rhymes() {
    let output = cmd()
        .args(["--json", "compare", "cat", "dog"])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json["verdict"]["rhymes"], false);
    assert!(json["hip_hop_group"].is_null());
}

#[test]
fn compare_lines() {
    let output = cmd()
        .args([
            "--json",
            "compare",
            "--mode",
            "line",
            "Violets are blue",
            "And so are you",
        ])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json["verdict"]["strength"], "strong");
    assert_eq!(json["verdict"]["syllable_match"], 2);
}

#[test]
fn compare_phrases() {
    let output = cmd()
        .args([
            "--json",
            "compare",
            "--mode",
            "phrase",
            "I pet the cat",
            "spotted a bobcat",
        ])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json["phrase"]["rhymes"], true);
    assert_eq!(json["phrase"]["right"], "bobcat");
}

#[test]
fn compare_shows_hip_hop_group() {
    cmd()
        .args(["--color", "never", "compare", "block", "photoshop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ot_group"));
}

#[test]
fn compare_rejects_unknown_mode() {
    cmd()
        .args(["compare", "--mode", "stanza", "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Scheme & Internal
// =============================================================================

#[test]
fn scheme_of_quatrain() {
    let file = lyric_file(QUATRAIN, ".txt");
    cmd()
        .args(["--color", "never", "scheme", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABCB"));
}

#[test]
fn scheme_skips_section_markers() {
    let file = lyric_file("[Chorus]\nI saw a cat\nIt wore a hat\n(x2)\n", ".txt");
    let output = cmd()
        .args(["--json", "scheme", file.path().to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json["labels"].as_array().unwrap().len(), 2);
}

#[test]
fn scheme_reads_stdin() {
    cmd()
        .args(["--json", "scheme", "-"])
        .write_stdin(QUATRAIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ABCB\""));
}

#[test]
fn scheme_strips_markdown() {
    let sheet = "---\ntitle: Roses\n---\n# Roses\n\nRoses are red  \nViolets are blue  \nSugar is sweet  \nAnd so are you\n";
    let file = lyric_file(sheet, ".md");
    let output = cmd()
        .args(["--json", "scheme", file.path().to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json["pattern"], "ABCB");
}

#[test]
fn scheme_missing_file_fails() {
    cmd()
        .args(["scheme", "/nonexistent/song.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn internal_finds_pairs() {
    let file = lyric_file("The cat sat on the mat\n", ".txt");
    let output = cmd()
        .args(["--json", "internal", file.path().to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json[0]["line"], 0);
    assert!(!json[0]["pairs"].as_array().unwrap().is_empty());
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_text_output() {
    let file = lyric_file(QUATRAIN, ".txt");
    cmd()
        .args(["--color", "never", "analyze", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scheme:"))
        .stdout(predicate::str::contains("ABCB"));
}

#[test]
fn analyze_json_has_every_section() {
    let file = lyric_file(QUATRAIN, ".txt");
    let output = cmd()
        .args(["--json", "analyze", file.path().to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);

    assert_eq!(json["line_count"], 4);
    for section in ["syllables", "scheme", "stanzas", "internal_rhymes", "hip_hop_pairs"] {
        assert!(!json[section].is_null(), "missing {section}");
    }
    assert_eq!(json["scheme"]["rhyme_density"], 0.5);
}

#[test]
fn analyze_selected_checks_only() {
    let file = lyric_file(QUATRAIN, ".txt");
    cmd()
        .args([
            "--json",
            "analyze",
            file.path().to_str().unwrap(),
            "--checks",
            "syllables,stanzas",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"syllables\""))
        .stdout(predicate::str::contains("\"scheme\"").not());
}

#[test]
fn unknown_check_name_fails() {
    let file = lyric_file(QUATRAIN, ".txt");
    cmd()
        .args([
            "analyze",
            file.path().to_str().unwrap(),
            "--checks",
            "meter",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown check"));
}

#[test]
fn density_gate_fails_below_minimum() {
    let file = lyric_file(QUATRAIN, ".txt");
    cmd()
        .args([
            "analyze",
            file.path().to_str().unwrap(),
            "--min-density",
            "0.8",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum"));
}

#[test]
fn density_gate_passes_couplets() {
    let file = lyric_file(
        "I keep it on the block\nthey never gonna stop the block\nshining through the night\nshining through the night\n",
        ".txt",
    );
    cmd()
        .args([
            "analyze",
            file.path().to_str().unwrap(),
            "--min-density",
            "0.8",
        ])
        .assert()
        .success();
}

#[test]
fn analyze_empty_file_fails() {
    let file = lyric_file("\n[Intro]\n\n", ".txt");
    cmd()
        .args(["analyze", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no lyric lines"));
}

// =============================================================================
// Global Flags & Errors
// =============================================================================

#[test]
fn global_flags_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

#[test]
fn log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("run.log");
    cmd()
        .env("RHYMESCAN_LOG_PATH", &log_path)
        .args(["-v", "syllables", "cat"])
        .assert()
        .success();
    assert!(log_path.exists());
}
