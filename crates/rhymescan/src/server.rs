//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes the rhyme engine over the MCP protocol, making it
//! available to AI assistants (Claude Code, Cursor, etc.) via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library that
//! the CLI commands use; each `#[tool]` method delegates to core library
//! functions rather than implementing business logic directly.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use rhymescan_core::analysis::{self, AnalysisOptions};
use rhymescan_core::rhyme::{self, CompareMode, CustomRhymeGroups};
use rhymescan_core::{lyrics, markdown, phonetic, scheme, syllables};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `break_syllables` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BreakSyllablesParams {
    /// Words to split into syllables.
    pub words: Vec<String>,
}

/// Parameters for the `phonetic` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct PhoneticParams {
    /// Words to transcribe.
    pub words: Vec<String>,
    /// Also return the sound of the last N syllables.
    pub ending: Option<usize>,
}

/// Parameters for the `compare_rhyme` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompareRhymeParams {
    /// First word, line or phrase.
    pub first: String,
    /// Second word, line or phrase.
    pub second: String,
    /// Granularity: "word" (default), "line" or "phrase".
    #[serde(default)]
    pub mode: CompareMode,
}

/// Parameters for the `detect_scheme` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DetectSchemeParams {
    /// Lyric text, one line per line.
    pub text: String,
    /// Whether to strip markdown formatting first.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `analyze_lyrics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeLyricsParams {
    /// Lyric text.
    pub text: String,
    /// Whether to strip markdown formatting first.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Checks to run. Omit for all checks.
    pub checks: Option<Vec<String>>,
    /// Minimum acceptable rhyme density (0.0-1.0).
    pub min_density: Option<f64>,
}

#[derive(Serialize)]
struct WordSyllables<'a> {
    word: &'a str,
    syllables: Vec<String>,
    count: usize,
}

#[derive(Serialize)]
struct WordPhonetic<'a> {
    word: &'a str,
    phonetic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ending: Option<String>,
}

/// MCP server exposing the rhyme engine to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input: Option<usize>,
    rhyme_groups: Option<CustomRhymeGroups>,
    min_density: Option<f64>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectServer {
    /// Reject text inputs larger than this many bytes.
    #[must_use]
    pub const fn with_max_input(mut self, max_input: Option<usize>) -> Self {
        self.max_input = max_input;
        self
    }

    /// Custom hip-hop groups for comparisons and analysis.
    #[must_use]
    pub fn with_rhyme_groups(mut self, groups: Option<CustomRhymeGroups>) -> Self {
        self.rhyme_groups = groups;
        self
    }

    /// Default density gate when a call does not pass one.
    #[must_use]
    pub const fn with_min_density(mut self, min_density: Option<f64>) -> Self {
        self.min_density = min_density;
        self
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input: Some(rhymescan_core::DEFAULT_MAX_INPUT_BYTES),
            rhyme_groups: None,
            min_density: None,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Split words into syllables.
    #[tool(description = "Break words into syllables. Returns each word's syllables and count.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn break_syllables(
        &self,
        Parameters(params): Parameters<BreakSyllablesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "break_syllables", words = params.words.len(), "executing MCP tool");
        self.check_size(&params.words.concat())?;

        let results: Vec<WordSyllables<'_>> = params
            .words
            .iter()
            .map(|word| {
                let syllables = syllables::break_into_syllables(word);
                WordSyllables {
                    word,
                    count: syllables.len(),
                    syllables,
                }
            })
            .collect();

        tracing::info!(tool = "break_syllables", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&results)?)]))
    }

    /// Approximate pronunciations.
    #[tool(
        description = "Approximate the pronunciation of words as IPA-like strings, optionally with the sound of the last N syllables."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn phonetic(
        &self,
        Parameters(params): Parameters<PhoneticParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "phonetic", ending = ?params.ending, "executing MCP tool");
        self.check_size(&params.words.concat())?;

        let results: Vec<WordPhonetic<'_>> = params
            .words
            .iter()
            .map(|word| WordPhonetic {
                word,
                phonetic: phonetic::get_phonetic_representation(word),
                ending: params.ending.map(|n| phonetic::get_phonetic_ending(word, n)),
            })
            .collect();

        tracing::info!(tool = "phonetic", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&results)?)]))
    }

    /// Classify a rhyme between two inputs.
    #[tool(
        description = "Classify how two words, lines or phrases rhyme. Returns strength (perfect, near, strong, slant, moderate, assonance, consonance, weak, none), the matched pattern, and any shared hip-hop group."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", mode = ?params.mode))]
    fn compare_rhyme(
        &self,
        Parameters(params): Parameters<CompareRhymeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "compare_rhyme", "executing MCP tool");
        self.check_size(&params.first)?;
        self.check_size(&params.second)?;

        let comparison = rhyme::compare(
            &params.first,
            &params.second,
            params.mode,
            self.rhyme_groups.as_ref(),
        );

        tracing::info!(tool = "compare_rhyme", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &comparison,
        )?)]))
    }

    /// Label the rhyme scheme of lyric text.
    #[tool(
        description = "Detect the rhyme scheme of lyric lines (e.g. ABAB). Section markers like [Chorus] are skipped."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn detect_scheme(
        &self,
        Parameters(params): Parameters<DetectSchemeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "detect_scheme",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let lines = if params.strip_markdown {
            markdown::lyric_lines_from_markdown(&params.text)
        } else {
            lyrics::lyric_lines(&params.text)
        };
        let detected = scheme::detect_multi_syllable_rhyme_scheme(&lines);

        tracing::info!(
            tool = "detect_scheme",
            pattern = %detected.pattern,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &detected,
        )?)]))
    }

    /// Run the full lyric analysis.
    #[tool(
        description = "Analyze song lyrics: syllables per line, rhyme scheme and density, per-stanza schemes, internal rhymes, and hip-hop group pairs."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_lyrics(
        &self,
        Parameters(params): Parameters<AnalyzeLyricsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_lyrics",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;
        if let Some(unknown) = params
            .checks
            .iter()
            .flatten()
            .find(|c| !analysis::ALL_CHECKS.contains(&c.as_str()))
        {
            return Err(McpError::invalid_params(
                format!(
                    "unknown check '{unknown}' (available: {})",
                    analysis::ALL_CHECKS.join(", ")
                ),
                None,
            ));
        }

        let options = AnalysisOptions {
            checks: params.checks.as_deref(),
            min_density: params.min_density.or(self.min_density),
            rhyme_groups: self.rhyme_groups.as_ref(),
        };
        let report = analysis::analyze_lyrics(&params.text, params.strip_markdown, &options)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(
            tool = "analyze_lyrics",
            lines = report.line_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use tools to syllabify words, classify rhymes, and analyze lyrics.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");

        assert!(!result.is_error.unwrap_or(false));
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn break_syllables_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(BreakSyllablesParams {
            words: vec!["beautiful".to_string(), "cat".to_string()],
        });

        let result = server
            .break_syllables(params)
            .expect("break_syllables should succeed");
        let json = json_of(&result);
        assert_eq!(json[0]["count"], 3);
        assert_eq!(json[1]["syllables"][0], "cat");
    }

    #[test]
    fn phonetic_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(PhoneticParams {
            words: vec!["nation".to_string()],
            ending: Some(2),
        });

        let result = server.phonetic(params).expect("phonetic should succeed");
        let json = json_of(&result);
        assert_eq!(json[0]["phonetic"], "næʃən");
        assert_eq!(json[0]["ending"], "ʃən");
    }

    #[test]
    fn compare_rhyme_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(CompareRhymeParams {
            first: "nation".to_string(),
            second: "station".to_string(),
            mode: CompareMode::Word,
        });

        let result = server
            .compare_rhyme(params)
            .expect("compare_rhyme should succeed");
        let json = json_of(&result);
        assert_eq!(json["verdict"]["strength"], "perfect");
        assert_eq!(json["mode"], "word");
    }

    #[test]
    fn compare_rhyme_uses_custom_groups() {
        let mut groups = CustomRhymeGroups::new();
        groups.insert(
            "orange_group".to_string(),
            vec!["orange".to_string(), "porridge".to_string()],
        );
        let server = ProjectServer::new().with_rhyme_groups(Some(groups));
        let params = Parameters(CompareRhymeParams {
            first: "orange".to_string(),
            second: "porridge".to_string(),
            mode: CompareMode::Word,
        });

        let result = server
            .compare_rhyme(params)
            .expect("compare_rhyme should succeed");
        assert_eq!(json_of(&result)["hip_hop_group"], "orange_group");
    }

    #[test]
    fn detect_scheme_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(DetectSchemeParams {
            text: "Roses are red\nViolets are blue\nSugar is sweet\nAnd so are you".to_string(),
            strip_markdown: false,
        });

        let result = server
            .detect_scheme(params)
            .expect("detect_scheme should succeed");
        assert_eq!(json_of(&result)["pattern"], "ABCB");
    }

    #[test]
    fn analyze_lyrics_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeLyricsParams {
            text: "[Verse]\nRoses are red\nViolets are blue\n\nSugar is sweet\nAnd so are you"
                .to_string(),
            strip_markdown: false,
            checks: None,
            min_density: None,
        });

        let result = server
            .analyze_lyrics(params)
            .expect("analyze_lyrics should succeed");
        let json = json_of(&result);
        assert_eq!(json["line_count"], 4);
        assert!(json["scheme"].is_object());
        assert!(json["syllables"].is_object());
    }

    #[test]
    fn analyze_lyrics_rejects_empty_text() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeLyricsParams {
            text: "\n\n".to_string(),
            strip_markdown: false,
            checks: None,
            min_density: None,
        });
        assert!(server.analyze_lyrics(params).is_err());
    }

    #[test]
    fn analyze_lyrics_rejects_unknown_check() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeLyricsParams {
            text: "Roses are red\nViolets are blue".to_string(),
            strip_markdown: false,
            checks: Some(vec!["meter".to_string()]),
            min_density: None,
        });
        assert!(server.analyze_lyrics(params).is_err());
    }

    #[test]
    fn oversized_input_is_rejected() {
        let server = ProjectServer::new().with_max_input(Some(8));
        let params = Parameters(DetectSchemeParams {
            text: "this text is far longer than eight bytes".to_string(),
            strip_markdown: false,
        });
        assert!(server.detect_scheme(params).is_err());
    }
}
