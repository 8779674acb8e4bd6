//! Markdown lyric sheets.
//!
//! Uses pulldown-cmark so that emphasis, links and list markers disappear
//! cleanly while the line structure of each verse survives.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::lyrics;

/// Flatten a markdown lyric sheet into plain lyric text.
///
/// Soft and hard breaks become newlines, paragraphs and list items become
/// stanza boundaries (blank lines). Headings, code blocks, inline code, and
/// YAML frontmatter are dropped. Emphasis and link text are kept without
/// their markers.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_lyrics(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options = Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(&text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_)) => {
                skip_depth = skip_depth.saturating_sub(1);
                result.push_str("\n\n");
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push('\n');
            }

            Event::End(TagEnd::Paragraph) if skip_depth == 0 => {
                result.push_str("\n\n");
            }
            Event::End(TagEnd::Item) if skip_depth == 0 => {
                result.push('\n');
            }

            _ => {}
        }
    }

    result
}

/// Lyric lines of a markdown sheet, section markers removed.
pub fn lyric_lines_from_markdown(text: &str) -> Vec<String> {
    lyrics::lyric_lines(&strip_to_lyrics(text))
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder
        .strip_prefix('\n')
        .unwrap_or(remainder)
        .to_string()
}
