//! Structured-section parsing for markdown, HTML and plain text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::html::HtmlFragment;
use super::normalize_newlines;
use crate::detect::ContentType;
use crate::model::{ContentRecord, Section};

static MARKDOWN_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,3} ").unwrap());

/// Which splitting strategy to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMode {
    /// Split on lines starting with `#`, `##` or `###`
    Markdown,
    /// Split on `<h1>`..`<h3>` elements
    Html,
    /// Split on blank-line paragraphs
    Text,
}

impl From<ContentType> for SectionMode {
    fn from(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Markdown => SectionMode::Markdown,
            ContentType::Html => SectionMode::Html,
            ContentType::Json | ContentType::Text => SectionMode::Text,
        }
    }
}

/// Parse content into sections using the given mode.
pub fn parse_sections(content: &str, mode: SectionMode) -> ContentRecord {
    match mode {
        SectionMode::Markdown => parse_markdown_sections(content),
        SectionMode::Html => parse_html_sections(content),
        SectionMode::Text => parse_text_sections(content),
    }
}

/// Split markdown on level 1-3 headings.
///
/// The first line of each segment is the title and the rest is the content.
/// A leading segment with no text is dropped. Input without any heading is
/// parsed as plain text paragraphs instead.
pub fn parse_markdown_sections(content: &str) -> ContentRecord {
    let content = normalize_newlines(content);

    if !MARKDOWN_HEADING.is_match(&content) {
        log::debug!("no markdown headings found, falling back to paragraphs");
        return parse_text_sections(&content);
    }

    let mut record = ContentRecord::new();
    for (index, segment) in MARKDOWN_HEADING.split(&content).enumerate() {
        if index == 0 && segment.trim().is_empty() {
            continue;
        }

        let (title, body) = segment.split_once('\n').unwrap_or((segment, ""));
        record.push(Section::text(title.trim(), body.trim()));
    }

    record
}

/// Split an HTML fragment on `<h1>`, `<h2>` and `<h3>` elements.
///
/// Each section's content is the markup of the heading's following sibling
/// elements, up to the next heading sibling. A fragment without headings
/// becomes a single section holding the whole markup.
pub fn parse_html_sections(content: &str) -> ContentRecord {
    let fragment = HtmlFragment::parse(content);
    let mut record = ContentRecord::new();

    for heading in fragment.headings() {
        let title = fragment.text_content(heading);
        let body: String = fragment
            .following_siblings(heading)
            .take_while(|&sibling| !fragment.element(sibling).is_heading())
            .map(|sibling| fragment.outer_html(sibling))
            .collect();

        record.push(Section::html(title.trim(), body));
    }

    if record.is_empty() && !content.trim().is_empty() {
        log::debug!("no HTML headings found, keeping the fragment as one section");
        record.push(Section::html("Section 1", content.trim()));
    }

    record
}

/// Split plain text on blank lines.
///
/// Titles are `Section N` where N is the 1-based position among all
/// paragraphs, blank ones included, so numbering can skip.
pub fn parse_text_sections(content: &str) -> ContentRecord {
    let content = normalize_newlines(content);

    content
        .split("\n\n")
        .enumerate()
        .filter(|(_, paragraph)| !paragraph.trim().is_empty())
        .map(|(index, paragraph)| Section::text(format!("Section {}", index + 1), paragraph.trim()))
        .collect::<Vec<_>>()
        .into()
}
