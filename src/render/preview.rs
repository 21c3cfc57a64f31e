//! HTML previews of raw content.
//!
//! These are deliberately simple string transforms for showing what was
//! loaded, not a markdown renderer or a sanitizer to rely on.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detect::ContentType;

static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\. (.*)$").unwrap());
static LIST_ITEMS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<li>(.*)</li>").unwrap());
static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap());

/// Render a preview of content as an HTML fragment.
pub fn preview(content: &str, content_type: ContentType) -> String {
    let inner = match content_type {
        ContentType::Markdown => markdown_to_html(content),
        ContentType::Json => json_preview(content),
        ContentType::Html => sanitize_html(content),
        ContentType::Text => escape_html(content),
    };

    format!("<div class=\"content-preview-inner\">{}</div>", inner)
}

/// Convert a small markdown subset to HTML.
///
/// Handles `#`..`###` headings and numbered lists; every other line that
/// does not already start with a tag becomes a paragraph.
pub fn markdown_to_html(markdown: &str) -> String {
    let html = H1.replace_all(markdown, "<h1>$1</h1>");
    let html = H2.replace_all(&html, "<h2>$1</h2>");
    let html = H3.replace_all(&html, "<h3>$1</h3>");

    let html = NUMBERED_ITEM.replace_all(&html, "<li>$1</li>");
    let html = html.replace("</li>\n<li>", "</li><li>");
    let html = LIST_ITEMS.replace_all(&html, "<ol><li>$1</li></ol>");
    let html = html.replace("</ol>\n<ol>", "");

    html.split('\n')
        .map(|line| {
            if starts_with_tag(line) {
                line.to_string()
            } else {
                format!("<p>{}</p>", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .replace("<p></p>", "")
}

fn starts_with_tag(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_ascii_lowercase())
}

/// Remove `<script>` elements.
pub fn sanitize_html(html: &str) -> String {
    SCRIPT.replace_all(html, "").into_owned()
}

/// Pretty-print JSON, or describe why it is invalid.
pub fn json_preview(content: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(content)
        .and_then(|value| serde_json::to_string_pretty(&value))
    {
        Ok(pretty) => format!("<pre>{}</pre>", escape_html(&pretty)),
        Err(e) => format!(
            "<div class=\"error\">Invalid JSON: {}</div>",
            escape_html(&e.to_string())
        ),
    }
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
