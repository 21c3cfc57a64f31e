//! Heuristic content parsers.
//!
//! Every text parser here is infallible: malformed or unexpected input
//! degrades to default or mock data instead of an error. Only the JSON
//! helpers return `Result`, and callers decide whether to recover.

mod html;
mod json;
mod product;
mod section;
mod table;
mod testimonial;

pub use html::{HtmlElement, HtmlFragment};
pub use json::{decode_record, decode_rows};
pub use product::parse_product;
pub use section::{parse_html_sections, parse_markdown_sections, parse_sections, parse_text_sections, SectionMode};
pub use table::parse_table;
pub use testimonial::{parse_rating, parse_testimonial};

/// Normalize Windows line endings so line-based heuristics see `\n` only.
pub(crate) fn normalize_newlines(content: &str) -> std::borrow::Cow<'_, str> {
    if content.contains('\r') {
        std::borrow::Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        std::borrow::Cow::Borrowed(content)
    }
}
