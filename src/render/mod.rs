//! Rendering of descriptors and content previews.

mod json;
mod preview;
mod sample;

pub use json::{to_json, JsonFormat};
pub use preview::{escape_html, json_preview, markdown_to_html, preview, sanitize_html};
pub use sample::{sample_content, SAMPLE_CONTENT};
