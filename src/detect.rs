//! Content type tags and parser selection.

use crate::error::{Error, Result};
use crate::model::TransformationKind;
use crate::parser::SectionMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Declared format of input content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Markdown text
    Markdown,
    /// JSON document
    Json,
    /// HTML fragment or document
    Html,
    /// Plain text
    Text,
}

impl ContentType {
    /// All content types.
    pub const ALL: [ContentType; 4] = [
        ContentType::Markdown,
        ContentType::Json,
        ContentType::Html,
        ContentType::Text,
    ];

    /// Canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Markdown => "markdown",
            ContentType::Json => "json",
            ContentType::Html => "html",
            ContentType::Text => "text",
        }
    }

    /// Content type for a file extension (without the leading dot).
    ///
    /// Unknown extensions are treated as plain text.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => ContentType::Markdown,
            "json" => ContentType::Json,
            "html" | "htm" => ContentType::Html,
            _ => ContentType::Text,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ContentType::Markdown),
            "json" => Ok(ContentType::Json),
            "html" | "htm" => Ok(ContentType::Html),
            "text" | "txt" | "plain" => Ok(ContentType::Text),
            _ => Err(Error::UnknownContentType(s.to_string())),
        }
    }
}

/// Detect the content type of a file from its extension.
///
/// # Example
/// ```
/// use exconv::detect::{detect_content_type_from_path, ContentType};
///
/// assert_eq!(detect_content_type_from_path("notes.md"), ContentType::Markdown);
/// assert_eq!(detect_content_type_from_path("README"), ContentType::Text);
/// ```
pub fn detect_content_type_from_path<P: AsRef<Path>>(path: P) -> ContentType {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(ContentType::from_extension)
        .unwrap_or(ContentType::Text)
}

/// How tabular data is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataParser {
    /// Decode a JSON array, degrading to no rows
    JsonRows,
    /// Pipe-delimited table scan
    PipeTable,
}

/// How a product or testimonial record is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordParser {
    /// Line-classified text
    Text,
    /// Strict JSON object
    Json,
}

/// Parser chosen for a transformation and content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    /// Section splitting for stories
    Sections(SectionMode),
    /// Row reading for visualizations
    Data(DataParser),
    /// Product record reading
    Product(RecordParser),
    /// Testimonial record reading
    Testimonial(RecordParser),
}

/// Section mode for a story. Every content type has one.
pub fn section_parser(content_type: ContentType) -> SectionMode {
    SectionMode::from(content_type)
}

/// Data parser for a visualization; HTML has none.
pub fn data_parser(content_type: ContentType) -> Result<DataParser> {
    match content_type {
        ContentType::Json => Ok(DataParser::JsonRows),
        ContentType::Markdown | ContentType::Text => Ok(DataParser::PipeTable),
        ContentType::Html => Err(unsupported(TransformationKind::DataVisualization, content_type)),
    }
}

/// Record parser for a product demo or testimonial story; HTML has none.
pub fn record_parser(kind: TransformationKind, content_type: ContentType) -> Result<RecordParser> {
    match content_type {
        ContentType::Json => Ok(RecordParser::Json),
        ContentType::Markdown | ContentType::Text => Ok(RecordParser::Text),
        ContentType::Html => Err(unsupported(kind, content_type)),
    }
}

/// Pick the parser for a transformation, or fail if the content type has no mapping.
pub fn select_parser(kind: TransformationKind, content_type: ContentType) -> Result<ParserKind> {
    let parser = match kind {
        TransformationKind::InteractiveStory => ParserKind::Sections(section_parser(content_type)),
        TransformationKind::DataVisualization => ParserKind::Data(data_parser(content_type)?),
        TransformationKind::ProductDemo => {
            ParserKind::Product(record_parser(kind, content_type)?)
        }
        TransformationKind::TestimonialStory => {
            ParserKind::Testimonial(record_parser(kind, content_type)?)
        }
    };

    log::debug!("{} on {} input uses {:?}", kind.operation(), content_type, parser);
    Ok(parser)
}

fn unsupported(kind: TransformationKind, content_type: ContentType) -> Error {
    Error::UnsupportedContentType {
        operation: unsupported_label(kind),
        content_type: content_type.to_string(),
    }
}

fn unsupported_label(kind: TransformationKind) -> &'static str {
    match kind {
        TransformationKind::InteractiveStory => "interactive story",
        TransformationKind::DataVisualization => "data visualization",
        TransformationKind::ProductDemo => "product demo",
        TransformationKind::TestimonialStory => "testimonial story",
    }
}

/// Content types a transformation accepts.
pub fn supported_content_types(kind: TransformationKind) -> Vec<ContentType> {
    ContentType::ALL
        .into_iter()
        .filter(|ct| select_parser(kind, *ct).is_ok())
        .collect()
}
