//! Section types produced by the structured-section parser.

use serde::{Deserialize, Serialize};

/// How a section's content should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Plain or markdown text
    Text,
    /// Serialized HTML markup
    Html,
}

/// A titled chunk of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text, or `Section N` for plain text
    pub title: String,

    /// Body of the section
    pub content: String,

    /// Content interpretation
    #[serde(rename = "type")]
    pub kind: SectionKind,
}

impl Section {
    /// Create a text section.
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind: SectionKind::Text,
        }
    }

    /// Create an HTML section.
    pub fn html(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind: SectionKind::Html,
        }
    }
}

/// Ordered sections of a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRecord {
    /// The sections
    pub sections: Vec<Section>,
}

impl ContentRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the record has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over section titles.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }
}

impl From<Vec<Section>> for ContentRecord {
    fn from(sections: Vec<Section>) -> Self {
        Self { sections }
    }
}
