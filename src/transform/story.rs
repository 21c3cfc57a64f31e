//! Article to interactive story.

use super::{wrap, TransformOptions, Transformation};
use crate::build::build_story;
use crate::detect::{section_parser, ContentType};
use crate::error::Result;
use crate::model::{ExperienceDescriptor, Summary, Transformed, TransformationKind};
use crate::parser::parse_sections;

/// Splits an article into sections and attaches an interaction to each.
///
/// Accepts every content type; anything other than markdown or HTML is
/// read as plain text.
#[derive(Debug, Clone, Default)]
pub struct ArticleToStory {
    _private: (),
}

impl ArticleToStory {
    /// Create a new article-to-story transformation.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Transformation for ArticleToStory {
    fn kind(&self) -> TransformationKind {
        TransformationKind::InteractiveStory
    }

    fn transform(
        &self,
        content: &str,
        content_type: ContentType,
        options: &TransformOptions,
    ) -> Result<ExperienceDescriptor> {
        let mode = section_parser(content_type);
        log::debug!("{} on {} input splits as {:?}", self.name(), content_type, mode);

        let sections = parse_sections(content, mode);
        let elements = build_story(&sections);
        let count = elements.len();

        Ok(wrap(
            self.kind(),
            content,
            content_type,
            Transformed::Story(elements),
            Summary::InteractiveElements(count),
            options,
        ))
    }
}
