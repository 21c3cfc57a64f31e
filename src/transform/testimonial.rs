//! Testimonial to customer story.

use super::{wrap, TransformOptions, Transformation};
use crate::build::build_testimonial_story;
use crate::detect::{record_parser, ContentType, RecordParser};
use crate::error::Result;
use crate::model::{
    ExperienceDescriptor, Summary, TestimonialRecord, Transformed, TransformationKind,
};
use crate::parser::{decode_record, parse_testimonial};

/// Extracts quote, attribution and rating and builds a customer story.
///
/// JSON input must decode; malformed JSON fails the transformation.
/// HTML input is rejected.
#[derive(Debug, Clone, Default)]
pub struct TestimonialToStory {
    _private: (),
}

impl TestimonialToStory {
    /// Create a new testimonial-to-story transformation.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Transformation for TestimonialToStory {
    fn kind(&self) -> TransformationKind {
        TransformationKind::TestimonialStory
    }

    fn transform(
        &self,
        content: &str,
        content_type: ContentType,
        options: &TransformOptions,
    ) -> Result<ExperienceDescriptor> {
        let testimonial: TestimonialRecord = match record_parser(self.kind(), content_type)? {
            RecordParser::Json => decode_record(content)?,
            RecordParser::Text => parse_testimonial(content),
        };

        let story = build_testimonial_story(&testimonial);
        let customer = testimonial.display_name().to_string();

        Ok(wrap(
            self.kind(),
            content,
            content_type,
            Transformed::TestimonialStory(story),
            Summary::CustomerName(customer),
            options,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_text_testimonial() {
        let descriptor = TestimonialToStory::new()
            .transform(
                "\"Great product\"\n— Jane Smith, Acme Corp\n5 stars\n",
                ContentType::Text,
                &TransformOptions::default(),
            )
            .unwrap();
        assert_eq!(
            descriptor.metadata.summary,
            Summary::CustomerName("Jane Smith".into())
        );
        let story = descriptor.transformed.as_testimonial_story().unwrap();
        assert_eq!(story.customer.company, "Acme Corp");
        assert_eq!(story.testimonial.quote, "Great product");
    }

    #[test]
    fn test_json_testimonial_without_customer() {
        let descriptor = TestimonialToStory::new()
            .transform(r#"{"quote": "Nice"}"#, ContentType::Json, &TransformOptions::default())
            .unwrap();
        assert_eq!(
            descriptor.metadata.summary,
            Summary::CustomerName("Anonymous Customer".into())
        );
    }

    #[test]
    fn test_html_rejected() {
        let result = TestimonialToStory::new().transform(
            "<blockquote>Hi</blockquote>",
            ContentType::Html,
            &TransformOptions::default(),
        );
        assert!(matches!(result, Err(Error::UnsupportedContentType { .. })));
    }
}
