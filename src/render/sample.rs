//! Built-in demo content.

/// Markdown document offered when the user asks for sample content.
pub const SAMPLE_CONTENT: &str = "# Sample Content

This is a sample piece of content that you can use to test the Content-to-Experience Converter.

## Features

1. Interactive elements
2. Multi-platform consistency
3. Engagement optimization
4. ROI measurement

Try transforming this content into an interactive experience!";

/// The sample document and its content type.
pub fn sample_content() -> (&'static str, crate::ContentType) {
    (SAMPLE_CONTENT, crate::ContentType::Markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_markdown_sections;

    #[test]
    fn test_sample_has_two_sections() {
        let record = parse_markdown_sections(SAMPLE_CONTENT);
        assert_eq!(
            record.titles().collect::<Vec<_>>(),
            vec!["Sample Content", "Features"]
        );
    }
}
