//! # exconv
//!
//! Content-to-experience converter for Rust.
//!
//! This library takes a piece of content (markdown, JSON, HTML or plain
//! text), parses it with lightweight heuristics, and produces a structured
//! descriptor of an interactive experience: a story with quizzes, a chart
//! configuration, a product demo, or a customer story.
//!
//! ## Quick Start
//!
//! ```
//! use exconv::{ContentType, TransformationEngine};
//!
//! fn main() -> exconv::Result<()> {
//!     let engine = TransformationEngine::new();
//!     let descriptor = engine.data_to_visualization(
//!         "|cat|val|\n|---|---|\n|X|1|\n|Y|2|\n",
//!         ContentType::Markdown,
//!     )?;
//!
//!     let viz = descriptor.transformed.as_visualization().unwrap();
//!     assert_eq!(viz.viz_type.to_string(), "pie");
//!     println!("{}", engine.to_json(&descriptor)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Four transformations**: article to story, data to visualization,
//!   product to demo, testimonial to story
//! - **Never-fail parsing**: heuristics degrade to placeholder data
//! - **Typed descriptors**: serde-serializable trees with stable JSON keys
//! - **Previews**: simple HTML previews of the loaded content

pub mod build;
pub mod detect;
pub mod error;
pub mod infer;
pub mod model;
pub mod parser;
pub mod render;
pub mod transform;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use detect::{
    detect_content_type_from_path, select_parser, ContentType, DataParser, ParserKind, RecordParser,
};
pub use error::{Error, Result};
pub use infer::infer_viz_type;
pub use model::{
    ContentRecord, DataRow, DescriptorMetadata, ExperienceDescriptor, ProductRecord, Section,
    SectionKind, Summary, TabularRecord, TestimonialRecord, Transformed, TransformationKind,
    VizType,
};
pub use render::{JsonFormat, SAMPLE_CONTENT};
pub use transform::{
    ArticleToStory, DataToVisualization, ProductToDemo, TestimonialToStory, TransformOptions,
    Transformation, TransformationRegistry,
};

use chrono::{DateTime, Utc};
use std::path::Path;

/// Turn an article into an interactive story.
///
/// # Example
///
/// ```
/// use exconv::{article_to_story, ContentType};
///
/// let descriptor = article_to_story("# One\na\n# Two\nb", ContentType::Markdown).unwrap();
/// assert_eq!(descriptor.transformed.as_story().unwrap().len(), 2);
/// ```
pub fn article_to_story(content: &str, content_type: ContentType) -> Result<ExperienceDescriptor> {
    TransformationEngine::new().article_to_story(content, content_type)
}

/// Turn tabular data into a chart configuration.
pub fn data_to_visualization(
    content: &str,
    content_type: ContentType,
) -> Result<ExperienceDescriptor> {
    TransformationEngine::new().data_to_visualization(content, content_type)
}

/// Turn a product description into an interactive demo.
pub fn product_to_demo(content: &str, content_type: ContentType) -> Result<ExperienceDescriptor> {
    TransformationEngine::new().product_to_demo(content, content_type)
}

/// Turn a testimonial into a customer story.
pub fn testimonial_to_story(
    content: &str,
    content_type: ContentType,
) -> Result<ExperienceDescriptor> {
    TransformationEngine::new().testimonial_to_story(content, content_type)
}

/// Read a file, detect its content type from the extension, and transform it.
///
/// # Example
///
/// ```no_run
/// use exconv::{transform_file, TransformationKind};
///
/// let descriptor = transform_file("launch.md", TransformationKind::ProductDemo).unwrap();
/// println!("{:?}", descriptor.metadata.summary);
/// ```
pub fn transform_file<P: AsRef<Path>>(
    path: P,
    kind: TransformationKind,
) -> Result<ExperienceDescriptor> {
    TransformationEngine::new().transform_file(path, kind)
}

/// Entry point for running transformations with shared options.
///
/// # Example
///
/// ```
/// use exconv::{ContentType, JsonFormat, TransformationEngine};
/// use chrono::{TimeZone, Utc};
///
/// let engine = TransformationEngine::new()
///     .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
///     .with_json_format(JsonFormat::Compact);
///
/// let descriptor = engine.product_to_demo("# Lamp\n- Dimmable", ContentType::Markdown)?;
/// let json = engine.to_json(&descriptor)?;
/// assert!(json.contains(r#""transformedAt":"2024-01-01T00:00:00.000Z""#));
/// # Ok::<(), exconv::Error>(())
/// ```
pub struct TransformationEngine {
    registry: TransformationRegistry,
    options: TransformOptions,
}

impl TransformationEngine {
    /// Create an engine with the built-in transformations and default options.
    pub fn new() -> Self {
        Self {
            registry: TransformationRegistry::with_defaults(),
            options: TransformOptions::default(),
        }
    }

    /// Use a custom registry.
    pub fn with_registry(mut self, registry: TransformationRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace all options.
    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    /// Pin the `transformedAt` timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.options = self.options.with_timestamp(timestamp);
        self
    }

    /// Set the visualization palette.
    pub fn with_palette<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.options = self.options.with_palette(colors);
        self
    }

    /// Set the JSON output layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.options = self.options.with_json_format(format);
        self
    }

    /// Current options.
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// The registry used for dispatch.
    pub fn registry(&self) -> &TransformationRegistry {
        &self.registry
    }

    /// Run the transformation of the given kind.
    pub fn transform(
        &self,
        kind: TransformationKind,
        content: &str,
        content_type: ContentType,
    ) -> Result<ExperienceDescriptor> {
        self.registry
            .transform(kind, content, content_type, &self.options)
    }

    /// Run a transformation selected by name (e.g. "Product Demo").
    pub fn transform_by_name(
        &self,
        name: &str,
        content: &str,
        content_type: ContentType,
    ) -> Result<ExperienceDescriptor> {
        self.registry
            .transform_by_name(name, content, content_type, &self.options)
    }

    /// Turn an article into an interactive story. Never fails on content type.
    pub fn article_to_story(
        &self,
        content: &str,
        content_type: ContentType,
    ) -> Result<ExperienceDescriptor> {
        self.transform(TransformationKind::InteractiveStory, content, content_type)
    }

    /// Turn tabular data into a chart configuration.
    ///
    /// Malformed JSON yields an empty dataset; HTML is unsupported.
    pub fn data_to_visualization(
        &self,
        content: &str,
        content_type: ContentType,
    ) -> Result<ExperienceDescriptor> {
        self.transform(TransformationKind::DataVisualization, content, content_type)
    }

    /// Turn a product description into an interactive demo.
    ///
    /// Malformed JSON is an error; HTML is unsupported.
    pub fn product_to_demo(
        &self,
        content: &str,
        content_type: ContentType,
    ) -> Result<ExperienceDescriptor> {
        self.transform(TransformationKind::ProductDemo, content, content_type)
    }

    /// Turn a testimonial into a customer story.
    ///
    /// Malformed JSON is an error; HTML is unsupported.
    pub fn testimonial_to_story(
        &self,
        content: &str,
        content_type: ContentType,
    ) -> Result<ExperienceDescriptor> {
        self.transform(TransformationKind::TestimonialStory, content, content_type)
    }

    /// Read a file and transform it, detecting the content type from its extension.
    pub fn transform_file<P: AsRef<Path>>(
        &self,
        path: P,
        kind: TransformationKind,
    ) -> Result<ExperienceDescriptor> {
        let content_type = detect_content_type_from_path(&path);
        self.transform_file_as(path, kind, content_type)
    }

    /// Read a file and transform it as the given content type.
    pub fn transform_file_as<P: AsRef<Path>>(
        &self,
        path: P,
        kind: TransformationKind,
        content_type: ContentType,
    ) -> Result<ExperienceDescriptor> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!(
            "loaded {} ({} bytes) as {}",
            path.as_ref().display(),
            content.len(),
            content_type
        );
        self.transform(kind, &content, content_type)
    }

    /// Serialize a descriptor using the configured JSON layout.
    pub fn to_json(&self, descriptor: &ExperienceDescriptor) -> Result<String> {
        render::to_json(descriptor, self.options.json_format)
    }
}

impl Default for TransformationEngine {
    fn default() -> Self {
        Self::new()
    }
}
