//! Transformation pipelines and the registry that dispatches to them.
//!
//! Each transformation sequences parser selection, parsing, inference where
//! needed, and descriptor building, then wraps the tree with provenance
//! metadata. Transformations are stateless and can be shared across
//! threads.
//!
//! # Example
//!
//! ```
//! use exconv::transform::{TransformOptions, TransformationRegistry};
//! use exconv::ContentType;
//!
//! fn main() -> exconv::Result<()> {
//!     let registry = TransformationRegistry::with_defaults();
//!     let descriptor = registry.transform_by_name(
//!         "article-to-story",
//!         "# Hello\nWorld",
//!         ContentType::Markdown,
//!         &TransformOptions::default(),
//!     )?;
//!     assert_eq!(descriptor.transformed.as_story().map(|s| s.len()), Some(1));
//!     Ok(())
//! }
//! ```

mod demo;
mod options;
mod story;
mod testimonial;
mod visualization;

pub use demo::ProductToDemo;
pub use options::TransformOptions;
pub use story::ArticleToStory;
pub use testimonial::TestimonialToStory;
pub use visualization::DataToVisualization;

use crate::detect::{self, ContentType};
use crate::error::{Error, Result};
use crate::model::{DescriptorMetadata, ExperienceDescriptor, Summary, Transformed, TransformationKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for transformation pipelines.
///
/// Implement this trait to add a new way of turning content into an
/// experience descriptor.
pub trait Transformation: Send + Sync {
    /// The kind of descriptor this transformation produces.
    fn kind(&self) -> TransformationKind;

    /// Name of this transformation (e.g. `article-to-story`).
    fn name(&self) -> &str {
        self.kind().operation()
    }

    /// Content types this transformation accepts.
    fn supported_content_types(&self) -> Vec<ContentType> {
        detect::supported_content_types(self.kind())
    }

    /// Transform content into a descriptor.
    fn transform(
        &self,
        content: &str,
        content_type: ContentType,
        options: &TransformOptions,
    ) -> Result<ExperienceDescriptor>;

    /// Check if this transformation accepts the given content type.
    fn supports(&self, content_type: ContentType) -> bool {
        self.supported_content_types().contains(&content_type)
    }
}

/// Wrap a descriptor tree with provenance metadata.
pub(crate) fn wrap(
    kind: TransformationKind,
    content: &str,
    content_type: ContentType,
    transformed: Transformed,
    summary: Summary,
    options: &TransformOptions,
) -> ExperienceDescriptor {
    ExperienceDescriptor {
        kind,
        original: content.to_string(),
        transformed,
        metadata: DescriptorMetadata {
            transformed_at: options.resolve_timestamp(),
            content_type,
            summary,
        },
    }
}

/// Registry of transformations.
///
/// Maps kinds and names to transformations and dispatches calls.
pub struct TransformationRegistry {
    by_kind: HashMap<TransformationKind, Arc<dyn Transformation>>,
    by_name: HashMap<String, Arc<dyn Transformation>>,
}

impl TransformationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_kind: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the four built-in transformations.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ArticleToStory::new()));
        registry.register(Arc::new(DataToVisualization::new()));
        registry.register(Arc::new(ProductToDemo::new()));
        registry.register(Arc::new(TestimonialToStory::new()));
        registry
    }

    /// Register a transformation, replacing any previous one of the same kind.
    pub fn register(&mut self, transformation: Arc<dyn Transformation>) {
        self.by_kind
            .insert(transformation.kind(), transformation.clone());
        self.by_name
            .insert(transformation.name().to_lowercase(), transformation);
    }

    /// Get a transformation by kind.
    pub fn get(&self, kind: TransformationKind) -> Option<Arc<dyn Transformation>> {
        self.by_kind.get(&kind).cloned()
    }

    /// Get a transformation by registered name, kind tag, label or alias.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn Transformation>> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .cloned()
            .or_else(|| {
                name.parse::<TransformationKind>()
                    .ok()
                    .and_then(|kind| self.get(kind))
            })
    }

    /// Names of all registered transformations, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run the transformation of the given kind.
    pub fn transform(
        &self,
        kind: TransformationKind,
        content: &str,
        content_type: ContentType,
        options: &TransformOptions,
    ) -> Result<ExperienceDescriptor> {
        let transformation = self
            .get(kind)
            .ok_or_else(|| Error::UnknownTransformation(kind.to_string()))?;

        transformation.transform(content, content_type, options)
    }

    /// Run a transformation looked up by name.
    pub fn transform_by_name(
        &self,
        name: &str,
        content: &str,
        content_type: ContentType,
        options: &TransformOptions,
    ) -> Result<ExperienceDescriptor> {
        let transformation = self
            .get_by_name(name)
            .ok_or_else(|| Error::UnknownTransformation(name.to_string()))?;

        transformation.transform(content, content_type, options)
    }
}

impl Default for TransformationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
