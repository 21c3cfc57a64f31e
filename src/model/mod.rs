//! Data model for parsed content and experience descriptors.
//!
//! Parsed records (sections, tabular rows, product and testimonial records)
//! form the intermediate representation between the heuristic parsers and
//! the descriptor builders. Descriptors are the JSON-serializable trees
//! handed back to callers. Every value here is constructed once per
//! transformation and never mutated afterwards.

mod descriptor;
mod record;
mod section;
mod table;

pub use descriptor::{
    CustomerProfile, DescriptorMetadata, ExperienceDescriptor, FeatureDetail, ImpactMetric,
    Interactivity, InteractivityKind, JourneyStage, PricingTier, ProductDemo, ProductDemoElement,
    Quiz, QuizAnswer, StoryElement, Summary, TestimonialElement, TestimonialQuote,
    TestimonialStory, Transformed, TransformationKind, VisualizationElement,
    VisualizationOptions, VizType,
};
pub use record::{ProductRecord, TestimonialRecord};
pub use section::{ContentRecord, Section, SectionKind};
pub use table::{DataRow, TabularRecord};
