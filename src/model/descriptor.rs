//! Experience descriptor types.
//!
//! A descriptor is the result of a transformation: the original input, a
//! typed tree describing the mocked interactive experience, and provenance
//! metadata. Field and tag names follow the JSON layout consumers expect
//! (`vizType`, `transformedAt`, `interactive-story`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DataRow, ProductRecord};
use crate::detect::ContentType;
use crate::error::Error;

/// The four transformation pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformationKind {
    /// Article to interactive story
    InteractiveStory,
    /// Tabular data to chart
    DataVisualization,
    /// Product description to demo
    ProductDemo,
    /// Testimonial to customer story
    TestimonialStory,
}

impl TransformationKind {
    /// All kinds, in menu order.
    pub const ALL: [TransformationKind; 4] = [
        TransformationKind::InteractiveStory,
        TransformationKind::DataVisualization,
        TransformationKind::ProductDemo,
        TransformationKind::TestimonialStory,
    ];

    /// Descriptor type tag (e.g. "interactive-story").
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformationKind::InteractiveStory => "interactive-story",
            TransformationKind::DataVisualization => "data-visualization",
            TransformationKind::ProductDemo => "product-demo",
            TransformationKind::TestimonialStory => "testimonial-story",
        }
    }

    /// Name of the transformation entry point (e.g. "article-to-story").
    pub fn operation(&self) -> &'static str {
        match self {
            TransformationKind::InteractiveStory => "article-to-story",
            TransformationKind::DataVisualization => "data-to-visualization",
            TransformationKind::ProductDemo => "product-to-demo",
            TransformationKind::TestimonialStory => "testimonial-to-story",
        }
    }

    /// Human-readable label, as shown on the option cards.
    pub fn label(&self) -> &'static str {
        match self {
            TransformationKind::InteractiveStory => "Interactive Story",
            TransformationKind::DataVisualization => "Data Visualization",
            TransformationKind::ProductDemo => "Product Demo",
            TransformationKind::TestimonialStory => "Testimonial Story",
        }
    }
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformationKind {
    type Err = Error;

    /// Accepts the type tag, the operation name, the label, or a short alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "interactive-story" | "article-to-story" | "articletostory" | "story" => {
                Ok(TransformationKind::InteractiveStory)
            }
            "data-visualization" | "data-to-visualization" | "datatovisualization" | "viz"
            | "visualization" | "chart" => Ok(TransformationKind::DataVisualization),
            "product-demo" | "product-to-demo" | "producttodemo" | "demo" | "product" => {
                Ok(TransformationKind::ProductDemo)
            }
            "testimonial-story" | "testimonial-to-story" | "testimonialtostory"
            | "testimonial" => Ok(TransformationKind::TestimonialStory),
            _ => Err(Error::UnknownTransformation(s.to_string())),
        }
    }
}

/// Chart kind inferred from the shape of tabular data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VizType {
    /// Bar chart
    Bar,
    /// Pie chart
    Pie,
    /// Scatter plot
    Scatter,
    /// Plain table
    Table,
}

impl VizType {
    /// Lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            VizType::Bar => "bar",
            VizType::Pie => "pie",
            VizType::Scatter => "scatter",
            VizType::Table => "table",
        }
    }
}

impl fmt::Display for VizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceDescriptor {
    /// Which transformation produced this descriptor
    #[serde(rename = "type")]
    pub kind: TransformationKind,

    /// The raw input
    pub original: String,

    /// The descriptor tree
    pub transformed: Transformed,

    /// Provenance
    pub metadata: DescriptorMetadata,
}

/// Provenance metadata attached to each descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorMetadata {
    /// When the transformation ran
    #[serde(with = "iso_millis")]
    pub transformed_at: DateTime<Utc>,

    /// Declared content type of the input
    pub content_type: ContentType,

    /// Transformation-specific summary field
    #[serde(flatten)]
    pub summary: Summary,
}

/// Transformation-specific summary, flattened into the metadata object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Summary {
    /// Number of story elements
    InteractiveElements(usize),
    /// Number of data rows
    DataPoints(usize),
    /// Product name
    ProductName(String),
    /// Customer name
    CustomerName(String),
}

/// The descriptor tree; its shape depends on the transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transformed {
    Story(Vec<StoryElement>),
    Visualization(VisualizationElement),
    ProductDemo(ProductDemo),
    TestimonialStory(TestimonialStory),
}

impl Transformed {
    /// Story elements, if this is a story tree.
    pub fn as_story(&self) -> Option<&[StoryElement]> {
        match self {
            Transformed::Story(elements) => Some(elements),
            _ => None,
        }
    }

    /// Visualization element, if this is a visualization tree.
    pub fn as_visualization(&self) -> Option<&VisualizationElement> {
        match self {
            Transformed::Visualization(viz) => Some(viz),
            _ => None,
        }
    }

    /// Product demo, if this is a product demo tree.
    pub fn as_product_demo(&self) -> Option<&ProductDemo> {
        match self {
            Transformed::ProductDemo(demo) => Some(demo),
            _ => None,
        }
    }

    /// Testimonial story, if this is a testimonial tree.
    pub fn as_testimonial_story(&self) -> Option<&TestimonialStory> {
        match self {
            Transformed::TestimonialStory(story) => Some(story),
            _ => None,
        }
    }
}

// ==================== Story ====================

/// One section of an interactive story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryElement {
    /// `story-section-{index}`
    pub id: String,

    /// Always `story-section`
    #[serde(rename = "type")]
    pub kind: String,

    pub title: String,
    pub content: String,
    pub interactivity: Interactivity,
}

/// Interaction attached to a story section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interactivity {
    #[serde(rename = "type")]
    pub kind: InteractivityKind,

    /// Quiz question, present only for quiz sections
    pub options: Option<Quiz>,
}

/// Interaction style, cycling by section index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractivityKind {
    Reveal,
    Quiz,
    Highlight,
}

impl InteractivityKind {
    /// Kind for the section at `index`: reveal, quiz, highlight, reveal, ...
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => InteractivityKind::Reveal,
            1 => InteractivityKind::Quiz,
            _ => InteractivityKind::Highlight,
        }
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub answers: Vec<QuizAnswer>,
}

/// A quiz answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub text: String,
    pub correct: bool,
}

// ==================== Visualization ====================

/// Chart configuration for tabular data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationElement {
    /// Always `data-viz`
    pub id: String,

    /// Always `visualization`
    #[serde(rename = "type")]
    pub kind: String,

    pub viz_type: VizType,
    pub data: Vec<DataRow>,
    pub options: VisualizationOptions,
}

/// Display options for a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationOptions {
    pub title: String,
    pub interactive: bool,
    pub colors: Vec<String>,
}

// ==================== Product demo ====================

/// Interactive product demo tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDemo {
    /// Always `product-demo`
    pub id: String,

    /// Always `interactive-demo`
    #[serde(rename = "type")]
    pub kind: String,

    pub product: ProductRecord,
    pub elements: Vec<ProductDemoElement>,
}

/// Elements of a product demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ProductDemoElement {
    Overview {
        id: String,
        title: String,
        description: String,
    },
    FeatureExplorer {
        id: String,
        features: Vec<FeatureDetail>,
    },
    Pricing {
        id: String,
        price: String,
        options: Vec<PricingTier>,
    },
}

/// A feature with its generated explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDetail {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A pricing tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
}

// ==================== Testimonial story ====================

/// Interactive testimonial tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialStory {
    /// Always `testimonial-story`
    pub id: String,

    /// Always `interactive-testimonial`
    #[serde(rename = "type")]
    pub kind: String,

    pub customer: CustomerProfile,
    pub testimonial: TestimonialQuote,
    pub elements: Vec<TestimonialElement>,
}

/// Customer header of a testimonial story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub company: String,
    pub avatar: String,
}

/// Quote and rating of a testimonial story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialQuote {
    pub quote: String,
    pub rating: f64,
}

/// Templated body elements of a testimonial story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TestimonialElement {
    JourneyTimeline {
        id: String,
        stages: Vec<JourneyStage>,
    },
    VideoPlaceholder {
        id: String,
        thumbnail: String,
        duration: String,
    },
    Metrics {
        id: String,
        metrics: Vec<ImpactMetric>,
    },
}

/// A stage of the customer journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStage {
    pub title: String,
    pub content: String,
}

/// A headline impact number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactMetric {
    pub label: String,
    pub value: String,
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_from_str_aliases() {
        assert_eq!(
            "articleToStory".parse::<TransformationKind>().unwrap(),
            TransformationKind::InteractiveStory
        );
        assert_eq!(
            "Data Visualization".parse::<TransformationKind>().unwrap(),
            TransformationKind::DataVisualization
        );
        assert_eq!(
            "product_to_demo".parse::<TransformationKind>().unwrap(),
            TransformationKind::ProductDemo
        );
        assert!(matches!(
            "podcast".parse::<TransformationKind>(),
            Err(Error::UnknownTransformation(_))
        ));
    }

    #[test]
    fn test_interactivity_cycle() {
        assert_eq!(InteractivityKind::for_index(0), InteractivityKind::Reveal);
        assert_eq!(InteractivityKind::for_index(1), InteractivityKind::Quiz);
        assert_eq!(InteractivityKind::for_index(2), InteractivityKind::Highlight);
        assert_eq!(InteractivityKind::for_index(3), InteractivityKind::Reveal);
    }

    #[test]
    fn test_metadata_flattens_summary() {
        let metadata = DescriptorMetadata {
            transformed_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
            content_type: ContentType::Json,
            summary: Summary::DataPoints(7),
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["transformedAt"], "2024-03-01T12:30:00.000Z");
        assert_eq!(json["contentType"], "json");
        assert_eq!(json["dataPoints"], 7);
    }

    #[test]
    fn test_product_element_tags() {
        let element = ProductDemoElement::FeatureExplorer {
            id: "product-features".into(),
            features: vec![],
        };
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "feature-explorer");
    }

    #[test]
    fn test_viz_type_display() {
        assert_eq!(VizType::Scatter.to_string(), "scatter");
        assert_eq!(serde_json::to_value(VizType::Pie).unwrap(), "pie");
    }
}
