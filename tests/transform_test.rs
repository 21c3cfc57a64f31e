//! Integration tests for the transformation pipelines.

use std::io::Write;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use exconv::error::Result;
use exconv::model::ProductDemoElement;
use exconv::{
    ContentType, Error, ExperienceDescriptor, Summary, TabularRecord, TransformOptions,
    Transformation, TransformationEngine, TransformationKind, TransformationRegistry, Transformed,
    VizType,
};

/// Mock transformation for testing registry dispatch.
struct MockTransformation {
    kind: TransformationKind,
}

impl Transformation for MockTransformation {
    fn kind(&self) -> TransformationKind {
        self.kind
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn transform(
        &self,
        content: &str,
        content_type: ContentType,
        options: &TransformOptions,
    ) -> Result<ExperienceDescriptor> {
        TransformationRegistry::with_defaults().transform(
            TransformationKind::InteractiveStory,
            &content.to_uppercase(),
            content_type,
            options,
        )
    }
}

fn engine() -> TransformationEngine {
    TransformationEngine::new().with_timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
}

fn story_titles(descriptor: &ExperienceDescriptor) -> Vec<String> {
    descriptor
        .transformed
        .as_story()
        .unwrap()
        .iter()
        .map(|e| e.title.clone())
        .collect()
}

// ==================== Article to Story ====================

#[test]
fn test_story_element_per_heading() {
    let md = "# First\nalpha\n## Second\nbeta\n### Third\ngamma\n#### not a heading\n";
    let descriptor = engine()
        .article_to_story(md, ContentType::Markdown)
        .unwrap();

    assert_eq!(story_titles(&descriptor), vec!["First", "Second", "Third"]);
    assert_eq!(
        descriptor.metadata.summary,
        Summary::InteractiveElements(3)
    );
}

#[test]
fn test_story_without_headings_is_single_section() {
    let descriptor = engine()
        .article_to_story("- A\n- B\n", ContentType::Markdown)
        .unwrap();
    let story = descriptor.transformed.as_story().unwrap();

    assert_eq!(story.len(), 1);
    assert_eq!(story[0].title, "Section 1");
    assert_eq!(story[0].content, "- A\n- B");
}

#[test]
fn test_story_interactivity_cycle() {
    let md = "# a\n1\n# b\n2\n# c\n3\n# d\n4";
    let descriptor = engine().article_to_story(md, ContentType::Markdown).unwrap();
    let json = serde_json::to_value(&descriptor).unwrap();

    let kinds: Vec<&str> = (0..4)
        .map(|i| json["transformed"][i]["interactivity"]["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["reveal", "quiz", "highlight", "reveal"]);
    assert_eq!(
        json["transformed"][1]["interactivity"]["options"]["question"],
        "What is the main point of \"b\"?"
    );
    assert!(json["transformed"][0]["interactivity"]["options"].is_null());
}

#[test]
fn test_story_from_html() {
    let html = "<h1>Intro</h1><p>One</p><p>Two</p><h2>Next</h2><ul><li>x</li></ul>";
    let descriptor = engine().article_to_story(html, ContentType::Html).unwrap();
    let story = descriptor.transformed.as_story().unwrap();

    assert_eq!(story.len(), 2);
    assert_eq!(story[0].content, "<p>One</p><p>Two</p>");
    assert_eq!(story[1].content, "<ul><li>x</li></ul>");
}

#[test]
fn test_story_accepts_every_content_type() {
    for content_type in ContentType::ALL {
        assert!(engine().article_to_story("{ \"a\": 1 }", content_type).is_ok());
    }
}

// ==================== Data to Visualization ====================

#[test]
fn test_pipe_table_scenario() {
    let descriptor = engine()
        .data_to_visualization("|cat|val|\n|---|---|\n|X|1|\n|Y|2|\n", ContentType::Markdown)
        .unwrap();
    let viz = descriptor.transformed.as_visualization().unwrap();

    assert_eq!(viz.viz_type, VizType::Pie);
    assert_eq!(
        serde_json::to_value(&viz.data).unwrap(),
        serde_json::json!([{ "cat": "X", "val": "1" }, { "cat": "Y", "val": "2" }])
    );
    assert_eq!(descriptor.metadata.summary, Summary::DataPoints(2));
}

#[test]
fn test_header_only_table_falls_back_to_mock() {
    let descriptor = engine()
        .data_to_visualization("|a|b|\n|---|---|\n", ContentType::Text)
        .unwrap();
    let viz = descriptor.transformed.as_visualization().unwrap();
    assert_eq!(viz.data, TabularRecord::mock().rows);
}

#[test]
fn test_malformed_table_fallback_is_idempotent() {
    let input = "no pipes here\njust words";
    let first = engine().data_to_visualization(input, ContentType::Text).unwrap();
    let second = engine().data_to_visualization(input, ContentType::Text).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.transformed.as_visualization().unwrap().data,
        TabularRecord::mock().rows
    );
}

#[test]
fn test_invalid_json_data_is_recovered() {
    let descriptor = engine()
        .data_to_visualization("[{\"a\": 1,", ContentType::Json)
        .unwrap();
    let viz = descriptor.transformed.as_visualization().unwrap();

    assert_eq!(descriptor.metadata.summary, Summary::DataPoints(0));
    assert_eq!(viz.viz_type, VizType::Bar);

    let json = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(json["metadata"]["dataPoints"], 0);
}

#[test]
fn test_json_rows_infer_scatter() {
    let data = r#"[{"x": 1, "y": "2.5", "label": "a"}, {"x": 2, "y": 3, "label": "b"}]"#;
    let descriptor = engine().data_to_visualization(data, ContentType::Json).unwrap();
    let viz = descriptor.transformed.as_visualization().unwrap();

    assert_eq!(viz.viz_type, VizType::Scatter);
    assert_eq!(viz.options.title, "Data Visualization");
    assert_eq!(viz.options.colors.len(), 4);
}

#[test]
fn test_json_scalar_array_counts_every_element() {
    let descriptor = engine().data_to_visualization("[1, 2, 3]", ContentType::Json).unwrap();
    let viz = descriptor.transformed.as_visualization().unwrap();

    assert_eq!(viz.viz_type, VizType::Table);
    assert_eq!(viz.data.len(), 3);
    assert_eq!(descriptor.metadata.summary, Summary::DataPoints(3));
}

#[test]
fn test_visualization_rejects_html() {
    let result = engine().data_to_visualization("<table></table>", ContentType::Html);
    match result {
        Err(Error::UnsupportedContentType { content_type, .. }) => assert_eq!(content_type, "html"),
        other => panic!("expected unsupported content type, got {:?}", other),
    }
}

#[test]
fn test_custom_palette() {
    let engine = engine().with_palette(["#000000", "#ffffff"]);
    let descriptor = engine.data_to_visualization("", ContentType::Text).unwrap();
    assert_eq!(
        descriptor.transformed.as_visualization().unwrap().options.colors,
        vec!["#000000", "#ffffff"]
    );
}

// ==================== Product to Demo ====================

#[test]
fn test_product_from_markdown() {
    let md = "# Super Widget\nThe widget that makes every morning a little bit easier.\n\
              - Fast charging\n* Waterproof\nPrice: $99.99 per unit\n";
    let descriptor = engine().product_to_demo(md, ContentType::Markdown).unwrap();
    let demo = descriptor.transformed.as_product_demo().unwrap();

    assert_eq!(demo.product.name, "Super Widget");
    assert_eq!(demo.product.features, vec!["Fast charging", "Waterproof"]);
    assert_eq!(demo.product.price, "$99.99");
    assert_eq!(
        descriptor.metadata.summary,
        Summary::ProductName("Super Widget".to_string())
    );

    match &demo.elements[2] {
        ProductDemoElement::Pricing { options, .. } => assert_eq!(options[1].price, "$149.98"),
        other => panic!("unexpected element: {:?}", other),
    }
}

#[test]
fn test_product_without_bullets_gets_default_features() {
    for input in ["", "# Thing\nNo list at all here, only prose.", "random"] {
        let descriptor = engine().product_to_demo(input, ContentType::Text).unwrap();
        assert_eq!(
            descriptor.transformed.as_product_demo().unwrap().product.features,
            vec!["Feature 1", "Feature 2", "Feature 3"]
        );
    }
}

#[test]
fn test_product_invalid_json_is_fatal() {
    let result = engine().product_to_demo("{\"name\": ", ContentType::Json);
    assert!(matches!(result, Err(Error::MalformedJson(_))));
}

#[test]
fn test_product_from_json() {
    let json = r#"{"name":"Lamp","description":"Bright","features":["Dimmer"],"price":"€20"}"#;
    let descriptor = engine().product_to_demo(json, ContentType::Json).unwrap();
    let demo = descriptor.transformed.as_product_demo().unwrap();

    assert_eq!(demo.product.features, vec!["Dimmer"]);
    match &demo.elements[2] {
        ProductDemoElement::Pricing { options, .. } => assert_eq!(options[1].price, "$30.00"),
        other => panic!("unexpected element: {:?}", other),
    }
}

#[test]
fn test_product_without_price_has_nan_premium() {
    let json = r#"{"name":"Lamp","features":["Dimmer"]}"#;
    let descriptor = engine().product_to_demo(json, ContentType::Json).unwrap();
    let demo = descriptor.transformed.as_product_demo().unwrap();

    match &demo.elements[2] {
        ProductDemoElement::Pricing { options, .. } => {
            assert_eq!(options[0].price, "");
            assert_eq!(options[1].price, "$NaN");
        }
        other => panic!("unexpected element: {:?}", other),
    }
}

#[test]
fn test_product_rejects_html() {
    let err = engine()
        .product_to_demo("<h1>x</h1>", ContentType::Html)
        .unwrap_err();
    assert_eq!(err.to_string(), "Unsupported content type for product demo: html");
}

// ==================== Testimonial to Story ====================

#[test]
fn test_testimonial_scenario() {
    let input = "\"Great product\"\n— Jane Smith, Acme Corp\n5 stars\n";
    let descriptor = engine()
        .testimonial_to_story(input, ContentType::Text)
        .unwrap();
    let story = descriptor.transformed.as_testimonial_story().unwrap();

    assert_eq!(story.customer.name, "Jane Smith");
    assert_eq!(story.customer.company, "Acme Corp");
    assert_eq!(story.testimonial.quote, "Great product");
    assert_eq!(story.testimonial.rating, 5.0);
    assert_eq!(
        story.customer.avatar,
        "https://ui-avatars.com/api/?name=Jane%20Smith&background=random"
    );
    assert_eq!(
        descriptor.metadata.summary,
        Summary::CustomerName("Jane Smith".to_string())
    );
}

#[test]
fn test_testimonial_fraction_rating() {
    let descriptor = engine()
        .testimonial_to_story("'Solid'\nRated 9/10 overall", ContentType::Markdown)
        .unwrap();
    let story = descriptor.transformed.as_testimonial_story().unwrap();
    assert_eq!(story.testimonial.rating, 4.5);
    assert_eq!(story.customer.name, "John Doe");
}

#[test]
fn test_testimonial_invalid_json_is_fatal() {
    let result = engine().testimonial_to_story("not json", ContentType::Json);
    assert!(matches!(result, Err(Error::MalformedJson(_))));
}

#[test]
fn test_testimonial_rejects_html() {
    assert!(engine()
        .testimonial_to_story("<blockquote>x</blockquote>", ContentType::Html)
        .unwrap_err()
        .is_transformation_error());
}

// ==================== Robustness ====================

#[test]
fn test_adversarial_input_never_panics() {
    let inputs = [
        "",
        "\n\n\n",
        "|",
        "||||\n|---|\n|",
        "# \n#\n##\n###",
        "<h1><h2></h3></p><script>",
        "<<<>>>",
        "\"",
        "—",
        "0/0",
        "★★★★★★★★",
        "$€£",
        "\u{0}\u{feff}\r\n\r\n",
        "{\"a\": [1, {\"b\": null}]}",
    ];

    let engine = engine();
    for input in inputs {
        for content_type in [ContentType::Markdown, ContentType::Text] {
            for kind in TransformationKind::ALL {
                let descriptor = engine.transform(kind, input, content_type).unwrap();
                assert_eq!(descriptor.kind, kind);
                assert_eq!(descriptor.original, input);
            }
        }
        assert!(engine.article_to_story(input, ContentType::Html).is_ok());
        assert!(engine.data_to_visualization(input, ContentType::Json).is_ok());
    }
}

#[test]
fn test_descriptor_kind_matches_tree() {
    let engine = engine();
    for kind in TransformationKind::ALL {
        let descriptor = engine.transform(kind, "", ContentType::Text).unwrap();
        let matches = match (&descriptor.transformed, kind) {
            (Transformed::Story(_), TransformationKind::InteractiveStory) => true,
            (Transformed::Visualization(_), TransformationKind::DataVisualization) => true,
            (Transformed::ProductDemo(_), TransformationKind::ProductDemo) => true,
            (Transformed::TestimonialStory(_), TransformationKind::TestimonialStory) => true,
            _ => false,
        };
        assert!(matches, "{:?} produced the wrong tree", kind);
    }
}

// ==================== Registry ====================

#[test]
fn test_registry_register_replaces_kind() {
    let mut registry = TransformationRegistry::with_defaults();
    registry.register(Arc::new(MockTransformation {
        kind: TransformationKind::InteractiveStory,
    }));

    let descriptor = registry
        .transform(
            TransformationKind::InteractiveStory,
            "# hello",
            ContentType::Markdown,
            &TransformOptions::default(),
        )
        .unwrap();
    assert_eq!(story_titles(&descriptor), vec!["HELLO"]);
    assert!(registry.get_by_name("mock").is_some());
}

#[test]
fn test_engine_with_custom_registry() {
    let mut registry = TransformationRegistry::new();
    registry.register(Arc::new(MockTransformation {
        kind: TransformationKind::ProductDemo,
    }));
    let engine = engine().with_registry(registry);

    assert!(engine.product_to_demo("# x", ContentType::Markdown).is_ok());
    assert!(matches!(
        engine.testimonial_to_story("x", ContentType::Text),
        Err(Error::UnknownTransformation(_))
    ));
}

// ==================== Files ====================

#[test]
fn test_transform_file_detects_type() {
    let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
    write!(file, "# One\nfirst\n# Two\nsecond").unwrap();

    let descriptor = engine()
        .transform_file(file.path(), TransformationKind::InteractiveStory)
        .unwrap();
    assert_eq!(descriptor.metadata.content_type, ContentType::Markdown);
    assert_eq!(story_titles(&descriptor), vec!["One", "Two"]);
}

#[test]
fn test_transform_file_json_data() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"[{{"city":"Oslo","temp":4}}]"#).unwrap();

    let descriptor = engine()
        .transform_file(file.path(), TransformationKind::DataVisualization)
        .unwrap();
    let viz = descriptor.transformed.as_visualization().unwrap();
    assert_eq!(viz.viz_type, VizType::Pie);
    assert_eq!(viz.data.len(), 1);
}

#[test]
fn test_transform_file_html_for_product_fails() {
    let mut file = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
    write!(file, "<h1>Widget</h1>").unwrap();

    let result = engine().transform_file(file.path(), TransformationKind::ProductDemo);
    assert!(matches!(result, Err(Error::UnsupportedContentType { .. })));
}
