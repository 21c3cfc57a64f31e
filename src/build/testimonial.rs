//! Testimonial story builder.

use crate::model::{
    CustomerProfile, ImpactMetric, JourneyStage, TestimonialElement, TestimonialQuote,
    TestimonialRecord, TestimonialStory,
};

const JOURNEY: [(&str, &str); 4] = [
    (
        "Challenge",
        "The customer faced significant challenges with their existing solution.",
    ),
    (
        "Discovery",
        "They discovered our product through industry recommendations.",
    ),
    (
        "Implementation",
        "The implementation process was smooth and efficient.",
    ),
    (
        "Results",
        "They achieved outstanding results and ROI from our solution.",
    ),
];

const METRICS: [(&str, &str); 3] = [
    ("Time Saved", "35%"),
    ("ROI", "250%"),
    ("User Satisfaction", "4.8/5"),
];

/// Escapes `encodeURIComponent` leaves as literal characters.
const URI_COMPONENT_MARKS: [(&str, &str); 5] =
    [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

const VIDEO_THUMBNAIL: &str = "https://via.placeholder.com/640x360";
const VIDEO_DURATION: &str = "2:45";

/// Build the testimonial story tree.
///
/// Only the customer header and the quote come from the record; the
/// journey, video and metrics are fixed filler.
pub fn build_testimonial_story(testimonial: &TestimonialRecord) -> TestimonialStory {
    TestimonialStory {
        id: "testimonial-story".to_string(),
        kind: "interactive-testimonial".to_string(),
        customer: CustomerProfile {
            name: testimonial.customer.clone(),
            company: testimonial.company.clone(),
            avatar: avatar_url(&testimonial.customer),
        },
        testimonial: TestimonialQuote {
            quote: testimonial.quote.clone(),
            rating: testimonial.rating,
        },
        elements: vec![
            TestimonialElement::JourneyTimeline {
                id: "customer-journey".to_string(),
                stages: JOURNEY
                    .iter()
                    .map(|(title, content)| JourneyStage {
                        title: title.to_string(),
                        content: content.to_string(),
                    })
                    .collect(),
            },
            TestimonialElement::VideoPlaceholder {
                id: "testimonial-video".to_string(),
                thumbnail: VIDEO_THUMBNAIL.to_string(),
                duration: VIDEO_DURATION.to_string(),
            },
            TestimonialElement::Metrics {
                id: "impact-metrics".to_string(),
                metrics: METRICS
                    .iter()
                    .map(|(label, value)| ImpactMetric {
                        label: label.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            },
        ],
    }
}

/// Generated avatar image URL for a customer name.
///
/// The name is percent-encoded as a URI component: spaces become `%20`
/// and `!'()*` stay literal.
pub fn avatar_url(name: &str) -> String {
    let mut encoded = urlencoding::encode(name).into_owned();
    for (escape, mark) in URI_COMPONENT_MARKS {
        encoded = encoded.replace(escape, mark);
    }
    format!("https://ui-avatars.com/api/?name={}&background=random", encoded)
}
