//! Testimonial parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize_newlines;
use crate::model::TestimonialRecord;

static ATTRIBUTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-–—]\s*[A-Z]").unwrap());
static ATTRIBUTION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-–—]\s*").unwrap());
static RATING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)/(\d+)|([1-5])\s*stars|(★{1,5})").unwrap());

const QUOTE_MARKS: &[char] = &['"', '\'', '“', '”', '‘', '’'];

/// Highest rating on the scale.
pub const MAX_RATING: f64 = 5.0;

/// Extract a testimonial by classifying each line.
///
/// Per line, first match wins: a line wrapped in quote marks is the quote,
/// a line starting with a dash and a capital letter is the attribution
/// (`customer, company`), and a line with a rating pattern sets the rating.
/// Empty fields are filled with placeholder values.
pub fn parse_testimonial(content: &str) -> TestimonialRecord {
    let content = normalize_newlines(content);
    let mut testimonial = TestimonialRecord::default();

    for line in content.split('\n') {
        let line = line.trim();

        if line.starts_with(QUOTE_MARKS) && line.ends_with(QUOTE_MARKS) {
            let inner = line.strip_prefix(QUOTE_MARKS).unwrap_or(line);
            testimonial.quote = inner.strip_suffix(QUOTE_MARKS).unwrap_or(inner).to_string();
        } else if ATTRIBUTION.is_match(line) {
            let attribution = ATTRIBUTION_PREFIX.replace(line, "");
            let mut parts = attribution.split(',');
            if let Some(customer) = parts.next() {
                testimonial.customer = customer.trim().to_string();
            }
            if let Some(company) = parts.next() {
                testimonial.company = company.trim().to_string();
            }
        } else if let Some(rating) = parse_rating(line) {
            testimonial.rating = rating;
        }
    }

    testimonial.with_defaults()
}

/// Find a rating in a line.
///
/// Supports `X/Y` (scaled to five), `N stars` with N in 1-5, and a run of
/// one to five `★` glyphs. The result is clamped to 0-5; a zero
/// denominator is not a rating.
pub fn parse_rating(line: &str) -> Option<f64> {
    let caps = RATING.captures(line)?;

    let rating = if let (Some(x), Some(y)) = (caps.get(1), caps.get(2)) {
        let x: f64 = x.as_str().parse().ok()?;
        let y: f64 = y.as_str().parse().ok()?;
        if y == 0.0 {
            return None;
        }
        x / y * MAX_RATING
    } else if let Some(n) = caps.get(3) {
        n.as_str().parse().ok()?
    } else {
        caps.get(4)?.as_str().chars().count() as f64
    };

    Some(rating.clamp(0.0, MAX_RATING))
}
