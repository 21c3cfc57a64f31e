//! Product description parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize_newlines;
use crate::model::ProductRecord;

static NAME_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,2}\s+").unwrap());
static PRICE_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)price|cost").unwrap());
static PRICE_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$€£]\s*[\d,]+(\.\d+)?").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+").unwrap());

/// Accumulated description stops growing once it reaches this many characters.
const DESCRIPTION_LIMIT: usize = 100;
/// Lines at or below this length are never treated as description.
const DESCRIPTION_MIN_LINE: usize = 20;

/// Extract product information by classifying each line.
///
/// Per line, first match wins: a `#`/`##` heading sets the name, a line
/// mentioning price or cost together with a currency symbol sets the price,
/// a `-`/`*` bullet adds a feature, and any other line longer than 20
/// characters extends the description while it is under 100 characters.
/// Empty fields are filled with placeholder values.
pub fn parse_product(content: &str) -> ProductRecord {
    let content = normalize_newlines(content);
    let mut product = ProductRecord::default();

    for line in content.split('\n') {
        let line = line.trim();

        if NAME_HEADING.is_match(line) {
            product.name = NAME_HEADING.replace(line, "").into_owned();
        } else if PRICE_KEYWORD.is_match(line) && line.contains(['$', '€', '£']) {
            if let Some(amount) = PRICE_AMOUNT.find(line) {
                product.price = amount.as_str().to_string();
            }
        } else if BULLET.is_match(line) {
            product.features.push(BULLET.replace(line, "").into_owned());
        } else if product.description.chars().count() < DESCRIPTION_LIMIT
            && line.chars().count() > DESCRIPTION_MIN_LINE
        {
            product.description.push_str(line);
            product.description.push(' ');
        }
    }

    product.with_defaults()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Smart Lamp\n\
        A lamp that adjusts its colour temperature through the day.\n\
        \n\
        - Voice control\n\
        * Sunrise alarm\n\
        Price: $49.99 per unit\n";

    #[test]
    fn test_full_product() {
        let product = parse_product(SAMPLE);
        assert_eq!(product.name, "Smart Lamp");
        assert_eq!(
            product.description,
            "A lamp that adjusts its colour temperature through the day. "
        );
        assert_eq!(product.features, vec!["Voice control", "Sunrise alarm"]);
        assert_eq!(product.price, "$49.99");
    }

    #[test]
    fn test_last_heading_wins() {
        let product = parse_product("# First\n## Second\n### Not a name");
        assert_eq!(product.name, "Second");
    }

    #[test]
    fn test_price_formats() {
        assert_eq!(parse_product("Cost: € 1,299.00").price, "€ 1,299.00");
        assert_eq!(parse_product("PRICE £20").price, "£20");
        // currency without keyword is description, not price
        let product = parse_product("Only $5 today for all our loyal customers");
        assert_eq!(product.price, "$99.99");
        assert!(product.description.starts_with("Only $5"));
    }

    #[test]
    fn test_price_keyword_without_amount_consumes_line() {
        let product = parse_product("The price is listed in $ on the website somewhere");
        assert_eq!(product.price, "$99.99");
        assert_eq!(product.description, ProductRecord::DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_description_limit() {
        let line = "This line is definitely longer than twenty characters.";
        let input = format!("{line}\n{line}\n{line}\n{line}");
        let product = parse_product(&input);
        // 54 chars per line: two lines pass the limit, the third is skipped
        assert_eq!(product.description, format!("{line} {line} "));
    }

    #[test]
    fn test_no_bullets_uses_default_features() {
        let product = parse_product("# Gadget\nNothing else to say about this gadget today.");
        assert_eq!(product.features, vec!["Feature 1", "Feature 2", "Feature 3"]);
    }

    #[test]
    fn test_empty_input_defaults() {
        let product = parse_product("");
        assert_eq!(product, ProductRecord::default().with_defaults());
    }

    #[test]
    fn test_bullet_requires_space() {
        let product = parse_product("-not a bullet\n*neither");
        assert_eq!(product.features, vec!["Feature 1", "Feature 2", "Feature 3"]);
    }
}
