//! Product and testimonial records.

use serde::{Deserialize, Serialize};

/// Product information extracted from a description.
///
/// Decoded from JSON, every field is optional and missing fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    /// Product name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Feature bullet points, in order
    pub features: Vec<String>,

    /// Price including currency symbol (e.g. "$49.99")
    pub price: String,
}

impl ProductRecord {
    pub const DEFAULT_NAME: &'static str = "Sample Product";
    pub const DEFAULT_DESCRIPTION: &'static str = "This is a sample product description.";
    pub const DEFAULT_FEATURES: [&'static str; 3] = ["Feature 1", "Feature 2", "Feature 3"];
    pub const DEFAULT_PRICE: &'static str = "$99.99";

    /// Replace every empty field with its placeholder value.
    pub fn with_defaults(mut self) -> Self {
        if self.name.is_empty() {
            self.name = Self::DEFAULT_NAME.to_string();
        }
        if self.description.is_empty() {
            self.description = Self::DEFAULT_DESCRIPTION.to_string();
        }
        if self.features.is_empty() {
            self.features = Self::DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect();
        }
        if self.price.is_empty() {
            self.price = Self::DEFAULT_PRICE.to_string();
        }
        self
    }

    /// Name for descriptor metadata.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unknown Product"
        } else {
            &self.name
        }
    }
}

/// A customer testimonial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialRecord {
    /// Customer name
    pub customer: String,

    /// Customer's company
    pub company: String,

    /// The quote itself, without surrounding quote marks
    pub quote: String,

    /// Rating on a 0-5 scale, fractional allowed
    pub rating: f64,
}

impl TestimonialRecord {
    pub const DEFAULT_CUSTOMER: &'static str = "John Doe";
    pub const DEFAULT_COMPANY: &'static str = "ABC Company";
    pub const DEFAULT_QUOTE: &'static str =
        "This product transformed our business operations completely.";
    pub const DEFAULT_RATING: f64 = 5.0;

    /// Replace every empty field with its placeholder value.
    ///
    /// A rating of zero counts as empty.
    pub fn with_defaults(mut self) -> Self {
        if self.customer.is_empty() {
            self.customer = Self::DEFAULT_CUSTOMER.to_string();
        }
        if self.company.is_empty() {
            self.company = Self::DEFAULT_COMPANY.to_string();
        }
        if self.quote.is_empty() {
            self.quote = Self::DEFAULT_QUOTE.to_string();
        }
        if self.rating == 0.0 || self.rating.is_nan() {
            self.rating = Self::DEFAULT_RATING;
        }
        self
    }

    /// Customer name for descriptor metadata.
    pub fn display_name(&self) -> &str {
        if self.customer.is_empty() {
            "Anonymous Customer"
        } else {
            &self.customer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults() {
        let product = ProductRecord::default().with_defaults();
        assert_eq!(product.name, "Sample Product");
        assert_eq!(product.description, "This is a sample product description.");
        assert_eq!(product.features, vec!["Feature 1", "Feature 2", "Feature 3"]);
        assert_eq!(product.price, "$99.99");
    }

    #[test]
    fn test_product_defaults_keep_values() {
        let product = ProductRecord {
            name: "Widget".into(),
            ..Default::default()
        }
        .with_defaults();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, "$99.99");
    }

    #[test]
    fn test_product_from_partial_json() {
        let product: ProductRecord = serde_json::from_str(r#"{"name":"Lamp"}"#).unwrap();
        assert_eq!(product.name, "Lamp");
        assert!(product.features.is_empty());
        assert_eq!(ProductRecord::default().display_name(), "Unknown Product");
    }

    #[test]
    fn test_testimonial_defaults() {
        let t = TestimonialRecord::default().with_defaults();
        assert_eq!(t.customer, "John Doe");
        assert_eq!(t.company, "ABC Company");
        assert_eq!(t.rating, 5.0);
        assert_eq!(TestimonialRecord::default().display_name(), "Anonymous Customer");
    }
}
