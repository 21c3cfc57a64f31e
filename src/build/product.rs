//! Product demo builder.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{FeatureDetail, PricingTier, ProductDemo, ProductDemoElement, ProductRecord};

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+\.?\d*|\.\d+)").unwrap());

/// Multiplier applied to the base price for the premium tier.
const PREMIUM_FACTOR: f64 = 1.5;

/// Build the overview / feature explorer / pricing demo tree.
pub fn build_product_demo(product: &ProductRecord) -> ProductDemo {
    let features = product
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| FeatureDetail {
            id: format!("feature-{}", index),
            name: feature.clone(),
            description: format!("Detailed explanation of {}", feature),
        })
        .collect();

    ProductDemo {
        id: "product-demo".to_string(),
        kind: "interactive-demo".to_string(),
        product: product.clone(),
        elements: vec![
            ProductDemoElement::Overview {
                id: "product-overview".to_string(),
                title: product.name.clone(),
                description: product.description.clone(),
            },
            ProductDemoElement::FeatureExplorer {
                id: "product-features".to_string(),
                features,
            },
            ProductDemoElement::Pricing {
                id: "product-pricing".to_string(),
                price: product.price.clone(),
                options: vec![
                    PricingTier {
                        name: "Basic".to_string(),
                        price: product.price.clone(),
                    },
                    PricingTier {
                        name: "Premium".to_string(),
                        price: premium_price(&product.price),
                    },
                ],
            },
        ],
    }
}

/// Premium tier price: 1.5x the numeric part of `price`, two decimals, `$` prefix.
///
/// Everything but digits and dots is stripped before reading the leading
/// number, so the original currency symbol is always replaced by `$`.
/// Returns `$NaN` when no number can be read, so a blank or wordy price
/// still renders as a priced tier.
pub fn premium_price(price: &str) -> String {
    let digits: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match LEADING_NUMBER
        .find(&digits)
        .and_then(|m| m.as_str().parse::<f64>().ok())
    {
        Some(base) => format!("${:.2}", base * PREMIUM_FACTOR),
        None => {
            log::debug!("no numeric price in {:?}", price);
            "$NaN".to_string()
        }
    }
}
