//! Product description to interactive demo.

use super::{wrap, TransformOptions, Transformation};
use crate::build::build_product_demo;
use crate::detect::{record_parser, ContentType, RecordParser};
use crate::error::Result;
use crate::model::{ExperienceDescriptor, ProductRecord, Summary, Transformed, TransformationKind};
use crate::parser::{decode_record, parse_product};

/// Extracts product details and builds an overview / features / pricing demo.
///
/// JSON input must decode; malformed JSON fails the transformation.
/// HTML input is rejected.
#[derive(Debug, Clone, Default)]
pub struct ProductToDemo {
    _private: (),
}

impl ProductToDemo {
    /// Create a new product-to-demo transformation.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Transformation for ProductToDemo {
    fn kind(&self) -> TransformationKind {
        TransformationKind::ProductDemo
    }

    fn transform(
        &self,
        content: &str,
        content_type: ContentType,
        options: &TransformOptions,
    ) -> Result<ExperienceDescriptor> {
        let product: ProductRecord = match record_parser(self.kind(), content_type)? {
            RecordParser::Json => decode_record(content)?,
            RecordParser::Text => parse_product(content),
        };

        let demo = build_product_demo(&product);
        let name = product.display_name().to_string();

        Ok(wrap(
            self.kind(),
            content,
            content_type,
            Transformed::ProductDemo(demo),
            Summary::ProductName(name),
            options,
        ))
    }
}
