//! Tabular data to chart configuration.

use super::{wrap, TransformOptions, Transformation};
use crate::build::build_visualization;
use crate::detect::{data_parser, ContentType, DataParser};
use crate::error::Result;
use crate::model::{ExperienceDescriptor, Summary, TabularRecord, Transformed, TransformationKind};
use crate::parser::{decode_rows, parse_table};

/// Reads rows from JSON or a pipe table and picks a chart kind.
///
/// Malformed JSON is not an error here: it yields a descriptor with no data
/// points. HTML input is rejected.
#[derive(Debug, Clone, Default)]
pub struct DataToVisualization {
    _private: (),
}

impl DataToVisualization {
    /// Create a new data-to-visualization transformation.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Transformation for DataToVisualization {
    fn kind(&self) -> TransformationKind {
        TransformationKind::DataVisualization
    }

    fn transform(
        &self,
        content: &str,
        content_type: ContentType,
        options: &TransformOptions,
    ) -> Result<ExperienceDescriptor> {
        let data = match data_parser(content_type)? {
            DataParser::JsonRows => decode_rows(content).unwrap_or_else(|e| {
                log::warn!("Error parsing JSON data, continuing without rows: {}", e);
                TabularRecord::new()
            }),
            DataParser::PipeTable => parse_table(content),
        };

        let viz = build_visualization(&data, &options.palette);
        let data_points = data.len();

        Ok(wrap(
            self.kind(),
            content,
            content_type,
            Transformed::Visualization(viz),
            Summary::DataPoints(data_points),
            options,
        ))
    }
}
