//! Transformation options and configuration.

use chrono::{DateTime, Utc};

use crate::build::DEFAULT_PALETTE;
use crate::render::JsonFormat;

/// Options shared by all transformations.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Fixed `transformedAt` timestamp (None = current time)
    pub timestamp: Option<DateTime<Utc>>,

    /// Chart colours for visualizations
    pub palette: Vec<String>,

    /// JSON layout when descriptors are serialized
    pub json_format: JsonFormat,
}

impl TransformOptions {
    /// Create new transform options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the `transformedAt` timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the visualization palette.
    ///
    /// An empty palette keeps the default colours.
    pub fn with_palette<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if !colors.is_empty() {
            self.palette = colors;
        }
        self
    }

    /// Set the JSON output layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Timestamp to stamp on a descriptor built now.
    pub fn resolve_timestamp(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or_else(Utc::now)
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            timestamp: None,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            json_format: JsonFormat::default(),
        }
    }
}
