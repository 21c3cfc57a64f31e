//! Data visualization builder.

use crate::infer::infer_viz_type;
use crate::model::{TabularRecord, VisualizationElement, VisualizationOptions};

/// Colours used when no palette is configured.
pub const DEFAULT_PALETTE: [&str; 4] = ["#4a6bfa", "#34c3a9", "#f7931a", "#e74c3c"];

/// Wrap tabular data in a chart configuration.
pub fn build_visualization(data: &TabularRecord, palette: &[String]) -> VisualizationElement {
    VisualizationElement {
        id: "data-viz".to_string(),
        kind: "visualization".to_string(),
        viz_type: infer_viz_type(data),
        data: data.rows.clone(),
        options: VisualizationOptions {
            title: "Data Visualization".to_string(),
            interactive: true,
            colors: palette.to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VizType;

    fn palette() -> Vec<String> {
        DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_mock_visualization() {
        let viz = build_visualization(&TabularRecord::mock(), &palette());
        assert_eq!(viz.viz_type, VizType::Pie);
        assert_eq!(viz.data.len(), 4);
        assert_eq!(viz.options.colors.len(), 4);

        let json = serde_json::to_value(&viz).unwrap();
        assert_eq!(json["id"], "data-viz");
        assert_eq!(json["type"], "visualization");
        assert_eq!(json["vizType"], "pie");
        assert_eq!(json["options"]["interactive"], true);
    }

    #[test]
    fn test_empty_visualization() {
        let viz = build_visualization(&TabularRecord::new(), &palette());
        assert_eq!(viz.viz_type, VizType::Bar);
        assert!(viz.data.is_empty());
    }
}
