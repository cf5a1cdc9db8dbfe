//! Dashboard-wide display configuration.

/// Label used for features and nodes without metadata.
pub const FALLBACK_GROUP: &str = "Other";

/// Visual parameters for the causal graph.
#[derive(Clone, Debug)]
pub struct DagConfig {
	/// Canvas height in pixels. Width follows the container.
	pub height: f64,
	/// Vertical fraction of the single node lane.
	pub lane: f64,
	/// Edge stroke width in pixels.
	pub edge_width: f64,
	/// Arrowhead length in pixels.
	pub arrow_size: f64,
	/// Half-width of a node box in pixels, used until the box is measured.
	pub node_half_width: f64,
	/// Space between an edge end and the node box, in pixels.
	pub arrow_gap: f64,
	/// Alpha of edges not touching the selected node.
	pub dimmed_alpha: f64,
}

/// Visual parameters for the feature-importance chart.
#[derive(Clone, Debug)]
pub struct ShapConfig {
	/// Decimal places for contribution values.
	pub precision: usize,
}

/// Display configuration, provided through context by `App`.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
	/// Causal graph settings.
	pub dag: DagConfig,
	/// Feature chart settings.
	pub shap: ShapConfig,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			dag: DagConfig {
				height: 256.0,
				lane: 0.5,
				edge_width: 2.0,
				arrow_size: 10.0,
				node_half_width: 48.0,
				arrow_gap: 4.0,
				dimmed_alpha: 0.25,
			},
			shap: ShapConfig { precision: 2 },
		}
	}
}

impl DagConfig {
	/// Distance kept clear around a node center for a box of the given
	/// measured width. Unmeasured boxes (`None` or zero width) use
	/// `node_half_width`.
	pub fn clearance(&self, box_width: Option<f64>) -> f64 {
		let half = box_width
			.filter(|w| *w > 0.0)
			.map_or(self.node_half_width, |w| w / 2.0);
		half + self.arrow_gap
	}
}

impl ShapConfig {
	/// Format a contribution with the configured precision.
	pub fn format_value(&self, value: f64) -> String {
		format!("{:.*}", self.precision, value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn formats_with_configured_precision() {
		let config = DashboardConfig::default();
		assert_eq!(config.shap.format_value(0.4), "0.40");
		assert_eq!(config.shap.format_value(-0.126), "-0.13");
		assert_eq!(ShapConfig { precision: 0 }.format_value(2.6), "3");
	}

	#[test]
	fn clearance_follows_measured_box() {
		let dag = DashboardConfig::default().dag;
		assert_eq!(dag.clearance(Some(140.0)), 70.0 + dag.arrow_gap);
		assert_eq!(dag.clearance(None), dag.node_half_width + dag.arrow_gap);
		assert_eq!(dag.clearance(Some(0.0)), dag.node_half_width + dag.arrow_gap);
	}

	#[test]
	fn default_lane_is_centered() {
		assert_eq!(DashboardConfig::default().dag.lane, 0.5);
	}
}
