//! Single-lane layout for the causal graph.
//!
//! Nodes are spread evenly along one horizontal lane in input order: the i-th
//! of N nodes (1-indexed) sits at `i / (N + 1)` of the width. Positions are
//! fractions of the drawing area so the same layout serves any size.

use std::collections::HashMap;

use log::debug;

use crate::data::{GraphEdge, GraphNode, MetadataStore};
use crate::theme::{Color, GroupPalette};

/// Position as fractions of the drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
	/// Horizontal fraction in `(0, 1)`.
	pub x: f64,
	/// Vertical fraction.
	pub y: f64,
}

impl Position {
	/// Pixel coordinates within a `width` by `height` area.
	pub fn to_pixels(self, width: f64, height: f64) -> (f64, f64) {
		(self.x * width, self.y * height)
	}
}

/// Computed node positions, keyed by node id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphLayout {
	positions: HashMap<String, Position>,
}

impl GraphLayout {
	/// Lay out `nodes` on a lane at vertical fraction `lane`.
	pub fn compute(nodes: &[GraphNode], lane: f64) -> Self {
		if nodes.is_empty() {
			return Self::default();
		}
		let step = 1.0 / (nodes.len() + 1) as f64;
		let positions = nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let x = (i + 1) as f64 * step;
				(node.id.clone(), Position { x, y: lane })
			})
			.collect();
		Self { positions }
	}

	/// Position of node `id`, if it was laid out.
	pub fn position(&self, id: &str) -> Option<Position> {
		self.positions.get(id).copied()
	}

	/// Number of laid-out nodes.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// True when no node was laid out.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	/// Edges whose endpoints both have positions, in input order.
	pub fn visible_edges<'a>(&self, edges: &'a [GraphEdge]) -> Vec<&'a GraphEdge> {
		let visible: Vec<&GraphEdge> = edges
			.iter()
			.filter(|e| self.positions.contains_key(&e.from) && self.positions.contains_key(&e.to))
			.collect();
		if visible.len() < edges.len() {
			debug!(
				"dag: {} edge(s) reference unknown nodes",
				edges.len() - visible.len()
			);
		}
		visible
	}
}

/// Group colors in first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupColors {
	groups: Vec<(String, Color)>,
	ungrouped: Color,
}

impl GroupColors {
	/// Assign colors to the groups of `nodes`. Known groups take the store's
	/// color; the rest take the palette entry at their first-seen index.
	pub fn assign(nodes: &[GraphNode], store: &MetadataStore, palette: &GroupPalette) -> Self {
		let mut groups: Vec<(String, Color)> = Vec::new();
		for group in nodes.iter().filter_map(|n| n.group.as_deref()) {
			if groups.iter().any(|(g, _)| g == group) {
				continue;
			}
			let color = store
				.group_color(group)
				.unwrap_or_else(|| palette.get(groups.len()));
			groups.push((group.to_string(), color));
		}
		Self {
			groups,
			ungrouped: palette.get(0),
		}
	}

	/// Color of the node's group, or the first palette color when ungrouped.
	pub fn color_of(&self, node: &GraphNode) -> Color {
		node.group
			.as_deref()
			.and_then(|g| self.groups.iter().find(|(name, _)| name == g))
			.map(|(_, color)| *color)
			.unwrap_or(self.ungrouped)
	}

	/// Legend entries in first-seen order.
	pub fn legend(&self) -> &[(String, Color)] {
		&self.groups
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn nodes(ids: &[&str]) -> Vec<GraphNode> {
		ids.iter().map(|id| GraphNode::new(*id, id.to_uppercase())).collect()
	}

	#[test]
	fn three_nodes_at_quarters() {
		let layout = GraphLayout::compute(&nodes(&["a", "b", "c"]), 0.5);
		assert_eq!(layout.position("a"), Some(Position { x: 0.25, y: 0.5 }));
		assert_eq!(layout.position("b"), Some(Position { x: 0.5, y: 0.5 }));
		assert_eq!(layout.position("c"), Some(Position { x: 0.75, y: 0.5 }));
	}

	#[test]
	fn positions_strictly_increase_inside_unit_interval() {
		for n in 1..40 {
			let ids: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
			let input: Vec<GraphNode> = ids.iter().map(|id| GraphNode::new(id, id)).collect();
			let layout = GraphLayout::compute(&input, 0.5);
			assert_eq!(layout.len(), n);
			let xs: Vec<f64> = ids.iter().map(|id| layout.position(id).unwrap().x).collect();
			assert!(xs.iter().all(|x| *x > 0.0 && *x < 1.0));
			assert!(xs.windows(2).all(|w| w[0] < w[1]));
		}
	}

	#[test]
	fn empty_input_gives_empty_layout() {
		let layout = GraphLayout::compute(&[], 0.5);
		assert!(layout.is_empty());
		assert!(layout.visible_edges(&[GraphEdge::new("a", "b")]).is_empty());
	}

	#[test]
	fn dangling_edges_are_dropped() {
		let layout = GraphLayout::compute(&nodes(&["a", "b"]), 0.5);
		assert!(layout.visible_edges(&[GraphEdge::new("a", "z")]).is_empty());
	}

	#[test]
	fn visible_edges_keep_input_order() {
		let layout = GraphLayout::compute(&nodes(&["a", "b", "c"]), 0.5);
		let edges = vec![
			GraphEdge::new("c", "a"),
			GraphEdge::new("x", "a"),
			GraphEdge::new("a", "b"),
			GraphEdge::new("b", "y"),
			GraphEdge::new("b", "c"),
		];
		let visible: Vec<&GraphEdge> = layout.visible_edges(&edges);
		assert_eq!(visible, vec![&edges[0], &edges[2], &edges[4]]);
	}

	#[test]
	fn pixels_scale_fractions() {
		let p = Position { x: 0.25, y: 0.5 };
		assert_eq!(p.to_pixels(800.0, 256.0), (200.0, 128.0));
	}

	#[test]
	fn group_colors_prefer_store_then_palette() {
		let store = MetadataStore::default().with_group_color("Threat", Color::rgb(239, 68, 68));
		let palette = GroupPalette::primary();
		let input = vec![
			GraphNode::new("a", "A").with_group("Route"),
			GraphNode::new("b", "B").with_group("Threat"),
			GraphNode::new("c", "C").with_group("Route"),
			GraphNode::new("d", "D").with_group("Assessment"),
			GraphNode::new("e", "E"),
		];
		let colors = GroupColors::assign(&input, &store, &palette);
		let legend: Vec<&str> = colors.legend().iter().map(|(g, _)| g.as_str()).collect();
		assert_eq!(legend, ["Route", "Threat", "Assessment"]);
		assert_eq!(colors.color_of(&input[0]), palette.get(0));
		assert_eq!(colors.color_of(&input[1]), Color::rgb(239, 68, 68));
		assert_eq!(colors.color_of(&input[3]), palette.get(2));
		assert_eq!(colors.color_of(&input[4]), palette.get(0));
	}
}
