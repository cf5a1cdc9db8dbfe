use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::DagConfig;
use crate::theme::{EDGE, EDGE_ACTIVE};

/// Pixel geometry of one edge: the shaft and its arrowhead.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSegment {
	/// Shaft start, just outside the source node.
	pub start: (f64, f64),
	/// Shaft end, at the arrowhead base.
	pub end: (f64, f64),
	/// Arrowhead tip, just outside the target node.
	pub tip: (f64, f64),
	/// Left corner of the arrowhead base.
	pub barb_left: (f64, f64),
	/// Right corner of the arrowhead base.
	pub barb_right: (f64, f64),
	/// Edge touches the selected node.
	pub active: bool,
}

impl EdgeSegment {
	/// Geometry from `from` to `to` in pixels. `clearance` is the distance kept
	/// free around the source and target centers (usually half the node box
	/// plus a gap). When the endpoints are too close for both clearances and an
	/// arrowhead, the clearances shrink proportionally. `None` only for
	/// coincident endpoints.
	pub fn between(
		from: (f64, f64),
		to: (f64, f64),
		clearance: (f64, f64),
		config: &DagConfig,
		active: bool,
	) -> Option<Self> {
		let (dx, dy) = (to.0 - from.0, to.1 - from.1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist <= 0.0 || !dist.is_finite() {
			return None;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		let arrow = config.arrow_size.min(dist);
		let (near, far) = (clearance.0.max(0.0), clearance.1.max(0.0));
		let (room, wanted) = (dist - arrow, near + far);
		let (near, far) = if wanted > room {
			(near * room / wanted, far * room / wanted)
		} else {
			(near, far)
		};

		let tip = (to.0 - ux * far, to.1 - uy * far);
		let back = (tip.0 - ux * arrow, tip.1 - uy * arrow);
		let (px, py) = (-uy * arrow * 0.5, ux * arrow * 0.5);
		Some(Self {
			start: (from.0 + ux * near, from.1 + uy * near),
			end: back,
			tip,
			barb_left: (back.0 + px, back.1 + py),
			barb_right: (back.0 - px, back.1 - py),
			active,
		})
	}
}

/// Clear the canvas and draw every segment.
pub fn render(
	ctx: &CanvasRenderingContext2d,
	segments: &[EdgeSegment],
	width: f64,
	height: f64,
	config: &DagConfig,
	has_selection: bool,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	for segment in segments {
		let color = match (has_selection, segment.active) {
			(true, true) => EDGE_ACTIVE,
			(true, false) => EDGE.with_alpha(config.dimmed_alpha),
			(false, _) => EDGE,
		};
		let css = color.to_css();
		let width = if segment.active {
			config.edge_width * 1.5
		} else {
			config.edge_width
		};

		ctx.set_stroke_style_str(&css);
		ctx.set_line_width(width);
		// Dimmed edges are dashed.
		let dash = if has_selection && !segment.active {
			js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0))
		} else {
			js_sys::Array::new()
		};
		let _ = ctx.set_line_dash(&dash);

		ctx.begin_path();
		ctx.move_to(segment.start.0, segment.start.1);
		ctx.line_to(segment.end.0, segment.end.1);
		ctx.stroke();

		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(&css);
		ctx.begin_path();
		ctx.move_to(segment.tip.0, segment.tip.1);
		ctx.line_to(segment.barb_left.0, segment.barb_left.1);
		ctx.line_to(segment.barb_right.0, segment.barb_right.1);
		ctx.close_path();
		ctx.fill();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::dag::layout::GraphLayout;
	use crate::config::DashboardConfig;

	#[test]
	fn horizontal_edge_stops_at_node_boxes() {
		let config = DashboardConfig::default().dag;
		let segment =
			EdgeSegment::between((100.0, 128.0), (400.0, 128.0), (40.0, 74.0), &config, false).unwrap();
		assert_eq!(segment.start, (140.0, 128.0));
		assert_eq!(segment.tip, (326.0, 128.0));
		assert_eq!(segment.end.0, segment.tip.0 - config.arrow_size);
		assert_eq!(segment.barb_left.0, segment.barb_right.0);
		assert_eq!(segment.barb_left.1 - segment.barb_right.1, config.arrow_size);
	}

	#[test]
	fn short_edges_are_still_drawn() {
		let config = DashboardConfig::default().dag;
		let segment =
			EdgeSegment::between((100.0, 50.0), (160.0, 50.0), (52.0, 52.0), &config, true).unwrap();
		// Clearances shrink to 25 each so the shaft and arrowhead fit.
		assert_eq!(segment.start, (125.0, 50.0));
		assert_eq!(segment.tip, (135.0, 50.0));
		assert_eq!(segment.end, (125.0, 50.0));
		assert!(segment.active);
	}

	#[test]
	fn very_short_edge_is_all_arrowhead() {
		let config = DashboardConfig::default().dag;
		let segment = EdgeSegment::between((0.0, 0.0), (4.0, 0.0), (30.0, 30.0), &config, false).unwrap();
		assert_eq!(segment.start, (0.0, 0.0));
		assert_eq!(segment.tip, (4.0, 0.0));
		assert_eq!(segment.end, (0.0, 0.0));
	}

	#[test]
	fn coincident_endpoints_have_no_geometry() {
		let config = DashboardConfig::default().dag;
		assert!(EdgeSegment::between((10.0, 10.0), (10.0, 10.0), (0.0, 0.0), &config, false).is_none());
	}

	#[test]
	fn every_visible_edge_of_the_bundled_graph_is_drawn_when_narrow() {
		let config = DashboardConfig::default().dag;
		let dag = crate::data::scenario::explanation().reasoning.dag.unwrap();
		let (nodes, edges) = dag.renderable().unwrap();
		let layout = GraphLayout::compute(nodes, config.lane);
		let visible = layout.visible_edges(edges);
		for width in [320.0, 600.0, 1200.0] {
			let drawn = visible
				.iter()
				.filter_map(|edge| {
					let from = layout.position(&edge.from)?.to_pixels(width, config.height);
					let to = layout.position(&edge.to)?.to_pixels(width, config.height);
					let clearance = config.clearance(Some(140.0));
					EdgeSegment::between(from, to, (clearance, clearance), &config, false)
				})
				.count();
			assert_eq!(drawn, visible.len(), "width {width}");
		}
	}
}
