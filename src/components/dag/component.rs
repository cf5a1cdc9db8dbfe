use std::collections::HashMap;

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::layout::{GraphLayout, GroupColors};
use super::render::{self, EdgeSegment};
use crate::components::detail_panel::{DetailPanel, DetailPanelView};
use crate::components::selection::SelectionState;
use crate::components::visual_card::VisualCard;
use crate::config::DashboardConfig;
use crate::data::{DagData, GraphEdge, GraphNode, MetadataStore};
use crate::theme::GroupPalette;

/// Causal decision graph. Renders nothing unless the payload carries both a
/// non-empty node list and an edge list.
#[component]
pub fn DagVisual(#[prop(into)] data: Signal<Option<DagData>>) -> impl IntoView {
	let store = use_context::<&'static MetadataStore>().unwrap_or_else(MetadataStore::builtin);
	let config = use_context::<DashboardConfig>().unwrap_or_default();

	move || -> Option<AnyView> {
		let dag = data.get()?;
		let (nodes, edges) = dag.renderable()?;
		Some(
			view! {
				<DagGraph
					nodes=nodes.to_vec()
					edges=edges.to_vec()
					store=store
					config=config.clone()
				/>
			}
			.into_any(),
		)
	}
}

#[component]
fn DagGraph(
	nodes: Vec<GraphNode>,
	edges: Vec<GraphEdge>,
	store: &'static MetadataStore,
	config: DashboardConfig,
) -> impl IntoView {
	let selection = RwSignal::new(SelectionState::default());
	let resized = RwSignal::new(());
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	let layout = GraphLayout::compute(&nodes, config.dag.lane);
	let colors = GroupColors::assign(&nodes, store, &GroupPalette::default());
	let visible: Vec<GraphEdge> = layout.visible_edges(&edges).into_iter().cloned().collect();
	let node_refs: HashMap<String, NodeRef<Div>> = nodes
		.iter()
		.map(|node| (node.id.clone(), NodeRef::new()))
		.collect();

	let handle = window_event_listener(ev::resize, move |_| resized.set(()));
	on_cleanup(move || handle.remove());

	let (layout_fx, dag_config, refs_fx) = (layout.clone(), config.dag.clone(), node_refs.clone());
	Effect::new(move |_| {
		resized.track();
		let active = selection.with(|s| s.active().map(str::to_string));
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.unwrap_or(800.0);
		let height = dag_config.height;
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("dag: canvas has no 2d context");
			return;
		};

		let clearance = |id: &str| {
			let box_width = refs_fx
				.get(id)
				.and_then(|r| r.get())
				.map(|el| el.offset_width() as f64);
			dag_config.clearance(box_width)
		};
		let segments: Vec<EdgeSegment> = visible
			.iter()
			.filter_map(|edge| {
				let from = layout_fx.position(&edge.from)?.to_pixels(width, height);
				let to = layout_fx.position(&edge.to)?.to_pixels(width, height);
				let touches = active
					.as_deref()
					.is_some_and(|id| id == edge.from || id == edge.to);
				let clear = (clearance(&edge.from), clearance(&edge.to));
				let segment = EdgeSegment::between(from, to, clear, &dag_config, touches);
				if segment.is_none() {
					debug!("dag: edge {} -> {} has coincident endpoints", edge.from, edge.to);
				}
				segment
			})
			.collect();
		render::render(&ctx, &segments, width, height, &dag_config, active.is_some());
	});

	let node_views = nodes
		.iter()
		.filter_map(|node| {
			let pos = layout.position(&node.id)?;
			let node_ref = node_refs.get(&node.id).copied()?;
			let style = format!(
				"left: {:.3}%; top: {:.3}%; border-color: {};",
				pos.x * 100.0,
				pos.y * 100.0,
				colors.color_of(node).to_css()
			);
			let (id_class, id_click) = (node.id.clone(), node.id.clone());
			Some(view! {
				<div
					node_ref=node_ref
					class="dag-node"
					class:selected=move || selection.with(|s| s.is_selected(&id_class))
					style=style
					on:click=move |ev: MouseEvent| {
						ev.stop_propagation();
						let id = id_click.clone();
						selection.update(move |s| s.select(id));
					}
				>
					{node.label.clone()}
				</div>
			})
		})
		.collect_view();

	let legend = colors
		.legend()
		.iter()
		.map(|(group, color)| {
			let swatch = format!("background-color: {};", color.to_css());
			view! {
				<span class="legend-entry">
					<span class="legend-swatch" style=swatch></span>
					{group.clone()}
				</span>
			}
		})
		.collect_view();

	let panel = move || -> Option<AnyView> {
		let active = selection.with(|s| s.active().map(str::to_string))?;
		let node = nodes.iter().find(|n| n.id == active)?;
		let on_close = Callback::new(move |_: ()| selection.update(SelectionState::deselect));
		Some(
			view! { <DetailPanelView panel=DetailPanel::for_node(node, store) on_close=on_close /> }
				.into_any(),
		)
	};

	let lane_style = format!("height: {}px;", config.dag.height);

	view! {
		<VisualCard title="Causal Decision Graph" accent="dag">
			<div
				class="dag-lane"
				style=lane_style
				on:click=move |_| selection.update(SelectionState::deselect)
			>
				<canvas node_ref=canvas_ref class="dag-edges" />
				{node_views}
				<div class="dag-legend">{legend}</div>
			</div>
			{panel}
		</VisualCard>
	}
}
