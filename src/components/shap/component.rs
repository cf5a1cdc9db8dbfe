use leptos::prelude::*;

use super::ranker::{self, Direction};
use crate::components::detail_panel::{DetailPanel, DetailPanelView};
use crate::components::selection::SelectionState;
use crate::components::visual_card::VisualCard;
use crate::config::DashboardConfig;
use crate::data::{FeatureContribution, MetadataStore, ShapData};
use crate::theme::{DECREASING, INCREASING};

/// Feature-importance chart. Renders nothing without a non-empty contribution
/// map.
#[component]
pub fn ShapVisual(#[prop(into)] data: Signal<Option<ShapData>>) -> impl IntoView {
	let store = use_context::<&'static MetadataStore>().unwrap_or_else(MetadataStore::builtin);
	let config = use_context::<DashboardConfig>().unwrap_or_default();

	move || -> Option<AnyView> {
		let shap = data.get()?.renderable()?.clone();
		Some(view! { <ShapChart shap=shap store=store config=config.clone() /> }.into_any())
	}
}

#[component]
fn ShapChart(shap: ShapData, store: &'static MetadataStore, config: DashboardConfig) -> impl IntoView {
	let selection = RwSignal::new(SelectionState::default());

	let ranked = ranker::rank(&shap);
	let max_abs = ranker::max_magnitude(&ranked);
	let groups = ranker::group_by(&ranked, store);

	let group_views = groups
		.into_iter()
		.map(|group| {
			let rows = group
				.features
				.iter()
				.map(|feature| feature_row(feature, max_abs, selection, &config))
				.collect_view();
			view! {
				<div class="shap-group">
					<h4 class="shap-group-label">{group.label}</h4>
					{rows}
				</div>
			}
		})
		.collect_view();

	let shap_config = config.shap.clone();
	let panel = move || -> Option<AnyView> {
		let active = selection.with(|s| s.active().map(str::to_string))?;
		let feature = ranked.iter().find(|f| f.name == active)?;
		let on_close = Callback::new(move |_: ()| selection.update(SelectionState::deselect));
		Some(
			view! {
				<DetailPanelView
					panel=DetailPanel::for_feature(feature, store, &shap_config)
					on_close=on_close
				/>
			}
			.into_any(),
		)
	};

	view! {
		<VisualCard title="SHAP Feature Importance" accent="shap">
			<div class="shap-groups">{group_views}</div>
			{panel}
		</VisualCard>
	}
}

fn feature_row(
	feature: &FeatureContribution,
	max_abs: f64,
	selection: RwSignal<SelectionState>,
	config: &DashboardConfig,
) -> impl IntoView + use<> {
	let (direction_class, color) = match Direction::of(feature.value) {
		Direction::Increasing => ("increasing", INCREASING),
		Direction::Decreasing => ("decreasing", DECREASING),
	};
	let bar_style = format!(
		"width: {:.2}%; background-color: {};",
		ranker::normalize(feature.value, max_abs) * 100.0,
		color.to_css()
	);
	let arrow = match Direction::of(feature.value) {
		Direction::Increasing => "▲",
		Direction::Decreasing => "▼",
	};
	let value = config.shap.format_value(feature.value);
	let (name_class, name_click) = (feature.name.clone(), feature.name.clone());

	view! {
		<div
			class=format!("shap-feature {direction_class}")
			class:selected=move || selection.with(|s| s.is_selected(&name_class))
			on:click=move |_| {
				let name = name_click.clone();
				selection.update(move |s| s.select(name));
			}
		>
			<div class="shap-feature-header">
				<span class="shap-feature-name">{feature.name.clone()}</span>
				<span class="shap-feature-value">{arrow} " " {value}</span>
			</div>
			<div class="shap-bar-track">
				<div class="shap-bar" style=bar_style></div>
			</div>
		</div>
	}
}
