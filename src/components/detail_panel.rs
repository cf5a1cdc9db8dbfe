//! Detail panel shown for the selected node or feature.

use leptos::prelude::*;

use crate::config::{FALLBACK_GROUP, ShapConfig};
use crate::data::{FeatureContribution, GraphNode, MetadataStore};

/// Fields of a detail panel. Absent fields are not rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailPanel {
	/// Node label or feature name.
	pub title: String,
	/// Group label, `FALLBACK_GROUP` when unknown.
	pub group: String,
	/// What the entity measures.
	pub description: Option<String>,
	/// Why the entity matters.
	pub rationale: Option<String>,
	/// "What if" text.
	pub counterfactual: Option<String>,
	/// Display value (features only).
	pub value: Option<String>,
}

impl DetailPanel {
	/// Panel for a graph node. Fields carried on the node itself take
	/// precedence over the store's record for the same id.
	pub fn for_node(node: &GraphNode, store: &MetadataStore) -> Self {
		let record = store.node(&node.id);
		let group = node
			.group
			.clone()
			.or_else(|| record.map(|r| r.group.clone()))
			.unwrap_or_else(|| FALLBACK_GROUP.to_string());

		Self {
			title: node.label.clone(),
			group,
			description: node
				.description
				.clone()
				.or_else(|| record.and_then(|r| r.description.clone())),
			rationale: node
				.importance
				.clone()
				.or_else(|| record.and_then(|r| r.rationale.clone())),
			counterfactual: node
				.what_if
				.clone()
				.or_else(|| record.and_then(|r| r.counterfactual.clone())),
			value: None,
		}
	}

	/// Panel for a ranked feature. The value line prefers the store's display
	/// value over the formatted number.
	pub fn for_feature(
		feature: &FeatureContribution,
		store: &MetadataStore,
		config: &ShapConfig,
	) -> Self {
		let record = store.feature(&feature.name);
		Self {
			title: feature.name.clone(),
			group: store.feature_group(&feature.name).to_string(),
			description: record.and_then(|r| r.description.clone()),
			rationale: record.and_then(|r| r.rationale.clone()),
			counterfactual: record.and_then(|r| r.counterfactual.clone()),
			value: Some(
				record
					.and_then(|r| r.display_value.clone())
					.unwrap_or_else(|| config.format_value(feature.value)),
			),
		}
	}
}

/// Panel showing the present fields of `panel` with a close button.
#[component]
pub fn DetailPanelView(panel: DetailPanel, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
	view! {
		<aside class="detail-panel">
			<header class="detail-header">
				<span class="detail-title">{panel.title}</span>
				<span class="detail-group">{panel.group}</span>
				<button class="detail-close" on:click=move |_| on_close.run(())>
					"×"
				</button>
			</header>
			{panel.description.map(|text| view! { <p class="detail-description">{text}</p> })}
			{panel.rationale.map(|text| view! { <p class="detail-rationale">{text}</p> })}
			{panel
				.counterfactual
				.map(|text| view! { <p class="detail-counterfactual">"What if: " {text}</p> })}
			{panel.value.map(|text| view! { <p class="detail-value">"Value: " {text}</p> })}
		</aside>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::DashboardConfig;
	use crate::data::MetadataRecord;

	#[test]
	fn node_fields_override_store() {
		let store = MetadataStore::default().with_node(
			"speed",
			MetadataRecord::new("Flight Data")
				.description("from store")
				.rationale("store rationale")
				.counterfactual("store what-if"),
		);
		let mut node = GraphNode::new("speed", "Speed Increase");
		node.description = Some("inline".into());

		let panel = DetailPanel::for_node(&node, &store);
		assert_eq!(panel.group, "Flight Data");
		assert_eq!(panel.description.as_deref(), Some("inline"));
		assert_eq!(panel.rationale.as_deref(), Some("store rationale"));
		assert_eq!(panel.counterfactual.as_deref(), Some("store what-if"));
	}

	#[test]
	fn node_without_metadata_keeps_present_fields_only() {
		let node = GraphNode::new("mystery", "Mystery");
		let panel = DetailPanel::for_node(&node, &MetadataStore::default());
		assert_eq!(panel.title, "Mystery");
		assert_eq!(panel.group, FALLBACK_GROUP);
		assert!(panel.description.is_none());
		assert!(panel.rationale.is_none());
		assert!(panel.counterfactual.is_none());
	}

	#[test]
	fn feature_value_prefers_display_value() {
		let config = DashboardConfig::default().shap;
		let store = MetadataStore::default().with_feature(
			"Time of Day",
			MetadataRecord::new("Environmental").display_value("Night"),
		);
		let known = DetailPanel::for_feature(
			&FeatureContribution::new("Time of Day", -0.1),
			&store,
			&config,
		);
		assert_eq!(known.value.as_deref(), Some("Night"));
		assert_eq!(known.group, "Environmental");

		let unknown =
			DetailPanel::for_feature(&FeatureContribution::new("Wind Shear", -0.1), &store, &config);
		assert_eq!(unknown.value.as_deref(), Some("-0.10"));
		assert_eq!(unknown.group, FALLBACK_GROUP);
		assert!(unknown.description.is_none());
	}
}
