//! Read-only descriptive metadata for graph nodes and features.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::info;

use super::tables;
use crate::config::FALLBACK_GROUP;
use crate::theme::Color;

/// Descriptive fields shown in a detail panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataRecord {
	/// Group label used for grouping and coloring.
	pub group: String,
	/// What the entity measures.
	pub description: Option<String>,
	/// Why the entity matters to the assessment.
	pub rationale: Option<String>,
	/// "What if" text for the detail panel.
	pub counterfactual: Option<String>,
	/// Human-readable value, shown instead of the raw number when present.
	pub display_value: Option<String>,
}

impl MetadataRecord {
	/// Record in `group` with no other fields.
	pub fn new(group: impl Into<String>) -> Self {
		Self {
			group: group.into(),
			..Default::default()
		}
	}

	/// Set the description.
	pub fn description(mut self, text: impl Into<String>) -> Self {
		self.description = Some(text.into());
		self
	}

	/// Set the rationale.
	pub fn rationale(mut self, text: impl Into<String>) -> Self {
		self.rationale = Some(text.into());
		self
	}

	/// Set the counterfactual text.
	pub fn counterfactual(mut self, text: impl Into<String>) -> Self {
		self.counterfactual = Some(text.into());
		self
	}

	/// Set the display value.
	pub fn display_value(mut self, text: impl Into<String>) -> Self {
		self.display_value = Some(text.into());
		self
	}
}

/// Lookup tables keyed by feature name and node id, plus group colors.
#[derive(Clone, Debug, Default)]
pub struct MetadataStore {
	features: HashMap<String, MetadataRecord>,
	nodes: HashMap<String, MetadataRecord>,
	group_colors: HashMap<String, Color>,
}

impl MetadataStore {
	/// Add or replace the record for feature `name`.
	pub fn with_feature(mut self, name: impl Into<String>, record: MetadataRecord) -> Self {
		self.features.insert(name.into(), record);
		self
	}

	/// Add or replace the record for graph node `id`.
	pub fn with_node(mut self, id: impl Into<String>, record: MetadataRecord) -> Self {
		self.nodes.insert(id.into(), record);
		self
	}

	/// Set the color of `group`.
	pub fn with_group_color(mut self, group: impl Into<String>, color: Color) -> Self {
		self.group_colors.insert(group.into(), color);
		self
	}

	/// The store built from the bundled tables, initialised on first use.
	pub fn builtin() -> &'static MetadataStore {
		static STORE: OnceLock<MetadataStore> = OnceLock::new();
		STORE.get_or_init(|| {
			let store = tables::build();
			info!(
				"metadata: {} features, {} nodes, {} group colors",
				store.features.len(),
				store.nodes.len(),
				store.group_colors.len()
			);
			store
		})
	}

	/// Record for a SHAP feature.
	pub fn feature(&self, name: &str) -> Option<&MetadataRecord> {
		self.features.get(name)
	}

	/// Record for a graph node.
	pub fn node(&self, id: &str) -> Option<&MetadataRecord> {
		self.nodes.get(id)
	}

	/// Group of a feature, or the fallback group when it has no metadata.
	pub fn feature_group(&self, name: &str) -> &str {
		self.feature(name)
			.map(|r| r.group.as_str())
			.unwrap_or(FALLBACK_GROUP)
	}

	/// Configured color of `group`.
	pub fn group_color(&self, group: &str) -> Option<Color> {
		self.group_colors.get(group).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_feature_falls_back_to_other() {
		let store = MetadataStore::default()
			.with_feature("Speed Increase", MetadataRecord::new("Flight Data"));
		assert_eq!(store.feature_group("Speed Increase"), "Flight Data");
		assert_eq!(store.feature_group("Unknown"), FALLBACK_GROUP);
		assert!(store.node("speed").is_none());
	}

	#[test]
	fn builtin_store_covers_bundled_explanation() {
		let store = MetadataStore::builtin();
		for name in [
			"Flight Deviation",
			"Speed Increase",
			"ATC Non-Response",
			"Geographic Vector",
			"Time of Day",
		] {
			assert!(store.feature(name).is_some(), "{name} has metadata");
		}
		let threat = store.node("threat").unwrap();
		assert_eq!(threat.group, "Threat");
		assert!(threat.counterfactual.is_none());
		assert_eq!(
			store.group_color("Flight Data"),
			Some(Color::rgb(59, 130, 246))
		);
	}

	#[test]
	fn builtin_store_is_shared() {
		assert!(std::ptr::eq(MetadataStore::builtin(), MetadataStore::builtin()));
	}
}
