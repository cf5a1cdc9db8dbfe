//! Payload structures consumed by the dashboard visualizations.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A node in the causal decision graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in edges.
	pub id: String,
	/// Text shown in the node box.
	pub label: String,
	/// Optional group name used for coloring and the legend.
	#[serde(default)]
	pub group: Option<String>,
	/// What the node represents.
	#[serde(default)]
	pub description: Option<String>,
	/// Why this factor matters to the assessment.
	#[serde(default)]
	pub importance: Option<String>,
	/// Counterfactual ("what if") text.
	#[serde(default)]
	pub what_if: Option<String>,
}

impl GraphNode {
	/// Node without group or narrative fields.
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			group: None,
			description: None,
			importance: None,
			what_if: None,
		}
	}

	/// Set the group.
	pub fn with_group(mut self, group: impl Into<String>) -> Self {
		self.group = Some(group.into());
		self
	}
}

/// A directed edge between two nodes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphEdge {
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
}

impl GraphEdge {
	/// Edge from `from` to `to`.
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

/// Complete graph payload. Either list may be missing in a payload, in which
/// case the graph is incomplete and is not rendered.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DagData {
	/// Nodes in layout order.
	#[serde(default)]
	pub nodes: Option<Vec<GraphNode>>,
	/// Directed edges; ones naming unknown nodes are not drawn.
	#[serde(default)]
	pub edges: Option<Vec<GraphEdge>>,
}

impl DagData {
	/// A complete graph.
	pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
		Self {
			nodes: Some(nodes),
			edges: Some(edges),
		}
	}

	/// Nodes and edges, if both are present.
	pub fn parts(&self) -> Option<(&[GraphNode], &[GraphEdge])> {
		match (&self.nodes, &self.edges) {
			(Some(nodes), Some(edges)) => Some((nodes, edges)),
			_ => None,
		}
	}

	/// Nodes and edges when the graph can be drawn: both lists present and at
	/// least one node.
	pub fn renderable(&self) -> Option<(&[GraphNode], &[GraphEdge])> {
		self.parts().filter(|(nodes, _)| !nodes.is_empty())
	}
}

/// A single signed feature contribution.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureContribution {
	/// Feature name, the key in the source map.
	pub name: String,
	/// Signed contribution; the sign gives the direction.
	pub value: f64,
}

impl FeatureContribution {
	/// Contribution of `name`.
	pub fn new(name: impl Into<String>, value: f64) -> Self {
		Self {
			name: name.into(),
			value,
		}
	}
}

/// Ordered mapping of feature name to signed contribution.
///
/// Deserializes from a JSON object and keeps the key order of the source, so
/// ties in magnitude rank in the order the author wrote them. A repeated key
/// replaces the earlier value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapData {
	entries: Vec<FeatureContribution>,
}

impl ShapData {
	/// Insert `name`, replacing an existing value in place.
	pub fn insert(&mut self, name: impl Into<String>, value: f64) {
		let name = name.into();
		match self.entries.iter_mut().find(|e| e.name == name) {
			Some(entry) => entry.value = value,
			None => self.entries.push(FeatureContribution { name, value }),
		}
	}

	/// Contributions in source order.
	pub fn entries(&self) -> &[FeatureContribution] {
		&self.entries
	}

	/// Number of contributions.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when there are no contributions.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// The contributions when there is at least one to chart.
	pub fn renderable(&self) -> Option<&Self> {
		(!self.is_empty()).then_some(self)
	}
}

impl<N: Into<String>> FromIterator<(N, f64)> for ShapData {
	fn from_iter<T: IntoIterator<Item = (N, f64)>>(iter: T) -> Self {
		let mut data = ShapData::default();
		for (name, value) in iter {
			data.insert(name, value);
		}
		data
	}
}

impl<'de> Deserialize<'de> for ShapData {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct ShapVisitor;

		impl<'de> Visitor<'de> for ShapVisitor {
			type Value = ShapData;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a map of feature name to number")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ShapData, A::Error> {
				let mut data = ShapData::default();
				while let Some((name, value)) = map.next_entry::<String, f64>()? {
					data.insert(name, value);
				}
				Ok(data)
			}
		}

		deserializer.deserialize_map(ShapVisitor)
	}
}

/// Explanation tab identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
	/// Conclusion and LIME factors.
	#[default]
	Insight,
	/// Narrative with the graph and feature chart.
	Reasoning,
	/// Expected outcomes.
	Projection,
}

impl Tab {
	/// Tabs in display order.
	pub const ALL: [Tab; 3] = [Tab::Insight, Tab::Reasoning, Tab::Projection];

	/// Label on the tab button.
	pub fn title(self) -> &'static str {
		match self {
			Tab::Insight => "Insight",
			Tab::Reasoning => "Reasoning",
			Tab::Projection => "Projection",
		}
	}
}

/// What the assessment concluded.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Insight {
	/// Narrative text; lines starting with `•` are bullets.
	pub text: String,
	/// LIME factor keys highlighted by the local surrogate model.
	#[serde(default)]
	pub lime: Option<Vec<String>>,
}

/// Why: narrative plus the graph and contribution payloads.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Reasoning {
	/// Narrative text.
	pub text: String,
	/// Causal graph; not drawn when absent.
	#[serde(default)]
	pub dag: Option<DagData>,
	/// Feature contributions; not charted when absent.
	#[serde(default)]
	pub shap: Option<ShapData>,
}

/// An outcome under a different decision.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AlternativeOutcome {
	/// Outcome name.
	pub title: String,
	/// What would happen.
	pub details: String,
}

/// What happens next, with alternative outcomes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Projection {
	/// Narrative text.
	pub text: String,
	#[serde(default)]
	/// Outcomes under other decisions.
	pub alternatives: Option<Vec<AlternativeOutcome>>,
}

/// A complete explanation as produced for one assessment.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XaiExplanation {
	/// Tab shown first; `Insight` when absent.
	#[serde(default)]
	pub default_tab: Option<Tab>,
	/// One-line answer shown as the panel heading.
	pub response: String,
	/// Insight tab content.
	pub insight: Insight,
	/// Reasoning tab content.
	pub reasoning: Reasoning,
	/// Projection tab content.
	pub projection: Projection,
	/// Confidence in percent. Fractional values are allowed.
	#[serde(default)]
	pub confidence: Option<f64>,
	/// Follow-up questions offered to the operator.
	#[serde(default)]
	pub suggested_prompts: Option<Vec<String>>,
}

/// One phase of the mission timeline.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScenarioPhase {
	/// Phase title.
	pub phase: String,
	/// Actions taken in this phase.
	pub actions: Vec<String>,
}

/// A candidate response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOfAction {
	/// Stable identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// One-paragraph description.
	pub summary: String,
	/// Risk summary.
	pub risk: String,
	/// Expected benefit.
	pub reward: String,
	/// Recommendation score out of 100.
	pub recommendation_score: u32,
}

/// A situation and the courses of action considered for it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoaScenario {
	/// Scenario title.
	pub name: String,
	/// Description of the situation.
	pub situation: String,
	/// Candidates in scenario order.
	pub courses_of_action: Vec<CourseOfAction>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shap_data_keeps_source_key_order() {
		let data: ShapData =
			serde_json::from_str(r#"{"Zulu": 0.1, "Alpha": -0.4, "Mike": 0.45}"#).unwrap();
		let names: Vec<&str> = data.entries().iter().map(|e| e.name.as_str()).collect();
		assert_eq!(names, ["Zulu", "Alpha", "Mike"]);
		assert_eq!(data.entries()[1].value, -0.4);
	}

	#[test]
	fn shap_data_repeated_key_replaces_in_place() {
		let data: ShapData = [("a", 1.0), ("b", 2.0), ("a", 3.0)].into_iter().collect();
		assert_eq!(data.len(), 2);
		assert_eq!(data.entries()[0], FeatureContribution::new("a", 3.0));
	}

	#[test]
	fn dag_data_without_edges_is_incomplete() {
		let data: DagData =
			serde_json::from_str(r#"{"nodes": [{"id": "a", "label": "A"}]}"#).unwrap();
		assert!(data.parts().is_none());

		let data: DagData =
			serde_json::from_str(r#"{"nodes": [{"id": "a", "label": "A"}], "edges": []}"#)
				.unwrap();
		let (nodes, edges) = data.parts().unwrap();
		assert_eq!(nodes.len(), 1);
		assert!(edges.is_empty());
	}

	#[test]
	fn empty_graph_is_not_renderable() {
		assert!(DagData::new(Vec::new(), Vec::new()).renderable().is_none());
		assert!(DagData::default().renderable().is_none());

		let data = DagData::new(vec![GraphNode::new("a", "A")], Vec::new());
		let (nodes, edges) = data.renderable().unwrap();
		assert_eq!(nodes.len(), 1);
		assert!(edges.is_empty());
	}

	#[test]
	fn empty_contributions_are_not_renderable() {
		assert!(ShapData::default().renderable().is_none());
		let data: ShapData = [("a", 0.0)].into_iter().collect();
		assert_eq!(data.renderable(), Some(&data));
	}

	#[test]
	fn graph_node_reads_camel_case_fields() {
		let node: GraphNode = serde_json::from_str(
			r#"{"id": "speed", "label": "Speed Increase", "group": "Flight Data", "whatIf": "Slow down"}"#,
		)
		.unwrap();
		assert_eq!(node.group.as_deref(), Some("Flight Data"));
		assert_eq!(node.what_if.as_deref(), Some("Slow down"));
		assert!(node.description.is_none());
	}

	#[test]
	fn explanation_reads_default_tab() {
		let json = r#"{
			"defaultTab": "projection",
			"response": "r",
			"insight": {"text": "i"},
			"reasoning": {"text": "why"},
			"projection": {"text": "p"}
		}"#;
		let explanation: XaiExplanation = serde_json::from_str(json).unwrap();
		assert_eq!(explanation.default_tab, Some(Tab::Projection));
		assert!(explanation.reasoning.dag.is_none());
		assert!(explanation.reasoning.shap.is_none());
	}
}
