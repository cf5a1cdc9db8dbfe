//! Built-in scenario: an unresponsive aircraft over Northern Quebec.

use super::types::{
	AlternativeOutcome, CoaScenario, CourseOfAction, DagData, GraphEdge, GraphNode, Insight,
	Projection, Reasoning, ScenarioPhase, ShapData, XaiExplanation,
};

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

/// Mission timeline leading up to the explanation panel.
pub fn mission_phases() -> Vec<ScenarioPhase> {
	vec![
		ScenarioPhase {
			phase: "Monitoring and Detection".into(),
			actions: strings(&[
				"Note aircraft indicated by ATC in Northern Quebec.",
				"Interrogates the indicated track of interest.",
				"Changes mission phase.",
			]),
		},
		ScenarioPhase {
			phase: "Identification and Location".into(),
			actions: strings(&[
				"Discusses track of interest with reporting ATC.",
				"Verifies ATC card.",
				"Shares information with team.",
				"Notices aircraft's course aligns with high value targets.",
				"Checks high value target list.",
				"Notices aircraft's speed has increased.",
				"Checks intelligence summaries.",
				"Confirms no change with ATC.",
				"MCC gives direction to make the track a target.",
				"Changes mission phase.",
			]),
		},
		ScenarioPhase {
			phase: "Definition and Requirements".into(),
			actions: strings(&["TIMS card generated and shared.", "XAI panel activates."]),
		},
	]
}

fn node(
	id: &str,
	label: &str,
	group: &str,
	description: &str,
	importance: &str,
	what_if: Option<&str>,
) -> GraphNode {
	GraphNode {
		description: Some(description.into()),
		importance: Some(importance.into()),
		what_if: what_if.map(Into::into),
		..GraphNode::new(id, label).with_group(group)
	}
}

fn threat_graph() -> DagData {
	let nodes = vec![
		node(
			"deviation",
			"Flight Deviation",
			"Flight Data",
			"Deviation from original flight path",
			"Indicates potential evasive manoeuvre",
			Some("Less deviation lowers threat"),
		),
		node(
			"speed",
			"Speed Increase",
			"Flight Data",
			"Increase in aircraft speed",
			"Suggests intentional course change",
			Some("Slowing down may indicate compliance"),
		),
		node(
			"communication",
			"ATC Silence",
			"Communications",
			"No response to ATC calls",
			"Silence often precedes hostile intent",
			Some("Responding would ease concern"),
		),
		node(
			"geography",
			"Approach Vector",
			"Route",
			"Vector toward critical infrastructure",
			"May indicate attack posture",
			Some("Different route reduces suspicion"),
		),
		node(
			"threat",
			"Threat Assessment",
			"Assessment",
			"Overall threat evaluation",
			"Aggregates indicators to gauge risk",
			None,
		),
	];
	let edges = ["deviation", "speed", "communication", "geography"]
		.into_iter()
		.map(|from| GraphEdge::new(from, "threat"))
		.collect();
	DagData::new(nodes, edges)
}

/// Explanation produced when the panel activates.
pub fn explanation() -> XaiExplanation {
	let shap: ShapData = [
		("Flight Deviation", 0.45),
		("Speed Increase", 0.35),
		("ATC Non-Response", 0.4),
		("Geographic Vector", 0.3),
		("Time of Day", -0.1),
	]
	.into_iter()
	.collect();

	XaiExplanation {
		default_tab: None,
		response: "XAI Analysis: Unresponsive aircraft detected with multiple threat indicators"
			.into(),
		insight: Insight {
			text: "Aircraft threat assessment summary:\n\
				• Flight path deviation from original route\n\
				• Increased speed toward restricted airspace\n\
				• No response to ATC communications\n\
				• Course alignment with critical infrastructure\n\
				• Multiple threat indicators present"
				.into(),
			lime: Some(strings(&[
				"flight_deviation",
				"speed_increase",
				"target_alignment",
				"communication_loss",
			])),
		},
		reasoning: Reasoning {
			text: "Threat correlation analysis:\n\
				• Flight pattern matches 85% of known adversarial profiles\n\
				• Speed increase suggests intentional course change\n\
				• Communication silence indicates potential hostile intent\n\
				• Geographic approach vector is tactically significant"
				.into(),
			dag: Some(threat_graph()),
			shap: Some(shap),
		},
		projection: Projection {
			text: "Threat projection analysis:\n\
				• High probability of continued approach to restricted airspace\n\
				• Multiple response options available with varying success rates\n\
				• Critical decision window rapidly closing"
				.into(),
			alternatives: Some(vec![
				AlternativeOutcome {
					title: "Immediate Intercept Deployment".into(),
					details: "Deploy fighter aircraft for visual identification and potential \
						diversion. Highest success rate with rapid response."
						.into(),
				},
				AlternativeOutcome {
					title: "Enhanced Monitoring Protocol".into(),
					details: "Maintain surveillance while preparing defensive systems. Lower \
						resource commitment but higher risk."
						.into(),
				},
				AlternativeOutcome {
					title: "Defensive Systems Activation".into(),
					details: "Activate ground-based defense systems as precautionary measure. \
						Guaranteed availability but limited to defensive engagement."
						.into(),
				},
			]),
		},
		confidence: Some(85.0),
		suggested_prompts: Some(strings(&[
			"Why is the flight deviation significant?",
			"What makes this pattern suspicious?",
			"What are the intercept options?",
			"What happens if we wait?",
		])),
	}
}

/// The bundled course-of-action comparison.
pub fn coa_scenario() -> CoaScenario {
	let coa = |id: &str, name: &str, summary: &str, risk: &str, reward: &str, score: u32| {
		CourseOfAction {
			id: id.into(),
			name: name.into(),
			summary: summary.into(),
			risk: risk.into(),
			reward: reward.into(),
			recommendation_score: score,
		}
	};

	CoaScenario {
		name: "COA Analysis: Unresponsive Aircraft - Northern Quebec".into(),
		situation: "An aircraft has deviated from its flight plan in Northern Quebec and is \
			unresponsive to ATC, heading toward critical infrastructure."
			.into(),
		courses_of_action: vec![
			coa(
				"coa1",
				"COA 1: Enhanced Monitoring",
				"Maintain surveillance and attempt communication while tracking the aircraft's \
				progress and preparing defensive systems.",
				"High (potential breach of restricted airspace)",
				"Low (minimal resource commitment)",
				25,
			),
			coa(
				"coa2",
				"COA 2: Immediate Intercept",
				"Deploy fighter aircraft for visual identification, communication attempt, and \
				potential diversion of the target aircraft.",
				"Medium (resource intensive, potential escalation)",
				"High (direct control and threat mitigation)",
				90,
			),
			coa(
				"coa3",
				"COA 3: Defensive Posture",
				"Activate ground-based defense systems and prepare for potential engagement \
				while continuing monitoring efforts.",
				"Low (defensive posture only)",
				"Medium (prepared response capability)",
				70,
			),
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_graph_edges_all_resolve() {
		let explanation = explanation();
		let dag = explanation.reasoning.dag.unwrap();
		let (nodes, edges) = dag.parts().unwrap();
		assert_eq!(nodes.len(), 5);
		assert!(edges.iter().all(|e| nodes.iter().any(|n| n.id == e.from)));
		assert!(edges.iter().all(|e| e.to == "threat"));
	}

	#[test]
	fn bundled_shap_keeps_author_order() {
		let shap = explanation().reasoning.shap.unwrap();
		assert_eq!(shap.entries()[2].name, "ATC Non-Response");
		assert_eq!(shap.entries()[4].value, -0.1);
	}

	#[test]
	fn bundled_scenario_shape() {
		assert_eq!(mission_phases().len(), 3);
		assert_eq!(coa_scenario().courses_of_action.len(), 3);
	}
}
