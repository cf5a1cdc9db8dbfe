//! Bundled metadata tables for the air-defense scenario.

use log::warn;

use super::metadata::{MetadataRecord, MetadataStore};
use crate::theme::Color;

struct FeatureRow {
	name: &'static str,
	group: &'static str,
	description: &'static str,
	rationale: &'static str,
	value: &'static str,
}

struct NodeRow {
	id: &'static str,
	group: &'static str,
	description: &'static str,
	rationale: &'static str,
	counterfactual: Option<&'static str>,
}

const FEATURES: &[FeatureRow] = &[
	FeatureRow {
		name: "Flight Deviation",
		group: "Flight Data",
		description: "How far the aircraft has deviated from its planned route.",
		rationale: "Large deviations can indicate intentional maneuvering or hostile intent.",
		value: "45° change",
	},
	FeatureRow {
		name: "Course Change",
		group: "Flight Data",
		description: "Degree of alteration from the original course or heading.",
		rationale: "Sudden course changes are often associated with evasive action.",
		value: "45° change",
	},
	FeatureRow {
		name: "Speed Increase",
		group: "Flight Data",
		description: "Increase in velocity compared to filed flight plan.",
		rationale: "Rapid acceleration may suggest urgency or evasion.",
		value: "50% increase",
	},
	FeatureRow {
		name: "Acceleration Rate",
		group: "Flight Data",
		description: "How quickly the aircraft is accelerating.",
		rationale: "Unusually high acceleration can indicate aggressive intent.",
		value: "High",
	},
	FeatureRow {
		name: "Fuel Consumption",
		group: "Flight Data",
		description: "Rate at which fuel is being used.",
		rationale: "High consumption limits operational time and indicates high power usage.",
		value: "Elevated",
	},
	FeatureRow {
		name: "Flight Plan Deviation",
		group: "Flight Data",
		description: "Difference from the filed flight plan.",
		rationale: "Deviations without clearance are suspicious.",
		value: "Significant",
	},
	FeatureRow {
		name: "ATC Non-Response",
		group: "Communications",
		description: "Lack of reply to air traffic control calls.",
		rationale: "Unresponsive aircraft may be hiding intentions.",
		value: "No contact",
	},
	FeatureRow {
		name: "Timing Factor",
		group: "Operational",
		description: "Specific timing of the maneuver or deviation.",
		rationale: "May coincide with vulnerabilities or shift changes.",
		value: "During shift change",
	},
	FeatureRow {
		name: "Historical Match",
		group: "Historical",
		description: "Similarity of current behavior to past incidents.",
		rationale: "Matching historical threats raises suspicion.",
		value: "85% correlation",
	},
	FeatureRow {
		name: "Behavior Pattern",
		group: "Operational",
		description: "Observed behavior relative to typical operations.",
		rationale: "Unusual patterns can indicate hostile intent.",
		value: "Consistent with threats",
	},
	FeatureRow {
		name: "Timing Correlation",
		group: "Operational",
		description: "Relationship of event timing to known vulnerabilities.",
		rationale: "Adversaries exploit predictable timings.",
		value: "During low coverage",
	},
	FeatureRow {
		name: "Geographic Significance",
		group: "Environmental",
		description: "Importance of the geographic approach vector.",
		rationale: "Certain vectors target critical assets.",
		value: "Critical approach",
	},
	FeatureRow {
		name: "Geographic Vector",
		group: "Environmental",
		description: "Current geographic path or approach vector.",
		rationale: "Approach may align with sensitive areas.",
		value: "Toward infrastructure",
	},
	FeatureRow {
		name: "Response Time",
		group: "Resource",
		description: "Time required to deploy intercept or response assets.",
		rationale: "Determines feasibility of interception.",
		value: "8 minutes",
	},
	FeatureRow {
		name: "Success Probability",
		group: "Resource",
		description: "Estimated chance of successful response.",
		rationale: "Higher probability actions are favored.",
		value: "95%",
	},
	FeatureRow {
		name: "Resource Availability",
		group: "Resource",
		description: "Whether assets are ready and available.",
		rationale: "Limited resources may constrain options.",
		value: "High",
	},
	FeatureRow {
		name: "Collateral Risk",
		group: "Resource",
		description: "Risk of collateral damage from the action.",
		rationale: "High risk may preclude certain responses.",
		value: "Moderate",
	},
	FeatureRow {
		name: "Time of Day",
		group: "Environmental",
		description: "Current time affecting visibility and operations.",
		rationale: "Night or low-light conditions complicate response.",
		value: "Night",
	},
];

const NODES: &[NodeRow] = &[
	NodeRow {
		id: "deviation",
		group: "Flight Data",
		description: "Change from expected flight path.",
		rationale: "Helps assess if the aircraft is intentionally diverting.",
		counterfactual: Some("If deviation decreases, threat assessment lowers."),
	},
	NodeRow {
		id: "speed",
		group: "Flight Data",
		description: "Increase or decrease in speed.",
		rationale: "Rapid speed shifts may indicate urgency or evasion.",
		counterfactual: Some("Reducing speed could signal compliance."),
	},
	NodeRow {
		id: "communication",
		group: "Communications",
		description: "Radio contact with ATC or other aircraft.",
		rationale: "Lack of communication hides intent and raises risk.",
		counterfactual: Some("Restoring comms clarifies intentions."),
	},
	NodeRow {
		id: "geography",
		group: "Environmental",
		description: "Approach vector relative to terrain or infrastructure.",
		rationale: "Certain vectors expose high value targets.",
		counterfactual: Some("Changing vector might mitigate risk."),
	},
	NodeRow {
		id: "threat",
		group: "Threat",
		description: "Overall threat assessment node.",
		rationale: "Combines factors to determine response level.",
		counterfactual: None,
	},
	NodeRow {
		id: "timing",
		group: "Operational",
		description: "When the event occurs relative to operations.",
		rationale: "Some times present vulnerabilities.",
		counterfactual: Some("Different timing may reduce exposure."),
	},
	NodeRow {
		id: "intent",
		group: "Threat",
		description: "Inferred intent of the aircraft.",
		rationale: "Determines if action is hostile or benign.",
		counterfactual: None,
	},
	NodeRow {
		id: "acceleration",
		group: "Flight Data",
		description: "Rate at which speed is changing.",
		rationale: "High acceleration can indicate aggressive maneuvering.",
		counterfactual: None,
	},
	NodeRow {
		id: "fuel",
		group: "Flight Data",
		description: "Fuel usage and remaining capacity.",
		rationale: "Low fuel limits options and may force actions.",
		counterfactual: None,
	},
	NodeRow {
		id: "operations",
		group: "Operational",
		description: "Standard flight operations and procedures.",
		rationale: "Deviations from normal ops are suspicious.",
		counterfactual: None,
	},
	NodeRow {
		id: "historical",
		group: "Historical",
		description: "Past incidents and known patterns.",
		rationale: "Matching history helps predict intent.",
		counterfactual: None,
	},
	NodeRow {
		id: "behavior",
		group: "Operational",
		description: "Observed flight behavior patterns.",
		rationale: "Inconsistent behavior signals potential threat.",
		counterfactual: None,
	},
	NodeRow {
		id: "cold_lake",
		group: "Resource",
		description: "Assets available at Cold Lake base.",
		rationale: "Determines quickest intercept capability.",
		counterfactual: None,
	},
	NodeRow {
		id: "bagotville",
		group: "Resource",
		description: "Assets available at Bagotville base.",
		rationale: "Provides additional intercept options.",
		counterfactual: None,
	},
	NodeRow {
		id: "ground",
		group: "Resource",
		description: "Ground-based defensive systems.",
		rationale: "Serve as backup or alternative response.",
		counterfactual: None,
	},
	NodeRow {
		id: "civilian",
		group: "Communications",
		description: "Management of civilian air traffic.",
		rationale: "Ensures safety and clears intercept path.",
		counterfactual: None,
	},
	NodeRow {
		id: "response",
		group: "Threat",
		description: "Overall response decision node.",
		rationale: "Combines factors to choose best action.",
		counterfactual: None,
	},
];

const GROUP_COLORS: &[(&str, &str)] = &[
	("Flight Data", "#3b82f6"),
	("Communications", "#10b981"),
	("Operational", "#f59e0b"),
	("Historical", "#8b5cf6"),
	("Resource", "#f97316"),
	("Environmental", "#14b8a6"),
	("Threat", "#ef4444"),
];

pub(super) fn build() -> MetadataStore {
	let store = FEATURES.iter().fold(MetadataStore::default(), |store, row| {
		store.with_feature(
			row.name,
			MetadataRecord::new(row.group)
				.description(row.description)
				.rationale(row.rationale)
				.display_value(row.value),
		)
	});
	let store = NODES.iter().fold(store, |store, row| {
		let record = MetadataRecord::new(row.group)
			.description(row.description)
			.rationale(row.rationale);
		let record = match row.counterfactual {
			Some(text) => record.counterfactual(text),
			None => record,
		};
		store.with_node(row.id, record)
	});
	GROUP_COLORS
		.iter()
		.fold(store, |store, &(group, hex)| match Color::from_hex(hex) {
			Some(color) => store.with_group_color(group, color),
			None => {
				warn!("metadata: bad color {hex} for group {group}");
				store
			}
		})
}
