//! Ranking and grouping of signed feature contributions.

use crate::data::{FeatureContribution, MetadataStore, ShapData};

/// Whether a contribution raises or lowers the assessed outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	/// Pushes the assessment up.
	Increasing,
	/// Pushes it down, or has no effect.
	Decreasing,
}

impl Direction {
	/// Zero counts as decreasing; only strictly positive values increase.
	pub fn of(value: f64) -> Self {
		if value > 0.0 {
			Direction::Increasing
		} else {
			Direction::Decreasing
		}
	}
}

/// Contributions sorted by descending magnitude. The sort is stable, so equal
/// magnitudes keep their input order.
pub fn rank(contributions: &ShapData) -> Vec<FeatureContribution> {
	let mut ranked = contributions.entries().to_vec();
	ranked.sort_by(|a, b| b.value.abs().total_cmp(&a.value.abs()));
	ranked
}

/// Largest magnitude in `ranked`, or zero when empty.
pub fn max_magnitude(ranked: &[FeatureContribution]) -> f64 {
	ranked
		.iter()
		.map(|c| c.value.abs())
		.filter(|v| v.is_finite())
		.fold(0.0, f64::max)
}

/// Bar length for `value` as a fraction of `max_abs`, always finite and in
/// `[0, 1]`.
pub fn normalize(value: f64, max_abs: f64) -> f64 {
	if max_abs <= 0.0 || !max_abs.is_finite() {
		return 0.0;
	}
	let fraction = value.abs() / max_abs;
	if fraction.is_finite() {
		fraction.min(1.0)
	} else {
		0.0
	}
}

/// Ranked contributions sharing a metadata group.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureGroup {
	/// Group label.
	pub label: String,
	/// Members in rank order.
	pub features: Vec<FeatureContribution>,
}

/// Group `ranked` by metadata group. Groups appear in the order their first
/// member appears; members keep rank order.
pub fn group_by(ranked: &[FeatureContribution], store: &MetadataStore) -> Vec<FeatureGroup> {
	let mut groups: Vec<FeatureGroup> = Vec::new();
	for feature in ranked {
		let label = store.feature_group(&feature.name);
		match groups.iter_mut().find(|g| g.label == label) {
			Some(group) => group.features.push(feature.clone()),
			None => groups.push(FeatureGroup {
				label: label.to_string(),
				features: vec![feature.clone()],
			}),
		}
	}
	groups
}
