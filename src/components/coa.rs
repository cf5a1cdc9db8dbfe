//! Course-of-action comparison cards.

use leptos::prelude::*;

use crate::components::visual_card::VisualCard;
use crate::data::{CoaScenario, CourseOfAction};

/// Courses of action by descending recommendation score. Equal scores keep
/// scenario order.
pub fn by_recommendation(courses: &[CourseOfAction]) -> Vec<&CourseOfAction> {
	let mut ranked: Vec<&CourseOfAction> = courses.iter().collect();
	ranked.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));
	ranked
}

/// Score bar length as a fraction of the 100-point scale.
pub fn score_fraction(score: u32) -> f64 {
	(f64::from(score) / 100.0).clamp(0.0, 1.0)
}

/// Course-of-action cards, best recommendation first.
#[component]
pub fn CoaComparison(scenario: CoaScenario) -> impl IntoView {
	let cards = by_recommendation(&scenario.courses_of_action)
		.into_iter()
		.enumerate()
		.map(|(rank, coa)| {
			let bar_style = format!("width: {:.0}%;", score_fraction(coa.recommendation_score) * 100.0);
			view! {
				<article class="coa-card" class:recommended={rank == 0}>
					<header class="coa-header">
						<span class="coa-name">{coa.name.clone()}</span>
						{(rank == 0).then(|| view! { <span class="coa-badge">"Recommended"</span> })}
					</header>
					<p class="coa-summary">{coa.summary.clone()}</p>
					<dl class="coa-attributes">
						<dt>"Risk"</dt>
						<dd>{coa.risk.clone()}</dd>
						<dt>"Reward"</dt>
						<dd>{coa.reward.clone()}</dd>
					</dl>
					<div class="coa-score">
						<div class="coa-score-track">
							<div class="coa-score-bar" style=bar_style></div>
						</div>
						<span class="coa-score-value">{coa.recommendation_score} "/100"</span>
					</div>
				</article>
			}
		})
		.collect_view();

	view! {
		<VisualCard title=scenario.name accent="coa">
			<p class="coa-situation">{scenario.situation}</p>
			<div class="coa-cards">{cards}</div>
		</VisualCard>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::scenario;

	#[test]
	fn bundled_scenario_recommends_intercept() {
		let scenario = scenario::coa_scenario();
		let ids: Vec<&str> = by_recommendation(&scenario.courses_of_action)
			.iter()
			.map(|c| c.id.as_str())
			.collect();
		assert_eq!(ids, ["coa2", "coa3", "coa1"]);
	}

	#[test]
	fn equal_scores_keep_scenario_order() {
		let mut courses = scenario::coa_scenario().courses_of_action;
		for coa in &mut courses {
			coa.recommendation_score = 50;
		}
		let ids: Vec<&str> = by_recommendation(&courses)
			.iter()
			.map(|c| c.id.as_str())
			.collect();
		assert_eq!(ids, ["coa1", "coa2", "coa3"]);
	}

	#[test]
	fn score_fraction_is_clamped() {
		assert_eq!(score_fraction(90), 0.9);
		assert_eq!(score_fraction(0), 0.0);
		assert_eq!(score_fraction(250), 1.0);
	}
}
