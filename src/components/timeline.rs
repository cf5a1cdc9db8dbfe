//! Mission phase timeline.

use leptos::prelude::*;

use crate::components::visual_card::VisualCard;
use crate::data::ScenarioPhase;

/// Mission phases in order; the last one is the current phase.
#[component]
pub fn MissionTimeline(phases: Vec<ScenarioPhase>) -> impl IntoView {
	let current = phases.len().checked_sub(1);
	let items = phases
		.into_iter()
		.enumerate()
		.map(|(i, phase)| {
			let actions = phase
				.actions
				.into_iter()
				.map(|action| view! { <li class="timeline-action">{action}</li> })
				.collect_view();
			view! {
				<li class="timeline-phase" class:current={Some(i) == current}>
					<span class="timeline-phase-name">{phase.phase}</span>
					<ol class="timeline-actions">{actions}</ol>
				</li>
			}
		})
		.collect_view();

	view! {
		<VisualCard title="Mission Timeline" accent="timeline">
			<ol class="timeline">{items}</ol>
		</VisualCard>
	}
}
