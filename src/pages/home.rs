use leptos::prelude::*;

use crate::components::coa::CoaComparison;
use crate::components::explanation::ExplanationPanel;
use crate::components::timeline::MissionTimeline;
use crate::data::{payload, scenario};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let explanation = payload::explanation_or_builtin();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="dashboard">
				<header class="dashboard-header">
					<h1>"XAI Decision Support"</h1>
					<p class="subtitle">"Click a graph node or feature for details."</p>
				</header>
				<div class="dashboard-grid">
					<ExplanationPanel explanation=explanation />
					<aside class="dashboard-side">
						<CoaComparison scenario=scenario::coa_scenario() />
						<MissionTimeline phases=scenario::mission_phases() />
					</aside>
				</div>
			</div>
		</ErrorBoundary>
	}
}
