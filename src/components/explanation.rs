//! Tabbed explanation panel: insight, reasoning and projection.

use leptos::prelude::*;

use crate::components::dag::DagVisual;
use crate::components::shap::ShapVisual;
use crate::data::{Tab, XaiExplanation};

fn strip_bullet(line: &str) -> &str {
	line.strip_prefix('•').map(str::trim_start).unwrap_or(line)
}

/// Headline and bullet lines of a narrative block. Bullet markers are
/// stripped; blank lines are dropped.
pub fn narrative_lines(text: &str) -> (Option<&str>, Vec<&str>) {
	let mut lines = text
		.lines()
		.map(str::trim)
		.filter(|l| !l.is_empty())
		.peekable();
	let headline = lines.next_if(|l| !l.starts_with('•'));
	(headline, lines.map(strip_bullet).collect())
}

/// Badge text for a confidence percentage, rounded to a whole number.
pub fn confidence_label(percent: f64) -> String {
	format!("{percent:.0}% confidence")
}

fn narrative(text: &str) -> impl IntoView + use<> {
	let (headline, items) = narrative_lines(text);
	let headline = headline.map(|h| view! { <p class="narrative-headline">{h.to_string()}</p> });
	let items = items
		.into_iter()
		.map(|item| view! { <li>{item.to_string()}</li> })
		.collect_view();
	view! {
		<div class="narrative">
			{headline}
			<ul class="narrative-items">{items}</ul>
		</div>
	}
}

/// Explanation with insight, reasoning and projection tabs.
#[component]
pub fn ExplanationPanel(explanation: XaiExplanation) -> impl IntoView {
	let tab = RwSignal::new(explanation.default_tab.unwrap_or_default());

	let tabs = Tab::ALL
		.into_iter()
		.map(|t| {
			view! {
				<button class="tab" class:active=move || tab.get() == t on:click=move |_| tab.set(t)>
					{t.title()}
				</button>
			}
		})
		.collect_view();

	let confidence = explanation
		.confidence
		.filter(|c| c.is_finite())
		.map(|c| view! { <span class="confidence-badge">{confidence_label(c)}</span> });

	let prompts = explanation.suggested_prompts.clone().map(|prompts| {
		let items = prompts
			.into_iter()
			.map(|p| view! { <li class="suggested-prompt">{p}</li> })
			.collect_view();
		view! {
			<div class="suggested-prompts">
				<h4>"Suggested questions"</h4>
				<ul>{items}</ul>
			</div>
		}
	});

	let response = explanation.response.clone();
	let body = move || match tab.get() {
		Tab::Insight => {
			let lime = explanation.insight.lime.clone().map(|factors| {
				let chips = factors
					.into_iter()
					.map(|f| view! { <span class="lime-factor">{f}</span> })
					.collect_view();
				view! { <div class="lime-factors">{chips}</div> }
			});
			view! {
				{narrative(&explanation.insight.text)}
				{lime}
			}
			.into_any()
		}
		Tab::Reasoning => {
			let dag = explanation.reasoning.dag.clone();
			let shap = explanation.reasoning.shap.clone();
			view! {
				{narrative(&explanation.reasoning.text)}
				<DagVisual data=Signal::derive(move || dag.clone()) />
				<ShapVisual data=Signal::derive(move || shap.clone()) />
			}
			.into_any()
		}
		Tab::Projection => {
			let alternatives = explanation.projection.alternatives.clone().map(|alts| {
				alts.into_iter()
					.map(|alt| {
						view! {
							<article class="alternative">
								<h4>{alt.title}</h4>
								<p>{alt.details}</p>
							</article>
						}
					})
					.collect_view()
			});
			view! {
				{narrative(&explanation.projection.text)}
				<div class="alternatives">{alternatives}</div>
			}
			.into_any()
		}
	};

	view! {
		<section class="explanation-panel">
			<header class="explanation-header">
				<h2>{response}</h2>
				{confidence}
			</header>
			<nav class="tabs">{tabs}</nav>
			<div class="tab-body">{body}</div>
			{prompts}
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_headline_and_bullets() {
		let (headline, items) =
			narrative_lines("Summary:\n• First point\n\n•Second point\nplain line");
		assert_eq!(headline, Some("Summary:"));
		assert_eq!(items, ["First point", "Second point", "plain line"]);
	}

	#[test]
	fn bullet_only_text_has_no_headline() {
		let (headline, items) = narrative_lines("• one\n• two");
		assert_eq!(headline, None);
		assert_eq!(items, ["one", "two"]);
	}

	#[test]
	fn confidence_rounds_to_whole_percent() {
		assert_eq!(confidence_label(85.0), "85% confidence");
		assert_eq!(confidence_label(87.4), "87% confidence");
	}

	#[test]
	fn empty_text_is_empty() {
		assert_eq!(narrative_lines("  \n"), (None, Vec::<&str>::new()));
	}
}
