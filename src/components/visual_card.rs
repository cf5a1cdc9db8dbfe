//! Card container shared by the visualizations.

use leptos::prelude::*;

/// Titled card wrapping one visualization. `accent` selects the CSS color
/// variant (`card-accent-{accent}`).
#[component]
pub fn VisualCard(
	#[prop(into)] title: String,
	#[prop(into)] accent: String,
	children: Children,
) -> impl IntoView {
	view! {
		<section class=format!("visual-card card-accent-{accent}")>
			<h3 class="visual-card-title">{title}</h3>
			{children()}
		</section>
	}
}
