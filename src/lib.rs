//! Explainable-AI decision-support dashboard for an air-defense scenario.
//!
//! A Leptos client-side app rendering a causal decision graph, a SHAP-style
//! feature-importance chart and course-of-action data from static payloads.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod components;
pub mod config;
pub mod data;
mod pages;
pub mod theme;

// Top-Level pages
use crate::config::DashboardConfig;
use crate::data::MetadataStore;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("xai-dashboard: logging initialized");
}

/// An app router which renders the dashboard and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	// Shared read-only data for every visualization below.
	provide_context::<&'static MetadataStore>(MetadataStore::builtin());
	provide_context(DashboardConfig::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="XAI Decision Support" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
