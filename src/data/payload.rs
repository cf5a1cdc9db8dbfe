//! Loading an explanation payload embedded in the host page.

use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use super::scenario;
use super::types::XaiExplanation;

/// Id of the `<script type="application/json">` element carrying the payload.
pub const PAYLOAD_ELEMENT_ID: &str = "xai-explanation";

/// Failure to read an embedded explanation.
#[derive(Debug, Error)]
pub enum PayloadError {
	/// Not running in a browser page.
	#[error("no browser document available")]
	NoDocument,
	/// The page carries no payload element.
	#[error("no element with id `{0}`")]
	Missing(&'static str),
	/// The element exists but is not a `<script>`.
	#[error("element `{0}` is not a script element")]
	NotScript(&'static str),
	/// The script text could not be read.
	#[error("could not read payload text")]
	Unreadable,
	/// The payload is not a valid explanation.
	#[error("invalid explanation payload: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Deserialize an explanation from JSON text.
pub fn parse_explanation(json: &str) -> Result<XaiExplanation, PayloadError> {
	Ok(serde_json::from_str(json)?)
}

/// Read the explanation embedded in the page.
pub fn load_explanation() -> Result<XaiExplanation, PayloadError> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(PayloadError::NoDocument)?;
	let element = document
		.get_element_by_id(PAYLOAD_ELEMENT_ID)
		.ok_or(PayloadError::Missing(PAYLOAD_ELEMENT_ID))?;
	let script: HtmlScriptElement = element
		.dyn_into()
		.map_err(|_| PayloadError::NotScript(PAYLOAD_ELEMENT_ID))?;
	let text = script.text().map_err(|_| PayloadError::Unreadable)?;
	parse_explanation(&text)
}

/// The page's explanation if it has a valid one, the bundled one otherwise.
pub fn explanation_or_builtin() -> XaiExplanation {
	match load_explanation() {
		Ok(explanation) => {
			info!("payload: loaded explanation from page");
			explanation
		}
		Err(PayloadError::Missing(_)) => {
			info!("payload: none embedded, using bundled scenario");
			scenario::explanation()
		}
		Err(e) => {
			warn!("payload: {e}; using bundled scenario");
			scenario::explanation()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_error_is_reported() {
		let err = parse_explanation("{\"response\": 1}").unwrap_err();
		assert!(matches!(err, PayloadError::Parse(_)));
		assert!(err.to_string().starts_with("invalid explanation payload"));
	}

	#[test]
	fn parses_minimal_payload() {
		let explanation = parse_explanation(
			r#"{
				"response": "r",
				"insight": {"text": "i"},
				"reasoning": {"text": "why", "shap": {"A": 0.2, "B": -0.3}},
				"projection": {"text": "p"},
				"confidence": 60
			}"#,
		)
		.unwrap();
		assert_eq!(explanation.confidence, Some(60.0));
		assert_eq!(explanation.reasoning.shap.unwrap().len(), 2);
	}

	#[test]
	fn fractional_confidence_keeps_the_payload() {
		let explanation = parse_explanation(
			r#"{
				"response": "r",
				"insight": {"text": "i"},
				"reasoning": {"text": "why", "dag": {"nodes": [{"id": "a", "label": "A"}], "edges": []}},
				"projection": {"text": "p"},
				"confidence": 87.5
			}"#,
		)
		.unwrap();
		assert_eq!(explanation.confidence, Some(87.5));
		assert!(explanation.reasoning.dag.is_some());
	}

	#[test]
	fn missing_element_message_names_id() {
		assert_eq!(
			PayloadError::Missing(PAYLOAD_ELEMENT_ID).to_string(),
			"no element with id `xai-explanation`"
		);
	}
}
