//! Single-item selection owned by one visualization.

use log::debug;

/// Which node or feature, if any, is shown in the detail panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
	/// Nothing is active.
	#[default]
	Unselected,
	/// The node or feature with this id is active.
	Selected(String),
}

impl SelectionState {
	/// Select `id`, replacing any previous selection.
	pub fn select(&mut self, id: impl Into<String>) {
		let id = id.into();
		if self.active() != Some(id.as_str()) {
			debug!("selection: {:?} -> {id}", self.active());
		}
		*self = SelectionState::Selected(id);
	}

	/// Clear the selection.
	pub fn deselect(&mut self) {
		if let SelectionState::Selected(id) = self {
			debug!("selection: {id} cleared");
		}
		*self = SelectionState::Unselected;
	}

	/// Id of the active item.
	pub fn active(&self) -> Option<&str> {
		match self {
			SelectionState::Unselected => None,
			SelectionState::Selected(id) => Some(id),
		}
	}

	/// True when `id` is the active item.
	pub fn is_selected(&self, id: &str) -> bool {
		self.active() == Some(id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_unselected() {
		let state = SelectionState::default();
		assert_eq!(state, SelectionState::Unselected);
		assert_eq!(state.active(), None);
	}

	#[test]
	fn select_replaces_then_deselect_clears() {
		let mut state = SelectionState::default();
		state.select("p");
		assert_eq!(state, SelectionState::Selected("p".into()));
		state.select("q");
		assert_eq!(state, SelectionState::Selected("q".into()));
		assert!(!state.is_selected("p"));
		state.deselect();
		assert_eq!(state, SelectionState::Unselected);
	}

	#[test]
	fn select_is_idempotent() {
		let mut state = SelectionState::default();
		state.select("p");
		state.select("p");
		assert!(state.is_selected("p"));
	}

	#[test]
	fn deselect_from_unselected_is_noop() {
		let mut state = SelectionState::default();
		state.deselect();
		assert_eq!(state, SelectionState::Unselected);
	}
}
