//! Static scenario data, payload types and the metadata store.

pub mod metadata;
pub mod payload;
pub mod scenario;
mod tables;
pub mod types;

pub use metadata::{MetadataRecord, MetadataStore};
pub use types::{
	AlternativeOutcome, CoaScenario, CourseOfAction, DagData, FeatureContribution, GraphEdge,
	GraphNode, ScenarioPhase, ShapData, Tab, XaiExplanation,
};
