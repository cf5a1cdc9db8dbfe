//! SHAP-style feature-importance chart.

mod component;
pub mod ranker;

pub use component::ShapVisual;
pub use ranker::{Direction, FeatureGroup};
