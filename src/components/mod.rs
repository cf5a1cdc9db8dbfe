//! Dashboard components.

pub mod coa;
pub mod dag;
pub mod detail_panel;
pub mod explanation;
pub mod selection;
pub mod shap;
pub mod timeline;
pub mod visual_card;
