//! Causal decision graph.
//!
//! Nodes sit on a single horizontal lane in payload order, colored by group.
//! Edges are drawn on a canvas behind the nodes; clicking a node selects it,
//! highlights its edges and opens a detail panel, clicking the lane clears
//! the selection.

mod component;
pub mod layout;
mod render;

pub use component::DagVisual;
pub use layout::{GraphLayout, GroupColors, Position};
