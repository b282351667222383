//! Interaction-graph projections
//!
//! Projects the corpus into node-link graphs for the dashboard's
//! force-directed view. The graph JSON is the full contract toward the
//! layout engine; the simulation itself lives client-side and is swappable
//! without touching this module.

pub mod builder;
pub mod types;

pub use builder::build_graph;
pub use types::{GraphLink, GraphNode, InteractionGraph, NetworkError, NodeGroup, Projection};
