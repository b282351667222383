//! Node-link graph types and projection selectors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from graph projection
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    #[error("unknown projection {0:?} (expected ecm_to_cell, protease_network or cell_to_ecm)")]
    UnknownProjection(String),
}

/// Which collection a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    Ecm,
    Cell,
    Protease,
}

/// A node in an interaction graph. `id` is the entity name and is unique
/// within one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub group: NodeGroup,
    pub label: String,
}

/// A directed link between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub relation: String,
}

/// One projection of the corpus as a node-link graph.
///
/// Node and link order is deterministic (first-seen corpus order); the
/// dashboard uses it for layout seeding and top-N truncation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// The named graph projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    EcmToCell,
    ProteaseNetwork,
    CellToEcm,
}

impl Projection {
    pub const ALL: [Projection; 3] = [
        Projection::EcmToCell,
        Projection::ProteaseNetwork,
        Projection::CellToEcm,
    ];

    /// Wire name used by the API and the dashboard.
    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::EcmToCell => "ecm_to_cell",
            Projection::ProteaseNetwork => "protease_network",
            Projection::CellToEcm => "cell_to_ecm",
        }
    }
}

impl FromStr for Projection {
    type Err = NetworkError;

    // An unknown selector is an error, never a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecm_to_cell" => Ok(Projection::EcmToCell),
            "protease_network" => Ok(Projection::ProteaseNetwork),
            "cell_to_ecm" => Ok(Projection::CellToEcm),
            other => Err(NetworkError::UnknownProjection(other.to_string())),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
