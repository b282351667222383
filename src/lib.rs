//! Neural ECM Atlas
//!
//! A knowledge base for neural extracellular-matrix biology: ECM components,
//! brain cell types, and the proteases/genes relating them. The corpus is
//! loaded once (bundled JSON or files), stays immutable for the session, and
//! every derived structure is a pure-function projection over it:
//!
//! - [`aggregate`]: corpus statistics and the protease -> targets index
//! - [`network`]: node-link interaction-graph projections for the
//!   force-directed dashboard view
//! - [`search`]: case-insensitive substring search with categorized results
//! - [`http`]: served mode, exposing everything as JSON endpoints plus the
//!   embedded dashboard page
//!
//! ## Example Usage
//!
//! ```rust
//! use ecm_atlas::{compute_statistics, search, build_graph, Corpus, Projection};
//!
//! let corpus = Corpus::from_json(
//!     r#"{"ecm_components": [{
//!         "name": "Aggrecan",
//!         "genes": ["ACAN"],
//!         "proteases": ["ADAMTS4", "ADAMTS5"]
//!     }]}"#,
//!     r#"{"cell_types": [{"name": "Neurons"}]}"#,
//! ).unwrap();
//!
//! let stats = compute_statistics(&corpus);
//! assert_eq!(stats.total_proteases, 2);
//!
//! let graph = build_graph(&corpus, Projection::ProteaseNetwork);
//! assert_eq!(graph.links.len(), 2);
//!
//! let results = search(&corpus, "acan");
//! assert_eq!(results.genes.len(), 1);
//! ```

#![warn(clippy::all)]

pub mod aggregate;
pub mod corpus;
pub mod http;
pub mod network;
pub mod search;

// Re-export main types for convenience
pub use corpus::{
    CellType, Corpus, CorpusError, CorpusResult, DegradingFactor, EcmComponent, Genes,
    ProducedComponent, Receptor, ReceptorCategory,
};

pub use aggregate::{
    compute_protease_index, compute_statistics, DerivedStatistics, ProteaseIndex,
};

pub use network::{
    build_graph, GraphLink, GraphNode, InteractionGraph, NetworkError, NodeGroup, Projection,
};

pub use search::{search, GeneHit, ProteaseHit, SearchResults};

pub use http::{router, HttpServer, ServerConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
