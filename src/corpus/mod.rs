//! Corpus data model and loader
//!
//! This module implements the immutable in-memory corpus:
//! - ECM component records with the heterogeneous `genes` field
//! - Cell type records with nested productions, degrading factors and receptors
//! - JSON loading (bundled or from files) with load-time name validation

pub mod loader;
pub mod types;

// Re-export main types
pub use loader::{Corpus, CorpusError, CorpusResult};
pub use types::{
    CellType, DegradingFactor, EcmComponent, Genes, ProducedComponent, Receptor, ReceptorCategory,
};
