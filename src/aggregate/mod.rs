//! Corpus-wide aggregation
//!
//! Pure single-pass derivations over an immutable corpus:
//! - [`compute_statistics`]: totals plus unique gene/protease sets
//! - [`compute_protease_index`]: protease name -> targeted component names
//!
//! Every call produces a fresh value object; nothing here caches or mutates.

pub mod proteases;
pub mod stats;

pub use proteases::{compute_protease_index, ProteaseIndex};
pub use stats::{compute_statistics, DerivedStatistics};
