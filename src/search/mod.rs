//! Substring search across the corpus
//!
//! Case-insensitive substring matching over component names/roles, cell type
//! names, and the flattened gene and protease lists. Matching is
//! intentionally asymmetric: components match on roles too, cell types only
//! on their name.

use crate::corpus::{CellType, Corpus, EcmComponent};
use serde::{Deserialize, Serialize};

/// A gene symbol paired with the component that carries it. A gene repeated
/// across components yields one hit per component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneHit {
    pub gene: String,
    pub component: String,
}

/// A protease name paired with the component it degrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteaseHit {
    pub protease: String,
    pub component: String,
}

/// Categorized search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub ecm_components: Vec<EcmComponent>,
    pub cell_types: Vec<CellType>,
    pub genes: Vec<GeneHit>,
    pub proteases: Vec<ProteaseHit>,
}

/// Search the corpus for a case-insensitive substring.
///
/// The empty query is the identity filter by contract (everything matches);
/// the explicit check below keeps that independent of substring semantics.
pub fn search(corpus: &Corpus, query: &str) -> SearchResults {
    let needle = query.to_lowercase();
    let matches = |text: &str| needle.is_empty() || text.to_lowercase().contains(&needle);

    let mut results = SearchResults::default();

    for component in corpus.ecm_components() {
        if matches(&component.name) || component.roles.iter().any(|role| matches(role)) {
            results.ecm_components.push(component.clone());
        }
    }

    for cell in corpus.cell_types() {
        if matches(&cell.name) {
            results.cell_types.push(cell.clone());
        }
    }

    for component in corpus.ecm_components() {
        for gene in component.genes.flattened() {
            if matches(gene) {
                results.genes.push(GeneHit {
                    gene: gene.to_string(),
                    component: component.name.clone(),
                });
            }
        }
        for protease in &component.proteases {
            if matches(protease) {
                results.proteases.push(ProteaseHit {
                    protease: protease.clone(),
                    component: component.name.clone(),
                });
            }
        }
    }

    results
}
