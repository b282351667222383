//! Corpus statistics

use crate::corpus::Corpus;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Summary statistics for one corpus.
///
/// `total_genes`/`total_proteases` count mentions with duplicates;
/// the unique lists are deduplicated by exact case-sensitive match and
/// sorted so serialized output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStatistics {
    pub total_ecm_components: usize,
    pub total_cell_types: usize,
    pub total_genes: usize,
    pub total_proteases: usize,
    pub unique_gene_count: usize,
    pub unique_protease_count: usize,
    pub unique_genes: Vec<String>,
    pub unique_proteases: Vec<String>,
}

/// Compute statistics in a single linear scan over the component collection.
pub fn compute_statistics(corpus: &Corpus) -> DerivedStatistics {
    let mut total_genes = 0;
    let mut total_proteases = 0;
    let mut unique_genes: FxHashSet<&str> = FxHashSet::default();
    let mut unique_proteases: FxHashSet<&str> = FxHashSet::default();

    for component in corpus.ecm_components() {
        total_genes += component.genes.mention_count();
        unique_genes.extend(component.genes.flattened());

        total_proteases += component.proteases.len();
        unique_proteases.extend(component.proteases.iter().map(String::as_str));
    }

    let mut unique_genes: Vec<String> = unique_genes.into_iter().map(str::to_string).collect();
    unique_genes.sort_unstable();
    let mut unique_proteases: Vec<String> =
        unique_proteases.into_iter().map(str::to_string).collect();
    unique_proteases.sort_unstable();

    DerivedStatistics {
        total_ecm_components: corpus.ecm_components().len(),
        total_cell_types: corpus.cell_types().len(),
        total_genes,
        total_proteases,
        unique_gene_count: unique_genes.len(),
        unique_protease_count: unique_proteases.len(),
        unique_genes,
        unique_proteases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(ecm_json: &str, cell_json: &str) -> Corpus {
        Corpus::from_json(ecm_json, cell_json).unwrap()
    }

    #[test]
    fn test_empty_corpus() {
        let stats = compute_statistics(&corpus("{}", "{}"));
        assert_eq!(stats.total_ecm_components, 0);
        assert_eq!(stats.total_genes, 0);
        assert!(stats.unique_proteases.is_empty());
    }

    #[test]
    fn test_single_component_example() {
        let stats = compute_statistics(&corpus(
            r#"{"ecm_components": [{
                "name": "Aggrecan",
                "roles": ["structural"],
                "genes": ["ACAN"],
                "proteases": ["ADAMTS4", "ADAMTS5"]
            }]}"#,
            "{}",
        ));
        assert_eq!(stats.total_ecm_components, 1);
        assert_eq!(stats.total_cell_types, 0);
        assert_eq!(stats.total_genes, 1);
        assert_eq!(stats.total_proteases, 2);
        assert_eq!(stats.unique_protease_count, 2);
        assert_eq!(stats.unique_proteases, ["ADAMTS4", "ADAMTS5"]);
    }

    #[test]
    fn test_duplicate_mentions_counted_once_in_unique() {
        let stats = compute_statistics(&corpus(
            r#"{"ecm_components": [
                {"name": "Brevican", "genes": ["BCAN"], "proteases": ["ADAMTS4", "MMP9"]},
                {"name": "Neurocan", "genes": ["NCAN", "BCAN"], "proteases": ["MMP9"]}
            ]}"#,
            "{}",
        ));
        assert_eq!(stats.total_genes, 3);
        assert_eq!(stats.unique_gene_count, 2);
        assert_eq!(stats.total_proteases, 3);
        assert_eq!(stats.unique_protease_count, 2);
        assert!(stats.total_genes >= stats.unique_gene_count);
        assert!(stats.total_proteases >= stats.unique_protease_count);
    }

    #[test]
    fn test_categorized_genes_flattened() {
        let stats = compute_statistics(&corpus(
            r#"{"ecm_components": [{
                "name": "Hyaluronan",
                "genes": {"synthases": ["HAS1", "HAS2"], "hyaluronidases": ["HYAL1", "HAS1"]}
            }]}"#,
            "{}",
        ));
        assert_eq!(stats.total_genes, 4);
        assert_eq!(stats.unique_gene_count, 3);
        assert_eq!(stats.unique_genes, ["HAS1", "HAS2", "HYAL1"]);
    }

    #[test]
    fn test_gene_match_is_case_sensitive() {
        let stats = compute_statistics(&corpus(
            r#"{"ecm_components": [
                {"name": "A", "genes": ["Acan"]},
                {"name": "B", "genes": ["ACAN"]}
            ]}"#,
            "{}",
        ));
        assert_eq!(stats.unique_gene_count, 2);
    }

    #[test]
    fn test_fresh_value_per_call() {
        let c = corpus(r#"{"ecm_components": [{"name": "Reelin", "genes": ["RELN"]}]}"#, "{}");
        assert_eq!(compute_statistics(&c), compute_statistics(&c));
    }
}
