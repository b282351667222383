//! Protease -> target index

use crate::corpus::Corpus;
use indexmap::IndexMap;

/// Mapping from protease name to the component names it degrades.
///
/// Keys appear in first-seen corpus order and each target list preserves
/// component encounter order; downstream "top N" presentation relies on
/// this for stable tie-breaking.
pub type ProteaseIndex = IndexMap<String, Vec<String>>;

/// Build the protease index in a single pass over the component collection.
///
/// Every protease mention contributes exactly one target entry, so the sum
/// of target-list lengths equals the corpus-wide protease mention count.
pub fn compute_protease_index(corpus: &Corpus) -> ProteaseIndex {
    let mut index = ProteaseIndex::new();
    for component in corpus.ecm_components() {
        for protease in &component.proteases {
            index
                .entry(protease.clone())
                .or_default()
                .push(component.name.clone());
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::compute_statistics;

    #[test]
    fn test_single_component() {
        let corpus = Corpus::from_json(
            r#"{"ecm_components": [{"name": "Aggrecan", "proteases": ["ADAMTS4", "ADAMTS5"]}]}"#,
            "{}",
        )
        .unwrap();
        let index = compute_protease_index(&corpus);
        assert_eq!(index["ADAMTS4"], ["Aggrecan"]);
        assert_eq!(index["ADAMTS5"], ["Aggrecan"]);
    }

    #[test]
    fn test_shared_protease_preserves_corpus_order() {
        let corpus = Corpus::from_json(
            r#"{"ecm_components": [
                {"name": "Brevican", "proteases": ["MMP9"]},
                {"name": "Tenascin-R", "proteases": ["MMP9", "MMP2"]}
            ]}"#,
            "{}",
        )
        .unwrap();
        let index = compute_protease_index(&corpus);
        assert_eq!(index["MMP9"], ["Brevican", "Tenascin-R"]);
        // First-seen key order.
        assert_eq!(index.keys().collect::<Vec<_>>(), ["MMP9", "MMP2"]);
    }

    #[test]
    fn test_target_entries_match_mention_total() {
        let corpus = Corpus::from_json(
            r#"{"ecm_components": [
                {"name": "Aggrecan", "proteases": ["ADAMTS4", "ADAMTS5", "MMP9"]},
                {"name": "Neurocan", "proteases": ["MMP2", "ADAMTS4"]},
                {"name": "Hyaluronan"}
            ]}"#,
            "{}",
        )
        .unwrap();
        let stats = compute_statistics(&corpus);
        let index = compute_protease_index(&corpus);
        let entries: usize = index.values().map(Vec::len).sum();
        assert_eq!(entries, stats.total_proteases);
    }
}
