//! Graph projection builder

use super::types::{GraphLink, GraphNode, InteractionGraph, NodeGroup, Projection};
use crate::corpus::Corpus;
use rustc_hash::FxHashSet;

/// Project the corpus into one node-link graph.
///
/// All three projections share the assembly rules: a node id never appears
/// twice regardless of how many links reference it, referenced names
/// materialize a node even without a backing record (soft references), and
/// duplicate links are kept as-is so every source occurrence is visible.
pub fn build_graph(corpus: &Corpus, projection: Projection) -> InteractionGraph {
    let mut assembler = GraphAssembler::default();
    match projection {
        Projection::EcmToCell => ecm_to_cell(corpus, &mut assembler),
        Projection::ProteaseNetwork => protease_network(corpus, &mut assembler),
        Projection::CellToEcm => cell_to_ecm(corpus, &mut assembler),
    }
    assembler.finish()
}

/// Accumulates nodes and links with first-seen node deduplication.
#[derive(Default)]
struct GraphAssembler {
    nodes: Vec<GraphNode>,
    links: Vec<GraphLink>,
    seen: FxHashSet<String>,
}

impl GraphAssembler {
    fn node(&mut self, id: &str, group: NodeGroup) {
        if self.seen.insert(id.to_string()) {
            self.nodes.push(GraphNode {
                id: id.to_string(),
                group,
                label: id.to_string(),
            });
        }
    }

    fn link(&mut self, source: &str, target: &str, relation: &str) {
        self.links.push(GraphLink {
            source: source.to_string(),
            target: target.to_string(),
            relation: relation.to_string(),
        });
    }

    fn finish(self) -> InteractionGraph {
        InteractionGraph {
            nodes: self.nodes,
            links: self.links,
        }
    }
}

fn ecm_to_cell(corpus: &Corpus, g: &mut GraphAssembler) {
    for component in corpus.ecm_components() {
        g.node(&component.name, NodeGroup::Ecm);
        for cell_name in &component.interacting_cell_types {
            g.node(cell_name, NodeGroup::Cell);
            g.link(&component.name, cell_name, "interacts_with");
        }
    }
}

fn protease_network(corpus: &Corpus, g: &mut GraphAssembler) {
    for component in corpus.ecm_components() {
        for protease in &component.proteases {
            g.node(protease, NodeGroup::Protease);
            g.node(&component.name, NodeGroup::Ecm);
            g.link(protease, &component.name, "degrades");
        }
    }
}

fn cell_to_ecm(corpus: &Corpus, g: &mut GraphAssembler) {
    for cell in corpus.cell_types() {
        g.node(&cell.name, NodeGroup::Cell);
        for produced in &cell.ecm_components_produced {
            g.node(&produced.component, NodeGroup::Ecm);
            g.link(&cell.name, &produced.component, "produces");
        }
        for factor in &cell.ecm_degrading_factors {
            g.node(&factor.factor, NodeGroup::Protease);
            g.link(&cell.name, &factor.factor, "degrades");
        }
        for receptor in cell.receptor_names() {
            g.node(receptor, NodeGroup::Ecm);
            g.link(&cell.name, receptor, "has_receptor");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(ecm_json: &str, cell_json: &str) -> Corpus {
        Corpus::from_json(ecm_json, cell_json).unwrap()
    }

    #[test]
    fn test_ecm_to_cell_links_per_occurrence() {
        // The same cell type listed twice yields two links but one node.
        let graph = build_graph(
            &corpus(
                r#"{"ecm_components": [{
                    "name": "Laminin",
                    "interacting_cell_types": ["Astrocytes", "Neurons", "Astrocytes"]
                }]}"#,
                "{}",
            ),
            Projection::EcmToCell,
        );
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.links.len(), 3);
        let astro_links = graph
            .links
            .iter()
            .filter(|l| l.target == "Astrocytes" && l.relation == "interacts_with")
            .count();
        assert_eq!(astro_links, 2);
    }

    #[test]
    fn test_ecm_to_cell_soft_reference_materializes_node() {
        // "Tanycytes" has no CellType record but still becomes a node.
        let graph = build_graph(
            &corpus(
                r#"{"ecm_components": [{
                    "name": "Tenascin-C",
                    "interacting_cell_types": ["Tanycytes"]
                }]}"#,
                r#"{"cell_types": [{"name": "Astrocytes"}]}"#,
            ),
            Projection::EcmToCell,
        );
        let tanycytes = graph.nodes.iter().find(|n| n.id == "Tanycytes").unwrap();
        assert_eq!(tanycytes.group, NodeGroup::Cell);
    }

    #[test]
    fn test_protease_network_shared_protease() {
        let graph = build_graph(
            &corpus(
                r#"{"ecm_components": [
                    {"name": "Brevican", "proteases": ["MMP9"]},
                    {"name": "Tenascin-R", "proteases": ["MMP9"]}
                ]}"#,
                "{}",
            ),
            Projection::ProteaseNetwork,
        );
        let mmp9_nodes = graph.nodes.iter().filter(|n| n.id == "MMP9").count();
        assert_eq!(mmp9_nodes, 1);
        assert_eq!(
            graph.nodes.iter().find(|n| n.id == "MMP9").unwrap().group,
            NodeGroup::Protease
        );
        let degrades: Vec<_> = graph
            .links
            .iter()
            .filter(|l| l.source == "MMP9" && l.relation == "degrades")
            .map(|l| l.target.as_str())
            .collect();
        assert_eq!(degrades, ["Brevican", "Tenascin-R"]);
    }

    #[test]
    fn test_protease_network_excludes_unmentioned_components() {
        // A component with no proteases contributes nothing here.
        let graph = build_graph(
            &corpus(
                r#"{"ecm_components": [
                    {"name": "Hyaluronan"},
                    {"name": "Aggrecan", "proteases": ["ADAMTS4"]}
                ]}"#,
                "{}",
            ),
            Projection::ProteaseNetwork,
        );
        assert!(graph.nodes.iter().all(|n| n.id != "Hyaluronan"));
        assert_eq!(graph.nodes.len(), 2);
    }

    #[test]
    fn test_cell_to_ecm_three_relations() {
        let graph = build_graph(
            &corpus(
                "{}",
                r#"{"cell_types": [{
                    "name": "Astrocytes",
                    "ecm_components_produced": [
                        {"component": "Brevican", "function": "Perinodal ECM"}
                    ],
                    "ecm_degrading_factors": [
                        {"factor": "MMPs", "function": "Matrix remodelling"}
                    ],
                    "ecm_receptors": [
                        {"category": "Hyaluronan receptors", "receptors": [
                            {"name": "CD44", "function": "Hyaluronan anchoring"}
                        ]}
                    ]
                }]}"#,
            ),
            Projection::CellToEcm,
        );
        let relations: Vec<_> = graph
            .links
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str(), l.relation.as_str()))
            .collect();
        assert_eq!(
            relations,
            [
                ("Astrocytes", "Brevican", "produces"),
                ("Astrocytes", "MMPs", "degrades"),
                ("Astrocytes", "CD44", "has_receptor"),
            ]
        );
    }

    #[test]
    fn test_build_graph_is_idempotent() {
        let c = corpus(
            r#"{"ecm_components": [
                {"name": "Aggrecan", "proteases": ["ADAMTS4"], "interacting_cell_types": ["Neurons"]},
                {"name": "Neurocan", "proteases": ["ADAMTS4", "MMP2"]}
            ]}"#,
            r#"{"cell_types": [{"name": "Neurons"}]}"#,
        );
        for projection in Projection::ALL {
            assert_eq!(build_graph(&c, projection), build_graph(&c, projection));
        }
    }

    #[test]
    fn test_no_dangling_link_endpoints() {
        let c = corpus(
            r#"{"ecm_components": [
                {"name": "Laminin", "proteases": ["MMP2", "Plasmin"],
                 "interacting_cell_types": ["Endothelial cells", "Astrocytes"]}
            ]}"#,
            r#"{"cell_types": [{
                "name": "Microglia",
                "ecm_degrading_factors": [{"factor": "Cathepsin S", "function": "PNN remodelling"}]
            }]}"#,
        );
        for projection in Projection::ALL {
            let graph = build_graph(&c, projection);
            let ids: FxHashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
            assert_eq!(ids.len(), graph.nodes.len(), "duplicate node id");
            for link in &graph.links {
                assert!(ids.contains(link.source.as_str()));
                assert!(ids.contains(link.target.as_str()));
            }
        }
    }
}
