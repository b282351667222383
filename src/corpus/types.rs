//! Record types for the ECM corpus
//!
//! The corpus is hand-maintained JSON, so the optional fields here are
//! shape-tolerant: an unexpected shape degrades to an empty contribution
//! instead of failing the whole load.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// The `genes` field of an ECM component.
///
/// Source data carries this in two shapes: a flat list of gene symbols, or a
/// mapping from a sub-category label (e.g. "synthases") to a list of symbols.
/// Anything else present under the key is treated as `Empty`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Genes {
    #[default]
    Empty,
    Flat(Vec<String>),
    Categorized(IndexMap<String, Vec<String>>),
}

impl Genes {
    pub fn is_empty(&self) -> bool {
        match self {
            Genes::Empty => true,
            Genes::Flat(genes) => genes.is_empty(),
            Genes::Categorized(categories) => categories.values().all(|g| g.is_empty()),
        }
    }

    /// Total number of gene mentions, duplicates included.
    pub fn mention_count(&self) -> usize {
        match self {
            Genes::Empty => 0,
            Genes::Flat(genes) => genes.len(),
            Genes::Categorized(categories) => categories.values().map(Vec::len).sum(),
        }
    }

    /// Iterate all gene symbols in deterministic order: flat order for the
    /// flat shape; category insertion order then per-category order for the
    /// categorized shape.
    pub fn flattened(&self) -> impl Iterator<Item = &str> {
        let genes: Vec<&str> = match self {
            Genes::Empty => Vec::new(),
            Genes::Flat(genes) => genes.iter().map(String::as_str).collect(),
            Genes::Categorized(categories) => categories
                .values()
                .flat_map(|genes| genes.iter().map(String::as_str))
                .collect(),
        };
        genes.into_iter()
    }

    fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(entries) => {
                Genes::Flat(string_entries(entries))
            }
            serde_json::Value::Object(categories) => {
                let mut map = IndexMap::new();
                for (category, entry) in categories {
                    if let serde_json::Value::Array(genes) = entry {
                        map.insert(category, string_entries(genes));
                    }
                }
                Genes::Categorized(map)
            }
            _ => Genes::Empty,
        }
    }
}

impl<'de> Deserialize<'de> for Genes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Genes::from_value(value))
    }
}

fn string_entries(entries: Vec<serde_json::Value>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// One extracellular-matrix component record.
///
/// `name` is the node key: non-empty and unique across the collection
/// (enforced at load time). All other fields default to empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcmComponent {
    pub name: String,

    /// Classification label, e.g. "proteoglycan (lectican)".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Functional descriptions, in source order.
    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default, skip_serializing_if = "Genes::is_empty")]
    pub genes: Genes,

    /// Other components/molecules this one binds.
    #[serde(default)]
    pub interaction_partners: Vec<String>,

    /// Receptor molecules recognising this component.
    #[serde(default)]
    pub receptors: Vec<String>,

    /// Cell type names; soft references into the cell-type collection.
    #[serde(default)]
    pub interacting_cell_types: Vec<String>,

    /// Proteolytic enzymes that degrade this component.
    #[serde(default)]
    pub proteases: Vec<String>,
}

/// An ECM component a cell type synthesizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProducedComponent {
    /// Soft reference to an EcmComponent name.
    pub component: String,
    pub function: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genes: Option<Vec<String>>,
}

/// A degradation agent a cell type expresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradingFactor {
    pub factor: String,
    pub function: String,
    /// Source data lists an enzyme as either a bare string or `{"name": ...}`.
    #[serde(default, deserialize_with = "enzyme_names")]
    pub specific_enzymes: Vec<String>,
}

/// One receptor within a receptor category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receptor {
    pub name: String,
    pub function: String,
}

/// A category of ECM receptors expressed by a cell type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceptorCategory {
    pub category: String,
    #[serde(default)]
    pub receptors: Vec<Receptor>,
}

/// One brain cell type record. `name` is non-empty and unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellType {
    pub name: String,

    #[serde(default)]
    pub ecm_components_produced: Vec<ProducedComponent>,

    #[serde(default)]
    pub ecm_degrading_factors: Vec<DegradingFactor>,

    #[serde(default)]
    pub ecm_receptors: Vec<ReceptorCategory>,
}

impl CellType {
    /// Receptor names flattened across all categories, in source order.
    pub fn receptor_names(&self) -> impl Iterator<Item = &str> {
        self.ecm_receptors
            .iter()
            .flat_map(|category| category.receptors.iter().map(|r| r.name.as_str()))
    }
}

fn enzyme_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let mut names = Vec::new();
    if let serde_json::Value::Array(entries) = value {
        for entry in entries {
            match entry {
                serde_json::Value::String(name) => names.push(name),
                serde_json::Value::Object(mut fields) => {
                    if let Some(serde_json::Value::String(name)) = fields.remove("name") {
                        names.push(name);
                    }
                }
                _ => {}
            }
        }
    }
    Ok(names)
}
