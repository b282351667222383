//! Corpus construction and validation
//!
//! The corpus is loaded once per process (bundled data or two JSON files) and
//! is immutable afterwards; every derived structure is computed from a shared
//! reference. A failed load is terminal: no partial corpus is ever produced.

use super::types::{CellType, EcmComponent};
use rust_embed::RustEmbed;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Corpus data compiled into the binary for static mode.
#[derive(RustEmbed)]
#[folder = "data/"]
struct BundledData;

const ECM_ASSET: &str = "ecm_components.json";
const CELL_TYPES_ASSET: &str = "cell_types.json";

/// Errors that can occur while loading the corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read {0}")]
    Io(String, #[source] std::io::Error),

    #[error("failed to parse {0}")]
    Parse(String, #[source] serde_json::Error),

    #[error("{0} record at index {1} has an empty name")]
    EmptyName(&'static str, usize),

    #[error("duplicate {0} name {1:?}")]
    DuplicateName(&'static str, String),

    #[error("bundled asset {0} is missing from the binary")]
    MissingAsset(&'static str),
}

pub type CorpusResult<T> = Result<T, CorpusError>;

#[derive(Debug, Deserialize)]
struct EcmDocument {
    #[serde(default)]
    ecm_components: Vec<EcmComponent>,
}

#[derive(Debug, Deserialize)]
struct CellTypeDocument {
    #[serde(default)]
    cell_types: Vec<CellType>,
}

/// The full in-memory record set for one session.
///
/// Fields are private so the corpus stays read-only after construction;
/// all aggregation, graph building and search take `&Corpus`.
#[derive(Debug, Clone)]
pub struct Corpus {
    ecm_components: Vec<EcmComponent>,
    cell_types: Vec<CellType>,
}

impl Corpus {
    /// Build a corpus from already-parsed records, validating names.
    pub fn new(
        ecm_components: Vec<EcmComponent>,
        cell_types: Vec<CellType>,
    ) -> CorpusResult<Self> {
        validate_names("ECM component", ecm_components.iter().map(|c| c.name.as_str()))?;
        validate_names("cell type", cell_types.iter().map(|c| c.name.as_str()))?;
        Ok(Corpus {
            ecm_components,
            cell_types,
        })
    }

    /// Parse the two top-level JSON documents
    /// (`{"ecm_components": [...]}` and `{"cell_types": [...]}`).
    pub fn from_json(ecm_json: &str, cell_types_json: &str) -> CorpusResult<Self> {
        let ecm: EcmDocument = serde_json::from_str(ecm_json)
            .map_err(|e| CorpusError::Parse(ECM_ASSET.to_string(), e))?;
        let cells: CellTypeDocument = serde_json::from_str(cell_types_json)
            .map_err(|e| CorpusError::Parse(CELL_TYPES_ASSET.to_string(), e))?;
        Corpus::new(ecm.ecm_components, cells.cell_types)
    }

    /// Load the corpus from two JSON files on disk.
    pub fn from_files(
        ecm_path: impl AsRef<Path>,
        cell_types_path: impl AsRef<Path>,
    ) -> CorpusResult<Self> {
        let ecm_json = read_file(ecm_path.as_ref())?;
        let cell_types_json = read_file(cell_types_path.as_ref())?;
        Corpus::from_json(&ecm_json, &cell_types_json)
    }

    /// Load the corpus bundled into the binary (static mode, no I/O).
    pub fn bundled() -> CorpusResult<Self> {
        let ecm = embedded_asset(ECM_ASSET)?;
        let cells = embedded_asset(CELL_TYPES_ASSET)?;
        Corpus::from_json(&ecm, &cells)
    }

    pub fn ecm_components(&self) -> &[EcmComponent] {
        &self.ecm_components
    }

    pub fn cell_types(&self) -> &[CellType] {
        &self.cell_types
    }

    /// Look up a component by name, case-insensitively.
    pub fn find_ecm_component(&self, name: &str) -> Option<&EcmComponent> {
        self.ecm_components
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Look up a cell type by name, case-insensitively.
    pub fn find_cell_type(&self, name: &str) -> Option<&CellType> {
        self.cell_types
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

fn validate_names<'a>(
    collection: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> CorpusResult<()> {
    let mut seen = FxHashSet::default();
    for (index, name) in names.enumerate() {
        if name.is_empty() {
            return Err(CorpusError::EmptyName(collection, index));
        }
        if !seen.insert(name) {
            return Err(CorpusError::DuplicateName(collection, name.to_string()));
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> CorpusResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| CorpusError::Io(path.display().to_string(), e))
}

fn embedded_asset(name: &'static str) -> CorpusResult<String> {
    let file = BundledData::get(name).ok_or(CorpusError::MissingAsset(name))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|_| CorpusError::MissingAsset(name))
}
