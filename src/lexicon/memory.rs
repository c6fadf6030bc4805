//! In-memory sense hierarchy
//!
//! Senses are stored in a flat node vector with FxHashMap indices for word
//! lookup. Hyponym lists are the inverse of the hypernym edges, kept in the
//! order the edges were added.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "synsets": [
//!     { "id": "canine.n.02", "pos": "n", "lemmas": ["canine", "canid"] },
//!     { "id": "dog.n.01", "pos": "n", "lemmas": ["dog", "domestic_dog"],
//!       "hypernyms": ["canine.n.02"] }
//!   ]
//! }
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{LexicalHierarchy, WordClass};
use crate::errors::{QuizError, Result};

/// Handle to a sense stored in an [`InMemoryHierarchy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SenseId(u32);

#[derive(Debug, Clone)]
struct SenseNode {
    name: String,
    lemmas: Vec<String>,
    hypernyms: Vec<u32>,
    hyponyms: Vec<u32>,
}

/// One synset record in the JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub id: String,
    pub pos: WordClass,
    pub lemmas: Vec<String>,
    #[serde(default)]
    pub hypernyms: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct HierarchyFile {
    synsets: Vec<SynsetRecord>,
}

/// A sense hierarchy held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryHierarchy {
    nodes: Vec<SenseNode>,
    /// Sense name -> node ID
    name_to_id: FxHashMap<String, u32>,
    /// (normalized lemma, class) -> node IDs in insertion order
    lemma_index: FxHashMap<(String, WordClass), Vec<u32>>,
}

impl InMemoryHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sense. Re-adding an existing name returns the existing ID.
    pub fn add_sense(&mut self, name: &str, class: WordClass, lemmas: &[&str]) -> SenseId {
        if let Some(&id) = self.name_to_id.get(name) {
            return SenseId(id);
        }

        let id = self.nodes.len() as u32;
        for lemma in lemmas {
            self.lemma_index
                .entry((normalize(lemma), class))
                .or_default()
                .push(id);
        }
        self.name_to_id.insert(name.to_string(), id);
        self.nodes.push(SenseNode {
            name: name.to_string(),
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
            hypernyms: Vec::new(),
            hyponyms: Vec::new(),
        });
        SenseId(id)
    }

    /// Record that `broader` is a hypernym of `narrower`.
    ///
    /// Self-edges, repeated edges and ids not issued by this hierarchy are
    /// ignored.
    pub fn add_hypernym(&mut self, narrower: SenseId, broader: SenseId) {
        let (n, b) = (narrower.0 as usize, broader.0 as usize);
        if n == b || n >= self.nodes.len() || b >= self.nodes.len() {
            return;
        }
        if self.nodes[n].hypernyms.contains(&broader.0) {
            return;
        }
        self.nodes[n].hypernyms.push(broader.0);
        self.nodes[b].hyponyms.push(narrower.0);
    }

    /// Look up a sense by its name (e.g. `"dog.n.01"`)
    pub fn sense_by_name(&self, name: &str) -> Option<SenseId> {
        self.name_to_id.get(name).copied().map(SenseId)
    }

    /// Name of a sense, `None` for an id from another hierarchy
    pub fn name(&self, sense: SenseId) -> Option<&str> {
        self.nodes.get(sense.0 as usize).map(|n| n.name.as_str())
    }

    /// Number of senses
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parse a JSON export
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: HierarchyFile = serde_json::from_str(json)?;
        Self::from_records(&file.synsets)
    }

    /// Load a JSON export from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| QuizError::HierarchyLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Build from synset records. Hypernym references may point forward.
    pub fn from_records(records: &[SynsetRecord]) -> Result<Self> {
        let mut hierarchy = Self::new();
        let ids: Vec<SenseId> = records
            .iter()
            .map(|r| {
                let lemmas: Vec<&str> = r.lemmas.iter().map(String::as_str).collect();
                hierarchy.add_sense(&r.id, r.pos, &lemmas)
            })
            .collect();

        for (record, &id) in records.iter().zip(&ids) {
            for parent in &record.hypernyms {
                let parent_id = hierarchy.sense_by_name(parent).ok_or_else(|| {
                    QuizError::MalformedHierarchy(format!(
                        "{} references unknown hypernym {}",
                        record.id, parent
                    ))
                })?;
                hierarchy.add_hypernym(id, parent_id);
            }
        }

        Ok(hierarchy)
    }

    fn lookup(&self, key: String, class: WordClass) -> Option<&Vec<u32>> {
        self.lemma_index.get(&(key, class))
    }
}

/// Lowercase and use `_` as the multi-word separator
fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

/// Candidate base forms for a plural noun, most specific first
fn noun_base_forms(word: &str) -> Vec<String> {
    let mut forms = Vec::new();
    if let Some(stem) = word.strip_suffix("ies") {
        forms.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        forms.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.ends_with('s') {
            forms.push(stem.to_string());
        }
    }
    forms
}

impl LexicalHierarchy for InMemoryHierarchy {
    type Sense = SenseId;

    fn senses(&self, word: &str, class: WordClass) -> Vec<SenseId> {
        let key = normalize(word);
        if let Some(ids) = self.lookup(key.clone(), class) {
            return ids.iter().copied().map(SenseId).collect();
        }

        if class == WordClass::Noun {
            for base in noun_base_forms(&key) {
                if let Some(ids) = self.lookup(base, class) {
                    return ids.iter().copied().map(SenseId).collect();
                }
            }
        }
        Vec::new()
    }

    fn broader_categories(&self, sense: &SenseId) -> Vec<SenseId> {
        self.nodes
            .get(sense.0 as usize)
            .map(|n| n.hypernyms.iter().copied().map(SenseId).collect())
            .unwrap_or_default()
    }

    fn narrower_terms(&self, sense: &SenseId) -> Vec<SenseId> {
        self.nodes
            .get(sense.0 as usize)
            .map(|n| n.hyponyms.iter().copied().map(SenseId).collect())
            .unwrap_or_default()
    }

    fn surface_form(&self, sense: &SenseId) -> String {
        self.nodes
            .get(sense.0 as usize)
            .and_then(|n| n.lemmas.first().cloned())
            .unwrap_or_default()
    }
}
