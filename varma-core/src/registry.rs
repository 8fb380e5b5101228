//! Canonical key → renderer object ids.
//!
//! The registry is built once from a fixed table and never mutated. Lookups
//! are exact: a concept key, or an explicitly enumerated spelling override
//! that points at a concept key. Fuzzy matching does not live here.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use constants::aliases::SPELLING_OVERRIDES;
use constants::point_table::POINT_TABLE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::CanonicalKey;

/// Opaque name of one visual object in the viewer scene.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RendererId(String);

impl RendererId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RendererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RendererId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RendererId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One concept and the scene objects rendering it (two for bilateral points).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    key: CanonicalKey,
    renderer_ids: Vec<RendererId>,
}

impl AliasEntry {
    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    /// Renderer ids in table order (left before right).
    pub fn renderer_ids(&self) -> &[RendererId] {
        &self.renderer_ids
    }

    pub fn is_bilateral(&self) -> bool {
        self.renderer_ids.len() == 2
    }
}

/// Serialisable form of a registry, for shipping the table next to the artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryTable {
    pub concepts: Vec<ConceptRecord>,
    #[serde(default)]
    pub overrides: Vec<OverrideRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub key: String,
    pub renderer_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideRecord {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("key `{key}` is not canonical (lowercase letters only, non-empty)")]
    NonCanonicalKey { key: String },
    #[error("concept `{key}` is listed twice")]
    DuplicateKey { key: String },
    #[error("concept `{key}` has {count} renderer ids, expected 1 or 2")]
    RendererIdCount { key: String, count: usize },
    #[error("renderer id `{id}` belongs to both `{first}` and `{second}`")]
    DuplicateRendererId {
        id: String,
        first: String,
        second: String,
    },
    #[error("override `{from}` shadows a concept key")]
    OverrideShadowsKey { from: String },
    #[error("override `{from}` is listed twice")]
    DuplicateOverride { from: String },
    #[error("override `{from}` points at unknown concept `{to}`")]
    DanglingOverride { from: String, to: String },
    #[error("invalid registry table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable lookup table from canonical keys to renderer ids.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    entries: Vec<AliasEntry>,
    by_key: HashMap<CanonicalKey, usize>,
    overrides: BTreeMap<CanonicalKey, usize>,
    by_renderer_id: HashMap<RendererId, usize>,
}

impl AliasRegistry {
    /// Registry with no concepts. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The point table and spelling overrides compiled into the workspace.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::default();
        for concept in POINT_TABLE {
            builder = builder.concept(concept.key, concept.renderer_ids.iter().copied());
        }
        for spelling in SPELLING_OVERRIDES {
            builder = builder.spelling_override(spelling.from, spelling.to);
        }
        builder.build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn from_table(table: &RegistryTable) -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::default();
        for concept in &table.concepts {
            builder = builder.concept(
                &concept.key,
                concept.renderer_ids.iter().map(String::as_str),
            );
        }
        for spelling in &table.overrides {
            builder = builder.spelling_override(&spelling.from, &spelling.to);
        }
        builder.build()
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let table: RegistryTable = serde_json::from_str(json)?;
        Self::from_table(&table)
    }

    pub fn to_table(&self) -> RegistryTable {
        RegistryTable {
            concepts: self
                .entries
                .iter()
                .map(|entry| ConceptRecord {
                    key: entry.key.to_string(),
                    renderer_ids: entry.renderer_ids.iter().map(ToString::to_string).collect(),
                })
                .collect(),
            overrides: self
                .overrides
                .iter()
                .map(|(from, &index)| OverrideRecord {
                    from: from.to_string(),
                    to: self.entries[index].key.to_string(),
                })
                .collect(),
        }
    }

    /// Exact lookup: concept key first, then spelling override.
    pub fn lookup(&self, key: &CanonicalKey) -> Option<&[RendererId]> {
        self.entry(key).map(AliasEntry::renderer_ids)
    }

    /// Exact lookup returning the whole entry.
    pub fn entry(&self, key: &CanonicalKey) -> Option<&AliasEntry> {
        self.by_key
            .get(key)
            .or_else(|| self.overrides.get(key))
            .map(|&index| &self.entries[index])
    }

    /// The concept that owns a renderer id.
    pub fn concept_of(&self, id: &str) -> Option<&AliasEntry> {
        self.by_renderer_id.get(id).map(|&index| &self.entries[index])
    }

    pub fn contains_renderer_id(&self, id: &str) -> bool {
        self.by_renderer_id.contains_key(id)
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    /// Every key an exact lookup accepts, paired with its entry: concept keys
    /// in table order, then overrides in key order.
    pub fn searchable_keys(&self) -> impl Iterator<Item = (&CanonicalKey, &AliasEntry)> {
        self.entries
            .iter()
            .map(|entry| (&entry.key, entry))
            .chain(
                self.overrides
                    .iter()
                    .map(|(from, &index)| (from, &self.entries[index])),
            )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects concepts and overrides, validating everything in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    concepts: Vec<(String, Vec<String>)>,
    overrides: Vec<(String, String)>,
}

impl RegistryBuilder {
    pub fn concept<'a>(
        mut self,
        key: &str,
        renderer_ids: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.concepts.push((
            key.to_string(),
            renderer_ids.into_iter().map(str::to_string).collect(),
        ));
        self
    }

    pub fn spelling_override(mut self, from: &str, to: &str) -> Self {
        self.overrides.push((from.to_string(), to.to_string()));
        self
    }

    pub fn build(self) -> Result<AliasRegistry, RegistryError> {
        let mut registry = AliasRegistry::default();

        for (raw_key, raw_ids) in self.concepts {
            let key = canonical(&raw_key)?;
            if registry.by_key.contains_key(&key) {
                return Err(RegistryError::DuplicateKey { key: raw_key });
            }
            if raw_ids.is_empty() || raw_ids.len() > 2 {
                return Err(RegistryError::RendererIdCount {
                    key: raw_key,
                    count: raw_ids.len(),
                });
            }

            let index = registry.entries.len();
            let mut renderer_ids = Vec::with_capacity(raw_ids.len());
            for raw_id in raw_ids {
                let id = RendererId::new(raw_id);
                if let Some(&owner) = registry.by_renderer_id.get(&id) {
                    let first = if owner == index {
                        raw_key.clone()
                    } else {
                        registry.entries[owner].key.to_string()
                    };
                    return Err(RegistryError::DuplicateRendererId {
                        id: id.to_string(),
                        first,
                        second: raw_key,
                    });
                }
                registry.by_renderer_id.insert(id.clone(), index);
                renderer_ids.push(id);
            }

            registry.by_key.insert(key.clone(), index);
            registry.entries.push(AliasEntry { key, renderer_ids });
        }

        for (raw_from, raw_to) in self.overrides {
            let from = canonical(&raw_from)?;
            let to = canonical(&raw_to)?;
            if registry.by_key.contains_key(&from) {
                return Err(RegistryError::OverrideShadowsKey { from: raw_from });
            }
            if registry.overrides.contains_key(&from) {
                return Err(RegistryError::DuplicateOverride { from: raw_from });
            }
            let Some(&index) = registry.by_key.get(&to) else {
                return Err(RegistryError::DanglingOverride {
                    from: raw_from,
                    to: raw_to,
                });
            };
            registry.overrides.insert(from, index);
        }

        tracing::debug!(
            concepts = registry.entries.len(),
            overrides = registry.overrides.len(),
            renderer_ids = registry.by_renderer_id.len(),
            "alias registry built"
        );
        Ok(registry)
    }
}

fn canonical(raw: &str) -> Result<CanonicalKey, RegistryError> {
    CanonicalKey::parse(raw)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| RegistryError::NonCanonicalKey {
            key: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use pretty_assertions::assert_eq;

    fn key(raw: &str) -> CanonicalKey {
        CanonicalKey::parse(raw).expect("canonical test key")
    }

    #[test]
    fn builtin_table_is_valid() {
        let registry = AliasRegistry::builtin().expect("built-in table must validate");
        assert_eq!(registry.len(), POINT_TABLE.len());
    }

    #[test]
    fn builtin_keys_match_their_renderer_ids() {
        // Every scene object normalizes back to the concept that owns it, so
        // a click on any object lands on the right entry.
        let registry = AliasRegistry::builtin().expect("built-in table");
        for entry in registry.entries() {
            for id in entry.renderer_ids() {
                assert_eq!(&normalize(id.as_str()), entry.key(), "renderer id {id}");
            }
        }
    }

    #[test]
    fn bilateral_lookup_returns_both_sides() {
        let registry = AliasRegistry::builtin().expect("built-in table");
        let ids = registry
            .lookup(&key("porchai"))
            .expect("porchai registered");
        assert_eq!(
            ids,
            &[
                RendererId::new("6_Porchai_L"),
                RendererId::new("6_Porchai_R"),
            ]
        );
    }

    #[test]
    fn override_resolves_to_concept() {
        let registry = AliasRegistry::builtin().expect("built-in table");
        let entry = registry
            .entry(&key("sevikuttri"))
            .expect("override registered");
        assert_eq!(entry.key().as_str(), "sevikutri");
        assert_eq!(
            registry.lookup(&key("pullai")),
            registry.lookup(&key("pallai"))
        );
    }

    #[test]
    fn lookup_is_exact() {
        let registry = AliasRegistry::builtin().expect("built-in table");
        assert!(registry.lookup(&key("porcha")).is_none());
        assert!(registry.lookup(&key("porchaii")).is_none());
    }

    #[test]
    fn concept_of_renderer_id() {
        let registry = AliasRegistry::builtin().expect("built-in table");
        let entry = registry
            .concept_of("63_VishaManibantha_R")
            .expect("known id");
        assert_eq!(entry.key().as_str(), "vishamanibantha");
        assert!(registry.concept_of("63_VishaManibantha").is_none());
    }

    #[test]
    fn rejects_renderer_id_in_two_concepts() {
        let err = AliasRegistry::builder()
            .concept("ani", ["1_Ani"])
            .concept("ami", ["1_Ani"])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateRendererId { ref first, ref second, .. }
                if first == "ani" && second == "ami"
        ));
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(matches!(
            AliasRegistry::builder().concept("Ani", ["1_Ani"]).build(),
            Err(RegistryError::NonCanonicalKey { .. })
        ));
        assert!(matches!(
            AliasRegistry::builder().concept("", ["1_Ani"]).build(),
            Err(RegistryError::NonCanonicalKey { .. })
        ));
        assert!(matches!(
            AliasRegistry::builder().concept("ani", []).build(),
            Err(RegistryError::RendererIdCount { count: 0, .. })
        ));
        assert!(matches!(
            AliasRegistry::builder()
                .concept("ani", ["1_Ani_L", "1_Ani_R", "1_Ani_C"])
                .build(),
            Err(RegistryError::RendererIdCount { count: 3, .. })
        ));
        assert!(matches!(
            AliasRegistry::builder()
                .concept("ani", ["1_Ani"])
                .concept("ani", ["2_Ani"])
                .build(),
            Err(RegistryError::DuplicateKey { .. })
        ));
        assert!(matches!(
            AliasRegistry::builder()
                .concept("ani", ["1_Ani"])
                .spelling_override("ani", "ani")
                .build(),
            Err(RegistryError::OverrideShadowsKey { .. })
        ));
        assert!(matches!(
            AliasRegistry::builder()
                .concept("ani", ["1_Ani"])
                .spelling_override("anni", "amni")
                .build(),
            Err(RegistryError::DanglingOverride { .. })
        ));
    }

    #[test]
    fn table_round_trips_through_json() {
        let registry = AliasRegistry::builtin().expect("built-in table");
        let json = serde_json::to_string(&registry.to_table()).expect("serialize");
        let reloaded = AliasRegistry::from_json(&json).expect("reload");
        assert_eq!(reloaded.to_table(), registry.to_table());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            AliasRegistry::from_json("{\"concepts\": 3}"),
            Err(RegistryError::Json(_))
        ));
    }
}
