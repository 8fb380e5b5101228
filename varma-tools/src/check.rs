//! Scene manifest vs. registry consistency.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use varma_core::AliasRegistry;

use crate::manifest::SceneManifest;

/// Everything that would make highlighting silently miss.
#[derive(Debug, Default, PartialEq)]
pub struct SceneReport {
    /// Scene objects no registry concept points at. They can never glow.
    pub unregistered: Vec<String>,
    /// Registry ids with no object in the scene. Resolving to them lights nothing.
    pub missing: Vec<String>,
    /// Ids placed more than once; the viewer keeps the first.
    pub duplicates: Vec<String>,
}

impl SceneReport {
    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }

    pub fn problem_count(&self) -> usize {
        self.unregistered.len() + self.missing.len() + self.duplicates.len()
    }
}

pub fn check_scene(manifest: &SceneManifest, registry: &AliasRegistry) -> SceneReport {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for point in &manifest.points {
        if !seen.insert(point.id.as_str()) {
            duplicates.insert(point.id.clone());
        }
    }

    let unregistered: BTreeSet<String> = seen
        .iter()
        .filter(|id| !registry.contains_renderer_id(id))
        .map(|id| id.to_string())
        .collect();

    let missing: Vec<String> = registry
        .entries()
        .iter()
        .flat_map(|entry| entry.renderer_ids())
        .filter(|id| !seen.contains(id.as_str()))
        .map(|id| id.to_string())
        .collect();

    SceneReport {
        unregistered: unregistered.into_iter().collect(),
        missing,
        duplicates: duplicates.into_iter().collect(),
    }
}

impl fmt::Display for SceneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "Scene matches the registry");
        }
        for (title, ids) in [
            ("Not in registry", &self.unregistered),
            ("Missing from scene", &self.missing),
            ("Duplicated in scene", &self.duplicates),
        ] {
            if ids.is_empty() {
                continue;
            }
            writeln!(f, "{title} ({}):", ids.len())?;
            for id in ids {
                writeln!(f, "  {id}")?;
            }
        }
        Ok(())
    }
}
