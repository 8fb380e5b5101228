use bevy::prelude::*;
use std::collections::HashMap;
use varma_core::{AliasRegistry, RendererId};

use crate::engine::assets::scene_manifest::SceneManifest;

/// A clickable renderer object. `id` is the scene object name.
#[derive(Component, Debug, Clone)]
pub struct VarmaPoint {
    pub id: RendererId,
}

/// Glow flag driven by the highlight dispatcher.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointGlow {
    pub lit: bool,
}

/// Renderer id → marker entity, built once when the scene is spawned.
#[derive(Resource, Debug, Default)]
pub struct PointIndex {
    by_id: HashMap<RendererId, Entity>,
}

impl PointIndex {
    pub fn get(&self, id: &str) -> Option<Entity> {
        self.by_id.get(id).copied()
    }

    pub fn insert(&mut self, id: RendererId, entity: Entity) -> bool {
        match self.by_id.entry(id) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(entity);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Shared marker mesh and the two materials every marker swaps between.
/// The glow material is shared so one pulse update animates all lit markers.
#[derive(Resource, Debug, Clone, Default)]
pub struct PointMaterials {
    pub mesh: Handle<Mesh>,
    pub normal: Handle<StandardMaterial>,
    pub glow: Handle<StandardMaterial>,
}

/// Spawn one marker per manifest entry and index them by id.
/// Duplicate ids keep their first placement.
pub fn spawn_point_markers(
    commands: &mut Commands,
    manifest: &SceneManifest,
    materials: &PointMaterials,
    registry: &AliasRegistry,
) -> PointIndex {
    let mut index = PointIndex::default();

    for placement in &manifest.points {
        let id = RendererId::new(placement.id.as_str());
        if index.get(id.as_str()).is_some() {
            warn!("Duplicate scene object '{}' ignored", id);
            continue;
        }
        if registry.concept_of(id.as_str()).is_none() {
            warn!("Scene object '{}' is not mapped to any point concept", id);
        }

        let entity = commands
            .spawn((
                Name::new(placement.id.clone()),
                VarmaPoint { id: id.clone() },
                PointGlow::default(),
                Mesh3d(materials.mesh.clone()),
                MeshMaterial3d(materials.normal.clone()),
                Transform::from_translation(placement.translation()),
            ))
            .id();
        index.insert(id, entity);
    }

    info!(
        "Spawned {} point markers for scene '{}'",
        index.len(),
        manifest.name
    );
    index
}
