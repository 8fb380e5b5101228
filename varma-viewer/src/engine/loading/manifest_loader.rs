use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::path::SCENE_MANIFEST_PATH;
use crate::constants::render_settings::{GLOW_COLOUR, GLOW_EMISSIVE, MARKER_COLOUR};
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::core::app_state::AppState;
use crate::engine::highlight::dispatcher::HighlightDispatcher;
use crate::engine::scene::point_markers::{PointMaterials, spawn_point_markers};

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
    failure_reported: bool,
}

impl ManifestLoader {
    /// Returns true the first time only, so a failed load is logged once.
    pub fn note_failure(&mut self) -> bool {
        !std::mem::replace(&mut self.failure_reported, true)
    }
}

pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene manifest from {}", SCENE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(SCENE_MANIFEST_PATH));
}

/// Once the manifest is available: create materials, spawn every marker,
/// build the point index, home the camera and enter `Running`. A manifest
/// that fails to load is logged and the viewer stays in `Loading`.
pub fn spawn_scene_when_ready(
    mut commands: Commands,
    mut manifest_loader: ResMut<ManifestLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
    dispatcher: Res<HighlightDispatcher>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = manifest_loader.handle.clone() else {
        return;
    };
    let Some(manifest) = manifests.get(&handle) else {
        if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
            if manifest_loader.note_failure() {
                error!(
                    "Scene manifest {} failed to load: {}",
                    SCENE_MANIFEST_PATH, err
                );
            }
        }
        return;
    };

    let point_materials = PointMaterials {
        mesh: meshes.add(Sphere::new(manifest.marker_radius).mesh().uv(16, 12)),
        normal: materials.add(StandardMaterial {
            base_color: MARKER_COLOUR,
            perceptual_roughness: 0.6,
            ..default()
        }),
        glow: materials.add(StandardMaterial {
            base_color: GLOW_COLOUR,
            emissive: GLOW_EMISSIVE,
            ..default()
        }),
    };

    let index = spawn_point_markers(
        &mut commands,
        manifest,
        &point_materials,
        dispatcher.matcher().registry(),
    );

    if let Some((min, max)) = manifest.bounds() {
        info!("Scene '{}' bounds: {} .. {}", manifest.name, min, max);
    }

    commands.insert_resource(ViewportCamera::from_setup(&manifest.camera));
    commands.insert_resource(point_materials);
    commands.insert_resource(index);

    info!("→ Scene ready, transitioning to Running state");
    next_state.set(AppState::Running);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failure_is_noted_once() {
        let mut loader = ManifestLoader::default();
        assert!(loader.note_failure());
        assert!(!loader.note_failure());
        assert!(!loader.note_failure());
    }
}
