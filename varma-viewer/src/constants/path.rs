/// Scene manifest listing every renderer object, relative to the asset root.
pub const SCENE_MANIFEST_PATH: &str = "scene/varma_points.scene.json";

/// Extension registered with the JSON asset loader for scene manifests.
pub const SCENE_MANIFEST_EXTENSION: &str = "scene.json";
