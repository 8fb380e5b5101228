use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::render_settings::MARKER_RADIUS;

/// Home pose of the orbit camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSetup {
    pub focus: [f32; 3],
    pub distance: f32,
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
}

/// One renderer object: a named marker at a body-space position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointPlacement {
    pub id: String,
    pub position: [f32; 3],
}

impl PointPlacement {
    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Scene description loaded from `*.scene.json`. Mirrors the JSON exactly.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    pub name: String,
    pub camera: CameraSetup,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f32,
    pub points: Vec<PointPlacement>,
}

fn default_marker_radius() -> f32 {
    MARKER_RADIUS
}

impl SceneManifest {
    /// Axis-aligned bounds of all markers, `None` for an empty scene.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.points.iter().map(PointPlacement::translation);
        let first = points.next()?;
        let bounds = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "name": "test",
        "camera": { "focus": [0.0, 1.0, 0.0], "distance": 4.0 },
        "points": [
            { "id": "6_Porchai_L", "position": [-0.1, 1.5, 0.05] },
            { "id": "6_Porchai_R", "position": [0.1, 1.2, 0.05] },
            { "id": "6_Porchai_L", "position": [0.0, 0.0, 0.0] }
        ]
    }"#;

    #[test]
    fn parses_with_defaults() {
        let manifest: SceneManifest = serde_json::from_str(MANIFEST).expect("valid manifest");
        assert_eq!(manifest.points.len(), 3);
        assert_eq!(manifest.marker_radius, MARKER_RADIUS);
        assert_eq!(manifest.camera.yaw, 0.0);
    }

    #[test]
    fn bounds_cover_every_point() {
        let manifest: SceneManifest = serde_json::from_str(MANIFEST).expect("valid manifest");
        let (min, max) = manifest.bounds().expect("non-empty scene");
        assert_eq!(min, Vec3::new(-0.1, 0.0, 0.0));
        assert_eq!(max, Vec3::new(0.1, 1.5, 0.05));
    }
}
