//! Scene manifest reading for the registry checks.
//!
//! Only the fields the checks need; the viewer owns the full format.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct SceneManifest {
    pub name: String,
    pub points: Vec<ScenePoint>,
}

/// One renderer object placed in the scene.
#[derive(Debug, Deserialize)]
pub struct ScenePoint {
    pub id: String,
    #[allow(dead_code)]
    pub position: [f32; 3],
}

impl SceneManifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading scene manifest {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing scene manifest {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
