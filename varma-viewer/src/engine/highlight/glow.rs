use bevy::prelude::*;

use crate::constants::render_settings::{
    GLOW_EMISSIVE, GLOW_PULSE_AMPLITUDE, GLOW_PULSE_BASE, GLOW_PULSE_SPEED,
};
use crate::engine::scene::point_markers::{PointGlow, PointMaterials};

/// Emissive multiplier of the glow material at `elapsed_secs`.
pub fn pulse_intensity(elapsed_secs: f32) -> f32 {
    GLOW_PULSE_BASE + (elapsed_secs * GLOW_PULSE_SPEED).sin().abs() * GLOW_PULSE_AMPLITUDE
}

/// Swap between the normal and glow material when a marker's flag changes.
pub fn sync_glow_materials(
    materials: Option<Res<PointMaterials>>,
    mut markers: Query<(&PointGlow, &mut MeshMaterial3d<StandardMaterial>), Changed<PointGlow>>,
) {
    let Some(materials) = materials else {
        return;
    };
    for (glow, mut material) in &mut markers {
        let target = if glow.lit {
            &materials.glow
        } else {
            &materials.normal
        };
        if material.0 != *target {
            material.0 = target.clone();
        }
    }
}

/// Pulse the shared glow material while anything is lit, and restore its
/// base emission once nothing is.
pub fn pulse_glow_material(
    time: Res<Time>,
    materials: Option<Res<PointMaterials>>,
    mut assets: ResMut<Assets<StandardMaterial>>,
    markers: Query<&PointGlow>,
    mut was_pulsing: Local<bool>,
) {
    let Some(materials) = materials else {
        return;
    };
    let any_lit = markers.iter().any(|glow| glow.lit);
    if !any_lit && !*was_pulsing {
        return;
    }
    let Some(glow) = assets.get_mut(&materials.glow) else {
        return;
    };

    glow.emissive = if any_lit {
        GLOW_EMISSIVE * pulse_intensity(time.elapsed_secs())
    } else {
        GLOW_EMISSIVE
    };
    *was_pulsing = any_lit;
}
