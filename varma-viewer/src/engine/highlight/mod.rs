//! Viewer-side highlight handling.
//!
//! [`dispatcher`] mirrors the host's state machine and flips [`PointGlow`]
//! flags; [`glow`] turns those flags into materials and the emissive pulse.
//!
//! [`PointGlow`]: crate::engine::scene::point_markers::PointGlow

use bevy::prelude::*;

pub mod dispatcher;
pub mod glow;

use dispatcher::{
    FocusPointEvent, HighlightDispatcher, HostCommandEvent, PointPickedEvent, ResetCameraEvent,
    dispatch_highlight_events,
};
use glow::{pulse_glow_material, sync_glow_materials};

use crate::engine::scene::point_markers::PointIndex;

pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HighlightDispatcher>()
            .add_event::<HostCommandEvent>()
            .add_event::<PointPickedEvent>()
            .add_event::<FocusPointEvent>()
            .add_event::<ResetCameraEvent>()
            .add_systems(
                Update,
                (
                    dispatch_highlight_events.run_if(resource_exists::<PointIndex>),
                    sync_glow_materials,
                    pulse_glow_material,
                )
                    .chain(),
            );
    }
}
