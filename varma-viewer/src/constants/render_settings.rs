use bevy::prelude::*;

pub const MARKER_RADIUS: f32 = 0.018;
pub const MARKER_COLOUR: Color = Color::srgb(0.86, 0.74, 0.58);
pub const GLOW_COLOUR: Color = Color::srgb(1.0, 0.62, 0.16);
pub const GLOW_EMISSIVE: LinearRgba = LinearRgba::rgb(1.0, 0.42, 0.04);

/// Glow intensity is `GLOW_PULSE_BASE + |sin(t * GLOW_PULSE_SPEED)| * GLOW_PULSE_AMPLITUDE`.
pub const GLOW_PULSE_SPEED: f32 = 3.0;
pub const GLOW_PULSE_BASE: f32 = 1.5;
pub const GLOW_PULSE_AMPLITUDE: f32 = 1.5;

pub const CAMERA_MIN_DISTANCE: f32 = 0.8;
pub const CAMERA_MAX_DISTANCE: f32 = 15.0;
pub const CAMERA_ZOOM_STEP: f32 = 0.6;
pub const CAMERA_ZOOM_SMOOTHING: f32 = 10.0;
pub const CAMERA_ORBIT_SENSITIVITY: f32 = 0.006;
pub const CAMERA_PAN_SENSITIVITY: f32 = 0.0015;
pub const CAMERA_KEYBOARD_PAN_SPEED: f32 = 2.5;
pub const CAMERA_PITCH_LIMIT: f32 = 85.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_NEAR_CLIP: f32 = 0.01;

/// A press that travels further than this is a drag, not a click.
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 15.0;
/// Markers further than this from the cursor on screen are not picked.
pub const PICK_RADIUS_PX: f32 = 24.0;

pub const INFO_PANEL_DURATION_SECS: f32 = 3.0;
pub const INFO_PANEL_OFFSET_PX: Vec2 = Vec2::new(20.0, 20.0);
pub const INFO_PANEL_FONT_SIZE: f32 = 16.0;
