use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::math::EulerRot;
use bevy::prelude::*;

use crate::constants::render_settings::{
    CAMERA_KEYBOARD_PAN_SPEED, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_ORBIT_SENSITIVITY,
    CAMERA_PAN_SENSITIVITY, CAMERA_PITCH_LIMIT, CAMERA_ZOOM_SMOOTHING, CAMERA_ZOOM_STEP,
};
use crate::engine::assets::scene_manifest::CameraSetup;
use crate::engine::highlight::dispatcher::{FocusPointEvent, ResetCameraEvent};
use crate::engine::scene::point_markers::PointIndex;

#[derive(Debug, Clone, Copy, PartialEq)]
struct CameraPose {
    focus_point: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
}

/// Orbit camera state. The camera sits `distance` away from `focus_point`
/// along the direction given by `yaw`/`pitch`.
#[derive(Resource, Debug, Clone)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub target_distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    home: CameraPose,
}

impl ViewportCamera {
    pub fn new(focus_point: Vec3, distance: f32, yaw: f32, pitch: f32) -> Self {
        let home = CameraPose {
            focus_point,
            distance: clamp_distance(distance),
            yaw,
            pitch: pitch.clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT),
        };
        Self {
            focus_point: home.focus_point,
            distance: home.distance,
            target_distance: home.distance,
            yaw: home.yaw,
            pitch: home.pitch,
            home,
        }
    }

    pub fn from_setup(setup: &CameraSetup) -> Self {
        Self::new(
            Vec3::from_array(setup.focus),
            setup.distance,
            setup.yaw,
            setup.pitch,
        )
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera position for the current orbit.
    pub fn eye(&self) -> Vec3 {
        self.focus_point + self.rotation() * Vec3::Z * self.distance
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).with_rotation(self.rotation())
    }

    /// Back to the pose the scene was loaded with.
    pub fn reset(&mut self) {
        let home = self.home;
        self.focus_point = home.focus_point;
        self.distance = home.distance;
        self.target_distance = home.distance;
        self.yaw = home.yaw;
        self.pitch = home.pitch;
    }

    /// Orbit around `point`, keeping the camera where it is as far as the
    /// distance limits allow.
    pub fn focus_on(&mut self, point: Vec3) {
        let eye = self.eye();
        self.focus_point = point;
        self.distance = clamp_distance(eye.distance(point));
        self.target_distance = self.distance;
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * CAMERA_ORBIT_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * CAMERA_ORBIT_SENSITIVITY)
            .clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    /// Screen-space pan, scaled by distance so it feels the same at any zoom.
    pub fn pan(&mut self, delta: Vec2) {
        let rotation = self.rotation();
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.focus_point +=
            (-right * delta.x + up * delta.y) * CAMERA_PAN_SENSITIVITY * self.distance;
    }

    pub fn zoom(&mut self, steps: f32) {
        self.target_distance = clamp_distance(self.target_distance - steps * CAMERA_ZOOM_STEP);
    }

    /// Ease `distance` towards `target_distance`.
    pub fn settle(&mut self, delta_secs: f32) {
        let t = (CAMERA_ZOOM_SMOOTHING * delta_secs).min(1.0);
        self.distance += (self.target_distance - self.distance) * t;
    }
}

fn clamp_distance(distance: f32) -> f32 {
    distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE)
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, 0.0), 4.0, 0.0, -0.15)
    }
}

/// Left drag orbits, right drag pans, wheel zooms, WASD/QE pans.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let delta = mouse_motion.delta;
    if delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            viewport_camera.orbit(delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            viewport_camera.pan(delta);
        }
    }

    let scroll = match mouse_scroll.unit {
        MouseScrollUnit::Line => mouse_scroll.delta.y,
        MouseScrollUnit::Pixel => mouse_scroll.delta.y * 0.05,
    };
    if scroll.abs() > f32::EPSILON {
        viewport_camera.zoom(scroll);
    }

    let mut move_input = Vec2::ZERO;
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        move_input.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        move_input.x += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp, KeyCode::KeyE]) {
        move_input.y += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown, KeyCode::KeyQ]) {
        move_input.y -= 1.0;
    }
    if move_input != Vec2::ZERO {
        let rotation = viewport_camera.rotation();
        let world_delta = (rotation * Vec3::X) * move_input.x + (rotation * Vec3::Y) * move_input.y;
        viewport_camera.focus_point +=
            world_delta.normalize() * CAMERA_KEYBOARD_PAN_SPEED * time.delta_secs();
    }

    viewport_camera.settle(time.delta_secs());
    *camera_transform = viewport_camera.transform();
}

pub fn reset_camera_on_request(
    mut events: EventReader<ResetCameraEvent>,
    mut viewport_camera: ResMut<ViewportCamera>,
) {
    if events.read().count() > 0 {
        info!("Camera reset");
        viewport_camera.reset();
    }
}

pub fn focus_camera_on_point(
    mut events: EventReader<FocusPointEvent>,
    index: Res<PointIndex>,
    transforms: Query<&GlobalTransform>,
    mut viewport_camera: ResMut<ViewportCamera>,
) {
    // Only the latest focus matters within a frame.
    let Some(event) = events.read().last() else {
        return;
    };
    let Some(entity) = index.get(event.id.as_str()) else {
        return;
    };
    if let Ok(transform) = transforms.get(entity) {
        viewport_camera.focus_on(transform.translation());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reset_camera_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut reset_events: EventWriter<ResetCameraEvent>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        reset_events.write(ResetCameraEvent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn eye_sits_behind_focus() {
        let camera = ViewportCamera::new(Vec3::new(0.0, 1.0, 0.0), 4.0, 0.0, 0.0);
        assert!(close(camera.eye(), Vec3::new(0.0, 1.0, 4.0)));
        // Camera looks down -Z towards the focus point.
        let forward = camera.transform().forward();
        assert!(close(forward.as_vec3(), Vec3::NEG_Z));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = ViewportCamera::default();
        camera.zoom(1000.0);
        assert_eq!(camera.target_distance, CAMERA_MIN_DISTANCE);
        camera.zoom(-1000.0);
        assert_eq!(camera.target_distance, CAMERA_MAX_DISTANCE);

        let far = ViewportCamera::new(Vec3::ZERO, 100.0, 0.0, 0.0);
        assert_eq!(far.distance, CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn pitch_is_limited() {
        let mut camera = ViewportCamera::default();
        camera.orbit(Vec2::new(0.0, 1.0e6));
        assert_eq!(camera.pitch, -CAMERA_PITCH_LIMIT);
    }

    #[test]
    fn focus_keeps_camera_in_place() {
        let mut camera = ViewportCamera::new(Vec3::ZERO, 4.0, 0.0, 0.0);
        camera.focus_on(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(camera.focus_point, Vec3::new(0.0, 0.0, 1.0));
        assert!((camera.distance - 3.0).abs() < 1e-4);
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut camera = ViewportCamera::new(Vec3::new(0.0, 1.0, 0.0), 4.0, 0.3, -0.2);
        camera.orbit(Vec2::new(120.0, -40.0));
        camera.pan(Vec2::new(30.0, 10.0));
        camera.zoom(2.0);
        camera.focus_on(Vec3::new(0.5, 1.5, 0.0));

        camera.reset();
        assert_eq!(camera.focus_point, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(camera.distance, 4.0);
        assert_eq!(camera.target_distance, 4.0);
        assert_eq!(camera.yaw, 0.3);
        assert_eq!(camera.pitch, -0.2);
    }
}
