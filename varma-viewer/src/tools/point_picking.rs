use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::render_settings::{CLICK_DRAG_THRESHOLD_PX, PICK_RADIUS_PX};
use crate::engine::highlight::dispatcher::PointPickedEvent;
use crate::engine::scene::point_markers::VarmaPoint;

/// Where the left button went down, to tell clicks from orbit drags.
#[derive(Resource, Debug, Default)]
pub struct ClickTracker {
    press_position: Option<Vec2>,
}

/// A press/release pair is a click when the cursor barely moved.
pub fn is_click(press: Vec2, release: Vec2) -> bool {
    press.distance(release) < CLICK_DRAG_THRESHOLD_PX
}

/// Closest candidate to `cursor` in screen space, within `radius` pixels.
pub fn nearest_within<T>(
    cursor: Vec2,
    candidates: impl IntoIterator<Item = (T, Vec2)>,
    radius: f32,
) -> Option<T> {
    candidates
        .into_iter()
        .map(|(item, screen)| (item, screen.distance(cursor)))
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(item, _)| item)
}

/// Report the marker under the cursor on left-button release.
pub fn pick_point_on_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    points: Query<(&VarmaPoint, &GlobalTransform)>,
    mut tracker: ResMut<ClickTracker>,
    mut picked: EventWriter<PointPickedEvent>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        tracker.press_position = Some(cursor);
        return;
    }
    if !mouse_button.just_released(MouseButton::Left) {
        return;
    }
    let Some(press) = tracker.press_position.take() else {
        return;
    };
    if !is_click(press, cursor) {
        return;
    }

    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    // Markers behind the camera fail projection and drop out here.
    let candidates = points.iter().filter_map(|(point, transform)| {
        camera
            .world_to_viewport(camera_transform, transform.translation())
            .ok()
            .map(|screen| (point, screen))
    });

    if let Some(point) = nearest_within(cursor, candidates, PICK_RADIUS_PX) {
        info!("Point clicked: {}", point.id);
        picked.write(PointPickedEvent {
            id: point.id.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_candidate_wins() {
        let candidates = [
            ("far", Vec2::new(110.0, 100.0)),
            ("near", Vec2::new(103.0, 104.0)),
            ("outside", Vec2::new(300.0, 300.0)),
        ];
        assert_eq!(
            nearest_within(Vec2::new(100.0, 100.0), candidates, PICK_RADIUS_PX),
            Some("near")
        );
    }

    #[test]
    fn nothing_within_radius() {
        let candidates = [("a", Vec2::new(200.0, 200.0))];
        assert_eq!(
            nearest_within(Vec2::new(0.0, 0.0), candidates, PICK_RADIUS_PX),
            None
        );
        assert_eq!(
            nearest_within(Vec2::ZERO, Vec::<(&str, Vec2)>::new(), PICK_RADIUS_PX),
            None
        );
    }

    #[test]
    fn drags_are_not_clicks() {
        let press = Vec2::new(50.0, 50.0);
        assert!(is_click(press, Vec2::new(55.0, 52.0)));
        let at_threshold = Vec2::new(50.0, 50.0 + CLICK_DRAG_THRESHOLD_PX);
        assert!(!is_click(press, at_threshold));
        assert!(!is_click(press, Vec2::new(120.0, 40.0)));
    }
}
