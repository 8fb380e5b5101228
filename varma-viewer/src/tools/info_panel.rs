use bevy::prelude::*;
use varma_core::normalize::display_label;

use crate::constants::render_settings::{
    INFO_PANEL_DURATION_SECS, INFO_PANEL_FONT_SIZE, INFO_PANEL_OFFSET_PX,
};
use crate::engine::highlight::dispatcher::FocusPointEvent;
use crate::engine::scene::point_markers::PointIndex;

#[derive(Component)]
pub struct InfoPanel;

#[derive(Component)]
pub struct InfoPanelText;

/// Label of the focused point and how long it stays on screen.
#[derive(Resource, Debug, Default)]
pub struct InfoPanelState {
    label: Option<String>,
    target: Option<Entity>,
    remaining_secs: f32,
}

impl InfoPanelState {
    pub fn show(&mut self, label: String, target: Option<Entity>) {
        self.label = Some(label);
        self.target = target;
        self.remaining_secs = INFO_PANEL_DURATION_SECS;
    }

    /// Count down; returns whether the panel is still visible.
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        if self.label.is_none() {
            return false;
        }
        self.remaining_secs -= delta_secs;
        if self.remaining_secs <= 0.0 {
            self.label = None;
            self.target = None;
            return false;
        }
        true
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

pub fn spawn_info_panel(mut commands: Commands) {
    commands
        .spawn((
            InfoPanel,
            Node {
                position_type: PositionType::Absolute,
                padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.08, 0.85)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                InfoPanelText,
                Text::new(""),
                TextFont {
                    font_size: INFO_PANEL_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn show_info_on_focus(
    mut events: EventReader<FocusPointEvent>,
    index: Option<Res<PointIndex>>,
    mut state: ResMut<InfoPanelState>,
) {
    let Some(event) = events.read().last() else {
        return;
    };
    let target = index.and_then(|index| index.get(event.id.as_str()));
    state.show(display_label(event.id.as_str()), target);
}

/// Count the panel down and keep it next to its point on screen.
pub fn update_info_panel(
    time: Res<Time>,
    mut state: ResMut<InfoPanelState>,
    mut panels: Query<(&mut Node, &mut Visibility), With<InfoPanel>>,
    mut texts: Query<&mut Text, With<InfoPanelText>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    transforms: Query<&GlobalTransform>,
) {
    let visible = state.tick(time.delta_secs());
    let Ok((mut node, mut visibility)) = panels.single_mut() else {
        return;
    };

    if !visible {
        *visibility = Visibility::Hidden;
        return;
    }

    if let Ok(mut text) = texts.single_mut() {
        if let Some(label) = state.label() {
            if text.0 != label {
                text.0 = label.to_string();
            }
        }
    }

    let screen = state.target.and_then(|target| {
        let (camera, camera_transform) = cameras.single().ok()?;
        let world = transforms.get(target).ok()?.translation();
        camera.world_to_viewport(camera_transform, world).ok()
    });
    let position = screen.unwrap_or(Vec2::ZERO) + INFO_PANEL_OFFSET_PX;
    node.left = Val::Px(position.x);
    node.top = Val::Px(position.y);
    *visibility = Visibility::Visible;
}
