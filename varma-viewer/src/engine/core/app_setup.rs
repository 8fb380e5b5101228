use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::constants::path::SCENE_MANIFEST_EXTENSION;
use crate::constants::render_settings::CAMERA_NEAR_CLIP;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::viewport_camera::{
    ViewportCamera, camera_controller, focus_camera_on_point, reset_camera_on_request,
};
use crate::engine::core::app_state::{AppState, announce_viewer_loaded};
use crate::engine::core::window_config::create_window_config;
use crate::engine::highlight::HighlightPlugin;
use crate::engine::highlight::dispatcher::dispatch_highlight_events;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, spawn_scene_when_ready, start_loading,
};
use crate::rpc::web_messages::WebMessagePlugin;
use crate::tools::info_panel::{
    InfoPanelState, show_info_on_focus, spawn_info_panel, update_info_panel,
};
use crate::tools::point_picking::{ClickTracker, pick_point_on_click};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::camera::viewport_camera::reset_camera_on_key;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&[
            SCENE_MANIFEST_EXTENSION,
        ]))
        .add_plugins(WebMessagePlugin)
        .add_plugins(HighlightPlugin);

    app.init_resource::<ManifestLoader>()
        .init_resource::<ViewportCamera>()
        .init_resource::<ClickTracker>()
        .init_resource::<InfoPanelState>();

    app.add_systems(Startup, (setup, spawn_info_panel, start_loading).chain())
        .add_systems(
            Update,
            spawn_scene_when_ready.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), announce_viewer_loaded);

    // Markers and the point index only exist once Running.
    app.add_systems(
        Update,
        (
            pick_point_on_click.before(dispatch_highlight_events),
            (
                reset_camera_on_request,
                focus_camera_on_point,
                camera_controller,
            )
                .chain()
                .after(dispatch_highlight_events),
            (show_info_on_focus, update_info_panel)
                .chain()
                .after(dispatch_highlight_events),
        )
            .run_if(in_state(AppState::Running)),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            reset_camera_on_key
                .before(dispatch_highlight_events)
                .run_if(in_state(AppState::Running)),
        );
    }

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
    commands.insert_resource(AmbientLight {
        brightness: 300.0,
        ..default()
    });
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: CAMERA_NEAR_CLIP,
            ..default()
        }),
        ViewportCamera::default().transform(),
    ));
}

fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
