use bevy::prelude::*;

use crate::rpc::web_messages::ViewerOutbox;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the scene manifest.
    #[default]
    Loading,
    /// Markers spawned and indexed; host commands are processed.
    Running,
}

/// Tell the host the viewer can take commands. Runs on entering `Running`;
/// the outbox makes sure the announcement goes out once per viewer lifetime.
pub fn announce_viewer_loaded(mut outbox: ResMut<ViewerOutbox>) {
    if outbox.announce_loaded() {
        info!("→ Viewer loaded, announcing readiness to host");
    }
}
