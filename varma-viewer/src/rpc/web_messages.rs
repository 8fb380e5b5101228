use bevy::prelude::*;
use std::sync::{Arc, Mutex};
use varma_core::{Envelope, ViewerCommand, ViewerReport};

use crate::engine::core::app_state::AppState;
use crate::engine::highlight::dispatcher::HostCommandEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// Host messages held while the scene is still loading. The host resyncs on
/// `VIEWER_LOADED`, so only the newest ones matter.
pub const MAX_PENDING_HOST_MESSAGES: usize = 64;

/// Raw host messages, filled by the `message` listener and drained once per
/// frame. Shared with the JS closure, hence the lock.
#[derive(Resource, Clone, Default)]
pub struct HostMessageQueue(Arc<Mutex<Vec<String>>>);

impl HostMessageQueue {
    /// Append a message, dropping the oldest once the queue is full.
    pub fn push(&self, message: String) {
        match self.0.lock() {
            Ok(mut queue) => {
                if queue.len() >= MAX_PENDING_HOST_MESSAGES {
                    let overflow = queue.len() + 1 - MAX_PENDING_HOST_MESSAGES;
                    queue.drain(..overflow);
                    warn!("Host message queue full, dropped {} oldest", overflow);
                }
                queue.push(message);
            }
            Err(err) => error!("Host message queue poisoned: {}", err),
        }
    }

    pub fn drain(&self) -> Vec<String> {
        self.0
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

/// Reports waiting to be posted to the host.
#[derive(Resource, Debug, Default)]
pub struct ViewerOutbox {
    pending: Vec<ViewerReport>,
    announced: bool,
}

impl ViewerOutbox {
    pub fn report(&mut self, report: ViewerReport) {
        self.pending.push(report);
    }

    /// Queue `VIEWER_LOADED` unless it already went out. Returns whether it
    /// was queued.
    pub fn announce_loaded(&mut self) -> bool {
        if self.announced {
            return false;
        }
        self.announced = true;
        self.pending.push(ViewerReport::Loaded);
        true
    }

    pub fn drain(&mut self) -> Vec<ViewerReport> {
        std::mem::take(&mut self.pending)
    }
}

/// Plugin connecting the viewer to its host page through `postMessage`.
pub struct WebMessagePlugin;

impl Plugin for WebMessagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HostMessageQueue>()
            .init_resource::<ViewerOutbox>()
            .add_event::<HostCommandEvent>()
            .add_systems(
                Update,
                decode_host_messages.run_if(in_state(AppState::Running)),
            )
            .add_systems(Last, send_outgoing_reports);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(queue: Res<HostMessageQueue>) {
    let queue = queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        let data = event.data();
        // Hosts post either the envelope string or the envelope object.
        let message = if let Some(text) = data.as_string() {
            Some(text)
        } else if data.is_object() {
            js_sys::JSON::stringify(&data).ok().map(String::from)
        } else {
            None
        };

        if let Some(message) = message.filter(|m| m.contains("\"type\"")) {
            queue.push(message);
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, host messages disabled");
        return;
    };
    if let Err(err) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", err);
        return;
    }

    // Ownership moves to JS so the listener outlives this system.
    closure.forget();
}

/// Turn queued raw messages into commands. Malformed messages are logged and
/// dropped without touching highlight state.
pub fn decode_host_messages(
    queue: Res<HostMessageQueue>,
    mut commands: EventWriter<HostCommandEvent>,
) {
    for message in queue.drain() {
        match ViewerCommand::from_json(&message) {
            Ok(command) => {
                debug!("Host command: {}", command.kind());
                commands.write(HostCommandEvent { command });
            }
            Err(err) => error!("Dropping host message: {}", err),
        }
    }
}

fn send_outgoing_reports(mut outbox: ResMut<ViewerOutbox>) {
    for report in outbox.drain() {
        send_message_to_parent(&report.to_envelope());
    }
}

/// Post an envelope to the parent window (the host page).
fn send_message_to_parent(envelope: &Envelope) {
    #[cfg(target_arch = "wasm32")]
    {
        let json = envelope.to_json();
        let Some(window) = window() else {
            error!("Window object not available");
            return;
        };
        match window.parent() {
            Ok(Some(parent)) => {
                if let Err(err) = parent.post_message(&JsValue::from_str(&json), "*") {
                    error!("Failed to send message to parent: {:?}", err);
                }
            }
            _ => warn!("No parent window available for message transmission"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("→ host: {}", envelope.to_json());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .add_plugins(WebMessagePlugin);
        app
    }

    fn enter_running(app: &mut App) {
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Running);
        app.update();
    }

    fn decoded(app: &App) -> Vec<ViewerCommand> {
        app.world()
            .resource::<Events<HostCommandEvent>>()
            .iter_current_update_events()
            .map(|e| e.command.clone())
            .collect()
    }

    #[test]
    fn messages_wait_for_running_state() {
        let mut app = app();
        let queue = app.world().resource::<HostMessageQueue>().clone();
        queue.push(r#"{"type":"ClearAllHighlights","payload":""}"#.to_string());

        app.update();
        assert!(decoded(&app).is_empty());

        enter_running(&mut app);
        assert_eq!(decoded(&app), vec![ViewerCommand::ClearAllHighlights]);
    }

    #[test]
    fn queue_keeps_newest_messages_while_loading() {
        let mut app = app();
        let queue = app.world().resource::<HostMessageQueue>().clone();
        for n in 0..MAX_PENDING_HOST_MESSAGES + 10 {
            let message = format!(r#"{{"type":"SelectPoint","payload":"{n}"}}"#);
            queue.push(message);
        }
        app.update();

        enter_running(&mut app);
        let commands = decoded(&app);
        assert_eq!(commands.len(), MAX_PENDING_HOST_MESSAGES);
        assert_eq!(commands[0], ViewerCommand::SelectPoint("10".to_string()));
        let newest = (MAX_PENDING_HOST_MESSAGES + 9).to_string();
        assert_eq!(commands.last(), Some(&ViewerCommand::SelectPoint(newest)));
    }

    #[test]
    fn malformed_messages_are_dropped() {
        let mut app = app();
        enter_running(&mut app);

        let queue = app.world().resource::<HostMessageQueue>().clone();
        queue.push("{broken".to_string());
        queue.push(r#"{"type":"Bogus","payload":""}"#.to_string());
        queue.push(
            r#"{"type":"SelectPoint","payload":"12_AasanKaalam"}"#.to_string(),
        );
        app.update();

        assert_eq!(
            decoded(&app),
            vec![ViewerCommand::SelectPoint("12_AasanKaalam".to_string())]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn loaded_is_announced_once() {
        let mut outbox = ViewerOutbox::default();
        assert!(outbox.announce_loaded());
        assert!(!outbox.announce_loaded());
        assert_eq!(outbox.drain(), vec![ViewerReport::Loaded]);
        assert!(outbox.drain().is_empty());
    }
}
