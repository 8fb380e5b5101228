//! Browser binding of the host bridge.
//!
//! The host page owns a [`VarmaHost`] next to the viewer iframe. It feeds
//! knowledge-base results in, forwards the iframe's `message` events and gets
//! click reports back through a callback:
//!
//! ```text
//! const host = new VarmaHost("viewer");
//! window.addEventListener("message", (e) => host.handle_viewer_message(e.data));
//! host.on_point_clicked((point) => showDetails(point.concept));
//! host.highlight_candidates(JSON.stringify(results));
//! ```

mod transport;

use thiserror::Error;
use varma_core::{AliasRegistry, HostBridge, MatchPolicy, Matcher, PointCandidate, RegistryError};
use wasm_bindgen::prelude::*;

pub use transport::IframeTransport;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no viewer iframe with id `{0}`")]
    MissingFrame(String),
    #[error("invalid candidate list: {0}")]
    Candidates(#[source] serde_json::Error),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("point clicked callback failed: {0}")]
    Callback(String),
}

/// Parse a knowledge-base result list. Only `name` is required per entry.
pub fn parse_candidates(json: &str) -> Result<Vec<PointCandidate>, HostError> {
    serde_json::from_str(json).map_err(HostError::Candidates)
}

/// Text of a viewer `message` event: the envelope string itself, or an
/// envelope object serialized back to JSON.
fn message_text(data: &JsValue) -> Option<String> {
    if let Some(text) = data.as_string() {
        return Some(text);
    }
    if data.is_object() {
        return js_sys::JSON::stringify(data).ok().map(String::from);
    }
    None
}

#[wasm_bindgen]
pub struct VarmaHost {
    bridge: HostBridge<IframeTransport>,
    on_point_clicked: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl VarmaHost {
    /// Bind to the viewer iframe with element id `frame_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(frame_id: &str) -> Result<VarmaHost, JsError> {
        let transport = IframeTransport::find(frame_id)?;
        let registry = AliasRegistry::builtin().map_err(HostError::from)?;
        Ok(Self {
            bridge: HostBridge::new(Matcher::new(registry), transport),
            on_point_clicked: None,
        })
    }

    /// Turn the substring fallback on or off for later searches.
    pub fn set_fuzzy(&mut self, enabled: bool) {
        self.bridge.set_policy(if enabled {
            MatchPolicy::WITH_FALLBACK
        } else {
            MatchPolicy::EXACT
        });
    }

    pub fn is_ready(&self) -> bool {
        self.bridge.is_ready()
    }

    /// Highlight a knowledge-base result list given as JSON
    /// (`[{"name": ..., "score": ..., "metadata": ...}]`).
    pub fn highlight_candidates(&mut self, candidates_json: &str) -> Result<(), JsError> {
        let candidates = parse_candidates(candidates_json)?;
        self.bridge.highlight_candidates(&candidates);
        Ok(())
    }

    pub fn highlight_points(&mut self, names: Vec<String>) {
        self.bridge.highlight_points(names);
    }

    pub fn select_point(&mut self, name: &str) {
        self.bridge.select_point(name);
    }

    pub fn clear_all(&mut self) {
        self.bridge.clear_all();
    }

    pub fn reset_camera(&mut self) {
        self.bridge.reset_camera();
    }

    /// Called with `{renderer_id, concept, label}` whenever the user clicks a
    /// point in the viewer.
    pub fn on_point_clicked(&mut self, callback: js_sys::Function) {
        self.on_point_clicked = Some(callback);
    }

    /// Forward the `data` of a `message` event from the viewer. Messages that
    /// are not viewer reports are ignored.
    pub fn handle_viewer_message(&mut self, data: JsValue) -> Result<(), JsError> {
        let Some(json) = message_text(&data) else {
            return Ok(());
        };
        let Some(clicked) = self.bridge.handle_viewer_message(&json) else {
            return Ok(());
        };
        let Some(callback) = &self.on_point_clicked else {
            return Ok(());
        };

        let concept = match &clicked.concept {
            Some(concept) => JsValue::from_str(concept.as_str()),
            None => JsValue::NULL,
        };
        let payload = js_sys::Object::new();
        for (key, value) in [
            ("renderer_id", JsValue::from_str(clicked.renderer_id.as_str())),
            ("concept", concept),
            ("label", JsValue::from_str(&clicked.label)),
        ] {
            js_sys::Reflect::set(&payload, &JsValue::from_str(key), &value)
                .map_err(|err| HostError::Callback(format!("{err:?}")))?;
        }
        callback
            .call1(&JsValue::NULL, &payload)
            .map_err(|err| HostError::Callback(format!("{err:?}")))?;
        Ok(())
    }

    /// Forget readiness, e.g. before reloading the iframe.
    pub fn disconnect(&mut self) {
        self.bridge.disconnect();
    }
}
