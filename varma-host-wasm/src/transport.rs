use varma_core::{Envelope, ViewerTransport};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::HtmlIFrameElement;

use crate::HostError;

/// Posts envelopes into the viewer iframe's window.
pub struct IframeTransport {
    frame: HtmlIFrameElement,
}

impl IframeTransport {
    /// Look up the viewer iframe by element id.
    pub fn find(frame_id: &str) -> Result<Self, HostError> {
        let frame = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(frame_id))
            .and_then(|element| element.dyn_into::<HtmlIFrameElement>().ok())
            .ok_or_else(|| HostError::MissingFrame(frame_id.to_string()))?;
        Ok(Self { frame })
    }
}

impl ViewerTransport for IframeTransport {
    fn post(&mut self, envelope: &Envelope) {
        // The viewer window is gone while the iframe reloads; the bridge
        // resyncs once it reports loaded again.
        let Some(target) = self.frame.content_window() else {
            tracing::warn!(kind = %envelope.kind, "viewer window unavailable, message dropped");
            return;
        };
        if let Err(err) = target.post_message(&JsValue::from_str(&envelope.to_json()), "*") {
            tracing::error!(kind = %envelope.kind, ?err, "failed to post message to viewer");
        }
    }
}
