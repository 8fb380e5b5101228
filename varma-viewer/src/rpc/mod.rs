//! Host page messaging for the embedded viewer.
//!
//! The viewer runs in an iframe. The host page talks to it with one-way
//! `{"type", "payload"}` envelopes over `postMessage`:
//!
//! ```text
//! Host page (parent window)            Viewer (iframe)
//!        │                                    │
//!        │ <──────────────── VIEWER_LOADED ───┤  once, after the scene is built
//!        ├─ HighlightPointsList / SelectPoint ─>│
//!        ├─ ClearAllHighlights / ResetCamera ─>│
//!        │ <───────────────── PointClicked ───┤  raw object name
//! ```
//!
//! Incoming strings are queued by a JS `message` listener and decoded once
//! per frame into [`HostCommandEvent`]s, but only after the viewer is
//! `Running`; until then they stay queued. Reports are posted to the parent
//! at the end of the frame.
//!
//! [`HostCommandEvent`]: crate::engine::highlight::dispatcher::HostCommandEvent

/// Message queue, outbox and the `postMessage` bridge.
pub mod web_messages;
