//! Host side of the viewer boundary.
//!
//! [`HostBridge`] owns the authoritative [`HighlightState`] and turns host
//! requests into [`ViewerCommand`]s. Commands carry resolved renderer ids, so
//! the viewer's mirror state lands on exactly the same set whatever match
//! policy the host used.
//!
//! The viewer may not be listening yet (or may have reloaded). Commands issued
//! before `VIEWER_LOADED` are dropped; on every `VIEWER_LOADED` the bridge
//! sends `ClearAllHighlights` followed by a snapshot of its current state.

use serde::{Deserialize, Serialize};

use crate::highlight::{HighlightState, Mode, Transition};
use crate::matcher::{MatchPolicy, Matcher};
use crate::normalize::{CanonicalKey, display_label};
use crate::protocol::{Envelope, ViewerCommand, ViewerReport};
use crate::registry::RendererId;

/// Outbound half of the boundary, e.g. `postMessage` into the viewer frame.
pub trait ViewerTransport {
    fn post(&mut self, envelope: &Envelope);
}

/// Collects envelopes in memory. Used by tests and the CLI dry run.
impl ViewerTransport for Vec<Envelope> {
    fn post(&mut self, envelope: &Envelope) {
        self.push(envelope.clone());
    }
}

/// One knowledge-base retrieval hit. Only `name` takes part in matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCandidate {
    pub name: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl PointCandidate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0.0,
            metadata: serde_json::Value::Null,
        }
    }
}

/// A viewer click resolved against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickedPoint {
    pub renderer_id: RendererId,
    pub concept: Option<CanonicalKey>,
    pub label: String,
}

pub struct HostBridge<T: ViewerTransport> {
    matcher: Matcher,
    state: HighlightState,
    transport: T,
    ready: bool,
}

impl<T: ViewerTransport> HostBridge<T> {
    pub fn new(matcher: Matcher, transport: T) -> Self {
        Self {
            matcher,
            state: HighlightState::new(),
            transport,
            ready: false,
        }
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn set_policy(&mut self, policy: MatchPolicy) {
        self.matcher.set_policy(policy);
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Highlight the points named by a retrieval result.
    pub fn highlight_candidates(&mut self, candidates: &[PointCandidate]) -> Transition {
        self.highlight_points(candidates.iter().map(|c| c.name.as_str()))
    }

    /// Resolve `names` and show them as a search result. Unresolved names
    /// are dropped; nothing resolving clears the viewer.
    pub fn highlight_points<I, S>(&mut self, names: I) -> Transition
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = self.matcher.resolve(names);
        let transition = self.state.apply_search_results(ids);

        if self.state.highlighted().is_empty() {
            tracing::info!("search result resolved to no points, clearing viewer");
            self.send(ViewerCommand::ClearAllHighlights);
        } else {
            tracing::info!(
                count = self.state.highlighted().len(),
                "highlighting search result"
            );
            let snapshot = self.search_snapshot();
            self.send(snapshot);
        }
        transition
    }

    /// Select one point by any name the matcher understands.
    pub fn select_point(&mut self, raw: &str) -> Transition {
        let Some(id) = self.matcher.resolve_one(raw) else {
            return Transition::default();
        };
        let transition = self.state.select_single(id.clone());
        self.send(ViewerCommand::SelectPoint(id.as_str().to_string()));
        transition
    }

    pub fn clear_all(&mut self) -> Transition {
        let transition = self.state.clear_all();
        self.send(ViewerCommand::ClearAllHighlights);
        transition
    }

    pub fn reset_camera(&mut self) {
        self.send(ViewerCommand::ResetCamera);
    }

    /// Handle one raw message from the viewer. Returns the resolved point
    /// when the message was a click on a known object.
    pub fn handle_viewer_message(&mut self, json: &str) -> Option<ClickedPoint> {
        match ViewerReport::from_json(json) {
            Ok(report) => self.handle_report(report),
            Err(err) => {
                tracing::error!(%err, "dropping viewer message");
                None
            }
        }
    }

    pub fn handle_report(&mut self, report: ViewerReport) -> Option<ClickedPoint> {
        match report {
            ViewerReport::Loaded => {
                tracing::info!(resync = self.ready, "viewer loaded");
                self.ready = true;
                self.resync();
                None
            }
            ViewerReport::PointClicked(name) => self.handle_click(&name),
        }
    }

    /// Forget readiness, e.g. when the viewer frame is torn down.
    pub fn disconnect(&mut self) {
        self.ready = false;
    }

    fn handle_click(&mut self, name: &str) -> Option<ClickedPoint> {
        let id = self.matcher.resolve_one(name)?;
        let concept = self
            .matcher
            .registry()
            .concept_of(id.as_str())
            .map(|entry| entry.key().clone());
        let label = display_label(id.as_str());

        self.select_point(id.as_str());
        Some(ClickedPoint {
            renderer_id: id,
            concept,
            label,
        })
    }

    fn resync(&mut self) {
        self.send(ViewerCommand::ClearAllHighlights);
        match self.state.mode() {
            Mode::Idle => {}
            Mode::SearchResult => {
                let snapshot = self.search_snapshot();
                self.send(snapshot);
            }
            Mode::SingleSelect => {
                let selected = self.state.highlighted().iter().next().cloned();
                if let Some(id) = selected {
                    self.send(ViewerCommand::SelectPoint(id.as_str().to_string()));
                }
            }
        }
    }

    fn search_snapshot(&self) -> ViewerCommand {
        ViewerCommand::HighlightPointsList(
            self.state
                .highlighted()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        )
    }

    fn send(&mut self, command: ViewerCommand) {
        if !self.ready {
            tracing::debug!(kind = command.kind(), "viewer not ready, command dropped");
            return;
        }
        self.transport.post(&command.to_envelope());
    }
}
