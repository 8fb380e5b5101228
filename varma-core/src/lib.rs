//! Name reconciliation and highlight synchronisation for the varma point viewer.
//!
//! The knowledge base and the 3D scene name the same anatomical points with
//! different vocabularies. This crate joins them and keeps the viewer's glow
//! state in step with the host.
//!
//! ## Pipeline
//!
//! ```text
//! knowledge-base names
//!   └─> Matcher::resolve()            normalize + registry lookup (+ opt-in fallback)
//!       └─> HighlightState            Idle / SingleSelect / SearchResult
//!           └─> ViewerCommand         {type, payload} envelope
//!               └─> viewer dispatcher glow off, then glow on
//! ```
//!
//! Clicks travel the other way: the viewer reports the raw object name, the
//! host resolves it and re-enters the state machine as a single selection.
//!
//! ## Modules
//!
//! - [`normalize`]: raw name → canonical key
//! - [`registry`]: canonical key → renderer object ids
//! - [`matcher`]: batch resolution with the documented fallback order
//! - [`highlight`]: the highlight state machine and its transitions
//! - [`protocol`]: envelope codec for both directions
//! - [`bridge`]: host-side owner of the state machine with readiness gating

pub mod bridge;
pub mod highlight;
pub mod matcher;
pub mod normalize;
pub mod protocol;
pub mod registry;

pub use bridge::{ClickedPoint, HostBridge, PointCandidate, ViewerTransport};
pub use highlight::{HighlightState, Mode, Transition};
pub use matcher::{MatchOutcome, MatchPolicy, Matcher};
pub use normalize::{CanonicalKey, normalize};
pub use protocol::{Envelope, ProtocolError, ViewerCommand, ViewerReport};
pub use registry::{AliasEntry, AliasRegistry, RegistryError, RendererId};
