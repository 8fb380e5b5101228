//! Scene, camera and highlight systems of the point viewer.
//!
//! ## Frame flow
//!
//! ```text
//! host envelope ──> HostCommandEvent ──┐
//!                                      ├─> dispatch_highlight_events ─> PointGlow on/off
//! click ──────────> PointPickedEvent ──┘        │ (host commands only)  └─> material swap + pulse
//!                                                ├─> FocusPointEvent ──> camera focus, info panel
//!                                                └─> PointClicked ─────> host
//! ```

/// Scene manifest asset loaded from JSON.
pub mod assets;

/// Orbit camera with reset and focus.
pub mod camera;

/// App construction, states and window setup.
pub mod core;

/// Mirror highlight state and the glow visuals it drives.
pub mod highlight;

/// Manifest loading and marker spawning.
pub mod loading;

/// Marker entities and the id → entity index.
pub mod scene;
