//! Viewport interaction that feeds the highlight layer.
//!
//! ## Click Flow
//!
//! ```text
//! left press ... left release (< drag threshold)
//!   └─> pick_point_on_click()     nearest projected marker within pick radius
//!       └─> PointPickedEvent
//!           └─> dispatch_highlight_events()
//!               ├─> focus camera and info panel
//!               └─> POINT_CLICKED to host ─> SelectPoint echo lights the point
//! ```
//!
//! Drags past the threshold stay with the camera controller as orbit/pan.

/// Label overlay shown next to the focused point for a few seconds.
pub mod info_panel;

/// Screen-space marker picking from mouse clicks.
pub mod point_picking;
