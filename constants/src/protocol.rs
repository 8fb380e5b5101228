//! Event type names crossing the host/viewer boundary.

/// Host → viewer: highlight a search result set. Payload `{"points": [...]}`.
pub const HIGHLIGHT_POINTS_LIST: &str = "HighlightPointsList";

/// Host → viewer: select or focus a single point. Payload is the raw name.
pub const SELECT_POINT: &str = "SelectPoint";

/// Host → viewer: drop every highlight and leave search mode.
pub const CLEAR_ALL_HIGHLIGHTS: &str = "ClearAllHighlights";

/// Host → viewer: viewer-local camera reset.
pub const RESET_CAMERA: &str = "ResetCamera";

/// Viewer → host: the scene is built and commands can be delivered.
pub const VIEWER_LOADED: &str = "VIEWER_LOADED";

/// Viewer → host: the user clicked a point marker. Payload is the object name.
pub const POINT_CLICKED: &str = "PointClicked";
