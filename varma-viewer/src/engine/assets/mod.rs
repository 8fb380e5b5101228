//! Data assets consumed by the viewer.

/// Scene manifest: renderer object ids, positions and the camera home pose.
pub mod scene_manifest;
