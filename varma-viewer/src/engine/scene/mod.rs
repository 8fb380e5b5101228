//! Renderer objects in the scene.

/// Marker components, shared materials and the [`point_markers::PointIndex`].
pub mod point_markers;
