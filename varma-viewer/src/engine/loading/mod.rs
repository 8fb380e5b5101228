//! Scene loading from the JSON manifest to spawned markers.

/// Manifest request, marker spawning and the switch to the running state.
pub mod manifest_loader;
