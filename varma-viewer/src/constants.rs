//! Viewer tuning values and asset locations.

pub mod path;
pub mod render_settings;
