//! Application setup and lifecycle.
//!
//! Handles window configuration, plugin wiring and the loading → running
//! transition for both native and WASM targets.

/// App construction: plugins, resources and system scheduling.
pub mod app_setup;

/// Loading/running states and the readiness announcement.
pub mod app_state;

/// Canvas integration for web targets, vsync for both.
pub mod window_config;
