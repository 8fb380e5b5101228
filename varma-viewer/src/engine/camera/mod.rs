//! Orbit camera around the body model.

pub mod viewport_camera;
