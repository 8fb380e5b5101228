//! Shared tables for the varma point workspace.
//!
//! Everything here is compiled into the artifact: the renderer-side point
//! table, the irregular spelling overrides, the vocabulary tokens the name
//! normalizer strips, and the event type names of the host/viewer protocol.

pub mod aliases;
pub mod point_table;
pub mod protocol;
pub mod vocabulary;
