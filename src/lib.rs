//! TODO outline - Elm-style live outline of inline markers
//!
//! This crate scans document text for `TODO` and `TK` markers and keeps a
//! clickable outline of their locations in sync with the current document,
//! implementing the Elm Architecture pattern.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod messages;
pub mod model;
pub mod outline;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::OutlineConfig;
pub use host::{DocumentHost, OutlineSurface, ViewId};
pub use messages::{HostEvent, Msg, OutlineMsg};
pub use model::OutlineModel;
pub use outline::{extract_markers, MarkerItem, MarkerKind};
pub use runtime::{OutlineHandle, OutlineRuntime};
