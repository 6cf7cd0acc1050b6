//! Runtime module - message loop and timers
//!
//! This module drives the outline outside of tests:
//! - `app` - owns model, host and surface; runs the message loop and
//!   turns timer commands into delayed messages

pub mod app;

pub use app::{OutlineHandle, OutlineRuntime};
