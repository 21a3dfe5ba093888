//! Common utilities for the Quill crates.
//!
//! This crate provides shared infrastructure used by the selector builder
//! and the object helpers:
//! - **Warning System** - colored, deduplicated stderr diagnostics

pub mod warning;

pub use warning::{clear_warnings, set_enabled, warn_once, warnings_emitted};
