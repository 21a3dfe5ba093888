//! Shapes and typed JSON helpers for the Quill toolkit.
//!
//! - **Shapes** - [`Rectangle`] and [`Circle`] behind the [`Shape`] trait
//! - **JSON** - [`encode`] any serializable value, then [`decode_as`] it back
//!   into a concrete type so its methods are available again

/// Errors raised by the JSON helpers.
pub mod error;
/// Structural JSON encoding and typed decoding.
pub mod json;
/// Plain geometric shapes.
pub mod shape;

pub use error::{JsonError, Result};
pub use json::{decode_as, decode_value, encode};
pub use shape::{Circle, Rectangle, Shape};
