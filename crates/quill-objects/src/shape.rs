//! Plain shapes that survive a JSON round trip.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Anything with a measurable area.
pub trait Shape {
    /// The area of the shape in square units.
    fn area(&self) -> f64;
}

/// An axis-aligned rectangle.
///
/// Serializes as `{"width":..,"height":..}` in that key order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A circle given by its radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Distance from centre to edge.
    pub radius: f64,
}

impl Circle {
    /// Create a circle from its radius.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
