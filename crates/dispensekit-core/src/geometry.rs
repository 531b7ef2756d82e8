//! Geometry primitives for board and work-surface coordinates.
//!
//! Every point that crosses a crate boundary is expressed in millimeters.
//! Unit conversion happens once, at file-import time, and never later.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D location in millimeters.
///
/// Equality is by value. Duplicate physical holes are legal: two points that
/// compare equal are still distinct dispense targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-axis position (mm)
    pub x: f64,
    /// Y-axis position (mm)
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite(),
            "Point coordinates must be finite: x={x}, y={y}"
        );
        Self { x, y }
    }

    /// This point shifted by the given offset
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3}", self.x, self.y)
    }
}

/// Maximum X/Y reach of a point set, measured from the board origin.
///
/// Used to check that a board outline is large enough to contain the holes
/// parsed from a drill file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardExtent {
    /// Largest X coordinate seen (mm)
    pub max_x: f64,
    /// Largest Y coordinate seen (mm)
    pub max_y: f64,
}

impl BoardExtent {
    /// Compute the extent of a point set.
    ///
    /// An empty set yields the zero extent. Negative coordinates never push
    /// the extent below zero; the reach is measured from the origin.
    pub fn from_points(points: &[Point]) -> Self {
        let mut extent = Self::default();
        for point in points {
            if point.x > extent.max_x {
                extent.max_x = point.x;
            }
            if point.y > extent.max_y {
                extent.max_y = point.y;
            }
        }
        extent
    }
}
