//! # Dispensekit Core
//!
//! Core geometry and unit types for Dispensekit.
//! Provides the fundamental data model shared by every crate:
//! - 2D points on a board or work surface (always millimeters)
//! - Bounding extents of parsed boards
//! - Measurement units declared by imported coordinate files

pub mod geometry;
pub mod units;

pub use geometry::{BoardExtent, Point};
pub use units::Units;
