//! Dispense process parameters.
//!
//! One record holds everything the planner needs to know about the work
//! surface, the panel of boards, and the dispensing nozzle. The hosting
//! application updates fields one at a time and persists the record as a flat
//! key/value store (see [`crate::persistence`]).

use serde::{Deserialize, Serialize};

/// Process and geometry parameters for a dispense run.
///
/// Lengths are millimeters, the nozzle temperature is degrees Celsius, the
/// dwell is milliseconds, and the two feeds are millimeters of solder wire
/// pushed or pulled per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispenseParameters {
    /// Work surface width (mm)
    pub work_area_width: f64,
    /// Work surface height (mm)
    pub work_area_height: f64,
    /// Panel offset from the work-surface origin, X (mm)
    pub offset_width: f64,
    /// Panel offset from the work-surface origin, Y (mm)
    pub offset_height: f64,
    /// Single-board outline width (mm)
    pub pcb_outline_width: f64,
    /// Single-board outline height (mm)
    pub pcb_outline_height: f64,
    /// Number of boards across the panel
    pub pcb_count_width: u32,
    /// Number of boards up the panel
    pub pcb_count_height: u32,
    /// Travel height between points (mm)
    pub rest_z: f64,
    /// Dispense height at a point (mm)
    pub nozzle_z: f64,
    /// Nozzle temperature to reach before dispensing (deg C)
    pub nozzle_temp: f64,
    /// Dwell at each point after extruding (ms)
    pub nozzle_hold_duration_ms: f64,
    /// Solder fed at each point (mm)
    pub nozzle_feed_forward: f64,
    /// Solder retracted after each point (mm)
    pub nozzle_feed_backward: f64,
}

impl Default for DispenseParameters {
    fn default() -> Self {
        Self {
            work_area_width: 500.0,
            work_area_height: 500.0,
            offset_width: 5.0,
            offset_height: 5.0,
            pcb_outline_width: 100.0,
            pcb_outline_height: 50.0,
            pcb_count_width: 1,
            pcb_count_height: 1,
            rest_z: 8.0,
            nozzle_z: 1.0,
            nozzle_temp: 300.0,
            nozzle_hold_duration_ms: 1000.0,
            nozzle_feed_forward: 10.0,
            nozzle_feed_backward: 5.0,
        }
    }
}
