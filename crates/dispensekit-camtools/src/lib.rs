//! # Dispensekit CAM Tools
//!
//! Toolpath-planning operations for the solder dispensing rig:
//!
//! - **Drill Import**: lenient reader for the coordinate subset of Excellon
//!   drill files produced by PCB CAD packages
//! - **Panelization**: replicates one board's dispense points across a grid
//!   of identical boards on the work surface
//! - **Dispense Generator**: deterministic Marlin-style G-code emitter that
//!   visits every point and dispenses solder
//!
//! The three tools are pure functions of their inputs; the hosting
//! application owns file I/O, point selection, and re-running them when
//! parameters change.

pub mod dispense;
pub mod drill;
pub mod panel;

// Re-export commonly used items
pub use dispense::DispenseGenerator;
pub use drill::ParsedDrillFile;
pub use panel::{PanelParams, Panelizer};
