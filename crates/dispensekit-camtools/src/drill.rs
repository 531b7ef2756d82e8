//! Drill file import.
//!
//! Reads the coordinate subset of the Excellon drill format produced by PCB
//! CAD packages. Only three things matter to a dispensing run: the unit
//! directive, the movement-command prefixes, and the X/Y coordinate lines.
//! Tool definitions, format headers, and end markers are skipped without
//! comment; hole diameters are irrelevant when the nozzle decides the
//! deposit size.

use dispensekit_core::{BoardExtent, Point, Units};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Result of importing one drill file: the holes in file order, converted to
/// millimeters, plus the unit system the file declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDrillFile {
    /// Hole locations in file order (mm)
    pub points: Vec<Point>,
    /// Unit system declared by the file; millimeters when absent
    pub units: Units,
}

impl ParsedDrillFile {
    /// Maximum X/Y reach of the parsed holes
    pub fn extent(&self) -> BoardExtent {
        BoardExtent::from_points(&self.points)
    }

    /// Number of holes extracted
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the file contained no coordinate lines
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Parse drill file contents into hole locations.
///
/// The parser is a single pass and deliberately lenient: any line it does not
/// recognize is skipped, and a malformed coordinate line is logged and
/// skipped without aborting the rest of the file. Empty input yields an
/// empty result, not an error.
///
/// The unit multiplier in force when a line is read is the one applied to
/// it. A file that declared `INCH` only after some coordinate lines would
/// keep the earlier points unscaled; CAD packages put the directive in the
/// header ahead of any coordinates.
pub fn parse(contents: &str) -> ParsedDrillFile {
    let mut points = Vec::new();
    let mut units = Units::MM;

    for raw_line in contents.lines() {
        let mut line = raw_line.trim();

        // Fast (G00) and slow (G01) moves land on the same spot; only the
        // coordinates matter to a dispensing pass.
        if line.starts_with("G00") || line.starts_with("G01") {
            line = &line["G00".len()..];
        }

        if line.starts_with("INCH") {
            units = Units::INCH;
            continue;
        }

        let Some(after_x) = line.strip_prefix('X') else {
            continue; // not a coordinate line
        };

        let Some((x_raw, y_raw)) = after_x.split_once('Y') else {
            warn!("drill line `{raw_line}` has no Y coordinate, skipping");
            continue;
        };

        match (x_raw.parse::<f64>(), y_raw.parse::<f64>()) {
            (Ok(x), Ok(y)) => points.push(Point::new(units.to_mm(x), units.to_mm(y))),
            _ => warn!("drill line `{raw_line}` is malformed, skipping"),
        }
    }

    ParsedDrillFile { points, units }
}
