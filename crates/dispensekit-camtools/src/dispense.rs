//! Dispense program generation.
//!
//! Turns an ordered point list and the process parameters into a Marlin-style
//! G-code program: a fixed machine-setup preamble, then one dispense block
//! per point in the order given. The output is a pure function of its inputs
//! so regenerated programs can be compared byte for byte.

use dispensekit_core::Point;
use dispensekit_settings::DispenseParameters;

// Feed rates the donor printer is comfortable with (mm/min).
const LIFT_FEED_RATE: u32 = 1200;
const TRAVEL_FEED_RATE: u32 = 3600;
const PLUNGE_FEED_RATE: u32 = 2100;

/// Generator for solder dispense G-code
pub struct DispenseGenerator {
    params: DispenseParameters,
}

impl DispenseGenerator {
    /// Create a new generator with the given parameters
    pub fn new(params: DispenseParameters) -> Self {
        Self { params }
    }

    /// Generate the dispense program for the given visit order.
    ///
    /// Instructions are newline-joined with no trailing newline. Per-point
    /// coordinates and extrusion amounts are formatted to exactly three
    /// decimals; the dwell is floored to whole milliseconds. An empty point
    /// list produces the machine-setup preamble alone, which is still a
    /// well-formed program.
    pub fn generate(&self, points: &[Point]) -> String {
        let p = &self.params;
        let mut lines: Vec<String> = vec![
            "G21".to_string(),       // millimeter units
            "G90".to_string(),       // absolute positioning
            "M82".to_string(),       // extruder absolute mode
            "M107".to_string(),      // fan off
            "G28 X0 Y0".to_string(), // home X and Y
            "G28 Z0".to_string(),    // home Z
            "G92 E0".to_string(),    // zero the extruded solder
            "M83".to_string(),       // extruder relative mode
            // retract so the solder does not melt during warm-up, lift the tip
            format!(
                "G1 F{} Z{} E-{}",
                LIFT_FEED_RATE, p.rest_z, p.nozzle_feed_backward
            ),
            // block until the nozzle is at temperature
            format!("M109 S{}", p.nozzle_temp),
        ];

        let total = points.len();
        for (index, point) in points.iter().enumerate() {
            lines.push(format!("M117 Soldering {} of {}", index + 1, total));
            lines.push(format!(
                "G0 F{} X{:.3} Y{:.3}",
                TRAVEL_FEED_RATE, point.x, point.y
            ));
            lines.push(format!("G1 F{} Z{:.3}", PLUNGE_FEED_RATE, p.nozzle_z));
            lines.push(format!("G1 E{:.3}", p.nozzle_feed_forward));
            lines.push(format!(
                "G4 P{}",
                p.nozzle_hold_duration_ms.floor() as i64
            ));
            lines.push(format!("G1 E-{:.3}", p.nozzle_feed_backward));
            // rest height is deliberately not forced to three decimals here
            lines.push(format!("G1 F{} Z{}", PLUNGE_FEED_RATE, p.rest_z));
        }

        lines.join("\n")
    }
}
