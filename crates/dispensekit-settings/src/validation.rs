//! Cross-field validation of dispense parameters.
//!
//! The rules here guard invariants the generated program depends on: the
//! retract must stay below the feed, the dispense height below the travel
//! height, and the panel must physically fit both the work surface and the
//! holes parsed from the drill file. A failed rule is an expected outcome,
//! not an error: every field gets a fresh verdict on every call and the
//! caller decides what to gate on the result.

use crate::config::DispenseParameters;
use dispensekit_core::BoardExtent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parameter fields that carry validation state
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Field {
    WorkAreaWidth,
    WorkAreaHeight,
    PcbOutlineWidth,
    PcbOutlineHeight,
    PcbCountWidth,
    PcbCountHeight,
    RestZ,
    NozzleZ,
    NozzleFeedForward,
    NozzleFeedBackward,
}

impl Field {
    /// Canonical field name, matching the persisted parameter keys
    pub fn name(&self) -> &'static str {
        match self {
            Field::WorkAreaWidth => "work_area_width",
            Field::WorkAreaHeight => "work_area_height",
            Field::PcbOutlineWidth => "pcb_outline_width",
            Field::PcbOutlineHeight => "pcb_outline_height",
            Field::PcbCountWidth => "pcb_count_width",
            Field::PcbCountHeight => "pcb_count_height",
            Field::RestZ => "rest_z",
            Field::NozzleZ => "nozzle_z",
            Field::NozzleFeedForward => "nozzle_feed_forward",
            Field::NozzleFeedBackward => "nozzle_feed_backward",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Verdict for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    /// The field passed every rule that covers it
    Ok,
    /// The field failed a rule; the message is suitable for inline display
    Failed(String),
}

impl FieldStatus {
    /// True when the field passed
    pub fn is_ok(&self) -> bool {
        matches!(self, FieldStatus::Ok)
    }

    /// Failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldStatus::Ok => None,
            FieldStatus::Failed(message) => Some(message),
        }
    }
}

/// Outcome of one validation pass over all fields.
///
/// Iteration order over fields is fixed, so two identical passes produce
/// identically ordered reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    fields: BTreeMap<Field, FieldStatus>,
}

impl ValidationReport {
    fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    fn pass(&mut self, field: Field) {
        self.fields.insert(field, FieldStatus::Ok);
    }

    fn fail(&mut self, field: Field, message: String) {
        self.fields.insert(field, FieldStatus::Failed(message));
    }

    /// True when every field passed; gates persistence and generation
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldStatus::is_ok)
    }

    /// Failure message for one field, if it failed
    pub fn message(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).and_then(FieldStatus::message)
    }

    /// True when the given field passed
    pub fn is_field_ok(&self, field: Field) -> bool {
        self.message(field).is_none()
    }

    /// All failed fields with their messages, in field order
    pub fn failures(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.fields
            .iter()
            .filter_map(|(field, status)| status.message().map(|message| (*field, message)))
    }

    /// Per-field verdicts for display
    pub fn fields(&self) -> &BTreeMap<Field, FieldStatus> {
        &self.fields
    }
}

/// Run every rule against the parameters and the drill-file extent.
///
/// Pure with respect to its inputs: identical inputs yield identical reports,
/// and a previously failing field reports [`FieldStatus::Ok`] as soon as its
/// rule passes again.
pub fn validate(params: &DispenseParameters, extent: BoardExtent) -> ValidationReport {
    let mut report = ValidationReport::new();

    // Net extrusion per point must stay positive.
    if params.nozzle_feed_backward >= params.nozzle_feed_forward {
        report.fail(
            Field::NozzleFeedBackward,
            "Must be less than feed forward".to_string(),
        );
        report.fail(
            Field::NozzleFeedForward,
            "Must be greater than feed backward".to_string(),
        );
    } else {
        report.pass(Field::NozzleFeedForward);
        report.pass(Field::NozzleFeedBackward);
    }

    // The head travels at rest height; dispensing below it is the only descent.
    if params.rest_z <= params.nozzle_z {
        report.fail(
            Field::RestZ,
            "Must be greater than soldering Z-value".to_string(),
        );
        report.fail(
            Field::NozzleZ,
            "Must be less than at-rest Z-value".to_string(),
        );
    } else {
        report.pass(Field::RestZ);
        report.pass(Field::NozzleZ);
    }

    if params.pcb_count_width == 0 {
        report.fail(Field::PcbCountWidth, "PCB Count must be > 0".to_string());
    } else {
        report.pass(Field::PcbCountWidth);
    }
    if params.pcb_count_height == 0 {
        report.fail(Field::PcbCountHeight, "PCB Count must be > 0".to_string());
    } else {
        report.pass(Field::PcbCountHeight);
    }

    if params.work_area_width < params.pcb_count_width as f64 * params.pcb_outline_width {
        report.fail(
            Field::WorkAreaWidth,
            format!(
                "Work area width too small to fit {} PCBs @ {}mm",
                params.pcb_count_width, params.pcb_outline_width
            ),
        );
    } else {
        report.pass(Field::WorkAreaWidth);
    }
    if params.work_area_height < params.pcb_count_height as f64 * params.pcb_outline_height {
        report.fail(
            Field::WorkAreaHeight,
            format!(
                "Work area height too small to fit {} PCBs @ {}mm",
                params.pcb_count_height, params.pcb_outline_height
            ),
        );
    } else {
        report.pass(Field::WorkAreaHeight);
    }

    // A zero extent means no drill file is loaded yet; nothing to check.
    if extent.max_x > 0.0 && extent.max_x > params.pcb_outline_width {
        report.fail(
            Field::PcbOutlineWidth,
            format!(
                "PCB outline width must be > the max drill point of {}mm",
                extent.max_x
            ),
        );
    } else {
        report.pass(Field::PcbOutlineWidth);
    }
    if extent.max_y > 0.0 && extent.max_y > params.pcb_outline_height {
        report.fail(
            Field::PcbOutlineHeight,
            format!(
                "PCB outline height must be > the max drill point of {}mm",
                extent.max_y
            ),
        );
    } else {
        report.pass(Field::PcbOutlineHeight);
    }

    report
}
