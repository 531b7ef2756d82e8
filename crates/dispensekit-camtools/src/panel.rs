//! Panel replication.
//!
//! Tiles one board's dispense points across a rectangular panel of identical
//! boards laid out on the work surface. The traversal order fixed here
//! becomes the order the dispense head visits points, so it is part of the
//! contract, not an implementation detail.

use dispensekit_core::Point;
use dispensekit_settings::DispenseParameters;
use serde::{Deserialize, Serialize};

/// Parameters for a rectangular panel of identical boards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelParams {
    /// Number of boards across the work surface (X direction)
    pub count_x: u32,
    /// Number of boards up the work surface (Y direction)
    pub count_y: u32,
    /// Single-board outline width (mm)
    pub board_width: f64,
    /// Single-board outline height (mm)
    pub board_height: f64,
}

impl PanelParams {
    /// Create new panel parameters
    pub fn new(count_x: u32, count_y: u32, board_width: f64, board_height: f64) -> Self {
        debug_assert!(
            board_width.is_finite(),
            "board_width must be finite, got {board_width}"
        );
        debug_assert!(
            board_height.is_finite(),
            "board_height must be finite, got {board_height}"
        );
        Self {
            count_x,
            count_y,
            board_width,
            board_height,
        }
    }

    /// Panel description carried by a parameter record
    pub fn from_parameters(params: &DispenseParameters) -> Self {
        Self::new(
            params.pcb_count_width,
            params.pcb_count_height,
            params.pcb_outline_width,
            params.pcb_outline_height,
        )
    }

    /// Validate parameters
    pub fn is_valid(&self) -> bool {
        self.count_x > 0 && self.count_y > 0 && self.board_width >= 0.0 && self.board_height >= 0.0
    }

    /// Total number of boards on the panel
    pub fn total_boards(&self) -> u32 {
        self.count_x * self.count_y
    }

    /// Origin of the board at the given panel cell
    pub fn cell_origin(&self, col: u32, row: u32) -> Option<(f64, f64)> {
        if col >= self.count_x || row >= self.count_y {
            return None;
        }

        Some((
            col as f64 * self.board_width,
            row as f64 * self.board_height,
        ))
    }
}

/// Replicates board-relative points across every board of a panel
pub struct Panelizer;

impl Panelizer {
    /// Replicate the selected points across all boards of the panel.
    ///
    /// Boards are visited column by column: every row of the leftmost column
    /// first, then the next column. Within a board the points keep their
    /// input order. A panel with zero boards in either direction yields no
    /// points. No deduplication is performed; coincident input points are
    /// replicated independently into every cell.
    pub fn replicate(points: &[Point], params: &PanelParams) -> Vec<Point> {
        if params.count_x == 0 || params.count_y == 0 {
            return Vec::new();
        }

        let mut replicated =
            Vec::with_capacity(points.len() * params.total_boards() as usize);
        for col in 0..params.count_x {
            for row in 0..params.count_y {
                let origin_x = col as f64 * params.board_width;
                let origin_y = row as f64 * params.board_height;
                for point in points {
                    replicated.push(point.translated(origin_x, origin_y));
                }
            }
        }

        replicated
    }
}
