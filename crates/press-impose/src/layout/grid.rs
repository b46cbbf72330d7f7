//! Grid layout calculation
//!
//! This module handles the geometric side of imposition: where the gripper
//! goes, how much of the sheet is left to print on, and how many items a
//! plain row/column grid fits in each orientation.

use crate::types::{GripperEdge, Orientation, ProductionParameters, SheetSize, non_negative};

/// Slack for floor division so exact fits are not lost to rounding
const FIT_EPSILON: f64 = 1e-9;

// =============================================================================
// Usable Area
// =============================================================================

/// Printable area left after gripper and edge margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsableArea {
    pub width: f64,
    pub height: f64,
    pub gripper_edge: GripperEdge,
}

impl UsableArea {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// The gripper sits on the sheet's longer side; a square sheet grips on its width.
pub fn gripper_edge(sheet: SheetSize) -> GripperEdge {
    if sheet.width >= sheet.height {
        GripperEdge::TopOrBottom
    } else {
        GripperEdge::LeftOrRight
    }
}

/// Subtract the margins from the sheet.
///
/// The dimension perpendicular to the gripper edge loses the gripper margin
/// plus one edge margin; the other dimension loses an edge margin on both
/// sides. Results are clamped at zero.
pub fn usable_area(sheet: SheetSize, params: &ProductionParameters) -> UsableArea {
    let params = params.sanitized();
    let gripper_edge = gripper_edge(sheet);
    let gripped = params.gripper_width + params.edge_margin;
    let plain = 2.0 * params.edge_margin;

    let (width, height) = match gripper_edge {
        GripperEdge::TopOrBottom => (sheet.width - plain, sheet.height - gripped),
        GripperEdge::LeftOrRight => (sheet.width - gripped, sheet.height - plain),
    };

    UsableArea {
        width: non_negative(width),
        height: non_negative(height),
        gripper_edge,
    }
}

// =============================================================================
// Grid Fitting
// =============================================================================

/// Row/column count for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridFit {
    /// Items across the usable width
    pub cols: u32,
    /// Items along the usable height
    pub rows: u32,
    pub orientation: Orientation,
}

impl GridFit {
    /// Items on the sheet, saturating at `u32::MAX`
    pub fn count(&self) -> u32 {
        self.cols.saturating_mul(self.rows)
    }
}

/// How many pitches fit into a length
pub fn fit_count(length: f64, pitch: f64) -> u32 {
    if !length.is_finite() || !pitch.is_finite() || length <= 0.0 || pitch <= 0.0 {
        return 0;
    }
    (length / pitch + FIT_EPSILON).floor() as u32
}

/// Fit a grid of `item_width × item_height` items, each padded by `gap`.
pub fn fit_grid(
    usable: &UsableArea,
    item_width: f64,
    item_height: f64,
    gap: f64,
    orientation: Orientation,
) -> GridFit {
    let (w, h) = match orientation {
        Orientation::Normal => (item_width, item_height),
        Orientation::Rotated => (item_height, item_width),
    };

    GridFit {
        cols: fit_count(usable.width, w + gap),
        rows: fit_count(usable.height, h + gap),
        orientation,
    }
}

/// Evaluate both orientations and keep the larger count; ties keep Normal.
pub fn best_fit(usable: &UsableArea, item_width: f64, item_height: f64, gap: f64) -> GridFit {
    let normal = fit_grid(usable, item_width, item_height, gap, Orientation::Normal);
    let rotated = fit_grid(usable, item_width, item_height, gap, Orientation::Rotated);

    if rotated.count() > normal.count() {
        rotated
    } else {
        normal
    }
}

// =============================================================================
// Tests
// =============================================================================
