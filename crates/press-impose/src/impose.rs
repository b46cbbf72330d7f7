//! Sheet imposition - how many items fit on one press sheet
//!
//! This module drives the layout calculation:
//! 1. Place the gripper and work out the usable area
//! 2. Pick the gap (compact items pack tighter)
//! 3. Fit a grid in both orientations and keep the better one
//! 4. Apply the product-class policy for the item's packing strategy
//! 5. Report the material efficiency of the result

use crate::geometry::{PackingStrategy, ResolvedItem};
use crate::layout::{
    GridFit, best_fit, compact_gap, large_dieline_layout, minimum_yield_stack, usable_area,
};
use crate::types::*;

/// Impose a resolved product onto a sheet
pub fn impose(
    sheet: SheetSize,
    item: &ResolvedItem,
    params: &ProductionParameters,
) -> LayoutResult {
    let (width, height) = item.size();
    impose_rect(sheet, width, height, params, item.strategy)
}

/// Impose a plain `item_width × item_height` rectangle onto a sheet.
///
/// Any non-positive or non-finite dimension yields an empty layout.
pub fn impose_rect(
    sheet: SheetSize,
    item_width: f64,
    item_height: f64,
    params: &ProductionParameters,
    strategy: PackingStrategy,
) -> LayoutResult {
    let params = params.sanitized();

    if !sheet.is_valid() {
        return LayoutResult {
            gap_used: params.gap_width,
            ..Default::default()
        };
    }

    let usable = usable_area(sheet, &params);
    let empty = LayoutResult {
        usable_width: usable.width,
        usable_height: usable.height,
        gripper_edge: usable.gripper_edge,
        gap_used: params.gap_width,
        ..Default::default()
    };

    if !is_positive(item_width) || !is_positive(item_height) {
        return empty;
    }

    let gap = compact_gap(item_width, item_height, params.gap_width);
    let greedy = best_fit(&usable, item_width, item_height, gap);

    let (fit, gap_used, adjustment) = match strategy {
        PackingStrategy::Grid => (greedy, gap, None),
        PackingStrategy::Dieline => {
            match large_dieline_layout(&usable, item_width, item_height, gap, &greedy) {
                Some((fit, adjustment)) => (fit, gap, Some(adjustment)),
                None => (greedy, gap, None),
            }
        }
        PackingStrategy::CircularBase => {
            match minimum_yield_stack(&usable, item_width, item_height, gap, &greedy) {
                Some((fit, gap, adjustment)) => (fit, gap, Some(adjustment)),
                None => (greedy, gap, None),
            }
        }
    };

    LayoutResult {
        items_per_row: fit.cols,
        items_per_col: fit.rows,
        items_per_sheet: fit.count(),
        orientation: fit.orientation,
        efficiency_percent: efficiency_percent(&fit, item_width, item_height, sheet),
        gap_used,
        adjustment,
        ..empty
    }
}

/// Share of the sheet covered by items, clamped to 0..=100
pub fn efficiency_percent(fit: &GridFit, item_width: f64, item_height: f64, sheet: SheetSize) -> f64 {
    let sheet_area = sheet.area();
    if !is_positive(sheet_area) {
        return 0.0;
    }

    let used = fit.count() as f64 * item_width * item_height;
    (used / sheet_area * 100.0).clamp(0.0, 100.0)
}
