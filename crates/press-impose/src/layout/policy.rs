//! Packing policies
//!
//! Business rules layered on top of the plain grid. None of these are
//! derived from exact geometry: they encode how real sheets are laid out
//! for particular item classes, and their thresholds live in
//! [`crate::constants`] so they can be tuned against production output.

use super::grid::{GridFit, UsableArea, best_fit, fit_count};
use crate::constants::*;
use crate::types::{LayoutAdjustment, Orientation};

/// (long side, short side) of an item
fn long_short(width: f64, height: f64) -> (f64, f64) {
    if width >= height {
        (width, height)
    } else {
        (height, width)
    }
}

// =============================================================================
// Compact Items
// =============================================================================

/// Business-card-like items: both sides within the compact range
pub fn is_compact(item_width: f64, item_height: f64) -> bool {
    let in_range = |v: f64| (COMPACT_MIN_CM..=COMPACT_MAX_CM).contains(&v);
    in_range(item_width) && in_range(item_height)
}

/// Gap for an item: compact items are capped at the compact gap.
pub fn compact_gap(item_width: f64, item_height: f64, gap: f64) -> f64 {
    if is_compact(item_width, item_height) {
        gap.min(COMPACT_GAP_WIDTH_CM)
    } else {
        gap
    }
}

// =============================================================================
// Large Dielines
// =============================================================================

/// Items per sheet to aim for with a large dieline, or `None` when the item
/// is below the large-item threshold.
pub fn large_dieline_target(item_width: f64, item_height: f64) -> Option<u32> {
    let (long, short) = long_short(item_width, item_height);
    if long <= LARGE_DIELINE_LONG_CM || short <= LARGE_DIELINE_SHORT_CM {
        return None;
    }

    if long <= LARGE_DIELINE_SMALL_TIER_LONG_CM && short <= LARGE_DIELINE_SMALL_TIER_SHORT_CM {
        Some(LARGE_DIELINE_SMALL_TIER_TARGET)
    } else {
        Some(LARGE_DIELINE_LARGE_TIER_TARGET)
    }
}

/// Lay a large dieline out to its target count.
///
/// The usable area is split into `target` equal cells along its longer
/// side. A target is taken only when it beats `greedy` and every cell is at
/// least as large (by area) as the item footprint; otherwise the next lower
/// count is tried. Returns `None` when the greedy grid should stand.
pub fn large_dieline_layout(
    usable: &UsableArea,
    item_width: f64,
    item_height: f64,
    gap: f64,
    greedy: &GridFit,
) -> Option<(GridFit, LayoutAdjustment)> {
    let target = large_dieline_target(item_width, item_height)?;
    let footprint = (item_width + gap) * (item_height + gap);

    for count in (greedy.count() + 1..=target).rev() {
        if usable.area() / count as f64 + f64::EPSILON < footprint {
            continue;
        }

        let (cols, rows) = if usable.width >= usable.height {
            (count, 1)
        } else {
            (1, count)
        };
        let cell_landscape = usable.width / cols as f64 >= usable.height / rows as f64;
        let item_landscape = item_width >= item_height;
        let orientation = if cell_landscape == item_landscape {
            Orientation::Normal
        } else {
            Orientation::Rotated
        };

        log::debug!(
            "Large dieline {}x{}: greedy {} raised to {}",
            item_width,
            item_height,
            greedy.count(),
            count
        );
        return Some((
            GridFit {
                cols,
                rows,
                orientation,
            },
            LayoutAdjustment::LargeDielineTarget { target: count },
        ));
    }

    None
}

// =============================================================================
// Minimum Yield (small circular-base items)
// =============================================================================

/// Small, tall items (cups) that should never yield fewer than the minimum
pub fn is_minimum_yield_item(item_width: f64, item_height: f64) -> bool {
    let (long, short) = long_short(item_width, item_height);
    long <= MIN_YIELD_MAX_LONG_CM && short <= MIN_YIELD_MAX_SHORT_CM
}

/// Top up an under-yielding layout for small circular-base items.
///
/// First retries the grid with the compact gap. If that is still short,
/// forces a single line of items stacked short side to short side, sized
/// to the minimum and capped. The line may run along either usable axis;
/// the one holding more items wins, and a column wins ties. Nothing is
/// forced when not even one item fits.
/// Returns the replacement fit, the gap it used, and which rule applied.
pub fn minimum_yield_stack(
    usable: &UsableArea,
    item_width: f64,
    item_height: f64,
    gap: f64,
    greedy: &GridFit,
) -> Option<(GridFit, f64, LayoutAdjustment)> {
    if greedy.count() >= MIN_YIELD_COUNT || !is_minimum_yield_item(item_width, item_height) {
        return None;
    }

    let reduced_gap = gap.min(COMPACT_GAP_WIDTH_CM);
    let retry = best_fit(usable, item_width, item_height, reduced_gap);
    if retry.count() >= MIN_YIELD_COUNT {
        log::debug!(
            "Minimum yield reached with reduced gap {}: {} items",
            reduced_gap,
            retry.count()
        );
        return Some((retry, reduced_gap, LayoutAdjustment::ReducedGap));
    }

    let (long, short) = long_short(item_width, item_height);
    let landscape = item_width >= item_height;

    // Long side across the width, stacked down the height
    let column = stack_fit(usable.height, usable.width, long, short + reduced_gap).map(|rows| {
        GridFit {
            cols: 1,
            rows,
            orientation: if landscape {
                Orientation::Normal
            } else {
                Orientation::Rotated
            },
        }
    });
    // Long side down the height, stacked across the width
    let row = stack_fit(usable.width, usable.height, long, short + reduced_gap).map(|cols| {
        GridFit {
            cols,
            rows: 1,
            orientation: if landscape {
                Orientation::Rotated
            } else {
                Orientation::Normal
            },
        }
    });

    let fit = match (column, row) {
        (Some(column), Some(row)) if row.count() > column.count() => row,
        (Some(column), _) => column,
        (None, Some(row)) => row,
        (None, None) => return None,
    };

    log::debug!(
        "Minimum yield stack for {}x{}: {} forced to {}",
        item_width,
        item_height,
        retry.count(),
        fit.count()
    );
    Some((fit, reduced_gap, LayoutAdjustment::MinimumYieldStack))
}

/// Items in a forced stack along `stack_length`, or `None` when the item's
/// long side does not fit across `cross_length` or no item fits at all.
fn stack_fit(stack_length: f64, cross_length: f64, long: f64, pitch: f64) -> Option<u32> {
    let fit = fit_count(stack_length, pitch);
    if fit == 0 || long > cross_length {
        return None;
    }
    Some(fit.clamp(MIN_YIELD_COUNT, MIN_YIELD_CAP))
}

// =============================================================================
// Tests
// =============================================================================
