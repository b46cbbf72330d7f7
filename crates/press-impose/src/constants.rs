//! Shared constants for sheet imposition and costing
//!
//! This module centralizes the magic numbers used throughout the packing
//! and pricing calculations. All lengths are centimetres.

// =============================================================================
// Production Parameter Defaults
// =============================================================================

/// Default gripper margin reserved along the gripped sheet edge
pub const DEFAULT_GRIPPER_WIDTH_CM: f64 = 0.9;

/// Default unprintable margin on the remaining sheet edges
pub const DEFAULT_EDGE_MARGIN_CM: f64 = 0.5;

/// Default gap between neighbouring items
pub const DEFAULT_GAP_WIDTH_CM: f64 = 0.5;

/// Default bleed around each item (informational, not packed)
pub const DEFAULT_BLEED_WIDTH_CM: f64 = 0.3;

/// Gap used for compact items and for minimum-yield retries
pub const COMPACT_GAP_WIDTH_CM: f64 = 0.2;

// =============================================================================
// Compact Item Profile
// =============================================================================

/// Smallest dimension still considered a compact (business-card-like) item
pub const COMPACT_MIN_CM: f64 = 5.0;

/// Largest dimension still considered a compact item
pub const COMPACT_MAX_CM: f64 = 10.0;

// =============================================================================
// Large Dieline Policy
// =============================================================================

/// Long side an item must exceed to count as a large dieline
pub const LARGE_DIELINE_LONG_CM: f64 = 50.0;

/// Short side an item must exceed to count as a large dieline
pub const LARGE_DIELINE_SHORT_CM: f64 = 30.0;

/// Long-side limit of the smaller large-dieline tier
pub const LARGE_DIELINE_SMALL_TIER_LONG_CM: f64 = 65.0;

/// Short-side limit of the smaller large-dieline tier
pub const LARGE_DIELINE_SMALL_TIER_SHORT_CM: f64 = 45.0;

/// Items per sheet targeted for the smaller large-dieline tier
pub const LARGE_DIELINE_SMALL_TIER_TARGET: u32 = 3;

/// Items per sheet targeted for the larger large-dieline tier
pub const LARGE_DIELINE_LARGE_TIER_TARGET: u32 = 2;

// =============================================================================
// Minimum Yield Policy (circular-base items)
// =============================================================================

/// Long-side limit for items eligible for the minimum-yield stack
pub const MIN_YIELD_MAX_LONG_CM: f64 = 22.0;

/// Short-side limit for items eligible for the minimum-yield stack
pub const MIN_YIELD_MAX_SHORT_CM: f64 = 8.5;

/// Minimum viable items per sheet
pub const MIN_YIELD_COUNT: u32 = 4;

/// Upper bound of a forced stack
pub const MIN_YIELD_CAP: u32 = 8;

// =============================================================================
// Gusseted Bag Dieline
// =============================================================================

/// Smallest top hem
pub const BAG_TOP_HEM_MIN_CM: f64 = 3.0;

/// Top hem as a fraction of the panel width
pub const BAG_TOP_HEM_RATIO: f64 = 0.12;

/// Smallest bottom flap
pub const BAG_BOTTOM_FLAP_MIN_CM: f64 = 6.0;

/// Bottom flap as a fraction of the panel width
pub const BAG_BOTTOM_FLAP_RATIO: f64 = 0.25;

/// Fixed glue flap width
pub const BAG_GLUE_FLAP_CM: f64 = 2.0;

// =============================================================================
// Finishing
// =============================================================================

/// Impressions are billed in blocks of this size
pub const IMPRESSIONS_PER_BLOCK: u64 = 1000;

/// Impressions always billed, regardless of the quantity
pub const MIN_BILLED_IMPRESSIONS: u64 = 1000;

/// Die-cut footprint limits in cm² (A5, A4, A3)
pub const A5_AREA_CM2: f64 = 14.8 * 21.0;
pub const A4_AREA_CM2: f64 = 21.0 * 29.7;
pub const A3_AREA_CM2: f64 = 29.7 * 42.0;
