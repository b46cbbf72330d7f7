use crate::constants::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Press sheet dimensions in centimetres
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetSize {
    pub width: f64,
    pub height: f64,
}

impl SheetSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when both dimensions are finite and positive
    pub fn is_valid(&self) -> bool {
        is_positive(self.width) && is_positive(self.height)
    }

    /// The same sheet turned through 90°
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Margins and spacing used when packing items onto a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProductionParameters {
    /// Margin reserved for the press grippers
    pub gripper_width: f64,
    /// Margin on the non-gripper edges
    pub edge_margin: f64,
    /// Space between neighbouring items
    pub gap_width: f64,
    /// Bleed around each item; informational only, not packed
    pub bleed_width: f64,
}

impl Default for ProductionParameters {
    fn default() -> Self {
        Self {
            gripper_width: DEFAULT_GRIPPER_WIDTH_CM,
            edge_margin: DEFAULT_EDGE_MARGIN_CM,
            gap_width: DEFAULT_GAP_WIDTH_CM,
            bleed_width: DEFAULT_BLEED_WIDTH_CM,
        }
    }
}

impl ProductionParameters {
    /// Copy with every value clamped to a finite, non-negative number
    pub fn sanitized(&self) -> Self {
        Self {
            gripper_width: non_negative(self.gripper_width),
            edge_margin: non_negative(self.edge_margin),
            gap_width: non_negative(self.gap_width),
            bleed_width: non_negative(self.bleed_width),
        }
    }
}

/// Item orientation on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Item width runs along the sheet width
    #[default]
    Normal,
    /// Item turned through 90°
    Rotated,
}

/// Which pair of sheet edges carries the gripper margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GripperEdge {
    /// Gripper runs along the sheet width; height loses the gripper margin
    #[default]
    TopOrBottom,
    /// Gripper runs along the sheet height; width loses the gripper margin
    LeftOrRight,
}

/// Heuristic policy that replaced the plain grid count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutAdjustment {
    /// Large dieline laid out to a fixed target count
    LargeDielineTarget { target: u32 },
    /// Retried with the compact gap and reached the minimum yield
    ReducedGap,
    /// Forced single-column stack for small circular-base items
    MinimumYieldStack,
}

/// Result of packing one item shape onto one sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    /// Sheet width left after margins
    pub usable_width: f64,
    /// Sheet height left after margins
    pub usable_height: f64,
    /// Items placed side by side across the sheet width (columns)
    pub items_per_row: u32,
    /// Items stacked along the sheet height (rows)
    pub items_per_col: u32,
    /// `items_per_row × items_per_col`
    pub items_per_sheet: u32,
    pub orientation: Orientation,
    /// Item area over sheet area, 0..=100
    pub efficiency_percent: f64,
    pub gripper_edge: GripperEdge,
    /// Gap actually applied between items
    pub gap_used: f64,
    pub adjustment: Option<LayoutAdjustment>,
}

impl LayoutResult {
    /// True when no item fits (or the input was insufficient)
    pub fn is_empty(&self) -> bool {
        self.items_per_sheet == 0
    }
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
