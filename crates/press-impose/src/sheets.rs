use crate::types::LayoutResult;

/// Raised when a user-entered sheet count is below the geometric minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetWarning {
    BelowRecommended { entered: u32, recommended: u32 },
}

/// Sheets needed for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetRequirement {
    /// Computed from the quantity and the layout
    pub recommended: u32,
    /// Sheets used for costing; never below `recommended`
    pub actual: u32,
    pub warning: Option<SheetWarning>,
}

/// `⌈quantity / items_per_sheet⌉`, or 0 when nothing fits
pub fn recommended_sheets(quantity: u32, items_per_sheet: u32) -> u32 {
    if items_per_sheet == 0 {
        return 0;
    }
    quantity.div_ceil(items_per_sheet)
}

/// Reconcile the recommended sheet count with an optional user entry.
///
/// An entry above the recommendation is honoured. An entry below it is
/// reported as a warning and the recommendation is used instead.
pub fn calculate_sheets(
    quantity: u32,
    items_per_sheet: u32,
    entered_sheets: Option<u32>,
) -> SheetRequirement {
    let recommended = recommended_sheets(quantity, items_per_sheet);

    let Some(entered) = entered_sheets else {
        return SheetRequirement {
            recommended,
            actual: recommended,
            warning: None,
        };
    };

    let warning = if entered < recommended {
        log::debug!(
            "Entered sheets {} below recommended {}",
            entered,
            recommended
        );
        Some(SheetWarning::BelowRecommended {
            entered,
            recommended,
        })
    } else {
        None
    };

    SheetRequirement {
        recommended,
        actual: recommended.max(entered),
        warning,
    }
}

/// Sheet requirement for a computed layout
pub fn sheets_for_layout(
    quantity: u32,
    layout: &LayoutResult,
    entered_sheets: Option<u32>,
) -> SheetRequirement {
    calculate_sheets(quantity, layout.items_per_sheet, entered_sheets)
}
