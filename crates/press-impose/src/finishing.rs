//! Finishing cost calculation
//!
//! Each technique has a formula of one of three shapes: impression-based
//! (`max(minimum, ⌈impressions / 1000⌉ × rate)` with at least 1000
//! impressions billed), sheet-based (`base + per_sheet × sheets`) or a
//! fixed charge. Side-doubling techniques cost twice as much on both sides.

use crate::constants::*;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Finishing techniques offered by the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FinishingTechnique {
    Lamination,
    VelvetLamination,
    Embossing,
    Foiling,
    DieCutting,
    UvSpot,
    Folding,
    Padding,
    Varnishing,
}

/// Pricing formula of a technique
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FinishingFormula {
    /// `base + per_sheet × sheets`
    SheetBased { base: f64, per_sheet: f64 },
    /// `max(minimum, ⌈impressions / 1000⌉ × rate_per_1000)`
    Impressions { rate_per_1000: f64, minimum: f64 },
    /// Impression-based with a minimum tiered by item footprint
    SizeTieredImpressions { rate_per_1000: f64 },
    /// Flat charge per order
    Fixed { amount: f64 },
}

impl FinishingTechnique {
    pub const ALL: [FinishingTechnique; 9] = [
        FinishingTechnique::Lamination,
        FinishingTechnique::VelvetLamination,
        FinishingTechnique::Embossing,
        FinishingTechnique::Foiling,
        FinishingTechnique::DieCutting,
        FinishingTechnique::UvSpot,
        FinishingTechnique::Folding,
        FinishingTechnique::Padding,
        FinishingTechnique::Varnishing,
    ];

    pub fn formula(self) -> FinishingFormula {
        match self {
            FinishingTechnique::Lamination => FinishingFormula::SheetBased {
                base: 75.0,
                per_sheet: 0.75,
            },
            FinishingTechnique::VelvetLamination => FinishingFormula::SheetBased {
                base: 100.0,
                per_sheet: 1.0,
            },
            FinishingTechnique::Embossing => FinishingFormula::Impressions {
                rate_per_1000: 50.0,
                minimum: 75.0,
            },
            FinishingTechnique::Foiling => FinishingFormula::Impressions {
                rate_per_1000: 75.0,
                minimum: 75.0,
            },
            FinishingTechnique::DieCutting => FinishingFormula::SizeTieredImpressions {
                rate_per_1000: 50.0,
            },
            FinishingTechnique::UvSpot => FinishingFormula::Impressions {
                rate_per_1000: 350.0,
                minimum: 350.0,
            },
            FinishingTechnique::Folding => FinishingFormula::Impressions {
                rate_per_1000: 25.0,
                minimum: 25.0,
            },
            FinishingTechnique::Padding => FinishingFormula::Fixed { amount: 25.0 },
            FinishingTechnique::Varnishing => FinishingFormula::Fixed { amount: 30.0 },
        }
    }

    /// Whether applying to both sides doubles the cost
    pub fn doubles_per_side(self) -> bool {
        matches!(
            self,
            FinishingTechnique::Lamination
                | FinishingTechnique::VelvetLamination
                | FinishingTechnique::Embossing
                | FinishingTechnique::Foiling
                | FinishingTechnique::UvSpot
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            FinishingTechnique::Lamination => "Lamination",
            FinishingTechnique::VelvetLamination => "Velvet Lamination",
            FinishingTechnique::Embossing => "Embossing",
            FinishingTechnique::Foiling => "Foiling",
            FinishingTechnique::DieCutting => "Die Cutting",
            FinishingTechnique::UvSpot => "UV Spot",
            FinishingTechnique::Folding => "Folding",
            FinishingTechnique::Padding => "Padding",
            FinishingTechnique::Varnishing => "Varnishing",
        }
    }
}

impl fmt::Display for FinishingTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised technique name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown finishing technique: {0}")]
pub struct UnknownTechnique(pub String);

impl FromStr for FinishingTechnique {
    type Err = UnknownTechnique;

    /// Parses display names, ignoring case, spaces, hyphens and underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        FinishingTechnique::ALL
            .into_iter()
            .find(|t| t.name().replace(' ', "").to_ascii_lowercase() == key)
            .ok_or_else(|| UnknownTechnique(s.to_string()))
    }
}

/// Which sides a technique is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FinishingSide {
    #[default]
    Front,
    Back,
    Both,
}

/// Input for one finishing cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinishingSpec {
    pub technique: FinishingTechnique,
    pub side: FinishingSide,
    /// Quantity or impressions billed
    pub quantity: u32,
    pub sheet_count: u32,
    /// Item bounding box area in cm², used for die-cut minimums
    pub item_footprint_area: Option<f64>,
}

/// Cost of one technique on an order
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinishingLine {
    pub technique: FinishingTechnique,
    pub side: FinishingSide,
    pub cost: f64,
}

/// Finishing costs for a whole order
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinishingSummary {
    pub lines: Vec<FinishingLine>,
    pub total: f64,
}

/// Impressions actually billed: at least the minimum block
pub fn billed_impressions(quantity: u32) -> u64 {
    (quantity as u64).max(MIN_BILLED_IMPRESSIONS)
}

/// Die-cut minimum charge by item footprint (A5 / A4 / A3 / larger)
pub fn die_cut_minimum(item_footprint_area: Option<f64>) -> f64 {
    match item_footprint_area {
        Some(area) if area > A3_AREA_CM2 => 200.0,
        Some(area) if area > A4_AREA_CM2 => 150.0,
        Some(area) if area > A5_AREA_CM2 => 100.0,
        _ => 75.0,
    }
}

fn impression_cost(rate_per_1000: f64, minimum: f64, quantity: u32) -> f64 {
    let blocks = billed_impressions(quantity).div_ceil(IMPRESSIONS_PER_BLOCK);
    minimum.max(blocks as f64 * rate_per_1000)
}

/// Cost of a single finishing application
pub fn finishing_cost(spec: &FinishingSpec) -> f64 {
    let single = match spec.technique.formula() {
        FinishingFormula::SheetBased { base, per_sheet } => {
            base + per_sheet * spec.sheet_count as f64
        }
        FinishingFormula::Impressions {
            rate_per_1000,
            minimum,
        } => impression_cost(rate_per_1000, minimum, spec.quantity),
        FinishingFormula::SizeTieredImpressions { rate_per_1000 } => impression_cost(
            rate_per_1000,
            die_cut_minimum(spec.item_footprint_area),
            spec.quantity,
        ),
        FinishingFormula::Fixed { amount } => amount,
    };

    if spec.side == FinishingSide::Both && spec.technique.doubles_per_side() {
        single * 2.0
    } else {
        single
    }
}

/// Cost every distinct technique once; later repeats are ignored.
pub fn finishing_summary(specs: &[FinishingSpec]) -> FinishingSummary {
    let mut seen = HashSet::new();
    let mut summary = FinishingSummary::default();

    for spec in specs {
        if !seen.insert(spec.technique) {
            log::debug!("Skipping repeated finishing: {}", spec.technique);
            continue;
        }

        let cost = finishing_cost(spec);
        summary.total += cost;
        summary.lines.push(FinishingLine {
            technique: spec.technique,
            side: spec.side,
            cost,
        });
    }

    summary
}
