//! Order quoting
//!
//! Runs the full costing flow for one product: geometry once, then per
//! paper the layout, sheets, material, plates and units, then finishing
//! once for the whole order.

use crate::finishing::{FinishingSpec, FinishingSummary, finishing_summary};
use crate::geometry::{ResolvedItem, resolve_geometry};
use crate::impose::impose;
use crate::options::{PaperJob, PrintSetup, QuoteRequest};
use crate::pricing::{MaterialCost, material_cost};
use crate::production::{Overridable, plate_count, unit_count};
use crate::sheets::{SheetRequirement, SheetWarning, calculate_sheets};
use crate::types::{LayoutResult, ProductionParameters, non_negative};

/// Something the caller should show next to the numbers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuoteWarning {
    /// The product has no usable size yet
    InsufficientGeometry,
    /// Nothing fits on this paper's sheet
    InfeasibleLayout { paper: String },
    /// Fewer sheets were entered than the layout needs
    SheetsBelowRecommended {
        paper: String,
        entered: u32,
        recommended: u32,
    },
    /// The paper has no usable price
    PricingIncomplete { paper: String },
}

/// Costing for one paper of the order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobQuote {
    pub paper: String,
    pub layout: LayoutResult,
    pub sheets: SheetRequirement,
    pub material: MaterialCost,
    pub plates: Overridable,
    pub units: Overridable,
    pub plate_cost: f64,
    pub impression_cost: f64,
    /// Material, plate and impression cost of this paper
    pub total: f64,
}

/// Costing for a whole order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    pub item: ResolvedItem,
    pub jobs: Vec<JobQuote>,
    /// Computed finishing, one line per distinct technique
    pub finishing: FinishingSummary,
    /// Finishing cost used in the total (override or computed)
    pub finishing_cost: f64,
    pub material_cost: f64,
    pub total_sheets: u32,
    pub total: f64,
    pub warnings: Vec<QuoteWarning>,
}

/// Quote an order. Never fails; incomplete input shows up in `warnings`.
pub fn quote(request: &QuoteRequest) -> Quote {
    let item = resolve_geometry(&request.product);
    let mut warnings = Vec::new();

    if item.is_insufficient() {
        warnings.push(QuoteWarning::InsufficientGeometry);
    }

    let jobs: Vec<JobQuote> = request
        .papers
        .iter()
        .map(|paper| {
            quote_job(
                &item,
                paper,
                request.quantity,
                &request.production,
                &request.printing,
                &mut warnings,
            )
        })
        .collect();

    let total_sheets = jobs
        .iter()
        .fold(0u32, |total, job| total.saturating_add(job.sheets.actual));
    let specs: Vec<FinishingSpec> = request
        .finishing
        .iter()
        .map(|selection| FinishingSpec {
            technique: selection.technique,
            side: selection.side,
            quantity: request.quantity,
            sheet_count: total_sheets,
            item_footprint_area: Some(item.geometry.area()),
        })
        .collect();

    let finishing = finishing_summary(&specs);
    let finishing_cost = request
        .finishing_override
        .map(non_negative)
        .unwrap_or(finishing.total);

    let material_cost: f64 = jobs.iter().map(|job| job.material.total).sum();
    let jobs_total: f64 = jobs.iter().map(|job| job.total).sum();

    Quote {
        item,
        jobs,
        finishing,
        finishing_cost,
        material_cost,
        total_sheets,
        total: jobs_total + finishing_cost,
        warnings,
    }
}

fn quote_job(
    item: &ResolvedItem,
    paper: &PaperJob,
    quantity: u32,
    production: &ProductionParameters,
    printing: &PrintSetup,
    warnings: &mut Vec<QuoteWarning>,
) -> JobQuote {
    let layout = impose(paper.sheet, item, production);
    if layout.is_empty() && !item.is_insufficient() {
        warnings.push(QuoteWarning::InfeasibleLayout {
            paper: paper.name.clone(),
        });
    }

    let sheets = calculate_sheets(quantity, layout.items_per_sheet, paper.entered_sheets);
    if let Some(SheetWarning::BelowRecommended {
        entered,
        recommended,
    }) = sheets.warning
    {
        warnings.push(QuoteWarning::SheetsBelowRecommended {
            paper: paper.name.clone(),
            entered,
            recommended,
        });
    }

    let material = material_cost(&paper.pricing, sheets.actual);
    if material.is_incomplete() {
        warnings.push(QuoteWarning::PricingIncomplete {
            paper: paper.name.clone(),
        });
    }

    let plates = Overridable::new(plate_count(printing.sides, printing.method), paper.plates_override);
    let units = Overridable::new(unit_count(sheets.actual, printing.sides), paper.units_override);
    let plate_cost = plates.effective as f64 * non_negative(printing.plate_price);
    let impression_cost = units.effective as f64 * non_negative(printing.unit_price);

    log::debug!(
        "Paper '{}': {} per sheet, {} sheets, material {:.2}",
        paper.name,
        layout.items_per_sheet,
        sheets.actual,
        material.total
    );

    JobQuote {
        paper: paper.name.clone(),
        layout,
        sheets,
        material,
        plates,
        units,
        plate_cost,
        impression_cost,
        total: material.total + plate_cost + impression_cost,
    }
}
