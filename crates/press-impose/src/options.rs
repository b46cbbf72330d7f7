use crate::finishing::{FinishingSide, FinishingTechnique};
use crate::geometry::ProductSpec;
use crate::pricing::PaperPricing;
use crate::production::{PrintSides, PrintingMethod};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One paper the product is printed on
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaperJob {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gsm: Option<u32>,
    /// Press sheet the paper is bought and printed in
    pub sheet: SheetSize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pricing: PaperPricing,
    /// User-entered sheet count
    #[cfg_attr(feature = "serde", serde(default))]
    pub entered_sheets: Option<u32>,
    /// User-entered plate count
    #[cfg_attr(feature = "serde", serde(default))]
    pub plates_override: Option<u32>,
    /// User-entered unit count
    #[cfg_attr(feature = "serde", serde(default))]
    pub units_override: Option<u32>,
}

impl PaperJob {
    pub fn new(name: impl Into<String>, sheet: SheetSize, pricing: PaperPricing) -> Self {
        Self {
            name: name.into(),
            gsm: None,
            sheet,
            pricing,
            entered_sheets: None,
            plates_override: None,
            units_override: None,
        }
    }
}

/// Press setup shared by every paper of the order
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintSetup {
    pub method: PrintingMethod,
    pub sides: PrintSides,
    pub plate_price: f64,
    /// Price per printed unit (sheet side)
    pub unit_price: f64,
}

/// A finishing picked on the order form
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FinishingSelection {
    pub technique: FinishingTechnique,
    #[cfg_attr(feature = "serde", serde(default))]
    pub side: FinishingSide,
}

/// Everything needed to quote one product
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuoteRequest {
    pub product: ProductSpec,
    pub quantity: u32,
    pub production: ProductionParameters,
    pub printing: PrintSetup,
    pub papers: Vec<PaperJob>,
    pub finishing: Vec<FinishingSelection>,
    /// User-entered finishing total replacing the computed one
    pub finishing_override: Option<f64>,
}

impl QuoteRequest {
    /// Load a request from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let request = serde_json::from_slice(&bytes)?;
        Ok(request)
    }

    /// Save the request to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Check the request before quoting.
    ///
    /// Quoting itself never fails; this is for front-ends that want to
    /// reject obviously incomplete input up front.
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(ImposeError::Config("Quantity must be at least 1".to_string()));
        }

        if self.papers.is_empty() {
            return Err(ImposeError::Config("No paper specified".to_string()));
        }

        let p = &self.production;
        for (name, value) in [
            ("gripper width", p.gripper_width),
            ("edge margin", p.edge_margin),
            ("gap width", p.gap_width),
            ("bleed width", p.bleed_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ImposeError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        for paper in &self.papers {
            if !paper.sheet.is_valid() {
                return Err(ImposeError::Config(format!(
                    "Paper '{}' has an invalid sheet size {}x{}",
                    paper.name, paper.sheet.width, paper.sheet.height
                )));
            }

            let prices = [paper.pricing.price_per_sheet, paper.pricing.price_per_packet];
            if prices.into_iter().flatten().any(|v| !v.is_finite() || v < 0.0) {
                return Err(ImposeError::Config(format!(
                    "Paper '{}' has a negative price",
                    paper.name
                )));
            }
        }

        if let Some(amount) = self.finishing_override {
            if !amount.is_finite() || amount < 0.0 {
                return Err(ImposeError::Config(
                    "Finishing override must be non-negative".to_string(),
                ));
            }
        }

        Ok(())
    }
}
