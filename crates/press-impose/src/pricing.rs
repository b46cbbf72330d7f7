//! Paper material cost
//!
//! Paper is sold by the sheet, by the packet, or both. When both prices
//! are known the run is bought as whole packets first and the remainder as
//! loose sheets. That split is the agreed pricing rule; it is not searched
//! for the cheapest combination.

use crate::types::non_negative;

/// Pricing fields of one paper record
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaperPricing {
    pub price_per_sheet: Option<f64>,
    pub price_per_packet: Option<f64>,
    pub sheets_per_packet: Option<u32>,
}

impl PaperPricing {
    pub fn per_sheet(price: f64) -> Self {
        Self {
            price_per_sheet: Some(price),
            ..Default::default()
        }
    }

    pub fn per_packet(price: f64, sheets_per_packet: u32) -> Self {
        Self {
            price_per_packet: Some(price),
            sheets_per_packet: Some(sheets_per_packet),
            ..Default::default()
        }
    }

    pub fn hybrid(price_per_sheet: f64, price_per_packet: f64, sheets_per_packet: u32) -> Self {
        Self {
            price_per_sheet: Some(price_per_sheet),
            price_per_packet: Some(price_per_packet),
            sheets_per_packet: Some(sheets_per_packet),
        }
    }

    /// Pricing mode these fields select
    pub fn mode(&self) -> PricingMode {
        let packet = self.price_per_packet.is_some() && self.packet_size().is_some();
        match (self.price_per_sheet.is_some(), packet) {
            (true, true) => PricingMode::Hybrid,
            (true, false) => PricingMode::SheetOnly,
            (false, true) => PricingMode::PacketOnly,
            (false, false) => PricingMode::Incomplete,
        }
    }

    fn packet_size(&self) -> Option<u32> {
        self.sheets_per_packet.filter(|&n| n > 0)
    }
}

/// How a material cost was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingMode {
    SheetOnly,
    PacketOnly,
    Hybrid,
    /// No usable price; the zero cost means "not yet computable"
    #[default]
    Incomplete,
}

/// Material cost breakdown for a sheet count
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialCost {
    pub mode: PricingMode,
    pub sheets: u32,
    /// Packets bought (whole packets in hybrid mode)
    pub packets: u32,
    /// Sheets bought loose
    pub loose_sheets: u32,
    pub total: f64,
    /// Effective cost per sheet, 0 when no sheets
    pub per_sheet: f64,
}

impl MaterialCost {
    pub fn is_incomplete(&self) -> bool {
        self.mode == PricingMode::Incomplete
    }
}

/// Material cost of `sheets` sheets
pub fn material_cost(pricing: &PaperPricing, sheets: u32) -> MaterialCost {
    let mode = pricing.mode();
    let sheet_price = non_negative(pricing.price_per_sheet.unwrap_or_default());
    let packet_price = non_negative(pricing.price_per_packet.unwrap_or_default());
    let packet_size = pricing.packet_size().unwrap_or(1);

    let (packets, loose_sheets) = match mode {
        PricingMode::SheetOnly => (0, sheets),
        PricingMode::PacketOnly => (sheets.div_ceil(packet_size), 0),
        PricingMode::Hybrid => (sheets / packet_size, sheets % packet_size),
        PricingMode::Incomplete => (0, 0),
    };

    let total = packets as f64 * packet_price + loose_sheets as f64 * sheet_price;
    let per_sheet = if sheets > 0 {
        total / sheets as f64
    } else {
        0.0
    };

    MaterialCost {
        mode,
        sheets,
        packets,
        loose_sheets,
        total,
        per_sheet,
    }
}
