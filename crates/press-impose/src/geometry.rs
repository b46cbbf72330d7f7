//! Geometry resolution
//!
//! Turns a product selection into the rectangle used for packing, and
//! picks the packing strategy for that product class. Non-rectangular
//! nets (cups) keep their flat bounding box; gusseted bags get their full
//! dieline width and height derived from the panel dimensions.

use crate::constants::*;
use crate::types::is_positive;

/// Product classes known to the quoting tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProductKind {
    BusinessCard,
    #[default]
    Flyer,
    Brochure,
    Letterhead,
    Poster,
    Sticker,
    Envelope,
    /// Gusseted paper bag
    PaperBag,
    /// Paper cup (circular base, trapezoid wall)
    PaperCup,
    Custom,
}

impl ProductKind {
    /// Flat size used when the declared size is missing (width, height)
    pub fn default_size(self) -> (f64, f64) {
        match self {
            ProductKind::BusinessCard => (9.0, 5.5),
            ProductKind::Flyer => (21.0, 29.7),
            ProductKind::Brochure => (29.7, 21.0),
            ProductKind::Letterhead => (21.0, 29.7),
            ProductKind::Poster => (42.0, 59.4),
            ProductKind::Sticker => (5.0, 5.0),
            ProductKind::Envelope => (22.0, 11.0),
            ProductKind::PaperBag => (25.0, 35.0),
            ProductKind::PaperCup => (20.0, 8.0),
            ProductKind::Custom => (10.0, 10.0),
        }
    }

    /// Packing strategy for this product class
    pub fn strategy(self) -> PackingStrategy {
        match self {
            ProductKind::PaperBag => PackingStrategy::Dieline,
            ProductKind::PaperCup => PackingStrategy::CircularBase,
            _ => PackingStrategy::Grid,
        }
    }
}

/// How the imposition engine treats an item beyond the plain grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackingStrategy {
    /// Plain row/column grid
    #[default]
    Grid,
    /// Bulky package dielines; eligible for the large-dieline target count
    Dieline,
    /// Small tall nets with a circular base; eligible for the minimum yield
    CircularBase,
}

/// Geometry of one item as laid flat
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemGeometry {
    Rectangular {
        width: f64,
        height: f64,
    },
    GussetedDieline {
        panel_width: f64,
        panel_height: f64,
        gusset: f64,
        top_hem: f64,
        bottom_flap: f64,
        glue_flap: f64,
    },
    /// Bounding box of a non-rectangular net; packed as a rectangle
    BoundingBoxOnly {
        width: f64,
        height: f64,
    },
}

impl ItemGeometry {
    /// Bounding rectangle (width, height) used for packing
    pub fn bounding_size(&self) -> (f64, f64) {
        match *self {
            ItemGeometry::Rectangular { width, height }
            | ItemGeometry::BoundingBoxOnly { width, height } => (width, height),
            ItemGeometry::GussetedDieline {
                panel_width,
                panel_height,
                gusset,
                top_hem,
                bottom_flap,
                glue_flap,
            } => (
                2.0 * panel_width + 2.0 * gusset + glue_flap,
                top_hem + panel_height + bottom_flap,
            ),
        }
    }

    pub fn width(&self) -> f64 {
        self.bounding_size().0
    }

    pub fn height(&self) -> f64 {
        self.bounding_size().1
    }

    /// Bounding box area in cm²
    pub fn area(&self) -> f64 {
        let (w, h) = self.bounding_size();
        w * h
    }

    /// False when the bounding box has no usable area
    pub fn is_valid(&self) -> bool {
        let (w, h) = self.bounding_size();
        is_positive(w) && is_positive(h)
    }
}

/// Build a gusseted bag dieline from its panel dimensions
pub fn gusseted_dieline(panel_width: f64, panel_height: f64, gusset: f64) -> ItemGeometry {
    ItemGeometry::GussetedDieline {
        panel_width,
        panel_height,
        gusset,
        top_hem: BAG_TOP_HEM_MIN_CM.max(BAG_TOP_HEM_RATIO * panel_width),
        bottom_flap: BAG_BOTTOM_FLAP_MIN_CM.max(BAG_BOTTOM_FLAP_RATIO * panel_width),
        glue_flap: BAG_GLUE_FLAP_CM,
    }
}

/// Named bag size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BagPreset {
    pub name: &'static str,
    pub panel_width: f64,
    pub panel_height: f64,
    pub gusset: f64,
}

/// Bag sizes offered by the shop
pub const BAG_PRESETS: &[BagPreset] = &[
    BagPreset {
        name: "small",
        panel_width: 18.0,
        panel_height: 23.0,
        gusset: 8.0,
    },
    BagPreset {
        name: "medium",
        panel_width: 25.0,
        panel_height: 32.0,
        gusset: 10.0,
    },
    BagPreset {
        name: "large",
        panel_width: 32.0,
        panel_height: 42.0,
        gusset: 12.0,
    },
    BagPreset {
        name: "wine",
        panel_width: 11.0,
        panel_height: 36.0,
        gusset: 9.0,
    },
];

impl BagPreset {
    /// Look up a preset by name (case-insensitive)
    pub fn find(name: &str) -> Option<&'static BagPreset> {
        let name = name.trim();
        BAG_PRESETS
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    pub fn dieline(&self) -> ItemGeometry {
        gusseted_dieline(self.panel_width, self.panel_height, self.gusset)
    }
}

/// Product selection as received from the order form
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProductSpec {
    pub kind: ProductKind,
    pub flat_width: Option<f64>,
    pub flat_height: Option<f64>,
    /// Bag preset name, only read for `PaperBag`
    pub bag_preset: Option<String>,
}

impl ProductSpec {
    pub fn new(kind: ProductKind, flat_width: f64, flat_height: f64) -> Self {
        Self {
            kind,
            flat_width: Some(flat_width),
            flat_height: Some(flat_height),
            bag_preset: None,
        }
    }

    /// Declared flat size, or the product default when either side is unusable
    pub fn flat_size(&self) -> (f64, f64) {
        match (self.flat_width, self.flat_height) {
            (Some(w), Some(h)) if is_positive(w) && is_positive(h) => (w, h),
            _ => self.kind.default_size(),
        }
    }
}

/// Packing input for one product
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedItem {
    pub kind: ProductKind,
    pub geometry: ItemGeometry,
    pub strategy: PackingStrategy,
}

impl ResolvedItem {
    /// Bounding rectangle (width, height)
    pub fn size(&self) -> (f64, f64) {
        self.geometry.bounding_size()
    }

    /// True when the geometry cannot be packed; not a valid degenerate layout
    pub fn is_insufficient(&self) -> bool {
        !self.geometry.is_valid()
    }
}

/// Resolve the packing rectangle and strategy for a product selection.
///
/// Never fails: unusable dimensions fall back to the product default and
/// an unknown bag preset falls back to the declared flat size.
pub fn resolve_geometry(spec: &ProductSpec) -> ResolvedItem {
    let (flat_width, flat_height) = spec.flat_size();

    let geometry = match spec.kind {
        ProductKind::PaperBag => match spec.bag_preset.as_deref().and_then(BagPreset::find) {
            Some(preset) => preset.dieline(),
            None => {
                if let Some(name) = &spec.bag_preset {
                    log::debug!("Unknown bag preset '{}', using flat size", name);
                }
                ItemGeometry::Rectangular {
                    width: flat_width,
                    height: flat_height,
                }
            }
        },
        ProductKind::PaperCup => ItemGeometry::BoundingBoxOnly {
            width: flat_width,
            height: flat_height,
        },
        _ => ItemGeometry::Rectangular {
            width: flat_width,
            height: flat_height,
        },
    };

    ResolvedItem {
        kind: spec.kind,
        geometry,
        strategy: spec.kind.strategy(),
    }
}
