/// Printing process, which fixes the plates needed per printed side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrintingMethod {
    /// No plates
    Digital,
    SingleColor,
    TwoColor,
    /// CMYK offset
    #[default]
    FourColor,
}

impl PrintingMethod {
    pub fn plates_per_side(self) -> u32 {
        match self {
            PrintingMethod::Digital => 0,
            PrintingMethod::SingleColor => 1,
            PrintingMethod::TwoColor => 2,
            PrintingMethod::FourColor => 4,
        }
    }
}

/// Printed sides per sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrintSides {
    #[default]
    Single,
    Double,
}

impl PrintSides {
    pub fn count(self) -> u32 {
        match self {
            PrintSides::Single => 1,
            PrintSides::Double => 2,
        }
    }
}

/// A computed quantity and the value actually used after a user override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overridable {
    pub computed: u32,
    pub effective: u32,
}

impl Overridable {
    pub fn new(computed: u32, user_value: Option<u32>) -> Self {
        Self {
            computed,
            effective: user_value.unwrap_or(computed),
        }
    }

    pub fn is_overridden(&self) -> bool {
        self.computed != self.effective
    }
}

/// Plates for a job: sides × plates per side
pub fn plate_count(sides: PrintSides, method: PrintingMethod) -> u32 {
    sides.count() * method.plates_per_side()
}

/// Printed units for a job: sheets × sides
pub fn unit_count(sheets: u32, sides: PrintSides) -> u32 {
    sheets.saturating_mul(sides.count())
}
