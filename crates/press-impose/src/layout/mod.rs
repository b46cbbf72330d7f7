//! Layout calculation modules for imposition
//!
//! This module handles the geometric calculations for packing items:
//! - Grid layout (gripper placement, usable area, row/column counts)
//! - Packing policies (compact gap, large dielines, minimum yield)

mod grid;
mod policy;

pub use grid::*;
pub use policy::*;
