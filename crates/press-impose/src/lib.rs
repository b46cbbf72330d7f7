pub mod constants;
mod finishing;
mod geometry;
pub mod impose;
pub mod layout;
mod options;
mod pricing;
mod production;
mod quote;
mod sheets;
mod types;

pub use finishing::*;
pub use geometry::*;
pub use impose::{efficiency_percent, impose, impose_rect};
pub use options::*;
pub use pricing::*;
pub use production::*;
pub use quote::{JobQuote, Quote, QuoteWarning, quote};
pub use sheets::*;
pub use types::*;
