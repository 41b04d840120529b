//! Estimate engine.
//!
//! Pure pricing functions over assembled job inputs. No I/O and no
//! conversation state; the dialog layer builds the input structs and the
//! calculators return itemized estimates.

pub mod coverage;
pub mod labor;
pub mod moving;
pub mod packing;
pub mod single_item;
pub mod types;

pub use coverage::coverage_cost;
pub use labor::labor_estimate;
pub use moving::moving_estimate;
pub use packing::{materials_quote, packing_hours, MaterialsContext};
pub use single_item::single_item_estimate;
pub use types::{
    HomeType, LaborEstimate, LaborJobInputs, LegMeasure, MaterialLine, MaterialsQuote,
    MovingEstimate, MovingJobInputs, PackingService, PricedEstimate, SingleItemEstimate,
    SingleItemJobInputs, ThirdLocationAction, TravelPlan,
};
