//! Rate book and item catalogs.
//!
//! Static pricing data for every service the dialog quotes. The rest of
//! the domain reads these tables; nothing here depends on conversation
//! state.

pub mod catalog;
pub mod materials;
pub mod tables;

pub use catalog::{
    exclusion_label, is_excluded, tv_box_for, HandlingRate, SingleItemCategory, TvBoxRate,
    APPLIANCES, EXCLUDED_ITEMS, OVERSIZED_FURNITURE, SHOP_EQUIPMENT, SINGLE_ITEM_CATEGORIES,
    SPECIAL_ITEMS, TV_BOXES, TV_SIZES,
};
pub use materials::{material, MaterialRate, MATERIALS};
pub use tables::{
    AccessFactors, CoverageRates, LaborRates, MovingRates, RateBook, SingleItemRates, RATES,
};
