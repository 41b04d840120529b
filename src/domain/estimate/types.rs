//! Inputs and outputs of the estimate engine.
//!
//! Job-input structs are assembled by the conversation layer from the
//! customer record; estimate structs are the priced result shown to the
//! customer and attached to the lead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of home at the pickup location. Drives base loading hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeType {
    Apartment,
    House,
    Condo,
    Storage,
}

impl HomeType {
    pub fn token(&self) -> &'static str {
        match self {
            HomeType::Apartment => "apartment",
            HomeType::House => "house",
            HomeType::Condo => "condo",
            HomeType::Storage => "storage",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "apartment" => Some(HomeType::Apartment),
            "house" => Some(HomeType::House),
            "condo" => Some(HomeType::Condo),
            "storage" => Some(HomeType::Storage),
            _ => None,
        }
    }
}

/// How much packing help the customer wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingService {
    Full,
    Partial,
    No,
}

impl PackingService {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "full" => Some(PackingService::Full),
            "partial" => Some(PackingService::Partial),
            "no" => Some(PackingService::No),
            _ => None,
        }
    }
}

/// What happens at a third location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirdLocationAction {
    DropOnly,
    PickOnly,
    Both,
}

impl ThirdLocationAction {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "drop_only" => Some(ThirdLocationAction::DropOnly),
            "pick_only" => Some(ThirdLocationAction::PickOnly),
            "both" => Some(ThirdLocationAction::Both),
            _ => None,
        }
    }

    /// Picking up at the third stop adds loading time.
    pub fn includes_pickup(&self) -> bool {
        matches!(self, ThirdLocationAction::PickOnly | ThirdLocationAction::Both)
    }
}

/// One measured route leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegMeasure {
    pub miles: f64,
    pub hours: f64,
}

/// All measured legs of the route, populated by the distance hook.
///
/// `final_return_to_base` is destination→base for two-stop jobs and
/// third-location→base when a third stop exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelPlan {
    pub base_to_pickup: Option<LegMeasure>,
    pub pickup_to_destination: Option<LegMeasure>,
    pub destination_to_third: Option<LegMeasure>,
    pub final_return_to_base: Option<LegMeasure>,
    /// Whether any measured leg reported tolls.
    pub has_tolls: bool,
    /// True when the provider failed and fixed fallback legs were used.
    pub used_fallback: bool,
}

impl TravelPlan {
    /// Miles from dispatch to the pickup address.
    pub fn pickup_miles(&self) -> Option<f64> {
        self.base_to_pickup.map(|leg| leg.miles)
    }

    /// One-way trip miles between pickup and destination.
    pub fn trip_miles(&self) -> Option<f64> {
        self.pickup_to_destination.map(|leg| leg.miles)
    }

    /// Customer-facing total of every measured leg.
    pub fn total_miles(&self) -> f64 {
        [
            self.base_to_pickup,
            self.pickup_to_destination,
            self.destination_to_third,
            self.final_return_to_base,
        ]
        .iter()
        .flatten()
        .map(|leg| leg.miles)
        .sum()
    }
}

/// Everything the moving calculator needs from the record.
#[derive(Debug, Clone)]
pub struct MovingJobInputs {
    pub home_type: HomeType,
    pub bedrooms_from: Option<u32>,
    pub bedrooms_to: Option<u32>,
    pub stairs_from: u32,
    pub stairs_to: u32,
    pub stairs_third: u32,
    pub has_third_location: bool,
    pub third_action: Option<ThirdLocationAction>,
    pub appliances: Vec<String>,
    pub third_location_appliances: Vec<String>,
    pub tv_sizes: Vec<String>,
    pub tv_boxes: Vec<String>,
    pub shop_equipment: Vec<String>,
    pub oversized_furniture: Vec<String>,
    pub special_items: Vec<String>,
    /// A spinet or upright piano is coming; bill the board rental.
    pub piano_board: bool,
    pub access_multiplier: f64,
    pub crew_size: u32,
    pub travel: TravelPlan,
    pub packing_service: PackingService,
    pub needs_packing_materials: bool,
    pub total_rooms: Option<u32>,
    pub coverage_cost: Decimal,
    pub is_same_day: bool,
}

/// Everything the labor-only calculator needs from the record.
#[derive(Debug, Clone)]
pub struct LaborJobInputs {
    pub crew_size: u32,
    pub hours: f64,
    pub stairs_from: u32,
    pub stairs_to: u32,
    pub has_third_location: bool,
    pub special_items: Vec<String>,
    pub shop_equipment: Vec<String>,
    pub oversized_furniture: Vec<String>,
    /// A spinet or upright piano is coming; bill the board rental.
    pub piano_board: bool,
    pub travel: TravelPlan,
    pub is_same_day: bool,
}

/// Everything the single-item calculator needs from the record.
///
/// Overrides take precedence over the category table; the custom-item
/// path fills them from the weight class the customer picked.
#[derive(Debug, Clone)]
pub struct SingleItemJobInputs {
    pub category_token: String,
    pub item_label: Option<String>,
    pub crew_override: Option<u32>,
    pub minimum_minutes_override: Option<u32>,
    pub fee_override: Option<Decimal>,
    pub weight_override: Option<u32>,
    pub stairs_pickup: u32,
    pub stairs_delivery: u32,
    pub travel: TravelPlan,
    pub is_same_day: bool,
}

/// One line of a packing-materials quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub label: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Itemized packing materials with a rounded total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialsQuote {
    pub lines: Vec<MaterialLine>,
    pub total: Decimal,
}

/// Priced moving estimate, itemized the way it is read back to the
/// customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingEstimate {
    pub loading_hours: f64,
    pub drive_hours: f64,
    pub packing_hours: f64,
    pub total_hours: f64,
    pub crew_size: u32,
    pub hourly_rate: Decimal,
    pub base_cost: Decimal,
    pub service_charge: Decimal,
    pub special_item_fees: Decimal,
    pub piano_board_fee: Decimal,
    pub heavy_item_fees: Decimal,
    pub tv_box_fees: Decimal,
    pub shop_equipment_fees: Decimal,
    pub oversized_fees: Decimal,
    pub stair_fees: Decimal,
    pub packing_cost: Decimal,
    pub packing_materials: Option<MaterialsQuote>,
    pub toll_estimate: Decimal,
    pub coverage_cost: Decimal,
    pub same_day_fee: Decimal,
    pub total: Decimal,
}

/// Priced labor-only estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborEstimate {
    pub crew_size: u32,
    pub labor_hours: f64,
    pub drive_hours: f64,
    pub total_miles: f64,
    pub hourly_rate: Decimal,
    pub labor_cost: Decimal,
    pub travel_cost: Decimal,
    pub service_charge: Decimal,
    pub stair_fees: Decimal,
    pub special_item_fees: Decimal,
    pub piano_board_fee: Decimal,
    pub heavy_item_fees: Decimal,
    pub shop_equipment_fees: Decimal,
    pub oversized_fees: Decimal,
    pub same_day_fee: Decimal,
    pub total: Decimal,
}

/// Priced single-item delivery estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleItemEstimate {
    pub item_label: String,
    pub crew_size: u32,
    pub minimum_minutes: u32,
    pub drive_minutes: u32,
    pub billable_minutes: u32,
    pub hourly_rate: Decimal,
    pub base_cost: Decimal,
    pub distance_cost: Decimal,
    pub stair_fees: Decimal,
    pub item_fee: Decimal,
    pub heavy_item_fee: Decimal,
    pub same_day_fee: Decimal,
    pub total_miles: f64,
    pub total: Decimal,
}

/// The one estimate attached to a conversation. Always replaced whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PricedEstimate {
    Moving(MovingEstimate),
    Labor(LaborEstimate),
    SingleItem(SingleItemEstimate),
}

impl PricedEstimate {
    pub fn total(&self) -> Decimal {
        match self {
            PricedEstimate::Moving(estimate) => estimate.total,
            PricedEstimate::Labor(estimate) => estimate.total,
            PricedEstimate::SingleItem(estimate) => estimate.total,
        }
    }

    pub fn service_name(&self) -> &'static str {
        match self {
            PricedEstimate::Moving(_) => "moving",
            PricedEstimate::Labor(_) => "labor",
            PricedEstimate::SingleItem(_) => "single_item",
        }
    }
}
