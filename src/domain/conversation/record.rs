//! The conversation record: every answer collected so far.
//!
//! Append-mostly. Each field is written by the stage that owns it; the one
//! cross-cutting field, the crew floor, is private and can only be raised.
//! The record is what gets snapshotted for navigation, persisted between
//! visits, and handed to the estimate calculators.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::estimate::{
    HomeType, LaborJobInputs, MovingJobInputs, PackingService, PricedEstimate,
    SingleItemJobInputs, ThirdLocationAction, TravelPlan,
};
use crate::domain::rates::RATES;

/// Which of the five sub-graphs the customer picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Moving,
    Labor,
    Single,
    Questions,
    InsuranceClaim,
}

impl ServiceType {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "moving" => Some(Self::Moving),
            "labor" => Some(Self::Labor),
            "single" => Some(Self::Single),
            "questions" => Some(Self::Questions),
            "insurance_claim" => Some(Self::InsuranceClaim),
            _ => None,
        }
    }

    /// Customer-facing service name, article-free.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Moving => "full moving service",
            Self::Labor => "labor crew",
            Self::Single => "single item move",
            Self::Questions => "questions",
            Self::InsuranceClaim => "insurance claim",
        }
    }
}

/// Over/under the 2,600 sq ft line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeSizeClass {
    Standard,
    Large,
}

impl HomeSizeClass {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "standard" => Some(Self::Standard),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}

/// Distance from parking to the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessClass {
    Normal,
    LongWalk,
}

impl AccessClass {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "normal" => Some(Self::Normal),
            "long_walk" => Some(Self::LongWalk),
            _ => None,
        }
    }
}

/// How large TVs travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TvPackingChoice {
    HaveBoxes,
    NeedBoxes,
    NoBoxes,
}

impl TvPackingChoice {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "have_boxes" => Some(Self::HaveBoxes),
            "need_boxes" => Some(Self::NeedBoxes),
            "no_boxes" => Some(Self::NoBoxes),
            _ => None,
        }
    }
}

/// Piano follow-up answer. Grand pianos are not moved in-house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PianoKind {
    Spinet,
    Upright,
    Grand,
}

impl PianoKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "spinet" => Some(Self::Spinet),
            "upright" => Some(Self::Upright),
            "grand" => Some(Self::Grand),
            _ => None,
        }
    }

    /// Crew floor this piano imposes; `None` means a specialist referral.
    pub fn crew_floor(&self) -> Option<u32> {
        match self {
            Self::Spinet => Some(3),
            Self::Upright => Some(4),
            Self::Grand => None,
        }
    }
}

/// Safe sizing answer. Each outcome sets a crew floor; the heavy-with-stairs
/// and unsure outcomes also require a phone consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeSizing {
    LightNoStairs,
    LightWithStairs,
    HeavyNoStairs,
    HeavyWithStairs,
    Unsure,
}

impl SafeSizing {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "light_no_stairs" => Some(Self::LightNoStairs),
            "light_with_stairs" => Some(Self::LightWithStairs),
            "heavy_no_stairs" => Some(Self::HeavyNoStairs),
            "heavy_with_stairs" => Some(Self::HeavyWithStairs),
            "unsure" => Some(Self::Unsure),
            _ => None,
        }
    }

    pub fn crew_floor(&self) -> u32 {
        match self {
            Self::LightNoStairs | Self::Unsure => 3,
            Self::LightWithStairs | Self::HeavyNoStairs | Self::HeavyWithStairs => 4,
        }
    }

    pub fn needs_phone_call(&self) -> bool {
        matches!(self, Self::HeavyWithStairs | Self::Unsure)
    }
}

/// Weight class for an item described in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    Light,
    Heavy,
    ExtraHeavy,
}

impl WeightClass {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Self::Light),
            "heavy" => Some(Self::Heavy),
            "extra_heavy" => Some(Self::ExtraHeavy),
            _ => None,
        }
    }

    /// Provisional crew for an uncatalogued item.
    pub fn crew(&self) -> u32 {
        match self {
            Self::Light | Self::Heavy => 2,
            Self::ExtraHeavy => 3,
        }
    }

    /// Provisional minimum billable minutes.
    pub fn minimum_minutes(&self) -> u32 {
        match self {
            Self::Light => 60,
            Self::Heavy | Self::ExtraHeavy => 90,
        }
    }

    /// Provisional weight used against the heavy-item threshold.
    pub fn weight_lbs(&self) -> u32 {
        match self {
            Self::Light => 100,
            Self::Heavy => 250,
            Self::ExtraHeavy => 350,
        }
    }
}

/// Single-item category menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Furniture,
    Appliance,
    Set,
    Heavy,
    Other,
}

impl ItemCategory {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "category_furniture" => Some(Self::Furniture),
            "category_appliance" => Some(Self::Appliance),
            "category_set" => Some(Self::Set),
            "category_heavy" => Some(Self::Heavy),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Coverage election at the quote stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveragePlan {
    /// Included carrier liability, no charge.
    Standard,
    /// Full value protection, priced from declared value and deductible.
    FullValue,
    /// Explicitly skipped.
    Declined,
}

impl CoveragePlan {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "standard" => Some(Self::Standard),
            "fvp" => Some(Self::FullValue),
            "skip" => Some(Self::Declined),
            _ => None,
        }
    }
}

/// Coverage the claimant held, for insurance-claim intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimCoverage {
    StandardCoverage,
    FvpCoverage,
}

impl ClaimCoverage {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "standard_coverage" => Some(Self::StandardCoverage),
            "fvp_coverage" => Some(Self::FvpCoverage),
            _ => None,
        }
    }
}

fn default_minimum_crew() -> u32 {
    2
}

/// Every answer collected over one conversation.
///
/// Deserialization defaults missing fields so snapshots written by older
/// builds keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    // Contact.
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    // Service framing.
    pub service_type: Option<ServiceType>,
    pub service_date: Option<NaiveDate>,
    pub is_same_day: bool,
    pub is_short_notice: bool,
    pub pest_disclaimer_agreed: bool,

    // Addresses and measured travel.
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    pub third_address: Option<String>,
    pub has_third_location: bool,
    pub third_location_action: Option<ThirdLocationAction>,
    pub travel: Option<TravelPlan>,

    // Per-location details.
    pub stairs_from: u32,
    pub stairs_to: u32,
    pub stairs_third: u32,
    pub home_type_from: Option<HomeType>,
    pub home_type_to: Option<HomeType>,
    pub home_size_from: Option<HomeSizeClass>,
    pub home_size_to: Option<HomeSizeClass>,
    pub access_from: Option<AccessClass>,
    pub bedrooms_from: Option<u32>,
    pub bedrooms_to: Option<u32>,
    pub bedrooms_third: Option<u32>,

    // Belongings, keyed by catalog token.
    pub tv_sizes: Vec<String>,
    pub tv_packing: Option<TvPackingChoice>,
    pub tv_boxes: Vec<String>,
    pub appliances: Vec<String>,
    pub third_location_appliances: Vec<String>,
    pub shop_equipment: Vec<String>,
    pub oversized_furniture: Vec<String>,
    pub special_items: Vec<String>,
    /// Items the customer picked that we do not move. Announced, then kept
    /// out of every fee-bearing list.
    pub excluded_items: Vec<String>,
    pub piano_type: Option<PianoKind>,
    pub piano_board: bool,
    pub safe_sizing: Option<SafeSizing>,

    // Crew and hours.
    #[serde(default = "default_minimum_crew")]
    minimum_crew_size: u32,
    pub crew_size: Option<u32>,
    pub labor_hours: Option<u32>,
    pub requires_phone_call: bool,

    // Packing.
    pub needs_packing_materials: bool,
    pub total_rooms: Option<u32>,
    pub packing_service: Option<PackingService>,

    // Single item.
    pub item_category: Option<ItemCategory>,
    pub item_token: Option<String>,
    pub item_label: Option<String>,
    pub item_weight_class: Option<WeightClass>,

    // Coverage.
    pub coverage_plan: Option<CoveragePlan>,
    pub declared_value: Option<i64>,
    pub coverage_deductible: Option<u32>,
    pub coverage_cost: Decimal,

    // Photos.
    pub has_photos: bool,
    pub photo_urls: Vec<String>,
    pub photo_category: Option<String>,

    // Insurance claims.
    pub claim_coverage: Option<ClaimCoverage>,
    pub damage_description: Option<String>,

    // Result of the estimate engine, attached at the quote stage.
    pub estimate: Option<PricedEstimate>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            first_name: None,
            last_name: None,
            email: None,
            phone: None,
            service_type: None,
            service_date: None,
            is_same_day: false,
            is_short_notice: false,
            pest_disclaimer_agreed: false,
            from_address: None,
            to_address: None,
            third_address: None,
            has_third_location: false,
            third_location_action: None,
            travel: None,
            stairs_from: 0,
            stairs_to: 0,
            stairs_third: 0,
            home_type_from: None,
            home_type_to: None,
            home_size_from: None,
            home_size_to: None,
            access_from: None,
            bedrooms_from: None,
            bedrooms_to: None,
            bedrooms_third: None,
            tv_sizes: Vec::new(),
            tv_packing: None,
            tv_boxes: Vec::new(),
            appliances: Vec::new(),
            third_location_appliances: Vec::new(),
            shop_equipment: Vec::new(),
            oversized_furniture: Vec::new(),
            special_items: Vec::new(),
            excluded_items: Vec::new(),
            piano_type: None,
            piano_board: false,
            safe_sizing: None,
            minimum_crew_size: default_minimum_crew(),
            crew_size: None,
            labor_hours: None,
            requires_phone_call: false,
            needs_packing_materials: false,
            total_rooms: None,
            packing_service: None,
            item_category: None,
            item_token: None,
            item_label: None,
            item_weight_class: None,
            coverage_plan: None,
            declared_value: None,
            coverage_deductible: None,
            coverage_cost: Decimal::ZERO,
            has_photos: false,
            photo_urls: Vec::new(),
            photo_category: None,
            claim_coverage: None,
            damage_description: None,
            estimate: None,
        }
    }
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// "First Last" once both halves are known.
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => None,
        }
    }

    /// The current crew floor. Starts at 2.
    pub fn minimum_crew_size(&self) -> u32 {
        self.minimum_crew_size
    }

    /// Raises the crew floor. Lower values are ignored, so the floor is
    /// monotone over any input sequence.
    pub fn raise_minimum_crew_size(&mut self, floor: u32) {
        self.minimum_crew_size = self.minimum_crew_size.max(floor);
    }

    /// Loading-hours multiplier from the access answers.
    ///
    /// A large home at either end counts once; combined with a long carry
    /// the factor is the flat combined rate, not the product.
    pub fn access_multiplier(&self) -> f64 {
        let large = self.home_size_from == Some(HomeSizeClass::Large)
            || self.home_size_to == Some(HomeSizeClass::Large);
        let long_walk = self.access_from == Some(AccessClass::LongWalk);
        let access = &RATES.access;
        match (large, long_walk) {
            (true, true) => access.combined,
            (true, false) => access.large_home,
            (false, true) => access.long_walk,
            (false, false) => 1.0,
        }
    }

    fn travel_plan(&self) -> TravelPlan {
        self.travel.clone().unwrap_or_default()
    }

    /// Assembles the moving calculator's inputs from the answers so far.
    pub fn moving_inputs(&self) -> MovingJobInputs {
        MovingJobInputs {
            home_type: self.home_type_from.unwrap_or(HomeType::House),
            bedrooms_from: self.bedrooms_from,
            bedrooms_to: self.bedrooms_to.or(self.bedrooms_third),
            stairs_from: self.stairs_from,
            stairs_to: self.stairs_to,
            stairs_third: self.stairs_third,
            has_third_location: self.has_third_location,
            third_action: self.third_location_action,
            appliances: self.appliances.clone(),
            third_location_appliances: self.third_location_appliances.clone(),
            tv_sizes: self.tv_sizes.clone(),
            tv_boxes: self.tv_boxes.clone(),
            shop_equipment: self.shop_equipment.clone(),
            oversized_furniture: self.oversized_furniture.clone(),
            special_items: self.special_items.clone(),
            piano_board: self.piano_board,
            access_multiplier: self.access_multiplier(),
            crew_size: self.crew_size.unwrap_or(2),
            travel: self.travel_plan(),
            packing_service: self.packing_service.unwrap_or(PackingService::No),
            needs_packing_materials: self.needs_packing_materials,
            total_rooms: self.total_rooms,
            coverage_cost: self.coverage_cost,
            is_same_day: self.is_same_day,
        }
    }

    /// Assembles the labor calculator's inputs from the answers so far.
    pub fn labor_inputs(&self) -> LaborJobInputs {
        LaborJobInputs {
            crew_size: self.crew_size.unwrap_or(2),
            hours: f64::from(self.labor_hours.unwrap_or(2)),
            stairs_from: self.stairs_from,
            stairs_to: self.stairs_to,
            has_third_location: self.has_third_location,
            special_items: self.special_items.clone(),
            shop_equipment: self.shop_equipment.clone(),
            oversized_furniture: self.oversized_furniture.clone(),
            piano_board: self.piano_board,
            travel: self.travel_plan(),
            is_same_day: self.is_same_day,
        }
    }

    /// Assembles the single-item calculator's inputs from the answers so far.
    ///
    /// Catalogued items carry only their token; described items carry the
    /// weight-class overrides.
    pub fn single_item_inputs(&self) -> SingleItemJobInputs {
        let overrides = self.item_weight_class;
        SingleItemJobInputs {
            category_token: self.item_token.clone().unwrap_or_else(|| "other".into()),
            item_label: self.item_label.clone(),
            crew_override: overrides.map(|w| w.crew()),
            minimum_minutes_override: overrides.map(|w| w.minimum_minutes()),
            fee_override: None,
            weight_override: overrides.map(|w| w.weight_lbs()),
            stairs_pickup: self.stairs_from,
            stairs_delivery: self.stairs_to,
            travel: self.travel_plan(),
            is_same_day: self.is_same_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod crew_floor {
        use super::*;

        #[test]
        fn starts_at_two() {
            assert_eq!(Record::new().minimum_crew_size(), 2);
        }

        #[test]
        fn raising_takes_the_maximum() {
            let mut record = Record::new();
            record.raise_minimum_crew_size(4);
            record.raise_minimum_crew_size(3);
            assert_eq!(record.minimum_crew_size(), 4);
        }

        #[test]
        fn raising_below_current_is_a_no_op() {
            let mut record = Record::new();
            record.raise_minimum_crew_size(1);
            assert_eq!(record.minimum_crew_size(), 2);
        }
    }

    mod access_multiplier {
        use super::*;

        #[test]
        fn defaults_to_one() {
            assert_eq!(Record::new().access_multiplier(), 1.0);
        }

        #[test]
        fn large_home_at_either_end_counts() {
            let mut record = Record::new();
            record.home_size_to = Some(HomeSizeClass::Large);
            assert_eq!(record.access_multiplier(), 1.15);
        }

        #[test]
        fn long_walk_counts() {
            let mut record = Record::new();
            record.access_from = Some(AccessClass::LongWalk);
            assert_eq!(record.access_multiplier(), 1.15);
        }

        #[test]
        fn combined_factor_is_flat_not_product() {
            let mut record = Record::new();
            record.home_size_from = Some(HomeSizeClass::Large);
            record.access_from = Some(AccessClass::LongWalk);
            assert_eq!(record.access_multiplier(), 1.25);
        }
    }

    mod answer_parsing {
        use super::*;

        #[test]
        fn service_type_parses_option_tokens() {
            assert_eq!(ServiceType::parse("moving"), Some(ServiceType::Moving));
            assert_eq!(
                ServiceType::parse("insurance_claim"),
                Some(ServiceType::InsuranceClaim)
            );
            assert_eq!(ServiceType::parse("teleport"), None);
        }

        #[test]
        fn piano_floors_match_piano_kind() {
            assert_eq!(PianoKind::Spinet.crew_floor(), Some(3));
            assert_eq!(PianoKind::Upright.crew_floor(), Some(4));
            assert_eq!(PianoKind::Grand.crew_floor(), None);
        }

        #[test]
        fn two_safe_outcomes_need_a_phone_call() {
            let calls: Vec<SafeSizing> = [
                SafeSizing::LightNoStairs,
                SafeSizing::LightWithStairs,
                SafeSizing::HeavyNoStairs,
                SafeSizing::HeavyWithStairs,
                SafeSizing::Unsure,
            ]
            .into_iter()
            .filter(SafeSizing::needs_phone_call)
            .collect();
            assert_eq!(calls, vec![SafeSizing::HeavyWithStairs, SafeSizing::Unsure]);
        }

        #[test]
        fn every_safe_outcome_sets_a_floor_of_three_or_four() {
            for sizing in [
                SafeSizing::LightNoStairs,
                SafeSizing::LightWithStairs,
                SafeSizing::HeavyNoStairs,
                SafeSizing::HeavyWithStairs,
                SafeSizing::Unsure,
            ] {
                assert!((3..=4).contains(&sizing.crew_floor()));
            }
        }

        #[test]
        fn extra_heavy_custom_items_cross_the_fee_threshold() {
            assert!(WeightClass::ExtraHeavy.weight_lbs() >= 300);
            assert!(WeightClass::Heavy.weight_lbs() < 300);
        }
    }

    mod estimate_inputs {
        use super::*;

        #[test]
        fn moving_inputs_default_missing_answers() {
            let record = Record::new();
            let inputs = record.moving_inputs();
            assert_eq!(inputs.home_type, HomeType::House);
            assert_eq!(inputs.crew_size, 2);
            assert_eq!(inputs.packing_service, PackingService::No);
            assert_eq!(inputs.access_multiplier, 1.0);
        }

        #[test]
        fn labor_inputs_floor_hours_at_the_minimum() {
            let record = Record::new();
            assert_eq!(record.labor_inputs().hours, 2.0);
        }

        #[test]
        fn custom_item_weight_class_fills_the_overrides() {
            let mut record = Record::new();
            record.item_token = Some("other".into());
            record.item_label = Some("Antique armoire".into());
            record.item_weight_class = Some(WeightClass::ExtraHeavy);
            let inputs = record.single_item_inputs();
            assert_eq!(inputs.crew_override, Some(3));
            assert_eq!(inputs.minimum_minutes_override, Some(90));
            assert_eq!(inputs.weight_override, Some(350));
        }

        #[test]
        fn catalogued_item_carries_no_overrides() {
            let mut record = Record::new();
            record.item_token = Some("couch".into());
            let inputs = record.single_item_inputs();
            assert_eq!(inputs.category_token, "couch");
            assert_eq!(inputs.crew_override, None);
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn record_round_trips_through_json() {
            let mut record = Record::new();
            record.first_name = Some("Dana".into());
            record.last_name = Some("Whitfield".into());
            record.service_type = Some(ServiceType::Moving);
            record.stairs_from = 2;
            record.special_items = vec!["piano".into()];
            record.raise_minimum_crew_size(3);

            let json = serde_json::to_string(&record).unwrap();
            let back: Record = serde_json::from_str(&json).unwrap();
            assert_eq!(back, record);
            assert_eq!(back.minimum_crew_size(), 3);
        }

        #[test]
        fn missing_crew_floor_deserializes_to_two() {
            let back: Record = serde_json::from_str("{}").unwrap();
            assert_eq!(back.minimum_crew_size(), 2);
        }
    }
}
