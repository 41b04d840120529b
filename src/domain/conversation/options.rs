//! Quick-reply menus and input placeholders, keyed by stage.
//!
//! Labels are the customer-facing script; tokens are the stable values the
//! flows match on. Fee-bearing tokens must exist in the rate catalogs, and
//! the tests at the bottom hold that line.

use super::stage::Stage;

/// Published phone number, embedded in the script wherever a call-out
/// appears.
pub const COMPANY_PHONE: &str = "330-435-8686";

/// One quick-reply button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageOption {
    pub label: &'static str,
    pub token: &'static str,
    /// Rendered emphasized; at most one per menu.
    pub primary: bool,
}

const fn opt(label: &'static str, token: &'static str) -> StageOption {
    StageOption {
        label,
        token,
        primary: false,
    }
}

const fn lead(label: &'static str, token: &'static str) -> StageOption {
    StageOption {
        label,
        token,
        primary: true,
    }
}

const SERVICE_SELECTION: &[StageOption] = &[
    opt("🚚 Full Moving Service", "moving"),
    opt("💪 Labor Only (I have truck)", "labor"),
    opt("📦 Single Item Move", "single"),
    opt("❓ I have questions", "questions"),
    opt("🛡️ File Insurance Claim", "insurance_claim"),
];

const PEST_DISCLAIMER: &[StageOption] = &[
    lead("I agree to the terms", "continue_after_disclaimer"),
    opt("I need to address pest issues first", "exit_pest_issues"),
    opt("Call to discuss: 330-435-8686", "call"),
];

const ITEM_TYPE: &[StageOption] = &[
    opt("🛋️ Furniture", "category_furniture"),
    opt("🔌 Appliance", "category_appliance"),
    opt("🛏️ Furniture Set", "category_set"),
    opt("🏋️ Heavy/Special Item", "category_heavy"),
    opt("📦 Other", "other"),
];

const FURNITURE_ITEMS: &[StageOption] = &[
    opt("Couch/Sofa", "couch"),
    opt("Loveseat", "loveseat"),
    opt("Recliner/Chair", "chair"),
    opt("Mattress & Box Spring", "mattress"),
    opt("Dresser", "dresser"),
    opt("Desk", "desk"),
    opt("Dining Table", "table"),
    opt("Other Furniture", "other"),
];

const APPLIANCE_ITEMS: &[StageOption] = &[
    opt("Refrigerator", "refrigerator"),
    opt("Washer", "washer"),
    opt("Dryer", "dryer"),
    opt("Stove/Range", "stove"),
    opt("Deep Freezer", "freezer"),
    opt("Dishwasher", "dishwasher"),
    opt("Other Appliance", "other"),
];

const SET_ITEMS: &[StageOption] = &[
    opt("Bedroom Set", "bedroomSet"),
    opt("Dining Room Set", "diningSet"),
    opt("Living Room Set", "livingSet"),
    opt("Office Furniture Set", "officeSet"),
];

const HEAVY_ITEMS: &[StageOption] = &[
    opt("Piano", "piano"),
    opt("Gun Safe", "gunSafe"),
    opt("Pool Table", "poolTable"),
    opt("Hot Tub", "hotTub"),
    opt("Large Safe (500+ lbs)", "safe"),
    opt("Home Gym Equipment", "gym"),
    opt("Treadmill", "treadmill"),
    opt("Elliptical", "elliptical"),
    opt("Other Heavy Item", "other"),
];

const CUSTOM_ITEM_WEIGHT: &[StageOption] = &[
    opt("Under 150 lbs (1-2 people can lift)", "light"),
    opt("150-300 lbs (heavy but manageable)", "heavy"),
    opt("Over 300 lbs (requires special handling)", "extra_heavy"),
];

const THIRD_LOCATION: &[StageOption] = &[
    opt("No, just these two locations", "no"),
    opt("Yes, I have a third stop", "yes"),
];

const THIRD_LOCATION_ITEMS: &[StageOption] = &[
    opt("Dropping off items only", "drop_only"),
    opt("Picking up items only", "pick_only"),
    opt("Both picking up and dropping off", "both"),
];

const OUT_OF_AREA: &[StageOption] = &[
    lead("✅ Continue with my estimate anyway", "continue"),
    opt("📞 Call: 330-435-8686", "call"),
];

const STAIRS: &[StageOption] = &[
    opt("No stairs", "0"),
    opt("1 flight", "1"),
    opt("2 flights", "2"),
    opt("3+ flights", "3"),
];

const PLACE_TYPES: &[StageOption] = &[
    opt("🏠 House", "house"),
    opt("🏢 Apartment", "apartment"),
    opt("🏢 Condo", "condo"),
    opt("📦 Storage Unit", "storage"),
];

const HOME_SIZE: &[StageOption] = &[
    opt("Yes, it's larger than 2,600 sq ft", "large"),
    opt("No, 2,600 sq ft or smaller", "standard"),
];

const ACCESS_OBSTACLES: &[StageOption] = &[
    opt("No, normal distance", "normal"),
    opt("Yes, long walk (75+ feet)", "long_walk"),
];

const BEDROOMS: &[StageOption] = &[
    opt("Studio/1 Bedroom", "1"),
    opt("2 Bedrooms", "2"),
    opt("3 Bedrooms", "3"),
    opt("4 Bedrooms", "4"),
    opt("5+ Bedrooms", "5"),
];

const YES_NO: &[StageOption] = &[opt("Yes", "yes"), opt("No", "no")];

const TV_SIZE_DETAILS: &[StageOption] = &[
    opt("55-65 inch TV", "tv55to65"),
    opt("70-75 inch TV", "tv70to75"),
    opt("80+ inch TV", "tv80plus"),
];

const TV_PACKING_OPTIONS: &[StageOption] = &[
    opt("I have the original boxes", "have_boxes"),
    lead("I need professional TV boxes", "need_boxes"),
    opt("I'll wrap them myself", "no_boxes"),
];

const CHECK_APPLIANCES: &[StageOption] = &[
    opt("Refrigerator 🧊", "refrigerator"),
    opt("Washer 🧺", "washer"),
    opt("Dryer", "dryer"),
    opt("Stove/Range 🍳", "stove"),
    opt("Deep Freezer ❄️", "freezer"),
    opt("Dishwasher 🍽️", "dishwasher"),
];

const SHOP_EQUIPMENT_CHECK: &[StageOption] = &[
    opt("Workbench", "workbench"),
    opt("Large Tool Chest", "toolChest"),
    opt("Table Saw", "tablesaw"),
    opt("Air Compressor", "airCompressor"),
    opt("Welding Equipment", "weldingEquipment"),
    opt("Drill Press", "drillPress"),
    opt("Heavy Machinery (300+ lbs)", "heavyMachinery"),
    opt("Vehicle Lift/Hoist", "vehicleLift"),
    opt("Heavy Automotive Equipment", "automotiveEquipment"),
];

const OVERSIZED_FURNITURE_CHECK: &[StageOption] = &[
    opt("Oversized Sectional (10ft+)", "largeSectional"),
    opt("Purple Mattress (Specialty Handling)", "purpleMattress"),
    opt("Tempur-Pedic Mattress", "tempurPedicMattress"),
    opt("Adjustable Bed Base", "adjustableBase"),
    opt("California King Mattress", "californiaKing"),
    opt("Heavy Furniture (300+ lbs)", "heavyFurniture"),
    opt("Arcade Game", "arcadeGame"),
    opt("Large Entertainment Center", "largeEntertainmentCenter"),
];

const SPECIAL_ITEMS_CHECK: &[StageOption] = &[
    opt("Piano 🎹", "piano"),
    opt("Safe 🔒", "safe"),
    opt("Heavy Items (300+ lbs)", "heavyItems"),
    opt("Universal Gym", "gym"),
    opt("Free Weights", "freeWeights"),
    opt("Treadmill/Elliptical", "treadmill"),
    opt("China Hutch", "hutch"),
    opt("Large Aquarium ❌", "aquarium"),
];

const HEAVY_ITEMS_CHECK: &[StageOption] = &[
    opt("Piano 🎹", "piano"),
    opt("Safe 🔒", "safe"),
    opt("Hot Tub ❌", "hotTub"),
    opt("Pool Table ❌", "poolTable"),
    opt("Large Aquarium ❌", "aquarium"),
    opt("Shed ❌", "shed"),
    opt("Universal Gym", "gym"),
    opt("Free Weights", "freeWeights"),
    opt("Treadmill/Elliptical", "treadmill"),
    opt("China Hutch", "hutch"),
    opt("Other Heavy Items (350+ lbs)", "otherHeavy"),
];

const PIANO_TYPE: &[StageOption] = &[
    opt("Spinet Piano (3 movers needed)", "spinet"),
    opt("Upright Piano (4 movers needed)", "upright"),
    opt("Grand Piano", "grand"),
];

const SAFE_DETAILS: &[StageOption] = &[
    opt("Under 350 lbs, no stairs", "light_no_stairs"),
    opt("Under 350 lbs, with stairs", "light_with_stairs"),
    opt("Over 350 lbs, no stairs", "heavy_no_stairs"),
    opt("Over 350 lbs, with stairs", "heavy_with_stairs"),
    opt("Not sure / Need help", "unsure"),
];

const SPECIAL_ITEM_PHOTOS: &[StageOption] =
    &[lead("Yes, add photos", "yes"), opt("No photos needed", "no")];

const CREW_SIZE: &[StageOption] = &[
    opt("👥 2 person crew", "2"),
    opt("👥 3 person crew", "3"),
    opt("👥 4 person crew", "4"),
];

const HOURS: &[StageOption] = &[
    opt("2 hours (minimum)", "2"),
    opt("4 hours", "4"),
    opt("6 hours", "6"),
    opt("8 hours (full day)", "8"),
    opt("Other amount", "other_hours"),
];

const ASK_PACKING_SUPPLIES: &[StageOption] = &[
    opt("Yes, I need packing materials", "yes"),
    opt("No, I have my own", "no"),
];

const ASK_PACKING_SERVICE: &[StageOption] = &[
    opt("Yes, pack everything", "full"),
    opt("Partial packing (fragile items)", "partial"),
    opt("No packing service needed", "no"),
];

const FVP_OPTIONS: &[StageOption] = &[
    opt("📋 Standard Coverage (Included)", "standard"),
    lead("🛡️ Full Value Protection", "fvp"),
    opt("↪️ Skip & Continue", "skip"),
];

const FVP_DEDUCTIBLE: &[StageOption] = &[
    opt("$0 Deductible", "0"),
    opt("$250 (15% discount)", "250"),
    opt("$500 (30% discount)", "500"),
    opt("$750 (45% discount)", "750"),
    opt("$1,000 (60% discount)", "1000"),
];

const PHOTO_OFFER: &[StageOption] = &[
    lead("Add photos", "add_photos"),
    opt("Skip photos", "proceed_without_photos"),
];

const BOOKING_OPTIONS: &[StageOption] = &[
    lead("📅 Schedule with Sarah", "schedule_acuity"),
    opt("📞 Call: 330-435-8686", "call"),
    opt("📧 Email Estimate", "email_quote"),
    opt("💬 New Estimate", "restart"),
];

const REQUIRES_CALL: &[StageOption] = &[
    lead("📞 Call: 330-435-8686", "call"),
    opt("💬 New Estimate", "restart"),
];

const QUESTIONS: &[StageOption] = &[
    opt("📍 Service areas", "service_areas"),
    opt("💰 What's included?", "whats_included"),
    opt("📦 Packing services", "packing_info"),
    opt("🚫 Items you don't move", "restricted_items"),
    opt("⭐ Why choose Worry Free?", "why_choose_us"),
    opt("📸 Upload photos for estimate", "insurance_photos"),
    opt("↩️ Get an estimate", "restart"),
];

const CLAIMS_COVERAGE: &[StageOption] = &[
    opt("Free Standard Coverage ($0.60/lb per article)", "standard_coverage"),
    opt("Full Value Protection (FVP)", "fvp_coverage"),
];

/// The quick replies shown at a stage. Free-text stages return an empty
/// slice unless they also carry shortcut buttons.
pub fn options_for(stage: Stage) -> &'static [StageOption] {
    match stage {
        Stage::ServiceSelection => SERVICE_SELECTION,
        Stage::PestDisclaimer => PEST_DISCLAIMER,
        Stage::ItemType => ITEM_TYPE,
        Stage::SelectFurnitureItem => FURNITURE_ITEMS,
        Stage::SelectApplianceItem => APPLIANCE_ITEMS,
        Stage::SelectSetItem => SET_ITEMS,
        Stage::SelectHeavyItem => HEAVY_ITEMS,
        Stage::CustomItemWeight => CUSTOM_ITEM_WEIGHT,
        Stage::AskThirdLocation => THIRD_LOCATION,
        Stage::ThirdLocationItems => THIRD_LOCATION_ITEMS,
        Stage::OutOfArea => OUT_OF_AREA,
        Stage::StairsFrom | Stage::StairsTo | Stage::StairsThird => STAIRS,
        Stage::HomeType | Stage::DestinationType => PLACE_TYPES,
        Stage::HomeSizeAssessment | Stage::HomeSizeAssessmentTo => HOME_SIZE,
        Stage::AccessObstacles => ACCESS_OBSTACLES,
        Stage::BedroomsFrom | Stage::BedroomsTo | Stage::BedroomsThird => BEDROOMS,
        Stage::TvHandlingCheck => YES_NO,
        Stage::TvSizeDetails => TV_SIZE_DETAILS,
        Stage::TvPackingOptions => TV_PACKING_OPTIONS,
        Stage::CheckAppliances => CHECK_APPLIANCES,
        Stage::ShopEquipmentCheck => SHOP_EQUIPMENT_CHECK,
        Stage::OversizedFurnitureCheck => OVERSIZED_FURNITURE_CHECK,
        Stage::SpecialItems => SPECIAL_ITEMS_CHECK,
        Stage::HeavyItemsCheck => HEAVY_ITEMS_CHECK,
        Stage::PianoType => PIANO_TYPE,
        Stage::SafeDetails => SAFE_DETAILS,
        Stage::OfferSpecialItemPhotos => SPECIAL_ITEM_PHOTOS,
        Stage::CrewSize | Stage::CrewSizeMoving => CREW_SIZE,
        Stage::Hours => HOURS,
        Stage::AskPackingSupplies => ASK_PACKING_SUPPLIES,
        Stage::AskPackingService => ASK_PACKING_SERVICE,
        Stage::ShowFvpOptions => FVP_OPTIONS,
        Stage::FvpDeductible => FVP_DEDUCTIBLE,
        Stage::OfferPhotosLabor | Stage::OfferPhotosSingle | Stage::InsurancePhotos => PHOTO_OFFER,
        Stage::ShowBookingOptions => BOOKING_OPTIONS,
        Stage::RequiresCall => REQUIRES_CALL,
        Stage::Questions => QUESTIONS,
        Stage::InsuranceClaimsStart => CLAIMS_COVERAGE,
        _ => &[],
    }
}

/// The label behind a token at a stage, for echoing the pick into the log.
pub fn label_for(stage: Stage, token: &str) -> Option<&'static str> {
    options_for(stage)
        .iter()
        .find(|option| option.token == token)
        .map(|option| option.label)
}

/// Placeholder text for the free-text input at a stage.
pub fn input_placeholder(stage: Stage) -> Option<&'static str> {
    match stage {
        Stage::GetNameInitial => Some("Enter your full name..."),
        Stage::GetEmail => Some("Enter your email address..."),
        Stage::GetPhone => Some("Enter your phone number..."),
        Stage::MovingDate => Some("e.g., December 15 or 12/15/2025..."),
        Stage::LocationFrom | Stage::LocationTo | Stage::LocationThird => {
            Some("Start typing your address...")
        }
        Stage::DescribeItem => Some("e.g., Large wardrobe, Gun safe..."),
        Stage::Hours => Some("Enter number of hours..."),
        Stage::AskTotalRooms => Some("Enter number of rooms (e.g., 5)..."),
        Stage::FvpValue => Some("Enter total value..."),
        Stage::DamageDescription => Some("Describe the damage in detail..."),
        _ => None,
    }
}
