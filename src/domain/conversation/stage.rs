//! Dialog stage enumeration.
//!
//! Every position the guided dialog can rest at, plus the transition graph
//! between them. Handlers own the routing decisions; this module only says
//! which hops are legal so the engine can reject anything else.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// A named position in the guided dialog.
///
/// The graph fans out at `ServiceSelection` into the moving, labor-only,
/// single-item, questions, and insurance-claim sub-graphs, which re-join at
/// `ShowBookingOptions`. Three stages are conversational rest points
/// (`is_terminal`): the dialog stops advancing until the customer picks an
/// explicit exit (or, for `OutOfArea`, the continue path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    // Contact intake.
    /// Fresh conversation, opening messages not yet emitted.
    #[default]
    Greeting,
    /// Collects first + last name as free text.
    GetNameInitial,
    GetEmail,
    GetPhone,

    // Service routing.
    /// Picks moving / labor / single / questions / insurance claim.
    ServiceSelection,
    /// Service date; urgency and same-day detection happen here.
    MovingDate,
    /// Pest-policy gate for moving and labor flows.
    PestDisclaimer,

    // Single-item intake (item is identified before the date).
    ItemType,
    SelectFurnitureItem,
    SelectApplianceItem,
    SelectSetItem,
    SelectHeavyItem,
    /// Free-text description for items outside the catalog.
    DescribeItem,
    /// Weight class for a described item; sets provisional crew and minutes.
    CustomItemWeight,

    // Addresses and trip legs.
    LocationFrom,
    LocationTo,
    AskThirdLocation,
    LocationThird,
    /// Whether the third stop is drop-off, pickup, or both.
    ThirdLocationItems,
    /// Auto-triggered: queries the distance provider leg by leg.
    StartLocationDetails,
    /// Pickup is beyond the service radius; call, continue, or restart.
    OutOfArea,

    // Per-location details.
    StairsFrom,
    HomeType,
    HomeSizeAssessment,
    AccessObstacles,
    BedroomsFrom,
    StairsTo,
    DestinationType,
    HomeSizeAssessmentTo,
    BedroomsTo,
    StairsThird,
    BedroomsThird,

    // Belongings survey (moving flow).
    TvHandlingCheck,
    TvSizeDetails,
    TvPackingOptions,
    CheckAppliances,
    ShopEquipmentCheck,
    OversizedFurnitureCheck,
    SpecialItems,
    /// Spinet / upright / grand; grand routes to the call-us exit.
    PianoType,
    /// Five-way safe sizing; each outcome sets a crew floor.
    SafeDetails,
    /// Labor-flow item multi-select (includes categorically excluded items).
    HeavyItemsCheck,
    OfferSpecialItemPhotos,

    // Crew and hours.
    CrewSize,
    CrewSizeMoving,
    /// Labor hours, integer 2..=12.
    Hours,

    // Packing (moving flow).
    AskPackingSupplies,
    AskTotalRooms,
    AskPackingService,

    // Coverage.
    ShowFvpOptions,
    FvpValue,
    FvpDeductible,

    // Photos and hand-off.
    OfferPhotosLabor,
    OfferPhotosSingle,
    /// Quote shown; scheduler / call / email / restart.
    ShowBookingOptions,

    // Questions and claims.
    Questions,
    InsuranceClaimsStart,
    InsurancePhotos,
    DamageDescription,
    /// Call-us exit for grand pianos, pest declines, and claim hand-offs.
    RequiresCall,
}

impl Stage {
    /// Returns true if the dialog rests here until an explicit exit choice.
    ///
    /// `OutOfArea` still has a legal continue transition to `StairsFrom`;
    /// the other two have no outgoing transitions at all.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::OutOfArea | Self::ShowBookingOptions | Self::RequiresCall
        )
    }

    /// Returns true if this stage consumes typed input rather than an option.
    pub fn expects_free_text(&self) -> bool {
        matches!(
            self,
            Self::GetNameInitial
                | Self::GetEmail
                | Self::GetPhone
                | Self::MovingDate
                | Self::LocationFrom
                | Self::LocationTo
                | Self::LocationThird
                | Self::DescribeItem
                | Self::Hours
                | Self::AskTotalRooms
                | Self::FvpValue
                | Self::DamageDescription
        )
    }

    /// Returns true if the stage presents a multi-select item list.
    pub fn is_multi_select(&self) -> bool {
        matches!(
            self,
            Self::TvSizeDetails
                | Self::CheckAppliances
                | Self::ShopEquipmentCheck
                | Self::OversizedFurnitureCheck
                | Self::SpecialItems
                | Self::HeavyItemsCheck
        )
    }

    /// Returns true if `goBack` must be refused at this stage.
    ///
    /// Contact info cannot be re-answered once given, and a shown quote
    /// cannot be navigated out of except through its own options.
    pub fn blocks_go_back(&self) -> bool {
        matches!(
            self,
            Self::GetEmail | Self::GetPhone | Self::ShowBookingOptions
        )
    }

    /// Returns true if entering this stage runs a side effect before any
    /// user input (distance legs are fetched on entry, exactly once).
    pub fn has_entry_action(&self) -> bool {
        matches!(self, Self::StartLocationDetails)
    }
}

impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        match self {
            // Contact intake is strictly linear.
            Greeting => vec![GetNameInitial],
            GetNameInitial => vec![GetEmail],
            GetEmail => vec![GetPhone],
            GetPhone => vec![ServiceSelection],

            // Moving and labor collect the date first; single identifies the
            // item first; questions and claims branch away entirely.
            ServiceSelection => vec![MovingDate, ItemType, Questions, InsuranceClaimsStart],
            MovingDate => vec![PestDisclaimer, LocationFrom],
            PestDisclaimer => vec![LocationFrom, RequiresCall],

            // Single-item identification.
            ItemType => vec![
                SelectFurnitureItem,
                SelectApplianceItem,
                SelectSetItem,
                SelectHeavyItem,
                DescribeItem,
            ],
            SelectFurnitureItem => vec![MovingDate, DescribeItem],
            SelectApplianceItem => vec![MovingDate, DescribeItem],
            SelectSetItem => vec![MovingDate],
            SelectHeavyItem => vec![MovingDate, DescribeItem],
            DescribeItem => vec![CustomItemWeight],
            CustomItemWeight => vec![MovingDate],

            // Addresses. Only the moving flow is offered a third stop, and
            // distances are computed for every flow once addresses are in.
            LocationFrom => vec![LocationTo],
            LocationTo => vec![AskThirdLocation, StartLocationDetails],
            AskThirdLocation => vec![LocationThird, StartLocationDetails],
            LocationThird => vec![ThirdLocationItems],
            ThirdLocationItems => vec![StartLocationDetails],
            StartLocationDetails => vec![OutOfArea, StairsFrom],
            OutOfArea => vec![StairsFrom],

            // Per-location details. Labor and single skip the home-type
            // questions; a third stop replaces the destination questions.
            StairsFrom => vec![StairsTo, HomeType],
            HomeType => vec![HomeSizeAssessment],
            HomeSizeAssessment => vec![AccessObstacles],
            AccessObstacles => vec![BedroomsFrom],
            BedroomsFrom => vec![StairsTo],
            StairsTo => vec![HeavyItemsCheck, OfferPhotosSingle, DestinationType],
            DestinationType => vec![HomeSizeAssessmentTo, StairsThird, TvHandlingCheck],
            HomeSizeAssessmentTo => vec![BedroomsTo],
            BedroomsTo => vec![StairsThird, TvHandlingCheck],
            StairsThird => vec![BedroomsThird],
            BedroomsThird => vec![TvHandlingCheck],

            // Belongings survey.
            TvHandlingCheck => vec![TvSizeDetails, CheckAppliances],
            TvSizeDetails => vec![TvPackingOptions, CheckAppliances],
            TvPackingOptions => vec![CheckAppliances],
            CheckAppliances => vec![ShopEquipmentCheck],
            ShopEquipmentCheck => vec![OversizedFurnitureCheck],
            OversizedFurnitureCheck => vec![SpecialItems],
            SpecialItems => vec![PianoType, OfferSpecialItemPhotos, AskPackingSupplies],
            OfferSpecialItemPhotos => vec![AskPackingSupplies],

            // Labor item survey. Piano is resolved before safe when both
            // are selected; every safe outcome continues to crew size.
            HeavyItemsCheck => vec![PianoType, SafeDetails, CrewSize],
            PianoType => vec![RequiresCall, SafeDetails, CrewSize, OfferSpecialItemPhotos],
            SafeDetails => vec![CrewSize],

            // Crew and hours.
            CrewSize => vec![Hours],
            CrewSizeMoving => vec![ShowFvpOptions],
            Hours => vec![OfferPhotosLabor],

            // Packing.
            AskPackingSupplies => vec![AskTotalRooms, AskPackingService],
            AskTotalRooms => vec![AskPackingService],
            AskPackingService => vec![CrewSizeMoving],

            // Coverage.
            ShowFvpOptions => vec![FvpValue, ShowBookingOptions],
            FvpValue => vec![FvpDeductible],
            FvpDeductible => vec![ShowBookingOptions],

            // Photos and hand-off.
            OfferPhotosLabor => vec![ShowBookingOptions],
            OfferPhotosSingle => vec![ShowBookingOptions],
            ShowBookingOptions => vec![],

            // Questions and claims.
            Questions => vec![InsurancePhotos],
            InsuranceClaimsStart => vec![InsurancePhotos],
            InsurancePhotos => vec![DamageDescription, Questions],
            DamageDescription => vec![RequiresCall],
            RequiresCall => vec![],
        }
    }
}

#[cfg(test)]
pub(crate) const ALL_STAGES: [Stage; 60] = [
    Stage::Greeting,
    Stage::GetNameInitial,
    Stage::GetEmail,
    Stage::GetPhone,
    Stage::ServiceSelection,
    Stage::MovingDate,
    Stage::PestDisclaimer,
    Stage::ItemType,
    Stage::SelectFurnitureItem,
    Stage::SelectApplianceItem,
    Stage::SelectSetItem,
    Stage::SelectHeavyItem,
    Stage::DescribeItem,
    Stage::CustomItemWeight,
    Stage::LocationFrom,
    Stage::LocationTo,
    Stage::AskThirdLocation,
    Stage::LocationThird,
    Stage::ThirdLocationItems,
    Stage::StartLocationDetails,
    Stage::OutOfArea,
    Stage::StairsFrom,
    Stage::HomeType,
    Stage::HomeSizeAssessment,
    Stage::AccessObstacles,
    Stage::BedroomsFrom,
    Stage::StairsTo,
    Stage::DestinationType,
    Stage::HomeSizeAssessmentTo,
    Stage::BedroomsTo,
    Stage::StairsThird,
    Stage::BedroomsThird,
    Stage::TvHandlingCheck,
    Stage::TvSizeDetails,
    Stage::TvPackingOptions,
    Stage::CheckAppliances,
    Stage::ShopEquipmentCheck,
    Stage::OversizedFurnitureCheck,
    Stage::SpecialItems,
    Stage::PianoType,
    Stage::SafeDetails,
    Stage::HeavyItemsCheck,
    Stage::OfferSpecialItemPhotos,
    Stage::CrewSize,
    Stage::CrewSizeMoving,
    Stage::Hours,
    Stage::AskPackingSupplies,
    Stage::AskTotalRooms,
    Stage::AskPackingService,
    Stage::ShowFvpOptions,
    Stage::FvpValue,
    Stage::FvpDeductible,
    Stage::OfferPhotosLabor,
    Stage::OfferPhotosSingle,
    Stage::ShowBookingOptions,
    Stage::Questions,
    Stage::InsuranceClaimsStart,
    Stage::InsurancePhotos,
    Stage::DamageDescription,
    Stage::RequiresCall,
];
