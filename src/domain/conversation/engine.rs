//! Turn processing for the guided dialog.
//!
//! `respond` is the single entry point for customer input: it discards
//! stale turns, takes the Go Back snapshot, echoes the answer into the
//! transcript, dispatches to the stage handler, and applies the handler's
//! step. Handlers stay pure; everything that touches the aggregate lives
//! here, so one turn is one synchronous mutation of the conversation.
//!
//! Side effects come back as [`DialogEffect`] values. The application
//! layer carries them out and reports results through the `apply_*`
//! functions, which refuse anything that arrives after the conversation
//! has moved on.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::estimate::TravelPlan;
use crate::domain::foundation::{DomainError, ErrorCode};

use super::aggregate::Conversation;
use super::flows::{self, Advance, DialogEffect, Step};
use super::message::Message;
use super::options;
use super::record::Record;
use super::stage::Stage;

/// Menu token that wipes the conversation from any stage.
const RESTART_TOKEN: &str = "restart";

/// Inputs that navigate the dialog rather than answer its current
/// question; they never earn a Go Back snapshot.
const PSEUDO_INPUTS: &[&str] = &["restart", "continue", "back_to_questions"];

/// One customer turn, as delivered by the outer surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustomerInput {
    /// A quick-reply pick, carrying the option token.
    Choice { token: String },
    /// A typed answer.
    Text { content: String },
    /// A multi-select submission; an empty list means "None".
    Selections { tokens: Vec<String> },
}

impl CustomerInput {
    /// The single answer value, for stages that take one token or line.
    fn value(&self) -> Option<&str> {
        match self {
            CustomerInput::Choice { token } => Some(token),
            CustomerInput::Text { content } => Some(content),
            CustomerInput::Selections { .. } => None,
        }
    }

    /// The picked tokens, for multi-select stages. A plain choice counts
    /// as a single pick.
    fn picks(&self) -> Option<Vec<String>> {
        match self {
            CustomerInput::Selections { tokens } => Some(tokens.clone()),
            CustomerInput::Choice { token } => Some(vec![token.clone()]),
            CustomerInput::Text { .. } => None,
        }
    }
}

/// Plays the scripted opener on a brand new conversation.
///
/// # Errors
///
/// - `InvalidStateTransition` if the conversation has already started
pub fn start(conversation: &mut Conversation) -> Result<(), DomainError> {
    if conversation.stage() != Stage::Greeting {
        return Err(DomainError::new(
            ErrorCode::InvalidStateTransition,
            "Conversation has already started",
        )
        .with_detail("stage", format!("{:?}", conversation.stage())));
    }
    apply(conversation, flows::intake::greeting())?;
    Ok(())
}

/// Processes one customer turn against the current stage.
///
/// Order is fixed: turns sent from a superseded stage are rejected; a
/// restart wipes everything and replays the opener; ordinary answers push
/// a Go Back snapshot; the answer is echoed into the transcript; the
/// stage handler runs and its step is applied. The returned effects are
/// whatever the application layer still owes for this turn.
///
/// # Errors
///
/// - `StaleInput` if `origin` is no longer the current stage
/// - `InvalidStateTransition` if the current stage takes no customer input
pub fn respond(
    conversation: &mut Conversation,
    origin: Stage,
    input: CustomerInput,
) -> Result<Vec<DialogEffect>, DomainError> {
    let stage = conversation.stage();
    if origin != stage {
        return Err(DomainError::new(
            ErrorCode::StaleInput,
            "Input was sent from a stage that is no longer current",
        )
        .with_detail("expected", format!("{stage:?}"))
        .with_detail("received", format!("{origin:?}")));
    }

    if matches!(&input, CustomerInput::Choice { token } if token == RESTART_TOKEN) {
        conversation.restart();
        let mut effects = apply(conversation, flows::intake::greeting())?;
        effects.push(DialogEffect::Restarted);
        return Ok(effects);
    }

    let is_pseudo = matches!(
        &input,
        CustomerInput::Choice { token } if PSEUDO_INPUTS.contains(&token.as_str())
    );
    if !is_pseudo {
        conversation.record_snapshot();
    }

    conversation.append(Message::customer(echo_text(stage, &input)));

    let today = Utc::now().date_naive();
    let step = dispatch(conversation.record_mut(), stage, &input, today)?;
    apply(conversation, step)
}

/// Applies the measured travel legs once the distance provider answers.
///
/// # Errors
///
/// - `StaleInput` if the conversation has left the measuring stage
pub fn apply_travel(
    conversation: &mut Conversation,
    plan: TravelPlan,
    service_radius_miles: f64,
) -> Result<Vec<DialogEffect>, DomainError> {
    if conversation.stage() != Stage::StartLocationDetails {
        return Err(late_result("Travel measurements", conversation.stage()));
    }
    let step =
        flows::locations::travel_measured(conversation.record_mut(), plan, service_radius_miles);
    apply(conversation, step)
}

/// Reports the estimate-email outcome back into the dialog.
///
/// # Errors
///
/// - `StaleInput` if the conversation has left the booking stage
pub fn apply_email_result(
    conversation: &mut Conversation,
    delivered: bool,
) -> Result<Vec<DialogEffect>, DomainError> {
    if conversation.stage() != Stage::ShowBookingOptions {
        return Err(late_result("Email delivery results", conversation.stage()));
    }
    apply(conversation, flows::booking::email_outcome(delivered))
}

/// Reports the claim-submission outcome back into the dialog.
///
/// # Errors
///
/// - `StaleInput` if the conversation has left the call-us stage
pub fn apply_claim_result(
    conversation: &mut Conversation,
    delivered: bool,
) -> Result<Vec<DialogEffect>, DomainError> {
    if conversation.stage() != Stage::RequiresCall {
        return Err(late_result("Claim submission results", conversation.stage()));
    }
    apply(conversation, flows::claims::claim_outcome(delivered))
}

fn late_result(what: &str, stage: Stage) -> DomainError {
    DomainError::new(
        ErrorCode::StaleInput,
        format!("{what} arrived after the conversation moved on"),
    )
    .with_detail("stage", format!("{stage:?}"))
}

/// What the customer's turn looks like in the transcript.
fn echo_text(stage: Stage, input: &CustomerInput) -> String {
    match input {
        CustomerInput::Choice { token } => options::label_for(stage, token)
            .map(str::to_string)
            .unwrap_or_else(|| token.clone()),
        CustomerInput::Text { content } => content.clone(),
        CustomerInput::Selections { tokens } if tokens.is_empty() => "None".to_string(),
        CustomerInput::Selections { tokens } => tokens
            .iter()
            .map(|token| options::label_for(stage, token).unwrap_or(token.as_str()))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Applies a handler's step: replies are appended, the advance (if any)
/// goes through the stage graph, and the entry hook for the
/// distance-measuring stage fires on arrival.
fn apply(conversation: &mut Conversation, step: Step) -> Result<Vec<DialogEffect>, DomainError> {
    let (replies, next, mut effects) = step.into_parts();
    for reply in replies {
        conversation.append(reply);
    }
    if let Advance::To(target) = next {
        conversation.advance_to(target)?;
        if target.has_entry_action() {
            conversation.append(Message::bot_after(
                "Calculating all distances and drive times... 🗺️",
                30,
            ));
            effects.push(DialogEffect::MeasureTravel);
        }
    }
    Ok(effects)
}

/// Runs a single-answer handler, ignoring input of the wrong shape.
fn answered(input: &CustomerInput, handler: impl FnOnce(&str) -> Step) -> Step {
    match input.value() {
        Some(value) => handler(value),
        None => Step::stay(),
    }
}

/// Runs a multi-select handler, ignoring input of the wrong shape.
fn selected(input: &CustomerInput, handler: impl FnOnce(&[String]) -> Step) -> Step {
    match input.picks() {
        Some(picks) => handler(&picks),
        None => Step::stay(),
    }
}

/// Routes one turn to its stage handler.
///
/// The match is exhaustive over the stage set, so adding a stage without
/// deciding how it consumes input does not build. The two stages with no
/// handler take no customer input at all: the greeting is played by
/// [`start`] and the measuring stage is resolved by [`apply_travel`].
fn dispatch(
    record: &mut Record,
    stage: Stage,
    input: &CustomerInput,
    today: NaiveDate,
) -> Result<Step, DomainError> {
    let step = match stage {
        Stage::Greeting | Stage::StartLocationDetails => {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("{stage:?} does not take customer input"),
            ))
        }

        // Contact intake.
        Stage::GetNameInitial => answered(input, |value| flows::intake::full_name(record, value)),
        Stage::GetEmail => answered(input, |value| flows::intake::email(record, value)),
        Stage::GetPhone => answered(input, |value| flows::intake::phone(record, value)),

        // Service routing.
        Stage::ServiceSelection => {
            answered(input, |value| flows::intake::service_selection(record, value))
        }
        Stage::MovingDate => {
            answered(input, |value| flows::intake::moving_date(record, value, today))
        }
        Stage::PestDisclaimer => {
            answered(input, |value| flows::intake::pest_disclaimer(record, value))
        }

        // Single-item intake.
        Stage::ItemType => answered(input, |value| flows::single_item::item_type(record, value)),
        Stage::SelectFurnitureItem => answered(input, |value| {
            flows::single_item::select_furniture_item(record, value)
        }),
        Stage::SelectApplianceItem => answered(input, |value| {
            flows::single_item::select_appliance_item(record, value)
        }),
        Stage::SelectSetItem => {
            answered(input, |value| flows::single_item::select_set_item(record, value))
        }
        Stage::SelectHeavyItem => {
            answered(input, |value| flows::single_item::select_heavy_item(record, value))
        }
        Stage::DescribeItem => {
            answered(input, |value| flows::single_item::describe_item(record, value))
        }
        Stage::CustomItemWeight => {
            answered(input, |value| flows::single_item::custom_item_weight(record, value))
        }

        // Addresses and trip legs.
        Stage::LocationFrom => {
            answered(input, |value| flows::locations::location_from(record, value))
        }
        Stage::LocationTo => answered(input, |value| flows::locations::location_to(record, value)),
        Stage::AskThirdLocation => {
            answered(input, |value| flows::locations::ask_third_location(record, value))
        }
        Stage::LocationThird => {
            answered(input, |value| flows::locations::location_third(record, value))
        }
        Stage::ThirdLocationItems => {
            answered(input, |value| flows::locations::third_location_items(record, value))
        }
        Stage::OutOfArea => answered(input, |value| flows::locations::out_of_area(record, value)),

        // Per-location details.
        Stage::StairsFrom => answered(input, |value| flows::home::stairs_from(record, value)),
        Stage::HomeType => answered(input, |value| flows::home::home_type(record, value)),
        Stage::HomeSizeAssessment => {
            answered(input, |value| flows::home::home_size_assessment(record, value))
        }
        Stage::AccessObstacles => {
            answered(input, |value| flows::home::access_obstacles(record, value))
        }
        Stage::BedroomsFrom => answered(input, |value| flows::home::bedrooms_from(record, value)),
        Stage::StairsTo => answered(input, |value| flows::home::stairs_to(record, value)),
        Stage::DestinationType => {
            answered(input, |value| flows::home::destination_type(record, value))
        }
        Stage::HomeSizeAssessmentTo => {
            answered(input, |value| flows::home::home_size_assessment_to(record, value))
        }
        Stage::BedroomsTo => answered(input, |value| flows::home::bedrooms_to(record, value)),
        Stage::StairsThird => answered(input, |value| flows::home::stairs_third(record, value)),
        Stage::BedroomsThird => answered(input, |value| flows::home::bedrooms_third(record, value)),

        // Belongings survey.
        Stage::TvHandlingCheck => {
            answered(input, |value| flows::items::tv_handling_check(record, value))
        }
        Stage::TvSizeDetails => {
            selected(input, |picks| flows::items::tv_size_details(record, picks))
        }
        Stage::TvPackingOptions => {
            answered(input, |value| flows::items::tv_packing_options(record, value))
        }
        Stage::CheckAppliances => {
            selected(input, |picks| flows::items::check_appliances(record, picks))
        }
        Stage::ShopEquipmentCheck => {
            selected(input, |picks| flows::items::shop_equipment_check(record, picks))
        }
        Stage::OversizedFurnitureCheck => {
            selected(input, |picks| flows::items::oversized_furniture_check(record, picks))
        }
        Stage::SpecialItems => selected(input, |picks| flows::items::special_items(record, picks)),
        Stage::PianoType => answered(input, |value| flows::items::piano_type(record, value)),
        Stage::SafeDetails => answered(input, |value| flows::items::safe_details(record, value)),
        Stage::HeavyItemsCheck => {
            selected(input, |picks| flows::items::heavy_items_check(record, picks))
        }
        Stage::OfferSpecialItemPhotos => {
            answered(input, |value| flows::items::offer_special_item_photos(record, value))
        }

        // Crew and hours.
        Stage::CrewSize => answered(input, |value| flows::crew::labor_crew_size(record, value)),
        Stage::CrewSizeMoving => {
            answered(input, |value| flows::crew::moving_crew_size(record, value))
        }
        Stage::Hours => answered(input, |value| flows::crew::hours(record, value)),

        // Packing.
        Stage::AskPackingSupplies => {
            answered(input, |value| flows::packing::ask_packing_supplies(record, value))
        }
        Stage::AskTotalRooms => {
            answered(input, |value| flows::packing::ask_total_rooms(record, value))
        }
        Stage::AskPackingService => {
            answered(input, |value| flows::packing::ask_packing_service(record, value))
        }

        // Coverage.
        Stage::ShowFvpOptions => {
            answered(input, |value| flows::coverage::show_fvp_options(record, value))
        }
        Stage::FvpValue => answered(input, |value| flows::coverage::fvp_value(record, value)),
        Stage::FvpDeductible => {
            answered(input, |value| flows::coverage::fvp_deductible(record, value))
        }

        // Photos and hand-off.
        Stage::OfferPhotosLabor => {
            answered(input, |value| flows::booking::offer_photos_labor(record, value))
        }
        Stage::OfferPhotosSingle => {
            answered(input, |value| flows::booking::offer_photos_single(record, value))
        }
        Stage::ShowBookingOptions => {
            answered(input, |value| flows::booking::show_booking_options(record, value))
        }

        // Questions and claims.
        Stage::Questions => answered(input, |value| flows::questions::questions(record, value)),
        Stage::InsuranceClaimsStart => {
            answered(input, |value| flows::claims::claims_start(record, value))
        }
        Stage::InsurancePhotos => {
            answered(input, |value| flows::claims::insurance_photos(record, value))
        }
        Stage::DamageDescription => {
            answered(input, |value| flows::claims::damage_description(record, value))
        }
        Stage::RequiresCall => answered(input, |value| flows::booking::requires_call(record, value)),
    };
    Ok(step)
}
