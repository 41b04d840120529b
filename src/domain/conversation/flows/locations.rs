//! Address capture, the optional third stop, and the travel measurement
//! read-back with its out-of-area gate.

use crate::domain::conversation::options::COMPANY_PHONE;
use crate::domain::conversation::record::{Record, ServiceType};
use crate::domain::conversation::stage::Stage;
use crate::domain::estimate::{LegMeasure, ThirdLocationAction, TravelPlan};
use crate::domain::validation::validate_address;

use super::{DialogEffect, Step};

pub(crate) fn location_from(record: &mut Record, answer: &str) -> Step {
    let address = match validate_address(answer) {
        Ok(address) => address,
        Err(_) => {
            return Step::stay()
                .say_after(
                    "Could you please enter a complete address including street, city, and state?",
                    30,
                )
                .say_after("Example: 123 Main Street, Youngstown, OH 44512", 50);
        }
    };

    let destination_question = if matches!(record.service_type, Some(ServiceType::Single)) {
        "Great! Now I need the delivery address."
    } else {
        "Great! Now I need your destination address - where are you moving TO?"
    };
    let confirmation = format!("Perfect! Got your starting location: {address} ✓");
    record.from_address = Some(address);

    Step::to(Stage::LocationTo)
        .say_after(confirmation, 30)
        .say_after(destination_question, 50)
        .say_after("💡 Tip: Start typing and I'll suggest addresses!", 90)
}

pub(crate) fn location_to(record: &mut Record, answer: &str) -> Step {
    let address = match validate_address(answer) {
        Ok(address) => address,
        Err(_) => {
            return Step::stay().say_after(
                "Please enter a complete address including street, city, and state.",
                30,
            );
        }
    };

    let confirmation = format!("Perfect! Got your destination: {address} ✓");
    record.to_address = Some(address);

    if matches!(record.service_type, Some(ServiceType::Moving)) {
        Step::to(Stage::AskThirdLocation)
            .say_after(confirmation, 30)
            .say_after("Do you have a third location (like a storage unit)?", 50)
    } else {
        Step::to(Stage::StartLocationDetails)
            .say_after(confirmation, 30)
            .say_after("Great! Let me calculate the trip details... 🗺️", 50)
    }
}

pub(crate) fn ask_third_location(record: &mut Record, token: &str) -> Step {
    match token {
        "yes" => {
            record.has_third_location = true;
            Step::to(Stage::LocationThird)
                .say_after("What's the address of the third location?", 30)
                .say_after("💡 Tip: Start typing and I'll suggest addresses!", 50)
        }
        "no" => {
            record.has_third_location = false;
            Step::to(Stage::StartLocationDetails)
                .say_after("Great! Let me calculate the trip details... 🗺️", 50)
        }
        _ => Step::stay(),
    }
}

pub(crate) fn location_third(record: &mut Record, answer: &str) -> Step {
    let address = match validate_address(answer) {
        Ok(address) => address,
        Err(_) => {
            return Step::stay().say_after(
                "Please enter a complete address including street, city, and state.",
                30,
            );
        }
    };

    let confirmation = format!("Perfect! Got your third location: {address} ✓");
    record.third_address = Some(address);

    Step::to(Stage::ThirdLocationItems)
        .say_after(confirmation, 30)
        .say_after(
            "Will we be picking up or dropping off items at this stop?",
            50,
        )
}

pub(crate) fn third_location_items(record: &mut Record, token: &str) -> Step {
    let Some(action) = ThirdLocationAction::parse(token) else {
        return Step::stay();
    };
    record.third_location_action = Some(action);

    let acknowledgement = match action {
        ThirdLocationAction::DropOnly => "Got it - we'll drop items off at this stop! ✓",
        ThirdLocationAction::PickOnly => "Got it - we'll pick items up at this stop! ✓",
        ThirdLocationAction::Both => "Got it - pickup and drop-off at this stop! ✓",
    };
    Step::to(Stage::StartLocationDetails)
        .say_after(acknowledgement, 30)
        .say_after("Great! Now let me calculate all the trip details... 🗺️", 50)
}

/// Reads back the measured trip and routes past the service-area gate.
/// Called by the application layer once the distance provider answers;
/// `service_radius_miles` comes from company configuration.
pub(crate) fn travel_measured(
    record: &mut Record,
    plan: TravelPlan,
    service_radius_miles: f64,
) -> Step {
    if plan.used_fallback {
        record.travel = Some(plan);
        return Step::to(Stage::StairsFrom)
            .say_after(
                "⚠️ Couldn't calculate distances automatically. We'll verify during booking.",
                50,
            )
            .say_after("Now let me ask you a few questions about each location...", 25)
            .say_after(
                "Starting with your pickup location - are there any stairs there?",
                120,
            );
    }

    let out_of_area = plan
        .pickup_miles()
        .is_some_and(|miles| miles > service_radius_miles);
    let mut step = if out_of_area {
        Step::to(Stage::OutOfArea)
    } else {
        Step::to(Stage::StairsFrom)
    };

    if let Some(leg) = &plan.base_to_pickup {
        step = step.say_after(format!("📍 Base to pickup: {}", leg_readout(leg)), 50);
    }
    if let Some(leg) = &plan.pickup_to_destination {
        step = step.say_after(format!("📍 Pickup to delivery: {}", leg_readout(leg)), 90);
    }
    if record.has_third_location {
        if let Some(leg) = &plan.destination_to_third {
            step = step.say_after(format!("📍 Delivery to third stop: {}", leg_readout(leg)), 25);
        }
        if let Some(leg) = &plan.final_return_to_base {
            step = step.say_after(
                format!("📍 Third stop back to base: {}", leg_readout(leg)),
                30,
            );
        }
    } else if let Some(leg) = &plan.final_return_to_base {
        step = step.say_after(format!("📍 Return to base: {}", leg_readout(leg)), 25);
    }
    step = step.say_after(format!("✅ Total trip: {:.1} miles", plan.total_miles()), 30);
    record.travel = Some(plan);

    if out_of_area {
        step.say_after(
            format!(
                "🚨 This location might be outside our standard service area. You may \
                 need to call for a custom quote at {COMPANY_PHONE}."
            ),
            175,
        )
    } else {
        step.say_after("Now let me ask you a few questions about each location...", 175)
            .say_after(
                "Starting with your pickup location - are there any stairs there?",
                50,
            )
    }
}

pub(crate) fn out_of_area(_record: &mut Record, token: &str) -> Step {
    match token {
        "call" => Step::stay()
            .say_after(
                format!(
                    "Perfect! Call us at {COMPANY_PHONE} and we'll discuss your \
                     long-distance move. 📞"
                ),
                30,
            )
            .effect(DialogEffect::OpenDialer),
        "continue" => Step::to(Stage::StairsFrom)
            .say_after(
                "Great! Let's continue with your estimate. Keep in mind there may be \
                 additional travel fees. ✓",
                30,
            )
            .say_after("Now let me ask you a few questions about each location...", 25)
            .say_after(
                "Starting with your pickup location - are there any stairs there?",
                50,
            ),
        _ => Step::stay(),
    }
}

fn leg_readout(leg: &LegMeasure) -> String {
    let minutes = (leg.hours * 60.0).ceil() as u64;
    format!("{:.1} miles ({minutes} min)", leg.miles)
}
