//! Packing materials and packing service questions on the moving flow.

use crate::domain::conversation::record::Record;
use crate::domain::conversation::stage::Stage;
use crate::domain::estimate::PackingService;
use crate::domain::validation::parse_int_in_range;

use super::Step;

pub(crate) fn ask_packing_supplies(record: &mut Record, token: &str) -> Step {
    match token {
        "yes" => {
            record.needs_packing_materials = true;
            Step::to(Stage::AskTotalRooms)
                .say_after("We'll include packing materials! ✓", 30)
                .say_after(
                    "How many rooms are we packing? Count bedrooms, living areas, \
                     kitchen, and bathrooms.",
                    50,
                )
        }
        "no" => {
            record.needs_packing_materials = false;
            Step::to(Stage::AskPackingService)
                .say_after("No problem - you've got your own! ✓", 30)
                .say_after("Do you need professional packing help?", 50)
        }
        _ => Step::stay(),
    }
}

/// Room count for the materials itemization. Retries outside 1-30.
pub(crate) fn ask_total_rooms(record: &mut Record, answer: &str) -> Step {
    let Ok(rooms) = parse_int_in_range("total_rooms", answer, 1, 30) else {
        return Step::stay().say_after("Please enter a valid number of rooms (1-30).", 30);
    };
    record.total_rooms = Some(rooms as u32);

    Step::to(Stage::AskPackingService)
        .say_after(format!("Perfect! {rooms} rooms noted. ✓"), 30)
        .say_after("Do you need professional packing help?", 50)
}

pub(crate) fn ask_packing_service(record: &mut Record, token: &str) -> Step {
    let Some(service) = PackingService::parse(token) else {
        return Step::stay();
    };
    record.packing_service = Some(service);

    let acknowledgement = match service {
        PackingService::Full => "Full packing service - we'll pack everything! ✓",
        PackingService::Partial => {
            "Partial packing for fragile items (estimated at half the time of full packing)! ✓"
        }
        PackingService::No => "No packing service needed! ✓",
    };
    Step::to(Stage::CrewSizeMoving)
        .say_after(acknowledgement, 30)
        .say_after("How many movers do you need?", 50)
}
