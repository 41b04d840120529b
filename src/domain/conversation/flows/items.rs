//! Belongings inventory: TVs, appliances, shop equipment, oversized
//! furniture, and the special/heavy item checks with their piano and safe
//! follow-ups.

use std::collections::HashMap;

use crate::domain::conversation::options::COMPANY_PHONE;
use crate::domain::conversation::record::{PianoKind, Record, SafeSizing, ServiceType, TvPackingChoice};
use crate::domain::conversation::stage::Stage;
use crate::domain::rates::{
    exclusion_label, is_excluded, tv_box_for, HandlingRate, APPLIANCES, OVERSIZED_FURNITURE,
    SHOP_EQUIPMENT, SPECIAL_ITEMS, TV_SIZES,
};

use super::{join_or, Step};

/// Items that force a four-person crew on labor jobs.
const FOUR_PERSON_ITEMS: [&str; 2] = ["gym", "otherHeavy"];

fn known_picks(catalog: &HashMap<&'static str, HandlingRate>, picks: &[String]) -> Vec<String> {
    picks
        .iter()
        .filter(|token| catalog.contains_key(token.as_str()))
        .cloned()
        .collect()
}

fn catalog_labels(catalog: &HashMap<&'static str, HandlingRate>, picks: &[String]) -> Vec<&'static str> {
    picks
        .iter()
        .filter_map(|token| catalog.get(token.as_str()).map(|rate| rate.label))
        .collect()
}

/// Splits picks into excluded tokens and the ones we can take.
fn split_exclusions(picks: &[String]) -> (Vec<String>, Vec<String>) {
    let (excluded, kept): (Vec<String>, Vec<String>) = picks
        .iter()
        .cloned()
        .partition(|token| is_excluded(token));
    (excluded, kept)
}

fn exclusion_notice(excluded: &[String]) -> Option<String> {
    if excluded.is_empty() {
        return None;
    }
    let labels: Vec<&str> = excluded
        .iter()
        .filter_map(|token| exclusion_label(token))
        .collect();
    Some(format!(
        "❌ Unfortunately, we do not move {}. We'll focus on the other items you selected.",
        join_or(&labels)
    ))
}

pub(crate) fn tv_handling_check(record: &mut Record, token: &str) -> Step {
    match token {
        "yes" => Step::to(Stage::TvSizeDetails)
            .say_after("Got it - we'll handle those carefully! ✓", 30)
            .say_after("Which sizes? Select all that apply: 📺", 50),
        "no" => {
            record.tv_sizes.clear();
            Step::to(Stage::CheckAppliances)
                .say_after("No problem! ✓", 30)
                .say_after(
                    "Do you have any appliances that need moving (fridge, washer, dryer, etc.)?",
                    50,
                )
        }
        _ => Step::stay(),
    }
}

pub(crate) fn tv_size_details(record: &mut Record, picks: &[String]) -> Step {
    let sizes = known_picks(&TV_SIZES, picks);
    let step = if sizes.is_empty() {
        Step::to(Stage::TvPackingOptions).say_after("No problem! ✓", 30)
    } else {
        let labels = catalog_labels(&TV_SIZES, &sizes);
        Step::to(Stage::TvPackingOptions)
            .say_after(format!("TVs noted: {} ✓", labels.join(", ")), 30)
    };
    record.tv_sizes = sizes;

    step.say_after("Do you have the original boxes for your TVs?", 50)
}

pub(crate) fn tv_packing_options(record: &mut Record, token: &str) -> Step {
    let Some(choice) = TvPackingChoice::parse(token) else {
        return Step::stay();
    };
    record.tv_packing = Some(choice);

    let acknowledgement = match choice {
        TvPackingChoice::HaveBoxes => "Great - original boxes! ✓",
        TvPackingChoice::NeedBoxes => {
            record.tv_boxes = record
                .tv_sizes
                .iter()
                .filter_map(|size| tv_box_for(size))
                .map(String::from)
                .collect();
            "We'll bring professional TV boxes! ✓"
        }
        TvPackingChoice::NoBoxes => "Got it - you'll wrap them! ✓",
    };
    Step::to(Stage::CheckAppliances)
        .say_after(acknowledgement, 30)
        .say_after(
            "Do you have any appliances that need moving (fridge, washer, dryer, etc.)?",
            50,
        )
}

pub(crate) fn check_appliances(record: &mut Record, picks: &[String]) -> Step {
    let appliances = known_picks(&APPLIANCES, picks);
    let step = if appliances.is_empty() {
        Step::to(Stage::ShopEquipmentCheck).say_after("No appliances - got it! ✓", 30)
    } else {
        let labels = catalog_labels(&APPLIANCES, &appliances);
        Step::to(Stage::ShopEquipmentCheck)
            .say_after(format!("Got it! {} - all noted! ✓", labels.join(", ")), 30)
    };
    record.appliances = appliances;

    step.say_after(
        "Do you have any shop/garage equipment? Select all that apply:",
        50,
    )
}

pub(crate) fn shop_equipment_check(record: &mut Record, picks: &[String]) -> Step {
    let equipment = known_picks(&SHOP_EQUIPMENT, picks);
    let step = if equipment.is_empty() {
        Step::to(Stage::OversizedFurnitureCheck).say_after("No shop equipment - perfect! ✓", 30)
    } else {
        let labels = catalog_labels(&SHOP_EQUIPMENT, &equipment);
        Step::to(Stage::OversizedFurnitureCheck)
            .say_after(format!("Shop equipment noted: {} ✓", labels.join(", ")), 30)
    };
    record.shop_equipment = equipment;

    step.say_after(
        "Do you have any oversized or specialty furniture? Select all that apply:",
        50,
    )
}

pub(crate) fn oversized_furniture_check(record: &mut Record, picks: &[String]) -> Step {
    let furniture = known_picks(&OVERSIZED_FURNITURE, picks);
    let step = if furniture.is_empty() {
        Step::to(Stage::SpecialItems).say_after("No oversized items - great! ✓", 30)
    } else {
        let labels = catalog_labels(&OVERSIZED_FURNITURE, &furniture);
        Step::to(Stage::SpecialItems)
            .say_after(format!("Oversized items noted: {} ✓", labels.join(", ")), 30)
    };
    record.oversized_furniture = furniture;

    step.say_after("Which special items do you have? Select all that apply:", 50)
}

/// Special items on a full move. Piano gets its own follow-up; everything
/// else raises the crew floor straight from the catalog.
pub(crate) fn special_items(record: &mut Record, picks: &[String]) -> Step {
    let (excluded, kept) = split_exclusions(picks);
    let kept = known_picks(&SPECIAL_ITEMS, &kept);
    let notice = exclusion_notice(&excluded);
    record.excluded_items.extend(excluded);

    if kept.is_empty() {
        record.special_items.clear();
        let mut step = Step::to(Stage::AskPackingSupplies);
        step = match notice {
            Some(notice) => step.say_after(notice, 30),
            None => step.say_after("No special items selected. ✓", 30),
        };
        return step.say_after("Do you need packing materials (boxes, tape, bubble wrap)?", 50);
    }

    let has_piano = kept.iter().any(|token| token == "piano");
    let mut step = if has_piano {
        Step::to(Stage::PianoType)
    } else {
        Step::to(Stage::OfferSpecialItemPhotos)
    };
    if let Some(notice) = notice {
        step = step.say_after(notice, 30);
    }

    for token in &kept {
        if token != "piano" {
            if let Some(rate) = SPECIAL_ITEMS.get(token.as_str()) {
                record.raise_minimum_crew_size(rate.min_crew);
            }
        }
    }
    let labels = catalog_labels(&SPECIAL_ITEMS, &kept);
    record.special_items = kept;
    step = step.say_after(format!("Special items noted: {} ✓", labels.join(", ")), 30);

    if has_piano {
        step.say_after("What type of piano is it?", 50).say_after(
            "⚠️ Note: We only move Spinet and Upright pianos. Grand pianos require \
             specialized movers.",
            90,
        )
    } else {
        step.say_after(
            "Would you like to add photos of these special items? This helps us bring \
             the right equipment!",
            50,
        )
    }
}

/// Heavy items on a labor job. Gym equipment and 350+ lb items force four
/// movers; piano and safe picks branch into their own follow-ups.
pub(crate) fn heavy_items_check(record: &mut Record, picks: &[String]) -> Step {
    let (excluded, kept) = split_exclusions(picks);
    let kept = known_picks(&SPECIAL_ITEMS, &kept);
    let notice = exclusion_notice(&excluded);
    record.excluded_items.extend(excluded);

    if kept.is_empty() {
        record.special_items.clear();
        let mut step = Step::to(Stage::CrewSize);
        if let Some(notice) = notice {
            step = step.say_after(notice, 30);
        } else {
            step = step.say_after("No heavy items selected. ✓", 30);
        }
        return step.say_after("How many movers do you need?", 50);
    }

    let labels = catalog_labels(&SPECIAL_ITEMS, &kept);
    let needs_four = kept
        .iter()
        .any(|token| FOUR_PERSON_ITEMS.contains(&token.as_str()));
    let has_piano = kept.iter().any(|token| token == "piano");
    let has_safe = kept.iter().any(|token| token == "safe");
    let lighter_only = !needs_four && !has_piano && !has_safe;
    record.special_items = kept;

    let mut step = if has_piano {
        Step::to(Stage::PianoType)
    } else if has_safe {
        Step::to(Stage::SafeDetails)
    } else {
        Step::to(Stage::CrewSize)
    };
    if let Some(notice) = notice {
        step = step.say_after(notice, 30);
    }
    step = step.say_after(format!("Heavy items noted: {} ✓", labels.join(", ")), 30);

    if needs_four {
        record.raise_minimum_crew_size(4);
        step = step.say_after("💪 Heavy items require at least 4 movers for safety.", 25);
    } else if lighter_only {
        step = step.say_after(
            "✓ These items can be handled with your selected crew size.",
            25,
        );
    }

    if has_piano {
        step.say_after("What type of piano is it?", 50)
    } else if has_safe {
        step.say_after("Let me ask about the safe details:", 50)
            .say_after("⚠️ Items over 350 lbs WITH stairs require 4 people minimum.", 150)
    } else {
        step.say_after("How many movers do you need?", 50)
    }
}

pub(crate) fn piano_type(record: &mut Record, token: &str) -> Step {
    let Some(kind) = PianoKind::parse(token) else {
        return Step::stay();
    };
    record.piano_type = Some(kind);

    let Some(floor) = kind.crew_floor() else {
        record.requires_phone_call = true;
        return Step::to(Stage::RequiresCall)
            .say_after(
                "Grand pianos require specialized movers with proper equipment and \
                 insurance. 📞",
                30,
            )
            .say_after(
                format!(
                    "Please call us at {COMPANY_PHONE} to schedule this move. We'll \
                     discuss the details and provide an accurate quote!"
                ),
                25,
            );
    };

    record.raise_minimum_crew_size(floor);
    record.piano_board = true;
    let acknowledgement = match kind {
        PianoKind::Spinet => "Spinet piano (requires 3 movers) noted! ✓",
        _ => "Upright piano (requires 4 movers) noted! ✓",
    };
    let step = Step::to(piano_follow_up(record))
        .say_after(acknowledgement, 30)
        .say_after("Piano board rental: $75 (required for safe transport)", 25);

    match piano_follow_up(record) {
        Stage::OfferSpecialItemPhotos => step.say_after(
            "Would you like to add photos of your special items? This helps us bring \
             the right equipment!",
            25,
        ),
        Stage::SafeDetails => step
            .say_after("Let me ask about the safe details:", 50)
            .say_after("⚠️ Items over 350 lbs WITH stairs require 4 people minimum.", 150),
        _ => step.say_after("How many movers do you need?", 50),
    }
}

fn piano_follow_up(record: &Record) -> Stage {
    if matches!(record.service_type, Some(ServiceType::Labor)) {
        let safe_pending = record.special_items.iter().any(|token| token == "safe")
            && record.safe_sizing.is_none();
        if safe_pending {
            Stage::SafeDetails
        } else {
            Stage::CrewSize
        }
    } else {
        Stage::OfferSpecialItemPhotos
    }
}

pub(crate) fn safe_details(record: &mut Record, token: &str) -> Step {
    let Some(sizing) = SafeSizing::parse(token) else {
        return Step::stay();
    };
    record.safe_sizing = Some(sizing);
    record.raise_minimum_crew_size(sizing.crew_floor());
    if sizing.needs_phone_call() {
        record.requires_phone_call = true;
    }

    let step = Step::to(Stage::CrewSize);
    match sizing {
        SafeSizing::Unsure => step
            .say_after("No problem! Safe moving requires careful assessment. 📞", 30)
            .say_after(
                format!(
                    "Please call us at {COMPANY_PHONE} so we can discuss the safe's \
                     weight, dimensions, and access details."
                ),
                25,
            )
            .say_after("This ensures we bring the right equipment and crew size!", 25)
            .say_after(
                "For now, let's continue with your estimate. How many movers do you need?",
                90,
            ),
        SafeSizing::HeavyWithStairs => step
            .say_after(
                "⚠️ Safes over 350 lbs with stairs require a phone consultation for safety.",
                30,
            )
            .say_after(
                format!(
                    "Please call us at {COMPANY_PHONE} to discuss. We need at least 4 \
                     movers and special equipment."
                ),
                25,
            )
            .say_after(
                "💡 Pro tip: We prefer garage deliveries for heavy safes when possible!",
                25,
            )
            .say_after(
                "For your estimate, we'll plan for 4+ movers. How many would you like?",
                90,
            ),
        SafeSizing::HeavyNoStairs => step
            .say_after("Heavy safe noted! We'll need at least 4 movers for this. 💪", 30)
            .say_after(
                format!(
                    "⚠️ Note: We cannot move safes over 400 lbs. If yours is close to \
                     that limit, please call us at {COMPANY_PHONE}."
                ),
                25,
            )
            .say_after("How many movers would you like?", 90),
        SafeSizing::LightWithStairs => step
            .say_after("Safe with stairs - we'll need 4 movers for safety. ✓", 30)
            .say_after(
                "💡 Even lighter safes with stairs require extra hands to navigate safely!",
                25,
            )
            .say_after("How many movers do you need? (Minimum 4 for this safe)", 140),
        SafeSizing::LightNoStairs => step
            .say_after("Lighter safe, no stairs - we'll need at least 3 movers. ✓", 30)
            .say_after("How many movers do you need?", 90),
    }
}

pub(crate) fn offer_special_item_photos(record: &mut Record, token: &str) -> Step {
    let step = match token {
        "yes" => {
            record.has_photos = true;
            record.photo_category = Some("special_items".to_string());
            Step::to(Stage::AskPackingSupplies)
                .say_after("Great! You can upload photos when we confirm your booking. 📸 ✓", 30)
        }
        "no" => Step::to(Stage::AskPackingSupplies)
            .say_after("No problem! We'll work with the details you've provided. ✓", 30),
        _ => return Step::stay(),
    };
    step.say_after("Do you need packing materials (boxes, tape, bubble wrap)?", 50)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::flows::Advance;

    fn labor_record() -> Record {
        let mut record = Record::new();
        record.service_type = Some(ServiceType::Labor);
        record
    }

    fn picks(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    mod tv_flow {
        use super::*;

        #[test]
        fn tvs_lead_to_size_selection() {
            let mut record = Record::new();

            let step = tv_handling_check(&mut record, "yes");

            assert_eq!(step.next(), Advance::To(Stage::TvSizeDetails));
        }

        #[test]
        fn no_tvs_skip_to_appliances() {
            let mut record = Record::new();

            let step = tv_handling_check(&mut record, "no");

            assert_eq!(step.next(), Advance::To(Stage::CheckAppliances));
        }

        #[test]
        fn sizes_are_recorded_in_pick_order() {
            let mut record = Record::new();

            let step = tv_size_details(&mut record, &picks(&["tv80plus", "tv55to65"]));

            assert_eq!(step.next(), Advance::To(Stage::TvPackingOptions));
            assert_eq!(record.tv_sizes, picks(&["tv80plus", "tv55to65"]));
        }

        #[test]
        fn needing_boxes_maps_each_size_to_a_box() {
            let mut record = Record::new();
            record.tv_sizes = picks(&["tv55to65", "tv80plus"]);

            let step = tv_packing_options(&mut record, "need_boxes");

            assert_eq!(step.next(), Advance::To(Stage::CheckAppliances));
            assert_eq!(record.tv_packing, Some(TvPackingChoice::NeedBoxes));
            assert_eq!(record.tv_boxes, picks(&["tvBox55to65", "tvBox80plus"]));
        }

        #[test]
        fn having_boxes_adds_none() {
            let mut record = Record::new();
            record.tv_sizes = picks(&["tv55to65"]);

            tv_packing_options(&mut record, "have_boxes");

            assert!(record.tv_boxes.is_empty());
        }
    }

    mod inventory_checks {
        use super::*;

        #[test]
        fn appliances_ack_by_name_and_move_on() {
            let mut record = Record::new();

            let step = check_appliances(&mut record, &picks(&["washer", "freezer"]));

            assert_eq!(step.next(), Advance::To(Stage::ShopEquipmentCheck));
            assert!(step.replies()[0].content().contains("Washer, Deep Freezer"));
            assert_eq!(record.appliances, picks(&["washer", "freezer"]));
        }

        #[test]
        fn unknown_tokens_are_dropped() {
            let mut record = Record::new();

            check_appliances(&mut record, &picks(&["washer", "jacuzzi"]));

            assert_eq!(record.appliances, picks(&["washer"]));
        }

        #[test]
        fn empty_shop_selection_still_advances() {
            let mut record = Record::new();

            let step = shop_equipment_check(&mut record, &[]);

            assert_eq!(step.next(), Advance::To(Stage::OversizedFurnitureCheck));
            assert!(step.replies()[0].content().contains("No shop equipment"));
        }

        #[test]
        fn oversized_furniture_is_recorded() {
            let mut record = Record::new();

            let step =
                oversized_furniture_check(&mut record, &picks(&["purpleMattress", "arcadeGame"]));

            assert_eq!(step.next(), Advance::To(Stage::SpecialItems));
            assert_eq!(record.oversized_furniture.len(), 2);
        }
    }

    mod special_items_check {
        use super::*;

        #[test]
        fn catalog_floors_raise_the_minimum_crew() {
            let mut record = Record::new();
            record.service_type = Some(ServiceType::Moving);

            let step = special_items(&mut record, &picks(&["safe", "gym"]));

            assert_eq!(step.next(), Advance::To(Stage::OfferSpecialItemPhotos));
            assert_eq!(record.minimum_crew_size(), 4);
            assert_eq!(record.special_items, picks(&["safe", "gym"]));
        }

        #[test]
        fn piano_branches_into_its_own_question() {
            let mut record = Record::new();
            record.service_type = Some(ServiceType::Moving);

            let step = special_items(&mut record, &picks(&["piano", "hutch"]));

            assert_eq!(step.next(), Advance::To(Stage::PianoType));
            // The piano floor waits for the spinet/upright answer.
            assert_eq!(record.minimum_crew_size(), 2);
        }

        #[test]
        fn aquariums_are_refused_but_the_rest_continues() {
            let mut record = Record::new();

            let step = special_items(&mut record, &picks(&["aquarium", "treadmill"]));

            let scripts: Vec<_> = step.replies().iter().map(|m| m.content()).collect();
            assert!(scripts[0].contains("we do not move large aquariums"));
            assert_eq!(record.special_items, picks(&["treadmill"]));
            assert_eq!(record.excluded_items, picks(&["aquarium"]));
        }

        #[test]
        fn no_picks_head_to_packing_supplies() {
            let mut record = Record::new();

            let step = special_items(&mut record, &[]);

            assert_eq!(step.next(), Advance::To(Stage::AskPackingSupplies));
            assert!(step.replies()[0].content().contains("No special items"));
        }
    }

    mod heavy_items_labor {
        use super::*;

        #[test]
        fn gym_equipment_forces_four_movers() {
            let mut record = labor_record();

            let step = heavy_items_check(&mut record, &picks(&["gym", "hutch"]));

            assert_eq!(step.next(), Advance::To(Stage::CrewSize));
            assert_eq!(record.minimum_crew_size(), 4);
            assert!(step
                .replies()
                .iter()
                .any(|m| m.content().contains("at least 4 movers for safety")));
        }

        #[test]
        fn lighter_items_are_reassured() {
            let mut record = labor_record();

            let step = heavy_items_check(&mut record, &picks(&["treadmill", "hutch"]));

            assert_eq!(record.minimum_crew_size(), 2);
            assert!(step
                .replies()
                .iter()
                .any(|m| m.content().contains("handled with your selected crew size")));
        }

        #[test]
        fn excluded_items_are_announced_with_or() {
            let mut record = labor_record();

            let step = heavy_items_check(&mut record, &picks(&["hotTub", "poolTable", "gym"]));

            assert!(step.replies()[0]
                .content()
                .contains("we do not move hot tubs or pool tables"));
            assert_eq!(record.special_items, picks(&["gym"]));
        }

        #[test]
        fn only_excluded_picks_still_ask_for_a_crew() {
            let mut record = labor_record();

            let step = heavy_items_check(&mut record, &picks(&["shed"]));

            assert_eq!(step.next(), Advance::To(Stage::CrewSize));
            assert!(step.replies()[0].content().contains("we do not move sheds"));
        }

        #[test]
        fn piano_wins_the_follow_up_over_safe() {
            let mut record = labor_record();

            let step = heavy_items_check(&mut record, &picks(&["piano", "safe"]));

            assert_eq!(step.next(), Advance::To(Stage::PianoType));
        }

        #[test]
        fn safe_alone_goes_to_safe_details() {
            let mut record = labor_record();

            let step = heavy_items_check(&mut record, &picks(&["safe"]));

            assert_eq!(step.next(), Advance::To(Stage::SafeDetails));
            assert!(step
                .replies()
                .iter()
                .any(|m| m.content().contains("350 lbs WITH stairs")));
        }
    }

    mod piano_follow_ups {
        use super::*;

        #[test]
        fn spinet_raises_three_and_rents_the_board() {
            let mut record = Record::new();
            record.service_type = Some(ServiceType::Moving);

            let step = piano_type(&mut record, "spinet");

            assert_eq!(step.next(), Advance::To(Stage::OfferSpecialItemPhotos));
            assert_eq!(record.minimum_crew_size(), 3);
            assert!(record.piano_board);
            assert!(step
                .replies()
                .iter()
                .any(|m| m.content().contains("Piano board rental: $75")));
        }

        #[test]
        fn upright_raises_four() {
            let mut record = labor_record();

            let step = piano_type(&mut record, "upright");

            assert_eq!(step.next(), Advance::To(Stage::CrewSize));
            assert_eq!(record.minimum_crew_size(), 4);
        }

        #[test]
        fn grand_piano_ends_in_a_phone_referral() {
            let mut record = Record::new();
            record.service_type = Some(ServiceType::Moving);

            let step = piano_type(&mut record, "grand");

            assert_eq!(step.next(), Advance::To(Stage::RequiresCall));
            assert!(record.requires_phone_call);
            assert!(!record.piano_board);
        }

        #[test]
        fn labor_piano_defers_to_a_pending_safe() {
            let mut record = labor_record();
            record.special_items = picks(&["piano", "safe"]);

            let step = piano_type(&mut record, "spinet");

            assert_eq!(step.next(), Advance::To(Stage::SafeDetails));
        }
    }

    mod safe_follow_ups {
        use super::*;

        #[test]
        fn unsure_flags_a_phone_call_and_floors_three() {
            let mut record = labor_record();

            let step = safe_details(&mut record, "unsure");

            assert_eq!(step.next(), Advance::To(Stage::CrewSize));
            assert_eq!(record.minimum_crew_size(), 3);
            assert!(record.requires_phone_call);
        }

        #[test]
        fn heavy_with_stairs_floors_four_and_flags_a_call() {
            let mut record = labor_record();

            let step = safe_details(&mut record, "heavy_with_stairs");

            assert_eq!(record.minimum_crew_size(), 4);
            assert!(record.requires_phone_call);
            assert!(step
                .replies()
                .iter()
                .any(|m| m.content().contains("phone consultation")));
        }

        #[test]
        fn light_no_stairs_floors_three_without_a_call() {
            let mut record = labor_record();

            safe_details(&mut record, "light_no_stairs");

            assert_eq!(record.minimum_crew_size(), 3);
            assert!(!record.requires_phone_call);
        }
    }

    mod photo_offer {
        use super::*;

        #[test]
        fn accepting_photos_tags_the_category() {
            let mut record = Record::new();

            let step = offer_special_item_photos(&mut record, "yes");

            assert_eq!(step.next(), Advance::To(Stage::AskPackingSupplies));
            assert!(record.has_photos);
            assert_eq!(record.photo_category.as_deref(), Some("special_items"));
        }

        #[test]
        fn declining_photos_still_moves_to_packing() {
            let mut record = Record::new();

            let step = offer_special_item_photos(&mut record, "no");

            assert_eq!(step.next(), Advance::To(Stage::AskPackingSupplies));
            assert!(!record.has_photos);
        }
    }
}
