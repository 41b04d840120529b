//! Per-location walkthrough: stairs, home type and size, parking access,
//! and bedroom counts for the pickup, destination, and third stop.

use crate::domain::conversation::record::{AccessClass, HomeSizeClass, Record, ServiceType};
use crate::domain::conversation::stage::Stage;
use crate::domain::estimate::HomeType;

use super::{stairs_label, Step};

fn home_type_name(home_type: HomeType) -> &'static str {
    match home_type {
        HomeType::House => "House",
        HomeType::Apartment => "Apartment",
        HomeType::Condo => "Condo",
        HomeType::Storage => "Storage Unit",
    }
}

fn bedroom_phrase(bedrooms: u32) -> String {
    if bedrooms == 1 {
        "Studio/1 Bedroom".to_string()
    } else {
        format!("{bedrooms} Bedrooms")
    }
}

fn parse_flights(token: &str) -> Option<u32> {
    token.parse::<u32>().ok().filter(|flights| *flights <= 3)
}

pub(crate) fn stairs_from(record: &mut Record, token: &str) -> Step {
    let Some(flights) = parse_flights(token) else {
        return Step::stay();
    };
    record.stairs_from = flights;

    let step = Step::to(match record.service_type {
        Some(ServiceType::Moving) => Stage::HomeType,
        _ => Stage::StairsTo,
    })
    .say_after(format!("{} at pickup - noted! ✓", stairs_label(flights)), 30);

    if matches!(record.service_type, Some(ServiceType::Moving)) {
        step.say_after("What type of place are you moving FROM?", 50)
    } else {
        step.say_after("And how about stairs at the delivery location?", 50)
    }
}

pub(crate) fn home_type(record: &mut Record, token: &str) -> Step {
    let Some(place) = HomeType::parse(token) else {
        return Step::stay();
    };
    record.home_type_from = Some(place);

    Step::to(Stage::HomeSizeAssessment)
        .say_after(format!("Got it - {}! ✓", home_type_name(place)), 30)
        .say_after("Is your current place larger than 2,600 square feet?", 50)
}

pub(crate) fn home_size_assessment(record: &mut Record, token: &str) -> Step {
    let Some(size) = HomeSizeClass::parse(token) else {
        return Step::stay();
    };
    record.home_size_from = Some(size);

    let acknowledgement = match size {
        HomeSizeClass::Large => "Thanks - I've noted it's a larger home! ✓",
        HomeSizeClass::Standard => "Thanks - I've noted it's a standard size home! ✓",
    };
    Step::to(Stage::AccessObstacles)
        .say_after(acknowledgement, 30)
        .say_after(
            "Is there a long walk from the parking area to your door (75+ feet)?",
            50,
        )
}

pub(crate) fn access_obstacles(record: &mut Record, token: &str) -> Step {
    let Some(access) = AccessClass::parse(token) else {
        return Step::stay();
    };
    record.access_from = Some(access);

    let acknowledgement = match access {
        AccessClass::LongWalk => "Got it - noted the long walk! ✓",
        AccessClass::Normal => "Perfect, normal access! ✓",
    };
    Step::to(Stage::BedroomsFrom)
        .say_after(acknowledgement, 30)
        .say_after("How many bedrooms are you moving FROM?", 50)
}

pub(crate) fn bedrooms_from(record: &mut Record, token: &str) -> Step {
    let Some(bedrooms) = token.parse::<u32>().ok().filter(|n| (1..=5).contains(n)) else {
        return Step::stay();
    };
    record.bedrooms_from = Some(bedrooms);

    Step::to(Stage::StairsTo)
        .say_after(
            format!("{} at current place - noted! ✓", bedroom_phrase(bedrooms)),
            30,
        )
        .say_after("And how about stairs at the delivery location?", 50)
}

pub(crate) fn stairs_to(record: &mut Record, token: &str) -> Step {
    let Some(flights) = parse_flights(token) else {
        return Step::stay();
    };
    record.stairs_to = flights;

    let step = Step::to(match record.service_type {
        Some(ServiceType::Labor) => Stage::HeavyItemsCheck,
        Some(ServiceType::Single) => Stage::OfferPhotosSingle,
        _ => Stage::DestinationType,
    })
    .say_after(
        format!("{} at destination - noted! ✓", stairs_label(flights)),
        30,
    );

    match record.service_type {
        Some(ServiceType::Labor) => step.say_after(
            "Do you have any heavy items (300+ lbs) that need moving?",
            50,
        ),
        Some(ServiceType::Single) => {
            let item = record
                .item_label
                .clone()
                .unwrap_or_else(|| "item".to_string());
            step.say_after(
                format!(
                    "Would you like to add photos of your {item}? This ensures we \
                     bring the right equipment."
                ),
                50,
            )
        }
        _ => step.say_after("What type of place are you moving TO?", 50),
    }
}

pub(crate) fn destination_type(record: &mut Record, token: &str) -> Step {
    let Some(place) = HomeType::parse(token) else {
        return Step::stay();
    };
    record.home_type_to = Some(place);

    let step = Step::to(match place {
        HomeType::Storage if record.has_third_location => Stage::StairsThird,
        HomeType::Storage => Stage::TvHandlingCheck,
        _ => Stage::HomeSizeAssessmentTo,
    })
    .say_after(
        format!("Moving to a {} - got it! ✓", home_type_name(place)),
        30,
    );

    match place {
        // A storage destination skips the size and bedroom questions.
        HomeType::Storage if record.has_third_location => step
            .say_after("Now let me ask about your third location...", 50)
            .say_after("Are there any stairs at the third location?", 90),
        HomeType::Storage => step
            .say_after("Now let me ask about some specifics...", 50)
            .say_after("Do you have any TVs that need special handling? 📺", 90),
        _ => step.say_after(
            "Is your destination place larger than 2,600 square feet?",
            50,
        ),
    }
}

pub(crate) fn home_size_assessment_to(record: &mut Record, token: &str) -> Step {
    let Some(size) = HomeSizeClass::parse(token) else {
        return Step::stay();
    };
    record.home_size_to = Some(size);

    let acknowledgement = match size {
        HomeSizeClass::Large => "Large destination home noted! ✓",
        HomeSizeClass::Standard => "Standard size destination noted! ✓",
    };
    Step::to(Stage::BedroomsTo)
        .say_after(acknowledgement, 30)
        .say_after("How many bedrooms at your new place?", 50)
}

pub(crate) fn bedrooms_to(record: &mut Record, token: &str) -> Step {
    let Some(bedrooms) = token.parse::<u32>().ok().filter(|n| (1..=5).contains(n)) else {
        return Step::stay();
    };
    record.bedrooms_to = Some(bedrooms);

    let step = Step::to(if record.has_third_location {
        Stage::StairsThird
    } else {
        Stage::TvHandlingCheck
    })
    .say_after(
        format!("{} at new place - perfect! ✓", bedroom_phrase(bedrooms)),
        30,
    );

    if record.has_third_location {
        step.say_after("Now let me ask about your third location...", 50)
            .say_after("Are there any stairs at the third location?", 90)
    } else {
        step.say_after("Do you have any large TVs (55 inches or larger)?", 50)
    }
}

pub(crate) fn stairs_third(record: &mut Record, token: &str) -> Step {
    let Some(flights) = parse_flights(token) else {
        return Step::stay();
    };
    record.stairs_third = flights;

    Step::to(Stage::BedroomsThird)
        .say_after(
            format!("{} at third location - noted! ✓", stairs_label(flights)),
            30,
        )
        .say_after("How many bedrooms at this third location?", 50)
}

pub(crate) fn bedrooms_third(record: &mut Record, token: &str) -> Step {
    let Some(bedrooms) = token.parse::<u32>().ok().filter(|n| (1..=5).contains(n)) else {
        return Step::stay();
    };
    record.bedrooms_third = Some(bedrooms);

    let counted = if bedrooms == 1 {
        "1 bedroom".to_string()
    } else {
        format!("{bedrooms} bedrooms")
    };
    Step::to(Stage::TvHandlingCheck)
        .say_after(
            format!("Perfect! {counted} at third location noted. ✓"),
            30,
        )
        .say_after("Now let me ask about some specifics...", 50)
        .say_after("Do you have any TVs that need special handling? 📺", 90)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::flows::Advance;

    fn moving_record() -> Record {
        let mut record = Record::new();
        record.service_type = Some(ServiceType::Moving);
        record
    }

    mod pickup_walkthrough {
        use super::*;

        #[test]
        fn moving_stairs_lead_to_the_home_type_question() {
            let mut record = moving_record();

            let step = stairs_from(&mut record, "2");

            assert_eq!(step.next(), Advance::To(Stage::HomeType));
            assert_eq!(record.stairs_from, 2);
            assert!(step.replies()[0].content().contains("2 flights at pickup"));
        }

        #[test]
        fn labor_stairs_skip_straight_to_destination_stairs() {
            let mut record = Record::new();
            record.service_type = Some(ServiceType::Labor);

            let step = stairs_from(&mut record, "0");

            assert_eq!(step.next(), Advance::To(Stage::StairsTo));
            assert!(step.replies()[0].content().contains("No stairs"));
        }

        #[test]
        fn unknown_stair_token_is_ignored() {
            let mut record = moving_record();

            let step = stairs_from(&mut record, "elevator");

            assert_eq!(step.next(), Advance::Stay);
        }

        #[test]
        fn home_questions_chain_through_access_and_bedrooms() {
            let mut record = moving_record();

            assert_eq!(
                home_type(&mut record, "house").next(),
                Advance::To(Stage::HomeSizeAssessment)
            );
            assert_eq!(
                home_size_assessment(&mut record, "large").next(),
                Advance::To(Stage::AccessObstacles)
            );
            assert_eq!(
                access_obstacles(&mut record, "long_walk").next(),
                Advance::To(Stage::BedroomsFrom)
            );
            assert_eq!(
                bedrooms_from(&mut record, "3").next(),
                Advance::To(Stage::StairsTo)
            );

            assert_eq!(record.home_type_from, Some(HomeType::House));
            assert_eq!(record.home_size_from, Some(HomeSizeClass::Large));
            assert_eq!(record.access_from, Some(AccessClass::LongWalk));
            assert_eq!(record.bedrooms_from, Some(3));
        }

        #[test]
        fn one_bedroom_reads_as_studio() {
            let mut record = moving_record();

            let step = bedrooms_from(&mut record, "1");

            assert!(step.replies()[0].content().contains("Studio/1 Bedroom"));
        }
    }

    mod destination_walkthrough {
        use super::*;

        #[test]
        fn moving_destination_stairs_ask_for_the_place_type() {
            let mut record = moving_record();

            let step = stairs_to(&mut record, "1");

            assert_eq!(step.next(), Advance::To(Stage::DestinationType));
            assert!(step.replies()[0].content().contains("1 flight at destination"));
        }

        #[test]
        fn labor_destination_stairs_go_to_the_heavy_item_check() {
            let mut record = Record::new();
            record.service_type = Some(ServiceType::Labor);

            let step = stairs_to(&mut record, "1");

            assert_eq!(step.next(), Advance::To(Stage::HeavyItemsCheck));
        }

        #[test]
        fn single_item_offers_photos_with_the_item_name() {
            let mut record = Record::new();
            record.service_type = Some(ServiceType::Single);
            record.item_label = Some("Couch".to_string());

            let step = stairs_to(&mut record, "0");

            assert_eq!(step.next(), Advance::To(Stage::OfferPhotosSingle));
            assert!(step.replies()[1].content().contains("photos of your Couch"));
        }

        #[test]
        fn storage_destination_skips_size_and_bedrooms() {
            let mut record = moving_record();

            let step = destination_type(&mut record, "storage");

            assert_eq!(step.next(), Advance::To(Stage::TvHandlingCheck));
            assert_eq!(record.home_type_to, Some(HomeType::Storage));
        }

        #[test]
        fn storage_destination_still_visits_a_third_stop() {
            let mut record = moving_record();
            record.has_third_location = true;

            let step = destination_type(&mut record, "storage");

            assert_eq!(step.next(), Advance::To(Stage::StairsThird));
        }

        #[test]
        fn house_destination_asks_size_then_bedrooms() {
            let mut record = moving_record();

            assert_eq!(
                destination_type(&mut record, "house").next(),
                Advance::To(Stage::HomeSizeAssessmentTo)
            );
            assert_eq!(
                home_size_assessment_to(&mut record, "standard").next(),
                Advance::To(Stage::BedroomsTo)
            );

            let step = bedrooms_to(&mut record, "4");
            assert_eq!(step.next(), Advance::To(Stage::TvHandlingCheck));
            assert_eq!(record.bedrooms_to, Some(4));
        }
    }

    mod third_stop_walkthrough {
        use super::*;

        #[test]
        fn third_stop_questions_follow_the_destination_bedrooms() {
            let mut record = moving_record();
            record.has_third_location = true;

            let step = bedrooms_to(&mut record, "2");
            assert_eq!(step.next(), Advance::To(Stage::StairsThird));

            assert_eq!(
                stairs_third(&mut record, "1").next(),
                Advance::To(Stage::BedroomsThird)
            );

            let step = bedrooms_third(&mut record, "1");
            assert_eq!(step.next(), Advance::To(Stage::TvHandlingCheck));
            assert!(step.replies()[0].content().contains("1 bedroom at third location"));
            assert_eq!(record.stairs_third, 1);
            assert_eq!(record.bedrooms_third, Some(1));
        }
    }
}
