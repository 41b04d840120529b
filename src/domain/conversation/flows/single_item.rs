//! Single item delivery: category menu, item pick, and the free-text
//! describe path with its weight follow-up.

use crate::domain::conversation::record::{ItemCategory, Record, WeightClass};
use crate::domain::conversation::stage::Stage;
use crate::domain::rates::{exclusion_label, is_excluded, SINGLE_ITEM_CATEGORIES};
use crate::domain::validation::validate_description;

use super::Step;

const DATE_QUESTION: &str = "When are you thinking? What date works best for your service? 📅";

pub(crate) fn item_type(record: &mut Record, token: &str) -> Step {
    let Some(category) = ItemCategory::parse(token) else {
        return Step::stay();
    };
    record.item_category = Some(category);

    match category {
        ItemCategory::Furniture => Step::to(Stage::SelectFurnitureItem)
            .say_after("Furniture - got it! ✓", 30)
            .say_after("Which furniture item are we moving?", 50),
        ItemCategory::Appliance => Step::to(Stage::SelectApplianceItem)
            .say_after("Appliance - got it! ✓", 30)
            .say_after("Which appliance are we moving?", 50),
        ItemCategory::Set => Step::to(Stage::SelectSetItem)
            .say_after("A full set - got it! ✓", 30)
            .say_after("Which set are we moving?", 50),
        ItemCategory::Heavy => Step::to(Stage::SelectHeavyItem)
            .say_after("Heavy or special item - got it! ✓", 30)
            .say_after("Which item is it?", 50),
        ItemCategory::Other => Step::to(Stage::DescribeItem)
            .say_after("No problem! ✓", 30)
            .say_after("What's the item? Describe it briefly so we come prepared.", 50),
    }
}

fn select_catalog_item(record: &mut Record, token: &str) -> Step {
    if token == "other" {
        return Step::to(Stage::DescribeItem)
            .say_after("No problem! ✓", 30)
            .say_after("What's the item? Describe it briefly so we come prepared.", 50);
    }
    let Some(category) = SINGLE_ITEM_CATEGORIES.get(token) else {
        return Step::stay();
    };
    record.item_token = Some(token.to_string());
    record.item_label = Some(category.label.to_string());

    Step::to(Stage::MovingDate)
        .say_after(format!("Perfect - {}! ✓", category.label), 30)
        .say_after(DATE_QUESTION, 50)
}

pub(crate) fn select_furniture_item(record: &mut Record, token: &str) -> Step {
    select_catalog_item(record, token)
}

pub(crate) fn select_appliance_item(record: &mut Record, token: &str) -> Step {
    select_catalog_item(record, token)
}

pub(crate) fn select_set_item(record: &mut Record, token: &str) -> Step {
    // The set menu has no describe path.
    if token == "other" {
        return Step::stay();
    }
    select_catalog_item(record, token)
}

/// Heavy menu includes items we refuse outright; those stay on the menu
/// so the refusal can be explained.
pub(crate) fn select_heavy_item(record: &mut Record, token: &str) -> Step {
    if is_excluded(token) {
        let label = exclusion_label(token).unwrap_or("those");
        return Step::stay().say_after(
            format!(
                "❌ Unfortunately, we do not move {label}. Is there another item we \
                 can help you with?"
            ),
            30,
        );
    }
    select_catalog_item(record, token)
}

pub(crate) fn describe_item(record: &mut Record, answer: &str) -> Step {
    let Ok(description) = validate_description("item_description", answer, 3) else {
        return Step::stay().say_after(
            "Could you describe the item in a few words so we know what to expect?",
            30,
        );
    };
    record.item_token = None;
    record.item_label = Some(description.clone());

    Step::to(Stage::CustomItemWeight)
        .say_after(format!("Got it - {description}! ✓"), 30)
        .say_after("Roughly how heavy is it?", 50)
}

pub(crate) fn custom_item_weight(record: &mut Record, token: &str) -> Step {
    let Some(class) = WeightClass::parse(token) else {
        return Step::stay();
    };
    record.item_weight_class = Some(class);

    Step::to(Stage::MovingDate)
        .say_after(
            format!("Got it! We'll plan for a {} person crew. ✓", class.crew()),
            30,
        )
        .say_after(DATE_QUESTION, 50)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::flows::Advance;

    #[test]
    fn category_menus_route_to_their_item_lists() {
        let mut record = Record::new();

        assert_eq!(
            item_type(&mut record, "category_furniture").next(),
            Advance::To(Stage::SelectFurnitureItem)
        );
        assert_eq!(
            item_type(&mut record, "category_heavy").next(),
            Advance::To(Stage::SelectHeavyItem)
        );
        assert_eq!(
            item_type(&mut record, "other").next(),
            Advance::To(Stage::DescribeItem)
        );
        assert_eq!(record.item_category, Some(ItemCategory::Other));
    }

    #[test]
    fn picking_a_couch_records_it_and_asks_the_date() {
        let mut record = Record::new();

        let step = select_furniture_item(&mut record, "couch");

        assert_eq!(step.next(), Advance::To(Stage::MovingDate));
        assert_eq!(record.item_token.as_deref(), Some("couch"));
        assert_eq!(record.item_label.as_deref(), Some("Couch/Sofa"));
    }

    #[test]
    fn other_on_an_item_menu_opens_the_describe_path() {
        let mut record = Record::new();

        let step = select_appliance_item(&mut record, "other");

        assert_eq!(step.next(), Advance::To(Stage::DescribeItem));
        assert!(record.item_token.is_none());
    }

    #[test]
    fn hot_tubs_are_refused_on_the_heavy_menu() {
        let mut record = Record::new();

        let step = select_heavy_item(&mut record, "hotTub");

        assert_eq!(step.next(), Advance::Stay);
        assert!(step.replies()[0].content().contains("we do not move hot tubs"));
        assert!(record.item_token.is_none());
    }

    #[test]
    fn gun_safe_is_a_catalogued_heavy_item() {
        let mut record = Record::new();

        let step = select_heavy_item(&mut record, "gunSafe");

        assert_eq!(step.next(), Advance::To(Stage::MovingDate));
        assert_eq!(record.item_token.as_deref(), Some("gunSafe"));
    }

    #[test]
    fn described_items_ask_for_a_weight_class() {
        let mut record = Record::new();

        let step = describe_item(&mut record, "antique grandfather clock");

        assert_eq!(step.next(), Advance::To(Stage::CustomItemWeight));
        assert_eq!(
            record.item_label.as_deref(),
            Some("antique grandfather clock")
        );

        let step = custom_item_weight(&mut record, "extra_heavy");
        assert_eq!(step.next(), Advance::To(Stage::MovingDate));
        assert_eq!(record.item_weight_class, Some(WeightClass::ExtraHeavy));
        assert!(step.replies()[0].content().contains("3 person crew"));
    }

    #[test]
    fn blank_description_is_reprompted() {
        let mut record = Record::new();

        let step = describe_item(&mut record, "  ");

        assert_eq!(step.next(), Advance::Stay);
        assert!(record.item_label.is_none());
    }
}
