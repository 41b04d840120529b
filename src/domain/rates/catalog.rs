//! Item catalogs.
//!
//! Lookup tables for every item a customer can select during the dialog,
//! keyed by the stable option tokens the flows emit. Items the company
//! will not move are listed in [`EXCLUDED_ITEMS`] so the flows can filter
//! them out with an explanation instead of pricing them.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Handling data for one catalog item on a moving or labor job.
#[derive(Debug, Clone, Copy)]
pub struct HandlingRate {
    pub label: &'static str,
    /// Flat handling fee added to the estimate.
    pub fee: Decimal,
    /// Smallest crew that can handle the item safely.
    pub min_crew: u32,
    /// Loading time the item adds, in hours.
    pub handling_hours: f64,
    /// Approximate weight in pounds, zero when it never matters.
    pub weight_lbs: u32,
}

/// A protective TV box sold alongside TV handling.
#[derive(Debug, Clone, Copy)]
pub struct TvBoxRate {
    pub label: &'static str,
    pub fee: Decimal,
}

/// Pricing profile for one single-item delivery category.
#[derive(Debug, Clone, Copy)]
pub struct SingleItemCategory {
    pub label: &'static str,
    pub crew: u32,
    /// Smallest billable job length for the category.
    pub minimum_minutes: u32,
    pub fee: Decimal,
    pub weight_lbs: u32,
}

/// Specialty items offered on moving and labor jobs.
pub static SPECIAL_ITEMS: Lazy<HashMap<&'static str, HandlingRate>> = Lazy::new(|| {
    HashMap::from([
        (
            "piano",
            HandlingRate {
                label: "Piano",
                fee: dec!(200),
                min_crew: 3,
                handling_hours: 1.5,
                weight_lbs: 500,
            },
        ),
        (
            "safe",
            HandlingRate {
                label: "Safe",
                fee: dec!(200),
                min_crew: 4,
                handling_hours: 1.5,
                weight_lbs: 600,
            },
        ),
        (
            "heavyItems",
            HandlingRate {
                label: "Heavy Items (300-350lbs)",
                fee: dec!(150),
                min_crew: 3,
                handling_hours: 0.75,
                weight_lbs: 325,
            },
        ),
        (
            "otherHeavy",
            HandlingRate {
                label: "Other Heavy Items (350+ lbs)",
                fee: dec!(150),
                min_crew: 3,
                handling_hours: 0.75,
                weight_lbs: 350,
            },
        ),
        (
            "gym",
            HandlingRate {
                label: "Universal Gym Equipment",
                fee: dec!(200),
                min_crew: 3,
                handling_hours: 1.5,
                weight_lbs: 400,
            },
        ),
        (
            "freeWeights",
            HandlingRate {
                label: "Free Weights",
                fee: dec!(100),
                min_crew: 3,
                handling_hours: 1.0,
                weight_lbs: 0,
            },
        ),
        (
            "treadmill",
            HandlingRate {
                label: "Treadmill/Elliptical",
                fee: dec!(0),
                min_crew: 2,
                handling_hours: 0.5,
                weight_lbs: 0,
            },
        ),
        (
            "hutch",
            HandlingRate {
                label: "China Hutch/Cabinet",
                fee: dec!(0),
                min_crew: 2,
                handling_hours: 0.35,
                weight_lbs: 0,
            },
        ),
    ])
});

/// Standard household appliances. Flat loading time, no fee.
pub static APPLIANCES: Lazy<HashMap<&'static str, HandlingRate>> = Lazy::new(|| {
    let appliance = |label| HandlingRate {
        label,
        fee: dec!(0),
        min_crew: 2,
        handling_hours: 0.35,
        weight_lbs: 0,
    };
    HashMap::from([
        ("washer", appliance("Washer")),
        ("dryer", appliance("Dryer")),
        ("refrigerator", appliance("Refrigerator")),
        ("stove", appliance("Stove")),
        ("freezer", appliance("Deep Freezer")),
        ("dishwasher", appliance("Dishwasher")),
    ])
});

/// Shop and garage equipment.
pub static SHOP_EQUIPMENT: Lazy<HashMap<&'static str, HandlingRate>> = Lazy::new(|| {
    HashMap::from([
        (
            "workbench",
            HandlingRate {
                label: "Workbench",
                fee: dec!(50),
                min_crew: 2,
                handling_hours: 0.5,
                weight_lbs: 200,
            },
        ),
        (
            "toolChest",
            HandlingRate {
                label: "Large Tool Chest",
                fee: dec!(40),
                min_crew: 2,
                handling_hours: 0.3,
                weight_lbs: 150,
            },
        ),
        (
            "tablesaw",
            HandlingRate {
                label: "Table Saw",
                fee: dec!(80),
                min_crew: 3,
                handling_hours: 0.75,
                weight_lbs: 250,
            },
        ),
        (
            "airCompressor",
            HandlingRate {
                label: "Air Compressor",
                fee: dec!(60),
                min_crew: 2,
                handling_hours: 0.4,
                weight_lbs: 180,
            },
        ),
        (
            "weldingEquipment",
            HandlingRate {
                label: "Welding Equipment",
                fee: dec!(80),
                min_crew: 2,
                handling_hours: 0.5,
                weight_lbs: 200,
            },
        ),
        (
            "drillPress",
            HandlingRate {
                label: "Drill Press",
                fee: dec!(100),
                min_crew: 3,
                handling_hours: 0.6,
                weight_lbs: 250,
            },
        ),
        (
            "heavyMachinery",
            HandlingRate {
                label: "Heavy Machinery (300+ lbs)",
                fee: dec!(200),
                min_crew: 4,
                handling_hours: 1.0,
                weight_lbs: 300,
            },
        ),
        (
            "vehicleLift",
            HandlingRate {
                label: "Vehicle Lift/Hoist",
                fee: dec!(300),
                min_crew: 4,
                handling_hours: 1.5,
                weight_lbs: 500,
            },
        ),
        (
            "automotiveEquipment",
            HandlingRate {
                label: "Heavy Automotive Equipment",
                fee: dec!(150),
                min_crew: 3,
                handling_hours: 0.75,
                weight_lbs: 300,
            },
        ),
    ])
});

/// Oversized furniture that needs extra handling on a full move.
pub static OVERSIZED_FURNITURE: Lazy<HashMap<&'static str, HandlingRate>> = Lazy::new(|| {
    HashMap::from([
        (
            "largeSectional",
            HandlingRate {
                label: "Oversized Sectional (10ft+)",
                fee: dec!(40),
                min_crew: 2,
                handling_hours: 0.75,
                weight_lbs: 250,
            },
        ),
        (
            "purpleMattress",
            HandlingRate {
                label: "Purple Mattress (Specialty Handling)",
                fee: dec!(40),
                min_crew: 2,
                handling_hours: 0.25,
                weight_lbs: 0,
            },
        ),
        (
            "tempurPedicMattress",
            HandlingRate {
                label: "Tempur-Pedic Mattress",
                fee: dec!(40),
                min_crew: 2,
                handling_hours: 0.25,
                weight_lbs: 0,
            },
        ),
        (
            "adjustableBase",
            HandlingRate {
                label: "Adjustable Bed Base",
                fee: dec!(0),
                min_crew: 2,
                handling_hours: 0.5,
                weight_lbs: 0,
            },
        ),
        (
            "californiaKing",
            HandlingRate {
                label: "California King Mattress",
                fee: dec!(40),
                min_crew: 2,
                handling_hours: 0.2,
                weight_lbs: 0,
            },
        ),
        (
            "heavyFurniture",
            HandlingRate {
                label: "Heavy Furniture (300+ lbs)",
                fee: dec!(100),
                min_crew: 3,
                handling_hours: 0.5,
                weight_lbs: 300,
            },
        ),
        (
            "arcadeGame",
            HandlingRate {
                label: "Arcade Game",
                fee: dec!(150),
                min_crew: 3,
                handling_hours: 0.75,
                weight_lbs: 300,
            },
        ),
        (
            "largeEntertainmentCenter",
            HandlingRate {
                label: "Large Entertainment Center",
                fee: dec!(100),
                min_crew: 2,
                handling_hours: 0.75,
                weight_lbs: 250,
            },
        ),
    ])
});

/// Large-television handling, keyed by screen-size bracket.
pub static TV_SIZES: Lazy<HashMap<&'static str, HandlingRate>> = Lazy::new(|| {
    HashMap::from([
        (
            "tv55to65",
            HandlingRate {
                label: "55-65 inch TV",
                fee: dec!(35),
                min_crew: 2,
                handling_hours: 0.3,
                weight_lbs: 0,
            },
        ),
        (
            "tv70to75",
            HandlingRate {
                label: "70-75 inch TV",
                fee: dec!(50),
                min_crew: 2,
                handling_hours: 0.4,
                weight_lbs: 0,
            },
        ),
        (
            "tv80plus",
            HandlingRate {
                label: "80+ inch TV",
                fee: dec!(75),
                min_crew: 3,
                handling_hours: 0.5,
                weight_lbs: 0,
            },
        ),
    ])
});

/// Protective TV boxes, keyed by box token.
pub static TV_BOXES: Lazy<HashMap<&'static str, TvBoxRate>> = Lazy::new(|| {
    HashMap::from([
        (
            "tvBox55to65",
            TvBoxRate {
                label: "TV Box for 55-65 inch TV",
                fee: dec!(55),
            },
        ),
        (
            "tvBox70to75",
            TvBoxRate {
                label: "TV Box for 70-75 inch TV",
                fee: dec!(65),
            },
        ),
        (
            "tvBox80plus",
            TvBoxRate {
                label: "TV Box for 80+ inch TV",
                fee: dec!(75),
            },
        ),
    ])
});

/// Maps a TV size token to the box token that fits it.
pub fn tv_box_for(size_token: &str) -> Option<&'static str> {
    match size_token {
        "tv55to65" => Some("tvBox55to65"),
        "tv70to75" => Some("tvBox70to75"),
        "tv80plus" => Some("tvBox80plus"),
        _ => None,
    }
}

/// Categories offered on single-item delivery jobs.
pub static SINGLE_ITEM_CATEGORIES: Lazy<HashMap<&'static str, SingleItemCategory>> =
    Lazy::new(|| {
        let standard = |label| SingleItemCategory {
            label,
            crew: 2,
            minimum_minutes: 60,
            fee: dec!(0),
            weight_lbs: 0,
        };
        let furniture_set = |label| SingleItemCategory {
            label,
            crew: 2,
            minimum_minutes: 90,
            fee: dec!(50),
            weight_lbs: 0,
        };
        HashMap::from([
            ("couch", standard("Couch/Sofa")),
            ("loveseat", standard("Loveseat")),
            ("chair", standard("Recliner/Chair")),
            ("mattress", standard("Mattress & Box Spring")),
            ("dresser", standard("Dresser")),
            ("desk", standard("Desk")),
            ("table", standard("Dining Table")),
            ("washer", standard("Washer")),
            ("dryer", standard("Dryer")),
            ("refrigerator", standard("Refrigerator")),
            ("stove", standard("Stove/Range")),
            ("freezer", standard("Deep Freezer")),
            ("dishwasher", standard("Dishwasher")),
            ("treadmill", standard("Treadmill")),
            ("elliptical", standard("Elliptical")),
            ("other", standard("Other Item")),
            ("bedroomSet", furniture_set("Bedroom Set")),
            ("diningSet", furniture_set("Dining Room Set")),
            ("livingSet", furniture_set("Living Room Set")),
            ("officeSet", furniture_set("Office Furniture Set")),
            (
                "piano",
                SingleItemCategory {
                    label: "Piano",
                    crew: 3,
                    minimum_minutes: 90,
                    fee: dec!(200),
                    weight_lbs: 500,
                },
            ),
            (
                "gunSafe",
                SingleItemCategory {
                    label: "Gun Safe",
                    crew: 4,
                    minimum_minutes: 120,
                    fee: dec!(100),
                    weight_lbs: 300,
                },
            ),
            (
                "safe",
                SingleItemCategory {
                    label: "Large Safe (500+ lbs)",
                    crew: 4,
                    minimum_minutes: 120,
                    fee: dec!(200),
                    weight_lbs: 600,
                },
            ),
            (
                "gym",
                SingleItemCategory {
                    label: "Home Gym Equipment",
                    crew: 3,
                    minimum_minutes: 90,
                    fee: dec!(100),
                    weight_lbs: 400,
                },
            ),
        ])
    });

/// Items the company declines to move, mapped to the plural phrase used
/// when telling the customer.
pub static EXCLUDED_ITEMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("hotTub", "hot tubs"),
        ("poolTable", "pool tables"),
        ("aquarium", "large aquariums"),
        ("shed", "sheds"),
    ])
});

/// Whether a token names an item the company will not move.
pub fn is_excluded(token: &str) -> bool {
    EXCLUDED_ITEMS.contains_key(token)
}

/// The customer-facing phrase for an excluded item.
pub fn exclusion_label(token: &str) -> Option<&'static str> {
    EXCLUDED_ITEMS.get(token).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod lookups {
        use super::*;

        #[test]
        fn special_items_carry_published_fees() {
            let piano = SPECIAL_ITEMS.get("piano").unwrap();
            assert_eq!(piano.fee, dec!(200));
            assert_eq!(piano.min_crew, 3);
            assert_eq!(piano.handling_hours, 1.5);

            let heavy = SPECIAL_ITEMS.get("heavyItems").unwrap();
            assert_eq!(heavy.fee, dec!(150));
            assert_eq!(heavy.handling_hours, 0.75);
        }

        #[test]
        fn every_appliance_takes_the_same_flat_time() {
            for (token, rate) in APPLIANCES.iter() {
                assert_eq!(rate.fee, dec!(0), "appliance {token} should not carry a fee");
                assert_eq!(rate.handling_hours, 0.35);
            }
            assert!(APPLIANCES.contains_key("dishwasher"));
        }

        #[test]
        fn shop_equipment_heaviest_entries_need_four_crew() {
            assert_eq!(SHOP_EQUIPMENT.get("heavyMachinery").unwrap().min_crew, 4);
            assert_eq!(SHOP_EQUIPMENT.get("vehicleLift").unwrap().min_crew, 4);
            assert_eq!(SHOP_EQUIPMENT.get("workbench").unwrap().min_crew, 2);
        }

        #[test]
        fn single_item_sets_share_fee_and_minimum() {
            for token in ["bedroomSet", "diningSet", "livingSet", "officeSet"] {
                let category = SINGLE_ITEM_CATEGORIES.get(token).unwrap();
                assert_eq!(category.fee, dec!(50));
                assert_eq!(category.minimum_minutes, 90);
            }
        }

        #[test]
        fn heavy_single_item_categories_exceed_the_weight_threshold() {
            for token in ["piano", "gunSafe", "safe", "gym"] {
                let category = SINGLE_ITEM_CATEGORIES.get(token).unwrap();
                assert!(category.weight_lbs >= 300, "{token} should be heavy");
            }
        }
    }

    mod exclusions {
        use super::*;

        #[test]
        fn declined_items_have_customer_facing_labels() {
            assert!(is_excluded("hotTub"));
            assert!(is_excluded("poolTable"));
            assert!(is_excluded("aquarium"));
            assert!(is_excluded("shed"));
            assert_eq!(exclusion_label("poolTable"), Some("pool tables"));
            assert_eq!(exclusion_label("couch"), None);
        }

        #[test]
        fn no_catalog_prices_an_excluded_item() {
            for token in EXCLUDED_ITEMS.keys() {
                assert!(!SPECIAL_ITEMS.contains_key(token));
                assert!(!SHOP_EQUIPMENT.contains_key(token));
                assert!(!OVERSIZED_FURNITURE.contains_key(token));
                assert!(!SINGLE_ITEM_CATEGORIES.contains_key(token));
            }
        }
    }

    mod tv_boxes {
        use super::*;

        #[test]
        fn every_tv_size_has_a_matching_box() {
            for size in TV_SIZES.keys() {
                let box_token = tv_box_for(size).unwrap();
                assert!(TV_BOXES.contains_key(box_token), "missing box for {size}");
            }
        }

        #[test]
        fn unknown_size_has_no_box() {
            assert_eq!(tv_box_for("tv40inch"), None);
        }

        #[test]
        fn box_prices_rise_with_screen_size() {
            let small = TV_BOXES.get("tvBox55to65").unwrap().fee;
            let medium = TV_BOXES.get("tvBox70to75").unwrap().fee;
            let large = TV_BOXES.get("tvBox80plus").unwrap().fee;
            assert!(small < medium && medium < large);
        }
    }
}
