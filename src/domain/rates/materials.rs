//! Packing-material price list.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One line in the packing-material price list.
#[derive(Debug, Clone, Copy)]
pub struct MaterialRate {
    pub label: &'static str,
    pub unit_price: Decimal,
}

/// Materials quoted when a customer wants packing supplies, keyed by the
/// tokens the itemizer emits.
pub static MATERIALS: Lazy<HashMap<&'static str, MaterialRate>> = Lazy::new(|| {
    HashMap::from([
        (
            "smallBox",
            MaterialRate {
                label: "Small Box (1.5 cu ft)",
                unit_price: dec!(2.59),
            },
        ),
        (
            "mediumBox",
            MaterialRate {
                label: "Medium Box (3.0 cu ft)",
                unit_price: dec!(3.19),
            },
        ),
        (
            "largeBox",
            MaterialRate {
                label: "Large Box (4.5 cu ft)",
                unit_price: dec!(3.79),
            },
        ),
        (
            "wardrobeBox",
            MaterialRate {
                label: "Wardrobe Box",
                unit_price: dec!(14.59),
            },
        ),
        (
            "movingBlanket",
            MaterialRate {
                label: "Moving Blanket",
                unit_price: dec!(14.99),
            },
        ),
        (
            "packingPaper",
            MaterialRate {
                label: "Packing Paper (10 lb)",
                unit_price: dec!(18.99),
            },
        ),
        (
            "packingTape",
            MaterialRate {
                label: "Packing Tape (55yd)",
                unit_price: dec!(6.29),
            },
        ),
        (
            "furnitureCover",
            MaterialRate {
                label: "Furniture Cover",
                unit_price: dec!(6.59),
            },
        ),
        (
            "dishpack",
            MaterialRate {
                label: "Dish Pack",
                unit_price: dec!(9.99),
            },
        ),
        (
            "smallBubbleWrap",
            MaterialRate {
                label: "Small Bubble Wrap",
                unit_price: dec!(18.99),
            },
        ),
        (
            "largeBubbleWrap",
            MaterialRate {
                label: "Large Bubble Wrap",
                unit_price: dec!(18.99),
            },
        ),
    ])
});

/// Price-list lookup by token.
pub fn material(token: &str) -> Option<&'static MaterialRate> {
    MATERIALS.get(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_prices_rise_with_size() {
        let small = material("smallBox").unwrap().unit_price;
        let medium = material("mediumBox").unwrap().unit_price;
        let large = material("largeBox").unwrap().unit_price;
        assert!(small < medium && medium < large);
    }

    #[test]
    fn every_material_has_a_positive_price() {
        for (token, rate) in MATERIALS.iter() {
            assert!(rate.unit_price > dec!(0), "{token} must be priced");
            assert!(!rate.label.is_empty());
        }
    }

    #[test]
    fn unknown_token_is_absent() {
        assert!(material("pianoCover").is_none());
    }
}
