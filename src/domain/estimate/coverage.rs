//! Full-value-protection pricing.

use rust_decimal::Decimal;

use crate::domain::foundation::round_money;
use crate::domain::rates::RATES;

/// Prices value-based coverage for a declared value and deductible.
///
/// The rate steps up for long trips. Each deductible tier above zero
/// compounds a 15% discount; an unrecognized deductible earns none. The
/// result never drops below the minimum charge.
pub fn coverage_cost(declared_value: Decimal, deductible: u32, one_way_trip_miles: f64) -> Decimal {
    let coverage = &RATES.coverage;
    let rate = if one_way_trip_miles > coverage.long_distance_threshold_miles {
        coverage.long_distance_rate
    } else {
        coverage.local_rate
    };

    let mut cost = declared_value * rate;
    if let Some(tier) = coverage.tier_index(deductible) {
        for _ in 0..tier {
            cost *= coverage.tier_discount;
        }
    }

    round_money(cost.max(coverage.minimum_charge))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn local_rate_applies_at_or_below_the_threshold() {
        assert_eq!(coverage_cost(dec!(10000), 0, 50.0), dec!(250.00));
    }

    #[test]
    fn long_distance_rate_applies_above_the_threshold() {
        assert_eq!(coverage_cost(dec!(10000), 0, 51.0), dec!(400.00));
    }

    #[test]
    fn second_tier_earns_one_discount() {
        // 25,000 x 0.025 x 0.85
        assert_eq!(coverage_cost(dec!(25000), 250, 30.0), dec!(531.25));
    }

    #[test]
    fn top_tier_compounds_four_discounts() {
        // 25,000 x 0.025 x 0.85^4
        assert_eq!(coverage_cost(dec!(25000), 1000, 30.0), dec!(326.25));
    }

    #[test]
    fn unknown_deductible_earns_no_discount() {
        assert_eq!(coverage_cost(dec!(25000), 300, 30.0), dec!(625.00));
    }

    #[test]
    fn small_declared_values_hit_the_minimum_charge() {
        assert_eq!(coverage_cost(dec!(1000), 1000, 30.0), dec!(49.99));
    }
}
