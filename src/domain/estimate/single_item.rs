//! Single-item delivery estimate.

use rust_decimal::Decimal;

use crate::domain::estimate::types::{SingleItemEstimate, SingleItemJobInputs};
use crate::domain::foundation::{money_from_f64, percent_of, round_money, times_hours};
use crate::domain::rates::{SingleItemCategory, RATES, SINGLE_ITEM_CATEGORIES};

const DEFAULT_LEG_MILES: f64 = 30.0;
const AVERAGE_SPEED_MPH: f64 = 45.0;
const LOAD_BUFFER_MINUTES: u32 = 30;

fn fallback_category() -> SingleItemCategory {
    SingleItemCategory {
        label: "Custom Item",
        crew: 2,
        minimum_minutes: 60,
        fee: Decimal::ZERO,
        weight_lbs: 0,
    }
}

/// Prices a single-item delivery from the assembled inputs.
///
/// Unknown category tokens fall back to a standard two-person profile so
/// a custom described item still gets a quote.
pub fn single_item_estimate(inputs: &SingleItemJobInputs) -> SingleItemEstimate {
    let rates = &*RATES;

    let category = SINGLE_ITEM_CATEGORIES
        .get(inputs.category_token.as_str())
        .copied()
        .unwrap_or_else(fallback_category);

    let total_stairs = inputs.stairs_pickup + inputs.stairs_delivery;
    let stair_fees = rates.single_item.stair_fee * Decimal::from(total_stairs);

    let from_miles = inputs.travel.pickup_miles().unwrap_or(DEFAULT_LEG_MILES);
    let trip_miles = inputs.travel.trip_miles().unwrap_or(DEFAULT_LEG_MILES);
    let total_miles = from_miles + trip_miles;

    let measured_hours = inputs
        .travel
        .base_to_pickup
        .map(|leg| leg.hours)
        .unwrap_or(0.0)
        + inputs
            .travel
            .pickup_to_destination
            .map(|leg| leg.hours)
            .unwrap_or(0.0);
    let drive_hours = if measured_hours > 0.0 {
        measured_hours
    } else {
        total_miles / AVERAGE_SPEED_MPH
    };
    let drive_minutes = (drive_hours * 60.0).ceil() as u32;

    let crew_size = inputs.crew_override.unwrap_or(category.crew);
    let minimum_minutes = inputs
        .minimum_minutes_override
        .unwrap_or(category.minimum_minutes);
    let billable_minutes = (drive_minutes + LOAD_BUFFER_MINUTES).max(minimum_minutes);

    let hourly_rate = rates.single_item.crew_hourly(crew_size);
    let base_cost = if billable_minutes <= 60 {
        rates.single_item.first_hour_base
    } else {
        let additional_hours = f64::from(billable_minutes - 60) / 60.0;
        round_money(rates.single_item.first_hour_base + times_hours(hourly_rate, additional_hours))
    };

    let distance_cost = round_money(money_from_f64(total_miles) * rates.single_item.per_mile);
    let item_fee = inputs.fee_override.unwrap_or(category.fee);
    let weight = inputs.weight_override.unwrap_or(category.weight_lbs);
    let heavy_item_fee = if weight >= rates.heavy_weight_threshold {
        rates.heavy_item_fee
    } else {
        Decimal::ZERO
    };

    let subtotal = base_cost + distance_cost + stair_fees + item_fee + heavy_item_fee;
    let same_day_fee = if inputs.is_same_day {
        percent_of(subtotal, rates.same_day_surcharge)
    } else {
        Decimal::ZERO
    };
    let total = round_money(subtotal + same_day_fee);

    SingleItemEstimate {
        item_label: inputs
            .item_label
            .clone()
            .unwrap_or_else(|| category.label.to_string()),
        crew_size,
        minimum_minutes,
        drive_minutes,
        billable_minutes,
        hourly_rate,
        base_cost,
        distance_cost,
        stair_fees,
        item_fee,
        heavy_item_fee,
        same_day_fee,
        total_miles,
        total,
    }
}
