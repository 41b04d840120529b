//! Labor-only estimate.
//!
//! Bills customer-chosen hours plus travel over the full round trip,
//! base to final stop and home again. Item fees price the same way the
//! moving flow prices them.

use rust_decimal::Decimal;

use crate::domain::estimate::types::{LaborEstimate, LaborJobInputs};
use crate::domain::foundation::{money_from_f64, percent_of, round_money, times_hours};
use crate::domain::rates::{HandlingRate, OVERSIZED_FURNITURE, RATES, SHOP_EQUIPMENT, SPECIAL_ITEMS};

const DEFAULT_PICKUP_MILES: f64 = 30.0;
const AVERAGE_SPEED_MPH: f64 = 45.0;

fn sum_fees(
    tokens: &[String],
    table: &std::collections::HashMap<&'static str, HandlingRate>,
) -> Decimal {
    tokens
        .iter()
        .filter_map(|token| table.get(token.as_str()))
        .map(|rate| rate.fee)
        .sum()
}

fn count_heavy(
    tokens: &[String],
    table: &std::collections::HashMap<&'static str, HandlingRate>,
) -> u32 {
    tokens
        .iter()
        .filter_map(|token| table.get(token.as_str()))
        .filter(|rate| rate.weight_lbs >= RATES.heavy_weight_threshold)
        .count() as u32
}

/// Prices a labor-only job from the assembled inputs.
pub fn labor_estimate(inputs: &LaborJobInputs) -> LaborEstimate {
    let rates = &*RATES;

    let from_miles = inputs.travel.pickup_miles().unwrap_or(DEFAULT_PICKUP_MILES);
    let trip_miles = inputs.travel.trip_miles().unwrap_or(0.0);

    // Round trip: base -> pickup -> destination [-> third] -> base.
    let mut total_miles = from_miles + trip_miles;
    let third_miles = if inputs.has_third_location {
        inputs
            .travel
            .destination_to_third
            .map(|leg| leg.miles)
            .unwrap_or(0.0)
    } else {
        0.0
    };
    total_miles += third_miles;
    let final_return_miles = inputs
        .travel
        .final_return_to_base
        .map(|leg| leg.miles)
        .filter(|miles| *miles > 0.0)
        .or(inputs.travel.trip_miles().filter(|miles| *miles > 0.0))
        .unwrap_or(from_miles);
    total_miles += final_return_miles;

    let drive_hours = match inputs.travel.base_to_pickup {
        Some(leg) if leg.hours > 0.0 => {
            let mut hours = leg.hours;
            if let Some(trip) = inputs.travel.pickup_to_destination {
                hours += trip.hours;
            }
            if inputs.has_third_location {
                if let Some(third) = inputs.travel.destination_to_third {
                    hours += third.hours;
                }
            }
            hours + final_return_miles / AVERAGE_SPEED_MPH
        }
        _ => total_miles / AVERAGE_SPEED_MPH,
    };

    let crew_size = inputs.crew_size.max(2);
    let hourly_rate = round_money(
        rates.labor.base_hourly
            + money_from_f64(from_miles) * rates.labor.per_mile_adjustment
            + Decimal::from(crew_size - 2) * rates.labor.extra_crew_surcharge,
    );
    let labor_cost = times_hours(hourly_rate, inputs.hours);
    let travel_cost = round_money(money_from_f64(total_miles) * rates.labor.travel_per_mile);
    let service_charge = percent_of(labor_cost + travel_cost, rates.labor.service_charge);

    let stair_fees =
        rates.stair_flight_fee * Decimal::from(inputs.stairs_from + inputs.stairs_to);
    let special_item_fees = sum_fees(&inputs.special_items, &SPECIAL_ITEMS);
    let piano_board_fee = if inputs.piano_board {
        rates.piano_board_fee
    } else {
        Decimal::ZERO
    };
    let heavy_count = count_heavy(&inputs.shop_equipment, &SHOP_EQUIPMENT)
        + count_heavy(&inputs.oversized_furniture, &OVERSIZED_FURNITURE);
    let heavy_item_fees = rates.heavy_item_fee * Decimal::from(heavy_count);
    let shop_equipment_fees = sum_fees(&inputs.shop_equipment, &SHOP_EQUIPMENT);
    let oversized_fees = sum_fees(&inputs.oversized_furniture, &OVERSIZED_FURNITURE);

    let subtotal = labor_cost
        + travel_cost
        + service_charge
        + stair_fees
        + special_item_fees
        + piano_board_fee
        + heavy_item_fees
        + shop_equipment_fees
        + oversized_fees;
    let same_day_fee = if inputs.is_same_day {
        percent_of(subtotal, rates.same_day_surcharge)
    } else {
        Decimal::ZERO
    };
    let total = round_money(subtotal + same_day_fee);

    LaborEstimate {
        crew_size,
        labor_hours: inputs.hours,
        drive_hours,
        total_miles,
        hourly_rate,
        labor_cost,
        travel_cost,
        service_charge,
        stair_fees,
        special_item_fees,
        piano_board_fee,
        heavy_item_fees,
        shop_equipment_fees,
        oversized_fees,
        same_day_fee,
        total,
    }
}
