//! Full moving-service estimate.

use rust_decimal::Decimal;

use crate::domain::estimate::packing::{materials_quote, packing_hours, MaterialsContext};
use crate::domain::estimate::types::{HomeType, MovingEstimate, MovingJobInputs};
use crate::domain::foundation::{money_from_f64, percent_of, round_money, times_hours};
use crate::domain::rates::{
    APPLIANCES, OVERSIZED_FURNITURE, RATES, SHOP_EQUIPMENT, SPECIAL_ITEMS, TV_BOXES, TV_SIZES,
};

/// Hours to load a one-bedroom home of each type, before any add-ons.
fn base_loading_hours(home_type: HomeType) -> f64 {
    match home_type {
        HomeType::Apartment => 1.35,
        HomeType::House => 1.50,
        HomeType::Condo => 1.45,
        HomeType::Storage => 1.20,
    }
}

/// Additional loading hours per bedroom beyond the first.
fn per_bedroom_hours(home_type: HomeType) -> f64 {
    match home_type {
        HomeType::Apartment => 0.775,
        HomeType::House => 0.85,
        HomeType::Condo => 0.775,
        HomeType::Storage => 0.70,
    }
}

const STAIR_FLIGHT_HOURS: f64 = 0.275;
const DEADHEAD_RETURN_THRESHOLD_MILES: f64 = 85.0;
const CREW_EFFICIENCY_STEP: f64 = 0.175;
const THIRD_LOCATION_PICKUP_HOURS: f64 = 0.75;
const DEFAULT_PICKUP_MILES: f64 = 30.0;
const AVERAGE_SPEED_MPH: f64 = 45.0;

fn sum_handling_hours(
    tokens: &[String],
    table: &std::collections::HashMap<&'static str, crate::domain::rates::HandlingRate>,
) -> f64 {
    tokens
        .iter()
        .filter_map(|token| table.get(token.as_str()))
        .map(|rate| rate.handling_hours)
        .sum()
}

fn sum_fees(
    tokens: &[String],
    table: &std::collections::HashMap<&'static str, crate::domain::rates::HandlingRate>,
) -> Decimal {
    tokens
        .iter()
        .filter_map(|token| table.get(token.as_str()))
        .map(|rate| rate.fee)
        .sum()
}

fn count_heavy(
    tokens: &[String],
    table: &std::collections::HashMap<&'static str, crate::domain::rates::HandlingRate>,
) -> u32 {
    tokens
        .iter()
        .filter_map(|token| table.get(token.as_str()))
        .filter(|rate| rate.weight_lbs >= RATES.heavy_weight_threshold)
        .count() as u32
}

/// Prices a full move from the assembled job inputs.
///
/// Deterministic: the same inputs always produce the same estimate, so it
/// can be re-run whenever the record changes.
pub fn moving_estimate(inputs: &MovingJobInputs) -> MovingEstimate {
    let rates = &*RATES;

    let bedrooms = inputs
        .bedrooms_from
        .unwrap_or(2)
        .max(inputs.bedrooms_to.unwrap_or(2))
        .max(1);
    let total_stairs = inputs.stairs_from + inputs.stairs_to + inputs.stairs_third;

    // Loading and unloading time.
    let mut loading_hours = base_loading_hours(inputs.home_type)
        + f64::from(bedrooms - 1) * per_bedroom_hours(inputs.home_type);
    loading_hours += f64::from(total_stairs) * STAIR_FLIGHT_HOURS;

    if inputs.has_third_location {
        loading_hours *= 2.5;
        if inputs
            .third_action
            .map(|action| action.includes_pickup())
            .unwrap_or(false)
        {
            loading_hours += THIRD_LOCATION_PICKUP_HOURS;
        }
    } else {
        loading_hours *= 2.0;
    }

    loading_hours += sum_handling_hours(&inputs.appliances, &APPLIANCES);
    loading_hours += sum_handling_hours(&inputs.third_location_appliances, &APPLIANCES);
    loading_hours += sum_handling_hours(&inputs.tv_sizes, &TV_SIZES);
    loading_hours += sum_handling_hours(&inputs.shop_equipment, &SHOP_EQUIPMENT);
    loading_hours += sum_handling_hours(&inputs.oversized_furniture, &OVERSIZED_FURNITURE);
    loading_hours += sum_handling_hours(&inputs.special_items, &SPECIAL_ITEMS);

    let access = if inputs.access_multiplier > 0.0 {
        inputs.access_multiplier
    } else {
        1.0
    };
    loading_hours *= access;

    // Drive time from measured legs. Two-stop trips with a long return
    // leg bill half the deadhead drive home.
    let mut drive_hours = 0.0;
    if let Some(leg) = inputs.travel.base_to_pickup {
        drive_hours += leg.hours;
    }
    if let Some(leg) = inputs.travel.pickup_to_destination {
        drive_hours += leg.hours;
    }
    if inputs.has_third_location {
        if let Some(leg) = inputs.travel.destination_to_third {
            drive_hours += leg.hours;
        }
        if let Some(leg) = inputs.travel.final_return_to_base {
            drive_hours += leg.hours / 2.0;
        }
    } else {
        let return_miles = inputs
            .travel
            .final_return_to_base
            .map(|leg| leg.miles)
            .or(inputs.travel.pickup_miles())
            .unwrap_or(0.0);
        if return_miles > DEADHEAD_RETURN_THRESHOLD_MILES {
            drive_hours += return_miles / AVERAGE_SPEED_MPH / 2.0;
        }
    }

    let raw_packing_hours = packing_hours(
        loading_hours,
        inputs.packing_service,
        inputs.total_rooms,
        bedrooms,
    );

    // Extra crew members shorten the clock but raise the rate.
    let crew_size = inputs.crew_size.max(2);
    let efficiency = 1.0 - f64::from(crew_size - 2) * CREW_EFFICIENCY_STEP;
    let moving_hours = (loading_hours + drive_hours) * efficiency;
    let adjusted_packing_hours = raw_packing_hours * efficiency;

    let from_miles = inputs.travel.pickup_miles().unwrap_or(DEFAULT_PICKUP_MILES);
    let hourly_rate = round_money(
        rates.moving.base_hourly
            + money_from_f64(from_miles) * rates.moving.per_mile_adjustment
            + Decimal::from(crew_size - 2) * rates.moving.extra_crew_surcharge,
    );
    let base_cost = times_hours(hourly_rate, moving_hours);
    let service_charge = percent_of(base_cost, rates.moving.service_charge);
    let packing_cost = times_hours(rates.packing_hourly, adjusted_packing_hours);

    let special_item_fees = sum_fees(&inputs.special_items, &SPECIAL_ITEMS);
    let piano_board_fee = if inputs.piano_board {
        rates.piano_board_fee
    } else {
        Decimal::ZERO
    };
    let heavy_count = count_heavy(&inputs.shop_equipment, &SHOP_EQUIPMENT)
        + count_heavy(&inputs.oversized_furniture, &OVERSIZED_FURNITURE);
    let heavy_item_fees = rates.heavy_item_fee * Decimal::from(heavy_count);
    let tv_box_fees: Decimal = inputs
        .tv_boxes
        .iter()
        .filter_map(|token| TV_BOXES.get(token.as_str()))
        .map(|rate| rate.fee)
        .sum();
    let shop_equipment_fees = sum_fees(&inputs.shop_equipment, &SHOP_EQUIPMENT);
    let oversized_fees = sum_fees(&inputs.oversized_furniture, &OVERSIZED_FURNITURE);
    let stair_fees = rates.stair_flight_fee * Decimal::from(total_stairs);

    let toll_estimate = if inputs.has_third_location {
        let third_miles = inputs
            .travel
            .destination_to_third
            .map(|leg| leg.miles)
            .unwrap_or(0.0);
        round_money((money_from_f64(third_miles) * rates.toll_per_mile).max(rates.minimum_toll))
    } else {
        Decimal::ZERO
    };

    let packing_materials = if inputs.needs_packing_materials {
        let ctx = MaterialsContext {
            bedrooms: inputs.bedrooms_from.unwrap_or(0),
            appliances: &inputs.appliances,
            oversized_count: inputs.oversized_furniture.len(),
            shop_count: inputs.shop_equipment.len(),
            tv_count: inputs.tv_sizes.len(),
        };
        Some(materials_quote(
            inputs.total_rooms.unwrap_or(bedrooms),
            &ctx,
        ))
    } else {
        None
    };
    let materials_cost = packing_materials
        .as_ref()
        .map(|quote| quote.total)
        .unwrap_or(Decimal::ZERO);

    let subtotal = base_cost
        + service_charge
        + special_item_fees
        + piano_board_fee
        + heavy_item_fees
        + tv_box_fees
        + shop_equipment_fees
        + oversized_fees
        + packing_cost
        + materials_cost
        + toll_estimate
        + stair_fees
        + inputs.coverage_cost;
    let same_day_fee = if inputs.is_same_day {
        percent_of(subtotal, rates.same_day_surcharge)
    } else {
        Decimal::ZERO
    };
    let total = round_money(subtotal + same_day_fee);

    MovingEstimate {
        loading_hours,
        drive_hours,
        packing_hours: adjusted_packing_hours,
        total_hours: moving_hours + adjusted_packing_hours,
        crew_size,
        hourly_rate,
        base_cost,
        service_charge,
        special_item_fees,
        piano_board_fee,
        heavy_item_fees,
        tv_box_fees,
        shop_equipment_fees,
        oversized_fees,
        stair_fees,
        packing_cost,
        packing_materials,
        toll_estimate,
        coverage_cost: inputs.coverage_cost,
        same_day_fee,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimate::types::{LegMeasure, PackingService, ThirdLocationAction, TravelPlan};
    use rust_decimal_macros::dec;

    fn baseline_inputs() -> MovingJobInputs {
        MovingJobInputs {
            home_type: HomeType::House,
            bedrooms_from: Some(2),
            bedrooms_to: Some(2),
            stairs_from: 0,
            stairs_to: 0,
            stairs_third: 0,
            has_third_location: false,
            third_action: None,
            appliances: vec![],
            third_location_appliances: vec![],
            tv_sizes: vec![],
            tv_boxes: vec![],
            shop_equipment: vec![],
            oversized_furniture: vec![],
            special_items: vec![],
            piano_board: false,
            access_multiplier: 1.0,
            crew_size: 2,
            travel: TravelPlan {
                base_to_pickup: Some(LegMeasure { miles: 30.0, hours: 0.6 }),
                pickup_to_destination: Some(LegMeasure { miles: 40.0, hours: 0.9 }),
                destination_to_third: None,
                final_return_to_base: Some(LegMeasure { miles: 50.0, hours: 1.1 }),
                has_tolls: false,
                used_fallback: false,
            },
            packing_service: PackingService::No,
            needs_packing_materials: false,
            total_rooms: None,
            coverage_cost: Decimal::ZERO,
            is_same_day: false,
        }
    }

    mod loading_hours {
        use super::*;

        #[test]
        fn two_bedroom_house_doubles_for_two_stops() {
            let estimate = moving_estimate(&baseline_inputs());
            // (1.50 + 0.85) * 2
            assert!((estimate.loading_hours - 4.7).abs() < 1e-9);
            assert!((estimate.drive_hours - 1.5).abs() < 1e-9);
        }

        #[test]
        fn bedrooms_take_the_larger_of_both_ends() {
            let mut inputs = baseline_inputs();
            inputs.bedrooms_to = Some(4);
            let estimate = moving_estimate(&inputs);
            // (1.50 + 3 * 0.85) * 2
            assert!((estimate.loading_hours - 8.1).abs() < 1e-9);
        }

        #[test]
        fn stairs_add_time_per_flight() {
            let mut inputs = baseline_inputs();
            inputs.stairs_from = 2;
            inputs.stairs_to = 1;
            let estimate = moving_estimate(&inputs);
            // (2.35 + 3 * 0.275) * 2
            assert!((estimate.loading_hours - 6.35).abs() < 1e-9);
            assert_eq!(estimate.stair_fees, dec!(75));
        }

        #[test]
        fn third_location_scales_harder_and_pickup_adds_time() {
            let mut inputs = baseline_inputs();
            inputs.has_third_location = true;
            inputs.third_action = Some(ThirdLocationAction::PickOnly);
            inputs.travel.destination_to_third = Some(LegMeasure { miles: 12.0, hours: 0.3 });
            let estimate = moving_estimate(&inputs);
            // 2.35 * 2.5 + 0.75
            assert!((estimate.loading_hours - 6.625).abs() < 1e-9);
        }

        #[test]
        fn drop_only_third_location_skips_the_pickup_bonus() {
            let mut inputs = baseline_inputs();
            inputs.has_third_location = true;
            inputs.third_action = Some(ThirdLocationAction::DropOnly);
            let estimate = moving_estimate(&inputs);
            assert!((estimate.loading_hours - 5.875).abs() < 1e-9);
        }

        #[test]
        fn items_add_their_handling_time() {
            let mut inputs = baseline_inputs();
            inputs.appliances = vec!["washer".into(), "dryer".into()];
            inputs.tv_sizes = vec!["tv80plus".into()];
            let estimate = moving_estimate(&inputs);
            // 4.7 + 0.35 + 0.35 + 0.5
            assert!((estimate.loading_hours - 5.9).abs() < 1e-9);
        }

        #[test]
        fn access_multiplier_scales_loading_only() {
            let mut inputs = baseline_inputs();
            inputs.access_multiplier = 1.25;
            let estimate = moving_estimate(&inputs);
            assert!((estimate.loading_hours - 5.875).abs() < 1e-9);
            assert!((estimate.drive_hours - 1.5).abs() < 1e-9);
        }
    }

    mod drive_time {
        use super::*;

        #[test]
        fn short_return_leg_bills_no_deadhead() {
            let estimate = moving_estimate(&baseline_inputs());
            assert!((estimate.drive_hours - 1.5).abs() < 1e-9);
        }

        #[test]
        fn long_return_leg_bills_half_the_drive_home() {
            let mut inputs = baseline_inputs();
            inputs.travel.final_return_to_base = Some(LegMeasure { miles: 90.0, hours: 1.8 });
            let estimate = moving_estimate(&inputs);
            // 1.5 + 90/45/2
            assert!((estimate.drive_hours - 2.5).abs() < 1e-9);
        }

        #[test]
        fn third_location_bills_half_the_final_return_duration() {
            let mut inputs = baseline_inputs();
            inputs.has_third_location = true;
            inputs.travel.destination_to_third = Some(LegMeasure { miles: 12.0, hours: 0.3 });
            inputs.travel.final_return_to_base = Some(LegMeasure { miles: 44.0, hours: 1.0 });
            let estimate = moving_estimate(&inputs);
            // 0.6 + 0.9 + 0.3 + 0.5
            assert!((estimate.drive_hours - 2.3).abs() < 1e-9);
        }
    }

    mod pricing {
        use super::*;

        #[test]
        fn baseline_two_person_cost_follows_the_rate_book() {
            let estimate = moving_estimate(&baseline_inputs());
            // 192.50 + 30 * 0.75
            assert_eq!(estimate.hourly_rate, dec!(215.00));
            // 6.2 billed hours at 215.00
            assert_eq!(estimate.base_cost, dec!(1333.00));
            assert_eq!(estimate.service_charge, dec!(186.62));
            assert_eq!(estimate.total, dec!(1519.62));
        }

        #[test]
        fn larger_crew_cuts_hours_and_raises_the_rate() {
            let two = moving_estimate(&baseline_inputs());

            let mut inputs = baseline_inputs();
            inputs.crew_size = 4;
            let four = moving_estimate(&inputs);

            assert!(four.total_hours < two.total_hours);
            assert!(four.hourly_rate > two.hourly_rate);
            assert_eq!(four.hourly_rate, dec!(325.00));
            // (4.7 + 1.5) * 0.65 = 4.03 billed hours
            assert_eq!(four.base_cost, dec!(1309.75));
        }

        #[test]
        fn special_items_bring_fees_and_the_piano_board() {
            let mut inputs = baseline_inputs();
            inputs.special_items = vec!["piano".into(), "freeWeights".into()];
            inputs.piano_board = true;
            let estimate = moving_estimate(&inputs);
            assert_eq!(estimate.special_item_fees, dec!(300));
            assert_eq!(estimate.piano_board_fee, dec!(75));
        }

        #[test]
        fn heavy_shop_and_oversized_items_stack_fees() {
            let mut inputs = baseline_inputs();
            inputs.shop_equipment = vec!["heavyMachinery".into(), "workbench".into()];
            inputs.oversized_furniture = vec!["heavyFurniture".into()];
            let estimate = moving_estimate(&inputs);
            // heavyMachinery and heavyFurniture cross the weight threshold
            assert_eq!(estimate.heavy_item_fees, dec!(300));
            assert_eq!(estimate.shop_equipment_fees, dec!(250));
            assert_eq!(estimate.oversized_fees, dec!(100));
        }

        #[test]
        fn tv_boxes_bill_by_box_size() {
            let mut inputs = baseline_inputs();
            inputs.tv_boxes = vec!["tvBox55to65".into(), "tvBox80plus".into()];
            let estimate = moving_estimate(&inputs);
            assert_eq!(estimate.tv_box_fees, dec!(130));
        }

        #[test]
        fn third_location_toll_estimate_has_a_floor() {
            let mut inputs = baseline_inputs();
            inputs.has_third_location = true;
            inputs.travel.destination_to_third = Some(LegMeasure { miles: 10.0, hours: 0.25 });
            let estimate = moving_estimate(&inputs);
            assert_eq!(estimate.toll_estimate, dec!(5.00));

            inputs.travel.destination_to_third = Some(LegMeasure { miles: 100.0, hours: 2.0 });
            let estimate = moving_estimate(&inputs);
            assert_eq!(estimate.toll_estimate, dec!(8.00));
        }

        #[test]
        fn packing_service_bills_adjusted_hours_at_the_packing_rate() {
            let mut inputs = baseline_inputs();
            inputs.packing_service = PackingService::Full;
            inputs.crew_size = 3;
            let estimate = moving_estimate(&inputs);
            // 4.7 * 1.75 * 0.825 hours at $135
            assert!((estimate.packing_hours - 6.785625).abs() < 1e-9);
            assert_eq!(estimate.packing_cost, dec!(916.06));
        }

        #[test]
        fn materials_are_quoted_only_when_requested() {
            let mut inputs = baseline_inputs();
            inputs.needs_packing_materials = true;
            inputs.total_rooms = Some(4);
            let estimate = moving_estimate(&inputs);
            let quote = estimate.packing_materials.as_ref().unwrap();
            assert!(quote.total > Decimal::ZERO);
            assert!(estimate.total > moving_estimate(&baseline_inputs()).total);
        }

        #[test]
        fn same_day_surcharge_applies_to_the_whole_subtotal() {
            let mut inputs = baseline_inputs();
            inputs.is_same_day = true;
            let estimate = moving_estimate(&inputs);
            assert_eq!(estimate.same_day_fee, dec!(151.96));
            assert_eq!(estimate.total, dec!(1671.58));
        }

        #[test]
        fn rerunning_the_same_inputs_is_identical() {
            let inputs = baseline_inputs();
            assert_eq!(moving_estimate(&inputs), moving_estimate(&inputs));
        }

        #[test]
        fn coverage_cost_passes_straight_through() {
            let mut inputs = baseline_inputs();
            inputs.coverage_cost = dec!(531.25);
            let estimate = moving_estimate(&inputs);
            assert_eq!(estimate.coverage_cost, dec!(531.25));
            assert_eq!(
                estimate.total,
                moving_estimate(&baseline_inputs()).total + dec!(531.25)
            );
        }
    }
}
