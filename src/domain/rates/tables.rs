//! Business rate book.
//!
//! All dollar rates, percentage charges, and thresholds used by the
//! estimate calculators. Per-item catalogs live in [`super::catalog`] and
//! packing materials in [`super::materials`].

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Hourly-rate structure for full moving service.
#[derive(Debug, Clone)]
pub struct MovingRates {
    /// Base hourly rate for a two-person crew.
    pub base_hourly: Decimal,
    /// Added to the hourly rate per mile from dispatch to the pickup.
    pub per_mile_adjustment: Decimal,
    /// Added to the hourly rate per crew member beyond two.
    pub extra_crew_surcharge: Decimal,
    /// Flat service charge applied to the base moving cost.
    pub service_charge: Decimal,
}

/// Hourly-rate structure for labor-only service.
#[derive(Debug, Clone)]
pub struct LaborRates {
    pub base_hourly: Decimal,
    pub per_mile_adjustment: Decimal,
    pub extra_crew_surcharge: Decimal,
    /// Charged per mile over the full round trip.
    pub travel_per_mile: Decimal,
    pub service_charge: Decimal,
}

/// Pricing structure for single-item delivery.
#[derive(Debug, Clone)]
pub struct SingleItemRates {
    /// Flat charge covering the first hour.
    pub first_hour_base: Decimal,
    /// Charged per mile travelled, pickup plus delivery legs.
    pub per_mile: Decimal,
    /// Flat fee per flight of stairs.
    pub stair_fee: Decimal,
}

impl SingleItemRates {
    /// Hourly rate for minutes beyond the first hour, tiered by crew size.
    ///
    /// Unknown crew sizes fall back to the two-person rate.
    pub fn crew_hourly(&self, crew_size: u32) -> Decimal {
        match crew_size {
            3 => dec!(222),
            4 => dec!(277),
            _ => dec!(167),
        }
    }
}

/// Value-based coverage pricing.
#[derive(Debug, Clone)]
pub struct CoverageRates {
    /// Rate per declared dollar for local trips.
    pub local_rate: Decimal,
    /// Rate per declared dollar beyond the long-distance threshold.
    pub long_distance_rate: Decimal,
    /// One-way trip miles above which the long-distance rate applies.
    pub long_distance_threshold_miles: f64,
    /// Floor applied after all discounts.
    pub minimum_charge: Decimal,
    /// Offered deductible amounts, lowest to highest.
    pub deductible_tiers: [u32; 5],
    /// Multiplier applied once per deductible tier above zero.
    pub tier_discount: Decimal,
    /// Smallest declared value accepted.
    pub minimum_value: Decimal,
    /// Largest declared value accepted before routing to a phone call.
    pub maximum_value: Decimal,
}

impl CoverageRates {
    /// Returns the tier index (0-based) for a deductible amount, if offered.
    pub fn tier_index(&self, deductible: u32) -> Option<usize> {
        self.deductible_tiers.iter().position(|d| *d == deductible)
    }
}

/// Access multipliers applied to loading hours.
///
/// The combined multiplier is deliberately less than the product of the
/// two individual factors.
#[derive(Debug, Clone)]
pub struct AccessFactors {
    pub large_home: f64,
    pub long_walk: f64,
    pub combined: f64,
}

/// The complete rate book consumed by the estimate calculators.
#[derive(Debug, Clone)]
pub struct RateBook {
    pub moving: MovingRates,
    pub labor: LaborRates,
    pub single_item: SingleItemRates,
    pub coverage: CoverageRates,
    pub access: AccessFactors,

    /// Flat fee per flight of stairs on moving and labor jobs.
    pub stair_flight_fee: Decimal,
    /// Flat fee per item at or above the heavy weight threshold.
    pub heavy_item_fee: Decimal,
    /// Pounds at which an item picks up the heavy-item fee.
    pub heavy_weight_threshold: u32,
    /// Flat surcharge fraction for same-day service.
    pub same_day_surcharge: Decimal,
    /// Hourly rate for packing labor.
    pub packing_hourly: Decimal,
    /// Toll estimate per mile on the third-location leg.
    pub toll_per_mile: Decimal,
    /// Smallest toll estimate charged when a third location is in play.
    pub minimum_toll: Decimal,
    /// Fixed rental fee for a piano board.
    pub piano_board_fee: Decimal,
}

impl RateBook {
    /// The published rate sheet.
    pub fn standard() -> Self {
        Self {
            moving: MovingRates {
                base_hourly: dec!(192.50),
                per_mile_adjustment: dec!(0.75),
                extra_crew_surcharge: dec!(55),
                service_charge: dec!(0.14),
            },
            labor: LaborRates {
                base_hourly: dec!(115),
                per_mile_adjustment: dec!(0.50),
                extra_crew_surcharge: dec!(55),
                travel_per_mile: dec!(1.60),
                service_charge: dec!(0.08),
            },
            single_item: SingleItemRates {
                first_hour_base: dec!(249),
                per_mile: dec!(1.50),
                stair_fee: dec!(25),
            },
            coverage: CoverageRates {
                local_rate: dec!(0.025),
                long_distance_rate: dec!(0.04),
                long_distance_threshold_miles: 50.0,
                minimum_charge: dec!(49.99),
                deductible_tiers: [0, 250, 500, 750, 1000],
                tier_discount: dec!(0.85),
                minimum_value: dec!(1000),
                maximum_value: dec!(500000),
            },
            access: AccessFactors {
                large_home: 1.15,
                long_walk: 1.15,
                combined: 1.25,
            },
            stair_flight_fee: dec!(25),
            heavy_item_fee: dec!(150),
            heavy_weight_threshold: 300,
            same_day_surcharge: dec!(0.10),
            packing_hourly: dec!(135),
            toll_per_mile: dec!(0.08),
            minimum_toll: dec!(5),
            piano_board_fee: dec!(75),
        }
    }
}

/// The rate book in effect.
pub static RATES: Lazy<RateBook> = Lazy::new(RateBook::standard);
