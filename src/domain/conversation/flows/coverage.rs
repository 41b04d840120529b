//! Full Value Protection: the coverage menu, declared value, and
//! deductible pricing.

use rust_decimal::Decimal;

use crate::domain::conversation::options::COMPANY_PHONE;
use crate::domain::conversation::record::{CoveragePlan, Record};
use crate::domain::conversation::stage::Stage;
use crate::domain::estimate::coverage_cost;
use crate::domain::rates::RATES;
use crate::domain::validation::parse_currency_amount;

use super::booking::present_quote;
use super::{format_usd, format_whole_usd, Step};

/// One-way trip miles assumed when no measurement is on file.
const DEFAULT_TRIP_MILES: f64 = 30.0;

const PERSONAL_ITEMS_NOTICE: &str = "⚠️ Important: Personal Items Notice - please transport \
these in your personal vehicle: irreplaceable items and family heirlooms, prescription \
medications, important documents, valuable jewelry, and items of sentimental value.";

const COVERAGE_DISCLAIMER: &str = "🚫 Coverage Disclaimer: Personal belongings, jewelry, and \
prescription medications are NOT covered by Full Value Protection or standard moving \
insurance. Please keep these items with you.";

pub(crate) fn show_fvp_options(record: &mut Record, token: &str) -> Step {
    let Some(plan) = CoveragePlan::parse(token) else {
        return Step::stay();
    };
    record.coverage_plan = Some(plan);

    match plan {
        CoveragePlan::Standard => {
            let base = Step::to(Stage::ShowBookingOptions).say_after(
                "Standard coverage selected - you're covered at $0.60 per pound per \
                 article. ✓",
                30,
            );
            present_quote(record, base)
        }
        CoveragePlan::FullValue => Step::to(Stage::FvpValue)
            .say_after(
                "Excellent choice! Full Value Protection provides comprehensive coverage. 🛡️",
                30,
            )
            .say_after(
                "What's the estimated value of your personal property? (Enter amount in \
                 dollars, e.g., 25000)",
                25,
            ),
        CoveragePlan::Declined => {
            let base = Step::to(Stage::ShowBookingOptions).say_after(
                "No problem! You'll have standard coverage at $0.60 per pound per \
                 article. ✓",
                30,
            );
            present_quote(record, base)
        }
    }
}

pub(crate) fn fvp_value(record: &mut Record, answer: &str) -> Step {
    let declared = parse_currency_amount(answer).unwrap_or(0);
    if Decimal::from(declared) < RATES.coverage.minimum_value {
        return Step::stay().say_after("Please enter a value of at least $1,000.", 30);
    }
    if Decimal::from(declared) > RATES.coverage.maximum_value {
        return Step::stay().say_after(
            format!(
                "For values over $500,000, please call us at {COMPANY_PHONE} for \
                 specialized coverage. 📞"
            ),
            30,
        );
    }
    record.declared_value = Some(declared);

    Step::to(Stage::FvpDeductible)
        .say_after(
            format!("Perfect! Coverage for ${} noted. ✓", format_whole_usd(declared)),
            30,
        )
        .say_after(
            "Choose your deductible level. Higher deductibles reduce the protection cost:",
            25,
        )
}

pub(crate) fn fvp_deductible(record: &mut Record, token: &str) -> Step {
    let Some(deductible) = token.parse::<u32>().ok() else {
        return Step::stay();
    };
    if RATES.coverage.tier_index(deductible).is_none() {
        return Step::stay();
    }
    record.coverage_deductible = Some(deductible);

    let declared = Decimal::from(record.declared_value.unwrap_or(0));
    let trip_miles = record
        .travel
        .as_ref()
        .and_then(|travel| travel.trip_miles())
        .unwrap_or(DEFAULT_TRIP_MILES);
    let cost = coverage_cost(declared, deductible, trip_miles);
    record.coverage_cost = cost;

    let chosen = if deductible == 0 {
        "$0".to_string()
    } else {
        format!("${}", format_whole_usd(i64::from(deductible)))
    };
    let base = Step::to(Stage::ShowBookingOptions).say_after(
        format!(
            "{chosen} deductible selected. Your Full Value Protection cost: ${} ✓",
            format_usd(cost)
        ),
        30,
    );

    present_quote(record, base)
        .say_after(PERSONAL_ITEMS_NOTICE, 25)
        .say_after(COVERAGE_DISCLAIMER, 25)
        .say_after(
            "Your estimate includes Full Value Protection. Here are your next steps:",
            25,
        )
}
