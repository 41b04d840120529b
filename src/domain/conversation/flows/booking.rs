//! Photo offers, the estimate hand-off, and the booking menu.

use crate::domain::conversation::options::COMPANY_PHONE;
use crate::domain::conversation::record::{Record, ServiceType};
use crate::domain::conversation::stage::Stage;
use crate::domain::estimate::{
    labor_estimate, moving_estimate, single_item_estimate, PricedEstimate,
};

use super::{format_usd, DialogEffect, Step};

fn compute_estimate(record: &Record) -> Option<PricedEstimate> {
    match record.service_type? {
        ServiceType::Moving => Some(PricedEstimate::Moving(moving_estimate(
            &record.moving_inputs(),
        ))),
        ServiceType::Labor => Some(PricedEstimate::Labor(labor_estimate(
            &record.labor_inputs(),
        ))),
        ServiceType::Single => Some(PricedEstimate::SingleItem(single_item_estimate(
            &record.single_item_inputs(),
        ))),
        ServiceType::Questions | ServiceType::InsuranceClaim => None,
    }
}

/// Prices the job, stores the result, and appends the reveal script to
/// `base`. Every path into the booking menu funnels through here.
pub(crate) fn present_quote(record: &mut Record, base: Step) -> Step {
    let Some(estimate) = compute_estimate(record) else {
        return base.say_after("Your estimate is ready! Here are your next steps:", 25);
    };

    let total = format_usd(estimate.total());
    let (calculating, ready) = if matches!(estimate, PricedEstimate::Labor(_)) {
        (
            "🎉 Calculating your personalized labor estimate now...".to_string(),
            format!("🎉 Great news! Your labor estimate is ready for ${total}! Opening details now..."),
        )
    } else {
        (
            "🎉 Calculating your personalized estimate now...".to_string(),
            format!("🎉 Great news! Your estimate is ready for ${total}! Opening details now..."),
        )
    };
    record.estimate = Some(estimate);

    base.say_after(calculating, 50)
        .say_after(ready, 30)
        .effect(DialogEffect::ShowEstimate)
}

pub(crate) fn offer_photos_labor(record: &mut Record, token: &str) -> Step {
    let base = match token {
        "add_photos" => {
            record.has_photos = true;
            record.photo_category = Some("labor_items".to_string());
            Step::to(Stage::ShowBookingOptions)
                .say_after("Great! You can upload photos when we confirm your booking. 📸 ✓", 30)
        }
        "proceed_without_photos" => Step::to(Stage::ShowBookingOptions)
            .say_after("No problem! We'll work with the details you've provided. ✓", 30),
        _ => return Step::stay(),
    };
    present_quote(record, base)
}

pub(crate) fn offer_photos_single(record: &mut Record, token: &str) -> Step {
    let base = match token {
        "add_photos" => {
            record.has_photos = true;
            record.photo_category = Some("single_item".to_string());
            Step::to(Stage::ShowBookingOptions)
                .say_after("Great! You can upload photos when we confirm your booking. 📸 ✓", 30)
        }
        "proceed_without_photos" => Step::to(Stage::ShowBookingOptions)
            .say_after("No problem! We'll work with the details you've provided. ✓", 30),
        _ => return Step::stay(),
    };
    present_quote(record, base)
}

pub(crate) fn show_booking_options(_record: &mut Record, token: &str) -> Step {
    match token {
        "schedule_acuity" => Step::stay()
            .say_after("Perfect! Let me open the scheduler for you... 📅", 30)
            .effect(DialogEffect::OpenScheduler),
        "call" => Step::stay()
            .say_after(
                format!("Great! Give us a call at {COMPANY_PHONE}. We're ready to help! 📞"),
                30,
            )
            .effect(DialogEffect::OpenDialer),
        "email_quote" => Step::stay()
            .say_after("Perfect! I'm sending your estimate now... 📧", 30)
            .effect(DialogEffect::EmailEstimate),
        _ => Step::stay(),
    }
}

/// Rest stage for anything that needs a human on the phone.
pub(crate) fn requires_call(_record: &mut Record, token: &str) -> Step {
    match token {
        "call" => Step::stay()
            .say_after(
                format!("Great! Give us a call at {COMPANY_PHONE}. We're ready to help! 📞"),
                30,
            )
            .effect(DialogEffect::OpenDialer),
        _ => Step::stay(),
    }
}

/// Follow-up once the notification dispatcher reports back.
pub(crate) fn email_outcome(delivered: bool) -> Step {
    if delivered {
        Step::stay()
            .say_after(
                "✅ Success! Your estimate has been sent to your email and our team. \
                 Check your inbox!",
                25,
            )
            .say_after(
                "You should receive two emails: one with your detailed estimate and one \
                 confirmation that we received your request. 📬",
                25,
            )
    } else {
        Step::stay().say_after(
            format!(
                "⚠️ Oops! There was an issue sending the email. Please call us at \
                 {COMPANY_PHONE} or try again."
            ),
            25,
        )
    }
}
