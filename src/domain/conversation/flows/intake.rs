//! Opening stages: greeting, contact capture, service choice, move date,
//! and the pest disclaimer gate.

use chrono::NaiveDate;

use crate::domain::conversation::options::COMPANY_PHONE;
use crate::domain::conversation::record::{Record, ServiceType};
use crate::domain::conversation::stage::Stage;
use crate::domain::validation::{
    parse_full_name, parse_move_date, validate_email, validate_phone,
};

use super::{DialogEffect, Step};

/// Legal text shown before any move that could touch an infested home.
const PEST_DISCLAIMER_NOTICE: &str = "Customer acknowledges that Worry Free Moving LLC is not \
responsible for the completion of any services if any pest infestations (including but not \
limited to bed bugs, roaches, mice, or other insects/rodents) are discovered during or after \
the moving process. Customer represents that they have disclosed any known pest issues and \
agrees to hold Worry Free Moving harmless from any pest-related claims or damages. Customer \
is responsible for proper pest treatment before and after the move.";

/// The scripted opener for a brand new conversation.
pub(crate) fn greeting() -> Step {
    Step::to(Stage::GetNameInitial)
        .say_after("Hi! I'm Sarah, your Worry Free Moving assistant! 🚚", 300)
        .say_after(
            "I can help you get an instant estimate and schedule your move today! \
             Before we start, what's your full name? 😊",
            800,
        )
}

pub(crate) fn full_name(record: &mut Record, answer: &str) -> Step {
    match parse_full_name(answer) {
        Ok(name) => {
            let first = name.first.clone();
            record.first_name = Some(name.first);
            record.last_name = Some(name.last);
            Step::to(Stage::GetEmail)
                .say_after(format!("Wonderful to meet you, {first}! 😊"), 30)
                .say_after(
                    "Let me get your contact info so we can send you the estimate. \
                     What's your email address?",
                    50,
                )
        }
        Err(_) => Step::stay().say_after(
            "Just need your full name to get started - first and last name, please! 📝",
            30,
        ),
    }
}

pub(crate) fn email(record: &mut Record, answer: &str) -> Step {
    match validate_email(answer) {
        Ok(address) => {
            record.email = Some(address);
            Step::to(Stage::GetPhone)
                .say_after("Perfect! ✓", 30)
                .say_after("And what's the best phone number to reach you?", 50)
        }
        Err(_) => Step::stay().say_after("Please enter a valid email address.", 30),
    }
}

pub(crate) fn phone(record: &mut Record, answer: &str) -> Step {
    match validate_phone(answer) {
        Ok(number) => {
            record.phone = Some(number);
            Step::to(Stage::ServiceSelection)
                .say_after("Perfect! ✓", 30)
                .say_after(
                    "So, what brings you here today? What kind of service can I help you with?",
                    50,
                )
        }
        Err(_) => Step::stay().say_after("Please enter a valid phone number.", 30),
    }
}

pub(crate) fn service_selection(record: &mut Record, token: &str) -> Step {
    let Some(service) = ServiceType::parse(token) else {
        return Step::stay();
    };
    record.service_type = Some(service);

    let date_question = "When are you thinking? What date works best for your service? 📅";
    match service {
        ServiceType::Moving => Step::to(Stage::MovingDate)
            .say_after(
                "Excellent choice! Let's get you a full moving service estimate right away.",
                30,
            )
            .say_after(date_question, 50),
        ServiceType::Labor => Step::to(Stage::MovingDate)
            .say_after(
                "Excellent choice! Let's get you a labor crew estimate right away.",
                30,
            )
            .say_after(date_question, 50),
        ServiceType::Single => Step::to(Stage::ItemType)
            .say_after(
                "Excellent choice! Let's get you a single item move estimate right away.",
                30,
            )
            .say_after("What category best describes your item?", 50),
        ServiceType::Questions => {
            Step::to(Stage::Questions).say_after("I'm all ears! What would you like to know? 💬", 30)
        }
        ServiceType::InsuranceClaim => Step::to(Stage::InsuranceClaimsStart)
            .say_after(
                "I'm really sorry to hear about the damage. Don't worry though - I'll walk \
                 you through the claim process and make it as painless as possible.",
                30,
            )
            .say_after(
                "First, what type of coverage did you have for your move?",
                50,
            ),
    }
}

/// Captures the service date. `today` anchors past-date and short-notice
/// checks so tests can pin the calendar.
pub(crate) fn moving_date(record: &mut Record, answer: &str, today: NaiveDate) -> Step {
    let assessment = match parse_move_date(answer, today) {
        Ok(assessment) => assessment,
        Err(_) => {
            return Step::stay().say_after(
                "Hmm, I couldn't read that date. Try a format like 12/15/2025. 📅",
                30,
            );
        }
    };

    record.service_date = Some(assessment.date);
    record.is_same_day = assessment.is_same_day;
    record.is_short_notice = assessment.is_short_notice;

    let spoken = assessment.date.format("%A, %B %-d, %Y");
    let mut step = if matches!(record.service_type, Some(ServiceType::Single)) {
        Step::to(Stage::LocationFrom)
    } else {
        Step::to(Stage::PestDisclaimer)
    };
    step = step.say_after(
        format!("Got it! I've noted {spoken} for your service. ✓"),
        30,
    );
    if assessment.is_short_notice {
        let days = (assessment.date - today).num_days();
        step = step.say_after(
            format!(
                "⚡ Wow, that's coming up quick - only {days} days away! We're getting \
                 pretty booked. 💡 Pro tip: Call us right after your estimate to lock in \
                 your spot!"
            ),
            25,
        );
    }

    if matches!(record.service_type, Some(ServiceType::Single)) {
        step.say_after(
            "Alright, where are we picking up this item from? \
             💡 Just start typing and I'll suggest addresses!",
            25,
        )
    } else {
        step.say_after(
            "Quick pause - I need to show you something important before we continue:",
            25,
        )
        .say_after(PEST_DISCLAIMER_NOTICE, 50)
    }
}

pub(crate) fn pest_disclaimer(record: &mut Record, token: &str) -> Step {
    match token {
        "continue_after_disclaimer" => {
            record.pest_disclaimer_agreed = true;
            Step::to(Stage::LocationFrom)
                .say_after(
                    "Now I'll need your complete starting address to calculate the estimate.",
                    30,
                )
                .say_after("💡 Tip: Start typing and I'll suggest addresses!", 50)
        }
        "exit_pest_issues" => Step::to(Stage::RequiresCall).say_after(
            format!(
                "I understand. Please contact us at {COMPANY_PHONE} once any pest issues \
                 have been addressed. We'll be happy to help with your move then!"
            ),
            30,
        ),
        "call" => Step::stay()
            .say_after(
                format!("Great! Give us a call at {COMPANY_PHONE}. We're ready to help! 📞"),
                30,
            )
            .effect(DialogEffect::OpenDialer),
        _ => Step::stay(),
    }
}
