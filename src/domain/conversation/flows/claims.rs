//! Insurance claim intake: coverage held, damage photos, and the damage
//! description that gets submitted to the claims inbox.

use crate::domain::conversation::options::COMPANY_PHONE;
use crate::domain::conversation::record::{ClaimCoverage, Record};
use crate::domain::conversation::stage::Stage;
use crate::domain::validation::validate_description;

use super::{DialogEffect, Step};

/// Shortest damage description we accept, in characters.
const MIN_DESCRIPTION_LEN: usize = 20;

pub(crate) fn claims_start(record: &mut Record, token: &str) -> Step {
    let Some(coverage) = ClaimCoverage::parse(token) else {
        return Step::stay();
    };
    record.claim_coverage = Some(coverage);

    let acknowledgement = match coverage {
        ClaimCoverage::StandardCoverage => {
            "Got it - standard coverage ($0.60/lb per article). ✓"
        }
        ClaimCoverage::FvpCoverage => "Got it - Full Value Protection. ✓",
    };
    Step::to(Stage::InsurancePhotos)
        .say_after(acknowledgement, 30)
        .say_after("Photos of the damage really speed up claim processing. 📸", 25)
        .say_after("Would you like to add photos of the damaged items?", 30)
}

/// Shared photo-offer stage. Claims continue to the damage description;
/// the questions-menu detour returns to its menu.
pub(crate) fn insurance_photos(record: &mut Record, token: &str) -> Step {
    let filing_claim = record.claim_coverage.is_some();
    let step = match token {
        "add_photos" => {
            record.has_photos = true;
            record.photo_category = Some(if filing_claim {
                "claim_damage".to_string()
            } else {
                "estimate".to_string()
            });
            let acknowledgement = if filing_claim {
                "Perfect! Our claims team will review your photos. 📸 ✓"
            } else {
                "Great! You can upload photos when we confirm your booking. 📸 ✓"
            };
            Step::to(photo_return_stage(filing_claim)).say_after(acknowledgement, 30)
        }
        "proceed_without_photos" => Step::to(photo_return_stage(filing_claim))
            .say_after("No problem! We'll work with the details you've provided. ✓", 30),
        _ => return Step::stay(),
    };

    if filing_claim {
        step.say_after(
            "Now, please describe the damage in detail - what happened, and to which items?",
            50,
        )
    } else {
        step.say_after(
            "Anything else you'd like to know, or ready to get an estimate?",
            50,
        )
    }
}

fn photo_return_stage(filing_claim: bool) -> Stage {
    if filing_claim {
        Stage::DamageDescription
    } else {
        Stage::Questions
    }
}

pub(crate) fn damage_description(record: &mut Record, answer: &str) -> Step {
    let Ok(description) = validate_description("damage_description", answer, MIN_DESCRIPTION_LEN)
    else {
        return Step::stay().say_after(
            "Could you add a bit more detail? A couple of sentences about what was \
             damaged and how helps our team process the claim quickly.",
            30,
        );
    };
    record.damage_description = Some(description);

    Step::to(Stage::RequiresCall)
        .say_after("Thank you. I'm submitting your claim to our team now... 📋", 30)
        .effect(DialogEffect::SubmitClaim)
}

/// Follow-up once the claim submission settles.
pub(crate) fn claim_outcome(delivered: bool) -> Step {
    if delivered {
        Step::stay()
            .say_after(
                "✅ Your claim has been submitted! Our claims team will contact you \
                 within 1-2 business days.",
                25,
            )
            .say_after(
                format!(
                    "If you have any questions in the meantime, call us at {COMPANY_PHONE}. 📞"
                ),
                25,
            )
    } else {
        Step::stay().say_after(
            format!(
                "⚠️ There was an issue submitting your claim. Please call us at \
                 {COMPANY_PHONE} so we can take the details over the phone."
            ),
            25,
        )
    }
}
