//! Crew size selection and labor hours. Both crew stages share the same
//! floor check; items picked earlier may have raised the minimum.

use crate::domain::conversation::options::COMPANY_PHONE;
use crate::domain::conversation::record::Record;
use crate::domain::conversation::stage::Stage;
use crate::domain::validation::parse_hours;

use super::Step;

/// Validates a crew pick against the accumulated floor. `Err` carries the
/// corrective step to show the customer.
fn select_crew(record: &mut Record, token: &str) -> Result<u32, Step> {
    let Some(crew) = token.parse::<u32>().ok().filter(|n| (2..=4).contains(n)) else {
        return Err(Step::stay());
    };
    let minimum = record.minimum_crew_size();
    if crew < minimum {
        return Err(Step::stay()
            .say_after(
                format!(
                    "❌ Sorry, you need at least {minimum} movers for the items \
                     you've selected."
                ),
                30,
            )
            .say_after(
                format!(
                    "Please select a larger crew size or call us at {COMPANY_PHONE} \
                     to discuss alternatives."
                ),
                25,
            ));
    }
    record.crew_size = Some(crew);
    Ok(crew)
}

pub(crate) fn labor_crew_size(record: &mut Record, token: &str) -> Step {
    match select_crew(record, token) {
        Ok(crew) => Step::to(Stage::Hours)
            .say_after(format!("Perfect! {crew} person crew selected. ✓"), 30)
            .say_after("How many hours do you estimate needing? (2 hour minimum)", 50),
        Err(step) => step,
    }
}

pub(crate) fn moving_crew_size(record: &mut Record, token: &str) -> Step {
    match select_crew(record, token) {
        Ok(crew) => Step::to(Stage::ShowFvpOptions)
            .say_after(format!("Perfect! {crew} person crew selected. ✓"), 30)
            .say_after("Would you like to add Full Value Protection to your move?", 50),
        Err(step) => step,
    }
}

/// Labor hours, from a quick-reply button or typed free text. Fractions
/// are truncated to whole hours before the range check.
pub(crate) fn hours(record: &mut Record, answer: &str) -> Step {
    if answer == "other_hours" {
        return Step::stay().say_after(
            "How many hours do you estimate needing? Please enter a number (2-12):",
            30,
        );
    }
    let Some(parsed) = parse_hours(answer) else {
        return Step::stay().say_after("Please enter a valid number of hours (2-12).", 30);
    };

    let hours = parsed.floor() as u32;
    if hours < 2 {
        return Step::stay().say_after(
            "We have a 2-hour minimum. Please select at least 2 hours.",
            30,
        );
    }
    if hours > 12 {
        return Step::stay().say_after(
            format!("For jobs over 12 hours, please call us at {COMPANY_PHONE} for a custom quote."),
            30,
        );
    }

    record.labor_hours = Some(hours);
    Step::to(Stage::OfferPhotosLabor)
        .say_after(format!("Perfect! {hours} hours noted. ✓"), 30)
        .say_after(
            "Would you like to add photos of the items you need help with? This helps \
             us bring the right equipment!",
            50,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::flows::Advance;

    mod crew_floor {
        use super::*;

        #[test]
        fn labor_crew_advances_to_hours() {
            let mut record = Record::new();

            let step = labor_crew_size(&mut record, "3");

            assert_eq!(step.next(), Advance::To(Stage::Hours));
            assert_eq!(record.crew_size, Some(3));
        }

        #[test]
        fn crew_below_the_floor_is_rejected() {
            let mut record = Record::new();
            record.raise_minimum_crew_size(4);

            let step = labor_crew_size(&mut record, "2");

            assert_eq!(step.next(), Advance::Stay);
            assert!(record.crew_size.is_none());
            assert!(step.replies()[0].content().contains("at least 4 movers"));
        }

        #[test]
        fn moving_crew_heads_to_coverage_options() {
            let mut record = Record::new();

            let step = moving_crew_size(&mut record, "2");

            assert_eq!(step.next(), Advance::To(Stage::ShowFvpOptions));
            assert!(step.replies()[1].content().contains("Full Value Protection"));
        }

        #[test]
        fn unknown_crew_token_is_ignored() {
            let mut record = Record::new();

            let step = moving_crew_size(&mut record, "five");

            assert_eq!(step.next(), Advance::Stay);
            assert!(step.replies().is_empty());
        }
    }

    mod labor_hours {
        use super::*;

        #[test]
        fn whole_hours_in_range_are_noted() {
            let mut record = Record::new();

            let step = hours(&mut record, "6");

            assert_eq!(step.next(), Advance::To(Stage::OfferPhotosLabor));
            assert_eq!(record.labor_hours, Some(6));
        }

        #[test]
        fn other_hours_asks_for_a_typed_number() {
            let mut record = Record::new();

            let step = hours(&mut record, "other_hours");

            assert_eq!(step.next(), Advance::Stay);
            assert!(step.replies()[0].content().contains("enter a number (2-12)"));
        }

        #[test]
        fn below_minimum_explains_the_two_hour_floor() {
            let mut record = Record::new();

            let step = hours(&mut record, "1");

            assert_eq!(step.next(), Advance::Stay);
            assert!(step.replies()[0].content().contains("2-hour minimum"));
            assert!(record.labor_hours.is_none());
        }

        #[test]
        fn above_twelve_points_to_a_custom_quote() {
            let mut record = Record::new();

            let step = hours(&mut record, "14");

            assert_eq!(step.next(), Advance::Stay);
            assert!(step.replies()[0].content().contains("over 12 hours"));
        }

        #[test]
        fn fractions_truncate_like_the_quick_replies() {
            let mut record = Record::new();

            hours(&mut record, "4.75");

            assert_eq!(record.labor_hours, Some(4));
        }

        #[test]
        fn garbage_input_gets_a_gentle_retry() {
            let mut record = Record::new();

            let step = hours(&mut record, "a while");

            assert_eq!(step.next(), Advance::Stay);
            assert!(step.replies()[0].content().contains("valid number of hours"));
        }
    }
}
