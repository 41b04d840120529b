//! The questions menu: keyed FAQ answers plus the photo-upload detour.

use crate::domain::conversation::options::COMPANY_PHONE;
use crate::domain::conversation::record::Record;
use crate::domain::conversation::stage::Stage;

use super::Step;

const SERVICE_AREAS: &str = "We proudly serve Northeast Ohio including Youngstown, Warren, \
Akron, Canton, and surrounding areas. Give us a call at 330-435-8686 to confirm your \
specific location!";

const WHATS_INCLUDED: &str = "Our Movers + Truck service include professional movers, truck, \
fuel, equipment (dollies, straps, blankets), basic liability coverage, and local moves \
within 30 miles. Additional fees may apply for long distances, stairs, or specialty items.";

const PACKING_INFO: &str = "We offer full packing, partial packing (fragile items only), or \
just packing supplies. Our team uses professional-grade materials and techniques to protect \
your belongings.";

const RESTRICTED_ITEMS: &str = "We cannot move hazardous materials (paint, chemicals, \
propane), perishable food, plants, or items with pest infestations. Firearms and valuable \
documents should be transported personally.";

const WHY_CHOOSE_US: &str = "Worry Free Moving has been serving Northeast Ohio since 1997! \
We're locally owned, fully insured, and treat every move like it's our own. Our team is \
professional, careful, and committed to making your move worry-free! ⭐";

pub(crate) fn questions(_record: &mut Record, token: &str) -> Step {
    if token == "insurance_photos" {
        return Step::to(Stage::InsurancePhotos)
            .say_after(
                "Great idea! Photos help us give you the most accurate estimate. 📸",
                25,
            )
            .say_after("Would you like to add photos of your items or home?", 30);
    }

    let answer = match token {
        "service_areas" => SERVICE_AREAS,
        "whats_included" => WHATS_INCLUDED,
        "packing_info" => PACKING_INFO,
        "restricted_items" => RESTRICTED_ITEMS,
        "why_choose_us" => WHY_CHOOSE_US,
        // Unknown keys still deserve an answer.
        _ => {
            return Step::stay()
                .say_after(
                    format!(
                        "Great question! Give us a call at {COMPANY_PHONE} and we'll be \
                         happy to help!"
                    ),
                    25,
                )
                .say_after(
                    "Anything else you'd like to know, or ready to get an estimate?",
                    30,
                );
        }
    };

    Step::stay().say_after(answer, 25).say_after(
        "Anything else you'd like to know, or ready to get an estimate?",
        30,
    )
}
