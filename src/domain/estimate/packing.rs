//! Packing materials itemization and packing labor hours.

use rust_decimal::Decimal;

use crate::domain::estimate::types::{MaterialLine, MaterialsQuote, PackingService};
use crate::domain::foundation::round_money;
use crate::domain::rates::materials::material;

/// Record details that shape the materials list.
#[derive(Debug, Clone, Default)]
pub struct MaterialsContext<'a> {
    pub bedrooms: u32,
    pub appliances: &'a [String],
    pub oversized_count: usize,
    pub shop_count: usize,
    pub tv_count: usize,
}

fn has_kitchen_appliances(appliances: &[String]) -> bool {
    appliances.iter().any(|token| {
        matches!(
            token.as_str(),
            "refrigerator" | "washer" | "dryer" | "dishwasher" | "stove"
        )
    })
}

fn scaled(rooms: u32, per_room: f64) -> u32 {
    (rooms as f64 * per_room).ceil() as u32
}

/// Builds an itemized materials quote scaled by room count.
///
/// `total_rooms` falls back to bedroom count, then to two rooms, so an
/// early quote is still possible before the room question is answered.
pub fn materials_quote(total_rooms: u32, ctx: &MaterialsContext<'_>) -> MaterialsQuote {
    let rooms = if total_rooms > 0 {
        total_rooms
    } else if ctx.bedrooms > 0 {
        ctx.bedrooms
    } else {
        2
    };

    let mut blankets = 8 + rooms * 4;
    blankets += (ctx.oversized_count as u32) * 2;
    blankets += ctx.shop_count as u32;

    let mut large_bubble = scaled(rooms, 0.40);
    large_bubble += ctx.shop_count as u32;
    large_bubble += (ctx.tv_count as u32) * 2;

    let dishpack = if has_kitchen_appliances(ctx.appliances) {
        scaled(rooms, 0.5).max(2)
    } else {
        0
    };

    let quantities: [(&str, u32); 11] = [
        ("smallBox", 4 + rooms * 5),
        ("mediumBox", 4 + rooms * 4),
        ("largeBox", 2 + rooms * 3),
        ("wardrobeBox", ctx.bedrooms.max(1) * 2),
        ("movingBlanket", blankets),
        ("packingPaper", scaled(rooms, 0.5)),
        ("packingTape", scaled(rooms, 0.40)),
        ("furnitureCover", scaled(rooms, 1.5)),
        ("dishpack", dishpack),
        ("smallBubbleWrap", scaled(rooms, 0.40)),
        ("largeBubbleWrap", large_bubble),
    ];

    let mut lines = Vec::new();
    let mut total = Decimal::ZERO;
    for (token, quantity) in quantities {
        let Some(rate) = material(token) else { continue };
        let line_total = round_money(rate.unit_price * Decimal::from(quantity));
        total += line_total;
        if quantity > 0 {
            lines.push(MaterialLine {
                label: rate.label.to_string(),
                quantity,
                unit_price: rate.unit_price,
                line_total,
            });
        }
    }

    MaterialsQuote {
        lines,
        total: round_money(total),
    }
}

/// Packing labor hours before crew-efficiency adjustment.
///
/// Scales off loading hours, then adds time for rooms beyond the bedroom
/// count since those were not reflected in the loading estimate.
pub fn packing_hours(
    loading_hours: f64,
    service: PackingService,
    total_rooms: Option<u32>,
    bedrooms: u32,
) -> f64 {
    let (scale, per_extra_room) = match service {
        PackingService::Full => (1.75, 0.75),
        PackingService::Partial => (0.75, 0.4),
        PackingService::No => return 0.0,
    };
    let mut hours = loading_hours * scale;
    if let Some(rooms) = total_rooms {
        if rooms > bedrooms {
            hours += f64::from(rooms - bedrooms) * per_extra_room;
        }
    }
    hours
}
