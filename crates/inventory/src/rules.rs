//! Daily quality update rules.
//!
//! Each item is updated in two phases around the `sell_in` decrement:
//!
//! 1. a pre-decrement delta chosen from the category (and, for backstage passes,
//!    the current `sell_in` tier);
//! 2. `sell_in -= 1`;
//! 3. a post-expiry adjustment when the new `sell_in` is negative;
//! 4. a final clamp into [`QualityRange::STANDARD`].
//!
//! Legendary items only get step 2.

use gildedrose_core::QualityRange;

use crate::item::{Category, Item};

/// Advance every item by one day, in place.
///
/// Total over all inputs: never panics, never fails. Order and length of
/// `items` are preserved.
pub fn update_quality(items: &mut [Item]) {
    for item in items.iter_mut() {
        advance_day(item);
    }
}

fn advance_day(item: &mut Item) {
    let category = item.category();

    if category.is_legendary() {
        item.sell_in = item.sell_in.saturating_sub(1);
        return;
    }

    item.quality = item
        .quality
        .saturating_add(delta_before_decrement(category, item.sell_in));

    item.sell_in = item.sell_in.saturating_sub(1);

    if item.sell_in < 0 {
        item.quality = adjust_after_expiry(category, item.quality);
    }

    item.quality = QualityRange::STANDARD.clamp(item.quality);
}

/// Quality delta applied before `sell_in` is decremented.
fn delta_before_decrement(category: Category, sell_in: i32) -> i32 {
    match category {
        Category::Legendary => 0,
        Category::Vintage => 1,
        Category::BackstagePass => match sell_in {
            s if s > 10 => 1,
            s if s > 5 => 2,
            _ => 3,
        },
        Category::Conjured => -2,
        Category::Ordinary => -1,
    }
}

/// Second adjustment once the item is past its sell-by date.
fn adjust_after_expiry(category: Category, quality: i32) -> i32 {
    match category {
        Category::Legendary => quality,
        Category::Vintage => quality.saturating_add(1),
        Category::BackstagePass => 0,
        Category::Conjured => quality.saturating_sub(2),
        Category::Ordinary => quality.saturating_sub(1),
    }
}
