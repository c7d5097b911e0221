//! Constructor-time checks for items entering the shop.

use gildedrose_core::{DomainError, DomainResult, LEGENDARY_QUALITY, QualityRange};
use gildedrose_inventory::Item;

/// Reject items that could never have been produced by a valid update history.
pub fn validate_item(item: &Item) -> DomainResult<()> {
    if item.name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }

    if item.category().is_legendary() {
        if item.quality != LEGENDARY_QUALITY {
            return Err(DomainError::invariant(format!(
                "legendary item `{}` must have quality {LEGENDARY_QUALITY}, got {}",
                item.name, item.quality
            )));
        }
        return Ok(());
    }

    let range = QualityRange::STANDARD;
    if !range.contains(item.quality) {
        return Err(DomainError::validation(format!(
            "quality of `{}` must be within [{}, {}], got {}",
            item.name, range.min, range.max, item.quality
        )));
    }

    Ok(())
}
