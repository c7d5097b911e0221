//! Sample inventory used by the simulator and tests.

use gildedrose_core::DomainResult;
use gildedrose_inventory::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MANA_CAKE, Inventory, Item, SULFURAS,
};

use crate::validation::validate_item;

/// Which item groups to add on top of the regular items.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixtureOptions {
    pub include_vintage: bool,
    pub include_legendary: bool,
    pub include_backstage_passes: bool,
    pub include_conjured: bool,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            include_vintage: true,
            include_legendary: true,
            include_backstage_passes: true,
            include_conjured: true,
        }
    }
}

pub fn regular_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Some Random Garbage Item", 15, 4),
    ]
}

pub fn vintage_items() -> Vec<Item> {
    vec![Item::new(AGED_BRIE, 2, 0)]
}

pub fn legendary_items() -> Vec<Item> {
    vec![Item::new(SULFURAS, 0, 80)]
}

pub fn backstage_pass_items() -> Vec<Item> {
    vec![Item::new(BACKSTAGE_PASSES, 15, 20)]
}

pub fn conjured_items() -> Vec<Item> {
    vec![Item::new(CONJURED_MANA_CAKE, 3, 6)]
}

/// Build the sample inventory: regular items first, then each selected group.
///
/// Every item is validated before it enters the inventory.
pub fn generate_inventory(options: FixtureOptions) -> DomainResult<Inventory> {
    let mut items = regular_items();
    if options.include_vintage {
        items.extend(vintage_items());
    }
    if options.include_legendary {
        items.extend(legendary_items());
    }
    if options.include_backstage_passes {
        items.extend(backstage_pass_items());
    }
    if options.include_conjured {
        items.extend(conjured_items());
    }

    for item in &items {
        validate_item(item)?;
    }

    Ok(Inventory::new(items))
}
