//! Inventory domain module: the daily quality update.
//!
//! This crate contains business rules for shop items, implemented purely as
//! deterministic domain logic (no IO, no logging, no storage). One call to
//! [`update_quality`] is one day passing.

pub mod inventory;
pub mod item;
pub mod rules;

pub use inventory::Inventory;
pub use item::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MANA_CAKE, Category, Item, SULFURAS,
};
pub use rules::update_quality;
