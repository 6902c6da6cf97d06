//! Inventory domain module.
//!
//! Daily quality/sell-in rules for the shop's stock, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod shop;

pub use category::{AGED_BRIE, BACKSTAGE_PASS_PREFIX, CONJURED_PREFIX, ItemCategory, SULFURAS};
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use shop::{GildedRose, update_quality};
