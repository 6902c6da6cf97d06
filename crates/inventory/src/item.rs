use serde::{Deserialize, Serialize};

use gilded_rose_core::{DomainError, DomainResult};

use crate::category::ItemCategory;

/// Lowest quality a non-legendary item can have.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality a non-legendary item can have.
pub const MAX_QUALITY: i32 = 50;
/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A stock item.
///
/// The name (and therefore the category) is fixed at construction. `sell_in`
/// and `quality` only change through the daily update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: ItemCategory,
    sell_in: i32,
    quality: i32,
}

/// Wire shape of an item; the category is re-derived from the name.
#[derive(Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(r: ItemRecord) -> Self {
        Item::new(r.name, r.sell_in, r.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

impl Item {
    /// Create an item without checking its values.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::classify(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    /// Create an item, rejecting a blank name or a quality that breaks the
    /// category's invariant.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let item = Self::new(name, sell_in, quality);
        item.check_invariants()?;
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Check the quality invariant for this item's category.
    pub fn check_invariants(&self) -> DomainResult<()> {
        if self.category.is_legendary() {
            if self.quality != LEGENDARY_QUALITY {
                return Err(DomainError::invariant(format!(
                    "legendary item '{}' must have quality {LEGENDARY_QUALITY}, got {}",
                    self.name, self.quality
                )));
            }
        } else if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(DomainError::invariant(format!(
                "quality of '{}' must be within {MIN_QUALITY}..={MAX_QUALITY}, got {}",
                self.name, self.quality
            )));
        }
        Ok(())
    }

    /// Advance this item by one day.
    pub fn age_one_day(&mut self) {
        if self.category.is_legendary() {
            return;
        }

        // Decrement first: thresholds are evaluated against the new value.
        self.sell_in = self.sell_in.saturating_sub(1);

        let delta = self.category.quality_delta(self.sell_in, self.quality);
        self.quality = self
            .quality
            .saturating_add(delta)
            .clamp(MIN_QUALITY, MAX_QUALITY);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
