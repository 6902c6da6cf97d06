//! The daily update pass.

use crate::item::Item;

/// Advance every item in `items` by one day, in place.
///
/// Each call is one simulated day; calling it twice ages the stock twice.
pub fn update_quality(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "running daily quality update");

    for item in items.iter_mut() {
        let (sell_in, quality) = (item.sell_in(), item.quality());
        item.age_one_day();
        tracing::trace!(
            name = item.name(),
            category = ?item.category(),
            sell_in_before = sell_in,
            sell_in = item.sell_in(),
            quality_before = quality,
            quality = item.quality(),
            "item aged"
        );
    }
}

/// The shop and the stock it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Close the shop for the day: every item ages once.
    pub fn update_quality(&mut self) {
        update_quality(&mut self.items);
    }
}
