use serde::{Deserialize, Serialize};

use gilded_rose_core::ValueObject;

/// Exact name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Exact name of the cheese that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";
/// Any item whose name starts with this is a backstage pass.
pub const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";
/// Any item whose name starts with this is conjured.
pub const CONJURED_PREFIX: &str = "Conjured";

/// Rule category of an item, derived once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Never sold, never degrades. Quality is pinned at 80.
    Legendary,
    /// Gains value as the concert approaches, worthless afterwards.
    BackstagePass,
    /// Degrades twice as fast as an ordinary item.
    Conjured,
    /// Gains value with age.
    AgedBrie,
    Ordinary,
}

impl ValueObject for ItemCategory {}

impl ItemCategory {
    /// Classify an item name.
    ///
    /// Precedence: legendary, backstage pass, conjured, aged brie, ordinary.
    /// Names that match nothing fall through to `Ordinary`.
    pub fn classify(name: &str) -> Self {
        if name == SULFURAS {
            Self::Legendary
        } else if name.starts_with(BACKSTAGE_PASS_PREFIX) {
            Self::BackstagePass
        } else if name.starts_with(CONJURED_PREFIX) {
            Self::Conjured
        } else if name == AGED_BRIE {
            Self::AgedBrie
        } else {
            Self::Ordinary
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Self::Legendary)
    }

    /// Quality change for one day.
    ///
    /// `sell_in` is the value *after* the day's decrement; `quality` is the
    /// value before the change is applied. The result is unclamped.
    pub fn quality_delta(self, sell_in: i32, quality: i32) -> i32 {
        match self {
            Self::Legendary => 0,
            Self::BackstagePass => backstage_pass_delta(sell_in, quality),
            Self::Conjured => 2 * ordinary_delta(sell_in),
            Self::AgedBrie => -ordinary_delta(sell_in),
            Self::Ordinary => ordinary_delta(sell_in),
        }
    }
}

/// Expiry doubles the decay. Conjured and Aged Brie build on this value, so
/// an expired conjured item loses 4 and expired brie gains 2.
fn ordinary_delta(sell_in: i32) -> i32 {
    if sell_in < 0 { -2 } else { -1 }
}

fn backstage_pass_delta(sell_in: i32, quality: i32) -> i32 {
    match sell_in {
        10.. => 1,
        5..=9 => 2,
        0..=4 => 3,
        // Concert is over: drop straight to zero.
        _ => quality.saturating_neg(),
    }
}
