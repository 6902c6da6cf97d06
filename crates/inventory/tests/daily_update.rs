//! Black-box scenarios for the daily update, one shop per test.

use gilded_rose_inventory::{AGED_BRIE, GildedRose, Item, SULFURAS};

const CONCERT: &str = "Backstage passes to a TAFKAL80ETC concert";

fn run_app(items: Vec<Item>, days: usize) -> Vec<Item> {
    gilded_rose_observability::init();

    let mut shop = GildedRose::new(items);
    for _ in 0..days {
        shop.update_quality();
    }
    shop.into_items()
}

fn run_one(name: &str, sell_in: i32, quality: i32, days: usize) -> Item {
    run_app(vec![Item::new(name, sell_in, quality)], days).remove(0)
}

// --- ordinary items ---

#[test]
fn sell_in_decrements_by_one_for_positive_zero_and_negative_values() {
    assert_eq!(run_one("foo", 5, 0, 1).sell_in(), 4);
    assert_eq!(run_one("foo", 0, 0, 1).sell_in(), -1);
    assert_eq!(run_one("foo", -5, 0, 1).sell_in(), -6);
}

#[test]
fn quality_drops_by_one_before_sell_by_date() {
    let item = run_one("foo", 5, 4, 1);
    assert_eq!((item.sell_in(), item.quality()), (4, 3));

    let item = run_one("foo", 5, 4, 2);
    assert_eq!((item.sell_in(), item.quality()), (3, 2));
}

#[test]
fn quality_drops_by_two_once_expired() {
    let item = run_one("foo", 0, 6, 1);
    assert_eq!((item.sell_in(), item.quality()), (-1, 4));
    assert_eq!(run_one("foo", -5, 6, 1).quality(), 4);
}

#[test]
fn quality_never_goes_negative() {
    assert_eq!(run_one("foo", -5, 1, 1).quality(), 0);
    assert_eq!(run_one("foo", -5, 0, 1).quality(), 0);
    assert_eq!(run_one("foo", 50, 4, 5).quality(), 0);
    assert_eq!(run_one("foo", -50, 4, 3).quality(), 0);
    assert_eq!(run_one("foo", -50, 5, 3).quality(), 0);
}

#[test]
fn decay_accelerates_on_the_day_sell_in_passes_zero() {
    assert_eq!(run_one("foo", 1, 5, 2).quality(), 2);

    let item = run_one("foo", -5, 4, 2);
    assert_eq!((item.sell_in(), item.quality()), (-7, 0));
}

#[test]
fn items_in_one_list_are_updated_independently() {
    let items = run_app(vec![Item::new("foo", 5, 10), Item::new("foo2", -5, 10)], 1);
    assert_eq!(items[0].quality(), 9);
    assert_eq!(items[1].quality(), 8);
}

// --- aged brie ---

#[test]
fn aged_brie_improves_with_age() {
    assert_eq!(run_one(AGED_BRIE, 5, 6, 1).quality(), 7);
    assert_eq!(run_one(AGED_BRIE, 0, 6, 1).quality(), 8);
    assert_eq!(run_one(AGED_BRIE, -5, 6, 1).quality(), 8);
}

#[test]
fn aged_brie_is_capped_at_fifty() {
    for sell_in in [5, 0, -5] {
        assert_eq!(run_one(AGED_BRIE, sell_in, 50, 1).quality(), 50);
        assert_eq!(run_one(AGED_BRIE, sell_in, 50, 3).quality(), 50);
    }
    assert_eq!(run_one(AGED_BRIE, -5, 49, 1).quality(), 50);
}

// --- sulfuras ---

#[test]
fn sulfuras_never_changes() {
    for sell_in in [5, 0, -5] {
        let item = run_one(SULFURAS, sell_in, 80, 3);
        assert_eq!((item.sell_in(), item.quality()), (sell_in, 80));
    }
    for days in [5, 3, 99] {
        let item = run_one(SULFURAS, -5, 80, days);
        assert_eq!((item.sell_in(), item.quality()), (-5, 80));
    }
}

// --- backstage passes ---

#[test]
fn backstage_pass_gains_one_when_more_than_ten_days_out() {
    for sell_in in [15, 54, 99] {
        assert_eq!(run_one(CONCERT, sell_in, 15, 1).quality(), 16, "sell_in {sell_in}");
    }
}

#[test]
fn backstage_pass_gains_two_between_ten_and_six_days() {
    for sell_in in 6..=10 {
        assert_eq!(run_one(CONCERT, sell_in, 15, 1).quality(), 17, "sell_in {sell_in}");
    }
}

#[test]
fn backstage_pass_gains_three_at_five_days_or_less() {
    for sell_in in 1..=5 {
        assert_eq!(run_one(CONCERT, sell_in, 15, 1).quality(), 18, "sell_in {sell_in}");
    }
}

#[test]
fn backstage_pass_is_worthless_after_the_concert() {
    let item = run_one(CONCERT, 0, 15, 1);
    assert_eq!((item.sell_in(), item.quality()), (-1, 0));
}

#[test]
fn backstage_pass_crosses_tiers_across_days() {
    let item = run_one(CONCERT, 11, 15, 1);
    assert_eq!((item.sell_in(), item.quality()), (10, 16));

    let item = run_one(CONCERT, 11, 15, 2);
    assert_eq!((item.sell_in(), item.quality()), (9, 18));

    assert_eq!(run_one(CONCERT, 6, 15, 2).quality(), 20);
}

#[test]
fn backstage_pass_is_capped_at_fifty() {
    for sell_in in [15, 10, 5] {
        assert_eq!(run_one(CONCERT, sell_in, 50, 1).quality(), 50);
    }
    for sell_in in [10, 5] {
        assert_eq!(run_one(CONCERT, sell_in, 49, 1).quality(), 50);
    }
}

#[test]
fn any_backstage_pass_follows_the_same_curve() {
    for (sell_in, gain) in [(15, 1), (10, 2), (5, 3)] {
        let item = run_one("Backstage passes to a fashion show", sell_in, 15, 1);
        assert_eq!(item.quality(), 15 + gain);
    }
}

// --- conjured ---

#[test]
fn conjured_items_degrade_twice_as_fast() {
    for name in ["Conjured Potato", "Conjured Ham"] {
        assert_eq!(run_one(name, 5, 15, 1).quality(), 13);
        assert_eq!(run_one(name, 0, 15, 1).quality(), 11);
        assert_eq!(run_one(name, -5, 15, 1).quality(), 11);
    }
}

#[test]
fn conjured_items_never_go_negative() {
    for sell_in in [5, 0, -5] {
        assert_eq!(run_one("Conjured cheese", sell_in, 0, 1).quality(), 0);
        assert_eq!(run_one("Conjured cheese", sell_in, 1, 1).quality(), 0);
    }
}

#[test]
fn conjured_item_loses_six_over_its_last_day_and_the_next() {
    assert_eq!(run_one("Conjured cheese", 1, 15, 2).quality(), 9);
}
