#[macro_use]
extern crate assert_float_eq;

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use menu_maker_rs::error::MenuError;
use menu_maker_rs::menu::MenuBuilder;
use menu_maker_rs::models::{Meal, MealId};

fn test_pool(size: usize) -> Vec<Meal> {
    (0..size as i64)
        .map(|i| {
            Meal::with_ratings(
                format!("Test Meal #{}", i),
                format!("http://somerecipesite.com/{}", i),
                (i % 5) + 1,
                ((2 * i) % 5) + 1,
                ((3 * i) % 5) + 1,
                ((7 * i) % 5) + 1,
                i % 3 == 0,
            )
        })
        .collect()
}

/// Two meals rated 2 and two rated 4 on every dimension.
fn split_pool(leftovers: [bool; 4]) -> Vec<Meal> {
    vec![
        Meal::with_ratings("First", "", 2, 2, 2, 2, leftovers[0]),
        Meal::with_ratings("First", "", 2, 2, 2, 2, leftovers[1]),
        Meal::with_ratings("First", "", 4, 4, 4, 4, leftovers[2]),
        Meal::with_ratings("First", "", 4, 4, 4, 4, leftovers[3]),
    ]
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn assert_distinct(builder: &MenuBuilder<'_, StdRng>) {
    let ids: HashSet<MealId> = builder.slots().iter().map(|s| s.meal).collect();
    assert_eq!(ids.len(), builder.len(), "menu contains a duplicate meal");
}

#[test]
fn test_simple_generation() {
    let pool = test_pool(15);
    let builder = MenuBuilder::with_size(&pool, rng(1), 7).unwrap();
    assert_eq!(builder.len(), 7);
    assert_distinct(&builder);
}

#[test]
fn test_generation_is_distinct_across_seeds() {
    let pool = test_pool(10);
    for seed in 0..50 {
        let builder = MenuBuilder::with_size(&pool, rng(seed), 9).unwrap();
        assert_distinct(&builder);
    }
}

#[test]
fn test_identical_records_are_distinct_entries() {
    let pool = vec![Meal::new("Same"); 3];
    let builder = MenuBuilder::with_size(&pool, rng(2), 3).unwrap();
    assert_eq!(builder.len(), 3);
    assert_distinct(&builder);
}

#[test]
fn test_fails_on_empty_pool() {
    let pool = test_pool(0);
    let mut builder = MenuBuilder::new(&pool, rng(1));
    let err = builder.generate(5).unwrap_err();
    assert!(matches!(err, MenuError::InvalidOperation(_)));
}

#[test]
fn test_fails_on_absent_pool() {
    let result = MenuBuilder::try_new(None, rng(1));
    assert!(matches!(result, Err(MenuError::InvalidArgument(_))));
}

#[test]
fn test_try_new_with_pool() {
    let pool = test_pool(3);
    let builder = MenuBuilder::try_new(Some(pool.as_slice()), rng(1)).unwrap();
    assert_eq!(builder.pool().len(), 3);
    assert!(builder.is_empty());
}

#[test]
fn test_fails_on_larger_than_pool() {
    let pool = test_pool(5);
    let mut builder = MenuBuilder::new(&pool, rng(1));
    let err = builder.generate(7).unwrap_err();
    assert!(matches!(err, MenuError::InvalidOperation(_)));
    assert!(!builder.is_populated());
}

#[test]
fn test_pool_and_menu_same_size() {
    let pool = test_pool(5);
    let mut builder = MenuBuilder::new(&pool, rng(1));
    builder.generate(5).unwrap();
    assert_eq!(builder.len(), 5);
    assert_distinct(&builder);
}

#[test]
fn test_add_fails_when_menu_holds_pool() {
    let pool = test_pool(5);
    let mut builder = MenuBuilder::new(&pool, rng(1));
    builder.generate(5).unwrap();
    let err = builder.add_slot().unwrap_err();
    assert!(matches!(err, MenuError::InvalidOperation(_)));
    assert_eq!(builder.len(), 5);
}

#[test]
fn test_add_slot_appends_unpinned_distinct_meal() {
    let pool = test_pool(6);
    let mut builder = MenuBuilder::with_size(&pool, rng(8), 3).unwrap();
    builder.toggle_pin(0);

    builder.add_slot().unwrap();
    assert_eq!(builder.len(), 4);
    assert!(builder.is_pinned(0));
    assert!(!builder.is_pinned(3));
    assert_distinct(&builder);
}

#[test]
fn test_averages_on_empty_menu() {
    let pool = test_pool(8);
    let builder = MenuBuilder::new(&pool, rng(1));
    assert_eq!(builder.average_cost(), 0.0);
    assert_eq!(builder.average_naughtiness(), 0.0);
    assert_eq!(builder.average_prep_time(), 0.0);
    assert_eq!(builder.average_heaviness(), 0.0);
    assert_eq!(builder.leftovers_count(), 0);
    assert_eq!(builder.len(), 0);
}

#[test]
fn test_averages_on_zero_length_menu() {
    let pool = test_pool(3);
    let builder = MenuBuilder::with_size(&pool, rng(1), 0).unwrap();
    assert!(builder.is_populated());
    assert_eq!(builder.average_cost(), 0.0);
    assert_eq!(builder.leftovers_count(), 0);
}

#[test]
fn test_average_calculations() {
    let pool = split_pool([false; 4]);
    let builder = MenuBuilder::with_size(&pool, rng(3), 4).unwrap();
    assert_float_absolute_eq!(builder.average_cost(), 3.0);
    assert_float_absolute_eq!(builder.average_prep_time(), 3.0);
    assert_float_absolute_eq!(builder.average_naughtiness(), 3.0);
    assert_float_absolute_eq!(builder.average_heaviness(), 3.0);
}

#[test]
fn test_leftovers_count() {
    let pool = split_pool([false, true, true, false]);
    let builder = MenuBuilder::with_size(&pool, rng(3), 4).unwrap();
    assert_eq!(builder.leftovers_count(), 2);
}

#[test]
fn test_stats_idempotent() {
    let pool = test_pool(20);
    let builder = MenuBuilder::with_size(&pool, rng(4), 7).unwrap();
    assert_eq!(builder.stats(), builder.stats());
    assert_eq!(builder.average_cost(), builder.average_cost());
}

#[test]
fn test_pinning() {
    let pool = test_pool(50);
    for seed in 0..20 {
        let mut builder = MenuBuilder::with_size(&pool, rng(seed), 4).unwrap();
        let meal = builder.meal_id(2);
        assert!(builder.toggle_pin(2));
        builder.reshuffle().unwrap();
        assert_eq!(builder.meal_id(2), meal);
        assert_distinct(&builder);
    }
}

#[test]
fn test_reshuffling_changes_unpinned() {
    let pool = test_pool(50);
    let mut builder = MenuBuilder::with_size(&pool, rng(6), 4).unwrap();
    let meal = builder.meal_id(2);
    builder.reshuffle().unwrap();
    assert_ne!(builder.meal_id(2), meal);
    assert_distinct(&builder);
}

#[test]
fn test_reshuffle_when_pool_is_saturated() {
    let pool = test_pool(4);
    let mut builder = MenuBuilder::with_size(&pool, rng(12), 4).unwrap();
    builder.toggle_pin(1);
    let pinned = builder.meal_id(1);

    builder.reshuffle().unwrap();
    assert_eq!(builder.meal_id(1), pinned);
    assert_distinct(&builder);
}

#[test]
fn test_reshuffle_on_empty_is_noop() {
    let pool = test_pool(0);
    let mut builder = MenuBuilder::new(&pool, rng(1));
    builder.reshuffle().unwrap();
    assert!(!builder.is_populated());
}

#[test]
fn test_toggle_pin_out_of_range() {
    let pool = test_pool(5);
    let mut builder = MenuBuilder::new(&pool, rng(1));
    assert!(!builder.toggle_pin(0));

    builder.generate(3).unwrap();
    assert!(!builder.toggle_pin(3));
    assert!(!builder.is_pinned(3));

    assert!(builder.toggle_pin(0));
    assert!(builder.is_pinned(0));
    assert!(!builder.toggle_pin(0));
    assert!(!builder.is_pinned(0));
}

#[test]
fn test_get_out_of_range() {
    let pool = test_pool(5);
    let mut builder = MenuBuilder::new(&pool, rng(1));
    assert!(builder.get(0).is_none());

    builder.generate(2).unwrap();
    assert!(builder.get(1).is_some());
    assert!(builder.get(2).is_none());
}

#[test]
fn test_replace_ignores_pin_and_bad_index() {
    let pool = test_pool(10);
    let mut builder = MenuBuilder::with_size(&pool, rng(9), 3).unwrap();
    builder.toggle_pin(0);

    let outside = (0..10)
        .map(MealId)
        .find(|id| builder.slots().iter().all(|s| s.meal != *id))
        .unwrap();

    builder.replace_at(0, outside);
    assert_eq!(builder.meal_id(0), Some(outside));
    assert!(builder.is_pinned(0));
    assert_eq!(builder.get(0).unwrap().name(), pool[outside.index()].name());

    let before: Vec<MealId> = builder.slots().iter().map(|s| s.meal).collect();
    builder.replace_at(3, MealId(1));
    let after: Vec<MealId> = builder.slots().iter().map(|s| s.meal).collect();
    assert_eq!(before, after);
}

#[test]
fn test_replace_does_not_check_duplicates() {
    let pool = test_pool(10);
    let mut builder = MenuBuilder::with_size(&pool, rng(9), 3).unwrap();
    let first = builder.meal_id(0).unwrap();

    builder.replace_at(1, first);
    assert_eq!(builder.meal_id(1), Some(first));
}

#[test]
fn test_replace_on_empty_is_noop() {
    let pool = test_pool(5);
    let mut builder = MenuBuilder::new(&pool, rng(1));
    builder.replace_at(0, MealId(0));
    assert!(!builder.is_populated());
}
