// ABOUTME: Integration tests for the bundled knowledge base catalog
// ABOUTME: Validates food, exercise, dialogue, and motivation data the generators depend on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs
//! Integration tests for the bundled catalog
//!
//! The generators assume the shipped data is complete and well formed:
//! every food carries macros and a serving, the dialogue table keeps its
//! priority order, and the motivation content exists in both languages.
//! These tests pin those assumptions down.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use fitcal_core::catalog::Catalog;
use fitcal_core::models::{Difficulty, FoodCategory, HydrationTier, Language};

// ============================================================================
// FOOD DATABASE
// ============================================================================

#[test]
fn test_every_food_record_is_complete() {
    let catalog = Catalog::bundled();
    assert_eq!(catalog.foods().len(), 22);

    let mut seen_ids = HashSet::new();
    for food in catalog.foods() {
        assert!(!food.id.is_empty(), "food {} has an empty id", food.name);
        assert!(seen_ids.insert(food.id.as_str()), "duplicate food id");
        assert!(!food.name.trim().is_empty());
        assert!(!food.serving.trim().is_empty());
        assert!(food.calories > 0, "{} has zero calories", food.name);
        assert!(food.protein >= 0.0 && food.protein.is_finite());
        assert!(food.carbs >= 0.0 && food.carbs.is_finite());
        assert!(food.fats >= 0.0 && food.fats.is_finite());
    }
}

#[test]
fn test_food_categories_fill_every_meal_slot() {
    let catalog = Catalog::bundled();

    // Slot picking needs meals, snacks, drinks, and fruit all present
    let count = |cat| catalog.search_foods("", Some(cat)).len();
    assert_eq!(count(FoodCategory::Meal), 10);
    assert_eq!(count(FoodCategory::Fruit), 3);
    assert_eq!(count(FoodCategory::Drink), 4);
    assert_eq!(count(FoodCategory::Snack), 5);
}

#[test]
fn test_vegetarian_staples_are_findable_by_token() {
    let catalog = Catalog::bundled();

    // The vegetarian filter leans on these staples being in the database
    for token in ["daal", "roti", "rice", "oats"] {
        let hit = catalog.match_food(token);
        assert!(hit.is_some(), "no catalog food matches '{token}'");
    }
}

#[test]
fn test_food_search_flows() {
    let catalog = Catalog::bundled();

    // Substring search in catalog order, case-insensitive
    let chicken: Vec<&str> = catalog
        .search_foods("CHICKEN", None)
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(chicken, vec!["Chicken Biryani", "Chicken Karahi"]);

    // Empty query with no category returns everything
    assert_eq!(catalog.search_foods("", None).len(), 22);

    // Category filter composes with the query
    let shakes = catalog.search_foods("shake", Some(FoodCategory::Drink));
    assert_eq!(shakes.len(), 2);

    assert!(catalog.search_foods("pizza", None).is_empty());
}

#[test]
fn test_food_by_id_bounds() {
    let catalog = Catalog::bundled();
    assert_eq!(catalog.food_by_id("1").unwrap().name, "Chicken Biryani");
    assert_eq!(catalog.food_by_id("22").unwrap().name, "Zinger Burger");
    assert!(catalog.food_by_id("0").is_none());
    assert!(catalog.food_by_id("23").is_none());
}

// ============================================================================
// DIALOGUE RULE TABLE
// ============================================================================

#[test]
fn test_dialogue_rules_are_well_formed() {
    let catalog = Catalog::bundled();
    assert_eq!(catalog.dialogue_rules().len(), 16);

    for rule in catalog.dialogue_rules() {
        assert!(!rule.keywords.is_empty());
        assert!(!rule.response.en.trim().is_empty());
        assert!(!rule.response.roman_urdu.trim().is_empty());

        // Matching lowercases the query, so keywords must be stored lowercase
        for keyword in &rule.keywords {
            assert_eq!(keyword, &keyword.to_lowercase(), "keyword not lowercase");
        }
    }
}

#[test]
fn test_rule_table_keeps_priority_order() {
    let catalog = Catalog::bundled();
    let rules = catalog.dialogue_rules();

    // Ties go to the earliest rule, so the order is part of the contract
    assert!(rules[0].keywords.iter().any(|k| k == "salam"));
    assert!(rules[5].keywords.iter().any(|k| k == "biryani"));
    assert!(rules[15].keywords.iter().any(|k| k == "neend"));
}

#[test]
fn test_fallbacks_exist_in_both_languages() {
    let catalog = Catalog::bundled();
    let en = catalog.fallback_responses(Language::En);
    let urdu = catalog.fallback_responses(Language::RomanUrdu);

    assert_eq!(en.len(), 4);
    assert_eq!(urdu.len(), 4);
    assert!(en.iter().all(|r| !r.trim().is_empty()));
    assert!(urdu.iter().all(|r| !r.trim().is_empty()));

    // The pools are language-specific, not copies of each other
    assert!(en.iter().all(|r| !urdu.contains(r)));
}

// ============================================================================
// EXERCISE LIBRARY AND WEEKLY SPLIT
// ============================================================================

#[test]
fn test_exercise_library_is_well_formed() {
    let catalog = Catalog::bundled();
    assert_eq!(catalog.exercises().len(), 8);

    let mut ids = HashSet::new();
    for exercise in catalog.exercises() {
        assert!(ids.insert(exercise.id.as_str()), "duplicate exercise id");
        assert!(!exercise.name.trim().is_empty());
        assert!(!exercise.description.trim().is_empty());
        assert!(exercise.calories_burned_per_min > 0.0);
    }

    // Every advertised muscle group has at least one movement
    for group in catalog.muscle_groups() {
        assert!(!catalog.exercises_for_group(group).is_empty());
    }

    // Difficulty tiers span the whole range
    let tiers: HashSet<Difficulty> =
        catalog.exercises().iter().map(|e| e.difficulty).collect();
    assert!(tiers.contains(&Difficulty::Beginner));
    assert!(tiers.contains(&Difficulty::Intermediate));
    assert!(tiers.contains(&Difficulty::Advanced));
}

#[test]
fn test_weekly_split_runs_monday_to_sunday() {
    let catalog = Catalog::bundled();
    let days: Vec<&str> = catalog.weekly_split().iter().map(|d| d.day.as_str()).collect();
    assert_eq!(days, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

    for day in catalog.weekly_split() {
        assert!(!day.focus.trim().is_empty());
        assert!(!day.icon.trim().is_empty());
    }
    assert_eq!(catalog.weekly_split()[6].focus, "Rest");
}

// ============================================================================
// MOTIVATION CONTENT
// ============================================================================

#[test]
fn test_quotes_are_unique_and_nonempty() {
    let catalog = Catalog::bundled();
    assert_eq!(catalog.quotes().len(), 6);

    let unique: HashSet<&String> = catalog.quotes().iter().collect();
    assert_eq!(unique.len(), 6);
    assert!(catalog.quotes().iter().all(|q| !q.trim().is_empty()));
}

#[test]
fn test_hydration_messages_cover_every_tier() {
    let catalog = Catalog::bundled();
    let tiers = [
        HydrationTier::Low,
        HydrationTier::Mid,
        HydrationTier::High,
        HydrationTier::Done,
    ];

    for language in [Language::En, Language::RomanUrdu] {
        let texts: Vec<&str> = tiers
            .iter()
            .map(|&t| catalog.hydration_message(t, language))
            .collect();
        assert!(texts.iter().all(|t| !t.trim().is_empty()));

        // Each tier reads differently, or the progress bar feels stuck
        let unique: HashSet<&&str> = texts.iter().collect();
        assert_eq!(unique.len(), 4);
    }
}

// ============================================================================
// CUSTOM FOOD DATABASES
// ============================================================================

#[test]
fn test_custom_food_database_keeps_bundled_content() {
    let bundled = Catalog::bundled();
    let only_banana: Vec<_> = bundled
        .foods()
        .iter()
        .filter(|f| f.name == "Banana")
        .cloned()
        .collect();

    let catalog = Catalog::with_foods(only_banana);
    assert_eq!(catalog.foods().len(), 1);

    // Rules, exercises, and motivation content ride along unchanged
    assert_eq!(catalog.dialogue_rules().len(), 16);
    assert_eq!(catalog.exercises().len(), 8);
    assert_eq!(catalog.quotes().len(), 6);
}
