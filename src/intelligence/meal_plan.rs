// ABOUTME: Daily meal plan generator - preference filter, shuffle, slot picks, calorie biasing
// ABOUTME: Produces a breakfast/lunch/dinner/snack day from the food catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! Meal Plan Generator
//!
//! Builds one day of meals from the catalog:
//!
//! 1. Filter the catalog by dietary preference.
//! 2. Shuffle the survivors and fill the four slots, each slot taking the
//!    first not-yet-chosen item matching its category rule.
//! 3. When a calorie target is given, repeat the draw a fixed number of
//!    times and keep the day whose total lands closest to the target.
//!
//! Fewer than four matching foods is a hard error: a day needs four
//! distinct picks.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::constants::energy;
use crate::errors::{AppError, AppResult};
use crate::models::{DietPreference, FoodCategory, FoodItem, MealPlan};

/// Number of candidate days drawn when biasing toward a calorie target
const CANDIDATE_DRAWS: usize = 8;

/// Name fragments that mark a meal as a vegetarian staple
const VEG_STAPLE_HINTS: &[&str] = &["daal", "roti", "rice", "oats"];

/// Generate one day of meals from the catalog
///
/// `calorie_target` above zero turns on best-of-N selection toward that
/// total; zero or below keeps the single unbiased draw. Randomness comes
/// entirely from `rng`, so a seeded generator reproduces the same plan.
///
/// # Errors
///
/// Returns [`crate::errors::ErrorCode::CatalogUnderflow`] when fewer than
/// four catalog foods match the preference.
pub fn generate_meal_plan<R: Rng + ?Sized>(
    catalog: &Catalog,
    preference: DietPreference,
    calorie_target: i32,
    rng: &mut R,
) -> AppResult<MealPlan> {
    let pool: Vec<&FoodItem> = catalog
        .foods()
        .iter()
        .filter(|f| matches_preference(f, preference))
        .collect();

    if pool.len() < 4 {
        return Err(AppError::catalog_underflow(format!(
            "only {} foods match the {} preference, need at least 4",
            pool.len(),
            preference.as_str()
        )));
    }

    let mut best = draw_day(&pool, rng);

    if calorie_target > 0 {
        let mut best_gap = gap_to_target(&best, calorie_target);
        for _ in 1..CANDIDATE_DRAWS {
            let candidate = draw_day(&pool, rng);
            let gap = gap_to_target(&candidate, calorie_target);
            // Strict comparison keeps the earliest of tied candidates
            if gap < best_gap {
                best_gap = gap;
                best = candidate;
            }
        }
        debug!(
            target = calorie_target,
            total = best.total_calories,
            gap = best_gap,
            "selected calorie-biased meal plan"
        );
    } else {
        debug!(total = best.total_calories, "generated meal plan");
    }

    Ok(best)
}

/// Whether a catalog food survives the given preference filter
fn matches_preference(food: &FoodItem, preference: DietPreference) -> bool {
    match preference {
        DietPreference::Anything | DietPreference::NonVegetarian => true,
        DietPreference::Vegetarian => is_vegetarian(food),
        DietPreference::HighProtein => food.protein > energy::HIGH_PROTEIN_THRESHOLD_G,
    }
}

/// Vegetarian means a non-meal category or a named vegetarian staple
fn is_vegetarian(food: &FoodItem) -> bool {
    match food.category {
        FoodCategory::Fruit | FoodCategory::Drink | FoodCategory::Snack => true,
        FoodCategory::Meal => {
            let name = food.name.to_lowercase();
            VEG_STAPLE_HINTS.iter().any(|hint| name.contains(hint))
        }
    }
}

/// Absolute distance of a plan total from the calorie target
fn gap_to_target(plan: &MealPlan, target: i32) -> i64 {
    (i64::from(plan.total_calories) - i64::from(target)).abs()
}

/// Draw one day: shuffle the pool and fill the four slots in order
fn draw_day<R: Rng + ?Sized>(pool: &[&FoodItem], rng: &mut R) -> MealPlan {
    let mut shuffled: Vec<&FoodItem> = pool.to_vec();
    shuffled.shuffle(rng);

    let mut taken: Vec<usize> = Vec::with_capacity(4);

    let breakfast = pick_slot(&shuffled, &taken, |f| {
        matches!(f.category, FoodCategory::Meal | FoodCategory::Fruit)
    });
    taken.push(breakfast);

    let lunch = pick_slot(&shuffled, &taken, |f| f.category == FoodCategory::Meal);
    taken.push(lunch);

    let dinner = pick_slot(&shuffled, &taken, |f| f.category == FoodCategory::Meal);
    taken.push(dinner);

    let snack = pick_slot(&shuffled, &taken, |f| {
        matches!(f.category, FoodCategory::Snack | FoodCategory::Drink)
    });
    taken.push(snack);

    let breakfast = shuffled[breakfast].clone();
    let lunch = shuffled[lunch].clone();
    let dinner = shuffled[dinner].clone();
    let snack = shuffled[snack].clone();

    let total_calories = breakfast.calories + lunch.calories + dinner.calories + snack.calories;

    MealPlan {
        breakfast,
        lunch,
        dinner,
        snack,
        total_calories,
    }
}

/// First free item matching the slot rule, or the first free item at all
///
/// The fallback keeps a draw total even when the shuffled pool has no
/// category match left for a slot; the caller guarantees the pool holds
/// more items than slots, so a free item always exists.
fn pick_slot<F>(pool: &[&FoodItem], taken: &[usize], wanted: F) -> usize
where
    F: Fn(&FoodItem) -> bool,
{
    pool.iter()
        .enumerate()
        .find(|(i, f)| !taken.contains(i) && wanted(f))
        .map_or_else(|| first_free(pool, taken), |(i, _)| i)
}

fn first_free(pool: &[&FoodItem], taken: &[usize]) -> usize {
    (0..pool.len()).find(|i| !taken.contains(i)).unwrap_or(0)
}
