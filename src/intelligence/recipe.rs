// ABOUTME: Recipe synthesizer - turns comma-separated ingredients into a structured recipe
// ABOUTME: Matches tokens against the catalog, classifies the dish, and fills in steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! Recipe Synthesizer
//!
//! Takes free-form ingredient input ("chicken, rice, yogurt"), matches each
//! token against the food catalog, and assembles a recipe: classified dish
//! type, fixed preparation steps for that type, estimated calories, and
//! macro totals. Unknown ingredients still participate with a flat calorie
//! estimate and keyword-based classification, so the synthesizer never
//! fails; empty input yields the hollow default recipe.

use tracing::debug;

use crate::catalog::Catalog;
use crate::constants::energy;
use crate::models::{DishType, FoodCategory, GeneratedRecipe, RecipeIngredient, RecipeMacros};

/// Tokens that read as liquids when the catalog does not know them
const LIQUID_KEYWORDS: &[&str] = &["milk", "yogurt", "water", "juice"];
/// Tokens that read as fruits when the catalog does not know them
const FRUIT_KEYWORDS: &[&str] = &["banana", "apple", "berry", "mango"];
/// Tokens that read as meats when the catalog does not know them
const MEAT_KEYWORDS: &[&str] = &["chicken", "mutton", "beef", "fish"];
/// Tokens that read as vegetables when the catalog does not know them
const VEGETABLE_KEYWORDS: &[&str] = &["lettuce", "spinach", "cucumber", "tomato"];

/// Token fragments that mark a catalog meal as meat-based
const MEAT_NAME_HINTS: &[&str] = &["chicken", "beef", "egg"];
/// Token fragments that force stove cooking regardless of other signals
const GRAIN_HINTS: &[&str] = &["rice", "roti"];

const SMOOTHIE_STEPS: [&str; 4] = [
    "Wash and chop all fruits.",
    "Add fruits and liquids into a blender.",
    "Blend on high until smooth.",
    "Pour into a glass and serve chilled.",
];

const SALAD_STEPS: [&str; 4] = [
    "Wash all vegetables thoroughly.",
    "Chop everything into bite-sized pieces.",
    "Toss in a large bowl with salt, pepper, and lemon juice.",
    "Garnish with nuts or seeds if available.",
];

const COOKED_STEPS: [&str; 5] = [
    "Prepare ingredients: chop vegetables and clean meat.",
    "Heat a small amount of oil in a pan.",
    "Stir fry the main protein until cooked.",
    "Add vegetables/grains and spices. Cook for 5-10 mins.",
    "Serve hot.",
];

const SNACK_STEPS: [&str; 3] = [
    "Prepare the ingredient.",
    "Arrange on a plate.",
    "Enjoy your healthy snack!",
];

/// Ingredient class tallies gathered while scanning tokens
#[derive(Debug, Default)]
struct ClassCounts {
    fruit: u32,
    vegetable: u32,
    meat: u32,
    liquid: u32,
}

/// Synthesize a recipe from comma-separated ingredient input
///
/// Tokens are matched against the catalog in catalog order; recognized
/// items contribute their real macros, unknown ones a flat estimate of
/// [`energy::UNKNOWN_INGREDIENT_KCAL`]. Input order is preserved in the
/// ingredient list.
#[must_use]
pub fn synthesize_recipe(catalog: &Catalog, ingredients_csv: &str) -> GeneratedRecipe {
    let tokens: Vec<String> = ingredients_csv
        .split(',')
        .map(|raw| raw.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let mut calories: u32 = 0;
    let mut protein: f64 = 0.0;
    let mut carbs: f64 = 0.0;
    let mut fats: f64 = 0.0;
    let mut counts = ClassCounts::default();
    let mut ingredients: Vec<RecipeIngredient> = Vec::with_capacity(tokens.len());

    for token in &tokens {
        if let Some(food) = catalog.match_food(token) {
            calories += food.calories;
            protein += food.protein;
            carbs += food.carbs;
            fats += food.fats;
            ingredients.push(RecipeIngredient {
                name: food.name.clone(),
                amount: food.serving.clone(),
            });

            match food.category {
                FoodCategory::Fruit => counts.fruit += 1,
                FoodCategory::Drink => counts.liquid += 1,
                FoodCategory::Meal => {
                    // The token decides, not the catalog name: "biryani"
                    // matches Chicken Biryani without counting as meat
                    if contains_any(token, MEAT_NAME_HINTS) {
                        counts.meat += 1;
                    }
                }
                FoodCategory::Snack => {}
            }
        } else {
            calories += energy::UNKNOWN_INGREDIENT_KCAL;
            ingredients.push(RecipeIngredient {
                name: capitalize(token),
                amount: "1 serving".into(),
            });

            if contains_any(token, LIQUID_KEYWORDS) {
                counts.liquid += 1;
            }
            if contains_any(token, FRUIT_KEYWORDS) {
                counts.fruit += 1;
            }
            if contains_any(token, MEAT_KEYWORDS) {
                counts.meat += 1;
            }
            if contains_any(token, VEGETABLE_KEYWORDS) {
                counts.vegetable += 1;
            }
        }
    }

    let dish_type = classify(&counts, &tokens);
    let main_ingredient = ingredients
        .first()
        .map_or("Ingredient", |i| i.name.as_str());

    let title = match dish_type {
        DishType::Smoothie => format!("Power {main_ingredient} Smoothie"),
        DishType::Salad => format!("Fresh {main_ingredient} Salad"),
        DishType::Cooked => format!("Healthy {main_ingredient} Delight"),
        DishType::Snack => format!("Quick {main_ingredient} Snack"),
    };

    let instructions: Vec<String> = match dish_type {
        DishType::Smoothie => SMOOTHIE_STEPS.iter().map(|s| (*s).to_owned()).collect(),
        DishType::Salad => SALAD_STEPS.iter().map(|s| (*s).to_owned()).collect(),
        DishType::Cooked => COOKED_STEPS.iter().map(|s| (*s).to_owned()).collect(),
        DishType::Snack => SNACK_STEPS.iter().map(|s| (*s).to_owned()).collect(),
    };

    let prep_time = match dish_type {
        DishType::Cooked => "20 min",
        DishType::Smoothie | DishType::Salad | DishType::Snack => "5 min",
    };

    debug!(
        tokens = tokens.len(),
        recognized = ingredients.len(),
        dish = ?dish_type,
        calories,
        "synthesized recipe"
    );

    GeneratedRecipe {
        title,
        dish_type,
        ingredients,
        instructions,
        calories,
        macros: RecipeMacros {
            protein_g: protein.round() as u32,
            carbs_g: carbs.round() as u32,
            fats_g: fats.round() as u32,
        },
        prep_time: prep_time.to_owned(),
    }
}

/// Dish classification over the gathered class tallies
///
/// Priority order matters: a fruit-and-liquid mix is a smoothie even when
/// vegetables are present, and any meat or grain forces stove cooking.
fn classify(counts: &ClassCounts, tokens: &[String]) -> DishType {
    if counts.liquid > 0 && counts.fruit > 0 && counts.meat == 0 {
        return DishType::Smoothie;
    }
    if counts.vegetable > 1 && counts.meat == 0 {
        return DishType::Salad;
    }
    if counts.meat > 0 || tokens.iter().any(|t| contains_any(t, GRAIN_HINTS)) {
        return DishType::Cooked;
    }
    if tokens.len() == 1 {
        return DishType::Snack;
    }
    DishType::Cooked
}

fn contains_any(token: &str, fragments: &[&str]) -> bool {
    fragments.iter().any(|fragment| token.contains(fragment))
}

/// Uppercase the first character, leave the rest untouched
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
