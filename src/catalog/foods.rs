// ABOUTME: Bundled food database with per-serving macros for Pakistani staples
// ABOUTME: Seeds the catalog used by meal planning, recipes, and food search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

use crate::models::{FoodCategory, FoodItem};

fn item(
    id: &str,
    name: &str,
    calories: u32,
    protein: f64,
    carbs: f64,
    fats: f64,
    serving: &str,
    category: FoodCategory,
) -> FoodItem {
    FoodItem {
        id: id.into(),
        name: name.into(),
        calories,
        protein,
        carbs,
        fats,
        serving: serving.into(),
        category,
    }
}

/// The bundled food database
///
/// Calorie and macro figures are per listed serving.
pub(super) fn bundled_foods() -> Vec<FoodItem> {
    use FoodCategory::{Drink, Fruit, Meal, Snack};

    vec![
        item("1", "Chicken Biryani", 290, 18.0, 35.0, 10.0, "1 Plate (200g)", Meal),
        item("2", "Roti (Whole Wheat)", 120, 4.0, 24.0, 1.0, "1 Medium", Meal),
        item("3", "Daal Mash", 180, 10.0, 28.0, 4.0, "1 Bowl", Meal),
        item("4", "Boiled Rice", 130, 3.0, 28.0, 0.3, "1 Bowl", Meal),
        item("5", "Chicken Karahi", 350, 25.0, 8.0, 22.0, "1 Serving", Meal),
        item("6", "Banana", 105, 1.3, 27.0, 0.3, "1 Medium", Fruit),
        item("7", "Apple", 95, 0.5, 25.0, 0.3, "1 Medium", Fruit),
        item("8", "Dates (Khajoor)", 23, 0.2, 6.0, 0.0, "1 Piece", Fruit),
        item("9", "Almonds (Badam)", 7, 0.3, 0.3, 0.6, "1 Piece", Snack),
        item("10", "Milk (Full Cream)", 150, 8.0, 12.0, 8.0, "1 Glass (250ml)", Drink),
        item("11", "Mango Shake", 280, 6.0, 45.0, 8.0, "1 Glass", Drink),
        item("12", "Protein Shake", 120, 24.0, 3.0, 1.0, "1 Scoop", Drink),
        item("13", "Oats", 150, 5.0, 27.0, 3.0, "1 Bowl (cooked)", Meal),
        item("14", "Yogurt (Dahi)", 60, 4.0, 5.0, 3.0, "1/2 Cup", Snack),
        item("15", "Peanuts", 160, 7.0, 5.0, 14.0, "1 Handful (28g)", Snack),
        item("16", "Naan", 260, 9.0, 45.0, 5.0, "1 Piece", Meal),
        item("17", "Samosa", 260, 4.0, 24.0, 17.0, "1 Piece (Large)", Snack),
        item("18", "Paratha", 300, 6.0, 35.0, 15.0, "1 Medium", Meal),
        item("19", "Chai (Milk Tea)", 120, 4.0, 10.0, 6.0, "1 Cup", Drink),
        item("20", "Chapli Kabab", 280, 20.0, 5.0, 20.0, "1 Piece", Meal),
        item("21", "French Fries", 312, 3.0, 41.0, 15.0, "1 Medium Pack", Snack),
        item("22", "Zinger Burger", 550, 25.0, 50.0, 28.0, "1 Burger", Meal),
    ]
}
