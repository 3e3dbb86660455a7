// ABOUTME: Energy metric formulas - BMR, TDEE, calorie targets, and macro splits
// ABOUTME: Pure deterministic functions over validated profile measurements
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitCal Labs

//! Energy Metrics Module
//!
//! Implements the calculation chain behind every profile:
//! BMR -> TDEE -> goal-adjusted calorie target -> macro split.
//!
//! All functions here are pure and total over their numeric domains;
//! input validation happens once in [`crate::profile`] before these run.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle` et al. (2010) - Exercise Physiology (activity factors)

use crate::constants::energy;
use crate::models::{ActivityLevel, Gender, Goal, MacroSplit};

/// Weight coefficient of the Mifflin-St Jeor equation
const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Height coefficient of the Mifflin-St Jeor equation
const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Age coefficient of the Mifflin-St Jeor equation
const MSJ_AGE_COEF: f64 = 5.0;
/// Additive constant for men
const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Additive constant for women
const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
/// - Men: +5
/// - Women: -161
///
/// The result is returned unrounded; callers that display it round at the edge.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let weight_component = MSJ_WEIGHT_COEF * weight_kg;
    let height_component = MSJ_HEIGHT_COEF * height_cm;
    let age_component = MSJ_AGE_COEF * f64::from(age_years);

    let gender_constant = match gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female => MSJ_FEMALE_CONSTANT,
    };

    weight_component + height_component - age_component + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = round(BMR x activity factor)
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2 (little/no exercise)
/// - Light: 1.375 (1-3 days/week)
/// - Moderate: 1.55 (3-5 days/week)
/// - Active: 1.725 (6-7 days/week)
/// - Very active: 1.9 (hard training and a physical job)
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> i32 {
    (bmr * activity_level.multiplier()).round() as i32
}

/// Goal-adjusted daily calorie target
///
/// Applies a fixed 500 kcal deficit for weight loss or a 500 kcal surplus
/// for weight gain. The result is intentionally not clamped: an extreme
/// profile can produce a target below zero, and the caller decides how to
/// present that.
#[must_use]
pub fn calculate_target_calories(tdee: i32, goal: Goal) -> i32 {
    tdee + goal.calorie_offset()
}

/// Split a daily calorie target into macro gram targets
///
/// Uses a fixed 30/40/30 protein/carb/fat calorie split at 4/4/9 kcal per
/// gram. Each macro is rounded independently, so summing the gram targets
/// back to calories can differ from the input by a few kcal.
#[must_use]
pub fn calculate_macro_split(calories: i32) -> MacroSplit {
    let calories = f64::from(calories);

    MacroSplit {
        protein_g: (calories * energy::PROTEIN_SHARE / energy::KCAL_PER_G_PROTEIN).round() as i32,
        carbs_g: (calories * energy::CARBS_SHARE / energy::KCAL_PER_G_CARBS).round() as i32,
        fats_g: (calories * energy::FAT_SHARE / energy::KCAL_PER_G_FAT).round() as i32,
    }
}
