// ABOUTME: Profile builder - validates raw onboarding input and derives energy metrics
// ABOUTME: Normalizes imperial units to metric before running the metric chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! # Profile Builder
//!
//! Onboarding hands the engine raw form strings. This module validates
//! them once, converts imperial units to the metric values everything else
//! works in, and derives the full energy metric chain. After
//! [`build_profile`] succeeds, the rest of the engine can trust the
//! numbers without re-checking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::units;
use crate::errors::{AppError, AppResult};
use crate::intelligence::metrics;
use crate::models::{ActivityLevel, DietPreference, Gender, Goal, UserProfile};

/// Unit the height field was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters
    Cm,
    /// Feet (decimal, e.g. 5.8)
    Ft,
}

/// Unit the weight field was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    Kg,
    /// Pounds
    Lbs,
}

/// Raw onboarding form input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Display name, defaults to "User" when absent
    pub name: Option<String>,
    /// Biological sex
    pub gender: Gender,
    /// Age field as typed
    pub age: String,
    /// Height field as typed
    pub height: String,
    /// Weight field as typed
    pub weight: String,
    /// Unit of the height field
    pub height_unit: HeightUnit,
    /// Unit of the weight field
    pub weight_unit: WeightUnit,
    /// Weekly activity level
    pub activity_level: ActivityLevel,
    /// Body-weight goal
    pub goal: Goal,
    /// Dietary preference for meal planning
    pub diet_preference: Option<DietPreference>,
}

/// Validate raw input, normalize units, and derive energy metrics
///
/// Height entered in feet is converted to whole centimeters; weight in
/// pounds to exact kilograms. BMR is stored unrounded while TDEE and the
/// calorie target are whole numbers.
///
/// # Errors
///
/// Returns an invalid-input error naming the offending field when age is
/// not a whole number of at least one year, or height or weight is not a
/// positive number.
pub fn build_profile(input: &ProfileInput) -> AppResult<UserProfile> {
    let age = parse_age(&input.age)?;
    let raw_height = parse_positive_number(&input.height, "height")?;
    let raw_weight = parse_positive_number(&input.weight, "weight")?;

    let height_cm = match input.height_unit {
        HeightUnit::Cm => raw_height,
        HeightUnit::Ft => units::feet_to_cm(raw_height),
    };
    let weight_kg = match input.weight_unit {
        WeightUnit::Kg => raw_weight,
        WeightUnit::Lbs => units::lbs_to_kg(raw_weight),
    };

    let bmr = metrics::calculate_bmr(input.gender, weight_kg, height_cm, age);
    let tdee = metrics::calculate_tdee(bmr, input.activity_level);
    let target_calories = metrics::calculate_target_calories(tdee, input.goal);

    debug!(bmr, tdee, target_calories, "derived profile metrics");

    Ok(UserProfile {
        name: input
            .name
            .clone()
            .unwrap_or_else(|| "User".to_owned()),
        gender: input.gender,
        age,
        height_cm,
        weight_kg,
        activity_level: input.activity_level,
        goal: input.goal,
        bmr,
        tdee,
        target_calories,
        diet_preference: input.diet_preference,
    })
}

fn parse_age(raw: &str) -> AppResult<u32> {
    let age: u32 = raw.trim().parse().map_err(|_| {
        AppError::invalid_input("age must be a whole number of years").with_field("age")
    })?;
    if age == 0 {
        return Err(AppError::out_of_range("age must be at least 1").with_field("age"));
    }
    Ok(age)
}

fn parse_positive_number(raw: &str, field: &'static str) -> AppResult<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        AppError::invalid_input(format!("{field} must be a number")).with_field(field)
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(
            AppError::out_of_range(format!("{field} must be a positive number")).with_field(field),
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn metric_input() -> ProfileInput {
        ProfileInput {
            name: None,
            gender: Gender::Male,
            age: "30".into(),
            height: "180".into(),
            weight: "75".into(),
            height_unit: HeightUnit::Cm,
            weight_unit: WeightUnit::Kg,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Lose,
            diet_preference: None,
        }
    }

    #[test]
    fn test_metric_profile_derivation() {
        let profile = build_profile(&metric_input()).unwrap();
        assert_eq!(profile.name, "User");
        assert!((profile.bmr - 1730.0).abs() < f64::EPSILON);
        // 1730 * 1.55 = 2681.5 -> 2682; lose goal -> 2182
        assert_eq!(profile.tdee, 2682);
        assert_eq!(profile.target_calories, 2182);
    }

    #[test]
    fn test_imperial_units_are_normalized() {
        let mut input = metric_input();
        input.height = "5.8".into();
        input.weight = "154".into();
        input.height_unit = HeightUnit::Ft;
        input.weight_unit = WeightUnit::Lbs;

        let profile = build_profile(&input).unwrap();
        // 5.8 ft * 30.48 = 176.784 -> 177 whole cm
        assert!((profile.height_cm - 177.0).abs() < f64::EPSILON);
        // 154 lbs / 2.20462, kept exact
        assert!((profile.weight_kg - 69.853_345).abs() < 1e-4);
    }

    #[test]
    fn test_non_numeric_age_is_rejected() {
        let mut input = metric_input();
        input.age = "abc".into();
        let err = build_profile(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.context.field.as_deref(), Some("age"));
    }

    #[test]
    fn test_fractional_age_is_rejected() {
        let mut input = metric_input();
        input.age = "17.5".into();
        assert!(build_profile(&input).is_err());
    }

    #[test]
    fn test_zero_age_is_rejected() {
        let mut input = metric_input();
        input.age = "0".into();
        let err = build_profile(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let mut input = metric_input();
        input.weight = "-5".into();
        let err = build_profile(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.field.as_deref(), Some("weight"));
    }

    #[test]
    fn test_empty_height_is_rejected() {
        let mut input = metric_input();
        input.height = "".into();
        let err = build_profile(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.context.field.as_deref(), Some("height"));
    }

    #[test]
    fn test_custom_name_and_preference_survive() {
        let mut input = metric_input();
        input.name = Some("Hamza".into());
        input.diet_preference = Some(DietPreference::HighProtein);
        let profile = build_profile(&input).unwrap();
        assert_eq!(profile.name, "Hamza");
        assert_eq!(profile.diet_preference, Some(DietPreference::HighProtein));
    }
}
