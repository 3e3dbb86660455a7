// ABOUTME: Integration tests for onboarding profile building
// ABOUTME: Covers unit conversion, validation errors, and metric derivation end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs
//! Integration tests for the profile builder
//!
//! Walks complete onboarding inputs through validation and derivation:
//! - Metric and imperial submissions landing on the same stored units
//! - Field-tagged validation errors for every bad input shape
//! - Derived BMR/TDEE/target agreeing with the metric functions

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitcal_core::errors::ErrorCode;
use fitcal_core::intelligence::{calculate_bmr, calculate_target_calories, calculate_tdee};
use fitcal_core::models::{ActivityLevel, DietPreference, Gender, Goal};
use fitcal_core::profile::{build_profile, HeightUnit, ProfileInput, WeightUnit};

fn base_input() -> ProfileInput {
    ProfileInput {
        name: Some("Ayesha".into()),
        gender: Gender::Female,
        age: "25".into(),
        height: "165".into(),
        weight: "60".into(),
        height_unit: HeightUnit::Cm,
        weight_unit: WeightUnit::Kg,
        activity_level: ActivityLevel::Light,
        goal: Goal::Maintain,
        diet_preference: Some(DietPreference::Vegetarian),
    }
}

// ============================================================================
// HAPPY PATHS
// ============================================================================

#[test]
fn test_metric_onboarding() {
    let profile = build_profile(&base_input()).unwrap();

    assert_eq!(profile.name, "Ayesha");
    assert_eq!(profile.age, 25);
    assert!((profile.height_cm - 165.0).abs() < f64::EPSILON);
    assert!((profile.weight_kg - 60.0).abs() < f64::EPSILON);
    // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25
    assert!((profile.bmr - 1345.25).abs() < f64::EPSILON);
    assert_eq!(profile.diet_preference, Some(DietPreference::Vegetarian));
}

#[test]
fn test_imperial_onboarding_normalizes_units() {
    let mut input = base_input();
    input.height = "5.8".into();
    input.height_unit = HeightUnit::Ft;
    input.weight = "154".into();
    input.weight_unit = WeightUnit::Lbs;

    let profile = build_profile(&input).unwrap();
    // 5.8 ft -> 176.784 cm, rounded to whole centimeters
    assert!((profile.height_cm - 177.0).abs() < f64::EPSILON);
    // 154 lbs / 2.20462, stored unrounded
    assert!((profile.weight_kg - 69.8533).abs() < 1e-3);
}

#[test]
fn test_derived_metrics_match_direct_calls() {
    let mut input = base_input();
    input.goal = Goal::Gain;
    input.activity_level = ActivityLevel::Active;
    let profile = build_profile(&input).unwrap();

    let bmr = calculate_bmr(Gender::Female, 60.0, 165.0, 25);
    let tdee = calculate_tdee(bmr, ActivityLevel::Active);
    assert!((profile.bmr - bmr).abs() < f64::EPSILON);
    assert_eq!(profile.tdee, tdee);
    assert_eq!(
        profile.target_calories,
        calculate_target_calories(tdee, Goal::Gain)
    );
}

#[test]
fn test_missing_name_defaults() {
    let mut input = base_input();
    input.name = None;
    let profile = build_profile(&input).unwrap();
    assert_eq!(profile.name, "User");
}

#[test]
fn test_input_fields_tolerate_surrounding_whitespace() {
    let mut input = base_input();
    input.age = " 25 ".into();
    input.height = " 165.0 ".into();
    input.weight = "\t60 ".into();
    let profile = build_profile(&input).unwrap();
    assert_eq!(profile.age, 25);
}

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

#[test]
fn test_bad_age_shapes() {
    for bad in ["", "abc", "17.5", "-3"] {
        let mut input = base_input();
        input.age = bad.into();
        let err = build_profile(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "age {bad:?}");
        assert_eq!(err.context.field.as_deref(), Some("age"));
    }

    let mut input = base_input();
    input.age = "0".into();
    let err = build_profile(&input).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_bad_height_and_weight_shapes() {
    for bad in ["", "tall", "NaN"] {
        let mut input = base_input();
        input.height = bad.into();
        let err = build_profile(&input).unwrap_err();
        assert_eq!(err.context.field.as_deref(), Some("height"), "height {bad:?}");
    }

    for bad in ["0", "-70", "inf"] {
        let mut input = base_input();
        input.weight = bad.into();
        let err = build_profile(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "weight {bad:?}");
        assert_eq!(err.context.field.as_deref(), Some("weight"));
    }
}

#[test]
fn test_validation_stops_at_first_bad_field() {
    // Age is checked before height, so the age error surfaces even when
    // both fields are bad
    let mut input = base_input();
    input.age = "x".into();
    input.height = "y".into();
    let err = build_profile(&input).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("age"));
}
