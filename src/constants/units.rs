// ABOUTME: Unit conversion constants and helpers for imperial/metric measurements
// ABOUTME: Provides named constants to eliminate magic numbers in conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

/// Centimeters per foot conversion factor
pub const CM_PER_FOOT: f64 = 30.48;

/// Feet per centimeter conversion factor
pub const FEET_PER_CM: f64 = 0.0328084;

/// Pounds per kilogram conversion factor
pub const LBS_PER_KG: f64 = 2.20462;

/// Convert a height in feet to whole centimeters
#[must_use]
pub fn feet_to_cm(feet: f64) -> f64 {
    (feet * CM_PER_FOOT).round()
}

/// Convert a height in centimeters to feet, rounded to one decimal place
#[must_use]
pub fn cm_to_feet(cm: f64) -> f64 {
    (cm * FEET_PER_CM * 10.0).round() / 10.0
}

/// Convert a weight in pounds to kilograms
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Convert a weight in kilograms to whole pounds
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    (kg * LBS_PER_KG).round()
}
