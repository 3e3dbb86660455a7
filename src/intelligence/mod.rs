// ABOUTME: Intelligence module - generators and matchers built on the catalog
// ABOUTME: Energy metrics, meal planning, recipe synthesis, and the coaching chat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! # Intelligence Module
//!
//! The deterministic brains of the engine. Every generator takes the
//! catalog and any randomness as explicit arguments, so outputs are
//! reproducible under a seeded generator.

/// Rule-based coaching chat with language detection
pub mod dialogue;
/// Daily meal plan generation from the food catalog
pub mod meal_plan;
/// BMR, TDEE, calorie target, and macro split formulas
pub mod metrics;
/// Recipe synthesis from free-form ingredient input
pub mod recipe;

pub use dialogue::{
    detect_language, match_rule, reply_with_typing, respond, typing_delay, DialogueReply,
    RuleMatch,
};
pub use meal_plan::generate_meal_plan;
pub use metrics::{
    calculate_bmr, calculate_macro_split, calculate_target_calories, calculate_tdee,
};
pub use recipe::synthesize_recipe;
