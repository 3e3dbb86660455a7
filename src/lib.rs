// ABOUTME: Main library entry point for the FitCal core engine
// ABOUTME: Provides metrics, meal planning, recipes, coaching chat, and habit tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy. Nothing in this crate
//   needs raw pointers or FFI.
#![deny(unsafe_code)]

//! # FitCal Core
//!
//! The headless engine behind the FitCal nutrition tracker. It onboards a
//! user from raw form input, computes their energy metrics, and powers the
//! daily features: meal plans, recipe synthesis from loose ingredients, a
//! bilingual rule-based coach, water and sleep tracking, and a simulated
//! food-photo scanner.
//!
//! ## Features
//!
//! - **Energy metrics**: Mifflin-St Jeor BMR, activity-scaled TDEE, and
//!   goal-adjusted calorie targets with a 30/40/30 macro split
//! - **Meal planning**: preference-filtered daily plans drawn from the
//!   bundled desi food catalog, biased toward the calorie target
//! - **Recipe synthesis**: classifies loose ingredient lists into a dish
//!   type and produces a titled recipe with macros
//! - **Coaching chat**: keyword-scored replies in English or Roman Urdu,
//!   with human-feeling typing delays
//! - **Habit tracking**: water intake with goal streaks, sleep logging
//!
//! All randomness flows through caller-supplied [`rand::Rng`] values, so
//! every feature is reproducible under a seeded generator.
//!
//! ## Example Usage
//!
//! ```rust
//! use fitcal_core::catalog::Catalog;
//! use fitcal_core::errors::AppResult;
//! use fitcal_core::intelligence::generate_meal_plan;
//! use fitcal_core::models::DietPreference;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = Catalog::bundled();
//!     let mut rng = StdRng::seed_from_u64(42);
//!
//!     let plan = generate_meal_plan(&catalog, DietPreference::Vegetarian, 2000, &mut rng)?;
//!     println!("day total: {} kcal", plan.total_calories);
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by integration tests (tests/) and downstream
// frontends. They must remain `pub` so external consumers can access them.

/// Bundled food, exercise, and dialogue data with lookup helpers
pub mod catalog;

/// Configuration management with environment overrides
pub mod config;

/// Application constants and unit conversions
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// External analysis stubs (simulated food-photo recognition)
pub mod external;

/// Metric, meal plan, recipe, and dialogue engines
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Common data models shared across the engine
pub mod models;

/// Onboarding input validation and profile derivation
pub mod profile;

/// Key-value persistence glue and record layout
pub mod storage;

/// Water and sleep habit tracking
pub mod tracking;
