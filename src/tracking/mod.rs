// ABOUTME: Daily habit tracking - water intake with streaks and sleep logging
// ABOUTME: Pure state transitions over tracker snapshots, persistence lives elsewhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! Habit tracking engines.
//!
//! Water intake and sleep are tracked as small value-type snapshots that
//! the caller owns. Every operation here is a pure transition on that
//! state so the same logic backs any storage or UI layer.

/// Water intake tracking with day rollover and goal streaks
pub mod hydration;
/// Sleep hour logging against the recommended nightly goal
pub mod sleep;

pub use hydration::{add_drink, motivation_tier, progress_percent, remove_drink, rollover_if_new_day};
pub use sleep::SleepLog;
