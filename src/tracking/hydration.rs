// ABOUTME: Water intake tracker - drink steps, daily rollover, and goal streaks
// ABOUTME: Streak increments exactly once per day, on the drink that crosses the goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! Water intake tracking.
//!
//! State lives in a [`WaterStats`] snapshot the caller persists between
//! sessions. A new calendar day resets the intake while the streak
//! carries over, and the streak counter moves only on the drink that
//! first reaches the daily goal.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::HydrationConfig;
use crate::models::{HydrationTier, WaterStats};

/// Reset intake when the tracker is opened on a new calendar day
///
/// The streak is left untouched: missing a day pauses it rather than
/// breaking it. Returns `true` when a rollover happened.
pub fn rollover_if_new_day(stats: &mut WaterStats, today: NaiveDate) -> bool {
    if stats.last_log_date == today {
        return false;
    }
    debug!(
        from = %stats.last_log_date,
        to = %today,
        "water tracker rolled over to a new day"
    );
    stats.intake_ml = 0;
    stats.last_log_date = today;
    true
}

/// Log one drink, clamped at the daily maximum
///
/// Returns `true` when this drink is the one that reached the goal, so
/// callers can celebrate exactly once per day. Drinks past the goal keep
/// adding intake but never touch the streak again.
pub fn add_drink(stats: &mut WaterStats, config: &HydrationConfig) -> bool {
    let previous = stats.intake_ml;
    stats.intake_ml = (previous + config.drink_step_ml).min(config.max_intake_ml);

    let crossed_goal = previous < stats.goal_ml && stats.intake_ml >= stats.goal_ml;
    if crossed_goal {
        stats.streak += 1;
        debug!(streak = stats.streak, "daily water goal reached");
    }
    crossed_goal
}

/// Undo one drink, never going below zero
pub fn remove_drink(stats: &mut WaterStats, config: &HydrationConfig) {
    stats.intake_ml = stats.intake_ml.saturating_sub(config.drink_step_ml);
}

/// Intake as a percentage of the goal, capped at 100
///
/// A zero goal reads as complete rather than dividing by zero.
#[must_use]
pub fn progress_percent(stats: &WaterStats) -> f64 {
    if stats.goal_ml == 0 {
        return 100.0;
    }
    (f64::from(stats.intake_ml) / f64::from(stats.goal_ml) * 100.0).min(100.0)
}

/// Map a progress percentage onto the motivation message tier
#[must_use]
pub fn motivation_tier(percent: f64) -> HydrationTier {
    if percent >= 100.0 {
        HydrationTier::Done
    } else if percent > 50.0 {
        HydrationTier::High
    } else if percent > 20.0 {
        HydrationTier::Mid
    } else {
        HydrationTier::Low
    }
}
