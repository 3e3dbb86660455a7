// ABOUTME: Sleep hour logging - clamps entries to the tracked range and checks the nightly goal
// ABOUTME: Hours snap to the half-hour steps the slider input produces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::sleep::{MAX_TRACKED_HOURS, RECOMMENDED_HOURS, SLIDER_STEP_HOURS};

/// One night of logged sleep
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SleepLog {
    /// Night the sleep ended on
    pub date: NaiveDate,
    /// Hours slept, in half-hour steps within the tracked range
    pub hours: f64,
}

impl SleepLog {
    /// Log a night of sleep, normalizing the raw hour value
    #[must_use]
    pub fn new(date: NaiveDate, hours: f64) -> Self {
        Self {
            date,
            hours: clamp_hours(hours),
        }
    }

    /// Whether this night reached the recommended duration
    #[must_use]
    pub fn meets_goal(&self) -> bool {
        self.hours >= RECOMMENDED_HOURS
    }

    /// Hours short of the recommended duration, zero when met
    #[must_use]
    pub fn deficit_hours(&self) -> f64 {
        (RECOMMENDED_HOURS - self.hours).max(0.0)
    }
}

/// Clamp raw hours into the tracked range and snap to the input step
///
/// Non-finite input reads as no sleep logged.
#[must_use]
pub fn clamp_hours(hours: f64) -> f64 {
    if !hours.is_finite() {
        return 0.0;
    }
    let clamped = hours.clamp(0.0, MAX_TRACKED_HOURS);
    (clamped / SLIDER_STEP_HOURS).round() * SLIDER_STEP_HOURS
}
