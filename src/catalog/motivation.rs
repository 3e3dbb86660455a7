// ABOUTME: Motivational quotes and tiered hydration messages
// ABOUTME: Content shown on the dashboard and next to the water tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

use crate::models::LocalizedText;

/// Rotating quotes shown on the dashboard
pub(super) fn bundled_quotes() -> Vec<String> {
    vec![
        "Chalo bhai, body banao! 💪".to_owned(),
        "Consistency is the real magic!".to_owned(),
        "Aaj ka workout, kal ka result!".to_owned(),
        "Water peete raho 💧".to_owned(),
        "No Pain, No Gain!".to_owned(),
        "Himmat mat haarna!".to_owned(),
    ]
}

/// Hydration messages per progress tier
#[derive(Debug, Clone)]
pub struct HydrationMessages {
    /// 20% of goal or less
    pub low: LocalizedText,
    /// Above 20% and up to half
    pub mid: LocalizedText,
    /// Above half but not finished
    pub high: LocalizedText,
    /// Goal reached
    pub done: LocalizedText,
}

pub(super) fn bundled_hydration_messages() -> HydrationMessages {
    HydrationMessages {
        low: LocalizedText::new(
            "Drink up! Your body needs fuel.",
            "Pani piyo bhai, body ko zaroorat hai 💧",
        ),
        mid: LocalizedText::new("Halfway there! Keep going.", "Adha goal pura! Thora aur... 😎"),
        high: LocalizedText::new(
            "Almost done! Stay hydrated.",
            "Bas thora sa reh gaya! Great job 💪",
        ),
        done: LocalizedText::new("Hydration Goal Smashed! 🏆", "Kya baat hai! Hydration Hero! 🏆"),
    }
}
