// ABOUTME: Bundled exercise database and the fixed weekly workout split
// ABOUTME: Seeds the catalog used by the workout library and planner views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

use crate::models::{Difficulty, Exercise, WorkoutDay};

fn exercise(
    id: &str,
    name: &str,
    muscle_group: &str,
    calories_burned_per_min: f64,
    difficulty: Difficulty,
    description: &str,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        muscle_group: muscle_group.into(),
        calories_burned_per_min,
        difficulty,
        description: description.into(),
    }
}

/// The bundled exercise database
pub(super) fn bundled_exercises() -> Vec<Exercise> {
    use Difficulty::{Advanced, Beginner, Intermediate};

    vec![
        exercise(
            "1",
            "Pushups",
            "Chest",
            7.0,
            Beginner,
            "Hands shoulder-width apart, keep back straight.",
        ),
        exercise(
            "2",
            "Squats",
            "Legs",
            8.0,
            Beginner,
            "Feet shoulder-width apart, lower hips back and down.",
        ),
        exercise(
            "3",
            "Plank",
            "Core",
            4.0,
            Intermediate,
            "Hold body straight supported by forearms and toes.",
        ),
        exercise(
            "4",
            "Crunches",
            "Abs",
            5.0,
            Beginner,
            "Lie on back, lift shoulders towards knees.",
        ),
        exercise("5", "Walking", "Cardio", 4.0, Beginner, "Brisk pace walking."),
        exercise("6", "Jogging", "Cardio", 10.0, Intermediate, "Light running pace."),
        exercise(
            "7",
            "Burpees",
            "Full Body",
            11.0,
            Advanced,
            "Squat, jump back to plank, pushup, jump forward, jump up.",
        ),
        exercise(
            "8",
            "Lunges",
            "Legs",
            6.0,
            Intermediate,
            "Step forward, lower hips until both knees are 90 degrees.",
        ),
    ]
}

fn day(day: &str, focus: &str, icon: &str) -> WorkoutDay {
    WorkoutDay {
        day: day.into(),
        focus: focus.into(),
        icon: icon.into(),
    }
}

/// The fixed seven day workout split shown by the planner
pub(super) fn weekly_split() -> Vec<WorkoutDay> {
    vec![
        day("Mon", "Chest & Triceps", "💪"),
        day("Tue", "Back & Biceps", "🏋️"),
        day("Wed", "Rest or Cardio", "🏃"),
        day("Thu", "Legs & Shoulders", "🦵"),
        day("Fri", "Full Body", "🔥"),
        day("Sat", "Active Recovery", "🧘"),
        day("Sun", "Rest", "😴"),
    ]
}
