// ABOUTME: Bundled knowledge base of foods, exercises, dialogue rules, and motivation content
// ABOUTME: Provides lookup and search over the fixed catalog that ships with the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! # Knowledge Base Catalog
//!
//! The engine ships a fixed catalog: a food database with per-serving
//! macros, an exercise library, the coaching chat's rule table, and the
//! motivational content shown around the app. [`Catalog::bundled`] builds
//! the whole set; callers hold the catalog and pass it by reference to the
//! generators in [`crate::intelligence`].

mod dialogue;
mod exercises;
mod foods;
mod motivation;

pub use motivation::HydrationMessages;

use rand::Rng;

use crate::models::{
    DialogueRule, Exercise, FoodCategory, FoodItem, HydrationTier, Language, WorkoutDay,
};

/// The bundled knowledge base
#[derive(Debug, Clone)]
pub struct Catalog {
    foods: Vec<FoodItem>,
    exercises: Vec<Exercise>,
    dialogue_rules: Vec<DialogueRule>,
    fallbacks_en: Vec<String>,
    fallbacks_roman_urdu: Vec<String>,
    quotes: Vec<String>,
    hydration_messages: HydrationMessages,
    weekly_split: Vec<WorkoutDay>,
}

impl Catalog {
    /// Build the catalog that ships with the engine
    #[must_use]
    pub fn bundled() -> Self {
        let (fallbacks_en, fallbacks_roman_urdu) = dialogue::bundled_fallbacks();
        Self {
            foods: foods::bundled_foods(),
            exercises: exercises::bundled_exercises(),
            dialogue_rules: dialogue::bundled_rules(),
            fallbacks_en,
            fallbacks_roman_urdu,
            quotes: motivation::bundled_quotes(),
            hydration_messages: motivation::bundled_hydration_messages(),
            weekly_split: exercises::weekly_split(),
        }
    }

    /// Catalog with a caller-provided food database and bundled content elsewhere
    ///
    /// Lets an embedding app swap in its own food list while keeping the
    /// exercises, dialogue rules, and motivation content.
    #[must_use]
    pub fn with_foods(foods: Vec<FoodItem>) -> Self {
        Self {
            foods,
            ..Self::bundled()
        }
    }

    /// All catalog foods in catalog order
    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// All catalog exercises in catalog order
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// The dialogue rules in matching priority order
    #[must_use]
    pub fn dialogue_rules(&self) -> &[DialogueRule] {
        &self.dialogue_rules
    }

    /// Fallback chat replies for the given language
    #[must_use]
    pub fn fallback_responses(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.fallbacks_en,
            Language::RomanUrdu => &self.fallbacks_roman_urdu,
        }
    }

    /// All motivational quotes
    #[must_use]
    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    /// Pick a motivational quote uniformly at random
    pub fn random_quote<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.quotes[rng.gen_range(0..self.quotes.len())]
    }

    /// Hydration message for a progress tier in the given language
    #[must_use]
    pub fn hydration_message(&self, tier: HydrationTier, language: Language) -> &str {
        let text = match tier {
            HydrationTier::Low => &self.hydration_messages.low,
            HydrationTier::Mid => &self.hydration_messages.mid,
            HydrationTier::High => &self.hydration_messages.high,
            HydrationTier::Done => &self.hydration_messages.done,
        };
        text.get(language)
    }

    /// The fixed seven day workout split
    #[must_use]
    pub fn weekly_split(&self) -> &[WorkoutDay] {
        &self.weekly_split
    }

    /// Look up a food by its catalog id
    #[must_use]
    pub fn food_by_id(&self, id: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// First food whose name contains the given token, ignoring case
    ///
    /// Catalog order decides ambiguous tokens: "chicken" matches
    /// Chicken Biryani, not Chicken Karahi.
    #[must_use]
    pub fn match_food(&self, token: &str) -> Option<&FoodItem> {
        let needle = token.to_lowercase();
        self.foods
            .iter()
            .find(|f| f.name.to_lowercase().contains(&needle))
    }

    /// Case-insensitive substring search with an optional category filter
    #[must_use]
    pub fn search_foods(&self, query: &str, category: Option<FoodCategory>) -> Vec<&FoodItem> {
        let needle = query.to_lowercase();
        self.foods
            .iter()
            .filter(|f| category.is_none_or(|c| f.category == c))
            .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Exercises whose muscle group matches exactly
    #[must_use]
    pub fn exercises_for_group(&self, group: &str) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.muscle_group == group)
            .collect()
    }

    /// Unique muscle groups in catalog order
    #[must_use]
    pub fn muscle_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for exercise in &self.exercises {
            if !groups.contains(&exercise.muscle_group.as_str()) {
                groups.push(&exercise.muscle_group);
            }
        }
        groups
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_counts() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.foods().len(), 22);
        assert_eq!(catalog.exercises().len(), 8);
        assert_eq!(catalog.dialogue_rules().len(), 16);
        assert_eq!(catalog.quotes().len(), 6);
        assert_eq!(catalog.weekly_split().len(), 7);
        assert_eq!(catalog.fallback_responses(Language::En).len(), 4);
        assert_eq!(catalog.fallback_responses(Language::RomanUrdu).len(), 4);
    }

    #[test]
    fn test_food_ids_are_unique() {
        let catalog = Catalog::bundled();
        let mut ids: Vec<&str> = catalog.foods().iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 22);
    }

    #[test]
    fn test_match_food_prefers_catalog_order() {
        let catalog = Catalog::bundled();
        let hit = catalog.match_food("chicken").unwrap();
        assert_eq!(hit.id, "1");
        assert_eq!(hit.name, "Chicken Biryani");
    }

    #[test]
    fn test_match_food_is_case_insensitive() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.match_food("YOGURT").unwrap().id, "14");
        assert!(catalog.match_food("pizza").is_none());
    }

    #[test]
    fn test_search_foods_with_category() {
        let catalog = Catalog::bundled();
        let drinks = catalog.search_foods("", Some(FoodCategory::Drink));
        assert_eq!(drinks.len(), 4);

        let shakes = catalog.search_foods("shake", Some(FoodCategory::Drink));
        let names: Vec<&str> = shakes.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Mango Shake", "Protein Shake"]);
    }

    #[test]
    fn test_exercise_groups() {
        let catalog = Catalog::bundled();
        let legs = catalog.exercises_for_group("Legs");
        assert_eq!(legs.len(), 2);

        let groups = catalog.muscle_groups();
        assert_eq!(
            groups,
            vec!["Chest", "Legs", "Core", "Abs", "Cardio", "Full Body"]
        );
    }

    #[test]
    fn test_hydration_messages_localized() {
        let catalog = Catalog::bundled();
        assert_eq!(
            catalog.hydration_message(HydrationTier::Done, Language::En),
            "Hydration Goal Smashed! 🏆"
        );
        assert_eq!(
            catalog.hydration_message(HydrationTier::Low, Language::RomanUrdu),
            "Pani piyo bhai, body ko zaroorat hai 💧"
        );
    }

    #[test]
    fn test_random_quote_is_member() {
        use rand::{rngs::StdRng, SeedableRng};
        let catalog = Catalog::bundled();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let quote = catalog.random_quote(&mut rng).to_owned();
            assert!(catalog.quotes().contains(&quote));
        }
    }
}
