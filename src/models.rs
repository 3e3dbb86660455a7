// ABOUTME: Core data models and types for the FitCal engine
// ABOUTME: Defines UserProfile, FoodItem, Exercise, MealPlan and other fundamental data structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! # Data Models
//!
//! This module contains the core data structures used throughout the FitCal
//! engine. Serialized field names mirror the JSON records the companion app
//! persists, so profiles and chat histories written by earlier releases load
//! unchanged.
//!
//! ## Design Principles
//!
//! - **Serializable**: All models support JSON round-trips for storage and export
//! - **Type Safe**: Strong typing prevents common data handling errors
//! - **Self-contained**: No provider or network types leak into the model layer
//!
//! ## Core Models
//!
//! - `UserProfile`: Onboarded user with derived energy metrics
//! - `FoodItem` / `Exercise`: Catalog entries
//! - `MealPlan` / `GeneratedRecipe`: Generator outputs
//! - `ChatMessage`: One turn of the coaching chat

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::energy;

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

/// Weekly activity level used for TDEE estimation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days per week
    Light,
    /// Moderate exercise 3-5 days per week
    Moderate,
    /// Hard exercise 6-7 days per week
    Active,
    /// Very hard exercise and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to the basal metabolic rate
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }

    /// Convert to the stored string form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Parse an activity level from a stored string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }
}

/// Body-weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Lose weight
    Lose,
    /// Hold current weight
    Maintain,
    /// Gain weight
    Gain,
}

impl Goal {
    /// Daily calorie adjustment applied on top of TDEE
    #[must_use]
    pub const fn calorie_offset(&self) -> i32 {
        match self {
            Self::Lose => energy::LOSE_OFFSET_KCAL,
            Self::Maintain => 0,
            Self::Gain => energy::GAIN_OFFSET_KCAL,
        }
    }
}

/// Dietary preference used to filter the food catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietPreference {
    /// No restriction
    #[serde(rename = "anything")]
    Anything,
    /// Vegetarian staples only
    #[serde(rename = "veg")]
    Vegetarian,
    /// No restriction (mirror of the app's non-veg option)
    #[serde(rename = "non-veg")]
    NonVegetarian,
    /// Foods with meaningful protein per serving
    #[serde(rename = "high-protein")]
    HighProtein,
}

impl DietPreference {
    /// Convert to the stored string form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Anything => "anything",
            Self::Vegetarian => "veg",
            Self::NonVegetarian => "non-veg",
            Self::HighProtein => "high-protein",
        }
    }
}

/// Category of a catalog food
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Main dish
    Meal,
    /// Light snack
    Snack,
    /// Beverage
    Drink,
    /// Fresh fruit
    Fruit,
}

/// Exercise difficulty tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Suitable for newcomers
    Beginner,
    /// Some training history assumed
    Intermediate,
    /// Demanding movements
    Advanced,
}

/// Reply language of the coaching chat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    /// English
    #[serde(rename = "en")]
    En,
    /// Roman Urdu (Urdu written in Latin script)
    #[serde(rename = "roman_urdu")]
    RomanUrdu,
}

impl Language {
    /// Convert to the stored string form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::RomanUrdu => "roman_urdu",
        }
    }

    /// Parse a language from a stored string
    ///
    /// Accepts the legacy `hinglish` and `ur` spellings for Roman Urdu.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "roman_urdu" | "hinglish" | "ur" => Self::RomanUrdu,
            _ => Self::En,
        }
    }
}

/// UI color theme preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme, the default
    Dark,
    /// Light theme
    Light,
}

impl Theme {
    /// Convert to the stored string form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a theme from a stored string, anything unknown reads as dark
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// A piece of text available in both reply languages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedText {
    /// English form
    pub en: String,
    /// Roman Urdu form
    pub roman_urdu: String,
}

impl LocalizedText {
    /// Build from a pair of string literals
    #[must_use]
    pub fn new(en: impl Into<String>, roman_urdu: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            roman_urdu: roman_urdu.into(),
        }
    }

    /// Pick the form matching the given language
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::RomanUrdu => &self.roman_urdu,
        }
    }
}

/// One keyword-scored rule of the coaching chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueRule {
    /// Keywords that attract queries to this rule
    pub keywords: Vec<String>,
    /// Canned reply in both languages
    pub response: LocalizedText,
}

/// Kind of dish produced by the recipe synthesizer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DishType {
    /// Blended fruit drink
    Smoothie,
    /// Raw vegetable dish
    Salad,
    /// Stove-cooked dish
    Cooked,
    /// Single-ingredient snack
    Snack,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    /// The person using the app
    User,
    /// The coaching assistant
    Bot,
}

/// Hydration progress bucket used to pick a motivational message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HydrationTier {
    /// 20% of goal or less
    Low,
    /// Above 20% and up to half
    Mid,
    /// Above half but not finished
    High,
    /// Goal reached
    Done,
}

/// A food known to the bundled catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Calories per serving
    pub calories: u32,
    /// Protein per serving (grams)
    pub protein: f64,
    /// Carbohydrates per serving (grams)
    pub carbs: f64,
    /// Fat per serving (grams)
    pub fats: f64,
    /// Human-readable serving size
    pub serving: String,
    /// Catalog category
    pub category: FoodCategory,
}

/// An exercise known to the bundled catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary muscle group
    pub muscle_group: String,
    /// Estimated calorie burn per minute
    pub calories_burned_per_min: f64,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Short form cue
    pub description: String,
}

impl Exercise {
    /// Estimated calories burned over a ten minute set
    #[must_use]
    pub fn calories_per_10_min(&self) -> u32 {
        (self.calories_burned_per_min * 10.0).round() as u32
    }
}

/// One day of the fixed weekly workout split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// Abbreviated weekday name
    pub day: String,
    /// Training focus of the day
    pub focus: String,
    /// Decorative icon shown by the app
    pub icon: String,
}

/// Onboarded user with derived energy metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Biological sex
    pub gender: Gender,
    /// Age in whole years
    pub age: u32,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Weekly activity level
    pub activity_level: ActivityLevel,
    /// Body-weight goal
    pub goal: Goal,
    /// Basal metabolic rate in kcal/day (unrounded)
    pub bmr: f64,
    /// Total daily energy expenditure in kcal/day
    pub tdee: i32,
    /// Goal-adjusted daily calorie target
    pub target_calories: i32,
    /// Dietary preference for meal planning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_preference: Option<DietPreference>,
}

impl UserProfile {
    /// Body mass index derived from stored height and weight
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    /// Protein grams
    #[serde(rename = "protein")]
    pub protein_g: i32,
    /// Carbohydrate grams
    #[serde(rename = "carbs")]
    pub carbs_g: i32,
    /// Fat grams
    #[serde(rename = "fats")]
    pub fats_g: i32,
}

/// Macronutrient totals of a synthesized recipe in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeMacros {
    /// Protein grams
    #[serde(rename = "protein")]
    pub protein_g: u32,
    /// Carbohydrate grams
    #[serde(rename = "carbs")]
    pub carbs_g: u32,
    /// Fat grams
    #[serde(rename = "fats")]
    pub fats_g: u32,
}

/// One display line of a synthesized recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Display name (catalog name or capitalized input token)
    pub name: String,
    /// Serving description
    pub amount: String,
}

/// Recipe synthesized from free-form ingredient input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    /// Generated display title
    pub title: String,
    /// Dish classification
    #[serde(rename = "type")]
    pub dish_type: DishType,
    /// Recognized and placeholder ingredients in input order
    pub ingredients: Vec<RecipeIngredient>,
    /// Preparation steps for the dish type
    pub instructions: Vec<String>,
    /// Estimated calories of the full dish
    pub calories: u32,
    /// Estimated macronutrient totals
    pub macros: RecipeMacros,
    /// Estimated preparation time
    pub prep_time: String,
}

/// One day of generated meals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Morning pick (meal or fruit)
    pub breakfast: FoodItem,
    /// Midday pick (meal)
    pub lunch: FoodItem,
    /// Evening pick (meal)
    pub dinner: FoodItem,
    /// Snack or drink pick
    pub snack: FoodItem,
    /// Calorie sum of the four picks
    #[serde(rename = "totalCals")]
    pub total_calories: u32,
}

/// One turn of the coaching chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id
    pub id: String,
    /// Message body
    pub text: String,
    /// Author
    pub sender: ChatSender,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Build a user-authored message stamped now
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: ChatSender::User,
            timestamp: Utc::now(),
        }
    }

    /// Build an assistant-authored message stamped now
    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: ChatSender::Bot,
            timestamp: Utc::now(),
        }
    }
}

/// Daily water tracking state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WaterStats {
    /// Milliliters logged today
    #[serde(rename = "intake")]
    pub intake_ml: u32,
    /// Daily goal in milliliters
    #[serde(rename = "goal")]
    pub goal_ml: u32,
    /// Consecutive days the goal was reached
    pub streak: u32,
    /// Day the intake counter belongs to
    pub last_log_date: NaiveDate,
}

impl WaterStats {
    /// Fresh state for a day with nothing logged yet
    #[must_use]
    pub const fn fresh(goal_ml: u32, today: NaiveDate) -> Self {
        Self {
            intake_ml: 0,
            goal_ml,
            streak: 0,
            last_log_date: today,
        }
    }
}

/// Result of the mock food-photo analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedFood {
    /// Guessed dish name
    pub name: String,
    /// Estimated calories
    pub calories: u32,
    /// Estimated protein (grams)
    pub protein: f64,
    /// Estimated carbohydrates (grams)
    pub carbs: f64,
    /// Estimated fat (grams)
    pub fats: f64,
    /// Estimated serving size
    pub serving: String,
    /// Reference to the analyzed image, echoed back unchanged
    pub image_preview: String,
}

/// Bundle produced by the data export operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataExport {
    /// Stored profile
    pub profile: UserProfile,
    /// Full chat history
    pub history: Vec<ChatMessage>,
    /// Export creation time
    pub export_date: DateTime<Utc>,
}
