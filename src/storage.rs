// ABOUTME: Key-value persistence glue - record keys, typed helpers, and the store seam
// ABOUTME: Mirrors the browser-storage records so saved data stays interchangeable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! Persistence glue over a pluggable key-value store.
//!
//! The engine never talks to a concrete storage backend. Everything goes
//! through the [`KeyValueStore`] trait, with [`MemoryStore`] as the
//! HashMap-backed implementation for tests and headless use. Record keys
//! and JSON shapes match the companion app's browser-storage layout so
//! existing saved data round-trips unchanged.
//!
//! Structured records (profile, chat history) fail loudly on corrupt
//! JSON. Scalar counters and the favorites list fall back to defaults
//! instead, the way the companion app treated them.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::models::{ChatMessage, Language, Theme, UserDataExport, UserProfile, WaterStats};

/// Record keys, matching the companion app's browser-storage names
pub mod keys {
    /// Serialized [`UserProfile`](crate::models::UserProfile)
    pub const PROFILE: &str = "fitcal_profile";
    /// Serialized chat history (`Vec<ChatMessage>`)
    pub const CHAT_HISTORY: &str = "fitcal_chat_history";
    /// Serialized favorite food ids (`Vec<String>`)
    pub const FAVORITES: &str = "fitcal_favorites";
    /// Reply language preference
    pub const LANGUAGE: &str = "fitcal_lang";
    /// UI theme preference
    pub const THEME: &str = "fitcal_theme";
    /// Literal `"true"` once onboarding help has been dismissed
    pub const TUTORIAL_DONE: &str = "fitcal_tutorial_done";
    /// Today's water intake in ml, plain integer
    pub const WATER_INTAKE: &str = "water_intake";
    /// Daily water goal in ml, plain integer
    pub const WATER_GOAL: &str = "water_goal";
    /// Consecutive days the water goal was reached, plain integer
    pub const WATER_STREAK: &str = "water_streak";
    /// Date the water counters belong to, `YYYY-MM-DD`
    pub const WATER_LAST_DATE: &str = "water_last_date";
}

/// Date format of the `water_last_date` record
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimal string key-value persistence seam
///
/// Modeled after browser local storage: string keys, string values, no
/// transactions. Implementations supply durability; all record typing
/// lives in the helpers of this module.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str);
    /// Delete the record under `key`, if any
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and headless use
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Persist the user profile
///
/// # Errors
///
/// Returns a serialization error when the profile cannot be encoded.
pub fn save_profile<S: KeyValueStore + ?Sized>(
    store: &mut S,
    profile: &UserProfile,
) -> AppResult<()> {
    let json = serde_json::to_string(profile)?;
    store.set(keys::PROFILE, &json);
    Ok(())
}

/// Load the user profile, `None` when onboarding has not finished
///
/// # Errors
///
/// Returns a serialization error when the stored record is corrupt.
pub fn load_profile<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Option<UserProfile>> {
    match store.get(keys::PROFILE) {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Persist the full chat history
///
/// # Errors
///
/// Returns a serialization error when the history cannot be encoded.
pub fn save_chat_history<S: KeyValueStore + ?Sized>(
    store: &mut S,
    history: &[ChatMessage],
) -> AppResult<()> {
    let json = serde_json::to_string(history)?;
    store.set(keys::CHAT_HISTORY, &json);
    Ok(())
}

/// Load the chat history, empty when nothing was saved yet
///
/// # Errors
///
/// Returns a serialization error when the stored record is corrupt.
pub fn load_chat_history<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Vec<ChatMessage>> {
    match store.get(keys::CHAT_HISTORY) {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

/// Append one message to the stored chat history
///
/// # Errors
///
/// Returns a serialization error when the stored history is corrupt or
/// the updated history cannot be encoded.
pub fn append_chat_message<S: KeyValueStore + ?Sized>(
    store: &mut S,
    message: ChatMessage,
) -> AppResult<()> {
    let mut history = load_chat_history(store)?;
    history.push(message);
    save_chat_history(store, &history)
}

/// Load the favorite food ids, tolerating corrupt records
///
/// The companion app swallowed parse failures here and started fresh, so a
/// corrupt favorites record reads as empty rather than erroring.
#[must_use]
pub fn load_favorites<S: KeyValueStore + ?Sized>(store: &S) -> Vec<String> {
    store
        .get(keys::FAVORITES)
        .and_then(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| warn!(error = %e, "corrupt favorites record, starting fresh"))
                .ok()
        })
        .unwrap_or_default()
}

/// Toggle one food id in the favorites list, returning the new list
///
/// # Errors
///
/// Returns a serialization error when the updated list cannot be encoded.
pub fn toggle_favorite<S: KeyValueStore + ?Sized>(
    store: &mut S,
    food_id: &str,
) -> AppResult<Vec<String>> {
    let mut favorites = load_favorites(store);
    if let Some(pos) = favorites.iter().position(|id| id == food_id) {
        favorites.remove(pos);
    } else {
        favorites.push(food_id.to_owned());
    }
    let json = serde_json::to_string(&favorites)?;
    store.set(keys::FAVORITES, &json);
    Ok(favorites)
}

/// Persist the reply language preference
pub fn save_language<S: KeyValueStore + ?Sized>(store: &mut S, language: Language) {
    store.set(keys::LANGUAGE, language.as_str());
}

/// Load the reply language preference, defaulting to English
#[must_use]
pub fn load_language<S: KeyValueStore + ?Sized>(store: &S) -> Language {
    store
        .get(keys::LANGUAGE)
        .map_or(Language::En, |raw| Language::from_str_lossy(&raw))
}

/// Persist the UI theme preference
pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) {
    store.set(keys::THEME, theme.as_str());
}

/// Load the UI theme preference, defaulting to dark
#[must_use]
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    store
        .get(keys::THEME)
        .map_or(Theme::Dark, |raw| Theme::from_str_lossy(&raw))
}

/// Record that the onboarding tutorial was dismissed
pub fn mark_tutorial_done<S: KeyValueStore + ?Sized>(store: &mut S) {
    store.set(keys::TUTORIAL_DONE, "true");
}

/// Whether the onboarding tutorial was already dismissed
#[must_use]
pub fn is_tutorial_done<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    store
        .get(keys::TUTORIAL_DONE)
        .is_some_and(|raw| raw == "true")
}

/// Persist the water tracker counters as four scalar records
pub fn save_water_stats<S: KeyValueStore + ?Sized>(store: &mut S, stats: &WaterStats) {
    store.set(keys::WATER_INTAKE, &stats.intake_ml.to_string());
    store.set(keys::WATER_GOAL, &stats.goal_ml.to_string());
    store.set(keys::WATER_STREAK, &stats.streak.to_string());
    store.set(
        keys::WATER_LAST_DATE,
        &stats.last_log_date.format(DATE_FORMAT).to_string(),
    );
}

/// Load the water tracker counters
///
/// Every record falls back independently: absent or unparseable values
/// read as a fresh tracker with `default_goal_ml` dated `today`. Day
/// rollover is the tracker's job, not the loader's.
#[must_use]
pub fn load_water_stats<S: KeyValueStore + ?Sized>(
    store: &S,
    default_goal_ml: u32,
    today: NaiveDate,
) -> WaterStats {
    let parse_u32 = |key: &str, fallback: u32| {
        store
            .get(key)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(fallback)
    };

    WaterStats {
        intake_ml: parse_u32(keys::WATER_INTAKE, 0),
        goal_ml: parse_u32(keys::WATER_GOAL, default_goal_ml),
        streak: parse_u32(keys::WATER_STREAK, 0),
        last_log_date: store
            .get(keys::WATER_LAST_DATE)
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
            .unwrap_or(today),
    }
}

/// Clear the profile and tutorial flag, keeping preferences and trackers
///
/// Matches the app's reset behavior: language, theme, favorites, chat
/// history, and water counters all survive a profile reset.
pub fn reset_profile<S: KeyValueStore + ?Sized>(store: &mut S) {
    store.remove(keys::PROFILE);
    store.remove(keys::TUTORIAL_DONE);
    debug!("profile and tutorial records cleared");
}

/// Assemble the downloadable user-data bundle
///
/// # Errors
///
/// Returns a not-found error when no profile is stored, or a
/// serialization error when a stored record is corrupt.
pub fn export_user_data<S: KeyValueStore + ?Sized>(
    store: &S,
    now: DateTime<Utc>,
) -> AppResult<UserDataExport> {
    let profile = load_profile(store)?
        .ok_or_else(|| AppError::not_found("user profile").with_resource_id(keys::PROFILE))?;
    let history = load_chat_history(store)?;

    Ok(UserDataExport {
        profile,
        history,
        export_date: now,
    })
}

/// Encode an export bundle as pretty-printed JSON
///
/// # Errors
///
/// Returns a serialization error when the bundle cannot be encoded.
pub fn export_to_json(export: &UserDataExport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(export)?)
}

/// File name the export bundle is offered under
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("fitcal_export_{}.json", date.format(DATE_FORMAT))
}
