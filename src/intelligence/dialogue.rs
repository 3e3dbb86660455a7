// ABOUTME: Rule-based coaching chat - language detection, keyword scoring, paced replies
// ABOUTME: Picks the best dialogue rule for a query or falls back to a canned reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs

//! Dialogue Matcher
//!
//! The coaching chat is a keyword scorer over the catalog's rule table.
//! A query earns one point per rule keyword it contains, plus a half
//! point when the keyword stands alone as a word, and the highest-scoring
//! rule answers in the detected language. Queries that hit nothing get a
//! random fallback reply. [`reply_with_typing`] wraps the lookup in a
//! short randomized delay so the UI can show a typing indicator.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::PacingConfig;
use crate::models::{DialogueRule, Language};

/// Words that mark a query as Roman Urdu when they appear as whole tokens
const ROMAN_URDU_MARKERS: &[&str] = &[
    "hai", "ho", "ka", "ki", "ke", "ko", "mein", "aur", "bhi", "kya", "nahi", "kuch", "kaise",
    "salam", "shukriya", "theek", "karo", "karna", "wale", "wala", "haan", "jee", "bhai", "yaar",
    "chacha", "khana", "peena",
];

/// A scored rule pick
#[derive(Debug, Clone, Copy)]
pub struct RuleMatch<'a> {
    /// The winning rule
    pub rule: &'a DialogueRule,
    /// Its keyword score
    pub score: f64,
}

/// A complete chat reply
#[derive(Debug, Clone)]
pub struct DialogueReply {
    /// Reply text in the detected language
    pub text: String,
    /// Language the query was detected as
    pub language: Language,
    /// Score of the winning rule, zero for fallback replies
    pub score: f64,
}

/// Detect the query language from function-word markers
///
/// Membership is exact per whitespace token: "ho" flags Roman Urdu while
/// "how" stays English.
#[must_use]
pub fn detect_language(query: &str) -> Language {
    let lowered = query.to_lowercase();
    let is_roman_urdu = lowered
        .split_whitespace()
        .any(|token| ROMAN_URDU_MARKERS.contains(&token));

    if is_roman_urdu {
        Language::RomanUrdu
    } else {
        Language::En
    }
}

/// Score every rule against the query and return the best hit
///
/// Each keyword contained in the lowered query scores one point, plus a
/// half point when it also appears as a whole word. The strict greater-than
/// comparison means the earliest rule keeps a tied score. Returns `None`
/// when no rule scores above zero.
#[must_use]
pub fn match_rule<'a>(rules: &'a [DialogueRule], query: &str) -> Option<RuleMatch<'a>> {
    let lowered = query.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut best: Option<RuleMatch<'a>> = None;
    let mut max_score = 0.0_f64;

    for rule in rules {
        let mut score = 0.0_f64;
        for keyword in &rule.keywords {
            if lowered.contains(keyword.as_str()) {
                score += 1.0;
                if tokens.contains(&keyword.as_str()) {
                    score += 0.5;
                }
            }
        }
        if score > max_score {
            max_score = score;
            best = Some(RuleMatch { rule, score });
        }
    }

    best
}

/// Answer a query from the rule table, falling back to a canned reply
///
/// The language of the reply follows [`detect_language`] on the query.
/// `rng` is only consumed on the fallback path.
pub fn respond<R: Rng + ?Sized>(catalog: &Catalog, query: &str, rng: &mut R) -> DialogueReply {
    let language = detect_language(query);

    match match_rule(catalog.dialogue_rules(), query) {
        Some(hit) => {
            debug!(score = hit.score, language = language.as_str(), "matched dialogue rule");
            DialogueReply {
                text: hit.rule.response.get(language).to_owned(),
                language,
                score: hit.score,
            }
        }
        None => {
            let candidates = catalog.fallback_responses(language);
            let text = candidates[rng.gen_range(0..candidates.len())].clone();
            debug!(language = language.as_str(), "no rule matched, using fallback");
            DialogueReply {
                text,
                language,
                score: 0.0,
            }
        }
    }
}

/// Randomized typing delay in `[base, base + jitter)`
pub fn typing_delay<R: Rng + ?Sized>(pacing: &PacingConfig, rng: &mut R) -> Duration {
    let jitter = rng.gen_range(0..pacing.typing_delay_jitter_ms);
    Duration::from_millis(pacing.typing_delay_base_ms + jitter)
}

/// Answer a query after a simulated typing delay
///
/// Sleeps on the tokio timer, so tests can drive it with a paused clock.
pub async fn reply_with_typing<R: Rng + ?Sized>(
    catalog: &Catalog,
    pacing: &PacingConfig,
    query: &str,
    rng: &mut R,
) -> DialogueReply {
    let delay = typing_delay(pacing, rng);
    tokio::time::sleep(delay).await;
    respond(catalog, query, rng)
}
