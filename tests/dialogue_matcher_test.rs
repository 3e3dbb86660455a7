// ABOUTME: Integration tests for the coaching chat matcher and reply pacing
// ABOUTME: Covers language detection, keyword scoring, fallbacks, and the typing delay window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs
//! Integration tests for the dialogue matcher
//!
//! Runs real queries against the bundled rule table:
//! - Roman Urdu detection on whole-token markers
//! - Keyword scoring with the whole-word bonus and first-wins ties
//! - Uniform fallback replies when nothing matches
//! - Typing delay bounds on a paused tokio clock

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use fitcal_core::catalog::Catalog;
use fitcal_core::config::PacingConfig;
use fitcal_core::intelligence::{
    detect_language, match_rule, reply_with_typing, respond, typing_delay,
};
use fitcal_core::models::Language;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// LANGUAGE DETECTION
// ============================================================================

#[test]
fn test_roman_urdu_detection_on_whole_tokens() {
    assert_eq!(detect_language("kaise ho bhai"), Language::RomanUrdu);
    assert_eq!(detect_language("wazan kam karna hai"), Language::RomanUrdu);
    assert_eq!(detect_language("KYA biryani theek hai?"), Language::RomanUrdu);

    assert_eq!(detect_language("how are you"), Language::En);
    assert_eq!(detect_language("best protein sources?"), Language::En);
    // "ho" inside "how" must not trigger: markers match whole tokens only
    assert_eq!(detect_language("how much water"), Language::En);
}

#[test]
fn test_empty_query_reads_as_english() {
    assert_eq!(detect_language(""), Language::En);
    assert_eq!(detect_language("   "), Language::En);
}

// ============================================================================
// RULE SCORING
// ============================================================================

#[test]
fn test_whole_word_bonus_outranks_substring_hit() {
    let catalog = Catalog::bundled();

    // "chai" as a whole word scores 1.5 on the tea rule; "biryani lover"
    // scores only 1.0 on the biryani rule, so tea wins the mixed query
    let hit = match_rule(catalog.dialogue_rules(), "chai with my biryanis").unwrap();
    assert!(hit.rule.keywords.contains(&"chai".to_owned()));
    assert!((hit.score - 1.5).abs() < f64::EPSILON);
}

#[test]
fn test_multiple_keywords_accumulate() {
    let catalog = Catalog::bundled();

    // "protein" and "chicken" both live in the protein rule: 1.5 + 1.5
    let hit = match_rule(catalog.dialogue_rules(), "protein from chicken").unwrap();
    assert!((hit.score - 3.0).abs() < f64::EPSILON);
    assert!(hit.rule.response.en.contains("Protein is essential"));
}

#[test]
fn test_first_rule_wins_score_ties() {
    let catalog = Catalog::bundled();

    // "roti chai" scores 1.5 on both the roti rule and the chai rule; the
    // roti rule comes first in the table and must keep the win
    let hit = match_rule(catalog.dialogue_rules(), "roti chai").unwrap();
    assert!(hit.rule.keywords.contains(&"roti".to_owned()));
}

#[test]
fn test_unmatched_query_returns_none() {
    let catalog = Catalog::bundled();
    assert!(match_rule(catalog.dialogue_rules(), "xyzzy plugh").is_none());
}

// ============================================================================
// FULL REPLIES
// ============================================================================

#[test]
fn test_reply_language_follows_query() {
    let catalog = Catalog::bundled();
    let mut rng = StdRng::seed_from_u64(4);

    let urdu = respond(&catalog, "wazan kam karna hai", &mut rng);
    assert_eq!(urdu.language, Language::RomanUrdu);
    assert!(urdu.text.contains("Calorie Deficit"));
    assert!(urdu.text.contains("khayein"));

    let english = respond(&catalog, "weight loss tips please", &mut rng);
    assert_eq!(english.language, Language::En);
    assert!(english.text.contains("Calorie Deficit"));
    assert!(english.text.contains("Eat 300-500 calories less"));
}

#[test]
fn test_fallback_reply_comes_from_the_right_pool() {
    let catalog = Catalog::bundled();
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..20 {
        let reply = respond(&catalog, "xyzzy plugh", &mut rng);
        assert!(
            (reply.score - 0.0).abs() < f64::EPSILON,
            "fallback replies carry no score"
        );
        assert!(
            catalog
                .fallback_responses(Language::En)
                .contains(&reply.text),
            "unexpected fallback: {}",
            reply.text
        );
    }
}

#[test]
fn test_roman_urdu_fallback_pool() {
    let catalog = Catalog::bundled();
    let mut rng = StdRng::seed_from_u64(8);

    // "bhai" is a marker but no rule keyword, so this falls back in Urdu
    let reply = respond(&catalog, "bhai kuch batao", &mut rng);
    assert_eq!(reply.language, Language::RomanUrdu);
    assert!(catalog
        .fallback_responses(Language::RomanUrdu)
        .contains(&reply.text));
}

// ============================================================================
// TYPING DELAY
// ============================================================================

#[test]
fn test_typing_delay_stays_in_window() {
    let pacing = PacingConfig::default();
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..500 {
        let delay = typing_delay(&pacing, &mut rng);
        assert!(delay >= Duration::from_millis(1000), "delay {delay:?} too short");
        assert!(delay < Duration::from_millis(1800), "delay {delay:?} too long");
    }
}

#[tokio::test(start_paused = true)]
async fn test_reply_with_typing_waits_out_the_delay() {
    let catalog = Catalog::bundled();
    let pacing = PacingConfig::default();
    let mut rng = StdRng::seed_from_u64(3);

    let started = tokio::time::Instant::now();
    let reply = reply_with_typing(&catalog, &pacing, "salam", &mut rng).await;
    let elapsed = started.elapsed();

    assert!(elapsed >= Duration::from_millis(1000));
    assert!(elapsed < Duration::from_millis(1800));
    assert!(reply.text.contains("Salam"));
}
