// ABOUTME: Integration tests for the simulated food-photo analysis backend
// ABOUTME: Verifies scan latency, guess-pool membership, preview passthrough, and seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCal Labs
//! Integration tests for the food scanner stub
//!
//! Runs the mock vision analyzer under a paused tokio clock so the
//! simulated recognition latency is asserted exactly, then checks that
//! every answer comes from the canned dish pool with its macros intact.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;
use std::time::Duration;

use fitcal_core::config::PacingConfig;
use fitcal_core::external::VisionAnalyzer;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// LATENCY
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_scan_waits_the_full_default_delay() {
    let analyzer = VisionAnalyzer::default();
    let mut rng = StdRng::seed_from_u64(1);

    let start = tokio::time::Instant::now();
    let _scanned = analyzer.analyze_image("blob:lunch", &mut rng).await;

    // 2500 ms on the paused clock, to the millisecond
    assert_eq!(start.elapsed(), Duration::from_millis(2500));
}

#[tokio::test(start_paused = true)]
async fn test_scan_delay_follows_pacing_config() {
    let analyzer = VisionAnalyzer::new(&PacingConfig {
        scan_delay_ms: 100,
        ..PacingConfig::default()
    });
    let mut rng = StdRng::seed_from_u64(1);

    let start = tokio::time::Instant::now();
    let _scanned = analyzer.analyze_image("blob:lunch", &mut rng).await;

    assert_eq!(start.elapsed(), Duration::from_millis(100));
}

// ============================================================================
// GUESS POOL
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_every_answer_comes_from_the_canned_pool() {
    let analyzer = VisionAnalyzer::default();
    let mut rng = StdRng::seed_from_u64(77);

    for _ in 0..64 {
        let scanned = analyzer.analyze_image("blob:any", &mut rng).await;
        let canned = analyzer
            .guesses()
            .iter()
            .find(|g| g.name == scanned.name)
            .unwrap();

        // Macros ride along with the dish, unmodified
        assert_eq!(scanned.calories, canned.calories);
        assert!((scanned.protein - canned.protein).abs() < f64::EPSILON);
        assert!((scanned.carbs - canned.carbs).abs() < f64::EPSILON);
        assert!((scanned.fats - canned.fats).abs() < f64::EPSILON);
        assert_eq!(scanned.serving, canned.serving);
    }
}

#[test]
fn test_pool_is_the_expected_five_dishes() {
    let analyzer = VisionAnalyzer::default();
    let names: Vec<&str> = analyzer.guesses().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Chicken Biryani",
            "Roti & Daal",
            "Chicken Karahi",
            "Samosa Chat",
            "Doodh Patti Chai",
        ]
    );

    // Spot-check the dish data against the scanner card copy
    let biryani = &analyzer.guesses()[0];
    assert_eq!(biryani.calories, 450);
    assert_eq!(biryani.serving, "1 Plate (300g)");

    let chai = &analyzer.guesses()[4];
    assert_eq!(chai.calories, 150);
    assert!((chai.fats - 8.0).abs() < f64::EPSILON);
}

#[tokio::test(start_paused = true)]
async fn test_all_five_dishes_are_reachable() {
    let analyzer = VisionAnalyzer::default();
    let mut rng = StdRng::seed_from_u64(3);

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let scanned = analyzer.analyze_image("blob:any", &mut rng).await;
        seen.insert(scanned.name);
    }
    assert_eq!(seen.len(), 5);
}

// ============================================================================
// PREVIEW PASSTHROUGH AND SEEDING
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_image_reference_is_echoed_untouched() {
    let analyzer = VisionAnalyzer::default();
    let mut rng = StdRng::seed_from_u64(5);

    let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
    let scanned = analyzer.analyze_image(data_url, &mut rng).await;
    assert_eq!(scanned.image_preview, data_url);

    let scanned = analyzer.analyze_image("blob:second-photo", &mut rng).await;
    assert_eq!(scanned.image_preview, "blob:second-photo");
}

#[tokio::test(start_paused = true)]
async fn test_same_seed_same_guess_across_analyzers() {
    let first = {
        let analyzer = VisionAnalyzer::default();
        let mut rng = StdRng::seed_from_u64(4242);
        analyzer.analyze_image("img", &mut rng).await
    };
    let second = {
        let analyzer = VisionAnalyzer::default();
        let mut rng = StdRng::seed_from_u64(4242);
        analyzer.analyze_image("img", &mut rng).await
    };

    assert_eq!(first.name, second.name);
    assert_eq!(first.calories, second.calories);
    assert_eq!(first.serving, second.serving);
}
