// ABOUTME: Simulated food-photo analysis with canned guesses and realistic latency
// ABOUTME: Stands in for an AI vision API; swap the internals when one is wired up

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitCal Labs

//! Food Photo Analysis Stub
//!
//! Simulates an AI vision backend for the food scanner. Every analysis
//! waits out a configurable delay and then returns one of a small set of
//! plausible desi dishes, chosen by the caller's RNG. The image reference
//! is passed through untouched so the UI can keep showing the preview.
//!
//! # Example
//! ```rust
//! use fitcal_core::config::PacingConfig;
//! use fitcal_core::external::VisionAnalyzer;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let analyzer = VisionAnalyzer::new(&PacingConfig {
//!     scan_delay_ms: 0,
//!     ..PacingConfig::default()
//! });
//! let mut rng = StdRng::seed_from_u64(7);
//! let scanned = analyzer.analyze_image("data:image/jpeg;base64,...", &mut rng).await;
//! assert!(scanned.calories > 0);
//! # }
//! ```

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::config::PacingConfig;
use crate::models::ScannedFood;

/// Simulated vision backend for the food scanner
pub struct VisionAnalyzer {
    scan_delay: Duration,
    guesses: Vec<ScannedFood>,
}

impl VisionAnalyzer {
    /// Create an analyzer with the canned guess pool
    #[must_use]
    pub fn new(config: &PacingConfig) -> Self {
        let guesses = vec![
            guess("Chicken Biryani", 450, 25.0, 50.0, 15.0, "1 Plate (300g)"),
            guess("Roti & Daal", 340, 14.0, 55.0, 8.0, "1 Bowl + 1 Roti"),
            guess("Chicken Karahi", 420, 35.0, 8.0, 28.0, "1 Serving"),
            guess("Samosa Chat", 350, 6.0, 45.0, 18.0, "1 Plate"),
            guess("Doodh Patti Chai", 150, 4.0, 12.0, 8.0, "1 Cup"),
        ];

        Self {
            scan_delay: Duration::from_millis(config.scan_delay_ms),
            guesses,
        }
    }

    /// The canned guess pool, in draw order
    #[must_use]
    pub fn guesses(&self) -> &[ScannedFood] {
        &self.guesses
    }

    /// Analyze a food photo, returning one plausible dish
    ///
    /// Waits out the configured scan delay before answering so the flow
    /// feels like a real recognition call. `image_ref` (a data URL or
    /// any opaque handle) is echoed back as the preview.
    pub async fn analyze_image<R: Rng + ?Sized>(
        &self,
        image_ref: &str,
        rng: &mut R,
    ) -> ScannedFood {
        tokio::time::sleep(self.scan_delay).await;

        let pick = rng.gen_range(0..self.guesses.len());
        let mut scanned = self.guesses[pick].clone();
        scanned.image_preview = image_ref.to_owned();

        debug!(dish = %scanned.name, "photo analysis produced a guess");
        scanned
    }
}

impl Default for VisionAnalyzer {
    fn default() -> Self {
        Self::new(&PacingConfig::default())
    }
}

fn guess(name: &str, calories: u32, protein: f64, carbs: f64, fats: f64, serving: &str) -> ScannedFood {
    ScannedFood {
        name: name.to_owned(),
        calories,
        protein,
        carbs,
        fats,
        serving: serving.to_owned(),
        image_preview: String::new(),
    }
}
