// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups energy, sleep, and identity constants into focused submodules

//! Constants module
//!
//! This module organizes engine constants by domain for better maintainability.
//! Constants are grouped into logical domains rather than being in a single large file.

// Domain-specific modules
pub mod units;

// Re-export commonly used items for easier access
pub use units::*;

/// Service identity used in structured logging
pub mod service_names {
    /// FitCal core engine
    pub const FITCAL_CORE: &str = "fitcal-core";
}

/// Energy accounting constants
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;

    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;

    /// Share of daily calories assigned to protein
    pub const PROTEIN_SHARE: f64 = 0.30;

    /// Share of daily calories assigned to carbohydrates
    pub const CARBS_SHARE: f64 = 0.40;

    /// Share of daily calories assigned to fat
    pub const FAT_SHARE: f64 = 0.30;

    /// Daily calorie deficit applied for a weight-loss goal
    pub const LOSE_OFFSET_KCAL: i32 = -500;

    /// Daily calorie surplus applied for a weight-gain goal
    pub const GAIN_OFFSET_KCAL: i32 = 500;

    /// Flat calorie estimate for a recipe ingredient the catalog does not know
    pub const UNKNOWN_INGREDIENT_KCAL: u32 = 50;

    /// Grams of protein per serving above which a food counts as high-protein
    pub const HIGH_PROTEIN_THRESHOLD_G: f64 = 5.0;
}

/// Sleep tracking constants
pub mod sleep {
    /// Recommended nightly sleep in hours
    pub const RECOMMENDED_HOURS: f64 = 8.0;

    /// Upper bound of trackable nightly sleep in hours
    pub const MAX_TRACKED_HOURS: f64 = 12.0;

    /// Granularity of logged sleep durations in hours
    pub const SLIDER_STEP_HOURS: f64 = 0.5;
}
