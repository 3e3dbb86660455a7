// ABOUTME: External analysis stubs (food photo recognition)
// ABOUTME: Simulated vision backend with realistic latency, no network calls

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitCal Labs

//! External Analysis Stubs
//!
//! This module contains the simulated vision backend used by the food
//! scanner until a real recognition API is wired in.

pub mod vision;

// Re-export commonly used types
pub use vision::VisionAnalyzer;
