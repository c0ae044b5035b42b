// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and sensor package fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `training_tracker`

use std::env;
use std::sync::Once;
use training_tracker::batch::SensorPackage;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A batch alternating valid packages with the given faulty ones
pub fn mixed_packages(faulty: &[SensorPackage]) -> Vec<SensorPackage> {
    let mut packages = Vec::new();
    for bad in faulty {
        packages.push(SensorPackage::new("RUN", [15000.0, 1.0, 75.0]));
        packages.push(bad.clone());
    }
    packages.push(SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]));
    packages
}

/// `count` valid packages cycling through every kind with varying step counts
pub fn generated_packages(count: usize) -> Vec<SensorPackage> {
    (0..count)
        .map(|index| {
            let actions = 1000.0 + (index % 97) as f64 * 100.0;
            match index % 3 {
                0 => SensorPackage::new("RUN", [actions, 1.0, 75.0]),
                1 => SensorPackage::new("WLK", [actions, 1.5, 70.0, 175.0]),
                _ => SensorPackage::new("SWM", [actions, 1.0, 80.0, 25.0, 40.0]),
            }
        })
        .collect()
}
