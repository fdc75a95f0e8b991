//! Shared test helpers for adaptui tests.
//!
//! This module provides common utilities used across test files to reduce
//! duplication and ensure consistent test behavior.

// Allow dead code since not all test files use all helpers
#![allow(dead_code)]

use adaptui::{
    CapabilityCache, CapabilitySnapshot, DiagnosticEvent, DiagnosticSink, Environment, Platform,
};
use std::sync::{Arc, Mutex};

// =============================================================================
// ANSI Stripping
// =============================================================================

/// Strip ANSI escape codes for content verification in tests.
///
/// This allows tests to verify text content without being affected by
/// color codes or other terminal formatting.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip the escape sequence
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we hit a letter (the terminator)
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

// =============================================================================
// RAII Guards
// =============================================================================

static COLOR_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that disables colored output for tests.
///
/// Colors stay disabled until the guard is dropped, even if the test panics.
/// Guards are serialized so two tests never fight over the global override.
///
/// # Example
///
/// ```ignore
/// #[test]
/// fn my_test() {
///     let _guard = DisableColors::new();
///     // ... test code with colors disabled ...
/// } // colors automatically restored here
/// ```
pub struct DisableColors {
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl DisableColors {
    /// Create a new guard that disables colored output.
    pub fn new() -> Self {
        let lock = COLOR_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        colored::control::set_override(false);
        Self { _lock: lock }
    }
}

impl Default for DisableColors {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisableColors {
    fn drop(&mut self) {
        colored::control::unset_override();
    }
}

// =============================================================================
// Capability Builders
// =============================================================================

/// Cache built from explicit environment pairs on the given platform.
pub fn cache_for(pairs: &[(&str, &str)], platform: Platform) -> CapabilityCache {
    let env = Environment::from_pairs(pairs.iter().copied());
    CapabilityCache::from_environment(&env, platform)
}

/// Snapshot built from explicit environment pairs on the given platform.
pub fn snapshot_for(pairs: &[(&str, &str)], platform: Platform) -> CapabilitySnapshot {
    cache_for(pairs, platform).get().clone()
}

/// Legacy PowerShell console: Windows, no signals at all.
pub fn legacy_windows() -> CapabilityCache {
    cache_for(&[], Platform::Windows)
}

/// Modern Linux emulator: truecolor and a UTF-8 locale.
pub fn linux_truecolor() -> CapabilityCache {
    cache_for(
        &[("COLORTERM", "truecolor"), ("LANG", "en_US.UTF-8")],
        Platform::Other,
    )
}

/// Windows console with truecolor but no Unicode signal.
pub fn windows_truecolor_no_unicode() -> CapabilityCache {
    cache_for(&[("COLORTERM", "truecolor")], Platform::Windows)
}

// =============================================================================
// Test Capture Sink
// =============================================================================

/// A test sink that captures all diagnostics for verification.
///
/// # Example
///
/// ```ignore
/// let (sink, captured) = CaptureSink::new();
/// set_diagnostic_sink(Arc::new(sink));
///
/// get_theme("missing");
///
/// let events = captured.lock().unwrap();
/// assert!(events.iter().any(|(_, d)| d == "missing"));
/// ```
pub struct CaptureSink {
    /// The captured events, wrapped in Arc<Mutex> for thread safety.
    pub captured: Arc<Mutex<Vec<(DiagnosticEvent, String)>>>,
}

impl CaptureSink {
    /// Create a new capture sink and return both the sink and a handle
    /// to the captured events.
    pub fn new() -> (Self, Arc<Mutex<Vec<(DiagnosticEvent, String)>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Self {
            captured: captured.clone(),
        };
        (sink, captured)
    }
}

impl DiagnosticSink for CaptureSink {
    fn emit(&self, event: DiagnosticEvent, detail: &str) {
        self.captured
            .lock()
            .unwrap()
            .push((event, detail.to_string()));
    }
}

static SINK_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that installs a diagnostic sink and removes it when dropped.
///
/// Guards are serialized, so a test's sink cannot be replaced mid-test.
pub struct SinkGuard {
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl SinkGuard {
    pub fn install(sink: Arc<dyn DiagnosticSink>) -> Self {
        let lock = SINK_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        adaptui::set_diagnostic_sink(sink);
        adaptui::enable_diagnostics();
        Self { _lock: lock }
    }
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        adaptui::reset_diagnostic_sink();
    }
}
