//! Compute-once capability cache.
//!
//! Re-detecting capabilities mid-session would let borders and icons change
//! shape while the UI is live, so a [`CapabilityCache`] detects at most once
//! and hands out the same snapshot forever after. The UI context can own its
//! own cache; [`capabilities`] reads a process-wide one.

use std::sync::OnceLock;

use crate::capabilities::{
    CapabilitySnapshot, Environment, Platform, TerminalAllowlist, detect, detect_from,
};
use crate::glyphs::Glyphs;
use crate::logging::{DiagnosticEvent, log_diagnostic};

/// Lazily populated, write-once capability snapshot.
///
/// # Example
///
/// ```
/// use adaptui::{CapabilityCache, Environment, Platform, Profile};
///
/// let env = Environment::from_pairs([("COLORTERM", "truecolor"), ("LANG", "en_US.UTF-8")]);
/// let cache = CapabilityCache::from_environment(&env, Platform::Other);
/// assert_eq!(cache.get().profile, Profile::TrueColorUnicode);
/// assert_eq!(cache.glyphs().border("h"), "─");
/// ```
#[derive(Debug, Default)]
pub struct CapabilityCache {
    snapshot: OnceLock<CapabilitySnapshot>,
}

impl CapabilityCache {
    /// Empty cache; the first [`get`](Self::get) detects from the process
    /// environment.
    pub const fn new() -> Self {
        Self {
            snapshot: OnceLock::new(),
        }
    }

    /// Cache pre-populated with `snapshot`. Nothing is ever detected.
    pub fn with_snapshot(snapshot: CapabilitySnapshot) -> Self {
        Self {
            snapshot: OnceLock::from(snapshot),
        }
    }

    /// Cache populated from injected environment values instead of the real
    /// process environment.
    pub fn from_environment(env: &Environment, platform: Platform) -> Self {
        let allowlist = TerminalAllowlist::from_env(env);
        Self::with_snapshot(detect_from(env, platform, &allowlist))
    }

    /// The cached snapshot, detecting it on first access.
    ///
    /// Concurrent first calls race safely: exactly one detection runs and all
    /// callers observe its result. The `profile-detected` diagnostic is sent
    /// after the cell is populated, so a sink may read this cache from `emit`.
    pub fn get(&self) -> &CapabilitySnapshot {
        let mut detected = false;
        let snapshot = self.snapshot.get_or_init(|| {
            detected = true;
            detect()
        });
        if detected {
            log_diagnostic(
                DiagnosticEvent::ProfileDetected,
                &snapshot.to_json().to_string(),
            );
        }
        snapshot
    }

    pub fn is_initialized(&self) -> bool {
        self.snapshot.get().is_some()
    }

    /// Glyph resolver bound to the cached snapshot.
    pub fn glyphs(&self) -> Glyphs<'_> {
        Glyphs::new(self.get())
    }

    /// Drop the cached snapshot so the next access detects again.
    ///
    /// Requires exclusive access: a cache shared with live readers cannot be
    /// reset underneath them.
    pub fn reset(&mut self) {
        self.snapshot = OnceLock::new();
    }

    /// Replace the cached snapshot.
    pub fn override_with(&mut self, snapshot: CapabilitySnapshot) {
        self.snapshot = OnceLock::from(snapshot);
    }
}

static PROCESS_CACHE: CapabilityCache = CapabilityCache::new();

/// Process-wide capability snapshot, detected on first call.
pub fn capabilities() -> &'static CapabilitySnapshot {
    PROCESS_CACHE.get()
}

/// Process-wide cache, for callers that want to pass it around.
pub fn process_cache() -> &'static CapabilityCache {
    &PROCESS_CACHE
}
