//! Diagnostics for capability detection and soft degradation.
//!
//! Nothing in this crate fails loudly. Instead, noteworthy decisions (the
//! detected profile) and degradations (unknown icon keys, unknown theme ids)
//! are reported as [`DiagnosticEvent`]s to an application-provided sink.
//! Without a sink, events are dropped.
//!
//! # Usage
//!
//! ```no_run
//! use adaptui::{DiagnosticEvent, DiagnosticSink, set_diagnostic_sink};
//! use std::sync::Arc;
//!
//! struct StderrSink;
//!
//! impl DiagnosticSink for StderrSink {
//!     fn emit(&self, event: DiagnosticEvent, detail: &str) {
//!         eprintln!("[{}] {}", event, detail);
//!     }
//! }
//!
//! set_diagnostic_sink(Arc::new(StderrSink));
//!
//! // The first capability query reports the detected profile.
//! let _ = adaptui::capabilities();
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Kinds of diagnostic events emitted by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// The capability cache was populated. Detail is the snapshot as JSON.
    ProfileDetected,
    /// An icon key had no registry entry and resolved to the sentinel.
    UnknownIcon,
    /// A theme id had no registry entry and resolved to the default theme.
    UnknownTheme,
}

impl DiagnosticEvent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProfileDetected => "profile-detected",
            Self::UnknownIcon => "unknown-icon",
            Self::UnknownTheme => "unknown-theme",
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opt-out switch. Defaults to false (diagnostics enabled).
static DIAGNOSTICS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Stop forwarding diagnostics to the sink.
pub fn disable_diagnostics() {
    DIAGNOSTICS_DISABLED.store(true, Ordering::SeqCst);
}

/// Resume forwarding diagnostics after [`disable_diagnostics`].
pub fn enable_diagnostics() {
    DIAGNOSTICS_DISABLED.store(false, Ordering::SeqCst);
}

/// Returns true unless explicitly disabled via [`disable_diagnostics`].
pub fn is_diagnostics_enabled() -> bool {
    !DIAGNOSTICS_DISABLED.load(Ordering::SeqCst)
}

/// Receiver for diagnostic events.
///
/// Implementations must be cheap: events are emitted synchronously from
/// lookup paths.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: DiagnosticEvent, detail: &str);
}

static DIAGNOSTIC_SINK: RwLock<Option<Arc<dyn DiagnosticSink>>> = RwLock::new(None);

/// Install the global diagnostic sink, replacing any previous one.
pub fn set_diagnostic_sink(sink: Arc<dyn DiagnosticSink>) {
    if let Ok(mut guard) = DIAGNOSTIC_SINK.write() {
        *guard = Some(sink);
    }
}

/// Get the current diagnostic sink, if any.
pub fn get_diagnostic_sink() -> Option<Arc<dyn DiagnosticSink>> {
    DIAGNOSTIC_SINK.read().ok().and_then(|guard| guard.clone())
}

/// Remove the installed sink.
pub fn reset_diagnostic_sink() {
    if let Ok(mut guard) = DIAGNOSTIC_SINK.write() {
        *guard = None;
    }
}

/// Forward an event to the installed sink. No-op without a sink.
pub fn log_diagnostic(event: DiagnosticEvent, detail: &str) {
    if !is_diagnostics_enabled() {
        return;
    }
    if let Some(sink) = get_diagnostic_sink() {
        sink.emit(event, detail);
    }
}
