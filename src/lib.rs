//! Adaptive terminal rendering for heterogeneous terminals.
//!
//! adaptui classifies the running terminal once into one of three rendering
//! profiles and resolves every abstract UI symbol and color against it, so
//! callers never branch on terminal type. It handles:
//!
//! - Capability detection from environment signals (`COLORTERM`, `TERM`,
//!   `TERM_PROGRAM`, `WT_SESSION`, locale)
//! - Profile classification (`SafeAscii < Ansi256 < TrueColorUnicode`)
//! - Glyph resolution with ASCII fallbacks (icons, borders, checkboxes,
//!   progress bars)
//! - Theme palettes and profile-aware painting
//!
//! Nothing here fails: unknown icons, roles, and themes degrade to defined
//! fallbacks and are reported through the diagnostics sink.
//!
//! # Modules
//!
//! - [`mod@capabilities`] - Environment capture, detection, and classification
//! - [`cache`] - Compute-once capability snapshot
//! - [`glyphs`] - Icon registry and resolver
//! - [`theme`] - Theme registry and painting
//! - [`mod@format`] - Pure formatting functions built on glyphs and themes
//! - [`skin`] - Themed markdown rendering
//! - [`logging`] - Diagnostic sink infrastructure

pub mod cache;
pub mod capabilities;
pub mod format;
pub mod glyphs;
pub mod logging;
pub mod skin;
pub mod theme;

// Re-export commonly used types
pub use cache::{CapabilityCache, capabilities, process_cache};
pub use capabilities::{
    CapabilityFlags, CapabilitySnapshot, Environment, Platform, Profile, TerminalAllowlist,
    classify, detect, detect_from,
};
pub use format::{
    format_box, format_checklist, format_progress_line, format_role_header, format_status_line,
};
pub use glyphs::{
    CheckboxState, DEFAULT_PROGRESS_WIDTH, Glyphs, Icon, IconDefinition, SENTINEL, border,
    checkbox, progress_bar, resolve, role_icon, status_icon,
};
pub use logging::{
    DiagnosticEvent, DiagnosticSink, disable_diagnostics, enable_diagnostics,
    get_diagnostic_sink, is_diagnostics_enabled, log_diagnostic, reset_diagnostic_sink,
    set_diagnostic_sink,
};
pub use skin::{detect_terminal_width, render_markdown, themed_skin};
pub use theme::{
    ColorRole, DEFAULT_THEME_ID, Palette, Rgb, Theme, ThemeSummary, default_theme, get_theme,
    list_themes,
};
