//! Glyph registry and profile-aware resolution.
//!
//! Every abstract UI symbol (role icons, status markers, box-drawing pieces,
//! checkboxes, progress segments) is an [`Icon`] with a Unicode form and an
//! ASCII form. [`Glyphs`] picks one based on the capability snapshot.
//!
//! Lookups never fail: an unknown name resolves to [`SENTINEL`], and role or
//! status lookups degrade further to the `info` icon.

use crate::cache::capabilities;
use crate::capabilities::CapabilitySnapshot;
use crate::logging::{DiagnosticEvent, log_diagnostic};

/// Glyph returned for names with no registry entry.
pub const SENTINEL: &str = "?";

/// Default number of cells in a progress bar.
pub const DEFAULT_PROGRESS_WIDTH: usize = 10;

// ============================================================================
// Registry
// ============================================================================

/// A registry entry: symbolic name plus both renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDefinition {
    pub name: &'static str,
    pub unicode: &'static str,
    pub ascii: &'static str,
}

macro_rules! icons {
    ($($variant:ident => $name:literal, $unicode:literal, $ascii:literal;)+) => {
        /// Every symbol the UI can draw.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Icon {
            $($variant,)+
        }

        impl Icon {
            /// All icons, in declaration order.
            pub const ALL: &'static [Icon] = &[$(Icon::$variant,)+];

            /// Look up an icon by its symbolic name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub const fn definition(self) -> IconDefinition {
                match self {
                    $(Self::$variant => IconDefinition {
                        name: $name,
                        unicode: $unicode,
                        ascii: $ascii,
                    },)+
                }
            }
        }
    };
}

icons! {
    // Roles
    User => "user", "❯", ">";
    Assistant => "assistant", "◆", "*";
    System => "system", "⚙", "#";
    Tool => "tool", "⚒", "%";
    // Status
    Info => "info", "ℹ", "i";
    Success => "success", "✔", "+";
    Error => "error", "✖", "x";
    Warning => "warning", "⚠", "!";
    Pending => "pending", "○", "o";
    Running => "running", "◐", "~";
    Done => "done", "●", "@";
    Thinking => "thinking", "…", "...";
    // Decoration
    Arrow => "arrow", "→", "->";
    Bullet => "bullet", "•", "-";
    // Borders
    BorderH => "border_h", "─", "-";
    BorderV => "border_v", "│", "|";
    BorderTl => "border_tl", "┌", "+";
    BorderTr => "border_tr", "┐", "+";
    BorderBl => "border_bl", "└", "+";
    BorderBr => "border_br", "┘", "+";
    BorderLt => "border_lt", "├", "+";
    BorderRt => "border_rt", "┤", "+";
    // Checkboxes
    CheckboxChecked => "checkbox_checked", "☑", "[x]";
    CheckboxEmpty => "checkbox_empty", "☐", "[ ]";
    CheckboxCurrent => "checkbox_current", "▶", "[>]";
    // Progress
    ProgressFill => "progress_fill", "█", "#";
    ProgressEmpty => "progress_empty", "░", "-";
}

impl Icon {
    pub const fn name(self) -> &'static str {
        self.definition().name
    }
}

// ============================================================================
// Checkbox State
// ============================================================================

/// Closed tri-state for checklist rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckboxState {
    #[default]
    Empty,
    Checked,
    /// The row currently being worked on.
    Current,
}

impl CheckboxState {
    pub const fn icon(self) -> Icon {
        match self {
            Self::Empty => Icon::CheckboxEmpty,
            Self::Checked => Icon::CheckboxChecked,
            Self::Current => Icon::CheckboxCurrent,
        }
    }
}

impl From<bool> for CheckboxState {
    fn from(checked: bool) -> Self {
        if checked { Self::Checked } else { Self::Empty }
    }
}

impl From<Option<bool>> for CheckboxState {
    fn from(checked: Option<bool>) -> Self {
        checked.map(Self::from).unwrap_or_default()
    }
}

impl From<&str> for CheckboxState {
    fn from(state: &str) -> Self {
        match state {
            "current" => Self::Current,
            "checked" => Self::Checked,
            _ => Self::Empty,
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolves icons against a capability snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs<'a> {
    caps: &'a CapabilitySnapshot,
}

impl<'a> Glyphs<'a> {
    pub fn new(caps: &'a CapabilitySnapshot) -> Self {
        Self { caps }
    }

    pub fn capabilities(&self) -> &'a CapabilitySnapshot {
        self.caps
    }

    /// Render `icon`, using the ASCII form when forced or when the terminal
    /// cannot be trusted with Unicode.
    pub fn icon(&self, icon: Icon, force_ascii: bool) -> &'static str {
        let def = icon.definition();
        if force_ascii || self.caps.prefers_ascii() {
            def.ascii
        } else {
            def.unicode
        }
    }

    /// Resolve a glyph by name. Unknown names yield [`SENTINEL`].
    ///
    /// ```
    /// use adaptui::{CapabilityCache, Environment, Platform};
    ///
    /// let cache = CapabilityCache::from_environment(&Environment::default(), Platform::Windows);
    /// let glyphs = cache.glyphs();
    /// assert_eq!(glyphs.resolve("success", false), "+");
    /// assert_eq!(glyphs.resolve("no_such_icon", false), "?");
    /// ```
    pub fn resolve(&self, name: &str, force_ascii: bool) -> &'static str {
        match Icon::from_name(name) {
            Some(icon) => self.icon(icon, force_ascii),
            None => {
                log_diagnostic(DiagnosticEvent::UnknownIcon, name);
                SENTINEL
            }
        }
    }

    /// Border piece: tries `border_<name>`, then `name` itself.
    pub fn border(&self, name: &str) -> &'static str {
        match Icon::from_name(&format!("border_{name}")) {
            Some(icon) => self.icon(icon, false),
            None => self.resolve(name, false),
        }
    }

    /// Icon for a conversation role. Unknown roles get the `info` icon.
    pub fn role_icon(&self, role: &str) -> &'static str {
        self.icon(Icon::from_name(role).unwrap_or(Icon::Info), false)
    }

    /// Icon for a status key. Unknown statuses get the `info` icon.
    pub fn status_icon(&self, status: &str) -> &'static str {
        self.icon(Icon::from_name(status).unwrap_or(Icon::Info), false)
    }

    pub fn checkbox(&self, state: impl Into<CheckboxState>) -> &'static str {
        self.icon(state.into().icon(), false)
    }

    /// Progress bar of exactly `width` cells.
    ///
    /// `progress` is clamped to `[0, 1]` and NaN counts as 0, so the bar is
    /// always `width` cells long.
    ///
    /// ```
    /// use adaptui::{CapabilityCache, Environment, Platform};
    ///
    /// let cache = CapabilityCache::from_environment(&Environment::default(), Platform::Windows);
    /// assert_eq!(cache.glyphs().progress_bar(0.5, 10), "#####-----");
    /// ```
    pub fn progress_bar(&self, progress: f64, width: usize) -> String {
        let filled = filled_cells(progress, width);
        let mut bar = self.icon(Icon::ProgressFill, false).repeat(filled);
        bar.push_str(&self.icon(Icon::ProgressEmpty, false).repeat(width - filled));
        bar
    }
}

/// Clamped count of filled cells for a progress bar.
pub(crate) fn filled_cells(progress: f64, width: usize) -> usize {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    ((progress * width as f64).round() as usize).min(width)
}

// ============================================================================
// Process-wide shortcuts
// ============================================================================

/// [`Glyphs::resolve`] against the process-wide capabilities.
pub fn resolve(name: &str, force_ascii: bool) -> &'static str {
    Glyphs::new(capabilities()).resolve(name, force_ascii)
}

/// [`Glyphs::border`] against the process-wide capabilities.
pub fn border(name: &str) -> &'static str {
    Glyphs::new(capabilities()).border(name)
}

/// [`Glyphs::role_icon`] against the process-wide capabilities.
pub fn role_icon(role: &str) -> &'static str {
    Glyphs::new(capabilities()).role_icon(role)
}

/// [`Glyphs::status_icon`] against the process-wide capabilities.
pub fn status_icon(status: &str) -> &'static str {
    Glyphs::new(capabilities()).status_icon(status)
}

/// [`Glyphs::checkbox`] against the process-wide capabilities.
pub fn checkbox(state: impl Into<CheckboxState>) -> &'static str {
    Glyphs::new(capabilities()).checkbox(state)
}

/// [`Glyphs::progress_bar`] against the process-wide capabilities.
pub fn progress_bar(progress: f64, width: usize) -> String {
    Glyphs::new(capabilities()).progress_bar(progress, width)
}

// ============================================================================
// Tests
// ============================================================================
