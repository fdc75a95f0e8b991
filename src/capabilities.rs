//! Terminal capability detection and profile classification.
//!
//! Detection reads a handful of environment variables once and derives
//! boolean capability flags. The classifier then reduces those flags to one
//! of three ordered [`Profile`]s:
//!
//! | Profile | Selected when |
//! |---|---|
//! | [`Profile::TrueColorUnicode`] | truecolor **and** Unicode are safe |
//! | [`Profile::Ansi256`] | 256 colors are safe |
//! | [`Profile::SafeAscii`] | anything else |
//!
//! Every read is injectable through [`Environment`] and [`Platform`] so
//! detection can be exercised without touching the real process environment.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Value, json};

/// Color scheme hint (`truecolor` / `24bit`).
pub const ENV_COLORTERM: &str = "COLORTERM";
/// Terminal type, e.g. `xterm-256color`.
pub const ENV_TERM: &str = "TERM";
/// Terminal program identity, e.g. `iTerm.app` or `vscode`.
pub const ENV_TERM_PROGRAM: &str = "TERM_PROGRAM";
/// Set by Windows Terminal for every session it hosts.
pub const ENV_WT_SESSION: &str = "WT_SESSION";
/// Locale variables, highest precedence first. The first non-empty one is
/// the effective locale, as POSIX resolves `LC_CTYPE`.
pub const ENV_LOCALE: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];
/// User override: `ascii` forces ASCII glyphs.
pub const ENV_GLYPHS: &str = "ADAPTUI_GLYPHS";
/// Comma-separated terminal programs appended to the modern allowlist.
pub const ENV_MODERN_TERMINALS: &str = "ADAPTUI_MODERN_TERMINALS";

const CAPTURED_VARS: [&str; 9] = [
    ENV_COLORTERM,
    ENV_TERM,
    ENV_TERM_PROGRAM,
    ENV_WT_SESSION,
    ENV_LOCALE[0],
    ENV_LOCALE[1],
    ENV_LOCALE[2],
    ENV_GLYPHS,
    ENV_MODERN_TERMINALS,
];

// ============================================================================
// Environment
// ============================================================================

/// Captured view of the environment variables detection depends on.
///
/// A missing variable and an empty one are indistinguishable: both read as
/// `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the relevant variables from the process environment.
    ///
    /// Variables that are unset or not valid Unicode read as empty.
    pub fn capture() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capture the relevant variables through a custom lookup.
    pub fn from_lookup<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = CAPTURED_VARS
            .iter()
            .filter_map(|&key| get_env(key).map(|value| (key.to_string(), value)))
            .collect();
        Self { vars }
    }

    /// Build an environment from explicit key/value pairs.
    ///
    /// ```
    /// use adaptui::Environment;
    ///
    /// let env = Environment::from_pairs([("COLORTERM", "truecolor")]);
    /// assert_eq!(env.get("COLORTERM"), "truecolor");
    /// assert_eq!(env.get("TERM"), "");
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { vars }
    }

    /// Value of `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.vars.get(key).map(String::as_str).unwrap_or("")
    }

    fn is_present(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }
}

/// Operating system family, as far as rendering rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    /// Platform of the compile target.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

// ============================================================================
// Terminal Allowlist
// ============================================================================

/// Terminal programs with known-good rendering, matched against
/// `TERM_PROGRAM` case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalAllowlist {
    truecolor: Vec<String>,
    modern: Vec<String>,
}

/// Terminal programs known to render 24-bit color.
pub const DEFAULT_TRUECOLOR_TERMINALS: [&str; 2] = ["iTerm.app", "vscode"];
/// Terminal programs known to render Unicode and dim text.
pub const DEFAULT_MODERN_TERMINALS: [&str; 4] = ["vscode", "iTerm.app", "WezTerm", "Hyper"];

impl Default for TerminalAllowlist {
    fn default() -> Self {
        Self {
            truecolor: DEFAULT_TRUECOLOR_TERMINALS.map(String::from).to_vec(),
            modern: DEFAULT_MODERN_TERMINALS.map(String::from).to_vec(),
        }
    }
}

impl TerminalAllowlist {
    /// Defaults extended with the programs listed in `ADAPTUI_MODERN_TERMINALS`.
    pub fn from_env(env: &Environment) -> Self {
        env.get(ENV_MODERN_TERMINALS)
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .fold(Self::default(), |list, name| list.with_modern(name))
    }

    /// Add a program to the truecolor list.
    #[must_use]
    pub fn with_truecolor(mut self, program: impl Into<String>) -> Self {
        self.truecolor.push(program.into());
        self
    }

    /// Add a program to the modern-terminal list.
    #[must_use]
    pub fn with_modern(mut self, program: impl Into<String>) -> Self {
        self.modern.push(program.into());
        self
    }

    pub fn is_truecolor(&self, program: &str) -> bool {
        contains_program(&self.truecolor, program)
    }

    pub fn is_modern(&self, program: &str) -> bool {
        contains_program(&self.modern, program)
    }
}

fn contains_program(list: &[String], program: &str) -> bool {
    !program.is_empty() && list.iter().any(|p| p.eq_ignore_ascii_case(program))
}

// ============================================================================
// Flags, Profile, Snapshot
// ============================================================================

/// Boolean capability flags derived from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilityFlags {
    pub unicode_ok: bool,
    pub truecolor_ok: bool,
    pub color256_ok: bool,
    pub background_ok: bool,
    pub dim_ok: bool,
}

/// Rendering profile, ordered by capability richness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Profile {
    /// ASCII glyphs, basic colors.
    SafeAscii,
    /// 256-color palette.
    Ansi256,
    /// 24-bit color with Unicode glyphs.
    TrueColorUnicode,
}

impl Profile {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SafeAscii => "safe-ascii",
            Self::Ansi256 => "ansi256",
            Self::TrueColorUnicode => "truecolor-unicode",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable result of capability detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySnapshot {
    pub profile: Profile,
    pub flags: CapabilityFlags,
    pub is_windows: bool,
    pub is_mac: bool,
    pub term_program: String,
    pub has_modern_terminal_session: bool,
}

impl CapabilitySnapshot {
    /// Whether glyph lookups should pick the ASCII form.
    pub fn prefers_ascii(&self) -> bool {
        !self.flags.unicode_ok || self.profile == Profile::SafeAscii
    }

    /// Snapshot as JSON, for diagnostics.
    pub fn to_json(&self) -> Value {
        json!({
            "profile": self.profile.as_str(),
            "unicode_ok": self.flags.unicode_ok,
            "truecolor_ok": self.flags.truecolor_ok,
            "color256_ok": self.flags.color256_ok,
            "background_ok": self.flags.background_ok,
            "dim_ok": self.flags.dim_ok,
            "is_windows": self.is_windows,
            "is_mac": self.is_mac,
            "term_program": self.term_program,
            "has_modern_terminal_session": self.has_modern_terminal_session,
        })
    }
}

// ============================================================================
// Detection
// ============================================================================

/// Detect capabilities from the real process environment.
pub fn detect() -> CapabilitySnapshot {
    let env = Environment::capture();
    let allowlist = TerminalAllowlist::from_env(&env);
    detect_from(&env, Platform::current(), &allowlist)
}

/// Detect capabilities from an injected environment and platform.
pub fn detect_from(
    env: &Environment,
    platform: Platform,
    allowlist: &TerminalAllowlist,
) -> CapabilitySnapshot {
    let is_windows = platform == Platform::Windows;
    let is_mac = platform == Platform::MacOs;

    let colorterm = env.get(ENV_COLORTERM).to_ascii_lowercase();
    let term = env.get(ENV_TERM);
    let term_program = env.get(ENV_TERM_PROGRAM);
    let wt_session = env.is_present(ENV_WT_SESSION);
    let modern_program = allowlist.is_modern(term_program);

    let term_256 = term.contains("256color");
    let truecolor_ok = colorterm == "truecolor"
        || colorterm == "24bit"
        || allowlist.is_truecolor(term_program)
        || term_256
        || wt_session;

    let locale = ENV_LOCALE
        .iter()
        .map(|key| env.get(key))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let utf8_locale = locale.contains("utf-8") || locale.contains("utf8");
    let mut unicode_ok = !is_windows || wt_session || modern_program || utf8_locale;
    if env.get(ENV_GLYPHS).eq_ignore_ascii_case("ascii") {
        unicode_ok = false;
    }

    let color256_ok = term_256 || truecolor_ok || wt_session;
    let flags = CapabilityFlags {
        unicode_ok,
        truecolor_ok,
        color256_ok,
        background_ok: truecolor_ok || color256_ok || is_mac,
        dim_ok: !is_windows || wt_session || modern_program,
    };

    CapabilitySnapshot {
        profile: classify(&flags),
        flags,
        is_windows,
        is_mac,
        term_program: term_program.to_string(),
        has_modern_terminal_session: wt_session || modern_program,
    }
}

/// Reduce capability flags to a profile.
///
/// Truecolor alone is not enough for the richest profile: Unicode safety
/// must hold as well, otherwise glyphs would render as garbage.
pub fn classify(flags: &CapabilityFlags) -> Profile {
    if flags.truecolor_ok && flags.unicode_ok {
        Profile::TrueColorUnicode
    } else if flags.color256_ok {
        Profile::Ansi256
    } else {
        Profile::SafeAscii
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)], platform: Platform) -> CapabilitySnapshot {
        let env = Environment::from_pairs(pairs.iter().copied());
        detect_from(&env, platform, &TerminalAllowlist::default())
    }

    fn flags(truecolor_ok: bool, unicode_ok: bool, color256_ok: bool) -> CapabilityFlags {
        CapabilityFlags {
            truecolor_ok,
            unicode_ok,
            color256_ok,
            ..CapabilityFlags::default()
        }
    }

    // =========================================
    // Classifier tests
    // =========================================

    #[test]
    fn test_classify_truecolor_and_unicode_is_richest() {
        assert_eq!(classify(&flags(true, true, false)), Profile::TrueColorUnicode);
        assert_eq!(classify(&flags(true, true, true)), Profile::TrueColorUnicode);
    }

    #[test]
    fn test_classify_truecolor_without_unicode_is_ansi256() {
        assert_eq!(classify(&flags(true, false, true)), Profile::Ansi256);
    }

    #[test]
    fn test_classify_floor_is_safe_ascii() {
        assert_eq!(classify(&flags(false, true, false)), Profile::SafeAscii);
        assert_eq!(classify(&flags(false, false, false)), Profile::SafeAscii);
        let rich_otherwise = CapabilityFlags {
            unicode_ok: true,
            background_ok: true,
            dim_ok: true,
            ..CapabilityFlags::default()
        };
        assert_eq!(classify(&rich_otherwise), Profile::SafeAscii);
    }

    #[test]
    fn test_profile_ordering() {
        assert!(Profile::SafeAscii < Profile::Ansi256);
        assert!(Profile::Ansi256 < Profile::TrueColorUnicode);
        assert_eq!(Profile::Ansi256.to_string(), "ansi256");
    }

    // =========================================
    // Detection tests
    // =========================================

    #[test]
    fn test_bare_windows_console_is_safe_ascii() {
        let caps = snapshot(&[], Platform::Windows);
        assert_eq!(caps.profile, Profile::SafeAscii);
        assert!(!caps.flags.unicode_ok);
        assert!(!caps.flags.dim_ok);
        assert!(!caps.flags.background_ok);
        assert!(caps.prefers_ascii());
    }

    #[test]
    fn test_linux_truecolor_utf8_is_richest() {
        let caps = snapshot(
            &[("COLORTERM", "truecolor"), ("LANG", "en_US.UTF-8")],
            Platform::Other,
        );
        assert_eq!(caps.profile, Profile::TrueColorUnicode);
        assert!(caps.flags.color256_ok);
        assert!(caps.flags.background_ok);
        assert!(!caps.prefers_ascii());
    }

    #[test]
    fn test_colorterm_24bit_case_insensitive() {
        let caps = snapshot(&[("COLORTERM", "24BIT")], Platform::Other);
        assert!(caps.flags.truecolor_ok);
    }

    #[test]
    fn test_term_256color_implies_truecolor_and_256() {
        let caps = snapshot(&[("TERM", "xterm-256color")], Platform::Other);
        assert!(caps.flags.truecolor_ok);
        assert!(caps.flags.color256_ok);
        assert_eq!(caps.profile, Profile::TrueColorUnicode);
    }

    #[test]
    fn test_windows_terminal_marker_enables_everything() {
        let caps = snapshot(&[("WT_SESSION", "0b6c-guid")], Platform::Windows);
        assert!(caps.flags.truecolor_ok);
        assert!(caps.flags.unicode_ok);
        assert!(caps.flags.color256_ok);
        assert!(caps.flags.dim_ok);
        assert!(caps.has_modern_terminal_session);
        assert_eq!(caps.profile, Profile::TrueColorUnicode);
    }

    #[test]
    fn test_windows_truecolor_without_unicode_is_ansi256() {
        let caps = snapshot(&[("COLORTERM", "truecolor")], Platform::Windows);
        assert!(caps.flags.truecolor_ok);
        assert!(!caps.flags.unicode_ok);
        assert_eq!(caps.profile, Profile::Ansi256);
        assert!(caps.prefers_ascii());
    }

    #[test]
    fn test_windows_utf8_locale_enables_unicode_only() {
        let caps = snapshot(&[("LC_ALL", "C.utf8")], Platform::Windows);
        assert!(caps.flags.unicode_ok);
        assert!(!caps.flags.dim_ok);
        assert_eq!(caps.profile, Profile::SafeAscii);
    }

    #[test]
    fn test_effective_locale_follows_precedence() {
        let cases: &[(&[(&str, &str)], bool)] = &[
            (&[("LC_ALL", "C"), ("LANG", "en_US.UTF-8")], false),
            (&[("LC_CTYPE", "POSIX"), ("LANG", "en_US.UTF-8")], false),
            (&[("LC_ALL", ""), ("LC_CTYPE", "de_DE.UTF-8")], true),
            (&[("LC_CTYPE", "C.UTF-8"), ("LANG", "C")], true),
            (&[("LANG", "ja_JP.utf8")], true),
        ];
        for (pairs, expected) in cases {
            let caps = snapshot(pairs, Platform::Windows);
            assert_eq!(caps.flags.unicode_ok, *expected, "locale env {:?}", pairs);
        }
    }

    #[test]
    fn test_modern_term_program_on_windows() {
        let caps = snapshot(&[("TERM_PROGRAM", "vscode")], Platform::Windows);
        assert!(caps.flags.truecolor_ok);
        assert!(caps.flags.unicode_ok);
        assert!(caps.flags.dim_ok);
        assert!(caps.has_modern_terminal_session);
        assert_eq!(caps.term_program, "vscode");
        assert_eq!(caps.profile, Profile::TrueColorUnicode);
    }

    #[test]
    fn test_macos_gets_background_without_color() {
        let caps = snapshot(&[("TERM", "xterm")], Platform::MacOs);
        assert!(caps.is_mac);
        assert!(caps.flags.background_ok);
        assert!(!caps.flags.truecolor_ok);
        assert_eq!(caps.profile, Profile::SafeAscii);
    }

    #[test]
    fn test_empty_values_are_absent_signals() {
        let caps = snapshot(
            &[("WT_SESSION", ""), ("COLORTERM", ""), ("TERM_PROGRAM", "")],
            Platform::Windows,
        );
        assert_eq!(caps.profile, Profile::SafeAscii);
        assert!(!caps.has_modern_terminal_session);
    }

    #[test]
    fn test_glyph_override_forces_ascii() {
        let caps = snapshot(
            &[("COLORTERM", "truecolor"), ("ADAPTUI_GLYPHS", "ASCII")],
            Platform::Other,
        );
        assert!(!caps.flags.unicode_ok);
        assert_eq!(caps.profile, Profile::Ansi256);
    }

    #[test]
    fn test_unknown_glyph_override_is_ignored() {
        let caps = snapshot(&[("ADAPTUI_GLYPHS", "sparkly")], Platform::Other);
        assert!(caps.flags.unicode_ok);
    }

    // =========================================
    // Allowlist tests
    // =========================================

    #[test]
    fn test_allowlist_defaults() {
        let list = TerminalAllowlist::default();
        assert!(list.is_truecolor("iTerm.app"));
        assert!(list.is_truecolor("VSCODE"));
        assert!(!list.is_truecolor("WezTerm"));
        assert!(list.is_modern("WezTerm"));
        assert!(!list.is_modern("Apple_Terminal"));
        assert!(!list.is_modern(""));
    }

    #[test]
    fn test_allowlist_extension_from_env() {
        let env = Environment::from_pairs([
            ("ADAPTUI_MODERN_TERMINALS", "ghostty, kitty ,"),
            ("TERM_PROGRAM", "ghostty"),
        ]);
        let list = TerminalAllowlist::from_env(&env);
        assert!(list.is_modern("ghostty"));
        assert!(list.is_modern("kitty"));
        assert!(list.is_modern("vscode"));

        let caps = detect_from(&env, Platform::Windows, &list);
        assert!(caps.flags.unicode_ok);
        assert!(caps.flags.dim_ok);
    }

    #[test]
    fn test_allowlist_builder() {
        let list = TerminalAllowlist::default().with_truecolor("Tabby");
        let env = Environment::from_pairs([("TERM_PROGRAM", "Tabby")]);
        let caps = detect_from(&env, Platform::Other, &list);
        assert!(caps.flags.truecolor_ok);
    }

    // =========================================
    // Environment tests
    // =========================================

    #[test]
    fn test_environment_lookup_only_captures_known_vars() {
        let env = Environment::from_lookup(|key| Some(format!("v-{key}")));
        assert_eq!(env.get("TERM"), "v-TERM");
        assert_eq!(env.get("HOME"), "");
    }

    #[test]
    fn test_detect_does_not_panic() {
        let caps = detect();
        assert_eq!(caps.profile, classify(&caps.flags));
    }

    #[test]
    fn test_snapshot_json() {
        let caps = snapshot(&[("TERM_PROGRAM", "WezTerm")], Platform::Other);
        let value = caps.to_json();
        assert_eq!(value["profile"], "safe-ascii");
        assert_eq!(value["term_program"], "WezTerm");
        assert_eq!(value["has_modern_terminal_session"], true);
        assert_eq!(value["is_windows"], false);
    }
}
