//! Themed markdown rendering.
//!
//! Builds a termimad [`MadSkin`] from a [`Theme`] and the capability
//! snapshot, so streamed markdown follows the same palette and glyph rules
//! as the rest of the UI.

use termimad::crossterm::style::Color;
use termimad::{Alignment, FmtText, MadSkin, StyledChar, ansi, rgb};

use crate::capabilities::{CapabilitySnapshot, Profile};
use crate::glyphs::{Glyphs, Icon};
use crate::theme::{ColorRole, Theme};

/// Default width when terminal size cannot be detected (e.g., piped output).
const DEFAULT_WIDTH: usize = 120;

/// Detect the current terminal width, falling back to [`DEFAULT_WIDTH`].
pub fn detect_terminal_width() -> usize {
    let (width, _) = termimad::terminal_size();
    let width = width as usize;
    if width == 0 { DEFAULT_WIDTH } else { width }
}

/// Color for `role` at the given profile; `None` means leave uncolored.
fn skin_color(theme: &Theme, role: ColorRole, profile: Profile) -> Option<Color> {
    let c = theme.color(role);
    match profile {
        Profile::TrueColorUnicode => Some(rgb(c.r, c.g, c.b)),
        Profile::Ansi256 => Some(ansi(c.to_ansi256())),
        Profile::SafeAscii => None,
    }
}

/// Skin for `theme` adapted to `caps`.
///
/// - TrueColorUnicode: 24-bit palette colors.
/// - Ansi256: nearest 256-color palette entries.
/// - SafeAscii: termimad's unstyled skin.
///
/// Code backgrounds are only set where background colors render, and the
/// skin is limited to ASCII whenever glyphs resolve to ASCII.
pub fn themed_skin(theme: &Theme, caps: &CapabilitySnapshot) -> MadSkin {
    let profile = caps.profile;
    let mut skin = match profile {
        Profile::SafeAscii => MadSkin::no_style(),
        _ => MadSkin::default(),
    };
    for h in &mut skin.headers {
        h.align = Alignment::Left;
    }

    let color = |role| skin_color(theme, role, profile);
    if let Some(primary) = color(ColorRole::Primary) {
        skin.set_headers_fg(primary);
    }
    if let Some(text) = color(ColorRole::Text) {
        skin.paragraph.set_fg(text);
    }
    if let Some(accent) = color(ColorRole::Accent) {
        skin.bold.set_fg(accent);
    }
    if let Some(secondary) = color(ColorRole::Secondary) {
        skin.italic.set_fg(secondary);
    }
    if let Some(success) = color(ColorRole::Success) {
        skin.inline_code.set_fg(success);
        skin.code_block.set_fg(success);
    }
    if caps.flags.background_ok {
        if let Some(bg) = color(ColorRole::Background) {
            skin.inline_code.set_bg(bg);
            skin.code_block.set_bg(bg);
        }
    }

    let glyphs = Glyphs::new(caps);
    if caps.prefers_ascii() {
        skin.limit_to_ascii();
    } else if let Some(bullet) = glyphs.icon(Icon::Bullet, false).chars().next() {
        let bullet_color = color(ColorRole::Accent).unwrap_or(Color::Reset);
        skin.bullet = StyledChar::from_fg_char(bullet_color, bullet);
    }
    skin
}

/// Render text with markdown formatting, wrapped to `width` columns.
pub fn render_markdown(skin: &MadSkin, text: &str, width: usize) -> String {
    FmtText::from(skin, text, Some(width)).to_string()
}

// ============================================================================
// Tests
// ============================================================================
