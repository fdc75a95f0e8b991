//! Pure formatting functions built on glyphs and themes.
//!
//! Every function takes a [`Glyphs`] resolver (and a [`Theme`] where color
//! is involved) so output adapts to the terminal without the caller
//! branching on the profile.
//!
//! # Categories
//!
//! ## Line Formatters
//! - [`format_role_header`] - Speaker line (`❯ You`)
//! - [`format_status_line`] - Status marker plus message (`✔ Build passed`)
//! - [`format_progress_line`] - Label, bar and percentage
//!
//! ## Block Formatters
//! - [`format_box`] - Bordered box with an embedded title
//! - [`format_checklist`] - One checkbox row per item

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::glyphs::{CheckboxState, Glyphs, Icon, filled_cells};
use crate::theme::{ColorRole, Theme};

// ============================================================================
// Line Formatters
// ============================================================================

/// Format a speaker line: role icon followed by the label, in the primary
/// color. Unknown roles get the `info` icon.
pub fn format_role_header(glyphs: &Glyphs<'_>, theme: &Theme, role: &str, label: &str) -> String {
    let caps = glyphs.capabilities();
    let line = format!("{} {}", glyphs.role_icon(role), label);
    theme.paint(ColorRole::Primary, &line, caps).bold().to_string()
}

/// Format a status line: status icon colored by severity, then the message.
///
/// # Example
///
/// ```
/// use adaptui::{CapabilityCache, Environment, Platform, format_status_line, get_theme};
///
/// colored::control::set_override(false);
/// let cache = CapabilityCache::from_environment(&Environment::default(), Platform::Windows);
/// let line = format_status_line(&cache.glyphs(), get_theme("nord"), "success", "Build passed");
/// assert_eq!(line, "+ Build passed");
/// colored::control::unset_override();
/// ```
pub fn format_status_line(
    glyphs: &Glyphs<'_>,
    theme: &Theme,
    status: &str,
    message: &str,
) -> String {
    let role = match status {
        "success" | "done" => ColorRole::Success,
        "error" => ColorRole::Error,
        "warning" => ColorRole::Warning,
        "pending" | "thinking" => ColorRole::Muted,
        _ => ColorRole::Accent,
    };
    let icon = theme.paint(role, glyphs.status_icon(status), glyphs.capabilities());
    format!("{icon} {message}")
}

/// Format a progress line like `Indexing #####----- 50%`.
///
/// Progress is clamped to `[0, 1]` exactly as [`Glyphs::progress_bar`] does,
/// so the percentage always matches the bar.
pub fn format_progress_line(glyphs: &Glyphs<'_>, label: &str, progress: f64, width: usize) -> String {
    let percent = filled_cells(progress, 100);
    format!("{} {} {}%", label, glyphs.progress_bar(progress, width), percent)
}

// ============================================================================
// Block Formatters
// ============================================================================

/// Minimum box width: two corners plus one edge cell.
const MIN_BOX_WIDTH: usize = 3;

/// Format a bordered box `width` columns wide.
///
/// The title (if non-empty) is embedded in the top edge. Content lines are
/// padded to the inner width; longer lines are truncated with the `thinking`
/// glyph as an ellipsis. Output has no trailing newline.
///
/// # Example
///
/// ```
/// use adaptui::{CapabilityCache, Environment, Platform, format_box};
///
/// let cache = CapabilityCache::from_environment(&Environment::default(), Platform::Windows);
/// let boxed = format_box(&cache.glyphs(), "Hi", &["there"], 11);
/// assert_eq!(boxed, "+ Hi -----+\n|there    |\n+---------+");
/// ```
pub fn format_box(glyphs: &Glyphs<'_>, title: &str, lines: &[&str], width: usize) -> String {
    let width = width.max(MIN_BOX_WIDTH);
    let inner = width - 2;
    let h = glyphs.border("h");
    let v = glyphs.border("v");

    let mut top = String::from(glyphs.border("tl"));
    let title = if title.is_empty() || inner < 4 {
        String::new()
    } else {
        format!(" {} ", fit(glyphs, title, inner.saturating_sub(2)))
    };
    let title_cells = title.width().min(inner);
    top.push_str(&title);
    top.push_str(&h.repeat(inner - title_cells));
    top.push_str(glyphs.border("tr"));

    let mut out = vec![top];
    for line in lines {
        let body = fit(glyphs, line, inner);
        let pad = inner.saturating_sub(body.width());
        out.push(format!("{v}{body}{}{v}", " ".repeat(pad)));
    }
    out.push(format!(
        "{}{}{}",
        glyphs.border("bl"),
        h.repeat(inner),
        glyphs.border("br")
    ));
    out.join("\n")
}

/// Truncate `text` to at most `max` display cells, marking the cut with the
/// `thinking` glyph when it fits.
fn fit(glyphs: &Glyphs<'_>, text: &str, max: usize) -> String {
    let text = text.replace('\n', " ");
    if text.width() <= max {
        return text;
    }
    let ellipsis = glyphs.icon(Icon::Thinking, false);
    let ellipsis_cells = ellipsis.width();
    if max <= ellipsis_cells {
        return take_cells(&text, max);
    }
    format!("{}{ellipsis}", take_cells(&text, max - ellipsis_cells))
}

/// Longest prefix of `text` occupying at most `max` cells. A wide character
/// that would straddle the limit is dropped whole.
fn take_cells(text: &str, max: usize) -> String {
    let mut used = 0;
    let mut kept = String::new();
    for c in text.chars() {
        let cells = c.width().unwrap_or(0);
        if used + cells > max {
            break;
        }
        used += cells;
        kept.push(c);
    }
    kept
}

/// Format a checklist, one `<checkbox> <label>` row per item.
///
/// Rows are joined with `\n`; no trailing newline.
pub fn format_checklist<S>(glyphs: &Glyphs<'_>, items: &[(&str, S)]) -> String
where
    S: Into<CheckboxState> + Copy,
{
    items
        .iter()
        .map(|(label, state)| format!("{} {}", glyphs.checkbox(*state), label))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================
