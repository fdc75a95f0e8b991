//! Theme registry.
//!
//! A [`Theme`] binds ten semantic color roles to RGB values. The registry is
//! a static table; lookups never fail and never mutate anything, unknown ids
//! simply resolve to the default theme.

use std::fmt;

use colored::{Color, Colorize};

use crate::capabilities::CapabilitySnapshot;
use crate::logging::{DiagnosticEvent, log_diagnostic};

/// Id of the theme returned for unknown ids.
pub const DEFAULT_THEME_ID: &str = "dracula";

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(hex: u32) -> Rgb {
    Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

impl Rgb {
    /// Nearest entry in the xterm 256-color palette (cube or gray ramp).
    pub fn to_ansi256(self) -> u8 {
        fn cube_index(v: u8) -> u8 {
            if v < 48 {
                0
            } else if v < 115 {
                1
            } else {
                (v - 35) / 40
            }
        }
        const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

        let (ri, gi, bi) = (cube_index(self.r), cube_index(self.g), cube_index(self.b));
        let cube = Rgb {
            r: CUBE_LEVELS[ri as usize],
            g: CUBE_LEVELS[gi as usize],
            b: CUBE_LEVELS[bi as usize],
        };

        let avg = (self.r as u32 + self.g as u32 + self.b as u32) / 3;
        let gray_index = if avg > 238 { 23 } else { avg.saturating_sub(3) / 10 };
        let gray_level = (8 + gray_index * 10) as u8;
        let gray = Rgb {
            r: gray_level,
            g: gray_level,
            b: gray_level,
        };

        if self.distance(gray) < self.distance(cube) {
            232 + gray_index as u8
        } else {
            16 + 36 * ri + 6 * gi + bi
        }
    }

    fn distance(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2) as u32;
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Semantic color roles every theme binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Text,
    Muted,
    Background,
    Success,
    Warning,
    Error,
    Border,
}

impl ColorRole {
    pub const ALL: [ColorRole; 10] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Text,
        Self::Muted,
        Self::Background,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Border,
    ];

    /// 16-color stand-in used when 24-bit color is not safe.
    pub const fn basic_color(self) -> Color {
        match self {
            Self::Primary => Color::Cyan,
            Self::Secondary => Color::Magenta,
            Self::Accent => Color::Yellow,
            Self::Text => Color::White,
            Self::Muted => Color::BrightBlack,
            Self::Background => Color::Black,
            Self::Success => Color::Green,
            Self::Warning => Color::BrightYellow,
            Self::Error => Color::Red,
            Self::Border => Color::Blue,
        }
    }
}

/// Role bindings of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub background: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub border: Rgb,
}

impl Palette {
    pub const fn get(&self, role: ColorRole) -> Rgb {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
            ColorRole::Text => self.text,
            ColorRole::Muted => self.muted,
            ColorRole::Background => self.background,
            ColorRole::Success => self.success,
            ColorRole::Warning => self.warning,
            ColorRole::Error => self.error,
            ColorRole::Border => self.border,
        }
    }
}

/// A named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub palette: Palette,
}

/// Picker entry returned by [`list_themes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

static THEMES: [Theme; 4] = [
    Theme {
        id: "dracula",
        name: "Dracula",
        description: "Dark purple with vivid pastel accents",
        palette: Palette {
            primary: rgb(0xbd93f9),
            secondary: rgb(0xff79c6),
            accent: rgb(0x8be9fd),
            text: rgb(0xf8f8f2),
            muted: rgb(0x6272a4),
            background: rgb(0x282a36),
            success: rgb(0x50fa7b),
            warning: rgb(0xf1fa8c),
            error: rgb(0xff5555),
            border: rgb(0x44475a),
        },
    },
    Theme {
        id: "monokai",
        name: "Monokai",
        description: "Warm charcoal with saturated syntax colors",
        palette: Palette {
            primary: rgb(0x66d9ef),
            secondary: rgb(0xae81ff),
            accent: rgb(0xfd971f),
            text: rgb(0xf8f8f2),
            muted: rgb(0x75715e),
            background: rgb(0x272822),
            success: rgb(0xa6e22e),
            warning: rgb(0xe6db74),
            error: rgb(0xf92672),
            border: rgb(0x49483e),
        },
    },
    Theme {
        id: "nord",
        name: "Nord",
        description: "Arctic, north-bluish and calm",
        palette: Palette {
            primary: rgb(0x88c0d0),
            secondary: rgb(0x81a1c1),
            accent: rgb(0xb48ead),
            text: rgb(0xeceff4),
            muted: rgb(0x4c566a),
            background: rgb(0x2e3440),
            success: rgb(0xa3be8c),
            warning: rgb(0xebcb8b),
            error: rgb(0xbf616a),
            border: rgb(0x434c5e),
        },
    },
    Theme {
        id: "matrix",
        name: "Matrix",
        description: "Phosphor green on black",
        palette: Palette {
            primary: rgb(0x00ff41),
            secondary: rgb(0x00cc33),
            accent: rgb(0x39ff14),
            text: rgb(0x00ff41),
            muted: rgb(0x008f11),
            background: rgb(0x000000),
            success: rgb(0x00ff41),
            warning: rgb(0xccff00),
            error: rgb(0xff3131),
            border: rgb(0x003b00),
        },
    },
];

/// Theme with the given id, or the default theme.
///
/// ```
/// use adaptui::get_theme;
///
/// assert_eq!(get_theme("nord").name, "Nord");
/// assert_eq!(get_theme("no-such-theme").id, "dracula");
/// ```
pub fn get_theme(id: &str) -> &'static Theme {
    match THEMES.iter().find(|theme| theme.id == id) {
        Some(theme) => theme,
        None => {
            log_diagnostic(DiagnosticEvent::UnknownTheme, id);
            default_theme()
        }
    }
}

pub fn default_theme() -> &'static Theme {
    // The default id is always the first entry.
    &THEMES[0]
}

/// Picker entries in registry order.
pub fn list_themes() -> Vec<ThemeSummary> {
    THEMES
        .iter()
        .map(|theme| ThemeSummary {
            id: theme.id,
            name: theme.name,
            description: theme.description,
        })
        .collect()
}

impl Theme {
    pub const fn color(&self, role: ColorRole) -> Rgb {
        self.palette.get(role)
    }

    /// `colored` color for `role`, downgraded unless 24-bit color is safe.
    pub fn terminal_color(&self, role: ColorRole, caps: &CapabilitySnapshot) -> Color {
        if caps.flags.truecolor_ok {
            let Rgb { r, g, b } = self.color(role);
            Color::TrueColor { r, g, b }
        } else {
            role.basic_color()
        }
    }

    /// Paint `text` in `role`'s color. Muted text is also dimmed where the
    /// terminal renders dim text.
    pub fn paint(&self, role: ColorRole, text: &str, caps: &CapabilitySnapshot) -> String {
        let painted = text.color(self.terminal_color(role, caps));
        if role == ColorRole::Muted && caps.flags.dim_ok {
            painted.dimmed().to_string()
        } else {
            painted.to_string()
        }
    }

    /// Like [`paint`](Self::paint), on the theme background when the terminal
    /// renders background colors.
    pub fn paint_on_background(
        &self,
        role: ColorRole,
        text: &str,
        caps: &CapabilitySnapshot,
    ) -> String {
        if !caps.flags.background_ok {
            return self.paint(role, text, caps);
        }
        let bg = self.terminal_color(ColorRole::Background, caps);
        text.color(self.terminal_color(role, caps))
            .on_color(bg)
            .to_string()
    }
}
