//! Built-in theme presets.

use std::fmt;
use std::str::FromStr;

use super::tokens::{
    AccentColors, BorderRadius, BorderWidth, Borders, Colors, DesignTokens, FontSizes,
    FontWeights, LineHeights, Shadows, Spacing, TextColors, Typography,
};

/// Named built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreset {
    /// Black on white, no radii or shadows
    #[default]
    Mono,
    /// Corporate blue palette
    Office,
    /// Warm orange and purple palette
    Vivid,
    /// Dark background with blue accents
    Dark,
    /// Green-on-black monospace
    Terminal,
}

impl ThemePreset {
    /// All presets, in display order.
    pub const ALL: [ThemePreset; 5] = [
        ThemePreset::Mono,
        ThemePreset::Office,
        ThemePreset::Vivid,
        ThemePreset::Dark,
        ThemePreset::Terminal,
    ];

    /// Lowercase preset name.
    pub fn name(self) -> &'static str {
        match self {
            ThemePreset::Mono => "mono",
            ThemePreset::Office => "office",
            ThemePreset::Vivid => "vivid",
            ThemePreset::Dark => "dark",
            ThemePreset::Terminal => "terminal",
        }
    }

    /// Materialize the preset's token set.
    pub fn tokens(self) -> DesignTokens {
        match self {
            ThemePreset::Mono => mono(),
            ThemePreset::Office => office(),
            ThemePreset::Vivid => vivid(),
            ThemePreset::Dark => dark(),
            ThemePreset::Terminal => terminal(),
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ThemePreset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| format!("Unknown theme preset: {}", s))
    }
}

/// Look up a preset's tokens by name (case-insensitive).
pub fn by_name(name: &str) -> Option<DesignTokens> {
    name.parse::<ThemePreset>().ok().map(ThemePreset::tokens)
}

fn font_sizes(base: &str, sm: &str, lg: &str, xl: &str, xxl: &str, xxxl: &str) -> FontSizes {
    FontSizes {
        xs: "0.75rem".into(),
        sm: sm.into(),
        base: base.into(),
        lg: lg.into(),
        xl: xl.into(),
        xxl: xxl.into(),
        xxxl: xxxl.into(),
    }
}

fn standard_sizes(xxxl: &str) -> FontSizes {
    font_sizes("1rem", "0.875rem", "1.125rem", "1.25rem", "1.5rem", xxxl)
}

const WEIGHTS: FontWeights = FontWeights {
    normal: 400,
    medium: 500,
    semibold: 600,
    bold: 700,
};

fn radius(sm: &str, md: &str, lg: &str) -> BorderRadius {
    BorderRadius {
        sm: sm.into(),
        md: md.into(),
        lg: lg.into(),
    }
}

fn widths(normal: &str, thick: &str) -> BorderWidth {
    BorderWidth {
        thin: "1px".into(),
        normal: normal.into(),
        thick: thick.into(),
    }
}

fn shadows(sm: &str, md: &str, lg: &str) -> Shadows {
    Shadows {
        sm: sm.into(),
        md: md.into(),
        lg: lg.into(),
    }
}

/// Text colors in `primary, secondary, muted, inverted` order.
fn text(shades: [&str; 4]) -> TextColors {
    TextColors {
        primary: shades[0].into(),
        secondary: shades[1].into(),
        muted: shades[2].into(),
        inverted: shades[3].into(),
    }
}

/// Accent colors in `success, warning, error, info` order.
fn accent(colors: [&str; 4]) -> AccentColors {
    AccentColors {
        success: colors[0].into(),
        warning: colors[1].into(),
        error: colors[2].into(),
        info: colors[3].into(),
    }
}

/// Monochrome print-friendly preset. The default base theme.
pub fn mono() -> DesignTokens {
    DesignTokens {
        colors: Colors {
            primary: "#000000".into(),
            secondary: "#000000".into(),
            background: "#ffffff".into(),
            surface: "#ffffff".into(),
            text: text(["#000000", "#404040", "#808080", "#ffffff"]),
            border: "#cccccc".into(),
            accent: accent(["#000000", "#000000", "#000000", "#000000"]),
        },
        typography: Typography {
            font_family: "'Calibri', 'Arial', 'Helvetica', sans-serif".into(),
            font_size: font_sizes(
                "0.9375rem",
                "0.8125rem",
                "1rem",
                "1.125rem",
                "1.375rem",
                "1.75rem",
            ),
            font_weight: WEIGHTS,
            line_height: LineHeights {
                tight: 1.4,
                normal: 1.5,
                relaxed: 1.6,
            },
        },
        spacing: Spacing::rem_scale(),
        borders: Borders {
            radius: radius("0", "0", "0"),
            width: widths("1px", "2px"),
        },
        shadows: shadows("none", "none", "none"),
    }
}

/// Corporate office preset.
pub fn office() -> DesignTokens {
    DesignTokens {
        colors: Colors {
            primary: "#0052CC".into(),
            secondary: "#42526E".into(),
            background: "#F4F5F7".into(),
            surface: "#FFFFFF".into(),
            text: text(["#172B4D", "#42526E", "#6B778C", "#FFFFFF"]),
            border: "#DFE1E6".into(),
            accent: accent(["#36B37E", "#FFAB00", "#FF5630", "#00B8D9"]),
        },
        typography: Typography {
            font_family: "'Pretendard Variable', 'Pretendard', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif".into(),
            font_size: standard_sizes("2rem"),
            font_weight: WEIGHTS,
            line_height: LineHeights {
                tight: 1.5,
                normal: 1.6,
                relaxed: 1.8,
            },
        },
        spacing: Spacing::rem_scale(),
        borders: Borders {
            radius: radius("2px", "4px", "8px"),
            width: widths("1px", "2px"),
        },
        shadows: shadows(
            "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
            "0 10px 15px -3px rgba(0, 0, 0, 0.1)",
        ),
    }
}

/// Vivid preset with warm accents.
pub fn vivid() -> DesignTokens {
    DesignTokens {
        colors: Colors {
            primary: "#FF6B35".into(),
            secondary: "#6A4C93".into(),
            background: "#FFF8F0".into(),
            surface: "#FFFFFF".into(),
            text: text(["#2D3047", "#5A5D7A", "#8B8C9F", "#FFFFFF"]),
            border: "#E8D7C9".into(),
            accent: accent(["#4CB944", "#FFB347", "#FF3A20", "#3E92CC"]),
        },
        typography: Typography {
            font_family: "'Inter', 'SF Pro Display', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif".into(),
            font_size: standard_sizes("2rem"),
            font_weight: WEIGHTS,
            line_height: LineHeights {
                tight: 1.4,
                normal: 1.55,
                relaxed: 1.7,
            },
        },
        spacing: Spacing::rem_scale(),
        borders: Borders {
            radius: radius("4px", "8px", "12px"),
            width: widths("2px", "3px"),
        },
        shadows: shadows(
            "0 2px 4px rgba(255, 107, 53, 0.1)",
            "0 4px 8px rgba(255, 107, 53, 0.15), 0 2px 4px rgba(106, 76, 147, 0.1)",
            "0 10px 20px rgba(255, 107, 53, 0.15), 0 4px 8px rgba(106, 76, 147, 0.12)",
        ),
    }
}

/// Dark preset.
pub fn dark() -> DesignTokens {
    DesignTokens {
        colors: Colors {
            primary: "#4C9AFF".into(),
            secondary: "#9FB6D8".into(),
            background: "#0F1115".into(),
            surface: "#161A22".into(),
            text: text(["#E6EAF0", "#B8C0CC", "#8A94A6", "#0F1115"]),
            border: "#262B36".into(),
            accent: accent(["#3DDC97", "#FFB020", "#FF6B6B", "#4CC3FF"]),
        },
        typography: Typography {
            font_family:
                "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif".into(),
            font_size: standard_sizes("2rem"),
            font_weight: WEIGHTS,
            line_height: LineHeights {
                tight: 1.45,
                normal: 1.6,
                relaxed: 1.75,
            },
        },
        spacing: Spacing::rem_scale(),
        borders: Borders {
            radius: radius("4px", "6px", "10px"),
            width: widths("1px", "2px"),
        },
        shadows: shadows(
            "0 1px 2px rgba(0, 0, 0, 0.4)",
            "0 4px 8px rgba(0, 0, 0, 0.45)",
            "0 12px 24px rgba(0, 0, 0, 0.5)",
        ),
    }
}

/// Retro terminal preset.
pub fn terminal() -> DesignTokens {
    DesignTokens {
        colors: Colors {
            primary: "#00FF00".into(),
            secondary: "#003B00".into(),
            background: "#000000".into(),
            surface: "#0D0D0D".into(),
            text: text(["#00FF00", "#00CC00", "#006600", "#000000"]),
            border: "#00FF00".into(),
            accent: accent(["#00FF00", "#FFFF00", "#FF0000", "#00FFFF"]),
        },
        typography: Typography {
            font_family: "'Fira Code', 'JetBrains Mono', 'Source Code Pro', 'Ubuntu Mono', 'Courier New', monospace".into(),
            font_size: standard_sizes("1.875rem"),
            font_weight: WEIGHTS,
            line_height: LineHeights {
                tight: 1.4,
                normal: 1.6,
                relaxed: 1.8,
            },
        },
        spacing: Spacing::rem_scale(),
        borders: Borders {
            radius: radius("0", "0", "0"),
            width: widths("1px", "2px"),
        },
        shadows: shadows(
            "0 0 5px rgba(0, 255, 0, 0.2)",
            "0 0 10px rgba(0, 255, 0, 0.3)",
            "0 0 20px rgba(0, 255, 0, 0.4)",
        ),
    }
}
