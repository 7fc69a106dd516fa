//! Design token types.

use serde::{Deserialize, Serialize};

/// A complete set of visual constants applied during rendering.
///
/// Every field is a plain string or number, so token sets can be compared,
/// cloned, and loaded from JSON theme files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    /// Color palette
    pub colors: Colors,

    /// Font family, sizes, weights, and line heights
    pub typography: Typography,

    /// Ordinal spacing scale
    pub spacing: Spacing,

    /// Border radii and widths
    pub borders: Borders,

    /// Box shadows
    pub shadows: Shadows,
}

/// Color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: TextColors,
    pub border: String,
    pub accent: AccentColors,
}

/// Text shades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
    pub inverted: String,
}

/// Semantic accent colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccentColors {
    pub success: String,
    pub warning: String,
    pub error: String,
    pub info: String,
}

/// Typography tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// CSS font-family stack
    pub font_family: String,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
}

/// Seven-step font size scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub xs: String,
    pub sm: String,
    pub base: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xxl: String,
    #[serde(rename = "3xl")]
    pub xxxl: String,
}

/// Four-step font weight scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

/// Three-step line height scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

/// Fixed nine-step spacing scale (0, 1, 2, 3, 4, 6, 8, 12, 16).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(rename = "0")]
    pub s0: String,
    #[serde(rename = "1")]
    pub s1: String,
    #[serde(rename = "2")]
    pub s2: String,
    #[serde(rename = "3")]
    pub s3: String,
    #[serde(rename = "4")]
    pub s4: String,
    #[serde(rename = "6")]
    pub s6: String,
    #[serde(rename = "8")]
    pub s8: String,
    #[serde(rename = "12")]
    pub s12: String,
    #[serde(rename = "16")]
    pub s16: String,
}

impl Spacing {
    /// The default rem-based scale shared by every built-in preset.
    pub fn rem_scale() -> Self {
        Self {
            s0: "0".into(),
            s1: "0.25rem".into(),
            s2: "0.5rem".into(),
            s3: "0.75rem".into(),
            s4: "1rem".into(),
            s6: "1.5rem".into(),
            s8: "2rem".into(),
            s12: "3rem".into(),
            s16: "4rem".into(),
        }
    }
}

/// Border tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub radius: BorderRadius,
    pub width: BorderWidth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderWidth {
    pub thin: String,
    pub normal: String,
    pub thick: String,
}

/// Shadow tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
}
