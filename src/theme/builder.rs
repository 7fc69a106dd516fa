//! Theme builder for deriving token sets from a base preset.

use serde::{Deserialize, Serialize};

use super::preset;
use super::tokens::{
    AccentColors, BorderRadius, BorderWidth, DesignTokens, FontSizes, FontWeights, LineHeights,
    TextColors,
};

/// Builds a [`DesignTokens`] by merging partial overrides over a base set.
///
/// Each token group merges independently; groups that are never touched pass
/// through unchanged. Within colors, the nested `text` and `accent` groups
/// merge key by key, so overriding `primary` alone keeps every other color.
///
/// ```
/// use reportkit::theme::{ColorOverrides, ThemeBuilder};
///
/// let tokens = ThemeBuilder::new()
///     .with_colors(ColorOverrides {
///         primary: Some("#ff0000".into()),
///         ..Default::default()
///     })
///     .build();
/// assert_eq!(tokens.colors.primary, "#ff0000");
/// ```
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    tokens: DesignTokens,
}

impl ThemeBuilder {
    /// Start from the `mono` preset.
    pub fn new() -> Self {
        Self::from(preset::mono())
    }

    /// Merge color overrides.
    pub fn with_colors(mut self, colors: ColorOverrides) -> Self {
        let c = &mut self.tokens.colors;
        merge(&mut c.primary, colors.primary);
        merge(&mut c.secondary, colors.secondary);
        merge(&mut c.background, colors.background);
        merge(&mut c.surface, colors.surface);
        merge(&mut c.border, colors.border);
        if let Some(text) = colors.text {
            text.apply(&mut c.text);
        }
        if let Some(accent) = colors.accent {
            accent.apply(&mut c.accent);
        }
        self
    }

    /// Merge typography overrides. Sub-scales are replaced whole.
    pub fn with_typography(mut self, typography: TypographyOverrides) -> Self {
        let t = &mut self.tokens.typography;
        merge(&mut t.font_family, typography.font_family);
        merge(&mut t.font_size, typography.font_size);
        merge(&mut t.font_weight, typography.font_weight);
        merge(&mut t.line_height, typography.line_height);
        self
    }

    /// Merge spacing overrides step by step.
    pub fn with_spacing(mut self, spacing: SpacingOverrides) -> Self {
        let s = &mut self.tokens.spacing;
        merge(&mut s.s0, spacing.s0);
        merge(&mut s.s1, spacing.s1);
        merge(&mut s.s2, spacing.s2);
        merge(&mut s.s3, spacing.s3);
        merge(&mut s.s4, spacing.s4);
        merge(&mut s.s6, spacing.s6);
        merge(&mut s.s8, spacing.s8);
        merge(&mut s.s12, spacing.s12);
        merge(&mut s.s16, spacing.s16);
        self
    }

    /// Merge border overrides. Radius and width scales are replaced whole.
    pub fn with_borders(mut self, borders: BorderOverrides) -> Self {
        merge(&mut self.tokens.borders.radius, borders.radius);
        merge(&mut self.tokens.borders.width, borders.width);
        self
    }

    /// Merge shadow overrides.
    pub fn with_shadows(mut self, shadows: ShadowOverrides) -> Self {
        let s = &mut self.tokens.shadows;
        merge(&mut s.sm, shadows.sm);
        merge(&mut s.md, shadows.md);
        merge(&mut s.lg, shadows.lg);
        self
    }

    /// Apply every group of a [`ThemeOverrides`] file.
    pub fn with_overrides(self, overrides: ThemeOverrides) -> Self {
        self.with_colors(overrides.colors)
            .with_typography(overrides.typography)
            .with_spacing(overrides.spacing)
            .with_borders(overrides.borders)
            .with_shadows(overrides.shadows)
    }

    /// Finish and return the token set.
    pub fn build(self) -> DesignTokens {
        self.tokens
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<DesignTokens> for ThemeBuilder {
    fn from(base: DesignTokens) -> Self {
        Self { tokens: base }
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Partial overrides for every token group, e.g. loaded from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub colors: ColorOverrides,
    pub typography: TypographyOverrides,
    pub spacing: SpacingOverrides,
    pub borders: BorderOverrides,
    pub shadows: ShadowOverrides,
}

/// Partial color overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<TextColorOverrides>,
    pub border: Option<String>,
    pub accent: Option<AccentOverrides>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub muted: Option<String>,
    pub inverted: Option<String>,
}

impl TextColorOverrides {
    fn apply(self, text: &mut TextColors) {
        merge(&mut text.primary, self.primary);
        merge(&mut text.secondary, self.secondary);
        merge(&mut text.muted, self.muted);
        merge(&mut text.inverted, self.inverted);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccentOverrides {
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
}

impl AccentOverrides {
    fn apply(self, accent: &mut AccentColors) {
        merge(&mut accent.success, self.success);
        merge(&mut accent.warning, self.warning);
        merge(&mut accent.error, self.error);
        merge(&mut accent.info, self.info);
    }
}

/// Partial typography overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyOverrides {
    pub font_family: Option<String>,
    pub font_size: Option<FontSizes>,
    pub font_weight: Option<FontWeights>,
    pub line_height: Option<LineHeights>,
}

/// Partial spacing overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingOverrides {
    #[serde(rename = "0")]
    pub s0: Option<String>,
    #[serde(rename = "1")]
    pub s1: Option<String>,
    #[serde(rename = "2")]
    pub s2: Option<String>,
    #[serde(rename = "3")]
    pub s3: Option<String>,
    #[serde(rename = "4")]
    pub s4: Option<String>,
    #[serde(rename = "6")]
    pub s6: Option<String>,
    #[serde(rename = "8")]
    pub s8: Option<String>,
    #[serde(rename = "12")]
    pub s12: Option<String>,
    #[serde(rename = "16")]
    pub s16: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderOverrides {
    pub radius: Option<BorderRadius>,
    pub width: Option<BorderWidth>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowOverrides {
    pub sm: Option<String>,
    pub md: Option<String>,
    pub lg: Option<String>,
}
