//! Design tokens, built-in presets, and the theme builder.
//!
//! A theme is a plain [`DesignTokens`] value. Pick a preset from [`preset`]
//! or derive one with [`ThemeBuilder`]; the renderer only ever reads it.

mod builder;
pub mod preset;
mod tokens;

pub use builder::{
    AccentOverrides, BorderOverrides, ColorOverrides, ShadowOverrides, SpacingOverrides,
    TextColorOverrides, ThemeBuilder, ThemeOverrides, TypographyOverrides,
};
pub use preset::ThemePreset;
pub use tokens::{
    AccentColors, BorderRadius, BorderWidth, Borders, Colors, DesignTokens, FontSizes,
    FontWeights, LineHeights, Shadows, Spacing, TextColors, Typography,
};

impl Default for DesignTokens {
    fn default() -> Self {
        preset::mono()
    }
}
