//! Property tests for theme presets and the theme builder.

use proptest::prelude::*;
use reportkit::theme::{
    preset, ColorOverrides, SpacingOverrides, ThemeBuilder, ThemeOverrides, ThemePreset,
};

fn preset_strategy() -> impl Strategy<Value = ThemePreset> {
    prop::sample::select(ThemePreset::ALL.to_vec())
}

fn hex_color() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

proptest! {
    #[test]
    fn builder_without_overrides_is_identity(theme in preset_strategy()) {
        let tokens = theme.tokens();
        prop_assert_eq!(ThemeBuilder::from(tokens.clone()).build(), tokens);
    }

    #[test]
    fn empty_overrides_change_nothing(theme in preset_strategy()) {
        let tokens = theme.tokens();
        let built = ThemeBuilder::from(tokens.clone())
            .with_overrides(ThemeOverrides::default())
            .build();
        prop_assert_eq!(built, tokens);
    }

    #[test]
    fn primary_override_touches_only_primary(theme in preset_strategy(), color in hex_color()) {
        let base = theme.tokens();
        let built = ThemeBuilder::from(base.clone())
            .with_colors(ColorOverrides {
                primary: Some(color.clone()),
                ..Default::default()
            })
            .build();

        prop_assert_eq!(&built.colors.primary, &color);

        let mut expected = base;
        expected.colors.primary = color;
        prop_assert_eq!(built, expected);
    }

    #[test]
    fn later_overrides_win(first in hex_color(), second in hex_color()) {
        let built = ThemeBuilder::new()
            .with_colors(ColorOverrides { border: Some(first), ..Default::default() })
            .with_colors(ColorOverrides { border: Some(second.clone()), ..Default::default() })
            .build();
        prop_assert_eq!(built.colors.border, second);
    }

    #[test]
    fn spacing_override_keeps_other_steps(theme in preset_strategy(), px in 1u32..64) {
        let base = theme.tokens();
        let value = format!("{}px", px);
        let built = ThemeBuilder::from(base.clone())
            .with_spacing(SpacingOverrides { s6: Some(value.clone()), ..Default::default() })
            .build();

        prop_assert_eq!(&built.spacing.s6, &value);
        prop_assert_eq!(&built.spacing.s4, &base.spacing.s4);
        prop_assert_eq!(&built.spacing.s8, &base.spacing.s8);
        prop_assert_eq!(built.colors, base.colors);
    }
}

#[test]
fn test_preset_names_round_trip() {
    for theme in ThemePreset::ALL {
        assert_eq!(theme.name().parse::<ThemePreset>().unwrap(), theme);
        assert_eq!(preset::by_name(theme.name()), Some(theme.tokens()));
    }
    assert_eq!("OFFICE".parse::<ThemePreset>().unwrap(), ThemePreset::Office);
    assert!(preset::by_name("sepia").is_none());
}

#[test]
fn test_presets_are_distinct() {
    for (i, a) in ThemePreset::ALL.iter().enumerate() {
        for b in &ThemePreset::ALL[i + 1..] {
            assert_ne!(a.tokens(), b.tokens(), "{} and {} are identical", a, b);
        }
    }
}

#[test]
fn test_tokens_json_round_trip() {
    let tokens = preset::terminal();
    let json = serde_json::to_string(&tokens).unwrap();
    let back: reportkit::DesignTokens = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tokens);
}
