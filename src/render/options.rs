//! Rendering options and configuration.

use serde::{Deserialize, Serialize};

/// Print margins as opaque CSS lengths. Unset sides are left out of the
/// stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMargins {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
}

impl PageMargins {
    /// No margins set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same margin on every side.
    pub fn all(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            top: Some(value.clone()),
            right: Some(value.clone()),
            bottom: Some(value.clone()),
            left: Some(value),
        }
    }

    pub fn with_top(mut self, value: impl Into<String>) -> Self {
        self.top = Some(value.into());
        self
    }

    pub fn with_right(mut self, value: impl Into<String>) -> Self {
        self.right = Some(value.into());
        self
    }

    pub fn with_bottom(mut self, value: impl Into<String>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    pub fn with_left(mut self, value: impl Into<String>) -> Self {
        self.left = Some(value.into());
        self
    }

    /// Set sides in `top, bottom, left, right` order.
    pub fn sides(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("top", &self.top),
            ("bottom", &self.bottom),
            ("left", &self.left),
            ("right", &self.right),
        ]
        .into_iter()
        .filter_map(|(side, value)| value.as_deref().map(|v| (side, v)))
    }

    /// Whether no side is set.
    pub fn is_empty(&self) -> bool {
        self.sides().next().is_none()
    }
}

/// Highlighter stylesheet and script URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightAssets {
    /// Stylesheet for dark backgrounds
    pub dark_css: String,

    /// Stylesheet for light backgrounds
    pub light_css: String,

    /// Highlighter script
    pub script: String,
}

impl HighlightAssets {
    const CDN: &'static str = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0";

    /// Stylesheet URL for the given background darkness.
    pub fn stylesheet(&self, dark: bool) -> &str {
        if dark {
            &self.dark_css
        } else {
            &self.light_css
        }
    }
}

impl Default for HighlightAssets {
    fn default() -> Self {
        Self {
            dark_css: format!("{}/styles/atom-one-dark.min.css", Self::CDN),
            light_css: format!("{}/styles/atom-one-light.min.css", Self::CDN),
            script: format!("{}/highlight.min.js", Self::CDN),
        }
    }
}

/// Labels shown next to cover metadata values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverLabels {
    pub author: String,
    pub date: String,
    pub department: String,
    pub version: String,
    pub tags: String,
}

impl Default for CoverLabels {
    fn default() -> Self {
        Self {
            author: "Author".to_string(),
            date: "Date".to_string(),
            department: "Department".to_string(),
            version: "Version".to_string(),
            tags: "Tags".to_string(),
        }
    }
}

/// Options for rendering a report to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,

    /// Highlighter assets
    pub highlight: HighlightAssets,

    /// Cover metadata labels
    pub labels: CoverLabels,

    /// Extra CSS placed in a second `<style>` element after the theme styles
    pub custom_css: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set the highlighter assets.
    pub fn with_highlight_assets(mut self, assets: HighlightAssets) -> Self {
        self.highlight = assets;
        self
    }

    /// Set the cover labels.
    pub fn with_labels(mut self, labels: CoverLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Append custom CSS.
    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            highlight: HighlightAssets::default(),
            labels: CoverLabels::default(),
            custom_css: None,
        }
    }
}
