//! Dividers, images, and links.

use serde::{Deserialize, Serialize};

/// A horizontal rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(default)]
    pub style: DividerStyle,
}

impl Divider {
    pub fn new(style: DividerStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }
}

/// Line style of a divider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl DividerStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            DividerStyle::Solid => "solid",
            DividerStyle::Dashed => "dashed",
            DividerStyle::Dotted => "dotted",
        }
    }
}

/// A figure with an optional caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Image URL or path
    pub src: String,

    /// Alternative text
    pub alt: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Image {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id: None,
            class_name: None,
            src: src.into(),
            alt: alt.into(),
            caption: None,
            width: None,
            height: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set pixel dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// A hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    pub href: String,

    /// Display text
    pub text: String,

    /// Tooltip (`title` attribute)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Open in a new browsing context
    #[serde(default)]
    pub new_tab: bool,
}

impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: None,
            class_name: None,
            href: href.into(),
            text: text.into(),
            title: None,
            new_tab: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn in_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_default_solid() {
        assert_eq!(Divider::default().style, DividerStyle::Solid);
        assert_eq!(Divider::new(DividerStyle::Dotted).style.as_str(), "dotted");
    }

    #[test]
    fn test_image_builder() {
        let img = Image::new("chart.png", "Chart")
            .with_caption("Growth")
            .with_size(800, 400);
        assert_eq!(img.width, Some(800));
        assert_eq!(img.caption.as_deref(), Some("Growth"));
    }

    #[test]
    fn test_link_json_keys() {
        let link: Link =
            serde_json::from_str(r#"{"href":"https://x.dev","text":"X","newTab":true}"#).unwrap();
        assert!(link.new_tab);
        assert!(link.title.is_none());
    }
}
