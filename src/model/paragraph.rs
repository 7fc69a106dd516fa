//! Paragraph nodes.

use serde::{Deserialize, Serialize};

/// A paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Element id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Extra CSS class appended to the element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Paragraph text
    pub text: String,

    /// Emphasis style
    #[serde(default)]
    pub emphasis: Emphasis,

    /// Horizontal alignment
    #[serde(default)]
    pub align: Alignment,
}

impl Paragraph {
    /// Create a paragraph with default emphasis and alignment.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            class_name: None,
            text: text.into(),
            emphasis: Emphasis::Normal,
            align: Alignment::Left,
        }
    }

    /// Set emphasis and return self.
    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Set alignment and return self.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for strong emphasis.
    pub fn strong(self) -> Self {
        self.emphasis(Emphasis::Strong)
    }

    /// Shorthand for muted emphasis.
    pub fn muted(self) -> Self {
        self.emphasis(Emphasis::Muted)
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an extra CSS class.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Paragraph emphasis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Normal,
    Strong,
    Muted,
}

impl Emphasis {
    /// CSS class for non-default emphasis.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Emphasis::Normal => None,
            Emphasis::Strong => Some("text-strong"),
            Emphasis::Muted => Some("text-muted"),
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified
    Justify,
}

impl Alignment {
    /// CSS class for non-default alignment.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Alignment::Left => None,
            Alignment::Center => Some("text-center"),
            Alignment::Right => Some("text-right"),
            Alignment::Justify => Some("text-justify"),
        }
    }
}
