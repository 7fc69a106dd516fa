//! Body nodes and sections.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{CodeBlock, Divider, Image, Link, List, Paragraph, Table};

/// Kind tag of a body node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Section,
    Paragraph,
    Table,
    List,
    Divider,
    Image,
    Link,
    CodeBlock,
}

impl NodeKind {
    /// Tag used in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Section => "section",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Table => "table",
            NodeKind::List => "list",
            NodeKind::Divider => "divider",
            NodeKind::Image => "image",
            NodeKind::Link => "link",
            NodeKind::CodeBlock => "codeblock",
        }
    }
}

/// A node in a report body or section.
///
/// Serialized with a `kind` tag. Any tag this version does not know
/// deserializes to [`Node::Unknown`], which renders as nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Section(Section),
    Paragraph(Paragraph),
    Table(Table),
    List(List),
    Divider(Divider),
    Image(Image),
    Link(Link),
    #[serde(rename = "codeblock")]
    CodeBlock(CodeBlock),
    #[serde(other)]
    Unknown,
}

impl Node {
    /// The node's kind, or `None` for [`Node::Unknown`].
    pub fn kind(&self) -> Option<NodeKind> {
        Some(match self {
            Node::Section(_) => NodeKind::Section,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Table(_) => NodeKind::Table,
            Node::List(_) => NodeKind::List,
            Node::Divider(_) => NodeKind::Divider,
            Node::Image(_) => NodeKind::Image,
            Node::Link(_) => NodeKind::Link,
            Node::CodeBlock(_) => NodeKind::CodeBlock,
            Node::Unknown => return None,
        })
    }

    /// Whether this node is a section.
    pub fn is_section(&self) -> bool {
        matches!(self, Node::Section(_))
    }
}

macro_rules! impl_from_node {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$ty(value)
                }
            }
        )*
    };
}

impl_from_node!(Section, Paragraph, Table, List, Divider, Image, Link, CodeBlock);

/// A titled group of nodes. Sections may nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    pub title: String,

    #[serde(default)]
    pub content: Vec<Node>,

    #[serde(default)]
    pub collapsible: bool,
}

impl Section {
    pub fn new(title: impl Into<String>, content: Vec<Node>) -> Self {
        Self {
            id: None,
            class_name: None,
            title: title.into(),
            content,
            collapsible: false,
        }
    }

    /// Append a child node.
    pub fn push(mut self, node: impl Into<Node>) -> Self {
        self.content.push(node.into());
        self
    }

    pub fn collapsible(mut self) -> Self {
        self.collapsible = true;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The explicit id, or `section-` followed by the lowercased title with
    /// whitespace runs replaced by `-`.
    pub fn anchor_id(&self) -> String {
        match self.id {
            Some(ref id) => id.clone(),
            None => format!("section-{}", slugify(&self.title)),
        }
    }
}

fn slugify(title: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap());
    re.replace_all(&title.to_lowercase(), "-").into_owned()
}
