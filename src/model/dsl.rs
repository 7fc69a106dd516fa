//! Short constructor functions for building reports in code.
//!
//! ```
//! use reportkit::model::dsl::*;
//! use reportkit::model::{ReportMeta, Report};
//!
//! let report = Report::builder(ReportMeta::new("Weekly"))
//!     .push(section("Summary", vec![p("All green."), divider()]))
//!     .push(code("fn main() {}", "rust"))
//!     .build();
//! assert_eq!(report.body.len(), 2);
//! ```

use super::{
    CodeBlock, Divider, DividerStyle, Image, Link, List, ListKind, Node, Paragraph, Section,
    Table, TableRow,
};
use crate::error::Result;

/// Paragraph node with default emphasis and alignment.
pub fn p(text: impl Into<String>) -> Node {
    Paragraph::new(text).into()
}

/// Section node.
pub fn section(title: impl Into<String>, content: Vec<Node>) -> Node {
    Section::new(title, content).into()
}

/// Table node. Fails on duplicate headers or undeclared row keys.
pub fn table<S: Into<String>>(
    headers: impl IntoIterator<Item = S>,
    rows: Vec<TableRow>,
) -> Result<Node> {
    Ok(Table::new(headers, rows)?.into())
}

/// Unordered list node.
pub fn list<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Node {
    List::new(items, ListKind::Unordered).into()
}

/// Ordered list node.
pub fn ordered<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Node {
    List::new(items, ListKind::Ordered).into()
}

/// Checklist node. Fails when there are more flags than items.
pub fn checklist<S: Into<String>>(
    items: impl IntoIterator<Item = S>,
    checked: Vec<bool>,
) -> Result<Node> {
    Ok(List::checklist(items, checked)?.into())
}

/// Solid divider node.
pub fn divider() -> Node {
    Divider::new(DividerStyle::Solid).into()
}

/// Divider node with the given style.
pub fn divider_styled(style: DividerStyle) -> Node {
    Divider::new(style).into()
}

pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Node {
    Image::new(src, alt).into()
}

pub fn link(href: impl Into<String>, text: impl Into<String>) -> Node {
    Link::new(href, text).into()
}

/// Code block node with a language tag.
pub fn code(source: impl Into<String>, language: impl Into<String>) -> Node {
    CodeBlock::new(source).language(language).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{row, NodeKind};
    use serde_json::json;

    #[test]
    fn test_helpers_produce_kinds() {
        let nodes = vec![
            p("x"),
            section("S", vec![]),
            table(["A"], vec![row([("A", json!(1))])]).unwrap(),
            list(["a"]),
            ordered(["a"]),
            checklist(["a"], vec![true]).unwrap(),
            divider(),
            image("a.png", "A"),
            link("https://example.com", "ex"),
            code("x", "rust"),
        ];
        let kinds: Vec<_> = nodes.iter().filter_map(Node::kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Paragraph,
                NodeKind::Section,
                NodeKind::Table,
                NodeKind::List,
                NodeKind::List,
                NodeKind::List,
                NodeKind::Divider,
                NodeKind::Image,
                NodeKind::Link,
                NodeKind::CodeBlock,
            ]
        );
    }

    #[test]
    fn test_helpers_propagate_validation() {
        assert!(table(["A", "A"], vec![]).is_err());
        assert!(checklist(["a"], vec![true, false]).is_err());
    }
}
