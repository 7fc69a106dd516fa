//! Document model for structured reports.
//!
//! A [`Report`] owns a tree of [`Node`] values. Nodes are plain immutable data
//! with no back-references; shape rules (table headers, checklist flags) are
//! checked when a node is constructed or deserialized, so the renderer never
//! sees an invalid tree.

mod code;
mod document;
pub mod dsl;
mod list;
mod media;
mod node;
mod paragraph;
mod table;

pub use code::{is_known_language, CodeBlock, KNOWN_LANGUAGES};
pub use document::{Cover, CoverMeta, Footer, Logo, Report, ReportBuilder, ReportMeta};
pub use list::{List, ListKind};
pub use media::{Divider, DividerStyle, Image, Link};
pub use node::{Node, NodeKind, Section};
pub use paragraph::{Alignment, Emphasis, Paragraph};
pub use table::{cell_text, row, Highlight, Table, TableRow};
