//! # reportkit
//!
//! Declarative, themeable reports rendered to HTML and PDF.
//!
//! A report is a tree of typed nodes (cover, sections, paragraphs, tables,
//! lists, images, links, code blocks). A theme is a set of design tokens.
//! The renderer combines the two into one self-contained HTML document, and
//! the export layer hands that document to a page engine for printing.
//!
//! ## Quick Start
//!
//! ```
//! use reportkit::model::{dsl::*, row, Cover, Footer, Report, ReportMeta};
//! use reportkit::render::{HtmlRenderer, PageMargins};
//! use reportkit::theme::preset;
//! use serde_json::json;
//!
//! fn main() -> reportkit::Result<()> {
//!     let report = Report::builder(ReportMeta::new("Weekly Report").with_author("Kim"))
//!         .cover(Cover::new("Weekly Report").with_subtitle("Week 42"))
//!         .push(section("Summary", vec![p("Everything shipped.")]))
//!         .push(table(
//!             ["Task", "Status"],
//!             vec![row([("Task", json!("Release")), ("Status", json!("Done"))])],
//!         )?)
//!         .footer(Footer::new("Internal").with_page_numbers())
//!         .build();
//!
//!     let html = HtmlRenderer::new(preset::office()).render(&report, &PageMargins::all("2cm"));
//!     assert!(html.contains("<title>Weekly Report</title>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Themes**: five built-in presets and a builder for partial overrides
//! - **Validated model**: table and checklist shape is checked on construction
//!   and on JSON input
//! - **Print-aware styling**: margins, page numbers, dark/light code themes
//! - **PDF export**: pluggable page engine, headless Chrome with `chrome`
//! - **Async**: tokio wrapper for exports with `async`

pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod theme;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{EngineLauncher, PageEngine, PdfBuilder, PdfOptions};
pub use model::{Node, Report, ReportMeta};
pub use render::{HtmlRenderer, JsonFormat, PageMargins, RenderOptions};
pub use theme::{DesignTokens, ThemeBuilder, ThemePreset};

/// Render a report with the given tokens and default options.
///
/// # Example
///
/// ```
/// use reportkit::{render_html, PageMargins, Report, ReportMeta};
///
/// let report = Report::builder(ReportMeta::new("My Report")).build();
/// let html = render_html(&report, &reportkit::theme::preset::mono(), &PageMargins::default());
/// assert!(html.contains("<title>My Report</title>"));
/// ```
pub fn render_html(report: &Report, tokens: &DesignTokens, margins: &PageMargins) -> String {
    HtmlRenderer::new(tokens.clone()).render(report, margins)
}

/// Parse a JSON report and render it with its own theme.
///
/// The report's `theme` names a preset; unknown or missing names use `mono`.
pub fn render_json(json: &str, margins: &PageMargins) -> Result<String> {
    let report = Report::from_json(json)?;
    report.validate();
    Ok(HtmlRenderer::for_report(&report).render(&report, margins))
}
