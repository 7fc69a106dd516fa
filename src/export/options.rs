//! Print options for PDF export.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::render::PageMargins;

/// Footer template used when a report asks for page numbers.
pub const PAGE_NUMBER_FOOTER: &str = r#"<div style="font-size: 10px; text-align: center; width: 100%; padding: 5px 0;"><span class="pageNumber"></span> / <span class="totalPages"></span></div>"#;

/// Paper size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperFormat {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Ledger,
}

impl PaperFormat {
    pub const ALL: [PaperFormat; 7] = [
        PaperFormat::A3,
        PaperFormat::A4,
        PaperFormat::A5,
        PaperFormat::Letter,
        PaperFormat::Legal,
        PaperFormat::Tabloid,
        PaperFormat::Ledger,
    ];

    /// Portrait `(width, height)` in inches.
    pub fn size_inches(self) -> (f64, f64) {
        match self {
            PaperFormat::A3 => (11.69, 16.54),
            PaperFormat::A4 => (8.27, 11.69),
            PaperFormat::A5 => (5.83, 8.27),
            PaperFormat::Letter => (8.5, 11.0),
            PaperFormat::Legal => (8.5, 14.0),
            PaperFormat::Tabloid => (11.0, 17.0),
            PaperFormat::Ledger => (17.0, 11.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperFormat::A3 => "A3",
            PaperFormat::A4 => "A4",
            PaperFormat::A5 => "A5",
            PaperFormat::Letter => "Letter",
            PaperFormat::Legal => "Legal",
            PaperFormat::Tabloid => "Tabloid",
            PaperFormat::Ledger => "Ledger",
        }
    }
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PaperFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown paper format '{}'", s))
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Options for PDF export.
///
/// Missing fields take their defaults when deserialized, so a partial JSON
/// object merges over [`PdfOptions::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PdfOptions {
    pub format: PaperFormat,

    pub orientation: Orientation,

    /// Print margins, applied through the stylesheet
    pub margin: PageMargins,

    pub print_background: bool,

    pub scale: f64,

    pub display_header_footer: bool,

    pub header_template: String,

    pub footer_template: String,

    #[serde(rename = "preferCSSPageSize")]
    pub prefer_css_page_size: bool,

    /// Ask the engine for a tagged (accessible) PDF
    pub tagged: bool,
}

impl PdfOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: PaperFormat) -> Self {
        self.format = format;
        self
    }

    pub fn landscape(mut self) -> Self {
        self.orientation = Orientation::Landscape;
        self
    }

    pub fn with_margin(mut self, margin: PageMargins) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, print: bool) -> Self {
        self.print_background = print;
        self
    }

    /// Show the given header and footer templates on every page.
    pub fn with_header_footer(
        mut self,
        header: impl Into<String>,
        footer: impl Into<String>,
    ) -> Self {
        self.display_header_footer = true;
        self.header_template = header.into();
        self.footer_template = footer.into();
        self
    }

    /// Resolve into the request sent to the engine.
    ///
    /// Page numbering forces header/footer display and replaces the footer
    /// template with [`PAGE_NUMBER_FOOTER`].
    pub fn print_request(&self, page_numbering: bool) -> PrintRequest {
        let (display_header_footer, footer_template) = if page_numbering {
            (true, PAGE_NUMBER_FOOTER.to_string())
        } else {
            (self.display_header_footer, self.footer_template.clone())
        };

        PrintRequest {
            format: self.format,
            landscape: self.orientation == Orientation::Landscape,
            print_background: self.print_background,
            scale: self.scale,
            display_header_footer,
            header_template: self.header_template.clone(),
            footer_template,
            prefer_css_page_size: self.prefer_css_page_size,
            tagged: self.tagged,
        }
    }
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            format: PaperFormat::A4,
            orientation: Orientation::Portrait,
            margin: PageMargins::all("2cm"),
            print_background: true,
            scale: 1.0,
            display_header_footer: false,
            header_template: String::new(),
            footer_template: String::new(),
            prefer_css_page_size: true,
            tagged: true,
        }
    }
}

/// What a page engine is asked to print. Margins are not part of the
/// request; they are already in the markup.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintRequest {
    pub format: PaperFormat,
    pub landscape: bool,
    pub print_background: bool,
    pub scale: f64,
    pub display_header_footer: bool,
    pub header_template: String,
    pub footer_template: String,
    pub prefer_css_page_size: bool,
    pub tagged: bool,
}

impl PrintRequest {
    /// Paper `(width, height)` in inches, swapped for landscape.
    pub fn paper_inches(&self) -> (f64, f64) {
        let (w, h) = self.format.size_inches();
        if self.landscape {
            (h, w)
        } else {
            (w, h)
        }
    }
}
