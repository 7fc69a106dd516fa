//! Report-level types.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Node;
use crate::error::Result;

/// A complete report: metadata, optional cover and footer, and body nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReportSpec", rename_all = "camelCase")]
pub struct Report {
    /// Report metadata (title, author, etc.)
    pub meta: ReportMeta,

    /// Name of a built-in theme preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Title page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Cover>,

    /// Body nodes in document order
    pub body: Vec<Node>,

    /// Page footer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

impl Report {
    /// Start building a report.
    pub fn builder(meta: ReportMeta) -> ReportBuilder {
        ReportBuilder::new(meta)
    }

    /// Parse a report from JSON.
    ///
    /// Table and checklist shape is validated while parsing; cover metadata
    /// is merged with the report metadata the same way the builder does.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the report to JSON.
    pub fn to_json(&self, format: crate::render::JsonFormat) -> Result<String> {
        crate::render::to_json(self, format)
    }

    /// Report title.
    pub fn title(&self) -> &str {
        &self.meta.title
    }

    /// Whether the footer asks for page numbers.
    pub fn page_numbering(&self) -> bool {
        self.footer.as_ref().is_some_and(|f| f.page_number)
    }

    /// Check a report for tolerated anomalies and log each one.
    ///
    /// Returns the list of warnings. Nothing here is fatal: unknown node
    /// kinds render as nothing and dates are printed as given.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut dates = vec![("meta", self.meta.date.as_deref())];
        if let Some(ref cover) = self.cover {
            dates.push(("cover", cover.meta.date.as_deref()));
        }
        for (origin, date) in dates {
            if let Some(date) = date {
                if !is_iso_date(date) {
                    warnings.push(format!("{} date \"{}\" is not ISO 8601", origin, date));
                }
            }
        }

        count_unknown(&self.body, "body", &mut warnings);

        for warning in &warnings {
            log::warn!("{}", warning);
        }
        warnings
    }
}

fn count_unknown(nodes: &[Node], path: &str, warnings: &mut Vec<String>) {
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Node::Unknown => {
                warnings.push(format!("{}[{}] has an unknown node kind", path, index));
            }
            Node::Section(section) => {
                let child = format!("{}[{}]", path, index);
                count_unknown(&section.content, &child, warnings);
            }
            _ => {}
        }
    }
}

fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}

/// Report metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    /// Report title
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Date as free text, usually `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ReportMeta {
    /// Create metadata with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the date to today in local time (`YYYY-MM-DD`).
    pub fn dated_today(mut self) -> Self {
        self.date = Some(Local::now().format("%Y-%m-%d").to_string());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// Metadata shown on the cover: every report field except the title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl CoverMeta {
    /// Fill every unset field from the report metadata. Empty strings count
    /// as unset.
    pub fn merged_with(self, meta: &ReportMeta) -> Self {
        Self {
            author: fallback(self.author, &meta.author),
            date: fallback(self.date, &meta.date),
            department: fallback(self.department, &meta.department),
            version: fallback(self.version, &meta.version),
            tags: self.tags.or_else(|| meta.tags.clone()),
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.date.is_none()
            && self.department.is_none()
            && self.version.is_none()
            && self.tags.is_none()
    }
}

fn fallback(value: Option<String>, report: &Option<String>) -> Option<String> {
    value
        .filter(|s| !s.is_empty())
        .or_else(|| report.clone())
}

impl From<&ReportMeta> for CoverMeta {
    fn from(meta: &ReportMeta) -> Self {
        CoverMeta::default().merged_with(meta)
    }
}

/// Title page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Cover heading; empty means "use the report title"
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "CoverMeta::is_empty")]
    pub meta: CoverMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
}

impl Cover {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Override metadata shown on the cover.
    pub fn with_meta(mut self, meta: CoverMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_logo(mut self, logo: Logo) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Resolve the cover against the report metadata.
    fn resolve(mut self, meta: &ReportMeta) -> Self {
        if self.title.is_empty() {
            self.title = meta.title.clone();
        }
        self.meta = self.meta.merged_with(meta);
        self
    }
}

/// Cover logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub src: String,

    #[serde(default)]
    pub alt: String,

    /// Width in pixels (120 when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Height in pixels (120 when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Logo {
    /// Default edge length in pixels.
    pub const DEFAULT_SIZE: u32 = 120;

    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: None,
            height: None,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Page footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(default)]
    pub text: String,

    /// Print `page / total` at the bottom of every page
    #[serde(default)]
    pub page_number: bool,
}

impl Footer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_page_numbers(mut self) -> Self {
        self.page_number = true;
        self
    }
}

/// Builder for [`Report`].
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    meta: ReportMeta,
    theme: Option<String>,
    cover: Option<Cover>,
    body: Vec<Node>,
    footer: Option<Footer>,
}

impl ReportBuilder {
    pub fn new(meta: ReportMeta) -> Self {
        Self {
            meta,
            theme: None,
            cover: None,
            body: Vec::new(),
            footer: None,
        }
    }

    /// Select a preset by name.
    pub fn theme(mut self, name: impl Into<String>) -> Self {
        self.theme = Some(name.into());
        self
    }

    pub fn cover(mut self, cover: Cover) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Append a body node.
    pub fn push(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }

    /// Append several body nodes.
    pub fn extend(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.body.extend(nodes);
        self
    }

    pub fn footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Finish the report, merging cover metadata over the report metadata.
    pub fn build(self) -> Report {
        let cover = self.cover.map(|c| c.resolve(&self.meta));
        Report {
            meta: self.meta,
            theme: self.theme,
            cover,
            body: self.body,
            footer: self.footer,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportSpec {
    meta: ReportMeta,
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    cover: Option<Cover>,
    #[serde(default)]
    body: Vec<Node>,
    #[serde(default)]
    footer: Option<Footer>,
}

impl From<ReportSpec> for Report {
    fn from(spec: ReportSpec) -> Self {
        let mut builder = ReportBuilder::new(spec.meta).extend(spec.body);
        builder.theme = spec.theme;
        builder.cover = spec.cover;
        builder.footer = spec.footer;
        builder.build()
    }
}
