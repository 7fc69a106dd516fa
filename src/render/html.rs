//! HTML rendering for reports.

use std::borrow::Cow;

use rayon::prelude::*;

use super::color::is_dark;
use super::styles::generate_styles;
use super::{PageMargins, RenderOptions};
use crate::model::{
    CodeBlock, Cover, Divider, Footer, Image, Link, List, ListKind, Logo, Node, Paragraph, Report,
    Section, Table,
};
use crate::theme::{preset, DesignTokens};

/// Renders a [`Report`] to a complete HTML document.
///
/// The renderer holds only the token set and options, so one instance can be
/// shared across threads and reused for any number of reports. Output is a
/// pure function of its inputs.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    tokens: DesignTokens,
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a renderer with default options.
    pub fn new(tokens: DesignTokens) -> Self {
        Self::with_options(tokens, RenderOptions::default())
    }

    /// Create a renderer with custom options.
    pub fn with_options(tokens: DesignTokens, options: RenderOptions) -> Self {
        Self { tokens, options }
    }

    /// Create a renderer using the preset named by the report's `theme`.
    ///
    /// A missing or unknown theme name falls back to `mono`.
    pub fn for_report(report: &Report) -> Self {
        let tokens = match report.theme.as_deref() {
            Some(name) => preset::by_name(name).unwrap_or_else(|| {
                log::warn!("Unknown theme '{}', falling back to mono", name);
                preset::mono()
            }),
            None => preset::mono(),
        };
        Self::new(tokens)
    }

    pub fn tokens(&self) -> &DesignTokens {
        &self.tokens
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a report to a complete HTML document.
    pub fn render(&self, report: &Report, margins: &PageMargins) -> String {
        let page_numbering = report.page_numbering();
        let styles = generate_styles(&self.tokens, margins, page_numbering);
        let background = escape_attr(&self.tokens.colors.background);
        let dark = is_dark(&self.tokens.colors.background);
        log::debug!(
            "Rendering '{}' ({} body nodes, dark={}, page_numbering={})",
            report.title(),
            report.body.len(),
            dark,
            page_numbering
        );

        let mut output = String::with_capacity(styles.len() + 4096);

        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!(
            "<html lang=\"{}\" style=\"background-color: {};\">\n",
            escape_attr(&self.options.lang),
            background
        ));
        output.push_str("<head>\n");
        output.push_str("<meta charset=\"UTF-8\">\n");
        output.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        output.push_str(&format!("<title>{}</title>\n", escape_text(report.title())));
        output.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_attr(self.options.highlight.stylesheet(dark))
        ));
        output.push_str(&format!("<style>{}</style>\n", styles));
        if let Some(ref css) = self.options.custom_css {
            output.push_str(&format!("<style>{}</style>\n", css));
        }
        output.push_str("</head>\n");
        output.push_str(&format!(
            "<body style=\"background-color: {};\">\n",
            background
        ));
        output.push_str("<article class=\"report\">\n");

        self.render_report(&mut output, report);

        output.push_str("</article>\n");
        output.push_str(&format!(
            "<script src=\"{}\"></script>\n",
            escape_attr(&self.options.highlight.script)
        ));
        output.push_str("<script>hljs.highlightAll();</script>\n");
        output.push_str("</body>\n");
        output.push_str("</html>\n");

        output
    }

    /// Render several independent reports in parallel, preserving order.
    pub fn render_batch(&self, reports: &[Report], margins: &PageMargins) -> Vec<String> {
        reports
            .par_iter()
            .map(|report| self.render(report, margins))
            .collect()
    }

    fn render_report(&self, output: &mut String, report: &Report) {
        if let Some(ref cover) = report.cover {
            self.render_cover(output, cover);
        }

        if !report.body.is_empty() {
            output.push_str("<main class=\"report-body\">\n");
            for node in &report.body {
                self.render_node(output, node, 0);
            }
            output.push_str("</main>\n");
        }

        if let Some(ref footer) = report.footer {
            self.render_footer(output, footer);
        }
    }

    fn render_node(&self, output: &mut String, node: &Node, depth: usize) {
        match node {
            Node::Section(s) => self.render_section(output, s, depth),
            Node::Paragraph(p) => self.render_paragraph(output, p),
            Node::Table(t) => self.render_table(output, t),
            Node::List(l) => self.render_list(output, l),
            Node::Divider(d) => self.render_divider(output, d),
            Node::Image(i) => self.render_image(output, i),
            Node::Link(l) => self.render_link(output, l),
            Node::CodeBlock(c) => self.render_code_block(output, c),
            Node::Unknown => log::debug!("Skipping node of unknown kind"),
        }
    }

    fn render_cover(&self, output: &mut String, cover: &Cover) {
        output.push_str(&format!(
            "<header class=\"{}\"{}>\n",
            classes("report-cover", &[], cover.class_name.as_deref()),
            id_attr(cover.id.as_deref())
        ));
        output.push_str("<div class=\"cover-content\">\n");

        if let Some(ref logo) = cover.logo {
            render_logo(output, logo);
        }

        output.push_str("<div class=\"cover-title\">\n");
        output.push_str(&format!("<h1>{}</h1>\n", escape_text(&cover.title)));
        if let Some(ref subtitle) = cover.subtitle {
            output.push_str(&format!(
                "<p class=\"cover-subtitle\">{}</p>\n",
                escape_text(subtitle)
            ));
        }
        output.push_str("</div>\n");

        let labels = &self.options.labels;
        let meta = &cover.meta;
        let tags = meta
            .tags
            .as_ref()
            .filter(|tags| !tags.is_empty())
            .map(|tags| tags.join(", "));
        let items = [
            ("author", &labels.author, meta.author.as_deref()),
            ("date", &labels.date, meta.date.as_deref()),
            ("department", &labels.department, meta.department.as_deref()),
            ("version", &labels.version, meta.version.as_deref()),
            ("tags", &labels.tags, tags.as_deref()),
        ];

        output.push_str("<div class=\"cover-meta\">\n");
        output.push_str("<div class=\"meta-grid\">\n");
        for (field, label, value) in items {
            let Some(value) = value.filter(|v| !v.is_empty()) else {
                continue;
            };
            output.push_str(&format!("<div class=\"meta-item {}\">\n", field));
            output.push_str(&format!(
                "<span class=\"meta-label\">{}</span>\n",
                escape_text(label)
            ));
            output.push_str(&format!(
                "<span class=\"meta-value {}\">{}</span>\n",
                field,
                escape_text(value)
            ));
            output.push_str("</div>\n");
        }
        output.push_str("</div>\n");
        output.push_str("</div>\n");

        output.push_str("</div>\n");
        output.push_str("</header>\n");
    }

    fn render_section(&self, output: &mut String, section: &Section, depth: usize) {
        let level = (depth + 2).min(3);
        let modifiers: &[&str] = if section.collapsible {
            &["collapsible"]
        } else {
            &[]
        };

        output.push_str(&format!(
            "<section class=\"{}\" id=\"{}\">\n",
            classes("report-section", modifiers, section.class_name.as_deref()),
            escape_attr(&section.anchor_id())
        ));
        output.push_str(&format!(
            "<h{level} class=\"section-title\">{}</h{level}>\n",
            escape_text(&section.title),
        ));
        output.push_str("<div class=\"section-content\">\n");
        for node in &section.content {
            self.render_node(output, node, depth + 1);
        }
        output.push_str("</div>\n");
        output.push_str("</section>\n");
    }

    fn render_paragraph(&self, output: &mut String, p: &Paragraph) {
        let modifiers: Vec<&str> = [p.emphasis.class(), p.align.class()]
            .into_iter()
            .flatten()
            .collect();

        output.push_str(&format!(
            "<p class=\"{}\"{}>{}</p>\n",
            classes("paragraph", &modifiers, p.class_name.as_deref()),
            id_attr(p.id.as_deref()),
            escape_text(&p.text)
        ));
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        let modifiers: Vec<&str> = table.highlight().class().into_iter().collect();

        output.push_str(&format!(
            "<div class=\"table-container\"{}>\n",
            id_attr(table.id())
        ));
        if let Some(caption) = table.caption() {
            output.push_str(&format!(
                "<div class=\"table-caption\">{}</div>\n",
                escape_text(caption)
            ));
        }
        output.push_str(&format!(
            "<table class=\"{}\">\n",
            classes("report-table", &modifiers, table.class_name())
        ));

        output.push_str("<thead>\n<tr>");
        for header in table.headers() {
            output.push_str(&format!("<th>{}</th>", escape_text(header)));
        }
        output.push_str("</tr>\n</thead>\n");

        output.push_str("<tbody>\n");
        for row in table.rows() {
            output.push_str("<tr>");
            for cell in table.row_cells(row) {
                output.push_str(&format!("<td>{}</td>", escape_text(&cell)));
            }
            output.push_str("</tr>\n");
        }
        output.push_str("</tbody>\n");

        output.push_str("</table>\n");
        output.push_str("</div>\n");
    }

    fn render_list(&self, output: &mut String, list: &List) {
        if list.kind() == ListKind::Checklist {
            output.push_str(&format!(
                "<div class=\"{}\"{}>\n",
                classes("checklist-container", &[], list.class_name()),
                id_attr(list.id())
            ));
            for (index, item) in list.items().iter().enumerate() {
                let input = if list.is_checked(index) {
                    "<input type=\"checkbox\" checked disabled>"
                } else {
                    "<input type=\"checkbox\" disabled>"
                };
                output.push_str(&format!(
                    "<label class=\"checklist-item\">{}<span class=\"checklist-text\">{}</span></label>\n",
                    input,
                    escape_text(item)
                ));
            }
            output.push_str("</div>\n");
            return;
        }

        let tag = if list.kind() == ListKind::Ordered {
            "ol"
        } else {
            "ul"
        };
        let base = format!("list-{}", list.kind().as_str());

        output.push_str(&format!(
            "<{tag} class=\"{}\"{}>\n",
            classes(&base, &[], list.class_name()),
            id_attr(list.id())
        ));
        for item in list.items() {
            output.push_str(&format!("<li>{}</li>\n", escape_text(item)));
        }
        output.push_str(&format!("</{tag}>\n"));
    }

    fn render_divider(&self, output: &mut String, divider: &Divider) {
        let style = format!("divider-{}", divider.style.as_str());
        output.push_str(&format!(
            "<hr class=\"{}\"{}>\n",
            classes("divider", &[style.as_str()], divider.class_name.as_deref()),
            id_attr(divider.id.as_deref())
        ));
    }

    fn render_image(&self, output: &mut String, image: &Image) {
        let mut dims = Vec::new();
        if let Some(width) = image.width {
            dims.push(format!("width: {}px;", width));
        }
        if let Some(height) = image.height {
            dims.push(format!("height: {}px;", height));
        }
        let style = if dims.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", dims.join(" "))
        };

        output.push_str(&format!(
            "<figure class=\"{}\"{}>\n",
            classes("image-container", &[], image.class_name.as_deref()),
            id_attr(image.id.as_deref())
        ));
        output.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"report-image\"{}>\n",
            escape_attr(&image.src),
            escape_attr(&image.alt),
            style
        ));
        if let Some(ref caption) = image.caption {
            output.push_str(&format!(
                "<figcaption class=\"image-caption\">{}</figcaption>\n",
                escape_text(caption)
            ));
        }
        output.push_str("</figure>\n");
    }

    fn render_link(&self, output: &mut String, link: &Link) {
        let target = if link.new_tab {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        let title = link
            .title
            .as_deref()
            .map(|t| format!(" title=\"{}\"", escape_attr(t)))
            .unwrap_or_default();

        output.push_str(&format!(
            "<a href=\"{}\" class=\"{}\"{}{}{}>{}</a>\n",
            escape_attr(&link.href),
            classes("report-link", &[], link.class_name.as_deref()),
            id_attr(link.id.as_deref()),
            target,
            title,
            escape_text(&link.text)
        ));
    }

    fn render_code_block(&self, output: &mut String, block: &CodeBlock) {
        let escaped = escape_text(&block.code);
        let content = if block.show_line_numbers {
            escaped
                .split('\n')
                .enumerate()
                .map(|(i, line)| format!("<span class=\"line-number\">{}</span> {}", i + 1, line))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            escaped.into_owned()
        };
        let language = block.language.as_deref().unwrap_or("none");

        output.push_str(&format!(
            "<div class=\"{}\"{}>\n",
            classes("codeblock-container", &[], block.class_name.as_deref()),
            id_attr(block.id.as_deref())
        ));
        if let Some(ref name) = block.file_name {
            output.push_str(&format!(
                "<div class=\"codeblock-filename\">{}</div>\n",
                escape_text(name)
            ));
        }
        output.push_str(&format!(
            "<pre class=\"codeblock\"><code class=\"language-{}\">{}</code></pre>\n",
            escape_attr(language),
            content
        ));
        output.push_str("</div>\n");
    }

    fn render_footer(&self, output: &mut String, footer: &Footer) {
        output.push_str(&format!(
            "<footer class=\"{}\"{}>\n",
            classes("report-footer", &[], footer.class_name.as_deref()),
            id_attr(footer.id.as_deref())
        ));
        output.push_str("<div class=\"footer-content\">\n");
        output.push_str(&format!(
            "<span class=\"footer-text\">{}</span>\n",
            escape_text(&footer.text)
        ));
        output.push_str("</div>\n");
        output.push_str("</footer>\n");
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(preset::mono())
    }
}

fn render_logo(output: &mut String, logo: &Logo) {
    output.push_str("<div class=\"cover-logo\">\n");
    output.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\">\n",
        escape_attr(&logo.src),
        escape_attr(&logo.alt),
        logo.width.unwrap_or(Logo::DEFAULT_SIZE),
        logo.height.unwrap_or(Logo::DEFAULT_SIZE)
    ));
    output.push_str("</div>\n");
}

/// Join a base class, modifier classes, and an optional user class.
fn classes(base: &str, modifiers: &[&str], extra: Option<&str>) -> String {
    let mut out = base.to_string();
    for modifier in modifiers {
        out.push(' ');
        out.push_str(modifier);
    }
    if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
        out.push(' ');
        out.push_str(&escape_attr(extra));
    }
    out
}

fn id_attr(id: Option<&str>) -> String {
    match id {
        Some(id) => format!(" id=\"{}\"", escape_attr(id)),
        None => String::new(),
    }
}

/// Escape `&`, `<` and `>` for element content.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(|c| matches!(c, '&' | '<' | '>')) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape for a double-quoted attribute value.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(|c| matches!(c, '&' | '<' | '>' | '"')) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{dsl, row, Alignment, CoverMeta, Highlight, ReportMeta};
    use serde_json::json;

    fn render(report: &Report) -> String {
        HtmlRenderer::default().render(report, &PageMargins::default())
    }

    fn report_with(nodes: Vec<Node>) -> Report {
        Report::builder(ReportMeta::new("Test")).extend(nodes).build()
    }

    #[test]
    fn test_document_shell() {
        let html = render(&report_with(vec![]));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\" style=\"background-color: #ffffff;\">"));
        assert!(html.contains("<title>Test</title>"));
        assert!(html.contains("atom-one-light.min.css"));
        assert!(html.contains("hljs.highlightAll();"));
        assert!(!html.contains("<main class=\"report-body\">"));
    }

    #[test]
    fn test_section_heading_levels() {
        let report = report_with(vec![dsl::section(
            "Outer Part",
            vec![dsl::section("Inner", vec![dsl::section("Deep", vec![])])],
        )]);
        let html = render(&report);
        assert!(html.contains("<section class=\"report-section\" id=\"section-outer-part\">"));
        assert!(html.contains("<h2 class=\"section-title\">Outer Part</h2>"));
        assert!(html.contains("<h3 class=\"section-title\">Inner</h3>"));
        assert!(html.contains("<h3 class=\"section-title\">Deep</h3>"));
        assert!(!html.contains("<h4"));
    }

    #[test]
    fn test_collapsible_section() {
        let section = Section::new("A", vec![]).collapsible().with_id("a1");
        let html = render(&report_with(vec![section.into()]));
        assert!(html.contains("<section class=\"report-section collapsible\" id=\"a1\">"));
    }

    #[test]
    fn test_paragraph_classes() {
        let html = render(&report_with(vec![
            Paragraph::new("plain").into(),
            Paragraph::new("loud")
                .strong()
                .align(Alignment::Center)
                .with_id("p1")
                .into(),
        ]));
        assert!(html.contains("<p class=\"paragraph\">plain</p>"));
        assert!(html.contains("<p class=\"paragraph text-strong text-center\" id=\"p1\">loud</p>"));
    }

    #[test]
    fn test_table_cells_in_header_order() {
        let table = Table::new(
            ["Name", "Value"],
            vec![row([("Value", json!("100")), ("Name", json!("Test"))])],
        )
        .unwrap()
        .with_highlight(Highlight::Row)
        .with_caption("Caption");
        let html = render(&report_with(vec![table.into()]));

        assert!(html.contains("<td>Test</td><td>100</td>"));
        assert!(html.contains("<th>Name</th><th>Value</th>"));
        assert!(html.contains("<table class=\"report-table highlight-row\">"));
        assert!(html.contains("<div class=\"table-caption\">Caption</div>"));
    }

    #[test]
    fn test_table_missing_cell() {
        let table = Table::new(["A", "B"], vec![row([("B", json!(2))])]).unwrap();
        let html = render(&report_with(vec![table.into()]));
        assert!(html.contains("<tr><td></td><td>2</td></tr>"));
    }

    #[test]
    fn test_checklist() {
        let list = dsl::checklist(["Task 1", "Task 2", "Task 3"], vec![true, false]).unwrap();
        let html = render(&report_with(vec![list]));
        assert_eq!(html.matches("<input type=\"checkbox\" checked disabled>").count(), 1);
        assert_eq!(html.matches("<input type=\"checkbox\" disabled>").count(), 2);
        assert!(html.contains("<span class=\"checklist-text\">Task 1</span>"));
    }

    #[test]
    fn test_plain_lists() {
        let html = render(&report_with(vec![dsl::ordered(["one"]), dsl::list(["dot"])]));
        assert!(html.contains("<ol class=\"list-ordered\">\n<li>one</li>\n</ol>"));
        assert!(html.contains("<ul class=\"list-unordered\">\n<li>dot</li>\n</ul>"));
    }

    #[test]
    fn test_code_block_line_numbers() {
        let block = CodeBlock::new("a < b\nc")
            .language("rust")
            .with_line_numbers()
            .with_file_name("main.rs");
        let html = render(&report_with(vec![block.into()]));
        assert!(html.contains("<div class=\"codeblock-filename\">main.rs</div>"));
        assert!(html.contains(
            "<code class=\"language-rust\"><span class=\"line-number\">1</span> a &lt; b\n<span class=\"line-number\">2</span> c</code>"
        ));
    }

    #[test]
    fn test_code_block_without_language() {
        let html = render(&report_with(vec![CodeBlock::new("x").into()]));
        assert!(html.contains("<code class=\"language-none\">x</code>"));
    }

    #[test]
    fn test_image_and_link() {
        let html = render(&report_with(vec![
            Image::new("a.png", "A").with_size(100, 50).with_caption("Cap").into(),
            Image::new("b.png", "B").into(),
            Link::new("https://x.dev", "X").in_new_tab().with_title("Go").into(),
        ]));
        assert!(html.contains(
            "<img src=\"a.png\" alt=\"A\" class=\"report-image\" style=\"width: 100px; height: 50px;\">"
        ));
        assert!(html.contains("<img src=\"b.png\" alt=\"B\" class=\"report-image\">"));
        assert!(html.contains("<figcaption class=\"image-caption\">Cap</figcaption>"));
        assert!(html.contains(
            "<a href=\"https://x.dev\" class=\"report-link\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"Go\">X</a>"
        ));
    }

    #[test]
    fn test_divider_style() {
        let html = render(&report_with(vec![dsl::divider_styled(
            crate::model::DividerStyle::Dashed,
        )]));
        assert!(html.contains("<hr class=\"divider divider-dashed\">"));
    }

    #[test]
    fn test_cover_meta_and_logo() {
        let report = Report::builder(ReportMeta::new("R").with_author("Kim").with_tags(["a", "b"]))
            .cover(
                Cover::new("")
                    .with_subtitle("Sub")
                    .with_meta(CoverMeta {
                        version: Some("1.0".into()),
                        ..Default::default()
                    })
                    .with_logo(Logo::new("logo.png", "Logo")),
            )
            .build();
        let html = render(&report);

        assert!(html.contains("<h1>R</h1>"));
        assert!(html.contains("<p class=\"cover-subtitle\">Sub</p>"));
        assert!(html.contains("width=\"120\" height=\"120\""));
        assert!(html.contains("<span class=\"meta-value author\">Kim</span>"));
        assert!(html.contains("<span class=\"meta-value version\">1.0</span>"));
        assert!(html.contains("<span class=\"meta-value tags\">a, b</span>"));
        assert!(!html.contains("meta-item date"));
    }

    #[test]
    fn test_footer() {
        let report = Report::builder(ReportMeta::new("R"))
            .footer(Footer::new("© ACME"))
            .build();
        let html = render(&report);
        assert!(html.contains("<span class=\"footer-text\">© ACME</span>"));
    }

    #[test]
    fn test_unknown_node_renders_nothing() {
        let report = report_with(vec![Node::Unknown, dsl::p("after")]);
        let html = render(&report);
        assert!(html.contains("<main class=\"report-body\">\n<p class=\"paragraph\">after</p>"));
    }

    #[test]
    fn test_text_escaped() {
        let report = Report::builder(ReportMeta::new("<b>&</b>"))
            .push(dsl::p("1 < 2 & 3 > 2"))
            .push(Link::new("https://x.dev/?a=1&b=\"2\"", "x"))
            .build();
        let html = render(&report);
        assert!(html.contains("<title>&lt;b&gt;&amp;&lt;/b&gt;</title>"));
        assert!(html.contains("1 &lt; 2 &amp; 3 &gt; 2"));
        assert!(html.contains("href=\"https://x.dev/?a=1&amp;b=&quot;2&quot;\""));
    }

    #[test]
    fn test_dark_theme_stylesheet() {
        let html = HtmlRenderer::new(preset::dark())
            .render(&report_with(vec![]), &PageMargins::default());
        assert!(html.contains("atom-one-dark.min.css"));
    }

    #[test]
    fn test_custom_css_and_lang() {
        let renderer = HtmlRenderer::with_options(
            preset::mono(),
            RenderOptions::new().with_lang("ko").with_custom_css(".x{}"),
        );
        let html = renderer.render(&report_with(vec![]), &PageMargins::default());
        assert!(html.contains("<html lang=\"ko\""));
        assert!(html.contains("<style>.x{}</style>\n</head>"));
    }

    #[test]
    fn test_for_report_theme() {
        let mut report = report_with(vec![]);
        report.theme = Some("terminal".into());
        assert_eq!(HtmlRenderer::for_report(&report).tokens(), &preset::terminal());

        report.theme = Some("neon".into());
        assert_eq!(HtmlRenderer::for_report(&report).tokens(), &preset::mono());
    }

    #[test]
    fn test_render_batch_keeps_order() {
        let reports: Vec<Report> = (0..8)
            .map(|i| Report::builder(ReportMeta::new(format!("R{}", i))).build())
            .collect();
        let renderer = HtmlRenderer::default();
        let out = renderer.render_batch(&reports, &PageMargins::default());
        assert_eq!(out.len(), 8);
        for (i, html) in out.iter().enumerate() {
            assert!(html.contains(&format!("<title>R{}</title>", i)));
        }
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape_text("plain"), Cow::Borrowed(_)));
        assert_eq!(escape_attr("a\"b"), "a&quot;b");
    }
}
