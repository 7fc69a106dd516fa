//! Stylesheet generation from design tokens.

use super::PageMargins;
use crate::theme::DesignTokens;

/// Bottom `@page` margin reserved for the page-number footer.
pub const PAGE_NUMBER_MARGIN: &str = "20mm";

/// Monospace stack used by code blocks regardless of theme.
const CODE_FONT_FAMILY: &str = "'Monaco', 'Menlo', 'Ubuntu Mono', monospace";

/// Generate the embedded stylesheet for a report.
///
/// Token values are substituted verbatim. `margins` only affect the
/// `@media print` block, where the `@page` side margins are zeroed and the
/// given sides are reapplied on `body`. With `page_numbering`, the bottom
/// `@page` margin is reserved for the footer.
pub fn generate_styles(tokens: &DesignTokens, margins: &PageMargins, page_numbering: bool) -> String {
    let mut output = String::with_capacity(12 * 1024);

    write_base(&mut output, tokens);
    write_cover(&mut output, tokens);
    write_sections(&mut output, tokens);
    write_tables(&mut output, tokens);
    write_lists(&mut output, tokens);
    write_media(&mut output, tokens);
    write_code(&mut output, tokens);
    write_print(&mut output, tokens, margins, page_numbering);

    output
}

fn write_base(output: &mut String, t: &DesignTokens) {
    output.push_str(&format!(
        r#"
* {{
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}}

body {{
  font-family: {font_family};
  font-size: {base};
  line-height: {line_height};
  color: {text};
  background-color: {background};
  padding: {s8};
}}

.report {{
  max-width: 210mm;
  margin: 0 auto;
  background-color: {background};
  border: none;
  overflow: hidden;
  font-family: {font_family};
}}
"#,
        font_family = t.typography.font_family,
        base = t.typography.font_size.base,
        line_height = t.typography.line_height.normal,
        text = t.colors.text.primary,
        background = t.colors.background,
        s8 = t.spacing.s8,
    ));
}

fn write_cover(output: &mut String, t: &DesignTokens) {
    let fs = &t.typography.font_size;
    let fw = &t.typography.font_weight;
    let sp = &t.spacing;

    output.push_str(&format!(
        r#"
.report-cover {{
  padding: {s16} {s8};
  text-align: center;
  border-bottom: 1px solid {border};
  background: {background};
  color: {text};
}}

.cover-content {{
  max-width: 600px;
  margin: 0 auto;
}}

.cover-logo {{
  margin-bottom: {s8};
}}

.cover-logo img {{
  border-radius: {radius_sm};
  border: 1px solid {border};
}}

.cover-title h1 {{
  font-size: {xxxl};
  font-weight: {bold};
  margin-bottom: {s4};
  color: {text};
}}

.cover-subtitle {{
  font-size: {xl};
  color: {muted};
  margin-bottom: {s12};
  font-weight: {normal};
}}

.meta-grid {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
  gap: {s6} {s8};
  margin-top: {s12};
  max-width: 600px;
  margin-left: auto;
  margin-right: auto;
}}

.meta-item {{
  text-align: left;
  padding: {s1} 0;
  display: flex;
  flex-direction: column;
}}

.meta-item.author {{
  grid-column: span 2;
}}

.meta-label {{
  display: block;
  font-size: {sm};
  color: {muted};
  margin-bottom: {s1};
  font-weight: {semibold};
  text-transform: uppercase;
  letter-spacing: 0.02em;
}}

.meta-value {{
  display: block;
  font-size: {base};
  font-weight: {normal};
  color: {text};
}}

.meta-value.author {{
  font-weight: {bold};
  font-size: {lg};
}}

.meta-value.date {{
  font-style: italic;
}}

.meta-value.department {{
  color: {primary};
}}

.meta-value.version {{
  font-family: monospace;
  background-color: {surface};
  padding: {s1} {s2};
  border-radius: {radius_sm};
}}

.meta-value.tags {{
  font-style: italic;
  color: {muted};
}}
"#,
        s1 = sp.s1,
        s2 = sp.s2,
        s4 = sp.s4,
        s6 = sp.s6,
        s8 = sp.s8,
        s12 = sp.s12,
        s16 = sp.s16,
        sm = fs.sm,
        base = fs.base,
        lg = fs.lg,
        xl = fs.xl,
        xxxl = fs.xxxl,
        normal = fw.normal,
        semibold = fw.semibold,
        bold = fw.bold,
        border = t.colors.border,
        background = t.colors.background,
        surface = t.colors.surface,
        primary = t.colors.primary,
        text = t.colors.text.primary,
        muted = t.colors.text.muted,
        radius_sm = t.borders.radius.sm,
    ));
}

fn write_sections(output: &mut String, t: &DesignTokens) {
    let sp = &t.spacing;

    output.push_str(&format!(
        r#"
.report-body {{
  padding: {s12} {s8};
}}

.report-section {{
  margin-bottom: {s12};
  page-break-inside: avoid;
}}

.report-section:last-child {{
  margin-bottom: 0;
}}

.section-title {{
  font-size: {xxl};
  font-weight: {bold};
  color: {primary};
  margin-bottom: {s6};
  padding-bottom: {s2};
  border-bottom: 1px solid {border};
}}

.section-content {{
  margin-top: {s4};
  line-height: {tight};
}}

.paragraph {{
  margin-bottom: {s4};
  text-align: left;
  line-height: {tight};
}}

.paragraph:last-child {{
  margin-bottom: 0;
}}

.paragraph.text-strong {{
  font-weight: {bold};
  color: {text};
}}

.paragraph.text-muted {{
  color: {muted};
  font-style: italic;
}}

.paragraph.text-center {{
  text-align: center;
}}

.paragraph.text-right {{
  text-align: right;
}}

.paragraph.text-justify {{
  text-align: justify;
}}
"#,
        s2 = sp.s2,
        s4 = sp.s4,
        s6 = sp.s6,
        s8 = sp.s8,
        s12 = sp.s12,
        xxl = t.typography.font_size.xxl,
        bold = t.typography.font_weight.bold,
        tight = t.typography.line_height.tight,
        primary = t.colors.primary,
        border = t.colors.border,
        text = t.colors.text.primary,
        muted = t.colors.text.muted,
    ));
}

fn write_tables(output: &mut String, t: &DesignTokens) {
    let sp = &t.spacing;

    output.push_str(&format!(
        r#"
.table-container {{
  margin: {s6} 0;
  overflow-x: auto;
  border: 1px solid {border};
}}

.table-caption {{
  font-size: {sm};
  color: {muted};
  margin-bottom: {s2};
  text-align: center;
  font-weight: {semibold};
  padding: {s2};
}}

.report-table {{
  width: 100%;
  border-collapse: collapse;
  font-size: {sm};
  background: {background};
}}

.report-table th {{
  background-color: {primary};
  color: {inverted};
  font-weight: {bold};
  text-align: left;
  padding: {s3} {s4};
  border: 1px solid {border};
}}

.report-table td {{
  padding: {s3} {s4};
  border: 1px solid {border};
  vertical-align: top;
}}

.report-table tr:nth-child(even) {{
  background-color: {surface};
}}

.report-table.highlight-row tbody tr:hover {{
  background-color: {secondary};
  color: {inverted};
}}

.report-table.highlight-column td:first-child {{
  font-weight: {semibold};
  background-color: {surface};
}}
"#,
        s2 = sp.s2,
        s3 = sp.s3,
        s4 = sp.s4,
        s6 = sp.s6,
        sm = t.typography.font_size.sm,
        semibold = t.typography.font_weight.semibold,
        bold = t.typography.font_weight.bold,
        border = t.colors.border,
        background = t.colors.background,
        surface = t.colors.surface,
        primary = t.colors.primary,
        secondary = t.colors.secondary,
        muted = t.colors.text.muted,
        inverted = t.colors.text.inverted,
    ));
}

fn write_lists(output: &mut String, t: &DesignTokens) {
    let sp = &t.spacing;

    output.push_str(&format!(
        r#"
.list-unordered,
.list-ordered {{
  margin: {s4} 0 {s4} {s8};
  padding-left: {s4};
}}

.list-unordered li,
.list-ordered li {{
  margin-bottom: {s2};
  line-height: {tight};
}}

.list-unordered li:last-child,
.list-ordered li:last-child {{
  margin-bottom: 0;
}}

.checklist-container {{
  margin: {s4} 0;
}}

.checklist-item {{
  display: flex;
  align-items: flex-start;
  margin-bottom: {s3};
  cursor: default;
  line-height: {tight};
}}

.checklist-item:last-child {{
  margin-bottom: 0;
}}

.checklist-item input {{
  margin-right: {s3};
  margin-top: {s1};
}}
"#,
        s1 = sp.s1,
        s2 = sp.s2,
        s3 = sp.s3,
        s4 = sp.s4,
        s8 = sp.s8,
        tight = t.typography.line_height.tight,
    ));
}

fn write_media(output: &mut String, t: &DesignTokens) {
    let sp = &t.spacing;

    output.push_str(&format!(
        r#"
.divider {{
  border: none;
  height: 1px;
  margin: {s8} 0;
}}

.divider-solid {{
  border-bottom: 1px solid {border};
  background: none;
}}

.divider-dashed {{
  border-bottom: 1px dashed {border};
  background: none;
}}

.divider-dotted {{
  border-bottom: 1px dotted {border};
  background: none;
}}

.image-container {{
  margin: {s6} 0;
  text-align: center;
  page-break-inside: avoid;
}}

.report-image {{
  max-width: 100%;
  height: auto;
  border-radius: {radius_sm};
  border: 1px solid {border};
}}

.image-caption {{
  margin-top: {s3};
  font-size: {sm};
  color: {muted};
  text-align: center;
  font-style: italic;
  padding: 0 {s2};
}}

.report-footer {{
  padding: {s6} {s8};
  border-top: 1px solid {border};
  background-color: {background};
  text-align: center;
  color: {muted};
  font-size: {sm};
}}

.footer-content {{
  display: flex;
  justify-content: space-between;
  align-items: center;
  max-width: 600px;
  margin: 0 auto;
}}

.report-link {{
  color: {primary};
  text-decoration: underline;
  transition: color 0.2s ease;
}}
"#,
        s2 = sp.s2,
        s3 = sp.s3,
        s6 = sp.s6,
        s8 = sp.s8,
        sm = t.typography.font_size.sm,
        border = t.colors.border,
        background = t.colors.background,
        primary = t.colors.primary,
        muted = t.colors.text.muted,
        radius_sm = t.borders.radius.sm,
    ));
}

fn write_code(output: &mut String, t: &DesignTokens) {
    let sp = &t.spacing;

    output.push_str(&format!(
        r#"
.codeblock-container {{
  margin: {s6} 0;
  border: 1px solid {border};
  border-radius: {radius_md};
  overflow: hidden;
  background-color: {surface};
  font-family: {code_font};
}}

.codeblock-filename {{
  padding: {s2} {s4};
  background-color: {background};
  border-bottom: 1px solid {border};
  font-size: {sm};
  color: {muted};
  font-weight: {medium};
}}

.codeblock {{
  margin: 0;
  padding: {s4};
  overflow-x: auto;
  background-color: {surface};
  color: {text};
  font-size: {sm};
  line-height: {tight};
  tab-size: 4;
}}

.codeblock code {{
  font-family: inherit;
  font-size: inherit;
  line-height: inherit;
}}

.line-number {{
  color: {muted};
  margin-right: {s4};
  user-select: none;
}}
"#,
        s2 = sp.s2,
        s4 = sp.s4,
        s6 = sp.s6,
        code_font = CODE_FONT_FAMILY,
        sm = t.typography.font_size.sm,
        medium = t.typography.font_weight.medium,
        tight = t.typography.line_height.tight,
        border = t.colors.border,
        background = t.colors.background,
        surface = t.colors.surface,
        text = t.colors.text.primary,
        muted = t.colors.text.muted,
        radius_md = t.borders.radius.md,
    ));
}

fn write_print(output: &mut String, t: &DesignTokens, margins: &PageMargins, page_numbering: bool) {
    let page_bottom = if page_numbering { PAGE_NUMBER_MARGIN } else { "0" };

    output.push_str(&format!(
        r#"
@media print {{
  @page {{
    margin-top: 0;
    margin-bottom: {page_bottom};
    margin-left: 0;
    margin-right: 0;
  }}

  body {{
"#
    ));

    for (side, value) in margins.sides() {
        output.push_str(&format!("    margin-{}: {};\n", side, value));
    }

    output.push_str(&format!(
        r#"    padding: 0;
    background: {background};
    -webkit-print-color-adjust: exact;
  }}

  .report {{
    box-shadow: none;
    border: none;
    background: {background};
  }}
}}
"#,
        background = t.colors.background,
    ));
}
