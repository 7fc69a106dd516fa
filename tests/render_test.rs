//! Integration tests for HTML rendering.

use reportkit::model::{dsl::*, row, Cover, Footer, Report, ReportMeta, Section};
use reportkit::render::{HtmlRenderer, PageMargins, RenderOptions};
use reportkit::theme::{preset, ColorOverrides, ThemeBuilder, ThemePreset};
use serde_json::json;

fn sample_report() -> Report {
    Report::builder(
        ReportMeta::new("Quarterly Review")
            .with_author("Lee")
            .with_date("2024-03-31"),
    )
    .cover(Cover::new("").with_subtitle("Q1"))
    .push(section(
        "Results",
        vec![
            p("Revenue grew."),
            table(
                ["Region", "Revenue", "Growth"],
                vec![
                    row([("Growth", json!("12%")), ("Region", json!("North")), ("Revenue", json!(120))]),
                    row([("Region", json!("South")), ("Revenue", json!(80))]),
                ],
            )
            .unwrap(),
        ],
    ))
    .push(checklist(["Plan", "Build", "Ship"], vec![true, false]).unwrap())
    .push(code("let x = 1;", "rust"))
    .footer(Footer::new("Internal").with_page_numbers())
    .build()
}

fn render(report: &Report) -> String {
    HtmlRenderer::new(preset::office()).render(report, &PageMargins::all("2cm"))
}

#[test]
fn test_document_shell() {
    let html = render(&sample_report());

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\""));
    assert!(html.contains("<title>Quarterly Review</title>"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("hljs.highlightAll();"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_cover_falls_back_to_report_title_and_meta() {
    let html = render(&sample_report());

    assert!(html.contains("<h1>Quarterly Review</h1>"));
    assert!(html.contains("<p class=\"cover-subtitle\">Q1</p>"));
    assert!(html.contains("<span class=\"meta-value author\">Lee</span>"));
    assert!(html.contains("<span class=\"meta-value date\">2024-03-31</span>"));
    assert!(!html.contains("meta-item department"));
}

#[test]
fn test_table_cells_follow_header_order() {
    let html = render(&sample_report());

    assert!(html.contains("<tr><th>Region</th><th>Revenue</th><th>Growth</th></tr>"));
    assert!(html.contains("<tr><td>North</td><td>120</td><td>12%</td></tr>"));
    assert!(html.contains("<tr><td>South</td><td>80</td><td></td></tr>"));
}

#[test]
fn test_numeric_cells_render_like_plain_numbers() {
    let json = r#"{
        "meta": {"title": "Numbers"},
        "body": [{"kind": "table", "headers": ["V"],
                  "rows": [{"V": 1.0}, {"V": 1e2}, {"V": 0.5}, {"V": [1, 2]}]}]
    }"#;
    let html = render(&Report::from_json(json).unwrap());

    assert!(html.contains("<tr><td>1</td></tr>"));
    assert!(html.contains("<tr><td>100</td></tr>"));
    assert!(html.contains("<tr><td>0.5</td></tr>"));
    assert!(html.contains("<tr><td>1,2</td></tr>"));
    assert!(!html.contains("<td>1.0</td>"));
}

#[test]
fn test_empty_cover_author_falls_back_to_report() {
    let json = r#"{
        "meta": {"title": "T", "author": "Kim"},
        "cover": {"title": "", "meta": {"author": ""}}
    }"#;
    let html = render(&Report::from_json(json).unwrap());
    assert!(html.contains("<span class=\"meta-value author\">Kim</span>"));
}

#[test]
fn test_checklist_marks_only_flagged_items() {
    let html = render(&sample_report());

    assert_eq!(html.matches("type=\"checkbox\"").count(), 3);
    assert_eq!(html.matches("checked disabled").count(), 1);
    let plan = html.find("Plan").unwrap();
    let checked = html.find("checked disabled").unwrap();
    assert!(checked < plan);
}

#[test]
fn test_nested_sections_cap_heading_level() {
    let inner = Section::new("Inner", vec![section("Deepest", vec![p("x")])]);
    let report = Report::builder(ReportMeta::new("Nesting"))
        .push(section("Outer", vec![inner.into()]))
        .build();
    let html = render(&report);

    assert!(html.contains("<h2 class=\"section-title\">Outer</h2>"));
    assert!(html.contains("<h3 class=\"section-title\">Inner</h3>"));
    assert!(html.contains("<h3 class=\"section-title\">Deepest</h3>"));
    assert!(html.contains("id=\"section-outer\""));
}

#[test]
fn test_margins_only_emit_declared_sides() {
    let report = Report::builder(ReportMeta::new("Margins")).build();
    let margins = PageMargins::default().with_top("1in").with_left("15mm");
    let html = HtmlRenderer::default().render(&report, &margins);

    assert!(html.contains("margin-top: 1in;"));
    assert!(html.contains("margin-left: 15mm;"));
    assert!(!html.contains("margin-right: 2cm;"));
    assert!(!html.contains("margin-bottom: 20mm;"));
}

#[test]
fn test_page_numbering_reserves_bottom_margin() {
    let html = render(&sample_report());
    assert!(html.contains("margin-bottom: 20mm;"));
}

#[test]
fn test_code_theme_follows_background() {
    let report = sample_report();
    let margins = PageMargins::default();

    for theme in ThemePreset::ALL {
        let html = HtmlRenderer::new(theme.tokens()).render(&report, &margins);
        let expected = match theme {
            ThemePreset::Dark | ThemePreset::Terminal => "atom-one-dark.min.css",
            _ => "atom-one-light.min.css",
        };
        assert!(html.contains(expected), "{} should use {}", theme, expected);
    }

    let custom = ThemeBuilder::new()
        .with_colors(ColorOverrides {
            background: Some("#123".into()),
            ..Default::default()
        })
        .build();
    let html = HtmlRenderer::new(custom).render(&report, &margins);
    assert!(html.contains("atom-one-dark.min.css"));
}

#[test]
fn test_text_is_escaped() {
    let report = Report::builder(ReportMeta::new("A & B"))
        .push(p("<script>alert(1)</script>"))
        .build();
    let html = render(&report);

    assert!(html.contains("<title>A &amp; B</title>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
}

#[test]
fn test_unknown_nodes_render_nothing() {
    let json = r#"{
        "meta": {"title": "Future"},
        "body": [
            {"kind": "chart", "data": [1, 2, 3]},
            {"kind": "paragraph", "text": "still here"}
        ]
    }"#;
    let report = Report::from_json(json).unwrap();
    let html = render(&report);

    assert!(html.contains("still here"));
    assert!(!html.contains("chart"));
    assert_eq!(report.validate().len(), 1);
}

#[test]
fn test_render_options_apply() {
    let options = RenderOptions::default()
        .with_lang("ko")
        .with_custom_css(".report { color: red; }");
    let html = HtmlRenderer::with_options(preset::mono(), options)
        .render(&sample_report(), &PageMargins::default());

    assert!(html.contains("<html lang=\"ko\""));
    assert!(html.contains("<style>.report { color: red; }</style>"));
}

#[test]
fn test_rendering_is_deterministic() {
    let report = sample_report();
    let renderer = HtmlRenderer::new(preset::vivid());
    let margins = PageMargins::all("1cm");

    let first = renderer.render(&report, &margins);
    let second = renderer.render(&report, &margins);
    assert_eq!(first, second);
}

#[test]
fn test_batch_preserves_order() {
    let reports: Vec<Report> = (0..8)
        .map(|i| Report::builder(ReportMeta::new(format!("Report {}", i))).build())
        .collect();
    let renderer = HtmlRenderer::default();
    let margins = PageMargins::default();

    let batch = renderer.render_batch(&reports, &margins);
    assert_eq!(batch.len(), 8);
    for (i, html) in batch.iter().enumerate() {
        assert!(html.contains(&format!("<title>Report {}</title>", i)));
        assert_eq!(html, &renderer.render(&reports[i], &margins));
    }
}
