//! Integration tests for the report model and its JSON form.

use proptest::prelude::*;
use reportkit::model::{
    dsl::*, row, Cover, CoverMeta, Footer, ListKind, Node, NodeKind, Report, ReportMeta,
};
use reportkit::{Error, JsonFormat};
use serde_json::json;

fn opt_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{0,8}")
}

fn resolved(cover: Option<String>, report: Option<String>) -> Option<String> {
    cover.filter(|s| !s.is_empty()).or(report)
}

proptest! {
    #[test]
    fn cover_meta_prefers_cover_fields(
        cover_author in opt_text(),
        cover_date in opt_text(),
        meta_author in opt_text(),
        meta_date in opt_text(),
    ) {
        let mut meta = ReportMeta::new("Title");
        meta.author = meta_author.clone();
        meta.date = meta_date.clone();

        let cover_meta = CoverMeta {
            author: cover_author.clone(),
            date: cover_date.clone(),
            ..Default::default()
        };
        let report = Report::builder(meta)
            .cover(Cover::new("").with_meta(cover_meta))
            .build();
        let cover = report.cover.unwrap();

        prop_assert_eq!(cover.title, "Title");
        prop_assert_eq!(cover.meta.author, resolved(cover_author, meta_author));
        prop_assert_eq!(cover.meta.date, resolved(cover_date, meta_date));
    }

    #[test]
    fn undeclared_column_is_rejected(extra in "[a-z]{3,6}") {
        prop_assume!(extra != "name");
        let result = table(["name"], vec![row([(extra.as_str(), json!(1))])]);
        let is_unknown_column = matches!(result, Err(Error::UnknownColumn { .. }));
        prop_assert!(is_unknown_column);
    }

    #[test]
    fn checklist_accepts_up_to_item_count(items in 0usize..6, flags in 0usize..8) {
        let names: Vec<String> = (0..items).map(|i| format!("item {}", i)).collect();
        let result = checklist(names, vec![true; flags]);
        prop_assert_eq!(result.is_ok(), flags <= items);
    }
}

#[test]
fn test_full_report_from_json() {
    let json = r##"{
        "meta": {"title": "Ops Review", "author": "Park", "date": "2024-05-01"},
        "theme": "office",
        "cover": {"title": "Operations", "logo": {"src": "logo.png", "alt": "Logo"}},
        "body": [
            {"kind": "section", "title": "Status", "collapsible": true, "content": [
                {"kind": "paragraph", "text": "Stable", "emphasis": "strong"},
                {"kind": "table", "headers": ["Service", "Uptime"],
                 "rows": [{"Service": "api", "Uptime": "99.9%"}], "highlight": "row"}
            ]},
            {"kind": "list", "items": ["a", "b"], "type": "checklist", "checked": [true]},
            {"kind": "divider", "style": "dashed"},
            {"kind": "codeblock", "code": "SELECT 1;", "language": "sql"}
        ],
        "footer": {"text": "Confidential", "pageNumber": true}
    }"##;

    let report = Report::from_json(json).unwrap();
    assert_eq!(report.title(), "Ops Review");
    assert_eq!(report.theme.as_deref(), Some("office"));
    assert!(report.page_numbering());

    let cover = report.cover.as_ref().unwrap();
    assert_eq!(cover.title, "Operations");
    assert_eq!(cover.meta.author.as_deref(), Some("Park"));

    let kinds: Vec<Option<NodeKind>> = report.body.iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![
            Some(NodeKind::Section),
            Some(NodeKind::List),
            Some(NodeKind::Divider),
            Some(NodeKind::CodeBlock),
        ]
    );

    match &report.body[1] {
        Node::List(list) => {
            assert_eq!(list.kind(), ListKind::Checklist);
            assert!(list.is_checked(0));
            assert!(!list.is_checked(1));
        }
        other => panic!("expected list, got {:?}", other),
    }
    assert!(report.validate().is_empty());
}

#[test]
fn test_json_rejects_checklist_overflow() {
    let json = r#"{
        "meta": {"title": "T"},
        "body": [{"kind": "list", "items": ["a"], "type": "checklist", "checked": [true, false]}]
    }"#;
    let err = Report::from_json(json).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_json_rejects_duplicate_headers() {
    let json = r#"{
        "meta": {"title": "T"},
        "body": [{"kind": "table", "headers": ["A", "A"], "rows": []}]
    }"#;
    let err = Report::from_json(json).unwrap_err();
    assert!(err.to_string().contains("Duplicate table header"));
}

#[test]
fn test_report_survives_json_round_trip() {
    let report = Report::builder(ReportMeta::new("Round").with_tags(["a", "b"]))
        .theme("vivid")
        .cover(Cover::new("Cover"))
        .push(section("One", vec![p("text"), link("https://example.com", "site")]))
        .push(image("chart.png", "Chart"))
        .footer(Footer::new("f"))
        .build();

    for format in [JsonFormat::Pretty, JsonFormat::Compact] {
        let json = report.to_json(format).unwrap();
        assert_eq!(Report::from_json(&json).unwrap(), report);
    }
}

#[test]
fn test_validate_flags_non_iso_dates() {
    let report = Report::builder(ReportMeta::new("Dates").with_date("March 3rd"))
        .cover(Cover::new("").with_meta(CoverMeta {
            date: Some("2024-02-30".into()),
            ..Default::default()
        }))
        .build();

    let warnings = report.validate();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("March 3rd"));
    assert!(warnings[1].contains("2024-02-30"));
}
