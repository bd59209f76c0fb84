use pretty_lint::input::parse_report;
use pretty_lint::{
    aggregate, compose_report, format_results, BuiltinRuleDocs, Capabilities, DocsResolver,
    LineItem,
};
use std::path::Path;

const CWD: &str = "/work/app";

fn render(json: &str) -> String {
    let (results, meta) = parse_report(json, "test").unwrap();
    let lookup = BuiltinRuleDocs::new();
    let docs = DocsResolver::new(meta.as_ref(), &lookup);
    format_results(&results, &Capabilities::plain(), Path::new(CWD), &docs)
}

#[test]
fn error_scenario_lists_details_and_totals() {
    let out = render(
        r#"[{
            "filePath": "/work/app/src/index.js",
            "messages": [{"line": 1, "column": 1, "severity": 2, "ruleId": "no-unused-vars",
                          "message": "'x' is defined but never used.", "fatal": false}],
            "errorCount": 1, "warningCount": 0
        }]"#,
    );
    assert!(out.contains("  Error details\n"));
    assert!(out.contains("  src/index.js:1:1\n"));
    assert!(out.contains("  error  1:1  x is defined but never used.  no-unused-vars\n"));
    assert!(out.ends_with("1 error\n"));
    assert!(!out.contains("warning"));
    assert!(!out.contains("Warning summary"));
}

#[test]
fn warning_scenario_only_summarizes() {
    let out = render(
        r#"[{
            "filePath": "/work/app/src/index.js",
            "messages": [{"line": 3, "column": 1, "severity": 1, "ruleId": "no-console",
                          "message": "Unexpected console statement."}],
            "errorCount": 0, "warningCount": 1
        }]"#,
    );
    assert!(out.contains("  Warning summary\n"));
    assert!(out.contains("  no-console  1 errors in 1 files\n"));
    assert!(out.ends_with("  1 warning"));
    assert!(!out.contains("Error details"));
}

#[test]
fn fatal_scenario_has_no_leading_separator() {
    let json = r#"[
        {"filePath": "/work/app/ok.js", "messages": [], "errorCount": 0, "warningCount": 0},
        {"filePath": "/work/app/bad.js",
         "messages": [{"ruleId": null, "fatal": true, "severity": 2, "line": 2, "column": 9,
                       "message": "Parsing error: Unexpected token }"}],
         "errorCount": 1, "warningCount": 0}
    ]"#;
    let (results, _) = parse_report(json, "test").unwrap();
    let agg = aggregate(&results, Path::new(CWD), false);
    assert!(matches!(agg.lines[0], LineItem::Header { .. }));
    assert!(!agg.lines.contains(&LineItem::Separator));

    let out = render(json);
    assert!(out.contains("  bad.js:2:9\n"));
    assert!(out.contains("  error  2:9  Parsing error: Unexpected token }  \n"));
}

#[test]
fn clean_results_render_empty() {
    let out = render(
        r#"[
            {"filePath": "/work/app/a.js", "messages": [], "errorCount": 0, "warningCount": 0},
            {"filePath": "/work/app/b.js", "messages": [], "errorCount": 0, "warningCount": 0}
        ]"#,
    );
    assert_eq!(out, "");
    assert_eq!(render("[]"), "");
}

#[test]
fn files_sorted_clean_first_then_by_errors_then_warnings() {
    let json = r#"[
        {"filePath": "/work/app/one.js", "errorCount": 1, "warningCount": 0,
         "messages": [{"line": 1, "column": 1, "severity": 2, "ruleId": "semi", "message": "m"}]},
        {"filePath": "/work/app/three.js", "errorCount": 3, "warningCount": 0,
         "messages": [{"line": 1, "column": 1, "severity": 2, "ruleId": "semi", "message": "m"},
                      {"line": 2, "column": 1, "severity": 2, "ruleId": "semi", "message": "m"},
                      {"line": 3, "column": 1, "severity": 2, "ruleId": "semi", "message": "m"}]},
        {"filePath": "/work/app/one-noisy.js", "errorCount": 1, "warningCount": 2,
         "messages": [{"line": 1, "column": 1, "severity": 2, "ruleId": "semi", "message": "m"},
                      {"line": 2, "column": 1, "severity": 1, "ruleId": "quotes", "message": "m"},
                      {"line": 3, "column": 1, "severity": 1, "ruleId": "quotes", "message": "m"}]}
    ]"#;
    let (results, _) = parse_report(json, "test").unwrap();
    let agg = aggregate(&results, Path::new(CWD), false);
    let order: Vec<&str> = agg
        .lines
        .iter()
        .filter_map(|l| match l {
            LineItem::Header {
                relative_file_path, ..
            } => Some(relative_file_path.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(order, vec!["three.js", "one-noisy.js", "one.js"]);
    assert_eq!(agg.error_count, 5);
    assert_eq!(agg.warning_count, 2);
}

#[test]
fn metadata_envelope_feeds_hyperlinks() {
    let json = r#"{
        "results": [{"filePath": "/work/app/a.js", "errorCount": 1, "warningCount": 0,
                     "messages": [{"line": 4, "column": 2, "severity": "error", "ruleId": "acme/no-foo", "message": "No foo."}]}],
        "metadata": {"rulesMeta": {"acme/no-foo": {"docs": {"url": "https://acme.dev/no-foo"}}}}
    }"#;
    let (results, meta) = parse_report(json, "test").unwrap();
    let lookup = BuiltinRuleDocs::new();
    let docs = DocsResolver::new(meta.as_ref(), &lookup);
    let caps = Capabilities {
        hyperlinks: true,
        ..Capabilities::plain()
    };
    let agg = aggregate(&results, Path::new(CWD), caps.color);
    let out = compose_report(&agg, &caps, Path::new(CWD), &docs);
    assert!(out.contains("\x1b]8;;https://acme.dev/no-foo\x07acme/no-foo\x1b]8;;\x07"));
}

#[test]
fn repeated_runs_are_identical() {
    let json = r#"[
        {"filePath": "/work/app/a.js", "errorCount": 1, "warningCount": 1,
         "messages": [{"line": 9, "column": 1, "severity": 1, "ruleId": "no-console", "message": "c"},
                      {"line": 2, "column": 4, "severity": 2, "ruleId": "eqeqeq", "message": "Expected '==='."}]}
    ]"#;
    assert_eq!(render(json), render(json));
}

#[test]
fn malformed_message_entry_keeps_the_rest_of_the_report() {
    let out = render(
        r#"[{
            "filePath": "/work/app/a.js", "errorCount": 1, "warningCount": 0,
            "messages": [null, {"line": 1, "column": 3, "severity": 2, "ruleId": "semi",
                                "message": "Missing semicolon."}]
        }]"#,
    );
    assert!(out.contains("  a.js:1:3\n"));
    assert!(out.contains("  error  1:3  Missing semicolon.  semi\n"));
    assert!(out.ends_with("1 error\n"));
}

#[test]
fn report_errors_name_the_offending_field() {
    let err = parse_report(r#"{"metadata": {}}"#, "report.json").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("report.json is not a valid lint report"));
    assert!(text.contains("results"));
}
