use super::*;

#[test]
fn file_exists_rules_are_errors() {
    let rule = Rule::file_exists("index.html", "main page");
    assert_eq!(rule.severity, Severity::Error);
    assert_eq!(rule.phase, Phase::Existence);
    assert_eq!(rule.marker(), None);
}

#[test]
fn content_rules_default_to_warning() {
    let rule = Rule::content("index.html", "table-wrapper", "table element");
    assert_eq!(rule.severity, Severity::Warning);
    assert_eq!(rule.phase, Phase::Content);
    assert_eq!(rule.marker(), Some("table-wrapper"));
}

#[test]
fn dependency_rules_are_content_rules_in_their_own_phase() {
    let rule = Rule::dependency("package.json", "\"react\"", "react");
    assert!(matches!(rule.kind, RuleKind::ContentContains { .. }));
    assert_eq!(rule.phase, Phase::Dependencies);
}

#[test]
fn feature_rule_argument_order_is_label_first() {
    let rule = Rule::feature("virtual list", "main.js", "class VirtualList");
    assert_eq!(rule.label, "virtual list");
    assert_eq!(rule.target, "main.js");
    assert_eq!(rule.marker(), Some("class VirtualList"));
    assert_eq!(rule.phase, Phase::Features);
}

#[test]
fn metric_rules_get_generated_labels() {
    assert_eq!(
        Rule::comment_density("main.js", "//", 0.1).label,
        "main.js comment density"
    );
    assert_eq!(Rule::line_count("worker.js").label, "worker.js line count");
}

#[test]
fn only_metrics_are_metrics() {
    assert!(RuleKind::LineCount.is_metric());
    assert!(
        RuleKind::CommentDensity {
            marker: "//".to_string(),
            threshold: 0.1
        }
        .is_metric()
    );
    assert!(!RuleKind::FileExists.is_metric());
    assert!(!RuleKind::FileExists.reads_content());
}

#[test]
fn with_severity_overrides_default() {
    let rule = Rule::content("a.md", "x", "x").with_severity(Severity::Error);
    assert_eq!(rule.severity, Severity::Error);
}

#[test]
fn rule_serializes_with_kind_tag() {
    let rule = Rule::content("index.html", "table-wrapper", "table element");
    let json = serde_json::to_value(&rule).unwrap();
    assert_eq!(json["kind"], "content_contains");
    assert_eq!(json["marker"], "table-wrapper");
    assert_eq!(json["severity"], "warning");
    assert_eq!(json["phase"], "content");
}
