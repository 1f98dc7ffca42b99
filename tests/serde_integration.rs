use brace_check::scanner::Scanner;
use serde_json::json;

#[test]
fn report_serializes_to_json() {
    let report = Scanner::new().scan_str("} {");
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(
        value,
        json!({
            "extra_closing": [{ "line": 1, "column": 1 }],
            "unclosed": [{ "line": 1, "column": 3 }],
            "pairs": [],
        })
    );
}

#[test]
fn balanced_report_serializes_with_pairs() {
    let report = Scanner::new().scan_str("{}");
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(
        value,
        json!({
            "extra_closing": [],
            "unclosed": [],
            "pairs": [{
                "open": { "line": 1, "column": 1 },
                "close": { "line": 1, "column": 2 },
            }],
        })
    );
}
