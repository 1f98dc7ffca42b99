use brace_check::report::{BracePair, Position, Report, MAX_UNCLOSED_EXAMPLES};

fn empty_report() -> Report {
    Report {
        extra_closing: Vec::new(),
        unclosed: Vec::new(),
        pairs: Vec::new(),
    }
}

#[test]
fn position_displays_as_line_and_column() {
    assert_eq!(Position::new(3, 14).to_string(), "line 3, column 14");
}

#[test]
fn balanced_report_renders_ok_line() {
    assert_eq!(empty_report().to_string(), "OK: All brackets matched");
}

#[test]
fn extra_closing_lines_precede_the_verdict() {
    let mut report = empty_report();
    report.extra_closing.push(Position::new(1, 1));
    report.extra_closing.push(Position::new(2, 7));

    let expected = concat!(
        "ERROR: Extra closing bracket at line 1, column 1\n",
        "ERROR: Extra closing bracket at line 2, column 7\n",
        "OK: All brackets matched",
    );
    assert_eq!(report.to_string(), expected);
}

#[test]
fn unclosed_rendering_caps_examples_but_not_count() {
    let mut report = empty_report();
    for line in (1..=8).rev() {
        report.unclosed.push(Position::new(line, 1));
    }

    let rendered = report.to_string();
    assert!(rendered.starts_with("ERROR: 8 unclosed brackets:"));
    let example_lines = rendered
        .lines()
        .filter(|l| l.starts_with("  Opening at "))
        .count();
    assert_eq!(example_lines, MAX_UNCLOSED_EXAMPLES);
}

#[test]
fn report_without_findings_is_balanced_and_clean() {
    let mut report = empty_report();
    assert!(report.is_balanced());
    assert!(!report.has_findings());

    // Matched pairs are not findings.
    report.pairs.push(BracePair {
        open: Position::new(1, 1),
        close: Position::new(1, 2),
    });
    assert!(!report.has_findings());

    report.unclosed.push(Position::new(1, 3));
    assert!(report.has_findings());
    assert!(!report.is_balanced());
}
