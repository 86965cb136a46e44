use super::*;

#[test]
fn test_line_col_first_line() {
    let index = LineIndex::new("ltm pool p1 { }\n");
    assert_eq!(index.line_col(TextSize::new(0)), Position::new(1, 1));
    assert_eq!(index.line_col(TextSize::new(4)), Position::new(1, 5));
}

#[test]
fn test_line_col_after_newlines() {
    let text = "a\nbb\r\nccc\rd";
    let index = LineIndex::new(text);
    assert_eq!(index.line_count(), 4);
    assert_eq!(index.line_col(TextSize::new(2)), Position::new(2, 1));
    assert_eq!(index.line_col(TextSize::new(3)), Position::new(2, 2));
    assert_eq!(index.line_col(TextSize::new(6)), Position::new(3, 1));
    assert_eq!(index.line_col(TextSize::new(10)), Position::new(4, 1));
}

#[test]
fn test_line_col_clamps_past_end() {
    let index = LineIndex::new("ab");
    assert_eq!(index.line_col(TextSize::new(100)), Position::new(1, 3));
}

#[test]
fn test_line_start() {
    let index = LineIndex::new("x\ny\n");
    assert_eq!(index.line_start(1), Some(TextSize::new(0)));
    assert_eq!(index.line_start(2), Some(TextSize::new(2)));
    assert_eq!(index.line_start(0), None);
    assert_eq!(index.line_start(9), None);
}

#[test]
fn test_span_contains() {
    let span = Span::new(Position::new(2, 3), Position::new(4, 1));
    assert!(span.contains(Position::new(3, 80)));
    assert!(span.contains(Position::new(2, 3)));
    assert!(!span.contains(Position::new(2, 2)));
    assert!(!span.contains(Position::new(4, 2)));
    assert!(span.is_multiline());
}
