#![cfg(test)]

use crate::TextMeasurer;
use crate::test_utils::{FixedMetrics, body_font, chars_width};

const SIZE: f32 = 10.0;

#[test]
fn test_short_text_stays_on_one_line() {
    let measurer = TextMeasurer::new(&FixedMetrics);
    let lines = measurer.wrap("Consulting hours", chars_width(40, SIZE), &body_font(), SIZE);
    assert_eq!(lines, vec!["Consulting hours"]);
}

#[test]
fn test_text_wraps_at_word_boundaries() {
    let measurer = TextMeasurer::new(&FixedMetrics);
    // Column fits exactly ten characters.
    let lines = measurer.wrap(
        "alpha beta gamma delta",
        chars_width(10, SIZE),
        &body_font(),
        SIZE,
    );
    assert_eq!(lines, vec!["alpha beta", "gamma", "delta"]);
}

#[test]
fn test_overlong_word_is_split_between_characters() {
    let measurer = TextMeasurer::new(&FixedMetrics);
    let lines = measurer.wrap("abcdefghijkl mn", chars_width(5, SIZE), &body_font(), SIZE);
    assert_eq!(lines, vec!["abcde", "fghij", "kl mn"]);
}

#[test]
fn test_hard_newlines_and_blank_lines_are_kept() {
    let measurer = TextMeasurer::new(&FixedMetrics);
    let lines = measurer.wrap("first\n\nthird\n", chars_width(40, SIZE), &body_font(), SIZE);
    assert_eq!(lines, vec!["first", "", "third"]);
}

#[test]
fn test_whitespace_only_text_has_no_lines() {
    let measurer = TextMeasurer::new(&FixedMetrics);
    assert!(measurer.wrap("", 50.0, &body_font(), SIZE).is_empty());
    assert!(measurer.wrap("  \n \t ", 50.0, &body_font(), SIZE).is_empty());
}

#[test]
fn test_wrapping_is_repeatable() {
    let measurer = TextMeasurer::new(&FixedMetrics);
    let text = "Annual maintenance of the north wing HVAC units including filters, belts and a full inspection report";
    let width = chars_width(23, SIZE);
    let first = measurer.wrap(text, width, &body_font(), SIZE);
    let second = measurer.wrap(text, width, &body_font(), SIZE);
    assert_eq!(first, second);
    assert!(first.len() > 1);
    for line in &first {
        assert!(measurer.width(line, &body_font(), SIZE) <= width + 0.01, "line too wide: {line}");
    }
}

#[test]
fn test_zero_width_column_still_terminates() {
    let measurer = TextMeasurer::new(&FixedMetrics);
    let lines = measurer.wrap("abc", 0.0, &body_font(), SIZE);
    assert_eq!(lines, vec!["a", "b", "c"]);
}

#[test]
fn test_wrap_all_concatenates() {
    let measurer = TextMeasurer::new(&FixedMetrics);
    let lines = measurer.wrap_all(&["one two", "three"], chars_width(5, SIZE), &body_font(), SIZE);
    assert_eq!(lines, vec!["one", "two", "three"]);
}
