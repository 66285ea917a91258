//! Behavioral specs for line selection.
//!
//! Tests that quickfilter:
//! - echoes lines whose first token is in the pattern list
//! - inverts the selection with a leading `-v`
//! - cuts lines at 255 bytes before matching

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;
use similar_asserts::assert_eq;

const INPUT: &str = "foo 1\nbar 2\nqux 3\n";

/// > Lines whose first token is listed are echoed verbatim
#[test]
fn echoes_matching_lines() {
    let out = filter(&["bar", "baz", "foo"]).stdin(INPUT).output();
    assert_eq!(out, "foo 1\nbar 2\n");
}

/// > -v echoes the lines that do not match
#[test]
fn invert_echoes_other_lines() {
    let out = filter(&["bar", "baz", "foo"]).inverted().stdin(INPUT).output();
    assert_eq!(out, "qux 3\n");
}

/// > An empty pattern list matches nothing
#[test]
fn empty_pattern_list_prints_nothing() {
    let out = filter(&[]).stdin("anything\n").output();
    assert_eq!(out, "");
}

/// > An empty pattern list inverted prints everything
#[test]
fn empty_pattern_list_inverted_prints_everything() {
    let out = filter(&[]).inverted().stdin("anything\nat all\n").output();
    assert_eq!(out, "anything\nat all\n");
}

/// > A token must equal a pattern exactly, not be a prefix of it
#[test]
fn prefix_of_pattern_does_not_match() {
    let out = filter(&["abc"]).stdin("ab\n").output();
    assert_eq!(out, "");
}

/// > Tab takes priority over space when finding the token
#[test]
fn tab_delimits_token_before_space() {
    let out = filter(&["foo bar"]).stdin("foo bar\tbaz\nfoo\tbar baz\n").output();
    assert_eq!(out, "foo bar\tbaz\n");
}

/// > A final line without newline is still filtered
#[test]
fn final_line_without_newline() {
    let out = filter(&["bar", "foo"]).stdin("qux\nfoo").output();
    assert_eq!(out, "foo");
}

/// > Pattern counts that are not a power of two find every element
#[test]
fn non_power_of_two_pattern_counts() {
    let patterns = ["aaa", "bbb", "ccc", "ddd", "eee", "fff", "ggg"];
    let input = "ggg 7\naaa 1\neee 5\nzzz 0\nddd 4\n";
    for count in 1..=patterns.len() {
        let expected: String = input
            .lines()
            .filter(|line| patterns[..count].contains(&&line[..3]))
            .map(|line| format!("{line}\n"))
            .collect();
        let out = filter(&patterns[..count]).stdin(input).output();
        assert_eq!(out, expected, "count {count}");
    }
}

/// > Lines longer than 255 bytes are cut before matching
#[test]
fn long_line_cut_at_255_bytes() {
    let pattern = "k".repeat(255);
    let line = format!("{}{}\n", pattern, "k".repeat(20));
    let out = filter(&[pattern.as_str()]).stdin(line).output();
    assert_eq!(out, pattern);
}

/// > Running twice over the same input gives identical output
#[test]
fn output_is_deterministic() {
    let input = "foo 1\nbar 2\nqux 3\nbaz 4\n";
    let first = filter(&["bar", "baz", "foo"]).stdin(input).output();
    let second = filter(&["bar", "baz", "foo"]).stdin(input).output();
    assert_eq!(first, second);
}

/// > Non-UTF-8 input is passed through byte for byte
#[test]
fn binary_lines_pass_through() {
    let assert = filter(&["abc"])
        .inverted()
        .stdin(b"\xff\xfe data\nabc x\n".as_slice())
        .run()
        .success();
    assert_eq!(assert.get_output().stdout, b"\xff\xfe data\n".to_vec());
}
