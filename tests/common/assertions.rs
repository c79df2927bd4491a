//! Logged assertion helpers.
//!
//! Each helper logs what it compares before asserting, so a failing CI run
//! shows the values even when the panic message is truncated.

#![allow(dead_code)]

use std::fmt::Debug;

use monotable::cells::{AmbiguousWidth, display_width_with};

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Assert that a value is true with logging.
#[track_caller]
pub fn assert_true_logged(context: &str, value: bool) {
    tracing::debug!(context = context, value = value, "asserting true");
    if !value {
        tracing::error!(context = context, "assertion failed: expected true");
    }
    assert!(value, "{context}: expected true, got false");
}

/// Assert that a Result is Ok, returning the value.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context = context, result = ?result, "asserting Ok");
    match result {
        Ok(value) => value,
        Err(ref e) => {
            tracing::error!(context = context, error = ?e, "assertion failed: expected Ok, got Err");
            panic!("{context}: expected Ok, got Err({e:?})");
        }
    }
}

/// Assert that a Result is Err, returning the error.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context = context, result = ?result, "asserting Err");
    match result {
        Err(e) => e,
        Ok(ref value) => {
            tracing::error!(
                context = context,
                value = ?value,
                "assertion failed: expected Err, got Ok"
            );
            panic!("{context}: expected Err, got Ok({value:?})");
        }
    }
}

/// Assert that every line of `rendered` measures `expected` display columns.
#[track_caller]
pub fn assert_line_widths_logged(
    context: &str,
    rendered: &str,
    expected: usize,
    policy: AmbiguousWidth,
) {
    for (index, line) in rendered.lines().enumerate() {
        let width = display_width_with(line, policy);
        tracing::debug!(context = context, line = index, width = width, "measured line");
        if width != expected {
            tracing::error!(
                context = context,
                line = line,
                width = width,
                expected = expected,
                "assertion failed: misaligned line"
            );
            panic!("{context}: line {index} {line:?} measures {width}, expected {expected}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::init_test_logging;

    #[test]
    fn test_assert_eq_logged_pass() {
        init_test_logging();
        assert_eq_logged("simple equality", 42, 42);
    }

    #[test]
    #[should_panic(expected = "expected 42")]
    fn test_assert_eq_logged_fail() {
        init_test_logging();
        assert_eq_logged("will fail", 0, 42);
    }

    #[test]
    #[should_panic(expected = "measures 3, expected 2")]
    fn test_line_widths_fail() {
        init_test_logging();
        assert_line_widths_logged("wide", "ab\n漢字", 2, AmbiguousWidth::Wide);
    }
}
