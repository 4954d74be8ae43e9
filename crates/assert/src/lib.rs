//! arbiter-assert — deep-equality assertion facade.
//!
//! The public entry points live in the [`assert`] and [`refute`] modules:
//! [`assert::equals`] succeeds when two values are strictly deep-equal,
//! [`refute::equals`] when they are not. On failure both return an
//! [`AssertionError`] whose message embeds both operands rendered by
//! [`arbiter_format::format`].
//!
//! Calling either predicate with a top-level [`Value::Undefined`] operand is
//! a usage error, rejected before any comparison.
//!
//! All operations are pure and synchronous; nothing is shared across calls,
//! so concurrent callers need no coordination.

mod error;

pub use error::{AssertionError, ASSERTION_ERROR_NAME, ERR_ASSERTION};

use arbiter_equal::deep_equal;
use arbiter_format::format as format_value;
use arbiter_value::Value;

const OP_ASSERT_EQUALS: &str = "assert.equals";
const OP_REFUTE_EQUALS: &str = "refute.equals";

const UNDEFINED_OPERAND: &str =
    "Expectation for equals should not be undefined. Use assert.defined or refute.defined instead.";

/// Positive equality predicates.
pub mod assert {
    use super::*;

    /// Asserts that `actual` is deep-equal to `expected`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbiter_value::Value;
    ///
    /// arbiter_assert::assert::equals(&Value::from("Hey"), &Value::from("Hey")).unwrap();
    ///
    /// let err = arbiter_assert::assert::equals(&Value::from(-0.0), &Value::from(0.0)).unwrap_err();
    /// assert_eq!(err.message, "[assert.equals] -0 expected to be equal to 0");
    /// ```
    pub fn equals(actual: &Value, expected: &Value) -> Result<(), AssertionError> {
        check_equals(actual, expected, None)
    }

    /// Like [`equals`], prefixing the failure diagnostic with a caller
    /// message (rendered literally, followed by a space).
    pub fn equals_msg(
        actual: &Value,
        expected: &Value,
        message: &str,
    ) -> Result<(), AssertionError> {
        check_equals(actual, expected, Some(message))
    }
}

/// Negated equality predicates.
pub mod refute {
    use super::*;

    /// Asserts that `actual` is NOT deep-equal to `expected`.
    pub fn equals(actual: &Value, expected: &Value) -> Result<(), AssertionError> {
        check_not_equals(actual, expected, None)
    }

    /// Like [`equals`](self::equals), prefixing the failure diagnostic with a
    /// caller message.
    pub fn equals_msg(
        actual: &Value,
        expected: &Value,
        message: &str,
    ) -> Result<(), AssertionError> {
        check_not_equals(actual, expected, Some(message))
    }
}

fn check_equals(
    actual: &Value,
    expected: &Value,
    message: Option<&str>,
) -> Result<(), AssertionError> {
    reject_undefined(actual, expected, OP_ASSERT_EQUALS)?;
    if deep_equal(actual, expected) {
        return Ok(());
    }
    Err(AssertionError::new(
        OP_ASSERT_EQUALS,
        format!(
            "{}{} expected to be equal to {}",
            message_prefix(message),
            format_value(actual),
            format_value(expected)
        ),
    ))
}

fn check_not_equals(
    actual: &Value,
    expected: &Value,
    message: Option<&str>,
) -> Result<(), AssertionError> {
    reject_undefined(actual, expected, OP_REFUTE_EQUALS)?;
    if !deep_equal(actual, expected) {
        return Ok(());
    }
    Err(AssertionError::new(
        OP_REFUTE_EQUALS,
        format!(
            "{}{} expected not to be equal to {}",
            message_prefix(message),
            format_value(actual),
            format_value(expected)
        ),
    ))
}

/// A top-level undefined operand is a usage error, not a comparison outcome.
fn reject_undefined(
    actual: &Value,
    expected: &Value,
    operator: &'static str,
) -> Result<(), AssertionError> {
    if matches!(actual, Value::Undefined) || matches!(expected, Value::Undefined) {
        return Err(AssertionError::new(operator, UNDEFINED_OPERAND.to_string()));
    }
    Ok(())
}

/// The caller message is rendered literally, never through the value
/// formatter, followed by a single space.
fn message_prefix(message: Option<&str>) -> String {
    match message {
        Some(text) if !text.is_empty() => format!("{text} "),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefix_appends_space_to_nonempty_text() {
        assert_eq!(message_prefix(Some("Here:")), "Here: ");
        assert_eq!(message_prefix(Some("")), "");
        assert_eq!(message_prefix(None), "");
    }

    #[test]
    fn refute_equals_passes_for_unequal_values() {
        refute::equals(&Value::from(1), &Value::from(2)).unwrap();
    }

    #[test]
    fn refute_equals_fails_for_equal_values() {
        let err = refute::equals(&Value::from(1), &Value::from(1)).unwrap_err();
        assert_eq!(err.operator, "refute.equals");
        assert_eq!(
            err.message,
            "[refute.equals] 1 expected not to be equal to 1"
        );
    }

    #[test]
    fn refute_equals_rejects_undefined_operands() {
        let err = refute::equals(&Value::Undefined, &Value::from(1)).unwrap_err();
        assert_eq!(
            err.message,
            "[refute.equals] Expectation for equals should not be undefined. \
             Use assert.defined or refute.defined instead."
        );
    }
}
