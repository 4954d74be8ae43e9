//! Assertion failure type.

use thiserror::Error;

/// Constant failure-kind tag carried by every [`AssertionError`].
pub const ASSERTION_ERROR_NAME: &str = "AssertionError";

/// Constant code identifying failures raised by the assertion layer.
pub const ERR_ASSERTION: &str = "ERR_ASSERTION";

/// Raised when an assertion does not hold, or when the facade is called with
/// a top-level undefined operand. Created fresh per failed call.
///
/// Harnesses that branch on assertion failures consume the four fields:
/// `name` and `code` are constants, `operator` names the predicate that
/// failed, and `message` is the fully rendered diagnostic.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AssertionError {
    pub name: &'static str,
    pub code: &'static str,
    pub message: String,
    pub operator: &'static str,
}

impl AssertionError {
    pub(crate) fn new(operator: &'static str, body: String) -> Self {
        Self {
            name: ASSERTION_ERROR_NAME,
            code: ERR_ASSERTION,
            message: format!("[{operator}] {body}"),
            operator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_constant_tags_and_prefixed_message() {
        let err = AssertionError::new("assert.equals", "boom".to_string());
        assert_eq!(err.name, "AssertionError");
        assert_eq!(err.code, "ERR_ASSERTION");
        assert_eq!(err.operator, "assert.equals");
        assert_eq!(err.message, "[assert.equals] boom");
    }

    #[test]
    fn displays_the_message() {
        let err = AssertionError::new("assert.equals", "boom".to_string());
        assert_eq!(err.to_string(), "[assert.equals] boom");
    }
}
