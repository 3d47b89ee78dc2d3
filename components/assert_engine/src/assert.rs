//! Assertion facade
//!
//! Thin entry points mapping each assertion name to a comparison
//! predicate and a fixed operator tag. The exception-shape assertions
//! run their block once, capture a tagged outcome, and apply a pure
//! decision function over (shouldExpectRaise, outcome, matcher), so the
//! matching logic is testable without any propagation machinery.

use value_model::{ErrorKind, RegExpValue, Value};

use crate::coerce;
use crate::deep;
use crate::error::{AssertError, AssertionError};

/// Expected shape of a raised value.
pub enum ThrowsExpectation {
    /// Matches an error value of this kind
    Kind(ErrorKind),
    /// Matches when the pattern matches the raised value's textual form
    Pattern(RegExpValue),
    /// Matches when the predicate returns true for the raised value
    Predicate(Box<dyn Fn(&Value) -> bool>),
}

impl ThrowsExpectation {
    fn matches(&self, raised: &Value) -> bool {
        match self {
            ThrowsExpectation::Kind(kind) => raised.as_error_kind() == Some(*kind),
            ThrowsExpectation::Pattern(pattern) => pattern.is_match(&raised.to_string()),
            ThrowsExpectation::Predicate(predicate) => predicate(raised),
        }
    }
}

/// Outcome of running a block once.
enum BlockOutcome {
    /// The block completed without raising
    Completed,
    /// The block raised a value
    Raised(Value),
}

/// Verdict of the decision function.
enum Verdict {
    Pass,
    MissingException,
    UnwantedException(Value),
    Rethrow(Value),
}

/// Decide pass / fail / rethrow from a captured block outcome.
fn judge(
    expect_raise: bool,
    outcome: BlockOutcome,
    expected: Option<&ThrowsExpectation>,
) -> Verdict {
    match (expect_raise, outcome) {
        (true, BlockOutcome::Completed) => Verdict::MissingException,
        (true, BlockOutcome::Raised(value)) => match expected {
            None => Verdict::Pass,
            Some(matcher) if matcher.matches(&value) => Verdict::Pass,
            Some(_) => Verdict::Rethrow(value),
        },
        (false, BlockOutcome::Completed) => Verdict::Pass,
        (false, BlockOutcome::Raised(value)) => match expected {
            Some(matcher) if matcher.matches(&value) => Verdict::UnwantedException(value),
            _ => Verdict::Rethrow(value),
        },
    }
}

fn run_block(block: &Value) -> Result<BlockOutcome, AssertError> {
    if !block.is_callable() {
        return Err(AssertError::NotCallable(
            "block argument must be a callable value".to_string(),
        ));
    }
    match block.call(vec![]) {
        Ok(_) => Ok(BlockOutcome::Completed),
        Err(raised) => Ok(BlockOutcome::Raised(raised)),
    }
}

/// Assertion entry points.
///
/// Every operation either passes silently or returns an
/// [`AssertError`]; the comparison predicates themselves never fail.
///
/// # Examples
///
/// ```
/// use assert_engine::Assert;
/// use value_model::Value;
///
/// assert!(Assert::equal(&Value::number(4.0), &Value::string("4"), None).is_ok());
/// assert!(Assert::strict_equal(&Value::number(4.0), &Value::string("4"), None).is_err());
/// ```
pub struct Assert;

impl Assert {
    /// Assert that `value` is truthy. Operator tag `"ok"`.
    pub fn ok(value: &Value, message: Option<&str>) -> Result<(), AssertError> {
        if value.is_truthy() {
            Ok(())
        } else {
            Err(AssertionError::new(value, &Value::boolean(true), message, "ok").into())
        }
    }

    /// Assert that `value` is falsy. Operator tag `"notOk"`.
    pub fn not_ok(value: &Value, message: Option<&str>) -> Result<(), AssertError> {
        if !value.is_truthy() {
            Ok(())
        } else {
            Err(AssertionError::new(value, &Value::boolean(false), message, "notOk").into())
        }
    }

    /// Assert coercive equality. Operator tag `"=="`.
    pub fn equal(
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if coerce::loose_equals(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::new(actual, expected, message, "==").into())
        }
    }

    /// Assert coercive inequality. Operator tag `"!="`.
    pub fn not_equal(
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if !coerce::loose_equals(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::new(actual, expected, message, "!=").into())
        }
    }

    /// Assert strict equality. Operator tag `"==="`.
    pub fn strict_equal(
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if actual.strict_equals(expected) {
            Ok(())
        } else {
            Err(AssertionError::new(actual, expected, message, "===").into())
        }
    }

    /// Assert strict inequality. Operator tag `"!=="`.
    pub fn not_strict_equal(
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if !actual.strict_equals(expected) {
            Ok(())
        } else {
            Err(AssertionError::new(actual, expected, message, "!==").into())
        }
    }

    /// Assert loose deep equality. Operator tag `"deepEqual"`.
    pub fn deep_equal(
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if deep::loose_deep_equal(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::new(actual, expected, message, "deepEqual").into())
        }
    }

    /// Assert loose deep inequality. Operator tag `"notDeepEqual"`.
    pub fn not_deep_equal(
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if !deep::loose_deep_equal(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::new(actual, expected, message, "notDeepEqual").into())
        }
    }

    /// Assert strict deep equality. Operator tag `"deepStrictEqual"`.
    pub fn deep_strict_equal(
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if deep::strict_deep_equal(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::new(actual, expected, message, "deepStrictEqual").into())
        }
    }

    /// Assert strict deep inequality. Operator tag `"notDeepStrictEqual"`.
    pub fn not_deep_strict_equal(
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        if !deep::strict_deep_equal(actual, expected) {
            Ok(())
        } else {
            Err(AssertionError::new(actual, expected, message, "notDeepStrictEqual").into())
        }
    }

    /// Unconditionally fail. Operator defaults to `"fail"`.
    pub fn fail(
        actual: &Value,
        expected: &Value,
        message: Option<&str>,
        operator: Option<&str>,
    ) -> Result<(), AssertError> {
        Err(AssertionError::new(actual, expected, message, operator.unwrap_or("fail")).into())
    }

    /// Assert that `block` raises, optionally matching `expected`.
    ///
    /// A raised value that fails to match the expectation is propagated
    /// unmodified, not wrapped in an assertion error.
    pub fn throws(
        block: &Value,
        expected: Option<ThrowsExpectation>,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        let outcome = run_block(block)?;
        match judge(true, outcome, expected.as_ref()) {
            Verdict::Pass => Ok(()),
            Verdict::MissingException => {
                let text = match message {
                    Some(extra) => format!("Missing expected exception: {}", extra),
                    None => "Missing expected exception".to_string(),
                };
                Err(AssertError::Assertion(AssertionError {
                    actual: Value::undefined(),
                    expected: Value::undefined(),
                    message: text,
                    operator: "throws".to_string(),
                    generated_message: message.is_none(),
                }))
            }
            Verdict::UnwantedException(value) | Verdict::Rethrow(value) => {
                Err(AssertError::Raised(value))
            }
        }
    }

    /// Assert that `block` does not raise.
    ///
    /// A raised value matching `expected` fails the assertion; any other
    /// raised value is propagated unmodified.
    pub fn does_not_throw(
        block: &Value,
        expected: Option<ThrowsExpectation>,
        message: Option<&str>,
    ) -> Result<(), AssertError> {
        let outcome = run_block(block)?;
        match judge(false, outcome, expected.as_ref()) {
            Verdict::Pass | Verdict::MissingException => Ok(()),
            Verdict::UnwantedException(value) => {
                let text = match message {
                    Some(extra) => format!("Got unwanted exception: {}", extra),
                    None => "Got unwanted exception".to_string(),
                };
                Err(AssertError::Assertion(AssertionError {
                    actual: value,
                    expected: Value::undefined(),
                    message: text,
                    operator: "doesNotThrow".to_string(),
                    generated_message: message.is_none(),
                }))
            }
            Verdict::Rethrow(value) => Err(AssertError::Raised(value)),
        }
    }

    /// Propagate `err` unmodified when it is truthy.
    pub fn if_error(err: &Value) -> Result<(), AssertError> {
        if err.is_truthy() {
            Err(AssertError::Raised(err.clone()))
        } else {
            Ok(())
        }
    }
}
