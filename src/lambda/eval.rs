//! Evaluation of placeholder expressions.
//!
//! Evaluation is a pure, terminating, bottom-up walk of the tree: `Slot`
//! leaves read the supplied argument, constants yield their captured value,
//! operator nodes evaluate their operands left-then-right (both sides are
//! always evaluated, comparisons included) and then delegate to the host's
//! numeric semantics on the concrete [`Value`]s.
//!
//! All operand validity is checked here, never at build time: division by a
//! constant zero, integer overflow and operand-kind mismatches surface as an
//! [`EvalError`] from the invocation that triggered them.

use std::cmp::Ordering;
use std::fmt;

use super::expr::{BinaryOperator, Expr, UnaryOperator};
use super::value::Value;

// =============================================================================
// Errors
// =============================================================================

/// An error raised while evaluating an expression tree.
///
/// Every variant carries the operator that failed and the offending operand
/// values, so the failure can be diagnosed at the invocation site. Building
/// a tree never produces this error; only [`Expr::apply`] and its wrappers
/// do.
///
/// # Examples
///
/// ```rust
/// use enumars::lambda::{ARG, BinaryOperator, EvalError};
///
/// let halve = ARG / 0; // builds fine
/// assert_eq!(
///     halve.apply(10),
///     Err(EvalError::DivisionByZero { operator: BinaryOperator::Divide })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Integer division or remainder with a zero divisor.
    DivisionByZero {
        /// The operator that was applied (`/` or `%`).
        operator: BinaryOperator,
    },
    /// Integer arithmetic overflowed the 64-bit representation.
    Overflow {
        /// The operator that was applied.
        operator: BinaryOperator,
        /// The evaluated left operand.
        left: Value,
        /// The evaluated right operand.
        right: Value,
    },
    /// Integer negation overflowed (negating `i64::MIN`).
    NegationOverflow {
        /// The evaluated operand.
        operand: Value,
    },
    /// A binary operator was applied to operand kinds that do not support it.
    InvalidOperands {
        /// The operator that was applied.
        operator: BinaryOperator,
        /// The evaluated left operand.
        left: Value,
        /// The evaluated right operand.
        right: Value,
    },
    /// A unary operator was applied to an operand kind that does not support it.
    InvalidOperand {
        /// The operator that was applied.
        operator: UnaryOperator,
        /// The evaluated operand.
        operand: Value,
    },
    /// [`Expr::test`] was invoked on an expression that produced a
    /// non-boolean value.
    NonBooleanResult {
        /// The value the expression produced.
        value: Value,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero { operator } => {
                write!(formatter, "division by zero when evaluating `{operator}`")
            }
            Self::Overflow {
                operator,
                left,
                right,
            } => write!(
                formatter,
                "integer overflow when evaluating `{left} {operator} {right}`"
            ),
            Self::NegationOverflow { operand } => {
                write!(formatter, "integer overflow when negating `{operand}`")
            }
            Self::InvalidOperands {
                operator,
                left,
                right,
            } => write!(
                formatter,
                "`{operator}` is not supported between {} `{left}` and {} `{right}`",
                left.type_name(),
                right.type_name()
            ),
            Self::InvalidOperand { operator, operand } => write!(
                formatter,
                "unary `{operator}` is not supported on {} `{operand}`",
                operand.type_name()
            ),
            Self::NonBooleanResult { value } => write!(
                formatter,
                "expected the expression to produce a boolean, got {} `{value}`",
                value.type_name()
            ),
        }
    }
}

impl std::error::Error for EvalError {}

// =============================================================================
// Evaluation
// =============================================================================

impl Expr {
    /// Evaluates the tree against a concrete argument.
    ///
    /// Every [`Expr::Slot`] leaf reads the same argument (`ARG + ARG`
    /// doubles its input). Evaluation is referentially transparent: the same
    /// tree applied to the same argument always yields the same result.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] for division or remainder by integer zero,
    /// integer overflow, or applying an operator to operand kinds that do
    /// not support it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::lambda::{ARG, Value};
    ///
    /// let transform = ARG * 2 + 1;
    /// assert_eq!(transform.apply(5).unwrap(), Value::Int(11));
    ///
    /// let double = ARG + ARG;
    /// assert_eq!(double.apply(21).unwrap(), Value::Int(42));
    /// ```
    pub fn apply(&self, argument: impl Into<Value>) -> Result<Value, EvalError> {
        self.evaluate(argument.into())
    }

    /// Evaluates the tree as a predicate, requiring a boolean result.
    ///
    /// # Errors
    ///
    /// Returns any evaluation error from [`Expr::apply`], or
    /// [`EvalError::NonBooleanResult`] if the expression produced a numeric
    /// value — a non-boolean result is never coerced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::lambda::ARG;
    ///
    /// let over_100 = ARG.gt(100);
    /// assert!(over_100.test(150).unwrap());
    /// assert!(!over_100.test(50).unwrap());
    /// assert!((ARG + 1).test(1).is_err());
    /// ```
    pub fn test(&self, argument: impl Into<Value>) -> Result<bool, EvalError> {
        match self.apply(argument)? {
            Value::Bool(result) => Ok(result),
            value => Err(EvalError::NonBooleanResult { value }),
        }
    }

    /// Wraps the tree into an ordinary single-argument callable.
    ///
    /// The returned closure satisfies the one-argument-callable contract the
    /// pipeline containers expect and can be used anywhere a plain function
    /// is accepted. It holds no state beyond the tree itself, so cloning it
    /// or invoking it repeatedly always yields identical results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::lambda::{ARG, Value};
    ///
    /// let callable = (ARG * 3).callable();
    /// assert_eq!(callable(Value::Int(4)).unwrap(), Value::Int(12));
    /// assert_eq!(callable(Value::Int(4)).unwrap(), Value::Int(12));
    /// ```
    #[must_use]
    pub fn callable(self) -> impl Fn(Value) -> Result<Value, EvalError> + Clone {
        move |argument| self.evaluate(argument)
    }

    fn evaluate(&self, argument: Value) -> Result<Value, EvalError> {
        match self {
            Self::Slot => Ok(argument),
            Self::Constant(value) => Ok(*value),
            Self::Unary { operator, operand } => {
                let operand = operand.evaluate(argument)?;
                apply_unary(*operator, operand)
            }
            Self::Binary {
                operator,
                left,
                right,
            } => {
                let left = left.evaluate(argument)?;
                let right = right.evaluate(argument)?;
                apply_binary(*operator, left, right)
            }
        }
    }
}

// =============================================================================
// Operator Semantics
// =============================================================================

fn apply_unary(operator: UnaryOperator, operand: Value) -> Result<Value, EvalError> {
    match operator {
        UnaryOperator::Negate => match operand {
            Value::Int(value) => value
                .checked_neg()
                .map(Value::Int)
                .ok_or(EvalError::NegationOverflow { operand }),
            Value::Float(value) => Ok(Value::Float(-value)),
            Value::Bool(_) => Err(EvalError::InvalidOperand { operator, operand }),
        },
    }
}

fn apply_binary(operator: BinaryOperator, left: Value, right: Value) -> Result<Value, EvalError> {
    match operator {
        BinaryOperator::Add => arithmetic(operator, left, right, i64::checked_add, |a, b| a + b),
        BinaryOperator::Subtract => {
            arithmetic(operator, left, right, i64::checked_sub, |a, b| a - b)
        }
        BinaryOperator::Multiply => {
            arithmetic(operator, left, right, i64::checked_mul, |a, b| a * b)
        }
        BinaryOperator::Divide => division(operator, left, right, i64::checked_div, |a, b| a / b),
        BinaryOperator::Remainder => {
            division(operator, left, right, i64::checked_rem, |a, b| a % b)
        }
        BinaryOperator::Power => power(left, right),
        BinaryOperator::Less => comparison(operator, left, right, Ordering::is_lt),
        BinaryOperator::LessOrEqual => comparison(operator, left, right, Ordering::is_le),
        BinaryOperator::Greater => comparison(operator, left, right, Ordering::is_gt),
        BinaryOperator::GreaterOrEqual => comparison(operator, left, right, Ordering::is_ge),
        BinaryOperator::Equal => Ok(Value::Bool(equality(operator, left, right)?)),
        BinaryOperator::NotEqual => Ok(Value::Bool(!equality(operator, left, right)?)),
    }
}

/// Extracts both operands as floats, or reports the operand-kind mismatch.
fn both_numeric(
    operator: BinaryOperator,
    left: Value,
    right: Value,
) -> Result<(f64, f64), EvalError> {
    match (left.as_f64(), right.as_f64()) {
        (Some(left), Some(right)) => Ok((left, right)),
        _ => Err(EvalError::InvalidOperands {
            operator,
            left,
            right,
        }),
    }
}

/// Add/subtract/multiply: integral when both operands are integers (checked),
/// otherwise promoted to floats.
fn arithmetic(
    operator: BinaryOperator,
    left: Value,
    right: Value,
    integer_operation: fn(i64, i64) -> Option<i64>,
    float_operation: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => integer_operation(a, b)
            .map(Value::Int)
            .ok_or(EvalError::Overflow {
                operator,
                left,
                right,
            }),
        _ => {
            let (a, b) = both_numeric(operator, left, right)?;
            Ok(Value::Float(float_operation(a, b)))
        }
    }
}

/// Division and remainder: integer division truncates and rejects a zero
/// divisor; float division follows IEEE 754 (no zero-divisor error).
fn division(
    operator: BinaryOperator,
    left: Value,
    right: Value,
    integer_operation: fn(i64, i64) -> Option<i64>,
    float_operation: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(_), Value::Int(0)) => Err(EvalError::DivisionByZero { operator }),
        (Value::Int(a), Value::Int(b)) => integer_operation(a, b)
            .map(Value::Int)
            .ok_or(EvalError::Overflow {
                operator,
                left,
                right,
            }),
        _ => {
            let (a, b) = both_numeric(operator, left, right)?;
            Ok(Value::Float(float_operation(a, b)))
        }
    }
}

/// Exponentiation: integral for an integer base and non-negative integer
/// exponent (checked), float otherwise (negative exponents included).
fn power(left: Value, right: Value) -> Result<Value, EvalError> {
    let operator = BinaryOperator::Power;
    match (left, right) {
        (Value::Int(base), Value::Int(exponent)) if exponent >= 0 => u32::try_from(exponent)
            .ok()
            .and_then(|exponent| base.checked_pow(exponent))
            .map(Value::Int)
            .ok_or(EvalError::Overflow {
                operator,
                left,
                right,
            }),
        _ => {
            let (base, exponent) = both_numeric(operator, left, right)?;
            Ok(Value::Float(base.powf(exponent)))
        }
    }
}

/// Ordering comparisons over numeric operands. Exact for integer pairs,
/// float otherwise; an incomparable float pair (NaN) satisfies nothing, as
/// the host's own comparison operators behave.
fn comparison(
    operator: BinaryOperator,
    left: Value,
    right: Value,
    decide: fn(Ordering) -> bool,
) -> Result<Value, EvalError> {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => a.partial_cmp(&b),
        _ => {
            let (a, b) = both_numeric(operator, left, right)?;
            a.partial_cmp(&b)
        }
    };
    Ok(Value::Bool(ordering.is_some_and(decide)))
}

/// Equality: exact for integer pairs, boolean-to-boolean, float for mixed
/// numeric pairs. A boolean compared with a number is an operand-kind
/// mismatch, not `false`.
#[allow(clippy::float_cmp)]
fn equality(operator: BinaryOperator, left: Value, right: Value) -> Result<bool, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Bool(_), _) | (_, Value::Bool(_)) => Err(EvalError::InvalidOperands {
            operator,
            left,
            right,
        }),
        _ => {
            let (a, b) = both_numeric(operator, left, right)?;
            Ok(a == b)
        }
    }
}
