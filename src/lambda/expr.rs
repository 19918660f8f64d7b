//! Expression tree and placeholder sentinel.
//!
//! An [`Expr`] is an immutable, finite, acyclic tree describing a deferred
//! computation over one input slot. Nodes are created by operator
//! applications on the [`ARG`] placeholder (or on an already-built tree) and
//! never mutated afterwards; every operator application returns a fresh node
//! that strictly owns its operand sub-trees.
//!
//! Build order follows Rust's own operator precedence: the builder only
//! reacts to the order in which the host evaluates the surrounding
//! expression, so `ARG * 2 + 1` is `(x * 2) + 1` exactly as it would be for
//! plain numbers.

use std::fmt;

use super::value::Value;

// =============================================================================
// Operators
// =============================================================================

/// A single-operand operator usable in an expression node.
///
/// # Examples
///
/// ```rust
/// use enumars::lambda::UnaryOperator;
///
/// assert_eq!(UnaryOperator::Negate.to_string(), "-");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => formatter.write_str("-"),
        }
    }
}

/// A two-operand operator usable in an expression node.
///
/// The set is closed: arithmetic (`+`, `-`, `*`, `/`, `%`, `pow`) and
/// comparison (`<`, `<=`, `>`, `>=`, `==`, `!=`). Nothing else can appear in
/// a tree, which lets the evaluator match exhaustively.
///
/// # Examples
///
/// ```rust
/// use enumars::lambda::BinaryOperator;
///
/// assert_eq!(BinaryOperator::Add.to_string(), "+");
/// assert_eq!(BinaryOperator::LessOrEqual.to_string(), "<=");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`*`).
    Multiply,
    /// Division (`/`).
    Divide,
    /// Remainder (`%`).
    Remainder,
    /// Exponentiation (`pow`).
    Power,
    /// Strictly less than (`<`).
    Less,
    /// Less than or equal (`<=`).
    LessOrEqual,
    /// Strictly greater than (`>`).
    Greater,
    /// Greater than or equal (`>=`).
    GreaterOrEqual,
    /// Equality (`==`).
    Equal,
    /// Inequality (`!=`).
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for the comparison subset (boolean-valued operators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::lambda::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Less.is_comparison());
    /// assert!(!BinaryOperator::Add.is_comparison());
    /// ```
    #[inline]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Less
                | Self::LessOrEqual
                | Self::Greater
                | Self::GreaterOrEqual
                | Self::Equal
                | Self::NotEqual
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Power => "pow",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        formatter.write_str(symbol)
    }
}

// =============================================================================
// Expression Tree
// =============================================================================

/// An immutable expression tree describing a deferred computation.
///
/// A tree is either the input [`Slot`](Self::Slot), a captured
/// [`Constant`](Self::Constant), or an operator node owning its operand
/// sub-trees. Trees are built with ordinary operator syntax on the [`ARG`]
/// placeholder and evaluated later with [`Expr::apply`](Self::apply).
///
/// Cloning a tree yields an independently usable, behaviorally identical
/// tree; nothing is ever mutated in place, so clones and originals may be
/// evaluated freely (even concurrently) with different arguments.
///
/// # Examples
///
/// ```rust
/// use enumars::lambda::{ARG, Expr, Value};
///
/// let tree = ARG * 2 + 1;
/// assert_eq!(tree.apply(5).unwrap(), Value::Int(11));
///
/// // Structural equality compares the trees, not their results.
/// assert_eq!(ARG * 2 + 1, ARG * 2 + 1);
/// assert_ne!(ARG * 2 + 1, ARG + 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// The deferred input position: evaluation substitutes the supplied
    /// argument here. Every `Slot` leaf in a tree reads the same argument.
    Slot,
    /// A literal captured at build time.
    Constant(Value),
    /// A single-operand operator applied to a sub-expression.
    Unary {
        /// The operator to apply.
        operator: UnaryOperator,
        /// The operand sub-tree.
        operand: Box<Expr>,
    },
    /// A two-operand operator applied to two sub-expressions.
    Binary {
        /// The operator to apply.
        operator: BinaryOperator,
        /// The left operand sub-tree, evaluated first.
        left: Box<Expr>,
        /// The right operand sub-tree, evaluated second.
        right: Box<Expr>,
    },
}

impl Expr {
    /// Creates a constant leaf from any value convertible to [`Value`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::lambda::{Expr, Value};
    ///
    /// assert_eq!(Expr::constant(3), Expr::Constant(Value::Int(3)));
    /// ```
    #[inline]
    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Constant(value.into())
    }

    /// Creates a unary operator node.
    #[inline]
    pub(crate) fn unary(operator: UnaryOperator, operand: Self) -> Self {
        Self::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Creates a binary operator node, promoting non-expression operands to
    /// constant leaves.
    #[inline]
    pub(crate) fn binary(
        operator: BinaryOperator,
        left: impl Into<Self>,
        right: impl Into<Self>,
    ) -> Self {
        Self::Binary {
            operator,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

// =============================================================================
// Placeholder Sentinel
// =============================================================================

/// The placeholder sentinel whose operator applications build expressions.
///
/// `Placeholder` is a stateless, zero-sized, `Copy` unit type: every
/// operator application on it returns a fresh [`Expr`] node and the sentinel
/// itself never changes, so the single shared [`ARG`] constant can be reused
/// across any number of expressions without synchronization.
///
/// # Examples
///
/// ```rust
/// use enumars::lambda::{ARG, Value};
///
/// let halve = ARG / 2;
/// let negate = -ARG;
/// assert_eq!(halve.apply(8).unwrap(), Value::Int(4));
/// assert_eq!(negate.apply(8).unwrap(), Value::Int(-8));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placeholder;

/// The shared placeholder sentinel.
///
/// Combine `ARG` with literals (or other expressions) using ordinary infix
/// syntax to build an expression tree instead of computing a value.
///
/// # Examples
///
/// ```rust
/// use enumars::lambda::{ARG, Value};
///
/// let transform = (ARG + 3) * 2;
/// assert_eq!(transform.apply(1).unwrap(), Value::Int(8));
/// ```
pub const ARG: Placeholder = Placeholder;

/// Returns the input slot as a bare expression node.
///
/// Equivalent to `Expr::from(ARG)`; useful where an [`Expr`] value is needed
/// directly rather than the sentinel.
///
/// # Examples
///
/// ```rust
/// use enumars::lambda::{Expr, arg};
///
/// assert_eq!(arg(), Expr::Slot);
/// ```
#[inline]
#[must_use]
pub const fn arg() -> Expr {
    Expr::Slot
}

impl From<Placeholder> for Expr {
    #[inline]
    fn from(_: Placeholder) -> Self {
        Self::Slot
    }
}

impl From<Value> for Expr {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Constant(value)
    }
}

macro_rules! impl_expr_from_literal {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Expr {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::Constant(Value::from(value))
                }
            }
        )*
    };
}

impl_expr_from_literal!(i8, i16, i32, i64, u8, u16, u32, f32, f64, bool);

// =============================================================================
// Comparison and Power Builders
// =============================================================================

// `<` and `==` are fixed to return `bool` in Rust and `**` does not exist,
// so these members of the closed operator set are builder methods instead of
// `std::ops` impls. Both the sentinel and expression nodes expose them.
macro_rules! impl_comparison_builders {
    ($receiver:ty) => {
        // Deferred builders intentionally reuse the `PartialOrd`/`PartialEq`
        // method names; operator syntax still resolves to the traits.
        #[allow(clippy::should_implement_trait)]
        impl $receiver {
            /// Builds `self < other` as a deferred comparison.
            ///
            /// # Examples
            ///
            /// ```rust
            /// use enumars::lambda::ARG;
            ///
            /// assert_eq!((ARG * 2).lt(10).test(4).unwrap(), true);
            /// ```
            #[inline]
            #[must_use]
            pub fn lt(self, other: impl Into<Expr>) -> Expr {
                Expr::binary(BinaryOperator::Less, self, other)
            }

            /// Builds `self <= other` as a deferred comparison.
            #[inline]
            #[must_use]
            pub fn le(self, other: impl Into<Expr>) -> Expr {
                Expr::binary(BinaryOperator::LessOrEqual, self, other)
            }

            /// Builds `self > other` as a deferred comparison.
            ///
            /// # Examples
            ///
            /// ```rust
            /// use enumars::lambda::ARG;
            ///
            /// let over_100 = ARG.gt(100);
            /// assert_eq!(over_100.test(150).unwrap(), true);
            /// assert_eq!(over_100.test(50).unwrap(), false);
            /// ```
            #[inline]
            #[must_use]
            pub fn gt(self, other: impl Into<Expr>) -> Expr {
                Expr::binary(BinaryOperator::Greater, self, other)
            }

            /// Builds `self >= other` as a deferred comparison.
            #[inline]
            #[must_use]
            pub fn ge(self, other: impl Into<Expr>) -> Expr {
                Expr::binary(BinaryOperator::GreaterOrEqual, self, other)
            }

            /// Builds `self == other` as a deferred comparison.
            ///
            /// This is the deferred builder, not [`PartialEq`]: `a.eq(b)`
            /// returns an expression, while `a == b` still compares trees
            /// structurally.
            #[inline]
            #[must_use]
            pub fn eq(self, other: impl Into<Expr>) -> Expr {
                Expr::binary(BinaryOperator::Equal, self, other)
            }

            /// Builds `self != other` as a deferred comparison.
            #[inline]
            #[must_use]
            pub fn ne(self, other: impl Into<Expr>) -> Expr {
                Expr::binary(BinaryOperator::NotEqual, self, other)
            }

            /// Builds `self` raised to `exponent` as a deferred operation.
            ///
            /// # Examples
            ///
            /// ```rust
            /// use enumars::lambda::{ARG, Value};
            ///
            /// assert_eq!(ARG.pow(2).apply(3).unwrap(), Value::Int(9));
            /// ```
            #[inline]
            #[must_use]
            pub fn pow(self, exponent: impl Into<Expr>) -> Expr {
                Expr::binary(BinaryOperator::Power, self, exponent)
            }
        }
    };
}

impl_comparison_builders!(Placeholder);
impl_comparison_builders!(Expr);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_operands_promote_to_constant_leaves() {
        let tree = ARG + 1;
        assert_eq!(
            tree,
            Expr::Binary {
                operator: BinaryOperator::Add,
                left: Box::new(Expr::Slot),
                right: Box::new(Expr::Constant(Value::Int(1))),
            }
        );
    }

    #[test]
    fn build_order_follows_host_precedence() {
        // `ARG * 2 + 1` must parse as `(ARG * 2) + 1`.
        let tree = ARG * 2 + 1;
        let expected = Expr::binary(
            BinaryOperator::Add,
            Expr::binary(BinaryOperator::Multiply, Expr::Slot, 2),
            1,
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn sentinel_applications_leave_the_sentinel_reusable() {
        let first = ARG + 1;
        let second = ARG + 1;
        assert_eq!(first, second);
    }

    #[test]
    fn comparison_builders_record_structure_without_evaluating() {
        let tree = ARG.gt(100);
        assert_eq!(
            tree,
            Expr::Binary {
                operator: BinaryOperator::Greater,
                left: Box::new(Expr::Slot),
                right: Box::new(Expr::Constant(Value::Int(100))),
            }
        );
    }

    #[test]
    fn operator_symbols_render_for_diagnostics() {
        assert_eq!(BinaryOperator::Divide.to_string(), "/");
        assert_eq!(BinaryOperator::Power.to_string(), "pow");
        assert_eq!(UnaryOperator::Negate.to_string(), "-");
    }
}
