//! Placeholder expression builder.
//!
//! This module provides a "smarter lambda": the [`ARG`] placeholder, whose
//! arithmetic and comparison applications do not compute a result but build
//! an immutable [`Expr`] tree, deferring evaluation until the tree is
//! invoked with a concrete argument.
//!
//! - [`Placeholder`] / [`ARG`]: the stateless sentinel intercepting operators
//! - [`Expr`]: the immutable expression tree (slot, constant, operator nodes)
//! - [`Value`]: the dynamic value domain expressions evaluate over
//! - [`EvalError`]: everything that can go wrong at evaluation time
//!
//! # Building Expressions
//!
//! Arithmetic operators (`+`, `-`, `*`, `/`, `%`, unary `-`) are intercepted
//! through `std::ops`. Comparisons and exponentiation cannot be intercepted
//! in Rust (`<` and `==` are fixed to return `bool`, and there is no `**`
//! operator), so they are builder methods: [`Expr::lt`], [`Expr::le`],
//! [`Expr::gt`], [`Expr::ge`], [`Expr::eq`], [`Expr::ne`] and [`Expr::pow`].
//!
//! The supported operator set is closed: applying any other operator to a
//! placeholder or expression (bitwise, boolean, string concatenation, ...)
//! is rejected by the compiler because no such trait implementation exists.
//!
//! # Evaluating Expressions
//!
//! Evaluation is a pure bottom-up tree walk: every [`Expr::Slot`] leaf reads
//! the one supplied argument, constants yield their captured value, operator
//! nodes evaluate their operands left-then-right and delegate to the host's
//! numeric semantics. Operand validity is checked at evaluation time only;
//! any tree is buildable regardless of whether it can ever evaluate.
//!
//! # Examples
//!
//! ```rust
//! use enumars::lambda::{ARG, Value};
//!
//! // `ARG * 2 + 1` builds `(x * 2) + 1`, it computes nothing yet.
//! let transform = ARG * 2 + 1;
//! assert_eq!(transform.apply(5).unwrap(), Value::Int(11));
//! assert_eq!(transform.apply(5).unwrap(), Value::Int(11)); // pure
//!
//! // Comparisons produce boolean-valued expressions.
//! let over_100 = ARG.gt(100);
//! assert_eq!(over_100.test(150).unwrap(), true);
//! assert_eq!(over_100.test(50).unwrap(), false);
//!
//! // Division by zero builds fine and fails only when invoked.
//! let bad = ARG / 0;
//! assert!(bad.apply(1).is_err());
//! ```

mod eval;
mod expr;
mod ops;
mod value;

pub use eval::EvalError;
pub use expr::{ARG, BinaryOperator, Expr, Placeholder, UnaryOperator, arg};
pub use value::Value;
