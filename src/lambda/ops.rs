//! Operator interception for the placeholder front-end.
//!
//! Applying an arithmetic operator to [`Placeholder`] or [`Expr`] performs
//! no arithmetic: it records the operation as a new [`Expr`] node. Operands
//! that are not already expressions are promoted to constant leaves through
//! their `Into<Expr>` conversions, and reversed forms are provided for the
//! numeric primitives so `2 * ARG` builds the same shape as `ARG * 2`.
//!
//! The implementations below are the *entire* interceptable operator
//! surface. Anything else applied to a placeholder (bitwise operators,
//! boolean operators, string concatenation, indexing, ...) has no trait
//! implementation and is rejected by the compiler, which names the
//! attempted operator in its diagnostic.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use super::expr::{BinaryOperator, Expr, Placeholder, UnaryOperator};

// Forward forms: `ARG + rhs` and `expr + rhs` for any promotable `rhs`.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $operator:ident, $receiver:ty) => {
        impl<Rhs: Into<Expr>> $trait<Rhs> for $receiver {
            type Output = Expr;

            #[inline]
            fn $method(self, rhs: Rhs) -> Expr {
                Expr::binary(BinaryOperator::$operator, self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, Add, Placeholder);
impl_binary_operator!(Sub, sub, Subtract, Placeholder);
impl_binary_operator!(Mul, mul, Multiply, Placeholder);
impl_binary_operator!(Div, div, Divide, Placeholder);
impl_binary_operator!(Rem, rem, Remainder, Placeholder);

impl_binary_operator!(Add, add, Add, Expr);
impl_binary_operator!(Sub, sub, Subtract, Expr);
impl_binary_operator!(Mul, mul, Multiply, Expr);
impl_binary_operator!(Div, div, Divide, Expr);
impl_binary_operator!(Rem, rem, Remainder, Expr);

// Reversed forms: `2 * ARG` and `2 * expr`. Coherence forbids a blanket
// impl over every `Into<Expr>` left operand, so these are generated per
// numeric primitive.
macro_rules! impl_reversed_binary_operator {
    ($($literal:ty),* $(,)?) => {
        $(
            impl Add<Placeholder> for $literal {
                type Output = Expr;

                #[inline]
                fn add(self, rhs: Placeholder) -> Expr {
                    Expr::binary(BinaryOperator::Add, self, rhs)
                }
            }

            impl Add<Expr> for $literal {
                type Output = Expr;

                #[inline]
                fn add(self, rhs: Expr) -> Expr {
                    Expr::binary(BinaryOperator::Add, self, rhs)
                }
            }

            impl Sub<Placeholder> for $literal {
                type Output = Expr;

                #[inline]
                fn sub(self, rhs: Placeholder) -> Expr {
                    Expr::binary(BinaryOperator::Subtract, self, rhs)
                }
            }

            impl Sub<Expr> for $literal {
                type Output = Expr;

                #[inline]
                fn sub(self, rhs: Expr) -> Expr {
                    Expr::binary(BinaryOperator::Subtract, self, rhs)
                }
            }

            impl Mul<Placeholder> for $literal {
                type Output = Expr;

                #[inline]
                fn mul(self, rhs: Placeholder) -> Expr {
                    Expr::binary(BinaryOperator::Multiply, self, rhs)
                }
            }

            impl Mul<Expr> for $literal {
                type Output = Expr;

                #[inline]
                fn mul(self, rhs: Expr) -> Expr {
                    Expr::binary(BinaryOperator::Multiply, self, rhs)
                }
            }

            impl Div<Placeholder> for $literal {
                type Output = Expr;

                #[inline]
                fn div(self, rhs: Placeholder) -> Expr {
                    Expr::binary(BinaryOperator::Divide, self, rhs)
                }
            }

            impl Div<Expr> for $literal {
                type Output = Expr;

                #[inline]
                fn div(self, rhs: Expr) -> Expr {
                    Expr::binary(BinaryOperator::Divide, self, rhs)
                }
            }

            impl Rem<Placeholder> for $literal {
                type Output = Expr;

                #[inline]
                fn rem(self, rhs: Placeholder) -> Expr {
                    Expr::binary(BinaryOperator::Remainder, self, rhs)
                }
            }

            impl Rem<Expr> for $literal {
                type Output = Expr;

                #[inline]
                fn rem(self, rhs: Expr) -> Expr {
                    Expr::binary(BinaryOperator::Remainder, self, rhs)
                }
            }
        )*
    };
}

impl_reversed_binary_operator!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl Neg for Placeholder {
    type Output = Expr;

    #[inline]
    fn neg(self) -> Expr {
        Expr::unary(UnaryOperator::Negate, Expr::Slot)
    }
}

impl Neg for Expr {
    type Output = Expr;

    #[inline]
    fn neg(self) -> Expr {
        Expr::unary(UnaryOperator::Negate, self)
    }
}

#[cfg(test)]
mod tests {
    use super::super::expr::ARG;
    use super::*;
    use crate::lambda::Value;

    #[test]
    fn every_arithmetic_operator_builds_its_node() {
        for (tree, operator) in [
            (ARG + 1, BinaryOperator::Add),
            (ARG - 1, BinaryOperator::Subtract),
            (ARG * 1, BinaryOperator::Multiply),
            (ARG / 1, BinaryOperator::Divide),
            (ARG % 1, BinaryOperator::Remainder),
        ] {
            assert_eq!(tree, Expr::binary(operator, Expr::Slot, 1));
        }
    }

    #[test]
    fn reversed_operands_build_with_the_literal_on_the_left() {
        let tree: Expr = 10 - ARG;
        assert_eq!(
            tree,
            Expr::binary(BinaryOperator::Subtract, 10, Expr::Slot)
        );
        assert_eq!(tree.apply(4).unwrap(), Value::Int(6));
    }

    #[test]
    fn negation_wraps_the_whole_receiver() {
        let tree = -(ARG + 1);
        assert_eq!(
            tree,
            Expr::unary(
                UnaryOperator::Negate,
                Expr::binary(BinaryOperator::Add, Expr::Slot, 1)
            )
        );
    }

    #[test]
    fn expressions_compose_with_expressions() {
        let tree = (ARG + 1) * (ARG - 1);
        assert_eq!(tree.apply(5).unwrap(), Value::Int(24));
    }

    #[test]
    fn float_literals_promote_to_float_constants() {
        let tree = ARG + 0.5;
        assert_eq!(
            tree,
            Expr::binary(BinaryOperator::Add, Expr::Slot, 0.5)
        );
    }
}
