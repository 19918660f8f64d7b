//! Unit tests for the placeholder expression builder.
//!
//! The `ARG` sentinel intercepts arithmetic operators (and exposes builder
//! methods for comparisons and exponentiation) to record an expression tree
//! instead of computing a value; the tree is evaluated later against a
//! concrete argument.

#![cfg(feature = "lambda")]

use enumars::lambda::{ARG, BinaryOperator, EvalError, Expr, Value, arg};
use rstest::rstest;

// =============================================================================
// Building
// =============================================================================

#[rstest]
fn building_performs_no_computation() {
    // A tree that could never evaluate still builds.
    let tree = ARG / 0 + Expr::constant(true) * 2;
    assert!(matches!(tree, Expr::Binary { .. }));
}

#[rstest]
fn arg_function_returns_the_bare_slot() {
    assert_eq!(arg(), Expr::Slot);
    assert_eq!(Expr::from(ARG), Expr::Slot);
}

#[rstest]
fn literal_operands_become_constant_leaves() {
    let tree = ARG + 5;
    let Expr::Binary { right, .. } = tree else {
        panic!("expected a binary node");
    };
    assert_eq!(*right, Expr::Constant(Value::Int(5)));
}

#[rstest]
fn the_sentinel_is_reusable_across_expressions() {
    let first = ARG * 2;
    let second = ARG * 3;
    assert_eq!(first.apply(10).unwrap(), Value::Int(20));
    assert_eq!(second.apply(10).unwrap(), Value::Int(30));
}

#[rstest]
fn cloned_trees_are_independent_and_identical() {
    let original = ARG * 2 + 1;
    let clone = original.clone();
    assert_eq!(original, clone);
    assert_eq!(original.apply(5), clone.apply(5));
}

// =============================================================================
// Arithmetic Evaluation
// =============================================================================

#[rstest]
#[case(ARG + 1, 5, Value::Int(6))]
#[case(ARG - 1, 5, Value::Int(4))]
#[case(ARG * 3, 5, Value::Int(15))]
#[case(ARG / 2, 5, Value::Int(2))]
#[case(ARG % 3, 5, Value::Int(2))]
#[case(-ARG, 5, Value::Int(-5))]
#[case(ARG.pow(2), 5, Value::Int(25))]
fn each_operator_defers_to_host_arithmetic(
    #[case] tree: Expr,
    #[case] argument: i64,
    #[case] expected: Value,
) {
    assert_eq!(tree.apply(argument).unwrap(), expected);
}

#[rstest]
fn the_canonical_example_multiply_then_add() {
    let transform = ARG * 2 + 1;
    assert_eq!(transform.apply(5).unwrap(), Value::Int(11));
}

#[rstest]
fn reversed_operands_subtract_from_the_literal() {
    let tree: Expr = 10 - ARG;
    assert_eq!(tree.apply(3).unwrap(), Value::Int(7));

    let tree: Expr = 2.0 * ARG;
    assert_eq!(tree.apply(3).unwrap(), Value::Float(6.0));
}

#[rstest]
fn the_slot_may_be_read_twice() {
    let double = ARG + ARG;
    assert_eq!(double.apply(21).unwrap(), Value::Int(42));

    let square = ARG * ARG;
    assert_eq!(square.apply(7).unwrap(), Value::Int(49));
}

#[rstest]
fn nested_groupings_follow_the_parentheses() {
    let tree = (ARG + 1) * (ARG + 2);
    assert_eq!(tree.apply(3).unwrap(), Value::Int(20));
}

#[rstest]
fn mixed_numeric_operands_promote_to_float() {
    assert_eq!((ARG + 0.5).apply(2).unwrap(), Value::Float(2.5));
    assert_eq!((ARG * 2).apply(1.25).unwrap(), Value::Float(2.5));
}

// =============================================================================
// Comparison Evaluation
// =============================================================================

#[rstest]
#[case(ARG.gt(100), 150, true)]
#[case(ARG.gt(100), 50, false)]
#[case(ARG.gt(100), 100, false)]
#[case(ARG.ge(100), 100, true)]
#[case(ARG.lt(100), 50, true)]
#[case(ARG.le(100), 100, true)]
#[case(ARG.eq(100), 100, true)]
#[case(ARG.ne(100), 100, false)]
fn comparison_chain(#[case] tree: Expr, #[case] argument: i64, #[case] expected: bool) {
    assert_eq!(tree.test(argument).unwrap(), expected);
}

#[rstest]
fn comparisons_compose_with_arithmetic() {
    // (x * 2) > 100
    let tree = (ARG * 2).gt(100);
    assert!(tree.test(51).unwrap());
    assert!(!tree.test(50).unwrap());
}

#[rstest]
fn both_comparison_sides_are_always_evaluated() {
    // The right side divides by zero; a short-circuiting comparison would
    // hide the error for arguments that already decide the outcome.
    let tree = ARG.gt(Expr::constant(1) / 0);
    assert!(tree.apply(1_000_000).is_err());
}

// =============================================================================
// Error Boundaries
// =============================================================================

#[rstest]
fn division_by_zero_fails_at_invocation_not_build() {
    let tree = ARG / 0;
    assert_eq!(
        tree.apply(10),
        Err(EvalError::DivisionByZero {
            operator: BinaryOperator::Divide
        })
    );
}

#[rstest]
fn type_mismatches_fail_at_invocation_not_build() {
    let tree = ARG * 2;
    let result = tree.apply(true);
    assert_eq!(
        result,
        Err(EvalError::InvalidOperands {
            operator: BinaryOperator::Multiply,
            left: Value::Bool(true),
            right: Value::Int(2),
        })
    );
}

#[rstest]
fn errors_surface_from_the_failing_sub_expression() {
    // Only the right branch is invalid; the error still propagates out.
    let tree = ARG + (ARG % 0);
    assert_eq!(
        tree.apply(1),
        Err(EvalError::DivisionByZero {
            operator: BinaryOperator::Remainder
        })
    );
}

// =============================================================================
// Callable Wrapper
// =============================================================================

#[rstest]
fn callable_wrapper_is_referentially_transparent() {
    let callable = (ARG * 2 + 1).callable();
    assert_eq!(callable(Value::Int(5)).unwrap(), Value::Int(11));
    assert_eq!(callable(Value::Int(5)).unwrap(), Value::Int(11));

    let cloned = callable.clone();
    assert_eq!(cloned(Value::Int(7)).unwrap(), Value::Int(15));
}

#[rstest]
fn callable_wrapper_fits_higher_order_consumers() {
    fn apply_twice<F: Fn(Value) -> Result<Value, EvalError>>(
        function: F,
        argument: Value,
    ) -> Result<Value, EvalError> {
        function(function(argument)?)
    }

    let increment = (ARG + 1).callable();
    assert_eq!(apply_twice(increment, Value::Int(0)).unwrap(), Value::Int(2));
}
