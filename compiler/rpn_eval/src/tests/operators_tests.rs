//! Tests for arithmetic and comparison kinds.

use pretty_assertions::assert_eq;
use rpn_ir::OpKind;

use super::{eval_fresh, eval_ok};
use crate::{
    coerce_integer, evaluate_binary, evaluate_pure, evaluate_unary, Environment, ErrorCategory,
    EvalErrorKind, Value,
};

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn binary_arithmetic() {
    assert_eq!(evaluate_binary(OpKind::Add, &num(2.0), &num(3.0)), Ok(num(5.0)));
    assert_eq!(evaluate_binary(OpKind::Sub, &num(5.0), &num(3.0)), Ok(num(2.0)));
    assert_eq!(evaluate_binary(OpKind::Mul, &num(2.0), &num(3.5)), Ok(num(7.0)));
    assert_eq!(evaluate_binary(OpKind::Div, &num(7.0), &num(2.0)), Ok(num(3.5)));
    assert_eq!(evaluate_binary(OpKind::Pow, &num(2.0), &num(10.0)), Ok(num(1024.0)));
    assert_eq!(evaluate_binary(OpKind::Mod, &num(7.0), &num(3.0)), Ok(num(1.0)));
}

#[test]
fn modulus_takes_sign_of_divisor() {
    assert_eq!(evaluate_binary(OpKind::Mod, &num(-7.0), &num(3.0)), Ok(num(2.0)));
    assert_eq!(evaluate_binary(OpKind::Mod, &num(7.0), &num(-3.0)), Ok(num(-2.0)));
    assert_eq!(evaluate_binary(OpKind::Mod, &num(6.0), &num(-3.0)), Ok(num(0.0)));
}

#[test]
fn subtraction_uses_first_popped_as_left_operand() {
    assert_eq!(eval_fresh("3 5 -"), Ok(num(2.0)));
    assert_eq!(eval_fresh("2 8 /"), Ok(num(4.0)));
    assert_eq!(eval_fresh("3 2 **"), Ok(num(8.0)));
}

#[test]
fn unary_operations() {
    assert_eq!(evaluate_unary(OpKind::Reciprocal, &num(4.0)), Ok(num(0.25)));
    assert_eq!(evaluate_unary(OpKind::Abs, &num(-3.5)), Ok(num(3.5)));
    assert_eq!(eval_fresh("2 1/"), Ok(num(0.5)));
    assert_eq!(eval_fresh("7 0 - abs"), Ok(num(7.0)));
}

#[test]
fn zero_divisors_are_arithmetic_errors() {
    for text in ["0 5 /", "0 5 %", "0 1/"] {
        let err = match eval_fresh(text) {
            Ok(v) => panic!("{text:?} evaluated to {v}"),
            Err(e) => e,
        };
        assert_eq!(err.category(), ErrorCategory::Arithmetic, "{text}");
    }
}

#[test]
fn division_by_zero_names_the_operation() {
    let err = match eval_fresh("0 5 /") {
        Ok(v) => panic!("evaluated to {v}"),
        Err(e) => e,
    };
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.to_string(), "division by zero (in `/`)");
}

#[test]
fn ordering_comparisons() {
    assert_eq!(eval_fresh("5 6 >="), Ok(Value::Bool(true)));
    assert_eq!(eval_fresh("5 6 >"), Ok(Value::Bool(true)));
    assert_eq!(eval_fresh("6 6 >"), Ok(Value::Bool(false)));
    assert_eq!(eval_fresh("6 6 <="), Ok(Value::Bool(true)));
    assert_eq!(eval_fresh("6 5 <"), Ok(Value::Bool(true)));
}

#[test]
fn nan_compares_false() {
    let nan = num(f64::NAN);
    assert_eq!(evaluate_binary(OpKind::Lt, &nan, &num(1.0)), Ok(Value::Bool(false)));
    assert_eq!(evaluate_binary(OpKind::GtEq, &nan, &num(1.0)), Ok(Value::Bool(false)));
}

#[test]
fn equality_between_same_types() {
    assert_eq!(eval_fresh("4 4 ="), Ok(Value::Bool(true)));
    assert_eq!(eval_fresh("4 4 !="), Ok(Value::Bool(false)));
    assert_eq!(eval_fresh("1 1 = 0 0 = ="), Ok(Value::Bool(true)));
    assert_eq!(
        evaluate_binary(OpKind::Eq, &Value::array(vec![1.0, 2.0]), &Value::array(vec![1.0, 2.0])),
        Ok(Value::Bool(true))
    );
}

#[test]
fn equality_across_types_is_false() {
    assert_eq!(
        evaluate_binary(OpKind::Eq, &num(1.0), &Value::Bool(true)),
        Ok(Value::Bool(false))
    );
    assert_eq!(
        evaluate_binary(OpKind::NotEq, &num(0.0), &Value::array(vec![0.0])),
        Ok(Value::Bool(true))
    );
    assert_eq!(eval_fresh("nop 0 ="), Ok(Value::Bool(false)));
    assert_eq!(eval_fresh("nop 0 !="), Ok(Value::Bool(true)));

    let mut env = Environment::new();
    env.bind("v", Value::array(vec![0.0; 2]));
    assert_eq!(eval_ok("v 0 =", &mut env), Value::Bool(false));
    assert_eq!(eval_ok("v 0 !=", &mut env), Value::Bool(true));
}

#[test]
fn zero_to_negative_power_is_an_arithmetic_error() {
    let err = match eval_fresh("-1 0 **") {
        Ok(v) => panic!("evaluated to {v}"),
        Err(e) => e,
    };
    assert_eq!(err.kind, EvalErrorKind::ZeroToNegativePower);
    assert_eq!(err.category(), ErrorCategory::Arithmetic);
    assert_eq!(err.operation, Some("**"));

    assert_eq!(evaluate_binary(OpKind::Pow, &num(0.0), &num(0.0)), Ok(num(1.0)));
    assert_eq!(evaluate_binary(OpKind::Pow, &num(0.0), &num(2.0)), Ok(num(0.0)));
}

#[test]
fn arithmetic_on_booleans_is_a_type_error() {
    let err = match eval_fresh("1 1 1 = +") {
        Ok(v) => panic!("evaluated to {v}"),
        Err(e) => e,
    };
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "number",
            got: "boolean",
        }
    );
    assert_eq!(err.operation, Some("+"));
}

#[test]
fn pure_dispatch_checks_operand_count() {
    let err = match evaluate_pure(OpKind::Add, &[num(1.0)]) {
        Ok(v) => panic!("evaluated to {v}"),
        Err(e) => e,
    };
    assert_eq!(err.category(), ErrorCategory::NotAnExpression);
}

#[test]
fn integer_coercion_stays_within_range() {
    assert_eq!(coerce_integer(&num(3.0)), Ok(3));
    assert_eq!(coerce_integer(&num(-(2f64.powi(53)))), Ok(-(1_i64 << 53)));
    assert_eq!(coerce_integer(&num(-(2f64.powi(63)))), Ok(i64::MIN));

    for n in [1e300, 2f64.powi(63), -1e19] {
        let err = match coerce_integer(&num(n)) {
            Ok(i) => panic!("{n} coerced to {i}"),
            Err(e) => e,
        };
        assert_eq!(err.kind, EvalErrorKind::IntegerOutOfRange { value: n });
    }
    assert_eq!(
        coerce_integer(&num(f64::INFINITY)).map_err(|e| e.kind),
        Err(EvalErrorKind::NotAnInteger { value: f64::INFINITY })
    );
}
