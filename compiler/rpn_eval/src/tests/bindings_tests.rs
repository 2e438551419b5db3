//! Tests for `alloc`, `valloc`, `setq`, `setv`.

use pretty_assertions::assert_eq;

use super::{eval_err, eval_ok};
use crate::{ErrorCategory, EvalErrorKind, Environment, Value, MAX_ARRAY_LEN};

#[test]
fn alloc_binds_zero() {
    let mut env = Environment::new();
    assert_eq!(eval_ok("x alloc", &mut env), Value::Number(0.0));
    assert_eq!(env.lookup("x"), Some(Value::Number(0.0)));
}

#[test]
fn alloc_then_assign_then_read() {
    let mut env = Environment::new();
    eval_ok("x alloc", &mut env);
    assert_eq!(eval_ok("5 x setq", &mut env), Value::Number(5.0));
    assert_eq!(eval_ok("x", &mut env), Value::Number(5.0));
}

#[test]
fn assign_evaluates_before_binding() {
    let mut env = Environment::new();
    env.bind("x", Value::Number(3.0));
    assert_eq!(eval_ok("2 x + 4 x - x setq x alloc prog3", &mut env), Value::Number(-2.0));
    assert_eq!(env.lookup("x"), Some(Value::Number(-4.0)));
}

#[test]
fn alloc_requires_a_variable() {
    let err = eval_err("5 alloc", &mut Environment::new());
    assert_eq!(err.category(), ErrorCategory::NotAVariable);
    assert_eq!(
        err.kind,
        EvalErrorKind::NotAVariable {
            op: "alloc",
            found: "5.0".to_string(),
        }
    );
}

#[test]
fn setq_requires_a_variable() {
    let err = eval_err("4 5 setq", &mut Environment::new());
    assert_eq!(err.category(), ErrorCategory::NotAVariable);
}

#[test]
fn valloc_creates_zeroed_array() {
    let mut env = Environment::new();
    assert_eq!(eval_ok("4 y valloc", &mut env), Value::array(vec![0.0; 4]));
    assert_eq!(env.lookup("y"), Some(Value::array(vec![0.0; 4])));
}

#[test]
fn valloc_of_zero_is_empty() {
    let mut env = Environment::new();
    assert_eq!(eval_ok("0 y valloc", &mut env), Value::array(Vec::new()));
}

#[test]
fn valloc_accepts_whole_reals() {
    let mut env = Environment::new();
    env.bind("n", Value::Number(3.0));
    assert_eq!(eval_ok("n v valloc", &mut env), Value::array(vec![0.0; 3]));
}

#[test]
fn valloc_rejects_fractional_count() {
    let err = eval_err("2.5 v valloc", &mut Environment::new());
    assert_eq!(err.kind, EvalErrorKind::NotAnInteger { value: 2.5 });
    assert_eq!(err.category(), ErrorCategory::Type);
}

#[test]
fn valloc_rejects_count_beyond_integer_range() {
    let mut env = Environment::new();
    let err = eval_err("1e300 v valloc", &mut env);
    assert_eq!(err.kind, EvalErrorKind::IntegerOutOfRange { value: 1e300 });
    assert_eq!(err.operation, Some("valloc"));
    assert_eq!(env.lookup("v"), None);
}

#[test]
fn valloc_rejects_count_above_limit() {
    let mut env = Environment::new();
    env.bind("n", Value::Number((MAX_ARRAY_LEN + 1) as f64));
    let err = eval_err("n v valloc", &mut env);
    assert_eq!(
        err.kind,
        EvalErrorKind::ArrayTooLarge {
            len: MAX_ARRAY_LEN + 1,
            max: MAX_ARRAY_LEN,
        }
    );
    assert_eq!(err.category(), ErrorCategory::Index);
    assert_eq!(env.lookup("v"), None);
}

#[test]
fn huge_computed_count_is_an_error() {
    let err = eval_err("8 10 ** v valloc", &mut Environment::new());
    assert_eq!(err.category(), ErrorCategory::Index);
}

#[test]
fn setv_index_beyond_integer_range() {
    let mut env = Environment::new();
    env.bind("v", Value::array(vec![0.0; 2]));
    let err = eval_err("1 1e19 v setv", &mut env);
    assert_eq!(err.kind, EvalErrorKind::IntegerOutOfRange { value: 1e19 });
    assert_eq!(err.category(), ErrorCategory::Type);
}

#[test]
fn valloc_rejects_negative_count() {
    let err = eval_err("2 0 - v valloc", &mut Environment::new());
    assert_eq!(err.kind, EvalErrorKind::NegativeLength { len: -2 });
    assert_eq!(err.category(), ErrorCategory::Index);
}

#[test]
fn valloc_requires_a_variable() {
    let err = eval_err("3 4 valloc", &mut Environment::new());
    assert_eq!(err.category(), ErrorCategory::NotAVariable);
}

#[test]
fn setv_mutates_in_place() {
    let mut env = Environment::new();
    eval_ok("3 v valloc", &mut env);
    assert_eq!(eval_ok("7 1 v setv", &mut env), Value::array(vec![0.0, 7.0, 0.0]));

    let Some(Value::Array(v)) = env.lookup("v") else {
        panic!("v is not an array");
    };
    assert_eq!(v.get(0), Some(0.0));
    assert_eq!(v.get(1), Some(7.0));
    assert_eq!(v.get(2), Some(0.0));
}

#[test]
fn setv_is_visible_through_aliases() {
    let mut env = Environment::new();
    eval_ok("3 v valloc", &mut env);
    eval_ok("v w setq", &mut env);
    eval_ok("9 2 w setv", &mut env);
    assert_eq!(eval_ok("v", &mut env), Value::array(vec![0.0, 0.0, 9.0]));
}

#[test]
fn setv_accepts_whole_real_index() {
    let mut env = Environment::new();
    eval_ok("3 v valloc", &mut env);
    env.bind("i", Value::Number(2.0));
    assert_eq!(eval_ok("1 i v setv", &mut env), Value::array(vec![0.0, 0.0, 1.0]));
}

#[test]
fn setv_out_of_range() {
    let mut env = Environment::new();
    eval_ok("4 y valloc", &mut env);
    let err = eval_err("4.2 6 y setv", &mut env);
    assert_eq!(err.kind, EvalErrorKind::IndexOutOfRange { index: 6, len: 4 });
    assert_eq!(err.category(), ErrorCategory::Index);
}

#[test]
fn setv_negative_index() {
    let mut env = Environment::new();
    eval_ok("4 y valloc", &mut env);
    let err = eval_err("1 1 0 - y setv", &mut env);
    assert_eq!(err.kind, EvalErrorKind::NegativeIndex { index: -1 });
    assert_eq!(err.category(), ErrorCategory::Index);
}

#[test]
fn setv_fractional_index_is_a_type_error() {
    let mut env = Environment::new();
    eval_ok("4 y valloc", &mut env);
    let err = eval_err("1 2.5 y setv", &mut env);
    assert_eq!(err.kind, EvalErrorKind::NotAnInteger { value: 2.5 });
}

#[test]
fn setv_on_a_number_is_not_an_array() {
    let mut env = Environment::new();
    env.bind("x", Value::Number(3.0));
    let err = eval_err("5 2 x setv", &mut env);
    assert_eq!(err.kind, EvalErrorKind::NotAnArray { got: "number" });
    assert_eq!(err.operation, Some("setv"));
}

#[test]
fn setv_stores_only_numbers() {
    let mut env = Environment::new();
    eval_ok("2 v valloc", &mut env);
    let err = eval_err("1 1 = 0 v setv", &mut env);
    assert_eq!(err.category(), ErrorCategory::Type);
    assert_eq!(eval_ok("v", &mut env), Value::array(vec![0.0, 0.0]));
}

#[test]
fn missing_variable_is_reported_by_name() {
    let err = eval_err("y 1 +", &mut Environment::new());
    assert_eq!(
        err.kind,
        EvalErrorKind::MissingVariable {
            name: "y".to_string(),
        }
    );
    assert_eq!(err.category(), ErrorCategory::MissingVariable);
}
