// SPDX-License-Identifier: Apache-2.0

use crate::scalar::*;
use crate::{Bindings, Context, ResolvableExpression};
use vtl_type::{Value, ValueType};

#[derive(Debug)]
struct NoBindings;
impl Bindings for NoBindings {
    fn lookup(&self, _name: &str) -> Option<Value> {
        None
    }
}

fn str_const(s: &str) -> Box<dyn ResolvableExpression> {
    Box::new(Constant::new(Value::String(s.to_string())).unwrap())
}

fn int_const(n: i64) -> Box<dyn ResolvableExpression> {
    Box::new(Constant::new(Value::Integer(n)).unwrap())
}

fn resolve(expr: &dyn ResolvableExpression) -> Value {
    let bindings = NoBindings;
    expr.resolve(&Context::empty(&bindings)).unwrap()
}

#[test]
fn scenario_1_trim_and_case_functions() {
    assert_eq!(resolve(&*Trim::new(str_const("  abc  ")).unwrap()), Value::String("abc".into()));
    assert_eq!(
        resolve(&*Ltrim::new(str_const("  abc  ")).unwrap()),
        Value::String("abc  ".into())
    );
    assert_eq!(
        resolve(&*Rtrim::new(str_const("  abc  ")).unwrap()),
        Value::String("  abc".into())
    );
    assert_eq!(resolve(&*Upper::new(str_const("Abc")).unwrap()), Value::String("ABC".into()));
    assert_eq!(resolve(&*Lower::new(str_const("Abc")).unwrap()), Value::String("abc".into()));
    assert_eq!(resolve(&*Length::new(str_const("abc")).unwrap()), Value::Integer(3));
}

#[test]
fn scenario_2_substr_variants() {
    let s = || Substr::new(vec![str_const("abcde")]).unwrap();
    assert_eq!(resolve(&s()), Value::String("abcde".into()));

    let s = Substr::new(vec![str_const("abcde"), int_const(1)]).unwrap();
    assert_eq!(resolve(&s), Value::String("bcde".into()));

    let s = Substr::new(vec![str_const("abcde"), int_const(1), int_const(3)]).unwrap();
    assert_eq!(resolve(&s), Value::String("bc".into()));
}

#[test]
fn scenario_3_substr_too_many_args() {
    let err =
        Substr::new(vec![str_const("abc"), int_const(1), int_const(2), int_const(3)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported operation at <unknown>: too many args (3) for: substr(\"abc\",1,2,3)"
    );
}

#[test]
fn substr_clamps_out_of_range_bounds() {
    let s = Substr::new(vec![str_const("abcde"), int_const(-10), int_const(1000)]).unwrap();
    assert_eq!(resolve(&s), Value::String("abcde".into()));

    let s = Substr::new(vec![str_const("abcde"), int_const(100)]).unwrap();
    assert_eq!(resolve(&s), Value::String("".into()));
}

#[test]
fn length_counts_code_points_not_bytes() {
    // "café" has 4 code points but 5 UTF-8 bytes.
    assert_eq!(resolve(&*Length::new(str_const("café")).unwrap()), Value::Integer(4));
}

#[test]
fn arithmetic_widens_integer_and_number() {
    let add = Add::new(int_const(1), Box::new(Constant::new(Value::Number(2.5)).unwrap())).unwrap();
    assert_eq!(add.result_type(), ValueType::Number);
    assert_eq!(resolve(&add), Value::Number(3.5));
}

#[test]
fn division_always_yields_number_and_zero_divisor_yields_null() {
    let div = Div::new(int_const(10), int_const(2)).unwrap();
    assert_eq!(div.result_type(), ValueType::Number);
    assert_eq!(resolve(&div), Value::Number(5.0));

    let div_zero = Div::new(int_const(10), int_const(0)).unwrap();
    assert_eq!(resolve(&div_zero), Value::Null);
}

#[test]
fn integer_overflow_yields_null() {
    let add = Add::new(int_const(i64::MAX), int_const(1)).unwrap();
    assert_eq!(resolve(&add), Value::Null);
}

#[test]
fn null_operand_propagates_through_arithmetic() {
    let null_int = Box::new(Constant::null(ValueType::Integer));
    let add = Add::new(null_int, int_const(1)).unwrap();
    assert_eq!(resolve(&add), Value::Null);
}

#[test]
fn comparison_is_lexicographic_on_strings() {
    let cmp = Comparison::new(str_const("abc"), str_const("abd"), CompareOp::Lt).unwrap();
    assert_eq!(resolve(&cmp), Value::Boolean(true));
}

#[test]
fn comparison_propagates_null() {
    let cmp = Comparison::new(
        int_const(1),
        Box::new(Constant::null(ValueType::Integer)),
        CompareOp::Eq,
    )
    .unwrap();
    assert_eq!(resolve(&cmp), Value::Null);
}

#[test]
fn kleene_and_both_sides_always_evaluate() {
    let t = || Box::new(Constant::new(Value::Boolean(true)).unwrap());
    let n = || Box::new(Constant::null(ValueType::Boolean));
    assert_eq!(resolve(&*And::new(t(), n()).unwrap()), Value::Null);
    let f = || Box::new(Constant::new(Value::Boolean(false)).unwrap());
    assert_eq!(resolve(&*And::new(f(), n()).unwrap()), Value::Boolean(false));
    assert_eq!(resolve(&*Or::new(t(), n()).unwrap()), Value::Boolean(true));
    assert_eq!(resolve(&*Not::new(n()).unwrap()), Value::Null);
}

#[test]
fn conditional_with_null_condition_is_null() {
    let cond = If::new(Box::new(Constant::null(ValueType::Boolean)), int_const(1), int_const(2))
        .unwrap();
    assert_eq!(resolve(&cond), Value::Null);
}

#[test]
fn conditional_requires_matching_or_widening_branch_types() {
    let cond = If::new(
        Box::new(Constant::new(Value::Boolean(true)).unwrap()),
        int_const(1),
        Box::new(Constant::new(Value::Number(2.0)).unwrap()),
    )
    .unwrap();
    assert_eq!(cond.result_type(), ValueType::Number);
}

#[test]
fn conditional_widens_chosen_branch_to_result_type() {
    let cond = If::new(
        Box::new(Constant::new(Value::Boolean(true)).unwrap()),
        int_const(3),
        Box::new(Constant::new(Value::Number(2.0)).unwrap()),
    )
    .unwrap();
    assert_eq!(cond.result_type(), ValueType::Number);
    assert_eq!(resolve(&cond), Value::Number(3.0));
}

#[test]
fn is_null_never_returns_null_itself() {
    assert_eq!(
        resolve(&*IsNull::new(Box::new(Constant::null(ValueType::Integer)))),
        Value::Boolean(true)
    );
    assert_eq!(resolve(&*IsNull::new(int_const(1))), Value::Boolean(false));
}

#[test]
fn numeric_functions_domain_errors_yield_null() {
    let n = |v: f64| Box::new(Constant::new(Value::Number(v)).unwrap());
    assert_eq!(resolve(&*Sqrt::new(n(-1.0)).unwrap()), Value::Null);
    assert_eq!(resolve(&*Ln::new(n(-1.0)).unwrap()), Value::Null);
    assert_eq!(
        resolve(&*Log::new(n(10.0), Box::new(Constant::new(Value::Number(1.0)).unwrap())).unwrap()),
        Value::Null
    );
}

#[test]
fn mod_by_zero_yields_null() {
    let m = Mod::new(int_const(7), int_const(0)).unwrap();
    assert_eq!(resolve(&m), Value::Null);
    let m = Mod::new(int_const(7), int_const(3)).unwrap();
    assert_eq!(resolve(&m), Value::Integer(1));
}

#[test]
fn round_and_trunc_respect_precision() {
    let r = Round::new(
        Box::new(Constant::new(Value::Number(3.14159)).unwrap()),
        int_const(2),
    )
    .unwrap();
    assert_eq!(resolve(&r), Value::Number(3.14));

    let t = Trunc::new(
        Box::new(Constant::new(Value::Number(3.987)).unwrap()),
        int_const(1),
    )
    .unwrap();
    assert_eq!(resolve(&t), Value::Number(3.9));
}
