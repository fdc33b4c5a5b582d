//! Positional argument checks

use insta::assert_snapshot;
use nucleus_meditation::factory::{any, either, float, integer, maybe, string};
use nucleus_meditation::{Arguments, ArityMismatch, CheckError, Location};
use nucleus_types::{Kind, Value};
use pretty_assertions::assert_eq;

use crate::common::init_tracing;

#[test]
fn second_argument_mismatch() {
    init_tracing();
    let args = Arguments::contain([string(), integer()]);
    let result = args
        .check(&[Value::from("a"), Value::from("b")])
        .unwrap();

    assert!(result.failed());
    assert_eq!(result.violations().len(), 1);
    let violation = &result.violations()[0];
    assert_eq!(violation.location(), &Location::Position(2));
    assert_eq!(violation.expected(), Some("integer"));
    assert_eq!(violation.actual(), Some(Kind::String));
}

#[test]
fn matching_arguments_pass() {
    let args = Arguments::contain([string(), maybe(integer()), any()]);
    let result = args
        .check(&[Value::from("a"), Value::Null, Value::list([1])])
        .unwrap();
    assert!(result.passed());
    assert!(result.violations().is_empty());
}

#[test]
fn all_positions_are_reported() {
    init_tracing();
    let args = Arguments::contain([string(), integer(), either(integer(), float())]);
    let result = args
        .check(&[Value::from(1), Value::from(2), Value::from("3")])
        .unwrap();

    let rendered: Vec<String> = result.violations().iter().map(ToString::to_string).collect();
    assert_snapshot!(rendered.join("\n"), @r"
    argument 1: expected string, got integer
    argument 3: expected integer|float, got string
    ");
}

#[test]
fn arity_mismatch_is_not_a_violation() {
    let args = Arguments::contain([string(), integer()]);
    let err = args.check(&[Value::from("a")]).unwrap_err();
    assert_eq!(
        err,
        ArityMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn enforce_separates_error_categories() {
    let args = Arguments::contain([string()]);

    let arity = args.enforce(&[]).unwrap_err();
    assert!(arity.is_configuration_error());
    assert!(matches!(arity, CheckError::Arity(_)));

    let invalid = args.enforce(&[Value::from(1)]).unwrap_err();
    assert!(!invalid.is_configuration_error());
    assert_snapshot!(invalid, @"validation failed: argument 1: expected string, got integer");

    assert!(args.enforce(&[Value::from("ok")]).is_ok());
}

#[test]
fn empty_arguments_accept_no_values() {
    let args = Arguments::contain(Vec::new());
    assert!(args.is_empty());
    assert!(args.check(&[]).unwrap().passed());
    assert!(args.check(&[Value::Null]).is_err());
}

#[test]
fn violations_serialize_for_logging() {
    let args = Arguments::contain([string(), integer()]);
    let result = args
        .check(&[Value::from("a"), Value::from("b")])
        .unwrap();
    let json = serde_json::to_string(&result.violations()[0]).unwrap();
    assert_snapshot!(json, @r#"{"location":{"type":"position","at":2},"reason":"mismatch","expected":"integer","actual":"string"}"#);
}
