use std::path::PathBuf;

use apispec::{
    analyze_spec, parse_spec, read_spec_source, CheckOptions, CheckReport, FunctionEntry,
};
use apispec_ast::ast::*;
use apispec_typeck::{type_check_spec, TypeChecker, TypeError};
use pretty_assertions::assert_eq;
use tests::{account_service_spec, equals, map_access, signup_spec};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

#[test]
fn fixture_json_matches_the_built_spec() {
    init_logger();
    let text = read_spec_source(Some(fixture("signup.json").as_path())).unwrap();
    let spec = parse_spec(&text).unwrap();
    assert_eq!(spec, signup_spec(vec![Expr::var("uid"), Expr::var("p")]));
}

#[test]
fn fixture_json_type_checks() {
    init_logger();
    let text = read_spec_source(Some(fixture("signup.json").as_path())).unwrap();
    let spec = parse_spec(&text).unwrap();
    assert_eq!(
        analyze_spec(&spec, &CheckOptions::default()),
        CheckReport {
            success: true,
            errors: vec![],
            environment: None,
        }
    );
}

#[test]
fn environment_report_lists_every_endpoint() {
    init_logger();
    let options = CheckOptions {
        include_environment: true,
        ..CheckOptions::default()
    };
    let report = analyze_spec(&account_service_spec(), &options);
    assert!(report.success);

    let env = report.environment.expect("environment requested");
    let names: Vec<&str> = env.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["delete_user", "login", "signup"]);
    assert_eq!(
        env.functions[0],
        FunctionEntry {
            name: "delete_user".to_string(),
            params: vec!["string".to_string()],
            returns: "string".to_string(),
        }
    );
    assert!(env
        .variables
        .iter()
        .any(|v| v.name == "U" && v.ty == "map"));
}

#[test]
fn multi_endpoint_service_is_accepted() {
    init_logger();
    assert_eq!(type_check_spec(&account_service_spec()), Ok(()));
}

#[test]
fn dropping_an_argument_is_rejected_with_arity_error() {
    init_logger();
    let spec = signup_spec(vec![Expr::var("uid")]);
    let errors = type_check_spec(&spec).unwrap_err();
    assert_eq!(
        errors,
        vec![TypeError::ArityMismatch {
            function: "signup".into(),
            expected: 2,
            found: 1,
        }]
    );
}

#[test]
fn every_block_contributes_diagnostics_in_order() {
    init_logger();
    let mut spec = account_service_spec();
    // login with a map where a string is expected
    spec.blocks[1].call.call.args[1] = Expr::var("U");
    // delete_user on an undeclared endpoint name
    spec.blocks[2].call.call.name = "remove_user".into();
    // postcondition comparing a map lookup with a number
    spec.blocks[2].response.expr = Some(equals(map_access("U_prime", "uid"), Expr::Num(0)));

    let mut checker = TypeChecker::new();
    assert!(!checker.check_spec(&spec));
    assert_eq!(
        checker.error_messages(),
        vec![
            "Type mismatch in argument 2 for function login",
            "Undefined function: remove_user",
            "Call result type unknown in postcondition",
            "Type mismatch in equality comparison",
        ]
    );
}

#[test]
fn checker_instance_is_reusable_across_specs() {
    init_logger();
    let good = account_service_spec();
    let bad = signup_spec(vec![]);

    let mut checker = TypeChecker::new();
    assert!(checker.check_spec(&good));
    assert!(!checker.check_spec(&bad));
    assert_eq!(
        checker.error_messages(),
        vec!["Arity mismatch for function: signup"]
    );
    assert!(checker.check_spec(&good));
    assert!(checker.errors().is_empty());
}

#[test]
fn the_spec_is_not_modified_by_checking() {
    let spec = account_service_spec();
    let before = spec.clone();
    let mut checker = TypeChecker::new();
    checker.check_spec(&spec);
    assert_eq!(spec, before);
}
