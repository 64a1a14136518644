use apispec_ast::ast::*;
use apispec_env::{AnnotatedPolicy, STANDARD_VARIABLES};
use apispec_type::ApiType;
use apispec_typeck::{TypeChecker, TypeError};
use pretty_assertions::assert_eq;
use tests::{account_service_spec, equals, signup_block, signup_spec};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn scenario_valid_signup_is_accepted() {
    init_logger();
    let spec = signup_spec(vec![Expr::var("uid"), Expr::var("p")]);
    let mut checker = TypeChecker::new();
    assert!(checker.check_spec(&spec));
    assert!(checker.errors().is_empty());
}

#[test]
fn scenario_signup_with_missing_argument_is_rejected() {
    init_logger();
    let spec = signup_spec(vec![Expr::var("uid")]);
    let mut checker = TypeChecker::new();
    assert!(!checker.check_spec(&spec));
    assert_eq!(
        checker.error_messages(),
        vec!["Arity mismatch for function: signup"]
    );
    assert_eq!(
        checker.errors()[0],
        TypeError::ArityMismatch {
            function: "signup".into(),
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn repeated_runs_are_identical() {
    init_logger();
    let mut spec = signup_spec(vec![Expr::var("uid")]);
    spec.blocks.push(signup_block(Some(Expr::var("ghost")), vec![]));

    let mut checker = TypeChecker::new();
    let first = checker.check_spec(&spec);
    let first_errors = checker.error_messages();
    let second = checker.check_spec(&spec);
    let second_errors = checker.error_messages();

    assert_eq!(first, second);
    assert_eq!(first_errors, second_errors);
    assert!(!first);
}

#[test]
fn undefined_variables_are_not_deduplicated() {
    let mut spec = signup_spec(vec![Expr::var("uid"), Expr::var("p")]);
    spec.blocks.push(signup_block(
        Some(equals(Expr::var("x"), Expr::var("x"))),
        vec![Expr::var("uid"), Expr::var("p")],
    ));
    spec.blocks.push(signup_block(
        Some(Expr::var("x")),
        vec![Expr::var("uid"), Expr::var("p")],
    ));

    let mut checker = TypeChecker::new();
    assert!(!checker.check_spec(&spec));
    let undefined: Vec<_> = checker
        .error_messages()
        .into_iter()
        .filter(|m| m == "Undefined variable: x")
        .collect();
    assert_eq!(undefined.len(), 3);
}

#[test]
fn failing_block_does_not_stop_later_blocks() {
    let mut spec = signup_spec(vec![Expr::var("uid"), Expr::var("p")]);
    spec.blocks.insert(0, signup_block(None, vec![Expr::var("uid")]));
    spec.blocks.push(signup_block(
        Some(Expr::Tuple(vec![])),
        vec![Expr::var("uid"), Expr::var("p")],
    ));

    let mut checker = TypeChecker::new();
    assert!(!checker.check_spec(&spec));
    assert_eq!(
        checker.error_messages(),
        vec![
            "Arity mismatch for function: signup",
            "Unknown expression type",
        ]
    );
}

#[test]
fn map_access_on_wrong_operands_reports_both() {
    let mut spec = signup_spec(vec![Expr::var("uid"), Expr::var("p")]);
    spec.blocks[0].pre = Some(equals(
        Expr::call("map_access", vec![Expr::var("uid"), Expr::var("U")]),
        Expr::var("NIL"),
    ));

    let mut checker = TypeChecker::new();
    assert!(!checker.check_spec(&spec));
    assert_eq!(
        checker.error_messages(),
        vec![
            "First argument to map_access must be a map",
            "Second argument to map_access must be a string",
        ]
    );
}

#[test]
fn equality_between_map_and_string_is_reported_once() {
    let mut spec = signup_spec(vec![Expr::var("uid"), Expr::var("p")]);
    spec.blocks[0].response.expr = Some(equals(Expr::var("U_prime"), Expr::var("p")));

    let mut checker = TypeChecker::new();
    assert!(!checker.check_spec(&spec));
    assert_eq!(
        checker.error_messages(),
        vec!["Type mismatch in equality comparison"]
    );
}

#[test]
fn initializer_shadowing_changes_downstream_types() {
    let mut spec = signup_spec(vec![Expr::var("uid"), Expr::var("p")]);
    spec.init.push(Init::new("NIL", Expr::Num(0)));

    let mut checker = TypeChecker::new();
    assert!(!checker.check_spec(&spec));
    assert_eq!(
        checker.error_messages(),
        vec!["Type mismatch in equality comparison"]
    );
    assert_eq!(checker.variables().get("NIL"), Some(ApiType::Int));
}

#[test]
fn initializer_cannot_call_user_functions() {
    let mut spec = signup_spec(vec![Expr::var("uid"), Expr::var("p")]);
    spec.init.push(Init::new(
        "token",
        Expr::call("signup", vec![Expr::var("uid"), Expr::var("p")]),
    ));

    let mut checker = TypeChecker::new();
    assert!(!checker.check_spec(&spec));
    assert_eq!(checker.error_messages(), vec!["Undefined function: signup"]);
}

#[test]
fn globals_are_visible_after_a_run() {
    let spec = signup_spec(vec![Expr::var("uid"), Expr::var("p")]);
    let mut checker = TypeChecker::new();
    checker.check_spec(&spec);

    let globals = checker.globals().expect("globals scope exists after a run");
    assert_eq!(globals.get("U"), Some(ApiType::Map));
    assert_eq!(globals.len(), 1);
    assert_eq!(checker.variables().get("U_prime"), Some(ApiType::Map));
    assert_eq!(checker.functions().len(), 1);
}

#[test]
fn standard_variables_are_bound_without_initializers() {
    let mut checker = TypeChecker::new();
    assert!(checker.check_spec(&Spec::default()));
    for (name, ty) in STANDARD_VARIABLES {
        assert_eq!(checker.variables().get(name), Some(ty), "{name}");
    }
}

#[test]
fn annotated_policy_types_missing_return_as_void() {
    init_logger();
    let mut checker = TypeChecker::with_policy(AnnotatedPolicy);
    assert!(checker.check_spec(&account_service_spec()));
    assert_eq!(
        checker.functions().get("delete_user").map(|sig| sig.ret),
        Some(ApiType::Void)
    );
    assert_eq!(
        checker.functions().get("login").map(|sig| sig.params.clone()),
        Some(vec![ApiType::String, ApiType::String])
    );
}
