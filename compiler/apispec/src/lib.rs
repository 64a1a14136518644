use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use apispec_ast::ast::Spec;
use apispec_env::{AnnotatedPolicy, SimplifiedPolicy, TypingPolicy};
use apispec_typeck::TypeChecker;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to read from stdin: {0}")]
    Stdin(io::Error),
    #[error("invalid spec JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of checking one spec, in the shape emitted by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub success: bool,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentSummary>,
}

/// Bindings left behind by a run, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentSummary {
    pub variables: Vec<SymbolEntry>,
    pub functions: Vec<FunctionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionEntry {
    pub name: String,
    pub params: Vec<String>,
    pub returns: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Read parameter and return annotations instead of collapsing them to strings.
    pub annotated_types: bool,
    /// Attach the final variable and function environments to the report.
    pub include_environment: bool,
}

/// Reads the spec text from `input`, or from stdin when no path is given.
pub fn read_spec_source(input: Option<&Path>) -> Result<String, LoadError> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(LoadError::Stdin)?;
            Ok(buf)
        }
    }
}

/// Parses a spec serialized in the AST crate's JSON form.
pub fn parse_spec(json: &str) -> Result<Spec, LoadError> {
    Ok(serde_json::from_str(json)?)
}

pub fn check_with_policy<P: TypingPolicy>(
    spec: &Spec,
    policy: P,
    include_environment: bool,
) -> CheckReport {
    let mut checker = TypeChecker::with_policy(policy);
    let success = checker.check_spec(spec);
    CheckReport {
        success,
        errors: checker.error_messages(),
        environment: include_environment.then(|| summarize_environment(&checker)),
    }
}

/// Checks `spec` with the policy selected by `options`.
pub fn analyze_spec(spec: &Spec, options: &CheckOptions) -> CheckReport {
    if options.annotated_types {
        check_with_policy(spec, AnnotatedPolicy, options.include_environment)
    } else {
        check_with_policy(spec, SimplifiedPolicy, options.include_environment)
    }
}

/// Visible variables (globals included, shadowed ones once) and declared functions of the last run.
pub fn summarize_environment<P: TypingPolicy>(checker: &TypeChecker<P>) -> EnvironmentSummary {
    let variables = checker
        .variables()
        .collect_symbol_types()
        .into_iter()
        .map(|(name, ty)| SymbolEntry {
            name,
            ty: ty.to_string(),
        })
        .collect();
    let functions = checker
        .functions()
        .collect_signatures()
        .into_iter()
        .map(|(name, sig)| FunctionEntry {
            name: name.to_string(),
            params: sig.params.iter().map(ToString::to_string).collect(),
            returns: sig.ret.to_string(),
        })
        .collect();
    EnvironmentSummary {
        variables,
        functions,
    }
}
