//! Abstract Syntax Tree (AST) for the API specification language.
//!
//! This crate defines the nodes a parsed spec is made of (globals,
//! initializers, function signatures and API blocks), a surface-syntax
//! printer, and JSON helpers used to hand a spec between tools.

pub mod ast;
pub mod printer;

pub use ast::Spec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// A result type for AST operations.
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use apispec_ast::ast::*;
/// use apispec_ast::to_json;
///
/// let expr = Expr::call("equals", vec![Expr::var("uid"), Expr::var("NIL")]);
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains("\"FuncCall\""));
/// assert!(json.contains("\"equals\""));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
///
/// # Examples
///
/// ```
/// use apispec_ast::ast::*;
/// use apispec_ast::from_json;
///
/// let json = r#"{"Var":"uid"}"#;
/// let expr: Expr = from_json(json).unwrap();
/// assert_eq!(expr, Expr::var("uid"));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// A utility for pretty-printing AST nodes.
#[derive(Default)]
pub struct AstPrinter {
    indent: usize,
}

impl AstPrinter {
    /// Creates a new `AstPrinter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a printer that prefixes every rendered line with `indent` spaces.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Prints an AST node to a string.
    pub fn print<T: fmt::Display>(&self, node: &T) -> String {
        let rendered = format!("{node}");
        if self.indent == 0 {
            return rendered;
        }
        let pad = " ".repeat(self.indent);
        rendered
            .lines()
            .map(|line| format!("{pad}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
