// Typing policies: how declarations are turned into types before checking starts.

use apispec_ast::ast::{FuncDecl, TypeExpr};
use apispec_type::ApiType;

/// Variables every spec may use without initializing them.
pub const STANDARD_VARIABLES: [(&str, ApiType); 5] = [
    ("uid", ApiType::String),
    ("p", ApiType::String),
    ("NIL", ApiType::String),
    ("U_prime", ApiType::Map),
    ("OK", ApiType::String),
];

/// Decides the types of standard variables, declared globals and function signatures.
///
/// The environment builder consults the policy for every declaration, so swapping
/// the policy changes how annotations are read without touching the traversal.
pub trait TypingPolicy {
    /// Variables seeded before any initializer runs.
    fn standard_variables(&self) -> &[(&'static str, ApiType)] {
        &STANDARD_VARIABLES
    }

    fn global_type(&self, type_expr: &TypeExpr) -> ApiType;

    fn param_type(&self, param: &TypeExpr) -> ApiType;

    fn return_type(&self, func: &FuncDecl) -> ApiType;
}

/// String/Map-only typing.
///
/// Globals are `Map` when declared with the map form and `String` otherwise.
/// Every function parameter and return value is `String`, whatever its annotation says.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedPolicy;

impl TypingPolicy for SimplifiedPolicy {
    fn global_type(&self, type_expr: &TypeExpr) -> ApiType {
        if type_expr.is_map() {
            ApiType::Map
        } else {
            ApiType::String
        }
    }

    fn param_type(&self, _param: &TypeExpr) -> ApiType {
        ApiType::String
    }

    fn return_type(&self, _func: &FuncDecl) -> ApiType {
        ApiType::String
    }
}

/// Reads declared annotations.
///
/// `int`, `string`, `bool` and `void` constants map to their tags and the map form
/// maps to `Map`. Anything else (tuples, sets, function types, unknown names) is `Unknown`.
/// A function with no return annotation returns `Void`; one with several is `Unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotatedPolicy;

impl AnnotatedPolicy {
    fn annotation_type(type_expr: &TypeExpr) -> ApiType {
        match type_expr {
            TypeExpr::TypeConst(name) => match name.to_ascii_lowercase().as_str() {
                "int" => ApiType::Int,
                "string" => ApiType::String,
                "bool" => ApiType::Bool,
                "void" => ApiType::Void,
                _ => ApiType::Unknown,
            },
            TypeExpr::MapType { .. } => ApiType::Map,
            TypeExpr::FuncType { .. } | TypeExpr::TupleType(_) | TypeExpr::SetType(_) => {
                ApiType::Unknown
            }
        }
    }
}

impl TypingPolicy for AnnotatedPolicy {
    fn global_type(&self, type_expr: &TypeExpr) -> ApiType {
        Self::annotation_type(type_expr)
    }

    fn param_type(&self, param: &TypeExpr) -> ApiType {
        Self::annotation_type(param)
    }

    fn return_type(&self, func: &FuncDecl) -> ApiType {
        match func.returns.1.as_slice() {
            [] => ApiType::Void,
            [single] => Self::annotation_type(single),
            _ => ApiType::Unknown,
        }
    }
}
