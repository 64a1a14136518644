// Abstract Syntax Tree (AST) definitions for the API spec language.
// A spec is produced wholesale by the parser and is read-only for every later pass.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Surface type annotations attached to globals and function signatures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeExpr {
    TypeConst(String),
    FuncType {
        params: Vec<TypeExpr>,
        returns: Box<TypeExpr>,
    },
    MapType {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    TupleType(Vec<TypeExpr>),
    SetType(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn constant(name: impl Into<String>) -> Self {
        TypeExpr::TypeConst(name.into())
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::MapType {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, TypeExpr::MapType { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuncCall {
    pub name: String,
    pub args: Vec<Expr>,
}

impl FuncCall {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Var(String),
    FuncCall(FuncCall),
    Num(i64),
    String(String),
    Set(Vec<Expr>),
    Map(Vec<(Expr, Expr)>),
    Tuple(Vec<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::FuncCall(FuncCall::new(name, args))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::String(value.into())
    }

    /// Short label for the expression form, used in diagnostics detail and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Var(_) => "variable",
            Expr::FuncCall(_) => "function call",
            Expr::Num(_) => "number",
            Expr::String(_) => "string",
            Expr::Set(_) => "set",
            Expr::Map(_) => "map",
            Expr::Tuple(_) => "tuple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HttpResponseCode {
    #[cfg_attr(feature = "serde", serde(rename = "OK_200"))]
    Ok200,
    #[cfg_attr(feature = "serde", serde(rename = "CREATED_201"))]
    Created201,
    #[cfg_attr(feature = "serde", serde(rename = "BAD_REQUEST_400"))]
    BadRequest400,
    #[cfg_attr(feature = "serde", serde(rename = "UNAUTHORIZED_401"))]
    Unauthorized401,
    #[cfg_attr(feature = "serde", serde(rename = "FORBIDDEN_403"))]
    Forbidden403,
    #[cfg_attr(feature = "serde", serde(rename = "NOT_FOUND_404"))]
    NotFound404,
    #[cfg_attr(feature = "serde", serde(rename = "CONFLICT_409"))]
    Conflict409,
    #[cfg_attr(feature = "serde", serde(rename = "INTERNAL_SERVER_ERROR_500"))]
    InternalServerError500,
}

impl HttpResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpResponseCode::Ok200 => "OK_200",
            HttpResponseCode::Created201 => "CREATED_201",
            HttpResponseCode::BadRequest400 => "BAD_REQUEST_400",
            HttpResponseCode::Unauthorized401 => "UNAUTHORIZED_401",
            HttpResponseCode::Forbidden403 => "FORBIDDEN_403",
            HttpResponseCode::NotFound404 => "NOT_FOUND_404",
            HttpResponseCode::Conflict409 => "CONFLICT_409",
            HttpResponseCode::InternalServerError500 => "INTERNAL_SERVER_ERROR_500",
        }
    }
}

/// A declared global, e.g. `U: map<string, string>`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decl {
    pub name: String,
    pub type_expr: TypeExpr,
}

impl Decl {
    pub fn new(name: impl Into<String>, type_expr: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_expr,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Init {
    pub var_name: String,
    pub expr: Expr,
}

impl Init {
    pub fn new(var_name: impl Into<String>, expr: Expr) -> Self {
        Self {
            var_name: var_name.into(),
            expr,
        }
    }
}

/// A function signature: parameter annotations plus the declared response code and return annotations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<TypeExpr>,
    pub returns: (HttpResponseCode, Vec<TypeExpr>),
}

impl FuncDecl {
    pub fn new(
        name: impl Into<String>,
        params: Vec<TypeExpr>,
        returns: (HttpResponseCode, Vec<TypeExpr>),
    ) -> Self {
        Self {
            name: name.into(),
            params,
            returns,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Response {
    pub code: HttpResponseCode,
    pub expr: Option<Expr>,
}

impl Response {
    pub fn new(code: HttpResponseCode, expr: Option<Expr>) -> Self {
        Self { code, expr }
    }
}

/// The call of an API block together with the response it declares.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApiCall {
    pub call: FuncCall,
    pub response: Response,
}

impl ApiCall {
    pub fn new(call: FuncCall, response: Response) -> Self {
        Self { call, response }
    }
}

/// One endpoint usage unit: precondition, call, and postcondition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Api {
    pub pre: Option<Expr>,
    pub call: ApiCall,
    pub response: Response,
}

impl Api {
    pub fn new(pre: Option<Expr>, call: ApiCall, response: Response) -> Self {
        Self {
            pre,
            call,
            response,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spec {
    pub globals: Vec<Decl>,
    pub init: Vec<Init>,
    pub functions: Vec<FuncDecl>,
    pub blocks: Vec<Api>,
}

impl Spec {
    pub fn new(
        globals: Vec<Decl>,
        init: Vec<Init>,
        functions: Vec<FuncDecl>,
        blocks: Vec<Api>,
    ) -> Self {
        Self {
            globals,
            init,
            functions,
            blocks,
        }
    }
}
