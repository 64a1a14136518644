// Surface-syntax rendering for AST nodes

use std::fmt::{self, Display, Formatter};

use crate::ast::*;

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::TypeConst(name) => f.write_str(name),
            TypeExpr::FuncType { params, returns } => {
                f.write_str("(")?;
                write_list(f, params)?;
                write!(f, ") -> {returns}")
            }
            TypeExpr::MapType { key, value } => write!(f, "map<{key}, {value}>"),
            TypeExpr::TupleType(elems) => {
                f.write_str("(")?;
                write_list(f, elems)?;
                f.write_str(")")
            }
            TypeExpr::SetType(elem) => write!(f, "set<{elem}>"),
        }
    }
}

impl Display for FuncCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, &self.args)?;
        f.write_str(")")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => f.write_str(name),
            Expr::FuncCall(call) => write!(f, "{call}"),
            Expr::Num(n) => write!(f, "{n}"),
            Expr::String(s) => write!(f, "{s:?}"),
            Expr::Set(elems) => {
                f.write_str("{")?;
                write_list(f, elems)?;
                f.write_str("}")
            }
            Expr::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Expr::Tuple(elems) => {
                f.write_str("(")?;
                write_list(f, elems)?;
                f.write_str(")")
            }
        }
    }
}

impl Display for HttpResponseCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Decl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_expr)
    }
}

impl Display for Init {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} := {}", self.var_name, self.expr)
    }
}

impl Display for FuncDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, &self.params)?;
        let (code, returns) = &self.returns;
        write!(f, ") => ({code}")?;
        if !returns.is_empty() {
            f.write_str(", ")?;
            write_list(f, returns)?;
        }
        f.write_str(")")
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.expr {
            Some(expr) => write!(f, "({}, {expr})", self.code),
            None => write!(f, "({})", self.code),
        }
    }
}

impl Display for ApiCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ==> {}", self.call, self.response)
    }
}

impl Display for Api {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "API(")?;
        if let Some(pre) = &self.pre {
            writeln!(f, "  PRECONDITION: {pre}")?;
        }
        writeln!(f, "  CALL: {}", self.call)?;
        writeln!(f, "  POSTCONDITION: {}", self.response)?;
        f.write_str(")")
    }
}

impl Display for Spec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Globals:")?;
        for decl in &self.globals {
            writeln!(f, "  {decl}")?;
        }
        writeln!(f, "Init:")?;
        for init in &self.init {
            writeln!(f, "  {init}")?;
        }
        writeln!(f, "Functions:")?;
        for func in &self.functions {
            writeln!(f, "  {func}")?;
        }
        writeln!(f, "Blocks:")?;
        for block in &self.blocks {
            writeln!(f, "{block}")?;
        }
        Ok(())
    }
}
