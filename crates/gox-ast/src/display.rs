//! Single-line Go rendering of expressions.
//!
//! Used for logging and test assertions. Layout decisions (line breaks,
//! trailing commas, gofmt spacing) belong to the file printer, not here.

use crate::expr::*;
use std::fmt;
use std::sync::Arc;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(ident) => f.write_str(&ident.name),
            Expr::BasicLit(lit) => f.write_str(&lit.value),
            Expr::Raw(raw) => f.write_str(&raw.text),
            Expr::Selector(sel) => write!(f, "{}.{}", sel.x, sel.sel.name),
            Expr::Call(call) => {
                write!(f, "{}(", call.fun)?;
                write_list(f, &call.args)?;
                f.write_str(")")
            }
            Expr::CompositeLit(lit) => {
                write!(f, "{}{{", lit.ty)?;
                write_list(f, &lit.elts)?;
                f.write_str("}")
            }
            Expr::KeyValue(kv) => write!(f, "{}: {}", kv.key, kv.value),
            Expr::Unary(unary) => write!(f, "{}{}", unary.op.as_str(), unary.x),
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Arc<Expr>]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
