//! The Go expression grammar produced by lowering.
//!
//! Only the node kinds the lowering pass emits are modelled structurally.
//! Expressions the template parser hands over untouched (attribute values,
//! embedded `{...}` blocks) may also arrive as [`Expr::Raw`] text; the
//! lowering pass never looks inside them.
//!
//! Sub-expressions are linked through [`Arc`] so that a value written in the
//! template can be placed into the output tree without copying it.

use crate::span::Span;
use smol_str::SmolStr;
use std::sync::Arc;

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// An identifier (`x`, `true`, `MyComponent`).
    Ident(Ident),
    /// A string literal (`"text"`).
    BasicLit(BasicLit),
    /// A selector (`vecty.Text`).
    Selector(SelectorExpr),
    /// A call (`elem.Div(a, b)`).
    Call(CallExpr),
    /// A composite literal (`T{K: v}`).
    CompositeLit(CompositeLit),
    /// A `key: value` element of a composite literal.
    KeyValue(KeyValueExpr),
    /// A unary expression (`&x`).
    Unary(UnaryExpr),
    /// Host source text carried through unchanged.
    Raw(RawExpr),
}

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    /// The identifier text.
    pub name: SmolStr,
    /// Source span.
    pub span: Span,
}

impl Ident {
    /// Create an identifier without a source position.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            span: Span::DUMMY,
        }
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// A string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasicLit {
    /// Literal source text, quotes included.
    pub value: SmolStr,
    /// Source span.
    pub span: Span,
}

/// `x.sel`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorExpr {
    pub x: Arc<Expr>,
    pub sel: Ident,
}

/// `fun(args...)`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallExpr {
    pub fun: Arc<Expr>,
    pub args: Vec<Arc<Expr>>,
}

/// `Type{elts...}`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositeLit {
    pub ty: Arc<Expr>,
    pub elts: Vec<Arc<Expr>>,
}

/// `key: value`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyValueExpr {
    pub key: Arc<Expr>,
    pub value: Arc<Expr>,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `&x`
    And,
}

impl UnaryOp {
    /// The operator token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "&",
        }
    }
}

/// `op x`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub x: Arc<Expr>,
}

/// Unparsed host source text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawExpr {
    /// The expression text.
    pub text: String,
    /// Source span.
    pub span: Span,
}

impl Expr {
    /// An identifier expression.
    pub fn ident(name: impl Into<SmolStr>) -> Self {
        Expr::Ident(Ident::new(name))
    }

    /// A string literal holding `value`, quoted Go-style.
    pub fn string(value: &str) -> Self {
        Expr::BasicLit(BasicLit {
            value: quote(value).into(),
            span: Span::DUMMY,
        })
    }

    /// The boolean `true`, a predeclared identifier in Go.
    pub fn true_lit() -> Self {
        Expr::ident("true")
    }

    /// `pkg.name`
    pub fn selector(pkg: &str, name: &str) -> Self {
        Expr::Selector(SelectorExpr {
            x: Arc::new(Expr::ident(pkg)),
            sel: Ident::new(name),
        })
    }

    /// `fun(args...)`
    pub fn call(fun: Expr, args: Vec<Arc<Expr>>) -> Self {
        Expr::Call(CallExpr {
            fun: Arc::new(fun),
            args,
        })
    }

    /// `ty{elts...}`
    pub fn composite(ty: Expr, elts: Vec<Arc<Expr>>) -> Self {
        Expr::CompositeLit(CompositeLit {
            ty: Arc::new(ty),
            elts,
        })
    }

    /// `key: value` with an identifier key.
    pub fn key_value(key: impl Into<SmolStr>, value: Arc<Expr>) -> Self {
        Expr::KeyValue(KeyValueExpr {
            key: Arc::new(Expr::ident(key)),
            value,
        })
    }

    /// `&x`
    pub fn address_of(x: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            op: UnaryOp::And,
            x: Arc::new(x),
        })
    }

    /// Host source text.
    pub fn raw(text: impl Into<String>) -> Self {
        Expr::Raw(RawExpr {
            text: text.into(),
            span: Span::DUMMY,
        })
    }

    /// Whether this is the boolean `true`.
    pub fn is_true_lit(&self) -> bool {
        match self {
            Expr::Ident(ident) => ident.name == "true",
            Expr::Raw(raw) => raw.text.trim() == "true",
            _ => false,
        }
    }

    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_unary(&self) -> Option<&UnaryExpr> {
        match self {
            Expr::Unary(unary) => Some(unary),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeLit> {
        match self {
            Expr::CompositeLit(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn as_key_value(&self) -> Option<&KeyValueExpr> {
        match self {
            Expr::KeyValue(kv) => Some(kv),
            _ => None,
        }
    }
}

impl CallExpr {
    /// The `pkg.Name` callee, if the call has one.
    pub fn callee_path(&self) -> Option<(&str, &str)> {
        match &*self.fun {
            Expr::Selector(sel) => match &*sel.x {
                Expr::Ident(pkg) => Some((pkg.as_str(), sel.sel.as_str())),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Quote `s` as a Go interpreted string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() && (c as u32) < 0x80 => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
