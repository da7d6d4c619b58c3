//! AST types for gox templates.
//!
//! A template node is what the parser produces for one `<tag ...>...</tag>`
//! occurrence inside Go source. Attribute values and embedded `{...}`
//! blocks are already parsed as Go expressions; nested tags become nested
//! [`TemplateNode`]s.

use crate::expr::{Expr, Ident};
use crate::span::Span;
use smol_str::SmolStr;
use std::sync::Arc;

/// One parsed template tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateNode {
    /// The tag name.
    pub tag: Ident,
    /// Attributes in source order.
    pub attrs: Vec<Attribute>,
    /// Child nodes in source order.
    pub children: Vec<TemplateChild>,
    /// Source span of the whole tag, closing tag included.
    pub span: Span,
}

impl TemplateNode {
    /// Create a node with no attributes or children.
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: Ident::new(tag),
            attrs: Vec::new(),
            children: Vec::new(),
            span: Span::DUMMY,
        }
    }

    /// Append an attribute.
    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: impl Into<TemplateChild>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set the source span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The tag name.
    pub fn tag_name(&self) -> &str {
        self.tag.as_str()
    }
}

/// An attribute `name` or `name=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Attribute name as written.
    pub name: Ident,
    /// The value, absent for the `<input checked>` shorthand.
    pub value: Option<Arc<Expr>>,
    /// Source span.
    pub span: Span,
}

impl Attribute {
    /// An attribute with a value.
    pub fn new(name: impl Into<SmolStr>, value: Expr) -> Self {
        Self {
            name: Ident::new(name),
            value: Some(Arc::new(value)),
            span: Span::DUMMY,
        }
    }

    /// A shorthand attribute without a value.
    pub fn shorthand(name: impl Into<SmolStr>) -> Self {
        Self {
            name: Ident::new(name),
            value: None,
            span: Span::DUMMY,
        }
    }

    /// An attribute sharing an existing value expression.
    pub fn shared(name: impl Into<SmolStr>, value: Arc<Expr>) -> Self {
        Self {
            name: Ident::new(name),
            value: Some(value),
            span: Span::DUMMY,
        }
    }

    /// Set the source span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The value, with a missing value read as `true` like JSX does.
    pub fn value_or_true(&self) -> Arc<Expr> {
        match &self.value {
            Some(value) => Arc::clone(value),
            None => Arc::new(Expr::true_lit()),
        }
    }

    /// Fill in `true` for a missing value. Calling it again changes nothing.
    pub fn apply_shorthand(&mut self) {
        if self.value.is_none() {
            self.value = Some(Arc::new(Expr::true_lit()));
        }
    }
}

/// A child of a template node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemplateChild {
    /// Bare words between tags.
    Text(TextNode),
    /// An embedded Go expression.
    Expr(Arc<Expr>),
    /// A nested tag.
    Node(TemplateNode),
}

impl TemplateChild {
    /// Bare words.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(TextNode {
            content: content.into(),
            span: Span::DUMMY,
        })
    }

    /// An embedded expression.
    pub fn expr(expr: Expr) -> Self {
        Self::Expr(Arc::new(expr))
    }
}

impl From<TemplateNode> for TemplateChild {
    fn from(node: TemplateNode) -> Self {
        Self::Node(node)
    }
}

impl From<TextNode> for TemplateChild {
    fn from(text: TextNode) -> Self {
        Self::Text(text)
    }
}

/// Bare words between tags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextNode {
    /// The text content, whitespace kept.
    pub content: String,
    /// Source span.
    pub span: Span,
}

impl TextNode {
    /// Whether the text is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}
