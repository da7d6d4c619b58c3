//! Child normalization for element nodes.

use crate::context::LowerContext;
use crate::node::lower_node;
use crate::tables::names;
use gox_ast::{Expr, TemplateChild};
use std::sync::Arc;

/// Lower the children of an element.
///
/// Go expressions and bare words are wrapped in `vecty.Text(...)`, nested
/// tags are lowered in place, and whitespace-only text between tags is
/// dropped.
pub fn lower_children(children: &[TemplateChild], ctx: &mut LowerContext) -> Vec<Expr> {
    children
        .iter()
        .filter_map(|child| lower_child(child, ctx))
        .collect()
}

/// Lower one child, `None` if it produces no output.
pub fn lower_child(child: &TemplateChild, ctx: &mut LowerContext) -> Option<Expr> {
    match child {
        TemplateChild::Expr(expr) => Some(text(Arc::clone(expr), ctx)),
        TemplateChild::Text(t) if t.is_blank() => None,
        TemplateChild::Text(t) => Some(text(Arc::new(Expr::string(&t.content)), ctx)),
        TemplateChild::Node(node) => Some(lower_node(node, ctx)),
    }
}

fn text(arg: Arc<Expr>, ctx: &LowerContext) -> Expr {
    Expr::call(ctx.core(names::TEXT), vec![arg])
}
