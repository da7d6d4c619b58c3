//! Node lowering: components and elements.
//!
//! A tag whose first character is uppercase names a Go component type and
//! becomes `&Tag{Attr: value, ...}`. Any other tag is an HTML element and
//! becomes a call to its constructor in the element package, with the
//! lowered attributes followed by the lowered children as arguments.

use crate::attrs::lower_attrs;
use crate::children::lower_children;
use crate::context::LowerContext;
use crate::tables;
use gox_ast::{Expr, TemplateNode};
use smol_str::SmolStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// A template node after classification, holding what its lowering needs.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A Go component type, constructed from attributes as fields.
    Component {
        /// The component type name, the tag as written.
        ty: SmolStr,
        /// `Attr: value` fields in source order.
        fields: Vec<Expr>,
    },
    /// An HTML element constructor call.
    Element {
        /// `elem.Name` callee.
        callee: Expr,
        /// Lowered attributes.
        props: Vec<Expr>,
        /// Lowered children.
        children: Vec<Expr>,
    },
}

/// Whether a tag names a component rather than an HTML element.
pub fn is_component(tag: &str) -> bool {
    tag.chars().next().is_some_and(char::is_uppercase)
}

/// Classify a node and lower its parts.
pub fn classify(node: &TemplateNode, ctx: &mut LowerContext) -> NodeKind {
    let tag = node.tag_name();
    if is_component(tag) {
        if !node.children.is_empty() {
            // TODO: decide how component children reach the component (a
            // designated field or a markup list) instead of dropping them.
            warn!(
                tag,
                children = node.children.len(),
                "children of a component tag are not lowered"
            );
        }
        ctx.use_component(tag);
        let fields = node
            .attrs
            .iter()
            .map(|attr| Expr::key_value(attr.name.name.clone(), attr.value_or_true()))
            .collect();
        NodeKind::Component {
            ty: node.tag.name.clone(),
            fields,
        }
    } else {
        let props = lower_attrs(&node.attrs, ctx);
        let children = lower_children(&node.children, ctx);
        let name = tables::element_name(tag);
        ctx.use_element(name.as_ref());
        NodeKind::Element {
            callee: ctx.element(&name),
            props,
            children,
        }
    }
}

/// Lower a node that has already passed validation.
pub fn lower_node(node: &TemplateNode, ctx: &mut LowerContext) -> Expr {
    match classify(node, ctx) {
        NodeKind::Component { ty, fields } => {
            debug!(tag = %ty, fields = fields.len(), "lowered component");
            Expr::address_of(Expr::composite(
                Expr::ident(ty),
                fields.into_iter().map(Arc::new).collect(),
            ))
        }
        NodeKind::Element {
            callee,
            props,
            children,
        } => {
            debug!(
                tag = node.tag_name(),
                %callee,
                props = props.len(),
                children = children.len(),
                "lowered element"
            );
            let args = props.into_iter().chain(children).map(Arc::new).collect();
            Expr::call(callee, args)
        }
    }
}
