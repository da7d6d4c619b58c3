//! Attribute lowering for element nodes.
//!
//! Every attribute becomes exactly one argument of the element constructor.
//! The first matching rule wins:
//!
//! 1. event attributes (`onClick`) become `&vecty.EventListener{...}`
//! 2. `class` becomes `vecty.Markup(vecty.Class(v))`
//! 3. controlled attributes (`href`) become `prop.href("href", v)`
//! 4. anything else becomes `vecty.Attribute("name", v)`

use crate::context::LowerContext;
use crate::tables::{self, names};
use gox_ast::{Attribute, Expr};
use std::sync::Arc;
use tracing::trace;

/// How an attribute is lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// An event listener for the given DOM event.
    Event(&'static str),
    /// The class markup directive.
    Class,
    /// A controlled property with the given property name.
    Controlled(&'static str),
    /// A plain attribute.
    Generic,
}

/// Decide how an attribute name is lowered.
pub fn classify_attr(name: &str) -> AttrKind {
    if let Some(event) = tables::event_name(name) {
        AttrKind::Event(event)
    } else if name == names::CLASS_ATTR {
        AttrKind::Class
    } else if let Some(prop) = tables::controlled_property(name) {
        AttrKind::Controlled(prop)
    } else {
        AttrKind::Generic
    }
}

/// Lower the attributes of an element, one prop expression per attribute.
pub fn lower_attrs(attrs: &[Attribute], ctx: &mut LowerContext) -> Vec<Expr> {
    attrs.iter().map(|attr| lower_attr(attr, ctx)).collect()
}

/// Lower a single attribute.
pub fn lower_attr(attr: &Attribute, ctx: &mut LowerContext) -> Expr {
    let value = attr.value_or_true();
    let kind = classify_attr(attr.name());
    trace!(attr = attr.name(), ?kind, "lowering attribute");

    match kind {
        AttrKind::Event(event) => {
            ctx.uses_events = true;
            event_listener(event, value, ctx)
        }
        AttrKind::Class => Expr::call(
            ctx.core(names::MARKUP),
            vec![Arc::new(Expr::call(ctx.core(names::CLASS), vec![value]))],
        ),
        AttrKind::Controlled(prop) => {
            ctx.uses_props = true;
            Expr::call(ctx.prop(prop), vec![Arc::new(Expr::string(prop)), value])
        }
        AttrKind::Generic => Expr::call(
            ctx.core(names::ATTRIBUTE),
            vec![Arc::new(Expr::string(attr.name())), value],
        ),
    }
}

/// `&vecty.EventListener{Name: "<event>", Listener: <handler>}`
fn event_listener(event: &str, handler: Arc<Expr>, ctx: &LowerContext) -> Expr {
    Expr::address_of(Expr::composite(
        ctx.core(names::EVENT_LISTENER),
        vec![
            Arc::new(Expr::key_value(
                names::LISTENER_NAME,
                Arc::new(Expr::string(event)),
            )),
            Arc::new(Expr::key_value(names::LISTENER_FUNC, handler)),
        ],
    ))
}
