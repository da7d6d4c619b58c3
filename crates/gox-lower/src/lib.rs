//! Lowering of gox templates into vecty calls.
//!
//! A gox template is HTML-like markup written inside Go source. After the
//! parser has turned a tag into a [`TemplateNode`], this crate rewrites it
//! into the Go expression that builds the same view with vecty:
//!
//! ```text
//! <div class="box">Hello {name}</div>
//!     => elem.Div(vecty.Markup(vecty.Class("box")), vecty.Text("Hello "), vecty.Text(name))
//!
//! <MyComponent Parameter1="Hello World"/>
//!     => &MyComponent{Parameter1: "Hello World"}
//! ```
//!
//! Lowering is pure. Independent templates can be lowered concurrently, see
//! [`lower_all`].

pub mod attrs;
pub mod children;
pub mod context;
pub mod error;
pub mod node;
pub mod options;
pub mod tables;

pub use context::LowerContext;
pub use error::{LowerError, LowerErrorCode, LowerResult};
pub use node::{classify, is_component, lower_node, NodeKind};
pub use options::LowerOptions;

use gox_ast::{Expr, TemplateChild, TemplateNode};
use rayon::prelude::*;

/// Lower a template node with the given options.
pub fn lower(node: &TemplateNode, options: &LowerOptions) -> LowerResult<Expr> {
    let mut ctx = LowerContext::new(options.clone());
    lower_with_context(node, &mut ctx)
}

/// Lower a template node, recording usage in `ctx`.
pub fn lower_with_context(node: &TemplateNode, ctx: &mut LowerContext) -> LowerResult<Expr> {
    ctx.options.validate()?;
    validate(node)?;
    Ok(lower_node(node, ctx))
}

/// Lower independent template nodes in parallel. Results keep input order.
pub fn lower_all(nodes: &[TemplateNode], options: &LowerOptions) -> Vec<LowerResult<Expr>> {
    nodes.par_iter().map(|node| lower(node, options)).collect()
}

/// Reject nodes the lowering pass cannot work on.
///
/// Checks the whole tree: every tag and attribute name must be non-empty.
pub fn validate(node: &TemplateNode) -> LowerResult<()> {
    if node.tag_name().is_empty() {
        return Err(LowerError::empty_tag_name(node.span.merge(node.tag.span)));
    }
    for attr in &node.attrs {
        if attr.name().is_empty() {
            return Err(LowerError::empty_attribute_name(
                node.tag_name(),
                attr.span,
            ));
        }
    }
    for child in &node.children {
        if let TemplateChild::Node(nested) = child {
            validate(nested)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gox_ast::{Attribute, Span};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn lower_default(node: &TemplateNode) -> Expr {
        lower(node, &LowerOptions::default()).unwrap()
    }

    #[test]
    fn test_lower_div_with_text() {
        let node = TemplateNode::new("div").with_child(TemplateChild::text("Hello"));
        insta::assert_snapshot!(
            lower_default(&node).to_string(),
            @r#"elem.Div(vecty.Text("Hello"))"#
        );
    }

    #[test]
    fn test_lower_anchor_with_href_and_click() {
        let node = TemplateNode::new("a")
            .with_attr(Attribute::new("href", Expr::string("/x")))
            .with_attr(Attribute::new("onClick", Expr::ident("handler")));
        insta::assert_snapshot!(
            lower_default(&node).to_string(),
            @r#"elem.Anchor(prop.href("href", "/x"), &vecty.EventListener{Name: "click", Listener: handler})"#
        );
    }

    #[test]
    fn test_lower_component() {
        let node = TemplateNode::new("MyComponent")
            .with_attr(Attribute::new("Parameter1", Expr::string("Hello World")));
        let expr = lower_default(&node);

        let unary = expr.as_unary().expect("address-of");
        let lit = unary.x.as_composite().expect("composite literal");
        assert_eq!(lit.ty.to_string(), "MyComponent");
        assert_eq!(lit.elts.len(), 1);
        let field = lit.elts[0].as_key_value().expect("field");
        assert_eq!(field.key.to_string(), "Parameter1");
        assert_eq!(field.value.to_string(), r#""Hello World""#);
        assert!(expr.as_call().is_none());
    }

    #[test]
    fn test_component_inside_element() {
        let node = TemplateNode::new("span").with_child(
            TemplateNode::new("MyComponent")
                .with_attr(Attribute::new("Parameter1", Expr::string("Hello World"))),
        );
        insta::assert_snapshot!(
            lower_default(&node).to_string(),
            @r#"elem.Span(&MyComponent{Parameter1: "Hello World"})"#
        );
    }

    #[test]
    fn test_mixed_children() {
        let node = TemplateNode::new("div")
            .with_attr(Attribute::new("class", Expr::string("card")))
            .with_child(TemplateChild::text("\n  "))
            .with_child(TemplateChild::text("Hello"))
            .with_child(TemplateChild::expr(Expr::raw("exprA")))
            .with_child(TemplateNode::new("input").with_attr(Attribute::shorthand("checked")))
            .with_child(TemplateChild::text("\n"));
        insta::assert_snapshot!(
            lower_default(&node).to_string(),
            @r#"elem.Div(vecty.Markup(vecty.Class("card")), vecty.Text("Hello"), vecty.Text(exprA), elem.Input(prop.checked("checked", true)))"#
        );
    }

    #[test]
    fn test_element_callee_law() {
        for (tag, name) in tables::ELEMENT_NAMES {
            let expr = lower_default(&TemplateNode::new(*tag));
            let call = expr.as_call().expect("element call");
            assert_eq!(call.callee_path(), Some(("elem", *name)));
            assert!(call.args.is_empty());
        }
        for (tag, name) in [("div", "Div"), ("section", "Section"), ("button", "Button")] {
            let expr = lower_default(&TemplateNode::new(tag));
            assert_eq!(expr.as_call().and_then(|c| c.callee_path()), Some(("elem", name)));
        }
    }

    #[test]
    fn test_tag_is_never_an_argument() {
        let expr = lower_default(&TemplateNode::new("div"));
        assert_eq!(expr.to_string(), "elem.Div()");
    }

    #[test]
    fn test_shared_values_survive_lowering() {
        let handler = Arc::new(Expr::raw("c.onSave"));
        let node = TemplateNode::new("button")
            .with_attr(Attribute::shared("onClick", Arc::clone(&handler)));
        let expr = lower_default(&node);

        let call = expr.as_call().expect("call");
        let lit = call.args[0]
            .as_unary()
            .and_then(|u| u.x.as_composite())
            .expect("listener");
        let listener = lit.elts[1].as_key_value().expect("Listener field");
        assert!(Arc::ptr_eq(&listener.value, &handler));
    }

    #[test]
    fn test_custom_packages() {
        let options = LowerOptions {
            element_package: "html".to_string(),
            core_package: "v".to_string(),
            prop_package: "p".to_string(),
        };
        let node = TemplateNode::new("img")
            .with_attr(Attribute::new("src", Expr::string("a.png")))
            .with_attr(Attribute::new("alt", Expr::string("A")));
        let expr = lower(&node, &options).unwrap();
        assert_eq!(
            expr.to_string(),
            r#"html.Image(p.src("src", "a.png"), v.Attribute("alt", "A"))"#
        );
    }

    #[test]
    fn test_rejects_empty_tag_name() {
        let node = TemplateNode::new("div")
            .with_child(TemplateNode::new("").with_span(Span::new(5, 8)));
        let err = lower(&node, &LowerOptions::default()).unwrap_err();
        assert_eq!(err.code, LowerErrorCode::EmptyTagName);
        assert_eq!(err.span, Span::new(5, 8));
    }

    #[test]
    fn test_rejects_empty_attribute_name() {
        let node = TemplateNode::new("input")
            .with_attr(Attribute::shorthand("").with_span(Span::new(7, 7)));
        let err = lower(&node, &LowerOptions::default()).unwrap_err();
        assert_eq!(err.code, LowerErrorCode::EmptyAttributeName);
        assert_eq!(err.to_string(), "Attribute on <input> has an empty name");
    }

    #[test]
    fn test_rejects_invalid_options() {
        let options = LowerOptions {
            element_package: String::new(),
            ..Default::default()
        };
        let err = lower(&TemplateNode::new("div"), &options).unwrap_err();
        assert_eq!(err.code, LowerErrorCode::InvalidOptions);
    }

    #[test]
    fn test_lower_with_context_collects_usage() {
        let node = TemplateNode::new("form")
            .with_attr(Attribute::new("onSubmit", Expr::ident("submit")))
            .with_child(TemplateNode::new("Field").with_attr(Attribute::shorthand("Required")));
        let mut ctx = LowerContext::default();
        let expr = lower_with_context(&node, &mut ctx).unwrap();

        assert_eq!(
            expr.to_string(),
            r#"elem.Form(&vecty.EventListener{Name: "submit", Listener: submit}, &Field{Required: true})"#
        );
        assert!(ctx.uses_events);
        assert!(!ctx.uses_props);
        assert!(ctx.components.contains("Field"));
        assert!(ctx.elements.contains("Form"));
    }

    #[test]
    fn test_lower_all_keeps_order() {
        let nodes: Vec<_> = (0..32)
            .map(|i| {
                if i % 2 == 0 {
                    TemplateNode::new("h1").with_child(TemplateChild::text(format!("n{}", i)))
                } else {
                    TemplateNode::new("")
                }
            })
            .collect();
        let results = lower_all(&nodes, &LowerOptions::default());

        assert_eq!(results.len(), nodes.len());
        for (i, result) in results.iter().enumerate() {
            match result {
                Ok(expr) => {
                    assert_eq!(i % 2, 0);
                    let expected = format!(r#"elem.Heading1(vecty.Text("n{}"))"#, i);
                    assert_eq!(expr.to_string(), expected);
                }
                Err(err) => {
                    assert_eq!(i % 2, 1);
                    assert_eq!(err.code, LowerErrorCode::EmptyTagName);
                }
            }
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_component_children_warning_is_logged() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("gox_lower=trace")
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let node = TemplateNode::new("Panel").with_child(TemplateChild::text("ignored"));
        assert_eq!(lower_default(&node).to_string(), "&Panel{}");

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        let warning = output
            .lines()
            .find(|line| line.contains("children of a component tag are not lowered"))
            .expect("component children warning");
        assert!(warning.contains("WARN"));
        assert!(warning.contains("Panel"));
        assert!(warning.contains("children=1"));
    }
}
