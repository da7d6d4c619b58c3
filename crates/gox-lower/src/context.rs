//! Lowering context.

use crate::options::LowerOptions;
use gox_ast::Expr;
use indexmap::IndexSet;
use smol_str::SmolStr;

/// State carried through one lowering run.
///
/// Besides the options, the context records what the emitted code refers
/// to so a driver can add the matching imports. None of it feeds back into
/// the lowered tree.
#[derive(Debug, Clone, Default)]
pub struct LowerContext {
    /// Lowering options.
    pub options: LowerOptions,
    /// Component types constructed, in first-use order.
    pub components: IndexSet<SmolStr>,
    /// Element constructors called, in first-use order.
    pub elements: IndexSet<SmolStr>,
    /// Whether an event listener was emitted.
    pub uses_events: bool,
    /// Whether a controlled property was emitted.
    pub uses_props: bool,
}

impl LowerContext {
    /// Create a new lowering context.
    pub fn new(options: LowerOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Record a component usage.
    pub fn use_component(&mut self, name: impl Into<SmolStr>) {
        self.components.insert(name.into());
    }

    /// Record an element constructor usage.
    pub fn use_element(&mut self, name: impl Into<SmolStr>) {
        self.elements.insert(name.into());
    }

    /// `core.name`
    pub(crate) fn core(&self, name: &str) -> Expr {
        Expr::selector(&self.options.core_package, name)
    }

    /// `elem.name`
    pub(crate) fn element(&self, name: &str) -> Expr {
        Expr::selector(&self.options.element_package, name)
    }

    /// `prop.name`
    pub(crate) fn prop(&self, name: &str) -> Expr {
        Expr::selector(&self.options.prop_package, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_keeps_first_use_order() {
        let mut ctx = LowerContext::default();
        ctx.use_element("Div");
        ctx.use_element("Anchor");
        ctx.use_element("Div");
        ctx.use_component("MyComponent");

        let elements: Vec<_> = ctx.elements.iter().map(|s| s.as_str()).collect();
        assert_eq!(elements, vec!["Div", "Anchor"]);
        assert!(!ctx.elements.is_empty());
        assert_eq!(ctx.components.len(), 1);
    }

    #[test]
    fn test_selectors_follow_options() {
        let ctx = LowerContext::new(LowerOptions {
            core_package: "v".to_string(),
            ..Default::default()
        });
        assert_eq!(ctx.core("Text").to_string(), "v.Text");
        assert_eq!(ctx.element("Div").to_string(), "elem.Div");
        assert_eq!(ctx.prop("href").to_string(), "prop.href");
    }
}
