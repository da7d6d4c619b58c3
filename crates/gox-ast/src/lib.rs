//! AST types for gox.
//!
//! This crate holds both sides of the lowering pass: the template nodes the
//! gox parser produces and the Go expression tree they are lowered into.

pub mod display;
pub mod expr;
pub mod span;
pub mod template;

pub use expr::*;
pub use span::Span;
pub use template::*;
