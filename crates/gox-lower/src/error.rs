//! Error types for template lowering.

use gox_ast::Span;
use std::fmt;

/// Result type for lowering operations.
pub type LowerResult<T> = Result<T, LowerError>;

/// An input the lowering pass refuses to work on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LowerError {
    /// The error message.
    pub message: String,
    /// The span where the error occurred.
    pub span: Span,
    /// The error code.
    pub code: LowerErrorCode,
}

impl LowerError {
    /// Create a new lowering error.
    pub fn new(message: impl Into<String>, span: Span, code: LowerErrorCode) -> Self {
        Self {
            message: message.into(),
            span,
            code,
        }
    }

    /// A template node without a tag name.
    pub fn empty_tag_name(span: Span) -> Self {
        Self::new(
            "Template node has an empty tag name",
            span,
            LowerErrorCode::EmptyTagName,
        )
    }

    /// An attribute without a name.
    pub fn empty_attribute_name(tag: &str, span: Span) -> Self {
        Self::new(
            format!("Attribute on <{}> has an empty name", tag),
            span,
            LowerErrorCode::EmptyAttributeName,
        )
    }

    /// Unusable lowering options.
    pub fn invalid_options(reason: impl fmt::Display) -> Self {
        Self::new(
            format!("Invalid lowering options: {}", reason),
            Span::DUMMY,
            LowerErrorCode::InvalidOptions,
        )
    }
}

/// Error codes for lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LowerErrorCode {
    /// A node's tag name is empty.
    EmptyTagName,
    /// An attribute's name is empty.
    EmptyAttributeName,
    /// The options are unusable.
    InvalidOptions,
}

impl LowerErrorCode {
    /// Get the error code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyTagName => "empty-tag-name",
            Self::EmptyAttributeName => "empty-attribute-name",
            Self::InvalidOptions => "invalid-options",
        }
    }
}

impl fmt::Display for LowerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
