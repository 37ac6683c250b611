//! Structural errors raised while assembling AST nodes.
//!
//! The parse-tree → AST translation lives outside this crate; these are the checks it is expected to run so
//! that malformed input is reported uniformly, with source spans, before any tree is handed to the resolver.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use resolve_core::lang::node_kinds::NodeKind;

use crate::ast::{Name, Span};

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("block `{open}` is closed by `end {close}`")]
    #[diagnostic(
        code(resolve::syntax::block_name_mismatch),
        help("end the block with `end {open};`")
    )]
    BlockNameMismatch {
        open: String,
        close: String,
        #[label("opened here")]
        open_span: SourceSpan,
        #[label("closed here")]
        close_span: SourceSpan,
    },

    #[error("{kind} is missing its {field}")]
    #[diagnostic(code(resolve::syntax::missing_child))]
    MissingChild {
        kind: NodeKind,
        field: &'static str,
        #[label("incomplete {kind}")]
        span: SourceSpan,
    },
}

/// Check that a block's closing name matches its opening name (`Concept Stack_Template; ... end Stack_Template;`).
pub fn check_block_ends(open: &Name, close: &Name) -> Result<(), SyntaxError> {
    if open.text == close.text {
        return Ok(());
    }
    tracing::debug!(open = %open, close = %close, "block name mismatch");
    Err(SyntaxError::BlockNameMismatch {
        open: open.text.clone(),
        close: close.text.clone(),
        open_span: open.span.into(),
        close_span: close.span.into(),
    })
}

/// Unwrap a child that the node being assembled cannot do without.
pub fn require_child<T>(child: Option<T>, kind: NodeKind, field: &'static str, span: Span) -> Result<T, SyntaxError> {
    child.ok_or(SyntaxError::MissingChild {
        kind,
        field,
        span: span.into(),
    })
}
