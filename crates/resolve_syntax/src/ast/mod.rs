//! Abstract syntax tree for RESOLVE modules.
//!
//! Nodes are plain owned structs grouped by storage enums ([`ModuleDecl`], [`Decl`], [`Stmt`], [`Expr`],
//! [`Type`]). Every concrete node implements [`AstNode`], whose `children` accessor is written next to the
//! struct definition and lists the node's child nodes in source order. Generic consumers (the tree walker,
//! dumps, analyses) only ever see [`NodeRef`], a borrowed handle over any concrete node.
//!
//! Identifiers ([`Name`]) are leaves with a position but are not nodes: they never show up in `children`.

mod decls;
mod exprs;
mod modules;
mod stmts;
mod types;

pub use decls::*;
pub use exprs::*;
pub use modules::*;
pub use stmts::*;
pub use types::*;

pub use crate::imports::ImportCollection;

use resolve_core::lang::node_kinds::NodeKind;

/// Source span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::from(span.start..span.end.max(span.start))
    }
}

/// A positioned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    pub text: String,
    pub span: Span,
}

impl Name {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Uniform access to a concrete node's kind, position and children.
pub trait AstNode {
    fn kind(&self) -> NodeKind;

    fn span(&self) -> Span;

    /// Child nodes in source order. Absent optional children are omitted and list-valued children are
    /// flattened in place.
    fn children(&self) -> Vec<NodeRef<'_>>;
}

/// Ordered child accumulator used by the `children` implementations.
pub(crate) struct Children<'a>(Vec<NodeRef<'a>>);

impl<'a> Children<'a> {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn node(mut self, node: impl Into<NodeRef<'a>>) -> Self {
        self.0.push(node.into());
        self
    }

    pub(crate) fn opt<T>(mut self, node: Option<&'a T>) -> Self
    where
        &'a T: Into<NodeRef<'a>>,
    {
        if let Some(node) = node {
            self.0.push(node.into());
        }
        self
    }

    pub(crate) fn all<T>(mut self, nodes: &'a [T]) -> Self
    where
        &'a T: Into<NodeRef<'a>>,
    {
        self.0.extend(nodes.iter().map(Into::into));
        self
    }

    pub(crate) fn finish(self) -> Vec<NodeRef<'a>> {
        self.0
    }
}

/// Declares [`NodeRef`] over every concrete node type, together with its conversions and delegating accessors.
///
/// Variant names match the [`NodeKind`] of the wrapped node; the visitor dispatch relies on that.
macro_rules! node_refs {
    ($($kind:ident),* $(,)?) => {
        /// Borrowed handle to any concrete AST node.
        #[derive(Debug, Clone, Copy)]
        pub enum NodeRef<'a> {
            $($kind(&'a $kind),)*
        }

        $(
            impl<'a> From<&'a $kind> for NodeRef<'a> {
                fn from(node: &'a $kind) -> Self {
                    NodeRef::$kind(node)
                }
            }
        )*

        impl<'a> NodeRef<'a> {
            pub fn kind(self) -> NodeKind {
                match self {
                    $(NodeRef::$kind(n) => n.kind(),)*
                }
            }

            pub fn span(self) -> Span {
                match self {
                    $(NodeRef::$kind(n) => n.span(),)*
                }
            }

            /// Children of the referenced node; the returned handles borrow from the tree, not from `self`.
            pub fn children(self) -> Vec<NodeRef<'a>> {
                match self {
                    $(NodeRef::$kind(n) => n.children(),)*
                }
            }

            /// Whether two handles point at the very same node.
            pub fn same_node(self, other: NodeRef<'_>) -> bool {
                match (self, other) {
                    $((NodeRef::$kind(a), NodeRef::$kind(b)) => std::ptr::eq(a, b),)*
                    _ => false,
                }
            }
        }
    };
}

node_refs! {
    PrecisModule,
    ConceptModule,
    EnhancementModule,
    ConceptRealizModule,
    EnhancementRealizModule,
    FacilityModule,
    TypeModelDecl,
    TypeRepresentationDecl,
    TypeParameterDecl,
    MathDefinitionDecl,
    MathTheoremDecl,
    MathTypeTheoremDecl,
    OperationDecl,
    ProcedureDecl,
    FacilityDecl,
    VariableDecl,
    ParameterDecl,
    ModuleParameterDecl,
    AssignStmt,
    SwapStmt,
    CallStmt,
    WhileStmt,
    IfStmt,
    MathSymbolExpr,
    MathDotExpr,
    MathQuantifiedExpr,
    MathLambdaExpr,
    MathSetExpr,
    MathTupleExpr,
    MathTypeAssertionExpr,
    MathAlternativeExpr,
    ProgNameExpr,
    ProgDotExpr,
    ProgCallExpr,
    ProgIntegerLit,
    ProgCharacterLit,
    ProgStringLit,
    ProgBooleanLit,
    NamedType,
    RecordType,
    MathType,
    Block,
    ImportCollection,
    InitFinal,
    EnhancementPair,
    ModuleArgument,
    AssertionClause,
    AlternativeItem,
}

impl std::fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}..{}", self.kind(), self.span().start, self.span().end)
    }
}

/// Implements [`AstNode`] for a node struct with a `span` field; the struct name doubles as its [`NodeKind`].
macro_rules! impl_node {
    ($ty:ident, |$this:ident| $children:expr) => {
        impl $crate::ast::AstNode for $ty {
            fn kind(&self) -> resolve_core::lang::node_kinds::NodeKind {
                resolve_core::lang::node_kinds::NodeKind::$ty
            }

            fn span(&self) -> $crate::ast::Span {
                self.span
            }

            fn children(&self) -> Vec<$crate::ast::NodeRef<'_>> {
                let $this = self;
                $children
            }
        }
    };
    ($ty:ident) => {
        impl_node!($ty, |_this| Vec::new());
    };
}

pub(crate) use impl_node;

/// Storage enums convert to the handle of whichever concrete node they hold.
macro_rules! storage_refs {
    ($enum:ident { $($variant:ident => $kind:ident),* $(,)? }) => {
        impl<'a> From<&'a $enum> for $crate::ast::NodeRef<'a> {
            fn from(node: &'a $enum) -> Self {
                match node {
                    $($enum::$variant(n) => $crate::ast::NodeRef::$kind(n),)*
                }
            }
        }

        impl $enum {
            pub fn as_node(&self) -> $crate::ast::NodeRef<'_> {
                self.into()
            }

            pub fn kind(&self) -> resolve_core::lang::node_kinds::NodeKind {
                self.as_node().kind()
            }

            pub fn span(&self) -> $crate::ast::Span {
                self.as_node().span()
            }
        }
    };
}

pub(crate) use storage_refs;
