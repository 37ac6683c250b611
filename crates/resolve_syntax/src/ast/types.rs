//! Program and math type nodes.

use super::{impl_node, storage_refs, Children, Expr, Name, Span, VariableDecl};

/// A program type.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Named(NamedType),
    Record(RecordType),
}

storage_refs!(Type {
    Named => NamedType,
    Record => RecordType,
});

/// `Integer`, `Std_Stack_Fac :: Stack`
#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    pub span: Span,
    pub qualifier: Option<Name>,
    pub name: Name,
}

impl_node!(NamedType);

#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    pub span: Span,
    pub fields: Vec<VariableDecl>,
}

impl_node!(RecordType, |t| Children::new().all(&t.fields).finish());

/// A math expression used in type position (`Str(Entry)`, `N`, `Powerset(Z)`).
#[derive(Debug, Clone, PartialEq)]
pub struct MathType {
    pub span: Span,
    pub expr: Expr,
}

impl_node!(MathType, |t| Children::new().node(&t.expr).finish());
