//! Statement nodes.

use super::{impl_node, storage_refs, AssertionClause, Children, Expr, ProgCallExpr, Span};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),
    Swap(SwapStmt),
    Call(CallStmt),
    While(WhileStmt),
    If(IfStmt),
}

storage_refs!(Stmt {
    Assign => AssignStmt,
    Swap => SwapStmt,
    Call => CallStmt,
    While => WhileStmt,
    If => IfStmt,
});

/// `x := e;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub span: Span,
    pub left: Expr,
    pub right: Expr,
}

impl_node!(AssignStmt, |s| Children::new().node(&s.left).node(&s.right).finish());

/// `x :=: y;`
#[derive(Debug, Clone, PartialEq)]
pub struct SwapStmt {
    pub span: Span,
    pub left: Expr,
    pub right: Expr,
}

impl_node!(SwapStmt, |s| Children::new().node(&s.left).node(&s.right).finish());

#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub span: Span,
    pub call: ProgCallExpr,
}

impl_node!(CallStmt, |s| Children::new().node(&s.call).finish());

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub span: Span,
    pub condition: Expr,
    pub maintaining: Option<AssertionClause>,
    pub decreasing: Option<AssertionClause>,
    pub body: Vec<Stmt>,
}

impl_node!(WhileStmt, |s| Children::new()
    .node(&s.condition)
    .opt(s.maintaining.as_ref())
    .opt(s.decreasing.as_ref())
    .all(&s.body)
    .finish());

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub span: Span,
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub else_body: Vec<Stmt>,
}

impl_node!(IfStmt, |s| Children::new()
    .node(&s.condition)
    .all(&s.then_body)
    .all(&s.else_body)
    .finish());
