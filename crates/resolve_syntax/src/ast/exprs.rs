//! Math and program expression nodes, plus the clause wrappers that carry assertions and module arguments.

use super::{impl_node, storage_refs, Children, MathType, Name, Span, VariableDecl};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    MathSymbol(MathSymbolExpr),
    MathDot(MathDotExpr),
    MathQuantified(MathQuantifiedExpr),
    MathLambda(MathLambdaExpr),
    MathSet(MathSetExpr),
    MathTuple(MathTupleExpr),
    MathTypeAssertion(MathTypeAssertionExpr),
    MathAlternative(MathAlternativeExpr),
    ProgName(ProgNameExpr),
    ProgDot(ProgDotExpr),
    ProgCall(ProgCallExpr),
    ProgInteger(ProgIntegerLit),
    ProgCharacter(ProgCharacterLit),
    ProgString(ProgStringLit),
    ProgBoolean(ProgBooleanLit),
}

storage_refs!(Expr {
    MathSymbol => MathSymbolExpr,
    MathDot => MathDotExpr,
    MathQuantified => MathQuantifiedExpr,
    MathLambda => MathLambdaExpr,
    MathSet => MathSetExpr,
    MathTuple => MathTupleExpr,
    MathTypeAssertion => MathTypeAssertionExpr,
    MathAlternative => MathAlternativeExpr,
    ProgName => ProgNameExpr,
    ProgDot => ProgDotExpr,
    ProgCall => ProgCallExpr,
    ProgInteger => ProgIntegerLit,
    ProgCharacter => ProgCharacterLit,
    ProgString => ProgStringLit,
    ProgBoolean => ProgBooleanLit,
});

// ============================================================================
// Math expressions
// ============================================================================

/// How a math symbol application is written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayStyle {
    #[default]
    Prefix,
    Infix,
    Outfix,
    Postfix,
}

/// A (possibly applied) math symbol: `x`, `#S`, `f(a, b)`, `a + b`, `|S|`.
#[derive(Debug, Clone, PartialEq)]
pub struct MathSymbolExpr {
    pub span: Span,
    pub qualifier: Option<Name>,
    pub name: Name,
    /// Left delimiter for outfix symbols (`|`, `<`); `name` then holds the right one.
    pub left_delimiter: Option<String>,
    pub style: DisplayStyle,
    /// `#x`: the incoming value of a parameter in an ensures clause.
    pub incoming: bool,
    pub arguments: Vec<Expr>,
}

impl_node!(MathSymbolExpr, |e| Children::new().all(&e.arguments).finish());

/// `S.Contents.Length`
#[derive(Debug, Clone, PartialEq)]
pub struct MathDotExpr {
    pub span: Span,
    pub segments: Vec<Expr>,
}

impl_node!(MathDotExpr, |e| Children::new().all(&e.segments).finish());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Forall,
    Exists,
    Unique,
}

/// `For all x: Z where x > 0, P(x)`
#[derive(Debug, Clone, PartialEq)]
pub struct MathQuantifiedExpr {
    pub span: Span,
    pub quantifier: Quantifier,
    pub variables: Vec<VariableDecl>,
    pub where_clause: Option<Box<Expr>>,
    pub body: Box<Expr>,
}

impl_node!(MathQuantifiedExpr, |e| Children::new()
    .all(&e.variables)
    .opt(e.where_clause.as_deref())
    .node(e.body.as_ref())
    .finish());

/// `lambda (x: Z).(x + 1)`
#[derive(Debug, Clone, PartialEq)]
pub struct MathLambdaExpr {
    pub span: Span,
    pub parameters: Vec<VariableDecl>,
    pub body: Box<Expr>,
}

impl_node!(MathLambdaExpr, |e| Children::new()
    .all(&e.parameters)
    .node(e.body.as_ref())
    .finish());

/// `{a, b, c}`
#[derive(Debug, Clone, PartialEq)]
pub struct MathSetExpr {
    pub span: Span,
    pub elements: Vec<Expr>,
}

impl_node!(MathSetExpr, |e| Children::new().all(&e.elements).finish());

/// `(a, b)`
#[derive(Debug, Clone, PartialEq)]
pub struct MathTupleExpr {
    pub span: Span,
    pub elements: Vec<Expr>,
}

impl_node!(MathTupleExpr, |e| Children::new().all(&e.elements).finish());

/// `e : T`
#[derive(Debug, Clone, PartialEq)]
pub struct MathTypeAssertionExpr {
    pub span: Span,
    pub expr: Box<Expr>,
    pub asserted: Box<MathType>,
}

impl_node!(MathTypeAssertionExpr, |e| Children::new()
    .node(e.expr.as_ref())
    .node(e.asserted.as_ref())
    .finish());

/// `{{ a if c; b otherwise; }}`
#[derive(Debug, Clone, PartialEq)]
pub struct MathAlternativeExpr {
    pub span: Span,
    pub alternatives: Vec<AlternativeItem>,
}

impl_node!(MathAlternativeExpr, |e| Children::new().all(&e.alternatives).finish());

/// One branch of an alternative expression; `condition` is `None` for the `otherwise` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeItem {
    pub span: Span,
    pub result: Expr,
    pub condition: Option<Expr>,
}

impl_node!(AlternativeItem, |i| Children::new()
    .node(&i.result)
    .opt(i.condition.as_ref())
    .finish());

// ============================================================================
// Program expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ProgNameExpr {
    pub span: Span,
    pub qualifier: Option<Name>,
    pub name: Name,
}

impl_node!(ProgNameExpr);

/// `S.Contents`
#[derive(Debug, Clone, PartialEq)]
pub struct ProgDotExpr {
    pub span: Span,
    pub segments: Vec<Expr>,
}

impl_node!(ProgDotExpr, |e| Children::new().all(&e.segments).finish());

/// `Push(E, S)`, `SF :: Pop(E, S)`
#[derive(Debug, Clone, PartialEq)]
pub struct ProgCallExpr {
    pub span: Span,
    pub qualifier: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Expr>,
}

impl_node!(ProgCallExpr, |e| Children::new().all(&e.arguments).finish());

#[derive(Debug, Clone, PartialEq)]
pub struct ProgIntegerLit {
    pub span: Span,
    pub value: i64,
}

impl_node!(ProgIntegerLit);

#[derive(Debug, Clone, PartialEq)]
pub struct ProgCharacterLit {
    pub span: Span,
    pub value: char,
}

impl_node!(ProgCharacterLit);

#[derive(Debug, Clone, PartialEq)]
pub struct ProgStringLit {
    pub span: Span,
    pub value: String,
}

impl_node!(ProgStringLit);

#[derive(Debug, Clone, PartialEq)]
pub struct ProgBooleanLit {
    pub span: Span,
    pub value: bool,
}

impl_node!(ProgBooleanLit);

// ============================================================================
// Clauses
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    Requires,
    Ensures,
    Constraint,
    Convention,
    Correspondence,
    Maintaining,
    Decreasing,
}

/// `requires P;`, `ensures Q;`, `maintaining I;` ...
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionClause {
    pub span: Span,
    pub clause: ClauseKind,
    pub assertion: Expr,
}

impl_node!(AssertionClause, |c| Children::new().node(&c.assertion).finish());

/// An actual argument to a facility's concept, realization or enhancement.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleArgument {
    pub span: Span,
    pub expr: Expr,
}

impl_node!(ModuleArgument, |a| Children::new().node(&a.expr).finish());
