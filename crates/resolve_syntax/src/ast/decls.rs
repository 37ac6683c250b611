//! Declaration nodes.

use super::{
    impl_node, storage_refs, AssertionClause, Children, EnhancementPair, Expr, InitFinal, MathType, ModuleArgument,
    Name, NodeRef, Span, Stmt, Type,
};

/// A module-body item.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    TypeModel(TypeModelDecl),
    TypeRepresentation(TypeRepresentationDecl),
    TypeParameter(TypeParameterDecl),
    MathDefinition(MathDefinitionDecl),
    MathTheorem(MathTheoremDecl),
    MathTypeTheorem(MathTypeTheoremDecl),
    Operation(OperationDecl),
    Procedure(ProcedureDecl),
    Facility(FacilityDecl),
    Variable(VariableDecl),
}

storage_refs!(Decl {
    TypeModel => TypeModelDecl,
    TypeRepresentation => TypeRepresentationDecl,
    TypeParameter => TypeParameterDecl,
    MathDefinition => MathDefinitionDecl,
    MathTheorem => MathTheoremDecl,
    MathTypeTheorem => MathTypeTheoremDecl,
    Operation => OperationDecl,
    Procedure => ProcedureDecl,
    Facility => FacilityDecl,
    Variable => VariableDecl,
});

/// `Type Family Stack is modeled by Str(Entry); exemplar S; ...`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeModelDecl {
    pub span: Span,
    pub name: Name,
    pub exemplar: Name,
    pub model: MathType,
    pub constraint: Option<AssertionClause>,
    pub initialization: Option<InitFinal>,
    pub finalization: Option<InitFinal>,
}

impl_node!(TypeModelDecl, |d| Children::new()
    .node(&d.model)
    .opt(d.constraint.as_ref())
    .opt(d.initialization.as_ref())
    .opt(d.finalization.as_ref())
    .finish());

/// `Type Stack = Record ... end; convention ...; correspondence ...;`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRepresentationDecl {
    pub span: Span,
    pub name: Name,
    pub representation: Type,
    pub convention: Option<AssertionClause>,
    pub correspondence: Option<AssertionClause>,
    pub initialization: Option<InitFinal>,
    pub finalization: Option<InitFinal>,
}

impl_node!(TypeRepresentationDecl, |d| Children::new()
    .node(&d.representation)
    .opt(d.convention.as_ref())
    .opt(d.correspondence.as_ref())
    .opt(d.initialization.as_ref())
    .opt(d.finalization.as_ref())
    .finish());

/// `type Entry` as a generic module parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameterDecl {
    pub span: Span,
    pub name: Name,
}

impl_node!(TypeParameterDecl);

/// `Definition f(x: N): B = ...;` The definiens is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct MathDefinitionDecl {
    pub span: Span,
    pub name: Name,
    pub parameters: Vec<VariableDecl>,
    pub return_type: MathType,
    pub body: Option<Expr>,
}

impl_node!(MathDefinitionDecl, |d| Children::new()
    .all(&d.parameters)
    .node(&d.return_type)
    .opt(d.body.as_ref())
    .finish());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TheoremKind {
    Theorem,
    Axiom,
    Corollary,
    Lemma,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MathTheoremDecl {
    pub span: Span,
    pub name: Name,
    pub theorem_kind: TheoremKind,
    pub assertion: Expr,
}

impl_node!(MathTheoremDecl, |d| Children::new().node(&d.assertion).finish());

/// `Type Theorem N_Is_Z: For all n: N, n : Z;`
#[derive(Debug, Clone, PartialEq)]
pub struct MathTypeTheoremDecl {
    pub span: Span,
    pub name: Name,
    pub universals: Vec<VariableDecl>,
    pub assertion: Expr,
}

impl_node!(MathTypeTheoremDecl, |d| Children::new()
    .all(&d.universals)
    .node(&d.assertion)
    .finish());

/// An operation contract.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDecl {
    pub span: Span,
    pub name: Name,
    pub parameters: Vec<ParameterDecl>,
    pub return_type: Option<Type>,
    pub requires: Option<AssertionClause>,
    pub ensures: Option<AssertionClause>,
}

impl_node!(OperationDecl, |d| Children::new()
    .all(&d.parameters)
    .opt(d.return_type.as_ref())
    .opt(d.requires.as_ref())
    .opt(d.ensures.as_ref())
    .finish());

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDecl {
    pub span: Span,
    pub name: Name,
    pub parameters: Vec<ParameterDecl>,
    pub return_type: Option<Type>,
    pub recursive: bool,
    pub decreasing: Option<AssertionClause>,
    pub facilities: Vec<FacilityDecl>,
    pub variables: Vec<VariableDecl>,
    pub statements: Vec<Stmt>,
}

impl_node!(ProcedureDecl, |d| Children::new()
    .all(&d.parameters)
    .opt(d.return_type.as_ref())
    .opt(d.decreasing.as_ref())
    .all(&d.facilities)
    .all(&d.variables)
    .all(&d.statements)
    .finish());

/// `Facility SF is Stack_Template(Integer, 4) realized by Array_Realiz enhanced by ...;`
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityDecl {
    pub span: Span,
    pub name: Name,
    pub concept: Name,
    pub concept_args: Vec<ModuleArgument>,
    pub realization: Name,
    pub realization_args: Vec<ModuleArgument>,
    /// `externally realized by`: the realization is a non-native artifact, not a RESOLVE module.
    pub externally_realized: bool,
    pub enhancements: Vec<EnhancementPair>,
}

impl_node!(FacilityDecl, |d| Children::new()
    .all(&d.concept_args)
    .all(&d.realization_args)
    .all(&d.enhancements)
    .finish());

/// The declared type of a variable: a program type, or a math type for math variables.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclaredType {
    Program(Type),
    Math(MathType),
}

impl<'a> From<&'a DeclaredType> for NodeRef<'a> {
    fn from(ty: &'a DeclaredType) -> Self {
        match ty {
            DeclaredType::Program(t) => t.into(),
            DeclaredType::Math(t) => t.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub span: Span,
    pub name: Name,
    pub ty: DeclaredType,
}

impl_node!(VariableDecl, |d| Children::new().node(&d.ty).finish());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterMode {
    Alters,
    Updates,
    Clears,
    Restores,
    Preserves,
    Replaces,
    Evaluates,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDecl {
    pub span: Span,
    pub mode: ParameterMode,
    pub name: Name,
    pub ty: Type,
}

impl_node!(ParameterDecl, |d| Children::new().node(&d.ty).finish());

/// A generic module parameter wrapping the declaration it introduces (type, operation, definition, constant).
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleParameterDecl {
    pub span: Span,
    pub wrapped: Box<Decl>,
}

impl_node!(ModuleParameterDecl, |d| Children::new().node(d.wrapped.as_ref()).finish());
