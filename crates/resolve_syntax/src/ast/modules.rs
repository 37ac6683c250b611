//! Module-level nodes: the six compilation-unit kinds and their shared pieces.

use resolve_core::lang::module_kinds::{self, ModuleKind};

use super::{
    impl_node, storage_refs, AssertionClause, Children, Decl, FacilityDecl, ModuleArgument, ModuleParameterDecl, Name,
    Span, Stmt, VariableDecl,
};
use crate::imports::ImportCollection;

/// A compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleDecl {
    Precis(PrecisModule),
    Concept(ConceptModule),
    Enhancement(EnhancementModule),
    ConceptRealiz(ConceptRealizModule),
    EnhancementRealiz(EnhancementRealizModule),
    Facility(FacilityModule),
}

storage_refs!(ModuleDecl {
    Precis => PrecisModule,
    Concept => ConceptModule,
    Enhancement => EnhancementModule,
    ConceptRealiz => ConceptRealizModule,
    EnhancementRealiz => EnhancementRealizModule,
    Facility => FacilityModule,
});

impl ModuleDecl {
    /// The module's declared name.
    pub fn name(&self) -> &Name {
        match self {
            ModuleDecl::Precis(m) => &m.name,
            ModuleDecl::Concept(m) => &m.name,
            ModuleDecl::Enhancement(m) => &m.name,
            ModuleDecl::ConceptRealiz(m) => &m.name,
            ModuleDecl::EnhancementRealiz(m) => &m.name,
            ModuleDecl::Facility(m) => &m.name,
        }
    }

    pub fn imports(&self) -> &ImportCollection {
        match self {
            ModuleDecl::Precis(m) => &m.imports,
            ModuleDecl::Concept(m) => &m.imports,
            ModuleDecl::Enhancement(m) => &m.imports,
            ModuleDecl::ConceptRealiz(m) => &m.imports,
            ModuleDecl::EnhancementRealiz(m) => &m.imports,
            ModuleDecl::Facility(m) => &m.imports,
        }
    }

    pub fn block(&self) -> &Block {
        match self {
            ModuleDecl::Precis(m) => &m.block,
            ModuleDecl::Concept(m) => &m.block,
            ModuleDecl::Enhancement(m) => &m.block,
            ModuleDecl::ConceptRealiz(m) => &m.block,
            ModuleDecl::EnhancementRealiz(m) => &m.block,
            ModuleDecl::Facility(m) => &m.block,
        }
    }

    pub fn module_kind(&self) -> ModuleKind {
        match self {
            ModuleDecl::Precis(_) => ModuleKind::Precis,
            ModuleDecl::Concept(_) => ModuleKind::Concept,
            ModuleDecl::Enhancement(_) => ModuleKind::Enhancement,
            ModuleDecl::ConceptRealiz(_) => ModuleKind::ConceptRealization,
            ModuleDecl::EnhancementRealiz(_) => ModuleKind::EnhancementRealization,
            ModuleDecl::Facility(_) => ModuleKind::Facility,
        }
    }

    /// Whether this module may be the target of an implicit import.
    pub fn appropriate_for_import(&self) -> bool {
        module_kinds::appropriate_for_import(self.module_kind())
    }
}

/// `Precis Name; uses ...; <math items> end Name;`
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisModule {
    pub span: Span,
    pub name: Name,
    pub imports: ImportCollection,
    pub block: Block,
}

impl_node!(PrecisModule, |m| Children::new().node(&m.imports).node(&m.block).finish());

#[derive(Debug, Clone, PartialEq)]
pub struct ConceptModule {
    pub span: Span,
    pub name: Name,
    pub imports: ImportCollection,
    pub parameters: Vec<ModuleParameterDecl>,
    pub requires: Option<AssertionClause>,
    pub block: Block,
}

impl_node!(ConceptModule, |m| Children::new()
    .node(&m.imports)
    .all(&m.parameters)
    .opt(m.requires.as_ref())
    .node(&m.block)
    .finish());

/// `Enhancement Name for Concept; ...`
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementModule {
    pub span: Span,
    pub name: Name,
    pub concept: Name,
    pub imports: ImportCollection,
    pub parameters: Vec<ModuleParameterDecl>,
    pub requires: Option<AssertionClause>,
    pub block: Block,
}

impl_node!(EnhancementModule, |m| Children::new()
    .node(&m.imports)
    .all(&m.parameters)
    .opt(m.requires.as_ref())
    .node(&m.block)
    .finish());

/// `Realization Name for Concept; ...`
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptRealizModule {
    pub span: Span,
    pub name: Name,
    pub concept: Name,
    pub imports: ImportCollection,
    pub parameters: Vec<ModuleParameterDecl>,
    pub requires: Option<AssertionClause>,
    pub block: Block,
}

impl_node!(ConceptRealizModule, |m| Children::new()
    .node(&m.imports)
    .all(&m.parameters)
    .opt(m.requires.as_ref())
    .node(&m.block)
    .finish());

/// `Realization Name for Enhancement of Concept; ...`
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementRealizModule {
    pub span: Span,
    pub name: Name,
    pub enhancement: Name,
    pub concept: Name,
    pub imports: ImportCollection,
    pub parameters: Vec<ModuleParameterDecl>,
    pub requires: Option<AssertionClause>,
    pub block: Block,
}

impl_node!(EnhancementRealizModule, |m| Children::new()
    .node(&m.imports)
    .all(&m.parameters)
    .opt(m.requires.as_ref())
    .node(&m.block)
    .finish());

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityModule {
    pub span: Span,
    pub name: Name,
    pub imports: ImportCollection,
    pub requires: Option<AssertionClause>,
    pub block: Block,
}

impl_node!(FacilityModule, |m| Children::new()
    .node(&m.imports)
    .opt(m.requires.as_ref())
    .node(&m.block)
    .finish());

/// The item list of a module body.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub span: Span,
    pub items: Vec<Decl>,
}

impl_node!(Block, |b| Children::new().all(&b.items).finish());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitFinalKind {
    Initialization,
    Finalization,
}

/// A type or module initialization/finalization section.
#[derive(Debug, Clone, PartialEq)]
pub struct InitFinal {
    pub span: Span,
    pub section: InitFinalKind,
    pub requires: Option<AssertionClause>,
    pub ensures: Option<AssertionClause>,
    pub facilities: Vec<FacilityDecl>,
    pub variables: Vec<VariableDecl>,
    pub statements: Vec<Stmt>,
}

impl_node!(InitFinal, |s| Children::new()
    .opt(s.requires.as_ref())
    .opt(s.ensures.as_ref())
    .all(&s.facilities)
    .all(&s.variables)
    .all(&s.statements)
    .finish());

/// `enhanced by Enh realized by Realiz` inside a facility declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementPair {
    pub span: Span,
    pub enhancement: Name,
    pub enhancement_args: Vec<ModuleArgument>,
    pub realization: Name,
    pub realization_args: Vec<ModuleArgument>,
    pub externally_realized: bool,
}

impl_node!(EnhancementPair, |p| Children::new()
    .all(&p.enhancement_args)
    .all(&p.realization_args)
    .finish());
