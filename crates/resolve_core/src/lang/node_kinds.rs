//! Define the AST node-kind vocabulary and its kind hierarchy.
//!
//! Every AST node has exactly one *concrete* kind. Concrete kinds hang off a small tree of *abstract* kinds
//! (`Module`, `Decl`, `Expr`, ...) which never appear as nodes themselves but still receive visitor hooks for all
//! of their descendants. The hierarchy is recorded once, here, as a `parent` link per kind; the tree walker
//! consumes the precomputed [`ancestry`] chains instead of discovering the hierarchy at runtime.
//!
//! ## Notes
//! - [`NODE_KINDS`] is ordered exactly like the [`NodeKind`] discriminants, so lookups are O(1) indexing.
//!   The `lang_registry_guardrails` test enforces this.
//! - The implicit root of the hierarchy (“any node”) is not a kind; generic hooks cover it.
//!
//! ## Examples
//! ```rust
//! use resolve_core::lang::node_kinds::{self, NodeKind};
//!
//! assert_eq!(
//!     node_kinds::ancestry(NodeKind::ConceptModule),
//!     &[NodeKind::Module, NodeKind::SpecModule, NodeKind::ConceptModule]
//! );
//! assert!(node_kinds::is_abstract(NodeKind::Module));
//! ```

use std::sync::OnceLock;

/// Stable identifier for every node kind, abstract and concrete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    // Modules
    Module,
    SpecModule,
    ImplModule,
    PrecisModule,
    ConceptModule,
    EnhancementModule,
    ConceptRealizModule,
    EnhancementRealizModule,
    FacilityModule,

    // Declarations
    Decl,
    TypeDecl,
    TypeModelDecl,
    TypeRepresentationDecl,
    TypeParameterDecl,
    MathDecl,
    MathDefinitionDecl,
    MathTheoremDecl,
    MathTypeTheoremDecl,
    OperationDecl,
    ProcedureDecl,
    FacilityDecl,
    VariableDecl,
    ParameterDecl,
    ModuleParameterDecl,

    // Statements
    Stmt,
    InfixStmt,
    AssignStmt,
    SwapStmt,
    CallStmt,
    WhileStmt,
    IfStmt,

    // Expressions
    Expr,
    MathExpr,
    MathSymbolExpr,
    MathDotExpr,
    MathQuantifiedExpr,
    MathLambdaExpr,
    MathSetExpr,
    MathTupleExpr,
    MathTypeAssertionExpr,
    MathAlternativeExpr,
    ProgExpr,
    ProgNameExpr,
    ProgDotExpr,
    ProgCallExpr,
    ProgLiteral,
    ProgIntegerLit,
    ProgCharacterLit,
    ProgStringLit,
    ProgBooleanLit,

    // Program types
    Type,
    NamedType,
    RecordType,

    // Standalone
    MathType,
    Block,
    ImportCollection,
    InitFinal,
    EnhancementPair,
    ModuleArgument,
    AssertionClause,
    AlternativeItem,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Module,
    Declaration,
    Statement,
    Expression,
    Type,
    Structure,
}

/// Metadata for a node kind.
///
/// ## Notes
/// - `name` is the spelling used in diagnostics and AST dumps.
/// - `parent` is `None` only for top-level kinds (children of the implicit “any node” root).
#[derive(Debug, Clone, Copy)]
pub struct NodeKindInfo {
    pub id: NodeKind,
    pub name: &'static str,
    pub parent: Option<NodeKind>,
    pub is_abstract: bool,
    pub category: NodeCategory,
}

use NodeCategory as C;
use NodeKind as K;

/// Registry of all node kinds, in discriminant order.
pub const NODE_KINDS: &[NodeKindInfo] = &[
    // Modules
    abstract_kind(K::Module, "Module", None, C::Module),
    abstract_kind(K::SpecModule, "SpecModule", Some(K::Module), C::Module),
    abstract_kind(K::ImplModule, "ImplModule", Some(K::Module), C::Module),
    kind(K::PrecisModule, "PrecisModule", Some(K::Module), C::Module),
    kind(K::ConceptModule, "ConceptModule", Some(K::SpecModule), C::Module),
    kind(K::EnhancementModule, "EnhancementModule", Some(K::SpecModule), C::Module),
    kind(K::ConceptRealizModule, "ConceptRealizModule", Some(K::ImplModule), C::Module),
    kind(K::EnhancementRealizModule, "EnhancementRealizModule", Some(K::ImplModule), C::Module),
    kind(K::FacilityModule, "FacilityModule", Some(K::Module), C::Module),
    // Declarations
    abstract_kind(K::Decl, "Decl", None, C::Declaration),
    abstract_kind(K::TypeDecl, "TypeDecl", Some(K::Decl), C::Declaration),
    kind(K::TypeModelDecl, "TypeModelDecl", Some(K::TypeDecl), C::Declaration),
    kind(K::TypeRepresentationDecl, "TypeRepresentationDecl", Some(K::TypeDecl), C::Declaration),
    kind(K::TypeParameterDecl, "TypeParameterDecl", Some(K::TypeDecl), C::Declaration),
    abstract_kind(K::MathDecl, "MathDecl", Some(K::Decl), C::Declaration),
    kind(K::MathDefinitionDecl, "MathDefinitionDecl", Some(K::MathDecl), C::Declaration),
    kind(K::MathTheoremDecl, "MathTheoremDecl", Some(K::MathDecl), C::Declaration),
    kind(K::MathTypeTheoremDecl, "MathTypeTheoremDecl", Some(K::MathDecl), C::Declaration),
    kind(K::OperationDecl, "OperationDecl", Some(K::Decl), C::Declaration),
    kind(K::ProcedureDecl, "ProcedureDecl", Some(K::Decl), C::Declaration),
    kind(K::FacilityDecl, "FacilityDecl", Some(K::Decl), C::Declaration),
    kind(K::VariableDecl, "VariableDecl", Some(K::Decl), C::Declaration),
    kind(K::ParameterDecl, "ParameterDecl", Some(K::Decl), C::Declaration),
    kind(K::ModuleParameterDecl, "ModuleParameterDecl", Some(K::Decl), C::Declaration),
    // Statements
    abstract_kind(K::Stmt, "Stmt", None, C::Statement),
    abstract_kind(K::InfixStmt, "InfixStmt", Some(K::Stmt), C::Statement),
    kind(K::AssignStmt, "AssignStmt", Some(K::InfixStmt), C::Statement),
    kind(K::SwapStmt, "SwapStmt", Some(K::InfixStmt), C::Statement),
    kind(K::CallStmt, "CallStmt", Some(K::Stmt), C::Statement),
    kind(K::WhileStmt, "WhileStmt", Some(K::Stmt), C::Statement),
    kind(K::IfStmt, "IfStmt", Some(K::Stmt), C::Statement),
    // Expressions
    abstract_kind(K::Expr, "Expr", None, C::Expression),
    abstract_kind(K::MathExpr, "MathExpr", Some(K::Expr), C::Expression),
    kind(K::MathSymbolExpr, "MathSymbolExpr", Some(K::MathExpr), C::Expression),
    kind(K::MathDotExpr, "MathDotExpr", Some(K::MathExpr), C::Expression),
    kind(K::MathQuantifiedExpr, "MathQuantifiedExpr", Some(K::MathExpr), C::Expression),
    kind(K::MathLambdaExpr, "MathLambdaExpr", Some(K::MathExpr), C::Expression),
    kind(K::MathSetExpr, "MathSetExpr", Some(K::MathExpr), C::Expression),
    kind(K::MathTupleExpr, "MathTupleExpr", Some(K::MathExpr), C::Expression),
    kind(K::MathTypeAssertionExpr, "MathTypeAssertionExpr", Some(K::MathExpr), C::Expression),
    kind(K::MathAlternativeExpr, "MathAlternativeExpr", Some(K::MathExpr), C::Expression),
    abstract_kind(K::ProgExpr, "ProgExpr", Some(K::Expr), C::Expression),
    kind(K::ProgNameExpr, "ProgNameExpr", Some(K::ProgExpr), C::Expression),
    kind(K::ProgDotExpr, "ProgDotExpr", Some(K::ProgExpr), C::Expression),
    kind(K::ProgCallExpr, "ProgCallExpr", Some(K::ProgExpr), C::Expression),
    abstract_kind(K::ProgLiteral, "ProgLiteral", Some(K::ProgExpr), C::Expression),
    kind(K::ProgIntegerLit, "ProgIntegerLit", Some(K::ProgLiteral), C::Expression),
    kind(K::ProgCharacterLit, "ProgCharacterLit", Some(K::ProgLiteral), C::Expression),
    kind(K::ProgStringLit, "ProgStringLit", Some(K::ProgLiteral), C::Expression),
    kind(K::ProgBooleanLit, "ProgBooleanLit", Some(K::ProgLiteral), C::Expression),
    // Program types
    abstract_kind(K::Type, "Type", None, C::Type),
    kind(K::NamedType, "NamedType", Some(K::Type), C::Type),
    kind(K::RecordType, "RecordType", Some(K::Type), C::Type),
    // Standalone
    kind(K::MathType, "MathType", None, C::Type),
    kind(K::Block, "Block", None, C::Structure),
    kind(K::ImportCollection, "ImportCollection", None, C::Structure),
    kind(K::InitFinal, "InitFinal", None, C::Structure),
    kind(K::EnhancementPair, "EnhancementPair", None, C::Structure),
    kind(K::ModuleArgument, "ModuleArgument", None, C::Structure),
    kind(K::AssertionClause, "AssertionClause", None, C::Structure),
    kind(K::AlternativeItem, "AlternativeItem", None, C::Structure),
];

/// Metadata lookup.
pub fn info_for(id: NodeKind) -> &'static NodeKindInfo {
    &NODE_KINDS[id as usize]
}

/// Canonical spelling of a node kind.
pub fn as_str(id: NodeKind) -> &'static str {
    info_for(id).name
}

/// Direct parent in the kind hierarchy.
pub fn parent(id: NodeKind) -> Option<NodeKind> {
    info_for(id).parent
}

/// Whether the kind only exists in the hierarchy (never as a node).
pub fn is_abstract(id: NodeKind) -> bool {
    info_for(id).is_abstract
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(NodeKind)` if `s` is the exact canonical name of a kind, `None` otherwise.
pub fn from_str(s: &str) -> Option<NodeKind> {
    NODE_KINDS.iter().find(|k| k.name == s).map(|k| k.id)
}

/// The ancestry chain of a kind, most general first and the kind itself last.
///
/// ## Notes
/// - Chains are computed once, on first use, for every kind in the registry.
/// - Entry hooks fire along this slice front to back; exit hooks fire back to front.
pub fn ancestry(id: NodeKind) -> &'static [NodeKind] {
    static CHAINS: OnceLock<Vec<Vec<NodeKind>>> = OnceLock::new();
    let chains = CHAINS.get_or_init(|| NODE_KINDS.iter().map(|k| compute_chain(k.id)).collect());
    &chains[id as usize]
}

/// Whether `ancestor` appears in the ancestry chain of `id` (a kind is its own ancestor).
pub fn is_a(id: NodeKind, ancestor: NodeKind) -> bool {
    ancestry(id).contains(&ancestor)
}

/// All concrete (instantiable) kinds, in registry order.
pub fn concrete_kinds() -> impl Iterator<Item = NodeKind> {
    NODE_KINDS.iter().filter(|k| !k.is_abstract).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

fn compute_chain(id: NodeKind) -> Vec<NodeKind> {
    let mut chain = vec![id];
    let mut current = NODE_KINDS[id as usize].parent;
    while let Some(p) = current {
        chain.push(p);
        current = NODE_KINDS[p as usize].parent;
    }
    chain.reverse();
    chain
}

const fn kind(id: NodeKind, name: &'static str, parent: Option<NodeKind>, category: NodeCategory) -> NodeKindInfo {
    NodeKindInfo {
        id,
        name,
        parent,
        is_abstract: false,
        category,
    }
}

const fn abstract_kind(
    id: NodeKind,
    name: &'static str,
    parent: Option<NodeKind>,
    category: NodeCategory,
) -> NodeKindInfo {
    NodeKindInfo {
        id,
        name,
        parent,
        is_abstract: true,
        category,
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}
