//! Visitor surface for the tree walker.
//!
//! Every node kind, abstract or concrete, gets four hooks:
//!
//! - `enter_<kind>` before the node's children are visited,
//! - `exit_<kind>` after them,
//! - `between_<kind>(node, prev, next)` around each child (`prev` is `None` before the first child, `next` is
//!   `None` after the last),
//! - `skip_<kind>` to prune the node's subtree.
//!
//! Concrete hooks receive the concrete node; abstract hooks receive a [`NodeRef`] since they fire for every
//! descendant kind. All hooks default to doing nothing (skip hooks default to `false`), so an implementor
//! overrides exactly the hooks it cares about. Hooks return `Result<_, Self::Error>`; the first `Err` aborts
//! the walk and is handed back to the caller of [`walk`](crate::walker::walk).
//!
//! The hook set is generated from one table below and must list every kind of
//! [`NodeKind`](resolve_core::lang::node_kinds::NodeKind); the dispatch functions are what the walker calls
//! for each kind in a node's ancestry chain.

use resolve_core::lang::node_kinds::NodeKind;

use crate::ast::*;

macro_rules! visitor_surface {
    (
        abstract {
            $($akind:ident => $aenter:ident, $aexit:ident, $abetween:ident, $askip:ident;)*
        }
        concrete {
            $($ckind:ident => $center:ident, $cexit:ident, $cbetween:ident, $cskip:ident;)*
        }
    ) => {
        /// Hooks invoked by [`walk`](crate::walker::walk). See the module docs for ordering.
        #[allow(unused_variables)]
        pub trait Visitor<'a> {
            type Error;

            /// Fires before any kind-specific `enter_*` hook.
            fn enter_any(&mut self, node: NodeRef<'a>) -> Result<(), Self::Error> {
                Ok(())
            }

            /// Fires after every kind-specific `exit_*` hook.
            fn exit_any(&mut self, node: NodeRef<'a>) -> Result<(), Self::Error> {
                Ok(())
            }

            $(
                fn $aenter(&mut self, node: NodeRef<'a>) -> Result<(), Self::Error> {
                    Ok(())
                }

                fn $aexit(&mut self, node: NodeRef<'a>) -> Result<(), Self::Error> {
                    Ok(())
                }

                fn $abetween(
                    &mut self,
                    node: NodeRef<'a>,
                    prev: Option<NodeRef<'a>>,
                    next: Option<NodeRef<'a>>,
                ) -> Result<(), Self::Error> {
                    Ok(())
                }

                fn $askip(&mut self, node: NodeRef<'a>) -> Result<bool, Self::Error> {
                    Ok(false)
                }
            )*

            $(
                fn $center(&mut self, node: &'a $ckind) -> Result<(), Self::Error> {
                    Ok(())
                }

                fn $cexit(&mut self, node: &'a $ckind) -> Result<(), Self::Error> {
                    Ok(())
                }

                fn $cbetween(
                    &mut self,
                    node: &'a $ckind,
                    prev: Option<NodeRef<'a>>,
                    next: Option<NodeRef<'a>>,
                ) -> Result<(), Self::Error> {
                    Ok(())
                }

                fn $cskip(&mut self, node: &'a $ckind) -> Result<bool, Self::Error> {
                    Ok(false)
                }
            )*
        }

        pub(crate) fn dispatch_enter<'a, V>(visitor: &mut V, kind: NodeKind, node: NodeRef<'a>) -> Result<(), V::Error>
        where
            V: Visitor<'a> + ?Sized,
        {
            match (kind, node) {
                $((NodeKind::$akind, _) => visitor.$aenter(node),)*
                $((NodeKind::$ckind, NodeRef::$ckind(n)) => visitor.$center(n),)*
                _ => unreachable!("INVARIANT: {kind} is not in the ancestry of {}", node.kind()),
            }
        }

        pub(crate) fn dispatch_exit<'a, V>(visitor: &mut V, kind: NodeKind, node: NodeRef<'a>) -> Result<(), V::Error>
        where
            V: Visitor<'a> + ?Sized,
        {
            match (kind, node) {
                $((NodeKind::$akind, _) => visitor.$aexit(node),)*
                $((NodeKind::$ckind, NodeRef::$ckind(n)) => visitor.$cexit(n),)*
                _ => unreachable!("INVARIANT: {kind} is not in the ancestry of {}", node.kind()),
            }
        }

        pub(crate) fn dispatch_between<'a, V>(
            visitor: &mut V,
            kind: NodeKind,
            node: NodeRef<'a>,
            prev: Option<NodeRef<'a>>,
            next: Option<NodeRef<'a>>,
        ) -> Result<(), V::Error>
        where
            V: Visitor<'a> + ?Sized,
        {
            match (kind, node) {
                $((NodeKind::$akind, _) => visitor.$abetween(node, prev, next),)*
                $((NodeKind::$ckind, NodeRef::$ckind(n)) => visitor.$cbetween(n, prev, next),)*
                _ => unreachable!("INVARIANT: {kind} is not in the ancestry of {}", node.kind()),
            }
        }

        pub(crate) fn dispatch_skip<'a, V>(visitor: &mut V, kind: NodeKind, node: NodeRef<'a>) -> Result<bool, V::Error>
        where
            V: Visitor<'a> + ?Sized,
        {
            match (kind, node) {
                $((NodeKind::$akind, _) => visitor.$askip(node),)*
                $((NodeKind::$ckind, NodeRef::$ckind(n)) => visitor.$cskip(n),)*
                _ => unreachable!("INVARIANT: {kind} is not in the ancestry of {}", node.kind()),
            }
        }
    };
}

visitor_surface! {
    abstract {
        Module => enter_module, exit_module, between_module, skip_module;
        SpecModule => enter_spec_module, exit_spec_module, between_spec_module, skip_spec_module;
        ImplModule => enter_impl_module, exit_impl_module, between_impl_module, skip_impl_module;
        Decl => enter_decl, exit_decl, between_decl, skip_decl;
        TypeDecl => enter_type_decl, exit_type_decl, between_type_decl, skip_type_decl;
        MathDecl => enter_math_decl, exit_math_decl, between_math_decl, skip_math_decl;
        Stmt => enter_stmt, exit_stmt, between_stmt, skip_stmt;
        InfixStmt => enter_infix_stmt, exit_infix_stmt, between_infix_stmt, skip_infix_stmt;
        Expr => enter_expr, exit_expr, between_expr, skip_expr;
        MathExpr => enter_math_expr, exit_math_expr, between_math_expr, skip_math_expr;
        ProgExpr => enter_prog_expr, exit_prog_expr, between_prog_expr, skip_prog_expr;
        ProgLiteral => enter_prog_literal, exit_prog_literal, between_prog_literal, skip_prog_literal;
        Type => enter_type, exit_type, between_type, skip_type;
    }
    concrete {
        PrecisModule => enter_precis_module, exit_precis_module, between_precis_module, skip_precis_module;
        ConceptModule => enter_concept_module, exit_concept_module, between_concept_module, skip_concept_module;
        EnhancementModule => enter_enhancement_module, exit_enhancement_module, between_enhancement_module, skip_enhancement_module;
        ConceptRealizModule => enter_concept_realiz_module, exit_concept_realiz_module, between_concept_realiz_module, skip_concept_realiz_module;
        EnhancementRealizModule => enter_enhancement_realiz_module, exit_enhancement_realiz_module, between_enhancement_realiz_module, skip_enhancement_realiz_module;
        FacilityModule => enter_facility_module, exit_facility_module, between_facility_module, skip_facility_module;
        TypeModelDecl => enter_type_model_decl, exit_type_model_decl, between_type_model_decl, skip_type_model_decl;
        TypeRepresentationDecl => enter_type_representation_decl, exit_type_representation_decl, between_type_representation_decl, skip_type_representation_decl;
        TypeParameterDecl => enter_type_parameter_decl, exit_type_parameter_decl, between_type_parameter_decl, skip_type_parameter_decl;
        MathDefinitionDecl => enter_math_definition_decl, exit_math_definition_decl, between_math_definition_decl, skip_math_definition_decl;
        MathTheoremDecl => enter_math_theorem_decl, exit_math_theorem_decl, between_math_theorem_decl, skip_math_theorem_decl;
        MathTypeTheoremDecl => enter_math_type_theorem_decl, exit_math_type_theorem_decl, between_math_type_theorem_decl, skip_math_type_theorem_decl;
        OperationDecl => enter_operation_decl, exit_operation_decl, between_operation_decl, skip_operation_decl;
        ProcedureDecl => enter_procedure_decl, exit_procedure_decl, between_procedure_decl, skip_procedure_decl;
        FacilityDecl => enter_facility_decl, exit_facility_decl, between_facility_decl, skip_facility_decl;
        VariableDecl => enter_variable_decl, exit_variable_decl, between_variable_decl, skip_variable_decl;
        ParameterDecl => enter_parameter_decl, exit_parameter_decl, between_parameter_decl, skip_parameter_decl;
        ModuleParameterDecl => enter_module_parameter_decl, exit_module_parameter_decl, between_module_parameter_decl, skip_module_parameter_decl;
        AssignStmt => enter_assign_stmt, exit_assign_stmt, between_assign_stmt, skip_assign_stmt;
        SwapStmt => enter_swap_stmt, exit_swap_stmt, between_swap_stmt, skip_swap_stmt;
        CallStmt => enter_call_stmt, exit_call_stmt, between_call_stmt, skip_call_stmt;
        WhileStmt => enter_while_stmt, exit_while_stmt, between_while_stmt, skip_while_stmt;
        IfStmt => enter_if_stmt, exit_if_stmt, between_if_stmt, skip_if_stmt;
        MathSymbolExpr => enter_math_symbol_expr, exit_math_symbol_expr, between_math_symbol_expr, skip_math_symbol_expr;
        MathDotExpr => enter_math_dot_expr, exit_math_dot_expr, between_math_dot_expr, skip_math_dot_expr;
        MathQuantifiedExpr => enter_math_quantified_expr, exit_math_quantified_expr, between_math_quantified_expr, skip_math_quantified_expr;
        MathLambdaExpr => enter_math_lambda_expr, exit_math_lambda_expr, between_math_lambda_expr, skip_math_lambda_expr;
        MathSetExpr => enter_math_set_expr, exit_math_set_expr, between_math_set_expr, skip_math_set_expr;
        MathTupleExpr => enter_math_tuple_expr, exit_math_tuple_expr, between_math_tuple_expr, skip_math_tuple_expr;
        MathTypeAssertionExpr => enter_math_type_assertion_expr, exit_math_type_assertion_expr, between_math_type_assertion_expr, skip_math_type_assertion_expr;
        MathAlternativeExpr => enter_math_alternative_expr, exit_math_alternative_expr, between_math_alternative_expr, skip_math_alternative_expr;
        ProgNameExpr => enter_prog_name_expr, exit_prog_name_expr, between_prog_name_expr, skip_prog_name_expr;
        ProgDotExpr => enter_prog_dot_expr, exit_prog_dot_expr, between_prog_dot_expr, skip_prog_dot_expr;
        ProgCallExpr => enter_prog_call_expr, exit_prog_call_expr, between_prog_call_expr, skip_prog_call_expr;
        ProgIntegerLit => enter_prog_integer_lit, exit_prog_integer_lit, between_prog_integer_lit, skip_prog_integer_lit;
        ProgCharacterLit => enter_prog_character_lit, exit_prog_character_lit, between_prog_character_lit, skip_prog_character_lit;
        ProgStringLit => enter_prog_string_lit, exit_prog_string_lit, between_prog_string_lit, skip_prog_string_lit;
        ProgBooleanLit => enter_prog_boolean_lit, exit_prog_boolean_lit, between_prog_boolean_lit, skip_prog_boolean_lit;
        NamedType => enter_named_type, exit_named_type, between_named_type, skip_named_type;
        RecordType => enter_record_type, exit_record_type, between_record_type, skip_record_type;
        MathType => enter_math_type, exit_math_type, between_math_type, skip_math_type;
        Block => enter_block, exit_block, between_block, skip_block;
        ImportCollection => enter_import_collection, exit_import_collection, between_import_collection, skip_import_collection;
        InitFinal => enter_init_final, exit_init_final, between_init_final, skip_init_final;
        EnhancementPair => enter_enhancement_pair, exit_enhancement_pair, between_enhancement_pair, skip_enhancement_pair;
        ModuleArgument => enter_module_argument, exit_module_argument, between_module_argument, skip_module_argument;
        AssertionClause => enter_assertion_clause, exit_assertion_clause, between_assertion_clause, skip_assertion_clause;
        AlternativeItem => enter_alternative_item, exit_alternative_item, between_alternative_item, skip_alternative_item;
    }
}
