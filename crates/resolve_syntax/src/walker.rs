//! Depth-first tree walker driving a [`Visitor`].
//!
//! For a node of kind `K` with ancestry chain `A1 (most general) .. K`, one visit is:
//!
//! 1. `enter_any`, then `enter_A1 .. enter_K` (general → specific)
//! 2. `skip_K .. skip_A1` (specific → general); the first `true` prunes the children
//! 3. unless pruned: for every child, the between hooks for `A1 .. K` with `(prev, next)`, then the child's own
//!    visit; after the last child one more round of between hooks with `next = None`
//! 4. `exit_K .. exit_A1` (specific → general), then `exit_any`
//!
//! Entry and exit hooks fire for a pruned node; only its descendants and its between hooks are skipped.
//! A childless node gets no between hooks at all.

use resolve_core::lang::node_kinds::{self, NodeKind};

use crate::ast::NodeRef;
use crate::visitor::{dispatch_between, dispatch_enter, dispatch_exit, dispatch_skip, Visitor};

/// Walk the tree rooted at `root`, invoking `visitor`'s hooks in the order described in the module docs.
///
/// The first error returned by any hook stops the walk; no further hooks are invoked.
#[tracing::instrument(level = "trace", skip_all)]
pub fn walk<'a, V>(visitor: &mut V, root: impl Into<NodeRef<'a>>) -> Result<(), V::Error>
where
    V: Visitor<'a> + ?Sized,
{
    let root = root.into();
    tracing::trace!(root = %root, "walking tree");
    TreeWalker { visitor }.visit(root)
}

struct TreeWalker<'v, V: ?Sized> {
    visitor: &'v mut V,
}

impl<'a, V> TreeWalker<'_, V>
where
    V: Visitor<'a> + ?Sized,
{
    fn visit(&mut self, node: NodeRef<'a>) -> Result<(), V::Error> {
        let chain = node_kinds::ancestry(node.kind());

        self.visitor.enter_any(node)?;
        for &kind in chain {
            dispatch_enter(&mut *self.visitor, kind, node)?;
        }

        if !self.is_pruned(chain, node)? {
            let children = node.children();
            if !children.is_empty() {
                let mut prev = None;
                for child in children {
                    self.between(chain, node, prev, Some(child))?;
                    self.visit(child)?;
                    prev = Some(child);
                }
                self.between(chain, node, prev, None)?;
            }
        }

        for &kind in chain.iter().rev() {
            dispatch_exit(&mut *self.visitor, kind, node)?;
        }
        self.visitor.exit_any(node)
    }

    fn is_pruned(&mut self, chain: &[NodeKind], node: NodeRef<'a>) -> Result<bool, V::Error> {
        for &kind in chain.iter().rev() {
            if dispatch_skip(&mut *self.visitor, kind, node)? {
                tracing::trace!(node = %node, via = %kind, "skipping children");
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn between(
        &mut self,
        chain: &[NodeKind],
        node: NodeRef<'a>,
        prev: Option<NodeRef<'a>>,
        next: Option<NodeRef<'a>>,
    ) -> Result<(), V::Error> {
        for &kind in chain {
            dispatch_between(&mut *self.visitor, kind, node, prev, next)?;
        }
        Ok(())
    }
}
