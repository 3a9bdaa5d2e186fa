//! The two splice primitives - the only way the tree is structurally
//! altered. Higher-level operations (caret editing, script wrapping, undo)
//! are all expressed in terms of these.

use tracing::trace;

use super::{AtomId, Doc};
use crate::render::Renderer;

impl Doc {
    /// Splices `atoms` into `group`'s body immediately after content
    /// position `pos`, reparenting each inserted atom and requesting a
    /// geometry refresh on the nearest enclosing block.
    ///
    /// `pos` follows caret conventions: 0 is the sentinel, so inserting at 0
    /// places the atoms at the front of the content. Panics if `pos` is
    /// outside `[0, body.len() - 1]`.
    pub fn insert_at(
        &mut self,
        group: AtomId,
        pos: usize,
        atoms: &[AtomId],
        renderer: &mut impl Renderer,
    ) {
        let len = self.group(group).body.len();
        if pos >= len {
            panic!("insert position {} out of range for group of length {}", pos, len);
        }

        for &atom in atoms {
            self.set_parent(atom, Some(group));
        }
        self.group_mut(group)
            .body
            .splice(pos + 1..pos + 1, atoms.iter().copied());

        trace!(?group, pos, count = atoms.len(), "spliced atoms in");
        let block = self.enclosing_block(group);
        renderer.refresh(self, block);
    }

    /// Removes `count` atoms from `group` starting just after content
    /// position `pos`, returning them so the caller (usually the record log)
    /// can restore them later. The removed atoms are detached but stay
    /// resident in the arena.
    ///
    /// Panics if the range would run past the end of the body; the sentinel
    /// itself can never be removed because removal starts at `pos + 1`.
    pub fn delete_at(
        &mut self,
        group: AtomId,
        pos: usize,
        count: usize,
        renderer: &mut impl Renderer,
    ) -> Vec<AtomId> {
        let len = self.group(group).body.len();
        if pos + count > len - 1 {
            panic!(
                "delete of {} atoms at position {} out of range for group of length {}",
                count, pos, len
            );
        }

        let removed: Vec<AtomId> = self
            .group_mut(group)
            .body
            .drain(pos + 1..pos + 1 + count)
            .collect();
        for &atom in &removed {
            self.set_parent(atom, None);
        }

        trace!(?group, pos, count, "spliced atoms out");
        let block = self.enclosing_block(group);
        renderer.refresh(self, block);
        removed
    }
}
