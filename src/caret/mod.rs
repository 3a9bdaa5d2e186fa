//! The caret, its selection, and the editing session that owns them.
//!
//! A [`Caret`] is a `(group, position)` pair: `pos` is the body index of the
//! atom immediately to the caret's left, so position 0 (the sentinel) means
//! "before any content". The optional selection is an anchor/focus pair of
//! atom handles, resolved to sorted indices only when read - dragging in
//! either direction produces the same range.
//!
//! [`Editor`] is the session context: the document, the caret and the record
//! log together. All editing operations live on it, so several editors can
//! coexist without shared state. Navigation is implemented in `navigation`,
//! mutation and undo/redo in `edit`.

mod navigation;
mod edit;

use crate::node::{Atom, AtomId, Doc, Fragment};
use crate::record::Record;
use crate::render::Renderer;

/// A caret position plus an optional selection.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Caret {
    /// The group the caret stands in.
    pub target: AtomId,
    /// Body index of the atom to the caret's left.
    pub pos: usize,
    /// Selection anchor and focus. Both always sit in `target`'s body.
    pub sel: Option<(AtomId, AtomId)>,
}

/// An editing session: document, caret and history.
#[derive(Debug)]
pub struct Editor {
    pub doc: Doc,
    pub caret: Caret,
    pub record: Record,
}

impl Editor {
    pub fn new() -> Editor {
        let doc = Doc::new();
        let caret = Caret { target: doc.root(), pos: 0, sel: None };
        Editor { doc, caret, record: Record::new() }
    }

    /// Replaces the whole document. The caret returns to the start and the
    /// history is discarded; wholesale replacement is not an undoable edit.
    pub fn set_content(&mut self, fragments: &[Fragment], renderer: &mut impl Renderer) {
        self.doc = Doc::new();
        self.record = Record::new();
        self.caret = Caret { target: self.doc.root(), pos: 0, sel: None };
        if fragments.is_empty() {
            return;
        }
        let root = self.doc.root();
        let atoms: Vec<AtomId> = fragments.iter().map(|f| self.doc.graft(f)).collect();
        self.doc.insert_at(root, 0, &atoms, renderer);
    }

    /// The atom at the caret - the one immediately to its left.
    pub fn cur(&self) -> AtomId {
        self.doc.group(self.caret.target).body[self.caret.pos]
    }

    /// Moves the caret without touching the selection.
    pub fn set(&mut self, target: AtomId, pos: usize) {
        self.caret.target = target;
        self.caret.pos = pos;
    }

    /// Sets or clears the selection. A degenerate anchor/focus pair
    /// collapses to no selection.
    pub fn set_sel(&mut self, sel: Option<(AtomId, AtomId)>) {
        self.caret.sel = match sel {
            Some((anchor, focus)) if anchor == focus => None,
            other => other,
        };
    }

    pub fn clear_sel(&mut self) {
        self.caret.sel = None;
    }

    /// The selection as sorted body indices in the caret's group, regardless
    /// of drag direction. The selected content is `body[lo + 1..=hi]`.
    pub fn range(&self) -> Option<(usize, usize)> {
        let (anchor, focus) = self.caret.sel?;
        let a = self.doc.index_in_parent(anchor);
        let b = self.doc.index_in_parent(focus);
        Some((a.min(b), a.max(b)))
    }

    pub fn is_first(&self) -> bool {
        self.caret.pos == 0
    }

    pub fn is_last(&self) -> bool {
        self.caret.pos == self.doc.group(self.caret.target).body.len() - 1
    }

    /// Whether the caret's group holds nothing but its sentinel.
    pub fn is_empty(&self) -> bool {
        self.doc.group(self.caret.target).body.len() == 1
    }

    /// Whether the caret stands in the superscript of a script attachment.
    pub fn is_sup(&self) -> bool {
        match self.parent_atom() {
            Some((_, Atom::SupSub(s))) => s.sup == Some(self.caret.target),
            _ => false,
        }
    }

    /// Whether the caret stands in the subscript of a script attachment.
    pub fn is_sub(&self) -> bool {
        match self.parent_atom() {
            Some((_, Atom::SupSub(s))) => s.sub == Some(self.caret.target),
            _ => false,
        }
    }

    pub fn is_numer(&self) -> bool {
        match self.parent_atom() {
            Some((_, Atom::Frac(f))) => f.numer == self.caret.target,
            _ => false,
        }
    }

    pub fn is_denom(&self) -> bool {
        match self.parent_atom() {
            Some((_, Atom::Frac(f))) => f.denom == self.caret.target,
            _ => false,
        }
    }

    /// Whether the caret stands in a matrix cell. Shells use this to offer
    /// the grid builder.
    pub fn is_cell(&self) -> bool {
        matches!(self.parent_atom(), Some((_, Atom::Matrix(_))))
    }

    fn parent_atom(&self) -> Option<(AtomId, &Atom)> {
        let parent = self.doc.parent(self.caret.target)?;
        Some((parent, self.doc.get(parent)))
    }

    /// The caret's on-screen x coordinate: the right edge of `cur()`.
    pub fn caret_x(&self, renderer: &mut impl Renderer) -> f64 {
        renderer.rect(self.cur()).right
    }

    /// The caret's on-screen y coordinate: the bottom edge of `cur()`.
    pub fn caret_y(&self, renderer: &mut impl Renderer) -> f64 {
        renderer.rect(self.cur()).bottom
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
