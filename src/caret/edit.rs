//! Mutating caret operations, expressed through the splice primitives, and
//! the application of recorded transactions for undo/redo.

use tracing::debug;

use crate::error::ParseError;
use crate::node::{Atom, AtomId, Fragment};
use crate::record::{Edit, Transaction};
use crate::render::{Converter, Renderer};

use super::Editor;

impl Editor {
    /// Inserts fragments at the caret. With a selection present this is a
    /// selection replace. The caret ends after the inserted material.
    pub fn insert(&mut self, fragments: &[Fragment], renderer: &mut impl Renderer) {
        if let Some(range) = self.range() {
            self.replace_range(Some(fragments), range, renderer);
            return;
        }
        if fragments.is_empty() {
            return;
        }

        let target = self.caret.target;
        let pos = self.caret.pos;
        let atoms: Vec<AtomId> = fragments.iter().map(|f| self.doc.graft(f)).collect();
        self.doc.insert_at(target, pos, &atoms, renderer);
        let end = pos + atoms.len();
        self.record
            .push(Transaction::new(vec![Edit::Insert { group: target, pos, atoms }]));
        self.set(target, end);
    }

    /// Deletes the atom behind the caret and steps back. At the start of an
    /// empty script the attachment collapses back towards its nucleus
    /// instead; at any other group start this is a no-op.
    pub fn delete(&mut self, renderer: &mut impl Renderer) {
        if self.is_first() {
            self.merge_empty_script(renderer);
            return;
        }

        let target = self.caret.target;
        let pos = self.caret.pos;
        let atoms = self.doc.delete_at(target, pos - 1, 1, renderer);
        self.record
            .push(Transaction::new(vec![Edit::Delete { group: target, pos: pos - 1, atoms }]));
        self.set(target, pos - 1);
    }

    /// Deleting at the start of an empty script slot dissolves the slot:
    /// the attachment keeps its other script if one exists, otherwise it is
    /// replaced by its bare nucleus. One transaction either way.
    fn merge_empty_script(&mut self, renderer: &mut impl Renderer) {
        let in_sup = self.is_sup();
        let in_sub = self.is_sub();
        if !(in_sup || in_sub) || !self.is_empty() {
            return;
        }

        let supsub = self
            .doc
            .parent(self.caret.target)
            .expect("script group has no parent");
        let s = match self.doc.get(supsub) {
            Atom::SupSub(s) => s.clone(),
            _ => unreachable!("script group owned by a non-script atom"),
        };
        let group = self
            .doc
            .parent(supsub)
            .unwrap_or_else(|| panic!("script attachment {:?} has no parent", supsub));
        let index = self.doc.index_in_parent(supsub);

        let kept = if in_sup { s.sub } else { s.sup };
        let replacement = match kept {
            Some(kept) => {
                let body = Some(self.doc.extract_body(kept));
                let (sup, sub) = if in_sup { (None, body) } else { (body, None) };
                Fragment::SupSub { nuc: Box::new(self.doc.extract(s.nuc)), sup, sub }
            }
            None => self.doc.extract(s.nuc),
        };

        self.set(group, index);
        self.replace_range(Some(&[replacement]), (index - 1, index), renderer);
    }

    /// Deletes the selected range and optionally inserts replacement
    /// fragments, as a single transaction. Used for selection replace, cut
    /// and suggestion acceptance.
    pub fn replace_range(
        &mut self,
        fragments: Option<&[Fragment]>,
        range: (usize, usize),
        renderer: &mut impl Renderer,
    ) {
        let target = self.caret.target;
        let (lo, hi) = range;
        let mut edits = Vec::new();

        if hi > lo {
            let atoms = self.doc.delete_at(target, lo, hi - lo, renderer);
            edits.push(Edit::Delete { group: target, pos: lo, atoms });
        }

        match fragments {
            Some(fragments) if !fragments.is_empty() => {
                let atoms: Vec<AtomId> = fragments.iter().map(|f| self.doc.graft(f)).collect();
                self.doc.insert_at(target, lo, &atoms, renderer);
                let end = lo + atoms.len();
                edits.push(Edit::Insert { group: target, pos: lo, atoms });
                self.set(target, end);
            }
            _ => self.set(target, lo),
        }

        if !edits.is_empty() {
            self.record.push(Transaction::new(edits));
        }
        self.clear_sel();
    }

    /// Wraps the atom at the caret in a superscript, or adds the missing
    /// superscript slot to an existing attachment, and moves the caret into
    /// the fresh script. A no-op on the sentinel.
    pub fn add_sup(&mut self, renderer: &mut impl Renderer) {
        self.add_script(true, renderer);
    }

    /// The subscript counterpart of [`add_sup`](Editor::add_sup).
    pub fn add_sub(&mut self, renderer: &mut impl Renderer) {
        self.add_script(false, renderer);
    }

    fn add_script(&mut self, sup: bool, renderer: &mut impl Renderer) {
        let cur = self.cur();
        if matches!(self.doc.get(cur), Atom::First) {
            return;
        }
        let pos = self.caret.pos;

        let empty = Some(Vec::new());
        let fragment = match self.doc.get(cur) {
            // An attachment missing this script gains the slot instead of
            // being nested in a second attachment.
            Atom::SupSub(s) if sup && s.sup.is_none() => Fragment::SupSub {
                nuc: Box::new(self.doc.extract(s.nuc)),
                sup: empty,
                sub: s.sub.map(|g| self.doc.extract_body(g)),
            },
            Atom::SupSub(s) if !sup && s.sub.is_none() => Fragment::SupSub {
                nuc: Box::new(self.doc.extract(s.nuc)),
                sup: s.sup.map(|g| self.doc.extract_body(g)),
                sub: empty,
            },
            _ => Fragment::SupSub {
                nuc: Box::new(self.doc.extract(cur)),
                sup: if sup { empty } else { None },
                sub: if sup { None } else { Some(Vec::new()) },
            },
        };

        self.replace_range(Some(&[fragment]), (pos - 1, pos), renderer);

        // The caret now stands just past the attachment; step into the slot.
        let attachment = self.cur();
        let slot = match self.doc.get(attachment) {
            Atom::SupSub(s) => {
                let slot = if sup { s.sup } else { s.sub };
                slot.expect("fresh script attachment is missing its new slot")
            }
            _ => unreachable!("replacement atom is not a script attachment"),
        };
        self.set(slot, 0);
    }

    /// Wraps the selection (or an empty placeholder) in a delimiter pair.
    /// With no selection the caret moves inside the empty body.
    pub fn add_par(&mut self, left: char, right: char, renderer: &mut impl Renderer) {
        if let Some((lo, hi)) = self.range() {
            let body: Vec<Fragment> = self.doc.group(self.caret.target).body[lo + 1..=hi]
                .iter()
                .map(|&atom| self.doc.extract(atom))
                .collect();
            self.replace_range(Some(&[Fragment::Delim { left, right, body }]), (lo, hi), renderer);
        } else {
            self.insert(&[Fragment::Delim { left, right, body: Vec::new() }], renderer);
            self.move_left();
        }
    }

    /// Serializes the selected range through the external converter, for
    /// the shell to place on the clipboard. `None` without a selection.
    pub fn copy(&self, converter: &impl Converter) -> Option<String> {
        let (lo, hi) = self.range()?;
        let body = &self.doc.group(self.caret.target).body;
        Some(converter.serialize(&self.doc, &body[lo + 1..=hi]))
    }

    /// [`copy`](Editor::copy), then deletes the selection.
    pub fn cut(&mut self, converter: &impl Converter, renderer: &mut impl Renderer) -> Option<String> {
        let range = self.range()?;
        let text = self.copy(converter);
        self.replace_range(None, range, renderer);
        text
    }

    /// Parses clipboard text through the external converter and inserts the
    /// result. A parse failure abandons the paste with the document
    /// unchanged.
    pub fn paste(
        &mut self,
        text: &str,
        converter: &impl Converter,
        renderer: &mut impl Renderer,
    ) -> Result<(), ParseError> {
        match converter.parse(text) {
            Ok(fragments) => {
                self.insert(&fragments, renderer);
                Ok(())
            }
            Err(err) => {
                debug!(%err, "paste abandoned");
                Err(err)
            }
        }
    }

    /// Unwinds the most recent transaction. A no-op at the log boundary.
    /// Restoring deleted content of more than one atom also restores the
    /// selection over it.
    pub fn undo(&mut self, renderer: &mut impl Renderer) {
        let Some(transaction) = self.record.step_back() else { return };
        let transaction = transaction.clone();
        debug!(edits = transaction.edits.len(), "undo");

        for edit in transaction.edits.iter().rev() {
            match edit {
                Edit::Insert { group, pos, atoms } => {
                    let removed = self.doc.delete_at(*group, *pos, atoms.len(), renderer);
                    debug_assert_eq!(&removed, atoms);
                    self.clear_sel();
                    self.set(*group, *pos);
                }
                Edit::Delete { group, pos, atoms } => {
                    self.doc.insert_at(*group, *pos, atoms, renderer);
                    self.set(*group, pos + atoms.len());
                    if atoms.len() > 1 {
                        let body = &self.doc.group(*group).body;
                        let sel = (body[*pos], body[pos + atoms.len()]);
                        self.set_sel(Some(sel));
                    } else {
                        self.clear_sel();
                    }
                }
            }
        }
    }

    /// Re-applies the most recently undone transaction. A no-op at the log
    /// boundary.
    pub fn redo(&mut self, renderer: &mut impl Renderer) {
        let Some(transaction) = self.record.step_forward() else { return };
        let transaction = transaction.clone();
        debug!(edits = transaction.edits.len(), "redo");

        for edit in &transaction.edits {
            match edit {
                Edit::Insert { group, pos, atoms } => {
                    self.doc.insert_at(*group, *pos, atoms, renderer);
                    self.clear_sel();
                    self.set(*group, pos + atoms.len());
                }
                Edit::Delete { group, pos, atoms } => {
                    let removed = self.doc.delete_at(*group, *pos, atoms.len(), renderer);
                    debug_assert_eq!(&removed, atoms);
                    self.clear_sel();
                    self.set(*group, *pos);
                }
            }
        }
    }
}
