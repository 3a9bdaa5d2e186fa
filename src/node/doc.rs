//! The arena that owns a document's atoms.

use super::{Atom, AtomId, Block, Delim, Frac, Fragment, Group, Matrix, SupSub, Sym};

#[derive(Debug, Clone)]
struct Slot {
    atom: Atom,
    parent: Option<AtomId>,
}

/// A document: an arena of atoms plus the root group.
///
/// Slots are append-only for the lifetime of a session. Splicing an atom out
/// of its group detaches it (its parent handle is cleared) but leaves the
/// slot resident, so the record log can re-attach the same subtree on undo.
/// Wholesale replacement through [`Editor::set_content`](crate::Editor)
/// starts a fresh arena.
#[derive(Debug, Clone)]
pub struct Doc {
    slots: Vec<Slot>,
    root: AtomId,
    labels: u32,
}

impl Doc {
    pub fn new() -> Self {
        let mut doc = Doc { slots: Vec::new(), root: AtomId(0), labels: 0 };
        doc.root = doc.empty_group(None);
        doc
    }

    /// The root group. It has no parent; exit navigation stops here.
    pub fn root(&self) -> AtomId {
        self.root
    }

    pub fn get(&self, id: AtomId) -> &Atom {
        &self.slots[id.0 as usize].atom
    }

    pub(crate) fn get_mut(&mut self, id: AtomId) -> &mut Atom {
        &mut self.slots[id.0 as usize].atom
    }

    /// The structural owner of `id`, or `None` for the root group and for
    /// detached atoms. Never used for destruction, only for walking upward.
    pub fn parent(&self, id: AtomId) -> Option<AtomId> {
        self.slots[id.0 as usize].parent
    }

    pub(crate) fn set_parent(&mut self, id: AtomId, parent: Option<AtomId>) {
        self.slots[id.0 as usize].parent = parent;
    }

    /// Resolves `id` to its group, panicking if it is any other kind of
    /// atom. Misaddressed groups are tree-invariant breaches, not
    /// recoverable errors.
    pub fn group(&self, id: AtomId) -> &Group {
        match self.get(id) {
            Atom::Group(group) => group,
            _ => panic!("atom {:?} is not a group", id),
        }
    }

    pub(crate) fn group_mut(&mut self, id: AtomId) -> &mut Group {
        match self.get_mut(id) {
            Atom::Group(group) => group,
            _ => panic!("atom {:?} is not a group", id),
        }
    }

    pub(crate) fn matrix(&self, id: AtomId) -> &Matrix {
        match self.get(id) {
            Atom::Matrix(matrix) => matrix,
            _ => panic!("atom {:?} is not a matrix", id),
        }
    }

    pub(crate) fn matrix_mut(&mut self, id: AtomId) -> &mut Matrix {
        match self.get_mut(id) {
            Atom::Matrix(matrix) => matrix,
            _ => panic!("atom {:?} is not a matrix", id),
        }
    }

    pub(crate) fn alloc(&mut self, atom: Atom, parent: Option<AtomId>) -> AtomId {
        let id = AtomId(self.slots.len() as u32);
        self.slots.push(Slot { atom, parent });
        id
    }

    /// Allocates a group containing only its sentinel.
    pub(crate) fn empty_group(&mut self, parent: Option<AtomId>) -> AtomId {
        let id = self.alloc(Atom::Group(Group::default()), parent);
        let first = self.alloc(Atom::First, Some(id));
        self.group_mut(id).body.push(first);
        id
    }

    /// The body index of `id` within its parent group. Panics if `id` is
    /// detached, or if its parent is not a group (matrix cells and composite
    /// sub-groups are located through their owners instead).
    pub fn index_in_parent(&self, id: AtomId) -> usize {
        let parent = self
            .parent(id)
            .unwrap_or_else(|| panic!("atom {:?} has no parent", id));
        self.group(parent)
            .body
            .iter()
            .position(|&child| child == id)
            .unwrap_or_else(|| panic!("atom {:?} is not in its parent's body", id))
    }

    /// The nearest enclosing block ancestor of `id`, falling back to the
    /// root group. This is the subtree handed to the rendering collaborator
    /// after a mutation.
    pub fn enclosing_block(&self, id: AtomId) -> AtomId {
        let mut cur = id;
        loop {
            if let Atom::Block(_) = self.get(cur) {
                return cur;
            }
            match self.parent(cur) {
                Some(parent) => cur = parent,
                None => return cur,
            }
        }
    }

    /// `id` and every atom beneath it, in traversal order.
    pub fn descendants(&self, id: AtomId) -> Vec<AtomId> {
        let mut out = Vec::new();
        self.walk(id, &mut out);
        out
    }

    fn walk(&self, id: AtomId, out: &mut Vec<AtomId>) {
        out.push(id);
        match self.get(id) {
            Atom::First | Atom::Sym(_) => {}
            Atom::Group(Group { body }) => {
                for &child in body {
                    self.walk(child, out);
                }
            }
            Atom::Frac(Frac { numer, denom }) => {
                self.walk(*numer, out);
                self.walk(*denom, out);
            }
            Atom::SupSub(SupSub { nuc, sup, sub }) => {
                self.walk(*nuc, out);
                if let Some(sup) = sup {
                    self.walk(*sup, out);
                }
                if let Some(sub) = sub {
                    self.walk(*sub, out);
                }
            }
            Atom::Delim(Delim { body, .. }) => self.walk(*body, out),
            Atom::Matrix(Matrix { rows, .. }) => {
                for row in rows {
                    for &cell in row {
                        self.walk(cell, out);
                    }
                }
            }
            Atom::Block(Block { body, .. }) => self.walk(*body, out),
        }
    }

    /// Builds fresh atoms from a fragment. The returned atom is detached;
    /// splicing it into a group sets its parent.
    pub fn graft(&mut self, fragment: &Fragment) -> AtomId {
        match fragment {
            Fragment::Sym(ch) => self.alloc(Atom::Sym(Sym { ch: *ch }), None),

            Fragment::Frac { numer, denom } => {
                let numer = self.graft_group(numer);
                let denom = self.graft_group(denom);
                let id = self.alloc(Atom::Frac(Frac { numer, denom }), None);
                self.set_parent(numer, Some(id));
                self.set_parent(denom, Some(id));
                id
            }

            Fragment::SupSub { nuc, sup, sub } => {
                if sup.is_none() && sub.is_none() {
                    panic!("script attachment needs a superscript or a subscript");
                }
                let nuc = self.graft(nuc);
                let sup = sup.as_ref().map(|body| self.graft_group(body));
                let sub = sub.as_ref().map(|body| self.graft_group(body));
                let id = self.alloc(Atom::SupSub(SupSub { nuc, sup, sub }), None);
                self.set_parent(nuc, Some(id));
                if let Some(sup) = sup {
                    self.set_parent(sup, Some(id));
                }
                if let Some(sub) = sub {
                    self.set_parent(sub, Some(id));
                }
                id
            }

            Fragment::Delim { left, right, body } => {
                let body = self.graft_group(body);
                let id = self.alloc(Atom::Delim(Delim { left: *left, right: *right, body }), None);
                self.set_parent(body, Some(id));
                id
            }

            Fragment::Matrix { rows, labels } => {
                // Ragged input is padded out to the widest row.
                let cols = rows.iter().map(|row| row.len()).max().unwrap_or(0).max(1);
                let mut grafted = Vec::with_capacity(rows.len());
                for row in rows {
                    let mut cells = Vec::with_capacity(cols);
                    for cell in row {
                        cells.push(self.graft_group(cell));
                    }
                    while cells.len() < cols {
                        cells.push(self.empty_group(None));
                    }
                    grafted.push(cells);
                }
                let id = self.alloc(
                    Atom::Matrix(Matrix { rows: grafted.clone(), labels: labels.clone() }),
                    None,
                );
                for row in &grafted {
                    for &cell in row {
                        self.set_parent(cell, Some(id));
                    }
                }
                id
            }

            Fragment::Block { kind, label, body } => {
                let body = self.graft_group(body);
                let id = self.alloc(
                    Atom::Block(Block { kind: *kind, label: label.clone(), body }),
                    None,
                );
                self.set_parent(body, Some(id));
                id
            }
        }
    }

    fn graft_group(&mut self, fragments: &[Fragment]) -> AtomId {
        let id = self.empty_group(None);
        for fragment in fragments {
            let child = self.graft(fragment);
            self.set_parent(child, Some(id));
            self.group_mut(id).body.push(child);
        }
        id
    }

    /// Deep-copies the subtree at `id` out of the arena. The inverse of
    /// [`graft`](Doc::graft) for everything except sentinels and bare
    /// groups, which only exist as slots of their owners.
    pub fn extract(&self, id: AtomId) -> Fragment {
        match self.get(id) {
            Atom::First => panic!("the start sentinel cannot be extracted"),
            Atom::Group(_) => panic!("groups are extracted through extract_body"),
            Atom::Sym(Sym { ch }) => Fragment::Sym(*ch),
            Atom::Frac(Frac { numer, denom }) => Fragment::Frac {
                numer: self.extract_body(*numer),
                denom: self.extract_body(*denom),
            },
            Atom::SupSub(SupSub { nuc, sup, sub }) => Fragment::SupSub {
                nuc: Box::new(self.extract(*nuc)),
                sup: sup.map(|group| self.extract_body(group)),
                sub: sub.map(|group| self.extract_body(group)),
            },
            Atom::Delim(Delim { left, right, body }) => Fragment::Delim {
                left: *left,
                right: *right,
                body: self.extract_body(*body),
            },
            Atom::Matrix(Matrix { rows, labels }) => Fragment::Matrix {
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|&cell| self.extract_body(cell)).collect())
                    .collect(),
                labels: labels.clone(),
            },
            Atom::Block(Block { kind, label, body }) => Fragment::Block {
                kind: *kind,
                label: label.clone(),
                body: self.extract_body(*body),
            },
        }
    }

    /// Deep-copies a group's content (everything after the sentinel).
    pub fn extract_body(&self, group: AtomId) -> Vec<Fragment> {
        self.group(group).body[1..]
            .iter()
            .map(|&child| self.extract(child))
            .collect()
    }

    /// A label no other row in this document carries.
    pub fn fresh_label(&mut self) -> String {
        self.labels += 1;
        format!("r{}", self.labels)
    }
}

impl Default for Doc {
    fn default() -> Self {
        Self::new()
    }
}
