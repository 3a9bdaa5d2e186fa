//! The linear history of reversible splice edits.
//!
//! Every mutating caret operation commits one [`Transaction`] - a list of
//! primitive edits that undo and redo as a unit. Compound operations
//! (replacing a selection, wrapping an atom in scripts) put all of their
//! splices in a single transaction rather than linking adjacent entries with
//! continuation flags.
//!
//! The log itself only stores and sequences transactions;
//! [`Editor::undo`](crate::Editor::undo) and
//! [`Editor::redo`](crate::Editor::redo) apply them to the tree.

use tracing::debug;

use crate::node::AtomId;

/// One reversible splice, in the same position convention as the primitives:
/// `pos` is the content position the splice happened after, so an insert is
/// undone by deleting `atoms.len()` atoms at `pos` and a delete is undone by
/// re-inserting the stored atoms at `pos`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Edit {
    Insert {
        group: AtomId,
        pos: usize,
        atoms: Vec<AtomId>,
    },
    Delete {
        group: AtomId,
        pos: usize,
        atoms: Vec<AtomId>,
    },
}

/// A group of edits applied - and therefore unwound - as one unit.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Transaction {
    pub edits: Vec<Edit>,
}

impl Transaction {
    pub fn new(edits: Vec<Edit>) -> Transaction {
        Transaction { edits }
    }
}

/// The undo/redo log: applied transactions to the left of the cursor, undone
/// ones to the right. Pushing while undone transactions remain discards
/// them.
#[derive(Debug, Clone, Default)]
pub struct Record {
    transactions: Vec<Transaction>,
    applied: usize,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.transactions.len()
    }

    /// Appends a freshly applied transaction, truncating any redo tail.
    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.truncate(self.applied);
        debug!(edits = transaction.edits.len(), index = self.applied, "recorded transaction");
        self.transactions.push(transaction);
        self.applied += 1;
    }

    /// Steps the cursor back over the most recent applied transaction and
    /// returns it, or `None` at the boundary.
    pub fn step_back(&mut self) -> Option<&Transaction> {
        if self.applied == 0 {
            return None;
        }
        self.applied -= 1;
        Some(&self.transactions[self.applied])
    }

    /// Steps the cursor forward over the next undone transaction and returns
    /// it, or `None` at the boundary.
    pub fn step_forward(&mut self) -> Option<&Transaction> {
        if self.applied == self.transactions.len() {
            return None;
        }
        self.applied += 1;
        Some(&self.transactions[self.applied - 1])
    }
}
